//! Shared REST test suite for store backends
//!
//! The `rest_api_tests!` macro generates HTTP-level tests that drive a store
//! through the full router:
//! JSON → HTTP request → handler → store → HTTP response → JSON.
//!
//! `$store_factory` must produce a value implementing both
//! `CompanyService` and `InvoiceService`, backed by EMPTY tables.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod api_harness;
//!
//! rest_api_tests!(InMemoryStore::new());
//! ```

#![allow(dead_code)]

use axum_test::TestServer;
use biztime::server::ServerBuilder;
use biztime::core::{CompanyService, InvoiceService};
use serde_json::{Value, json};

/// Wrap a store in a test server
pub fn test_server<S>(store: S) -> TestServer
where
    S: CompanyService + InvoiceService + 'static,
{
    let app = ServerBuilder::new()
        .with_store(store)
        .build()
        .expect("router should build");
    TestServer::new(app)
}

/// POST a company and return the response body
pub async fn post_company(
    server: &TestServer,
    code: &str,
    name: &str,
    description: &str,
) -> Value {
    let response = server
        .post("/companies")
        .json(&json!({ "code": code, "name": name, "description": description }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json()
}

/// POST an invoice and return its id
pub async fn post_invoice(server: &TestServer, comp_code: &str, amt: f64) -> i64 {
    let response = server
        .post("/invoices")
        .json(&json!({ "comp_code": comp_code, "amt": amt }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);
    let body: Value = response.json();
    body["invoice"]["id"].as_i64().expect("invoice id should be an integer")
}

/// Generate the REST test suite for a store backend.
///
/// # Generated Tests
///
/// ## Companies
/// - create → get round-trip with `invoices: []`
/// - list ordered by name
/// - detail lists invoice ids in insertion order
/// - update is idempotent; unknown code → 404
/// - delete twice → 200 then 404
/// - missing field → 400 and no row
///
/// ## Invoices
/// - create returns store defaults
/// - get embeds the current company row
/// - list ordered by comp_code
/// - update amt; unknown id → 404
/// - delete twice → 200 then 404
/// - unknown and non-numeric ids → 404
#[macro_export]
macro_rules! rest_api_tests {
    ($store_factory:expr) => {
        mod rest_api_tests {
            use super::*;
            use crate::api_harness::{post_company, post_invoice, test_server};
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use serde_json::{Value, json};

            async fn make_server() -> TestServer {
                test_server($store_factory)
            }

            // ==============================================================
            // Companies
            // ==============================================================

            #[tokio::test]
            async fn test_create_then_get_company() {
                let server = make_server().await;

                let created = post_company(&server, "ibm", "IBM", "Big blue.").await;
                assert_eq!(
                    created,
                    json!({
                        "company": { "code": "ibm", "name": "IBM", "description": "Big blue." }
                    })
                );

                let response = server.get("/companies/ibm").await;
                response.assert_status_ok();

                let body: Value = response.json();
                assert_eq!(
                    body,
                    json!({
                        "company": {
                            "code": "ibm",
                            "name": "IBM",
                            "description": "Big blue.",
                            "invoices": []
                        }
                    })
                );
            }

            #[tokio::test]
            async fn test_list_companies_ordered_by_name() {
                let server = make_server().await;
                post_company(&server, "zz", "Apple Computer", "Maker of OSX.").await;
                post_company(&server, "aa", "IBM", "Big blue.").await;

                let response = server.get("/companies").await;
                response.assert_status_ok();

                let body: Value = response.json();
                assert_eq!(
                    body,
                    json!({
                        "companies": [
                            { "code": "zz", "name": "Apple Computer" },
                            { "code": "aa", "name": "IBM" }
                        ]
                    })
                );
            }

            #[tokio::test]
            async fn test_list_companies_empty() {
                let server = make_server().await;

                let body: Value = server.get("/companies").await.json();
                assert_eq!(body, json!({ "companies": [] }));
            }

            #[tokio::test]
            async fn test_company_detail_lists_invoice_ids_in_order() {
                let server = make_server().await;
                post_company(&server, "apple", "Apple Computer", "Maker of OSX.").await;
                post_company(&server, "ibm", "IBM", "Big blue.").await;

                let first = post_invoice(&server, "apple", 100.0).await;
                let other = post_invoice(&server, "ibm", 400.0).await;
                let second = post_invoice(&server, "apple", 200.0).await;

                let body: Value = server.get("/companies/apple").await.json();
                assert_eq!(body["company"]["invoices"], json!([first, second]));

                let body: Value = server.get("/companies/ibm").await.json();
                assert_eq!(body["company"]["invoices"], json!([other]));
            }

            #[tokio::test]
            async fn test_get_unknown_company_is_not_found() {
                let server = make_server().await;

                let response = server.get("/companies/nope").await;
                response.assert_status_not_found();

                let body: Value = response.json();
                assert_eq!(body["error"]["message"], "No company with code: nope");
                assert_eq!(body["error"]["status"], 404);
            }

            #[tokio::test]
            async fn test_update_company_is_idempotent() {
                let server = make_server().await;
                post_company(&server, "ibm", "IBM", "Big blue.").await;

                let update = json!({
                    "name": "International Business Machines",
                    "description": "Bigger blue."
                });

                let first = server.put("/companies/ibm").json(&update).await;
                first.assert_status_ok();
                let second = server.put("/companies/ibm").json(&update).await;
                second.assert_status_ok();

                let expected = json!({
                    "company": {
                        "code": "ibm",
                        "name": "International Business Machines",
                        "description": "Bigger blue."
                    }
                });
                assert_eq!(first.json::<Value>(), expected);
                assert_eq!(second.json::<Value>(), expected);

                let body: Value = server.get("/companies/ibm").await.json();
                assert_eq!(body["company"]["name"], "International Business Machines");
                assert_eq!(body["company"]["description"], "Bigger blue.");
            }

            #[tokio::test]
            async fn test_update_unknown_company_is_not_found() {
                let server = make_server().await;

                let response = server
                    .put("/companies/nope")
                    .json(&json!({ "name": "Nope", "description": "Nothing." }))
                    .await;
                response.assert_status_not_found();
            }

            #[tokio::test]
            async fn test_update_unknown_company_with_taken_name_is_not_found() {
                let server = make_server().await;
                post_company(&server, "ibm", "IBM", "Big blue.").await;

                let response = server
                    .put("/companies/nope")
                    .json(&json!({ "name": "IBM", "description": "Taken name." }))
                    .await;
                response.assert_status_not_found();

                let body: Value = response.json();
                assert_eq!(body["error"]["message"], "No company with code: nope");
            }

            #[tokio::test]
            async fn test_delete_company_twice() {
                let server = make_server().await;
                post_company(&server, "ibm", "IBM", "Big blue.").await;

                let response = server.delete("/companies/ibm").await;
                response.assert_status_ok();
                assert_eq!(response.json::<Value>(), json!({ "status": "deleted" }));

                let response = server.delete("/companies/ibm").await;
                response.assert_status_not_found();

                server.get("/companies/ibm").await.assert_status_not_found();
            }

            #[tokio::test]
            async fn test_create_company_without_description_creates_nothing() {
                let server = make_server().await;

                let response = server
                    .post("/companies")
                    .json(&json!({ "code": "ibm", "name": "IBM" }))
                    .await;
                response.assert_status(StatusCode::BAD_REQUEST);

                let body: Value = response.json();
                assert_eq!(
                    body["error"]["message"],
                    "Body must include code, name, and description"
                );

                server.get("/companies/ibm").await.assert_status_not_found();
                let list: Value = server.get("/companies").await.json();
                assert_eq!(list, json!({ "companies": [] }));
            }

            // ==============================================================
            // Invoices
            // ==============================================================

            #[tokio::test]
            async fn test_create_invoice_takes_store_defaults() {
                let server = make_server().await;
                post_company(&server, "ibm", "IBM", "Big blue.").await;

                let response = server
                    .post("/invoices")
                    .json(&json!({ "comp_code": "ibm", "amt": 200 }))
                    .await;
                response.assert_status(StatusCode::CREATED);

                let body: Value = response.json();
                let invoice = &body["invoice"];
                assert!(invoice["id"].is_i64());
                assert_eq!(invoice["comp_code"], "ibm");
                assert_eq!(invoice["amt"].as_f64(), Some(200.0));
                assert_eq!(invoice["paid"], false);
                assert_eq!(
                    invoice["add_date"],
                    chrono::Utc::now().date_naive().to_string()
                );
                assert_eq!(invoice["paid_date"], Value::Null);
            }

            #[tokio::test]
            async fn test_get_invoice_embeds_current_company() {
                let server = make_server().await;
                post_company(&server, "ibm", "IBM", "Big blue.").await;
                let id = post_invoice(&server, "ibm", 400.0).await;

                server
                    .put("/companies/ibm")
                    .json(&json!({ "name": "IBM Corp", "description": "Still blue." }))
                    .await
                    .assert_status_ok();

                let response = server.get(&format!("/invoices/{}", id)).await;
                response.assert_status_ok();

                let body: Value = response.json();
                let invoice = &body["invoice"];
                assert_eq!(invoice["id"], id);
                assert_eq!(invoice["amt"].as_f64(), Some(400.0));
                assert_eq!(invoice["paid"], false);
                assert_eq!(invoice["paid_date"], Value::Null);
                assert!(invoice.get("comp_code").is_none());
                assert_eq!(
                    invoice["company"],
                    json!({ "code": "ibm", "name": "IBM Corp", "description": "Still blue." })
                );
            }

            #[tokio::test]
            async fn test_list_invoices_ordered_by_comp_code() {
                let server = make_server().await;
                post_company(&server, "zeta", "Zeta", "Last.").await;
                post_company(&server, "acme", "Acme", "First.").await;

                let z = post_invoice(&server, "zeta", 10.0).await;
                let a1 = post_invoice(&server, "acme", 20.0).await;
                let a2 = post_invoice(&server, "acme", 30.0).await;

                let body: Value = server.get("/invoices").await.json();
                assert_eq!(
                    body,
                    json!({
                        "invoices": [
                            { "id": a1, "comp_code": "acme" },
                            { "id": a2, "comp_code": "acme" },
                            { "id": z, "comp_code": "zeta" }
                        ]
                    })
                );
            }

            #[tokio::test]
            async fn test_update_invoice_amount() {
                let server = make_server().await;
                post_company(&server, "ibm", "IBM", "Big blue.").await;
                let id = post_invoice(&server, "ibm", 100.0).await;

                let response = server
                    .put(&format!("/invoices/{}", id))
                    .json(&json!({ "amt": 250.5 }))
                    .await;
                response.assert_status_ok();

                let body: Value = response.json();
                assert_eq!(body["invoice"]["id"], id);
                assert_eq!(body["invoice"]["comp_code"], "ibm");
                assert_eq!(body["invoice"]["amt"].as_f64(), Some(250.5));
                assert_eq!(body["invoice"]["paid"], false);
            }

            #[tokio::test]
            async fn test_numeric_string_amount_is_stored_as_number() {
                let server = make_server().await;
                post_company(&server, "ibm", "IBM", "Big blue.").await;

                let response = server
                    .post("/invoices")
                    .json(&json!({ "comp_code": "ibm", "amt": "200" }))
                    .await;
                response.assert_status(StatusCode::CREATED);

                let body: Value = response.json();
                assert_eq!(body["invoice"]["amt"].as_f64(), Some(200.0));
            }

            #[tokio::test]
            async fn test_update_unknown_invoice_is_not_found() {
                let server = make_server().await;

                let response = server
                    .put("/invoices/999")
                    .json(&json!({ "amt": 1 }))
                    .await;
                response.assert_status_not_found();

                let body: Value = response.json();
                assert_eq!(body["error"]["message"], "No invoice with id: 999");
            }

            #[tokio::test]
            async fn test_delete_invoice_twice() {
                let server = make_server().await;
                post_company(&server, "ibm", "IBM", "Big blue.").await;
                let id = post_invoice(&server, "ibm", 100.0).await;

                let response = server.delete(&format!("/invoices/{}", id)).await;
                response.assert_status_ok();
                assert_eq!(response.json::<Value>(), json!({ "status": "deleted" }));

                server
                    .delete(&format!("/invoices/{}", id))
                    .await
                    .assert_status_not_found();

                let body: Value = server.get("/companies/ibm").await.json();
                assert_eq!(body["company"]["invoices"], json!([]));
            }

            #[tokio::test]
            async fn test_unknown_invoice_ids_are_not_found() {
                let server = make_server().await;

                for path in ["/invoices/12345", "/invoices/abc", "/invoices/1.5"] {
                    let response = server.get(path).await;
                    response.assert_status_not_found();
                }

                server.delete("/invoices/abc").await.assert_status_not_found();
            }

            #[tokio::test]
            async fn test_deleting_company_removes_its_invoices() {
                let server = make_server().await;
                post_company(&server, "ibm", "IBM", "Big blue.").await;
                let id = post_invoice(&server, "ibm", 100.0).await;

                server.delete("/companies/ibm").await.assert_status_ok();

                server
                    .get(&format!("/invoices/{}", id))
                    .await
                    .assert_status_not_found();
            }

            #[tokio::test]
            async fn test_invoice_for_unknown_company_is_server_error() {
                let server = make_server().await;

                let response = server
                    .post("/invoices")
                    .json(&json!({ "comp_code": "ghost", "amt": 10 }))
                    .await;
                response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

                let list: Value = server.get("/invoices").await.json();
                assert_eq!(list, json!({ "invoices": [] }));
            }
        }
    };
}
