//! End-to-end tests for the order resource
//!
//! These tests drive the full HTTP stack: envelope parsing, the validation
//! chains, the status guards, and the repository behind them.

use axum_test::TestServer;
use grubdash::prelude::*;
use serde_json::{Value, json};
use std::sync::Arc;

// =============================================================================
// Fixtures
// =============================================================================

fn stored_order(id: &str, status: OrderStatus) -> Order {
    Order::from_fields(
        id.to_string(),
        OrderFields {
            deliver_to: "1600 Pennsylvania Avenue NW, Washington, DC 20500".to_string(),
            mobile_number: "(202) 456-1111".to_string(),
            status,
            dishes: vec![
                OrderLine::new(2)
                    .with_detail("id", "d351db2b49b69679bede5ba6c6bee4de")
                    .with_detail("name", "Century Eggs")
                    .with_detail("price", 17),
            ],
        },
    )
}

fn create_test_server(orders: Vec<Order>) -> (TestServer, Arc<InMemoryRepository<Order>>) {
    let repository = Arc::new(InMemoryRepository::with_records(
        orders,
        Arc::new(SequentialIdGenerator::starting_after(100)),
    ));

    let app = ServerBuilder::new()
        .with_order_repository(repository.clone())
        .build()
        .expect("Failed to build app");

    let server = TestServer::new(app).expect("Failed to create test server");
    (server, repository)
}

fn seeded() -> Vec<Order> {
    vec![
        stored_order("5", OrderStatus::Delivered),
        stored_order("7", OrderStatus::Preparing),
        stored_order("8", OrderStatus::OutForDelivery),
        stored_order("9", OrderStatus::Pending),
    ]
}

fn valid_update(status: &str) -> Value {
    json!({
        "data": {
            "deliverTo": "Rick Sanchez (C-132)",
            "mobileNumber": "(202) 456-1111",
            "status": status,
            "dishes": [{"id": "90c3d873684bf381dfab29034b5bba73", "quantity": 3}]
        }
    })
}

fn error_message(response: &axum_test::TestResponse) -> String {
    let body: Value = response.json();
    body["error"].as_str().unwrap_or_default().to_string()
}

// =============================================================================
// List / Read
// =============================================================================

mod read_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_orders_keeps_insertion_order() {
        let (server, _) = create_test_server(seeded());

        let response = server.get("/orders").await;
        response.assert_status_ok();

        let body: Value = response.json();
        let ids: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|o| o["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["5", "7", "8", "9"]);
    }

    #[tokio::test]
    async fn test_list_orders_empty() {
        let (server, _) = create_test_server(Vec::new());

        let body: Value = server.get("/orders").await.json();
        assert_eq!(body, json!({"data": []}));
    }

    #[tokio::test]
    async fn test_read_is_idempotent() {
        let (server, _) = create_test_server(seeded());

        let first = server.get("/orders/7").await.text();
        let second = server.get("/orders/7").await.text();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_read_keeps_line_details() {
        let (server, _) = create_test_server(seeded());

        let body: Value = server.get("/orders/7").await.json();
        assert_eq!(body["data"]["dishes"][0]["name"], "Century Eggs");
        assert_eq!(body["data"]["dishes"][0]["quantity"], 2);
        assert_eq!(body["data"]["status"], "preparing");
    }

    #[tokio::test]
    async fn test_read_missing_order_is_404() {
        let (server, _) = create_test_server(seeded());

        let response = server.get("/orders/999").await;
        response.assert_status_not_found();

        let body: Value = response.json();
        assert_eq!(body["code"], "ENTITY_NOT_FOUND");
        assert!(body["error"].as_str().unwrap().contains("999"));
        assert_eq!(body["error"], "order id not found: 999");
    }
}

// =============================================================================
// Create
// =============================================================================

mod create_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_order() {
        let (server, repository) = create_test_server(Vec::new());

        let response = server
            .post("/orders")
            .json(&json!({
                "data": {
                    "deliverTo": "120 Main",
                    "mobileNumber": "555-1234",
                    "dishes": [{"quantity": 2}]
                }
            }))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);

        let body: Value = response.json();
        assert_eq!(body["data"]["id"], "101");
        assert_eq!(body["data"]["deliverTo"], "120 Main");
        assert_eq!(body["data"]["mobileNumber"], "555-1234");
        assert_eq!(body["data"]["dishes"], json!([{"quantity": 2}]));
        assert_eq!(body["data"]["status"], "pending");

        assert_eq!(repository.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_create_with_explicit_status() {
        let (server, _) = create_test_server(Vec::new());

        let response = server
            .post("/orders")
            .json(&json!({
                "data": {
                    "deliverTo": "120 Main",
                    "mobileNumber": "555-1234",
                    "status": "preparing",
                    "dishes": [{"quantity": 1}]
                }
            }))
            .await;

        response.assert_status(axum::http::StatusCode::CREATED);
        let body: Value = response.json();
        assert_eq!(body["data"]["status"], "preparing");
    }

    #[tokio::test]
    async fn test_create_missing_fields_appends_nothing() {
        let (server, repository) = create_test_server(seeded());

        let cases = [
            (json!({"mobileNumber": "1", "dishes": [{"quantity": 1}]}), "Must include a deliverTo"),
            (
                json!({"deliverTo": "", "mobileNumber": "1", "dishes": [{"quantity": 1}]}),
                "Must include a deliverTo",
            ),
            (json!({"deliverTo": "a", "dishes": [{"quantity": 1}]}), "Must include a mobileNumber"),
            (json!({"deliverTo": "a", "mobileNumber": "1"}), "Must include a dishes"),
            (json!({}), "Must include a deliverTo"),
        ];

        for (data, message) in cases {
            let response = server.post("/orders").json(&json!({ "data": data })).await;
            response.assert_status_bad_request();
            assert_eq!(error_message(&response), message);
        }

        assert_eq!(repository.count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_create_without_envelope() {
        let (server, _) = create_test_server(Vec::new());

        let response = server
            .post("/orders")
            .json(&json!({"deliverTo": "a", "mobileNumber": "1", "dishes": [{"quantity": 1}]}))
            .await;
        response.assert_status_bad_request();
        assert_eq!(error_message(&response), "Must include a deliverTo");
    }

    #[tokio::test]
    async fn test_create_reports_first_bad_quantity() {
        let (server, repository) = create_test_server(Vec::new());

        let response = server
            .post("/orders")
            .json(&json!({
                "data": {
                    "deliverTo": "a",
                    "mobileNumber": "1",
                    "dishes": [{"quantity": 1}, {"quantity": 0}, {"quantity": 1.5}]
                }
            }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            error_message(&response),
            "dish 1 must have a quantity that is an integer greater than 0"
        );
        assert_eq!(repository.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_rejects_quantity_beyond_range() {
        let (server, repository) = create_test_server(Vec::new());

        let response = server
            .post("/orders")
            .json(&json!({
                "data": {"deliverTo": "a", "mobileNumber": "1", "dishes": [{"quantity": 1e20}]}
            }))
            .await;

        response.assert_status_bad_request();
        assert_eq!(
            error_message(&response),
            "dish 0 must have a quantity that is an integer greater than 0"
        );
        assert_eq!(repository.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_create_dishes_shape() {
        let (server, _) = create_test_server(Vec::new());

        for (dishes, message) in [
            (json!("two eggs"), "dishes must be of type array"),
            (json!([]), "dishes must not be empty"),
        ] {
            let response = server
                .post("/orders")
                .json(&json!({"data": {"deliverTo": "a", "mobileNumber": "1", "dishes": dishes}}))
                .await;
            response.assert_status_bad_request();
            assert_eq!(error_message(&response), message);
        }
    }

    #[tokio::test]
    async fn test_create_with_unknown_status() {
        let (server, _) = create_test_server(Vec::new());

        let response = server
            .post("/orders")
            .json(&json!({
                "data": {
                    "deliverTo": "a",
                    "mobileNumber": "1",
                    "status": "lost",
                    "dishes": [{"quantity": 1}]
                }
            }))
            .await;
        response.assert_status_bad_request();
        assert_eq!(
            error_message(&response),
            "Order must have a status of pending, preparing, out-for-delivery, delivered"
        );
    }
}

// =============================================================================
// Update
// =============================================================================

mod update_tests {
    use super::*;

    #[tokio::test]
    async fn test_update_replaces_every_field() {
        let (server, repository) = create_test_server(seeded());

        let response = server.put("/orders/7").json(&valid_update("out-for-delivery")).await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"]["id"], "7");
        assert_eq!(body["data"]["deliverTo"], "Rick Sanchez (C-132)");
        assert_eq!(body["data"]["status"], "out-for-delivery");
        assert_eq!(
            body["data"]["dishes"],
            json!([{"id": "90c3d873684bf381dfab29034b5bba73", "quantity": 3}])
        );

        let stored = repository.find_by_id("7").await.unwrap().unwrap();
        assert_eq!(stored.status, OrderStatus::OutForDelivery);
        assert_eq!(stored.dishes.len(), 1);
    }

    #[tokio::test]
    async fn test_update_with_matching_id() {
        let (server, _) = create_test_server(seeded());

        let mut payload = valid_update("preparing");
        payload["data"]["id"] = json!("7");
        server.put("/orders/7").json(&payload).await.assert_status_ok();
    }

    #[tokio::test]
    async fn test_update_id_mismatch_always_fails() {
        let (server, repository) = create_test_server(seeded());

        let mut payload = valid_update("preparing");
        payload["data"]["id"] = json!("8");

        let response = server.put("/orders/7").json(&payload).await;
        response.assert_status_bad_request();
        assert_eq!(error_message(&response), "Order id 8 does not match route id 7");

        let stored = repository.find_by_id("7").await.unwrap().unwrap();
        assert_eq!(stored.status, OrderStatus::Preparing);
    }

    #[tokio::test]
    async fn test_update_missing_order_is_404() {
        let (server, _) = create_test_server(seeded());

        let response = server.put("/orders/999").json(&valid_update("pending")).await;
        response.assert_status_not_found();
        assert_eq!(error_message(&response), "order id not found: 999");
    }

    #[tokio::test]
    async fn test_update_requires_status() {
        let (server, _) = create_test_server(seeded());

        let mut payload = valid_update("pending");
        payload["data"].as_object_mut().unwrap().remove("status");

        let response = server.put("/orders/7").json(&payload).await;
        response.assert_status_bad_request();
        assert_eq!(error_message(&response), "Must include a status");
    }

    #[tokio::test]
    async fn test_update_rejects_unknown_status() {
        let (server, _) = create_test_server(seeded());

        let response = server.put("/orders/7").json(&valid_update("invalid")).await;
        response.assert_status_bad_request();
        assert_eq!(
            error_message(&response),
            "Order must have a status of pending, preparing, out-for-delivery, delivered"
        );
    }

    #[tokio::test]
    async fn test_update_setting_delivered_is_refused() {
        let (server, repository) = create_test_server(seeded());

        let response = server.put("/orders/8").json(&valid_update("delivered")).await;
        response.assert_status_bad_request();
        assert_eq!(error_message(&response), "A delivered order cannot be changed");

        let stored = repository.find_by_id("8").await.unwrap().unwrap();
        assert_eq!(stored.status, OrderStatus::OutForDelivery);
    }

    // The terminal guard reads the submitted status, so a stored delivered
    // order can still be moved back by an update that names another status.
    #[tokio::test]
    async fn test_update_of_stored_delivered_order_follows_submitted_status() {
        let (server, repository) = create_test_server(seeded());

        let response = server.put("/orders/5").json(&valid_update("preparing")).await;
        response.assert_status_ok();

        let stored = repository.find_by_id("5").await.unwrap().unwrap();
        assert_eq!(stored.status, OrderStatus::Preparing);
    }
}

// =============================================================================
// Delete
// =============================================================================

mod delete_tests {
    use super::*;

    #[tokio::test]
    async fn test_delete_pending_order() {
        let (server, repository) = create_test_server(seeded());
        let before = repository.count().await.unwrap();

        let response = server.delete("/orders/9").await;
        response.assert_status(axum::http::StatusCode::NO_CONTENT);
        assert!(response.text().is_empty());

        assert_eq!(repository.count().await.unwrap(), before - 1);
        server.get("/orders/9").await.assert_status_not_found();
    }

    #[tokio::test]
    async fn test_delete_non_pending_leaves_repository_unchanged() {
        let (server, repository) = create_test_server(seeded());

        for id in ["5", "7", "8"] {
            let response = server.delete(&format!("/orders/{}", id)).await;
            response.assert_status_bad_request();
            assert_eq!(
                error_message(&response),
                "An order cannot be deleted unless it is pending"
            );
        }

        assert_eq!(repository.count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_delete_missing_order_is_404() {
        let (server, _) = create_test_server(seeded());

        let response = server.delete("/orders/999").await;
        response.assert_status_not_found();
        assert_eq!(error_message(&response), "order id not found: 999");
    }

    #[tokio::test]
    async fn test_lifecycle_create_then_delete() {
        let (server, repository) = create_test_server(Vec::new());

        let created: Value = server
            .post("/orders")
            .json(&json!({
                "data": {"deliverTo": "a", "mobileNumber": "1", "dishes": [{"quantity": 1}]}
            }))
            .await
            .json();
        let id = created["data"]["id"].as_str().unwrap().to_string();

        server
            .delete(&format!("/orders/{}", id))
            .await
            .assert_status(axum::http::StatusCode::NO_CONTENT);
        assert_eq!(repository.count().await.unwrap(), 0);
    }
}
