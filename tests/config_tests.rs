//! Configuration file loading tests

use grubdash::prelude::*;
use serde_json::Value;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(yaml.as_bytes()).expect("Failed to write config");
    file
}

#[test]
fn test_load_from_file() {
    let file = write_config(
        r#"
server:
  host: 0.0.0.0
  port: 5050
"#,
    );

    let config = AppConfig::from_yaml_file(file.path()).unwrap();
    assert_eq!(config.bind_address(), "0.0.0.0:5050");
}

#[test]
fn test_parse_error_names_the_file() {
    let file = write_config("server: [not, a, map");

    let err = AppConfig::from_yaml_file(file.path()).unwrap_err();
    match err {
        ConfigError::ParseError { file: Some(name), .. } => {
            assert_eq!(name, file.path().display().to_string());
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_zero_port_in_file() {
    let file = write_config("server:\n  port: 0\n");

    let err = AppConfig::from_yaml_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("server.port"));
}

#[tokio::test]
async fn test_seeded_file_serves_records() {
    let file = write_config(
        r#"
server:
  port: 5000
seed:
  orders:
    - id: "9"
      deliverTo: 308 Negra Arroyo Lane
      mobileNumber: (505) 143-3369
      status: pending
      dishes:
        - name: Falafel and tahini bagel
          quantity: 1
    - id: "5"
      deliverTo: 1600 Pennsylvania Avenue NW
      mobileNumber: (202) 456-1111
      status: delivered
      dishes:
        - quantity: 2
"#,
    );

    let config = AppConfig::from_yaml_file(file.path()).unwrap();
    let app = ServerBuilder::new().with_config(config).build().unwrap();
    let server = axum_test::TestServer::new(app).unwrap();

    let body: Value = server.get("/orders").await.json();
    assert_eq!(body["data"][0]["id"], "9");
    assert_eq!(body["data"][0]["dishes"][0]["name"], "Falafel and tahini bagel");
    assert_eq!(body["data"][1]["status"], "delivered");

    server
        .delete("/orders/5")
        .await
        .assert_status_bad_request();
}

// =============================================================================
// Seed record rules
// =============================================================================

fn seed_error(seed: &str) -> ConfigError {
    let yaml = format!("server:\n  port: 5000\nseed:\n{}", seed);
    AppConfig::from_yaml_str(&yaml).unwrap_err()
}

fn invalid_field(err: ConfigError) -> String {
    match err {
        ConfigError::InvalidValue { field, .. } => field,
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_seed_order_with_empty_dishes_is_rejected() {
    let err = seed_error(
        r#"  orders:
    - id: "1"
      deliverTo: a
      mobileNumber: "1"
      dishes: []
"#,
    );
    assert_eq!(invalid_field(err), "seed.orders[0].dishes");
}

#[test]
fn test_seed_order_with_zero_quantity_is_rejected() {
    let err = seed_error(
        r#"  orders:
    - id: "1"
      deliverTo: a
      mobileNumber: "1"
      dishes:
        - quantity: 2
        - quantity: 0
"#,
    );
    assert_eq!(invalid_field(err), "seed.orders[0].dishes[1].quantity");
}

#[test]
fn test_seed_order_with_empty_text_is_rejected() {
    let err = seed_error(
        r#"  orders:
    - id: "1"
      deliverTo: ""
      mobileNumber: "1"
      dishes:
        - quantity: 1
"#,
    );
    assert_eq!(invalid_field(err), "seed.orders[0].deliverTo");

    let err = seed_error(
        r#"  orders:
    - id: "1"
      deliverTo: a
      mobileNumber: ""
      dishes:
        - quantity: 1
"#,
    );
    assert_eq!(invalid_field(err), "seed.orders[0].mobileNumber");
}

#[test]
fn test_seed_duplicate_order_id_is_rejected() {
    let err = seed_error(
        r#"  orders:
    - id: "1"
      deliverTo: first
      mobileNumber: "1"
      dishes:
        - quantity: 1
    - id: "1"
      deliverTo: dup
      mobileNumber: "2"
      dishes:
        - quantity: 3
"#,
    );
    match err {
        ConfigError::InvalidValue { field, value, .. } => {
            assert_eq!(field, "seed.orders[1].id");
            assert_eq!(value, "1");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_seed_duplicate_dish_id_is_rejected() {
    let err = seed_error(
        r#"  dishes:
    - id: d1
      name: Century Eggs
      description: Preserved eggs
      price: 17
      image_url: https://images.example.com/eggs.jpg
    - id: d1
      name: Falafel
      description: Falafel and tahini bagel
      price: 6
      image_url: https://images.example.com/bagel.jpg
"#,
    );
    assert_eq!(invalid_field(err), "seed.dishes[1].id");
}

#[test]
fn test_seed_dish_with_non_positive_price_is_rejected() {
    let err = seed_error(
        r#"  dishes:
    - id: d1
      name: Century Eggs
      description: Preserved eggs
      price: 0
      image_url: https://images.example.com/eggs.jpg
"#,
    );
    assert_eq!(invalid_field(err), "seed.dishes[0].price");
}

#[test]
fn test_invalid_seed_file_is_rejected_before_serving() {
    let file = write_config(
        r#"
server:
  port: 5000
seed:
  orders:
    - id: "1"
      deliverTo: dup
      mobileNumber: "1"
      dishes:
        - quantity: 0
"#,
    );

    let err = AppConfig::from_yaml_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("seed.orders[0].dishes[0].quantity"));
}
