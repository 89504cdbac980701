//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::entities::{Dish, Order};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerSettings,

    /// Records the repositories start with
    #[serde(default)]
    pub seed: SeedData,
}

/// Listening address
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

/// Initial repository contents, inserted in declared order with their ids
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub dishes: Vec<Dish>,

    #[serde(default)]
    pub orders: Vec<Order>,
}

impl AppConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| ConfigError::ParseError {
                file: Some(path.display().to_string()),
                message: e.to_string(),
            })?;
        config.validate()?;

        tracing::debug!(
            file = %path.display(),
            dishes = config.seed.dishes.len(),
            orders = config.seed.orders.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Local address on port 5000 with empty repositories
    pub fn default_config() -> Self {
        Self {
            server: ServerSettings::default(),
            seed: SeedData::default(),
        }
    }

    /// `host:port`, ready for `TcpListener::bind`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Check the listening port and hold seed records to the same rules
    /// as records created through the API
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(invalid("server.port", "0", "port must be non-zero"));
        }
        self.seed.validate()
    }
}

impl SeedData {
    pub fn validate(&self) -> Result<(), ConfigError> {
        unique_ids("seed.dishes", self.dishes.iter().map(|d| d.id.as_str()))?;
        unique_ids("seed.orders", self.orders.iter().map(|o| o.id.as_str()))?;

        for (i, dish) in self.dishes.iter().enumerate() {
            let field = |name: &str| format!("seed.dishes[{}].{}", i, name);
            for (name, value) in [
                ("name", &dish.name),
                ("description", &dish.description),
                ("image_url", &dish.image_url),
            ] {
                if value.is_empty() {
                    return Err(invalid(field(name), "", "must not be empty"));
                }
            }
            if dish.price.is_nan() || dish.price <= 0.0 {
                return Err(invalid(
                    field("price"),
                    dish.price.to_string(),
                    "must be greater than 0",
                ));
            }
        }

        for (i, order) in self.orders.iter().enumerate() {
            let field = |name: &str| format!("seed.orders[{}].{}", i, name);
            if order.deliver_to.is_empty() {
                return Err(invalid(field("deliverTo"), "", "must not be empty"));
            }
            if order.mobile_number.is_empty() {
                return Err(invalid(field("mobileNumber"), "", "must not be empty"));
            }
            if order.dishes.is_empty() {
                return Err(invalid(field("dishes"), "[]", "must not be empty"));
            }
            if let Some(j) = order.dishes.iter().position(|line| line.quantity == 0) {
                return Err(invalid(
                    field(&format!("dishes[{}].quantity", j)),
                    "0",
                    "must be an integer greater than 0",
                ));
            }
        }

        Ok(())
    }
}

fn invalid(
    field: impl Into<String>,
    value: impl Into<String>,
    message: impl Into<String>,
) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.into(),
        value: value.into(),
        message: message.into(),
    }
}

fn unique_ids<'a>(field: &str, ids: impl Iterator<Item = &'a str>) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for (i, id) in ids.enumerate() {
        if !seen.insert(id) {
            return Err(invalid(format!("{}[{}].id", field, i), id, "duplicate id"));
        }
    }
    Ok(())
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
