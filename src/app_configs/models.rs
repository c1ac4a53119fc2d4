use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

/// One row of the application registry.
#[derive(Debug, Deserialize, Validate, Clone, PartialEq, Eq)]
pub struct AppRegistryEntry {
    #[validate(length(min = 1))]
    pub id: String,

    #[validate(length(min = 1))]
    pub name: String,

    // Relative to the configured base directory
    #[validate(length(min = 1))]
    pub config_path: String,
}

impl AppRegistryEntry {
    pub fn new(id: &str, name: &str, config_path: &str) -> Self {
        Self {
            id: String::from(id),
            name: String::from(name),
            config_path: String::from(config_path),
        }
    }
}

/// Identity block injected into every served document as `app`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    pub id: String,
    pub name: String,
}

impl From<&AppRegistryEntry> for AppIdentity {
    fn from(value: &AppRegistryEntry) -> Self {
        Self {
            id: value.id.clone(),
            name: value.name.clone(),
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct AppConfigQuery {
    pub app_id: String,
    // Accepted for client compatibility, never used for resolution
    pub app_version: String,
}

impl AppConfigQuery {
    /// Picks the known parameters out of decoded query pairs.
    /// A repeated key keeps its last value; unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "app_id" => query.app_id = value,
                "app_version" => query.app_version = value,
                _ => {}
            }
        }
        query
    }
}

/// A configuration file's top-level JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDocument(Map<String, Value>);

impl ConfigDocument {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Sets the `app` field. An existing `app` key keeps its position.
    pub fn with_identity(mut self, identity: &AppIdentity) -> Self {
        self.0.insert(
            String::from("app"),
            serde_json::json!({"id": identity.id, "name": identity.name}),
        );
        self
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}
