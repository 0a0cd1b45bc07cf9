//! Job definition domain model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A named, reusable job configuration within a project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDefinition {
    pub id: u64,
    pub name: String,

    /// Remaining fields returned by the API, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JobDefinition {
    /// Returns true when this definition's name is exactly `name`
    pub fn is_named(&self, name: &str) -> bool {
        self.name == name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_named_is_exact() {
        let def: JobDefinition =
            serde_json::from_str(r#"{"id": 7, "name": "Nightly run"}"#).unwrap();

        assert!(def.is_named("Nightly run"));
        assert!(!def.is_named("nightly run"));
        assert!(!def.is_named("Nightly"));
    }
}
