//! Project domain model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A project under a Sinter account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub name: String,

    /// Remaining fields returned by the API, kept verbatim
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
