use serde::{Deserialize, Serialize};

/// Error body returned by the backend on non-2xx responses: `{"detail": "..."}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default)]
    pub detail: Option<String>,
}
