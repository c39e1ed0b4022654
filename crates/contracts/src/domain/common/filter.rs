use serde::{Deserialize, Serialize};

/// Request body for `/filter-chassis` and `/filter-batteries`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterRequest {
    pub filter_text: String,
}

impl FilterRequest {
    pub fn new(text: &str) -> Self {
        Self {
            filter_text: text.trim().to_string(),
        }
    }
}
