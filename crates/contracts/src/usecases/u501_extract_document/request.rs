use serde::{Deserialize, Serialize};

/// Request body for `/process`: the customer folder to extract documents from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub folder_path: String,
}
