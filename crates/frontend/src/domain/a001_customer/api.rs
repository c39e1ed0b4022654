use contracts::domain::a001_customer::{CustomerSuggestion, SearchRequest};

use crate::shared::api_utils::post_json;

/// Customer folders matching `query`. Failures are logged and yield no suggestions.
pub async fn search_customers(query: &str) -> Vec<CustomerSuggestion> {
    let body = SearchRequest {
        customer_name: query.to_string(),
    };
    match post_json::<_, Vec<CustomerSuggestion>>("/search", &body).await {
        Ok(found) => {
            log::debug!("search '{}': {} suggestion(s)", query, found.len());
            found
        }
        Err(e) => {
            log::error!("Customer search failed: {}", e);
            Vec::new()
        }
    }
}
