use serde::Serialize;

/// Body for POST /api/chat.
#[derive(Debug, Serialize)]
pub struct SendMessageRequest {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_carries_exactly_one_field() {
        let body = serde_json::to_value(SendMessageRequest {
            message: "Hello".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Hello" }));
    }
}
