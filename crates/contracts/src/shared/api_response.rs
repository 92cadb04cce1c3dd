use serde::{Deserialize, Serialize};

/// Response envelope of the back-office API: `{ "data": ..., "message": ... }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub message: Option<String>,
}

/// Error body returned with non-2xx statuses
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
}

impl ApiErrorBody {
    /// Human readable message for a failed request, preferring the server's own text
    pub fn message_or(&self, fallback: &str) -> String {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::DeserializeOwned;

    // Payload type without a Default impl
    #[derive(Debug, PartialEq, Deserialize)]
    struct Entry {
        slug: String,
    }

    fn parse<T: DeserializeOwned>(json: &str) -> ApiResponse<T> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_envelope_parses_any_deserializable_payload() {
        let parsed = parse::<Entry>(r#"{"data":{"slug":"demo"},"message":"ok"}"#);
        assert_eq!(parsed.data, Some(Entry { slug: "demo".into() }));
        assert_eq!(parsed.message.as_deref(), Some("ok"));

        let empty = parse::<Vec<Entry>>(r#"{"message":"nothing"}"#);
        assert!(empty.data.is_none());
    }

    #[test]
    fn test_envelope_without_data() {
        let parsed: ApiResponse<Vec<String>> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(parsed.data.is_none());
        assert!(parsed.message.is_none());
    }

    #[test]
    fn test_error_message_fallback() {
        let body: ApiErrorBody = serde_json::from_str(r#"{"message":"Slug already exists"}"#).unwrap();
        assert_eq!(body.message_or("Failed"), "Slug already exists");
        assert_eq!(ApiErrorBody::default().message_or("Failed"), "Failed");
        let blank = ApiErrorBody {
            message: Some("  ".into()),
        };
        assert_eq!(blank.message_or("Failed"), "Failed");
    }
}
