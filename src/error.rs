#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum GeneMcpError {
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    #[error("HTTP client initialization failed: {0}")]
    HttpClientInit(reqwest::Error),

    #[error("HTTP request failed: {0}")]
    Http(reqwest::Error),

    #[error("Entrez {endpoint} request timed out")]
    Timeout { endpoint: String },

    #[error("Entrez {endpoint} request failed: HTTP {status}: {body}")]
    Api {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("Entrez {endpoint} response was not valid JSON: {source}")]
    Protocol {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{db} record '{id}' not found")]
    NotFound { db: String, id: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::GeneMcpError;

    #[test]
    fn not_found_display_names_db_and_id() {
        let err = GeneMcpError::NotFound {
            db: "gene".to_string(),
            id: "672".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("gene record '672' not found"));
    }

    #[test]
    fn api_error_display_includes_status_and_body() {
        let err = GeneMcpError::Api {
            endpoint: "esummary".to_string(),
            status: 502,
            body: "upstream unavailable".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("esummary"));
        assert!(msg.contains("502"));
        assert!(msg.contains("upstream unavailable"));
    }

    #[test]
    fn invalid_argument_display_carries_message() {
        let err = GeneMcpError::InvalidArgument("query must not be blank".to_string());
        assert!(err.to_string().contains("query must not be blank"));
    }

    #[test]
    fn timeout_display_names_endpoint() {
        let err = GeneMcpError::Timeout {
            endpoint: "esearch".to_string(),
        };
        assert!(err.to_string().contains("esearch request timed out"));
    }
}
