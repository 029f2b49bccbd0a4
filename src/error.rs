#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} responded with {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("Invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("More than one rule appends to {0} records")]
    DuplicateRule(&'static str),

    #[error("Rule for {kind} records declares {got} fields, expected {expected}")]
    FieldCount {
        kind: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_status_message_is_one_line() {
        let err = ScrapeError::Status {
            url: "https://stats.ncaa.org/teams/557367".to_string(),
            status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        };
        assert_eq!(
            err.to_string(),
            "https://stats.ncaa.org/teams/557367 responded with 503 Service Unavailable"
        );
    }
}
