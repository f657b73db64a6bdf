/// Failure to obtain data from an upstream source
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to decode response from {url}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Add context to environment configuration errors
pub fn env_context(variable: &str) -> String {
    format!("Invalid value for environment variable {}", variable)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message_names_url_and_status() {
        let error = FetchError::Status {
            url: "https://api.chess.com/pub/player/kevin_on/stats".to_string(),
            status: 404,
        };

        assert_eq!(
            error.to_string(),
            "https://api.chess.com/pub/player/kevin_on/stats returned status 404"
        );
    }
}
