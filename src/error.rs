use thiserror::Error;

/// glitch-sync 統一エラー型
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Input required and not supplied: {0}")]
    MissingInput(String),

    #[error(
        "Unable to detect `GITHUB_REPOSITORY` environment variable. Are you running this in a GitHub Action?"
    )]
    RepositoryNotDetected,

    #[error("{0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, SyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_message() {
        let err = SyncError::MissingInput("project-id".to_string());
        assert_eq!(
            err.to_string(),
            "Input required and not supplied: project-id"
        );
    }

    #[test]
    fn test_repository_not_detected_message() {
        assert_eq!(
            SyncError::RepositoryNotDetected.to_string(),
            "Unable to detect `GITHUB_REPOSITORY` environment variable. Are you running this in a GitHub Action?"
        );
    }

    #[test]
    fn test_invalid_url_message() {
        let err = SyncError::from(url::ParseError::EmptyHost);
        assert_eq!(err.to_string(), "Invalid API URL: empty host");
    }
}
