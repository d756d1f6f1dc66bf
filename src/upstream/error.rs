use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Failed to fetch {resource}: {status} {body}")]
    Status {
        resource: String,
        status: u16,
        body: String,
    },

    #[error("Invalid {resource} data format: {detail}")]
    Malformed { resource: String, detail: String },

    #[error("Stopped fetching {resource} after {max_pages} pages: cursor chain did not terminate")]
    PageLimitExceeded { resource: String, max_pages: usize },
}

impl UpstreamError {
    pub fn malformed(resource: &str, detail: impl Into<String>) -> Self {
        UpstreamError::Malformed {
            resource: resource.to_string(),
            detail: detail.into(),
        }
    }

    /// HTTP status reported by the upstream, if the failure was a status error
    pub fn status(&self) -> Option<u16> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
