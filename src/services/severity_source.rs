use thiserror::Error;

use crate::domain::severity::SeverityTally;

#[derive(Error, Debug)]
pub enum SeveritySourceError {
    #[error("connection error")]
    Connection,
    #[error("unauthorized")]
    Unauthorized,
    #[error("unexpected status code {0}")]
    Status(u16),
    #[error("parse error")]
    Parse,
    #[error("missing api token (pass --token or set SNYK_TOKEN)")]
    MissingToken,
}

/// Describes an interface for retrieving per-project severity counts.
pub trait SeveritySource {
    fn severity_counts(&self, project_id: &str) -> Result<SeverityTally, SeveritySourceError>;
}
