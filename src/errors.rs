// errors.rs

/// Errors originating from either the server logic
/// (routing, missing resources, etc.) or downstream layers (DB).
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,
    #[error("Bad Request: {0}")]
    BadRequest(String),
    #[error("Database Error: {0}")]
    DbError(String),
    #[error("Configuration Error: {0}")]
    Config(String),
    #[error(transparent)]
    Map(#[from] MapError),
    #[error("Internal Server Error")]
    InternalError,
}

/// Failures the map renderer cannot degrade around.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MapError {
    /// The page has no element to bind the map view to.
    #[error("map container `{0}` not found")]
    ContainerMissing(String),
}
