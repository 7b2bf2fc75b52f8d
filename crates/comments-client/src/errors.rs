use reqwest::StatusCode;
use thiserror::Error;

/// Failures of the comment operations, tagged with the fixed description
/// callers display.
#[derive(Error, Debug)]
pub enum ApiError {
    /// returned if the comments of a thread could not be loaded
    #[error("Failed to load comments.")]
    LoadComments(#[source] RequestError),

    /// returned if a comment could not be created
    #[error("Failed to create comment.")]
    CreateComment(#[source] RequestError),

    /// returned if a comment could not be updated
    #[error("Failed to update comment.")]
    UpdateComment(#[source] RequestError),

    /// returned if a comment could not be deleted
    #[error("Failed to delete comment.")]
    DeleteComment(#[source] RequestError),
}

#[derive(Error, Debug)]
pub enum RequestError {
    /// returned if a request could not be completed or its body not decoded
    #[error("could not complete a request: {0}")]
    Request(#[from] reqwest::Error),

    /// returned if the server answered with a status we do not handle
    #[error("received an unexpected status from the server: {0}")]
    UnexpectedStatus(StatusCode),
}
