//! Client for the comment threads of an app.
//!
//! Every operation issues a single request; failures surface immediately
//! with a fixed, user-displayable description. List calls are conditional:
//! the version of the previously seen thread state travels in
//! `If-None-Match`, and an unchanged thread comes back as an empty delta
//! carrying that same version.

#[cfg(test)]
use {serde_json as _, tokio as _, wiremock as _};

mod client;
mod errors;
mod types;

pub use client::CommentsClient;
pub use errors::{ApiError, RequestError};
pub use types::{CommentDto, CommentsDto, Version};
