use reqwest::{header, StatusCode, Url};
use serde::Serialize;
use tracing::debug;

use crate::{
    errors::{ApiError, RequestError},
    types::{CommentDto, CommentsDto, Version},
};

/// The client for the comment threads of one deployment.
///
/// Holds nothing but immutable configuration; one instance can be shared
/// freely and calls may run concurrently. Calls against the same thread
/// are not ordered with respect to each other.
#[derive(Clone, Debug)]
pub struct CommentsClient {
    api_url: Url,
    http_client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct UpsertComment<'a> {
    text: &'a str,
}

impl CommentsClient {
    pub fn new(api_url: Url) -> Self {
        Self::with_http_client(api_url, reqwest::Client::new())
    }

    pub fn with_http_client(api_url: Url, http_client: reqwest::Client) -> Self {
        Self { api_url, http_client }
    }

    /// The comments of a thread, as a delta against the given version.
    ///
    /// A thread unchanged since `version` comes back as an empty snapshot
    /// carrying that same version, not as an error.
    pub async fn comments(
        &self,
        app_name: &str,
        comments_id: &str,
        version: &Version,
    ) -> Result<CommentsDto, ApiError> {
        self.get_comments(app_name, comments_id, version)
            .await
            .map_err(ApiError::LoadComments)
    }

    pub async fn create_comment(
        &self,
        app_name: &str,
        comments_id: &str,
        text: &str,
    ) -> Result<CommentDto, ApiError> {
        self.post_comment(app_name, comments_id, text)
            .await
            .map_err(ApiError::CreateComment)
    }

    pub async fn update_comment(
        &self,
        app_name: &str,
        comments_id: &str,
        comment_id: &str,
        text: &str,
    ) -> Result<CommentDto, ApiError> {
        self.put_comment(app_name, comments_id, comment_id, text)
            .await
            .map_err(ApiError::UpdateComment)
    }

    pub async fn delete_comment(
        &self,
        app_name: &str,
        comments_id: &str,
        comment_id: &str,
    ) -> Result<(), ApiError> {
        self.send_delete(app_name, comments_id, comment_id)
            .await
            .map_err(ApiError::DeleteComment)
    }

    async fn get_comments(
        &self,
        app_name: &str,
        comments_id: &str,
        version: &Version,
    ) -> Result<CommentsDto, RequestError> {
        let url = self.endpoint(&format!("api/apps/{app_name}/comments/{comments_id}"));
        debug!(%url, "loading comments");

        let response = self
            .http_client
            .get(url)
            .header(header::IF_NONE_MATCH, version.as_str())
            .send()
            .await?;

        // The thread has not moved past the version we already hold.
        if response.status() == StatusCode::NOT_MODIFIED {
            return Ok(CommentsDto::unchanged(version.clone()));
        }

        Ok(success(response)?.json().await?)
    }

    async fn post_comment(
        &self,
        app_name: &str,
        comments_id: &str,
        text: &str,
    ) -> Result<CommentDto, RequestError> {
        let url = self.endpoint(&format!("api/apps/{app_name}/comments/{comments_id}"));
        debug!(%url, "creating comment");

        let response = self
            .http_client
            .post(url)
            .json(&UpsertComment { text })
            .send()
            .await?;

        Ok(success(response)?.json().await?)
    }

    async fn put_comment(
        &self,
        app_name: &str,
        comments_id: &str,
        comment_id: &str,
        text: &str,
    ) -> Result<CommentDto, RequestError> {
        let url = self.endpoint(&format!(
            "api/apps/{app_name}/comments/{comments_id}/{comment_id}"
        ));
        debug!(%url, "updating comment");

        let response = self
            .http_client
            .put(url)
            .json(&UpsertComment { text })
            .send()
            .await?;

        Ok(success(response)?.json().await?)
    }

    async fn send_delete(
        &self,
        app_name: &str,
        comments_id: &str,
        comment_id: &str,
    ) -> Result<(), RequestError> {
        let url = self.endpoint(&format!(
            "api/apps/{app_name}/comments/{comments_id}/{comment_id}"
        ));
        debug!(%url, "deleting comment");

        let response = self.http_client.delete(url).send().await?;
        success(response)?;

        Ok(())
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.api_url.clone();
        url.set_path(path);

        url
    }
}

fn success(response: reqwest::Response) -> Result<reqwest::Response, RequestError> {
    let status = response.status();

    if !status.is_success() {
        return Err(RequestError::UnexpectedStatus(status));
    }

    Ok(response)
}
