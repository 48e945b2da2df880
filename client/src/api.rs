//! Typed client for the posts/users CRUD surface.

use reqwest::{Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

use crate::config::ProbeConfig;
use crate::error::ApiError;
use crate::http_client;
use apiprobe_types::{NewPost, Post, PostPatch, User};

/// Client for one API target.
///
/// Typed operations pin each endpoint's accepted status codes and decode the
/// body; the `*_raw` methods return the bare [`Response`] for tests that
/// assert on arbitrary paths or tolerate several statuses.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            http: http_client().clone(),
            base_url,
        }
    }

    /// Builds a client for the configured base URL.
    pub fn from_config(config: &ProbeConfig) -> Result<Self, ApiError> {
        let base_url = config.base_url();
        let base_url = Url::parse(&base_url).map_err(|source| ApiError::InvalidUrl {
            url: base_url,
            source,
        })?;
        Ok(Self::new(base_url))
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Sends `method` to `path` (joined onto the base URL), with an optional
    /// JSON body, and logs the outcome. Status handling is the caller's.
    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let url = self
            .base_url
            .join(path)
            .map_err(|source| ApiError::InvalidUrl {
                url: format!("{}{path}", self.base_url),
                source,
            })?;

        let mut request = self.http.request(method.clone(), url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        tracing::debug!(%method, path, status = %response.status(), "api request");
        Ok(response)
    }

    pub async fn get_raw(&self, path: &str) -> Result<Response, ApiError> {
        self.request(Method::GET, path, None::<&()>).await
    }

    pub async fn post_raw(&self, path: &str, body: &Value) -> Result<Response, ApiError> {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn put_raw(&self, path: &str, body: &Value) -> Result<Response, ApiError> {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn patch_raw(&self, path: &str, body: &Value) -> Result<Response, ApiError> {
        self.request(Method::PATCH, path, Some(body)).await
    }

    pub async fn delete_raw(&self, path: &str) -> Result<Response, ApiError> {
        self.request(Method::DELETE, path, None::<&()>).await
    }

    /// Lists the whole post collection.
    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let response = self.get_raw("/posts").await?;
        decode(response, Method::GET, "/posts", &[StatusCode::OK]).await
    }

    /// Fetches one post by id.
    pub async fn get_post(&self, id: u64) -> Result<Post, ApiError> {
        let path = format!("/posts/{id}");
        let response = self.get_raw(&path).await?;
        decode(response, Method::GET, &path, &[StatusCode::OK]).await
    }

    /// Creates a post. Anything but 201 is an error.
    pub async fn create_post(&self, draft: &NewPost) -> Result<Post, ApiError> {
        let response = self.request(Method::POST, "/posts", Some(draft)).await?;
        decode(response, Method::POST, "/posts", &[StatusCode::CREATED]).await
    }

    /// Replaces a post wholesale via PUT.
    pub async fn replace_post(&self, id: u64, draft: &NewPost) -> Result<Post, ApiError> {
        let path = format!("/posts/{id}");
        let response = self.request(Method::PUT, &path, Some(draft)).await?;
        decode(response, Method::PUT, &path, &[StatusCode::OK]).await
    }

    /// Applies a partial update to a post.
    pub async fn patch_post(&self, id: u64, patch: &PostPatch) -> Result<Post, ApiError> {
        let path = format!("/posts/{id}");
        let response = self.request(Method::PATCH, &path, Some(patch)).await?;
        decode(response, Method::PATCH, &path, &[StatusCode::OK]).await
    }

    /// Deletes a post. The service answers 200 or 204 depending on version.
    pub async fn delete_post(&self, id: u64) -> Result<(), ApiError> {
        let path = format!("/posts/{id}");
        let response = self.request(Method::DELETE, &path, None::<&()>).await?;
        let status = response.status();
        if status == StatusCode::OK || status == StatusCode::NO_CONTENT {
            Ok(())
        } else {
            Err(ApiError::UnexpectedStatus {
                method: Method::DELETE,
                path,
                status,
            })
        }
    }

    /// Fetches one user by id.
    pub async fn get_user(&self, id: u64) -> Result<User, ApiError> {
        let path = format!("/users/{id}");
        let response = self.get_raw(&path).await?;
        decode(response, Method::GET, &path, &[StatusCode::OK]).await
    }
}

async fn decode<T>(
    response: Response,
    method: Method,
    path: &str,
    accepted: &[StatusCode],
) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    if !accepted.contains(&status) {
        return Err(ApiError::UnexpectedStatus {
            method,
            path: path.to_string(),
            status,
        });
    }

    response.json().await.map_err(|source| ApiError::Decode {
        path: path.to_string(),
        source,
    })
}
