//! access::http
//!
//! DataSource implementation against the blog's REST backend.
//!
//! # Endpoints
//!
//! | Operation            | Request                                  |
//! |----------------------|------------------------------------------|
//! | authenticate         | `POST /auth/login` `{"email","senha"}`   |
//! | list / create posts  | `GET` / `POST /posts`                    |
//! | get / update / delete| `GET` / `PUT` / `DELETE /posts/{id}`     |
//! | instructors          | `/professores?page=&limit=`, `/professores/{id}` |
//! | students             | `/alunos?page=&limit=`, `/alunos/{id}`   |
//!
//! Paged responses are `{"data": [...], "total": n}`.
//!
//! # Errors
//!
//! Every failure maps onto a transient [`SourceError`]: transport failures
//! become `NetworkError`, an elapsed request timeout becomes `Timeout`, a
//! non-2xx status becomes `ApiError`, and an unreadable body becomes
//! `InvalidResponse`. This source never reports `NotFound`; a 404 is an
//! `ApiError` like any other status.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use classblog::access::{DataSource, HttpSource};
//!
//! let source = HttpSource::new("https://api.blogmobile.com", Duration::from_secs(30))?;
//! let posts = source.list_posts().await?;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Deserialize, Serialize};

use super::traits::{DataSource, SourceError};
use crate::core::model::{
    Account, Instructor, NewPerson, NewPost, PersonPatch, Post, PostPatch, Student,
};
use crate::core::paging::{Page, PageRequest};
use crate::core::types::EntityId;

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "classblog-cli";

/// Remote data source.
#[derive(Debug, Clone)]
pub struct HttpSource {
    /// HTTP client with the request timeout applied
    client: Client,
    /// Base URL without a trailing slash
    base_url: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    senha: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl HttpSource {
    /// Create a source for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns `NetworkError` if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, SourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| SourceError::NetworkError(format!("failed to build client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn page_query(request: PageRequest) -> [(&'static str, u32); 2] {
        [("page", request.page), ("limit", request.page_size)]
    }

    /// Send a request, mapping transport failures.
    async fn send(&self, request: RequestBuilder) -> Result<Response, SourceError> {
        let response = request.send().await.map_err(|e| self.transport_error(e))?;
        tracing::debug!(
            status = %response.status(),
            url = %response.url(),
            "remote response"
        );
        Ok(response)
    }

    fn transport_error(&self, e: reqwest::Error) -> SourceError {
        if e.is_timeout() {
            SourceError::Timeout(format!("no response within {:?}", self.timeout))
        } else {
            SourceError::NetworkError(e.to_string())
        }
    }

    /// Handle an API response, decoding the body on success.
    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: Response,
    ) -> Result<T, SourceError> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| {
                if e.is_timeout() {
                    self.transport_error(e)
                } else {
                    SourceError::InvalidResponse(format!("failed to parse response: {}", e))
                }
            })
        } else {
            Self::handle_error_response(response, status).await
        }
    }

    /// Handle a response whose body is not needed.
    async fn handle_empty_response(&self, response: Response) -> Result<(), SourceError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Self::handle_error_response(response, status).await
        }
    }

    /// Handle an error response from the API.
    async fn handle_error_response<T>(
        response: Response,
        status: StatusCode,
    ) -> Result<T, SourceError> {
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message,
            Err(_) => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };

        Err(SourceError::ApiError {
            status: status.as_u16(),
            message,
        })
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, SourceError> {
        tracing::debug!(method = "GET", path, "remote request");
        let response = self.send(self.client.get(self.url(path))).await?;
        self.handle_response(response).await
    }

    async fn get_page<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        request: PageRequest,
    ) -> Result<Page<T>, SourceError> {
        tracing::debug!(
            method = "GET",
            path,
            page = request.page,
            limit = request.page_size,
            "remote request"
        );
        let builder = self
            .client
            .get(self.url(path))
            .query(&Self::page_query(request));
        let response = self.send(builder).await?;
        self.handle_response(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, SourceError>
    where
        B: Serialize + ?Sized,
        T: for<'de> Deserialize<'de>,
    {
        tracing::debug!(method = "POST", path, "remote request");
        let response = self.send(self.client.post(self.url(path)).json(body)).await?;
        self.handle_response(response).await
    }

    async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T, SourceError>
    where
        B: Serialize + ?Sized,
        T: for<'de> Deserialize<'de>,
    {
        tracing::debug!(method = "PUT", path, "remote request");
        let response = self.send(self.client.put(self.url(path)).json(body)).await?;
        self.handle_response(response).await
    }

    async fn delete(&self, path: &str) -> Result<bool, SourceError> {
        tracing::debug!(method = "DELETE", path, "remote request");
        let response = self.send(self.client.delete(self.url(path))).await?;
        self.handle_empty_response(response).await?;
        Ok(true)
    }
}

#[async_trait]
impl DataSource for HttpSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn authenticate(
        &self,
        email: &str,
        secret: &str,
    ) -> Result<Option<Account>, SourceError> {
        let body = LoginRequest {
            email,
            senha: secret,
        };
        self.post_json("/auth/login", &body).await
    }

    async fn list_posts(&self) -> Result<Vec<Post>, SourceError> {
        self.get_json("/posts").await
    }

    async fn get_post(&self, id: &EntityId) -> Result<Option<Post>, SourceError> {
        self.get_json(&format!("/posts/{}", id)).await
    }

    async fn create_post(&self, post: NewPost) -> Result<Post, SourceError> {
        self.post_json("/posts", &post).await
    }

    async fn update_post(&self, id: &EntityId, patch: PostPatch) -> Result<Post, SourceError> {
        self.put_json(&format!("/posts/{}", id), &patch).await
    }

    async fn delete_post(&self, id: &EntityId) -> Result<bool, SourceError> {
        self.delete(&format!("/posts/{}", id)).await
    }

    async fn list_instructors(
        &self,
        request: PageRequest,
    ) -> Result<Page<Instructor>, SourceError> {
        self.get_page("/professores", request).await
    }

    async fn create_instructor(&self, person: NewPerson) -> Result<Instructor, SourceError> {
        self.post_json("/professores", &person).await
    }

    async fn update_instructor(
        &self,
        id: &EntityId,
        patch: PersonPatch,
    ) -> Result<Instructor, SourceError> {
        self.put_json(&format!("/professores/{}", id), &patch)
            .await
    }

    async fn delete_instructor(&self, id: &EntityId) -> Result<bool, SourceError> {
        self.delete(&format!("/professores/{}", id)).await
    }

    async fn list_students(&self, request: PageRequest) -> Result<Page<Student>, SourceError> {
        self.get_page("/alunos", request).await
    }

    async fn create_student(&self, person: NewPerson) -> Result<Student, SourceError> {
        self.post_json("/alunos", &person).await
    }

    async fn update_student(
        &self,
        id: &EntityId,
        patch: PersonPatch,
    ) -> Result<Student, SourceError> {
        self.put_json(&format!("/alunos/{}", id), &patch).await
    }

    async fn delete_student(&self, id: &EntityId) -> Result<bool, SourceError> {
        self.delete(&format!("/alunos/{}", id)).await
    }
}
