use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Request, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use warbler_api_types::lists::request::{validate_id, ListMemberAdd, ListMembersQuery};
use warbler_api_types::lists::response::{
    ListMembersDeleteResponse, ListMembersGetResponse, ListMembersPostResponse,
};
use warbler_api_types::{PartialErrorCheck, QueryError};

pub const DEFAULT_API_BASE: &str = "https://api.twitter.com/2";

const LISTS_PATH: &str = "lists";

pub struct Client {
    http: reqwest::Client,
    api_base: String,
    bearer_token: String,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("The bearer token was missing, expired or invalid")]
    Unauthorized,
    #[error("The authenticated user is not allowed to perform this operation")]
    Forbidden,
    #[error("Requested list or user was not found")]
    NotFound,
    #[error("Rate limit exceeded, wait for the window to reset")]
    RateLimited,
    #[error("Received error from the API server: {0}")]
    ServerError(#[source] anyhow::Error),
    #[error("Refusing to send invalid request: {0}")]
    InvalidQuery(#[from] QueryError),
    #[error("Failed to deserialize response body")]
    Deserialization(#[from] serde_json::Error),
    #[error("Received unknown error")]
    Other(#[from] anyhow::Error),
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        match value.status() {
            Some(StatusCode::UNAUTHORIZED) => Self::Unauthorized,
            Some(StatusCode::FORBIDDEN) => Self::Forbidden,
            Some(StatusCode::NOT_FOUND) => Self::NotFound,
            Some(StatusCode::TOO_MANY_REQUESTS) => Self::RateLimited,
            Some(status) if status.is_server_error() => Self::ServerError(anyhow::anyhow!(value)),
            _ => Self::Other(anyhow::anyhow!(value)),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

impl Client {
    /// Client for the public API, authenticating every request with `bearer_token`.
    ///
    /// The public API is served over https, so this needs the `default-tls` or
    /// `rustls-tls` feature. Without either, build a TLS-capable
    /// `reqwest::Client` yourself and pass it to [`Client::from_reqwest`].
    #[must_use]
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self::from_reqwest(DEFAULT_API_BASE, bearer_token, reqwest::Client::new())
    }

    /// `api_base` is the versioned root, e.g. `https://api.twitter.com/2`.
    #[must_use]
    pub fn from_reqwest(
        api_base: &str,
        bearer_token: impl Into<String>,
        client: reqwest::Client,
    ) -> Self {
        Self {
            http: client,
            api_base: api_base.trim_end_matches('/').to_string(),
            bearer_token: bearer_token.into(),
        }
    }

    #[must_use]
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Fetches one page of the members of a list.
    ///
    /// Partial errors do not fail the call. They are logged and left in the
    /// returned response for the caller to inspect.
    pub async fn list_members(
        &self,
        list_id: &str,
        query: &ListMembersQuery,
    ) -> Result<ListMembersGetResponse> {
        validate_id(list_id)?;
        query.validate()?;

        let url = format!("{}/{LISTS_PATH}/{list_id}/members", self.api_base);

        let mut req = self.http.get(url).build()?;

        let pairs = query.query_pairs();

        // query_pairs_mut leaves a bare `?` behind when nothing is appended
        if !pairs.is_empty() {
            req.url_mut().query_pairs_mut().extend_pairs(pairs);
        }

        self.execute(req).await
    }

    pub async fn add_list_member(
        &self,
        list_id: &str,
        user_id: &str,
    ) -> Result<ListMembersPostResponse> {
        validate_id(list_id)?;
        validate_id(user_id)?;

        let url = format!("{}/{LISTS_PATH}/{list_id}/members", self.api_base);

        let req = self
            .http
            .post(url)
            .json(&ListMemberAdd {
                user_id: user_id.to_owned(),
            })
            .build()?;

        self.execute(req).await
    }

    pub async fn remove_list_member(
        &self,
        list_id: &str,
        user_id: &str,
    ) -> Result<ListMembersDeleteResponse> {
        validate_id(list_id)?;
        validate_id(user_id)?;

        let url = format!("{}/{LISTS_PATH}/{list_id}/members/{user_id}", self.api_base);

        let req = self.http.delete(url).build()?;

        self.execute(req).await
    }

    async fn execute<T>(&self, mut req: Request) -> Result<T>
    where
        T: DeserializeOwned + PartialErrorCheck,
    {
        self.attach_auth(&mut req)?;

        tracing::debug!(method = %req.method(), url = %req.url(), "Sending request");

        let resp = self.http.execute(req).await?;

        resp.error_for_status_ref()?;

        let body = resp.bytes().await?;

        let decoded: T = serde_json::from_slice(&body)?;

        report_partial_errors(&decoded);

        Ok(decoded)
    }

    fn attach_auth(&self, req: &mut Request) -> Result<()> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.bearer_token))
            .map_err(|e| anyhow::anyhow!("bearer token is not a valid header value: {e}"))?;
        value.set_sensitive(true);

        req.headers_mut().insert(AUTHORIZATION, value);

        Ok(())
    }
}

fn report_partial_errors(response: &impl PartialErrorCheck) {
    if !response.has_partial_error() {
        return;
    }

    for error in response.partial_errors() {
        tracing::warn!(
            %error,
            resource_type = error.resource_type.as_deref(),
            resource_id = error.resource_id.as_deref(),
            "Response contains a partial error"
        );
    }
}
