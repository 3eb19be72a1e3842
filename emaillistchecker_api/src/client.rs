//! HTTP client for the EmailListChecker REST API.

use std::path::Path;
use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, RETRY_AFTER, USER_AGENT};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use url::Url;

use crate::{
    params::{
        BatchOptions, BatchRequest, CompanySearch, CompanySearchRequest, DomainSearch,
        DomainSearchRequest, FindEmailRequest, HttpMethod, ResultFilter, ResultFormat,
        VerifyOptions, VerifyRequest,
    },
    response::{from_envelope, interpret, unwrap_envelope},
    types::{
        BatchId, BatchJob, BatchResults, CompanySearchResult, Credits, DeleteListResponse,
        DomainSearchResult, FoundEmail, ListId, Usage, VerificationResult,
    },
    user_agent::get_user_agent,
    Error,
};

pub const DEFAULT_BASE_URL: &str = "https://platform.emaillistchecker.io/api/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings fixed for the lifetime of a [`Client`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub api_key: String,
    /// API root. Trailing slashes are stripped when the client is built.
    pub base_url: String,
    /// Applied as both the connect and the read timeout of every request.
    pub timeout_secs: u64,
}

impl ClientConfig {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

/// Outbound body of a request.
pub(crate) enum RequestBody {
    Empty,
    Json(Vec<u8>),
    Multipart(reqwest::multipart::Form),
}

impl RequestBody {
    fn json<B: Serialize>(body: &B) -> Result<Self, Error> {
        serde_json::to_vec(body)
            .map(RequestBody::Json)
            .map_err(|e| Error::RequestFailed {
                message: e.to_string(),
            })
    }
}

/// A completed HTTP exchange, whatever its status.
pub(crate) struct RawResponse {
    status: u16,
    retry_after: Option<String>,
    body: String,
}

impl RawResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn into_result(self) -> Result<Value, Error> {
        interpret(self.status, self.retry_after.as_deref(), &self.body)
    }
}

/// HTTP client for the EmailListChecker API.
///
/// Every call is a single request: no retries, no backoff and no caching.
/// Failures come back as [`Error`] exactly as classified.
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout_secs: u64,
}

impl Client {
    /// Creates a client for the production API with the default 30 second timeout.
    pub fn new(api_key: &str) -> Result<Self, Error> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: &str) -> Result<Self, Error> {
        Self::with_config(ClientConfig::new(api_key).with_base_url(base_url))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let http = reqwest::Client::builder()
            .connect_timeout(timeout)
            .read_timeout(timeout)
            .build()
            .map_err(|e| Error::RequestFailed {
                message: error_chain(&e),
            })?;
        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout_secs: config.timeout_secs,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    /// Appends `path` to the base URL and encodes `query` as form pairs.
    fn get_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, Error> {
        let raw = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let mut url = Url::parse(&raw).map_err(|e| Error::InvalidUrl {
            url: raw.clone(),
            message: e.to_string(),
        })?;
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    pub(crate) fn build_request(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&str, String)],
        body: RequestBody,
    ) -> Result<reqwest::Request, Error> {
        let url = self.get_url(path, query)?;
        let builder = self
            .http
            .request(method.into(), url)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(ACCEPT, "application/json")
            .header(USER_AGENT, get_user_agent());
        let builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(bytes) => builder.header(CONTENT_TYPE, "application/json").body(bytes),
            RequestBody::Multipart(form) => builder.multipart(form),
        };
        builder.build().map_err(|e| Error::RequestFailed {
            message: error_chain(&e),
        })
    }

    /// Executes one request. Any status counts as a completed exchange;
    /// only transport failures become errors here.
    async fn send(&self, request: reqwest::Request) -> Result<RawResponse, Error> {
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");
        let resp = self
            .http
            .execute(request)
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = resp.status().as_u16();
        let retry_after = resp
            .headers()
            .get(RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.text().await.map_err(|e| self.transport_error(e))?;
        tracing::debug!(status, bytes = body.len(), "received response");

        Ok(RawResponse {
            status,
            retry_after,
            body,
        })
    }

    fn transport_error(&self, e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout {
                seconds: self.timeout_secs,
            }
        } else {
            Error::RequestFailed {
                message: error_chain(&e),
            }
        }
    }

    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        query: &[(&str, String)],
        body: RequestBody,
    ) -> Result<Value, Error> {
        let request = self.build_request(method, path, query, body)?;
        self.send(request).await?.into_result()
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let value = self
            .request(HttpMethod::Get, path, &[], RequestBody::Empty)
            .await?;
        from_envelope(value)
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let value = self
            .request(HttpMethod::Post, path, &[], RequestBody::json(body)?)
            .await?;
        from_envelope(value)
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let value = self
            .request(HttpMethod::Delete, path, &[], RequestBody::Empty)
            .await?;
        from_envelope(value)
    }

    /// Verifies a single email address.
    pub async fn verify(
        &self,
        email: &str,
        options: &VerifyOptions,
    ) -> Result<VerificationResult, Error> {
        self.post("/verify", &VerifyRequest::new(email, options))
            .await
    }

    /// Submits up to 10,000 addresses for asynchronous verification.
    ///
    /// The returned job is a snapshot; poll [`Client::get_batch_status`]
    /// until [`crate::types::BatchStatus::is_terminal`].
    pub async fn verify_batch(
        &self,
        emails: &[String],
        options: &BatchOptions,
    ) -> Result<BatchJob, Error> {
        self.post("/verify/batch", &BatchRequest::new(emails, options))
            .await
    }

    /// Uploads a CSV, TXT or XLSX file for batch verification.
    ///
    /// The whole file is read into memory before sending. A missing file
    /// fails before any network call.
    pub async fn verify_batch_file(
        &self,
        file_path: impl AsRef<Path>,
        options: &BatchOptions,
    ) -> Result<BatchJob, Error> {
        let file_path = file_path.as_ref();
        let bytes = std::fs::read(file_path).map_err(|source| match source.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound {
                path: file_path.to_path_buf(),
            },
            _ => Error::FileRead {
                path: file_path.to_path_buf(),
                source,
            },
        })?;
        let filename = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let form = options.to_upload_form(&filename, bytes)?;
        let value = self
            .request(
                HttpMethod::Post,
                "/verify/batch/upload",
                &[],
                RequestBody::Multipart(form),
            )
            .await?;
        from_envelope(value)
    }

    /// Fetches the current snapshot of a batch.
    pub async fn get_batch_status(&self, batch_id: BatchId) -> Result<BatchJob, Error> {
        self.get(format!("/verify/batch/{}", batch_id).as_str())
            .await
    }

    /// Downloads batch results.
    ///
    /// JSON downloads are envelope-unwrapped. CSV and TXT downloads are
    /// returned verbatim without any JSON parsing.
    pub async fn get_batch_results(
        &self,
        batch_id: BatchId,
        format: ResultFormat,
        filter: ResultFilter,
    ) -> Result<BatchResults, Error> {
        let query = [("format", format.to_string()), ("filter", filter.to_string())];
        let request = self.build_request(
            HttpMethod::Get,
            format!("/verify/batch/{}/results", batch_id).as_str(),
            &query,
            RequestBody::Empty,
        )?;
        let raw = self.send(request).await?;

        match format {
            ResultFormat::Json => Ok(BatchResults::Json(unwrap_envelope(raw.into_result()?))),
            _ if raw.is_success() => Ok(BatchResults::Text(raw.body)),
            // non-success statuses always classify to an error
            _ => raw.into_result().map(BatchResults::Json),
        }
    }

    /// Guesses a person's address from their name and a domain.
    pub async fn find_email(
        &self,
        first_name: &str,
        last_name: &str,
        domain: &str,
    ) -> Result<FoundEmail, Error> {
        let body = FindEmailRequest {
            first_name,
            last_name,
            domain,
        };
        self.post("/finder/email", &body).await
    }

    pub async fn find_by_domain(
        &self,
        domain: &str,
        search: &DomainSearch,
    ) -> Result<DomainSearchResult, Error> {
        let body = DomainSearchRequest {
            domain,
            limit: search.limit,
            offset: search.offset,
        };
        self.post("/finder/domain", &body).await
    }

    pub async fn find_by_company(
        &self,
        company: &str,
        search: &CompanySearch,
    ) -> Result<CompanySearchResult, Error> {
        let body = CompanySearchRequest {
            company,
            limit: search.limit,
        };
        self.post("/finder/company", &body).await
    }

    pub async fn get_credits(&self) -> Result<Credits, Error> {
        self.get("/credits").await
    }

    pub async fn get_usage(&self) -> Result<Usage, Error> {
        self.get("/usage").await
    }

    /// Lists all verification batches on the account.
    pub async fn get_lists(&self) -> Result<Vec<BatchJob>, Error> {
        self.get("/lists").await
    }

    pub async fn delete_list(&self, list_id: ListId) -> Result<DeleteListResponse, Error> {
        self.delete(format!("/lists/{}", list_id).as_str()).await
    }
}

/// Flattens an error and its sources into one line.
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        message.push_str(": ");
        message.push_str(&inner.to_string());
        source = inner.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::with_base_url("https://api.example.com/api/v1/", "secret-key").unwrap()
    }

    fn header<'a>(request: &'a reqwest::Request, name: &str) -> Option<&'a str> {
        request.headers().get(name).and_then(|v| v.to_str().ok())
    }

    #[test]
    fn config_defaults() {
        let config = ClientConfig::new("k");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn base_url_trailing_slash_is_stripped() {
        assert_eq!(client().base_url(), "https://api.example.com/api/v1");
    }

    #[test]
    fn url_appends_path_without_double_slash() {
        let url = client().get_url("/verify/batch/7", &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/v1/verify/batch/7");

        let url = client().get_url("credits", &[]).unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/api/v1/credits");
    }

    #[test]
    fn url_encodes_query_pairs() {
        let query = [("format", "csv".to_string()), ("filter", "a b&c".to_string())];
        let url = client().get_url("/verify/batch/7/results", &query).unwrap();
        assert_eq!(url.query(), Some("format=csv&filter=a+b%26c"));
    }

    #[test]
    fn invalid_base_url_is_reported() {
        let client = Client::with_base_url("not a url", "k").unwrap();
        let err = client.get_url("/credits", &[]).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl { .. }));
    }

    #[test]
    fn get_request_has_auth_headers_and_no_body() {
        let request = client()
            .build_request(HttpMethod::Get, "/credits", &[], RequestBody::Empty)
            .unwrap();
        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(header(&request, "authorization"), Some("Bearer secret-key"));
        assert_eq!(header(&request, "accept"), Some("application/json"));
        assert_eq!(header(&request, "user-agent"), Some(get_user_agent().as_str()));
        assert!(header(&request, "content-type").is_none());
        assert!(request.body().is_none());
    }

    #[test]
    fn json_request_sets_content_type_and_body() {
        let options = VerifyOptions::default();
        let body = RequestBody::json(&VerifyRequest::new("a@example.com", &options)).unwrap();
        let request = client()
            .build_request(HttpMethod::Post, "/verify", &[], body)
            .unwrap();
        assert_eq!(header(&request, "content-type"), Some("application/json"));
        let bytes = request.body().and_then(|b| b.as_bytes()).unwrap();
        let sent: Value = serde_json::from_slice(bytes).unwrap();
        assert_eq!(sent, serde_json::json!({"email": "a@example.com", "smtp_check": true}));
    }

    #[test]
    fn multipart_request_sets_form_content_type() {
        let form = BatchOptions::default()
            .to_upload_form("leads.csv", b"a@example.com".to_vec())
            .unwrap();
        let boundary = form.boundary().to_string();
        let request = client()
            .build_request(
                HttpMethod::Post,
                "/verify/batch/upload",
                &[],
                RequestBody::Multipart(form),
            )
            .unwrap();
        assert_eq!(
            header(&request, "content-type"),
            Some(format!("multipart/form-data; boundary={}", boundary).as_str())
        );
        assert_eq!(header(&request, "authorization"), Some("Bearer secret-key"));
    }
}
