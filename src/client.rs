use std::ops::RangeInclusive;
use std::time::Duration;

use log::debug;
use reqwest::header::{HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, Request};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::errors::{ApiError, FilespotError, Result};
use crate::resources::{
    DownloadApi, DownloadTasksApi, ObjectsApi, PlayersApi, StorageApi, StreamsApi, TempApi,
    TranscoderApi, TranscoderTasksApi,
};
use crate::sign;

/// Default API root. Endpoint paths such as `/1/objects` resolve against it.
pub const DEFAULT_BASE_URL: &str = "https://api.platformcraft.ru/1/";

/// Default `User-Agent` header.
pub const DEFAULT_USER_AGENT: &str = concat!("platformcraft-filespot/", env!("CARGO_PKG_VERSION"));

/// HTTP statuses treated as success. Everything else is decoded as an [`ApiError`].
pub const SUCCESS_STATUS: RangeInclusive<u16> = 200..=299;

const MEDIA_TYPE: &str = "application/json";

/// Builder for constructing a [`Client`] with custom configuration.
///
/// # Example
///
/// ```no_run
/// use filespot::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> filespot::Result<()> {
/// let client = ClientBuilder::new()
///     .api_user_id("my-account")
///     .api_user_key("my-secret")
///     .base_url("https://api.platformcraft.ru/1/")
///     .timeout(Duration::from_secs(120))
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    api_user_id: Option<String>,
    api_user_key: Option<String>,
    base_url: String,
    user_agent: String,
    timeout: Option<Duration>,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            api_user_id: None,
            api_user_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            http: None,
        }
    }

    /// Create a builder pre-filled from `FILESPOT_API_USER_ID`,
    /// `FILESPOT_API_USER_KEY` and `FILESPOT_BASE_URL`, where set.
    ///
    /// Values set afterwards on the builder take precedence.
    pub fn from_env() -> Self {
        let mut builder = Self::new();
        builder.api_user_id = std::env::var("FILESPOT_API_USER_ID").ok();
        builder.api_user_key = std::env::var("FILESPOT_API_USER_KEY").ok();
        if let Ok(url) = std::env::var("FILESPOT_BASE_URL") {
            builder.base_url = url;
        }
        builder
    }

    /// Set the account identifier.
    pub fn api_user_id(mut self, id: impl Into<String>) -> Self {
        self.api_user_id = Some(id.into());
        self
    }

    /// Set the shared secret used to sign requests.
    pub fn api_user_key(mut self, key: impl Into<String>) -> Self {
        self.api_user_key = Some(key.into());
        self
    }

    /// Override the base URL (defaults to `https://api.platformcraft.ru/1/`).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the `User-Agent` header.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Set a transport timeout. No timeout is applied unless set.
    ///
    /// Ignored when a preconfigured client is supplied via
    /// [`http_client`](Self::http_client).
    pub fn timeout(mut self, d: Duration) -> Self {
        self.timeout = Some(d);
        self
    }

    /// Use a preconfigured `reqwest::Client` as transport.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the [`Client`].
    ///
    /// Returns [`FilespotError::Config`] if the account identifier or key is
    /// missing, the base URL does not parse or the user agent is not a valid
    /// header value.
    pub fn build(self) -> Result<Client> {
        let api_user_id = self
            .api_user_id
            .filter(|s| !s.is_empty())
            .ok_or_else(|| FilespotError::Config("API user id is required".into()))?;
        let api_user_key = self
            .api_user_key
            .filter(|s| !s.is_empty())
            .ok_or_else(|| FilespotError::Config("API user key is required".into()))?;
        let base_url = parse_base_url(&self.base_url)?;
        HeaderValue::from_str(&self.user_agent).map_err(|e| {
            FilespotError::Config(format!("user agent {:?}: {e}", self.user_agent))
        })?;

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(FilespotError::Http)?
            }
        };

        Ok(Client {
            base_url,
            api_user_id,
            api_user_key,
            user_agent: self.user_agent,
            http,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The Filespot API client.
///
/// Holds the account credentials and its own transport. Cheap to clone;
/// clones share the connection pool.
///
/// # Example
///
/// ```no_run
/// use filespot::Client;
///
/// # async fn example() -> filespot::Result<()> {
/// let client = Client::new("my-account", "my-secret");
///
/// let storage = client.storage().get().await?;
/// println!("{} of {} bytes used", storage.used, storage.limit);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    base_url: Url,
    api_user_id: String,
    api_user_key: String,
    user_agent: String,
    http: reqwest::Client,
}

impl Client {
    /// Create a new client with the given credentials and default settings.
    ///
    /// For customization, use [`ClientBuilder`] instead.
    pub fn new(api_user_id: impl Into<String>, api_user_key: impl Into<String>) -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            api_user_id: api_user_id.into(),
            api_user_key: api_user_key.into(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Point the client at another API root, e.g. a local mock server.
    pub fn set_base_url(&mut self, url: &str) -> Result<()> {
        self.base_url = parse_base_url(url)?;
        Ok(())
    }

    pub fn api_user_id(&self) -> &str {
        &self.api_user_id
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    // -----------------------------------------------------------------------
    // Resource bindings
    // -----------------------------------------------------------------------

    pub fn objects(&self) -> ObjectsApi<'_> {
        ObjectsApi::new(self)
    }

    pub fn players(&self) -> PlayersApi<'_> {
        PlayersApi::new(self)
    }

    pub fn streams(&self) -> StreamsApi<'_> {
        StreamsApi::new(self)
    }

    /// Temporary links.
    pub fn temp(&self) -> TempApi<'_> {
        TempApi::new(self)
    }

    pub fn transcoder(&self) -> TranscoderApi<'_> {
        TranscoderApi::new(self)
    }

    pub fn transcoder_tasks(&self) -> TranscoderTasksApi<'_> {
        TranscoderTasksApi::new(self)
    }

    /// Server-side fetching of remote files.
    pub fn download(&self) -> DownloadApi<'_> {
        DownloadApi::new(self)
    }

    pub fn download_tasks(&self) -> DownloadTasksApi<'_> {
        DownloadTasksApi::new(self)
    }

    pub fn storage(&self) -> StorageApi<'_> {
        StorageApi::new(self)
    }

    // -----------------------------------------------------------------------
    // Request construction
    // -----------------------------------------------------------------------

    /// Resolve `path` against the base URL and sign it for `method` at the
    /// current time.
    pub fn signed_url(&self, method: &Method, path: &str) -> Result<Url> {
        self.signed_url_at(method, path, chrono::Utc::now().timestamp())
    }

    /// Like [`signed_url`](Self::signed_url) with an explicit Unix timestamp.
    pub fn signed_url_at(&self, method: &Method, path: &str, timestamp: i64) -> Result<Url> {
        let mut url = self.base_url.join(path)?;
        sign::sign_url(
            &mut url,
            method.as_str(),
            &self.api_user_id,
            &self.api_user_key,
            timestamp,
        );
        Ok(url)
    }

    /// Build a signed request with an optional JSON body.
    ///
    /// The body is serialized followed by a newline; without a body the
    /// request carries none.
    pub fn new_request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Request> {
        let url = self.signed_url(&method, path)?;

        let mut req = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, MEDIA_TYPE)
            .header(USER_AGENT, &self.user_agent);

        if let Some(body) = body {
            let mut buf = serde_json::to_vec(body).map_err(FilespotError::Encode)?;
            buf.push(b'\n');
            req = req.body(buf);
        }

        Ok(req.build()?)
    }

    /// Build a signed request carrying a `multipart/form-data` body.
    pub fn new_multipart_request(
        &self,
        method: Method,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Request> {
        let url = self.signed_url(&method, path)?;

        Ok(self
            .http
            .request(method, url)
            .header(USER_AGENT, &self.user_agent)
            .multipart(form)
            .build()?)
    }

    // -----------------------------------------------------------------------
    // Dispatch
    // -----------------------------------------------------------------------

    /// Send `request` once and decode the JSON response into `T`.
    ///
    /// # Errors
    ///
    /// - [`FilespotError::Http`] on transport failure.
    /// - [`FilespotError::Api`] if the status is outside [`SUCCESS_STATUS`].
    /// - [`FilespotError::Decode`] if a success body does not match `T`.
    pub async fn execute<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        debug!("sending {} {}", request.method(), request.url().path());

        let response = self.http.execute(request).await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        debug!("got response status {status}, {} bytes", body.len());

        if !is_success(status) {
            return Err(ApiError::from_response(status, &body).into());
        }

        serde_json::from_slice(&body).map_err(FilespotError::Decode)
    }

    /// Send `request` and decode the payload nested under `field` of the
    /// response envelope.
    ///
    /// A missing field decodes like `null`.
    pub async fn execute_field<T: DeserializeOwned>(
        &self,
        request: Request,
        field: &str,
    ) -> Result<T> {
        let mut root: serde_json::Map<String, serde_json::Value> = self.execute(request).await?;
        let value = root.remove(field).unwrap_or_default();
        serde_json::from_value(value).map_err(FilespotError::Decode)
    }
}

/// Whether `status` falls in [`SUCCESS_STATUS`].
pub fn is_success(status: u16) -> bool {
    SUCCESS_STATUS.contains(&status)
}

/// Append `params` to the query of `path`, keeping whatever it already has.
pub(crate) fn path_with_params<P: Serialize + ?Sized>(path: &str, params: &P) -> Result<String> {
    let extra = serde_urlencoded::to_string(params)?;
    if extra.is_empty() {
        return Ok(path.to_string());
    }

    let sep = if path.contains('?') { '&' } else { '?' };
    Ok(format!("{path}{sep}{extra}"))
}

fn parse_base_url(url: &str) -> Result<Url> {
    let url = Url::parse(url).map_err(|e| FilespotError::Config(format!("base URL {url:?}: {e}")))?;
    if url.cannot_be_a_base() {
        return Err(FilespotError::Config(format!(
            "base URL {url} cannot be used as a base"
        )));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_range_bounds() {
        assert!(!is_success(199));
        assert!(is_success(200));
        assert!(is_success(226));
        assert!(is_success(299));
        assert!(!is_success(300));
        assert!(!is_success(404));
    }

    #[test]
    fn params_merge_into_existing_query() {
        #[derive(Serialize)]
        struct P {
            limit: u32,
        }

        assert_eq!(path_with_params("/1/objects", &P { limit: 5 }).unwrap(), "/1/objects?limit=5");
        assert_eq!(
            path_with_params("/1/objects?folder=a", &P { limit: 5 }).unwrap(),
            "/1/objects?folder=a&limit=5"
        );
        assert_eq!(
            path_with_params("/1/objects", &Vec::<(String, String)>::new()).unwrap(),
            "/1/objects"
        );
    }

    #[test]
    fn builder_requires_credentials() {
        let err = ClientBuilder::new().api_user_id("test").build().err().unwrap();
        assert!(matches!(err, FilespotError::Config(_)));

        let err = ClientBuilder::new()
            .api_user_id("test")
            .api_user_key("key")
            .base_url("not a url")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, FilespotError::Config(_)));
    }

    #[test]
    fn builder_rejects_invalid_user_agent() {
        let err = ClientBuilder::new()
            .api_user_id("test")
            .api_user_key("key")
            .user_agent("filespot\r\nX-Injected: 1")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, FilespotError::Config(_)));
    }

    #[test]
    fn builder_reads_environment() {
        std::env::set_var("FILESPOT_API_USER_ID", "env-user");
        std::env::set_var("FILESPOT_API_USER_KEY", "env-key");
        std::env::set_var("FILESPOT_BASE_URL", "http://127.0.0.1:8080/1/");

        let client = ClientBuilder::from_env().build().unwrap();
        assert_eq!(client.api_user_id(), "env-user");
        assert_eq!(client.base_url().as_str(), "http://127.0.0.1:8080/1/");

        let client = ClientBuilder::from_env()
            .api_user_id("explicit")
            .build()
            .unwrap();
        assert_eq!(client.api_user_id(), "explicit");

        std::env::remove_var("FILESPOT_API_USER_ID");
        std::env::remove_var("FILESPOT_API_USER_KEY");
        std::env::remove_var("FILESPOT_BASE_URL");
    }

    #[test]
    fn default_configuration() {
        let client = Client::new("test", "APIUserKey");
        assert_eq!(client.base_url().as_str(), DEFAULT_BASE_URL);
        assert_eq!(client.user_agent(), DEFAULT_USER_AGENT);
        assert_eq!(client.api_user_id(), "test");
    }
}
