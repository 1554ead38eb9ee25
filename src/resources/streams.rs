use reqwest::Method;

use crate::client::Client;
use crate::errors::Result;
use crate::models::{ApiStatus, RecordFile, Stream, StreamCreateRequest, StreamStartRequest};

const STREAMS_PATH: &str = "/1/streams";

/// Live streams and their instant recordings.
///
/// See <https://doc.platformcraft.ru/filespot/api/en/#streams>.
pub struct StreamsApi<'a> {
    client: &'a Client,
}

impl<'a> StreamsApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Stream>> {
        let req = self
            .client
            .new_request::<()>(Method::GET, STREAMS_PATH, None)?;
        self.client.execute_field(req, "streams").await
    }

    pub async fn get(&self, id: &str) -> Result<Stream> {
        let req = self
            .client
            .new_request::<()>(Method::GET, &format!("{STREAMS_PATH}/{id}"), None)?;
        self.client.execute_field(req, "stream").await
    }

    pub async fn create(&self, request: &StreamCreateRequest) -> Result<Stream> {
        let req = self
            .client
            .new_request(Method::POST, STREAMS_PATH, Some(request))?;
        self.client.execute_field(req, "stream").await
    }

    pub async fn delete(&self, id: &str) -> Result<ApiStatus> {
        let req = self
            .client
            .new_request::<()>(Method::DELETE, &format!("{STREAMS_PATH}/{id}"), None)?;
        self.client.execute(req).await
    }

    /// Start an instant recording of stream `id`.
    pub async fn start(&self, id: &str, request: &StreamStartRequest) -> Result<ApiStatus> {
        let path = format!("{STREAMS_PATH}/rec/instant/start/{id}");
        let req = self.client.new_request(Method::POST, &path, Some(request))?;
        self.client.execute(req).await
    }

    /// Stop the instant recording of stream `id` and return the recorded files.
    pub async fn stop(&self, id: &str) -> Result<Vec<RecordFile>> {
        let path = format!("{STREAMS_PATH}/rec/instant/stop/{id}");
        let req = self.client.new_request::<()>(Method::POST, &path, None)?;
        self.client.execute_field(req, "files").await
    }
}
