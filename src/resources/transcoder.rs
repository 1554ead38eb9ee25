use reqwest::Method;

use crate::client::Client;
use crate::errors::Result;
use crate::models::{
    PresetList, Transcoder, TranscoderConcatRequest, TranscoderCreateRequest,
    TranscoderHlsRequest,
};

const TRANSCODER_PATH: &str = "/1/transcoder";

/// Encoding jobs. Each call queues a task; follow it up with
/// [`TranscoderTasksApi`](crate::TranscoderTasksApi).
///
/// See <https://doc.platformcraft.ru/filespot/api/en/#transcoder>.
pub struct TranscoderApi<'a> {
    client: &'a Client,
}

impl<'a> TranscoderApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Encoding presets available to the account.
    pub async fn presets(&self) -> Result<PresetList> {
        let path = format!("{TRANSCODER_PATH}/presets");
        let req = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.execute(req).await
    }

    /// Encode object `id` with the given presets.
    pub async fn create(&self, id: &str, request: &TranscoderCreateRequest) -> Result<Transcoder> {
        let path = format!("{TRANSCODER_PATH}/{id}");
        let req = self.client.new_request(Method::POST, &path, Some(request))?;
        self.client.execute(req).await
    }

    /// Join several objects into one file.
    pub async fn concat(&self, request: &TranscoderConcatRequest) -> Result<Transcoder> {
        let path = format!("{TRANSCODER_PATH}?concat");
        let req = self.client.new_request(Method::POST, &path, Some(request))?;
        self.client.execute(req).await
    }

    /// Package object `id` as HLS.
    pub async fn hls(&self, id: &str, request: &TranscoderHlsRequest) -> Result<Transcoder> {
        let path = format!("{TRANSCODER_PATH}/hls/{id}");
        let req = self.client.new_request(Method::POST, &path, Some(request))?;
        self.client.execute(req).await
    }
}
