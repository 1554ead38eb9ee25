use reqwest::Method;

use crate::client::{path_with_params, Client};
use crate::errors::Result;
use crate::models::{Download, DownloadCreateParams};

const DOWNLOAD_PATH: &str = "/1/download";

/// Have the service fetch a remote file into storage.
///
/// See <https://doc.platformcraft.ru/filespot/api/en/#download>.
pub struct DownloadApi<'a> {
    client: &'a Client,
}

impl<'a> DownloadApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Queue a download. Parameters travel in the query string.
    pub async fn create(&self, params: &DownloadCreateParams) -> Result<Download> {
        let path = path_with_params(DOWNLOAD_PATH, params)?;
        let req = self.client.new_request::<()>(Method::POST, &path, None)?;
        self.client.execute(req).await
    }
}
