use reqwest::Method;

use crate::client::Client;
use crate::errors::Result;
use crate::models::Storage;

const STORAGE_PATH: &str = "/1/storage";

/// Account storage usage.
pub struct StorageApi<'a> {
    client: &'a Client,
}

impl<'a> StorageApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn get(&self) -> Result<Storage> {
        let req = self
            .client
            .new_request::<()>(Method::GET, STORAGE_PATH, None)?;
        self.client.execute_field(req, "storage").await
    }
}
