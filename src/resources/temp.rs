use reqwest::Method;

use crate::client::{path_with_params, Client};
use crate::errors::Result;
use crate::models::{
    ApiStatus, Link, LinkCreateRequest, LinkList, SecureLink, SecureLinkRequest, TempListParams,
};

const TEMP_PATH: &str = "/1/temp";

/// Temporary links to stored objects.
///
/// See <https://doc.platformcraft.ru/filespot/api/en/#temp>.
pub struct TempApi<'a> {
    client: &'a Client,
}

impl<'a> TempApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, params: Option<&TempListParams>) -> Result<LinkList> {
        let path = match params {
            Some(params) => path_with_params(TEMP_PATH, params)?,
            None => TEMP_PATH.to_string(),
        };

        let req = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.execute(req).await
    }

    pub async fn get(&self, id: &str) -> Result<Link> {
        let req = self
            .client
            .new_request::<()>(Method::GET, &format!("{TEMP_PATH}/{id}"), None)?;
        self.client.execute_field(req, "link").await
    }

    pub async fn create(&self, request: &LinkCreateRequest) -> Result<Link> {
        let req = self
            .client
            .new_request(Method::POST, TEMP_PATH, Some(request))?;
        self.client.execute_field(req, "link").await
    }

    pub async fn delete(&self, id: &str) -> Result<ApiStatus> {
        let req = self
            .client
            .new_request::<()>(Method::DELETE, &format!("{TEMP_PATH}/{id}"), None)?;
        self.client.execute(req).await
    }

    /// Issue a signed URL for secure link `id`, bound to a client IP.
    pub async fn secure(&self, id: &str, request: &SecureLinkRequest) -> Result<SecureLink> {
        let path = format!("{TEMP_PATH}/{id}/secure");
        let req = self.client.new_request(Method::POST, &path, Some(request))?;
        self.client.execute(req).await
    }
}
