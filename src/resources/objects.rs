use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use crate::client::{path_with_params, Client};
use crate::errors::Result;
use crate::models::{ApiStatus, Object, ObjectCreateRequest, ObjectUpdateRequest, ObjectsListParams};

const OBJECTS_PATH: &str = "/1/objects";

/// Stored files and folders.
///
/// See <https://doc.platformcraft.ru/filespot/api/en/#objects>.
pub struct ObjectsApi<'a> {
    client: &'a Client,
}

impl<'a> ObjectsApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// List objects, optionally filtered. One page per call.
    pub async fn list(&self, params: Option<&ObjectsListParams>) -> Result<Vec<Object>> {
        let path = match params {
            Some(params) => path_with_params(OBJECTS_PATH, params)?,
            None => OBJECTS_PATH.to_string(),
        };

        let req = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.execute_field(req, "objects").await
    }

    pub async fn get(&self, id: &str) -> Result<Object> {
        let req = self
            .client
            .new_request::<()>(Method::GET, &format!("{OBJECTS_PATH}/{id}"), None)?;
        self.client.execute_field(req, "object").await
    }

    /// Upload a local file as a new object.
    ///
    /// # Errors
    ///
    /// - [`FilespotError::Io`](crate::FilespotError::Io) if the file cannot be read.
    pub async fn create(&self, request: &ObjectCreateRequest) -> Result<Object> {
        let form = upload_form(request).await?;
        let req = self
            .client
            .new_multipart_request(Method::POST, OBJECTS_PATH, form)?;
        self.client.execute_field(req, "object").await
    }

    pub async fn update(&self, id: &str, request: &ObjectUpdateRequest) -> Result<ApiStatus> {
        let req = self
            .client
            .new_request(Method::PUT, &format!("{OBJECTS_PATH}/{id}"), Some(request))?;
        self.client.execute(req).await
    }

    pub async fn delete(&self, id: &str) -> Result<ApiStatus> {
        let req = self
            .client
            .new_request::<()>(Method::DELETE, &format!("{OBJECTS_PATH}/{id}"), None)?;
        self.client.execute(req).await
    }
}

/// Build the multipart body: the file itself plus the flags that are set.
async fn upload_form(request: &ObjectCreateRequest) -> Result<Form> {
    let file_name = file_name(&request.file);
    let bytes = tokio::fs::read(&request.file).await?;

    let mut form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));

    if let Some(ref name) = request.name {
        form = form.text("name", name.clone());
    }
    if let Some(ref presets) = request.presets {
        form = form.text("presets", presets.clone());
    }
    for (field, set) in [
        ("private", request.private),
        ("autoencoding", request.autoencoding),
        ("del_original", request.del_original),
        ("autoplayer", request.autoplayer),
    ] {
        if set {
            form = form.text(field, "true");
        }
    }

    Ok(form)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file".to_string())
}
