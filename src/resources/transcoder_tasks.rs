use reqwest::Method;

use crate::client::Client;
use crate::errors::Result;
use crate::models::{ApiStatus, HlsTask, Task, TaskList};

const TRANSCODER_TASKS_PATH: &str = "/1/transcoder_tasks";

/// See <https://doc.platformcraft.ru/filespot/api/en/#transcoder_tasks>.
pub struct TranscoderTasksApi<'a> {
    client: &'a Client,
}

impl<'a> TranscoderTasksApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<TaskList> {
        let req = self
            .client
            .new_request::<()>(Method::GET, TRANSCODER_TASKS_PATH, None)?;
        self.client.execute(req).await
    }

    pub async fn get(&self, id: &str) -> Result<Task> {
        let path = format!("{TRANSCODER_TASKS_PATH}/{id}");
        let req = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.execute_field(req, "task").await
    }

    /// An HLS task together with its master and media playlists.
    pub async fn hls(&self, id: &str) -> Result<HlsTask> {
        let path = format!("{TRANSCODER_TASKS_PATH}/hls/{id}");
        let req = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.execute(req).await
    }

    pub async fn delete(&self, id: &str) -> Result<ApiStatus> {
        let path = format!("{TRANSCODER_TASKS_PATH}/{id}");
        let req = self.client.new_request::<()>(Method::DELETE, &path, None)?;
        self.client.execute(req).await
    }
}
