use reqwest::Method;

use crate::client::Client;
use crate::errors::Result;
use crate::models::{ApiStatus, Task, TaskList};

const DOWNLOAD_TASKS_PATH: &str = "/1/download_tasks";

pub struct DownloadTasksApi<'a> {
    client: &'a Client,
}

impl<'a> DownloadTasksApi<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<TaskList> {
        let req = self
            .client
            .new_request::<()>(Method::GET, DOWNLOAD_TASKS_PATH, None)?;
        self.client.execute(req).await
    }

    pub async fn get(&self, id: &str) -> Result<Task> {
        let path = format!("{DOWNLOAD_TASKS_PATH}/{id}");
        let req = self.client.new_request::<()>(Method::GET, &path, None)?;
        self.client.execute_field(req, "task").await
    }

    pub async fn delete(&self, id: &str) -> Result<ApiStatus> {
        let path = format!("{DOWNLOAD_TASKS_PATH}/{id}");
        let req = self.client.new_request::<()>(Method::DELETE, &path, None)?;
        self.client.execute(req).await
    }
}
