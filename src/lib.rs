//! # Filespot client for Rust
//!
//! Async client for the [Platformcraft Filespot](https://doc.platformcraft.ru/filespot/api/en/)
//! media API: object storage, transcoding, live streams, temporary links
//! and players. Every request is signed with the account's secret key.
//!
//! ## Quick start
//!
//! ```no_run
//! use filespot::{Client, ObjectsListParams};
//!
//! #[tokio::main]
//! async fn main() -> filespot::Result<()> {
//!     let client = Client::new("my-account", "my-secret");
//!
//!     let params = ObjectsListParams {
//!         folder: Some("/videos".into()),
//!         limit: Some(20),
//!         ..Default::default()
//!     };
//!     for object in client.objects().list(Some(&params)).await? {
//!         println!("{} {} ({} bytes)", object.id, object.path, object.size);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Builder pattern
//!
//! ```no_run
//! use filespot::ClientBuilder;
//! use std::time::Duration;
//!
//! # fn example() -> filespot::Result<()> {
//! let client = ClientBuilder::new()
//!     .api_user_id("my-account")
//!     .api_user_key("my-secret")
//!     .base_url("http://127.0.0.1:8080/1/")
//!     .timeout(Duration::from_secs(30))
//!     .build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Raw requests
//!
//! Endpoints without a binding can be reached through the signing core:
//!
//! ```no_run
//! # async fn example(client: filespot::Client) -> filespot::Result<()> {
//! use filespot::Method;
//!
//! let req = client.new_request::<()>(Method::GET, "/1/storage", None)?;
//! let storage: filespot::Storage = client.execute_field(req, "storage").await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod errors;
mod models;
mod resources;
pub mod sign;

pub use client::{
    is_success, Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, SUCCESS_STATUS,
};
pub use errors::{ApiError, FilespotError, Result};
pub use models::{
    ApiStatus, AudioStream, Download, DownloadCreateParams, Geo, HlsFiles, HlsMedia, HlsTask,
    Link, LinkCreateRequest, LinkList, Object, ObjectAdvanced, ObjectCreateRequest, ObjectFormat,
    ObjectUpdateRequest, ObjectsListParams, Player, PlayerCreateRequest, Preset, PresetList,
    RecordFile, SecureLink, SecureLinkRequest, Storage, Stream, StreamCreateRequest,
    StreamStartRequest, Task, TaskList, TempListParams, Transcoder, TranscoderConcatRequest,
    TranscoderCreateRequest, TranscoderHlsRequest, VideoStream,
};
pub use resources::{
    DownloadApi, DownloadTasksApi, ObjectsApi, PlayersApi, StorageApi, StreamsApi, TempApi,
    TranscoderApi, TranscoderTasksApi,
};
pub use reqwest::Method;
