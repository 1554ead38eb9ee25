//! One handle per remote resource type.
//!
//! Handles borrow the [`Client`](crate::Client) and are obtained from it,
//! e.g. `client.objects()`. They only assemble paths, query parameters and
//! bodies; signing, dispatch and decoding live on the client.

mod download;
mod download_tasks;
mod objects;
mod players;
mod storage;
mod streams;
mod temp;
mod transcoder;
mod transcoder_tasks;

pub use download::DownloadApi;
pub use download_tasks::DownloadTasksApi;
pub use objects::ObjectsApi;
pub use players::PlayersApi;
pub use storage::StorageApi;
pub use streams::StreamsApi;
pub use temp::TempApi;
pub use transcoder::TranscoderApi;
pub use transcoder_tasks::TranscoderTasksApi;
