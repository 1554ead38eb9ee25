use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer, Serialize};

/// Geographic access map: continent code → country code → allowed.
///
/// Codes are upper-case ISO codes (`"EU"`, `"RU"`). The country `"ALL"`
/// grants the whole continent.
pub type Geo = HashMap<String, HashMap<String, bool>>;

/// Bare success envelope, returned by calls that carry no payload.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiStatus {
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

// ---------------------------------------------------------------------------
// Objects
// ---------------------------------------------------------------------------

/// A stored file or folder.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Object {
    pub id: String,
    pub name: String,
    pub path: String,
    pub is_dir: bool,
    /// Bytes.
    pub size: u64,
    pub content_type: String,
    pub create_date: String,
    pub latest_update: String,
    pub resource_url: String,
    pub cdn_url: String,
    pub vod_hls: String,
    pub video: String,
    pub private: bool,
    pub status: String,
    /// Media probe results, present for audio/video objects.
    pub advanced: Option<ObjectAdvanced>,
    #[serde(deserialize_with = "nullable")]
    pub previews: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ObjectAdvanced {
    #[serde(deserialize_with = "nullable")]
    pub audio_streams: Vec<AudioStream>,
    pub format: Option<ObjectFormat>,
    #[serde(deserialize_with = "nullable")]
    pub video_streams: Vec<VideoStream>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AudioStream {
    pub bit_rate: u64,
    pub channel_layout: String,
    pub channels: u32,
    pub codec_long_name: String,
    pub codec_type: String,
    /// Seconds.
    pub duration: f64,
    pub index: u32,
    pub sample_rate: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ObjectFormat {
    pub bit_rate: u64,
    pub duration: f64,
    pub format_long_name: String,
    pub format_name: String,
    pub nb_streams: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct VideoStream {
    pub bit_rate: u64,
    pub codec_name: String,
    pub codec_type: String,
    #[serde(rename = "codeclongname")]
    pub codec_long_name: String,
    pub display_aspect_ratio: String,
    pub duration: f64,
    pub fps: f64,
    pub height: u32,
    pub index: u32,
    pub width: u32,
}

/// Filters and pagination for `objects().list`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ObjectsListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// File extension, e.g. `"mp4"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ext: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub private: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub show_folders: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    /// Paging timestamp from a previous page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagingts: Option<i64>,
}

/// Multipart upload of a local file.
#[derive(Debug, Clone, Default)]
pub struct ObjectCreateRequest {
    /// Local file to upload.
    pub file: PathBuf,
    /// Remote name; defaults to the local file name.
    pub name: Option<String>,
    pub private: bool,
    pub autoencoding: bool,
    /// Comma-separated preset ids used when `autoencoding` is set.
    pub presets: Option<String>,
    pub del_original: bool,
    pub autoplayer: bool,
}

impl ObjectCreateRequest {
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            ..Default::default()
        }
    }
}

/// Fields to change on an object. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ObjectUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private: Option<bool>,
}

// ---------------------------------------------------------------------------
// Players
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub path: String,
    pub is_dir: bool,
    /// Quality label (e.g. `"480"`) → video URL.
    #[serde(deserialize_with = "nullable")]
    pub videos: HashMap<String, String>,
    pub screen_shot_url: String,
    pub vast_ad_tag_url: String,
    pub create_date: String,
    pub href: String,
    /// Ready-to-embed `<iframe>` markup.
    pub frame_tag: String,
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub geo: Geo,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PlayerCreateRequest {
    pub name: String,
    pub folder: String,
    /// Quality label → object id.
    pub videos: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screen_shot_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vast_ad_tag_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
}

// ---------------------------------------------------------------------------
// Streams
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Stream {
    pub id: String,
    pub user: String,
    pub name: String,
    pub url: String,
    pub is_instant_recording: bool,
}

/// A file produced by stopping a stream recording.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecordFile {
    pub id: String,
    pub name: String,
    pub path: String,
    pub size: u64,
    pub content_type: String,
    pub create_date: String,
    pub latest_update: String,
    pub resource_url: String,
    pub video: String,
    pub cdn_url: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StreamCreateRequest {
    pub name: String,
    /// Source stream URL.
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct StreamStartRequest {
    /// Seconds after which recording stops on its own.
    pub stop_timeout: u32,
}

// ---------------------------------------------------------------------------
// Temporary links
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Link {
    pub id: String,
    pub object_id: String,
    pub href: String,
    pub secure: bool,
    /// Expiry as a Unix timestamp, `0` for endless links.
    pub exp: i64,
    pub for_sale: bool,
    #[serde(deserialize_with = "nullable")]
    pub geo: Geo,
}

/// One page of temporary links.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LinkList {
    #[serde(deserialize_with = "nullable")]
    pub links: Vec<Link>,
    pub count: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TempListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub for_sale: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub secure: bool,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LinkCreateRequest {
    pub object_id: String,
    pub endless: bool,
    /// Expiry as a Unix timestamp; ignored for endless links.
    pub exp: i64,
    pub secure: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
}

/// Signed URL for a secure temporary link.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SecureLink {
    pub hash: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SecureLinkRequest {
    /// Client address the link is bound to.
    pub ip: String,
    /// Expiry as a Unix timestamp.
    pub ts: i64,
}

// ---------------------------------------------------------------------------
// Transcoder
// ---------------------------------------------------------------------------

/// Answer of a transcoding submission.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Transcoder {
    pub message: String,
    pub active_tasks: u32,
    pub task_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub container: String,
    #[serde(deserialize_with = "nullable")]
    pub video: HashMap<String, String>,
    #[serde(deserialize_with = "nullable")]
    pub audio: HashMap<String, String>,
    /// Position name (e.g. `"BottomLeft"`) → placement parameters.
    #[serde(deserialize_with = "nullable")]
    pub watermarks: HashMap<String, HashMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PresetList {
    #[serde(deserialize_with = "nullable")]
    pub presets: Vec<Preset>,
    pub count: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TranscoderCreateRequest {
    pub presets: Vec<String>,
    /// Destination folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Watermark position → image object id.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub watermarks: HashMap<String, String>,
    pub del_original: bool,
    /// Offset in seconds to start from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<u32>,
    /// Seconds to encode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TranscoderConcatRequest {
    /// Object ids, in playback order.
    pub files: Vec<String>,
    pub path: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TranscoderHlsRequest {
    pub presets: Vec<String>,
    /// Seconds per segment.
    pub segment_duration: u32,
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

/// A background download or encoding task.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Task {
    pub id: String,
    /// `"download"` or `"encoding"`.
    pub category: String,
    pub title: String,
    pub body: String,
    /// e.g. `"Progress"`, `"Completed"`.
    pub status: String,
    pub time_start: String,
    pub time_finish: String,
    pub lock: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TaskList {
    #[serde(deserialize_with = "nullable")]
    pub tasks: Vec<Task>,
    pub count: u32,
}

/// An HLS encoding task together with the playlists it produced.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HlsTask {
    pub task: Task,
    pub files: HlsFiles,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HlsFiles {
    /// Object id of the master playlist.
    pub master_playlist: String,
    #[serde(deserialize_with = "nullable")]
    pub media: Vec<HlsMedia>,
}

/// One rendition: its playlist and segment object ids.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct HlsMedia {
    pub playlist: String,
    #[serde(deserialize_with = "nullable")]
    pub files: Vec<String>,
}

// ---------------------------------------------------------------------------
// Download
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Download {
    pub message: String,
    pub active_tasks: u32,
    pub task_id: String,
}

/// Server-side fetch of a remote file, sent as query parameters.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DownloadCreateParams {
    pub url: String,
    /// Destination folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub autoencoding: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presets: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub del_original: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub autoplayer: bool,
}

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// Account storage usage, in bytes.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Storage {
    pub used: u64,
    pub limit: u64,
}

/// Treat an explicit `null` like a missing field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn is_false(b: &bool) -> bool {
    !*b
}
