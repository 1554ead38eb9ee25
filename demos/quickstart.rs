//! Quick-start tour of the Filespot Rust client.
//!
//! Run with:
//!   FILESPOT_API_USER_ID=... FILESPOT_API_USER_KEY=... cargo run --example quickstart -- video.mp4

use filespot::{
    ClientBuilder, LinkCreateRequest, ObjectCreateRequest, ObjectsListParams,
    TranscoderCreateRequest,
};

#[tokio::main]
async fn main() -> filespot::Result<()> {
    // -----------------------------------------------------------------------
    // 1. Create a client from FILESPOT_* environment variables
    // -----------------------------------------------------------------------
    let client = ClientBuilder::from_env().build()?;

    // -----------------------------------------------------------------------
    // 2. Check storage usage
    // -----------------------------------------------------------------------
    let storage = client.storage().get().await?;
    println!("Storage: {} / {} bytes", storage.used, storage.limit);
    println!();

    // -----------------------------------------------------------------------
    // 3. Upload a local file
    // -----------------------------------------------------------------------
    let path = std::env::args().nth(1).unwrap_or_else(|| "video.mp4".to_string());
    let object = client
        .objects()
        .create(&ObjectCreateRequest::new(&path))
        .await?;
    println!("Uploaded {} as {}", object.path, object.id);

    // -----------------------------------------------------------------------
    // 4. Encode it with the first available preset
    // -----------------------------------------------------------------------
    let presets = client.transcoder().presets().await?;
    if let Some(preset) = presets.presets.first() {
        let job = client
            .transcoder()
            .create(
                &object.id,
                &TranscoderCreateRequest {
                    presets: vec![preset.id.clone()],
                    ..Default::default()
                },
            )
            .await?;
        println!("Encoding with '{}' as task {}", preset.name, job.task_id);

        let task = client.transcoder_tasks().get(&job.task_id).await?;
        println!("Task status: {} ({})", task.status, task.body);
    }
    println!();

    // -----------------------------------------------------------------------
    // 5. Share it through an endless temporary link
    // -----------------------------------------------------------------------
    let link = client
        .temp()
        .create(&LinkCreateRequest {
            object_id: object.id.clone(),
            endless: true,
            ..Default::default()
        })
        .await?;
    println!("Temporary link: {}", link.href);
    println!();

    // -----------------------------------------------------------------------
    // 6. List the first page of objects in the root folder
    // -----------------------------------------------------------------------
    let params = ObjectsListParams {
        folder: Some("/".into()),
        limit: Some(10),
        ..Default::default()
    };
    for object in client.objects().list(Some(&params)).await? {
        println!("  {} | {} | {}", object.id, object.status, object.path);
    }

    Ok(())
}
