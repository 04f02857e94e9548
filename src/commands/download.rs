//! Download commands
//!
//! Real downloads are refused. Users get an instructions file instead.

use std::path::PathBuf;
use tracing::{error, info, warn};

use crate::core::instructions::VideoDownloader;
use crate::core::models::{
    AppError, AppResult, DownloadFormat, DownloadProgress, DownloadRequest, VideoQuality,
    VideoReference, DEFAULT_VIDEO_TITLE,
};
use crate::core::resolver::resolve;
use crate::core::sink::InstructionSink;

/// Message returned when a direct download is requested
pub const DOWNLOAD_REFUSAL: &str = "Direct video download requires YouTube Premium or proper \
    API licensing. This feature is currently not available for copyright compliance reasons.";

/// Alternative offered alongside [`DOWNLOAD_REFUSAL`]
pub const DOWNLOAD_SUGGESTION: &str =
    "Please use YouTube Premium or other authorized services for downloading videos.";

/// Turn user input (URL or bare id) into a download request.
pub fn build_download_request(
    input: &str,
    title: Option<&str>,
    quality: VideoQuality,
    format: DownloadFormat,
) -> AppResult<DownloadRequest> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AppError::MissingRequiredField("videoId"));
    }

    let video_id = match resolve(input) {
        Some(reference) => reference,
        None => VideoReference::from_bare_id(input)?,
    };

    Ok(DownloadRequest {
        video_id,
        title: title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(DEFAULT_VIDEO_TITLE)
            .to_string(),
        quality,
        format,
    })
}

/// Generate the instructions file for `request` and store it in `sink`.
pub async fn save_download_instructions<S, F>(
    request: &DownloadRequest,
    sink: &S,
    on_progress: F,
) -> AppResult<PathBuf>
where
    S: InstructionSink + ?Sized,
    F: FnMut(DownloadProgress) + Send,
{
    info!(
        "📋 Preparing download instructions for {} as {}",
        request.video_id, request.format
    );

    match VideoDownloader::new()
        .download_instructions(request, sink, on_progress)
        .await
    {
        Ok(path) => {
            info!("✅ Instructions ready: {:?}", path);
            Ok(path)
        }
        Err(e) => {
            error!("❌ Failed to prepare instructions: {}", e);
            Err(e)
        }
    }
}

/// Server-side download request; always refused once a video id is present.
pub fn request_direct_download(video_id: Option<&str>) -> AppResult<()> {
    match video_id {
        Some(id) if !id.is_empty() => {
            warn!("🚫 Refusing direct download for video {}", id);
            Err(AppError::DownloadNotSupported)
        }
        _ => Err(AppError::MissingRequiredField("videoId")),
    }
}
