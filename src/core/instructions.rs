//! Download-instructions generator
//!
//! No video is ever downloaded. Instead the user receives a plain-text file
//! listing lawful ways to obtain the video in the requested format.

use bytes::Bytes;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::path::PathBuf;
use tracing::{error, info};

use crate::core::models::{
    AppResult, DownloadFormat, DownloadProgress, DownloadRequest, DownloadStatus, VideoInfo,
    VideoReference,
};
use crate::core::sink::InstructionSink;
use crate::utils::file_utils::slugify_title;

/// Timestamp layout matching the `ja-JP` locale (`2024/1/5 9:04:05`)
const JA_TIMESTAMP_FORMAT: &str = "%Y/%-m/%-d %-H:%M:%S";

/// Render the advisory text for one video.
pub fn generate<Tz>(
    video: &VideoReference,
    title: &str,
    format: DownloadFormat,
    generated_at: &DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let watch_url = video.watch_url();
    let audio = format.is_audio();
    let pick = |audio_text: &'static str, video_text: &'static str| {
        if audio {
            audio_text
        } else {
            video_text
        }
    };

    let steps = pick(
        "1. 動画をダウンロード後、音声を抽出\n\
         2. FFmpeg, Audacity等で変換\n\
         3. ビットレート: 128kbps-320kbps推奨",
        "1. 希望の画質を選択 (480p, 720p, 1080p)\n\
         2. ダウンロード先フォルダを指定\n\
         3. 完了まで待機",
    );

    format!(
        "YouTube{kind}ダウンロード手順 - {title}
======================================

動画URL: {watch_url}
動画ID: {video_id}
希望形式: {format_upper}

合法的なダウンロード方法:
----------------------

1. YouTube Premium (推奨)
   - 公式のオフライン視聴機能
   - {premium}
   - 著作権を完全に遵守

2. 著作権フリーコンテンツの場合
   - YouTube Creator Studioからダウンロード
   - 自分がアップロードしたコンテンツのみ
   - {studio}

3. サードパーティツール（注意が必要）
   - yt-dlp (オープンソース、コマンドライン)
   - 4K Video Downloader (デスクトップアプリ)
   - {tool}
   ⚠️ 使用前に著作権を確認してください

4. ブラウザ拡張機能
   - Video DownloadHelper
   - {extension}
   ⚠️ 信頼できるソースからのみインストール

{steps_title}
{steps_rule}
{steps}

注意事項:
--------
- 著作権で保護されたコンテンツの無断ダウンロードは違法です
- YouTubeの利用規約を必ずお読みください
- 個人利用のみに留めてください
- このアプリはプライバシー保護視聴を目的としています

プライバシー保護視聴:
------------------
このアプリでは youtube-nocookie.com を使用して
追跡なしで動画を視聴できます。

生成日時: {timestamp}
URLPlayer - プライベート動画視聴アプリ",
        kind = pick("音声", "動画"),
        title = title,
        watch_url = watch_url,
        video_id = video.as_str(),
        format_upper = format.as_str().to_uppercase(),
        premium = pick("音楽アプリで音声再生可能", "高画質でダウンロード可能"),
        studio = pick("YouTube Musicでの音楽ダウンロード", "動画の直接ダウンロード"),
        tool = pick("Any Video Converter (音声抽出機能)", "ClipGrab (動画ダウンロード)"),
        extension = pick("Audio Downloader", "SaveFrom.net Helper"),
        steps_title = pick("MP3変換手順:", "MP4ダウンロード手順:"),
        steps_rule = pick("---------------", "------------------"),
        steps = steps,
        timestamp = generated_at.format(JA_TIMESTAMP_FORMAT),
    )
}

/// Suggested filename: `<slug>_<format>_download_instructions.txt`
pub fn instructions_filename(title: &str, format: DownloadFormat) -> String {
    format!(
        "{}_{}_download_instructions.txt",
        slugify_title(title),
        format.as_str()
    )
}

/// Produces instruction files and placeholder video info.
///
/// Stateless; construct one wherever it is needed.
#[derive(Debug, Clone, Copy, Default)]
pub struct VideoDownloader;

impl VideoDownloader {
    pub fn new() -> Self {
        Self
    }

    /// Generate the instructions for `request` and hand them to `sink`.
    ///
    /// Progress goes `preparing 0` → `downloading 50` → `completed 100`; a sink
    /// failure is reported as `error` and returned.
    pub async fn download_instructions<S, F>(
        &self,
        request: &DownloadRequest,
        sink: &S,
        mut on_progress: F,
    ) -> AppResult<PathBuf>
    where
        S: InstructionSink + ?Sized,
        F: FnMut(DownloadProgress) + Send,
    {
        on_progress(DownloadProgress::new(0, DownloadStatus::Preparing));

        let text = generate(
            &request.video_id,
            &request.title,
            request.format,
            &Local::now(),
        );
        let filename = instructions_filename(&request.title, request.format);

        on_progress(DownloadProgress::new(50, DownloadStatus::Downloading));

        match sink.save(&filename, Bytes::from(text)).await {
            Ok(path) => {
                info!(
                    "📋 Download instructions for {} ({}, {}) saved as {}",
                    request.video_id,
                    request.format,
                    request.quality.resolution_label(),
                    filename
                );
                on_progress(DownloadProgress::new(100, DownloadStatus::Completed));
                Ok(path)
            }
            Err(e) => {
                error!("❌ Failed to save download instructions: {}", e);
                on_progress(DownloadProgress::failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Placeholder metadata; no data API is consulted.
    pub fn video_info(&self, _video_id: &str) -> VideoInfo {
        VideoInfo::default()
    }
}
