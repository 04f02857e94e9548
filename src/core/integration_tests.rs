//! 集成测试模块
//! 测试核心模块之间的交互和完整工作流程

#[cfg(test)]
mod tests {
    use crate::commands::download::{build_download_request, save_download_instructions};
    use crate::core::{
        config::AppConfig,
        models::{AppError, DownloadFormat, DownloadStatus, VideoQuality},
        sink::{DirectorySink, MemorySink},
    };
    use crate::commands::SearchOutcome;
    use crate::AppState;
    use tempfile::TempDir;

    /// 创建测试用的应用状态
    fn create_test_state(output_directory: &str) -> AppState {
        let mut config = AppConfig::default();
        config.server.public_origin = "https://player.example".to_string();
        config.player.autoplay = true;
        config.download.output_directory = output_directory.to_string();
        AppState::new(config)
    }

    #[test]
    fn test_search_then_select_workflow() {
        let state = create_test_state("downloads");
        let mut session = state.player_session();

        // 初始为热门视频列表
        assert_eq!(session.results_heading(), "Popular Videos");
        assert_eq!(session.results().len(), 5);
        assert!(session.current().is_none());

        // 1. 普通查询替换结果列表
        match session.submit_search("rust") {
            SearchOutcome::Results(items) => {
                assert_eq!(items.len(), 5);
                assert_eq!(items[0].title, "rust - Complete Tutorial");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(session.is_search_results());
        assert_eq!(session.results_heading(), "Search Results");

        // 2. 点击结果加载播放器
        let first = session.results()[1].clone();
        let video = session.select_video(&first.id, &first.title).unwrap();
        assert_eq!(video.title, "How to rust - Step by Step");
        assert_eq!(session.embed_url(), Some(video.embed_url.as_str()));
        assert!(video.embed_url.contains("/embed/9bZkp7q19f0?autoplay=1&"));
        assert!(video
            .embed_url
            .contains("origin=https%3A%2F%2Fplayer.example"));

        // 3. 搜索框粘贴链接直接播放，结果列表保持不变
        match session.submit_search("  https://youtu.be/dQw4w9WgXcQ  ") {
            SearchOutcome::Loaded(video) => {
                assert_eq!(video.reference.as_str(), "dQw4w9WgXcQ");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
        assert!(session.is_search_results());
    }

    #[test]
    fn test_url_box_rejection_keeps_current_video() {
        let state = create_test_state("downloads");
        let mut session = state.player_session();

        session
            .load_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .unwrap();
        let before = session.embed_url().map(str::to_string);

        let err = session
            .load_url("https://www.youtube.com/watch?v=short")
            .unwrap_err();
        assert!(matches!(err, AppError::NotAVideoReference(_)));
        assert_eq!(session.embed_url().map(str::to_string), before);
    }

    #[tokio::test]
    async fn test_instructions_to_memory_sink() {
        let request = build_download_request(
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s",
            Some("Never Gonna Give You Up"),
            VideoQuality::Medium,
            DownloadFormat::Mp3,
        )
        .unwrap();

        let sink = MemorySink::new();
        let mut statuses = Vec::new();
        let path = save_download_instructions(&request, &sink, |p| statuses.push(p.status))
            .await
            .unwrap();

        let filename = "never-gonna-give-you-up_mp3_download_instructions.txt";
        assert_eq!(path.to_string_lossy(), filename);
        assert_eq!(sink.filenames(), vec![filename.to_string()]);
        assert_eq!(
            statuses,
            vec![
                DownloadStatus::Preparing,
                DownloadStatus::Downloading,
                DownloadStatus::Completed
            ]
        );

        let contents = sink.get(filename).unwrap();
        let text = std::str::from_utf8(&contents).unwrap();
        assert!(text.contains("動画ID: dQw4w9WgXcQ"));
        assert!(text.contains("希望形式: MP3"));
        assert!(text.contains("MP3変換手順:"));
    }

    #[tokio::test]
    async fn test_instructions_to_configured_directory() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("nested").join("downloads");
        let state = create_test_state(&output.to_string_lossy());

        let request = build_download_request(
            "jNQXAC9IVRw",
            None,
            state.config.download.default_quality,
            state.config.download.default_format,
        )
        .unwrap();
        let sink = DirectorySink::new(&state.config.download.output_directory);

        let path = save_download_instructions(&request, &sink, |_| {})
            .await
            .unwrap();

        assert!(path.starts_with(&output));
        assert!(path.exists());
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("YouTube動画ダウンロード手順 - YouTube Video"));
        assert!(text.contains("https://www.youtube.com/watch?v=jNQXAC9IVRw"));
    }

    #[test]
    fn test_config_file_drives_state() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let mut config = AppConfig::default();
        config.server.public_origin = "http://localhost:8080/app".to_string();
        config.player.autoplay = false;
        config.save_to(&config_path).unwrap();

        let loaded = AppConfig::load_from(&config_path, "URLPLAYER_ITEST_STATE").unwrap();
        let state = AppState::new(loaded);
        assert_eq!(state.embed.origin(), "http://localhost:8080");

        let mut session = state.player_session();
        let video = session.load_url("https://youtu.be/M7lc1UVf-VE").unwrap();
        assert!(video.embed_url.contains("autoplay=0"));
    }
}
