//! Player command handlers
//!
//! Event handling behind the search box, the URL box and the sidebar list.
//! Both boxes accept pasted URLs; only the search box falls back to a search.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::catalog::{mock_search_results, popular_videos};
use crate::core::embed::EmbedUrlBuilder;
use crate::core::models::{
    AppError, AppResult, SearchResultItem, VideoReference, DEFAULT_VIDEO_TITLE,
};
use crate::core::resolver::resolve;

/// The video currently in the player
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadedVideo {
    pub reference: VideoReference,
    pub title: String,
    pub embed_url: String,
}

/// What a search-box submission turned into
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Blank input, nothing happened
    Ignored,
    /// The input was a video URL and is now playing
    Loaded(LoadedVideo),
    /// The input was a query; the result list was replaced
    Results(Vec<SearchResultItem>),
}

/// Player state for one viewer
#[derive(Debug, Clone)]
pub struct PlayerSession {
    builder: EmbedUrlBuilder,
    autoplay: bool,
    current: Option<LoadedVideo>,
    results: Vec<SearchResultItem>,
    is_search_results: bool,
}

impl PlayerSession {
    pub fn new(builder: EmbedUrlBuilder, autoplay: bool) -> Self {
        Self {
            builder,
            autoplay,
            current: None,
            results: popular_videos(),
            is_search_results: false,
        }
    }

    pub fn current(&self) -> Option<&LoadedVideo> {
        self.current.as_ref()
    }

    pub fn results(&self) -> &[SearchResultItem] {
        &self.results
    }

    pub fn is_search_results(&self) -> bool {
        self.is_search_results
    }

    /// Sidebar heading for the current result list
    pub fn results_heading(&self) -> &'static str {
        if self.is_search_results {
            "Search Results"
        } else {
            "Popular Videos"
        }
    }

    /// Handle a search-box submission.
    pub fn submit_search(&mut self, input: &str) -> SearchOutcome {
        let query = input.trim();
        if query.is_empty() {
            return SearchOutcome::Ignored;
        }

        if let Some(reference) = resolve(query) {
            debug!("Search input is a video reference: {}", reference);
            return SearchOutcome::Loaded(self.load(reference, None));
        }

        info!("🔍 Searching for: {}", query);
        self.results = mock_search_results(query);
        self.is_search_results = true;
        SearchOutcome::Results(self.results.clone())
    }

    /// Handle a URL-box submission.
    pub fn load_url(&mut self, input: &str) -> AppResult<LoadedVideo> {
        let url = input.trim();
        if url.is_empty() {
            return Err(AppError::MissingRequiredField("url"));
        }

        let reference = resolve(url).ok_or_else(|| {
            warn!("Rejected URL input: {}", url);
            AppError::NotAVideoReference(url.to_string())
        })?;

        Ok(self.load(reference, None))
    }

    /// Handle a click on a sidebar entry.
    pub fn select_video(&mut self, id: &str, title: &str) -> AppResult<LoadedVideo> {
        let reference = VideoReference::from_bare_id(id)?;
        Ok(self.load(reference, Some(title)))
    }

    /// Embed URL of the video in the player, if any
    pub fn embed_url(&self) -> Option<&str> {
        self.current.as_ref().map(|video| video.embed_url.as_str())
    }

    fn load(&mut self, reference: VideoReference, title: Option<&str>) -> LoadedVideo {
        let title = match title {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => DEFAULT_VIDEO_TITLE.to_string(),
        };
        let embed_url = self.builder.embed_url(&reference, self.autoplay);

        info!("▶️ Loading video {} ({})", reference, title);
        let video = LoadedVideo {
            reference,
            title,
            embed_url,
        };
        self.current = Some(video.clone());
        video
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> PlayerSession {
        PlayerSession::new(EmbedUrlBuilder::new("https://app.example"), true)
    }

    #[test]
    fn test_initial_state() {
        let session = session();
        assert!(session.current().is_none());
        assert!(session.embed_url().is_none());
        assert_eq!(session.results().len(), 5);
        assert_eq!(session.results_heading(), "Popular Videos");
    }

    #[test]
    fn test_search_with_url_loads_video() {
        let mut session = session();
        let outcome = session.submit_search("  https://youtu.be/dQw4w9WgXcQ  ");

        match outcome {
            SearchOutcome::Loaded(video) => {
                assert_eq!(video.reference.as_str(), "dQw4w9WgXcQ");
                assert_eq!(video.title, DEFAULT_VIDEO_TITLE);
                assert!(video.embed_url.contains("autoplay=1"));
            }
            other => panic!("expected a loaded video, got {:?}", other),
        }
        // Results are left alone.
        assert!(!session.is_search_results());
    }

    #[test]
    fn test_search_with_text_replaces_results() {
        let mut session = session();
        let outcome = session.submit_search("bread");

        assert!(matches!(outcome, SearchOutcome::Results(ref r) if r.len() == 5));
        assert!(session.is_search_results());
        assert_eq!(session.results_heading(), "Search Results");
        assert_eq!(session.results()[0].title, "bread - Complete Tutorial");
        assert!(session.current().is_none());
    }

    #[test]
    fn test_blank_search_is_ignored() {
        let mut session = session();
        assert_eq!(session.submit_search("   "), SearchOutcome::Ignored);
        assert!(!session.is_search_results());
    }

    #[test]
    fn test_load_url_errors() {
        let mut session = session();
        assert!(matches!(
            session.load_url(" "),
            Err(AppError::MissingRequiredField("url"))
        ));
        assert!(matches!(
            session.load_url("https://www.youtube.com/watch?v=short"),
            Err(AppError::NotAVideoReference(_))
        ));
        assert!(session.current().is_none());
    }

    #[test]
    fn test_load_url_success() {
        let mut session = session();
        let video = session
            .load_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .unwrap();

        assert_eq!(session.embed_url(), Some(video.embed_url.as_str()));
        assert!(video
            .embed_url
            .starts_with("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ?autoplay=1&"));
    }

    #[test]
    fn test_select_video_keeps_title() {
        let mut session = PlayerSession::new(EmbedUrlBuilder::new("https://app.example"), false);
        let video = session
            .select_video("9bZkp7q19f0", "Tokyo Night Walk - Neon City")
            .unwrap();

        assert_eq!(video.title, "Tokyo Night Walk - Neon City");
        assert!(video.embed_url.contains("autoplay=0"));
        assert!(session.select_video("bad", "x").is_err());
    }
}
