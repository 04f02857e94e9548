//! Mock video catalog
//!
//! There is no search backend. The sidebar shows a fixed list of popular
//! videos, and a search returns the same five ids with titles built from the query.

use crate::core::models::SearchResultItem;

const THUMBNAIL_PARAMS: &str = "?ixlib=rb-4.0.3&auto=format&fit=crop&w=160&h=90";

fn thumbnail(photo: &str) -> String {
    format!("https://images.unsplash.com/{}{}", photo, THUMBNAIL_PARAMS)
}

fn item(
    id: &str,
    title: String,
    channel: &str,
    views: &str,
    time: &str,
    photo: &str,
) -> SearchResultItem {
    SearchResultItem {
        id: id.to_string(),
        title,
        channel: channel.to_string(),
        views: views.to_string(),
        time: time.to_string(),
        thumbnail: thumbnail(photo),
    }
}

/// Default sidebar contents
pub fn popular_videos() -> Vec<SearchResultItem> {
    vec![
        item(
            "dQw4w9WgXcQ",
            "Beautiful Mountain Landscapes 4K".to_string(),
            "Nature Channel",
            "2.1M views",
            "3 days ago",
            "photo-1506905925346-21bda4d32df4",
        ),
        item(
            "9bZkp7q19f0",
            "Tokyo Night Walk - Neon City".to_string(),
            "Urban Explorer",
            "847K views",
            "1 week ago",
            "photo-1514565131-fce0801e5785",
        ),
        item(
            "M7lc1UVf-VE",
            "Relaxing Ocean Sounds - 10 Hours".to_string(),
            "Ambient Sounds",
            "5.2M views",
            "2 months ago",
            "photo-1505142468610-359e7d316be0",
        ),
        item(
            "jNQXAC9IVRw",
            "Ultimate Coding Setup Tour 2024".to_string(),
            "Tech Reviews",
            "1.3M views",
            "5 days ago",
            "photo-1547658719-da2b51169166",
        ),
        item(
            "YQHsXMglC9A",
            "Coffee Shop Jazz - Study Music".to_string(),
            "Chill Music",
            "3.8M views",
            "1 month ago",
            "photo-1453614512568-c4024d13c247",
        ),
    ]
}

/// Canned results for `query`; the query is only used in the titles.
pub fn mock_search_results(query: &str) -> Vec<SearchResultItem> {
    vec![
        item(
            "dQw4w9WgXcQ",
            format!("{} - Complete Tutorial", query),
            "Educational Channel",
            "1.2M views",
            "2 days ago",
            "photo-1516321318423-f06f85e504b3",
        ),
        item(
            "9bZkp7q19f0",
            format!("How to {} - Step by Step", query),
            "How-To Channel",
            "856K views",
            "1 week ago",
            "photo-1514565131-fce0801e5785",
        ),
        item(
            "M7lc1UVf-VE",
            format!("{} Explained Simply", query),
            "Science Channel",
            "2.1M views",
            "3 days ago",
            "photo-1505142468610-359e7d316be0",
        ),
        item(
            "jNQXAC9IVRw",
            format!("Advanced {} Techniques", query),
            "Tech Reviews",
            "1.3M views",
            "5 days ago",
            "photo-1547658719-da2b51169166",
        ),
        item(
            "YQHsXMglC9A",
            format!("{} for Beginners", query),
            "Learning Hub",
            "3.8M views",
            "1 month ago",
            "photo-1453614512568-c4024d13c247",
        ),
    ]
}
