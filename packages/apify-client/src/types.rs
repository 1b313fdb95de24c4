use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Input for the apify/instagram-scraper actor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramScraperInput {
    pub direct_urls: Vec<String>,
    /// "posts", "comments", "details", ...
    pub results_type: String,
    pub results_limit: u32,
    pub add_parent_data: bool,
}

impl InstagramScraperInput {
    /// Latest `limit` posts from a profile page.
    pub fn profile_posts(handle: &str, limit: u32) -> Self {
        Self {
            direct_urls: vec![profile_url(handle)],
            results_type: "posts".to_string(),
            results_limit: limit,
            add_parent_data: false,
        }
    }
}

pub fn profile_url(handle: &str) -> String {
    format!("https://www.instagram.com/{}/", handle.trim_start_matches('@'))
}

/// A single Instagram post from the Apify dataset.
///
/// Every field is optional: the scraper omits keys it could not read, and
/// error rows (private or missing profiles) carry only `error`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstagramPost {
    pub caption: Option<String>,
    pub url: Option<String>,
    pub display_url: Option<String>,
    pub likes_count: Option<i64>,
    pub comments_count: Option<i64>,
    /// Raw ISO-8601 string as emitted by the scraper.
    pub timestamp: Option<String>,
    pub error: Option<String>,
}

/// Wrapper for Apify API responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

/// Apify actor run metadata.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunData {
    pub id: String,
    pub status: String,
    pub default_dataset_id: String,
    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl RunData {
    /// Wall-clock run time, once the run has finished.
    pub fn duration(&self) -> Option<chrono::Duration> {
        Some(self.finished_at? - self.started_at?)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status.as_str(),
            "SUCCEEDED" | "FAILED" | "ABORTED" | "TIMED-OUT"
        )
    }
}
