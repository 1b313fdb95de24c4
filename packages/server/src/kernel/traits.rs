// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (building prompts, enforcing length, mapping posts) lives in
// domain functions that use these traits.
//
// Naming convention: Base* for trait names (e.g., BaseAI, BaseSocialPublisher)

use anyhow::Result;
use apify_client::InstagramPost;
use async_trait::async_trait;

// =============================================================================
// Scraper Trait (Infrastructure - remote job runner)
// =============================================================================

#[async_trait]
pub trait BaseInstagramScraper: Send + Sync {
    /// Run one scrape job for a profile and return the dataset items, newest first.
    /// Blocks until the job finishes.
    async fn latest_posts(&self, handle: &str, limit: u32) -> Result<Vec<InstagramPost>>;
}

// =============================================================================
// AI Trait (Infrastructure - text completion)
// =============================================================================

#[async_trait]
pub trait BaseAI: Send + Sync {
    /// Single chat turn: system message + user message, returns the raw completion text
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}

// =============================================================================
// Image Download Trait (Infrastructure - plain HTTP GET)
// =============================================================================

#[async_trait]
pub trait BaseImageDownloader: Send + Sync {
    /// Fetch raw bytes. Non-success statuses are errors.
    async fn download(&self, url: &str) -> Result<Vec<u8>>;
}

// =============================================================================
// Social Publisher Trait (Infrastructure - posting platform)
// =============================================================================

#[async_trait]
pub trait BaseSocialPublisher: Send + Sync {
    /// Upload image bytes, returning the platform's media id
    async fn upload_media(&self, bytes: Vec<u8>) -> Result<String>;

    /// Create a post (with media when `media_ids` is non-empty), returning the post id
    async fn create_post(&self, text: &str, media_ids: &[String]) -> Result<String>;
}
