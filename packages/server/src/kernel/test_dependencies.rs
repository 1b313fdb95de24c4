// TestDependencies - mock implementations for testing
//
// Provides mock services that can be injected into ServerDeps for tests.
// Every mock records its calls so tests can assert on what reached the "network".

use anyhow::{anyhow, Result};
use apify_client::InstagramPost;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::{BaseAI, BaseImageDownloader, BaseInstagramScraper, BaseSocialPublisher, ServerDeps};

// =============================================================================
// Mock Instagram Scraper
// =============================================================================

pub struct MockInstagramScraper {
    posts: Mutex<Vec<InstagramPost>>,
    failure: Mutex<Option<String>>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl MockInstagramScraper {
    /// Returns an empty dataset until configured otherwise
    pub fn new() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Queue a dataset item
    pub fn with_item(self, post: InstagramPost) -> Self {
        self.posts.lock().unwrap().push(post);
        self
    }

    /// Queue a fully-populated post
    pub fn with_post(self, caption: &str, likes: i64, comments: i64) -> Self {
        self.with_item(InstagramPost {
            caption: Some(caption.to_string()),
            url: Some("https://www.instagram.com/p/C0ffee/".to_string()),
            display_url: Some("https://cdn.example.org/C0ffee.jpg".to_string()),
            likes_count: Some(likes),
            comments_count: Some(comments),
            timestamp: Some("2024-05-01T12:00:00.000Z".to_string()),
            error: None,
        })
    }

    /// Make every scrape fail with `message`
    pub fn failing(self, message: &str) -> Self {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self
    }

    /// (handle, limit) for every scrape requested
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockInstagramScraper {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseInstagramScraper for MockInstagramScraper {
    async fn latest_posts(&self, handle: &str, limit: u32) -> Result<Vec<InstagramPost>> {
        self.calls.lock().unwrap().push((handle.to_string(), limit));

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(anyhow!(message));
        }
        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().take(limit as usize).cloned().collect())
    }
}

// =============================================================================
// Mock AI
// =============================================================================

/// Arguments captured from a completion call
#[derive(Debug, Clone)]
pub struct CompletionCall {
    pub system_prompt: String,
    pub user_prompt: String,
}

pub struct MockAI {
    response: Mutex<String>,
    failure: Mutex<Option<String>>,
    calls: Mutex<Vec<CompletionCall>>,
}

impl MockAI {
    pub fn new() -> Self {
        Self {
            response: Mutex::new(
                "Fresh from the newsroom: catch up on today's top story.".to_string(),
            ),
            failure: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Set the completion text returned for every call
    pub fn with_response(self, response: &str) -> Self {
        *self.response.lock().unwrap() = response.to_string();
        self
    }

    /// Make every completion fail with `message`
    pub fn failing(self, message: &str) -> Self {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<CompletionCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockAI {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseAI for MockAI {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        self.calls.lock().unwrap().push(CompletionCall {
            system_prompt: system_prompt.to_string(),
            user_prompt: user_prompt.to_string(),
        });

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(anyhow!(message));
        }
        Ok(self.response.lock().unwrap().clone())
    }
}

// =============================================================================
// Mock Image Downloader
// =============================================================================

pub struct MockImageDownloader {
    failure: Mutex<Option<String>>,
    calls: Mutex<Vec<String>>,
}

impl MockImageDownloader {
    /// Serves a few fake JPEG bytes for any URL
    pub fn new() -> Self {
        Self {
            failure: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(self, message: &str) -> Self {
        *self.failure.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockImageDownloader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseImageDownloader for MockImageDownloader {
    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        self.calls.lock().unwrap().push(url.to_string());

        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(anyhow!(message));
        }
        Ok(vec![0xFF, 0xD8, 0xFF, 0xE0])
    }
}

// =============================================================================
// Mock Social Publisher
// =============================================================================

/// A post as the platform received it
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedPost {
    pub text: String,
    pub media_ids: Vec<String>,
}

pub struct MockSocialPublisher {
    post_id: String,
    upload_failure: Mutex<Option<String>>,
    create_failure: Mutex<Option<String>>,
    uploads: Mutex<Vec<usize>>,
    posts: Mutex<Vec<CreatedPost>>,
}

impl MockSocialPublisher {
    pub fn new() -> Self {
        Self {
            post_id: "1790000000000000000".to_string(),
            upload_failure: Mutex::new(None),
            create_failure: Mutex::new(None),
            uploads: Mutex::new(Vec::new()),
            posts: Mutex::new(Vec::new()),
        }
    }

    pub fn with_post_id(mut self, post_id: &str) -> Self {
        self.post_id = post_id.to_string();
        self
    }

    pub fn failing_upload(self, message: &str) -> Self {
        *self.upload_failure.lock().unwrap() = Some(message.to_string());
        self
    }

    pub fn failing_create(self, message: &str) -> Self {
        *self.create_failure.lock().unwrap() = Some(message.to_string());
        self
    }

    /// Byte length of every uploaded media item
    pub fn uploads(&self) -> Vec<usize> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn posts(&self) -> Vec<CreatedPost> {
        self.posts.lock().unwrap().clone()
    }
}

impl Default for MockSocialPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseSocialPublisher for MockSocialPublisher {
    async fn upload_media(&self, bytes: Vec<u8>) -> Result<String> {
        self.uploads.lock().unwrap().push(bytes.len());

        if let Some(message) = self.upload_failure.lock().unwrap().clone() {
            return Err(anyhow!(message));
        }
        Ok(format!("media-{}", self.uploads.lock().unwrap().len()))
    }

    async fn create_post(&self, text: &str, media_ids: &[String]) -> Result<String> {
        if let Some(message) = self.create_failure.lock().unwrap().clone() {
            return Err(anyhow!(message));
        }
        self.posts.lock().unwrap().push(CreatedPost {
            text: text.to_string(),
            media_ids: media_ids.to_vec(),
        });
        Ok(self.post_id.clone())
    }
}

// =============================================================================
// TestDependencies - Builder for test dependencies
// =============================================================================

#[derive(Clone)]
pub struct TestDependencies {
    pub scraper: Arc<MockInstagramScraper>,
    pub ai: Arc<MockAI>,
    pub publisher: Arc<MockSocialPublisher>,
    pub image_downloader: Arc<MockImageDownloader>,
    scraper_configured: bool,
    ai_configured: bool,
    publisher_configured: bool,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            scraper: Arc::new(MockInstagramScraper::new()),
            ai: Arc::new(MockAI::new()),
            publisher: Arc::new(MockSocialPublisher::new()),
            image_downloader: Arc::new(MockImageDownloader::new()),
            scraper_configured: true,
            ai_configured: true,
            publisher_configured: true,
        }
    }

    /// Set a mock scraper
    pub fn mock_scraper(mut self, scraper: MockInstagramScraper) -> Self {
        self.scraper = Arc::new(scraper);
        self
    }

    /// Set a mock AI
    pub fn mock_ai(mut self, ai: MockAI) -> Self {
        self.ai = Arc::new(ai);
        self
    }

    /// Set a mock publisher
    pub fn mock_publisher(mut self, publisher: MockSocialPublisher) -> Self {
        self.publisher = Arc::new(publisher);
        self
    }

    /// Set a mock image downloader
    pub fn mock_downloader(mut self, downloader: MockImageDownloader) -> Self {
        self.image_downloader = Arc::new(downloader);
        self
    }

    /// Simulate a missing APIFY_API_KEY
    pub fn without_scraper(mut self) -> Self {
        self.scraper_configured = false;
        self
    }

    /// Simulate a missing GROQ_API_KEY
    pub fn without_ai(mut self) -> Self {
        self.ai_configured = false;
        self
    }

    /// Simulate incomplete X credentials
    pub fn without_publisher(mut self) -> Self {
        self.publisher_configured = false;
        self
    }

    /// Convert to ServerDeps, sharing the mocks so calls stay observable
    pub fn into_server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.scraper_configured
                .then(|| self.scraper.clone() as Arc<dyn BaseInstagramScraper>),
            self.ai_configured.then(|| self.ai.clone() as Arc<dyn BaseAI>),
            self.publisher_configured
                .then(|| self.publisher.clone() as Arc<dyn BaseSocialPublisher>),
            self.image_downloader.clone(),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
