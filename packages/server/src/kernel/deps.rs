//! Server dependencies (using traits for testability)
//!
//! Every vendor client is wrapped in an adapter implementing a `Base*` trait,
//! so domain code never touches a concrete SDK and tests swap in mocks.

use anyhow::{Context, Result};
use apify_client::{ApifyClient, InstagramPost};
use async_trait::async_trait;
use llm_client::{ChatRequest, LlmClient, Message};
use std::sync::Arc;
use twitter_client::TwitterClient;

use crate::config::Config;
use crate::kernel::{BaseAI, BaseImageDownloader, BaseInstagramScraper, BaseSocialPublisher};

// =============================================================================
// Adapters (implement Base* traits over the vendor clients)
// =============================================================================

pub struct ApifyAdapter(pub Arc<ApifyClient>);

#[async_trait]
impl BaseInstagramScraper for ApifyAdapter {
    async fn latest_posts(&self, handle: &str, limit: u32) -> Result<Vec<InstagramPost>> {
        Ok(self.0.scrape_profile_posts(handle, limit).await?)
    }
}

pub struct LlmAdapter {
    client: Arc<LlmClient>,
    model: String,
}

impl LlmAdapter {
    pub fn new(client: Arc<LlmClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

#[async_trait]
impl BaseAI for LlmAdapter {
    async fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        let request = ChatRequest::new(&self.model)
            .message(Message::system(system_prompt))
            .message(Message::user(user_prompt));

        let response = self.client.chat_completion(request).await?;
        Ok(response.content)
    }
}

pub struct TwitterAdapter(pub Arc<TwitterClient>);

#[async_trait]
impl BaseSocialPublisher for TwitterAdapter {
    async fn upload_media(&self, bytes: Vec<u8>) -> Result<String> {
        Ok(self.0.upload_media(bytes, "image.jpg").await?)
    }

    async fn create_post(&self, text: &str, media_ids: &[String]) -> Result<String> {
        let tweet = self.0.create_tweet(text, media_ids).await?;
        Ok(tweet.id)
    }
}

pub struct HttpImageDownloader {
    client: reqwest::Client,
}

impl HttpImageDownloader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpImageDownloader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseImageDownloader for HttpImageDownloader {
    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        let bytes = self
            .client
            .get(url)
            .send()
            .await
            .context("image request failed")?
            .error_for_status()?
            .bytes()
            .await
            .context("failed to read image body")?;
        Ok(bytes.to_vec())
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Dependencies shared read-only by every request.
///
/// A `None` client means its credentials were not configured; the component
/// that needs it short-circuits instead of calling out.
#[derive(Clone)]
pub struct ServerDeps {
    pub scraper: Option<Arc<dyn BaseInstagramScraper>>,
    pub ai: Option<Arc<dyn BaseAI>>,
    pub publisher: Option<Arc<dyn BaseSocialPublisher>>,
    pub image_downloader: Arc<dyn BaseImageDownloader>,
}

impl ServerDeps {
    pub fn new(
        scraper: Option<Arc<dyn BaseInstagramScraper>>,
        ai: Option<Arc<dyn BaseAI>>,
        publisher: Option<Arc<dyn BaseSocialPublisher>>,
        image_downloader: Arc<dyn BaseImageDownloader>,
    ) -> Self {
        Self {
            scraper,
            ai,
            publisher,
            image_downloader,
        }
    }

    /// Construct the real vendor clients for whichever credentials are present.
    pub fn from_config(config: &Config) -> Self {
        let scraper = config.apify_api_key.clone().map(|key| {
            Arc::new(ApifyAdapter(Arc::new(ApifyClient::new(key)))) as Arc<dyn BaseInstagramScraper>
        });
        if scraper.is_none() {
            tracing::warn!("APIFY_API_KEY not set; Instagram fetching disabled");
        }

        let ai = config.groq_api_key.clone().map(|key| {
            let mut client = LlmClient::new(key);
            if let Some(url) = &config.llm_base_url {
                client = client.with_base_url(url.clone());
            }
            Arc::new(LlmAdapter::new(Arc::new(client), config.llm_model.clone())) as Arc<dyn BaseAI>
        });
        if ai.is_none() {
            tracing::warn!("GROQ_API_KEY not set; message generation disabled");
        }

        let publisher = config.twitter_credentials().map(|creds| {
            Arc::new(TwitterAdapter(Arc::new(TwitterClient::new(creds))))
                as Arc<dyn BaseSocialPublisher>
        });
        match &publisher {
            Some(_) => tracing::info!("X API client initialized"),
            None => tracing::error!("X API credentials are not properly configured"),
        }

        Self::new(scraper, ai, publisher, Arc::new(HttpImageDownloader::new()))
    }
}
