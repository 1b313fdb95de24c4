//! Pure Apify REST API client.
//!
//! Starts actor runs, waits for them to finish, and reads the run's dataset.
//!
//! # Example
//!
//! ```rust,ignore
//! use apify_client::ApifyClient;
//!
//! let client = ApifyClient::new("your-api-token".into());
//!
//! let posts = client.scrape_profile_posts("bbcnews", 1).await?;
//! if let Some(post) = posts.first() {
//!     println!("{}", post.caption.as_deref().unwrap_or("(no caption)"));
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{ApifyError, Result};
pub use types::{InstagramPost, InstagramScraperInput, RunData};

use serde::de::DeserializeOwned;
use serde::Serialize;
use types::ApiResponse;

const BASE_URL: &str = "https://api.apify.com/v2";

/// Actor ID for apify/instagram-scraper (`~` replaces `/` in API paths).
pub const INSTAGRAM_SCRAPER: &str = "apify~instagram-scraper";

/// Seconds the API may hold a run-status request open.
const WAIT_FOR_FINISH_SECS: u32 = 60;

#[derive(Clone)]
pub struct ApifyClient {
    client: reqwest::Client,
    token: String,
    base_url: String,
}

impl ApifyClient {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            base_url: BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Start an actor run. Returns immediately with run metadata.
    pub async fn start_run<I: Serialize + ?Sized>(
        &self,
        actor_id: &str,
        input: &I,
    ) -> Result<RunData> {
        let url = format!("{}/acts/{}/runs", self.base_url, actor_id);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(&self.token)
            .json(input)
            .send()
            .await?;

        let resp = check_status(resp).await?;
        let api_resp: ApiResponse<RunData> = resp.json().await?;
        Ok(api_resp.data)
    }

    /// Block until a run reaches a terminal state, long-polling with `waitForFinish`.
    pub async fn wait_for_run(&self, run_id: &str) -> Result<RunData> {
        loop {
            let url = format!(
                "{}/actor-runs/{}?waitForFinish={}",
                self.base_url, run_id, WAIT_FOR_FINISH_SECS
            );
            let resp = self
                .client
                .get(&url)
                .bearer_auth(&self.token)
                .send()
                .await?;

            let resp = check_status(resp).await?;
            let run = resp.json::<ApiResponse<RunData>>().await?.data;

            if !run.is_terminal() {
                tracing::debug!(run_id, status = %run.status, "Run still in progress");
                continue;
            }
            if run.status == "SUCCEEDED" {
                return Ok(run);
            }
            return Err(ApifyError::RunFailed(run.status));
        }
    }

    /// Fetch dataset items from a completed run.
    pub async fn get_dataset_items<T: DeserializeOwned>(
        &self,
        dataset_id: &str,
    ) -> Result<Vec<T>> {
        let url = format!(
            "{}/datasets/{}/items?format=json&clean=true",
            self.base_url, dataset_id
        );
        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        let resp = check_status(resp).await?;
        let items: Vec<T> = resp.json().await?;
        Ok(items)
    }

    /// Scrape the most recent posts of a profile end-to-end: start run, wait, fetch results.
    pub async fn scrape_profile_posts(
        &self,
        handle: &str,
        limit: u32,
    ) -> Result<Vec<InstagramPost>> {
        tracing::info!(handle, limit, "Starting Instagram profile scrape");

        let input = InstagramScraperInput::profile_posts(handle, limit);
        let run = self.start_run(INSTAGRAM_SCRAPER, &input).await?;
        tracing::info!(run_id = %run.id, "Apify run started, waiting for completion");

        let completed = self.wait_for_run(&run.id).await?;
        tracing::info!(
            run_id = %completed.id,
            dataset_id = %completed.default_dataset_id,
            duration_secs = completed.duration().map(|d| d.num_seconds()),
            "Run completed, fetching results"
        );

        let posts: Vec<InstagramPost> =
            self.get_dataset_items(&completed.default_dataset_id).await?;
        tracing::info!(count = posts.len(), "Fetched Instagram posts");

        Ok(posts)
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApifyError::Api {
        status: status.as_u16(),
        message: body,
    })
}
