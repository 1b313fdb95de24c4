use std::sync::Arc;
use tracing::{info, warn};

use crate::domains::instagram::{fetch_latest_post, FetchError};
use crate::domains::message::generate_message;
use crate::domains::publishing::{PublishResult, Publisher};
use crate::domains::relay::models::{AnalyzedPost, AutoPostResult, SourcePost};
use crate::kernel::ServerDeps;

/// Orchestrates the three pipeline steps. Built once at startup and shared
/// read-only across requests; each call runs its steps strictly in sequence.
#[derive(Clone)]
pub struct Relay {
    deps: Arc<ServerDeps>,
    publisher: Publisher,
    default_handle: String,
}

impl Relay {
    pub fn new(deps: Arc<ServerDeps>, default_handle: impl Into<String>) -> Self {
        let publisher = Publisher::from_deps(&deps);
        Self {
            deps,
            publisher,
            default_handle: default_handle.into(),
        }
    }

    pub fn deps(&self) -> &ServerDeps {
        &self.deps
    }

    pub fn default_handle(&self) -> &str {
        &self.default_handle
    }

    /// Caller's handle without a leading `@`, or the configured default when blank.
    pub fn resolve_handle(&self, handle: Option<&str>) -> String {
        handle
            .map(|h| h.trim().trim_start_matches('@'))
            .filter(|h| !h.is_empty())
            .unwrap_or(self.default_handle.as_str())
            .to_string()
    }

    /// Fetch the latest post and attach a generated message.
    pub async fn analyze_latest(&self, handle: Option<&str>) -> Result<AnalyzedPost, FetchError> {
        let handle = self.resolve_handle(handle);
        let post = fetch_latest_post(&handle, &self.deps).await?;

        let (analysis, analysis_failed) = match generate_message(Some(&post), &self.deps).await {
            Ok(message) => (message, false),
            Err(e) => (e.to_string(), true),
        };

        Ok(AnalyzedPost {
            post,
            analysis,
            analysis_failed,
        })
    }

    /// Publish caller-supplied content.
    pub async fn publish(&self, content: &str, image_url: Option<&str>) -> PublishResult {
        self.publisher.publish(content, image_url).await
    }

    /// Full pipeline. Fails only when the fetch fails; publish failures are
    /// reported inside the result.
    pub async fn auto_post(&self, handle: Option<&str>) -> Result<AutoPostResult, FetchError> {
        let handle = self.resolve_handle(handle);
        let post = fetch_latest_post(&handle, &self.deps).await?;

        let (generated_tweet, twitter) = match generate_message(Some(&post), &self.deps).await {
            Ok(message) => {
                let outcome = self.publisher.publish(&message, post.image()).await;
                (message, outcome)
            }
            Err(e) => {
                warn!(handle = %handle, error = %e, "Not publishing: message generation failed");
                let text = e.to_string();
                (text.clone(), PublishResult::failed(text))
            }
        };

        info!(
            handle = %handle,
            published = twitter.ok,
            post_id = twitter.post_id.as_deref().unwrap_or(""),
            "Auto-post finished"
        );

        Ok(AutoPostResult {
            instagram: SourcePost {
                username: handle,
                caption: post.caption,
                image_url: post.image_url,
            },
            twitter,
            generated_tweet,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::{MockAI, MockInstagramScraper, MockSocialPublisher};
    use crate::kernel::TestDependencies;

    fn relay(test_deps: &TestDependencies) -> Relay {
        Relay::new(Arc::new(test_deps.into_server_deps()), "bbcnews")
    }

    #[test]
    fn test_resolve_handle() {
        let relay = relay(&TestDependencies::new());

        assert_eq!(relay.resolve_handle(None), "bbcnews");
        assert_eq!(relay.resolve_handle(Some("  ")), "bbcnews");
        assert_eq!(relay.resolve_handle(Some("@natgeo")), "natgeo");
    }

    #[tokio::test]
    async fn test_analyze_latest_uses_default_handle() {
        let test_deps = TestDependencies::new()
            .mock_scraper(MockInstagramScraper::new().with_post("Hello", 10, 2))
            .mock_ai(MockAI::new().with_response("Hello, world"));

        let analyzed = relay(&test_deps).analyze_latest(None).await.unwrap();

        assert_eq!(analyzed.post.caption, "Hello");
        assert_eq!(analyzed.analysis, "Hello, world");
        assert!(!analyzed.analysis_failed);
        assert_eq!(test_deps.scraper.calls()[0].0, "bbcnews");
    }

    #[tokio::test]
    async fn test_analyze_latest_flags_generation_failure() {
        let test_deps = TestDependencies::new()
            .mock_scraper(MockInstagramScraper::new().with_post("Hello", 10, 2))
            .mock_ai(MockAI::new().failing("model overloaded"));

        let analyzed = relay(&test_deps).analyze_latest(Some("bbcnews")).await.unwrap();

        assert!(analyzed.analysis_failed);
        assert_eq!(analyzed.analysis, "Error during analysis: model overloaded");
    }

    #[tokio::test]
    async fn test_auto_post_publishes_generated_text_with_image() {
        let test_deps = TestDependencies::new()
            .mock_scraper(MockInstagramScraper::new().with_post("Hello", 10, 2))
            .mock_ai(MockAI::new().with_response("Tweet text"));

        let result = relay(&test_deps).auto_post(Some("bbcnews")).await.unwrap();

        assert!(result.twitter.ok);
        assert_eq!(result.generated_tweet, "Tweet text");
        assert_eq!(result.instagram.username, "bbcnews");
        assert_eq!(
            test_deps.image_downloader.calls(),
            vec!["https://cdn.example.org/C0ffee.jpg".to_string()]
        );
        let posts = test_deps.publisher.posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].text, "Tweet text");
        assert_eq!(posts[0].media_ids.len(), 1);
    }

    #[tokio::test]
    async fn test_auto_post_reports_publish_failure_inline() {
        let test_deps = TestDependencies::new()
            .mock_scraper(MockInstagramScraper::new().with_post("Hello", 10, 2))
            .mock_publisher(MockSocialPublisher::new().failing_create("403 Forbidden"));

        let result = relay(&test_deps).auto_post(None).await.unwrap();

        assert!(!result.twitter.ok);
        assert_eq!(result.twitter.error_message.as_deref(), Some("403 Forbidden"));
        assert!(!result.generated_tweet.is_empty());
    }

    #[tokio::test]
    async fn test_auto_post_never_publishes_generation_error() {
        let test_deps = TestDependencies::new()
            .mock_scraper(MockInstagramScraper::new().with_post("Hello", 10, 2))
            .mock_ai(MockAI::new().failing("invalid api key"));

        let result = relay(&test_deps).auto_post(None).await.unwrap();

        assert!(!result.twitter.ok);
        assert_eq!(result.generated_tweet, "Error during analysis: invalid api key");
        assert!(test_deps.publisher.posts().is_empty());
    }

    #[tokio::test]
    async fn test_auto_post_fetch_failure_is_error() {
        let test_deps = TestDependencies::new();

        let err = relay(&test_deps).auto_post(Some("ghost")).await.unwrap_err();

        assert!(matches!(err, FetchError::NotFound { .. }));
        assert!(test_deps.ai.calls().is_empty());
        assert!(test_deps.publisher.posts().is_empty());
    }
}
