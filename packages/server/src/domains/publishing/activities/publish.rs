use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};

use crate::common::{enforce_length, exceeds_limit};
use crate::domains::publishing::models::{PublishResult, NOT_INITIALIZED};
use crate::kernel::{BaseImageDownloader, BaseSocialPublisher, ServerDeps};

/// Publishes a message, optionally with an image, to the target platform.
///
/// Never fails past its own boundary: every outcome is a [`PublishResult`].
#[derive(Clone)]
pub struct Publisher {
    client: Option<Arc<dyn BaseSocialPublisher>>,
    downloader: Arc<dyn BaseImageDownloader>,
}

impl Publisher {
    pub fn new(
        client: Option<Arc<dyn BaseSocialPublisher>>,
        downloader: Arc<dyn BaseImageDownloader>,
    ) -> Self {
        Self { client, downloader }
    }

    pub fn from_deps(deps: &ServerDeps) -> Self {
        Self::new(deps.publisher.clone(), deps.image_downloader.clone())
    }

    /// False when any of the four platform credentials was missing.
    pub fn is_initialized(&self) -> bool {
        self.client.is_some()
    }

    pub async fn publish(&self, content: &str, image_url: Option<&str>) -> PublishResult {
        let Some(client) = &self.client else {
            return PublishResult::failed(NOT_INITIALIZED);
        };

        if exceeds_limit(content) {
            warn!(
                chars = content.chars().count(),
                "Post content exceeds 280 characters, truncating"
            );
        }
        let content = enforce_length(content);
        let image_url = image_url.map(str::trim).filter(|url| !url.is_empty());

        match self.try_publish(client.as_ref(), &content, image_url).await {
            Ok(post_id) => {
                info!(post_id = %post_id, "Post published");
                PublishResult::published(post_id)
            }
            Err(e) => {
                warn!(error = %e, "Error publishing post");
                PublishResult::failed(e.to_string())
            }
        }
    }

    async fn try_publish(
        &self,
        client: &dyn BaseSocialPublisher,
        content: &str,
        image_url: Option<&str>,
    ) -> Result<String> {
        let mut media_ids = Vec::new();

        if let Some(url) = image_url {
            match self.downloader.download(url).await {
                Ok(bytes) => {
                    let media_id = client.upload_media(bytes).await?;
                    info!(media_id = %media_id, "Image uploaded");
                    media_ids.push(media_id);
                }
                Err(e) => {
                    warn!(url, error = %e, "Failed to download image, posting without it");
                }
            }
        }

        client.create_post(content, &media_ids).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::{
        CreatedPost, MockImageDownloader, MockSocialPublisher,
    };
    use crate::kernel::TestDependencies;

    const IMAGE: &str = "https://cdn.example.org/C0ffee.jpg";

    fn publisher(test_deps: &TestDependencies) -> Publisher {
        Publisher::from_deps(&test_deps.into_server_deps())
    }

    #[tokio::test]
    async fn test_uninitialized_makes_no_calls() {
        let test_deps = TestDependencies::new().without_publisher();
        let publisher = publisher(&test_deps);

        let result = publisher.publish("hello", Some(IMAGE)).await;

        assert!(!publisher.is_initialized());
        assert_eq!(result, PublishResult::failed("platform client not initialized"));
        assert!(test_deps.image_downloader.calls().is_empty());
        assert!(test_deps.publisher.posts().is_empty());
    }

    #[tokio::test]
    async fn test_text_only_post_skips_download() {
        let test_deps = TestDependencies::new()
            .mock_publisher(MockSocialPublisher::new().with_post_id("99"));

        let result = publisher(&test_deps).publish("hello", None).await;

        assert_eq!(result, PublishResult::published("99"));
        assert_eq!(result.post_url.as_deref(), Some("https://twitter.com/user/status/99"));
        assert!(test_deps.image_downloader.calls().is_empty());
        assert!(test_deps.publisher.uploads().is_empty());
        assert_eq!(
            test_deps.publisher.posts(),
            vec![CreatedPost {
                text: "hello".into(),
                media_ids: vec![],
            }]
        );
    }

    #[tokio::test]
    async fn test_image_is_uploaded_and_attached() {
        let test_deps = TestDependencies::new();

        let result = publisher(&test_deps).publish("hello", Some(IMAGE)).await;

        assert!(result.ok);
        assert_eq!(test_deps.image_downloader.calls(), vec![IMAGE.to_string()]);
        assert_eq!(test_deps.publisher.uploads(), vec![4]);
        assert_eq!(test_deps.publisher.posts()[0].media_ids, vec!["media-1".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_download_still_posts_text() {
        let test_deps = TestDependencies::new()
            .mock_downloader(MockImageDownloader::new().failing("404 Not Found"));

        let result = publisher(&test_deps).publish("hello", Some(IMAGE)).await;

        assert!(result.ok);
        assert!(test_deps.publisher.uploads().is_empty());
        assert!(test_deps.publisher.posts()[0].media_ids.is_empty());
    }

    #[tokio::test]
    async fn test_blank_image_url_treated_as_none() {
        let test_deps = TestDependencies::new();

        let result = publisher(&test_deps).publish("hello", Some("  ")).await;

        assert!(result.ok);
        assert!(test_deps.image_downloader.calls().is_empty());
    }

    #[tokio::test]
    async fn test_long_content_truncated_before_sending() {
        let test_deps = TestDependencies::new();

        publisher(&test_deps).publish(&"a".repeat(300), None).await;

        let sent = &test_deps.publisher.posts()[0].text;
        assert_eq!(sent.chars().count(), 280);
        assert!(sent.ends_with("..."));
    }

    #[tokio::test]
    async fn test_upload_failure_reported_not_raised() {
        let test_deps = TestDependencies::new()
            .mock_publisher(MockSocialPublisher::new().failing_upload("media type unrecognized"));

        let result = publisher(&test_deps).publish("hello", Some(IMAGE)).await;

        assert_eq!(result, PublishResult::failed("media type unrecognized"));
        assert!(test_deps.publisher.posts().is_empty());
    }

    #[tokio::test]
    async fn test_create_failure_reported_not_raised() {
        let test_deps = TestDependencies::new()
            .mock_publisher(MockSocialPublisher::new().failing_create("duplicate content"));

        let result = publisher(&test_deps).publish("hello", None).await;

        assert!(!result.ok);
        assert_eq!(result.error_message.as_deref(), Some("duplicate content"));
        assert!(result.post_id.is_none());
    }
}
