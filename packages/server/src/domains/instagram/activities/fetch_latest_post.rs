use tracing::{info, warn};

use crate::domains::instagram::models::{CanonicalPost, FetchError};
use crate::kernel::ServerDeps;

/// Only the newest post is ever needed.
const RESULTS_LIMIT: u32 = 1;

/// Scrape the most recent post of `handle` and normalize it.
///
/// One scrape job, no retry. A missing scraper key short-circuits before any
/// network call.
pub async fn fetch_latest_post(
    handle: &str,
    deps: &ServerDeps,
) -> Result<CanonicalPost, FetchError> {
    let scraper = deps.scraper.as_ref().ok_or_else(|| {
        warn!("APIFY_API_KEY not configured, skipping scrape");
        FetchError::Configuration
    })?;

    info!(handle, "Fetching latest Instagram post");

    let items = scraper
        .latest_posts(handle, RESULTS_LIMIT)
        .await
        .map_err(|e| {
            warn!(handle, error = %e, "Instagram scrape failed");
            FetchError::Backend(e.to_string())
        })?;

    let not_found = || FetchError::NotFound {
        handle: handle.to_string(),
    };

    let latest = items.first().ok_or_else(|| {
        warn!(handle, "No posts found");
        not_found()
    })?;

    // Private or unknown profiles come back as a single error row, often
    // still carrying the profile url
    if let Some(reason) = &latest.error {
        if latest.caption.is_none() && latest.display_url.is_none() {
            warn!(handle, reason = %reason, "Scraper returned an error row");
            return Err(not_found());
        }
    }

    let post = CanonicalPost::from_scraped(latest);
    info!(
        handle,
        post_url = %post.post_url,
        likes = post.like_count,
        comments = post.comment_count,
        "Retrieved latest post"
    );

    Ok(post)
}
