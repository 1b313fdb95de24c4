use crate::domains::instagram::CanonicalPost;

pub const SYSTEM_PROMPT: &str = "You are a social media assistant. Your task is to convert Instagram \
captions into concise, engaging, and well-structured tweets within 280 characters.";

/// Instruction block for one post.
pub fn rewrite_prompt(post: &CanonicalPost) -> String {
    format!(
        r#"Rewrite the following Instagram post into a concise, engaging tweet (max 280 characters) that conveys the core message without directly stating that it's a summary.
The output should ONLY contain the tweet text. Do NOT add any commentary, explanations, or notes about the tweet.

Instagram Post Details:
- Caption: {caption}
- Posted on: {timestamp}
- Engagement: {likes} likes, {comments} comments

Tweet Text:"#,
        caption = post.caption,
        timestamp = post.timestamp,
        likes = post.like_count,
        comments = post.comment_count,
    )
}
