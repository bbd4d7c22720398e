use serde::Serialize;
use utoipa::ToSchema;

/// Label shown when a post has no comments.
pub static NO_COMMENTS: &str = "no";

/// Summary of one post in a list.
#[derive(Serialize, ToSchema, Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub address: String,
    pub comments: String,
    pub excerpt: Option<String>,
    pub status: Option<String>,
    pub title: Option<String>,
    pub onchain_id: String,
    pub link: String,
}

/// Human readable comment count, "no" when absent or zero.
pub fn comment_label(count: Option<i64>) -> String {
    match count {
        Some(count) if count > 0 => count.to_string(),
        _ => NO_COMMENTS.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_comment_label() {
        assert_eq!(comment_label(Some(0)), "no");
        assert_eq!(comment_label(None), "no");
        assert_eq!(comment_label(Some(7)), "7");
    }
}
