//! Category and full-text filtering over the catalog

use crate::content::Post;

/// Category sentinel that matches every post
pub const ALL_CATEGORIES: &str = "all";

/// Derive a filtered view of the catalog.
///
/// Pure function of its inputs: category is matched exactly (unless it is
/// the "all" sentinel), the query is a case-insensitive substring match over
/// title, excerpt, body and category. The two predicates compose as AND.
pub fn apply(posts: &[Post], category: &str, query: &str) -> Vec<Post> {
    let query = query.trim().to_lowercase();
    posts
        .iter()
        .filter(|post| matches_category(post, category) && matches_query(post, &query))
        .cloned()
        .collect()
}

fn matches_category(post: &Post, category: &str) -> bool {
    category == ALL_CATEGORIES || post.category == category
}

fn matches_query(post: &Post, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    post.title.to_lowercase().contains(query)
        || post.excerpt.to_lowercase().contains(query)
        || post.body.to_lowercase().contains(query)
        || post.category.to_lowercase().contains(query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;
    use crate::content::FrontMatter;

    fn post(slug: &str, category: &str, body: &str) -> Post {
        let content = format!(
            "---\nslug: {}\ntitle: Title of {}\ncategory: {}\n---\n{}",
            slug, slug, category, body
        );
        let (fm, body) = FrontMatter::parse(&content);
        Post::from_parts(&format!("{}.md", slug), fm, body, &BlogConfig::default())
    }

    fn sample() -> Vec<Post> {
        vec![
            post("a", "Dev", "Writing Rust all day."),
            post("b", "Life", "Went to the Oden Store downtown."),
            post("c", "Dev", "Shipping a release."),
        ]
    }

    #[test]
    fn test_all_sentinel_passes_everything_in_order() {
        let posts = sample();
        let filtered = apply(&posts, ALL_CATEGORIES, "");
        assert_eq!(filtered.len(), posts.len());
        let slugs: Vec<_> = filtered.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_category_matched_exactly() {
        let posts = sample();
        assert_eq!(apply(&posts, "Dev", "").len(), 2);
        // Case-sensitive equality on stored category strings
        assert!(apply(&posts, "dev", "").is_empty());
        assert!(apply(&posts, "Cooking", "").is_empty());
    }

    #[test]
    fn test_query_matches_body_case_insensitively() {
        let posts = sample();
        let filtered = apply(&posts, ALL_CATEGORIES, "oden");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].slug, "b");
    }

    #[test]
    fn test_category_and_query_compose_as_and() {
        let posts = sample();
        assert_eq!(apply(&posts, "Dev", "rust").len(), 1);
        assert!(apply(&posts, "Life", "rust").is_empty());
    }
}
