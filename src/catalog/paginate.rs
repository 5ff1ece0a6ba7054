//! Pagination over a filtered view

use serde::Serialize;

use crate::content::Post;

/// One page of a filtered view
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub items: Vec<Post>,
    pub total_pages: usize,
    pub page: usize,
}

/// Number of pages a collection spans; empty collections have zero pages.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page)
}

/// Slice a filtered view into the given 1-based page.
///
/// An empty collection yields zero pages and no items. A page outside
/// `1..=total_pages` is a caller error; the slice is clipped to bounds
/// rather than clamped, so such a call returns no items. Validation lives
/// with the jump-to-page handler, not here.
pub fn paginate(filtered: &[Post], per_page: usize, page: usize) -> PageView {
    let start = (page.saturating_sub(1) * per_page).min(filtered.len());
    let end = (start + per_page).min(filtered.len());

    PageView {
        items: filtered[start..end].to_vec(),
        total_pages: total_pages(filtered.len(), per_page),
        page,
    }
}

/// Entry in a page-number strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum PageLink {
    Page(usize),
    Ellipsis,
}

/// Page-number windowing: the first page, an ellipsis when there is a gap,
/// up to `mid_size` pages either side of the current page, another ellipsis,
/// then the last page. One page or fewer needs no strip at all.
pub fn page_links(current: usize, total: usize, mid_size: usize) -> Vec<PageLink> {
    if total <= 1 {
        return Vec::new();
    }

    let start = current.saturating_sub(mid_size).max(1);
    let end = (current + mid_size).min(total);

    let mut links = Vec::new();
    if start > 1 {
        links.push(PageLink::Page(1));
        if start > 2 {
            links.push(PageLink::Ellipsis);
        }
    }
    for page in start..=end {
        links.push(PageLink::Page(page));
    }
    if end < total {
        if end < total - 1 {
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Page(total));
    }

    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlogConfig;
    use crate::content::{FrontMatter, Post};

    fn posts(n: usize) -> Vec<Post> {
        (0..n)
            .map(|i| {
                let content = format!("---\nslug: p{}\n---\nbody", i);
                let (fm, body) = FrontMatter::parse(&content);
                Post::from_parts(&format!("p{}.md", i), fm, body, &BlogConfig::default())
            })
            .collect()
    }

    #[test]
    fn test_middle_page_slice() {
        let filtered = posts(10);
        let view = paginate(&filtered, 4, 2);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.page, 2);
        let slugs: Vec<_> = view.items.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["p4", "p5", "p6", "p7"]);
    }

    #[test]
    fn test_last_page_is_short() {
        let filtered = posts(10);
        let view = paginate(&filtered, 4, 3);
        assert_eq!(view.items.len(), 2);
    }

    #[test]
    fn test_empty_collection_has_zero_pages() {
        let view = paginate(&[], 4, 1);
        assert_eq!(view.total_pages, 0);
        assert!(view.items.is_empty());
    }

    #[test]
    fn test_out_of_range_page_clips_to_nothing() {
        let filtered = posts(5);
        let view = paginate(&filtered, 4, 9);
        assert!(view.items.is_empty());
        assert_eq!(view.total_pages, 2);
    }

    #[test]
    fn test_links_small_total_has_no_ellipsis() {
        assert!(page_links(1, 1, 2).is_empty());
        assert_eq!(
            page_links(2, 3, 2),
            vec![PageLink::Page(1), PageLink::Page(2), PageLink::Page(3)]
        );
    }

    #[test]
    fn test_links_window_with_gaps_on_both_sides() {
        use PageLink::*;
        assert_eq!(
            page_links(5, 10, 2),
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn test_links_adjacent_gap_skips_ellipsis() {
        use PageLink::*;
        // start == 2: page 1 is shown without an ellipsis after it
        assert_eq!(
            page_links(4, 10, 2),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10)
            ]
        );
    }
}
