//! Session state: the loaded catalog, filter selection and pagination

pub mod filter;
pub mod history;
pub mod paginate;

pub use filter::ALL_CATEGORIES;
pub use history::SearchHistory;
pub use paginate::{page_links, paginate, PageLink, PageView};

use crate::content::{CatalogLoader, LoadError, Post};

const SUGGESTION_POSTS: usize = 5;
const SUGGESTION_HISTORY: usize = 3;

/// One reader session over the catalog.
///
/// Owns the catalog plus the filter and pagination state that the original
/// page kept for its lifetime. The catalog is written once by `load` and
/// read-only afterwards; filtering and pagination derive new views.
pub struct Session {
    per_page: usize,
    posts: Vec<Post>,
    filtered: Vec<Post>,
    category: String,
    query: String,
    page: usize,
}

impl Session {
    pub fn new(per_page: usize) -> Self {
        Self {
            per_page,
            posts: Vec::new(),
            filtered: Vec::new(),
            category: ALL_CATEGORIES.to_string(),
            query: String::new(),
            page: 1,
        }
    }

    /// Load the catalog through `loader`, once.
    ///
    /// A session that already holds posts returns them without re-fetching;
    /// there is no invalidation or refresh. The freshly loaded catalog also
    /// seeds the filtered view (full catalog, no filter).
    pub async fn load(
        &mut self,
        loader: &CatalogLoader,
        manifest: &[String],
    ) -> Result<&[Post], LoadError> {
        if self.posts.is_empty() {
            let posts = loader.load(manifest).await?;
            tracing::info!("catalog loaded: {} posts", posts.len());
            self.filtered = posts.clone();
            self.posts = posts;
        }
        Ok(&self.posts)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn filtered(&self) -> &[Post] {
        &self.filtered
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        paginate::total_pages(self.filtered.len(), self.per_page)
    }

    /// Select a category and re-derive the filtered view.
    pub fn set_category(&mut self, category: &str) {
        self.category = category.to_string();
        self.refilter();
    }

    /// Set the search query and re-derive the filtered view.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.trim().to_string();
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = filter::apply(&self.posts, &self.category, &self.query);
        // The new view may not reach the old page
        self.page = 1;
    }

    /// Validated page jump. Out-of-range input is rejected and the current
    /// page kept; returns whether the jump happened.
    pub fn jump_to_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages() {
            self.page = page;
            true
        } else {
            false
        }
    }

    /// The current filtered, paginated view, for re-render triggers.
    pub fn current_view(&self) -> PageView {
        paginate(&self.filtered, self.per_page, self.page)
    }

    /// Look up a post by slug. `None` is the "not found" state the caller
    /// renders; it is not an error.
    pub fn find(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    /// Search suggestions: up to five catalog titles whose title or category
    /// contains the text, then up to three previous queries.
    pub fn suggestions(&self, text: &str, history: &SearchHistory) -> Vec<String> {
        let text_lower = text.to_lowercase();
        let mut suggestions: Vec<String> = self
            .posts
            .iter()
            .filter(|post| {
                post.title.to_lowercase().contains(&text_lower)
                    || post.category.to_lowercase().contains(&text_lower)
            })
            .take(SUGGESTION_POSTS)
            .map(|post| post.title.clone())
            .collect();

        suggestions.extend(
            history
                .matching(text, SUGGESTION_HISTORY)
                .into_iter()
                .map(str::to_string),
        );
        suggestions
    }
}
