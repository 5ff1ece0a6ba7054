//! Full-text search across the catalog

use anyhow::Result;

use crate::catalog::SearchHistory;
use crate::content::CatalogLoader;
use crate::helpers;
use crate::Blog;

/// Search posts and record the query in the history
pub async fn run(blog: &Blog, query: &str) -> Result<()> {
    let loader = CatalogLoader::new(&blog.config, blog.source());
    let mut session = blog.session();
    session.load(&loader, &blog.manifest()).await?;

    let mut history = SearchHistory::load(&blog.data_dir);
    let suggestions = session.suggestions(query, &history);
    history.record(query);
    if let Err(e) = history.save(&blog.data_dir) {
        tracing::warn!("failed to save search history: {}", e);
    }

    session.set_query(query);
    let results = session.filtered();

    let noun = if results.len() == 1 { "result" } else { "results" };
    println!("Found {} {} for \"{}\"", results.len(), noun, query);
    for post in results {
        println!(
            "  {} - {} [{}]",
            post.date,
            post.title,
            helpers::display_category(&blog.config, &post.category)
        );
    }

    if !suggestions.is_empty() {
        println!("\nRelated: {}", suggestions.join(", "));
    }

    Ok(())
}
