//! List posts with filtering and pagination

use anyhow::Result;

use crate::catalog::{page_links, PageLink};
use crate::content::CatalogLoader;
use crate::helpers;
use crate::Blog;

const PAGE_WINDOW: usize = 2;

pub struct ListOptions {
    pub category: Option<String>,
    pub query: Option<String>,
    pub page: usize,
    pub json: bool,
}

/// List the filtered, paginated post view
pub async fn run(blog: &Blog, options: ListOptions) -> Result<()> {
    let loader = CatalogLoader::new(&blog.config, blog.source());
    let mut session = blog.session();
    session.load(&loader, &blog.manifest()).await?;

    if let Some(category) = &options.category {
        session.set_category(category);
    }
    if let Some(query) = &options.query {
        session.set_query(query);
    }
    if options.page > 1 && !session.jump_to_page(options.page) {
        // Invalid jumps keep the last valid page
        println!(
            "Page {} is out of range; showing page {}.",
            options.page,
            session.page()
        );
    }

    let view = session.current_view();

    if options.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if !session.query().is_empty() {
        let count = session.filtered().len();
        let noun = if count == 1 { "result" } else { "results" };
        println!("Found {} {} for \"{}\"\n", count, noun, session.query());
    }

    if view.items.is_empty() {
        println!("No posts found.");
        return Ok(());
    }

    for post in &view.items {
        println!(
            "{} - {} [{}] ({} min read)",
            post.date,
            post.title,
            helpers::display_category(&blog.config, &post.category),
            post.read_time
        );
        if !post.excerpt.is_empty() {
            println!("    {}", post.excerpt);
        }
    }

    let strip: Vec<String> = page_links(view.page, view.total_pages, PAGE_WINDOW)
        .iter()
        .map(|link| match link {
            PageLink::Page(p) if *p == view.page => format!("[{}]", p),
            PageLink::Page(p) => p.to_string(),
            PageLink::Ellipsis => "...".to_string(),
        })
        .collect();
    if !strip.is_empty() {
        println!("\nPage {} of {}: {}", view.page, view.total_pages, strip.join(" "));
    }

    Ok(())
}
