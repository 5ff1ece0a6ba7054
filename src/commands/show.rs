//! Show a single post: rendered body, contents, navigation, comments

use anyhow::Result;

use crate::content::{CatalogLoader, MarkdownRenderer};
use crate::helpers::{self, date, toc};
use crate::Blog;

/// Render one post by slug
pub async fn run(blog: &Blog, slug: &str, html_only: bool) -> Result<()> {
    let loader = CatalogLoader::new(&blog.config, blog.source());
    let mut session = blog.session();
    session.load(&loader, &blog.manifest()).await?;

    // A missing slug is a view state, not an error
    let Some(post) = session.find(slug) else {
        println!("Post not found.");
        return Ok(());
    };

    let renderer = MarkdownRenderer::with_theme(&blog.config.highlight_theme);
    let rendered = renderer.render(&post.body);

    if html_only {
        println!("{}", rendered);
        return Ok(());
    }

    println!("{}", post.title);
    println!(
        "{} · {} · {} min read · by {}",
        date::full_date(&post.date),
        helpers::display_category(&blog.config, &post.category),
        post.read_time,
        post.author
    );
    if !post.excerpt.is_empty() {
        println!("\n{}", post.excerpt);
    }

    println!("\nContents:");
    println!("{}", toc::toc(&rendered, blog.config.toc_max_depth));

    println!("\n{}", rendered);

    if let Some(prev) = post.prev(session.posts()) {
        println!("Newer: {} ({})", prev.title, prev.slug);
    }
    if let Some(next) = post.next(session.posts()) {
        println!("Older: {} ({})", next.title, next.slug);
    }

    println!("\nShare: {}", helpers::post_url(&blog.config, &post.slug));
    println!(
        "Tweet: {}",
        helpers::twitter_share_url(&blog.config, &post.title, &post.slug)
    );

    match blog.comment_store().list(&post.slug).await {
        Ok(comments) if comments.is_empty() => {
            println!("\nNo comments yet. Be the first to comment!");
        }
        Ok(comments) => {
            println!("\nComments ({}):", comments.len());
            for comment in comments {
                println!(
                    "  {} · {}",
                    comment.name,
                    comment.created_at.format("%Y-%m-%d %H:%M")
                );
                println!("    {}", comment.text);
            }
        }
        Err(e) => {
            tracing::warn!("failed to load comments: {}", e);
        }
    }

    Ok(())
}
