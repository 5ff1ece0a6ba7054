//! Comment listing, submission and moderation

use anyhow::Result;

use crate::Blog;

pub async fn list(blog: &Blog, slug: &str) -> Result<()> {
    let comments = blog.comment_store().list(slug).await?;
    if comments.is_empty() {
        println!("No comments yet. Be the first to comment!");
        return Ok(());
    }

    println!("Comments on {} ({}):", slug, comments.len());
    for comment in comments {
        println!(
            "  #{} {} · {}",
            comment.id,
            comment.name,
            comment.created_at.format("%Y-%m-%d %H:%M")
        );
        println!("    {}", comment.text);
    }
    Ok(())
}

pub async fn add(blog: &Blog, slug: &str, name: Option<&str>, text: &str) -> Result<()> {
    blog.comment_store()
        .submit(
            slug,
            name.unwrap_or(""),
            text,
            blog.config.comments.max_length,
        )
        .await?;
    println!("Comment posted successfully!");
    Ok(())
}

pub async fn delete(blog: &Blog, slug: &str, id: i64) -> Result<()> {
    if blog.comment_store().delete(slug, id).await? {
        println!("Comment deleted.");
    } else {
        println!("No comment #{} on {}.", id, slug);
    }
    Ok(())
}
