//! CLI entry point for blogpipe

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use blogpipe::commands;

#[derive(Parser)]
#[command(name = "blogpipe")]
#[command(version)]
#[command(about = "A manifest-driven markdown blog content engine", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, filtered and paginated
    #[command(alias = "ls")]
    List {
        /// Only show posts in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Full-text search query
        #[arg(short, long)]
        search: Option<String>,

        /// Page to show (1-based)
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Emit the page view as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single post by slug
    Show {
        /// Slug of the post
        slug: String,

        /// Print only the rendered HTML body
        #[arg(long)]
        html: bool,
    },

    /// Search posts and record the query
    Search {
        /// Query text
        query: String,
    },

    /// List, add or moderate comments
    Comments {
        #[command(subcommand)]
        action: CommentsAction,
    },

    /// Show or change reader preferences
    Prefs {
        #[command(subcommand)]
        action: Option<PrefsAction>,
    },

    /// Display version information
    Version,
}

#[derive(Subcommand)]
enum CommentsAction {
    /// List comments on a post
    List { slug: String },

    /// Add a comment to a post
    Add {
        slug: String,

        /// Commenter name (defaults to Anonymous)
        #[arg(short, long)]
        name: Option<String>,

        /// Comment text
        text: String,
    },

    /// Delete a comment by id
    Delete { slug: String, id: i64 },
}

#[derive(Subcommand)]
enum PrefsAction {
    /// Set the color theme
    Theme { name: String },

    /// Turn the ambient music on or off
    Music {
        #[arg(value_parser = ["on", "off"])]
        state: String,
    },

    /// Set the music volume (0.0 - 1.0)
    Volume { volume: f32 },

    /// Select a playlist track: "next", "prev" or a number
    Track { selector: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "blogpipe=debug,info"
    } else {
        "blogpipe=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());
    let blog = blogpipe::Blog::new(&base_dir)?;

    match cli.command {
        Commands::List {
            category,
            search,
            page,
            json,
        } => {
            commands::list::run(
                &blog,
                commands::list::ListOptions {
                    category,
                    query: search,
                    page,
                    json,
                },
            )
            .await?;
        }

        Commands::Show { slug, html } => {
            commands::show::run(&blog, &slug, html).await?;
        }

        Commands::Search { query } => {
            commands::search::run(&blog, &query).await?;
        }

        Commands::Comments { action } => match action {
            CommentsAction::List { slug } => {
                commands::comments::list(&blog, &slug).await?;
            }
            CommentsAction::Add { slug, name, text } => {
                commands::comments::add(&blog, &slug, name.as_deref(), &text).await?;
            }
            CommentsAction::Delete { slug, id } => {
                commands::comments::delete(&blog, &slug, id).await?;
            }
        },

        Commands::Prefs { action } => match action {
            None => commands::prefs::show(&blog)?,
            Some(PrefsAction::Theme { name }) => commands::prefs::set_theme(&blog, &name)?,
            Some(PrefsAction::Music { state }) => {
                commands::prefs::set_music(&blog, state == "on")?;
            }
            Some(PrefsAction::Volume { volume }) => commands::prefs::set_volume(&blog, volume)?,
            Some(PrefsAction::Track { selector }) => commands::prefs::set_track(&blog, &selector)?,
        },

        Commands::Version => {
            println!("blogpipe version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
