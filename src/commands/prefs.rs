//! Reader preference management

use anyhow::Result;

use crate::prefs::{Preferences, THEMES};
use crate::Blog;

pub fn show(blog: &Blog) -> Result<()> {
    let prefs = Preferences::load(&blog.data_dir);

    println!("theme: {}", prefs.theme);
    println!("simple-ui: {}", if prefs.simple_ui { "on" } else { "off" });
    println!("music: {}", if prefs.music_enabled { "on" } else { "off" });
    println!("volume: {:.2}", prefs.music_volume);

    match prefs.current_track(&blog.config.playlist) {
        Some(track) => println!(
            "track: {} ({}/{})",
            track.title,
            prefs.track_index + 1,
            blog.config.playlist.len()
        ),
        None => println!("track: (no playlist configured)"),
    }
    Ok(())
}

pub fn set_theme(blog: &Blog, theme: &str) -> Result<()> {
    let mut prefs = Preferences::load(&blog.data_dir);
    if !prefs.set_theme(theme) {
        anyhow::bail!("unknown theme {:?}; available: {}", theme, THEMES.join(", "));
    }
    prefs.save(&blog.data_dir)?;
    println!("Theme set to {}.", theme);
    Ok(())
}

pub fn set_music(blog: &Blog, enabled: bool) -> Result<()> {
    let mut prefs = Preferences::load(&blog.data_dir);
    prefs.music_enabled = enabled;
    prefs.save(&blog.data_dir)?;
    println!("Music {}.", if enabled { "enabled" } else { "disabled" });
    Ok(())
}

pub fn set_volume(blog: &Blog, volume: f32) -> Result<()> {
    let mut prefs = Preferences::load(&blog.data_dir);
    prefs.set_volume(volume);
    prefs.save(&blog.data_dir)?;
    println!("Volume set to {:.2}.", prefs.music_volume);
    Ok(())
}

/// Select a playlist track: "next", "prev", or a 1-based number.
pub fn set_track(blog: &Blog, selector: &str) -> Result<()> {
    let playlist = &blog.config.playlist;
    if playlist.is_empty() {
        anyhow::bail!("no playlist configured");
    }

    let mut prefs = Preferences::load(&blog.data_dir);
    match selector {
        "next" => prefs.next_track(playlist.len()),
        "prev" => prefs.prev_track(playlist.len()),
        other => {
            let number: usize = other
                .parse()
                .map_err(|_| anyhow::anyhow!("expected \"next\", \"prev\" or a track number"))?;
            if number == 0 || number > playlist.len() {
                anyhow::bail!("track number out of range (1-{})", playlist.len());
            }
            prefs.set_track(number - 1, playlist.len());
        }
    }
    prefs.save(&blog.data_dir)?;

    if let Some(track) = prefs.current_track(playlist) {
        println!("Now playing: {}", track.title);
    }
    Ok(())
}
