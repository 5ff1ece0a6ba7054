//! Persisted reader preferences: theme, simple UI, ambient music player

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::TrackConfig;

const PREFS_FILE: &str = "prefs.json";

/// Selectable color themes
pub const THEMES: &[&str] = &["default", "blue", "purple", "green", "red", "rgb"];

/// Reader preferences, persisted across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub theme: String,
    pub simple_ui: bool,
    pub music_enabled: bool,
    pub music_volume: f32,
    /// Seconds into the current track
    pub music_position: f64,
    pub track_index: usize,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            simple_ui: false,
            music_enabled: false,
            music_volume: 0.1,
            music_position: 0.0,
            track_index: 0,
        }
    }
}

impl Preferences {
    /// Load from the data directory; missing or corrupt files degrade to
    /// defaults.
    pub fn load(data_dir: &Path) -> Self {
        match fs::read_to_string(data_dir.join(PREFS_FILE)) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn save(&self, data_dir: &Path) -> anyhow::Result<()> {
        fs::create_dir_all(data_dir)?;
        fs::write(
            data_dir.join(PREFS_FILE),
            serde_json::to_string_pretty(self)?,
        )?;
        Ok(())
    }

    /// Theme selection; unknown names are rejected.
    pub fn set_theme(&mut self, theme: &str) -> bool {
        if THEMES.contains(&theme) {
            self.theme = theme.to_string();
            true
        } else {
            false
        }
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.music_volume = volume.clamp(0.0, 1.0);
    }

    /// The configured track the stored index points at; out-of-range
    /// indexes fall back to the first track.
    pub fn current_track<'a>(&self, playlist: &'a [TrackConfig]) -> Option<&'a TrackConfig> {
        playlist.get(self.track_index).or_else(|| playlist.first())
    }

    /// Select a track, clamping to the playlist bounds. Resets the saved
    /// playback position.
    pub fn set_track(&mut self, index: usize, playlist_len: usize) {
        self.track_index = index.min(playlist_len.saturating_sub(1));
        self.music_position = 0.0;
    }

    /// Advance to the next track, wrapping at the end of the playlist.
    pub fn next_track(&mut self, playlist_len: usize) {
        if playlist_len == 0 {
            return;
        }
        self.set_track((self.track_index + 1) % playlist_len, playlist_len);
    }

    /// Step back to the previous track, wrapping at the start.
    pub fn prev_track(&mut self, playlist_len: usize) {
        if playlist_len == 0 {
            return;
        }
        self.set_track(
            (self.track_index + playlist_len - 1) % playlist_len,
            playlist_len,
        );
    }
}
