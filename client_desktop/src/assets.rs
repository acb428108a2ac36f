//! Bitmaps, font and sound cues loaded once at startup
//!
//! Missing files are not fatal: the renderer falls back to plain shapes and
//! the default font, and a missing cue is simply not played.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use game_core::SoundCue;
use log::{info, warn};
use macroquad::audio::{load_sound, Sound};
use macroquad::prelude::*;

pub struct Assets {
    pub menu: Option<Texture2D>,
    pub background: Option<Texture2D>,
    pub apple: Option<Texture2D>,
    pub obstacle: Option<Texture2D>,
    pub font: Option<Font>,
    sounds: HashMap<SoundCue, Sound>,
}

impl Assets {
    pub async fn load(dir: &Path) -> Self {
        if !dir.is_dir() {
            warn!("Asset directory {} not found", dir.display());
        }

        let mut sounds = HashMap::new();
        for cue in SoundCue::ALL {
            if let Some(sound) = load_cue(&sound_path(dir, cue)).await {
                sounds.insert(cue, sound);
            }
        }

        let assets = Self {
            menu: load_bitmap(&dir.join("images/menu.png")).await,
            background: load_bitmap(&dir.join("images/background.png")).await,
            apple: load_bitmap(&dir.join("images/apple.png")).await,
            obstacle: load_bitmap(&dir.join("images/obstacle.png")).await,
            font: load_font(&dir.join("fonts/title.ttf")).await,
            sounds,
        };
        info!(
            "Loaded assets from {} ({} of {} sounds)",
            dir.display(),
            assets.sounds.len(),
            SoundCue::ALL.len()
        );
        assets
    }

    pub fn sound(&self, cue: SoundCue) -> Option<&Sound> {
        self.sounds.get(&cue)
    }
}

/// Location of a cue's sound file under the asset directory
pub fn sound_path(dir: &Path, cue: SoundCue) -> PathBuf {
    dir.join("sounds").join(format!("{}.ogg", cue.name()))
}

async fn load_bitmap(path: &Path) -> Option<Texture2D> {
    match load_texture(&path.to_string_lossy()).await {
        Ok(texture) => Some(texture),
        Err(e) => {
            warn!("Bitmap {} unavailable: {:?}", path.display(), e);
            None
        }
    }
}

async fn load_font(path: &Path) -> Option<Font> {
    match load_ttf_font(&path.to_string_lossy()).await {
        Ok(font) => Some(font),
        Err(e) => {
            warn!("Font {} unavailable: {:?}", path.display(), e);
            None
        }
    }
}

async fn load_cue(path: &Path) -> Option<Sound> {
    match load_sound(&path.to_string_lossy()).await {
        Ok(sound) => Some(sound),
        Err(e) => {
            warn!("Sound {} unavailable: {:?}", path.display(), e);
            None
        }
    }
}
