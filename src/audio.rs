//! Audio playback via HTML audio elements
//!
//! One looping music track plus a hurt sound effect, matching the assets
//! served from the site root. Everything degrades to silence if element
//! creation or playback fails (headless browsers, missing user gesture).

use web_sys::HtmlAudioElement;

/// Looping background music track
const MUSIC_SRC: &str = "/live_and_learn.mp3";
/// Collision sound effect
const HURT_SRC: &str = "/hurt.mp3";

/// Audio manager for the game
pub struct AudioManager {
    music: Option<HtmlAudioElement>,
    hurt: Option<HtmlAudioElement>,
    music_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl AudioManager {
    pub fn new(music_volume: f32, sfx_volume: f32) -> Self {
        let music = HtmlAudioElement::new_with_src(MUSIC_SRC).ok();
        if let Some(el) = &music {
            el.set_loop(true);
        }
        let hurt = HtmlAudioElement::new_with_src(HURT_SRC).ok();
        if music.is_none() || hurt.is_none() {
            log::warn!("Failed to create audio elements - audio disabled");
        }

        let manager = Self {
            music,
            hurt,
            music_volume: music_volume.clamp(0.0, 1.0),
            sfx_volume: sfx_volume.clamp(0.0, 1.0),
            muted: false,
        };
        manager.apply_volumes();
        manager
    }

    /// Start the music track from the beginning
    pub fn play_music(&self) {
        if let Some(music) = &self.music {
            music.set_current_time(0.0);
            if music.play().is_err() {
                log::warn!("Music playback failed (no user gesture yet?)");
            }
        }
    }

    /// Stop and rewind the music track
    pub fn stop_music(&self) {
        if let Some(music) = &self.music {
            let _ = music.pause();
            music.set_current_time(0.0);
        }
    }

    /// Play the collision sound effect
    pub fn play_hurt(&self) {
        if let Some(hurt) = &self.hurt {
            hurt.set_current_time(0.0);
            if hurt.play().is_err() {
                log::warn!("SFX playback failed");
            }
        }
    }

    /// Set music volume (0.0 - 1.0)
    pub fn set_music_volume(&mut self, vol: f32) {
        self.music_volume = vol.clamp(0.0, 1.0);
        self.apply_volumes();
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
        self.apply_volumes();
    }

    /// Mute/unmute all audio without losing the slider values
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        self.apply_volumes();
    }

    fn apply_volumes(&self) {
        let gain = if self.muted { 0.0 } else { 1.0 };
        if let Some(music) = &self.music {
            music.set_volume((self.music_volume * gain) as f64);
        }
        if let Some(hurt) = &self.hurt {
            hurt.set_volume((self.sfx_volume * gain) as f64);
        }
    }
}
