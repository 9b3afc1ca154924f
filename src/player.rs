//! Video-lesson player shell.
//!
//! Chrome state only: there is no media backend, so toggling play never
//! advances the position on its own. The position moves through seeks and
//! ten-second skips, clamped to the lesson duration.

use crate::models::Lesson;
use crate::session::format_clock;

const SKIP_SECS: u32 = 10;
const VOLUME_STEP: u8 = 5;
const MAX_VOLUME: u8 = 100;

pub struct PlayerState {
    lesson: Lesson,
    playing: bool,
    position_secs: u32,
    volume: u8,
    muted: bool,
}

impl PlayerState {
    pub fn new(lesson: Lesson) -> Self {
        Self {
            lesson,
            playing: false,
            position_secs: 0,
            volume: MAX_VOLUME,
            muted: false,
        }
    }

    pub fn lesson(&self) -> &Lesson {
        &self.lesson
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn position_secs(&self) -> u32 {
        self.position_secs
    }

    pub fn toggle_play(&mut self) {
        self.playing = !self.playing;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn skip_forward(&mut self) {
        self.seek(self.position_secs.saturating_add(SKIP_SECS));
    }

    pub fn skip_backward(&mut self) {
        self.seek(self.position_secs.saturating_sub(SKIP_SECS));
    }

    pub fn seek(&mut self, secs: u32) {
        self.position_secs = secs.min(self.lesson.duration_secs);
    }

    pub fn volume_up(&mut self) {
        self.set_volume(self.volume.saturating_add(VOLUME_STEP).min(MAX_VOLUME));
    }

    pub fn volume_down(&mut self) {
        self.set_volume(self.volume.saturating_sub(VOLUME_STEP));
    }

    /// Volume zero and mute are coupled: dropping to zero mutes, raising
    /// above zero unmutes.
    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(MAX_VOLUME);
        self.muted = self.volume == 0;
    }

    /// Position within the lesson as a percentage, for the seek bar.
    pub fn progress_percent(&self) -> u32 {
        if self.lesson.duration_secs == 0 {
            return 0;
        }
        ((self.position_secs as f64 / self.lesson.duration_secs as f64) * 100.0).round() as u32
    }

    /// `M:SS / M:SS` transport display.
    pub fn transport_clock(&self) -> String {
        format!(
            "{} / {}",
            format_clock(self.position_secs),
            format_clock(self.lesson.duration_secs)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lesson() -> Lesson {
        Lesson {
            title: "Sample lesson".to_string(),
            description: "A lesson".to_string(),
            duration_secs: 25,
            number: 1,
            total: 12,
        }
    }

    #[test]
    fn skips_clamp_to_the_lesson_bounds() {
        let mut player = PlayerState::new(lesson());
        player.skip_backward();
        assert_eq!(player.position_secs(), 0);
        player.skip_forward();
        assert_eq!(player.position_secs(), 10);
        player.skip_forward();
        player.skip_forward();
        assert_eq!(player.position_secs(), 25);
    }

    #[test]
    fn volume_zero_and_mute_are_coupled() {
        let mut player = PlayerState::new(lesson());
        player.set_volume(5);
        player.volume_down();
        assert_eq!(player.volume(), 0);
        assert!(player.is_muted());
        player.volume_up();
        assert_eq!(player.volume(), 5);
        assert!(!player.is_muted());
    }

    #[test]
    fn toggles_flip_independent_flags() {
        let mut player = PlayerState::new(lesson());
        player.toggle_play();
        player.toggle_mute();
        assert!(player.is_playing());
        assert!(player.is_muted());
        player.toggle_play();
        assert!(!player.is_playing());
        assert!(player.is_muted());
    }

    #[test]
    fn transport_clock_formats_both_ends() {
        let mut player = PlayerState::new(lesson());
        player.skip_forward();
        assert_eq!(player.transport_clock(), "0:10 / 0:25");
    }
}
