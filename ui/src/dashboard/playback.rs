//! Play / pause / loop / speed state of the year animation.
//!
//! Ticks are one-shot timers tagged with a generation. Any transition that
//! cancels or reschedules the timer bumps the generation, so a tick that was
//! already in flight arrives stale and is ignored instead of firing twice.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Speed {
    Half,
    #[default]
    Normal,
    Double,
    Triple,
}

impl Speed {
    pub const ALL: [Speed; 4] = [Speed::Half, Speed::Normal, Speed::Double, Speed::Triple];

    pub fn multiplier(self) -> f64 {
        match self {
            Speed::Half => 0.5,
            Speed::Normal => 1.0,
            Speed::Double => 2.0,
            Speed::Triple => 3.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Speed::Half => "0.5x",
            Speed::Normal => "1x",
            Speed::Double => "2x",
            Speed::Triple => "3x",
        }
    }

    /// CSS modifier class of the speed button.
    pub fn class(self) -> &'static str {
        match self {
            Speed::Half => "speed-0-5x",
            Speed::Normal => "speed-1x",
            Speed::Double => "speed-2x",
            Speed::Triple => "speed-3x",
        }
    }

    /// Next speed in the button's cycle, wrapping to the slowest.
    pub fn cycled(self) -> Speed {
        let idx = Self::ALL.iter().position(|s| *s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

/// A tick the caller should deliver back after `delay_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickRequest {
    pub generation: u64,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Moved one year forward; schedule the next tick.
    Advanced(TickRequest),
    /// Wrapped from the last year to the first; schedule the next tick.
    Looped(TickRequest),
    /// End of the axis without looping; no further ticks.
    Stopped,
    /// Stale or unexpected tick; nothing changed.
    Ignored,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Playback {
    state: PlaybackState,
    looping: bool,
    speed: Speed,
    generation: u64,
    base_interval_ms: u64,
}

impl Playback {
    pub fn new(base_interval_ms: u64) -> Self {
        Self {
            state: PlaybackState::Stopped,
            looping: false,
            speed: Speed::Normal,
            generation: 0,
            base_interval_ms,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn interval_ms(&self) -> u64 {
        (self.base_interval_ms as f64 / self.speed.multiplier()).round() as u64
    }

    /// True when `generation` belongs to the running timer.
    pub fn is_current(&self, generation: u64) -> bool {
        self.is_playing() && generation == self.generation
    }

    /// Issue a fresh tick, invalidating any outstanding one.
    pub(crate) fn schedule(&mut self) -> TickRequest {
        self.generation += 1;
        TickRequest {
            generation: self.generation,
            delay_ms: self.interval_ms(),
        }
    }

    pub(crate) fn start(&mut self) -> Option<TickRequest> {
        if self.is_playing() {
            return None;
        }
        self.state = PlaybackState::Playing;
        Some(self.schedule())
    }

    pub(crate) fn pause(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        self.state = PlaybackState::Paused;
        self.generation += 1;
        true
    }

    pub(crate) fn stop(&mut self) {
        self.state = PlaybackState::Stopped;
        self.generation += 1;
    }

    pub(crate) fn toggle_loop(&mut self) -> bool {
        self.looping = !self.looping;
        self.looping
    }

    /// Change speed; a running timer is restarted at the new interval.
    pub(crate) fn set_speed(&mut self, speed: Speed) -> Option<TickRequest> {
        self.speed = speed;
        self.is_playing().then(|| self.schedule())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_scales_with_speed() {
        let mut p = Playback::new(1000);
        assert_eq!(p.interval_ms(), 1000);
        for (speed, ms) in [(Speed::Half, 2000), (Speed::Double, 500), (Speed::Triple, 333)] {
            let _ = p.set_speed(speed);
            assert_eq!(p.interval_ms(), ms);
        }
    }

    #[test]
    fn speed_cycle_wraps() {
        let mut s = Speed::Normal;
        let mut labels = Vec::new();
        for _ in 0..4 {
            s = s.cycled();
            labels.push(s.label());
        }
        assert_eq!(labels, vec!["2x", "3x", "0.5x", "1x"]);
    }

    #[test]
    fn rescheduling_invalidates_outstanding_ticks() {
        let mut p = Playback::new(1000);
        let first = p.start().unwrap();
        assert!(p.is_current(first.generation));
        let second = p.set_speed(Speed::Double).unwrap();
        assert!(!p.is_current(first.generation));
        assert!(p.is_current(second.generation));
        assert_eq!(second.delay_ms, 500);
        assert!(p.pause());
        assert!(!p.is_current(second.generation));
        assert_eq!(p.set_speed(Speed::Normal), None);
    }

    #[test]
    fn start_is_idempotent_while_playing() {
        let mut p = Playback::new(1000);
        assert!(p.start().is_some());
        assert!(p.start().is_none());
        p.stop();
        assert_eq!(p.state(), PlaybackState::Stopped);
        assert!(!p.pause());
    }
}
