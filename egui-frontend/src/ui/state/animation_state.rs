//! # Animation State Module
//!
//! Declarative animation state for the entry screen. Each animation is a
//! phase plus progress, advanced once per frame with the frame delta; the
//! renderers only read the derived opacity and offset values.

use log::debug;

const LOGO_FADE_IN_SECS: f32 = 0.8;
const HOLD_SECS: f32 = 0.25;
const REVEAL_SECS: f32 = 0.6;
/// How far the logo travels up while the content is revealed
pub const LOGO_TRAVEL: f32 = 150.0;

const STEP_TRANSITION_SECS: f32 = 0.25;
/// Horizontal distance a wizard step slides in from
pub const STEP_SLIDE_DISTANCE: f32 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPhase {
    LogoFadeIn,
    Hold,
    Reveal,
    Done,
}

impl EntryPhase {
    fn duration(&self) -> f32 {
        match self {
            EntryPhase::LogoFadeIn => LOGO_FADE_IN_SECS,
            EntryPhase::Hold => HOLD_SECS,
            EntryPhase::Reveal => REVEAL_SECS,
            EntryPhase::Done => 0.0,
        }
    }

    fn next(&self) -> EntryPhase {
        match self {
            EntryPhase::LogoFadeIn => EntryPhase::Hold,
            EntryPhase::Hold => EntryPhase::Reveal,
            EntryPhase::Reveal | EntryPhase::Done => EntryPhase::Done,
        }
    }
}

/// Logo fade-in, short hold, then the logo moves up while the forms appear
#[derive(Debug, Clone, PartialEq)]
pub struct EntryAnimation {
    phase: EntryPhase,
    /// 0.0 to 1.0 within the current phase
    progress: f32,
}

impl Default for EntryAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryAnimation {
    pub fn new() -> Self {
        Self {
            phase: EntryPhase::LogoFadeIn,
            progress: 0.0,
        }
    }

    /// Animation already finished (used after logout)
    pub fn finished() -> Self {
        Self {
            phase: EntryPhase::Done,
            progress: 1.0,
        }
    }

    pub fn phase(&self) -> EntryPhase {
        self.phase
    }

    pub fn is_done(&self) -> bool {
        self.phase == EntryPhase::Done
    }

    /// Advance by `dt` seconds, carrying leftover time into the next phases
    pub fn advance(&mut self, dt: f32) {
        let mut remaining = dt.max(0.0);
        while self.phase != EntryPhase::Done {
            let duration = self.phase.duration();
            let left_in_phase = (1.0 - self.progress) * duration;
            if remaining < left_in_phase {
                self.progress += remaining / duration;
                return;
            }
            remaining -= left_in_phase;
            self.phase = self.phase.next();
            self.progress = 0.0;
            debug!("Entry animation entered {:?}", self.phase);
        }
        self.progress = 1.0;
    }

    pub fn logo_opacity(&self) -> f32 {
        match self.phase {
            EntryPhase::LogoFadeIn => ease_out(self.progress),
            _ => 1.0,
        }
    }

    /// Vertical logo offset in points (negative is up)
    pub fn logo_offset(&self) -> f32 {
        match self.phase {
            EntryPhase::LogoFadeIn | EntryPhase::Hold => 0.0,
            EntryPhase::Reveal => -LOGO_TRAVEL * ease_out(self.progress),
            EntryPhase::Done => -LOGO_TRAVEL,
        }
    }

    pub fn content_opacity(&self) -> f32 {
        match self.phase {
            EntryPhase::LogoFadeIn | EntryPhase::Hold => 0.0,
            EntryPhase::Reveal => ease_out(self.progress),
            EntryPhase::Done => 1.0,
        }
    }
}

/// Fade and slide applied when the wizard step or mode changes
#[derive(Debug, Clone, PartialEq)]
pub struct StepTransition {
    progress: f32,
    /// Step/mode key the transition last started for
    key: Option<(usize, bool)>,
}

impl Default for StepTransition {
    fn default() -> Self {
        Self {
            progress: 1.0,
            key: None,
        }
    }
}

impl StepTransition {
    /// Restart when `key` differs from the one seen last frame
    pub fn observe(&mut self, key: (usize, bool)) {
        if self.key != Some(key) {
            self.key = Some(key);
            self.progress = 0.0;
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.progress = (self.progress + dt.max(0.0) / STEP_TRANSITION_SECS).min(1.0);
    }

    pub fn is_running(&self) -> bool {
        self.progress < 1.0
    }

    pub fn opacity(&self) -> f32 {
        ease_out(self.progress)
    }

    pub fn offset_x(&self) -> f32 {
        STEP_SLIDE_DISTANCE * (1.0 - ease_out(self.progress))
    }
}

/// Cubic ease-out on a clamped 0..1 input
fn ease_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_starts_invisible() {
        let animation = EntryAnimation::new();
        assert_eq!(animation.phase(), EntryPhase::LogoFadeIn);
        assert_eq!(animation.logo_opacity(), 0.0);
        assert_eq!(animation.logo_offset(), 0.0);
        assert_eq!(animation.content_opacity(), 0.0);
    }

    #[test]
    fn test_entry_phase_sequence() {
        let mut animation = EntryAnimation::new();

        animation.advance(0.4);
        assert_eq!(animation.phase(), EntryPhase::LogoFadeIn);
        assert!(animation.logo_opacity() > 0.0 && animation.logo_opacity() < 1.0);

        animation.advance(0.5);
        assert_eq!(animation.phase(), EntryPhase::Hold);
        assert_eq!(animation.logo_opacity(), 1.0);
        assert_eq!(animation.content_opacity(), 0.0);

        animation.advance(0.2);
        assert_eq!(animation.phase(), EntryPhase::Reveal);
        assert!(animation.logo_offset() < 0.0);

        animation.advance(1.0);
        assert!(animation.is_done());
        assert_eq!(animation.logo_offset(), -LOGO_TRAVEL);
        assert_eq!(animation.content_opacity(), 1.0);
    }

    #[test]
    fn test_large_frame_delta_finishes() {
        let mut animation = EntryAnimation::new();
        animation.advance(10.0);
        assert!(animation.is_done());

        animation.advance(1.0);
        assert!(animation.is_done());
        assert_eq!(EntryAnimation::finished().content_opacity(), 1.0);
    }

    #[test]
    fn test_step_transition_restarts_on_change() {
        let mut transition = StepTransition::default();
        assert!(!transition.is_running());

        transition.observe((0, false));
        assert!(transition.is_running());
        assert_eq!(transition.opacity(), 0.0);
        assert_eq!(transition.offset_x(), STEP_SLIDE_DISTANCE);

        transition.advance(0.3);
        assert!(!transition.is_running());
        assert_eq!(transition.opacity(), 1.0);
        assert_eq!(transition.offset_x(), 0.0);

        transition.observe((0, false));
        assert!(!transition.is_running());

        transition.observe((1, true));
        assert!(transition.is_running());
    }
}
