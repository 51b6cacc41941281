//! Loading Gate
//!
//! Holds the splash screen for a fixed delay before the application shell
//! mounts. Driven by elapsed time rather than a wall clock so the host can
//! feed it from a browser timer and tests can feed it a simulated one.

use std::time::Duration;

use crate::timeline::{presets, Step, Timeline};

/// Default time the splash stays up
pub const LOADING_DELAY: Duration = Duration::from_millis(2000);

/// Title spelled out letter by letter on the splash
pub const SPLASH_TITLE: &str = "PORTFOLIO";

pub const SPLASH_CAPTION: &str = "Loading amazing experience...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Splash showing, timer running
    Pending,
    /// Timer expired, shell mounted
    Open,
    /// Host unmounted before expiry
    Cancelled,
}

/// Emitted once when the shell should mount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountShell;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadingGate {
    delay: Duration,
    elapsed: Duration,
    state: GateState,
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new(LOADING_DELAY)
    }
}

impl LoadingGate {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            elapsed: Duration::ZERO,
            state: GateState::Pending,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == GateState::Open
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Time left before the shell mounts
    pub fn remaining(&self) -> Duration {
        match self.state {
            GateState::Pending => self.delay.saturating_sub(self.elapsed),
            _ => Duration::ZERO,
        }
    }

    /// Advance the clock; yields `MountShell` exactly once, on expiry
    pub fn advance(&mut self, dt: Duration) -> Option<MountShell> {
        if self.state != GateState::Pending {
            return None;
        }
        self.elapsed += dt;
        if self.elapsed >= self.delay {
            self.state = GateState::Open;
            tracing::debug!(delay_ms = self.delay.as_millis() as u64, "Loading gate opened");
            Some(MountShell)
        } else {
            None
        }
    }

    /// Fire the one-shot timer now
    pub fn expire(&mut self) -> Option<MountShell> {
        self.advance(self.remaining())
    }

    /// Host went away before expiry; no mount will follow
    pub fn cancel(&mut self) {
        if self.state == GateState::Pending {
            self.state = GateState::Cancelled;
        }
    }
}

/// Animation plan for the splash view
#[derive(Debug, Clone, PartialEq)]
pub struct SplashAnimation {
    pub letters: Timeline,
    pub progress: Step,
    pub caption: Step,
}

impl SplashAnimation {
    pub fn new(title: &str) -> Self {
        Self {
            letters: presets::splash_letters(title),
            progress: presets::splash_progress(),
            caption: presets::splash_caption(),
        }
    }
}

impl Default for SplashAnimation {
    fn default() -> Self {
        Self::new(SPLASH_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_open_before_delay() {
        let mut gate = LoadingGate::default();
        for _ in 0..19 {
            assert_eq!(gate.advance(Duration::from_millis(100)), None);
        }
        assert_eq!(gate.state(), GateState::Pending);
        assert_eq!(gate.remaining(), Duration::from_millis(100));
    }

    #[test]
    fn test_mounts_exactly_once() {
        let mut gate = LoadingGate::default();
        let mut mounts = 0;
        for _ in 0..50 {
            if gate.advance(Duration::from_millis(100)).is_some() {
                mounts += 1;
            }
        }
        assert_eq!(mounts, 1);
        assert!(gate.is_open());
        assert_eq!(gate.remaining(), Duration::ZERO);
    }

    #[test]
    fn test_opens_at_exact_deadline() {
        let mut gate = LoadingGate::default();
        assert!(gate.advance(Duration::from_millis(1999)).is_none());
        assert_eq!(gate.advance(Duration::from_millis(1)), Some(MountShell));
    }

    #[test]
    fn test_expire_fires_timer() {
        let mut gate = LoadingGate::new(Duration::from_millis(500));
        assert_eq!(gate.expire(), Some(MountShell));
        assert_eq!(gate.expire(), None);
    }

    #[test]
    fn test_cancel_prevents_mount() {
        let mut gate = LoadingGate::default();
        gate.advance(Duration::from_millis(1000));
        gate.cancel();
        assert_eq!(gate.advance(Duration::from_secs(10)), None);
        assert_eq!(gate.state(), GateState::Cancelled);

        // Cancelling after open leaves it open
        let mut open = LoadingGate::default();
        open.expire();
        open.cancel();
        assert!(open.is_open());
    }

    #[test]
    fn test_splash_finishes_before_gate() {
        let splash = SplashAnimation::default();
        assert_eq!(splash.letters.len(), SPLASH_TITLE.len());
        assert!(splash.letters.total_duration().unwrap() < LOADING_DELAY);
        assert!(splash.progress.end().unwrap() < LOADING_DELAY);
        assert_eq!(splash.caption.end(), None);
    }
}
