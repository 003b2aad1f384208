//! Startup gate
//!
//! One-shot readiness machine that withholds first paint until warm-up
//! finishes, then releases the splash overlay exactly once. Warm-up failure
//! is logged and swallowed; the gate must reach `Ready` either way so the app
//! never hangs behind the splash.

use async_trait::async_trait;
use std::time::Duration;
use tracing::warn;

/// Upper bound on the warm-up task. The upstream flow had none, which would
/// pin the splash forever on a hung warm-up; a timeout resolves the gate
/// like any other failure.
pub const WARM_UP_TIMEOUT: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Readiness {
    #[default]
    NotReady,
    Ready,
}

/// External splash overlay. `hide` may be called more than once safely, but
/// the gate guarantees it is issued exactly once per screen lifetime.
#[async_trait]
pub trait SplashService {
    async fn hide(&mut self);
}

#[derive(Debug, Default)]
pub struct StartupGate {
    readiness: Readiness,
    splash_released: bool,
}

impl StartupGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_ready(&self) -> bool {
        self.readiness == Readiness::Ready
    }

    /// Resolve the gate with the warm-up outcome. Errors are logged, never
    /// fatal. The transition is monotonic; a second resolve is ignored.
    pub fn resolve(&mut self, outcome: anyhow::Result<()>) {
        if self.is_ready() {
            return;
        }
        if let Err(err) = outcome {
            warn!("warm-up failed, continuing without it: {err:#}");
        }
        self.readiness = Readiness::Ready;
    }

    /// True exactly once: after the gate is ready and the screen has
    /// completed its first layout pass. The caller forwards this to
    /// [`SplashService::hide`].
    pub fn take_splash_release(&mut self, laid_out: bool) -> bool {
        if self.is_ready() && laid_out && !self.splash_released {
            self.splash_released = true;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn gate_starts_not_ready() {
        let gate = StartupGate::new();
        assert!(!gate.is_ready());
    }

    #[test]
    fn gate_becomes_ready_on_success() {
        let mut gate = StartupGate::new();
        gate.resolve(Ok(()));
        assert!(gate.is_ready());
    }

    #[test]
    fn gate_becomes_ready_even_when_warm_up_fails() {
        let mut gate = StartupGate::new();
        gate.resolve(Err(anyhow!("font cache exploded")));
        assert!(gate.is_ready());
    }

    #[test]
    fn second_resolve_is_ignored() {
        let mut gate = StartupGate::new();
        gate.resolve(Ok(()));
        gate.resolve(Err(anyhow!("late straggler")));
        assert!(gate.is_ready());
    }

    #[test]
    fn splash_release_waits_for_ready_and_layout() {
        let mut gate = StartupGate::new();
        // Not ready yet: never released, laid out or not
        assert!(!gate.take_splash_release(false));
        assert!(!gate.take_splash_release(true));

        gate.resolve(Ok(()));
        // Ready but no layout pass yet
        assert!(!gate.take_splash_release(false));

        // Ready + first layout: released exactly once
        assert!(gate.take_splash_release(true));
        assert!(!gate.take_splash_release(true));
    }

    #[test]
    fn splash_release_is_once_even_after_failed_warm_up() {
        let mut gate = StartupGate::new();
        gate.resolve(Err(anyhow!("warm-up rejected")));
        assert!(gate.take_splash_release(true));
        assert!(!gate.take_splash_release(true));
    }
}
