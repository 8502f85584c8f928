//! Scoped capture of global input while a scrub session is active.
//!
//! A scrub session wants every wheel and key event, and the host application
//! must stop scrolling its own views while that is the case. Hosts express
//! this through [`InputGrab`], typically by toggling crossterm mouse capture
//! or by routing input to the widget first.
//!
//! [`GrabGuard`] ties the capture to a value: it is acquired when a session
//! starts and released when the guard is dropped, whichever way the session
//! ends.

use std::fmt;

/// Host hook for capturing and releasing global input.
pub trait InputGrab: Send {
    /// Start delivering wheel and key input to the widget exclusively.
    fn acquire(&mut self);

    /// Return input to the host.
    fn release(&mut self);
}

/// An [`InputGrab`] that does nothing. Used when the host routes input itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopGrab;

impl InputGrab for NoopGrab {
    fn acquire(&mut self) {}

    fn release(&mut self) {}
}

/// Shared handle to the host's grab implementation.
pub type SharedGrab = std::sync::Arc<std::sync::Mutex<dyn InputGrab>>;

/// Holds an acquired grab; releases it on drop.
pub struct GrabGuard {
    grab: SharedGrab,
}

impl GrabGuard {
    /// Acquires `grab` and returns the guard that will release it.
    pub fn acquire(grab: SharedGrab) -> Self {
        match grab.lock() {
            Ok(mut inner) => inner.acquire(),
            Err(poisoned) => poisoned.into_inner().acquire(),
        }
        tracing::trace!("Input grab acquired");
        Self { grab }
    }
}

impl Drop for GrabGuard {
    fn drop(&mut self) {
        match self.grab.lock() {
            Ok(mut inner) => inner.release(),
            Err(poisoned) => poisoned.into_inner().release(),
        }
        tracing::trace!("Input grab released");
    }
}

impl fmt::Debug for GrabGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrabGuard").finish_non_exhaustive()
    }
}
