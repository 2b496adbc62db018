use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Lifetime marker for one view activation.
///
/// Requests issued by a view carry a [`Liveness`] handle; once the view
/// is torn down, responses that arrive late are discarded instead of
/// being merged into state that nobody renders anymore.
pub struct ViewActivation {
    alive: Arc<AtomicBool>,
}

impl ViewActivation {
    pub fn new() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    pub fn liveness(&self) -> Liveness {
        Liveness { alive: self.alive.clone() }
    }

    /// Mark the activation dead. In-flight requests keep running, but
    /// their results will not be applied.
    pub fn teardown(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

impl Default for ViewActivation {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ViewActivation {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Cloneable witness that an activation is still alive.
#[derive(Clone)]
pub struct Liveness {
    alive: Arc<AtomicBool>,
}

impl Liveness {
    pub fn is_live(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    /// A liveness that never expires, for callers without a view
    /// lifecycle (scripts, one-shot tools).
    pub fn forever() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }
}
