use std::sync::atomic::{AtomicBool, Ordering};

/// Polled by the search before each input permutation
pub trait Cancellation {
    fn is_cancelled(&self) -> bool;
}

impl Cancellation for AtomicBool {
    fn is_cancelled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}
