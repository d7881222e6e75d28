use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Liveness flag for one screen instance. Clones share the flag.
///
/// A fetch spawned by a screen holds a clone and passes its result through
/// [`CancelToken::guard`]; once the screen is torn down the result is
/// dropped instead of being written into state nobody renders.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    pub fn guard<T>(&self, value: T) -> Option<T> {
        if self.is_cancelled() {
            None
        } else {
            Some(value)
        }
    }
}

/// How a fetch finished, relative to the screen that started it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Settlement<T, E> {
    /// The screen is still mounted; apply the value.
    Live(T),
    /// The value arrived after teardown and must be dropped.
    Late,
    /// The request failed because its screen went away.
    Abandoned,
    /// A real failure while the screen was live. State stays as it was.
    Failed(E),
}

impl CancelToken {
    /// Classifies a finished fetch. `is_abort` recognises errors caused by
    /// aborting the request on teardown.
    pub fn settle<T, E, F>(&self, result: Result<T, E>, is_abort: F) -> Settlement<T, E>
    where
        F: FnOnce(&E) -> bool,
    {
        match result {
            Ok(value) => match self.guard(value) {
                Some(value) => Settlement::Live(value),
                None => Settlement::Late,
            },
            Err(_) if self.is_cancelled() => Settlement::Abandoned,
            Err(err) if is_abort(&err) => Settlement::Abandoned,
            Err(err) => Settlement::Failed(err),
        }
    }
}
