use commentdeck_shared::{CancelToken, Settlement};
use leptos::prelude::on_cleanup;
use send_wrapper::SendWrapper;
use web_sys::{AbortController, AbortSignal};

use crate::api::ApiError;

/// Ties the fetches a screen spawns to the screen's lifetime.
///
/// When the reactive owner of the screen is disposed (the router swapped
/// screens) in-flight requests are aborted and anything that still comes
/// back is discarded.
#[derive(Clone)]
pub struct FetchScope {
    token: CancelToken,
    signal: Option<AbortSignal>,
}

impl FetchScope {
    /// Must be called inside the screen component so cleanup is registered
    /// with its owner.
    pub fn for_screen(screen: &'static str) -> Self {
        let token = CancelToken::new();
        let controller = match AbortController::new() {
            Ok(controller) => Some(controller),
            Err(err) => {
                tracing::warn!(
                    screen,
                    ?err,
                    "AbortController unavailable, late results will only be discarded"
                );
                None
            }
        };
        let signal = controller.as_ref().map(AbortController::signal);

        let teardown = SendWrapper::new((token.clone(), controller));
        on_cleanup(move || {
            let (token, controller) = teardown.take();
            token.cancel();
            if let Some(controller) = controller {
                controller.abort();
            }
            tracing::debug!(screen, "screen torn down, pending fetches cancelled");
        });

        Self { token, signal }
    }

    pub fn signal(&self) -> Option<&AbortSignal> {
        self.signal.as_ref()
    }

    /// Yields the fetched value while the screen is still mounted. Failures
    /// are logged and leave the screen state untouched.
    pub fn settle<T>(&self, what: &'static str, result: Result<T, ApiError>) -> Option<T> {
        match self.token.settle(result, ApiError::is_abort) {
            Settlement::Live(value) => Some(value),
            Settlement::Late => {
                tracing::debug!(what, "discarding result for a screen that is gone");
                None
            }
            Settlement::Abandoned => {
                tracing::debug!(what, "fetch abandoned with its screen");
                None
            }
            Settlement::Failed(err) => {
                tracing::warn!(what, error = %err, "fetch failed");
                None
            }
        }
    }
}
