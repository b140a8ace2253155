// SPDX-License-Identifier: MPL-2.0
//! Cancel-and-replace debouncing for bursty events.
//!
//! Every event bumps a generation counter and schedules a timer carrying the
//! new token. Only the timer whose token is still current when it fires acts;
//! earlier timers find a stale token and are dropped.

use iced::Task;
use std::future::Future;
use std::time::Duration;

/// Generation a scheduled timer belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebounceToken(u64);

#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    generation: u64,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: 0,
        }
    }

    /// Invalidates every outstanding token and returns a fresh one.
    pub fn bump(&mut self) -> DebounceToken {
        self.generation = self.generation.wrapping_add(1);
        DebounceToken(self.generation)
    }

    #[must_use]
    pub fn is_current(&self, token: DebounceToken) -> bool {
        token.0 == self.generation
    }

    /// Bumps the generation and returns a task that yields
    /// `on_elapsed(token)` once the quiet period is over.
    pub fn schedule<M, F>(&mut self, on_elapsed: F) -> Task<M>
    where
        M: Send + 'static,
        F: FnOnce(DebounceToken) -> M + Send + 'static,
    {
        let token = self.bump();
        Task::perform(self.settle(token), on_elapsed)
    }

    /// Resolves to `token` after the quiet period.
    fn settle(
        &self,
        token: DebounceToken,
    ) -> impl Future<Output = DebounceToken> + Send + 'static {
        let delay = self.delay;
        async move {
            tokio::time::sleep(delay).await;
            token
        }
    }
}
