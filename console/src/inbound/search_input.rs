//! Debounced header search input.
//!
//! Keystrokes replace the current value of a watch channel. The receiving
//! side only yields a value once it has stayed unchanged for the debounce
//! window, so a burst of typing produces at most one search.

use std::time::Duration;

use tokio::sync::watch;
use tracing::trace;

use crate::domain::SearchTerm;

/// Default quiet period before a typed value is searched.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Create a connected input handle and debounced receiver.
pub fn search_input(debounce: Duration) -> (SearchInputHandle, SearchInput) {
    let (sender, receiver) = watch::channel(String::new());
    (
        SearchInputHandle { sender },
        SearchInput {
            receiver,
            debounce,
        },
    )
}

/// Typing side of the search box.
#[derive(Debug)]
pub struct SearchInputHandle {
    sender: watch::Sender<String>,
}

impl SearchInputHandle {
    /// Replace the box contents.
    pub fn set(&self, value: impl Into<String>) {
        self.sender.send_replace(value.into());
    }

    /// Close the input. The receiver flushes any pending value, then ends.
    pub fn close(self) {
        drop(self);
    }
}

/// Debounced stream of settled search box values.
#[derive(Debug)]
pub struct SearchInput {
    receiver: watch::Receiver<String>,
    debounce: Duration,
}

impl SearchInput {
    /// Wait for the next value that stays unchanged for the debounce window.
    ///
    /// Returns `None` once the handle is closed and nothing is pending. A
    /// value typed just before closing is returned without waiting.
    pub async fn next_settled(&mut self) -> Option<String> {
        if self.receiver.changed().await.is_err() {
            return None;
        }
        loop {
            tokio::select! {
                () = tokio::time::sleep(self.debounce) => {
                    return Some(self.receiver.borrow_and_update().clone());
                }
                changed = self.receiver.changed() => {
                    if changed.is_err() {
                        return Some(self.receiver.borrow_and_update().clone());
                    }
                    trace!("search input changed, restarting debounce window");
                }
            }
        }
    }

    /// Wait for the next settled value that enables search.
    ///
    /// Blank values are skipped: search stays disabled while the box is
    /// empty.
    pub async fn next_query(&mut self) -> Option<SearchTerm> {
        loop {
            let value = self.next_settled().await?;
            if let Some(term) = SearchTerm::parse(&value) {
                return Some(term);
            }
            trace!("settled search input is blank, search disabled");
        }
    }
}
