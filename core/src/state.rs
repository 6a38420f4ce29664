//! Screen state and the observable store that publishes it.
//!
//! # Design
//! Each view-model owns one `StateStore`. Renderers call `subscribe()` and
//! await `changed()` on the returned receiver; they decide when to redraw.
//! The store is a `tokio::sync::watch` channel, so a slow subscriber sees
//! the latest snapshot rather than a backlog.

use tokio::sync::watch;

/// Status of an async-backed screen. Exactly one variant is active.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ViewState<T> {
    #[default]
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, ViewState::Loaded(_))
    }

    /// The payload, present only while `Loaded`.
    pub fn payload(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(payload) => Some(payload),
            _ => None,
        }
    }

    /// The message, present only while `Error`.
    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct StateStore<T> {
    tx: watch::Sender<ViewState<T>>,
}

impl<T> StateStore<T> {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(ViewState::Loading);
        Self { tx }
    }

    /// Replace the current state and wake every subscriber.
    pub fn set(&self, state: ViewState<T>) {
        self.tx.send_replace(state);
    }

    /// Mutate the state in place. Subscribers are woken only when `f`
    /// returns `true`; the read and the write happen under one lock.
    pub fn update(&self, f: impl FnOnce(&mut ViewState<T>) -> bool) -> bool {
        self.tx.send_if_modified(f)
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewState<T>> {
        self.tx.subscribe()
    }

    /// Read the current state without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&ViewState<T>) -> R) -> R {
        f(&self.tx.borrow())
    }
}

impl<T: Clone> StateStore<T> {
    pub fn snapshot(&self) -> ViewState<T> {
        self.tx.borrow().clone()
    }
}

impl<T> Default for StateStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
