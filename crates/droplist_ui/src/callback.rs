//! Callback abstraction for dropdown event handlers
//!
//! Wraps `Option<Box<dyn Fn(T) -> M>>` so the dropdown can hold optional handlers
//! and ask whether one is registered. Whether the selection handler is set is
//! part of the dropdown's enabled state.
//!
//! # Examples
//!
//! ```
//! use droplist_ui::Callback;
//!
//! let on_select: Callback<usize, String> = Callback::new(|i| format!("picked {i}"));
//! assert_eq!(on_select.call(2).as_deref(), Some("picked 2"));
//!
//! let unset: Callback<usize, String> = Callback::none();
//! assert!(unset.call(2).is_none());
//! ```

use std::fmt;

/// A callback wrapper that encapsulates an optional event handler.
///
/// # Type Parameters
///
/// - `T`: The input type for the callback (e.g. the selected row index)
/// - `M`: The message type returned by the callback
pub struct Callback<T, M> {
    f: Option<Box<dyn Fn(T) -> M>>,
}

impl<T, M> Callback<T, M> {
    /// Create a new callback from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> M + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty callback (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Call the callback with a value, if it exists.
    ///
    /// Returns `Some(message)` if the callback is set, or `None` if no callback is registered.
    pub fn call(&self, value: T) -> Option<M> {
        self.f.as_ref().map(|f| f(value))
    }

    /// Check if the callback is set.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if the callback is not set.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T, M> Default for Callback<T, M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T, M> fmt::Debug for Callback<T, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_some())
            .finish()
    }
}
