//! Storage backend implementations.
//!
//! Concrete implementations of the [`SeoStore`] trait defined in
//! `headsmith_core::storage`, selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `json` (default): single JSON file backend
//! - `inmemory`: volatile backend for tests and demos
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! [`SeoStore`]: headsmith_core::storage::SeoStore

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "json", feature = "inmemory"))]
compile_error!(
    "Features 'json' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "json", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'json' or 'inmemory' feature. \
    Example: cargo build -p headsmith --features json"
);

#[cfg(feature = "json")]
pub mod json;

// Compiled for unit tests as well so `AppState::default()` has a backend.
#[cfg(any(test, feature = "inmemory"))]
pub mod inmemory;

#[cfg(feature = "json")]
pub use json::JsonFileStore;

#[cfg(any(test, feature = "inmemory"))]
pub use inmemory::InMemoryStore;
