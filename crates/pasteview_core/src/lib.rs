//! Core library for PasteView (line gutter, paste controls, language catalog).

/// Configuration loading and defaults.
pub mod config;
/// Shared constants used across PasteView crates.
pub mod constants;
/// Paste form state: expiration, encryption, field serialization.
pub mod controls;
/// Environment overrides for tests that read process configuration.
#[cfg(any(test, feature = "test-support"))]
pub mod env;
/// Application error types.
pub mod error;
/// `#L<n>` deep-link fragment codec.
pub mod fragment;
/// Line-number gutter synchronizer and its host interfaces.
pub mod gutter;
/// Language catalog served to the language picker.
pub mod languages;
/// Responsive breakpoint tracking.
pub mod layout;
/// Text helpers for source blocks and the live editor buffer.
pub mod text;

pub use config::Config;
pub use constants::DEFAULT_PORT;
pub use error::AppError;
pub use fragment::LineFragment;
pub use gutter::{GutterSurface, HighlightBar, LineGutter, Location, SourceMode, Viewport};
pub use languages::{Language, LanguageCatalog, LanguageGroup};
