//! Localized player messaging for the Rampart build gate.
//!
//! Splits player-facing text into two concerns: [`MessageCatalog`] resolves
//! a message key to a template in the best locale available and fills in
//! positional parameters; [`Messenger`] carries the rendered text to the
//! player over whatever channel the host engine provides.
//!
//! # Modules
//!
//! - [`catalog`] -- Locale-keyed templates, fallback chain, YAML loading
//! - [`messenger`] -- The delivery seam and a discard-everything stub

pub mod catalog;
pub mod messenger;

// Re-export primary types for convenience.
pub use catalog::{CatalogError, MessageCatalog, keys};
pub use messenger::{Messenger, NullMessenger};
