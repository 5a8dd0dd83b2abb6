//! lexlight - syntax styling and brace matching for text editors
//!
//! Two pure engines over an immutable text snapshot:
//! - [`syntax::style`] classifies the text into styled spans for a
//!   [`syntax::LanguageDefinition`]
//! - [`brackets`] finds bracket partners, pairs and unmatched brackets
//!
//! Neither keeps state between calls, so both can run on any thread.
//! [`engine::Engine`] wraps them with the large-document size policy.
//! All offsets are `char` offsets; [`text`] converts to and from bytes.

pub mod brackets;
pub mod config;
pub mod engine;
pub mod error;
pub mod syntax;
pub mod terminal;
pub mod text;

pub use engine::{Engine, Limits, Outcome, TooLarge};
pub use error::{LexlightError, Result};
