#![deny(missing_docs)]

//! Content models for the Google Gemini AI API.
//!
//! A [`Content`] is one turn of a conversation: an ordered list of [`Part`]s, each
//! holding either text or an inline [`ContentBlob`], plus an optional [`Role`].
//! Every model decodes from and encodes to the JSON shapes the API uses.

pub mod error;
pub mod models;

pub use error::ContentError;
pub use models::{Content, ContentBlob, Part, Role};
