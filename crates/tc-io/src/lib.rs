//! `tc-io` — request adapters over the transit catalogue.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`requests`] | `RequestDocument`, `BaseRequest`, `StatRequest`, `populate` |
//! | [`response`] | `StatResponse`, `RouteItem`                                |
//! | [`system`]   | `TransitSystem`: catalogue + router answering requests     |
//! | [`json`]     | `read_document`, `process_json`                            |
//! | [`text`]     | Legacy line format: `parse_base_line`, `process_text`      |
//! | [`error`]    | `IoError`, `IoResult<T>`                                   |
//!
//! Both formats feed the same [`BaseRequest`] list into [`populate`], so
//! ingestion order (stops, distances, buses) is identical for either.

pub mod error;
pub mod json;
pub mod requests;
pub mod response;
pub mod system;
pub mod text;

#[cfg(test)]
mod tests;

pub use error::{IoError, IoResult};
pub use json::{process_json, read_document};
pub use requests::{BaseRequest, RequestDocument, StatRequest, populate};
pub use response::{RouteItem, StatResponse};
pub use system::TransitSystem;
pub use text::process_text;
