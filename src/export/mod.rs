//! Output collaborators for a finished comparison.
//!
//! - [`render_summary`] produces the on-screen text.
//! - [`DocumentExporter`] produces a paginated calculation statement.
//! - [`ShareLinkBuilder`] produces a prefilled message and deep link.
//!
//! All amounts are rounded to cents here and only here.

mod document;
mod format;
mod renderer;
mod share;

pub use document::{Document, DocumentExporter, PAGE_BREAK, Page};
pub use format::{center, format_currency, format_date, pad_line, wrap_text};
pub use renderer::{NOT_OWED, SUMMARY_WIDTH, UNAVAILABLE, render_summary};
pub use share::{ShareLink, ShareLinkBuilder, percent_encode};
