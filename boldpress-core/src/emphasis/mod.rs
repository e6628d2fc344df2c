//! Keyword emphasis for paragraphs of text.
//!
//! The splitter turns a line into an ordered list of [`Segment`]s, each either
//! plain or emphasized. Document builders render emphasized segments as bold
//! runs.
//!
//! ```rust
//! use boldpress::emphasis::{render_marked, split, KeywordSet};
//!
//! let keywords = KeywordSet::new(["SQL", "ETL"]).unwrap();
//! let segments = split("SQL ETL", &keywords);
//! assert_eq!(render_marked(&segments), "**SQL** **ETL**");
//! ```

mod keywords;
mod splitter;

pub use keywords::KeywordSet;
pub use splitter::{render_marked, split, Segment};
