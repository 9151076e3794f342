//! lsicons - Nerd Font icon classification for file listings
//!
//! Maps a filesystem entry's name or extension to a single Nerd Font glyph
//! for display in a file-listing tool. The caller supplies a name, an
//! extension, and an is-link flag; this crate returns one glyph from a
//! fixed, compiled-in set.
//!
//! # Features
//!
//! - **File classification**: name rules first (Makefile, Dockerfile,
//!   LICENSE), then extension rules, then a default glyph
//! - **Directory classification**: well-known directory names, from `.git`
//!   to `__pycache__`
//! - **First-match-wins**: ordered static rule tables; order is part of the
//!   contract where patterns overlap
//! - **Total**: every input maps to a glyph; unrecognized entries get one
//!   of four defaults (file/dir, link or not)
//!
//! Matching is ASCII-case-insensitive throughout, and every call is a pure
//! function over `&'static` tables, so the API is freely shareable across
//! threads.
//!
//! # Example
//!
//! ```
//! use lsicons::{dir_icon, file_icon};
//!
//! // extension rules
//! assert_eq!(file_icon("main", "rs", false), "\u{e7a8}");
//!
//! // name rules take precedence over extensions
//! assert_eq!(file_icon("Makefile.old", "old", false), "\u{e779}");
//!
//! // directories have their own table
//! assert_eq!(dir_icon("node_modules", false), "\u{e5fa}");
//! ```

pub mod classify;
pub mod glyph;
pub mod matcher;
pub mod rules;

// Re-exports for convenience
pub use classify::{dir_icon, file_icon};
pub use matcher::MatchMode;
pub use rules::IconRule;
