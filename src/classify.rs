//! Classification pipelines
//!
//! The two entry points consumed by a file lister. Both walk ordered rule
//! tables, first match wins, and fall back to one of the four default
//! glyphs when nothing matches. Classification never fails: unrecognized
//! or empty inputs degrade to a default.

use crate::glyph;
use crate::rules::{directories, extensions, first_match, names};

/// Icon for a regular file, or a symlink to one.
///
/// `name` is the full file name, `extension` its final extension component
/// (empty when there is none); the caller derives both from the actual
/// entry. Name rules run first, so a `Makefile.old` keeps the Makefile
/// glyph; extension rules only decide when the name pass produced no
/// specific match.
pub fn file_icon(name: &str, extension: &str, is_link: bool) -> &'static str {
    let by_name = file_icon_by_name(name, is_link);
    if !extension.is_empty() && glyph::is_default_file(by_name) {
        return file_icon_by_ext(extension, is_link);
    }
    by_name
}

/// Icon for a directory, or a symlink to one.
///
/// `name` is the directory's base name.
pub fn dir_icon(name: &str, is_link: bool) -> &'static str {
    first_match(directories::DIRECTORY_RULES, name).unwrap_or_else(|| glyph::default_dir(is_link))
}

fn file_icon_by_name(name: &str, is_link: bool) -> &'static str {
    first_match(names::NAME_RULES, name).unwrap_or_else(|| glyph::default_file(is_link))
}

fn file_icon_by_ext(extension: &str, is_link: bool) -> &'static str {
    first_match(extensions::EXTENSION_RULES, extension)
        .unwrap_or_else(|| glyph::default_file(is_link))
}
