//! Glyph constants for lsicons
//!
//! The closed set of Nerd Font glyphs the classifiers can return. Each
//! constant is a single code point in the Nerd Font private-use ranges,
//! encoded as a `&'static str` so callers can render it directly.

// Defaults, chosen by {file, directory} x {link, not link}

/// Plain file with no matching rule
pub const FILE: &str = "\u{f713}";

/// Symlink to a file with no matching rule
pub const FILE_LINK: &str = "\u{f71c}";

/// Plain directory with no matching rule
pub const FOLDER: &str = "\u{f74a}";

/// Symlink to a directory with no matching rule
pub const FOLDER_LINK: &str = "\u{f751}";

// Well-known file kinds

pub const APPLE: &str = "\u{f534}";
pub const JSON: &str = "\u{fb25}";
pub const LOCK: &str = "\u{f83d}";
pub const SETTINGS: &str = "\u{f423}";
pub const HTML: &str = "\u{f13b}";
pub const MARKDOWN: &str = "\u{e609}";
pub const XML: &str = "\u{f44f}";
pub const GIT: &str = "\u{f7a3}";
pub const SHELL: &str = "\u{e795}";
pub const VIM: &str = "\u{e62b}";
pub const DATABASE: &str = "\u{f1c0}";
pub const MUSIC: &str = "\u{f886}";
pub const PLAYLIST: &str = "\u{e602}";
pub const VIDEO: &str = "\u{f880}";
pub const MAKEFILE: &str = "\u{e779}";
pub const DOCKER: &str = "\u{f308}";
pub const LICENSE: &str = "\u{f69a}";

// Programming languages

pub const LANG_C: &str = "\u{fb70}";
pub const LANG_CPP: &str = "\u{fb71}";
pub const LANG_CSHARP: &str = "\u{f81a}";
pub const CLOJURE: &str = "\u{e76a}";
pub const COFFEESCRIPT: &str = "\u{f0f4}";
pub const ELIXIR: &str = "\u{e62d}";
pub const ELM: &str = "\u{e62c}";
pub const ERLANG: &str = "\u{e7b1}";
pub const FSHARP: &str = "\u{e7a7}";
pub const GO: &str = "\u{fcd1}";
pub const HASKELL: &str = "\u{e61f}";
pub const JAVA: &str = "\u{e256}";
pub const JAVASCRIPT: &str = "\u{f81d}";
pub const JULIA: &str = "\u{e624}";
pub const LUA: &str = "\u{e620}";
pub const PERL: &str = "\u{e769}";
pub const PROLOG: &str = "\u{e7a1}";
pub const PYTHON: &str = "\u{f81f}";
pub const RUBY: &str = "\u{e791}";
pub const RUST: &str = "\u{e7a8}";
pub const SCALA: &str = "\u{e737}";
pub const SWIFT: &str = "\u{fbe3}";
pub const TYPESCRIPT: &str = "\u{fbe4}";

// Well-known directory kinds

pub const FOLDER_GIT: &str = "\u{e5fb}";
pub const TRASH: &str = "\u{f6bf}";
pub const FOLDER_CONFIG: &str = "\u{e5fc}";
pub const FOLDER_NPM: &str = "\u{e5fa}";
pub const INTELLIJ: &str = "\u{e7b5}";
pub const VSCODE: &str = "\u{fb0f}";
pub const WEECHAT: &str = "\u{f78b}";
pub const APPLICATIONS: &str = "\u{fb13}";
pub const DESKTOP: &str = "\u{f878}";
pub const FOLDER_DOWNLOAD: &str = "\u{f74c}";
pub const LIBRARY: &str = "\u{f830}";
pub const FOLDER_IMAGE: &str = "\u{f74e}";

/// Default glyph for a file, depending on whether it is a symlink
pub fn default_file(is_link: bool) -> &'static str {
    if is_link {
        FILE_LINK
    } else {
        FILE
    }
}

/// Default glyph for a directory, depending on whether it is a symlink
pub fn default_dir(is_link: bool) -> &'static str {
    if is_link {
        FOLDER_LINK
    } else {
        FOLDER
    }
}

/// Whether a glyph is one of the two generic file fallbacks.
///
/// The file pipeline uses this to decide that the by-name pass produced no
/// specific match and the by-extension pass should run.
pub fn is_default_file(glyph: &str) -> bool {
    glyph == FILE || glyph == FILE_LINK
}
