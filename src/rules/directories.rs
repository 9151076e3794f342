//! Directory-name rules
//!
//! Matched against a directory's base name. Covers version control, trash,
//! shell and tool dotdirs, package-manager caches, IDE directories, common
//! user folders, and language caches. Mostly prefix rules; `.idea` and
//! `__pycache__` are exact so near-misses fall through to the default.

use crate::glyph;
use crate::rules::IconRule;

/// Ordered directory rules
pub const DIRECTORY_RULES: &[IconRule] = &[
    IconRule::prefix(".git, git", glyph::FOLDER_GIT),
    IconRule::prefix(".trash, trash", glyph::TRASH),
    IconRule::prefix(".bash", glyph::SHELL),
    IconRule::prefix(".bundle, .gem", glyph::RUBY),
    IconRule::prefix(".cargo, .rustup", glyph::RUST),
    IconRule::prefix(".config", glyph::FOLDER_CONFIG),
    IconRule::prefix(".docker", glyph::DOCKER),
    IconRule::prefix(".go", glyph::GO),
    IconRule::exact(".idea", glyph::INTELLIJ),
    IconRule::prefix(".mix", glyph::ELIXIR),
    IconRule::prefix(".npm, node_modules", glyph::FOLDER_NPM),
    IconRule::prefix(".vs, .vscode", glyph::VSCODE),
    IconRule::prefix(".weechat", glyph::WEECHAT),
    IconRule::prefix("application", glyph::APPLICATIONS),
    IconRule::prefix("bin", glyph::APPLICATIONS),
    IconRule::prefix("config", glyph::FOLDER_CONFIG),
    IconRule::prefix("desktop", glyph::DESKTOP),
    IconRule::prefix("download", glyph::FOLDER_DOWNLOAD),
    IconRule::prefix("library", glyph::LIBRARY),
    IconRule::prefix("movie", glyph::VIDEO),
    IconRule::prefix("music, songs, audio", glyph::MUSIC),
    IconRule::prefix("photo, picture", glyph::FOLDER_IMAGE),
    IconRule::exact("__pycache__", glyph::PYTHON),
    IconRule::prefix("video", glyph::VIDEO),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::first_match;

    #[test]
    fn test_version_control_dirs() {
        assert_eq!(first_match(DIRECTORY_RULES, ".git"), Some(glyph::FOLDER_GIT));
        assert_eq!(first_match(DIRECTORY_RULES, ".github"), Some(glyph::FOLDER_GIT));
        assert_eq!(first_match(DIRECTORY_RULES, "git-hooks"), Some(glyph::FOLDER_GIT));
        // containment is not a prefix
        assert_eq!(first_match(DIRECTORY_RULES, "my.git"), None);
    }

    #[test]
    fn test_exact_only_dirs() {
        assert_eq!(first_match(DIRECTORY_RULES, ".idea"), Some(glyph::INTELLIJ));
        assert_eq!(first_match(DIRECTORY_RULES, ".ideas"), None);
        assert_eq!(
            first_match(DIRECTORY_RULES, "__pycache__"),
            Some(glyph::PYTHON)
        );
        assert_eq!(first_match(DIRECTORY_RULES, "__pycache"), None);
    }

    #[test]
    fn test_dotted_rule_before_bare_rule() {
        // ".config" and "config" are separate rules mapping to the same glyph
        assert_eq!(first_match(DIRECTORY_RULES, ".config"), Some(glyph::FOLDER_CONFIG));
        assert_eq!(first_match(DIRECTORY_RULES, "configs"), Some(glyph::FOLDER_CONFIG));
    }

    #[test]
    fn test_toolchain_dirs() {
        assert_eq!(first_match(DIRECTORY_RULES, ".cargo"), Some(glyph::RUST));
        assert_eq!(first_match(DIRECTORY_RULES, ".rustup"), Some(glyph::RUST));
        assert_eq!(first_match(DIRECTORY_RULES, ".gopath"), Some(glyph::GO));
        assert_eq!(first_match(DIRECTORY_RULES, "node_modules"), Some(glyph::FOLDER_NPM));
        assert_eq!(first_match(DIRECTORY_RULES, ".npm-cache"), Some(glyph::FOLDER_NPM));
        assert_eq!(first_match(DIRECTORY_RULES, ".vscode"), Some(glyph::VSCODE));
    }

    #[test]
    fn test_user_folders() {
        assert_eq!(first_match(DIRECTORY_RULES, "Downloads"), Some(glyph::FOLDER_DOWNLOAD));
        assert_eq!(first_match(DIRECTORY_RULES, "Music"), Some(glyph::MUSIC));
        assert_eq!(first_match(DIRECTORY_RULES, "songs"), Some(glyph::MUSIC));
        assert_eq!(first_match(DIRECTORY_RULES, "Pictures"), Some(glyph::FOLDER_IMAGE));
        assert_eq!(first_match(DIRECTORY_RULES, "Videos"), Some(glyph::VIDEO));
        assert_eq!(first_match(DIRECTORY_RULES, "movies"), Some(glyph::VIDEO));
        assert_eq!(first_match(DIRECTORY_RULES, "binaries"), Some(glyph::APPLICATIONS));
    }

    #[test]
    fn test_unknown_dir_misses() {
        assert_eq!(first_match(DIRECTORY_RULES, "random_folder"), None);
        assert_eq!(first_match(DIRECTORY_RULES, "src"), None);
    }
}
