//! File-extension rules
//!
//! The largest table. Only the final extension component is ever tested
//! (`archive.tar.gz` arrives here as `gz`); the caller derives it. Rule
//! order is load-bearing where patterns overlap: the exact `zsh, bash, sh`
//! rule must precede the `zsh, bash` prefix rule so a plain shell script
//! gets the shell glyph while `zshrc`-style rc extensions fall through to
//! the settings glyph.

use crate::glyph;
use crate::rules::IconRule;

/// Lossless audio formats, one shared glyph
const LOSSLESS_AUDIO: &str = "8svx, iff, aiff, aif, aifc, au, snd, bwf, wav, wave, cdda, raw, \
                              pcm, sam, ra, ram, flac, la, pac, ape, ofr, ofs, off, rka, shn, \
                              tak, tta, wv, brstm, dts, dtshd, dtsma, ast, aw, psf, alac, m4a";

/// Lossy audio formats, same glyph as lossless
const LOSSY_AUDIO: &str = "amr, 3ga, mp1, mp2, mp3, spx, gsm, wma, aac, mpc, vqf, ots, swa, \
                           vox, voc, dwd, smp, ogg, oga, opus";

/// Playlist formats
const PLAYLIST: &str = "cue, aimppl, asx, xpl, xspf, zpl, m3u, m3u8, pls";

/// Video container formats
const VIDEO: &str = "avi, flv, mkv, mov, mp4, ogv, webm";

/// Ordered extension rules
pub const EXTENSION_RULES: &[IconRule] = &[
    // Apple metadata
    IconRule::exact("DS_Store", glyph::APPLE),
    // Configuration
    IconRule::exact("json", glyph::JSON),
    IconRule::exact("lock", glyph::LOCK),
    IconRule::exact("ini, yaml, yml, env, toml", glyph::SETTINGS),
    // Markup and data
    IconRule::exact("html", glyph::HTML),
    IconRule::exact("md", glyph::MARKDOWN),
    IconRule::exact("xml, ui", glyph::XML),
    // Git
    IconRule::prefix("git", glyph::GIT),
    // Shell and terminal
    IconRule::exact("zsh, bash, sh", glyph::SHELL),
    IconRule::prefix("zsh, bash", glyph::SETTINGS),
    IconRule::prefix("vim", glyph::VIM),
    // Databases
    IconRule::exact("sql, sqlite", glyph::DATABASE),
    // Audio
    IconRule::exact(LOSSLESS_AUDIO, glyph::MUSIC),
    IconRule::exact(LOSSY_AUDIO, glyph::MUSIC),
    IconRule::exact(PLAYLIST, glyph::PLAYLIST),
    // Video
    IconRule::exact(VIDEO, glyph::VIDEO),
    // Programming languages
    IconRule::exact("h, hh, hpp, hxx, h++", glyph::LANG_C),
    IconRule::exact("c", glyph::LANG_C),
    IconRule::exact("cc, cpp, cxx, c++", glyph::LANG_CPP),
    IconRule::exact("cs", glyph::LANG_CSHARP),
    IconRule::exact("clj, cljs, cljc, edn", glyph::CLOJURE),
    IconRule::exact("coffee, litcoffee", glyph::COFFEESCRIPT),
    IconRule::exact("ex, exs, eex", glyph::ELIXIR),
    IconRule::exact("elm", glyph::ELM),
    IconRule::exact("erl, hrl", glyph::ERLANG),
    IconRule::exact("fs, fsi, fsscript", glyph::FSHARP),
    IconRule::exact("go", glyph::GO),
    IconRule::exact("hs, lhs", glyph::HASKELL),
    IconRule::exact("java, class, jar", glyph::JAVA),
    IconRule::exact("js", glyph::JAVASCRIPT),
    IconRule::exact("jl", glyph::JULIA),
    IconRule::exact("lua", glyph::LUA),
    IconRule::exact("pl, pm, t, pod", glyph::PERL),
    IconRule::exact("pro, P", glyph::PROLOG),
    IconRule::exact("py, pyc, pyd, pyx", glyph::PYTHON),
    IconRule::exact("rb", glyph::RUBY),
    IconRule::exact("rs, rlib", glyph::RUST),
    IconRule::exact("scala, sc", glyph::SCALA),
    IconRule::exact("swift", glyph::SWIFT),
    IconRule::exact("ts, tsx", glyph::TYPESCRIPT),
];
