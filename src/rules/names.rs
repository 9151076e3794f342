//! File-name rules
//!
//! Matched against the full file name before any extension rule runs, so
//! well-known names win over whatever extension they happen to carry
//! (`Makefile.old` is still a Makefile).

use crate::glyph;
use crate::rules::IconRule;

/// Ordered name rules; all match by prefix
pub const NAME_RULES: &[IconRule] = &[
    // Development
    IconRule::prefix("Makefile", glyph::MAKEFILE),
    IconRule::prefix("Dockerfile, docker-compose", glyph::DOCKER),
    // Other
    IconRule::prefix("LICENSE, license, copying, COPYING", glyph::LICENSE),
];
