//! Blocklist patterns
//!
//! Fixed, ordered list of literal substrings that mark a coordination message
//! as a known attack signature. The scan is a plain case-insensitive substring
//! search; encoded or obfuscated variants are not detected.

use std::fmt;

/// A single blocklist entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockedPattern {
    ScriptTag,
    JavascriptUri,
    PhpTag,
    ExecCall,
}

/// Blocklist in match priority order. The first entry found anywhere in the
/// text is the one reported.
pub const BLOCKLIST: [BlockedPattern; 4] = [
    BlockedPattern::ScriptTag,
    BlockedPattern::JavascriptUri,
    BlockedPattern::PhpTag,
    BlockedPattern::ExecCall,
];

impl BlockedPattern {
    /// The literal (lowercase) substring this entry matches
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockedPattern::ScriptTag => "<script",
            BlockedPattern::JavascriptUri => "javascript:",
            BlockedPattern::PhpTag => "<?php",
            BlockedPattern::ExecCall => "exec(",
        }
    }
}

impl fmt::Display for BlockedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the first blocklist entry contained in `text`, ignoring case.
pub fn find_blocked_pattern(text: &str) -> Option<BlockedPattern> {
    let lowered = text.to_lowercase();
    BLOCKLIST
        .iter()
        .copied()
        .find(|pattern| lowered.contains(pattern.as_str()))
}
