//! Line splitting and noise detection.
//!
//! Input is cut on any run of `\n`/`\r`, so Unix, Windows and old Mac line
//! endings all behave the same. Header rows copied from dictionary apps and
//! page-progress markers from scanned exports are recognized as noise.

use std::sync::LazyLock;

use regex::Regex;

/// Prefixes of header rows exported by word-list apps and scanners.
pub const NOISE_PREFIXES: [&str; 6] = ["Word", "Meaning", "共", "扫描", "全部", "复习"];

/// Page-progress marker such as "3/20".
static PROGRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+/[0-9]+").expect("valid progress regex"));

/// Splits `input` into trimmed, non-empty lines.
pub fn split_lines(input: &str) -> impl Iterator<Item = &str> {
    input
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
}

/// Returns true if `line` is a header row or a progress marker.
///
/// The prefix match is case-sensitive: "Word" is a header, "word" is a word.
#[must_use]
pub fn is_noise(line: &str) -> bool {
    NOISE_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) || PROGRESS_RE.is_match(line)
}
