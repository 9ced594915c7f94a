//! Assignment-line classification.
//!
//! Decides whether a line of `openttsd.conf` is a real assignment of a given
//! setting or just text that happens to mention it.
//!
//! # The rule (for beginners)
//!
//! Only lines that contain the setting name somewhere, even inside a longer
//! word, are looked at.  Such a line is split into words on ASCII
//! whitespace.  Lines are raw bytes, so a comment in any encoding passes
//! through untouched.  The tokens `#` and a literal tab are ignored
//! completely, so a commented-out example such as `# DefaultRate 0` still
//! counts as an assignment and gets rewritten into a live setting.  Every
//! other word that is not the setting name is an "unknown" word.  Meeting
//! the name after an unknown word disqualifies the line; otherwise it assigns
//! the setting exactly when one unknown word was found.
//!
//! ```text
//! DefaultModule   espeak              -> assignment
//! # DefaultModule espeak              -> assignment (`#` ignored)
//! #DefaultModule                      -> assignment (one word holding the name)
//! # DefaultModule is festival         -> pass-through (two trailing words)
//! foo DefaultModule                   -> pass-through (word before the name)
//! DefaultModule                       -> pass-through (no value)
//! ```
//!
//! When the scan meets the name after an unknown word it gives up
//! immediately; the counter is forced to [`DISQUALIFIED`], which is
//! indistinguishable from reaching two unknown words naturally.

/// Tokens that neither count as the setting name nor as an unknown word.
const IGNORED_TOKENS: [&[u8]; 2] = [b"#", b"\t"];

/// Counter value used to mark a line that mentions the name after other text.
const DISQUALIFIED: usize = 2;

/// Result of scanning a line for one setting name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineScan {
    /// Whether the setting name appeared as a whole word.
    pub name_seen: bool,
    /// Number of non-ignored words that are not the setting name.
    pub unknown: usize,
}

impl LineScan {
    /// A scan qualifies when exactly one unknown word was counted.
    pub fn qualifies(&self) -> bool {
        self.unknown == 1
    }
}

/// Scans `line` for the setting `name`.
pub fn scan(line: &[u8], name: &str) -> LineScan {
    let name = name.as_bytes();
    let mut result = LineScan {
        name_seen: false,
        unknown: 0,
    };

    let words = line
        .split(u8::is_ascii_whitespace)
        .filter(|word| !word.is_empty());
    for word in words {
        if IGNORED_TOKENS.contains(&word) {
            continue;
        }
        if word == name {
            if result.unknown != 0 {
                result.unknown = DISQUALIFIED;
                break;
            }
            result.name_seen = true;
        } else {
            result.unknown += 1;
        }
    }

    result
}

/// Returns `true` when `line` is a real assignment of setting `name`.
///
/// Lines that do not even contain `name` as a substring are rejected without
/// tokenizing.
pub fn assigns(line: &[u8], name: &str) -> bool {
    !name.is_empty() && contains(line, name.as_bytes()) && scan(line, name).qualifies()
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}
