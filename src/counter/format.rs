//! Display text for count-up values.
//!
//! The prefix is chosen by the counter's *target*, not by the value being
//! shown, so every frame of one animation carries the same decoration:
//!
//! | Target | Rendering |
//! |--------|-----------|
//! | `>= 1000` | `+` and the value with thousands grouping (`+1.500`) |
//! | the percent target (95) | `%` and the bare value (`%95`) |
//! | anything else | `+` and the bare value (`+42`) |

/// Targets at or above this value render with thousands grouping.
pub const GROUPING_THRESHOLD: u64 = 1000;

/// The one target value that renders as a percentage.
pub const DEFAULT_PERCENT_TARGET: u64 = 95;

/// Thousands separator of the page's display locale.
pub const DEFAULT_THOUSANDS_SEPARATOR: &str = ".";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountFormat {
    pub thousands_separator: String,
    pub percent_target: u64,
}

impl Default for CountFormat {
    fn default() -> Self {
        Self {
            thousands_separator: DEFAULT_THOUSANDS_SEPARATOR.to_string(),
            percent_target: DEFAULT_PERCENT_TARGET,
        }
    }
}

impl CountFormat {
    /// Render `value` as a frame of an animation counting up to `target`.
    pub fn render(&self, value: u64, target: u64) -> String {
        if target >= GROUPING_THRESHOLD {
            format!("+{}", group_thousands(value, &self.thousands_separator))
        } else if target == self.percent_target {
            format!("%{value}")
        } else {
            format!("+{value}")
        }
    }
}

/// Insert `separator` between every group of three digits, from the right.
///
/// - `999` → `"999"`
/// - `1500` → `"1.500"` (with `"."`)
/// - `1234567` → `"1.234.567"`
pub fn group_thousands(value: u64, separator: &str) -> String {
    let digits = value.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + (len / 3) * separator.len());
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(ch);
    }
    out
}

/// Parse a counter target from its data attribute.
///
/// Authors decorate targets the way they will be displayed (`"+1.500"`,
/// `"95%"`), so every non-digit character is dropped before parsing. Returns
/// `None` when no digits remain or the number does not fit in a `u64`.
pub fn parse_target(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
