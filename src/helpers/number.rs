//! Number - Numeric Helpers
//!
//! Thousands-separator formatting for the memory input display, and the
//! power-of-two test used by memory validation.

/// Check whether `n` is a power of two.
///
/// Zero and negative numbers are never powers of two.
pub fn is_power_of_two(n: i64) -> bool {
    n > 0 && n & (n - 1) == 0
}

/// Format a number with en-US thousand separators
pub fn format_number(n: i64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();
    let len = chars.len();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (len - i) % 3 == 0 && *c != '-' {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format an optional memory size for the input widget.
///
/// `None` renders as the empty string so an unset field stays blank. Zero
/// also renders empty, so a cleared entry does not resurface as "0".
pub fn format_with_commas(n: Option<i64>) -> String {
    match n {
        None | Some(0) => String::new(),
        Some(value) => format_number(value),
    }
}

/// Strip `,` grouping separators from raw field input
pub fn strip_grouping(raw: &str) -> String {
    raw.replace(',', "")
}
