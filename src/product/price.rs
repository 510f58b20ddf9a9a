//! Price text parsing
//!
//! Price elements carry free text such as `"$19.99"`, `"Now only 5"` or
//! `"CAD 24.50 each"`. The first decimal number in the text is the price.

use regex::Regex;
use std::sync::LazyLock;

/// Optional sign, then either digits with an optional fraction or a bare fraction
static PRICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[-+]?(?:\d+(?:\.\d+)?|\.\d+)").expect("price pattern is valid")
});

/// Extracts the leftmost decimal number from a price string
///
/// Currency symbols and words are skipped because the pattern never matches
/// them. Thousands separators are not understood: `"1,299.00"` parses as `1.0`.
///
/// # Returns
///
/// * `Some(f64)` - The first number found, sign included
/// * `None` - The text contains no number
///
/// # Examples
///
/// ```
/// use discount_scout::extract_price;
///
/// assert_eq!(extract_price("$19.99"), Some(19.99));
/// assert_eq!(extract_price("Now only 5"), Some(5.0));
/// assert_eq!(extract_price("-3.5% off"), Some(-3.5));
/// assert_eq!(extract_price("no numbers here"), None);
/// ```
pub fn extract_price(raw_text: &str) -> Option<f64> {
    let found = PRICE_PATTERN.find(raw_text)?;
    found.as_str().parse::<f64>().ok()
}
