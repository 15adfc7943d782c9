//! Character classes used by the scanner.
//!
//! Identifiers accept characters of the Unicode letter categories and
//! continue with decimal digits of any script. Digits that start or continue
//! an integer literal are ASCII only.

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// Decimal digits.
pub const DECIMAL_DIGITS: &str = "0123456789";

/// Hexadecimal digits, both cases.
pub const HEX_DIGITS: &str = "0123456789abcdefABCDEF";

/// Octal digits.
pub const OCTAL_DIGITS: &str = "01234567";

/// Binary digits.
pub const BINARY_DIGITS: &str = "01";

/// Checks if a character may start an identifier.
///
/// # Example
///
/// ```
/// use asmc_lex::unicode::is_letter;
///
/// assert!(is_letter('m'));
/// assert!(is_letter('_'));
/// assert!(is_letter('α'));
/// assert!(!is_letter('1'));
/// assert!(!is_letter('$'));
/// assert!(!is_letter('Ⅻ'));
/// ```
#[inline]
pub fn is_letter(c: char) -> bool {
    c == '_' || c.general_category_group() == GeneralCategoryGroup::Letter
}

/// Checks if a character may continue an identifier.
///
/// # Example
///
/// ```
/// use asmc_lex::unicode::is_letter_or_digit;
///
/// assert!(is_letter_or_digit('0'));
/// assert!(is_letter_or_digit('_'));
/// assert!(!is_letter_or_digit('.'));
/// assert!(!is_letter_or_digit('²'));
/// ```
#[inline]
pub fn is_letter_or_digit(c: char) -> bool {
    is_letter(c) || c.general_category() == GeneralCategory::DecimalNumber
}

/// Checks if a character is an ASCII decimal digit.
#[inline]
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character is whitespace other than a newline.
///
/// Only space and horizontal tab are skipped between tokens.
#[inline]
pub fn is_space(c: char) -> bool {
    c == ' ' || c == '\t'
}
