//! Constants used throughout the validation system


/// Maximum number of words accepted in the remarks field
pub const MAX_REMARKS_WORDS: usize = 300;

/// Whitespace as the browser sees it when trimming and splitting form values,
/// written as the body of a regex character class.
/// Unlike `char::is_whitespace` it includes U+FEFF and leaves out U+0085.
pub const FORM_WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Character test matching [`FORM_WHITESPACE_CLASS`]
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}
