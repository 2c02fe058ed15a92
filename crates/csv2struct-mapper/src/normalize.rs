//! Header normalization: raw CSV headers into identifier-safe field names.

use csv2struct_model::CaseStrategy;

/// Normalize every header under the given strategy, preserving order.
pub fn normalize_headers(headers: &[String], strategy: CaseStrategy) -> Vec<String> {
    headers
        .iter()
        .map(|header| normalize_header(header, strategy))
        .collect()
}

/// Normalize one header.
pub fn normalize_header(header: &str, strategy: CaseStrategy) -> String {
    match strategy {
        CaseStrategy::Pascal => strip_invalid(header),
        CaseStrategy::Camel => title_case(&strip_invalid(header)),
        CaseStrategy::Snake => join_words(header, '_'),
        CaseStrategy::Kebab => join_words(header, '-'),
        CaseStrategy::Space => join_words(header, ' '),
    }
}

/// Split on the delimiter, title-case each stripped word, join, strip again.
///
/// The second strip removes a leading digit exposed by joining words whose
/// own leading characters were all stripped away.
fn join_words(header: &str, delimiter: char) -> String {
    let joined: String = header
        .split(delimiter)
        .map(|word| title_case(&strip_invalid(word).to_ascii_lowercase()))
        .collect();
    strip_invalid(&joined)
}

/// Drop everything outside ASCII letters and digits, plus a digit sitting at
/// the very start of the word. Digits later in the word are kept.
fn strip_invalid(word: &str) -> String {
    word.char_indices()
        .filter(|&(index, ch)| {
            ch.is_ascii_alphanumeric() && !(index == 0 && ch.is_ascii_digit())
        })
        .map(|(_, ch)| ch)
        .collect()
}

/// Upper-case the first character, leaving the rest untouched.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.push(first.to_ascii_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
