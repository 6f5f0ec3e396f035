//! Top-level token splitting.
//!
//! [§ 2.1 Component value combinators](https://www.w3.org/TR/css-values-4/#component-combinators)
//!
//! Shorthand values are sequences of components separated by whitespace (or
//! commas, inside functions). A function call such as `repeat(3, 1fr)` or
//! `rgba(0, 0, 0, 0.5)` is a single component even though it contains
//! separators, so splitting tracks parenthesis depth and only breaks at
//! depth zero.

/// Split `input` on ASCII whitespace outside parentheses.
///
/// ```
/// use trellis_style::parser::tokenize::split_whitespace_top_level;
///
/// assert_eq!(
///     split_whitespace_top_level("100px repeat(2, 1fr) auto"),
///     vec!["100px", "repeat(2, 1fr)", "auto"]
/// );
/// ```
#[must_use]
pub fn split_whitespace_top_level(input: &str) -> Vec<&str> {
    split_top_level(input, |c| c.is_ascii_whitespace())
}

/// Split `input` on commas outside parentheses, trimming each piece.
///
/// Empty pieces (`a,,b`) are dropped.
#[must_use]
pub fn split_commas_top_level(input: &str) -> Vec<&str> {
    split_top_level(input, |c| c == ',')
}

/// Split on `is_separator` at parenthesis depth zero.
///
/// An unbalanced `(` swallows the rest of the input into one token; a stray
/// `)` is ignored.
fn split_top_level(input: &str, is_separator: impl Fn(char) -> bool) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (index, c) in input.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if depth == 0 && is_separator(c) => {
                push_trimmed(&mut tokens, &input[start..index]);
                start = index + c.len_utf8();
            }
            _ => {}
        }
    }
    push_trimmed(&mut tokens, &input[start..]);

    tokens
}

fn push_trimmed<'a>(tokens: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        tokens.push(piece);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(
            split_whitespace_top_level("  1px \t 2px\n3px  "),
            vec!["1px", "2px", "3px"]
        );
    }

    #[test]
    fn test_function_stays_one_token() {
        assert_eq!(
            split_whitespace_top_level("inset 0 0 4px rgba(0, 0, 0, 0.5)"),
            vec!["inset", "0", "0", "4px", "rgba(0, 0, 0, 0.5)"]
        );
    }

    #[test]
    fn test_nested_parentheses() {
        assert_eq!(
            split_whitespace_top_level("repeat(2, minmax(10px, 1fr)) 1fr"),
            vec!["repeat(2, minmax(10px, 1fr))", "1fr"]
        );
    }

    #[test]
    fn test_unbalanced_open_paren_swallows_rest() {
        assert_eq!(
            split_whitespace_top_level("1fr repeat(2, 1fr"),
            vec!["1fr", "repeat(2, 1fr"]
        );
    }

    #[test]
    fn test_commas() {
        assert_eq!(
            split_commas_top_level("90deg, rgb(0, 0, 0) , ,#fff"),
            vec!["90deg", "rgb(0, 0, 0)", "#fff"]
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(split_whitespace_top_level("").is_empty());
        assert!(split_whitespace_top_level("   ").is_empty());
    }
}
