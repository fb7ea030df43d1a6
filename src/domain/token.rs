use std::borrow::Cow;

use super::error::DomainError;

/// Dash and minus code points accepted as a leading sign
///
/// Hyphen-minus, hyphen, non-breaking hyphen, figure dash, en dash, em dash,
/// horizontal bar, minus sign, small em dash, small hyphen-minus and
/// fullwidth hyphen-minus.
pub const MINUS_SIGNS: [char; 11] = [
    '\u{002D}', '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}',
    '\u{2212}', '\u{FE58}', '\u{FE63}', '\u{FF0D}',
];

/// Split a line into whitespace-delimited tokens
///
/// Any run of whitespace separates tokens, so blank lines yield nothing.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Rewrite a leading dash variant to an ASCII minus
///
/// Only the first character is considered; interior dashes are left alone
/// and will make the token malformed.
pub fn normalize_sign(token: &str) -> Cow<'_, str> {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first != '-' && MINUS_SIGNS.contains(&first) => {
            let rest = chars.as_str();
            let mut normalized = String::with_capacity(rest.len() + 1);
            normalized.push('-');
            normalized.push_str(rest);
            Cow::Owned(normalized)
        }
        _ => Cow::Borrowed(token),
    }
}

/// Parse a single token as a base-10 signed 64-bit integer
pub fn parse_token(token: &str) -> Result<i64, DomainError> {
    normalize_sign(token)
        .parse::<i64>()
        .map_err(|source| DomainError::MalformedNumber {
            token: token.to_string(),
            source,
        })
}

/// Whether a parsed value is added to the total
///
/// Every token is parsed and validated, but only positive even values are
/// summed. Zero, odd and negative values are skipped.
pub fn counts_toward_sum(value: i64) -> bool {
    value > 0 && value % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn tokenize_simple_line() {
        let tokens: Vec<_> = tokenize("2 4").collect();
        assert_eq!(tokens, vec!["2", "4"]);
    }

    #[test]
    fn tokenize_empty_and_blank_lines() {
        assert_eq!(tokenize("").count(), 0);
        assert_eq!(tokenize("\r\n \r \n \t \t\t \r\r\n\r").count(), 0);
    }

    #[test]
    fn tokenize_mixed_whitespace() {
        let tokens: Vec<_> = tokenize("2 \r\n 2 \r 2 \n 2 \n\r 2 \t2\t2\n2\r2").collect();
        assert_eq!(tokens.len(), 9);
        assert!(tokens.iter().all(|t| *t == "2"));
    }

    #[test]
    fn normalize_leaves_plain_tokens_borrowed() {
        assert!(matches!(normalize_sign("123"), Cow::Borrowed("123")));
        assert!(matches!(normalize_sign("-123"), Cow::Borrowed("-123")));
        assert!(matches!(normalize_sign(""), Cow::Borrowed("")));
    }

    #[test]
    fn normalize_rewrites_each_dash_variant() {
        for dash in MINUS_SIGNS {
            let token = format!("{dash}42");
            assert_eq!(normalize_sign(&token), "-42", "variant U+{:04X}", dash as u32);
        }
    }

    #[test]
    fn normalize_ignores_interior_dashes() {
        assert_eq!(normalize_sign("2\u{2014}3"), "2\u{2014}3");
    }

    #[test]
    fn parse_plain_integers() {
        assert_eq!(parse_token("0").unwrap(), 0);
        assert_eq!(parse_token("124").unwrap(), 124);
        assert_eq!(parse_token("-124").unwrap(), -124);
        assert_eq!(parse_token("+7").unwrap(), 7);
    }

    #[test]
    fn parse_unicode_minus_variants() {
        assert_eq!(parse_token("\u{2014}2").unwrap(), -2);
        assert_eq!(parse_token("\u{2013}2").unwrap(), -2);
        assert_eq!(parse_token("\u{2012}2").unwrap(), -2);
        assert_eq!(parse_token("\u{2212}2").unwrap(), -2);
    }

    #[test]
    fn parse_i64_bounds() {
        assert_eq!(parse_token("9223372036854775807").unwrap(), i64::MAX);
        assert_eq!(parse_token("\u{2212}9223372036854775808").unwrap(), i64::MIN);
        assert!(parse_token("9223372036854775808").is_err());
    }

    #[test]
    fn only_positive_even_values_count() {
        for value in [2, 8, 124, i64::MAX - 1] {
            assert!(counts_toward_sum(value), "{value}");
        }
        for value in [0, 1, 123, -2, -124, i64::MIN, i64::MAX] {
            assert!(!counts_toward_sum(value), "{value}");
        }
    }

    #[test]
    fn reject_malformed_tokens() {
        for token in ["qwe", "2-", "-", "\u{2014}", "45.5", "3,14", "", "--2", "2\u{2212}3", "1e3", "٣"] {
            let err = parse_token(token).unwrap_err();
            assert_eq!(err.token(), token);
        }
    }

    proptest! {
        #[test]
        fn dash_prefixed_numbers_parse_as_negative(
            value in 0i64..=i64::MAX,
            dash in proptest::sample::select(MINUS_SIGNS.to_vec()),
        ) {
            let token = format!("{dash}{value}");
            prop_assert_eq!(parse_token(&token).unwrap(), -value);
        }

        #[test]
        fn plain_integers_round_trip(value in any::<i64>()) {
            prop_assert_eq!(parse_token(&value.to_string()).unwrap(), value);
        }
    }
}
