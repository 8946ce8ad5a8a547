//! Score Parser — recovers a bounded integer from the rubric call's raw output.
//!
//! The rubric prompt asks for a bare integer. The model usually complies, but
//! stray whitespace, a trailing "points" or a period must not break the pipeline.

use unicode_normalization::UnicodeNormalization;

use crate::errors::AppError;
use crate::scoring::models::MatchScore;

/// Keeps every digit in order, reads them as one numeral and clamps to `[0, 100]`.
/// Compatibility digits (full-width, superscript) are folded to ASCII first.
///
/// Fails with `ScoreParse` (carrying the raw text) when there are no digits at all.
pub fn parse_score(raw: &str) -> Result<MatchScore, AppError> {
    let digits: String = raw.nfkc().filter(char::is_ascii_digit).collect();

    if digits.is_empty() {
        return Err(AppError::ScoreParse {
            raw: raw.to_string(),
        });
    }

    // Any numeral too long for i64 is far above the upper bound anyway.
    let value = digits.parse::<i64>().unwrap_or(i64::MAX);
    Ok(MatchScore::clamped(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_integer() {
        assert_eq!(parse_score("73").unwrap().value(), 73);
    }

    #[test]
    fn test_padded_with_words() {
        assert_eq!(parse_score("  87  points ").unwrap().value(), 87);
    }

    #[test]
    fn test_digits_interspersed_are_concatenated_in_order() {
        assert_eq!(parse_score("Score: 6-4.").unwrap().value(), 64);
        assert_eq!(parse_score("**5**\n").unwrap().value(), 5);
    }

    #[test]
    fn test_leading_zeros() {
        assert_eq!(parse_score("007").unwrap().value(), 7);
        assert_eq!(parse_score("0").unwrap().value(), 0);
    }

    #[test]
    fn test_clamps_above_100() {
        assert_eq!(parse_score("150").unwrap().value(), 100);
        // "85/100" concatenates to 85100
        assert_eq!(parse_score("85/100").unwrap().value(), 100);
    }

    #[test]
    fn test_huge_numeral_clamps_instead_of_overflowing() {
        let raw = "9".repeat(64);
        assert_eq!(parse_score(&raw).unwrap().value(), 100);
    }

    #[test]
    fn test_full_width_digits() {
        assert_eq!(parse_score("８７").unwrap().value(), 87);
        assert_eq!(parse_score("Score：６０ points").unwrap().value(), 60);
    }

    #[test]
    fn test_minus_sign_is_ignored() {
        assert_eq!(parse_score("-12").unwrap().value(), 12);
    }

    #[test]
    fn test_no_digits_is_score_parse_error_with_raw_text() {
        for raw in ["", "   ", "eighty-seven", "N/A"] {
            match parse_score(raw) {
                Err(AppError::ScoreParse { raw: carried }) => assert_eq!(carried, raw),
                other => panic!("expected ScoreParse for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_every_in_range_value_recovered_from_noise() {
        for n in 0..=100u8 {
            let noisy: String = n
                .to_string()
                .chars()
                .flat_map(|c| [' ', c, '.'])
                .collect();
            assert_eq!(parse_score(&noisy).unwrap().value(), n, "input {noisy:?}");
        }
    }
}
