// Pattern tokens: digit-annotated substrings such as `hy3ph` or `.ab2`

use texhyph_core::character::simple_lower;
use texhyph_core::weights::Weight;

/// A decoded pattern token.
///
/// The token `ze3ro` decodes to the segment `zero` with the weights
/// `[0, 0, 3, 0, 0]`: one weight per inter-letter position, including the
/// positions before the first and after the last letter. Positions with no
/// digit get weight 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// The token as written in the table.
    pub source: String,
    /// The letters of the token, case-folded, digits removed.
    pub segment: Vec<char>,
    /// `segment.len() + 1` weights.
    pub weights: Vec<Weight>,
    /// Whether some position carried a run of more than one digit.
    pub multi_digit: bool,
}

impl Pattern {
    /// Decode a pattern token.
    ///
    /// A run of contiguous digits is read as one decimal number and stored
    /// at the position where it occurs. Values that do not fit a `u32`
    /// saturate.
    pub fn parse(token: &str) -> Self {
        let mut segment = Vec::with_capacity(token.len());
        let mut weights: Vec<Weight> = vec![0];
        let mut run_len = 0usize;
        let mut multi_digit = false;

        for c in token.chars() {
            if let Some(d) = c.to_digit(10) {
                // `weights` always holds the slot for the current position
                if let Some(slot) = weights.last_mut() {
                    *slot = if run_len == 0 {
                        d
                    } else {
                        slot.saturating_mul(10).saturating_add(d)
                    };
                }
                run_len += 1;
                multi_digit |= run_len > 1;
            } else {
                segment.push(simple_lower(c));
                weights.push(0);
                run_len = 0;
            }
        }

        Self {
            source: token.to_string(),
            segment,
            weights,
            multi_digit,
        }
    }

    /// The segment as a string.
    pub fn segment_str(&self) -> String {
        self.segment.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn digit_first() {
        let p = Pattern::parse("4zb");
        assert_eq!(p.segment, chars("zb"));
        assert_eq!(p.weights, vec![4, 0, 0]);
        assert!(!p.multi_digit);
    }

    #[test]
    fn digit_in_the_middle() {
        let p = Pattern::parse("ze3ro");
        assert_eq!(p.segment_str(), "zero");
        assert_eq!(p.weights, vec![0, 0, 3, 0, 0]);
    }

    #[test]
    fn digit_last() {
        let p = Pattern::parse("za1");
        assert_eq!(p.segment_str(), "za");
        assert_eq!(p.weights, vec![0, 0, 1]);
    }

    #[test]
    fn several_digits() {
        let p = Pattern::parse("b1a1r");
        assert_eq!(p.weights, vec![0, 1, 1, 0]);
    }

    #[test]
    fn boundary_dots_are_letters() {
        let p = Pattern::parse(".ab2");
        assert_eq!(p.segment_str(), ".ab");
        assert_eq!(p.weights, vec![0, 0, 0, 2]);
    }

    #[test]
    fn no_digits() {
        let p = Pattern::parse("z");
        assert_eq!(p.segment_str(), "z");
        assert_eq!(p.weights, vec![0, 0]);
    }

    #[test]
    fn multi_digit_run_is_used_and_flagged() {
        let p = Pattern::parse("a12b");
        assert_eq!(p.segment_str(), "ab");
        assert_eq!(p.weights, vec![0, 12, 0]);
        assert!(p.multi_digit);
    }

    #[test]
    fn multi_digit_run_saturates() {
        let p = Pattern::parse("a99999999999b");
        assert_eq!(p.weights[1], u32::MAX);
    }

    #[test]
    fn letters_are_folded() {
        let p = Pattern::parse("Hy3Ph");
        assert_eq!(p.segment_str(), "hyph");
        assert_eq!(p.source, "Hy3Ph");
    }

    #[test]
    fn weights_length_invariant() {
        for token in ["", "1", "a", "1a1", "abc", "2ab3c4"] {
            let p = Pattern::parse(token);
            assert_eq!(p.weights.len(), p.segment.len() + 1, "token {token:?}");
        }
    }
}
