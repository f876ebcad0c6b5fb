//! Feedback calculation and ternary encoding
//!
//! Feedback for one guess against one answer is encoded base-3:
//! - 0 = letter absent from the answer
//! - 1 = letter present elsewhere (wrong position)
//! - 2 = exact position match
//!
//! The code is stored as a single u8 value (0-242), where the digit for
//! position i contributes digit × 3^i to the total, so the first letter is
//! the least-significant digit.

use super::word::{WORD_LEN, Word};

/// Number of distinct feedback codes (3^5)
pub const FEEDBACK_COUNT: u8 = 243;

/// Ternary-encoded feedback for one guess against one answer
///
/// Value range: 0-242.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback(u8);

impl Feedback {
    /// All exact matches (the guess is the answer)
    pub const PERFECT: Self = Self(242); // 2 + 2×3 + 2×9 + 2×27 + 2×81

    /// Get the raw code value (0-242)
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Check if every position is an exact match
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Compute the feedback when `guess` is played against `answer`
    ///
    /// Exact-match-first and duplicate-safe: a guess letter is only credited
    /// present-elsewhere against answer letters not already consumed by an
    /// exact match or an earlier present-elsewhere match.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact positional matches, consuming those answer letters
    /// 2. Second pass, left to right: mark present-elsewhere from the unconsumed pool
    /// 3. Encode the per-position states base-3
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slant").unwrap();
    /// let feedback = Feedback::compute(guess, answer);
    ///
    /// // c(absent) r(absent) a(exact) n(exact) e(absent)
    /// // 0 + 0×3 + 2×9 + 2×27 + 0×81 = 72
    /// assert_eq!(feedback.code(), 72);
    /// ```
    #[must_use]
    pub fn compute(guess: Word, answer: Word) -> Self {
        let mut states = [0u8; WORD_LEN];
        let mut unconsumed = [0u8; 26];
        for &letter in answer.chars() {
            unconsumed[usize::from(letter - b'a')] += 1;
        }

        // First pass: exact matches take priority and consume their letter
        // Allow: index needed to compare guess[i] with answer[i] and set states[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.chars()[i] == answer.chars()[i] {
                states[i] = 2;
                unconsumed[usize::from(guess.chars()[i] - b'a')] -= 1;
            }
        }

        // Second pass: present-elsewhere, consuming from what remains
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if states[i] == 0 {
                let letter = usize::from(guess.chars()[i] - b'a');
                if unconsumed[letter] > 0 {
                    states[i] = 1;
                    unconsumed[letter] -= 1;
                }
            }
        }

        Self(pack(&states))
    }

    /// Encode a raw ternary digit vector into a feedback code
    ///
    /// This is the same mixed-radix scheme `compute` uses, exposed standalone
    /// so typed feedback digits land in the identical code space. Returns
    /// `None` if any digit is outside {0, 1, 2}.
    ///
    /// # Examples
    /// ```
    /// use wordle_advisor::core::Feedback;
    ///
    /// let feedback = Feedback::from_digits([2, 1, 0, 0, 1]).unwrap();
    /// assert_eq!(feedback.code(), 2 + 3 + 81);
    /// assert!(Feedback::from_digits([0, 0, 3, 0, 0]).is_none());
    /// ```
    #[must_use]
    pub fn from_digits(digits: [u8; WORD_LEN]) -> Option<Self> {
        if digits.iter().any(|&d| d > 2) {
            return None;
        }
        Some(Self(pack(&digits)))
    }

    /// Parse a typed digit sequence like "02100" into a feedback code
    ///
    /// The digit at position i describes the guess's i-th letter. Returns
    /// `None` on wrong length or characters outside {0, 1, 2}.
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let bytes = input.trim().as_bytes();
        if bytes.len() != WORD_LEN {
            return None;
        }

        let mut digits = [0u8; WORD_LEN];
        for (digit, &byte) in digits.iter_mut().zip(bytes) {
            match byte {
                b'0'..=b'2' => *digit = byte - b'0',
                _ => return None,
            }
        }
        Self::from_digits(digits)
    }

    /// Decompose the code back into its per-position ternary digits
    #[must_use]
    pub fn digits(self) -> [u8; WORD_LEN] {
        let mut digits = [0u8; WORD_LEN];
        let mut val = self.0;
        for digit in &mut digits {
            *digit = val % 3;
            val /= 3;
        }
        digits
    }

    /// Count the number of exact-position matches in this code
    #[must_use]
    pub fn count_exact(self) -> u8 {
        self.digits().iter().filter(|&&d| d == 2).count() as u8
    }

    /// Count the number of present-elsewhere marks in this code
    #[must_use]
    pub fn count_present(self) -> u8 {
        self.digits().iter().filter(|&&d| d == 1).count() as u8
    }
}

/// Mixed-radix packing: digit at position i contributes digit × 3^i
fn pack(digits: &[u8; WORD_LEN]) -> u8 {
    let mut code = 0u8;
    let mut multiplier = 1u8;
    for &digit in digits {
        code += digit * multiplier;
        multiplier *= 3;
    }
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    /// Straightforward reference for words without repeated letters:
    /// exact if same position, else present if the letter occurs anywhere
    /// in the answer, else absent.
    fn naive_feedback(guess: Word, answer: Word) -> Feedback {
        let mut digits = [0u8; WORD_LEN];
        for i in 0..WORD_LEN {
            if guess.char_at(i) == answer.char_at(i) {
                digits[i] = 2;
            } else if answer.has_letter(guess.char_at(i)) {
                digits[i] = 1;
            }
        }
        Feedback::from_digits(digits).unwrap()
    }

    #[test]
    fn perfect_constant() {
        assert_eq!(Feedback::PERFECT.code(), 242);
        assert!(Feedback::PERFECT.is_perfect());
        assert_eq!(Feedback::PERFECT.digits(), [2, 2, 2, 2, 2]);
    }

    #[test]
    fn all_absent() {
        let feedback = Feedback::compute(word("abcde"), word("fghij"));
        assert_eq!(feedback.code(), 0);
        assert_eq!(feedback.digits(), [0, 0, 0, 0, 0]);
    }

    #[test]
    fn guess_equals_answer_is_perfect() {
        for text in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            let w = word(text);
            assert_eq!(Feedback::compute(w, w), Feedback::PERFECT);
        }
    }

    #[test]
    fn matches_naive_reference_without_repeats() {
        // Both guess and answer made of distinct letters
        let pairs = [
            ("crane", "slimy"),
            ("crane", "slant"),
            ("audio", "front"),
            ("night", "thing"),
            ("brick", "mound"),
        ];

        for (g, a) in pairs {
            let guess = word(g);
            let answer = word(a);
            assert_eq!(
                Feedback::compute(guess, answer),
                naive_feedback(guess, answer),
                "mismatch for {g} vs {a}"
            );
        }
    }

    #[test]
    fn duplicate_letters_speed_vs_erase() {
        // s(present) p(absent) e(present) e(present) d(absent)
        // ERASE holds two e's, so both guessed e's earn a present mark
        let feedback = Feedback::compute(word("speed"), word("erase"));
        assert_eq!(feedback.digits(), [1, 0, 1, 1, 0]);
        assert_eq!(feedback.code(), 37);
    }

    #[test]
    fn duplicate_letters_exact_takes_priority() {
        // robot vs floor: first o is present, second o is exact
        let feedback = Feedback::compute(word("robot"), word("floor"));
        assert_eq!(feedback.digits(), [1, 1, 0, 2, 0]);
        assert_eq!(feedback.count_exact(), 1);
        assert_eq!(feedback.count_present(), 2);
    }

    #[test]
    fn duplicate_marks_never_exceed_answer_count() {
        let pairs = [
            ("speed", "erase"),
            ("geese", "elude"),
            ("mamma", "drama"),
            ("allee", "label"),
            ("robot", "floor"),
        ];

        for (g, a) in pairs {
            let guess = word(g);
            let answer = word(a);
            let digits = Feedback::compute(guess, answer).digits();

            for letter in b'a'..=b'z' {
                let credited = (0..WORD_LEN)
                    .filter(|&i| guess.char_at(i) == letter && digits[i] > 0)
                    .count();
                let available = answer.chars().iter().filter(|&&c| c == letter).count();
                assert!(
                    credited <= available,
                    "{g} vs {a}: letter {} credited {credited} > {available}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn from_digits_matches_compute_code_space() {
        let feedback = Feedback::compute(word("speed"), word("erase"));
        let reencoded = Feedback::from_digits(feedback.digits()).unwrap();
        assert_eq!(feedback, reencoded);
    }

    #[test]
    fn from_digits_rejects_invalid() {
        assert!(Feedback::from_digits([0, 1, 2, 3, 0]).is_none());
        assert!(Feedback::from_digits([9, 0, 0, 0, 0]).is_none());
    }

    #[test]
    fn parse_valid_digit_strings() {
        assert_eq!(Feedback::parse("00000").unwrap().code(), 0);
        assert_eq!(Feedback::parse("22222").unwrap(), Feedback::PERFECT);
        assert_eq!(Feedback::parse("10110").unwrap().code(), 37);
        assert_eq!(Feedback::parse("  21001 ").unwrap().code(), 2 + 3 + 81);
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(Feedback::parse("0000").is_none()); // Too short
        assert!(Feedback::parse("000000").is_none()); // Too long
        assert!(Feedback::parse("0120x").is_none()); // Bad character
        assert!(Feedback::parse("01203").is_none()); // Digit out of range
        assert!(Feedback::parse("").is_none());
    }

    #[test]
    fn digits_round_trip_all_codes() {
        for code in 0..FEEDBACK_COUNT {
            let feedback = Feedback(code);
            assert_eq!(Feedback::from_digits(feedback.digits()), Some(feedback));
        }
    }
}
