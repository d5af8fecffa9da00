//! Enumeration of the code universe
//!
//! Generates every code of `n` distinct digits directly as ordered selections
//! of digits, instead of filtering all of 0..10^n. Digits are tried in ascending
//! order at each position, so codes come out in ascending numeric order, the
//! same order a zero-padded scan of 0..10^n would keep.

use crate::core::{CodeError, InvalidInputReason, MAX_DIGITS, SecretCode};

/// Number of codes with `digit_count` distinct digits: 10! / (10 - n)!
///
/// # Examples
/// ```
/// use bulls_and_cows::tracker::universe_size;
///
/// assert_eq!(universe_size(4), 5040);
/// assert_eq!(universe_size(10), 3_628_800);
/// ```
#[must_use]
pub fn universe_size(digit_count: usize) -> usize {
    (0..digit_count.min(MAX_DIGITS)).map(|taken| 10 - taken).product()
}

/// All codes of `digit_count` distinct digits, ascending
///
/// # Errors
/// Returns `CodeError::InvalidInput` if `digit_count` is not in 1..=10.
pub fn all_codes(digit_count: usize) -> Result<Vec<SecretCode>, CodeError> {
    if !(1..=MAX_DIGITS).contains(&digit_count) {
        return Err(InvalidInputReason::DigitCount(digit_count).into());
    }
    Ok(permutations(digit_count))
}

/// Generate codes for a digit count already known to be valid
pub(crate) fn permutations(digit_count: usize) -> Vec<SecretCode> {
    let mut codes = Vec::with_capacity(universe_size(digit_count));
    let mut prefix = [0u8; MAX_DIGITS];
    extend(&mut prefix, 0, digit_count, 0, &mut codes);
    codes
}

/// Fill position `depth` with every unused digit, recursing to the next position
///
/// `used` is a bitmask of the digits already placed in the prefix.
fn extend(
    prefix: &mut [u8; MAX_DIGITS],
    depth: usize,
    digit_count: usize,
    used: u16,
    codes: &mut Vec<SecretCode>,
) {
    if depth == digit_count {
        codes.push(SecretCode::from_valid_digits(&prefix[..digit_count]));
        return;
    }

    for digit in 0..10u8 {
        let bit = 1u16 << digit;
        if used & bit != 0 {
            continue;
        }
        prefix[depth] = digit;
        extend(prefix, depth + 1, digit_count, used | bit, codes);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Scan of every zero-padded number below 10^n, keeping valid codes
    fn brute_force_codes(digit_count: usize) -> Vec<SecretCode> {
        (0..10usize.pow(digit_count as u32))
            .filter_map(|value| SecretCode::new(&format!("{value:0digit_count$}")).ok())
            .collect()
    }

    #[test]
    fn universe_sizes() {
        assert_eq!(universe_size(1), 10);
        assert_eq!(universe_size(2), 90);
        assert_eq!(universe_size(3), 720);
        assert_eq!(universe_size(4), 5040);
        assert_eq!(universe_size(5), 30240);
    }

    #[test]
    fn all_codes_has_expected_count() {
        for n in 1..=5 {
            assert_eq!(all_codes(n).unwrap().len(), universe_size(n));
        }
    }

    #[test]
    fn all_codes_matches_brute_force_scan() {
        for n in 1..=4 {
            assert_eq!(all_codes(n).unwrap(), brute_force_codes(n), "n = {n}");
        }
    }

    #[test]
    fn all_codes_strictly_ascending() {
        let codes = all_codes(4).unwrap();
        assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(codes.first().unwrap().to_string(), "0123");
        assert_eq!(codes.last().unwrap().to_string(), "9876");
    }

    #[test]
    fn all_codes_are_valid() {
        for code in all_codes(4).unwrap() {
            assert_eq!(SecretCode::new(&code.to_string()), Ok(code));
        }
    }

    #[test]
    fn all_codes_rejects_bad_digit_count() {
        assert_eq!(
            all_codes(0),
            Err(CodeError::InvalidInput(InvalidInputReason::DigitCount(0)))
        );
        assert!(all_codes(11).is_err());
    }
}
