/// Rolling polynomial hash used to seed the label pattern.
///
/// Walks the string's UTF-16 code units in order, folding each one with
/// `acc = (acc << 5) - acc + unit` under 32-bit signed wraparound, and
/// returns the absolute value of the final accumulator. The wraparound is
/// explicit (`wrapping_*` on `i32`), so identical inputs hash identically
/// on every platform. Any string is valid input; the empty string hashes
/// to 0.
pub fn seed_hash(input: &str) -> u32 {
    let mut acc: i32 = 0;
    for unit in input.encode_utf16() {
        acc = acc
            .wrapping_shl(5)
            .wrapping_sub(acc)
            .wrapping_add(unit as i32);
    }
    // unsigned_abs keeps the i32::MIN accumulator well defined
    acc.unsigned_abs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_zero() {
        assert_eq!(seed_hash(""), 0);
    }

    #[test]
    fn test_single_character() {
        // (0 << 5) - 0 + 65
        assert_eq!(seed_hash("A"), 65);
    }

    #[test]
    fn test_known_vectors() {
        assert_eq!(seed_hash("AB"), 2081);
        assert_eq!(seed_hash("abc"), 96354);
        assert_eq!(seed_hash("hello world"), 1794106052);
        assert_eq!(seed_hash("Whiteboard Markers"), 1057065654);
    }

    #[test]
    fn test_deterministic() {
        let payload = r#"{"id":"7","name":"Printer Paper (Reams)","quantity":15}"#;
        assert_eq!(seed_hash(payload), seed_hash(payload));
    }

    #[test]
    fn test_result_is_total_over_long_inputs() {
        // Long enough to wrap the accumulator many times; the only claim is
        // that the call returns (wraparound, not overflow) and stays stable.
        let long = "Chemistry Chemicals ".repeat(500);
        assert_eq!(seed_hash(&long), seed_hash(&long));
    }

    #[test]
    fn test_non_ascii_uses_utf16_units() {
        // "é" is a single UTF-16 unit (0x00E9)
        assert_eq!(seed_hash("é"), 0x00E9);
    }
}
