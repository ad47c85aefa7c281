//! Phonetic coding for sound-alike word matching.
//!
//! Codes are one uppercase letter followed by three digits, so words that
//! sound similar collide on the same code. The algorithm is Soundex-like
//! with one deliberate deviation: vowels, `h`, `w`, and `y` are skipped
//! without resetting the duplicate-collapse state, so consonants with the
//! same digit collapse even across a vowel.

/// Compute the 4-character phonetic code of a word.
///
/// Returns an empty string for an empty word.
pub fn phonetic_code(word: &str) -> String {
    let mut chars = word.chars();

    let first = match chars.next() {
        Some(c) => c,
        None => return String::new(),
    };

    let mut code = String::with_capacity(4);
    code.push(first.to_ascii_uppercase());

    for c in chars {
        if code.len() >= 4 {
            break;
        }

        let digit = match c.to_ascii_lowercase() {
            'b' | 'f' | 'p' | 'v' => '1',
            'c' | 'g' | 'j' | 'k' | 'q' | 's' | 'x' | 'z' => '2',
            'd' | 't' => '3',
            'l' => '4',
            'm' | 'n' => '5',
            'r' => '6',
            _ => continue,
        };

        // Collapse runs of the same digit
        if !code.ends_with(digit) {
            code.push(digit);
        }
    }

    while code.len() < 4 {
        code.push('0');
    }

    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(phonetic_code("robert"), "R163");
        assert_eq!(phonetic_code("rupert"), "R163");
        assert_eq!(phonetic_code("hello"), "H400");
        assert_eq!(phonetic_code("world"), "W643");
    }

    #[test]
    fn test_first_letter_is_uppercased() {
        assert_eq!(phonetic_code("Robert"), "R163");
        assert_eq!(phonetic_code("ROBERT"), "R163");
    }

    #[test]
    fn test_empty_word() {
        assert_eq!(phonetic_code(""), "");
    }

    #[test]
    fn test_code_shape() {
        for word in ["a", "queue", "strength", "psychology", "don't"] {
            let code = phonetic_code(word);
            assert_eq!(code.len(), 4, "code for {word:?} has wrong length");

            let mut chars = code.chars();
            assert!(chars.next().unwrap().is_ascii_uppercase());
            assert!(chars.all(|c| ('0'..='6').contains(&c)));
        }
    }

    #[test]
    fn test_adjacent_duplicates_collapse() {
        // c and k both map to '2' and collapse into one digit
        assert_eq!(phonetic_code("jack"), "J200");
    }

    #[test]
    fn test_skipped_letters_do_not_reset_collapse() {
        // The second and third 'b' map to '1'; the vowels between them are
        // skipped without resetting duplicate tracking, so only one '1' is
        // emitted.
        assert_eq!(phonetic_code("bababa"), "B100");
    }

    #[test]
    fn test_short_words_are_zero_padded() {
        assert_eq!(phonetic_code("a"), "A000");
        assert_eq!(phonetic_code("at"), "A300");
    }
}
