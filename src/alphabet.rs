/// Characters a secret is drawn from: ASCII letters, digits and ASCII punctuation.
pub(crate) const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz\
                                     ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                     0123456789\
                                     !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

pub(crate) fn contains(character: char) -> bool {
    character.is_ascii() && ALPHABET.contains(&(character as u8))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_letters_digits_and_punctuation() {
        assert_eq!(ALPHABET.len(), 26 + 26 + 10 + 32);
        assert!(ALPHABET.iter().all(|byte| byte.is_ascii_alphanumeric()
            || byte.is_ascii_punctuation()));
    }

    #[test]
    fn has_no_duplicates() {
        let mut sorted = ALPHABET.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), ALPHABET.len());
    }

    #[test]
    fn excludes_whitespace() {
        assert!(!contains(' '));
        assert!(!contains('\n'));
        assert!(!contains('é'));
        assert!(contains('~'));
        assert!(contains('Q'));
    }
}
