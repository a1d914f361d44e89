use blake3::Hasher;

/// Case-folds a word for embedding lookup and cache keying.
#[inline]
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase()
}

/// Computes the order-independent cache key for a word pair.
///
/// Both words are normalized with [`normalize_word`] and sorted before hashing, so
/// `("Light", "bright")` and `("BRIGHT", "light")` produce the same key. A `0x1f`
/// separator keeps `("ab", "c")` and `("a", "bc")` apart.
#[inline]
pub fn hash_word_pair(word_a: &str, word_b: &str) -> [u8; 32] {
    let a = normalize_word(word_a);
    let b = normalize_word(word_b);
    let (first, second) = if a <= b { (a, b) } else { (b, a) };

    let mut hasher = Hasher::new();
    hasher.update(first.as_bytes());
    hasher.update(&[0x1f]);
    hasher.update(second.as_bytes());
    *hasher.finalize().as_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_word_case_and_whitespace() {
        assert_eq!(normalize_word("  Light\n"), "light");
        assert_eq!(normalize_word("KITE"), "kite");
        assert_eq!(normalize_word(""), "");
    }

    #[test]
    fn test_hash_word_pair_is_order_independent() {
        assert_eq!(
            hash_word_pair("light", "bright"),
            hash_word_pair("bright", "light")
        );
    }

    #[test]
    fn test_hash_word_pair_is_case_insensitive() {
        assert_eq!(
            hash_word_pair("Light", "BRIGHT"),
            hash_word_pair("light", "bright")
        );
    }

    #[test]
    fn test_hash_word_pair_separator_prevents_ambiguity() {
        assert_ne!(hash_word_pair("ab", "c"), hash_word_pair("a", "bc"));
    }

    #[test]
    fn test_hash_word_pair_distinguishes_pairs() {
        assert_ne!(
            hash_word_pair("light", "bright"),
            hash_word_pair("light", "kite")
        );
    }

    #[test]
    fn test_hash_word_pair_self_pair() {
        let key = hash_word_pair("dream", "dream");
        assert_eq!(key, hash_word_pair("DREAM", "dream"));
        assert_eq!(key.len(), 32);
    }
}
