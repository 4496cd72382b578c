//! Tokenizer - Character n-grams with optional boundary padding

/// Splits strings into character n-grams of a fixed size via a sliding
/// window. With padding enabled, `token_size - 1` `#` characters are added on
/// both sides, so string boundaries produce their own tokens.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    token_size: usize,
    use_padding: bool,
}

impl Tokenizer {
    pub fn new(token_size: usize, use_padding: bool) -> Self {
        assert!(token_size >= 1, "token size must be at least 1");
        Self {
            token_size,
            use_padding,
        }
    }

    pub fn token_size(&self) -> usize {
        self.token_size
    }

    /// Tokenizes `input` into n-grams. An empty input yields no tokens; a
    /// non-empty input shorter than the token size (only possible without
    /// padding) is returned as a single token.
    pub fn tokenize(&self, input: &str) -> Vec<String> {
        if input.is_empty() {
            return Vec::new();
        }

        let mut chars: Vec<char> = Vec::new();
        if self.use_padding {
            chars.extend(std::iter::repeat('#').take(self.token_size - 1));
        }
        chars.extend(input.chars());
        if self.use_padding {
            chars.extend(std::iter::repeat('#').take(self.token_size - 1));
        }

        if chars.len() < self.token_size {
            return vec![chars.into_iter().collect()];
        }

        chars
            .windows(self.token_size)
            .map(|window| window.iter().collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigrams_without_padding() {
        let tokenizer = Tokenizer::new(3, false);
        assert_eq!(tokenizer.tokenize("abcd"), vec!["abc", "bcd"]);
    }

    #[test]
    fn test_trigrams_with_padding() {
        let tokenizer = Tokenizer::new(3, true);
        assert_eq!(
            tokenizer.tokenize("ab"),
            vec!["##a", "#ab", "ab#", "b##"]
        );
    }

    #[test]
    fn test_short_input_without_padding_is_single_token() {
        let tokenizer = Tokenizer::new(3, false);
        assert_eq!(tokenizer.tokenize("ab"), vec!["ab"]);
    }

    #[test]
    fn test_empty_input_has_no_tokens() {
        assert!(Tokenizer::new(3, false).tokenize("").is_empty());
        assert!(Tokenizer::new(3, true).tokenize("").is_empty());
    }

    #[test]
    fn test_unigrams() {
        let tokenizer = Tokenizer::new(1, false);
        assert_eq!(tokenizer.tokenize("abc"), vec!["a", "b", "c"]);
    }
}
