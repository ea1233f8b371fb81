/// Split text into word tokens for diffing.
///
/// A token is an optional leading whitespace run followed by a maximal run
/// of non-whitespace characters; whitespace binds to the word that follows
/// it. A whitespace run at the very end of the text forms a final
/// whitespace-only token. Punctuation is not separated from its word.
///
/// Tokens concatenated in order reproduce the input exactly, and every
/// token boundary is a character boundary.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut token_start = 0;
    let mut prev_was_word = false;

    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() && prev_was_word {
            tokens.push(&text[token_start..idx]);
            token_start = idx;
        }
        prev_was_word = !ch.is_whitespace();
    }

    if token_start < text.len() {
        tokens.push(&text[token_start..]);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_single_word() {
        assert_eq!(tokenize("hello"), vec!["hello"]);
    }

    #[test]
    fn test_whitespace_binds_forward() {
        assert_eq!(tokenize("hello world"), vec!["hello", " world"]);
        assert_eq!(tokenize("a  b   c"), vec!["a", "  b", "   c"]);
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(tokenize("  hello"), vec!["  hello"]);
    }

    #[test]
    fn test_trailing_whitespace_token() {
        assert_eq!(tokenize("hello  "), vec!["hello", "  "]);
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(tokenize(" \n\t"), vec![" \n\t"]);
    }

    #[test]
    fn test_newlines_bind_forward() {
        assert_eq!(tokenize("one\ntwo\n"), vec!["one", "\ntwo", "\n"]);
    }

    #[test]
    fn test_punctuation_stays_attached() {
        assert_eq!(tokenize("end. Next"), vec!["end.", " Next"]);
    }

    #[test]
    fn test_roundtrip() {
        let text = " Mixed \t content,\nwith   punctuation! ";
        assert_eq!(tokenize(text).concat(), text);
    }

    #[test]
    fn test_multibyte() {
        assert_eq!(tokenize("héllo wörld"), vec!["héllo", " wörld"]);
    }
}
