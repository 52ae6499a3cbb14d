use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // One word per match: a double-quoted span, a single-quoted span, or a
    // bare run of non-whitespace, non-quote characters. The capture groups
    // carry the quoted value without its delimiters.
    static ref WORD: Regex = Regex::new(r#""([^"]*)"|'([^']*)'|[^\s"']+"#).unwrap();
}

/// Splits an input line into words, honoring single and double quotes.
///
/// Quote characters are stripped from the word's value. Unmatched quotes are
/// not an error: anything after a dangling quote is scanned as ordinary
/// unquoted words. Zero-length words are never produced, so an empty quoted
/// string contributes nothing.
pub fn split_words(line: &str) -> Vec<String> {
    WORD.captures_iter(line)
        .filter_map(|caps| {
            let word = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_else(|| &caps[0]);
            if word.is_empty() {
                None
            } else {
                Some(word.to_string())
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(split_words("ls  -l   /tmp"), vec!["ls", "-l", "/tmp"]);
    }

    #[test]
    fn double_quotes_keep_inner_whitespace() {
        assert_eq!(split_words(r#"cmd "a b" c"#), vec!["cmd", "a b", "c"]);
    }

    #[test]
    fn single_quotes_keep_inner_whitespace() {
        assert_eq!(split_words("cmd 'x  y' z"), vec!["cmd", "x  y", "z"]);
    }

    #[test]
    fn quote_characters_are_stripped() {
        let words = split_words(r#"say "hello""#);
        assert_eq!(words, vec!["say", "hello"]);
    }

    #[test]
    fn empty_quoted_string_yields_no_word() {
        assert_eq!(split_words(r#"cmd "" x"#), vec!["cmd", "x"]);
    }

    #[test]
    fn dangling_quote_keeps_trailing_content() {
        assert_eq!(split_words(r#"cmd "a b"#), vec!["cmd", "a", "b"]);
    }

    #[test]
    fn blank_line_yields_no_words() {
        assert!(split_words("   ").is_empty());
        assert!(split_words("").is_empty());
    }

    #[test]
    fn pipe_is_an_ordinary_word() {
        assert_eq!(
            split_words("cmd x | sort -r"),
            vec!["cmd", "x", "|", "sort", "-r"]
        );
    }
}
