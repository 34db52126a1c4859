//! Greedy word-wrap with a forced mid-word split.
//!
//! Every menu-printing path goes through [`wrap`]: the program
//! description, each parameter description and each choice description
//! only differ in the indentation they hand in.

use std::mem;

/// Wrap `text` into lines whose printable length never exceeds
/// `width - indent`.
///
/// Words are packed greedily, separated by single spaces; runs of spaces
/// collapse. A word too long for an empty line is split mid-word with no
/// character lost, continuing on as many lines as it needs.
///
/// The returned lines carry no indentation. The caller decides the
/// prefix for each line, since the first one may continue an already
/// printed column rather than start fresh. At least one line is always
/// returned, even for empty input.
///
/// Lengths are measured in characters, not bytes, so a split never lands
/// inside a multi-byte code point.
///
/// An `indent` at or past `width` leaves no room for text at all; rather
/// than lose characters, the output degrades to one character per line.
///
/// # Examples
///
/// ```rust
/// let lines = declargs::wrap("Compute the sum of two integers.", 0, 20);
/// assert_eq!(lines, vec!["Compute the sum of", "two integers."]);
/// ```
pub fn wrap(text: &str, indent: usize, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0;
    let mut word = String::new();
    let mut word_len = 0;

    // The trailing space guarantees the final word reaches a boundary.
    for c in text.chars().chain(Some(' ')) {
        // The word always accepts its first character, so an indent at or
        // past the width degrades to a character per line instead of
        // swallowing the text.
        if c != ' ' && (word_len == 0 || indent + word_len < width) {
            word.push(c);
            word_len += 1;
            continue;
        }

        if word.is_empty() {
            // A run of spaces, or a leading space.
            continue;
        }

        if indent + line_len + word_len + 1 <= width {
            // The word fits on the current line.
            if line.is_empty() {
                line = mem::take(&mut word);
                line_len = word_len;
            } else {
                line.push(' ');
                line.push_str(&word);
                line_len += word_len + 1;
                word.clear();
            }
            word_len = 0;
        } else if indent + word_len < width {
            // The word fits on a line of its own.
            lines.push(mem::take(&mut line));
            line = mem::take(&mut word);
            line_len = word_len;
            word_len = 0;
        } else {
            // The word cannot fit even on an empty line: emit whatever is
            // pending plus as much of the word as the width allows, and
            // carry the remainder (and the current character) forward.
            let join = if line_len == 0 { 0 } else { line_len + 1 };
            let take = width.saturating_sub(indent + join).max(1);
            let mut out = mem::take(&mut line);
            if !out.is_empty() {
                out.push(' ');
            }
            let split = word
                .char_indices()
                .nth(take)
                .map(|(i, _)| i)
                .unwrap_or(word.len());
            out.push_str(&word[..split]);
            lines.push(out);
            word.drain(..split);
            word_len -= take.min(word_len);
            line_len = 0;
            if c != ' ' {
                word.push(c);
                word_len += 1;
            }
        }
    }

    // The final line is always emitted, even when empty.
    lines.push(line);
    lines
}

#[cfg(test)]
mod tests {
    use super::wrap;

    fn char_len(s: &str) -> usize {
        s.chars().count()
    }

    #[test]
    fn lines_never_exceed_width() {
        let text = "Compute the sum of two integers provided on the command line.";
        let lines = wrap(text, 0, 40);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(char_len(line) <= 40, "line too wide: {:?}", line);
            // No word in the input is 40 characters long, so none may be
            // broken mid-token.
            assert!(!line.ends_with(' '));
        }
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, text);
    }

    #[test]
    fn indent_narrows_the_usable_width() {
        let lines = wrap("one two three four five six", 20, 30);
        for line in &lines {
            assert!(20 + char_len(line) <= 30, "line too wide: {:?}", line);
        }
        assert_eq!(lines.join(" "), "one two three four five six");
    }

    #[test]
    fn overlong_word_is_split_without_loss() {
        let word = "abcdefghijklmnopqrstuvwxyz0123456789";
        let lines = wrap(word, 4, 16);
        for line in &lines {
            assert!(4 + char_len(line) <= 16, "line too wide: {:?}", line);
        }
        let rejoined: String = lines.concat();
        assert_eq!(rejoined, word);
    }

    #[test]
    fn overlong_word_shares_its_first_line_with_pending_words() {
        let lines = wrap("ab cdefghijklmnopqrstuvwxyz", 0, 10);
        assert_eq!(lines[0], "ab cdefghi");
        let rejoined: String = lines.join("").replace(' ', "");
        assert_eq!(rejoined, "abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn runs_of_spaces_collapse() {
        let lines = wrap("  a   b  ", 0, 80);
        assert_eq!(lines, vec!["a b"]);
    }

    #[test]
    fn empty_input_yields_one_empty_line() {
        assert_eq!(wrap("", 0, 80), vec![String::new()]);
        assert_eq!(wrap("   ", 10, 80), vec![String::new()]);
    }

    #[test]
    fn trailing_space_flushes_the_final_word() {
        // Registry descriptions are stored with a trailing space.
        assert_eq!(wrap("hello world ", 0, 80), vec!["hello world"]);
    }

    #[test]
    fn multibyte_words_are_measured_in_characters() {
        let lines = wrap("héllo wörld éééééééééé", 0, 12);
        for line in &lines {
            assert!(char_len(line) <= 12, "line too wide: {:?}", line);
        }
        let rejoined: String = lines.join(" ");
        assert_eq!(rejoined, "héllo wörld éééééééééé");
    }

    #[test]
    fn indent_equal_to_the_width_degrades_to_one_character_per_line() {
        let lines = wrap("abc def", 10, 10);
        for line in &lines {
            assert!(char_len(line) <= 1, "line too wide: {:?}", line);
        }
        let rejoined: String = lines.concat().replace(' ', "");
        assert_eq!(rejoined, "abcdef");
    }

    #[test]
    fn indent_past_the_width_loses_no_characters() {
        let lines = wrap("hello", 30, 20);
        let rejoined: String = lines.concat();
        assert_eq!(rejoined, "hello");
    }

    #[test]
    fn word_exactly_filling_the_line_is_kept_whole() {
        let lines = wrap("abcdefghij xy", 0, 10);
        assert_eq!(lines[0], "abcdefghij");
        assert_eq!(lines[1], "xy");
    }
}
