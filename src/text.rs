//! Paragraph splitting and word wrapping

use crate::font::FontMetrics;
use tracing::trace;

/// Split input text into paragraphs on explicit newlines.
///
/// Empty paragraphs are kept so blank lines stay blank on the worksheet.
/// A trailing carriage return is dropped from each paragraph. Empty input
/// yields no paragraphs at all.
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    text.split('\n')
        .map(|segment| segment.strip_suffix('\r').unwrap_or(segment))
        .collect()
}

/// Break a single paragraph into lines that fit within `max_width`.
///
/// Greedy: words are added to the current line while they fit, and words
/// wider than a whole line are split at character boundaries. An empty or
/// whitespace-only paragraph yields exactly one empty line.
pub fn wrap_paragraph(
    paragraph: &str,
    max_width: f32,
    font_size: f32,
    metrics: &dyn FontMetrics,
) -> Vec<String> {
    let words: Vec<&str> = paragraph.split_whitespace().collect();

    if words.is_empty() {
        return vec![String::new()];
    }

    let space_width = metrics.char_width(' ', font_size);
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width: f32 = 0.0;

    for word in words {
        let word_width = metrics.text_width(word, font_size);

        if word_width > max_width {
            if !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }

            // The tail of a split word starts the next line
            let mut remaining = word;
            while !remaining.is_empty() {
                let split_at = split_point(remaining, max_width, font_size, metrics);
                let (chunk, rest) = remaining.split_at(split_at);
                if rest.is_empty() {
                    current_line = chunk.to_string();
                    current_width = metrics.text_width(chunk, font_size);
                } else {
                    lines.push(chunk.to_string());
                }
                remaining = rest;
            }
            continue;
        }

        if !current_line.is_empty() && current_width + space_width + word_width > max_width {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0.0;
        }

        if !current_line.is_empty() {
            current_line.push(' ');
            current_width += space_width;
        }
        current_line.push_str(word);
        current_width += word_width;
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    trace!("Wrapped paragraph into {} lines", lines.len());
    lines
}

/// Byte index of the longest prefix of `word` that fits in `max_width`.
///
/// Always takes at least one character, even if that character alone is too wide.
fn split_point(word: &str, max_width: f32, font_size: f32, metrics: &dyn FontMetrics) -> usize {
    let mut split_at = 0;
    let mut accumulated = 0.0;

    for (i, ch) in word.char_indices() {
        let cw = metrics.char_width(ch, font_size);
        if accumulated + cw > max_width && split_at > 0 {
            break;
        }
        accumulated += cw;
        split_at = i + ch.len_utf8();
    }

    split_at
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::HeuristicMetrics;

    // With the heuristic metrics at 10pt every character is 5pt wide
    fn wrap(text: &str, max_width: f32) -> Vec<String> {
        wrap_paragraph(text, max_width, 10.0, &HeuristicMetrics)
    }

    #[test]
    fn test_split_paragraphs_preserves_blank_lines() {
        let paragraphs = split_paragraphs("Line 1\n\nLine 3\n\n\nLine 6");
        assert_eq!(paragraphs, vec!["Line 1", "", "Line 3", "", "", "Line 6"]);
    }

    #[test]
    fn test_split_paragraphs_only_newlines() {
        assert_eq!(split_paragraphs("\n\n\n"), vec!["", "", "", ""]);
    }

    #[test]
    fn test_split_paragraphs_empty_text() {
        assert!(split_paragraphs("").is_empty());
    }

    #[test]
    fn test_split_paragraphs_crlf() {
        assert_eq!(split_paragraphs("a\r\nb\r\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn test_wrap_text() {
        let text = "This is a long piece of text that should be wrapped into multiple lines";
        let lines = wrap(text, 100.0);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(HeuristicMetrics.text_width(line, 10.0) <= 100.0, "{line:?} too wide");
        }
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn test_exact_fit_stays_on_one_line() {
        // "abcd efgh" is 9 chars = 45pt
        assert_eq!(wrap("abcd efgh", 45.0), vec!["abcd efgh"]);
        assert_eq!(wrap("abcd efgh", 44.0), vec!["abcd", "efgh"]);
    }

    #[test]
    fn test_empty_paragraph_yields_one_empty_line() {
        assert_eq!(wrap("", 100.0), vec![String::new()]);
        assert_eq!(wrap("   \t ", 100.0), vec![String::new()]);
    }

    #[test]
    fn test_collapses_inner_whitespace() {
        assert_eq!(wrap("  hello    world  ", 200.0), vec!["hello world"]);
    }

    #[test]
    fn test_single_long_word() {
        let text = "supercalifragilisticexpialidocious";
        let lines = wrap(text, 50.0);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "supercalif");
        assert_eq!(lines.concat(), text);
    }

    #[test]
    fn test_long_word_tail_joins_following_words() {
        let lines = wrap("abcdefghijkl mn", 50.0);
        assert_eq!(lines, vec!["abcdefghij", "kl mn"]);
    }

    #[test]
    fn test_long_word_after_short_word() {
        let lines = wrap("hi abcdefghijkl", 50.0);
        assert_eq!(lines, vec!["hi", "abcdefghij", "kl"]);
    }

    #[test]
    fn test_multibyte_long_word_splitting() {
        let text = "caf\u{00e9}caf\u{00e9}caf\u{00e9}caf\u{00e9}caf\u{00e9}";
        let lines = wrap(text, 30.0);
        assert!(lines.iter().all(|l| l.chars().count() <= 6));
        assert_eq!(lines.concat(), text);
    }

    #[test]
    fn test_cjk_characters_wrapping() {
        let text = "\u{4f60}\u{597d}\u{4e16}\u{754c}";
        let lines = wrap(text, 15.0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines.concat(), text);
    }

    #[test]
    fn test_char_wider_than_line_is_kept() {
        let lines = wrap("abc", 2.0);
        assert_eq!(lines, vec!["a", "b", "c"]);
    }
}
