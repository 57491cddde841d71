//! Folds generated text into the ASCII range the built-in PDF fonts can draw.

/// Replaces typographic characters with ASCII look-alikes; any other
/// non-ASCII character becomes `?`. Control characters other than tab are dropped,
/// tabs become spaces.
pub fn to_printable_ascii(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            ' '..='~' => out.push(c),
            '\t' | '\u{00A0}' | '\u{2002}' | '\u{2003}' | '\u{2009}' | '\u{202F}' => out.push(' '),
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => out.push('"'),
            '\u{2010}' | '\u{2011}' | '\u{2012}' | '\u{2013}' | '\u{2014}' | '\u{2212}' => {
                out.push('-')
            }
            '\u{2022}' | '\u{00B7}' | '\u{25AA}' | '\u{25CF}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{2192}' => out.push_str("->"),
            c if c.is_control() => {}
            _ => out.push('?'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passes_through() {
        let s = "1. Explain how Kafka guarantees ordering (per partition)?";
        assert_eq!(to_printable_ascii(s), s);
    }

    #[test]
    fn test_typographic_characters_fold() {
        assert_eq!(
            to_printable_ascii("\u{201C}We\u{2019}re hiring\u{201D} \u{2014} now\u{2026}"),
            "\"We're hiring\" - now..."
        );
        assert_eq!(to_printable_ascii("\u{2022} Python"), "- Python");
    }

    #[test]
    fn test_other_non_ascii_becomes_question_mark() {
        assert_eq!(to_printable_ascii("caf\u{00E9} \u{1F680}"), "caf? ?");
    }

    #[test]
    fn test_tabs_and_control_characters() {
        assert_eq!(to_printable_ascii("a\tb\u{0007}c"), "a bc");
    }
}
