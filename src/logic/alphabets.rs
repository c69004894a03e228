//! Alphabet tables
//!
//!     Languages define their vocabulary as slices of named alphabets: "italic lowercase
//!     from 𝑖 to 𝑧", "script uppercase", and so on. This module holds the ordered glyph
//!     lists for every named alphabet and answers range queries over them.
//!
//!     The mathematical alphanumeric blocks are not contiguous: a handful of letters were
//!     encoded earlier in the Letterlike Symbols block and the corresponding code points
//!     in the mathematical block are reserved. Italic `h`, for example, is U+210E and not
//!     U+1D455. The tables below substitute those letters so that every alphabet has its
//!     26 letters in order.

use crate::logic::error::AlphabetError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A named, ordered alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Alphabet {
    PlainLowercase,
    PlainUppercase,
    ItalicLowercase,
    ItalicUppercase,
    ScriptLowercase,
    ScriptUppercase,
    BlackboardUppercase,
    FrakturLowercase,
    FrakturUppercase,
    GreekLowercase,
    GreekUppercase,
    Digits,
}

impl Alphabet {
    pub const ALL: [Alphabet; 12] = [
        Alphabet::PlainLowercase,
        Alphabet::PlainUppercase,
        Alphabet::ItalicLowercase,
        Alphabet::ItalicUppercase,
        Alphabet::ScriptLowercase,
        Alphabet::ScriptUppercase,
        Alphabet::BlackboardUppercase,
        Alphabet::FrakturLowercase,
        Alphabet::FrakturUppercase,
        Alphabet::GreekLowercase,
        Alphabet::GreekUppercase,
        Alphabet::Digits,
    ];

    /// The kebab-case name used in configuration files
    pub fn name(self) -> &'static str {
        match self {
            Alphabet::PlainLowercase => "plain-lowercase",
            Alphabet::PlainUppercase => "plain-uppercase",
            Alphabet::ItalicLowercase => "italic-lowercase",
            Alphabet::ItalicUppercase => "italic-uppercase",
            Alphabet::ScriptLowercase => "script-lowercase",
            Alphabet::ScriptUppercase => "script-uppercase",
            Alphabet::BlackboardUppercase => "blackboard-uppercase",
            Alphabet::FrakturLowercase => "fraktur-lowercase",
            Alphabet::FrakturUppercase => "fraktur-uppercase",
            Alphabet::GreekLowercase => "greek-lowercase",
            Alphabet::GreekUppercase => "greek-uppercase",
            Alphabet::Digits => "digits",
        }
    }

    /// All glyphs of the alphabet, in order
    pub fn glyphs(self) -> &'static [char] {
        TABLES.get(&self).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn position(self, glyph: char) -> Option<usize> {
        self.glyphs().iter().position(|&g| g == glyph)
    }

    pub fn contains(self, glyph: char) -> bool {
        self.position(glyph).is_some()
    }

    /// The inclusive slice of the alphabet from `from` to `to`
    ///
    /// Both bounds must belong to the alphabet and `to` must not precede `from`.
    pub fn range(self, from: char, to: char) -> Result<Vec<char>, AlphabetError> {
        let start = self
            .position(from)
            .ok_or(AlphabetError::GlyphNotInAlphabet {
                alphabet: self,
                glyph: from,
            })?;
        let end = self.position(to).ok_or(AlphabetError::GlyphNotInAlphabet {
            alphabet: self,
            glyph: to,
        })?;
        if end < start {
            return Err(AlphabetError::InvalidCharRange {
                alphabet: self,
                from,
                to,
            });
        }
        Ok(self.glyphs()[start..=end].to_vec())
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static TABLES: Lazy<HashMap<Alphabet, Vec<char>>> = Lazy::new(|| {
    Alphabet::ALL
        .iter()
        .map(|&alphabet| (alphabet, build_table(alphabet)))
        .collect()
});

fn build_table(alphabet: Alphabet) -> Vec<char> {
    match alphabet {
        Alphabet::PlainLowercase => ('a'..='z').collect(),
        Alphabet::PlainUppercase => ('A'..='Z').collect(),
        Alphabet::ItalicLowercase => math_letters(0x1D44E, &[(7, '\u{210E}')]),
        Alphabet::ItalicUppercase => math_letters(0x1D434, &[]),
        Alphabet::ScriptLowercase => math_letters(
            0x1D4B6,
            &[(4, '\u{212F}'), (6, '\u{210A}'), (14, '\u{2134}')],
        ),
        Alphabet::ScriptUppercase => math_letters(
            0x1D49C,
            &[
                (1, '\u{212C}'),
                (4, '\u{2130}'),
                (5, '\u{2131}'),
                (7, '\u{210B}'),
                (8, '\u{2110}'),
                (11, '\u{2112}'),
                (12, '\u{2133}'),
                (17, '\u{211B}'),
            ],
        ),
        Alphabet::BlackboardUppercase => math_letters(
            0x1D538,
            &[
                (2, '\u{2102}'),
                (7, '\u{210D}'),
                (13, '\u{2115}'),
                (15, '\u{2119}'),
                (16, '\u{211A}'),
                (17, '\u{211D}'),
                (25, '\u{2124}'),
            ],
        ),
        Alphabet::FrakturLowercase => math_letters(0x1D51E, &[]),
        Alphabet::FrakturUppercase => math_letters(
            0x1D504,
            &[
                (2, '\u{212D}'),
                (7, '\u{210C}'),
                (8, '\u{2111}'),
                (17, '\u{211C}'),
                (25, '\u{2128}'),
            ],
        ),
        // final sigma is skipped
        Alphabet::GreekLowercase => ('\u{03B1}'..='\u{03C9}')
            .filter(|&c| c != '\u{03C2}')
            .collect(),
        // U+03A2 is unassigned
        Alphabet::GreekUppercase => ('\u{0391}'..='\u{03A9}')
            .filter(|&c| c != '\u{03A2}')
            .collect(),
        Alphabet::Digits => ('0'..='9').collect(),
    }
}

/// 26 letters starting at `first`, with reserved code points replaced by their
/// Letterlike Symbols counterparts
fn math_letters(first: u32, holes: &[(usize, char)]) -> Vec<char> {
    (0..26u32)
        .filter_map(|index| {
            holes
                .iter()
                .find(|(hole, _)| *hole as u32 == index)
                .map(|(_, substitute)| *substitute)
                .or_else(|| char::from_u32(first + index))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Alphabet::PlainLowercase, 26)]
    #[case(Alphabet::ItalicLowercase, 26)]
    #[case(Alphabet::ItalicUppercase, 26)]
    #[case(Alphabet::ScriptUppercase, 26)]
    #[case(Alphabet::BlackboardUppercase, 26)]
    #[case(Alphabet::FrakturUppercase, 26)]
    #[case(Alphabet::GreekLowercase, 24)]
    #[case(Alphabet::GreekUppercase, 24)]
    #[case(Alphabet::Digits, 10)]
    fn test_alphabet_sizes(#[case] alphabet: Alphabet, #[case] size: usize) {
        assert_eq!(alphabet.glyphs().len(), size);
    }

    #[test]
    fn test_italic_holes() {
        let italic = Alphabet::ItalicLowercase.glyphs();
        assert_eq!(italic[0], '𝑎');
        assert_eq!(italic[7], 'ℎ');
        assert_eq!(italic[8], '𝑖');
        assert_eq!(italic[25], '𝑧');
    }

    #[test]
    fn test_script_and_blackboard_holes() {
        assert_eq!(Alphabet::ScriptUppercase.glyphs()[1], 'ℬ');
        assert_eq!(Alphabet::ScriptUppercase.glyphs()[15], '𝒫');
        assert_eq!(Alphabet::BlackboardUppercase.glyphs()[13], 'ℕ');
        assert_eq!(Alphabet::BlackboardUppercase.glyphs()[25], 'ℤ');
    }

    #[test]
    fn test_range_inclusive() {
        let variables = Alphabet::ItalicLowercase.range('𝑖', '𝑧').unwrap();
        assert_eq!(variables.len(), 18);
        assert_eq!(variables.first(), Some(&'𝑖'));
        assert_eq!(variables.last(), Some(&'𝑧'));

        let single = Alphabet::Digits.range('3', '3').unwrap();
        assert_eq!(single, vec!['3']);
    }

    #[test]
    fn test_reversed_range_is_invalid() {
        let err = Alphabet::PlainLowercase.range('z', 'a').unwrap_err();
        assert_eq!(
            err,
            AlphabetError::InvalidCharRange {
                alphabet: Alphabet::PlainLowercase,
                from: 'z',
                to: 'a',
            }
        );
    }

    #[test]
    fn test_glyph_outside_alphabet() {
        let err = Alphabet::ItalicLowercase.range('a', '𝑧').unwrap_err();
        assert!(matches!(
            err,
            AlphabetError::GlyphNotInAlphabet { glyph: 'a', .. }
        ));
    }
}
