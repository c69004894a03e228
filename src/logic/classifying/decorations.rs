//! Subscript and superscript runs following a base glyph

use super::items::Item;
use crate::logic::token::Element;

/// Digit runs read after a base glyph
///
/// At most one subscript run and one superscript run, in either order. `consumed`
/// counts the items the runs occupy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Runs {
    pub subscript: Option<String>,
    pub superscript: Option<String>,
    pub consumed: usize,
}

/// Reads only a leading subscript run, for letters that take no superscript
pub(crate) fn read_subscript(items: &[Item]) -> Runs {
    let (subscript, consumed) = read_run(items, |e| e.decoration.is_subscript());
    Runs {
        subscript,
        superscript: None,
        consumed,
    }
}

/// Reads the digit runs at the start of `items`
pub(crate) fn read_runs(items: &[Item]) -> Runs {
    let mut runs = Runs::default();
    for _ in 0..2 {
        let rest = &items[runs.consumed..];
        let (sub, n) = read_run(rest, |e| e.decoration.is_subscript());
        if runs.subscript.is_none() && sub.is_some() {
            runs.subscript = sub;
            runs.consumed += n;
            continue;
        }
        let (sup, n) = read_run(rest, |e| e.decoration.is_superscript());
        if runs.superscript.is_none() && sup.is_some() {
            runs.superscript = sup;
            runs.consumed += n;
            continue;
        }
        break;
    }
    runs
}

fn read_run(items: &[Item], decorated: impl Fn(&Element) -> bool) -> (Option<String>, usize) {
    let digits: String = items
        .iter()
        .map_while(|item| match item {
            Item::Raw(element) if decorated(element) && element.glyph.is_ascii_digit() => {
                Some(element.glyph)
            }
            _ => None,
        })
        .collect();
    let consumed = digits.len();
    ((!digits.is_empty()).then_some(digits), consumed)
}
