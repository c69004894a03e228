//! Single-glyph documents and rendered output
//!
//! Every fixed glyph of a shipped language classifies to exactly one symbol of the
//! expected kind; rendered output is pinned with inline snapshots.

use rstest::rstest;
use symlog::logic::ast::{BracketKind, Operator, Symbol};
use symlog::logic::language::Language;
use symlog::logic::loader::ExpressionLoader;
use symlog::logic::testing::languages;
use symlog::logic::token::ToMarkup;

fn single_symbol(language: Language, glyph: &str) -> Symbol {
    let items = ExpressionLoader::from_markup(language, glyph)
        .classify()
        .expect("classification never fails");
    assert_eq!(items.len(), 1, "{glyph} gave {items:?}");
    items[0]
        .symbol()
        .cloned()
        .unwrap_or_else(|| panic!("{glyph} was not classified"))
}

#[rstest]
#[case("∼", Symbol::Operator(Operator::Negation))]
#[case("→", Symbol::Operator(Operator::Conditional))]
#[case("↔", Symbol::Operator(Operator::Biconditional))]
#[case("∧", Symbol::Operator(Operator::Conjunction))]
#[case("∨", Symbol::Operator(Operator::Disjunction))]
#[case("∀", Symbol::Operator(Operator::Universal))]
#[case("∃", Symbol::Operator(Operator::Existential))]
#[case("(", Symbol::OpenBracket(BracketKind::One))]
#[case(")", Symbol::CloseBracket(BracketKind::One))]
fn test_lq_fixed_glyphs(#[case] glyph: &str, #[case] expected: Symbol) {
    assert_eq!(single_symbol(languages::lq(), glyph), expected);
}

#[rstest]
#[case("↑", Symbol::Operator(Operator::Nand))]
#[case("↓", Symbol::Operator(Operator::Nor))]
#[case("[", Symbol::OpenBracket(BracketKind::Two))]
#[case("]", Symbol::CloseBracket(BracketKind::Two))]
#[case("{", Symbol::OpenBracket(BracketKind::Three))]
#[case("}", Symbol::CloseBracket(BracketKind::Three))]
fn test_ls_fixed_glyphs(#[case] glyph: &str, #[case] expected: Symbol) {
    assert_eq!(single_symbol(languages::ls(), glyph), expected);
}

#[rstest]
#[case("⟨", Symbol::OpenAngle)]
#[case("⟩", Symbol::CloseAngle)]
#[case(",", Symbol::Comma)]
#[case("¬", Symbol::Operator(Operator::Negation))]
#[case("⊃", Symbol::Operator(Operator::Conditional))]
fn test_delimited_fixed_glyphs(#[case] glyph: &str, #[case] expected: Symbol) {
    assert_eq!(single_symbol(languages::delimited(), glyph), expected);
}

#[rstest]
#[case("𝑥", "variable")]
#[case("𝑎", "constant")]
#[case("𝐴", "sentence letter")]
#[case("𝑥_{1}", "variable")]
#[case("𝐹^{2}", "relation")]
#[case("𝑓^{1}", "function")]
#[case("𝓍", "variable")]
#[case("𝒜", "formula symbol")]
fn test_lq_letters(#[case] markup: &str, #[case] kind: &str) {
    let symbol = single_symbol(languages::lq(), markup);
    let actual = match symbol {
        Symbol::Variable(_) => "variable",
        Symbol::Constant(_) => "constant",
        Symbol::SentenceLetter(_) => "sentence letter",
        Symbol::FormulaSymbol(_) => "formula symbol",
        Symbol::Relation { .. } => "relation",
        Symbol::Function { .. } => "function",
        _ => "other",
    };
    assert_eq!(actual, kind);
}

fn rendered(language: Language, markup: &str) -> String {
    let loader = ExpressionLoader::from_markup(language, markup);
    let expr = loader.parse().expect("parses");
    loader.language().render_expression(&expr).to_markup()
}

fn unabbreviated(language: Language, markup: &str) -> String {
    let loader = ExpressionLoader::from_markup(language, markup);
    let expr = loader.unabbreviate().expect("unabbreviates");
    loader.language().render_expression(&expr).to_markup()
}

#[test]
fn test_rendering_normalizes_brackets() {
    insta::assert_snapshot!(rendered(languages::ls(), "[𝐴→{𝐵↑𝐶}]"), @"(𝐴→(𝐵↑𝐶))");
    insta::assert_snapshot!(rendered(languages::lq(), "∀𝑥_{1}𝐹^{2}𝑥_{1}𝑓^{1}𝑎"), @"∀𝑥_{1}𝐹^{2}𝑥_{1}𝑓^{1}𝑎");
    insta::assert_snapshot!(rendered(languages::delimited(), "F⟨a,f(b)⟩"), @"F(a,f(b))");
}

#[test]
fn test_unabbreviated_output() {
    insta::assert_snapshot!(unabbreviated(languages::lq(), "∃𝑥(𝐹^{1}𝑥∧𝐺^{1}𝑥)"), @"∼∀𝑥∼∼(𝐹^{1}𝑥→∼𝐺^{1}𝑥)");
    insta::assert_snapshot!(unabbreviated(languages::lq(), "𝐴∨(𝐵∧𝐶)"), @"(∼𝐴→∼(𝐵→∼𝐶))");
    insta::assert_snapshot!(unabbreviated(languages::ls(), "∼[𝐴↓𝐵]"), @"∼∼(∼𝐴→𝐵)");
}
