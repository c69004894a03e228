//! Unabbreviator
//!
//!     Expands every defined construct of an expression into its long form, innermost
//!     first. Nodes are visited in ascending level order; since a child always sits
//!     below its parent, each child has been expanded by the time its parent is. For
//!     each node the language's template for the node's construct kind is filled in:
//!
//!         |0| |1| |n|     the expanded children
//!         ‹s› ‹v› ‹f› ‹b› ‹r›
//!                         the node itself, its bound variable, main function symbol,
//!                         main operator or main relation symbol
//!
//!     The filled-in template is rendered to elements, classified and built again, and
//!     has to come back as exactly one node of the same category (term or formula) as
//!     the node it replaces. The expansion of the root is the result.
//!
//!     Kinds without a configured template use the identity template, so an expression
//!     without defined constructs comes back unchanged.

use crate::logic::ast::{ConstructKind, Expression, NodeRef};
use crate::logic::building::parse_elements;
use crate::logic::error::ParseError;
use crate::logic::language::{Language, Marker, TemplatePiece};
use crate::logic::logging::targets;
use crate::logic::token::{detokenize, Element};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnabbreviationError {
    /// The input itself does not parse
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A filled-in template does not parse back to a single node of the right category
    #[error("the {kind} template `{template}` gave `{produced}`: {reason}")]
    MalformedTemplate {
        kind: ConstructKind,
        template: String,
        produced: String,
        reason: String,
    },
}

/// Expands every defined construct of `expr`
pub fn unabbreviate(
    language: &Language,
    expr: &Expression,
) -> Result<Expression, UnabbreviationError> {
    let mut flat = Vec::new();
    flatten(expr.as_node(), &mut flat);

    let mut order: Vec<usize> = (0..flat.len()).collect();
    order.sort_by_cached_key(|&i| flat[i].node.level());

    let mut expanded: Vec<Option<Expression>> = vec![None; flat.len()];
    for i in order {
        let entry = &flat[i];
        let children = entry
            .children
            .iter()
            .map(|&child| expanded[child].as_ref())
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| malformed(language, entry.node, &[], "a child was not expanded"))?;
        let result = expand(language, entry.node, &children)?;
        expanded[i] = Some(result);
    }

    let result = expanded
        .into_iter()
        .next()
        .flatten()
        .ok_or_else(|| malformed(language, expr.as_node(), &[], "nothing to expand"))?;
    log::debug!(target: targets::UNABBREVIATE, "{expr} unabbreviates to {result}");
    Ok(result)
}

struct Flat<'a> {
    node: NodeRef<'a>,
    children: Vec<usize>,
}

/// Pre-order flattening; entry 0 is the root
fn flatten<'a>(node: NodeRef<'a>, flat: &mut Vec<Flat<'a>>) -> usize {
    let index = flat.len();
    flat.push(Flat {
        node,
        children: Vec::new(),
    });
    let children = node
        .children()
        .into_iter()
        .map(|child| flatten(child, flat))
        .collect();
    flat[index].children = children;
    index
}

/// Fills in and re-parses the template of one node
fn expand(
    language: &Language,
    node: NodeRef<'_>,
    children: &[&Expression],
) -> Result<Expression, UnabbreviationError> {
    let kind = node.construct_kind();
    let template = language.template(kind);
    let mut elements: Vec<Element> = Vec::new();

    for piece in template.pieces() {
        match piece {
            TemplatePiece::Glyph(element) => elements.push(*element),
            TemplatePiece::Marker(marker) => {
                let filled = fill(language, node, children, *marker)
                    .ok_or_else(|| malformed(language, node, &elements, "marker does not apply"))?;
                elements.extend(filled);
            }
        }
    }

    let reparsed = match parse_elements(language, elements.clone()) {
        Ok(reparsed) => reparsed,
        Err(err @ ParseError::TooDeep { .. }) => return Err(err.into()),
        Err(err) => return Err(malformed(language, node, &elements, &err.to_string())),
    };
    if kind.is_term() != reparsed.as_term().is_some() {
        let expected = if kind.is_term() { "a term" } else { "a formula" };
        return Err(malformed(
            language,
            node,
            &elements,
            &format!("expected {expected}"),
        ));
    }
    log::trace!(
        target: targets::UNABBREVIATE,
        "{kind}: {} -> {reparsed}",
        node.to_expression()
    );
    Ok(reparsed)
}

fn fill(
    language: &Language,
    node: NodeRef<'_>,
    children: &[&Expression],
    marker: Marker,
) -> Option<Vec<Element>> {
    match marker {
        Marker::Child(i) => children
            .get(i)
            .map(|child| language.render_expression(child)),
        Marker::Children => {
            let rendered: Vec<Vec<Element>> = children
                .iter()
                .map(|child| language.render_expression(child))
                .collect();
            Some(language.join_with_comma(&rendered))
        }
        Marker::Itself => Some(language.render(node)),
        Marker::BoundVariable => node
            .as_formula()
            .and_then(|formula| formula.bound_variable())
            .map(|letter| language.render_letter(letter)),
        Marker::MainFunction => node
            .as_term()
            .and_then(|term| term.main_function())
            .map(|function| language.render_predicate(function)),
        Marker::MainOperator => node
            .as_formula()
            .and_then(|formula| formula.main_operator())
            .map(|op| vec![language.render_operator(op)]),
        Marker::MainRelation => node
            .as_formula()
            .and_then(|formula| formula.main_relation())
            .map(|relation| language.render_predicate(relation)),
    }
}

fn malformed(
    language: &Language,
    node: NodeRef<'_>,
    produced: &[Element],
    reason: &str,
) -> UnabbreviationError {
    let kind = node.construct_kind();
    UnabbreviationError::MalformedTemplate {
        kind,
        template: language.template(kind).source().to_string(),
        produced: detokenize(produced),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::building::{parse_elements, MAX_DEPTH};
    use crate::logic::language::Loader;
    use crate::logic::lexing::tokenize;
    use crate::logic::testing::languages;
    use crate::logic::token::{parse_markup, ToMarkup};

    fn parse(language: &Language, markup: &str) -> Expression {
        parse_elements(language, tokenize(&parse_markup(markup))).unwrap()
    }

    fn unabbreviated(language: &Language, markup: &str) -> String {
        let expr = parse(language, markup);
        let result = unabbreviate(language, &expr).unwrap();
        language.render_expression(&result).to_markup()
    }

    #[test]
    fn test_conjunction() {
        let lq = languages::lq();
        assert_eq!(unabbreviated(&lq, "𝐴∧𝐵"), "∼(𝐴→∼𝐵)");
    }

    #[test]
    fn test_nested_expansion_is_innermost_first() {
        let lq = languages::lq();
        assert_eq!(unabbreviated(&lq, "(𝐴∨𝐵)∧𝐶"), "∼((∼𝐴→𝐵)→∼𝐶)");
    }

    #[test]
    fn test_existential() {
        let lq = languages::lq();
        assert_eq!(unabbreviated(&lq, "∃𝑥𝐹^{1}𝑥"), "∼∀𝑥∼𝐹^{1}𝑥");
    }

    #[test]
    fn test_biconditional_repeats_children() {
        let lq = languages::lq();
        assert_eq!(
            unabbreviated(&lq, "𝐴↔∼𝐵"),
            "∼((𝐴→∼𝐵)→∼(∼𝐵→𝐴))"
        );
    }

    #[test]
    fn test_nand_and_nor() {
        let ls = languages::ls();
        assert_eq!(unabbreviated(&ls, "𝐴↑𝐵"), "(𝐴→∼𝐵)");
        assert_eq!(unabbreviated(&ls, "[𝐴↓𝐵]"), "∼(∼𝐴→𝐵)");
    }

    #[test]
    fn test_no_defined_constructs_is_a_fixpoint() {
        let lq = languages::lq();
        for source in ["𝐴", "∼(𝐴→𝐵)", "∀𝑥_{1}𝐹^{2}𝑥_{1}𝑓^{1}𝑎", "𝑔^{2}𝑎𝑥"] {
            let expr = parse(&lq, source);
            assert_eq!(unabbreviate(&lq, &expr).unwrap(), expr, "{source}");
        }
    }

    #[test]
    fn test_deep_primitive_formula_is_a_fixpoint() {
        let lq = languages::lq();
        let expr = parse(&lq, &("∼".repeat(MAX_DEPTH - 1) + "𝐴"));
        assert_eq!(unabbreviate(&lq, &expr).unwrap(), expr);
    }

    #[test]
    fn test_expansion_past_the_nesting_limit_is_a_parse_error() {
        // each ∃ expands to three levels: ∼∀𝑥∼
        let lq = languages::lq();
        let expr = parse(&lq, &("∃𝑥".repeat(100) + "𝐴"));
        assert!(matches!(
            unabbreviate(&lq, &expr),
            Err(UnabbreviationError::Parse(ParseError::TooDeep {
                limit: MAX_DEPTH,
                ..
            }))
        ));
    }

    #[test]
    fn test_children_joined_with_comma() {
        let lf = languages::delimited();
        assert_eq!(unabbreviated(&lf, "F(a,b)"), "F(a,b)");
        let expr = parse(&lf, "F(a,b)");
        let result = unabbreviate(&lf, &expr).unwrap();
        assert_eq!(result, expr);
    }

    #[test]
    fn test_malformed_template_is_reported() {
        let registry = Loader::new()
            .with_toml_str(
                r#"
                [languages.lq.templates]
                conjunction = "(|0|→"
                "#,
            )
            .build()
            .unwrap();
        let lq = registry.get("Lq").unwrap();
        let expr = parse(lq, "𝐴∧𝐵");
        assert!(matches!(
            unabbreviate(lq, &expr),
            Err(UnabbreviationError::MalformedTemplate {
                kind: ConstructKind::Conjunction,
                ..
            })
        ));
    }

    #[test]
    fn test_template_of_wrong_category() {
        let registry = Loader::new()
            .with_toml_str(
                r#"
                [languages.lq.templates]
                constant = "𝐴"
                "#,
            )
            .build()
            .unwrap();
        let lq = registry.get("Lq").unwrap();
        let expr = parse(lq, "𝐹^{1}𝑎");
        let err = unabbreviate(lq, &expr).unwrap_err();
        assert!(err.to_string().contains("expected a term"), "{err}");
    }
}
