//! Choccy Parser
//!
//! Turns source text into a [`SyntaxNode`] tree. This stage is purely
//! syntactic: number literals stay text, and nothing is evaluated.

use pest::{error::Error, iterators::Pair, Parser};
use pest_derive::Parser;
use tracing::trace;

use crate::errors::{SourceContext, SyntaxError};
use crate::syntax::{SyntaxNode, CHAR_TAG, REGEX_TAG, ROOT_TAG};

#[derive(Parser)]
#[grammar = "syntax/grammar.pest"]
struct ChoccyParser;

/// Deepest bracket nesting the front end accepts.
pub const MAX_NESTING_DEPTH: usize = 256;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parse Choccy source text into a syntax tree rooted at a `>` node.
///
/// # Examples
///
/// ```rust
/// use choccy::syntax::parse;
/// let tree = parse("<doc>", "(+ 1 2)").unwrap();
/// assert_eq!(tree.tag, ">");
/// assert_eq!(tree.expressions().count(), 1);
/// ```
pub fn parse(source_name: &str, source_text: &str) -> Result<SyntaxNode, SyntaxError> {
    let source = SourceContext::new(source_name, source_text);
    check_nesting(source_text, &source)?;

    let mut pairs = ChoccyParser::parse(Rule::program, source_text)
        .map_err(|e| convert_parse_error(e, &source))?;

    let mut children = vec![SyntaxNode::leaf(REGEX_TAG, "")];
    if let Some(program) = pairs.next() {
        children.extend(program.into_inner().map(build_node));
    }
    trace!(source = source_name, nodes = children.len(), "parsed program");

    Ok(SyntaxNode::branch(ROOT_TAG, children))
}

// ============================================================================
// TREE BUILDERS
// ============================================================================

fn build_node(pair: Pair<Rule>) -> SyntaxNode {
    match pair.as_rule() {
        Rule::number => SyntaxNode::leaf("expr|number", pair.as_str()),
        Rule::symbol => SyntaxNode::leaf("expr|symbol", pair.as_str()),
        Rule::s_exp => SyntaxNode::branch("expr|s_exp|>", pair.into_inner().map(build_node).collect()),
        Rule::q_exp => SyntaxNode::branch("expr|q_exp|>", pair.into_inner().map(build_node).collect()),
        Rule::open_paren | Rule::close_paren | Rule::open_brace | Rule::close_brace => {
            SyntaxNode::leaf(CHAR_TAG, pair.as_str())
        }
        // EOI, plus the silent and whitespace rules which never reach here
        _ => SyntaxNode::leaf(REGEX_TAG, ""),
    }
}

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Rejects input nested deeper than [`MAX_NESTING_DEPTH`] before pest
/// recurses into it.
fn check_nesting(source_text: &str, source: &SourceContext) -> Result<(), SyntaxError> {
    let mut depth = 0usize;
    let mut in_comment = false;
    for (offset, ch) in source_text.char_indices() {
        match ch {
            ';' => in_comment = true,
            '\n' => in_comment = false,
            '(' | '{' if !in_comment => {
                depth += 1;
                if depth > MAX_NESTING_DEPTH {
                    trace!(offset, "nesting limit reached");
                    return Err(SyntaxError::new(
                        source,
                        format!("nesting too deep (more than {MAX_NESTING_DEPTH} levels)"),
                        (offset..offset + 1).into(),
                    )
                    .with_help("flatten the expression or split it into smaller ones"));
                }
            }
            ')' | '}' if !in_comment => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    Ok(())
}

fn convert_parse_error(error: Error<Rule>, source: &SourceContext) -> SyntaxError {
    let span = match error.location {
        pest::error::InputLocation::Pos(pos) => (pos..pos).into(),
        pest::error::InputLocation::Span((start, end)) => (start..end).into(),
    };

    let error = error.renamed_rules(|rule| {
        match rule {
            Rule::number => "number",
            Rule::symbol => "symbol",
            Rule::open_paren => "'('",
            Rule::close_paren => "')'",
            Rule::open_brace => "'{'",
            Rule::close_brace => "'}'",
            Rule::s_exp => "S-expression",
            Rule::q_exp => "Q-expression",
            Rule::EOI => "end of input",
            _ => "expression",
        }
        .to_string()
    });
    let message = error.variant.message().into_owned();

    let help = if message.contains("')'") {
        Some("every '(' needs a matching ')'")
    } else if message.contains("'}'") {
        Some("every '{' needs a matching '}'")
    } else {
        None
    };

    let err = SyntaxError::new(source, message, span);
    match help {
        Some(help) => err.with_help(help),
        None => err,
    }
}
