//! CSS Syntax Module Level 3: Parsing and tokenization.
//! Reference: <https://www.w3.org/TR/css-syntax-3/>
//!
//! Style sheet sources are parsed into raw style rules. Invalid top-level rules are
//! reported as [`Diagnostic`]s carrying line numbers shifted by the caller's start line,
//! so embedded sources (e.g. a `<style>` block on line 40 of a document) report real
//! document lines.
use cssparser::AtRuleParser as CssAtRuleParser;
use cssparser::BasicParseErrorKind;
use cssparser::CowRcStr;
use cssparser::DeclarationParser as CssDeclarationParser;
use cssparser::ParseError;
use cssparser::Parser;
use cssparser::ParserInput;
use cssparser::ParserState;
use cssparser::QualifiedRuleParser as CssQualifiedRuleParser;
use cssparser::RuleBodyItemParser as CssRuleBodyItemParser;
use cssparser::RuleBodyParser as CssRuleBodyParser;
use cssparser::StyleSheetParser;
use log::trace;
use std::fmt;

/// A single CSS declaration (property: value [!important]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Lowercased property name.
    pub name: String,
    /// Raw value text (without trailing !important).
    pub value: String,
    /// Whether the declaration was marked as `!important`.
    pub important: bool,
}

/// A single style rule with a raw prelude and parsed declarations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRule {
    /// Raw prelude text (typically the selector list).
    pub prelude: String,
    /// Declarations within the rule block.
    pub declarations: Vec<Declaration>,
    /// 1-based source line of the prelude, including the start line offset.
    pub line: u32,
}

/// A parsed stylesheet consisting of style rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stylesheet {
    /// Top-level style rules in source order.
    pub rules: Vec<StyleRule>,
}

/// A syntax problem found while parsing a top-level rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line, including the start line offset.
    pub line: u32,
    /// 1-based column.
    pub column: u32,
    /// Human readable description.
    pub message: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}:{}: {}", self.line, self.column, self.message)
    }
}

/// Result of parsing a source: the rules that parsed plus any diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedSheet {
    pub sheet: Stylesheet,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedSheet {
    /// True when every top-level rule parsed.
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parse `!important` at the end of a value, returning (`value_without_important`, `important_flag`).
fn split_important_tail(value: &str) -> (String, bool) {
    let trimmed = value.trim();
    if let Some(pos) = trimmed.rfind("!important")
        && let Some(prefix) = trimmed.get(..pos)
    {
        let head = prefix.trim_end();
        return (head.to_owned(), true);
    }
    (trimmed.to_owned(), false)
}

/// Drain every remaining token of a nested parser.
fn consume_rest(input: &mut Parser<'_, '_>) {
    while input.next_including_whitespace_and_comments().is_ok() {}
}

/// A declaration parser that records property name and its raw value.
struct BodyDeclParser;

impl<'input> CssDeclarationParser<'input> for BodyDeclParser {
    type Declaration = Declaration;
    type Error = ();

    fn parse_value<'tokens>(
        &mut self,
        name: CowRcStr<'input>,
        input: &mut Parser<'input, 'tokens>,
        _decl_start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'input, Self::Error>> {
        let start = input.position();
        consume_rest(input);
        let raw = input.slice_from(start);
        let (value, important) = split_important_tail(raw);
        Ok(Declaration {
            name: name.to_ascii_lowercase(),
            value,
            important,
        })
    }
}

impl<'input> CssAtRuleParser<'input> for BodyDeclParser {
    type Prelude = ();
    type AtRule = Declaration;
    type Error = ();
}

impl<'input> CssQualifiedRuleParser<'input> for BodyDeclParser {
    type Prelude = ();
    type QualifiedRule = Declaration;
    type Error = ();
}

impl CssRuleBodyItemParser<'_, Declaration, ()> for BodyDeclParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

/// Top-level parser that builds `StyleRule` items for qualified rules.
///
/// At-rules are accepted and skipped (`None`); they never invalidate a sheet.
struct TopLevelParser {
    /// Lines preceding the source in its enclosing document.
    line_offset: u32,
}

/// 1-based document line of a 0-based source line.
const fn document_line(source_line: u32, line_offset: u32) -> u32 {
    source_line.saturating_add(1).saturating_add(line_offset)
}

impl<'input> CssAtRuleParser<'input> for TopLevelParser {
    type Prelude = String;
    type AtRule = Option<StyleRule>;
    type Error = ();

    #[inline]
    fn parse_prelude<'tokens>(
        &mut self,
        name: CowRcStr<'input>,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        consume_rest(input);
        Ok(name.to_string())
    }

    #[inline]
    fn parse_block<'tokens>(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::AtRule, ParseError<'input, Self::Error>> {
        trace!("skipping @{prelude} block");
        consume_rest(input);
        Ok(None)
    }

    #[inline]
    fn rule_without_block(
        &mut self,
        prelude: Self::Prelude,
        _start: &ParserState,
    ) -> Result<Self::AtRule, Self::Error> {
        trace!("skipping @{prelude} statement");
        Ok(None)
    }
}

impl<'input> CssQualifiedRuleParser<'input> for TopLevelParser {
    type Prelude = String; // raw selector/prelude
    type QualifiedRule = Option<StyleRule>;
    type Error = ();

    #[inline]
    fn parse_prelude<'tokens>(
        &mut self,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        let start = input.state();
        consume_rest(input);
        let prelude = input.slice_from(start.position()).trim().to_owned();
        if prelude.is_empty() {
            return Err(input.new_error(BasicParseErrorKind::QualifiedRuleInvalid));
        }
        Ok(prelude)
    }

    #[inline]
    fn parse_block<'tokens>(
        &mut self,
        prelude: Self::Prelude,
        start: &ParserState,
        input: &mut Parser<'input, 'tokens>,
    ) -> Result<Self::QualifiedRule, ParseError<'input, Self::Error>> {
        let decls = parse_declarations_from_block(input);
        Ok(Some(StyleRule {
            prelude,
            declarations: decls,
            line: document_line(start.source_location().line, self.line_offset),
        }))
    }
}

/// Parse declarations from a rule block using `cssparser` body parser.
fn parse_declarations_from_block(block: &mut Parser) -> Vec<Declaration> {
    let mut out: Vec<Declaration> = Vec::new();
    let mut body = BodyDeclParser;
    for decl in CssRuleBodyParser::new(block, &mut body).flatten() {
        out.push(decl);
    }
    out
}

/// Parse a stylesheet whose first line is `first_line` (1-based) in its enclosing source.
///
/// Rules that fail to parse are skipped and reported in [`ParsedSheet::diagnostics`].
pub fn parse_stylesheet_at(css: &str, first_line: u32) -> ParsedSheet {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let line_offset = first_line.saturating_sub(1);
    let mut top = TopLevelParser { line_offset };
    let mut parsed = ParsedSheet::default();
    for item in StyleSheetParser::new(&mut parser, &mut top) {
        match item {
            Ok(Some(rule)) => parsed.sheet.rules.push(rule),
            Ok(None) => {}
            Err((error, slice)) => parsed.diagnostics.push(Diagnostic {
                line: document_line(error.location.line, line_offset),
                column: error.location.column,
                message: format!("invalid rule `{}`", slice.trim()),
            }),
        }
    }
    parsed
}

/// Parse a full stylesheet into a `Stylesheet` using cssparser, dropping invalid rules.
pub fn parse_stylesheet(css: &str) -> Stylesheet {
    parse_stylesheet_at(css, 1).sheet
}
