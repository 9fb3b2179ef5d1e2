//! Line-oriented stylesheet scanning.
//!
//! This is deliberately not a CSS grammar: the scanner walks the text line
//! by line and pulls out candidate feature usages with cheap heuristics.
//! It never fails on malformed input; a line it cannot classify simply
//! yields no tokens. Known limitations, accepted by design: declarations
//! spanning multiple lines are missed, nested block scope is not tracked,
//! and string literals containing `{`/`}`/`;` are not understood.

use crate::Result;
use baseliner_core::{Category, UsageToken};
use regex::{Regex, RegexBuilder};

/// Extracts candidate feature usages from raw stylesheet text.
///
/// Compile-once (regexes are built in [`StylesheetScanner::new`]), reusable
/// and thread-safe; scanning borrows the scanner immutably.
#[derive(Debug)]
pub struct StylesheetScanner {
    declaration: Regex,
    at_rule: Regex,
}

impl StylesheetScanner {
    pub fn new() -> Result<Self> {
        let declaration = RegexBuilder::new(r"^\s*([a-z-]+)\s*:\s*([^;]+);?")
            .case_insensitive(true)
            .build()?;
        let at_rule = RegexBuilder::new(r"@([a-z-]+)")
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            declaration,
            at_rule,
        })
    }

    /// Scan stylesheet text into an ordered token sequence.
    ///
    /// A single line may emit several tokens: every declaration found on it,
    /// an at-rule token when it starts with `@`, and a selector token when
    /// it contains `:has(`.
    pub fn scan(&self, css: &str) -> Vec<UsageToken> {
        let mut tokens = Vec::new();

        for (idx, line) in css.lines().enumerate() {
            let line_no = idx + 1;
            let trimmed = line.trim();

            // Skip comments and empty lines
            if trimmed.is_empty() || trimmed.starts_with("/*") || trimmed.starts_with("//") {
                continue;
            }

            self.scan_declarations(trimmed, line_no, &mut tokens);

            if trimmed.starts_with('@') {
                if let Some(captures) = self.at_rule.captures(trimmed) {
                    tokens.push(UsageToken::new(
                        format!("@{}", &captures[1]),
                        trimmed,
                        Category::AtRule,
                        line_no,
                    ));
                }
            }

            if trimmed.contains(":has(") {
                tokens.push(UsageToken::new(
                    ":has()",
                    trimmed,
                    Category::Selector,
                    line_no,
                ));
            }
        }

        tokens
    }

    /// Emit declaration tokens found on one line.
    ///
    /// When the line opens a block inline (`.card { display: flex; ... }`),
    /// only text after the last `{` is considered, split on `;`, so selector
    /// text never masquerades as a property. A plain line yields at most one
    /// declaration.
    fn scan_declarations(&self, trimmed: &str, line_no: usize, tokens: &mut Vec<UsageToken>) {
        match trimmed.rfind('{') {
            Some(pos) => {
                for segment in trimmed[pos + 1..].split(';') {
                    self.push_declaration(segment, line_no, tokens);
                }
            }
            None => self.push_declaration(trimmed, line_no, tokens),
        }
    }

    fn push_declaration(&self, segment: &str, line_no: usize, tokens: &mut Vec<UsageToken>) {
        if let Some(captures) = self.declaration.captures(segment) {
            let property = captures[1].trim().to_string();
            let value = captures[2].trim_end_matches(['}', ' ', '\t']).trim();
            if value.is_empty() {
                return;
            }
            let category = categorize(&property);
            tokens.push(UsageToken::new(property, value, category, line_no));
        }
    }
}

/// Keyword heuristics mapping a property name to a coarse category.
fn categorize(property: &str) -> Category {
    if property.contains("grid") || property.contains("flex") || property.contains("gap") {
        Category::Layout
    } else if property.contains("color") {
        Category::Color
    } else if property.contains("filter") {
        Category::VisualEffects
    } else if property.contains("transform") {
        Category::Transform
    } else if property.contains("margin") || property.contains("padding") {
        Category::Spacing
    } else if property.contains("border") {
        Category::Border
    } else {
        Category::Other
    }
}
