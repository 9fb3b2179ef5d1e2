//! Inline style-block extraction from markup.

use crate::Result;
use regex::RegexBuilder;

/// Concatenate the contents of every `<style>` block in a page.
///
/// Markup scanning, not HTML parsing: attributes on the tag are tolerated,
/// matching is case-insensitive, and blocks are joined with blank lines so
/// the scanner keeps sensible line numbers per block. A page without style
/// blocks yields an empty string.
pub fn extract_style_blocks(html: &str) -> Result<String> {
    let style_block = RegexBuilder::new(r"<style[^>]*>(.*?)</style>")
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()?;

    let mut css = String::new();
    for captures in style_block.captures_iter(html) {
        css.push_str(&captures[1]);
        css.push_str("\n\n");
    }
    Ok(css)
}
