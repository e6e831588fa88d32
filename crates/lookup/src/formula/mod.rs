//! Chemical formula presentation.
//!
//! Three pure renderings of a formula string:
//! - [`tokenize`] - per-character tokens tagged as normal, subscript or superscript
//! - [`to_latex`] - LaTeX-style markup (`H2O` -> `H_{2}O`)
//! - [`to_html`] - an HTML fragment with `<sub>`/`<sup>` elements
//!
//! None of these validate the formula; any string is accepted.

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::{FormulaToken, TokenKind};

lazy_static! {
    /// A maximal run of ASCII decimal digits.
    static ref DIGIT_RUN_REGEX: Regex =
        Regex::new(r"[0-9]+").expect("Invalid regex pattern");
}

/// Charge rewrites applied after subscripting, in order, first occurrence only.
const CHARGE_REWRITES: &[(&str, &str)] = &[
    ("_+", "^+"),
    ("_-", "^-"),
    ("_{+", "^{+"),
    ("_{-", "^{-"),
];

/// Classify every character of `formula`.
///
/// Digits become subscripts and `+` becomes a superscript. Everything else,
/// including `-`, renders normally. The result has one token per `char`.
///
/// ```
/// use chemtrack_lookup::formula::tokenize;
/// use chemtrack_lookup::models::TokenKind;
///
/// let kinds: Vec<TokenKind> = tokenize("H2O").iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Normal, TokenKind::Subscript, TokenKind::Normal]);
/// ```
pub fn tokenize(formula: &str) -> Vec<FormulaToken> {
    formula
        .chars()
        .map(|c| FormulaToken::new(c, classify(c)))
        .collect()
}

fn classify(c: char) -> TokenKind {
    if c.is_ascii_digit() {
        TokenKind::Subscript
    } else if c == '+' {
        TokenKind::Superscript
    } else {
        TokenKind::Normal
    }
}

/// Convert `formula` to LaTeX-style markup.
///
/// Digit runs are wrapped as subscripts, then a subscript that opens with a
/// `+` or `-` is turned into a superscript. The charge pass rewrites only the
/// first match of each pattern, so `A_+B_+` becomes `A^+B_+`.
///
/// ```
/// use chemtrack_lookup::formula::to_latex;
///
/// assert_eq!(to_latex("H2SO4"), "H_{2}SO_{4}");
/// assert_eq!(to_latex("Na+"), "Na+");
/// ```
pub fn to_latex(formula: &str) -> String {
    if formula.is_empty() {
        return String::new();
    }

    let mut latex = DIGIT_RUN_REGEX
        .replace_all(formula, |caps: &regex::Captures| format!("_{{{}}}", &caps[0]))
        .into_owned();

    for (pattern, replacement) in CHARGE_REWRITES {
        latex = latex.replacen(pattern, replacement, 1);
    }

    latex
}

/// Render `formula` as an HTML fragment.
///
/// ```
/// use chemtrack_lookup::formula::to_html;
///
/// assert_eq!(to_html("H2O"), "H<sub>2</sub>O");
/// ```
pub fn to_html(formula: &str) -> String {
    let mut html = String::with_capacity(formula.len());
    for token in tokenize(formula) {
        match token.kind {
            TokenKind::Normal => push_escaped(&mut html, token.text),
            TokenKind::Subscript => {
                html.push_str("<sub>");
                push_escaped(&mut html, token.text);
                html.push_str("</sub>");
            }
            TokenKind::Superscript => {
                html.push_str("<sup>");
                push_escaped(&mut html, token.text);
                html.push_str("</sup>");
            }
        }
    }
    html
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(c),
    }
}
