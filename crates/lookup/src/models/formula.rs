//! Rendered formula tokens.

use serde::{Deserialize, Serialize};

/// How a single formula character is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Normal,
    Subscript,
    Superscript,
}

/// One rendered character of a formula.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaToken {
    pub text: char,
    pub kind: TokenKind,
}

impl FormulaToken {
    pub fn new(text: char, kind: TokenKind) -> Self {
        Self { text, kind }
    }
}
