/// Suffixes that plausibly close a declaration. Only trailing whitespace is
/// insignificant. `const ;` and `override ;` are the only spaced variants.
pub const DECLARATION_TERMINATORS: &[&str] = &[
    ");",
    "}",
    "};",
    "const;",
    "const ;",
    "override;",
    "override ;",
    "= 0;",
];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StripError {
    #[error("unmatched {marker} on line {line}")]
    UnmatchedEndMarker { marker: &'static str, line: usize },

    #[error("unmatched {marker} on line {line}")]
    UnmatchedStartMarker { marker: &'static str, line: usize },

    #[error("mismatched count of round brackets ({depth} open) closing declaration on line {line}")]
    UnbalancedRoundBrackets { line: usize, depth: i64 },

    #[error("mismatched count of curly brackets ({depth} open) closing declaration on line {line}")]
    UnbalancedCurlyBrackets { line: usize, depth: i64 },

    #[error("{marker} declaration starting on line {line} never terminates")]
    UnterminatedDeclaration { marker: &'static str, line: usize },
}

pub fn ends_declaration(line: &str) -> bool {
    let line = line.trim_end();
    DECLARATION_TERMINATORS.iter().any(|t| line.ends_with(t))
}

/// 1-based line number of a byte offset.
pub fn line_of(text: &str, offset: usize) -> usize {
    text[..offset].matches('\n').count() + 1
}
