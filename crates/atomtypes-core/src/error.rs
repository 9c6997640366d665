/// Error while loading a declaration feed.
///
/// Script errors carry the 1-based line they were found on.
#[derive(Debug, thiserror::Error)]
pub enum DeclarationError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: expected a type symbol")]
    MissingSymbol { line: usize },

    #[error("line {line}: empty name in list")]
    EmptyName { line: usize },

    #[error("line {line}: unterminated quoted name")]
    UnterminatedName { line: usize },

    #[error("line {line}: unknown directive `{directive}`")]
    UnknownDirective { line: usize, directive: String },

    #[error("line {line}: unexpected `{text}`")]
    TrailingInput { line: usize, text: String },
}

impl DeclarationError {
    /// Line number for script errors, `None` for JSON errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Json(_) => None,
            Self::MissingSymbol { line }
            | Self::EmptyName { line }
            | Self::UnterminatedName { line }
            | Self::UnknownDirective { line, .. }
            | Self::TrailingInput { line, .. } => Some(*line),
        }
    }
}
