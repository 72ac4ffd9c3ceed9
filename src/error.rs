use thiserror::Error;

/// Pattern compilation errors. These are fatal; the matcher never sees a
/// pattern that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("unclosed group: missing ')'")]
    UnclosedGroup,

    #[error("unmatched ')' in pattern")]
    UnmatchedCloseParen,

    #[error("unclosed character class: missing ']'")]
    UnclosedClass,

    #[error("empty character class")]
    EmptyClass,

    #[error("dangling escape at end of pattern")]
    DanglingEscape,

    #[error("'{0}' quantifier has nothing to repeat")]
    DanglingQuantifier(char),

    #[error("'{0}' anchor must be at the pattern edge")]
    MisplacedAnchor(char),

    #[error("unexpected character '{0}' in pattern")]
    Unexpected(char),

    #[error("unexpected end of pattern")]
    UnexpectedEnd,
}
