use thiserror::Error;

/// Recoverable, synchronous errors returned by quiz sessions and the
/// progress reducer. On any of these the caller's state is unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Operation attempted in a state that forbids it (answering out of
    /// order, double-checking a question, advancing before checking).
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Malformed event payload, e.g. a zero total score.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Event references a module or badge id absent from the catalog.
    #[error("unknown entity: {0}")]
    UnknownEntity(String),
}

impl EngineError {
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        EngineError::InvalidState(msg.into())
    }

    pub fn invalid_input(msg: impl Into<String>) -> Self {
        EngineError::InvalidInput(msg.into())
    }

    pub fn unknown_entity(msg: impl Into<String>) -> Self {
        EngineError::UnknownEntity(msg.into())
    }
}

/// Catalog-load failures. These are fatal at startup: a catalog that does
/// not validate must not be served.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog failed field validation: {0}")]
    Fields(#[from] validator::ValidationErrors),

    #[error("duplicate module id {0}")]
    DuplicateModule(u32),

    #[error("duplicate badge id '{0}'")]
    DuplicateBadge(String),

    #[error("duplicate question id '{0}'")]
    DuplicateQuestion(String),

    #[error("module {0} has a quiz with no questions")]
    EmptyQuiz(u32),

    #[error("question '{0}' has an empty correct-answer set")]
    EmptyCorrectAnswer(String),

    #[error(
        "quiz '{quiz_id}' in module {module_id} declares total score {declared} \
         but its questions sum to {actual}"
    )]
    TotalScoreMismatch {
        module_id: u32,
        quiz_id: String,
        declared: u32,
        actual: u64,
    },

    #[error("catalog does not define badge '{0}', which the reward rules grant automatically")]
    MissingRewardBadge(String),
}
