pub mod catalog;
pub mod event;
pub mod user;

pub use catalog::{
    BadgeDefinition, Catalog, CorrectAnswer, ModuleDefinition, QuestionDefinition, QuestionKind,
    QuizDefinition,
};
pub use event::ProgressEvent;
pub use user::{BadgeState, Level, UserState};
