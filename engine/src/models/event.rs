use serde::{Deserialize, Serialize};

/// Events consumed by the progress reducer. Serializable so a composing
/// layer can log or replay them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ProgressEvent {
    /// A quiz session finished for `module_id` with `raw_score` out of
    /// `total_score` points.
    #[serde(rename_all = "camelCase")]
    ModuleCompleted {
        module_id: u32,
        raw_score: u32,
        total_score: u32,
    },

    /// Direct badge award. Used for predicate-driven and manual awards alike.
    #[serde(rename_all = "camelCase")]
    BadgeEarned { badge_id: String },

    /// Partial identity update; touches only the provided fields.
    #[serde(rename_all = "camelCase")]
    ProfileUpdated {
        display_name: Option<String>,
        avatar_token: Option<String>,
    },
}
