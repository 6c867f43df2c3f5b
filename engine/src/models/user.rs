use chrono::{DateTime, Utc};
use rand::prelude::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use uuid::Uuid;

use super::catalog::Catalog;

/// Avatars offered on the signup screen. An avatar is an opaque token to the
/// engine; the list only feeds the random pick at signup.
pub const AVATARS: [&str; 10] = ["🐻", "🐱", "🐶", "🦊", "🐼", "🐨", "🦁", "🐸", "🐥", "🦄"];

/// Coins granted to every freshly created profile.
pub const STARTING_COINS: u32 = 100;

/// Tier label derived purely from cumulative stars. Never stored
/// independently of `stars`; the reducer recomputes it on every transition.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Level {
    #[default]
    Beginner,
    Explorer,
    Genius,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Explorer => "Explorer",
            Level::Genius => "Genius",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BadgeState {
    pub earned: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub earned_at: Option<DateTime<Utc>>,
}

impl BadgeState {
    pub fn unearned() -> Self {
        BadgeState {
            earned: false,
            earned_at: None,
        }
    }
}

/// The mutable user aggregate. Owned by the progress store and mutated only
/// through reducer events; serialized as the persistence snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserState {
    pub id: Uuid,
    pub display_name: String,
    pub avatar_token: String,
    pub stars: u32,
    pub coins: u32,
    pub level: Level,
    pub completed_modules: BTreeSet<u32>,
    /// One entry per catalog badge. Keys are fixed at creation; only the
    /// `earned` flag and timestamp ever change.
    pub badges: BTreeMap<String, BadgeState>,
    pub created_at: DateTime<Utc>,
}

impl UserState {
    /// Fresh profile with the fixed signup defaults and every catalog badge
    /// unearned.
    pub fn new(
        display_name: impl Into<String>,
        avatar_token: impl Into<String>,
        catalog: &Catalog,
    ) -> Self {
        let badges = catalog
            .badges()
            .iter()
            .map(|badge| (badge.id.clone(), BadgeState::unearned()))
            .collect();

        UserState {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
            avatar_token: avatar_token.into(),
            stars: 0,
            coins: STARTING_COINS,
            level: Level::Beginner,
            completed_modules: BTreeSet::new(),
            badges,
            created_at: Utc::now(),
        }
    }

    /// Signup path: picks a random avatar, like the original signup screen.
    pub fn sign_up(display_name: impl Into<String>, catalog: &Catalog) -> Self {
        let avatar = AVATARS
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(AVATARS[0]);
        Self::new(display_name, avatar, catalog)
    }

    pub fn badge_earned(&self, badge_id: &str) -> bool {
        self.badges.get(badge_id).is_some_and(|b| b.earned)
    }

    pub fn earned_badge_count(&self) -> usize {
        self.badges.values().filter(|b| b.earned).count()
    }
}
