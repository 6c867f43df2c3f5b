use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::error::EngineError;
use crate::models::catalog::Catalog;
use crate::models::event::ProgressEvent;
use crate::models::user::UserState;

use super::reward_policy;

/// Listener invoked synchronously with the new state after every reducer
/// transition, before `apply` returns.
pub type Listener = Box<dyn Fn(&UserState)>;

/// Sole owner and mutator of the active `UserState`. Explicitly constructed
/// and passed by whoever composes the application; holds the subscriber list
/// instead of an ambient global. Performs no I/O itself; persistence hangs
/// off the listener list.
pub struct ProgressStore {
    catalog: Arc<Catalog>,
    user: Option<UserState>,
    listeners: Vec<Listener>,
}

impl ProgressStore {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        ProgressStore {
            catalog,
            user: None,
            listeners: Vec::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn current(&self) -> Option<&UserState> {
        self.user.as_ref()
    }

    pub fn subscribe(&mut self, listener: impl Fn(&UserState) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Install the active user (fresh signup or a loaded snapshot) and
    /// notify listeners so the snapshot is written immediately.
    pub fn sign_in(&mut self, user: UserState) {
        tracing::info!(user = %user.display_name, "user signed in");
        let user = self.user.insert(user);
        for listener in &self.listeners {
            listener(user);
        }
    }

    /// Drop the active user. The engine deletes no server data (none exists);
    /// the composing layer clears the persisted snapshot.
    pub fn sign_out(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user = %user.display_name, "user signed out");
        }
    }

    /// Run one event through the reducer. On error the state is unchanged;
    /// on success every listener sees the new state before this returns.
    pub fn apply(&mut self, event: &ProgressEvent) -> Result<&UserState, EngineError> {
        let current = self
            .user
            .as_ref()
            .ok_or_else(|| EngineError::invalid_state("no user is signed in"))?;

        let next = reduce(&self.catalog, current, event, Utc::now())?;
        let user = self.user.insert(next);
        for listener in &self.listeners {
            listener(user);
        }
        Ok(user)
    }
}

/// The pure state-transition function: `(state, event) -> next state`, with
/// the catalog for entity checks and `now` as the event's logical time.
/// Events are applied atomically: any error leaves the input untouched and
/// no partial update escapes.
pub fn reduce(
    catalog: &Catalog,
    state: &UserState,
    event: &ProgressEvent,
    now: DateTime<Utc>,
) -> Result<UserState, EngineError> {
    match event {
        ProgressEvent::ModuleCompleted {
            module_id,
            raw_score,
            total_score,
        } => complete_module(catalog, state, *module_id, *raw_score, *total_score, now),

        ProgressEvent::BadgeEarned { badge_id } => {
            if catalog.badge(badge_id).is_none() {
                return Err(EngineError::unknown_entity(format!(
                    "badge '{}' is not in the catalog",
                    badge_id
                )));
            }
            let mut next = state.clone();
            earn_badge(&mut next, badge_id, now)?;
            Ok(next)
        }

        ProgressEvent::ProfileUpdated {
            display_name,
            avatar_token,
        } => {
            if let Some(name) = display_name {
                if name.trim().is_empty() {
                    return Err(EngineError::invalid_input("display name must not be empty"));
                }
            }
            let mut next = state.clone();
            if let Some(name) = display_name {
                next.display_name = name.clone();
            }
            if let Some(avatar) = avatar_token {
                next.avatar_token = avatar.clone();
            }
            Ok(next)
        }
    }
}

fn complete_module(
    catalog: &Catalog,
    state: &UserState,
    module_id: u32,
    raw_score: u32,
    total_score: u32,
    now: DateTime<Utc>,
) -> Result<UserState, EngineError> {
    if catalog.module(module_id).is_none() {
        return Err(EngineError::unknown_entity(format!(
            "module {} is not in the catalog",
            module_id
        )));
    }
    if total_score == 0 {
        return Err(EngineError::invalid_input(
            "total score must be greater than zero",
        ));
    }
    if raw_score > total_score {
        return Err(EngineError::invalid_input(format!(
            "raw score {} exceeds total score {}",
            raw_score, total_score
        )));
    }

    let stars_awarded = reward_policy::stars_for_score(raw_score, total_score);

    let mut next = state.clone();
    // Set semantics: repeating a module never duplicates the id. Stars and
    // coins are still granted on replay (source behavior, kept on purpose).
    next.completed_modules.insert(module_id);
    next.stars += stars_awarded;
    next.coins += reward_policy::coins_for_stars(stars_awarded);
    next.level = reward_policy::level_for_stars(next.stars);

    if raw_score == total_score {
        earn_badge(&mut next, reward_policy::PERFECT_SCORE_BADGE, now)?;
    }
    if let Some(badge_id) = reward_policy::module_badge(module_id) {
        earn_badge(&mut next, badge_id, now)?;
    }
    if next.completed_modules.len() == catalog.module_count() {
        earn_badge(&mut next, reward_policy::ALL_MODULES_BADGE, now)?;
    }

    tracing::info!(
        module_id,
        raw_score,
        total_score,
        stars_awarded,
        stars = next.stars,
        coins = next.coins,
        level = next.level.as_str(),
        "module completed"
    );
    Ok(next)
}

/// Flip a badge to earned, stamping the event's logical time. Earning an
/// already-earned badge is a no-op; `earned_at` keeps its first value.
fn earn_badge(
    state: &mut UserState,
    badge_id: &str,
    now: DateTime<Utc>,
) -> Result<(), EngineError> {
    let badge = state.badges.get_mut(badge_id).ok_or_else(|| {
        EngineError::unknown_entity(format!("badge '{}' is not in the catalog", badge_id))
    })?;
    if !badge.earned {
        badge.earned = true;
        badge.earned_at = Some(now);
        tracing::info!(badge_id, "badge earned");
    }
    Ok(())
}
