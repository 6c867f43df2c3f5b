//! Pure reward formulas: stars from score, coins from stars, level from
//! stars, and the badge-unlock mapping. Kept free of state and I/O so the
//! thresholds can be tested independently of the reducer's event plumbing.

use crate::models::user::Level;

/// Best possible star rating for a single quiz.
pub const MAX_STARS_PER_QUIZ: u32 = 5;

/// Coins granted per star earned.
pub const COINS_PER_STAR: u32 = 10;

/// Stars required for the Explorer tier.
pub const EXPLORER_THRESHOLD: u32 = 20;

/// Stars required for the Genius tier.
pub const GENIUS_THRESHOLD: u32 = 50;

/// Awarded for a perfect score on any module's quiz.
pub const PERFECT_SCORE_BADGE: &str = "quiz-champ";

/// Awarded once every catalog module has been completed.
pub const ALL_MODULES_BADGE: &str = "story-master";

/// `floor(raw_score / total_score * 5)`, in 0..=5 for any raw <= total.
/// Callers must reject `total_score == 0` before calling. Widened to u64 so
/// scores near `u32::MAX` cannot overflow the multiplication.
pub fn stars_for_score(raw_score: u32, total_score: u32) -> u32 {
    debug_assert!(total_score > 0);
    (u64::from(raw_score) * u64::from(MAX_STARS_PER_QUIZ) / u64::from(total_score)) as u32
}

pub fn coins_for_stars(stars: u32) -> u32 {
    stars * COINS_PER_STAR
}

pub fn level_for_stars(stars: u32) -> Level {
    if stars >= GENIUS_THRESHOLD {
        Level::Genius
    } else if stars >= EXPLORER_THRESHOLD {
        Level::Explorer
    } else {
        Level::Beginner
    }
}

/// Fixed module-to-badge mapping; the badge is awarded on completion of the
/// module regardless of score.
pub fn module_badge(module_id: u32) -> Option<&'static str> {
    match module_id {
        1 => Some("insurance-expert"),
        2 => Some("investment-genius"),
        3 => Some("stock-safari-explorer"),
        4 => Some("bond-builder"),
        5 => Some("equity-knight"),
        _ => None,
    }
}
