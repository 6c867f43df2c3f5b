use funday_engine::services::Engine;
use funday_engine::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Smoke entry point: load configuration, validate the content catalog,
/// restore the persisted profile if one exists, and report the result. The
/// actual product embeds the library and drives it from its UI layer.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "funday_engine=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting FUNDay Junior progress engine");

    let config = Config::load()?;
    let engine = Engine::new(config)?;

    for module in engine.catalog.modules() {
        tracing::info!(
            id = module.id,
            title = %module.title,
            questions = module.quiz.questions.len(),
            total_score = module.quiz.total_score,
            "module"
        );
    }

    match engine.store.current() {
        Some(user) => tracing::info!(
            user = %user.display_name,
            avatar = %user.avatar_token,
            stars = user.stars,
            coins = user.coins,
            level = user.level.as_str(),
            completed = user.completed_modules.len(),
            badges = user.earned_badge_count(),
            "saved profile"
        ),
        None => tracing::info!("no saved profile; waiting for signup"),
    }

    Ok(())
}
