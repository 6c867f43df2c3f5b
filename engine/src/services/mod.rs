use anyhow::{Context, Result};
use std::sync::Arc;

use crate::config::Config;
use crate::models::catalog::Catalog;

pub mod progress;
pub mod quiz_session;
pub mod reward_policy;
pub mod snapshot;

pub use progress::ProgressStore;
pub use quiz_session::{CheckOutcome, QuizResult, QuizSession};
pub use snapshot::SnapshotStore;

/// Composition root: validated catalog, progress store with the snapshot
/// writer subscribed, and the persisted profile (if any) restored.
pub struct Engine {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    pub store: ProgressStore,
    pub snapshots: SnapshotStore,
}

impl Engine {
    pub fn new(config: Config) -> Result<Self> {
        // A catalog that fails validation must not be served.
        let catalog = Arc::new(
            Catalog::load(&config.catalog_path)
                .with_context(|| format!("failed to load catalog from {}", config.catalog_path))?,
        );
        tracing::info!(
            modules = catalog.module_count(),
            badges = catalog.badges().len(),
            "content catalog loaded"
        );

        let snapshots = SnapshotStore::new(&config.data_dir);
        let mut store = ProgressStore::new(catalog.clone());

        // Snapshot every state change. The listener cannot fail the
        // transition, so persistence errors are logged and dropped.
        let writer = snapshots.clone();
        store.subscribe(move |user| {
            if let Err(e) = writer.save(user) {
                tracing::warn!("failed to persist snapshot: {:#}", e);
            }
        });

        if let Some(user) = snapshots.load().context("failed to load saved profile")? {
            tracing::info!(user = %user.display_name, "restored saved profile");
            store.sign_in(user);
        }

        Ok(Engine {
            config,
            catalog,
            store,
            snapshots,
        })
    }

    /// Logout: clear the in-memory user and the persisted snapshot.
    pub fn sign_out(&mut self) -> Result<()> {
        self.store.sign_out();
        self.snapshots.clear()
    }
}
