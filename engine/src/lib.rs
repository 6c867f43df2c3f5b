#![allow(dead_code)]

//! Progress and reward engine for the FUNDay Junior learning product: quiz
//! sessions, the user-progress reducer, the star/coin/level reward policy,
//! and the single-profile snapshot store. No UI, no network; the composing
//! layer wires the pieces together.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{CatalogError, EngineError};
pub use models::catalog::Catalog;
pub use models::event::ProgressEvent;
pub use models::user::UserState;
pub use services::{Engine, ProgressStore, QuizSession, SnapshotStore};
