//! fintrack - budget and savings goal insights
//!
//! This library derives spending, budget and savings-goal insights from a
//! snapshot of a personal finance tracker. Every derived figure (spent,
//! saved, status, notifications) is recomputed from the snapshot on demand;
//! nothing derived is ever stored back on the records.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, budgets, goals, money, ranges)
//! - `storage`: Snapshot loading and normalization of loosely typed input
//! - `services`: Filtering, aggregation, status and notifications
//! - `reports`: Report generation and terminal formatting
//! - `display`: Table and text formatting helpers
//! - `export`: JSON and YAML export of derived insights
//! - `cli`: Command handlers for the `fintrack` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use fintrack::services::{budget_progress, generate_notifications};
//! use fintrack::storage::Snapshot;
//!
//! let snapshot = Snapshot::load("snapshot.json")?;
//! for budget in &snapshot.budgets {
//!     let progress = budget_progress(budget, &snapshot.transactions);
//!     println!("{}: {}%", progress.category, progress.percentage);
//! }
//! let alerts = generate_notifications(&snapshot.budgets, &snapshot.goals, &snapshot.transactions);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{FintrackError, FintrackResult};
