//! Proxify TUI - the Proxify front page in the terminal
//!
//! A theme toggle plus the registry of supported API endpoints, loaded from
//! `GET /api/routes` and revealed a few cards at a time.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod disclosure;
pub mod error;
pub mod i18n;
pub mod lifecycle;
pub mod logging;
pub mod panel;
pub mod registry;
pub mod terminal;
pub mod theme;
pub mod traits;
pub mod ui;
