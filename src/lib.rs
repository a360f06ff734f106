// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Schrodinger-Box: user and event API
//!
//! This crate provides a JSON:API backend where callers authenticate with
//! an issued token, register a user profile and organize events.

pub mod config;
pub mod db;
pub mod error;
pub mod jsonapi;
pub mod middleware;
pub mod models;
pub mod routes;

use config::Config;
use db::Db;
use jsonapi::LinkBuilder;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub db: Db,
}

impl AppState {
    /// Link builder rooted at the configured public domain.
    pub fn links(&self) -> LinkBuilder<'_> {
        LinkBuilder::new(&self.config.domain)
    }
}
