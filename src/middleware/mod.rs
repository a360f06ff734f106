// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules (token authentication, API headers).

pub mod api;
pub mod token;

pub use api::add_api_headers;
pub use token::{require_token, RequestContext};
