// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod event;
pub mod signup;
pub mod token;
pub mod user;

pub use event::{Event, EventRow, Location, NewEvent};
pub use signup::Signup;
pub use token::{NewToken, Token};
pub use user::{NewUser, User};
