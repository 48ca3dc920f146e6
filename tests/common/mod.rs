//! Common test utilities and helpers
//!
//! - Test server and configuration fixtures
//! - Token helpers
//! - Custom assertion macros

#![allow(dead_code)]

#[macro_use]
pub mod assertions;
pub mod auth_helpers;

pub use auth_helpers::*;
