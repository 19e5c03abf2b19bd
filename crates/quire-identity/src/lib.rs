// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! User identities for Quire.
//!
//! A fixed, in-memory directory of users with roles. Passwords are stored
//! only as Argon2 hashes. Sessions are the caller's business.

mod argon2_config;
pub mod directory;
pub mod error;
pub mod password;
pub mod user;

pub use directory::{UserDirectory, DEMO_PASSWORD};
pub use error::{IdentityError, Result};
pub use user::User;
