// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sections for Quire.

pub mod logging;
pub mod pdp;
pub mod policy;
pub mod store;

pub use logging::{LoggingConfig, LoggingConfigLayer};
pub use pdp::{PdpConfig, PdpConfigLayer, PdpFailurePolicy};
pub use policy::{PolicyConfig, PolicyConfigLayer};
pub use store::{StoreConfig, StoreConfigLayer};
