// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod admin_panel;
mod documents;
mod login;
mod properties;
mod remote;
pub mod support;
