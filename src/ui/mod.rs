// SPDX-License-Identifier: MPL-2.0
//! UI building blocks shared by the application views.

pub mod design_tokens;
pub mod feed;
