// Copyright (c) 2026 the kagome authors. All rights reserved.
// SPDX-License-Identifier: LicenseRef-Kagome-Proprietary
// See LICENSE in the repository root for full license terms.

//! Kyoto path realization of affine highest weight crystals
//!
//! A level-`l` dominant weight `lambda` and a cycle of level-`l`
//! perfect crystals realize the highest weight crystal `B(lambda)` as
//! finite paths with an implicit ground tail:
//!
//! - [`model`]: validated parents over a cycle of perfect crystals
//! - [`element`]: paths and their raising and lowering operators
//! - [`cache`]: process-wide sharing of constructed parents
//! - [`error`]: construction failures

pub mod cache;
pub mod element;
pub mod error;
pub mod model;

pub use cache::{clear_shared_models, shared_model, ModelCache};
pub use element::PathElement;
pub use error::{PathModelError, Statistic};
pub use model::KyotoPathModel;
