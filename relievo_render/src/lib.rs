// Copyright 2026 the Relievo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw-plan flattening and invalidation extents for relievo.
//!
//! This crate provides the intermediate representation between
//! [`relievo_core`]'s layer-stack derivation and host-specific rendering.
//! It defines:
//!
//! - [`DrawItem`] — a single draw command in the plan
//! - [`DrawPlan`] — the ordered, back-to-front command list for one effect
//! - [`Presenter`] — the trait hosts implement to consume plans
//! - [`visual_extent`] — the invalidation region a plan can paint

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

extern crate alloc;

mod extent;
mod plan;

pub use extent::visual_extent;
pub use plan::{DrawItem, DrawPlan, LayerRole, Presenter, ShadowParams};
