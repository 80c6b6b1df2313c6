// Copyright 2026 the Relievo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dirty-tracking channel constants.
//!
//! The compositor uses multi-channel dirty tracking (via [`understory_dirty`])
//! over its four derived-layer slots. Each channel represents an independent
//! category of change:
//!
//! - [`GEOMETRY`] — the bounds size or a whole-geometry style field (depth,
//!   depth type, corner radius, corner group) changed. Every derived layer
//!   must be rebuilt.
//! - [`SHADOW`] — a shadow-only style field changed (light or dark opacity,
//!   background tint). The edge highlight derives its opacity from the light
//!   shadow's, but both are recomputed by the same wholesale rebuild, so the
//!   channel carries no dependency edges.
//! - [`FILL`] — only the fill layer's color changed (element color swap or
//!   selection tint). Local-only; this is the channel that lets
//!   [`set_selected`](crate::effect::Effect::set_selected) recolor without a
//!   geometry rebuild.
//! - [`EDGE`] — the `edged` flag toggled. Local to the edge slot.
//!
//! Callers never query dirty state directly:
//! [`Effect::rebuild`](crate::effect::Effect::rebuild) drains all channels
//! so marks never accumulate, uses the [`FILL`] drain together with the
//! property snapshot to pick the cheapest valid response, and reports what
//! it did as [`EffectChanges`](crate::effect::EffectChanges).

use understory_dirty::Channel;

/// Bounds or whole-geometry style changed — full rebuild of every derived
/// layer.
pub const GEOMETRY: Channel = Channel::new(0);

/// Shadow-affecting style changed — rebuilt wholesale with the edge.
pub const SHADOW: Channel = Channel::new(1);

/// Fill color or selection tint changed — recolor only.
pub const FILL: Channel = Channel::new(2);

/// Edge highlight toggled — local to the edge slot.
pub const EDGE: Channel = Channel::new(3);
