// Copyright 2026 the Relievo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style model and shadow/mask geometry for neumorphic surface effects.
//!
//! `relievo_core` turns a compact visual style (depth, corner radius, corner
//! group, light/dark opacities, colors) into the precise layer geometry of a
//! soft-UI surface: paired highlight and darkening shadows, gradient corner
//! masks, an optional thin edge ring, and the fill layer that binds them. It
//! is `no_std` compatible (with `alloc`) and performs no rendering itself;
//! hosts take the derived layer stack to whatever drawing system they use.
//!
//! # Architecture
//!
//! The crate is organized around a mutate-then-rebuild cycle:
//!
//! ```text
//!   host (resize, style change, input)
//!       │
//!       ▼
//!   Effect setters ──► dirty channels
//!                           │
//!       Effect::rebuild() ◄─┘
//!           │
//!           ▼
//!   shadow/mask/edge builders ──► LayerStack ──► EffectChanges
//! ```
//!
//! **[`style`]** — [`EffectStyle`](style::EffectStyle) and its enums, plus
//! the [`Tuning`](style::Tuning) constant table the path builders share.
//! Styles are sanitized by clamping, never rejected.
//!
//! **[`effect`]** — The [`Effect`](effect::Effect) compositor: owns one
//! element's style and bounds, derives the full
//! [`LayerStack`](effect::LayerStack), and short-circuits rebuilds whose
//! inputs did not change.
//!
//! **[`shadow`]**, **[`mask`]**, **[`edge`]** — Terminal geometry builders
//! for the two shadow layers (outer drop shadows in convex mode, inner
//! even-odd rings in concave mode), the concave gradient corner masks, and
//! the edge highlight ring.
//!
//! **[`corner`]** — [`CornerSet`](corner::CornerSet) bit-set and per-corner
//! radii for the grouped-row corner configurations.
//!
//! **[`color`]** — The HSB scale-and-clamp transform behind the derived
//! shadow and selection tints.
//!
//! **[`element`]** — Thin host-facing shells ([`Panel`](element::Panel),
//! [`Button`](element::Button), [`Row`](element::Row)) mapping press, toggle,
//! and highlight vocabulary onto the compositor.
//!
//! **[`dirty`]** — Dirty-channel constants for `understory_dirty`, keyed by
//! derived-layer slot.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types for
//! rebuild instrumentation, with zero-overhead [`Tracer`](trace::Tracer)
//! wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod clip;
pub mod color;
pub mod corner;
pub mod dirty;
pub mod edge;
pub mod effect;
pub mod element;
pub mod mask;
pub mod shadow;
pub mod style;
pub mod trace;
