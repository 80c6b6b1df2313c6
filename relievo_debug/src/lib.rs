// Copyright 2026 the Relievo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pretty-printing for relievo draw plans and rebuild traces.
//!
//! This crate provides development-time diagnostics:
//!
//! - [`pretty::dump_plan`] — human-readable one-line-per-item plan dumps.
//! - [`pretty::PrettyPrintSink`] — a
//!   [`TraceSink`](relievo_core::trace::TraceSink) that prints rebuild,
//!   skip, selection, and depth-change events.

pub mod pretty;
