// Copyright 2026 the Relievo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rebuild instrumentation.
//!
//! [`TraceSink`] has one method per event with no-op defaults, so a sink
//! implements only what it cares about. [`Tracer`] wraps an optional
//! `&mut dyn TraceSink`; with the `trace` feature **off** every method
//! compiles to nothing, and with it **on** each call is a single `Option`
//! branch before dispatch.

use crate::style::{CornerGroup, DepthType};

/// Emitted when a rebuild actually reconstructs the layer stack.
#[derive(Clone, Copy, Debug)]
pub struct RebuildEvent {
    /// Depth mode of the rebuilt stack.
    pub depth_type: DepthType,
    /// Corner configuration of the rebuilt stack.
    pub corner_group: CornerGroup,
    /// Whether the edge highlight was built.
    pub edged: bool,
}

/// Receives effect lifecycle events.
///
/// All methods default to no-ops.
pub trait TraceSink {
    /// A rebuild reconstructed the full layer stack.
    fn on_rebuild(&mut self, event: &RebuildEvent) {
        let _ = event;
    }

    /// A rebuild found nothing to do and short-circuited.
    fn on_skip(&mut self) {}

    /// A rebuild recolored the fill without touching geometry.
    fn on_fill_recolored(&mut self) {}

    /// The selection state flipped.
    fn on_selection(&mut self, selected: bool) {
        let _ = selected;
    }

    /// The depth type changed (hosts adjust their own clipping on this).
    fn on_depth_changed(&mut self, depth_type: DepthType) {
        let _ = depth_type;
    }
}

/// Zero-overhead wrapper over an optional [`TraceSink`].
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut ()>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// A tracer that discards everything.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            #[cfg(feature = "trace")]
            sink: None,
            #[cfg(not(feature = "trace"))]
            _marker: core::marker::PhantomData,
        }
    }

    /// A tracer forwarding to `sink` (only meaningful with the `trace`
    /// feature enabled).
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(not(feature = "trace"))]
        let _ = sink;
        Self {
            #[cfg(feature = "trace")]
            sink: Some(sink),
            #[cfg(not(feature = "trace"))]
            _marker: core::marker::PhantomData,
        }
    }

    pub(crate) fn rebuild(&mut self, event: &RebuildEvent) {
        #[cfg(feature = "trace")]
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.on_rebuild(event);
        }
        #[cfg(not(feature = "trace"))]
        let _ = event;
    }

    pub(crate) fn skip(&mut self) {
        #[cfg(feature = "trace")]
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.on_skip();
        }
    }

    pub(crate) fn fill_recolored(&mut self) {
        #[cfg(feature = "trace")]
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.on_fill_recolored();
        }
    }

    pub(crate) fn selection(&mut self, selected: bool) {
        #[cfg(feature = "trace")]
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.on_selection(selected);
        }
        #[cfg(not(feature = "trace"))]
        let _ = selected;
    }

    pub(crate) fn depth_changed(&mut self, depth_type: DepthType) {
        #[cfg(feature = "trace")]
        if let Some(sink) = self.sink.as_deref_mut() {
            sink.on_depth_changed(depth_type);
        }
        #[cfg(not(feature = "trace"))]
        let _ = depth_type;
    }
}
