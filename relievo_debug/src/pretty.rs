// Copyright 2026 the Relievo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable output for draw plans and rebuild traces.
//!
//! [`dump_plan`] writes one line per draw item to a
//! [`Write`](std::io::Write) destination. [`PrettyPrintSink`] implements
//! [`TraceSink`] and writes one line per rebuild event (default: stderr).

use std::io::Write;

use relievo_core::style::{CornerGroup, DepthType};
use relievo_core::trace::{RebuildEvent, TraceSink};
use relievo_render::{DrawItem, DrawPlan, LayerRole};

/// Writes one human-readable line per draw item.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn dump_plan(plan: &DrawPlan, writer: &mut impl Write) -> std::io::Result<()> {
    match &plan.composite_clip {
        Some(clip) => writeln!(writer, "plan: {} items, clip={clip:?}", plan.items.len())?,
        None => writeln!(writer, "plan: {} items", plan.items.len())?,
    }
    for item in &plan.items {
        dump_item(item, writer)?;
    }
    Ok(())
}

fn dump_item(item: &DrawItem, writer: &mut impl Write) -> std::io::Result<()> {
    let [r, g, b, a] = item.color.components;
    write!(
        writer,
        "  [{}] frame=({:.1},{:.1} {:.1}x{:.1}) rgba=({r:.2},{g:.2},{b:.2},{a:.2}) \
         opacity={:.2}",
        role_name(item.role),
        item.frame.x0,
        item.frame.y0,
        item.frame.width(),
        item.frame.height(),
        item.opacity,
    )?;
    if let Some(shadow) = &item.shadow {
        write!(
            writer,
            " offset=({:.1},{:.1}) blur={:.1} path={}el",
            shadow.offset.x,
            shadow.offset.y,
            shadow.blur_radius,
            shadow.path.elements().len(),
        )?;
    }
    if let Some(mask) = &item.mask {
        write!(writer, " mask={}fades", mask.fades.len())?;
    }
    if item.clip.is_some() {
        write!(writer, " clipped")?;
    }
    writeln!(writer)
}

fn role_name(role: LayerRole) -> &'static str {
    match role {
        LayerRole::DarkShadow => "dark",
        LayerRole::LightShadow => "light",
        LayerRole::LightOverflow => "light+",
        LayerRole::Fill => "fill",
        LayerRole::Edge => "edge",
    }
}

fn depth_name(depth_type: DepthType) -> &'static str {
    match depth_type {
        DepthType::Convex => "convex",
        DepthType::Concave => "concave",
    }
}

fn group_name(corner_group: CornerGroup) -> &'static str {
    match corner_group {
        CornerGroup::All => "all",
        CornerGroup::TopRow => "top-row",
        CornerGroup::MiddleRow => "middle-row",
        CornerGroup::BottomRow => "bottom-row",
    }
}

/// Writes human-readable trace lines to a [`Write`](std::io::Write)
/// destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_rebuild(&mut self, event: &RebuildEvent) {
        let _ = writeln!(
            self.writer,
            "[rebuild] depth={} group={} edged={}",
            depth_name(event.depth_type),
            group_name(event.corner_group),
            event.edged,
        );
    }

    fn on_skip(&mut self) {
        let _ = writeln!(self.writer, "[skip]");
    }

    fn on_fill_recolored(&mut self) {
        let _ = writeln!(self.writer, "[fill] recolored");
    }

    fn on_selection(&mut self, selected: bool) {
        let _ = writeln!(self.writer, "[selection] selected={selected}");
    }

    fn on_depth_changed(&mut self, depth_type: DepthType) {
        let _ = writeln!(self.writer, "[depth] now={}", depth_name(depth_type));
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;
    use relievo_core::effect::Effect;
    use relievo_core::trace::Tracer;

    use super::*;

    fn sample_effect() -> Effect {
        let mut effect = Effect::new();
        effect.set_bounds(Size::new(100.0, 40.0));
        effect.set_corner_radius(12.0);
        effect
    }

    #[test]
    fn dump_plan_lists_every_item() {
        let mut effect = sample_effect();
        let _ = effect.rebuild();
        let plan = DrawPlan::build(&effect);

        let mut out = Vec::new();
        dump_plan(&plan, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("plan: 3 items"), "got: {output}");
        assert!(output.contains("[dark]"), "got: {output}");
        assert!(output.contains("[light]"), "got: {output}");
        assert!(output.contains("[fill]"), "got: {output}");
    }

    #[test]
    fn pretty_print_rebuild_and_skip() {
        let mut effect = sample_effect();
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        let _ = effect.rebuild_with(&mut Tracer::new(&mut sink));
        let _ = effect.rebuild_with(&mut Tracer::new(&mut sink));
        let output = String::from_utf8(sink.writer).unwrap();
        assert!(output.contains("[rebuild] depth=convex group=all"), "got: {output}");
        assert!(output.contains("[skip]"), "got: {output}");
    }

    #[test]
    fn pretty_print_depth_change() {
        let mut effect = sample_effect();
        let _ = effect.rebuild();
        effect.set_depth_type(DepthType::Concave);
        let mut sink = PrettyPrintSink::with_writer(Vec::<u8>::new());
        let _ = effect.rebuild_with(&mut Tracer::new(&mut sink));
        let output = String::from_utf8(sink.writer).unwrap();
        assert!(output.contains("[depth] now=concave"), "got: {output}");
    }
}
