// Copyright 2026 the Relievo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Element adapters.
//!
//! One concrete compositor, three thin shells. Each shell owns an [`Effect`]
//! and maps its host-side vocabulary (press, toggle, highlight) onto the
//! compositor's setters. Hosts drive them the same way: forward size changes
//! to [`layout`](Panel::layout), poll [`Effect::needs_display`], and apply
//! the resulting stack.

use kurbo::Size;

use crate::effect::{Effect, EffectChanges};
use crate::style::DepthType;

/// A plain surface with a neumorphic effect.
#[derive(Debug, Default)]
pub struct Panel {
    effect: Effect,
}

impl Panel {
    /// Creates a panel with the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying compositor, for style access.
    #[must_use]
    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    /// The underlying compositor, for style mutation.
    pub fn effect_mut(&mut self) -> &mut Effect {
        &mut self.effect
    }

    /// Applies a new size and rebuilds. Call whenever the host lays the
    /// element out, including with an unchanged size (the rebuild then
    /// short-circuits).
    pub fn layout(&mut self, size: Size) -> EffectChanges {
        self.effect.set_bounds(size);
        self.effect.rebuild()
    }
}

/// A pressable surface.
///
/// Pressing tints the fill through the selection fast path; toggling flips
/// the depth type so the button reads as physically pushed in.
#[derive(Debug, Default)]
pub struct Button {
    effect: Effect,
    pressed: bool,
    toggled: bool,
}

impl Button {
    /// Creates a button with the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying compositor, for style access.
    #[must_use]
    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    /// The underlying compositor, for style mutation.
    pub fn effect_mut(&mut self) -> &mut Effect {
        &mut self.effect
    }

    /// Current press state.
    #[must_use]
    pub fn pressed(&self) -> bool {
        self.pressed
    }

    /// Current toggle state.
    #[must_use]
    pub fn toggled(&self) -> bool {
        self.toggled
    }

    /// Sets the transient press state. Cheap; safe to call on every input
    /// event.
    pub fn set_pressed(&mut self, pressed: bool) {
        if self.pressed != pressed {
            self.pressed = pressed;
            self.effect.set_selected(pressed);
        }
    }

    /// Sets the sticky toggle state, flipping between raised and pressed-in.
    pub fn set_toggled(&mut self, toggled: bool) {
        if self.toggled != toggled {
            self.toggled = toggled;
            self.effect.set_depth_type(if toggled {
                DepthType::Concave
            } else {
                DepthType::Convex
            });
        }
    }

    /// Applies a new size and rebuilds.
    pub fn layout(&mut self, size: Size) -> EffectChanges {
        self.effect.set_bounds(size);
        self.effect.rebuild()
    }
}

/// A grouped-list row background.
///
/// Rows set a [`CornerGroup`](crate::style::CornerGroup) matching their
/// position in the group; highlight and selection both map onto the fill
/// tint.
#[derive(Debug, Default)]
pub struct Row {
    effect: Effect,
    highlighted: bool,
    selected: bool,
}

impl Row {
    /// Creates a row with the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying compositor, for style access.
    #[must_use]
    pub fn effect(&self) -> &Effect {
        &self.effect
    }

    /// The underlying compositor, for style mutation.
    pub fn effect_mut(&mut self) -> &mut Effect {
        &mut self.effect
    }

    /// Sets the transient touch highlight.
    pub fn set_highlighted(&mut self, highlighted: bool) {
        if self.highlighted != highlighted {
            self.highlighted = highlighted;
            self.apply_tint();
        }
    }

    /// Sets the persistent selection.
    pub fn set_selected(&mut self, selected: bool) {
        if self.selected != selected {
            self.selected = selected;
            self.apply_tint();
        }
    }

    /// Whether the host should clip the row's content to its bounds.
    ///
    /// True only while concave; a convex row's shadow must escape the frame,
    /// so clipping would truncate it.
    #[must_use]
    pub fn clips_content(&self) -> bool {
        self.effect.depth_type() == DepthType::Concave
    }

    /// Applies a new size and rebuilds.
    pub fn layout(&mut self, size: Size) -> EffectChanges {
        self.effect.set_bounds(size);
        self.effect.rebuild()
    }

    fn apply_tint(&mut self) {
        self.effect.set_selected(self.highlighted || self.selected);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::CornerGroup;

    #[test]
    fn layout_rebuilds_then_short_circuits() {
        let mut panel = Panel::new();
        assert!(panel.layout(Size::new(80.0, 80.0)).rebuilt);
        assert!(!panel.layout(Size::new(80.0, 80.0)).rebuilt);
        assert!(panel.layout(Size::new(80.0, 120.0)).rebuilt);
    }

    #[test]
    fn press_is_a_fill_recolor_not_a_rebuild() {
        let mut button = Button::new();
        let _ = button.layout(Size::new(100.0, 40.0));
        let before = button.effect().stack().fill.color;

        button.set_pressed(true);
        assert_ne!(button.effect().stack().fill.color, before);
        let changes = button.effect_mut().rebuild();
        assert!(!changes.rebuilt);
        assert!(changes.fill_recolored);

        button.set_pressed(false);
        assert_eq!(button.effect().stack().fill.color, before);
    }

    #[test]
    fn toggle_flips_depth_type() {
        let mut button = Button::new();
        let _ = button.layout(Size::new(100.0, 40.0));

        button.set_toggled(true);
        let changes = button.effect_mut().rebuild();
        assert_eq!(changes.depth_type_changed, Some(DepthType::Concave));

        button.set_toggled(false);
        let changes = button.effect_mut().rebuild();
        assert_eq!(changes.depth_type_changed, Some(DepthType::Convex));
    }

    #[test]
    fn row_clips_content_only_while_concave() {
        let mut row = Row::new();
        row.effect_mut().set_corner_group(CornerGroup::MiddleRow);
        let _ = row.layout(Size::new(320.0, 44.0));
        assert!(!row.clips_content());

        row.effect_mut().set_depth_type(DepthType::Concave);
        let _ = row.effect_mut().rebuild();
        assert!(row.clips_content());
    }

    #[test]
    fn highlight_and_selection_share_the_tint() {
        let mut row = Row::new();
        let _ = row.layout(Size::new(320.0, 44.0));
        let base = row.effect().stack().fill.color;

        row.set_highlighted(true);
        let tinted = row.effect().stack().fill.color;
        assert_ne!(tinted, base);

        row.set_selected(true);
        row.set_highlighted(false);
        // Still selected, so the tint stays.
        assert_eq!(row.effect().stack().fill.color, tinted);

        row.set_selected(false);
        assert_eq!(row.effect().stack().fill.color, base);
    }
}
