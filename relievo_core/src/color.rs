// Copyright 2026 the Relievo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hue/saturation/brightness color scaling.
//!
//! The effect derives its two tint colors by scaling a base color in HSB
//! space: the dark-side shadow is the background at `(saturation × 0.1,
//! brightness × 0)` — a near-black desaturated tone — and the pressed fill
//! tint is the element color at `(saturation × 1, brightness × 0.9)`.
//!
//! [`transformed`] is a pure function. Scaled saturation and brightness are
//! clamped to `[0, 1]`, so arbitrary factors can never produce out-of-range
//! components. Alpha passes through untouched.

use peniko::Color;

/// Scales a color's saturation and brightness by the given factors.
///
/// Converts to HSB, multiplies, clamps each scaled component to `[0, 1]`,
/// and converts back. The hue and alpha are preserved.
#[must_use]
pub fn transformed(color: Color, saturation: f32, brightness: f32) -> Color {
    let [r, g, b, a] = color.components;
    let (h, s, v) = rgb_to_hsb(r, g, b);
    let s = (s * saturation).clamp(0.0, 1.0);
    let v = (v * brightness).clamp(0.0, 1.0);
    let (r, g, b) = hsb_to_rgb(h, s, v);
    Color::new([r, g, b, a])
}

/// Converts sRGB components to hue/saturation/brightness.
///
/// Hue is normalized to `[0, 1)`; an achromatic input yields hue 0.
fn rgb_to_hsb(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let v = max;
    let s = if max <= 0.0 { 0.0 } else { delta / max };
    if delta <= 0.0 {
        return (0.0, s, v);
    }

    let mut h = if max == r {
        (g - b) / delta
    } else if max == g {
        2.0 + (b - r) / delta
    } else {
        4.0 + (r - g) / delta
    };
    h /= 6.0;
    if h < 0.0 {
        h += 1.0;
    }
    (h, s, v)
}

/// Converts hue/saturation/brightness back to sRGB components.
fn hsb_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    if s <= 0.0 {
        return (v, v, v);
    }
    // Hue 1.0 wraps to the start of the red sector.
    let h = if h >= 1.0 { 0.0 } else { h } * 6.0;
    #[expect(clippy::cast_possible_truncation, reason = "h is in [0, 6)")]
    let sector = h as u32;
    let f = h - sector as f32;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
