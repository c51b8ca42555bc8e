//! Clamping primitives
//!
//! All functions here are pure and total. When a range is inverted
//! (`min > max`) the lower bound wins.

use crate::{ResizeLimits, Size, Vec2, Viewport};

/// Restrict `value` to `[min, max]`
///
/// Evaluated as `max(min(value, max), min)` in that order, so an inverted
/// range yields `min`.
#[inline]
pub fn clamp(min: f32, max: f32, value: f32) -> f32 {
    value.min(max).max(min)
}

/// Upper bound on one axis: the tighter of `bound` and the viewport edge
#[inline]
pub fn effective_max(bound: Option<f32>, edge: f32) -> f32 {
    match bound {
        Some(limit) => limit.min(edge),
        None => edge,
    }
}

/// Clamp a top-left corner so the whole rectangle stays inside `[min, max]`
///
/// The usable upper bound is `max - size` per axis. Callers pass a zero
/// size when the modal has no explicit dimensions, which constrains only
/// the corner.
pub fn clamp_drag(position: Vec2, size: Size, max: Vec2, min: Vec2) -> Vec2 {
    Vec2::new(
        clamp(min.x, max.x - size.width, position.x),
        clamp(min.y, max.y - size.height, position.y),
    )
}

/// Clamp a requested size using the default [`ResizeLimits`]
///
/// Each dimension lands in `[200, viewport edge - position]`.
pub fn clamp_resize(viewport: Viewport, position: Vec2, size: Size) -> Size {
    ResizeLimits::default().clamp(viewport, position, size)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// clamp output stays in range whenever the range is non-empty
        #[test]
        fn clamp_within_range(
            a in -10_000.0f32..10_000.0,
            b in -10_000.0f32..10_000.0,
            value in -100_000.0f32..100_000.0,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let result = clamp(lo, hi, value);
            prop_assert!(result >= lo && result <= hi, "clamp({}, {}, {}) = {}", lo, hi, value, result);
        }

        /// Inverted ranges always resolve to the lower bound
        #[test]
        fn clamp_inverted_is_min(
            min in -10_000.0f32..10_000.0,
            gap in 0.001f32..10_000.0,
            value in -100_000.0f32..100_000.0,
        ) {
            let max = min - gap;
            prop_assert_eq!(clamp(min, max, value), min);
        }

        /// The whole rectangle fits whenever it can
        #[test]
        fn clamp_drag_fits(
            x in -5_000.0f32..5_000.0,
            y in -5_000.0f32..5_000.0,
            width in 0.0f32..1_000.0,
            height in 0.0f32..1_000.0,
            min_x in 0.0f32..500.0,
            min_y in 0.0f32..500.0,
            max_x in 0.0f32..4_000.0,
            max_y in 0.0f32..4_000.0,
        ) {
            let pos = clamp_drag(
                Vec2::new(x, y),
                Size::new(width, height),
                Vec2::new(max_x, max_y),
                Vec2::new(min_x, min_y),
            );
            prop_assert!(pos.x >= min_x);
            prop_assert!(pos.y >= min_y);
            if min_x <= max_x - width {
                prop_assert!(pos.x <= max_x - width);
            }
            if min_y <= max_y - height {
                prop_assert!(pos.y <= max_y - height);
            }
        }

        /// Resized dimensions honour the minimum and the viewport edge
        #[test]
        fn clamp_resize_bounds(
            window_w in 0.0f32..4_000.0,
            window_h in 0.0f32..4_000.0,
            x in 0.0f32..2_000.0,
            y in 0.0f32..2_000.0,
            width in -1_000.0f32..5_000.0,
            height in -1_000.0f32..5_000.0,
        ) {
            let size = clamp_resize(
                Viewport::new(window_w, window_h),
                Vec2::new(x, y),
                Size::new(width, height),
            );
            prop_assert!(size.width >= 200.0);
            prop_assert!(size.height >= 200.0);
            if 200.0 <= window_w - x {
                prop_assert!(size.width <= window_w - x);
            }
            if 200.0 <= window_h - y {
                prop_assert!(size.height <= window_h - y);
            }
        }
    }
}
