//! Thick line rasterization helpers
//!
//! A thick line is drawn as parallel one-pixel lines offset along the
//! segment's normal. Segments that collapse to (almost) a single pixel turn
//! into a small square of points instead, since they have no normal.

use crate::constants::scene::{MAX_LINE_THICKNESS, MIN_STROKE_LENGTH};
use crate::projection::ScreenPoint;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stroke {
    Lines(Vec<(ScreenPoint, ScreenPoint)>),
    Dots(Vec<ScreenPoint>),
}

impl Stroke {
    pub fn primitive_count(&self) -> usize {
        match self {
            Stroke::Lines(lines) => lines.len(),
            Stroke::Dots(dots) => dots.len(),
        }
    }
}

/// Expand a segment into one-pixel primitives. Thickness is capped at
/// `MAX_LINE_THICKNESS`; offsets saturate at the `i32` range.
pub fn expand(a: ScreenPoint, b: ScreenPoint, thickness: u32) -> Stroke {
    if thickness <= 1 {
        return Stroke::Lines(vec![(a, b)]);
    }

    let half = (thickness.min(MAX_LINE_THICKNESS) / 2) as i32;
    let dx = (i64::from(b.x) - i64::from(a.x)) as f32;
    let dy = (i64::from(b.y) - i64::from(a.y)) as f32;
    let len = (dx * dx + dy * dy).sqrt();

    if len < MIN_STROKE_LENGTH {
        let side = 2 * half as usize + 1;
        let mut dots = Vec::with_capacity(side.checked_mul(side).unwrap_or(0));
        for oy in -half..=half {
            for ox in -half..=half {
                dots.push(offset(a, ox, oy));
            }
        }
        return Stroke::Dots(dots);
    }

    let nx = -dy / len;
    let ny = dx / len;
    let lines = (-half..=half)
        .map(|i| {
            let ox = (nx * i as f32).round() as i32;
            let oy = (ny * i as f32).round() as i32;
            (offset(a, ox, oy), offset(b, ox, oy))
        })
        .collect();
    Stroke::Lines(lines)
}

fn offset(p: ScreenPoint, ox: i32, oy: i32) -> ScreenPoint {
    ScreenPoint::new(p.x.saturating_add(ox), p.y.saturating_add(oy))
}
