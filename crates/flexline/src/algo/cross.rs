//! Cross-axis sizing and alignment of items within a line, including
//! baseline alignment.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#cross-alignment>

use super::{FlexItem, Line};
use crate::axis::FlexAxes;
use crate::sizing::apply_constraints;
use crate::style::{AlignItems, AlignSafety};
use crate::tree::LayoutTree;
use log::trace;
use std::ops::Range;

/// Compute a line's cross size and baseline reference.
///
/// Baseline items group around the line's max baseline distance `B`; the
/// line must fit `B` plus the deepest below-baseline extent. Non-baseline
/// items contribute their clamped outer hypothetical cross sizes.
pub(crate) fn line_metrics(
    tree: &mut LayoutTree,
    items: &mut [FlexItem],
    range: Range<usize>,
    axes: FlexAxes,
) -> Line {
    let mut cross_max = 0.0f32;
    let mut above_max = 0.0f32;
    let mut below_max = 0.0f32;
    for item in items.iter_mut() {
        let clamped = apply_constraints(item.hypothetical_cross, item.min_cross, item.max_cross)
            .max(0.0);
        let outer = clamped + item.cross_margin_start + item.cross_margin_end;
        // Auto cross margins override alignment, so such an item does not
        // join the baseline group.
        let participates =
            item.align == AlignItems::Baseline && !item.cross_start_auto && !item.cross_end_auto;
        if participates {
            let (width, height) = axes.to_physical(item.target_main, clamped);
            let above = item.cross_margin_start + item_baseline_from_top(tree, item, width, height);
            item.baseline_above = Some(above);
            above_max = above_max.max(above);
            below_max = below_max.max(outer - above);
        } else {
            cross_max = cross_max.max(outer);
        }
    }
    Line {
        range,
        cross_size: cross_max.max(above_max + below_max),
        cross_offset: 0.0,
        baseline: above_max,
    }
}

/// An item's baseline measured from its border-box top: the baseline
/// callback when installed, else the bottom of the content box.
fn item_baseline_from_top(tree: &LayoutTree, item: &FlexItem, width: f32, height: f32) -> f32 {
    match &tree.node(item.id).baseline_fn {
        Some(func) => func(item.id, width, height).clamp(0.0, height.max(0.0)),
        None => (height - item.cross_end_frame).max(0.0),
    }
}

/// Place one line's items on the cross axis: resolve the final cross size
/// (stretch, aspect-ratio re-transfer, min/max) and the cross position
/// (auto margins first, then the alignment keyword, then `safe` clamping).
pub(crate) fn place_items_on_line(items: &mut [FlexItem], line: &Line, axes: FlexAxes) {
    let line_start = line.cross_offset;
    let line_size = line.cross_size;
    for item in items.iter_mut() {
        let margins = item.cross_margin_start + item.cross_margin_end;
        let stretching = item.align == AlignItems::Stretch
            && item.cross_is_auto
            && !item.cross_start_auto
            && !item.cross_end_auto;
        let mut cross = if stretching {
            (line_size - margins).max(0.0)
        } else {
            item.hypothetical_cross
        };
        // The now-definite main size re-transfers through the aspect ratio
        // and takes precedence over stretching.
        if item.cross_is_auto
            && let Some(ratio) = item.aspect_ratio
        {
            cross = if axes.main_is_row {
                item.target_main / ratio
            } else {
                item.target_main * ratio
            };
        }
        let cross = apply_constraints(cross, item.min_cross, item.max_cross).max(0.0);

        let free = line_size - cross - margins;
        let mut position = if item.cross_start_auto || item.cross_end_auto {
            match (item.cross_start_auto, item.cross_end_auto) {
                // Both auto: centre between the margins.
                (true, true) => line_start + free.max(0.0) * 0.5,
                // A single auto margin consumes all remaining space.
                (true, false) => line_start + free.max(0.0),
                _ => line_start + item.cross_margin_start,
            }
        } else {
            match item.align {
                AlignItems::FlexEnd => line_start + line_size - cross - item.cross_margin_end,
                AlignItems::Center => line_start + item.cross_margin_start + free * 0.5,
                AlignItems::Baseline => match item.baseline_above {
                    Some(above) => line_start + line.baseline - above + item.cross_margin_start,
                    None => line_start + item.cross_margin_start,
                },
                // FlexStart, Stretch; resolved L3 keywords cannot reach here.
                _ => line_start + item.cross_margin_start,
            }
        };
        if item.safety == AlignSafety::Safe {
            let limit = line_start + (line_size - cross).max(0.0);
            position = position.clamp(line_start, limit.max(line_start));
        }
        item.cross_pos = position;
        item.cross_size = cross;
        trace!(
            target: "flexline::algo",
            "placed {:?} cross at {position:.2} size {cross:.2}",
            item.id
        );
    }
}
