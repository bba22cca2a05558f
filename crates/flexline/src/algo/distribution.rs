//! Flexible length resolution and main-axis positioning.
//!
//! Free space distribution is iterative: each pass distributes the current
//! free space over the unfrozen items by grow factor (or by shrink factor
//! scaled by the flex base size, so larger items give up proportionally
//! more), clamps every adjusted item against its min/max, and freezes the
//! items the clamp changed. Convergence is guaranteed because a pass either
//! terminates or strictly shrinks the unfrozen set.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>

use super::FlexItem;
use crate::sizing::apply_constraints;
use crate::style::JustifyContent;
use log::trace;

const EPSILON: f32 = 1e-7;

/// Resolve the main sizes of one line's items into `target_main`.
pub(crate) fn resolve_flexible_lengths(items: &mut [FlexItem], main_avail: f32, main_gap: f32) {
    let gaps_total = main_gap * items.len().saturating_sub(1) as f32;
    for _pass in 0..items.len() {
        let used: f32 = items
            .iter()
            .map(|item| item.target_main + item.main_margin_start + item.main_margin_end)
            .sum::<f32>()
            + gaps_total;
        let free = main_avail - used;
        if free.abs() < EPSILON {
            break;
        }
        let growing = free > 0.0;
        let total_factor: f32 = items
            .iter()
            .filter(|item| !item.frozen)
            .map(|item| {
                if growing {
                    item.grow
                } else {
                    item.shrink * item.base
                }
            })
            .sum();
        if total_factor <= 0.0 {
            break;
        }
        let mut changed = false;
        for item in items.iter_mut().filter(|item| !item.frozen) {
            let factor = if growing {
                item.grow
            } else {
                item.shrink * item.base
            };
            if factor <= 0.0 {
                continue;
            }
            let next = item.target_main + factor / total_factor * free;
            let clamped = apply_constraints(next, item.min_main, item.max_main).max(0.0);
            if (clamped - next).abs() > EPSILON {
                item.frozen = true;
            }
            if (clamped - item.target_main).abs() > EPSILON {
                changed = true;
            }
            item.target_main = clamped;
        }
        if !changed {
            break;
        }
    }
    trace!(
        target: "flexline::algo",
        "resolved line: {:?}",
        items.iter().map(|item| item.target_main).collect::<Vec<_>>()
    );
}

/// Start offset and between-item spacing for a justify mode. Negative free
/// space falls back per Box Alignment: `space-between` packs to the start,
/// the other distributed modes center.
fn justify_params(justify: JustifyContent, free: f32, count: usize) -> (f32, f32) {
    match (justify, count) {
        (JustifyContent::FlexEnd, _) => (free, 0.0),
        (JustifyContent::Center, _) => (free * 0.5, 0.0),
        (JustifyContent::SpaceBetween, count) if count > 1 && free > 0.0 => {
            (0.0, free / (count as f32 - 1.0))
        }
        (JustifyContent::SpaceAround, count) if count > 0 => {
            if free > 0.0 {
                (free / (count as f32 * 2.0), free / count as f32)
            } else {
                (free * 0.5, 0.0)
            }
        }
        (JustifyContent::SpaceEvenly, count) if count > 0 => {
            if free > 0.0 {
                let slots = count as f32 + 1.0;
                (free / slots, free / slots)
            } else {
                (free * 0.5, 0.0)
            }
        }
        // FlexStart, degenerate counts, and the L3 keywords that were
        // already resolved away.
        _ => (0.0, 0.0),
    }
}

/// Position one line's items along the main axis into `main_pos`
/// (content-box coordinates). Auto main margins soak up positive free
/// space and disable justify distribution; a reversed axis mirrors the
/// final coordinates around the content box.
pub(crate) fn position_main_axis(
    items: &mut [FlexItem],
    justify: JustifyContent,
    main_avail: f32,
    main_gap: f32,
    main_reversed: bool,
) {
    if items.is_empty() {
        return;
    }
    let gaps_total = main_gap * (items.len() - 1) as f32;
    let inner: f32 = items
        .iter()
        .map(|item| item.target_main + item.main_margin_start + item.main_margin_end)
        .sum();
    let free = main_avail - inner - gaps_total;
    let auto_slots: usize = items
        .iter()
        .map(|item| usize::from(item.main_start_auto) + usize::from(item.main_end_auto))
        .sum();
    let auto_each = if auto_slots > 0 {
        free.max(0.0) / auto_slots as f32
    } else {
        0.0
    };
    let (start_offset, spacing) = if auto_slots > 0 {
        (0.0, 0.0)
    } else {
        justify_params(justify, free, items.len())
    };

    let mut cursor = start_offset;
    for (index, item) in items.iter_mut().enumerate() {
        if index > 0 {
            cursor += main_gap + spacing;
        }
        let margin_start = item.main_margin_start + if item.main_start_auto { auto_each } else { 0.0 };
        let margin_end = item.main_margin_end + if item.main_end_auto { auto_each } else { 0.0 };
        item.main_pos = cursor + margin_start;
        cursor = item.main_pos + item.target_main + margin_end;
    }
    if main_reversed {
        for item in items.iter_mut() {
            item.main_pos = main_avail - item.main_pos - item.target_main;
        }
    }
}
