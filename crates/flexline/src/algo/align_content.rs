//! Cross-axis distribution of flex lines (`align-content`), line
//! stretching, and the `wrap-reverse` line ordering.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#align-content-property>

use super::Line;
use crate::style::AlignContent;
use log::trace;

/// Start offset and between-line spacing. Negative free space falls back
/// like the main axis: `space-between` packs to the start, the other
/// distributed modes center.
fn content_params(align: AlignContent, free: f32, count: usize) -> (f32, f32) {
    match (align, count) {
        (AlignContent::FlexEnd, _) => (free, 0.0),
        (AlignContent::Center, _) => (free * 0.5, 0.0),
        (AlignContent::SpaceBetween, count) if count > 1 && free > 0.0 => {
            (0.0, free / (count as f32 - 1.0))
        }
        (AlignContent::SpaceAround, count) if count > 0 => {
            if free > 0.0 {
                (free / (count as f32 * 2.0), free / count as f32)
            } else {
                (free * 0.5, 0.0)
            }
        }
        (AlignContent::SpaceEvenly, count) if count > 0 => {
            if free > 0.0 {
                let slots = count as f32 + 1.0;
                (free / slots, free / slots)
            } else {
                (free * 0.5, 0.0)
            }
        }
        // FlexStart, Stretch (whose free space was already absorbed), and
        // degenerate counts.
        _ => (0.0, 0.0),
    }
}

/// Assign each line its cross offset (and, for `stretch`, its share of the
/// free space). `align` must already be resolved, including the
/// `wrap-reverse` start/end swap; `wrap_reverse` additionally reverses the
/// stacking order so lines flow from the far edge.
pub(crate) fn place_lines(
    line_boxes: &mut [Line],
    align: AlignContent,
    wrap_reverse: bool,
    content_cross: f32,
    cross_gap: f32,
) {
    if line_boxes.is_empty() {
        return;
    }
    let count = line_boxes.len();
    let gaps_total = cross_gap * (count - 1) as f32;
    let total: f32 = line_boxes.iter().map(|line| line.cross_size).sum::<f32>() + gaps_total;
    let mut free = content_cross - total;
    if align == AlignContent::Stretch && free > 0.0 {
        let add_each = free / count as f32;
        for line in line_boxes.iter_mut() {
            line.cross_size += add_each;
        }
        free = 0.0;
    }
    let (start_offset, between) = content_params(align, free, count);
    trace!(
        target: "flexline::algo",
        "placing {count} lines: free={free:.2} start={start_offset:.2} between={between:.2}"
    );

    let mut cursor = start_offset;
    let mut place = |line: &mut Line| {
        line.cross_offset = cursor;
        cursor += line.cross_size + cross_gap + between;
    };
    if wrap_reverse {
        line_boxes.iter_mut().rev().for_each(&mut place);
    } else {
        line_boxes.iter_mut().for_each(&mut place);
    }
}
