//! Partitioning of flex items into lines.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use super::FlexItem;
use crate::style::FlexWrap;
use std::ops::Range;

/// Split items into lines by greedily accumulating hypothetical outer main
/// sizes (plus the main gap) against the inner main size. An item larger
/// than the whole line becomes a line of its own. `nowrap` produces a
/// single line; `wrap-reverse` ordering is handled by the cross-axis line
/// placement, not here.
pub(crate) fn break_into_lines(
    items: &[FlexItem],
    wrap: FlexWrap,
    main_avail: f32,
    main_gap: f32,
) -> Vec<Range<usize>> {
    if items.is_empty() {
        return Vec::new();
    }
    if wrap == FlexWrap::NoWrap {
        return vec![0..items.len()];
    }
    let mut ranges: Vec<Range<usize>> = Vec::new();
    let mut start = 0usize;
    let mut cursor = 0.0f32;
    for (index, item) in items.iter().enumerate() {
        let outer = item.target_main + item.main_margin_start + item.main_margin_end;
        if index == start {
            // A line always takes at least one item, however large.
            cursor = outer;
            continue;
        }
        if cursor + main_gap + outer <= main_avail {
            cursor += main_gap + outer;
        } else {
            ranges.push(start..index);
            start = index;
            cursor = outer;
        }
    }
    ranges.push(start..items.len());
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeId;
    use crate::style::{AlignItems, AlignSafety};

    fn item(main: f32) -> FlexItem {
        FlexItem {
            id: NodeId(0),
            base: main,
            target_main: main,
            frozen: false,
            grow: 0.0,
            shrink: 1.0,
            min_main: 0.0,
            max_main: f32::INFINITY,
            main_margin_start: 0.0,
            main_margin_end: 0.0,
            main_start_auto: false,
            main_end_auto: false,
            cross_margin_start: 0.0,
            cross_margin_end: 0.0,
            cross_start_auto: false,
            cross_end_auto: false,
            hypothetical_cross: 10.0,
            cross_is_auto: false,
            min_cross: 0.0,
            max_cross: f32::INFINITY,
            align: AlignItems::FlexStart,
            safety: AlignSafety::Unsafe,
            aspect_ratio: None,
            cross_end_frame: 0.0,
            baseline_above: None,
            main_pos: 0.0,
            cross_pos: 0.0,
            cross_size: 10.0,
        }
    }

    #[test]
    /// # Panics
    /// Panics if greedy accumulation wraps at the wrong boundary.
    fn wraps_when_next_item_overflows() {
        let items = vec![item(80.0); 6];
        let ranges = break_into_lines(&items, FlexWrap::Wrap, 200.0, 0.0);
        assert_eq!(ranges, vec![0..2, 2..4, 4..6]);
    }

    #[test]
    /// # Panics
    /// Panics if the gap is not counted between items on a line.
    fn gap_counts_toward_line_capacity() {
        let items = vec![item(50.0), item(50.0), item(50.0)];
        // 50 + 10 + 50 = 110 fits; adding 10 + 50 exceeds 120.
        let ranges = break_into_lines(&items, FlexWrap::Wrap, 120.0, 10.0);
        assert_eq!(ranges, vec![0..2, 2..3]);
    }

    #[test]
    /// # Panics
    /// Panics if an oversize item does not get its own line.
    fn oversize_item_is_a_singleton_line() {
        let items = vec![item(300.0), item(40.0)];
        let ranges = break_into_lines(&items, FlexWrap::Wrap, 200.0, 0.0);
        assert_eq!(ranges, vec![0..1, 1..2]);
    }

    #[test]
    /// # Panics
    /// Panics if nowrap splits items across lines.
    fn nowrap_is_one_line() {
        let items = vec![item(300.0), item(300.0)];
        let ranges = break_into_lines(&items, FlexWrap::NoWrap, 200.0, 0.0);
        assert_eq!(ranges, vec![0..2]);
    }

    #[test]
    /// # Panics
    /// Panics if margins are excluded from the line accumulation.
    fn margins_count_toward_line_capacity() {
        let mut wide = item(80.0);
        wide.main_margin_start = 15.0;
        wide.main_margin_end = 15.0;
        let items = vec![wide, item(80.0)];
        // 110 + 80 > 180, so the second item wraps.
        let ranges = break_into_lines(&items, FlexWrap::Wrap, 180.0, 0.0);
        assert_eq!(ranges, vec![0..1, 1..2]);
    }
}
