//! The flex layout pass: container sizing, line formation, flexible length
//! resolution, positioning on both axes, absolute positioning, and relative
//! offsets.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#layout-algorithm>

pub(crate) mod absolute;
pub(crate) mod align_content;
pub(crate) mod basis;
pub(crate) mod cross;
pub(crate) mod distribution;
pub(crate) mod lines;

use crate::axis::{compute_box_sides, resolve_axes};
use crate::node::NodeId;
use crate::sizing::{apply_optional_constraints, transfer_aspect};
use crate::style::{AlignItems, AlignSafety, Display, FlexWrap, PositionType, Style};
use crate::tree::LayoutTree;
use flexline_values::LayoutRect;
use log::debug;
use std::ops::Range;

/// Per-item working state for one container's layout pass. All main/cross
/// sizes are border-box; positions are relative to the container's content
/// box before the physical conversion.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FlexItem {
    pub id: NodeId,
    /// Flex base size: the main size before growing/shrinking.
    pub base: f32,
    /// Current main size; starts at the hypothetical (clamped) size and is
    /// updated by the flexible-length resolver.
    pub target_main: f32,
    pub frozen: bool,
    pub grow: f32,
    pub shrink: f32,
    pub min_main: f32,
    pub max_main: f32,
    pub main_margin_start: f32,
    pub main_margin_end: f32,
    pub main_start_auto: bool,
    pub main_end_auto: bool,
    pub cross_margin_start: f32,
    pub cross_margin_end: f32,
    pub cross_start_auto: bool,
    pub cross_end_auto: bool,
    pub hypothetical_cross: f32,
    /// Whether the cross-axis size property is auto/undefined (stretchable).
    pub cross_is_auto: bool,
    pub min_cross: f32,
    pub max_cross: f32,
    /// Effective alignment, L3 keywords already resolved.
    pub align: AlignItems,
    pub safety: AlignSafety,
    pub aspect_ratio: Option<f32>,
    /// Padding+border at the cross-end edge; the default baseline sits at
    /// the bottom of the content box.
    pub cross_end_frame: f32,
    /// Baseline distance from the margin-box top, for baseline items.
    pub baseline_above: Option<f32>,
    pub main_pos: f32,
    pub cross_pos: f32,
    pub cross_size: f32,
}

/// One flex line: a range of items plus its resolved cross geometry.
#[derive(Debug, Clone)]
pub(crate) struct Line {
    pub range: Range<usize>,
    pub cross_size: f32,
    pub cross_offset: f32,
    /// Max baseline distance from the line's cross start (margin boxes).
    pub baseline: f32,
}

/// Entry point from `calculate_layout`: size the root against the parent
/// constraints, then lay out the whole subtree.
pub(crate) fn compute_root_layout(
    tree: &mut LayoutTree,
    root: NodeId,
    avail_width: Option<f32>,
    avail_height: Option<f32>,
) {
    let style = *tree.get_style(root);
    if style.display == Display::None {
        zero_subtree(tree, root);
        return;
    }
    debug!(
        target: "flexline::algo",
        "layout pass: root={root:?} avail={avail_width:?}x{avail_height:?}"
    );

    let width_prop = style.width.resolve(avail_width);
    let height_prop = style.height.resolve(avail_height);
    let (width_def, height_def) = transfer_aspect(width_prop, height_prop, style.aspect_ratio);
    let (width, height) = match (width_def, height_def) {
        (Some(width), Some(height)) => (width, height),
        _ => {
            let measured = tree.measure_intrinsic(root, avail_width, avail_height);
            (
                width_def.unwrap_or(measured.width),
                height_def.unwrap_or(measured.height),
            )
        }
    };
    let width = apply_optional_constraints(
        width,
        style.min_width.resolve(avail_width),
        style.max_width.resolve(avail_width),
    )
    .max(0.0);
    let height = apply_optional_constraints(
        height,
        style.min_height.resolve(avail_height),
        style.max_height.resolve(avail_height),
    )
    .max(0.0);

    layout_node(tree, root, width, height, avail_width);
    let rect = &mut tree.node_mut(root).layout.rect;
    rect.x = 0.0;
    rect.y = 0.0;
}

/// Lay out one node whose border-box size is already resolved: form lines,
/// flex, align, recurse, then handle out-of-flow children.
pub(crate) fn layout_node(
    tree: &mut LayoutTree,
    node: NodeId,
    width: f32,
    height: f32,
    percent_basis: Option<f32>,
) {
    tree.count_node_laid_out();
    let style = *tree.get_style(node);
    let axes = resolve_axes(style.flex_direction, style.writing_mode, style.direction);
    let sides = compute_box_sides(&style, percent_basis);
    let width = width.max(0.0);
    let height = height.max(0.0);
    {
        let node_ref = tree.node_mut(node);
        node_ref.layout.rect.width = width;
        node_ref.layout.rect.height = height;
        node_ref.layout.direction = style.direction;
    }

    let content_width = (width - sides.horizontal_padding_border()).max(0.0);
    let content_height = (height - sides.vertical_padding_border()).max(0.0);
    let (content_main, content_cross) = axes.from_physical(content_width, content_height);
    let (content_left, content_top) = sides.content_offset();

    // Partition children: hidden subtrees zero out, absolute children lay
    // out after normal flow.
    let children = tree.node(node).children.clone();
    let mut flow: Vec<NodeId> = Vec::with_capacity(children.len());
    let mut absolute_children: Vec<NodeId> = Vec::new();
    for child in children {
        let child_style = tree.get_style(child);
        if child_style.display == Display::None {
            zero_subtree(tree, child);
        } else if child_style.position_type == PositionType::Absolute {
            absolute_children.push(child);
        } else {
            flow.push(child);
        }
    }

    // Stable sort on `order`: ties keep document order.
    let mut ordered: Vec<(i32, usize, NodeId)> = flow
        .iter()
        .enumerate()
        .map(|(index, &child)| (tree.get_style(child).order, index, child))
        .collect();
    ordered.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));

    let mut items: Vec<FlexItem> = ordered
        .into_iter()
        .map(|(_, _, child)| {
            basis::build_flex_item(
                tree,
                child,
                axes,
                (content_main, content_cross),
                (content_width, content_height),
                style.align_items,
                style.align_items_safety,
            )
        })
        .collect();

    let main_gap = axes.main_gap(&style).numeric(Some(content_width)).max(0.0);
    let cross_gap = axes.cross_gap(&style).numeric(Some(content_width)).max(0.0);

    let ranges = lines::break_into_lines(&items, style.flex_wrap, content_main, main_gap);
    debug!(
        target: "flexline::algo",
        "{node:?}: {} items over {} lines in {content_main:.1}x{content_cross:.1}",
        items.len(),
        ranges.len()
    );

    let justify = style.justify_content.resolved(axes.main_is_row, axes.rtl);
    for range in &ranges {
        let line_items = &mut items[range.clone()];
        distribution::resolve_flexible_lengths(line_items, content_main, main_gap);
        distribution::position_main_axis(
            line_items,
            justify,
            content_main,
            main_gap,
            axes.main_reversed,
        );
    }

    let mut line_boxes: Vec<Line> = ranges
        .iter()
        .map(|range| cross::line_metrics(tree, &mut items[range.clone()], range.clone(), axes))
        .collect();
    // A single non-wrapping line fills the container's definite cross size
    // (this is what makes `align-items: stretch` fill the container).
    if style.flex_wrap == FlexWrap::NoWrap
        && let Some(line) = line_boxes.first_mut()
    {
        line.cross_size = content_cross;
    }

    let wrap_reverse = style.flex_wrap == FlexWrap::WrapReverse;
    let align_content = style.align_content.resolved(wrap_reverse);
    align_content::place_lines(
        &mut line_boxes,
        align_content,
        wrap_reverse,
        content_cross,
        cross_gap,
    );

    for line in &line_boxes {
        cross::place_items_on_line(&mut items[line.range.clone()], line, axes);
    }

    // Finalize: recurse into each item with its resolved size, then write
    // its physical position (with the relative offset fused in).
    for item in &items {
        let (item_width, item_height) = axes.to_physical(item.target_main, item.cross_size);
        layout_node(tree, item.id, item_width, item_height, Some(content_width));
        let (x_in_content, y_in_content) = axes.to_physical(item.main_pos, item.cross_pos);
        let (dx, dy) = relative_offset(tree.get_style(item.id), content_width, content_height);
        let rect = &mut tree.node_mut(item.id).layout.rect;
        rect.x = content_left + x_in_content + dx;
        rect.y = content_top + y_in_content + dy;
    }

    set_container_baselines(tree, node, &items, &line_boxes, height, &sides);

    for child in absolute_children {
        absolute::layout_absolute_child(
            tree,
            child,
            &style,
            (content_left, content_top),
            (content_width, content_height),
        );
    }

    tree.node_mut(node).is_dirty = false;
}

/// Post-positioning offset for `position: relative` items, resolved against
/// the parent's content box. The item keeps its reserved space in the line.
fn relative_offset(style: &Style, content_width: f32, content_height: f32) -> (f32, f32) {
    if style.position_type != PositionType::Relative {
        return (0.0, 0.0);
    }
    let horizontal = style
        .inset
        .left
        .resolve(Some(content_width))
        .or_else(|| {
            style
                .inset
                .right
                .resolve(Some(content_width))
                .map(|offset| -offset)
        })
        .unwrap_or(0.0);
    let vertical = style
        .inset
        .top
        .resolve(Some(content_height))
        .or_else(|| {
            style
                .inset
                .bottom
                .resolve(Some(content_height))
                .map(|offset| -offset)
        })
        .unwrap_or(0.0);
    (horizontal, vertical)
}

/// Record the container's first/last baseline: the first item of the first
/// line and the last item of the last line carry them; a node without
/// in-flow items uses the bottom of its own content box.
fn set_container_baselines(
    tree: &mut LayoutTree,
    node: NodeId,
    items: &[FlexItem],
    line_boxes: &[Line],
    height: f32,
    sides: &crate::axis::BoxSides,
) {
    let first = line_boxes
        .first()
        .and_then(|line| items.get(line.range.start));
    let last = line_boxes
        .last()
        .and_then(|line| items[line.range.clone()].last());
    let (first_baseline, last_baseline) = match (first, last) {
        (Some(first), Some(last)) => (
            child_baseline_position(tree, first),
            child_baseline_position(tree, last),
        ),
        _ => {
            let content_bottom = (height - sides.padding_bottom - sides.border_bottom).max(0.0);
            (content_bottom, content_bottom)
        }
    };
    let node_ref = tree.node_mut(node);
    node_ref.layout.first_baseline = Some(first_baseline);
    node_ref.layout.last_baseline = Some(last_baseline);
}

/// A laid-out child's baseline in its parent's coordinate space: its own
/// baseline callback, else the first baseline recorded by its layout.
fn child_baseline_position(tree: &LayoutTree, item: &FlexItem) -> f32 {
    let child = tree.node(item.id);
    let rect = child.layout.rect;
    let own = match &child.baseline_fn {
        Some(func) => func(item.id, rect.width, rect.height).clamp(0.0, rect.height.max(0.0)),
        None => child.layout.first_baseline.unwrap_or(rect.height),
    };
    rect.y + own
}

/// `display: none` removes the subtree from layout: zeroed geometry, and
/// the subtree counts as resolved.
pub(crate) fn zero_subtree(tree: &mut LayoutTree, node: NodeId) {
    let node_ref = tree.node_mut(node);
    node_ref.layout.rect = LayoutRect::zero();
    node_ref.layout.first_baseline = None;
    node_ref.layout.last_baseline = None;
    node_ref.is_dirty = false;
    let children = node_ref.children.clone();
    for child in children {
        zero_subtree(tree, child);
    }
}
