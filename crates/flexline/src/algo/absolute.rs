//! Absolutely positioned children of a flex container.
//!
//! These are removed from flex layout entirely: they size from their own
//! properties and insets against the container's content box, fall back to
//! a static position derived from `justify-self`/`align-self` (or the
//! container's `justify-items`/`align-items`), and lay out recursively in
//! document order — `order` does not apply to them.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#abspos-items>

use super::layout_node;
use crate::axis::compute_box_sides;
use crate::node::NodeId;
use crate::sizing::{apply_optional_constraints, transfer_aspect};
use crate::style::{AlignItems, AlignSelf, SelfAlignment, Style};
use crate::tree::LayoutTree;
use log::trace;

/// Static-position fallback on one physical axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum StaticAlign {
    Start,
    Center,
    End,
}

/// Horizontal fallback: the child's `justify-self`, else the container's
/// `justify-items`. `stretch` behaves as `start` (no inset to stretch to).
fn horizontal_static_align(child: &Style, container: &Style) -> StaticAlign {
    let effective = match child.justify_self {
        SelfAlignment::Auto => container.justify_items,
        other => other,
    };
    match effective {
        SelfAlignment::Center => StaticAlign::Center,
        SelfAlignment::End => StaticAlign::End,
        SelfAlignment::Auto | SelfAlignment::Start | SelfAlignment::Stretch => StaticAlign::Start,
    }
}

/// Vertical fallback: the child's `align-self`, else the container's
/// `align-items`.
fn vertical_static_align(child: &Style, container: &Style) -> StaticAlign {
    match AlignSelf::effective(child.align_self, container.align_items) {
        AlignItems::Center => StaticAlign::Center,
        AlignItems::FlexEnd => StaticAlign::End,
        _ => StaticAlign::Start,
    }
}

/// Size and position one absolutely positioned child against the
/// container's content box, then lay out its subtree.
pub(crate) fn layout_absolute_child(
    tree: &mut LayoutTree,
    child: NodeId,
    container_style: &Style,
    content_origin: (f32, f32),
    content_size: (f32, f32),
) {
    let (content_left, content_top) = content_origin;
    let (content_width, content_height) = content_size;
    let style = *tree.get_style(child);
    let sides = compute_box_sides(&style, Some(content_width));

    let inset_left = style.inset.left.resolve(Some(content_width));
    let inset_right = style.inset.right.resolve(Some(content_width));
    let inset_top = style.inset.top.resolve(Some(content_height));
    let inset_bottom = style.inset.bottom.resolve(Some(content_height));

    // Size: the dimension property wins; otherwise opposing insets pin both
    // edges; otherwise the aspect ratio or the intrinsic size decides.
    let mut width_def = style.width.resolve(Some(content_width));
    let mut height_def = style.height.resolve(Some(content_height));
    if width_def.is_none()
        && let (Some(left), Some(right)) = (inset_left, inset_right)
    {
        width_def =
            Some((content_width - left - right - sides.margin_left - sides.margin_right).max(0.0));
    }
    if height_def.is_none()
        && let (Some(top), Some(bottom)) = (inset_top, inset_bottom)
    {
        height_def =
            Some((content_height - top - bottom - sides.margin_top - sides.margin_bottom).max(0.0));
    }
    let (width_def, height_def) = transfer_aspect(width_def, height_def, style.aspect_ratio);
    let (width, height) = match (width_def, height_def) {
        (Some(width), Some(height)) => (width, height),
        _ => {
            let measured = tree.measure_intrinsic(child, Some(content_width), Some(content_height));
            (
                width_def.unwrap_or(measured.width),
                height_def.unwrap_or(measured.height),
            )
        }
    };
    let width = apply_optional_constraints(
        width,
        style.min_width.resolve(Some(content_width)),
        style.max_width.resolve(Some(content_width)),
    )
    .max(0.0);
    let height = apply_optional_constraints(
        height,
        style.min_height.resolve(Some(content_height)),
        style.max_height.resolve(Some(content_height)),
    )
    .max(0.0);

    layout_node(tree, child, width, height, Some(content_width));

    let x = if let Some(left) = inset_left {
        content_left + left + sides.margin_left
    } else if let Some(right) = inset_right {
        content_left + content_width - right - width - sides.margin_right
    } else {
        match horizontal_static_align(&style, container_style) {
            StaticAlign::Start => content_left + sides.margin_left,
            StaticAlign::Center => content_left + (content_width - width) * 0.5,
            StaticAlign::End => content_left + content_width - width - sides.margin_right,
        }
    };
    let y = if let Some(top) = inset_top {
        content_top + top + sides.margin_top
    } else if let Some(bottom) = inset_bottom {
        content_top + content_height - bottom - height - sides.margin_bottom
    } else {
        match vertical_static_align(&style, container_style) {
            StaticAlign::Start => content_top + sides.margin_top,
            StaticAlign::Center => content_top + (content_height - height) * 0.5,
            StaticAlign::End => content_top + content_height - height - sides.margin_bottom,
        }
    };
    let rect = &mut tree.node_mut(child).layout.rect;
    rect.x = x;
    rect.y = y;
    trace!(
        target: "flexline::abspos",
        "absolute {child:?} at ({x:.2},{y:.2}) size {width:.2}x{height:.2}"
    );
}
