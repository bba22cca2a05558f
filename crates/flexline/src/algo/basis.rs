//! Flex base size and hypothetical sizing of one item.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-basis-property>
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#min-size-auto>

use super::FlexItem;
use crate::axis::{compute_box_sides, FlexAxes};
use crate::node::NodeId;
use crate::sizing::{apply_constraints, transfer_aspect};
use crate::style::{AlignItems, AlignSafety, AlignSelf};
use crate::tree::LayoutTree;
use flexline_values::Value;

/// Build the per-item working state: flex base size, hypothetical main and
/// cross sizes, margins, constraints, and effective alignment.
///
/// The flex base resolution order is: explicit `flex-basis` (points or a
/// percentage of the main available size), the `content` keyword, the
/// main-axis size property, and finally the measured content size.
pub(crate) fn build_flex_item(
    tree: &mut LayoutTree,
    child: NodeId,
    axes: FlexAxes,
    content_main_cross: (f32, f32),
    content_physical: (f32, f32),
    container_align: AlignItems,
    container_safety: AlignSafety,
) -> FlexItem {
    let (content_main, content_cross) = content_main_cross;
    let (content_width, content_height) = content_physical;
    let style = *tree.get_style(child);
    let sides = compute_box_sides(&style, Some(content_width));
    let main_avail = Some(content_main);
    let cross_avail = Some(content_cross);

    let measured = tree.measure_intrinsic(child, Some(content_width), Some(content_height));
    let (measured_main, measured_cross) = axes.from_physical(measured.width, measured.height);

    let main_prop = axes.main_size(&style).resolve(main_avail);
    let cross_prop = axes.cross_size(&style).resolve(cross_avail);
    // A single definite size transfers through the aspect ratio in either
    // direction, so a definite cross size can supply the flex base.
    let (width_prop, height_prop) = if axes.main_is_row {
        (main_prop, cross_prop)
    } else {
        (cross_prop, main_prop)
    };
    let (width_def, height_def) = transfer_aspect(width_prop, height_prop, style.aspect_ratio);
    let (main_def, cross_def) = if axes.main_is_row {
        (width_def, height_def)
    } else {
        (height_def, width_def)
    };

    let basis = style.flex_basis;
    let base = basis.resolve(main_avail).unwrap_or_else(|| {
        if basis == Value::Content {
            measured_main
        } else {
            main_def.unwrap_or(measured_main)
        }
    });

    // The automatic minimum: a `min-size: auto` flex item will not shrink
    // below its content size (capped by a definite main size).
    let min_main_value = axes.main_min(&style);
    let min_main = min_main_value.resolve(main_avail).unwrap_or_else(|| {
        if min_main_value == Value::Auto {
            measured_main.min(main_def.unwrap_or(f32::INFINITY))
        } else {
            0.0
        }
    });
    let max_main = axes.main_max(&style).resolve(main_avail).unwrap_or(f32::INFINITY);

    let cross_is_auto = cross_prop.is_none();
    let hypothetical_cross = cross_def.unwrap_or_else(|| match style.aspect_ratio {
        Some(ratio) => {
            if axes.main_is_row {
                base / ratio
            } else {
                base * ratio
            }
        }
        None => measured_cross,
    });
    let min_cross = axes.cross_min(&style).resolve(cross_avail).unwrap_or(0.0);
    let max_cross = axes
        .cross_max(&style)
        .resolve(cross_avail)
        .unwrap_or(f32::INFINITY);

    let mut align = style.align_self.effective(container_align);
    // Baselines are only meaningful when the cross axis is vertical; in
    // column-family containers a baseline request degrades to flex-start.
    if align == AlignItems::Baseline && !axes.main_is_row {
        align = AlignItems::FlexStart;
    }
    let safety = if style.align_self == AlignSelf::Auto {
        container_safety
    } else {
        style.align_self_safety
    };

    let hypothetical_main = apply_constraints(base, min_main, max_main).max(0.0);

    FlexItem {
        id: child,
        base,
        target_main: hypothetical_main,
        frozen: false,
        grow: style.flex_grow.max(0.0),
        shrink: style.flex_shrink.max(0.0),
        min_main,
        max_main,
        main_margin_start: sides.main_start_margin(axes),
        main_margin_end: sides.main_end_margin(axes),
        main_start_auto: sides.main_start_margin_auto(axes),
        main_end_auto: sides.main_end_margin_auto(axes),
        cross_margin_start: sides.cross_start_margin(axes),
        cross_margin_end: sides.cross_end_margin(axes),
        cross_start_auto: sides.cross_start_margin_auto(axes),
        cross_end_auto: sides.cross_end_margin_auto(axes),
        hypothetical_cross,
        cross_is_auto,
        min_cross,
        max_cross,
        align,
        safety,
        aspect_ratio: style.aspect_ratio,
        cross_end_frame: if axes.main_is_row {
            sides.padding_bottom + sides.border_bottom
        } else {
            sides.padding_right + sides.border_right
        },
        baseline_above: None,
        main_pos: 0.0,
        cross_pos: 0.0,
        cross_size: hypothetical_cross,
    }
}
