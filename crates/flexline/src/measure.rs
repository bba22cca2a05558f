//! Bottom-up intrinsic (content) sizing.
//!
//! Leaves report their content size through the measurement callback;
//! containers aggregate their children's sizes. The aggregate is an
//! intrinsic *hint* only: `nowrap` containers sum main sizes and max cross
//! sizes, wrapping containers do the opposite (a deliberate
//! over-approximation; the real line partition runs in the main pass).
//! Results are cached per node until the dirty engine invalidates them.

use crate::axis::{compute_box_sides, resolve_axes};
use crate::node::NodeId;
use crate::sizing::{apply_optional_constraints, sanitize_measure_output};
use crate::style::{Display, FlexWrap, PositionType};
use crate::tree::LayoutTree;
use log::trace;

/// Measured border-box size of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MeasuredSize {
    pub width: f32,
    pub height: f32,
}

impl MeasuredSize {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl LayoutTree {
    /// Measure the intrinsic border-box size of `node` against the given
    /// available space (`None` = indefinite). Content-based: the node's own
    /// width/height properties do not override the result, but min/max
    /// constraints apply and padding/border are added in the node's frame.
    pub(crate) fn measure_intrinsic(
        &mut self,
        node: NodeId,
        avail_width: Option<f32>,
        avail_height: Option<f32>,
    ) -> MeasuredSize {
        if let Some((width, height)) = self.node(node).intrinsic.get() {
            self.count_measure_cache(true);
            return MeasuredSize::new(width, height);
        }
        self.count_measure_cache(false);

        let style = *self.get_style(node);
        let sides = compute_box_sides(&style, avail_width);
        let horizontal_frame = sides.horizontal_padding_border();
        let vertical_frame = sides.vertical_padding_border();
        let inner_avail_width = avail_width.map(|width| (width - horizontal_frame).max(0.0));
        let inner_avail_height = avail_height.map(|height| (height - vertical_frame).max(0.0));

        let (content_width, content_height) = if self.node(node).measure.is_some() {
            let node_ref = self.node(node);
            let measure = node_ref
                .measure
                .as_ref()
                .expect("measure presence checked above");
            let (width, height) = measure(
                node,
                inner_avail_width.unwrap_or(f32::INFINITY),
                inner_avail_height.unwrap_or(f32::INFINITY),
            );
            (sanitize_measure_output(width), sanitize_measure_output(height))
        } else {
            self.aggregate_children(node, inner_avail_width, inner_avail_height)
        };

        let mut width = content_width + horizontal_frame;
        let mut height = content_height + vertical_frame;
        // An aspect ratio couples the two content-based dimensions: prefer
        // deriving the block dimension from the inline one.
        if let Some(ratio) = style.aspect_ratio
            && width > 0.0
            && content_height == 0.0
        {
            height = width / ratio;
        }
        width = apply_optional_constraints(
            width,
            style.min_width.resolve(avail_width),
            style.max_width.resolve(avail_width),
        )
        .max(0.0);
        height = apply_optional_constraints(
            height,
            style.min_height.resolve(avail_height),
            style.max_height.resolve(avail_height),
        )
        .max(0.0);

        self.node_mut(node).intrinsic.store(width, height);
        trace!(
            target: "flexline::measure",
            "measured {node:?}: {width:.3}x{height:.3}"
        );
        MeasuredSize::new(width, height)
    }

    /// Aggregate in-flow children into a content size for `node`. Each
    /// child contributes its definite size where set, otherwise its own
    /// intrinsic measurement, plus its margins.
    fn aggregate_children(
        &mut self,
        node: NodeId,
        inner_avail_width: Option<f32>,
        inner_avail_height: Option<f32>,
    ) -> (f32, f32) {
        let style = *self.get_style(node);
        let axes = resolve_axes(style.flex_direction, style.writing_mode, style.direction);
        let children = self.node(node).children.clone();
        if children.is_empty() {
            return (0.0, 0.0);
        }

        let single_line = style.flex_wrap == FlexWrap::NoWrap;
        let mut main_total = 0.0f32;
        let mut cross_total = 0.0f32;
        for child in children {
            let child_style = *self.get_style(child);
            if child_style.display == Display::None
                || child_style.position_type == PositionType::Absolute
            {
                continue;
            }
            let child_sides = compute_box_sides(&child_style, inner_avail_width);
            let (avail_main, avail_cross) =
                axes.from_physical_opt(inner_avail_width, inner_avail_height);
            let main_prop = axes.main_size(&child_style).resolve(avail_main);
            let cross_prop = axes.cross_size(&child_style).resolve(avail_cross);
            let (main, cross) = if let (Some(main), Some(cross)) = (main_prop, cross_prop) {
                (main, cross)
            } else {
                let measured = self.measure_intrinsic(child, inner_avail_width, inner_avail_height);
                let (measured_main, measured_cross) =
                    axes.from_physical(measured.width, measured.height);
                (
                    main_prop.unwrap_or(measured_main),
                    cross_prop.unwrap_or(measured_cross),
                )
            };
            let outer_main = main + child_sides.main_start_margin(axes) + child_sides.main_end_margin(axes);
            let outer_cross =
                cross + child_sides.cross_start_margin(axes) + child_sides.cross_end_margin(axes);
            if single_line {
                main_total += outer_main;
                cross_total = cross_total.max(outer_cross);
            } else {
                main_total = main_total.max(outer_main);
                cross_total += outer_cross;
            }
        }
        let (width, height) = axes.to_physical(main_total, cross_total);
        (width, height)
    }
}
