//! Axis resolution and physical box-side accessors.
//!
//! The flex algorithm runs in main/cross terms; this module maps those
//! logical tokens onto physical width/height, left/top and the four margin,
//! padding and border edges, given a container's `flex-direction`,
//! `writing-mode` and inline `direction`.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#box-model>

use crate::style::{Direction, FlexDirection, Style, WritingMode};
use flexline_values::Value;

/// Resolved axes of a flex container.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub(crate) struct FlexAxes {
    /// True when the main axis is horizontal (physical width/left).
    pub main_is_row: bool,
    /// True when items flow from the main-end edge: `row-reverse` in an LTR
    /// context, `row` in RTL, or `column-reverse`.
    pub main_reversed: bool,
    /// True when the resolved inline direction is right-to-left.
    pub rtl: bool,
}

/// Resolve the physical main axis from flex-direction, writing mode and
/// inline direction.
pub(crate) const fn resolve_axes(
    flex_direction: FlexDirection,
    writing_mode: WritingMode,
    direction: Direction,
) -> FlexAxes {
    let row_family = flex_direction.is_row_family();
    // Row tracks the inline axis; column tracks the block axis. In the
    // vertical writing modes the inline axis is vertical, flipping both.
    let main_is_row = row_family == writing_mode.inline_is_horizontal();
    let rtl = matches!(direction, Direction::Rtl);
    let reversed_direction = flex_direction.is_reverse();
    let main_reversed = if row_family && rtl {
        !reversed_direction
    } else {
        reversed_direction
    };
    FlexAxes {
        main_is_row,
        main_reversed,
        rtl,
    }
}

impl FlexAxes {
    /// The main-axis size property of a style (width for row axes).
    pub fn main_size(&self, style: &Style) -> Value {
        if self.main_is_row {
            style.width
        } else {
            style.height
        }
    }

    pub fn cross_size(&self, style: &Style) -> Value {
        if self.main_is_row {
            style.height
        } else {
            style.width
        }
    }

    pub fn main_min(&self, style: &Style) -> Value {
        if self.main_is_row {
            style.min_width
        } else {
            style.min_height
        }
    }

    pub fn main_max(&self, style: &Style) -> Value {
        if self.main_is_row {
            style.max_width
        } else {
            style.max_height
        }
    }

    pub fn cross_min(&self, style: &Style) -> Value {
        if self.main_is_row {
            style.min_height
        } else {
            style.min_width
        }
    }

    pub fn cross_max(&self, style: &Style) -> Value {
        if self.main_is_row {
            style.max_height
        } else {
            style.max_width
        }
    }

    /// The gap between adjacent items on the main axis (`column-gap`
    /// separates columns, so it is the main gap of row containers).
    pub fn main_gap(&self, style: &Style) -> Value {
        if self.main_is_row {
            style.column_gap
        } else {
            style.row_gap
        }
    }

    pub fn cross_gap(&self, style: &Style) -> Value {
        if self.main_is_row {
            style.row_gap
        } else {
            style.column_gap
        }
    }

    /// Map a main/cross pair onto physical (width, height).
    pub fn to_physical(&self, main: f32, cross: f32) -> (f32, f32) {
        if self.main_is_row {
            (main, cross)
        } else {
            (cross, main)
        }
    }

    /// Extract a main/cross pair from physical (width, height).
    pub fn from_physical(&self, width: f32, height: f32) -> (f32, f32) {
        if self.main_is_row {
            (width, height)
        } else {
            (height, width)
        }
    }

    /// `from_physical` over optional (available) sizes.
    pub fn from_physical_opt(
        &self,
        width: Option<f32>,
        height: Option<f32>,
    ) -> (Option<f32>, Option<f32>) {
        if self.main_is_row {
            (width, height)
        } else {
            (height, width)
        }
    }
}

/// Margins, padding and borders of one node, resolved to pixels against the
/// containing block's inline size. Margins keep their `auto` flags; `auto`
/// resolves to zero here and is distributed by the positioners.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct BoxSides {
    pub margin_top: f32,
    pub margin_right: f32,
    pub margin_bottom: f32,
    pub margin_left: f32,
    pub margin_top_auto: bool,
    pub margin_right_auto: bool,
    pub margin_bottom_auto: bool,
    pub margin_left_auto: bool,
    pub padding_top: f32,
    pub padding_right: f32,
    pub padding_bottom: f32,
    pub padding_left: f32,
    pub border_top: f32,
    pub border_right: f32,
    pub border_bottom: f32,
    pub border_left: f32,
}

/// Resolve a node's box sides. Padding and border magnitudes clamp to zero;
/// margins may be negative.
pub(crate) fn compute_box_sides(style: &Style, percent_basis: Option<f32>) -> BoxSides {
    let resolve_spacing = |value: Value| value.numeric(percent_basis).max(0.0);
    BoxSides {
        margin_top: style.margin.top.numeric(percent_basis),
        margin_right: style.margin.right.numeric(percent_basis),
        margin_bottom: style.margin.bottom.numeric(percent_basis),
        margin_left: style.margin.left.numeric(percent_basis),
        margin_top_auto: style.margin.top == Value::Auto,
        margin_right_auto: style.margin.right == Value::Auto,
        margin_bottom_auto: style.margin.bottom == Value::Auto,
        margin_left_auto: style.margin.left == Value::Auto,
        padding_top: resolve_spacing(style.padding.top),
        padding_right: resolve_spacing(style.padding.right),
        padding_bottom: resolve_spacing(style.padding.bottom),
        padding_left: resolve_spacing(style.padding.left),
        border_top: resolve_spacing(style.border.top),
        border_right: resolve_spacing(style.border.right),
        border_bottom: resolve_spacing(style.border.bottom),
        border_left: resolve_spacing(style.border.left),
    }
}

impl BoxSides {
    pub fn horizontal_padding_border(&self) -> f32 {
        self.padding_left + self.padding_right + self.border_left + self.border_right
    }

    pub fn vertical_padding_border(&self) -> f32 {
        self.padding_top + self.padding_bottom + self.border_top + self.border_bottom
    }

    pub fn main_padding_border(&self, axes: FlexAxes) -> f32 {
        if axes.main_is_row {
            self.horizontal_padding_border()
        } else {
            self.vertical_padding_border()
        }
    }

    pub fn cross_padding_border(&self, axes: FlexAxes) -> f32 {
        if axes.main_is_row {
            self.vertical_padding_border()
        } else {
            self.horizontal_padding_border()
        }
    }

    /// Content-box offset from the border-box origin: (left, top).
    pub fn content_offset(&self) -> (f32, f32) {
        (
            self.padding_left + self.border_left,
            self.padding_top + self.border_top,
        )
    }

    pub fn main_start_margin(&self, axes: FlexAxes) -> f32 {
        if axes.main_is_row {
            self.margin_left
        } else {
            self.margin_top
        }
    }

    pub fn main_end_margin(&self, axes: FlexAxes) -> f32 {
        if axes.main_is_row {
            self.margin_right
        } else {
            self.margin_bottom
        }
    }

    pub fn cross_start_margin(&self, axes: FlexAxes) -> f32 {
        if axes.main_is_row {
            self.margin_top
        } else {
            self.margin_left
        }
    }

    pub fn cross_end_margin(&self, axes: FlexAxes) -> f32 {
        if axes.main_is_row {
            self.margin_bottom
        } else {
            self.margin_right
        }
    }

    pub fn main_start_margin_auto(&self, axes: FlexAxes) -> bool {
        if axes.main_is_row {
            self.margin_left_auto
        } else {
            self.margin_top_auto
        }
    }

    pub fn main_end_margin_auto(&self, axes: FlexAxes) -> bool {
        if axes.main_is_row {
            self.margin_right_auto
        } else {
            self.margin_bottom_auto
        }
    }

    pub fn cross_start_margin_auto(&self, axes: FlexAxes) -> bool {
        if axes.main_is_row {
            self.margin_top_auto
        } else {
            self.margin_left_auto
        }
    }

    pub fn cross_end_margin_auto(&self, axes: FlexAxes) -> bool {
        if axes.main_is_row {
            self.margin_bottom_auto
        } else {
            self.margin_right_auto
        }
    }

    pub fn main_margin_sum(&self, axes: FlexAxes) -> f32 {
        self.main_start_margin(axes) + self.main_end_margin(axes)
    }

    pub fn cross_margin_sum(&self, axes: FlexAxes) -> f32 {
        self.cross_start_margin(axes) + self.cross_end_margin(axes)
    }
}
