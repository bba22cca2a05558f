//! Style inputs for a layout node: the keyword enums, the per-node `Style`
//! record with its CSS defaults, and the string-keyed property bag used by
//! `set`/`style` and the node constructor.

pub mod keywords;

pub use keywords::{
    AlignContent, AlignItems, AlignSafety, AlignSelf, Direction, Display, Edge, FlexDirection,
    FlexWrap, JustifyContent, PositionType, SelfAlignment, WritingMode,
};

use crate::error::{LayoutError, Result};
use flexline_values::Value;

/// One `Value` per physical box edge.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Edges {
    pub top: Value,
    pub right: Value,
    pub bottom: Value,
    pub left: Value,
}

impl Edges {
    pub(crate) fn get(&self, edge: Edge) -> Value {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    pub(crate) fn set(&mut self, edge: Edge, value: Value) {
        match edge {
            Edge::Top => self.top = value,
            Edge::Right => self.right = value,
            Edge::Bottom => self.bottom = value,
            Edge::Left => self.left = value,
        }
    }

    pub(crate) const fn all(value: Value) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

/// The full style record of a node. Every field has a default; mutations go
/// through the tree's setters so dirty propagation stays correct.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Style {
    pub flex_direction: FlexDirection,
    pub flex_wrap: FlexWrap,
    pub justify_content: JustifyContent,
    pub align_items: AlignItems,
    pub align_self: AlignSelf,
    pub align_content: AlignContent,
    pub align_items_safety: AlignSafety,
    pub align_self_safety: AlignSafety,
    pub align_content_safety: AlignSafety,
    pub justify_items: SelfAlignment,
    pub justify_self: SelfAlignment,
    pub flex_grow: f32,
    pub flex_shrink: f32,
    pub flex_basis: Value,
    pub width: Value,
    pub height: Value,
    pub min_width: Value,
    pub min_height: Value,
    pub max_width: Value,
    pub max_height: Value,
    pub margin: Edges,
    pub padding: Edges,
    pub border: Edges,
    /// Position offsets (`top`/`right`/`bottom`/`left`).
    pub inset: Edges,
    pub row_gap: Value,
    pub column_gap: Value,
    pub position_type: PositionType,
    pub display: Display,
    pub order: i32,
    pub direction: Direction,
    pub writing_mode: WritingMode,
    /// width / height.
    pub aspect_ratio: Option<f32>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            flex_direction: FlexDirection::Row,
            flex_wrap: FlexWrap::NoWrap,
            justify_content: JustifyContent::FlexStart,
            align_items: AlignItems::Stretch,
            align_self: AlignSelf::Auto,
            align_content: AlignContent::Stretch,
            align_items_safety: AlignSafety::Unsafe,
            align_self_safety: AlignSafety::Unsafe,
            align_content_safety: AlignSafety::Unsafe,
            justify_items: SelfAlignment::Start,
            justify_self: SelfAlignment::Auto,
            flex_grow: 0.0,
            flex_shrink: 1.0,
            flex_basis: Value::Auto,
            width: Value::Undefined,
            height: Value::Undefined,
            min_width: Value::Auto,
            min_height: Value::Auto,
            max_width: Value::Undefined,
            max_height: Value::Undefined,
            margin: Edges::default(),
            padding: Edges::default(),
            border: Edges::default(),
            inset: Edges::default(),
            row_gap: Value::Points(0.0),
            column_gap: Value::Points(0.0),
            position_type: PositionType::Static,
            display: Display::Flex,
            order: 0,
            direction: Direction::Ltr,
            writing_mode: WritingMode::HorizontalTb,
            aspect_ratio: None,
        }
    }
}

/// Input accepted by the string-keyed property surface: a plain number
/// (points for length properties, the raw number elsewhere) or a keyword /
/// value string.
#[derive(Copy, Clone, Debug)]
pub enum StyleInput<'a> {
    Number(f32),
    Keyword(&'a str),
}

impl From<f32> for StyleInput<'_> {
    fn from(number: f32) -> Self {
        Self::Number(number)
    }
}

impl From<i32> for StyleInput<'_> {
    fn from(number: i32) -> Self {
        Self::Number(number as f32)
    }
}

impl<'a> From<&'a str> for StyleInput<'a> {
    fn from(keyword: &'a str) -> Self {
        Self::Keyword(keyword)
    }
}

/// A parsed, typed style mutation. Parsing the whole bag before applying any
/// op is what makes `style()` atomic.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum StyleOp {
    FlexDirection(FlexDirection),
    FlexWrap(FlexWrap),
    JustifyContent(JustifyContent),
    AlignItems(AlignItems),
    AlignSelf(AlignSelf),
    AlignContent(AlignContent),
    AlignItemsSafety(AlignSafety),
    AlignSelfSafety(AlignSafety),
    AlignContentSafety(AlignSafety),
    JustifyItems(SelfAlignment),
    JustifySelf(SelfAlignment),
    PositionType(PositionType),
    Display(Display),
    Direction(Direction),
    WritingMode(WritingMode),
    Order(i32),
    FlexGrow(f32),
    FlexShrink(f32),
    FlexBasis(Value),
    Width(Value),
    Height(Value),
    MinWidth(Value),
    MinHeight(Value),
    MaxWidth(Value),
    MaxHeight(Value),
    RowGap(Value),
    ColumnGap(Value),
    Gap(Value),
    Margin(Value),
    MarginEdge(Edge, Value),
    Padding(Value),
    PaddingEdge(Edge, Value),
    Border(Value),
    BorderEdge(Edge, Value),
    Inset(Edge, Value),
    AspectRatio(Option<f32>),
}

fn invalid(property: &'static str, reason: &'static str) -> LayoutError {
    LayoutError::InvalidValue { property, reason }
}

/// Interpret an input as a plain finite number (for `order`, the flex
/// factors and aspect-ratio components).
fn parse_number(property: &'static str, input: StyleInput<'_>) -> Result<f32> {
    let number = match input {
        StyleInput::Number(number) => number,
        StyleInput::Keyword(text) => text
            .trim()
            .parse::<f32>()
            .map_err(|_| invalid(property, "expected a number"))?,
    };
    if !number.is_finite() {
        return Err(invalid(property, "must be finite"));
    }
    Ok(number)
}

/// Interpret an input as a length `Value`. `allow_content` is true only for
/// `flex-basis`.
fn parse_value(property: &'static str, input: StyleInput<'_>, allow_content: bool) -> Result<Value> {
    let value = match input {
        StyleInput::Number(number) => {
            if !number.is_finite() {
                return Err(invalid(property, "must be finite"));
            }
            Value::Points(number)
        }
        StyleInput::Keyword(text) => text
            .parse::<Value>()
            .map_err(|_| invalid(property, "not a length, percentage, or keyword"))?,
    };
    if value == Value::Content && !allow_content {
        return Err(invalid(property, "`content` only applies to flex-basis"));
    }
    Ok(value)
}

fn parse_non_negative(property: &'static str, input: StyleInput<'_>) -> Result<f32> {
    let number = parse_number(property, input)?;
    if number < 0.0 {
        return Err(invalid(property, "must be non-negative"));
    }
    Ok(number)
}

/// Parse an aspect ratio: a positive number, a `w/h` ratio string, or
/// `auto` to clear it.
fn parse_aspect_ratio(input: StyleInput<'_>) -> Result<Option<f32>> {
    const PROPERTY: &str = "aspectRatio";
    let ratio = match input {
        StyleInput::Number(number) => number,
        StyleInput::Keyword("auto") => return Ok(None),
        StyleInput::Keyword(text) => match text.split_once('/') {
            Some((numerator, denominator)) => {
                let numerator = parse_number(PROPERTY, StyleInput::Keyword(numerator))?;
                let denominator = parse_number(PROPERTY, StyleInput::Keyword(denominator))?;
                if denominator <= 0.0 {
                    return Err(invalid(PROPERTY, "ratio denominator must be positive"));
                }
                numerator / denominator
            }
            None => parse_number(PROPERTY, StyleInput::Keyword(text))?,
        },
    };
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(invalid(PROPERTY, "must be a positive finite ratio"));
    }
    Ok(Some(ratio))
}

fn parse_enum_keyword<T>(
    property: &'static str,
    input: StyleInput<'_>,
    from_keyword: fn(&str) -> Option<T>,
) -> Result<T> {
    match input {
        StyleInput::Keyword(text) => {
            from_keyword(text).ok_or_else(|| invalid(property, "unrecognised keyword"))
        }
        StyleInput::Number(_) => Err(invalid(property, "expected a keyword")),
    }
}

/// Parse one `(key, input)` pair into a typed op. Unknown keys return
/// `UnknownProperty`; malformed values return `InvalidValue`.
pub(crate) fn parse_style_op(key: &str, input: StyleInput<'_>) -> Result<StyleOp> {
    let op = match key {
        "flexDirection" => {
            StyleOp::FlexDirection(parse_enum_keyword("flexDirection", input, FlexDirection::from_keyword)?)
        }
        "flexWrap" => StyleOp::FlexWrap(parse_enum_keyword("flexWrap", input, FlexWrap::from_keyword)?),
        "justifyContent" => StyleOp::JustifyContent(parse_enum_keyword(
            "justifyContent",
            input,
            JustifyContent::from_keyword,
        )?),
        "alignItems" => {
            StyleOp::AlignItems(parse_enum_keyword("alignItems", input, AlignItems::from_keyword)?)
        }
        "alignSelf" => {
            StyleOp::AlignSelf(parse_enum_keyword("alignSelf", input, AlignSelf::from_keyword)?)
        }
        "alignContent" => StyleOp::AlignContent(parse_enum_keyword(
            "alignContent",
            input,
            AlignContent::from_keyword,
        )?),
        "alignItemsSafety" => StyleOp::AlignItemsSafety(parse_enum_keyword(
            "alignItemsSafety",
            input,
            AlignSafety::from_keyword,
        )?),
        "alignSelfSafety" => StyleOp::AlignSelfSafety(parse_enum_keyword(
            "alignSelfSafety",
            input,
            AlignSafety::from_keyword,
        )?),
        "alignContentSafety" => StyleOp::AlignContentSafety(parse_enum_keyword(
            "alignContentSafety",
            input,
            AlignSafety::from_keyword,
        )?),
        "justifyItems" => StyleOp::JustifyItems(parse_enum_keyword(
            "justifyItems",
            input,
            SelfAlignment::from_keyword,
        )?),
        "justifySelf" => StyleOp::JustifySelf(parse_enum_keyword(
            "justifySelf",
            input,
            SelfAlignment::from_keyword,
        )?),
        "positionType" => {
            StyleOp::PositionType(parse_enum_keyword("positionType", input, PositionType::from_keyword)?)
        }
        "display" => StyleOp::Display(parse_enum_keyword("display", input, Display::from_keyword)?),
        "direction" => {
            StyleOp::Direction(parse_enum_keyword("direction", input, Direction::from_keyword)?)
        }
        "writingMode" => {
            StyleOp::WritingMode(parse_enum_keyword("writingMode", input, WritingMode::from_keyword)?)
        }
        "order" => StyleOp::Order(parse_number("order", input)?.round() as i32),
        "flexGrow" => StyleOp::FlexGrow(parse_non_negative("flexGrow", input)?),
        "flexShrink" => StyleOp::FlexShrink(parse_non_negative("flexShrink", input)?),
        "flexBasis" => StyleOp::FlexBasis(parse_value("flexBasis", input, true)?),
        "width" => StyleOp::Width(parse_value("width", input, false)?),
        "height" => StyleOp::Height(parse_value("height", input, false)?),
        "minWidth" => StyleOp::MinWidth(parse_value("minWidth", input, false)?),
        "minHeight" => StyleOp::MinHeight(parse_value("minHeight", input, false)?),
        "maxWidth" => StyleOp::MaxWidth(parse_value("maxWidth", input, false)?),
        "maxHeight" => StyleOp::MaxHeight(parse_value("maxHeight", input, false)?),
        "rowGap" => StyleOp::RowGap(parse_value("rowGap", input, false)?),
        "columnGap" => StyleOp::ColumnGap(parse_value("columnGap", input, false)?),
        "gap" => StyleOp::Gap(parse_value("gap", input, false)?),
        "margin" => StyleOp::Margin(parse_value("margin", input, false)?),
        "marginTop" => StyleOp::MarginEdge(Edge::Top, parse_value("marginTop", input, false)?),
        "marginRight" => StyleOp::MarginEdge(Edge::Right, parse_value("marginRight", input, false)?),
        "marginBottom" => StyleOp::MarginEdge(Edge::Bottom, parse_value("marginBottom", input, false)?),
        "marginLeft" => StyleOp::MarginEdge(Edge::Left, parse_value("marginLeft", input, false)?),
        "padding" => StyleOp::Padding(parse_value("padding", input, false)?),
        "paddingTop" => StyleOp::PaddingEdge(Edge::Top, parse_value("paddingTop", input, false)?),
        "paddingRight" => StyleOp::PaddingEdge(Edge::Right, parse_value("paddingRight", input, false)?),
        "paddingBottom" => {
            StyleOp::PaddingEdge(Edge::Bottom, parse_value("paddingBottom", input, false)?)
        }
        "paddingLeft" => StyleOp::PaddingEdge(Edge::Left, parse_value("paddingLeft", input, false)?),
        "border" => StyleOp::Border(parse_value("border", input, false)?),
        "borderTop" => StyleOp::BorderEdge(Edge::Top, parse_value("borderTop", input, false)?),
        "borderRight" => StyleOp::BorderEdge(Edge::Right, parse_value("borderRight", input, false)?),
        "borderBottom" => StyleOp::BorderEdge(Edge::Bottom, parse_value("borderBottom", input, false)?),
        "borderLeft" => StyleOp::BorderEdge(Edge::Left, parse_value("borderLeft", input, false)?),
        "top" => StyleOp::Inset(Edge::Top, parse_value("top", input, false)?),
        "right" => StyleOp::Inset(Edge::Right, parse_value("right", input, false)?),
        "bottom" => StyleOp::Inset(Edge::Bottom, parse_value("bottom", input, false)?),
        "left" => StyleOp::Inset(Edge::Left, parse_value("left", input, false)?),
        "aspectRatio" => StyleOp::AspectRatio(parse_aspect_ratio(input)?),
        _ => {
            return Err(LayoutError::UnknownProperty {
                key: key.to_string(),
            });
        }
    };
    Ok(op)
}

impl Style {
    /// Apply a typed op. Returns true when the stored style actually
    /// changed (structural equality), which is what gates dirty marking.
    pub(crate) fn apply(&mut self, op: StyleOp) -> bool {
        fn write<T: PartialEq>(slot: &mut T, value: T) -> bool {
            if *slot == value {
                false
            } else {
                *slot = value;
                true
            }
        }

        match op {
            StyleOp::FlexDirection(value) => write(&mut self.flex_direction, value),
            StyleOp::FlexWrap(value) => write(&mut self.flex_wrap, value),
            StyleOp::JustifyContent(value) => write(&mut self.justify_content, value),
            StyleOp::AlignItems(value) => write(&mut self.align_items, value),
            StyleOp::AlignSelf(value) => write(&mut self.align_self, value),
            StyleOp::AlignContent(value) => write(&mut self.align_content, value),
            StyleOp::AlignItemsSafety(value) => write(&mut self.align_items_safety, value),
            StyleOp::AlignSelfSafety(value) => write(&mut self.align_self_safety, value),
            StyleOp::AlignContentSafety(value) => write(&mut self.align_content_safety, value),
            StyleOp::JustifyItems(value) => write(&mut self.justify_items, value),
            StyleOp::JustifySelf(value) => write(&mut self.justify_self, value),
            StyleOp::PositionType(value) => write(&mut self.position_type, value),
            StyleOp::Display(value) => write(&mut self.display, value),
            StyleOp::Direction(value) => write(&mut self.direction, value),
            StyleOp::WritingMode(value) => write(&mut self.writing_mode, value),
            StyleOp::Order(value) => write(&mut self.order, value),
            StyleOp::FlexGrow(value) => write(&mut self.flex_grow, value),
            StyleOp::FlexShrink(value) => write(&mut self.flex_shrink, value),
            StyleOp::FlexBasis(value) => write(&mut self.flex_basis, value),
            StyleOp::Width(value) => write(&mut self.width, value),
            StyleOp::Height(value) => write(&mut self.height, value),
            StyleOp::MinWidth(value) => write(&mut self.min_width, value),
            StyleOp::MinHeight(value) => write(&mut self.min_height, value),
            StyleOp::MaxWidth(value) => write(&mut self.max_width, value),
            StyleOp::MaxHeight(value) => write(&mut self.max_height, value),
            StyleOp::RowGap(value) => write(&mut self.row_gap, value),
            StyleOp::ColumnGap(value) => write(&mut self.column_gap, value),
            StyleOp::Gap(value) => {
                let row_changed = write(&mut self.row_gap, value);
                let column_changed = write(&mut self.column_gap, value);
                row_changed || column_changed
            }
            StyleOp::Margin(value) => write(&mut self.margin, Edges::all(value)),
            StyleOp::MarginEdge(edge, value) => {
                let mut margin = self.margin;
                margin.set(edge, value);
                write(&mut self.margin, margin)
            }
            StyleOp::Padding(value) => write(&mut self.padding, Edges::all(value)),
            StyleOp::PaddingEdge(edge, value) => {
                let mut padding = self.padding;
                padding.set(edge, value);
                write(&mut self.padding, padding)
            }
            StyleOp::Border(value) => write(&mut self.border, Edges::all(value)),
            StyleOp::BorderEdge(edge, value) => {
                let mut border = self.border;
                border.set(edge, value);
                write(&mut self.border, border)
            }
            StyleOp::Inset(edge, value) => {
                let mut inset = self.inset;
                inset.set(edge, value);
                write(&mut self.inset, inset)
            }
            StyleOp::AspectRatio(value) => write(&mut self.aspect_ratio, value),
        }
    }
}
