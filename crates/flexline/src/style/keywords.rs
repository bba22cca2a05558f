//! Closed keyword sets for every style property, with resolution of the
//! Box Alignment Level 3 keywords down to the flex keywords the layout
//! algorithm works in.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-direction-property>
//! Spec: <https://www.w3.org/TR/css-align-3/>

/// Direction of the main axis.
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-flex-direction>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FlexDirection {
    #[default]
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    pub const fn is_row_family(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }

    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "row" => Some(Self::Row),
            "row-reverse" => Some(Self::RowReverse),
            "column" => Some(Self::Column),
            "column-reverse" => Some(Self::ColumnReverse),
            _ => None,
        }
    }
}

/// Line wrapping behaviour.
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#propdef-flex-wrap>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum FlexWrap {
    #[default]
    NoWrap,
    Wrap,
    WrapReverse,
}

impl FlexWrap {
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "nowrap" => Some(Self::NoWrap),
            "wrap" => Some(Self::Wrap),
            "wrap-reverse" => Some(Self::WrapReverse),
            _ => None,
        }
    }
}

/// Main-axis content distribution, including the Box Alignment L3 keywords
/// that resolve to flex keywords before positioning.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum JustifyContent {
    #[default]
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    Start,
    End,
    Normal,
    Left,
    Right,
}

impl JustifyContent {
    /// Resolve L3 keywords to flex keywords. `left`/`right` are physical and
    /// need the main-axis orientation plus the resolved inline direction.
    ///
    /// Spec: <https://www.w3.org/TR/css-align-3/#positional-values>
    pub(crate) fn resolved(self, main_is_row: bool, rtl: bool) -> Self {
        match self {
            Self::Start | Self::Normal => Self::FlexStart,
            Self::End => Self::FlexEnd,
            Self::Left => {
                if main_is_row && rtl {
                    Self::FlexEnd
                } else {
                    Self::FlexStart
                }
            }
            Self::Right => {
                if main_is_row && rtl {
                    Self::FlexStart
                } else {
                    Self::FlexEnd
                }
            }
            other => other,
        }
    }

    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "flex-start" => Some(Self::FlexStart),
            "flex-end" => Some(Self::FlexEnd),
            "center" => Some(Self::Center),
            "space-between" => Some(Self::SpaceBetween),
            "space-around" => Some(Self::SpaceAround),
            "space-evenly" => Some(Self::SpaceEvenly),
            "start" => Some(Self::Start),
            "end" => Some(Self::End),
            "normal" => Some(Self::Normal),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Cross-axis alignment for items, including L3 keywords.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignItems {
    #[default]
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
    Start,
    End,
    SelfStart,
    SelfEnd,
    Normal,
}

impl AlignItems {
    /// Resolve L3 keywords: `start`/`self-start` pack to the cross start,
    /// `end`/`self-end` to the cross end, `normal` behaves as `stretch`.
    pub(crate) const fn resolved(self) -> Self {
        match self {
            Self::Start | Self::SelfStart => Self::FlexStart,
            Self::End | Self::SelfEnd => Self::FlexEnd,
            Self::Normal => Self::Stretch,
            other => other,
        }
    }

    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "stretch" => Some(Self::Stretch),
            "flex-start" => Some(Self::FlexStart),
            "flex-end" => Some(Self::FlexEnd),
            "center" => Some(Self::Center),
            "baseline" => Some(Self::Baseline),
            "start" => Some(Self::Start),
            "end" => Some(Self::End),
            "self-start" => Some(Self::SelfStart),
            "self-end" => Some(Self::SelfEnd),
            "normal" => Some(Self::Normal),
            _ => None,
        }
    }
}

/// Per-item override of the container's `align-items`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignSelf {
    #[default]
    Auto,
    Stretch,
    FlexStart,
    FlexEnd,
    Center,
    Baseline,
    Start,
    End,
    SelfStart,
    SelfEnd,
    Normal,
}

impl AlignSelf {
    /// Effective alignment for an item: `auto` falls back to the container's
    /// `align-items`, then L3 keywords resolve to flex keywords.
    pub(crate) const fn effective(self, container: AlignItems) -> AlignItems {
        let raw = match self {
            Self::Auto => return container.resolved(),
            Self::Stretch => AlignItems::Stretch,
            Self::FlexStart => AlignItems::FlexStart,
            Self::FlexEnd => AlignItems::FlexEnd,
            Self::Center => AlignItems::Center,
            Self::Baseline => AlignItems::Baseline,
            Self::Start => AlignItems::Start,
            Self::End => AlignItems::End,
            Self::SelfStart => AlignItems::SelfStart,
            Self::SelfEnd => AlignItems::SelfEnd,
            Self::Normal => AlignItems::Normal,
        };
        raw.resolved()
    }

    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        if keyword == "auto" {
            return Some(Self::Auto);
        }
        AlignItems::from_keyword(keyword).map(|align| match align {
            AlignItems::Stretch => Self::Stretch,
            AlignItems::FlexStart => Self::FlexStart,
            AlignItems::FlexEnd => Self::FlexEnd,
            AlignItems::Center => Self::Center,
            AlignItems::Baseline => Self::Baseline,
            AlignItems::Start => Self::Start,
            AlignItems::End => Self::End,
            AlignItems::SelfStart => Self::SelfStart,
            AlignItems::SelfEnd => Self::SelfEnd,
            AlignItems::Normal => Self::Normal,
        })
    }
}

/// Cross-axis packing of the lines of a multi-line container.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignContent {
    FlexStart,
    FlexEnd,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
    #[default]
    Stretch,
    Start,
    End,
    Normal,
}

impl AlignContent {
    /// Resolve L3 keywords, then swap the start/end pair for `wrap-reverse`
    /// so lines still pack from the visually reversed edge.
    pub(crate) const fn resolved(self, wrap_reverse: bool) -> Self {
        let flexed = match self {
            Self::Start => Self::FlexStart,
            Self::End => Self::FlexEnd,
            Self::Normal => Self::Stretch,
            other => other,
        };
        if wrap_reverse {
            match flexed {
                Self::FlexStart => Self::FlexEnd,
                Self::FlexEnd => Self::FlexStart,
                other => other,
            }
        } else {
            flexed
        }
    }

    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "flex-start" => Some(Self::FlexStart),
            "flex-end" => Some(Self::FlexEnd),
            "center" => Some(Self::Center),
            "space-between" => Some(Self::SpaceBetween),
            "space-around" => Some(Self::SpaceAround),
            "space-evenly" => Some(Self::SpaceEvenly),
            "stretch" => Some(Self::Stretch),
            "start" => Some(Self::Start),
            "end" => Some(Self::End),
            "normal" => Some(Self::Normal),
            _ => None,
        }
    }
}

/// Overflow handling for alignment: `safe` clamps an aligned item back into
/// its line instead of letting it overflow the cross-start edge.
/// Spec: <https://www.w3.org/TR/css-align-3/#overflow-values>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum AlignSafety {
    #[default]
    Unsafe,
    Safe,
}

impl AlignSafety {
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "unsafe" => Some(Self::Unsafe),
            "safe" => Some(Self::Safe),
            _ => None,
        }
    }
}

/// Self-alignment used for the static-position fallback of absolutely
/// positioned children (`justify-items`/`justify-self`).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum SelfAlignment {
    #[default]
    Auto,
    Start,
    Center,
    End,
    Stretch,
}

impl SelfAlignment {
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "auto" => Some(Self::Auto),
            "start" => Some(Self::Start),
            "center" => Some(Self::Center),
            "end" => Some(Self::End),
            "stretch" => Some(Self::Stretch),
            _ => None,
        }
    }
}

/// In-flow vs out-of-flow positioning scheme.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum PositionType {
    #[default]
    Static,
    Relative,
    Absolute,
}

impl PositionType {
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "static" => Some(Self::Static),
            "relative" => Some(Self::Relative),
            "absolute" => Some(Self::Absolute),
            _ => None,
        }
    }
}

/// Box generation: `none` removes the node (and its subtree) from layout.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Display {
    #[default]
    Flex,
    None,
}

impl Display {
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "flex" => Some(Self::Flex),
            "none" => Some(Self::None),
            _ => None,
        }
    }
}

/// Inline base direction; `rtl` flips the inline axis.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "ltr" => Some(Self::Ltr),
            "rtl" => Some(Self::Rtl),
            _ => None,
        }
    }
}

/// Writing mode subset: the inline axis is horizontal in `horizontal-tb`
/// and vertical in the `vertical-*` modes.
/// Spec: <https://www.w3.org/TR/css-writing-modes-4/#writing-mode>
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum WritingMode {
    #[default]
    HorizontalTb,
    VerticalRl,
    VerticalLr,
}

impl WritingMode {
    pub const fn inline_is_horizontal(self) -> bool {
        matches!(self, Self::HorizontalTb)
    }

    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "horizontal-tb" => Some(Self::HorizontalTb),
            "vertical-rl" => Some(Self::VerticalRl),
            "vertical-lr" => Some(Self::VerticalLr),
            _ => None,
        }
    }
}

/// A physical box edge, used by the per-edge margin/padding/border/inset
/// setters.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}
