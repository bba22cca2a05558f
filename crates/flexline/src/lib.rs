//! flexline — a CSS Flexible Box layout engine.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>
//! Spec: <https://www.w3.org/TR/css-align-3/>
//! Spec: <https://www.w3.org/TR/css-sizing-3/>
//!
//! Given a tree of styled boxes and a viewport size, the engine computes the
//! final position and size of every box: flex line formation, flexible
//! length resolution against min/max and aspect-ratio constraints, main and
//! cross axis alignment including baselines, absolute positioning, and
//! relative offsets. Content sizes come from caller-supplied measurement
//! callbacks; the engine does no text shaping or painting of its own.
//!
//! Layout is incremental: style and tree mutations mark a leaf-to-root
//! dirty trail, and `calculate_layout` on a clean subtree with unchanged
//! constraints is a no-op.

#![forbid(unsafe_code)]

mod algo;
mod axis;
mod measure;
mod node;
mod printing;
mod sizing;

pub mod error;
pub mod style;
pub mod tree;

pub use error::{LayoutError, Result};
pub use flexline_values::{LayoutRect, Value};
pub use node::{BaselineFunc, Layout, MeasureFunc, NodeId};
pub use style::{
    AlignContent, AlignItems, AlignSafety, AlignSelf, Direction, Display, Edge, Edges,
    FlexDirection, FlexWrap, JustifyContent, PositionType, SelfAlignment, Style, StyleInput,
    WritingMode,
};
pub use tree::LayoutTree;
