//! The per-node record: style inputs, computed layout outputs, tree links,
//! and the caches the dirty engine invalidates.

use crate::style::{Direction, Style};
use flexline_values::LayoutRect;
use std::fmt;

/// Opaque handle to a node owned by a [`crate::LayoutTree`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u64);

/// Leaf content measurement callback: `(node, available_width,
/// available_height) -> (width, height)`. Either available size may be
/// `f32::INFINITY`; outputs are clamped to finite non-negative numbers.
/// The callback must not touch the tree.
pub type MeasureFunc = Box<dyn Fn(NodeId, f32, f32) -> (f32, f32)>;

/// Baseline callback: `(node, width, height) -> baseline_from_top`, with the
/// output clamped into `[0, height]`.
pub type BaselineFunc = Box<dyn Fn(NodeId, f32, f32) -> f32>;

/// Computed layout outputs of one node, in the parent's coordinate space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Layout {
    pub rect: LayoutRect,
    /// Distance from the border-box top to the first baseline, when known.
    pub first_baseline: Option<f32>,
    pub last_baseline: Option<f32>,
    /// The inline direction the node was actually laid out with.
    pub direction: Direction,
}

/// Cached intrinsic (content) size. Valid only when both dimensions are
/// present; the dirty engine clears both together.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct IntrinsicCache {
    pub width: Option<f32>,
    pub height: Option<f32>,
}

impl IntrinsicCache {
    pub fn get(&self) -> Option<(f32, f32)> {
        self.width.zip(self.height)
    }

    pub fn store(&mut self, width: f32, height: f32) {
        self.width = Some(width);
        self.height = Some(height);
    }

    pub fn clear(&mut self) {
        self.width = None;
        self.height = None;
    }
}

/// One node of the layout tree. Owned by the tree's arena; reachable nodes
/// are linked through `parent`/`children`.
pub(crate) struct Node {
    pub style: Style,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    pub layout: Layout,
    pub intrinsic: IntrinsicCache,
    pub cached_baseline: Option<f32>,
    pub is_dirty: bool,
    /// Set while a `batch` on this node is running; suppresses per-setter
    /// dirty propagation.
    pub suspend_dirty: bool,
    /// A suspended setter recorded a change; the enclosing batch turns this
    /// into a single propagation.
    pub pending_dirty: bool,
    pub measure: Option<MeasureFunc>,
    pub baseline_fn: Option<BaselineFunc>,
}

impl Node {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            parent: None,
            children: Vec::new(),
            layout: Layout::default(),
            intrinsic: IntrinsicCache::default(),
            cached_baseline: None,
            is_dirty: true,
            suspend_dirty: false,
            pending_dirty: false,
            measure: None,
            baseline_fn: None,
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("style", &self.style)
            .field("parent", &self.parent)
            .field("children", &self.children)
            .field("layout", &self.layout)
            .field("is_dirty", &self.is_dirty)
            .field("has_measure", &self.measure.is_some())
            .field("has_baseline_fn", &self.baseline_fn.is_some())
            .finish_non_exhaustive()
    }
}
