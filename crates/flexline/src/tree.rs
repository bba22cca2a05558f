//! The layout tree: an arena of nodes plus the engine's public mutation and
//! query surface.
//!
//! Nodes are owned by the tree and addressed through [`NodeId`] handles;
//! parent links are non-owning back-references. All style mutation goes
//! through the setters here so dirty propagation stays correct.

use crate::error::{LayoutError, Result};
use crate::node::{BaselineFunc, Layout, MeasureFunc, Node, NodeId};
use crate::style::{
    parse_style_op, AlignContent, AlignItems, AlignSafety, AlignSelf, Direction, Display, Edge,
    FlexDirection, FlexWrap, JustifyContent, PositionType, SelfAlignment, Style, StyleInput,
    StyleOp, WritingMode,
};
use flexline_values::Value;
use log::trace;
use std::collections::HashMap;

/// A tree of styled boxes and the engine operating on it.
///
/// The tree is single-threaded: `calculate_layout` runs synchronously in
/// the caller's stack and must not be re-entered for the same tree.
#[derive(Default)]
pub struct LayoutTree {
    nodes: HashMap<NodeId, Node>,
    next_id: u64,
    /// Root and sanitized constraints of the last completed layout, used to
    /// make a clean `calculate_layout` call a no-op.
    last_constraints: Option<(NodeId, Option<f32>, Option<f32>)>,
    perf_layout_passes: u64,
    perf_nodes_laid_out_last: u64,
    perf_measure_cache_hits: u64,
    perf_measure_cache_misses: u64,
}

impl LayoutTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node with default style.
    pub fn new_node(&mut self) -> NodeId {
        self.insert_node(Style::default())
    }

    /// Create a node from a property bag. Unknown keys and malformed values
    /// are silently ignored; recognised pairs apply in the given order. The
    /// bag bypasses dirty propagation (a fresh node starts dirty anyway).
    pub fn new_node_with(&mut self, properties: &[(&str, StyleInput<'_>)]) -> NodeId {
        let mut style = Style::default();
        for (key, input) in properties {
            if let Ok(op) = parse_style_op(key, *input) {
                style.apply(op);
            }
        }
        self.insert_node(style)
    }

    fn insert_node(&mut self, style: Style) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node::new(style));
        id
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        self.nodes.get(&id).expect("node handle not in this tree")
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        self.nodes
            .get_mut(&id)
            .expect("node handle not in this tree")
    }

    /// All nodes without a parent, in creation order. Used by the debug
    /// printer.
    pub(crate) fn roots(&self) -> Vec<NodeId> {
        let mut roots: Vec<NodeId> = self
            .nodes
            .iter()
            .filter_map(|(id, node)| node.parent.is_none().then_some(*id))
            .collect();
        roots.sort();
        roots
    }

    // ---- tree structure -------------------------------------------------

    /// Attach `child` as the last child of `parent`, detaching it from any
    /// prior parent first.
    ///
    /// # Errors
    /// `TreeMisuse` when the attachment would create a cycle (`child` is
    /// `parent` or an ancestor of it). The tree is unchanged in that case.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if parent == child {
            return Err(LayoutError::TreeMisuse {
                reason: "a node cannot be its own child",
            });
        }
        let mut ancestor = self.node(parent).parent;
        while let Some(current) = ancestor {
            if current == child {
                return Err(LayoutError::TreeMisuse {
                    reason: "attaching an ancestor would create a cycle",
                });
            }
            ancestor = self.node(current).parent;
        }

        if let Some(old_parent) = self.node(child).parent {
            self.detach(old_parent, child);
            self.mark_dirty_internal(old_parent);
        }
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
        self.mark_dirty_internal(parent);
        trace!(target: "flexline::tree", "appended {child:?} under {parent:?}");
        Ok(())
    }

    /// Detach `child` from `parent`. A no-op when `child` is not currently
    /// a child of `parent`.
    pub fn remove_child(&mut self, parent: NodeId, child: NodeId) {
        if self.node(child).parent != Some(parent) {
            return;
        }
        self.detach(parent, child);
        self.node_mut(child).parent = None;
        self.mark_dirty_internal(parent);
        trace!(target: "flexline::tree", "removed {child:?} from {parent:?}");
    }

    fn detach(&mut self, parent: NodeId, child: NodeId) {
        self.node_mut(parent).children.retain(|id| *id != child);
    }

    pub fn child_count(&self, node: NodeId) -> usize {
        self.node(node).children.len()
    }

    pub fn child_at(&self, node: NodeId, index: usize) -> Option<NodeId> {
        self.node(node).children.get(index).copied()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node).parent
    }

    // ---- style mutation -------------------------------------------------

    pub(crate) fn apply_op(&mut self, id: NodeId, op: StyleOp) {
        let node = self.node_mut(id);
        if !node.style.apply(op) {
            return;
        }
        if node.suspend_dirty {
            node.pending_dirty = true;
        } else {
            self.mark_dirty_internal(id);
        }
    }

    /// Set one property through the string-keyed surface.
    ///
    /// # Errors
    /// `UnknownProperty` for an unrecognised key, `InvalidValue` for a
    /// malformed value; the node is unchanged on error.
    pub fn set<'a>(
        &mut self,
        node: NodeId,
        key: &str,
        value: impl Into<StyleInput<'a>>,
    ) -> Result<()> {
        let op = parse_style_op(key, value.into())?;
        self.apply_op(node, op);
        Ok(())
    }

    /// Apply a bag of properties atomically: every pair is parsed before
    /// any is applied, so an unknown key or malformed value leaves the node
    /// untouched. At most one dirty propagation results.
    ///
    /// # Errors
    /// `UnknownProperty`/`InvalidValue` from the first offending pair.
    pub fn style(&mut self, node: NodeId, properties: &[(&str, StyleInput<'_>)]) -> Result<()> {
        let ops = properties
            .iter()
            .map(|(key, input)| parse_style_op(key, *input))
            .collect::<Result<Vec<StyleOp>>>()?;
        let node_ref = self.node_mut(node);
        let mut changed = false;
        for op in ops {
            changed |= node_ref.style.apply(op);
        }
        if changed {
            let suspended = self.node(node).suspend_dirty;
            if suspended {
                self.node_mut(node).pending_dirty = true;
            } else {
                self.mark_dirty_internal(node);
            }
        }
        Ok(())
    }

    /// Run `f` with dirty propagation for `node` suspended; if anything
    /// changed, a single propagation happens when the outermost batch ends.
    ///
    /// # Errors
    /// Whatever `f` returns; the suspension is restored either way.
    pub fn batch<F>(&mut self, node: NodeId, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let previous = self.node(node).suspend_dirty;
        self.node_mut(node).suspend_dirty = true;
        let result = f(self);
        let node_ref = self.node_mut(node);
        node_ref.suspend_dirty = previous;
        if !previous && node_ref.pending_dirty {
            node_ref.pending_dirty = false;
            self.mark_dirty_internal(node);
        }
        result
    }

    // ---- typed setters --------------------------------------------------

    pub fn set_flex_direction(&mut self, node: NodeId, value: FlexDirection) {
        self.apply_op(node, StyleOp::FlexDirection(value));
    }

    pub fn set_flex_wrap(&mut self, node: NodeId, value: FlexWrap) {
        self.apply_op(node, StyleOp::FlexWrap(value));
    }

    pub fn set_justify_content(&mut self, node: NodeId, value: JustifyContent) {
        self.apply_op(node, StyleOp::JustifyContent(value));
    }

    pub fn set_align_items(&mut self, node: NodeId, value: AlignItems) {
        self.apply_op(node, StyleOp::AlignItems(value));
    }

    pub fn set_align_self(&mut self, node: NodeId, value: AlignSelf) {
        self.apply_op(node, StyleOp::AlignSelf(value));
    }

    pub fn set_align_content(&mut self, node: NodeId, value: AlignContent) {
        self.apply_op(node, StyleOp::AlignContent(value));
    }

    pub fn set_align_items_safety(&mut self, node: NodeId, value: AlignSafety) {
        self.apply_op(node, StyleOp::AlignItemsSafety(value));
    }

    pub fn set_align_self_safety(&mut self, node: NodeId, value: AlignSafety) {
        self.apply_op(node, StyleOp::AlignSelfSafety(value));
    }

    pub fn set_align_content_safety(&mut self, node: NodeId, value: AlignSafety) {
        self.apply_op(node, StyleOp::AlignContentSafety(value));
    }

    pub fn set_justify_items(&mut self, node: NodeId, value: SelfAlignment) {
        self.apply_op(node, StyleOp::JustifyItems(value));
    }

    pub fn set_justify_self(&mut self, node: NodeId, value: SelfAlignment) {
        self.apply_op(node, StyleOp::JustifySelf(value));
    }

    pub fn set_position_type(&mut self, node: NodeId, value: PositionType) {
        self.apply_op(node, StyleOp::PositionType(value));
    }

    pub fn set_display(&mut self, node: NodeId, value: Display) {
        self.apply_op(node, StyleOp::Display(value));
    }

    pub fn set_direction(&mut self, node: NodeId, value: Direction) {
        self.apply_op(node, StyleOp::Direction(value));
    }

    pub fn set_writing_mode(&mut self, node: NodeId, value: WritingMode) {
        self.apply_op(node, StyleOp::WritingMode(value));
    }

    /// # Errors
    /// `InvalidValue` when `value` is NaN, infinite, or negative.
    pub fn set_flex_grow(&mut self, node: NodeId, value: f32) -> Result<()> {
        self.apply_op(node, StyleOp::FlexGrow(non_negative("flexGrow", value)?));
        Ok(())
    }

    /// # Errors
    /// `InvalidValue` when `value` is NaN, infinite, or negative.
    pub fn set_flex_shrink(&mut self, node: NodeId, value: f32) -> Result<()> {
        self.apply_op(node, StyleOp::FlexShrink(non_negative("flexShrink", value)?));
        Ok(())
    }

    /// Set the `order` of a node; the value is rounded to an integer.
    ///
    /// # Errors
    /// `InvalidValue` when `value` is NaN or infinite.
    pub fn set_order(&mut self, node: NodeId, value: f32) -> Result<()> {
        if !value.is_finite() {
            return Err(LayoutError::InvalidValue {
                property: "order",
                reason: "must be finite",
            });
        }
        self.apply_op(node, StyleOp::Order(value.round() as i32));
        Ok(())
    }

    /// # Errors
    /// `InvalidValue` for a NaN/infinite magnitude.
    pub fn set_flex_basis(&mut self, node: NodeId, value: Value) -> Result<()> {
        self.apply_op(node, StyleOp::FlexBasis(finite_value("flexBasis", value)?));
        Ok(())
    }

    /// # Errors
    /// `InvalidValue` for a NaN/infinite magnitude or the `content` keyword.
    pub fn set_width(&mut self, node: NodeId, value: Value) -> Result<()> {
        self.apply_op(node, StyleOp::Width(size_value("width", value)?));
        Ok(())
    }

    /// # Errors
    /// `InvalidValue` for a NaN/infinite magnitude or the `content` keyword.
    pub fn set_height(&mut self, node: NodeId, value: Value) -> Result<()> {
        self.apply_op(node, StyleOp::Height(size_value("height", value)?));
        Ok(())
    }

    /// # Errors
    /// `InvalidValue` for a NaN/infinite magnitude or the `content` keyword.
    pub fn set_min_width(&mut self, node: NodeId, value: Value) -> Result<()> {
        self.apply_op(node, StyleOp::MinWidth(size_value("minWidth", value)?));
        Ok(())
    }

    /// # Errors
    /// `InvalidValue` for a NaN/infinite magnitude or the `content` keyword.
    pub fn set_min_height(&mut self, node: NodeId, value: Value) -> Result<()> {
        self.apply_op(node, StyleOp::MinHeight(size_value("minHeight", value)?));
        Ok(())
    }

    /// # Errors
    /// `InvalidValue` for a NaN/infinite magnitude or the `content` keyword.
    pub fn set_max_width(&mut self, node: NodeId, value: Value) -> Result<()> {
        self.apply_op(node, StyleOp::MaxWidth(size_value("maxWidth", value)?));
        Ok(())
    }

    /// # Errors
    /// `InvalidValue` for a NaN/infinite magnitude or the `content` keyword.
    pub fn set_max_height(&mut self, node: NodeId, value: Value) -> Result<()> {
        self.apply_op(node, StyleOp::MaxHeight(size_value("maxHeight", value)?));
        Ok(())
    }

    /// # Errors
    /// `InvalidValue` for a NaN/infinite magnitude or the `content` keyword.
    pub fn set_margin(&mut self, node: NodeId, edge: Edge, value: Value) -> Result<()> {
        self.apply_op(node, StyleOp::MarginEdge(edge, size_value("margin", value)?));
        Ok(())
    }

    /// # Errors
    /// `InvalidValue` for a NaN/infinite magnitude or the `content` keyword.
    pub fn set_padding(&mut self, node: NodeId, edge: Edge, value: Value) -> Result<()> {
        self.apply_op(
            node,
            StyleOp::PaddingEdge(edge, size_value("padding", value)?),
        );
        Ok(())
    }

    /// # Errors
    /// `InvalidValue` for a NaN/infinite magnitude or the `content` keyword.
    pub fn set_border(&mut self, node: NodeId, edge: Edge, value: Value) -> Result<()> {
        self.apply_op(node, StyleOp::BorderEdge(edge, size_value("border", value)?));
        Ok(())
    }

    /// Set a position offset (`top`/`right`/`bottom`/`left`).
    ///
    /// # Errors
    /// `InvalidValue` for a NaN/infinite magnitude or the `content` keyword.
    pub fn set_inset(&mut self, node: NodeId, edge: Edge, value: Value) -> Result<()> {
        self.apply_op(node, StyleOp::Inset(edge, size_value("inset", value)?));
        Ok(())
    }

    /// # Errors
    /// `InvalidValue` for a NaN/infinite magnitude or the `content` keyword.
    pub fn set_row_gap(&mut self, node: NodeId, value: Value) -> Result<()> {
        self.apply_op(node, StyleOp::RowGap(size_value("rowGap", value)?));
        Ok(())
    }

    /// # Errors
    /// `InvalidValue` for a NaN/infinite magnitude or the `content` keyword.
    pub fn set_column_gap(&mut self, node: NodeId, value: Value) -> Result<()> {
        self.apply_op(node, StyleOp::ColumnGap(size_value("columnGap", value)?));
        Ok(())
    }

    /// Set both gaps at once.
    ///
    /// # Errors
    /// `InvalidValue` for a NaN/infinite magnitude or the `content` keyword.
    pub fn set_gap(&mut self, node: NodeId, value: Value) -> Result<()> {
        self.apply_op(node, StyleOp::Gap(size_value("gap", value)?));
        Ok(())
    }

    /// # Errors
    /// `InvalidValue` unless the ratio is a positive finite number.
    pub fn set_aspect_ratio(&mut self, node: NodeId, ratio: Option<f32>) -> Result<()> {
        if let Some(value) = ratio
            && !(value.is_finite() && value > 0.0)
        {
            return Err(LayoutError::InvalidValue {
                property: "aspectRatio",
                reason: "must be a positive finite ratio",
            });
        }
        self.apply_op(node, StyleOp::AspectRatio(ratio));
        Ok(())
    }

    // ---- callbacks ------------------------------------------------------

    /// Install or clear the content measurement callback. Invalidates the
    /// intrinsic-size caches up the ancestor chain without toggling dirty
    /// flags (intrinsic sizes are exactly what the callback affects).
    pub fn set_measure_func(&mut self, node: NodeId, func: Option<MeasureFunc>) {
        self.node_mut(node).measure = func;
        self.invalidate_intrinsic_size(node);
    }

    /// Install or clear the baseline callback; invalidates baseline caches
    /// up the ancestor chain.
    pub fn set_baseline_func(&mut self, node: NodeId, func: Option<BaselineFunc>) {
        self.node_mut(node).baseline_fn = func;
        self.invalidate_baseline(node);
    }

    // ---- queries --------------------------------------------------------

    /// Read a node's style.
    pub fn get_style(&self, node: NodeId) -> &Style {
        &self.node(node).style
    }

    /// The computed layout of a node after `calculate_layout`.
    pub fn layout(&self, node: NodeId) -> Layout {
        self.node(node).layout
    }

    pub fn computed_left(&self, node: NodeId) -> f32 {
        self.node(node).layout.rect.x
    }

    pub fn computed_top(&self, node: NodeId) -> f32 {
        self.node(node).layout.rect.y
    }

    pub fn computed_width(&self, node: NodeId) -> f32 {
        self.node(node).layout.rect.width
    }

    pub fn computed_height(&self, node: NodeId) -> f32 {
        self.node(node).layout.rect.height
    }

    /// The node's own baseline: the baseline callback when installed, else
    /// the first baseline recorded by layout, else the bottom of the box.
    /// The result is cached until invalidated.
    pub fn get_baseline(&mut self, node: NodeId) -> f32 {
        if let Some(cached) = self.node(node).cached_baseline {
            return cached;
        }
        let node_ref = self.node(node);
        let rect = node_ref.layout.rect;
        let baseline = match &node_ref.baseline_fn {
            Some(func) => func(node, rect.width, rect.height).clamp(0.0, rect.height.max(0.0)),
            None => node_ref.layout.first_baseline.unwrap_or(rect.height),
        };
        self.node_mut(node).cached_baseline = Some(baseline);
        baseline
    }

    pub fn get_first_baseline(&mut self, node: NodeId) -> f32 {
        self.node(node)
            .layout
            .first_baseline
            .unwrap_or_else(|| self.get_baseline(node))
    }

    pub fn get_last_baseline(&mut self, node: NodeId) -> f32 {
        self.node(node)
            .layout
            .last_baseline
            .unwrap_or_else(|| self.get_baseline(node))
    }

    /// Whether a node is marked dirty (for inspection and tests).
    pub fn is_dirty(&self, node: NodeId) -> bool {
        self.node(node).is_dirty
    }

    // ---- layout entry ---------------------------------------------------

    /// Compute the layout of the subtree under `root` against the given
    /// parent size. Pass `f32::NAN` or an infinite value for an undefined
    /// dimension. Idempotent: a clean subtree laid out against the same
    /// constraints returns immediately.
    pub fn calculate_layout(&mut self, root: NodeId, parent_width: f32, parent_height: f32) {
        let constraints = (
            sanitize_constraint(parent_width),
            sanitize_constraint(parent_height),
        );
        let clean = !self.node(root).is_dirty
            && self.last_constraints == Some((root, constraints.0, constraints.1));
        if clean {
            trace!(target: "flexline::algo", "layout skipped: {root:?} clean");
            return;
        }
        self.perf_nodes_laid_out_last = 0;
        crate::algo::compute_root_layout(self, root, constraints.0, constraints.1);
        self.last_constraints = Some((root, constraints.0, constraints.1));
        self.perf_layout_passes += 1;
    }

    // ---- dirty & cache engine -------------------------------------------

    /// Mark a node dirty and propagate to the root, clearing the intrinsic
    /// and baseline caches along the walk. Stops at the first node already
    /// dirty (its ancestors are dirty by induction).
    pub(crate) fn mark_dirty_internal(&mut self, start: NodeId) {
        let mut current = Some(start);
        while let Some(id) = current {
            let node = self.node_mut(id);
            if node.is_dirty {
                break;
            }
            node.is_dirty = true;
            node.intrinsic.clear();
            node.cached_baseline = None;
            node.layout.first_baseline = None;
            node.layout.last_baseline = None;
            current = node.parent;
        }
        trace!(target: "flexline::dirty", "marked {start:?} dirty");
    }

    /// Clear cached intrinsic sizes from `start` to the root without
    /// touching dirty flags.
    pub(crate) fn invalidate_intrinsic_size(&mut self, start: NodeId) {
        let mut current = Some(start);
        while let Some(id) = current {
            let node = self.node_mut(id);
            node.intrinsic.clear();
            current = node.parent;
        }
    }

    /// Clear cached baselines from `start` to the root without touching
    /// dirty flags.
    pub(crate) fn invalidate_baseline(&mut self, start: NodeId) {
        let mut current = Some(start);
        while let Some(id) = current {
            let node = self.node_mut(id);
            node.cached_baseline = None;
            node.layout.first_baseline = None;
            node.layout.last_baseline = None;
            current = node.parent;
        }
    }

    // ---- telemetry ------------------------------------------------------

    /// Total completed layout passes.
    pub fn perf_layout_passes(&self) -> u64 {
        self.perf_layout_passes
    }

    /// Nodes laid out by the last pass.
    pub fn perf_nodes_laid_out_last(&self) -> u64 {
        self.perf_nodes_laid_out_last
    }

    /// Intrinsic-size cache hits across the tree's lifetime.
    pub fn perf_measure_cache_hits(&self) -> u64 {
        self.perf_measure_cache_hits
    }

    pub fn perf_measure_cache_misses(&self) -> u64 {
        self.perf_measure_cache_misses
    }

    pub(crate) fn count_node_laid_out(&mut self) {
        self.perf_nodes_laid_out_last += 1;
    }

    pub(crate) fn count_measure_cache(&mut self, hit: bool) {
        if hit {
            self.perf_measure_cache_hits += 1;
        } else {
            self.perf_measure_cache_misses += 1;
        }
    }
}

/// NaN and infinities mean "no constraint".
fn sanitize_constraint(value: f32) -> Option<f32> {
    value.is_finite().then_some(value)
}

fn non_negative(property: &'static str, value: f32) -> Result<f32> {
    if !value.is_finite() {
        return Err(LayoutError::InvalidValue {
            property,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(LayoutError::InvalidValue {
            property,
            reason: "must be non-negative",
        });
    }
    Ok(value)
}

fn finite_value(property: &'static str, value: Value) -> Result<Value> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LayoutError::InvalidValue {
            property,
            reason: "must be finite",
        })
    }
}

fn size_value(property: &'static str, value: Value) -> Result<Value> {
    let value = finite_value(property, value)?;
    if value == Value::Content {
        return Err(LayoutError::InvalidValue {
            property,
            reason: "`content` only applies to flex-basis",
        });
    }
    Ok(value)
}
