//! `display: none` removes a subtree from layout without detaching it.

use flexline::{Display, LayoutTree};

const EPSILON: f32 = 0.01;

#[test]
fn hidden_items_take_no_space_and_zero_out() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node_with(&[("width", 200.0.into()), ("height", 100.0.into())]);
    let first = tree.new_node_with(&[("width", 50.0.into()), ("height", 50.0.into())]);
    let hidden = tree.new_node_with(&[("width", 50.0.into()), ("height", 50.0.into())]);
    let hidden_child = tree.new_node_with(&[("width", 10.0.into()), ("height", 10.0.into())]);
    let last = tree.new_node_with(&[("width", 50.0.into()), ("height", 50.0.into())]);
    tree.set_display(hidden, Display::None);
    tree.append_child(root, first).unwrap();
    tree.append_child(root, hidden).unwrap();
    tree.append_child(hidden, hidden_child).unwrap();
    tree.append_child(root, last).unwrap();

    tree.calculate_layout(root, 200.0, 100.0);

    // The hidden item leaves no gap between its siblings.
    assert!((tree.computed_left(first) - 0.0).abs() < EPSILON);
    assert!((tree.computed_left(last) - 50.0).abs() < EPSILON);
    // The hidden subtree collapses to zero and counts as resolved.
    assert!((tree.computed_width(hidden) - 0.0).abs() < EPSILON);
    assert!((tree.computed_width(hidden_child) - 0.0).abs() < EPSILON);
    assert!(!tree.is_dirty(hidden));
    assert!(!tree.is_dirty(hidden_child));
    // Structure is untouched.
    assert_eq!(tree.child_count(root), 3);
}

#[test]
fn toggling_display_restores_the_item() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node_with(&[("width", 200.0.into()), ("height", 100.0.into())]);
    let item = tree.new_node_with(&[("width", 50.0.into()), ("height", 50.0.into())]);
    tree.set_display(item, Display::None);
    tree.append_child(root, item).unwrap();

    tree.calculate_layout(root, 200.0, 100.0);
    assert!((tree.computed_width(item) - 0.0).abs() < EPSILON);

    tree.set_display(item, Display::Flex);
    tree.calculate_layout(root, 200.0, 100.0);
    assert!((tree.computed_width(item) - 50.0).abs() < EPSILON);
}

#[test]
fn hidden_root_zeroes_everything() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node_with(&[("width", 200.0.into()), ("height", 100.0.into())]);
    let child = tree.new_node_with(&[("width", 50.0.into()), ("height", 50.0.into())]);
    tree.append_child(root, child).unwrap();
    tree.set_display(root, Display::None);

    tree.calculate_layout(root, 200.0, 100.0);

    assert!((tree.computed_width(root) - 0.0).abs() < EPSILON);
    assert!((tree.computed_width(child) - 0.0).abs() < EPSILON);
}
