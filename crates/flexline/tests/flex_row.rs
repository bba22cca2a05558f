//! Single-line row layout: growing, justification, ordering, reversal.

use flexline::{Direction, FlexDirection, JustifyContent, LayoutTree, NodeId, Value};

const EPSILON: f32 = 0.01;

fn assert_rect(tree: &LayoutTree, node: NodeId, x: f32, y: f32, width: f32, height: f32) {
    let rect = tree.layout(node).rect;
    assert!(
        (rect.x - x).abs() < EPSILON
            && (rect.y - y).abs() < EPSILON
            && (rect.width - width).abs() < EPSILON
            && (rect.height - height).abs() < EPSILON,
        "expected ({x},{y}) {width}x{height}, got ({},{}) {}x{}",
        rect.x,
        rect.y,
        rect.width,
        rect.height,
    );
}

#[test]
fn grow_distributes_free_space_and_stretches_cross() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_width(root, Value::Points(300.0)).unwrap();
    tree.set_height(root, Value::Points(200.0)).unwrap();
    let a = tree.new_node();
    tree.set_width(a, Value::Points(50.0)).unwrap();
    tree.set_flex_grow(a, 1.0).unwrap();
    let b = tree.new_node();
    tree.set_width(b, Value::Points(50.0)).unwrap();
    tree.set_flex_grow(b, 2.0).unwrap();
    tree.append_child(root, a).unwrap();
    tree.append_child(root, b).unwrap();

    tree.calculate_layout(root, 300.0, 200.0);

    // 200 free over grow factors 1:2; auto heights stretch to the line.
    assert_rect(&tree, a, 0.0, 0.0, 116.667, 200.0);
    assert_rect(&tree, b, 116.667, 0.0, 183.333, 200.0);
}

#[test]
fn space_between_inside_padding() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.style(
        root,
        &[
            ("width", 300.0.into()),
            ("height", 200.0.into()),
            ("padding", 10.0.into()),
            ("justifyContent", "space-between".into()),
        ],
    )
    .unwrap();
    let children: Vec<NodeId> = (0..3)
        .map(|_| {
            let child = tree.new_node_with(&[("width", 40.0.into()), ("height", 40.0.into())]);
            tree.append_child(root, child).unwrap();
            child
        })
        .collect();

    tree.calculate_layout(root, 300.0, 200.0);

    // Content box is 280 wide: 160 free over two 80px gaps.
    assert_rect(&tree, children[0], 10.0, 10.0, 40.0, 40.0);
    assert_rect(&tree, children[1], 130.0, 10.0, 40.0, 40.0);
    assert_rect(&tree, children[2], 250.0, 10.0, 40.0, 40.0);
}

#[test]
fn order_reorders_visually_but_not_structurally() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_width(root, Value::Points(300.0)).unwrap();
    tree.set_height(root, Value::Points(100.0)).unwrap();
    let a = tree.new_node_with(&[("width", 100.0.into()), ("height", 50.0.into())]);
    let b = tree.new_node_with(&[("width", 100.0.into()), ("height", 50.0.into())]);
    let c = tree.new_node_with(&[("width", 100.0.into()), ("height", 50.0.into())]);
    tree.set_order(a, 2.0).unwrap();
    tree.set_order(b, 1.0).unwrap();
    tree.set_order(c, 0.0).unwrap();
    tree.append_child(root, a).unwrap();
    tree.append_child(root, b).unwrap();
    tree.append_child(root, c).unwrap();

    tree.calculate_layout(root, 300.0, 100.0);

    assert!((tree.computed_left(c) - 0.0).abs() < EPSILON);
    assert!((tree.computed_left(b) - 100.0).abs() < EPSILON);
    assert!((tree.computed_left(a) - 200.0).abs() < EPSILON);
    // Iteration still yields insertion order.
    assert_eq!(tree.child_at(root, 0), Some(a));
    assert_eq!(tree.child_at(root, 1), Some(b));
    assert_eq!(tree.child_at(root, 2), Some(c));
}

#[test]
fn equal_orders_preserve_insertion_order() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_width(root, Value::Points(300.0)).unwrap();
    tree.set_height(root, Value::Points(100.0)).unwrap();
    let mut children = Vec::new();
    for _ in 0..3 {
        let child = tree.new_node_with(&[("width", 50.0.into()), ("height", 50.0.into())]);
        tree.set_order(child, 5.0).unwrap();
        tree.append_child(root, child).unwrap();
        children.push(child);
    }

    tree.calculate_layout(root, 300.0, 100.0);

    assert!((tree.computed_left(children[0]) - 0.0).abs() < EPSILON);
    assert!((tree.computed_left(children[1]) - 50.0).abs() < EPSILON);
    assert!((tree.computed_left(children[2]) - 100.0).abs() < EPSILON);
}

#[test]
fn row_reverse_mirrors_main_positions() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_width(root, Value::Points(200.0)).unwrap();
    tree.set_height(root, Value::Points(100.0)).unwrap();
    tree.set_flex_direction(root, FlexDirection::RowReverse);
    let a = tree.new_node_with(&[("width", 60.0.into()), ("height", 20.0.into())]);
    let b = tree.new_node_with(&[("width", 40.0.into()), ("height", 20.0.into())]);
    tree.append_child(root, a).unwrap();
    tree.append_child(root, b).unwrap();

    tree.calculate_layout(root, 200.0, 100.0);

    // The logically first item lands flush with the right edge.
    assert!((tree.computed_left(a) - 140.0).abs() < EPSILON);
    assert!((tree.computed_left(b) - 100.0).abs() < EPSILON);
}

#[test]
fn rtl_reverses_row_like_row_reverse() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_width(root, Value::Points(200.0)).unwrap();
    tree.set_height(root, Value::Points(100.0)).unwrap();
    tree.set_direction(root, Direction::Rtl);
    let a = tree.new_node_with(&[("width", 60.0.into()), ("height", 20.0.into())]);
    let b = tree.new_node_with(&[("width", 40.0.into()), ("height", 20.0.into())]);
    tree.append_child(root, a).unwrap();
    tree.append_child(root, b).unwrap();

    tree.calculate_layout(root, 200.0, 100.0);

    assert!((tree.computed_left(a) - 140.0).abs() < EPSILON);
    assert!((tree.computed_left(b) - 100.0).abs() < EPSILON);
}

#[test]
fn center_and_end_justify_single_item() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_width(root, Value::Points(200.0)).unwrap();
    tree.set_height(root, Value::Points(100.0)).unwrap();
    tree.set_justify_content(root, JustifyContent::Center);
    let child = tree.new_node_with(&[("width", 50.0.into()), ("height", 50.0.into())]);
    tree.append_child(root, child).unwrap();

    tree.calculate_layout(root, 200.0, 100.0);
    assert!((tree.computed_left(child) - 75.0).abs() < EPSILON);

    tree.set_justify_content(root, JustifyContent::FlexEnd);
    tree.calculate_layout(root, 200.0, 100.0);
    assert!((tree.computed_left(child) - 150.0).abs() < EPSILON);

    // The Box Alignment `end` keyword resolves to flex-end here.
    tree.set_justify_content(root, JustifyContent::End);
    tree.calculate_layout(root, 200.0, 100.0);
    assert!((tree.computed_left(child) - 150.0).abs() < EPSILON);
}

#[test]
fn auto_main_margins_center_an_item() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_width(root, Value::Points(200.0)).unwrap();
    tree.set_height(root, Value::Points(100.0)).unwrap();
    let child = tree.new_node_with(&[("width", 50.0.into()), ("height", 50.0.into())]);
    tree.set_margin(child, flexline::Edge::Left, Value::Auto)
        .unwrap();
    tree.set_margin(child, flexline::Edge::Right, Value::Auto)
        .unwrap();
    tree.append_child(root, child).unwrap();

    tree.calculate_layout(root, 200.0, 100.0);
    // 150 free split over two auto margins.
    assert!((tree.computed_left(child) - 75.0).abs() < EPSILON);
}

#[test]
fn column_direction_stacks_vertically() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_width(root, Value::Points(100.0)).unwrap();
    tree.set_height(root, Value::Points(300.0)).unwrap();
    tree.set_flex_direction(root, FlexDirection::Column);
    let a = tree.new_node_with(&[("width", 40.0.into()), ("height", 60.0.into())]);
    let b = tree.new_node_with(&[("height", 80.0.into())]);
    tree.append_child(root, a).unwrap();
    tree.append_child(root, b).unwrap();

    tree.calculate_layout(root, 100.0, 300.0);

    assert_rect(&tree, a, 0.0, 0.0, 40.0, 60.0);
    // The second item has no width: it stretches across the column.
    assert_rect(&tree, b, 0.0, 60.0, 100.0, 80.0);
}
