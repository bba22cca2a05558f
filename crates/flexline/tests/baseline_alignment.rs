//! Baseline alignment within a line, and the container baseline getters.

use flexline::{AlignItems, LayoutTree, NodeId, Value};

const EPSILON: f32 = 0.01;

fn baseline_row(tree: &mut LayoutTree) -> NodeId {
    let root = tree.new_node();
    tree.set_width(root, Value::Points(300.0)).unwrap();
    tree.set_height(root, Value::Points(60.0)).unwrap();
    tree.set_align_items(root, AlignItems::Baseline);
    root
}

fn text_like(tree: &mut LayoutTree, width: f32, height: f32) -> NodeId {
    let child = tree.new_node();
    tree.set_measure_func(child, Some(Box::new(move |_, _, _| (width, height))));
    tree.set_baseline_func(child, Some(Box::new(|_, _, height| height * 0.8)));
    child
}

#[test]
fn items_align_on_the_deepest_baseline() {
    let mut tree = LayoutTree::new();
    let root = baseline_row(&mut tree);
    let short = text_like(&mut tree, 40.0, 12.0);
    let tall = text_like(&mut tree, 60.0, 24.0);
    tree.append_child(root, short).unwrap();
    tree.append_child(root, tall).unwrap();

    tree.calculate_layout(root, 300.0, 60.0);

    // Baselines: 9.6 and 19.2 from each item's top; both land at 19.2.
    assert!((tree.computed_top(short) - 9.6).abs() < EPSILON);
    assert!((tree.computed_top(tall) - 0.0).abs() < EPSILON);
    // Sizes are untouched by baseline alignment.
    assert!((tree.computed_width(short) - 40.0).abs() < EPSILON);
    assert!((tree.computed_height(short) - 12.0).abs() < EPSILON);
    assert!((tree.computed_width(tall) - 60.0).abs() < EPSILON);
    assert!((tree.computed_height(tall) - 24.0).abs() < EPSILON);
    // Main positions pack normally.
    assert!((tree.computed_left(short) - 0.0).abs() < EPSILON);
    assert!((tree.computed_left(tall) - 40.0).abs() < EPSILON);
}

#[test]
fn default_baseline_is_the_content_bottom() {
    let mut tree = LayoutTree::new();
    let root = baseline_row(&mut tree);
    let short = tree.new_node_with(&[("width", 40.0.into()), ("height", 12.0.into())]);
    let tall = tree.new_node_with(&[("width", 60.0.into()), ("height", 24.0.into())]);
    tree.append_child(root, short).unwrap();
    tree.append_child(root, tall).unwrap();

    tree.calculate_layout(root, 300.0, 60.0);

    // Without a baseline callback the box bottom is the baseline.
    assert!((tree.computed_top(short) - 12.0).abs() < EPSILON);
    assert!((tree.computed_top(tall) - 0.0).abs() < EPSILON);
}

#[test]
fn margins_shift_the_baseline_group() {
    let mut tree = LayoutTree::new();
    let root = baseline_row(&mut tree);
    let margined = tree.new_node_with(&[
        ("width", 40.0.into()),
        ("height", 12.0.into()),
        ("marginTop", 10.0.into()),
    ]);
    let plain = tree.new_node_with(&[("width", 60.0.into()), ("height", 24.0.into())]);
    tree.append_child(root, margined).unwrap();
    tree.append_child(root, plain).unwrap();

    tree.calculate_layout(root, 300.0, 60.0);

    // Baseline distances from the margin-box top: 22 and 24.
    assert!((tree.computed_top(margined) - 12.0).abs() < EPSILON);
    assert!((tree.computed_top(plain) - 0.0).abs() < EPSILON);
}

#[test]
fn container_reports_first_and_last_baselines() {
    let mut tree = LayoutTree::new();
    let root = baseline_row(&mut tree);
    let short = text_like(&mut tree, 40.0, 12.0);
    let tall = text_like(&mut tree, 60.0, 24.0);
    tree.append_child(root, short).unwrap();
    tree.append_child(root, tall).unwrap();

    tree.calculate_layout(root, 300.0, 60.0);

    // Both items share the aligned baseline at 19.2.
    assert!((tree.get_first_baseline(root) - 19.2).abs() < EPSILON);
    assert!((tree.get_last_baseline(root) - 19.2).abs() < EPSILON);
}

#[test]
fn leaf_baseline_prefers_the_callback() {
    let mut tree = LayoutTree::new();
    let leaf = tree.new_node_with(&[("width", 50.0.into()), ("height", 20.0.into())]);
    tree.set_baseline_func(leaf, Some(Box::new(|_, _, height| height * 0.75)));
    tree.calculate_layout(leaf, 100.0, 100.0);

    assert!((tree.get_baseline(leaf) - 15.0).abs() < EPSILON);
}

#[test]
fn baseline_degrades_to_flex_start_in_columns() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node_with(&[
        ("width", 100.0.into()),
        ("height", 200.0.into()),
        ("flexDirection", "column".into()),
        ("alignItems", "baseline".into()),
    ]);
    let child = tree.new_node_with(&[("width", 40.0.into()), ("height", 30.0.into())]);
    tree.append_child(root, child).unwrap();

    tree.calculate_layout(root, 100.0, 200.0);

    // No vertical text baseline on a horizontal cross axis: items pack at
    // the cross start.
    assert!((tree.computed_left(child) - 0.0).abs() < EPSILON);
}

#[test]
fn baseline_items_set_line_height_from_group_extent() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    tree.set_width(root, Value::Points(300.0)).unwrap();
    tree.set_align_items(root, AlignItems::Baseline);
    tree.set_flex_wrap(root, flexline::FlexWrap::Wrap);
    tree.set_height(root, Value::Points(100.0)).unwrap();
    let a = text_like(&mut tree, 40.0, 12.0);
    let b = text_like(&mut tree, 60.0, 24.0);
    tree.append_child(root, a).unwrap();
    tree.append_child(root, b).unwrap();

    tree.calculate_layout(root, 300.0, 100.0);

    // The line must hold B (19.2) plus the deepest below-baseline part
    // (4.8): baseline-aligned tops still fit inside it.
    assert!((tree.computed_top(a) - 9.6).abs() < EPSILON);
    assert!((tree.computed_top(b) - 0.0).abs() < EPSILON);
}
