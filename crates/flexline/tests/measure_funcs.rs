//! Measurement callbacks: intrinsic sizing of leaves, available-size
//! substitution, caching, and output clamping.

use flexline::{LayoutTree, Value};
use std::cell::RefCell;
use std::rc::Rc;

const EPSILON: f32 = 0.01;

#[test]
fn leaf_measurement_drives_auto_sizing() {
    let mut tree = LayoutTree::new();
    let root = tree.new_node();
    let leaf = tree.new_node();
    tree.set_measure_func(leaf, Some(Box::new(|_, _, _| (120.0, 30.0))));
    tree.append_child(root, leaf).unwrap();

    // Fully unconstrained: the root shrink-wraps its content.
    tree.calculate_layout(root, f32::NAN, f32::NAN);

    assert!((tree.computed_width(root) - 120.0).abs() < EPSILON);
    assert!((tree.computed_height(root) - 30.0).abs() < EPSILON);
    assert!((tree.computed_width(leaf) - 120.0).abs() < EPSILON);
    assert!((tree.computed_height(leaf) - 30.0).abs() < EPSILON);
}

#[test]
fn indefinite_axes_arrive_as_infinity() {
    let mut tree = LayoutTree::new();
    let seen: Rc<RefCell<Vec<(f32, f32)>>> = Rc::new(RefCell::new(Vec::new()));
    let recorder = Rc::clone(&seen);
    let leaf = tree.new_node();
    tree.set_measure_func(
        leaf,
        Some(Box::new(move |_, avail_width, avail_height| {
            recorder.borrow_mut().push((avail_width, avail_height));
            (40.0, 10.0)
        })),
    );

    tree.calculate_layout(leaf, f32::NAN, f32::NAN);

    let calls = seen.borrow();
    assert!(!calls.is_empty());
    for (avail_width, avail_height) in calls.iter() {
        assert!(avail_width.is_infinite());
        assert!(avail_height.is_infinite());
    }
}

#[test]
fn definite_axes_pass_the_inner_available_size() {
    let mut tree = LayoutTree::new();
    let seen: Rc<RefCell<Vec<(f32, f32)>>> = Rc::new(RefCell::new(Vec::new()));
    let recorder = Rc::clone(&seen);
    let root = tree.new_node_with(&[
        ("width", 300.0.into()),
        ("height", 200.0.into()),
        ("padding", 10.0.into()),
    ]);
    let leaf = tree.new_node();
    tree.set_measure_func(
        leaf,
        Some(Box::new(move |_, avail_width, avail_height| {
            recorder.borrow_mut().push((avail_width, avail_height));
            (40.0, 10.0)
        })),
    );
    tree.append_child(root, leaf).unwrap();

    tree.calculate_layout(root, 300.0, 200.0);

    let calls = seen.borrow();
    assert!(!calls.is_empty());
    for (avail_width, avail_height) in calls.iter() {
        assert!((avail_width - 280.0).abs() < EPSILON);
        assert!((avail_height - 180.0).abs() < EPSILON);
    }
}

#[test]
fn measurement_is_cached_between_layout_passes() {
    let mut tree = LayoutTree::new();
    let calls = Rc::new(RefCell::new(0u32));
    let counter = Rc::clone(&calls);
    let root = tree.new_node_with(&[("width", 300.0.into()), ("height", 200.0.into())]);
    let leaf = tree.new_node();
    tree.set_measure_func(
        leaf,
        Some(Box::new(move |_, _, _| {
            *counter.borrow_mut() += 1;
            (40.0, 10.0)
        })),
    );
    tree.append_child(root, leaf).unwrap();

    tree.calculate_layout(root, 300.0, 200.0);
    let after_first = *calls.borrow();
    assert!(after_first >= 1);

    // A style change elsewhere reflows, but the leaf's cached intrinsic
    // size survives (the dirty trail runs leaf-to-root, not downward).
    tree.set_justify_content(root, flexline::JustifyContent::Center);
    tree.calculate_layout(root, 300.0, 200.0);
    assert_eq!(*calls.borrow(), after_first);
    assert!(tree.perf_measure_cache_hits() > 0);
}

#[test]
fn callback_outputs_are_clamped() {
    let mut tree = LayoutTree::new();
    let leaf = tree.new_node();
    tree.set_measure_func(leaf, Some(Box::new(|_, _, _| (-5.0, f32::NAN))));

    tree.calculate_layout(leaf, f32::NAN, f32::NAN);

    assert!((tree.computed_width(leaf) - 0.0).abs() < EPSILON);
    assert!((tree.computed_height(leaf) - 0.0).abs() < EPSILON);
}
