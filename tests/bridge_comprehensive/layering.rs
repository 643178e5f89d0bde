//! Wrapper stacking and inner-layer substitution

use layerdesc::{Describe, InnerLayer, LayerError, LayerFormat, Result, WrapperLayer};
use std::cell::RefCell;

/// Inner layer whose answer is scripted per call
struct Scripted {
    answers: RefCell<Vec<Result<String>>>,
}

impl Scripted {
    fn new(mut answers: Vec<Result<String>>) -> Self {
        answers.reverse();
        Self {
            answers: RefCell::new(answers),
        }
    }
}

impl Describe for Scripted {
    fn describe(&self) -> Result<String> {
        self.answers
            .borrow_mut()
            .pop()
            .unwrap_or_else(|| Err(LayerError::inner("script exhausted")))
    }
}

#[test]
fn objc_and_swift_scenario() {
    let wrapper = WrapperLayer::with_inner("objc-layer", InnerLayer::new("swift-layer"));
    let text = wrapper.describe().unwrap();
    assert!(text.contains("objc-layer"));
    assert!(text.contains("swift-layer"));
}

#[test]
fn failure_then_recovery_of_inner_layer() {
    let wrapper = WrapperLayer::with_inner(
        "objc-layer",
        Scripted::new(vec![
            Err(LayerError::inner("not loaded")),
            Ok("swift-layer".to_string()),
        ]),
    );

    assert_eq!(wrapper.describe(), Err(LayerError::inner("not loaded")));
    assert_eq!(wrapper.self_description(), "objc-layer");

    let text = wrapper.describe().unwrap();
    assert!(text.contains("swift-layer"));
}

#[test]
fn inner_portion_stable_across_outer_edits() {
    let mut wrapper = WrapperLayer::new();
    let format = LayerFormat::default();

    let before = wrapper.describe().unwrap();
    wrapper.set_self_description("This is iOS App code");
    let after = wrapper.describe().unwrap();

    assert_ne!(before, after);
    assert_eq!(
        &before[format.outer_len("objc-layer")..],
        &after[format.outer_len("This is iOS App code")..]
    );
}

#[test]
fn stacked_layers_report_every_level() {
    let layers = ["app", "shared", "bridge"];
    let mut current: Box<dyn Describe> = Box::new(InnerLayer::new("package"));
    for name in layers.iter().rev() {
        current = Box::new(WrapperLayer::with_inner(*name, current));
    }

    let text = current.describe().unwrap();
    let positions: Vec<usize> = ["app", "shared", "bridge", "package"]
        .iter()
        .map(|name| text.find(name).unwrap())
        .collect();

    let mut sorted = positions.clone();
    sorted.sort_unstable();
    assert_eq!(positions, sorted);
}
