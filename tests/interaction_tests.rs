use graphview::interaction::{GestureAction, GestureClassifier, GestureEvent};

#[test]
fn non_scrollable_charts_ignore_every_event() {
    let mut classifier = GestureClassifier::new();
    assert_eq!(classifier.classify(GestureEvent::begin(), false, false), None);
    assert_eq!(classifier.classify(GestureEvent::pan(10.0), false, false), None);
    assert_eq!(classifier.classify(GestureEvent::pinch(2.0), false, true), None);
}

#[test]
fn drag_sequences_classify_as_pans() {
    let mut classifier = GestureClassifier::new();
    assert_eq!(classifier.classify(GestureEvent::begin(), true, false), None);
    assert_eq!(
        classifier.classify(GestureEvent::pan(12.0), true, false),
        Some(GestureAction::Pan(12.0))
    );
    assert_eq!(
        classifier.classify(GestureEvent::pan(-4.0), true, false),
        Some(GestureAction::Pan(-4.0))
    );
    assert_eq!(classifier.classify(GestureEvent::end(), true, false), None);
}

#[test]
fn pinch_classifies_as_zoom_when_scalable() {
    let mut classifier = GestureClassifier::new();
    assert_eq!(
        classifier.classify(GestureEvent::pinch(1.5), true, true),
        Some(GestureAction::Zoom(1.5))
    );
}

#[test]
fn scaling_suppresses_pans_for_the_rest_of_the_sequence() {
    let mut classifier = GestureClassifier::new();
    classifier.classify(GestureEvent::begin(), true, true);
    assert_eq!(
        classifier.classify(GestureEvent::pinch(2.0), true, true),
        Some(GestureAction::Zoom(2.0))
    );
    // residual finger movement in the same sequence must not pan
    assert_eq!(classifier.classify(GestureEvent::pan(30.0), true, true), None);

    // a new sequence pans again
    classifier.classify(GestureEvent::end(), true, true);
    assert_eq!(
        classifier.classify(GestureEvent::pan(30.0), true, true),
        Some(GestureAction::Pan(30.0))
    );
}

#[test]
fn pinch_on_a_scroll_only_chart_degrades_to_a_pan() {
    let mut classifier = GestureClassifier::new();
    assert_eq!(
        classifier.classify(GestureEvent::pinch(2.0), true, false),
        Some(GestureAction::Pan(0.0))
    );
}
