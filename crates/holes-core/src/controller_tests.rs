use super::*;
use crate::Edge;
use crate::geometry::Rejection;
use crate::testing::{FakeDockClient, FakeWindow};
use crate::window::WindowResult;

type TestController = StripController<FakeDockClient, FakeWindow, Vec<Rect>>;

const TOP_STRIP: Rect = Rect {
    x: 0,
    y: 0,
    width: 1920,
    height: 30,
};

const RIGHT_STRIP: Rect = Rect {
    x: 1850,
    y: 200,
    width: 50,
    height: 600,
};

fn monitors() -> Vec<Rect> {
    vec![Rect::new(0, 0, 1920, 1080)]
}

fn controller() -> TestController {
    StripController::new(
        FakeDockClient::new(),
        FakeWindow::default(),
        monitors(),
        DockingConfig::default(),
    )
}

/// A controller whose window raises a reposition request every time its
/// bounds are set, like the OS does for a docked bar.
fn echoing_controller() -> TestController {
    let client = FakeDockClient::new();
    let window = FakeWindow {
        echo: Some(client.notifier.clone()),
        ..Default::default()
    };
    StripController::new(client, window, monitors(), DockingConfig::default())
}

fn shell_repositions(controller: &TestController, times: usize) {
    for _ in 0..times {
        controller.client().notifier.notify();
    }
}

// -- try_set_hole --

#[test]
fn rejected_selection_has_no_side_effects() {
    // Arrange
    let mut controller = controller();

    // Act
    let result = controller.try_set_hole(Rect::new(500, 500, 200, 150));

    // Assert
    assert!(matches!(
        result,
        Err(HoleError::Rejected(Rejection::TooFarFromEdge { .. }))
    ));
    assert_eq!(controller.client().register_calls, 0);
    assert!(controller.client().negotiations.is_empty());
    assert!(controller.window().set_calls.is_empty());
    assert!(controller.dock_spec().is_none());
}

#[test]
fn accepted_selection_registers_negotiates_and_moves_window() {
    // Arrange
    let mut controller = controller();

    // Act
    let committed = controller.try_set_hole(TOP_STRIP).unwrap();

    // Assert
    assert_eq!(committed, Rect::new(0, 0, 1920, 30));
    assert!(controller.is_registered());
    assert_eq!(
        controller.client().negotiations,
        vec![(Rect::new(0, 0, 1920, 30), Edge::Top, 30)]
    );
    assert_eq!(controller.window().bounds, committed);
    assert_eq!(controller.committed_rect(), Some(committed));
    assert_eq!(controller.state(), StripState::Idle);
}

#[test]
fn desired_rect_spans_the_full_edge() {
    // Arrange
    let mut controller = controller();

    // Act
    let committed = controller.try_set_hole(RIGHT_STRIP).unwrap();

    // Assert
    assert_eq!(committed, Rect::new(1870, 0, 50, 1080));
}

#[test]
fn retargeting_reuses_registration() {
    // Arrange
    let mut controller = controller();
    controller.try_set_hole(TOP_STRIP).unwrap();

    // Act
    controller.try_set_hole(RIGHT_STRIP).unwrap();

    // Assert
    assert_eq!(controller.client().register_calls, 1);
    assert_eq!(controller.client().negotiations.len(), 2);
    assert_eq!(controller.dock_spec().unwrap().edge, Edge::Right);
}

#[test]
fn denied_registration_leaves_no_hole() {
    // Arrange
    let mut controller = controller();
    controller.client.deny_registration = true;

    // Act
    let result = controller.try_set_hole(TOP_STRIP);

    // Assert
    assert!(matches!(result, Err(HoleError::RegistrationDenied(_))));
    assert!(!controller.is_registered());
    assert!(controller.dock_spec().is_none());
    assert!(controller.window().set_calls.is_empty());
}

#[test]
fn failed_negotiation_keeps_previous_hole() {
    // Arrange
    let mut controller = controller();
    let first = controller.try_set_hole(TOP_STRIP).unwrap();
    controller.client.fail_negotiation = true;

    // Act
    let result = controller.try_set_hole(RIGHT_STRIP);

    // Assert
    assert!(matches!(result, Err(HoleError::NegotiationFailed(_))));
    assert_eq!(controller.committed_rect(), Some(first));
    assert_eq!(controller.window().bounds, first);
    assert_eq!(controller.dock_spec().unwrap().edge, Edge::Top);
    assert_eq!(controller.state(), StripState::Idle);
}

#[test]
fn undersized_or_out_of_range_selection_has_no_side_effects() {
    // Arrange
    let mut controller = controller();

    // Act
    let tiny = controller.try_set_hole(Rect::new(0, 0, 1, 100));
    let extreme = controller.try_set_hole(Rect::new(i32::MAX - 5, 0, 10, 10));

    // Assert
    assert!(matches!(
        tiny,
        Err(HoleError::Rejected(Rejection::TooSmall { .. }))
    ));
    assert_eq!(extreme, Err(HoleError::Rejected(Rejection::OutOfRange)));
    assert_eq!(controller.client().register_calls, 0);
    assert!(controller.dock_spec().is_none());
}

#[test]
fn window_failure_keeps_the_placement_the_shell_accepted() {
    // Arrange
    let mut controller = controller();
    controller.try_set_hole(TOP_STRIP).unwrap();
    controller.window.fail_set = true;

    // Act
    let result = controller.try_set_hole(RIGHT_STRIP);

    // Assert
    assert!(matches!(result, Err(HoleError::Window(_))));
    let spec = *controller.dock_spec().unwrap();
    assert_eq!(spec.edge, Edge::Right);
    assert_eq!(controller.committed_rect(), Some(spec.desired_rect()));
    assert_eq!(controller.state(), StripState::Idle);
}

#[test]
fn monitor_failure_is_reported_without_registering() {
    // Arrange
    struct NoMonitors;
    impl MonitorSource for NoMonitors {
        fn enumerate_monitors(&self) -> WindowResult<Vec<Rect>> {
            Err("display driver unavailable".into())
        }
    }
    let mut controller = StripController::new(
        FakeDockClient::new(),
        FakeWindow::default(),
        NoMonitors,
        DockingConfig::default(),
    );

    // Act
    let result = controller.try_set_hole(TOP_STRIP);

    // Assert
    assert!(matches!(result, Err(HoleError::Monitors(_))));
    assert_eq!(controller.client().register_calls, 0);
}

// -- reposition requests --

#[test]
fn reposition_request_renegotiates_last_spec() {
    // Arrange
    let mut controller = controller();
    controller.try_set_hole(TOP_STRIP).unwrap();
    shell_repositions(&controller, 1);

    // Act
    let received = controller.pump_reposition_events();

    // Assert
    assert_eq!(received, 1);
    let negotiations = &controller.client().negotiations;
    assert_eq!(negotiations.len(), 2);
    assert_eq!(negotiations[0], negotiations[1]);
}

#[test]
fn reposition_without_hole_is_ignored() {
    // Arrange
    let mut controller = controller();
    shell_repositions(&controller, 2);

    // Act
    let received = controller.pump_reposition_events();

    // Assert
    assert_eq!(received, 2);
    assert!(controller.client().negotiations.is_empty());
}

#[test]
fn own_bounds_change_does_not_trigger_second_round() {
    // Arrange
    let mut controller = echoing_controller();

    // Act
    controller.try_set_hole(TOP_STRIP).unwrap();
    let leftover = controller.pump_reposition_events();

    // Assert
    assert_eq!(leftover, 0);
    assert_eq!(controller.client().negotiations.len(), 1);
    assert_eq!(controller.window().set_calls.len(), 1);
}

#[test]
fn each_external_trigger_commits_once() {
    // Arrange
    let mut controller = echoing_controller();
    controller.try_set_hole(TOP_STRIP).unwrap();

    // Act
    shell_repositions(&controller, 1);
    controller.pump_reposition_events();
    shell_repositions(&controller, 1);
    controller.pump_reposition_events();

    // Assert
    assert_eq!(controller.client().negotiations.len(), 3);
    assert_eq!(controller.window().set_calls.len(), 3);
}

// -- resize gestures --

#[test]
fn reposition_during_gesture_is_dropped_then_one_round_on_end() {
    // Arrange
    let mut controller = controller();
    controller.try_set_hole(RIGHT_STRIP).unwrap();
    controller.on_user_resize_begin();
    controller.window.bounds = Rect::new(1800, 0, 120, 1080);

    // Act
    shell_repositions(&controller, 2);
    let received = controller.pump_reposition_events();
    let during = controller.client().negotiations.len();
    controller.on_user_resize_end().unwrap();

    // Assert
    assert_eq!(received, 2);
    assert_eq!(during, 1);
    let negotiations = &controller.client().negotiations;
    assert_eq!(negotiations.len(), 2);
    assert_eq!(
        negotiations[1],
        (Rect::new(1800, 0, 120, 1080), Edge::Right, 120)
    );
    assert_eq!(controller.state(), StripState::Idle);
}

#[test]
fn queued_requests_at_gesture_end_are_folded_into_one_round() {
    // Arrange
    let mut controller = controller();
    controller.try_set_hole(TOP_STRIP).unwrap();
    controller.handle_event(StripEvent::ResizeBegin);
    controller.window.bounds = Rect::new(0, 0, 1920, 60);
    shell_repositions(&controller, 3);

    // Act
    controller.handle_event(StripEvent::ResizeEnd);
    controller.pump_reposition_events();

    // Assert
    assert_eq!(controller.client().negotiations.len(), 2);
    assert_eq!(controller.dock_spec().unwrap().thickness, 60);
}

#[test]
fn gesture_end_clamps_thickness() {
    // Arrange
    let mut controller = controller();
    controller.try_set_hole(TOP_STRIP).unwrap();

    // Act / Assert: collapsed to nothing
    controller.on_user_resize_begin();
    controller.window.bounds = Rect::new(0, 0, 1920, 0);
    controller.on_user_resize_end().unwrap();
    assert_eq!(controller.dock_spec().unwrap().thickness, 2);

    // Act / Assert: dragged past the monitor
    controller.on_user_resize_begin();
    controller.window.bounds = Rect::new(0, 0, 1920, 4000);
    controller.on_user_resize_end().unwrap();
    assert_eq!(controller.dock_spec().unwrap().thickness, 1080);
}

#[test]
fn gesture_end_without_begin_does_nothing() {
    // Arrange
    let mut controller = controller();
    controller.try_set_hole(TOP_STRIP).unwrap();

    // Act
    controller.on_user_resize_end().unwrap();

    // Assert
    assert_eq!(controller.client().negotiations.len(), 1);
}

#[test]
fn gesture_without_hole_stays_idle() {
    // Arrange
    let mut controller = controller();

    // Act
    controller.on_user_resize_begin();

    // Assert
    assert_eq!(controller.state(), StripState::Idle);
}

#[test]
fn negotiated_depth_always_matches_thickness() {
    // Arrange
    let mut controller = controller();
    controller.try_set_hole(TOP_STRIP).unwrap();
    controller.try_set_hole(RIGHT_STRIP).unwrap();
    controller.on_user_resize_begin();
    controller.window.bounds = Rect::new(1700, 0, 220, 1080);
    controller.on_user_resize_end().unwrap();

    // Assert
    for (desired, edge, thickness) in &controller.client().negotiations {
        assert_eq!(geometry::depth_of(*edge, desired), *thickness);
    }
}

// -- dispose / close --

#[test]
fn dispose_is_idempotent() {
    // Arrange
    let mut controller = controller();
    controller.try_set_hole(TOP_STRIP).unwrap();

    // Act
    controller.dispose();
    controller.dispose();

    // Assert
    assert_eq!(controller.client().unregister_calls, 1);
    assert!(!controller.is_registered());
    assert!(controller.committed_rect().is_none());
}

#[test]
fn dispose_hides_the_window() {
    // Arrange
    let mut controller = controller();
    controller.try_set_hole(TOP_STRIP).unwrap();
    controller.window().show();

    // Act
    controller.dispose();

    // Assert
    assert!(!controller.window().visible.get());
}

#[test]
fn dispose_without_hole_is_safe() {
    // Arrange
    let mut controller = controller();

    // Act
    controller.dispose();

    // Assert
    assert_eq!(controller.client().unregister_calls, 0);
}

#[test]
fn reposition_after_dispose_is_ignored() {
    // Arrange
    let mut controller = controller();
    controller.try_set_hole(TOP_STRIP).unwrap();
    controller.dispose();
    shell_repositions(&controller, 1);

    // Act
    controller.pump_reposition_events();

    // Assert
    assert_eq!(controller.client().negotiations.len(), 1);
}

#[test]
fn closed_event_releases_reservation() {
    // Arrange
    let mut controller = controller();
    controller.try_set_hole(TOP_STRIP).unwrap();

    // Act
    let status = controller.handle_event(StripEvent::Closed);

    // Assert
    assert_eq!(status, HoleStatus::Closed);
    assert!(!controller.is_registered());
}

#[test]
fn hole_can_be_set_again_after_dispose() {
    // Arrange
    let mut controller = controller();
    controller.try_set_hole(TOP_STRIP).unwrap();
    controller.dispose();

    // Act
    let committed = controller.try_set_hole(TOP_STRIP).unwrap();

    // Assert
    assert_eq!(committed, Rect::new(0, 0, 1920, 30));
    assert_eq!(controller.client().register_calls, 2);
}
