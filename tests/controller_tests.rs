// Host-side end-to-end tests for the room state machine, driven through
// recording stand-ins for the DOM.

use seatview_core::*;
use std::collections::HashMap;

#[derive(Default)]
struct RecordingSurface {
    transforms: Vec<String>,
    transitions: Vec<String>,
    no_transitions: bool,
}

impl RoomSurface for RecordingSurface {
    fn set_transform(&mut self, css: &str) {
        self.transforms.push(css.to_string());
    }
    fn set_transition(&mut self, css: &str) {
        self.transitions.push(css.to_string());
    }
    fn supports_transitions(&self) -> bool {
        !self.no_transitions
    }
}

#[derive(Default)]
struct RecordingVisuals {
    flags: HashMap<Flag, bool>,
}

impl RecordingVisuals {
    fn is(&self, flag: Flag) -> bool {
        self.flags.get(&flag).copied().unwrap_or(false)
    }
}

impl ClassToggle for RecordingVisuals {
    fn set(&mut self, flag: Flag, on: bool) {
        self.flags.insert(flag, on);
    }
}

type TestController = Controller<RecordingSurface, RecordingVisuals>;

const SEATS_PER_ROW: usize = 16;
const RESERVED: usize = 3;

fn make_controller(surface: RecordingSurface) -> TestController {
    let mut rows: Vec<Option<RowPose>> = (0..4)
        .map(|i| {
            Some(RowPose {
                translate_y: 900.0 - 20.0 * i as f32,
                translate_z: 2200.0 - 100.0 * i as f32,
            })
        })
        .collect();
    // last row rendered without a transform
    rows[3] = None;
    let geometry = RoomGeometry::new(RoomMeasurements {
        seat_width: 50.0,
        seats_per_row: SEATS_PER_ROW as u32,
        rows,
    })
    .unwrap();

    let seats = (0..4 * SEATS_PER_ROW)
        .map(|index| Seat {
            index,
            row_index: index / SEATS_PER_ROW,
            metrics: SeatMetrics {
                offset_left: 50.0 * (index % SEATS_PER_ROW) as f32,
                width: 50.0,
                height: 40.0,
            },
            state: if index == RESERVED {
                SeatState::Reserved
            } else {
                SeatState::Available
            },
        })
        .collect();

    let mut c = Controller::new(
        surface,
        RecordingVisuals::default(),
        geometry,
        seats,
        Viewport {
            width: 1100.0,
            height: 800.0,
        },
    );
    c.start();
    c
}

fn plan_shown() -> TestController {
    let mut c = make_controller(RecordingSurface::default());
    assert!(c.select_seats());
    c.transition_ended(true);
    c
}

#[test]
fn start_shows_intro_pose_and_reserved_seats() {
    let c = make_controller(RecordingSurface::default());
    assert_eq!(c.mode(), Mode::Intro);
    assert_eq!(c.camera().current(), TransformState::INTRO);
    assert_eq!(c.camera().surface().transforms.len(), 1);
    assert!(c.visuals().is(Flag::SeatReserved(RESERVED)));
    assert!(!c.visuals().is(Flag::SeatReserved(0)));
    assert!(c.visuals().is(Flag::TiltDisabled));
}

#[test]
fn seats_and_tilt_are_inert_during_intro() {
    let mut c = make_controller(RecordingSurface::default());
    assert_eq!(c.select_seat(0), SeatOutcome::Ignored);
    assert!(!c.toggle_tilt());
    assert!(!c.pointer_moved(PointerPos { x: 1.0, y: 1.0 }));
    assert_eq!(c.camera().surface().transforms.len(), 1);
}

#[test]
fn select_seats_zooms_out_then_reveals_tilt() {
    let mut c = make_controller(RecordingSurface::default());
    assert!(c.select_seats());
    assert_eq!(c.mode(), Mode::PlanShown);
    assert!(!c.visuals().is(Flag::IntroShown));
    assert!(c.visuals().is(Flag::PlanShown));
    assert!(c.visuals().is(Flag::PlayFaded));
    assert_eq!(c.camera().current(), c.geometry().init_transform());
    assert_eq!(
        c.camera().surface().transitions.last().unwrap(),
        "transform 1500ms ease"
    );
    assert!(!c.visuals().is(Flag::TiltShown));

    // a descendant's transition does not count
    c.transition_ended(false);
    assert!(!c.visuals().is(Flag::TiltShown));

    c.transition_ended(true);
    assert!(c.visuals().is(Flag::TiltShown));
    assert_eq!(c.camera().surface().transitions.last().unwrap(), "none");
    assert!(c.camera().transition().is_none());

    assert!(!c.select_seats());
}

#[test]
fn without_transitions_the_flow_completes_synchronously() {
    let mut c = make_controller(RecordingSurface {
        no_transitions: true,
        ..Default::default()
    });
    c.select_seats();
    assert!(c.visuals().is(Flag::TiltShown));
    assert!(!c.camera().has_pending());

    c.select_seat(0);
    assert!(c.camera().transition().is_none());
}

#[test]
fn reserved_seat_is_a_no_op() {
    let mut c = plan_shown();
    let before = c.camera().current();
    let applied = c.camera().surface().transforms.len();

    assert_eq!(c.select_seat(RESERVED), SeatOutcome::Ignored);
    assert_eq!(c.camera().current(), before);
    assert_eq!(c.camera().surface().transforms.len(), applied);
    assert!(!c.visuals().is(Flag::SeatSelected(RESERVED)));
    assert_eq!(c.seats()[RESERVED].state, SeatState::Reserved);
}

#[test]
fn available_seat_is_selected_and_previewed() {
    let mut c = plan_shown();
    assert!(c.toggle_tilt());

    let outcome = c.select_seat(5);
    let SeatOutcome::Previewing(target) = outcome else {
        panic!("expected a preview, got {outcome:?}");
    };
    assert_eq!(target.rotate_x, 0.0);
    assert_eq!(c.camera().current(), target);
    assert_ne!(target, c.geometry().init_transform());
    assert_eq!(c.mode(), Mode::Previewing(5));
    assert_eq!(c.seats()[5].state, SeatState::Selected);
    assert!(c.visuals().is(Flag::SeatSelected(5)));
    assert!(!c.tilt_enabled());
    assert!(c.visuals().is(Flag::TiltDisabled));
    assert_eq!(
        c.camera().surface().transitions.last().unwrap(),
        "transform 1000ms cubic-bezier(.7,0,.3,1)"
    );

    c.transition_ended(true);
    assert_eq!(c.camera().surface().transitions.last().unwrap(), "none");
}

#[test]
fn clicking_a_selected_seat_only_deselects() {
    let mut c = plan_shown();
    c.select_seat(5);
    c.transition_ended(true);
    let applied = c.camera().surface().transforms.len();
    let pose = c.camera().current();

    assert_eq!(c.select_seat(5), SeatOutcome::Deselected);
    assert_eq!(c.seats()[5].state, SeatState::Available);
    assert!(!c.visuals().is(Flag::SeatSelected(5)));
    assert_eq!(c.camera().surface().transforms.len(), applied);
    assert_eq!(c.camera().current(), pose);
    assert_eq!(c.mode(), Mode::Previewing(5));
}

#[test]
fn reselecting_the_same_seat_leaves_no_transition_armed() {
    let mut c = plan_shown();
    let SeatOutcome::Previewing(target) = c.select_seat(5) else {
        panic!("expected a preview");
    };
    c.transition_ended(true);
    assert_eq!(c.select_seat(5), SeatOutcome::Deselected);

    assert_eq!(c.select_seat(5), SeatOutcome::Previewing(target));
    assert_eq!(c.camera().current(), target);
    assert!(c.camera().transition().is_none());
    assert!(!c.camera().has_pending());
    assert_eq!(c.camera().surface().transitions.last().unwrap(), "none");

    assert!(c.toggle_tilt());
    c.pointer_moved(PointerPos { x: 0.0, y: 0.0 });
    assert!(c.frame().is_some());
    assert!(c.camera().transition().is_none());
    assert_eq!(c.camera().surface().transitions.last().unwrap(), "none");
}

#[test]
fn reselecting_during_the_flight_still_settles() {
    let mut c = plan_shown();
    c.select_seat(5);
    c.select_seat(5);
    c.select_seat(5);
    assert!(c.camera().has_pending());
    c.transition_ended(true);
    assert!(c.camera().transition().is_none());
}

#[test]
fn another_seat_reruns_the_preview() {
    let mut c = plan_shown();
    let SeatOutcome::Previewing(first) = c.select_seat(2) else {
        panic!("expected a preview");
    };
    let SeatOutcome::Previewing(second) = c.select_seat(SEATS_PER_ROW + 12) else {
        panic!("expected a preview");
    };
    assert_ne!(first, second);
    assert_eq!(c.mode(), Mode::Previewing(SEATS_PER_ROW + 12));
    assert_eq!(c.seats()[2].state, SeatState::Selected);
}

#[test]
fn row_without_transform_aborts_the_preview() {
    let mut c = plan_shown();
    let pose = c.camera().current();
    let applied = c.camera().surface().transforms.len();

    assert_eq!(c.select_seat(3 * SEATS_PER_ROW), SeatOutcome::PreviewAborted);
    assert_eq!(c.camera().current(), pose);
    assert_eq!(c.camera().surface().transforms.len(), applied);
    assert_eq!(c.seats()[3 * SEATS_PER_ROW].state, SeatState::Selected);
}

#[test]
fn unknown_seat_is_ignored() {
    let mut c = plan_shown();
    assert_eq!(c.select_seat(10_000), SeatOutcome::Ignored);
}

#[test]
fn seat_picked_during_zoom_out_still_reveals_tilt() {
    let mut c = make_controller(RecordingSurface::default());
    c.select_seats();
    c.select_seat(0);
    assert!(!c.visuals().is(Flag::TiltShown));
    c.transition_ended(true);
    assert!(c.visuals().is(Flag::TiltShown));
    assert!(!c.camera().has_pending());
}

#[test]
fn tilt_toggles_its_affordance() {
    let mut c = plan_shown();
    assert!(c.toggle_tilt());
    assert!(!c.visuals().is(Flag::TiltDisabled));
    assert!(!c.toggle_tilt());
    assert!(c.visuals().is(Flag::TiltDisabled));
}

#[test]
fn pointer_moves_are_coalesced_per_frame() {
    let mut c = plan_shown();
    c.toggle_tilt();
    let rest = c.camera().current();

    assert!(c.pointer_moved(PointerPos { x: 0.0, y: 0.0 }));
    assert!(!c.pointer_moved(PointerPos { x: 100.0, y: 100.0 }));
    assert!(!c.pointer_moved(PointerPos { x: 550.0, y: 400.0 }));

    let applied = c.camera().surface().transforms.len();
    let state = c.frame().unwrap();
    assert_eq!(c.camera().surface().transforms.len(), applied + 1);
    assert!(state.rotate_x.abs() < 1e-3);
    assert!(state.rotate_y.abs() < 1e-3);
    assert_eq!(state.translate_y, rest.translate_y);

    assert_eq!(c.frame(), None);
    assert!(c.pointer_moved(PointerPos { x: 0.0, y: 0.0 }));
}

#[test]
fn pointer_is_ignored_while_tilt_is_off() {
    let mut c = plan_shown();
    let applied = c.camera().surface().transforms.len();
    assert!(!c.pointer_moved(PointerPos { x: 10.0, y: 10.0 }));
    assert_eq!(c.frame(), None);
    assert_eq!(c.camera().surface().transforms.len(), applied);
}

#[test]
fn seat_selection_drops_a_queued_tilt_frame() {
    let mut c = plan_shown();
    c.toggle_tilt();
    assert!(c.pointer_moved(PointerPos { x: 0.0, y: 0.0 }));
    let SeatOutcome::Previewing(target) = c.select_seat(20) else {
        panic!("expected a preview");
    };
    assert_eq!(c.frame(), None);
    assert_eq!(c.camera().current(), target);
}

#[test]
fn tilt_config_with_zero_x_keeps_camera_level() {
    let mut c = plan_shown().with_tilt_config(TiltConfig {
        max_rotate_x: 0.0,
        max_rotate_y: 15.0,
    });
    c.toggle_tilt();
    c.pointer_moved(PointerPos { x: 0.0, y: 0.0 });
    let state = c.frame().unwrap();
    assert_eq!(state.rotate_x, 0.0);
    assert!((state.rotate_y + 15.0).abs() < 1e-3);
}

#[test]
fn resize_rescales_the_room() {
    let mut c = plan_shown();
    assert!((c.scale_factor() - 1.0).abs() < 1e-6);
    let factor = c.resize(Viewport {
        width: 550.0,
        height: 400.0,
    });
    assert!((factor - 0.5).abs() < 1e-6);
    assert_eq!(c.viewport().width, 550.0);
}

#[test]
fn video_toggles_the_play_affordance() {
    let mut c = plan_shown();
    c.video_started();
    assert!(!c.visuals().is(Flag::PlayShown));
    c.video_ended();
    assert!(c.visuals().is(Flag::PlayShown));
}
