//! Room-level state machine: intro, floorplan, seat preview and tilt.

use crate::camera::{
    compute_seat_target_transform, compute_tilt_transform, CameraEngine, RoomSurface,
};
use crate::geometry::{room_scale_factor, PointerPos};
use crate::state::{RoomGeometry, Seat, SeatState, TiltConfig, TransformState, Transition, Viewport};
use crate::throttle::FrameThrottle;

/// Visual state owned by the page, one boolean per element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    IntroShown,
    PlanShown,
    PlayFaded,
    PlayShown,
    TiltShown,
    TiltDisabled,
    SeatSelected(usize),
    SeatReserved(usize),
}

pub trait ClassToggle {
    fn set(&mut self, flag: Flag, on: bool);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Intro,
    PlanShown,
    /// Camera flew to this seat; further selections stay allowed.
    Previewing(usize),
}

/// Work queued until the room's transition ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AfterMove {
    Settle,
    RevealTilt,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SeatOutcome {
    Ignored,
    Deselected,
    Previewing(TransformState),
    PreviewAborted,
}

pub struct Controller<S, V> {
    camera: CameraEngine<S, AfterMove>,
    visuals: V,
    geometry: RoomGeometry,
    tilt_config: TiltConfig,
    seats: Vec<Seat>,
    viewport: Viewport,
    mode: Mode,
    tilt: bool,
    pointer: FrameThrottle<PointerPos>,
}

impl<S: RoomSurface, V: ClassToggle> Controller<S, V> {
    pub fn new(
        surface: S,
        visuals: V,
        geometry: RoomGeometry,
        seats: Vec<Seat>,
        viewport: Viewport,
    ) -> Self {
        Self {
            camera: CameraEngine::new(surface),
            visuals,
            geometry,
            tilt_config: TiltConfig::default(),
            seats,
            viewport,
            mode: Mode::Intro,
            tilt: false,
            pointer: FrameThrottle::default(),
        }
    }

    pub fn with_tilt_config(mut self, tilt_config: TiltConfig) -> Self {
        self.tilt_config = tilt_config;
        self
    }

    pub fn camera(&self) -> &CameraEngine<S, AfterMove> {
        &self.camera
    }

    pub fn visuals(&self) -> &V {
        &self.visuals
    }

    pub fn geometry(&self) -> &RoomGeometry {
        &self.geometry
    }

    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn tilt_enabled(&self) -> bool {
        self.tilt
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn plan_shown(&self) -> bool {
        self.mode != Mode::Intro
    }

    /// Initial render: camera on the screen, reserved seats marked.
    pub fn start(&mut self) {
        self.camera.apply_transform(TransformState::INTRO);
        for seat in &self.seats {
            if seat.state == SeatState::Reserved {
                self.visuals.set(Flag::SeatReserved(seat.index), true);
            }
        }
        self.visuals.set(Flag::TiltDisabled, true);
        log::info!(
            "[room] {} seats in {} rows, width {:.0}",
            self.seats.len(),
            self.geometry.total_rows,
            self.geometry.room_width
        );
    }

    /// Leave the intro: show the floorplan and zoom out to the resting pose.
    pub fn select_seats(&mut self) -> bool {
        if self.mode != Mode::Intro {
            return false;
        }
        self.visuals.set(Flag::IntroShown, false);
        self.visuals.set(Flag::PlanShown, true);
        self.visuals.set(Flag::PlayFaded, true);
        self.mode = Mode::PlanShown;

        self.camera.begin_transition(Transition::zoom_out());
        self.camera.apply_transform(self.geometry.init_transform());
        self.settle_then(AfterMove::RevealTilt);
        true
    }

    pub fn select_seat(&mut self, index: usize) -> SeatOutcome {
        if !self.plan_shown() {
            return SeatOutcome::Ignored;
        }
        let Some(seat) = self.seats.get_mut(index) else {
            log::warn!("[room] click on unknown seat {}", index);
            return SeatOutcome::Ignored;
        };
        match seat.state {
            SeatState::Reserved => SeatOutcome::Ignored,
            SeatState::Selected => {
                seat.state = SeatState::Available;
                self.visuals.set(Flag::SeatSelected(index), false);
                SeatOutcome::Deselected
            }
            SeatState::Available => {
                seat.state = SeatState::Selected;
                self.visuals.set(Flag::SeatSelected(index), true);
                self.preview(index)
            }
        }
    }

    fn preview(&mut self, index: usize) -> SeatOutcome {
        self.set_tilt(false);
        let target = match compute_seat_target_transform(&self.seats[index], &self.geometry) {
            Ok(target) => target,
            Err(e) => {
                log::debug!("[room] no preview for seat {}: {}", index, e);
                return SeatOutcome::PreviewAborted;
            }
        };
        if target == self.camera.current() {
            // An unchanged transform fires no transitionend.
            self.camera.apply_transform(target);
            if !self.camera.has_pending() && self.camera.transition().is_some() {
                self.camera.end_transition();
            }
        } else {
            self.camera.begin_transition(Transition::default());
            self.camera.apply_transform(target);
            self.settle_then(AfterMove::Settle);
        }
        self.mode = Mode::Previewing(index);
        SeatOutcome::Previewing(target)
    }

    /// Returns the new tilt flag; a no-op before the floorplan is shown.
    pub fn toggle_tilt(&mut self) -> bool {
        if self.plan_shown() {
            self.set_tilt(!self.tilt);
        }
        self.tilt
    }

    fn set_tilt(&mut self, on: bool) {
        self.tilt = on;
        self.visuals.set(Flag::TiltDisabled, !on);
        if !on {
            self.pointer.clear();
        }
    }

    /// Record a pointer move. `true` means an animation frame must be
    /// requested to process it.
    pub fn pointer_moved(&mut self, pos: PointerPos) -> bool {
        if !self.tilt {
            return false;
        }
        self.pointer.push(pos)
    }

    /// Animation-frame callback: apply tilt for the latest pointer position.
    pub fn frame(&mut self) -> Option<TransformState> {
        let pos = self.pointer.take()?;
        if !self.tilt {
            return None;
        }
        let state = compute_tilt_transform(
            &self.camera.current(),
            pos,
            self.viewport,
            &self.tilt_config,
        );
        self.camera.apply_transform(state);
        Some(state)
    }

    /// Store the new viewport and return the room's fit-to-width scale.
    pub fn resize(&mut self, viewport: Viewport) -> f32 {
        self.viewport = viewport;
        self.scale_factor()
    }

    pub fn scale_factor(&self) -> f32 {
        room_scale_factor(self.viewport.width, self.geometry.room_width)
    }

    pub fn transition_ended(&mut self, from_room: bool) {
        if let Some(next) = self.camera.transition_ended(from_room) {
            self.finish(next);
        }
    }

    pub fn video_started(&mut self) {
        self.visuals.set(Flag::PlayShown, false);
    }

    pub fn video_ended(&mut self) {
        self.visuals.set(Flag::PlayShown, true);
    }

    fn settle_then(&mut self, next: AfterMove) {
        // A zoom-out still in flight owes the tilt control its reveal.
        let next = match self.camera.cancel_pending() {
            Some(AfterMove::RevealTilt) => AfterMove::RevealTilt,
            _ => next,
        };
        if let Some(next) = self.camera.on_transition_complete(next) {
            self.finish(next);
        }
    }

    fn finish(&mut self, next: AfterMove) {
        self.camera.end_transition();
        if next == AfterMove::RevealTilt {
            self.visuals.set(Flag::TiltShown, true);
        }
    }
}
