use crate::constants::{BACK_ROW_MAX_ROTATE_Y, FRONT_ROW_MAX_ROTATE_Y, SEAT_VIEW_MARGIN};
use crate::error::CameraError;
use crate::geometry::{lerp2d, PointerPos};
use crate::state::{RoomGeometry, Seat, TiltConfig, TransformState, Transition, Viewport};
use glam::Mat4;

/// The rendered room element the camera drives.
pub trait RoomSurface {
    fn set_transform(&mut self, css: &str);
    fn set_transition(&mut self, css: &str);
    /// `false` when the environment never fires transition-end events.
    fn supports_transitions(&self) -> bool;
}

/// Owns the single camera pose and the transition lifecycle of the room.
///
/// `K` is the continuation queued to run once an animated move settles.
pub struct CameraEngine<S, K> {
    surface: S,
    current: TransformState,
    transition: Option<Transition>,
    pending: Option<K>,
}

impl<S: RoomSurface, K> CameraEngine<S, K> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            current: TransformState::default(),
            transition: None,
            pending: None,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn current(&self) -> TransformState {
        self.current
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn matrix(&self) -> Mat4 {
        self.current.to_matrix()
    }

    pub fn apply_transform(&mut self, state: TransformState) {
        self.current = state;
        self.surface.set_transform(&state.to_css());
    }

    /// Re-render the remembered pose.
    pub fn reapply(&mut self) {
        self.surface.set_transform(&self.current.to_css());
    }

    pub fn begin_transition(&mut self, transition: Transition) {
        self.surface.set_transition(&transition.to_css());
        self.transition = Some(transition);
    }

    pub fn end_transition(&mut self) {
        self.surface.set_transition("none");
        self.transition = None;
    }

    /// Queue `continuation` for the end of the room's transition.
    ///
    /// Without transition support it is handed straight back and the caller
    /// runs it now.
    #[must_use]
    pub fn on_transition_complete(&mut self, continuation: K) -> Option<K> {
        if !self.surface.supports_transitions() {
            return Some(continuation);
        }
        if self.pending.replace(continuation).is_some() {
            log::warn!("[camera] pending continuation superseded by a new move");
        }
        None
    }

    /// Drop the queued continuation without running it.
    pub fn cancel_pending(&mut self) -> Option<K> {
        self.pending.take()
    }

    /// Transition-end notification; only the room's own transition counts.
    pub fn transition_ended(&mut self, from_room: bool) -> Option<K> {
        if !from_room {
            return None;
        }
        self.pending.take()
    }
}

/// Camera pose that looks from `seat` toward the screen.
///
/// Fails with [`CameraError::MissingTransform`] when the seat's row has no
/// rendered transform; no camera move should follow.
pub fn compute_seat_target_transform(
    seat: &Seat,
    geometry: &RoomGeometry,
) -> Result<TransformState, CameraError> {
    let row = geometry.row_pose(seat.row_index)?;
    let y = row.translate_y.abs();
    let z = row.translate_z.abs();
    let init = geometry.init_transform();

    let seat_center_x =
        seat.metrics.offset_left + geometry.side_margin / 2.0 + seat.metrics.width / 2.0;
    let translate_x = init.translate_x + (geometry.center_x() - seat_center_x);
    let translate_y = geometry.room_height / 2.0 - (geometry.room_height - y)
        + seat.metrics.height
        + SEAT_VIEW_MARGIN;
    let translate_z = z + SEAT_VIEW_MARGIN;

    Ok(TransformState {
        translate_x,
        translate_y,
        translate_z,
        rotate_x: 0.0,
        rotate_y: preview_rotate_y(translate_x, z, geometry),
    })
}

/// Yaw toward the screen for a horizontal shift `tx` at row depth `depth`.
///
/// Rows near the screen and seats far from the centre turn more.
pub fn preview_rotate_y(tx: f32, depth: f32, geometry: &RoomGeometry) -> f32 {
    let half = geometry.center_x();
    let back = lerp2d(0.0, BACK_ROW_MAX_ROTATE_Y, 0.0, half, tx);
    let front = lerp2d(0.0, FRONT_ROW_MAX_ROTATE_Y, 0.0, half, tx);
    lerp2d(
        back,
        front,
        geometry.last_row_z(),
        geometry.first_row_z(),
        depth,
    )
}

/// Pointer-driven pose: translations from `current`, rotations from the
/// pointer mapped into `[-max, +max]` (inverted on X, direct on Y).
pub fn compute_tilt_transform(
    current: &TransformState,
    pointer: PointerPos,
    viewport: Viewport,
    tilt: &TiltConfig,
) -> TransformState {
    TransformState {
        rotate_x: -tilt_axis(pointer.y, viewport.height, tilt.max_rotate_x),
        rotate_y: tilt_axis(pointer.x, viewport.width, tilt.max_rotate_y),
        ..*current
    }
}

fn tilt_axis(pos: f32, extent: f32, max: f32) -> f32 {
    if max == 0.0 || extent.is_nan() || extent <= 0.0 || !pos.is_finite() {
        return 0.0;
    }
    let pos = pos.clamp(0.0, extent);
    2.0 * max / extent * pos - max
}
