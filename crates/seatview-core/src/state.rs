//! Camera pose and room geometry.
//!
//! These types avoid referencing platform APIs; the web front-end measures
//! the DOM once and hands the numbers over.

use crate::constants::*;
use crate::error::CameraError;
use glam::{Mat4, Vec3};
use std::borrow::Cow;

/// A complete camera pose applied to the room.
///
/// Translations are room-local px, rotations are degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransformState {
    pub translate_x: f32,
    pub translate_y: f32,
    pub translate_z: f32,
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl TransformState {
    /// Zoomed on the screen, shown behind the intro.
    pub const INTRO: TransformState = TransformState {
        translate_x: 0.0,
        translate_y: 0.0,
        translate_z: INTRO_TRANSLATE_Z,
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// CSS transform list: perspective shift, X then Y rotation, translation.
    pub fn to_css(&self) -> String {
        format!(
            "translate3d(0,0,{}px) rotate3d(1,0,0,{}deg) rotate3d(0,1,0,{}deg) translate3d({}px,{}px,{}px)",
            PERSPECTIVE,
            self.rotate_x,
            self.rotate_y,
            self.translate_x,
            self.translate_y,
            self.translate_z
        )
    }

    /// The same composite as [`to_css`](Self::to_css), as a matrix.
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, 0.0, PERSPECTIVE))
            * Mat4::from_rotation_x(self.rotate_x.to_radians())
            * Mat4::from_rotation_y(self.rotate_y.to_radians())
            * Mat4::from_translation(Vec3::new(
                self.translate_x,
                self.translate_y,
                self.translate_z,
            ))
    }
}

/// Rendered position of a row inside the room.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RowPose {
    pub translate_y: f32,
    pub translate_z: f32,
}

impl RowPose {
    pub fn from_matrix(m: &Mat4) -> Self {
        let cols = m.to_cols_array();
        Self {
            translate_y: cols[13],
            translate_z: cols[14],
        }
    }
}

/// Values read from the DOM at startup.
#[derive(Clone, Debug, Default)]
pub struct RoomMeasurements {
    pub seat_width: f32,
    pub seats_per_row: u32,
    /// One entry per row; `None` for rows rendered without a transform.
    pub rows: Vec<Option<RowPose>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RoomGeometry {
    pub room_width: f32,
    pub room_height: f32,
    pub room_depth: f32,
    pub seat_width: f32,
    pub seats_per_row: u32,
    pub side_margin: f32,
    pub row_front_gap: f32,
    pub row_back_spacing: f32,
    pub row_gap_columns: u32,
    pub total_rows: usize,
    pub rows: Vec<Option<RowPose>>,
}

impl RoomGeometry {
    pub fn new(m: RoomMeasurements) -> Result<Self, CameraError> {
        if m.seat_width.is_nan() || m.seat_width <= 0.0 || m.seats_per_row == 0 {
            return Err(CameraError::DegenerateGeometry("room has no width"));
        }
        if m.rows.is_empty() {
            return Err(CameraError::DegenerateGeometry("room has no rows"));
        }
        let side_margin = SIDE_MARGIN_SEATS * m.seat_width;
        let room_width = m.seats_per_row as f32 * m.seat_width
            + side_margin
            + ROW_GAP_COLUMNS as f32 * m.seat_width;
        let geometry = Self {
            room_width,
            room_height: ROOM_HEIGHT,
            room_depth: ROOM_DEPTH,
            seat_width: m.seat_width,
            seats_per_row: m.seats_per_row,
            side_margin,
            row_front_gap: ROW_FRONT_GAP,
            row_back_spacing: ROW_BACK_SPACING,
            row_gap_columns: ROW_GAP_COLUMNS,
            total_rows: m.rows.len(),
            rows: m.rows,
        };
        if geometry.first_row_z() == geometry.last_row_z() {
            return Err(CameraError::DegenerateGeometry(
                "first and last row share a depth",
            ));
        }
        Ok(geometry)
    }

    pub fn first_row_z(&self) -> f32 {
        self.room_depth - self.row_front_gap
    }

    pub fn last_row_z(&self) -> f32 {
        let steps = (self.total_rows as f32 - 1.0) + self.row_gap_columns as f32;
        self.first_row_z() - steps * self.row_back_spacing
    }

    pub fn center_x(&self) -> f32 {
        self.room_width / 2.0
    }

    /// Resting camera once the floorplan is shown.
    pub fn init_transform(&self) -> TransformState {
        TransformState {
            translate_x: 0.0,
            translate_y: self.room_height / INIT_HEIGHT_DIVISOR,
            translate_z: 0.0,
            rotate_x: INIT_ROTATE_X,
            rotate_y: 0.0,
        }
    }

    pub fn row_pose(&self, row: usize) -> Result<RowPose, CameraError> {
        self.rows
            .get(row)
            .copied()
            .ok_or(CameraError::UnknownRow(row))?
            .ok_or(CameraError::MissingTransform { row })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SeatMetrics {
    pub offset_left: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SeatState {
    #[default]
    Available,
    Selected,
    Reserved,
}

/// A seat; `index` pairs the floorplan marker with the in-room seat.
#[derive(Clone, Debug, PartialEq)]
pub struct Seat {
    pub index: usize,
    pub row_index: usize,
    pub metrics: SeatMetrics,
    pub state: SeatState,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltConfig {
    pub max_rotate_x: f32,
    pub max_rotate_y: f32,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_rotate_x: TILT_MAX_ROTATE_X,
            max_rotate_y: TILT_MAX_ROTATE_Y,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub speed_ms: u32,
    pub easing: Cow<'static, str>,
}

impl Default for Transition {
    fn default() -> Self {
        Self {
            speed_ms: PREVIEW_SPEED_MS,
            easing: Cow::Borrowed(PREVIEW_EASING),
        }
    }
}

impl Transition {
    pub fn zoom_out() -> Self {
        Self {
            speed_ms: ZOOM_OUT_SPEED_MS,
            easing: Cow::Borrowed(ZOOM_OUT_EASING),
        }
    }

    pub fn to_css(&self) -> String {
        format!("transform {}ms {}", self.speed_ms, self.easing)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}
