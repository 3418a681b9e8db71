//! Small pure helpers: line interpolation, pointer normalization and
//! computed-style matrix parsing.

use crate::error::CameraError;
use glam::Mat4;

/// Value at `x` of the line through `(x0, y0)` and `(x1, y1)`.
///
/// The result is not finite when `x0 == x1`; callers keep the samples apart.
#[inline]
pub fn lerp2d(y0: f32, y1: f32, x0: f32, x1: f32, x: f32) -> f32 {
    let t = (x - x0) / (x1 - x0);
    y0 * (1.0 - t) + y1 * t
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPos {
    pub x: f32,
    pub y: f32,
}

/// Raw coordinates as reported by a mouse/pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub page: (f64, f64),
    pub client: (f64, f64),
    pub scroll: (f64, f64),
}

/// Page position of a pointer event.
///
/// Prefers page coordinates; falls back to client coordinates offset by the
/// document scroll; `{0, 0}` when neither carries data.
pub fn pointer_position(sample: &PointerSample) -> PointerPos {
    let (px, py) = sample.page;
    if px != 0.0 || py != 0.0 {
        return PointerPos {
            x: px as f32,
            y: py as f32,
        };
    }
    let (cx, cy) = sample.client;
    if cx != 0.0 || cy != 0.0 {
        return PointerPos {
            x: (cx + sample.scroll.0) as f32,
            y: (cy + sample.scroll.1) as f32,
        };
    }
    PointerPos::default()
}

/// Parse a computed `transform` value into a column-major matrix.
///
/// `none` (or an empty value) yields `Ok(None)`. `matrix3d(...)` maps its 16
/// components directly, so translateY/translateZ sit at indices 13/14. The 2D
/// `matrix(a, b, c, d, e, f)` form is promoted with no Z translation.
pub fn parse_transform_matrix(css: &str) -> Result<Option<Mat4>, CameraError> {
    let css = css.trim();
    if css.is_empty() || css == "none" {
        return Ok(None);
    }
    let malformed = || CameraError::MalformedMatrix(css.to_string());

    let open = css.find('(').ok_or_else(malformed)?;
    let close = css.rfind(')').ok_or_else(malformed)?;
    if close < open {
        return Err(malformed());
    }
    let name = css[..open].trim();
    let values = css[open + 1..close]
        .split(',')
        .map(|v| v.trim().parse::<f32>())
        .collect::<Result<Vec<f32>, _>>()
        .map_err(|_| malformed())?;
    if values.iter().any(|v| !v.is_finite()) {
        return Err(malformed());
    }

    match (name, values.len()) {
        ("matrix3d", 16) => {
            let mut cols = [0.0f32; 16];
            cols.copy_from_slice(&values);
            Ok(Some(Mat4::from_cols_array(&cols)))
        }
        ("matrix", 6) => {
            let [a, b, c, d, e, f] = [
                values[0], values[1], values[2], values[3], values[4], values[5],
            ];
            Ok(Some(Mat4::from_cols_array(&[
                a, b, 0.0, 0.0, //
                c, d, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                e, f, 0.0, 1.0,
            ])))
        }
        _ => Err(malformed()),
    }
}

/// Uniform scale that fits the room's design width into the viewport.
///
/// Falls back to `1.0` for an empty viewport or room.
#[inline]
pub fn room_scale_factor(viewport_width: f32, room_width: f32) -> f32 {
    if room_width > 0.0 && viewport_width.is_finite() && viewport_width > 0.0 {
        viewport_width / room_width
    } else {
        1.0
    }
}
