// Room layout and camera tuning shared by the core and the web front-end.
// The layout values must match the stylesheet (and vice-versa).

// Room size
pub const ROOM_HEIGHT: f32 = 1000.0;
pub const ROOM_DEPTH: f32 = 3000.0;

// Rows
pub const ROW_FRONT_GAP: f32 = 800.0; // distance from the first row to the screen
pub const ROW_BACK_SPACING: f32 = 100.0; // distance between rows
pub const ROW_GAP_COLUMNS: u32 = 2; // aisle in the middle, in seat widths
pub const SIDE_MARGIN_SEATS: f32 = 4.0; // left + right margin, in seat widths

// Perspective-compensating translation along the view axis
pub const PERSPECTIVE: f32 = 2000.0;

// Initial (resting) camera: seen from above, looking down
pub const INIT_HEIGHT_DIVISOR: f32 = 3.5;
pub const INIT_ROTATE_X: f32 = -15.0;

// Intro camera, zoomed on the screen
pub const INTRO_TRANSLATE_Z: f32 = 1300.0;

// Seat preview
pub const SEAT_VIEW_MARGIN: f32 = 10.0; // lifts/pushes the camera just past the seat
pub const BACK_ROW_MAX_ROTATE_Y: f32 = 20.0;
pub const FRONT_ROW_MAX_ROTATE_Y: f32 = 50.0;

// Tilt half-ranges (degrees)
pub const TILT_MAX_ROTATE_X: f32 = 25.0;
pub const TILT_MAX_ROTATE_Y: f32 = 15.0;

// Transitions
pub const PREVIEW_SPEED_MS: u32 = 1000;
pub const PREVIEW_EASING: &str = "cubic-bezier(.7,0,.3,1)";
pub const ZOOM_OUT_SPEED_MS: u32 = 1500;
pub const ZOOM_OUT_EASING: &str = "ease";

// Resize throttle
pub const RESIZE_THROTTLE_MS: u64 = 10;
