// DOM selectors and state classes used by the web front-end.
// They mirror the page markup and stylesheet.

// Structure
pub const SEL_CONTAINER: &str = ".container";
pub const SEL_ROOM: &str = ".cube";
pub const SEL_ROWS: &str = ".rows > .row";
pub const SEL_SEAT: &str = ".row__seat";
pub const SEL_PLAN: &str = ".plan";
pub const SEL_SCREEN: &str = ".screen";
pub const SEL_VIDEO: &str = "video";
pub const SEL_PLAY_CTRL: &str = "button.action--play";
pub const SEL_INTRO: &str = ".intro";
pub const SEL_SELECT_SEATS_CTRL: &str = "button.action--seats";
pub const SEL_TILT_CTRL: &str = ".action--lookaround";

// State classes
pub const CLASS_INTRO_SHOWN: &str = "intro--shown";
pub const CLASS_PLAN_SHOWN: &str = "plan--shown";
pub const CLASS_ACTION_FADED: &str = "action--faded";
pub const CLASS_ACTION_SHOWN: &str = "action--shown";
pub const CLASS_ACTION_DISABLED: &str = "action--disabled";
pub const CLASS_SEAT_SELECTED: &str = "row__seat--selected";
pub const CLASS_SEAT_RESERVED: &str = "row__seat--reserved";

// Events
pub const EV_TRANSITION_END: &str = "transitionend";

// Probe used to detect CSS transition support
pub const TRANSITION_PROBE: (&str, &str) = ("transition", "transform 1s");

/// Container transform that fits the room to the viewport width.
#[inline]
pub fn scale_css(factor: f32) -> String {
    format!("scale3d({},{},1)", factor, factor)
}
