use crate::constants::*;
use crate::dom;
use seatview_core::{ClassToggle, Flag, RoomSurface};
use web_sys as web;

/// The `.cube` element, driven through inline `transform`/`transition`.
pub struct DomRoom {
    el: web::HtmlElement,
    transitions: bool,
}

impl DomRoom {
    pub fn new(el: web::HtmlElement) -> Self {
        let (property, value) = TRANSITION_PROBE;
        let transitions = web::css::supports_with_value(property, value).unwrap_or(false);
        if !transitions {
            log::info!("[room] no CSS transitions; moves complete immediately");
        }
        Self { el, transitions }
    }
}

impl RoomSurface for DomRoom {
    fn set_transform(&mut self, css: &str) {
        dom::set_style(&self.el, "transform", css);
    }

    fn set_transition(&mut self, css: &str) {
        dom::set_style(&self.el, "transition", css);
    }

    fn supports_transitions(&self) -> bool {
        self.transitions
    }
}

/// Maps visual flags onto the page's state classes.
pub struct DomVisuals {
    pub intro: web::HtmlElement,
    pub plan: web::HtmlElement,
    pub play_ctrl: web::HtmlElement,
    pub tilt_ctrl: web::HtmlElement,
    pub plan_seats: Vec<web::HtmlElement>,
}

impl ClassToggle for DomVisuals {
    fn set(&mut self, flag: Flag, on: bool) {
        let (el, class) = match flag {
            Flag::IntroShown => (Some(&self.intro), CLASS_INTRO_SHOWN),
            Flag::PlanShown => (Some(&self.plan), CLASS_PLAN_SHOWN),
            Flag::PlayFaded => (Some(&self.play_ctrl), CLASS_ACTION_FADED),
            Flag::PlayShown => (Some(&self.play_ctrl), CLASS_ACTION_SHOWN),
            Flag::TiltShown => (Some(&self.tilt_ctrl), CLASS_ACTION_SHOWN),
            Flag::TiltDisabled => (Some(&self.tilt_ctrl), CLASS_ACTION_DISABLED),
            Flag::SeatSelected(i) => (self.plan_seats.get(i), CLASS_SEAT_SELECTED),
            Flag::SeatReserved(i) => (self.plan_seats.get(i), CLASS_SEAT_RESERVED),
        };
        if let Some(el) = el {
            _ = el.class_list().toggle_with_force(class, on);
        }
    }
}
