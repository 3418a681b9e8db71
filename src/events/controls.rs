use super::SharedController;
use crate::constants::EV_TRANSITION_END;
use crate::dom;
use seatview_core::SeatOutcome;
use web_sys as web;

#[derive(Clone)]
pub struct ControlWiring {
    pub controller: SharedController,
    pub room: web::HtmlElement,
    pub plan_seats: Vec<web::HtmlElement>,
    pub select_seats_ctrl: web::HtmlElement,
    pub tilt_ctrl: web::HtmlElement,
    pub play_ctrl: web::HtmlElement,
    pub video: web::HtmlVideoElement,
}

pub fn wire_controls(w: ControlWiring) {
    wire_seat_clicks(&w);
    wire_select_seats(&w);
    wire_tilt_toggle(&w);
    wire_transition_end(&w);
    wire_video(&w);
}

fn wire_seat_clicks(w: &ControlWiring) {
    for (index, marker) in w.plan_seats.iter().enumerate() {
        let controller = w.controller.clone();
        dom::add_click_listener(marker, move || {
            let outcome = controller.borrow_mut().select_seat(index);
            match outcome {
                SeatOutcome::Previewing(t) => log::info!(
                    "[seat] preview {} tx={:.1} ty={:.1} tz={:.1} ry={:.1}",
                    index,
                    t.translate_x,
                    t.translate_y,
                    t.translate_z,
                    t.rotate_y
                ),
                SeatOutcome::Deselected => log::info!("[seat] deselect {}", index),
                SeatOutcome::PreviewAborted | SeatOutcome::Ignored => {}
            }
        });
    }
}

fn wire_select_seats(w: &ControlWiring) {
    let controller = w.controller.clone();
    dom::add_click_listener(&w.select_seats_ctrl, move || {
        if controller.borrow_mut().select_seats() {
            log::info!("[room] floorplan shown");
        }
    });
}

fn wire_tilt_toggle(w: &ControlWiring) {
    let controller = w.controller.clone();
    dom::add_click_listener(&w.tilt_ctrl, move || {
        let on = controller.borrow_mut().toggle_tilt();
        log::info!("[tilt] {}", if on { "on" } else { "off" });
    });
}

/// Only the room's own transition completes a camera move.
fn wire_transition_end(w: &ControlWiring) {
    let controller = w.controller.clone();
    let room = w.room.clone();
    dom::add_listener(&w.room, EV_TRANSITION_END, move |ev: web::Event| {
        let room_target: &web::EventTarget = room.as_ref();
        let from_room = ev.target().as_ref() == Some(room_target);
        controller.borrow_mut().transition_ended(from_room);
    });
}

fn wire_video(w: &ControlWiring) {
    let controller = w.controller.clone();
    let video = w.video.clone();
    dom::add_click_listener(&w.play_ctrl, move || {
        controller.borrow_mut().video_started();
        video.set_current_time(0.0);
        if let Err(e) = video.play() {
            log::warn!("[video] play failed: {:?}", e);
        }
    });

    let controller = w.controller.clone();
    let video = w.video.clone();
    dom::add_listener(&w.video, "ended", move |_| {
        controller.borrow_mut().video_ended();
        video.load();
    });
}
