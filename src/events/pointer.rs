use super::SharedController;
use crate::constants::scale_css;
use crate::dom;
use instant::Instant;
use seatview_core::constants::RESIZE_THROTTLE_MS;
use seatview_core::IntervalThrottle;
use std::time::Duration;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub controller: SharedController,
    pub container: web::HtmlElement,
}

pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_mousemove(&w);
    wire_resize(&w);
}

/// Tilt follows the mouse, at most once per frame.
fn wire_mousemove(w: &PointerWiring) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let controller = w.controller.clone();
    dom::add_listener(&document, "mousemove", move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let pos = dom::pointer_from_event(ev);
        let needs_frame = controller.borrow_mut().pointer_moved(pos);
        if needs_frame {
            let controller = controller.clone();
            dom::request_frame(move || {
                controller.borrow_mut().frame();
            });
        }
    });
}

fn wire_resize(w: &PointerWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let controller = w.controller.clone();
    let container = w.container.clone();
    let mut throttle = IntervalThrottle::new(Duration::from_millis(RESIZE_THROTTLE_MS));
    dom::add_listener(&window, "resize", move |_| {
        if !throttle.ready(Instant::now()) {
            return;
        }
        let factor = controller.borrow_mut().resize(dom::viewport());
        dom::set_style(&container, "transform", &scale_css(factor));
    });
}
