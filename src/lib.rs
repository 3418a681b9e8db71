#![cfg(target_arch = "wasm32")]
use seatview_core::{Controller, RoomGeometry};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod room;

use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("seatview starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container = dom::find(&document, SEL_CONTAINER)?;
    let room = dom::find_in(&container, SEL_ROOM)?;
    let plan = dom::find(&document, SEL_PLAN)?;
    let plan_seats = dom::find_all_in(&plan, SEL_SEAT);
    let screen = dom::find_in(&room, SEL_SCREEN)?;
    let video = dom::find_in(&screen, SEL_VIDEO)?
        .dyn_into::<web::HtmlVideoElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let play_ctrl = dom::find_in(&screen, SEL_PLAY_CTRL)?;
    let intro = dom::find_in(&screen, SEL_INTRO)?;
    let select_seats_ctrl = dom::find_in(&intro, SEL_SELECT_SEATS_CTRL)?;
    let tilt_ctrl = dom::find(&document, SEL_TILT_CTRL)?;

    let (measurements, seats) = dom::measure_room(&room, &plan_seats)?;
    let geometry = RoomGeometry::new(measurements)?;

    let surface = room::DomRoom::new(room.clone());
    let visuals = room::DomVisuals {
        intro,
        plan,
        play_ctrl: play_ctrl.clone(),
        tilt_ctrl: tilt_ctrl.clone(),
        plan_seats: plan_seats.clone(),
    };
    let mut controller = Controller::new(surface, visuals, geometry, seats, dom::viewport());
    dom::set_style(&container, "transform", &scale_css(controller.scale_factor()));
    controller.start();
    let controller = Rc::new(RefCell::new(controller));

    events::wire_controls(events::ControlWiring {
        controller: controller.clone(),
        room,
        plan_seats,
        select_seats_ctrl,
        tilt_ctrl,
        play_ctrl,
        video,
    });
    events::wire_pointer_handlers(events::PointerWiring {
        controller,
        container,
    });

    Ok(())
}
