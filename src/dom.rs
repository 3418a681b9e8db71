use crate::constants::{CLASS_SEAT_RESERVED, SEL_ROWS, SEL_SEAT};
use seatview_core::{
    parse_transform_matrix, PointerPos, PointerSample, RoomMeasurements, RowPose, Seat,
    SeatMetrics, SeatState, Viewport,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn find(document: &web::Document, selector: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

pub fn find_in(parent: &web::Element, selector: &str) -> anyhow::Result<web::HtmlElement> {
    parent
        .query_selector(selector)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("missing {}", selector))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

pub fn find_all_in(parent: &web::Element, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = parent.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(el: &web::HtmlElement, mut handler: impl FnMut() + 'static) {
    add_listener(el, "click", move |_| handler());
}

/// Run `callback` once before the next repaint.
pub fn request_frame(callback: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(callback);
        let cb: &js_sys::Function = cb.unchecked_ref();
        _ = w.request_animation_frame(cb);
    }
}

pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::default();
    };
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport {
        width: dim(w.inner_width()),
        height: dim(w.inner_height()),
    }
}

pub fn pointer_from_event(ev: &web::MouseEvent) -> PointerPos {
    let scroll = web::window()
        .map(|w| (w.scroll_x().unwrap_or(0.0), w.scroll_y().unwrap_or(0.0)))
        .unwrap_or_default();
    seatview_core::pointer_position(&PointerSample {
        page: (ev.page_x() as f64, ev.page_y() as f64),
        client: (ev.client_x() as f64, ev.client_y() as f64),
        scroll,
    })
}

pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    if let Err(e) = el.style().set_property(property, value) {
        log::warn!("[dom] failed to set {}: {:?}", property, e);
    }
}

/// Row pose from the row's computed `transform`.
fn row_pose(row: &web::Element) -> Option<RowPose> {
    let css = web::window()?
        .get_computed_style(row)
        .ok()
        .flatten()?
        .get_property_value("transform")
        .ok()?;
    match parse_transform_matrix(&css) {
        Ok(m) => m.map(|m| RowPose::from_matrix(&m)),
        Err(e) => {
            log::warn!("[dom] {}", e);
            None
        }
    }
}

/// Measure the room once and build the seat list.
///
/// In-room seats and plan markers are paired by position; a reserved marker
/// makes its seat reserved.
pub fn measure_room(
    room: &web::Element,
    plan_seats: &[web::HtmlElement],
) -> anyhow::Result<(RoomMeasurements, Vec<Seat>)> {
    let rows = find_all_in(room, SEL_ROWS);
    let first_row = rows.first().ok_or_else(|| anyhow::anyhow!("room has no rows"))?;
    let seats_per_row = first_row.children().length();

    let mut seats = Vec::new();
    let mut poses = Vec::with_capacity(rows.len());
    for (row_index, row) in rows.iter().enumerate() {
        poses.push(row_pose(row));
        for el in find_all_in(row, SEL_SEAT) {
            let index = seats.len();
            let reserved = plan_seats
                .get(index)
                .map(|m| m.class_list().contains(CLASS_SEAT_RESERVED))
                .unwrap_or(false);
            seats.push(Seat {
                index,
                row_index,
                metrics: SeatMetrics {
                    offset_left: el.offset_left() as f32,
                    width: el.offset_width() as f32,
                    height: el.offset_height() as f32,
                },
                state: if reserved {
                    SeatState::Reserved
                } else {
                    SeatState::Available
                },
            });
        }
    }
    if seats.len() != plan_seats.len() {
        log::warn!(
            "[dom] {} room seats but {} plan markers",
            seats.len(),
            plan_seats.len()
        );
    }
    let seat_width = seats
        .first()
        .map(|s| s.metrics.width)
        .ok_or_else(|| anyhow::anyhow!("room has no seats"))?;

    Ok((
        RoomMeasurements {
            seat_width,
            seats_per_row,
            rows: poses,
        },
        seats,
    ))
}
