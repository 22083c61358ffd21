use crate::input::{self, PointerFilter};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn record_move(canvas: &web::HtmlCanvasElement, pointer: &Rc<RefCell<PointerFilter>>, client: Vec2) {
    let dpr = web::window()
        .map(|w| w.device_pixel_ratio() as f32)
        .unwrap_or(1.0);
    let surface = Vec2::new(canvas.width().max(1) as f32, canvas.height().max(1) as f32);
    pointer
        .borrow_mut()
        .record(input::normalize_pointer(client, surface, dpr));
}

/// Attach mouse and touch move handlers to the canvas, feeding the shared
/// pointer filter. Touch moves additionally suppress default scrolling.
pub fn wire_pointer(canvas: &web::HtmlCanvasElement, pointer: Rc<RefCell<PointerFilter>>) {
    {
        let canvas_move = canvas.clone();
        let pointer_move = pointer.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let client = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            record_move(&canvas_move, &pointer_move, client);
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    {
        let canvas_move = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            ev.prevent_default();
            if let Some(touch) = ev.target_touches().get(0) {
                let client = Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
                record_move(&canvas_move, &pointer, client);
            }
        }) as Box<dyn FnMut(_)>);
        _ = canvas.add_event_listener_with_callback("touchmove", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
