#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod assets;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod projection;
mod render;
mod scene;

// Keep the canvas backing store matched to CSS size * devicePixelRatio.
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax-gallery starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas = dom::canvas_by_id(&document, "gallery-canvas")?;
    let ctx = dom::context_2d(&canvas)?;

    wire_canvas_resize(&canvas);

    let pointer = Rc::new(RefCell::new(input::PointerFilter::default()));
    events::wire_pointer(&canvas, pointer.clone());

    // Asset loads are fire-and-forget; the frame loop draws each picture once
    // its image has decoded.
    let pictures: Vec<frame::GalleryPicture> = scene::pictures()
        .into_iter()
        .map(|params| frame::GalleryPicture {
            asset: assets::ImageAsset::load(params.url),
            params,
        })
        .collect();
    log::info!("[scene] {} pictures queued", pictures.len());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        ctx,
        pointer,
        pictures,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
