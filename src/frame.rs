use crate::assets::ImageAsset;
use crate::input::PointerFilter;
use crate::projection::{self, ParallaxInput};
use crate::render;
use crate::scene::PictureParams;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One scene entry: static placement parameters plus the in-flight asset.
pub struct GalleryPicture {
    pub params: PictureParams,
    pub asset: ImageAsset,
}

pub struct FrameContext {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    pub pointer: Rc<RefCell<PointerFilter>>,
    pub pictures: Vec<GalleryPicture>,
}

impl FrameContext {
    /// One animation tick: clear, advance the input filter, then lay out and
    /// draw every loaded picture in list order with the same snapshotted
    /// parallax input.
    pub fn frame(&mut self) {
        let surface_w = self.canvas.width() as f32;
        let surface_h = self.canvas.height() as f32;
        render::clear(&self.ctx, surface_w, surface_h);

        let input = {
            let mut pointer = self.pointer.borrow_mut();
            pointer.tick();
            ParallaxInput {
                tx: pointer.smoothed.x,
                tz: pointer.smoothed.y,
            }
        };

        for picture in &self.pictures {
            let Some(img) = picture.asset.get() else {
                continue;
            };
            let natural_w = img.natural_width() as f32;
            let natural_h = img.natural_height() as f32;
            if let Some(layout) = projection::layout(
                &picture.params,
                natural_w,
                natural_h,
                input,
                surface_w,
                surface_h,
            ) {
                render::draw_picture(&self.ctx, &img, &layout, picture.params.caption);
            }
        }
    }
}

/// Self-rescheduling requestAnimationFrame loop; runs until page teardown.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}
