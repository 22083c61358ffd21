use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Completion handle for one asynchronously loading image.
///
/// The slot is filled exactly once by the element's `load` event; the frame
/// loop checks it with [`ImageAsset::get`] instead of awaiting, so drawing is
/// never suspended on a slow fetch. There is no error channel: a failed fetch
/// or decode leaves the slot empty forever and the picture is simply never
/// drawn.
pub struct ImageAsset {
    slot: Rc<RefCell<Option<web::HtmlImageElement>>>,
}

impl ImageAsset {
    pub fn load(url: &str) -> Self {
        let slot: Rc<RefCell<Option<web::HtmlImageElement>>> = Rc::new(RefCell::new(None));
        let img = match web::HtmlImageElement::new() {
            Ok(img) => img,
            Err(e) => {
                log::error!("[assets] image element creation failed: {:?}", e);
                return Self { slot };
            }
        };

        let slot_done = slot.clone();
        let img_done = img.clone();
        let url_done = url.to_string();
        let closure = Closure::wrap(Box::new(move || {
            log::debug!(
                "[assets] loaded {} ({}x{})",
                url_done,
                img_done.natural_width(),
                img_done.natural_height()
            );
            *slot_done.borrow_mut() = Some(img_done.clone());
        }) as Box<dyn FnMut()>);
        _ = img.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
        closure.forget();

        img.set_src(url);
        Self { slot }
    }

    /// Non-blocking completion check; `Some` once the image has decoded.
    #[inline]
    pub fn get(&self) -> Option<web::HtmlImageElement> {
        self.slot.borrow().clone()
    }
}
