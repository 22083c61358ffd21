use crate::constants::HALO_ALPHA;
use crate::projection::PictureLayout;
use web_sys as web;

pub fn clear(ctx: &web::CanvasRenderingContext2d, surface_w: f32, surface_h: f32) {
    ctx.clear_rect(0.0, 0.0, surface_w as f64, surface_h as f64);
}

/// Paint one picture: low-opacity halo rectangle, then the bitmap, then the
/// caption below it. All paint-state mutation (alpha, fill, font) is
/// bracketed by save/restore so draw order cannot leak state between
/// pictures.
pub fn draw_picture(
    ctx: &web::CanvasRenderingContext2d,
    img: &web::HtmlImageElement,
    layout: &PictureLayout,
    caption: &str,
) {
    ctx.save();

    ctx.set_fill_style_str("#fff");
    ctx.set_global_alpha(HALO_ALPHA);
    ctx.fill_rect(
        (layout.x - layout.halo_h) as f64,
        (layout.y - layout.halo_v) as f64,
        (layout.w + layout.halo_h * 2.0) as f64,
        (layout.h + layout.halo_v * 2.0) as f64,
    );
    ctx.set_global_alpha(1.0);

    if let Err(e) = ctx.draw_image_with_html_image_element_and_dw_and_dh(
        img,
        layout.x as f64,
        layout.y as f64,
        layout.w as f64,
        layout.h as f64,
    ) {
        log::warn!("[render] drawImage failed: {:?}", e);
    }

    ctx.set_font(&format!("{}px Arial", layout.font_size));
    _ = ctx.fill_text(caption, layout.x as f64, layout.caption_baseline() as f64);

    ctx.restore();
}
