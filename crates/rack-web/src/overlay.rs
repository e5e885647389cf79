use glam::Mat4;
use rack_core::{project_to_screen, LabelKind, SceneLabel};
use wasm_bindgen::JsValue;
use web_sys as web;

const LABEL_FONT_CSS_PX: f64 = 8.0;

/// Redraw label text for the current camera. Clears the overlay first, so
/// calling with `visible == false` just hides the labels.
pub fn draw_labels(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    labels: &[SceneLabel],
    view_proj: Mat4,
    visible: bool,
    dpr: f64,
) -> Result<(), JsValue> {
    let (w, h) = (canvas.width() as f32, canvas.height() as f32);
    ctx.clear_rect(0.0, 0.0, w as f64, h as f64);
    if !visible {
        return Ok(());
    }
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    for label in labels {
        let Some(p) = project_to_screen(view_proj, label.position, w, h) else {
            continue;
        };
        if p.x < 0.0 || p.y < 0.0 || p.x > w || p.y > h {
            continue;
        }
        let (font, color) = match label.kind {
            LabelKind::BayAddress => (format!("{}px sans-serif", LABEL_FONT_CSS_PX * dpr), "black"),
            LabelKind::LevelName => (
                format!("bold {}px sans-serif", LABEL_FONT_CSS_PX * dpr),
                "darkblue",
            ),
        };
        ctx.set_font(&font);
        ctx.set_fill_style_str(color);
        ctx.fill_text(&label.text, p.x as f64, p.y as f64)?;
    }
    Ok(())
}
