//! Canvas2D rendering of a [`FloorPlan`].
//!
//! Drawn back to front: background, grid, aisle bands, racks and their ids,
//! axes with ticks, titles, then the legend in the upper right of the plot.

use glam::Vec2;
use rack_core::{FloorPlan, NamedColor, PlotTransform};
use wasm_bindgen::JsValue;
use web_sys as web;

// left, top, right, bottom in CSS px
const MARGINS_CSS: [f32; 4] = [64.0, 44.0, 24.0, 52.0];
const TICK_LEN_CSS: f32 = 5.0;

fn css_rgba(color: NamedColor, alpha: f32) -> String {
    let [r, g, b] = color.rgb();
    format!(
        "rgba({}, {}, {}, {alpha})",
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8
    )
}

fn dash_array(dash: &[f32], scale: f32) -> JsValue {
    let arr = js_sys::Array::new();
    for d in dash {
        arr.push(&JsValue::from_f64((d * scale) as f64));
    }
    arr.into()
}

pub fn draw_floor_plan(
    ctx: &web::CanvasRenderingContext2d,
    canvas: &web::HtmlCanvasElement,
    plan: &FloorPlan,
    dpr: f32,
) -> Result<(), JsValue> {
    let size = Vec2::new(canvas.width() as f32, canvas.height() as f32);
    let margins = MARGINS_CSS.map(|m| m * dpr);
    let tf = PlotTransform::fit(plan.extent, size, margins);
    let [px, py, pw, ph] = tf.plot_area_px();
    let font = |px_css: f32, bold: bool| {
        format!(
            "{}{}px sans-serif",
            if bold { "bold " } else { "" },
            (px_css * dpr).round()
        )
    };

    ctx.set_global_alpha(1.0);
    ctx.set_line_dash(&js_sys::Array::new())?;
    ctx.set_fill_style_str("white");
    ctx.fill_rect(0.0, 0.0, size.x as f64, size.y as f64);

    let x_ticks = plan.x_ticks();
    let y_ticks = plan.y_ticks();

    if let Some(grid) = &plan.grid {
        ctx.save();
        ctx.set_stroke_style_str(grid.color.css_name());
        ctx.set_line_width((grid.line_width * dpr) as f64);
        ctx.set_line_dash(&dash_array(&grid.dash, dpr))?;
        ctx.begin_path();
        for &x in &x_ticks {
            let a = tf.to_px(Vec2::new(x, 0.0));
            ctx.move_to(a.x as f64, py as f64);
            ctx.line_to(a.x as f64, (py + ph) as f64);
        }
        for &y in &y_ticks {
            let a = tf.to_px(Vec2::new(0.0, y));
            ctx.move_to(px as f64, a.y as f64);
            ctx.line_to((px + pw) as f64, a.y as f64);
        }
        ctx.stroke();
        ctx.restore();
    }

    for band in &plan.bands {
        let [x, y, w, h] = tf.rect_px(
            Vec2::new(0.0, band.y0),
            Vec2::new(plan.extent.x, band.y1 - band.y0),
        );
        ctx.set_fill_style_str(&css_rgba(band.color, band.alpha));
        ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
        if let Some(label) = &band.label {
            ctx.set_fill_style_str("dimgray");
            ctx.set_font(&font(11.0, false));
            ctx.set_text_align("left");
            ctx.set_text_baseline("middle");
            ctx.fill_text(label, (x + 6.0 * dpr) as f64, (y + h * 0.5) as f64)?;
        }
    }

    for rack in &plan.racks {
        let [x, y, w, h] = tf.rect_px(rack.origin, rack.size);
        ctx.set_fill_style_str(rack.fill.css_name());
        ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
        ctx.set_stroke_style_str(rack.edge.css_name());
        ctx.set_line_width((rack.line_width * dpr) as f64);
        ctx.stroke_rect(x as f64, y as f64, w as f64, h as f64);

        let anchor = tf.to_px(rack.label_anchor);
        ctx.set_fill_style_str("black");
        ctx.set_font(&font(12.0, true));
        ctx.set_text_align("center");
        ctx.set_text_baseline("middle");
        ctx.fill_text(&rack.id, anchor.x as f64, anchor.y as f64)?;
    }

    // axes frame and ticks
    ctx.set_stroke_style_str("black");
    ctx.set_line_width(dpr as f64);
    ctx.stroke_rect(px as f64, py as f64, pw as f64, ph as f64);
    let tick = TICK_LEN_CSS * dpr;
    ctx.set_fill_style_str("black");
    ctx.set_font(&font(11.0, false));
    ctx.begin_path();
    ctx.set_text_align("center");
    ctx.set_text_baseline("top");
    for &x in &x_ticks {
        let a = tf.to_px(Vec2::new(x, 0.0));
        ctx.move_to(a.x as f64, (py + ph) as f64);
        ctx.line_to(a.x as f64, (py + ph + tick) as f64);
        ctx.fill_text(&format!("{x}"), a.x as f64, (py + ph + tick * 1.5) as f64)?;
    }
    ctx.set_text_align("right");
    ctx.set_text_baseline("middle");
    for &y in &y_ticks {
        let a = tf.to_px(Vec2::new(0.0, y));
        ctx.move_to(px as f64, a.y as f64);
        ctx.line_to((px - tick) as f64, a.y as f64);
        ctx.fill_text(&format!("{y}"), (px - tick * 1.5) as f64, a.y as f64)?;
    }
    ctx.stroke();

    ctx.set_font(&font(13.0, false));
    ctx.set_text_align("center");
    ctx.set_text_baseline("bottom");
    ctx.fill_text(&plan.x_label, (px + pw * 0.5) as f64, (size.y - 6.0 * dpr) as f64)?;
    ctx.save();
    ctx.translate((14.0 * dpr) as f64, (py + ph * 0.5) as f64)?;
    ctx.rotate(-std::f64::consts::FRAC_PI_2)?;
    ctx.set_text_baseline("middle");
    ctx.fill_text(&plan.y_label, 0.0, 0.0)?;
    ctx.restore();

    ctx.set_font(&font(15.0, false));
    ctx.set_text_baseline("bottom");
    ctx.fill_text(&plan.title, (px + pw * 0.5) as f64, (py - 10.0 * dpr) as f64)?;

    draw_legend(ctx, plan, [px, py, pw, ph], dpr)
}

fn draw_legend(
    ctx: &web::CanvasRenderingContext2d,
    plan: &FloorPlan,
    [px, py, pw, _ph]: [f32; 4],
    dpr: f32,
) -> Result<(), JsValue> {
    if plan.legend.is_empty() {
        return Ok(());
    }
    let pad = 8.0 * dpr;
    let swatch = 12.0 * dpr;
    let row = 18.0 * dpr;
    ctx.set_font(&format!("{}px sans-serif", (11.0 * dpr).round()));
    let text_w = plan
        .legend
        .iter()
        .filter_map(|e| ctx.measure_text(&e.label).ok())
        .map(|m| m.width() as f32)
        .fold(0.0, f32::max);
    let box_w = pad * 3.0 + swatch + text_w;
    let box_h = pad * 2.0 + row * plan.legend.len() as f32 - (row - swatch);
    let bx = px + pw - box_w - pad;
    let by = py + pad;

    ctx.set_fill_style_str("rgba(255, 255, 255, 0.8)");
    ctx.fill_rect(bx as f64, by as f64, box_w as f64, box_h as f64);
    ctx.set_stroke_style_str("lightgray");
    ctx.set_line_width(dpr as f64);
    ctx.stroke_rect(bx as f64, by as f64, box_w as f64, box_h as f64);

    ctx.set_text_align("left");
    ctx.set_text_baseline("middle");
    for (i, entry) in plan.legend.iter().enumerate() {
        let y = by + pad + row * i as f32;
        ctx.set_fill_style_str(entry.color.css_name());
        ctx.fill_rect((bx + pad) as f64, y as f64, swatch as f64, swatch as f64);
        ctx.set_fill_style_str("black");
        ctx.fill_text(
            &entry.label,
            (bx + pad * 2.0 + swatch) as f64,
            (y + swatch * 0.5) as f64,
        )?;
    }
    Ok(())
}
