#![cfg(target_arch = "wasm32")]
//! Browser front-end: the labeled rack scene on `#rack-canvas` (WebGPU) with
//! label text on `#label-canvas`, and the 2D floor plan on `#floorplan-canvas`.
//! Any canvas missing from the page is skipped.

mod dom;
mod input;
mod overlay;
mod plot;
mod render;

use instant::Instant;
use rack_core::{
    build_scene, draw_warehouse_layout, sample_racks, FloorPlanOptions, OrbitCamera, Palette,
    RackAddressing, SceneStyle, SceneVariant, Triangulation, WarehouseParams,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

const STATS_INTERVAL: Duration = Duration::from_secs(5);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("rack-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    if let Some(canvas) = dom::canvas_by_id(&document, "floorplan-canvas") {
        init_floor_plan(canvas)?;
    }
    if let Some(canvas) = dom::canvas_by_id(&document, "rack-canvas") {
        let labels = dom::canvas_by_id(&document, "label-canvas");
        init_rack_view(canvas, labels).await?;
    }
    Ok(())
}

fn init_floor_plan(canvas: web::HtmlCanvasElement) -> anyhow::Result<()> {
    let plan = draw_warehouse_layout(
        &sample_racks(),
        &FloorPlanOptions::default(),
        &Palette::default(),
    )?;
    let ctx = dom::context_2d(&canvas)?;
    let redraw = Rc::new(move || {
        dom::sync_canvas_backing_size(&canvas);
        let dpr = dom::device_pixel_ratio() as f32;
        if let Err(e) = plot::draw_floor_plan(&ctx, &canvas, &plan, dpr) {
            log::error!("floor plan draw error: {:?}", e);
        }
    });
    redraw();
    let redraw_on_resize = redraw.clone();
    dom::on_window_resize(move || redraw_on_resize());
    log::info!("floor plan drawn");
    Ok(())
}

async fn init_rack_view(
    canvas: web::HtmlCanvasElement,
    label_canvas: Option<web::HtmlCanvasElement>,
) -> anyhow::Result<()> {
    let scene = build_scene(
        &WarehouseParams::default(),
        &RackAddressing::default(),
        SceneVariant::Labeled,
    )?;
    let bounds = scene
        .bounds()
        .ok_or_else(|| anyhow::anyhow!("scene has no members to frame"))?;
    let mesh = scene.mesh(&SceneStyle::default(), Triangulation::Closed);

    // Avoid grabbing a 2D context here to allow WebGPU to acquire the canvas
    dom::sync_canvas_backing_size(&canvas);
    // Leak a canvas clone to satisfy the 'static lifetime for the surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    let mut gpu = render::GpuState::new(leaked_canvas, &mesh).await?;
    log::info!("{}", scene.title());

    let overlay = match label_canvas {
        Some(lc) => {
            dom::sync_canvas_backing_size(&lc);
            Some((dom::context_2d(&lc)?, lc))
        }
        None => None,
    };
    let view = Rc::new(RefCell::new(input::ViewState::new(OrbitCamera::for_scene(
        &bounds,
    ))));

    // The overlay sits above the WebGPU canvas, so it receives the pointer
    let input_target = overlay
        .as_ref()
        .map(|(_, lc)| lc.clone())
        .unwrap_or_else(|| canvas.clone());
    register_pointer_handlers(&input_target, &view)?;
    register_key_handler(&view)?;

    let labels = scene.labels;
    let mut frames = 0u32;
    let mut stats_since = Instant::now();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        // Keep WebGPU surface sized to canvas backing size
        dom::sync_canvas_backing_size(&canvas);
        let (w, h) = (canvas.width(), canvas.height());
        gpu.resize_if_needed(w, h);

        let view_proj = view.borrow().orbit.camera(w as f32 / h.max(1) as f32).view_proj();
        match gpu.render(view_proj) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost) => gpu.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("render error: out of memory; stopping");
                return;
            }
            Err(e) => log::warn!("render error: {:?}", e),
        }

        if let Some((ctx, lc)) = overlay.as_ref() {
            dom::sync_canvas_backing_size(lc);
            let mut v = view.borrow_mut();
            if v.take_overlay_redraw((w, h), (lc.width(), lc.height())) {
                let dpr = dom::device_pixel_ratio();
                if let Err(e) =
                    overlay::draw_labels(ctx, lc, &labels, view_proj, v.show_labels, dpr)
                {
                    log::error!("label overlay error: {:?}", e);
                }
            }
        }

        frames += 1;
        if stats_since.elapsed() >= STATS_INTERVAL {
            let fps = frames as f32 / stats_since.elapsed().as_secs_f32();
            log::debug!("[frame] {:.1} fps at {}x{}", fps, w, h);
            frames = 0;
            stats_since = Instant::now();
        }

        // Schedule next frame
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    if let Some(cb) = tick.borrow().as_ref() {
        window
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    }
    Ok(())
}

fn register_pointer_handlers(
    target: &web::HtmlCanvasElement,
    view: &Rc<RefCell<input::ViewState>>,
) -> anyhow::Result<()> {
    let js_err = |e: JsValue| anyhow::anyhow!(format!("{:?}", e));

    // Pointerdown: begin orbit drag
    {
        let view = view.clone();
        let el = target.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            if ev.button() != 0 {
                return;
            }
            let _ = el.set_pointer_capture(ev.pointer_id());
            view.borrow_mut()
                .pointer_down(input::pointer_css_px(&ev, &el));
        }) as Box<dyn FnMut(_)>);
        target
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        closure.forget();
    }
    {
        let view = view.clone();
        let el = target.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            view.borrow_mut()
                .pointer_move(input::pointer_css_px(&ev, &el));
        }) as Box<dyn FnMut(_)>);
        target
            .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        closure.forget();
    }
    for name in ["pointerup", "pointercancel"] {
        let view = view.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            view.borrow_mut().pointer_up();
        }) as Box<dyn FnMut(_)>);
        target
            .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        closure.forget();
    }
    // Wheel: zoom; line-mode deltas are scaled to roughly pixel units
    {
        let view = view.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            ev.prevent_default();
            let scale = if ev.delta_mode() == web::WheelEvent::DOM_DELTA_LINE {
                100.0
            } else {
                1.0
            };
            view.borrow_mut().wheel((ev.delta_y() * scale) as f32);
        }) as Box<dyn FnMut(_)>);
        target
            .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref())
            .map_err(js_err)?;
        closure.forget();
    }
    Ok(())
}

fn register_key_handler(view: &Rc<RefCell<input::ViewState>>) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let view = view.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() {
            return;
        }
        if view.borrow_mut().key(&ev.key()) {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    window
        .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    closure.forget();
    Ok(())
}
