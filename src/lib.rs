#![cfg(target_arch = "wasm32")]
use crate::camera::OrbitCamera;
use crate::core::constants::{
    ORBIT_INITIAL_DISTANCE, ORBIT_INITIAL_PITCH, ORBIT_INITIAL_YAW, ORBIT_TARGET,
    PICK_RADIUS_PER_SCALE,
};
use crate::core::{generate_seats, room_boxes, LayoutParams, SelectionState};
use crate::video::VideoScreen;
use glam::Vec3;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;
mod video;

const VIDEO_URL: &str = "video.mp4";

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

fn wire_mute_button(document: &web::Document, video: &Rc<VideoScreen>) {
    let video = video.clone();
    dom::add_click_listener(document, "mute-toggle", move || {
        let muted = video.toggle_muted();
        if let Some(doc) = dom::window_document() {
            overlay::update_mute_button(&doc, muted);
        }
    });
}

fn wire_overlay_buttons(document: &web::Document) {
    dom::add_click_listener(document, "overlay-close", || {
        if let Some(doc) = dom::window_document() {
            overlay::hide(&doc);
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cinema-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    // Seat grid and selection, the scene's single source of truth
    let params = LayoutParams::default();
    let seats = Rc::new(generate_seats(&params)?);
    let seat_positions: Rc<Vec<Vec3>> = Rc::new(seats.iter().map(|s| s.position).collect());
    log::info!(
        "[layout] rows={} seats_per_row={} seats={}",
        params.rows,
        params.seats_per_row,
        seats.len()
    );

    let selection = Rc::new(RefCell::new(SelectionState::new(
        seats.iter().map(|s| s.label.clone()),
    )));
    events::wire_selection_summary(&selection);
    overlay::update_seat_summary(&document, &[]);

    let camera = Rc::new(RefCell::new(OrbitCamera::new(
        Vec3::from_array(ORBIT_TARGET),
        ORBIT_INITIAL_YAW,
        ORBIT_INITIAL_PITCH,
        ORBIT_INITIAL_DISTANCE,
    )));

    let video = Rc::new(VideoScreen::new(&document, VIDEO_URL)?);
    overlay::update_mute_button(&document, video.muted());
    wire_mute_button(&document, &video);
    wire_overlay_buttons(&document);
    events::wire_overlay_toggle_h(&document);
    events::wire_global_keydown(camera.clone(), video.clone(), canvas.clone());

    // ---------------- Interaction state ----------------
    let mouse_state = Rc::new(RefCell::new(input::MouseState::default()));
    let hover_index = Rc::new(RefCell::new(None::<usize>));
    let drag_state = Rc::new(RefCell::new(input::DragState::default()));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        seats: seats.clone(),
        seat_positions: seat_positions.clone(),
        selection: selection.clone(),
        camera: camera.clone(),
        mouse_state: mouse_state.clone(),
        hover_index: hover_index.clone(),
        drag_state: drag_state.clone(),
        pick_radius: PICK_RADIUS_PER_SCALE * params.chair_scale,
    });

    // Static scenery is built once; chairs are rebuilt per frame with
    // selection-dependent colors.
    let static_boxes = room_boxes();
    let max_boxes = static_boxes.len() + seats.len() * 6;
    let gpu = frame::init_gpu(&canvas, max_boxes).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        seats,
        selection,
        hover_index,
        camera,
        canvas,
        video,
        gpu,
        static_boxes,
        chair_scale: params.chair_scale,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
