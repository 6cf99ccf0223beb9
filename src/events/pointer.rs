use crate::camera::OrbitCamera;
use crate::core::constants::{
    CLICK_DRAG_THRESHOLD_PX, ORBIT_DISTANCE_MAX, ORBIT_DISTANCE_MIN, ORBIT_PITCH_MAX,
    ORBIT_PITCH_MIN, ORBIT_SENSITIVITY, ORBIT_ZOOM_PER_WHEEL_LINE,
};
use crate::core::{SeatDescriptor, SelectionState};
use crate::input;
use crate::overlay;
use glam::Vec3;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub seats: Rc<Vec<SeatDescriptor>>,
    pub seat_positions: Rc<Vec<Vec3>>,
    pub selection: Rc<RefCell<SelectionState>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub mouse_state: Rc<RefCell<input::MouseState>>,
    pub hover_index: Rc<RefCell<Option<usize>>>,
    pub drag_state: Rc<RefCell<input::DragState>>,
    pub pick_radius: f32,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
    wire_pointerup(&w);
    wire_wheel(&w);
}

fn wire_pointermove(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_px(&ev, &w.canvas);
        let (dx, dy) = {
            let mut ms = w.mouse_state.borrow_mut();
            let d = (pos.x - ms.x, pos.y - ms.y);
            ms.x = pos.x;
            ms.y = pos.y;
            d
        };

        if w.drag_state.borrow().active {
            // Orbit drag; hover is left alone until the button comes back up.
            w.drag_state.borrow_mut().travel_px += (dx * dx + dy * dy).sqrt();
            let mut cam = w.camera.borrow_mut();
            cam.yaw -= dx * ORBIT_SENSITIVITY;
            cam.pitch = (cam.pitch + dy * ORBIT_SENSITIVITY).clamp(ORBIT_PITCH_MIN, ORBIT_PITCH_MAX);
        } else {
            let (ro, rd) = w.camera.borrow().screen_to_world_ray(
                pos.x,
                pos.y,
                w.canvas.width() as f32,
                w.canvas.height() as f32,
            );
            *w.hover_index.borrow_mut() =
                input::pick_seat(ro, rd, &w.seat_positions, w.pick_radius);
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerdown(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        {
            let mut ds = w.drag_state.borrow_mut();
            ds.active = true;
            ds.travel_px = 0.0;
        }
        w.mouse_state.borrow_mut().down = true;
        _ = w.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerup(w: &InputWiring) {
    let w = w.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let was_click = {
            let mut ds = w.drag_state.borrow_mut();
            let travel = ds.travel_px;
            ds.active = false;
            travel < CLICK_DRAG_THRESHOLD_PX
        };

        if was_click {
            if let Some(i) = *w.hover_index.borrow() {
                let label = w.seats[i].label.clone();
                match w.selection.borrow_mut().toggle(&label) {
                    Ok(selected) => {
                        log::info!("[click] seat {} selected={}", label, selected);
                    }
                    Err(e) => log::warn!("[click] {}", e),
                }
            }
        }
        w.mouse_state.borrow_mut().down = false;
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_wheel(w: &InputWiring) {
    let w = w.clone();
    let canvas_for_listener = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        let lines = (ev.delta_y() / 100.0) as f32;
        let mut cam = w.camera.borrow_mut();
        cam.distance = (cam.distance + lines * ORBIT_ZOOM_PER_WHEEL_LINE)
            .clamp(ORBIT_DISTANCE_MIN, ORBIT_DISTANCE_MAX);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Register the DOM observer: every selection change rewrites the summary line.
pub fn wire_selection_summary(selection: &Rc<RefCell<SelectionState>>) {
    selection.borrow_mut().subscribe(Box::new(|change| {
        if let Some(doc) = crate::dom::window_document() {
            overlay::update_seat_summary(&doc, &change.selected_labels);
        }
    }));
}
