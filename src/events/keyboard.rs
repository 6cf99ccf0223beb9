use crate::camera::OrbitCamera;
use crate::core::constants::{ORBIT_KEY_NUDGE, ORBIT_PITCH_MAX, ORBIT_PITCH_MIN};
use crate::overlay;
use crate::video::VideoScreen;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    camera: &Rc<RefCell<OrbitCamera>>,
    video: &Rc<VideoScreen>,
    canvas: &web::HtmlCanvasElement,
) {
    match ev.key().as_str() {
        "m" | "M" => {
            let muted = video.toggle_muted();
            if let Some(doc) = crate::dom::window_document() {
                overlay::update_mute_button(&doc, muted);
            }
            log::info!("[keys] muted={}", muted);
        }
        "ArrowLeft" => {
            camera.borrow_mut().yaw += ORBIT_KEY_NUDGE;
            ev.prevent_default();
        }
        "ArrowRight" => {
            camera.borrow_mut().yaw -= ORBIT_KEY_NUDGE;
            ev.prevent_default();
        }
        "ArrowUp" => {
            let mut cam = camera.borrow_mut();
            cam.pitch = (cam.pitch + ORBIT_KEY_NUDGE).clamp(ORBIT_PITCH_MIN, ORBIT_PITCH_MAX);
            ev.prevent_default();
        }
        "ArrowDown" => {
            let mut cam = camera.borrow_mut();
            cam.pitch = (cam.pitch - ORBIT_KEY_NUDGE).clamp(ORBIT_PITCH_MIN, ORBIT_PITCH_MAX);
            ev.prevent_default();
        }
        "Enter" => {
            if let Some(win) = web::window() {
                if let Some(doc) = win.document() {
                    if doc.fullscreen_element().is_some() {
                        _ = doc.exit_fullscreen();
                    } else {
                        _ = canvas.request_fullscreen();
                    }
                }
            }
            ev.prevent_default();
        }
        "Escape" => {
            if let Some(win) = web::window() {
                if let Some(doc) = win.document() {
                    _ = doc.exit_fullscreen();
                }
            }
        }
        _ => {}
    }
}

// Wire an 'H' key handler to toggle the help overlay
pub fn wire_overlay_toggle_h(document: &web::Document) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                let key = ev.key();
                if key == "h" || key == "H" {
                    crate::overlay::toggle(&doc);
                    ev.prevent_default();
                }
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn wire_global_keydown(
    camera: Rc<RefCell<OrbitCamera>>,
    video: Rc<VideoScreen>,
    canvas: web::HtmlCanvasElement,
) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                super::keyboard::handle_global_keydown(&ev, &camera, &video, &canvas);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
