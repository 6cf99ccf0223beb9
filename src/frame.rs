use crate::camera::OrbitCamera;
use crate::core::constants::HOVER_BRIGHTEN;
use crate::core::{chair_boxes, BoxPart, SeatDescriptor, SelectionState};
use crate::render;
use crate::video::VideoScreen;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub seats: Rc<Vec<SeatDescriptor>>,
    pub selection: Rc<RefCell<SelectionState>>,
    pub hover_index: Rc<RefCell<Option<usize>>>,
    pub camera: Rc<RefCell<OrbitCamera>>,

    pub canvas: web::HtmlCanvasElement,
    pub video: Rc<VideoScreen>,
    pub gpu: Option<render::GpuState<'a>>,

    pub static_boxes: Vec<BoxPart>,
    pub chair_scale: f32,

    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();

        let mut boxes = self.static_boxes.clone();
        {
            let selection = self.selection.borrow();
            let hover = *self.hover_index.borrow();
            for (i, seat) in self.seats.iter().enumerate() {
                let selected = selection.is_selected(&seat.label);
                let mut parts = chair_boxes(seat.position, self.chair_scale, selected);
                if hover == Some(i) {
                    for part in &mut parts {
                        part.color = brighten(part.color, HOVER_BRIGHTEN);
                    }
                }
                boxes.extend_from_slice(&parts);
            }
        }

        let (eye, view_proj) = {
            let cam = self.camera.borrow();
            let aspect = self.canvas.width() as f32 / self.canvas.height().max(1) as f32;
            (cam.eye(), cam.projection_matrix(aspect) * cam.view_matrix())
        };

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(self.canvas.width(), self.canvas.height());
            g.update_screen_video(&self.video);
            if let Err(e) = g.render(dt_sec, view_proj, eye, &boxes) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

#[inline]
fn brighten(color: [f32; 4], factor: f32) -> [f32; 4] {
    [
        (color[0] * factor).min(1.0),
        (color[1] * factor).min(1.0),
        (color[2] * factor).min(1.0),
        color[3],
    ]
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    max_boxes: usize,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, max_boxes).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
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
