use glam::{Vec2, Vec3};
use web_sys as web;

#[derive(Default, Clone, Copy)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub down: bool,
}

/// Orbit-drag bookkeeping. `travel_px` accumulates pointer motion while the
/// button is held so pointerup can tell a click from a drag.
#[derive(Default, Clone, Copy)]
pub struct DragState {
    pub active: bool,
    pub travel_px: f32,
}

#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let t = -b - disc.sqrt();
    (t >= 0.0).then_some(t)
}

/// Index of the nearest seat hit by the ray, treating each seat as a sphere
/// of `radius` around its position. Ties resolve to the closer hit.
pub fn pick_seat(
    ray_origin: Vec3,
    ray_dir: Vec3,
    seat_positions: &[Vec3],
    radius: f32,
) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, center) in seat_positions.iter().enumerate() {
        if let Some(t) = ray_sphere(ray_origin, ray_dir, *center, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

// ---------------- Pointer helpers ----------------
#[inline]
pub fn pointer_canvas_px(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let sx = (x_css / rect.width() as f32) * canvas.width() as f32;
    let sy = (y_css / rect.height() as f32) * canvas.height() as f32;
    Vec2::new(sx, sy)
}
