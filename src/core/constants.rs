// Shared interaction and camera tuning constants for the cinema viewer.

// Seat picking
pub const PICK_RADIUS_PER_SCALE: f32 = 0.45; // ray-sphere radius as a fraction of chair scale
pub const CLICK_DRAG_THRESHOLD_PX: f32 = 6.0; // pointer travel below this counts as a click

// Orbit camera
pub const ORBIT_TARGET: [f32; 3] = [0.0, 1.0, 1.5]; // roughly the middle of the seat grid
pub const ORBIT_INITIAL_YAW: f32 = std::f32::consts::PI; // look from behind the seats toward the stage
pub const ORBIT_INITIAL_PITCH: f32 = 0.35;
pub const ORBIT_INITIAL_DISTANCE: f32 = 6.0;
pub const ORBIT_SENSITIVITY: f32 = 0.008; // radians per backing-store pixel
pub const ORBIT_PITCH_MIN: f32 = -0.2;
pub const ORBIT_PITCH_MAX: f32 = 1.35;
pub const ORBIT_DISTANCE_MIN: f32 = 1.5;
pub const ORBIT_DISTANCE_MAX: f32 = 14.0;
pub const ORBIT_ZOOM_PER_WHEEL_LINE: f32 = 0.25;
pub const ORBIT_KEY_NUDGE: f32 = 0.08; // yaw/pitch step for arrow keys

// Seat highlight
pub const HOVER_BRIGHTEN: f32 = 1.4;
