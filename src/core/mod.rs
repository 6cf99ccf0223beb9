pub mod constants;
pub mod layout;
pub mod scene;
pub mod selection;

pub use constants::*;
pub use layout::*;
pub use scene::*;
pub use selection::*;

// Shaders bundled as string constants
pub static SCENE_WGSL: &str = include_str!("../../shaders/scene.wgsl");
pub static SCREEN_WGSL: &str = include_str!("../../shaders/screen.wgsl");
