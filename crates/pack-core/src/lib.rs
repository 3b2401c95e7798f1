pub mod camera;
pub mod constants;
pub mod controls;
pub mod layout;
pub mod mesh;
pub mod orbit;
pub mod orientation;
pub mod params;
pub mod readout;
pub mod scene;
pub mod viewer;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");
pub static LINES_WGSL: &str = include_str!("../shaders/lines.wgsl");

pub use camera::*;
pub use controls::*;
pub use layout::*;
pub use orbit::*;
pub use orientation::*;
pub use params::*;
pub use readout::*;
pub use scene::*;
pub use viewer::*;
