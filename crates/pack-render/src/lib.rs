pub mod capture;
mod pipelines;
pub mod renderer;
mod targets;
pub mod uniforms;

pub use capture::{capture_frame, CapturedFrame};
pub use renderer::{PackBuffers, SceneRenderer};
pub use uniforms::FrameUniforms;
