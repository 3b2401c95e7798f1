pub mod gpu;
pub mod keyboard;

pub use gpu::GpuState;
pub use keyboard::{action_for_key, KeyAction, KeyboardControls};
