use pack_core::{ControlSignal, DragMode, PointerInput, Viewer};
use pack_native::{action_for_key, GpuState, KeyAction, KeyboardControls};
use std::time::Instant;
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::{ModifiersState, PhysicalKey},
    window::WindowBuilder,
};

const WINDOW_WIDTH: f64 = 1280.0;
const WINDOW_HEIGHT: f64 = 800.0;
const WHEEL_LINE_PX: f32 = 16.0;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Roll Pack")
        .with_inner_size(LogicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
        .build(&event_loop)?;

    let gpu = pollster::block_on(GpuState::new(&window))?;
    let mut controls = KeyboardControls::new();
    let mut viewer = Viewer::init(gpu, &mut controls);
    let mut modifiers = ModifiersState::empty();
    let mut cursor = (0.0_f32, 0.0_f32);
    let mut last_frame = Instant::now();

    event_loop.run(move |event, elwt| {
        let signal = match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => {
                    viewer.backend_mut().resize(size);
                    None
                }
                WindowEvent::CloseRequested => {
                    viewer.teardown();
                    elwt.exit();
                    None
                }
                WindowEvent::ModifiersChanged(m) => {
                    modifiers = m.state();
                    None
                }
                WindowEvent::KeyboardInput {
                    event:
                        KeyEvent {
                            physical_key: PhysicalKey::Code(code),
                            state: ElementState::Pressed,
                            ..
                        },
                    ..
                } => match action_for_key(code) {
                    Some(KeyAction::Quit) => {
                        viewer.teardown();
                        elwt.exit();
                        None
                    }
                    Some(action) => controls.apply(action),
                    None => None,
                },
                WindowEvent::MouseInput { state, button, .. } => {
                    pointer_button(state, button, modifiers.shift_key(), cursor)
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = (position.x as f32, position.y as f32);
                    Some(ControlSignal::Pointer(PointerInput::Move {
                        x: cursor.0,
                        y: cursor.1,
                    }))
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    // winit reports scroll-up as positive; the orbit expects browser sign
                    let delta_y = match delta {
                        MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_PX,
                        MouseScrollDelta::PixelDelta(p) => -p.y as f32,
                    };
                    Some(ControlSignal::Pointer(PointerInput::Wheel { delta_y }))
                }
                _ => None,
            },
            Event::AboutToWait => {
                let now = Instant::now();
                let dt_sec = (now - last_frame).as_secs_f32();
                last_frame = now;
                if let Err(e) = viewer.frame(dt_sec, &mut controls) {
                    match e.downcast_ref::<wgpu::SurfaceError>() {
                        Some(wgpu::SurfaceError::OutOfMemory) => {
                            log::error!("render error: {:?}", e);
                            viewer.teardown();
                            elwt.exit();
                        }
                        _ => log::warn!("render error: {:?}", e),
                    }
                }
                if viewer.is_running() {
                    viewer.backend().window.request_redraw();
                }
                None
            }
            _ => None,
        };

        if let Some(signal) = signal {
            viewer.handle(signal, &mut controls);
        }
        if let Some(title) = controls.take_title() {
            viewer.backend().window.set_title(&title);
        }
    })?;
    Ok(())
}

/// Left drags orbit, right or shift+left drags pan.
fn pointer_button(
    state: ElementState,
    button: MouseButton,
    shift: bool,
    (x, y): (f32, f32),
) -> Option<ControlSignal> {
    if state == ElementState::Released {
        return Some(ControlSignal::Pointer(PointerInput::Up));
    }
    let mode = match button {
        MouseButton::Left if shift => DragMode::Pan,
        MouseButton::Left => DragMode::Rotate,
        MouseButton::Right | MouseButton::Middle => DragMode::Pan,
        _ => return None,
    };
    Some(ControlSignal::Pointer(PointerInput::Down { mode, x, y }))
}
