use crate::controls::DomControls;
use crate::events::SignalQueue;
use crate::input;
use crate::render::GpuState;
use instant::Instant;
use pack_core::Viewer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub viewer: Viewer<GpuState<'a>>,
    pub controls: DomControls,
    pub signals: SignalQueue,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        // take the queue first so listeners firing during handling never see a live borrow
        let pending = std::mem::take(&mut *self.signals.borrow_mut());
        for signal in pending {
            self.viewer.handle(signal, &mut self.controls);
        }

        let (w, h) = (self.canvas.width(), self.canvas.height());
        self.viewer.backend_mut().resize_if_needed(w, h);
        if let Err(e) = self.viewer.frame(dt_sec, &mut self.controls) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> anyhow::Result<GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    GpuState::new(leaked_canvas).await
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Drive the viewer from requestAnimationFrame until it is torn down.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let mut ctx = frame_ctx.borrow_mut();
        ctx.frame();
        if ctx.viewer.is_running() {
            request_frame(&tick_clone);
        } else {
            log::info!("[frame] loop stopped");
        }
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

/// Release GPU buffers when the page is unloaded for good.
pub fn wire_teardown(frame_ctx: &Rc<RefCell<FrameContext<'static>>>) {
    let Some(window) = web::window() else {
        return;
    };
    let ctx = frame_ctx.clone();
    crate::dom::listen(&window, "pagehide", move |ev: web::PageTransitionEvent| {
        if !input::teardown_on_pagehide(ev.persisted()) {
            log::info!("[frame] page cached; keeping the viewer");
            return;
        }
        if let Ok(mut ctx) = ctx.try_borrow_mut() {
            ctx.viewer.teardown();
        }
    });
}
