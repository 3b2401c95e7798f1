//! DOM listeners. They only enqueue [`ControlSignal`]s; the frame callback
//! applies them to the viewer.

use crate::constants::{
    CAMERA_SLIDERS, EXPORT_BUTTON_ID, GENERATE_BUTTON_ID, ORIENTATION_SLIDERS, PARAM_INPUT_IDS,
    SIGNAL_QUEUE_INLINE, WHEEL_LINE_PX, WHEEL_PAGE_PX,
};
use crate::dom::{add_click_listener, listen};
use crate::input::{drag_mode_for, wheel_delta_px};
use pack_core::{ControlSignal, PointerInput};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub type SignalQueue = Rc<RefCell<SmallVec<[ControlSignal; SIGNAL_QUEUE_INLINE]>>>;

fn push(queue: &SignalQueue, signal: ControlSignal) {
    queue.borrow_mut().push(signal);
}

fn on_input(document: &web::Document, id: &str, queue: &SignalQueue, signal: ControlSignal) {
    let Some(el) = document.get_element_by_id(id) else {
        log::warn!("missing #{}; input handler not attached", id);
        return;
    };
    let queue = queue.clone();
    listen(&el, "input", move |_: web::Event| push(&queue, signal));
}

pub fn wire_form(document: &web::Document, queue: &SignalQueue) {
    for id in PARAM_INPUT_IDS {
        on_input(document, id, queue, ControlSignal::ParameterChanged);
        // Enter in any form field generates, like a form submit
        if let Some(el) = document.get_element_by_id(id) {
            let queue = queue.clone();
            listen(&el, "keydown", move |ev: web::KeyboardEvent| {
                if ev.key() == "Enter" {
                    push(&queue, ControlSignal::GenerateRequested);
                }
            });
        }
    }
    for (slider, _) in ORIENTATION_SLIDERS {
        on_input(document, slider, queue, ControlSignal::OrientationChanged);
    }
    for (slider, _) in CAMERA_SLIDERS {
        on_input(document, slider, queue, ControlSignal::CameraChanged);
    }

    let q = queue.clone();
    add_click_listener(document, GENERATE_BUTTON_ID, move || {
        push(&q, ControlSignal::GenerateRequested)
    });
    let q = queue.clone();
    add_click_listener(document, EXPORT_BUTTON_ID, move || {
        push(&q, ControlSignal::ExportRequested)
    });
}

/// Orbit, pan and zoom on the preview canvas.
pub fn wire_pointer(canvas: &web::HtmlCanvasElement, queue: &SignalQueue) {
    let q = queue.clone();
    let c = canvas.clone();
    listen(canvas, "pointerdown", move |ev: web::PointerEvent| {
        let Some(mode) = drag_mode_for(ev.button(), ev.shift_key()) else {
            return;
        };
        _ = c.set_pointer_capture(ev.pointer_id());
        push(
            &q,
            ControlSignal::Pointer(PointerInput::Down {
                mode,
                x: ev.offset_x() as f32,
                y: ev.offset_y() as f32,
            }),
        );
    });

    let q = queue.clone();
    listen(canvas, "pointermove", move |ev: web::PointerEvent| {
        // buttons == 0 means a hover, not a drag
        if ev.buttons() == 0 {
            return;
        }
        push(
            &q,
            ControlSignal::Pointer(PointerInput::Move {
                x: ev.offset_x() as f32,
                y: ev.offset_y() as f32,
            }),
        );
    });

    for name in ["pointerup", "pointercancel"] {
        let q = queue.clone();
        listen(canvas, name, move |_: web::PointerEvent| {
            push(&q, ControlSignal::Pointer(PointerInput::Up))
        });
    }

    let q = queue.clone();
    listen(canvas, "wheel", move |ev: web::WheelEvent| {
        ev.prevent_default();
        let delta_y = wheel_delta_px(ev.delta_y(), ev.delta_mode(), WHEEL_LINE_PX, WHEEL_PAGE_PX);
        push(&q, ControlSignal::Pointer(PointerInput::Wheel { delta_y }));
    });

    listen(canvas, "contextmenu", |ev: web::MouseEvent| ev.prevent_default());
}
