//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for index-ordered Leptos lists using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! The crate only tracks the gesture. Callers receive `(from, to)` row
//! indices on drop and decide how to reorder their own data.

use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// How long a finished drag keeps swallowing the trailing click
const CLICK_SUPPRESS_MS: u64 = 100;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_read: ReadSignal<Option<usize>>,
    pub dragging_write: WriteSignal<Option<usize>>,
    pub drop_target_read: ReadSignal<Option<usize>>,
    pub drop_target_write: WriteSignal<Option<usize>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending row index (mousedown but not yet dragging)
    pub pending_read: ReadSignal<Option<usize>>,
    pub pending_write: WriteSignal<Option<usize>>,
    /// Start position for movement detection
    pub start_read: ReadSignal<(i32, i32)>,
    pub start_write: WriteSignal<(i32, i32)>,
}

impl DndSignals {
    /// Whether the row at `index` is being dragged
    pub fn is_dragging(&self, index: usize) -> bool {
        self.dragging_read.get() == Some(index)
    }

    /// Whether the row at `index` is the current drop target
    pub fn is_drop_target(&self, index: usize) -> bool {
        self.drop_target_read.get() == Some(index)
    }

    /// True right after a drop; click handlers on rows should bail out
    pub fn should_suppress_click(&self) -> bool {
        self.drag_just_ended_read.get_untracked()
    }
}

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_read, dragging_write) = signal(None::<usize>);
    let (drop_target_read, drop_target_write) = signal(None::<usize>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_read, pending_write) = signal(None::<usize>);
    let (start_read, start_write) = signal((0i32, 0i32));
    DndSignals {
        dragging_read,
        dragging_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_read,
        pending_write,
        start_read,
        start_write,
    }
}

/// Whether the pointer moved far enough from `start` to count as a drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

/// Resolve a finished gesture into a `(from, to)` move, if it is one
pub fn resolve_drop(dragging: Option<usize>, target: Option<usize>) -> Option<(usize, usize)> {
    match (dragging, target) {
        (Some(from), Some(to)) if from != to => Some((from, to)),
        _ => None,
    }
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    let was_dragging = dnd.dragging_read.get_untracked().is_some();
    dnd.dragging_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_write.set(None);

    if was_dragging {
        dnd.drag_just_ended_write.set(true);
        let clear = dnd.drag_just_ended_write;
        set_timeout(
            move || {
                let _ = clear.try_set(false);
            },
            Duration::from_millis(CLICK_SUPPRESS_MS),
        );
    }
}

/// Create mousedown handler for draggable rows
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Controls inside a row keep their own behaviour
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
            }
            dnd.pending_write.set(Some(index));
            dnd.start_write.set((ev.client_x(), ev.client_y()));
        }
    }
}

/// Create mouseenter handler for rows (become drop target)
pub fn make_on_row_mouseenter(dnd: DndSignals, index: usize) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(index));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_read.get_untracked().is_some() {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mousemove/mouseup handlers for the current owner.
///
/// `on_drop(from, to)` fires when a drag ends over a different row.
/// Listeners are removed when the owning component is cleaned up.
pub fn bind_global_handlers<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(usize, usize) + 'static,
{
    let on_mousemove = window_event_listener(leptos::ev::mousemove, move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_read.get_untracked().is_none() {
            let start = dnd.start_read.get_untracked();
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_write.set(pending);
            }
        }
    });

    let on_mouseup = window_event_listener(leptos::ev::mouseup, move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_read.get_untracked();
        let target = dnd.drop_target_read.get_untracked();

        end_drag(&dnd);
        if let Some((from, to)) = resolve_drop(dragging, target) {
            on_drop(from, to);
        }
    });

    on_cleanup(move || {
        on_mousemove.remove();
        on_mouseup.remove();
    });
}
