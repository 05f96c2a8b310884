//! Leptos Drag Glue
//!
//! Mouse-event wiring for [`OrderList`] rows.
//! Uses movement threshold to distinguish click from drag.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::list::{Orderable, OrderList};

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Signal bundle for one reorderable row list.
///
/// `list` owns the ordering state; the remaining signals track a pending
/// press before it crosses the drag threshold. Two instances never share
/// drag state; a row cannot be dragged across collections.
pub struct ListDnd<T: Send + Sync + 'static> {
    pub list: RwSignal<OrderList<T>>,
    pending: RwSignal<Option<u32>>,
    start_x: RwSignal<i32>,
    start_y: RwSignal<i32>,
}

impl<T: Send + Sync + 'static> Clone for ListDnd<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ListDnd<T> {}

pub fn create_list_dnd<T>() -> ListDnd<T>
where
    T: Orderable + Clone + Send + Sync + 'static,
{
    ListDnd {
        list: RwSignal::new(OrderList::new()),
        pending: RwSignal::new(None),
        start_x: RwSignal::new(0),
        start_y: RwSignal::new(0),
    }
}

/// Create mousedown handler for draggable rows.
/// Records a pending drag with its start position; presses on inputs and
/// buttons (row actions) never start a drag.
pub fn make_on_mousedown<T>(
    dnd: ListDnd<T>,
    item_id: u32,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    T: Orderable + Clone + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() {
                    return;
                }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() {
                    return;
                }
            }
            dnd.pending.set(Some(item_id));
            dnd.start_x.set(ev.client_x());
            dnd.start_y.set(ev.client_y());
        }
    }
}

/// Create mouseenter handler for rows: repositions the dragged row at the
/// hovered row's slot while a drag is active.
pub fn make_on_row_mouseenter<T>(
    dnd: ListDnd<T>,
    item_id: u32,
) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    T: Orderable + Clone + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.list.with_untracked(|l| l.dragging().is_some()) {
            dnd.list.update(|l| l.drag_over(item_id));
        }
    }
}

/// Create mouseleave handler: clears the hover highlight only.
pub fn make_on_row_mouseleave<T>(dnd: ListDnd<T>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    T: Orderable + Clone + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.list.with_untracked(|l| l.dragging().is_some()) {
            dnd.list.update(|l| l.drag_leave());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
fn bind_global_mousemove<T>(dnd: ListDnd<T>)
where
    T: Orderable + Clone + Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if let Some(id) = pending {
            if dnd.list.with_untracked(|l| l.dragging().is_none()) {
                let dx = (ev.client_x() - dnd.start_x.get_untracked()).abs();
                let dy = (ev.client_y() - dnd.start_y.get_untracked()).abs();

                if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                    dnd.list.update(|l| l.begin_drag(id));
                }
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback(
                "mousemove",
                on_mousemove.as_ref().unchecked_ref(),
            );
        }
    }
    on_mousemove.forget();
}

/// Bind the document-level listeners one panel needs: mousemove promotes a
/// pending press into a drag, mouseup ends the gesture wherever it lands.
/// DragOver events arrive strictly in pointer order on the UI event loop, so
/// the in-memory order at mouseup is deterministic for a given gesture.
pub fn bind_global_listeners<T>(dnd: ListDnd<T>)
where
    T: Orderable + Clone + Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        dnd.pending.set(None);
        if dnd.list.with_untracked(|l| l.dragging().is_some()) {
            dnd.list.update(|l| l.end_drag());
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    bind_global_mousemove(dnd);
}
