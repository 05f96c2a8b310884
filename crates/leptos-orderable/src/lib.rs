//! Leptos Orderable Lists
//!
//! Drag-to-reorder row lists for Leptos: a framework-free ordering state
//! machine ([`OrderList`]) plus mouse-event glue that distinguishes clicks
//! from drags with a movement threshold.

mod dnd;
mod list;

pub use dnd::{
    bind_global_listeners, create_list_dnd, make_on_mousedown, make_on_row_mouseenter,
    make_on_row_mouseleave, ListDnd,
};
pub use list::{Orderable, OrderList, PersistError};
