pub mod orientation;
pub mod pointer;
pub mod scroll;

pub use orientation::probe_orientation;
pub use pointer::wire_pointermove;
pub use scroll::wire_scroll;

use crate::core::{InputEvent, InputState};
use std::cell::Cell;
use std::rc::Rc;

/// Latest input snapshot: written by event handlers, copied by the frame loop.
pub type InputCell = Rc<Cell<InputState>>;

#[inline]
pub fn push(cell: &InputCell, event: InputEvent) {
    cell.set(cell.get().apply(event));
}
