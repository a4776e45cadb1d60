//! Immediate-mode form widgets drawn by a host renderer.
//!
//! The host owns the window, the event loop and the pixels. Each frame it
//! collects input into a `Vec<Event>`, hands the batch to a [`Form`] (or to
//! individual widgets), and then asks every widget to draw itself onto a
//! [`Canvas`]. Text extents come from a host-supplied [`TextMeasure`].

mod button;
mod canvas;
mod color;
mod edit;
mod error;
mod event;
mod focus;
mod form;
mod frame;
#[cfg(windows)]
pub mod gdi;
mod geom;
mod input_box;
mod label;
mod measure;
mod table;
mod text_box;

pub use button::*;
pub use canvas::*;
pub use color::*;
pub use edit::*;
pub use error::{Error, Result};
pub use event::*;
pub use focus::*;
pub use form::*;
pub use frame::{BoxFrame, TextAlign};
pub use geom::*;
pub use input_box::*;
pub use label::Label;
pub use measure::*;
pub use table::*;
pub use text_box::*;

use static_assertions::assert_not_impl_any;
use std::rc::Rc;
use tracing::{debug, trace};

assert_not_impl_any!(TextEditState: Send, Sync);
assert_not_impl_any!(InputBox: Send, Sync);
assert_not_impl_any!(Form: Send, Sync);
