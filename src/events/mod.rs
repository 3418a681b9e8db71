pub mod controls;
pub mod pointer;

pub use controls::{wire_controls, ControlWiring};
pub use pointer::{wire_pointer_handlers, PointerWiring};

use crate::room::{DomRoom, DomVisuals};
use seatview_core::Controller;
use std::cell::RefCell;
use std::rc::Rc;

pub type SharedController = Rc<RefCell<Controller<DomRoom, DomVisuals>>>;
