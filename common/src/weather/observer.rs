// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;
use std::rc::Rc;

use crate::{Measurement, StationError};

/// Shared handle to an observer, as kept in the subject's registry.
///
/// Removal compares handles by identity, so keep a clone of the handle you registered.
pub type ObserverPointer = Rc<RefCell<dyn Observer>>;

/// Receives every new measurement recorded by a [`Subject`](super::Subject).
pub trait Observer {
    /// Called once per recorded measurement, in registration order.
    ///
    /// An error aborts the remaining notifications of that round.
    fn update(&mut self, measurement: Measurement) -> Result<(), StationError>;
}

/// An observer that can render its current state.
pub trait DisplayElement {
    /// Renders the current state as text, without writing it anywhere.
    fn render(&self) -> Result<String, StationError>;

    /// Writes the rendered state to the display output.
    fn display(&mut self) -> Result<(), StationError>;
}
