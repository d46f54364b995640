// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::rc::Rc;

use crate::weather::observer::ObserverPointer;
use crate::{Measurement, StationError};

/// Owner of observable state and the registry of its observers.
pub trait Subject {
    /// Appends `observer` to the registry. The same observer may be registered twice.
    fn register_observer(&mut self, observer: ObserverPointer);

    /// Removes the first registration of `observer`, if any.
    fn remove_observer(&mut self, observer: &ObserverPointer);

    /// Pushes the latest state to every registered observer.
    fn notify_observers(&self) -> Result<(), StationError>;
}

/// The weather station: records measurements and fans them out to observers.
#[derive(Default)]
pub struct WeatherData {
    observers: Vec<ObserverPointer>,
    history: Vec<Measurement>,
}

impl WeatherData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new reading and notifies every observer about it.
    ///
    /// Returns the first error raised by an observer; observers registered after it are
    /// not notified for this reading.
    pub fn measurements_changed(
        &mut self,
        temperature: f32,
        humidity: f32,
        pressure: f32,
    ) -> Result<(), StationError> {
        self.history
            .push(Measurement::new(temperature, humidity, pressure));
        self.notify_observers()
    }

    /// All recorded measurements, oldest first.
    pub fn history(&self) -> &[Measurement] {
        &self.history
    }

    pub fn latest(&self) -> Option<Measurement> {
        self.history.last().copied()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

impl Subject for WeatherData {
    fn register_observer(&mut self, observer: ObserverPointer) {
        self.observers.push(observer);
        log::debug!("Registered observer, {} in total", self.observers.len());
    }

    fn remove_observer(&mut self, observer: &ObserverPointer) {
        match self.observers.iter().position(|o| Rc::ptr_eq(o, observer)) {
            Some(index) => {
                self.observers.remove(index);
                log::debug!("Removed observer, {} left", self.observers.len());
            }
            None => log::debug!("Observer to remove is not registered"),
        }
    }

    fn notify_observers(&self) -> Result<(), StationError> {
        if self.observers.is_empty() {
            return Ok(());
        }

        let measurement = self.latest().ok_or(StationError::NoMeasurements)?;
        log::trace!(
            "Notifying {} observers of {:?}",
            self.observers.len(),
            measurement
        );

        for observer in &self.observers {
            observer.try_borrow_mut()?.update(measurement)?;
        }

        Ok(())
    }
}
