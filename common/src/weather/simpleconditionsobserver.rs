// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::weather::{Observer, Subject};
use crate::{Measurement, OutputPointer, StationError};

/// Prints the current conditions line for every reading, keeping no state.
pub struct SimpleConditionsObserver {
    out: OutputPointer,
}

impl SimpleConditionsObserver {
    pub fn new(weather_data: &mut dyn Subject, out: OutputPointer) -> Rc<RefCell<Self>> {
        let observer = Rc::new(RefCell::new(Self { out }));
        weather_data.register_observer(observer.clone());
        observer
    }
}

impl Observer for SimpleConditionsObserver {
    fn update(&mut self, measurement: Measurement) -> Result<(), StationError> {
        writeln!(
            self.out,
            "Current conditions: {} degrees and {}% humidity",
            measurement.temperature, measurement.humidity
        )?;
        Ok(())
    }
}

#[test]
fn test_simple_conditions_observer() {
    let buffer = crate::testing::SharedBuffer::default();
    let mut weather_data = crate::weather::WeatherData::new();
    let _observer = SimpleConditionsObserver::new(&mut weather_data, buffer.output());

    weather_data.measurements_changed(80.0, 65.0, 1010.0).unwrap();
    weather_data.measurements_changed(82.5, 70.0, 1012.0).unwrap();

    assert_eq!(
        buffer.take(),
        "Current conditions: 80 degrees and 65% humidity\n\
         Current conditions: 82.5 degrees and 70% humidity\n"
    );
}
