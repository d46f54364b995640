// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::weather::{DisplayElement, Forecast, Observer, Subject};
use crate::{Measurement, OutputPointer, StationError};

/// Forecasts from the pressure trend between the last two readings.
///
/// Both pressures start at zero, so the first reading is compared against zero.
pub struct ForecastDisplay {
    last_pressure: f32,
    current_pressure: f32,
    updated: bool,
    out: OutputPointer,
}

impl ForecastDisplay {
    const NAME: &'static str = "ForecastDisplay";

    /// Creates the display and registers it with `weather_data`.
    pub fn new(weather_data: &mut dyn Subject, out: OutputPointer) -> Rc<RefCell<Self>> {
        let display = Rc::new(RefCell::new(Self {
            last_pressure: 0.0,
            current_pressure: 0.0,
            updated: false,
            out,
        }));
        weather_data.register_observer(display.clone());
        display
    }

    /// The forecast for the current pressure trend, `None` before the first update.
    pub fn forecast(&self) -> Option<Forecast> {
        self.updated
            .then(|| Forecast::from_pressure_trend(self.last_pressure, self.current_pressure))
    }
}

impl Observer for ForecastDisplay {
    fn update(&mut self, measurement: Measurement) -> Result<(), StationError> {
        self.last_pressure = self.current_pressure;
        self.current_pressure = measurement.pressure;
        self.updated = true;
        self.display()
    }
}

impl DisplayElement for ForecastDisplay {
    fn render(&self) -> Result<String, StationError> {
        let forecast = self
            .forecast()
            .ok_or(StationError::NoData { display: Self::NAME })?;
        Ok(format!("Forecast: {forecast}\n\n"))
    }

    fn display(&mut self) -> Result<(), StationError> {
        let text = self.render()?;
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
