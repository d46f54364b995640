// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::weather::{DisplayElement, Forecast, Observer, Subject, TemperatureStats};
use crate::{Measurement, OutputPointer, StationError};

/// Shows the latest conditions, temperature statistics and a forecast derived from them.
pub struct CurrentConditionsDisplay {
    temperatures: TemperatureStats,
    humidity: f32,
    out: OutputPointer,
}

impl CurrentConditionsDisplay {
    const NAME: &'static str = "CurrentConditionsDisplay";

    /// Creates the display and registers it with `weather_data`.
    pub fn new(weather_data: &mut dyn Subject, out: OutputPointer) -> Rc<RefCell<Self>> {
        let display = Rc::new(RefCell::new(Self {
            temperatures: TemperatureStats::default(),
            humidity: 0.0,
            out,
        }));
        weather_data.register_observer(display.clone());
        display
    }

    pub fn temperatures(&self) -> &TemperatureStats {
        &self.temperatures
    }

    /// The forecast for the latest conditions, `None` before the first update.
    pub fn forecast(&self) -> Option<Forecast> {
        self.temperatures
            .latest()
            .map(|temperature| Forecast::from_conditions(temperature, self.humidity))
    }
}

impl Observer for CurrentConditionsDisplay {
    fn update(&mut self, measurement: Measurement) -> Result<(), StationError> {
        self.humidity = measurement.humidity;
        self.temperatures.record(measurement.temperature);
        self.display()
    }
}

impl DisplayElement for CurrentConditionsDisplay {
    fn render(&self) -> Result<String, StationError> {
        let stats = &self.temperatures;
        let (Some(latest), Some(average), Some(max), Some(min), Some(forecast)) = (
            stats.latest(),
            stats.average(),
            stats.max(),
            stats.min(),
            self.forecast(),
        ) else {
            return Err(StationError::NoData { display: Self::NAME });
        };

        Ok(format!(
            "Current conditions: {latest} degrees and {}% humidity\n\
             Avg/Max/Min temperature: {average}/{max}/{min}\n\
             Forecast: {forecast}\n\n",
            self.humidity
        ))
    }

    fn display(&mut self) -> Result<(), StationError> {
        let text = self.render()?;
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
