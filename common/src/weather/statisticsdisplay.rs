// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use crate::weather::{DisplayElement, Observer, Subject, TemperatureStats};
use crate::{Measurement, OutputPointer, StationError};

/// Shows temperature statistics with the latest humidity and pressure.
pub struct StatisticsDisplay {
    temperatures: TemperatureStats,
    humidity: f32,
    pressure: f32,
    out: OutputPointer,
}

impl StatisticsDisplay {
    const NAME: &'static str = "StatisticsDisplay";

    /// Creates the display and registers it with `weather_data`.
    pub fn new(weather_data: &mut dyn Subject, out: OutputPointer) -> Rc<RefCell<Self>> {
        let display = Rc::new(RefCell::new(Self {
            temperatures: TemperatureStats::default(),
            humidity: 0.0,
            pressure: 0.0,
            out,
        }));
        weather_data.register_observer(display.clone());
        display
    }

    pub fn temperatures(&self) -> &TemperatureStats {
        &self.temperatures
    }
}

impl Observer for StatisticsDisplay {
    fn update(&mut self, measurement: Measurement) -> Result<(), StationError> {
        self.temperatures.record(measurement.temperature);
        self.humidity = measurement.humidity;
        self.pressure = measurement.pressure;
        self.display()
    }
}

impl DisplayElement for StatisticsDisplay {
    fn render(&self) -> Result<String, StationError> {
        let stats = &self.temperatures;
        let (Some(average), Some(max), Some(min)) = (stats.average(), stats.max(), stats.min())
        else {
            return Err(StationError::NoData { display: Self::NAME });
        };

        Ok(format!(
            "Avg/Max/Min temperature: {average}/{max}/{min}\n\
             Humidity/Pressure: {}%/{}\n\n",
            self.humidity, self.pressure
        ))
    }

    fn display(&mut self) -> Result<(), StationError> {
        let text = self.render()?;
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}
