// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use serde::Deserialize;

use crate::weather::WeatherData;
use crate::{Measurement, StationError};

/// The fixed sequence of readings the demo feeds into the weather station.
#[derive(Deserialize, Default)]
pub struct DummyMeasurements {
    measurements: Vec<Measurement>,
}

impl DummyMeasurements {
    pub fn new() -> Result<Self, StationError> {
        let json_data = std::include_str!("./dummymeasurements.json");

        Ok(serde_json::from_str::<Self>(json_data)?)
    }

    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Feeds every reading into `weather_data`, stopping at the first failed notification.
    pub fn replay(&self, weather_data: &mut WeatherData) -> Result<(), StationError> {
        for measurement in &self.measurements {
            weather_data.measurements_changed(
                measurement.temperature,
                measurement.humidity,
                measurement.pressure,
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::SharedBuffer;
    use crate::weather::{
        CurrentConditionsDisplay, DisplayElement, Forecast, ForecastDisplay, StatisticsDisplay,
    };

    #[test]
    fn test_dummy_measurements() {
        let dummy = DummyMeasurements::new().unwrap();

        assert_eq!(
            dummy.measurements(),
            &[
                Measurement::new(80.0, 65.0, 1010.0),
                Measurement::new(82.0, 70.0, 1012.0),
                Measurement::new(78.0, 90.0, 1005.0),
            ]
        );
    }

    #[test]
    fn test_replay_through_every_display() {
        let buffer = SharedBuffer::default();
        let mut weather_data = WeatherData::new();
        let current = CurrentConditionsDisplay::new(&mut weather_data, buffer.output());
        let statistics = StatisticsDisplay::new(&mut weather_data, buffer.output());
        let forecast = ForecastDisplay::new(&mut weather_data, buffer.output());

        let mut current_forecasts = Vec::new();
        let mut pressure_forecasts = Vec::new();
        for measurement in DummyMeasurements::new().unwrap().measurements() {
            weather_data
                .measurements_changed(
                    measurement.temperature,
                    measurement.humidity,
                    measurement.pressure,
                )
                .unwrap();
            current_forecasts.push(current.borrow().forecast().unwrap());
            pressure_forecasts.push(forecast.borrow().forecast().unwrap());
        }

        let expected = vec![
            Forecast::Improving,
            Forecast::Improving,
            Forecast::CoolerRainy,
        ];
        assert_eq!(current_forecasts, expected);
        assert_eq!(pressure_forecasts, expected);

        let output = buffer.take();
        let last_round: Vec<_> = output.lines().skip(2 * 9).collect();
        assert_eq!(
            last_round,
            vec![
                "Current conditions: 78 degrees and 90% humidity",
                "Avg/Max/Min temperature: 80/82/78",
                "Forecast: Watch out for cooler, rainy weather",
                "",
                "Avg/Max/Min temperature: 80/82/78",
                "Humidity/Pressure: 90%/1005",
                "",
                "Forecast: Watch out for cooler, rainy weather",
                "",
            ]
        );
        assert_eq!(statistics.borrow().temperatures().count(), 3);
    }

    #[test]
    fn test_replay_into_empty_station() {
        let mut weather_data = WeatherData::new();

        DummyMeasurements::new()
            .unwrap()
            .replay(&mut weather_data)
            .unwrap();

        assert_eq!(weather_data.history().len(), 3);
        assert_eq!(
            weather_data.latest(),
            Some(Measurement::new(78.0, 90.0, 1005.0))
        );
    }

    #[test]
    fn test_display_is_idempotent_after_replay() {
        let buffer = SharedBuffer::default();
        let mut weather_data = WeatherData::new();
        let statistics = StatisticsDisplay::new(&mut weather_data, buffer.output());

        DummyMeasurements::new()
            .unwrap()
            .replay(&mut weather_data)
            .unwrap();
        let rendered = statistics.borrow().render().unwrap();
        buffer.take();
        statistics.borrow_mut().display().unwrap();

        assert_eq!(buffer.take(), rendered);
    }
}
