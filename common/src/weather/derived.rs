// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/// The forecast label derived from recent readings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Forecast {
    Improving,
    MoreOfTheSame,
    CoolerRainy,
}

impl Forecast {
    const HUMIDITY_RAIN_THRESHOLD: f32 = 80.0;
    const TEMPERATURE_WARM_THRESHOLD: f32 = 75.0;

    /// Forecast from the current conditions: humidity first, then temperature.
    pub fn from_conditions(temperature: f32, humidity: f32) -> Self {
        if humidity > Self::HUMIDITY_RAIN_THRESHOLD {
            Self::CoolerRainy
        } else if temperature > Self::TEMPERATURE_WARM_THRESHOLD {
            Self::Improving
        } else {
            Self::MoreOfTheSame
        }
    }

    /// Forecast from the pressure trend between two readings.
    pub fn from_pressure_trend(last_pressure: f32, current_pressure: f32) -> Self {
        if current_pressure > last_pressure {
            Self::Improving
        } else if current_pressure == last_pressure {
            Self::MoreOfTheSame
        } else {
            Self::CoolerRainy
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Self::Improving => "Improving weather on the way!",
            Self::MoreOfTheSame => "More of the same",
            Self::CoolerRainy => "Watch out for cooler, rainy weather",
        }
    }
}

impl std::fmt::Display for Forecast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Running aggregate over every temperature seen, in place of the full list.
///
/// The sum is kept in `f64` so the average stays the mean of the recorded values.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TemperatureStats {
    count: usize,
    sum: f64,
    max: f32,
    min: f32,
    latest: f32,
}

impl TemperatureStats {
    pub fn record(&mut self, temperature: f32) {
        if self.count == 0 {
            self.max = temperature;
            self.min = temperature;
        } else {
            self.max = self.max.max(temperature);
            self.min = self.min.min(temperature);
        }
        self.count += 1;
        self.sum += f64::from(temperature);
        self.latest = temperature;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn average(&self) -> Option<f32> {
        (!self.is_empty()).then(|| (self.sum / self.count as f64) as f32)
    }

    pub fn max(&self) -> Option<f32> {
        (!self.is_empty()).then_some(self.max)
    }

    pub fn min(&self) -> Option<f32> {
        (!self.is_empty()).then_some(self.min)
    }

    pub fn latest(&self) -> Option<f32> {
        (!self.is_empty()).then_some(self.latest)
    }
}

#[test]
fn test_conditions_forecast_boundaries() {
    assert_eq!(Forecast::from_conditions(70.0, 81.0), Forecast::CoolerRainy);
    assert_eq!(Forecast::from_conditions(90.0, 80.0), Forecast::Improving);
    assert_eq!(Forecast::from_conditions(75.0, 80.0), Forecast::MoreOfTheSame);
    assert_eq!(Forecast::from_conditions(75.5, 10.0), Forecast::Improving);
}

#[test]
fn test_pressure_trend_forecast() {
    assert_eq!(Forecast::from_pressure_trend(1010.0, 1012.0), Forecast::Improving);
    assert_eq!(Forecast::from_pressure_trend(1012.0, 1012.0), Forecast::MoreOfTheSame);
    assert_eq!(Forecast::from_pressure_trend(1012.0, 1005.0), Forecast::CoolerRainy);
}

#[test]
fn test_temperature_stats() {
    let mut stats = TemperatureStats::default();
    assert_eq!(stats.average(), None);
    assert_eq!(stats.max(), None);

    for temperature in [80.0, 82.0, 78.0, -4.0] {
        stats.record(temperature);
    }

    assert_eq!(stats.count(), 4);
    assert_eq!(stats.average(), Some(59.0));
    assert_eq!(stats.max(), Some(82.0));
    assert_eq!(stats.min(), Some(-4.0));
    assert_eq!(stats.latest(), Some(-4.0));
}

#[test]
fn test_temperature_average_does_not_drift() {
    let mut stats = TemperatureStats::default();
    for _ in 0..100_000 {
        stats.record(80.1);
    }

    assert_eq!(stats.average(), Some(80.1));
    assert_eq!(stats.max(), Some(80.1));
    assert_eq!(stats.min(), Some(80.1));
}
