use serde::Deserialize;

/// A single observation of the weather station sensors.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct Measurement {
    pub temperature: f32,
    pub humidity: f32,
    pub pressure: f32,
}

impl Measurement {
    pub fn new(temperature: f32, humidity: f32, pressure: f32) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }
}
