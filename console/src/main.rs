use std::cell::RefCell;
use std::io::BufRead;
use std::rc::Rc;

use weather_station_common::weather::{
    CurrentConditionsDisplay, DummyMeasurements, ForecastDisplay, StatisticsDisplay, WeatherData,
};

/// Our App struct that holds the weather station and its displays.
///
/// The displays register themselves with the weather station when they are created, so the
/// handles kept here are only needed to keep them alive for the lifetime of the app.
struct App {
    weather_data: WeatherData,
    measurements: DummyMeasurements,
    _current_conditions: Rc<RefCell<CurrentConditionsDisplay>>,
    _statistics: Rc<RefCell<StatisticsDisplay>>,
    _forecast: Rc<RefCell<ForecastDisplay>>,
}

impl App {
    /// Create a new App struct with all displays writing to stdout.
    fn new() -> anyhow::Result<Self> {
        let mut weather_data = WeatherData::new();

        // Registration order is notification order.
        let current_conditions =
            CurrentConditionsDisplay::new(&mut weather_data, Box::new(std::io::stdout()));
        let statistics = StatisticsDisplay::new(&mut weather_data, Box::new(std::io::stdout()));
        let forecast = ForecastDisplay::new(&mut weather_data, Box::new(std::io::stdout()));

        let measurements = DummyMeasurements::new()?;

        Ok(Self {
            weather_data,
            measurements,
            _current_conditions: current_conditions,
            _statistics: statistics,
            _forecast: forecast,
        })
    }

    /// Run the App, feed every reading to the weather station and wait for a key press.
    fn run(&mut self) -> anyhow::Result<()> {
        let total = self.measurements.measurements().len();
        for (index, measurement) in self.measurements.measurements().iter().enumerate() {
            log::info!("reading {}/{}: {:?}", index + 1, total, measurement);

            self.weather_data.measurements_changed(
                measurement.temperature,
                measurement.humidity,
                measurement.pressure,
            )?;
        }

        log::debug!(
            "Recorded {} readings",
            self.weather_data.history().len()
        );

        println!("Press Enter to exit...");
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;

        Ok(())
    }
}

/// A minimal main function that initializes the App and runs it.
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut app = App::new()?;

    app.run()
}
