// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod observer;
mod weatherdata;
mod derived;
mod currentconditionsdisplay;
mod statisticsdisplay;
mod forecastdisplay;
mod simpleconditionsobserver;
mod dummymeasurements;

pub use observer::{DisplayElement, Observer, ObserverPointer};
pub use weatherdata::{Subject, WeatherData};

pub use derived::{Forecast, TemperatureStats};

pub use currentconditionsdisplay::CurrentConditionsDisplay;
pub use forecastdisplay::ForecastDisplay;
pub use simpleconditionsobserver::SimpleConditionsObserver;
pub use statisticsdisplay::StatisticsDisplay;

pub use dummymeasurements::DummyMeasurements;
