//! Weather station: a subject publishing measurements to display panels

use super::{NotifyReport, Observer, ObserverResult, Subject};
use crate::config::RegistryConfig;
use crate::error::CompositionResult;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// One round of sensor readings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    /// Degrees Fahrenheit
    pub temperature: f32,
    /// Relative humidity in percent
    pub humidity: f32,
    /// Barometric pressure in inHg
    pub pressure: f32,
}

impl WeatherData {
    pub fn new(temperature: f32, humidity: f32, pressure: f32) -> Self {
        Self {
            temperature,
            humidity,
            pressure,
        }
    }
}

impl fmt::Display for WeatherData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}F, {}% humidity, {} inHg",
            self.temperature, self.humidity, self.pressure
        )
    }
}

/// Publishes measurements to registered displays
#[derive(Debug, Default)]
pub struct WeatherStation {
    subject: Subject<WeatherData>,
}

impl WeatherStation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            subject: Subject::with_config(config),
        }
    }

    pub fn register(&self, display: Arc<dyn Observer<WeatherData>>) -> bool {
        self.subject.subscribe(display)
    }

    pub fn remove<O: ?Sized>(&self, display: &Arc<O>) -> bool {
        self.subject.unsubscribe(display)
    }

    /// Record new readings and push them to every display
    pub fn set_measurements(
        &self,
        temperature: f32,
        humidity: f32,
        pressure: f32,
    ) -> CompositionResult<NotifyReport> {
        self.subject
            .set_state(WeatherData::new(temperature, humidity, pressure))
    }

    pub fn latest(&self) -> Option<WeatherData> {
        self.subject.state()
    }

    pub fn subject(&self) -> &Subject<WeatherData> {
        &self.subject
    }
}

/// Shows the latest temperature and humidity
#[derive(Default)]
pub struct CurrentConditionsDisplay {
    latest: Mutex<Option<WeatherData>>,
}

impl CurrentConditionsDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> String {
        match *self.latest.lock() {
            Some(data) => format!(
                "Current conditions: {}F degrees and {}% humidity",
                data.temperature, data.humidity
            ),
            None => "Current conditions: no data yet".to_string(),
        }
    }
}

impl Observer<WeatherData> for CurrentConditionsDisplay {
    fn label(&self) -> &str {
        "current-conditions"
    }

    fn update(&self, state: &WeatherData) -> ObserverResult {
        *self.latest.lock() = Some(*state);
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct TemperatureStats {
    min: f32,
    max: f32,
    sum: f32,
    readings: u32,
}

/// Tracks min, max and average temperature across all readings
#[derive(Default)]
pub struct StatisticsDisplay {
    stats: Mutex<TemperatureStats>,
}

impl StatisticsDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(average, min, max)`, or `None` before the first reading
    pub fn summary(&self) -> Option<(f32, f32, f32)> {
        let stats = *self.stats.lock();
        if stats.readings == 0 {
            return None;
        }
        Some((stats.sum / stats.readings as f32, stats.min, stats.max))
    }

    pub fn render(&self) -> String {
        match self.summary() {
            Some((avg, min, max)) => format!("Avg/Max/Min temperature = {avg:.1}/{max}/{min}"),
            None => "Avg/Max/Min temperature = no data yet".to_string(),
        }
    }
}

impl Observer<WeatherData> for StatisticsDisplay {
    fn label(&self) -> &str {
        "statistics"
    }

    fn update(&self, state: &WeatherData) -> ObserverResult {
        let mut stats = self.stats.lock();
        let t = state.temperature;
        if stats.readings == 0 {
            stats.min = t;
            stats.max = t;
        } else {
            stats.min = stats.min.min(t);
            stats.max = stats.max.max(t);
        }
        stats.sum += t;
        stats.readings += 1;
        Ok(())
    }
}

/// Guesses the weather from the pressure trend
#[derive(Default)]
pub struct ForecastDisplay {
    pressures: Mutex<(Option<f32>, Option<f32>)>,
}

impl ForecastDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&self) -> String {
        let (last, current) = *self.pressures.lock();
        let outlook = match (last, current) {
            (Some(last), Some(current)) if current > last => "Improving weather on the way!",
            (Some(last), Some(current)) if current < last => "Watch out for cooler, rainy weather",
            (_, Some(_)) => "More of the same",
            (_, None) => "no data yet",
        };
        format!("Forecast: {outlook}")
    }
}

impl Observer<WeatherData> for ForecastDisplay {
    fn label(&self) -> &str {
        "forecast"
    }

    fn update(&self, state: &WeatherData) -> ObserverResult {
        let mut pressures = self.pressures.lock();
        let previous = pressures.1;
        *pressures = (previous, Some(state.pressure));
        Ok(())
    }
}
