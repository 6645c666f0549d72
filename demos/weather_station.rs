//! Observers: a plain subject with three labelled observers, then a weather
//! station feeding its display panels

use composition_rs::observer::{CurrentConditionsDisplay, ForecastDisplay, StatisticsDisplay};
use composition_rs::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

fn main() -> CompositionResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("composition_rs=info")),
        )
        .init();

    let subject: Subject<String> = Subject::new();
    for label in ["Observer 1", "Observer 2", "Observer 3"] {
        subject.subscribe(Arc::new(ConsoleObserver::new(label)));
    }
    subject.set_state("New State 1".to_string())?;
    subject.set_state("New State 2".to_string())?;

    println!("---------------");

    let station = WeatherStation::new();
    let current = Arc::new(CurrentConditionsDisplay::new());
    let statistics = Arc::new(StatisticsDisplay::new());
    let forecast = Arc::new(ForecastDisplay::new());
    station.register(current.clone());
    station.register(statistics.clone());
    station.register(forecast.clone());

    for (temperature, humidity, pressure) in [(80.0, 65.0, 30.4), (82.0, 70.0, 29.2), (78.0, 90.0, 29.2)] {
        station.set_measurements(temperature, humidity, pressure)?;
        println!("{}", current.render());
        println!("{}", statistics.render());
        println!("{}", forecast.render());
    }

    station.remove(&forecast);
    station.set_measurements(62.0, 90.0, 28.1)?;
    println!("{}", current.render());
    println!("{}", forecast.render());

    Ok(())
}
