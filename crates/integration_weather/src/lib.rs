//! OpenWeatherMap weather integration
//!
//! Client for the OpenWeatherMap current weather API
//! (<https://openweathermap.org/current>).

pub mod client;
mod models;

pub use client::{OpenWeatherMapClient, WeatherClient, WeatherConfig, WeatherError, WeatherUnits};
pub use models::{ApiResponse, MainReadings, WeatherCondition};
