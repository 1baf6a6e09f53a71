#[cfg(test)]
#[path = "weather_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::TimeZone;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherMain {
    pub temp: f64,
    pub feels_like: Option<f64>,
    pub humidity: f64,
    pub pressure: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherCondition {
    pub main: String,
    #[serde(default)]
    pub description: String,
    pub icon: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Meters per second.
    pub speed: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Clouds {
    pub all: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rain {
    #[serde(rename = "1h", default)]
    pub one_hour: f64,
}

/// Current conditions in the OpenWeather layout the API forwards.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub name: String,
    pub main: WeatherMain,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
    #[serde(default)]
    pub wind: Wind,
    pub visibility: Option<f64>,
    #[serde(default)]
    pub clouds: Clouds,
    pub rain: Option<Rain>,
}

impl WeatherReport {
    pub fn condition(&self) -> String {
        return self
            .weather
            .first()
            .map(|w| return w.main.to_string())
            .unwrap_or_else(|| return "Clear".to_string());
    }

    pub fn description(&self) -> String {
        let desc = self
            .weather
            .first()
            .map(|w| return w.description.to_string())
            .unwrap_or_default();

        let mut chars = desc.chars();
        return match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => self.condition(),
        };
    }

    pub fn is_raining(&self) -> bool {
        return self.rain.is_some();
    }

    pub fn wind_kmh(&self) -> f64 {
        return self.wind.speed * 3.6;
    }

    pub fn rain_chance(&self) -> f64 {
        if self.is_raining() {
            return 80.0;
        }

        return (self.main.humidity + self.clouds.all / 2.0).min(100.0);
    }

    /// Visibility in kilometers. Values above 100 are treated as meters.
    pub fn visibility_km(&self) -> Option<f64> {
        return self.visibility.map(|v| {
            if v > 100.0 {
                return v / 1000.0;
            }
            return v;
        });
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastMain {
    pub temp_max: f64,
    pub temp_min: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub dt: i64,
    pub main: ForecastMain,
    #[serde(default)]
    pub weather: Vec<WeatherCondition>,
}

impl ForecastDay {
    pub fn date(&self) -> Option<DateTime<Utc>> {
        return Utc.timestamp_opt(self.dt, 0).single();
    }

    pub fn condition(&self) -> String {
        return self
            .weather
            .first()
            .map(|w| return w.main.to_string())
            .unwrap_or_default();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub list: Vec<ForecastDay>,
}

/// Localized guidance derived from current conditions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FarmingAdvice {
    pub irrigation: String,
    pub spraying: String,
    pub field_work: String,
    pub alerts: String,
}

/// Everything the weather view shows for one city.
#[derive(Clone, Debug, PartialEq)]
pub struct WeatherOverview {
    pub report: WeatherReport,
    pub forecast: Forecast,
    pub advice: FarmingAdvice,
}
