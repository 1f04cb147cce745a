use serde::Deserialize;

use crate::models::solar::ArrayConfig;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub weather: WeatherApiConfig,
    /// Default array parameters, used when a request omits them
    #[serde(default = "default_array1")]
    pub array1: ArrayConfig,
    #[serde(default = "default_array2")]
    pub array2: ArrayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeatherApiConfig {
    pub api_key: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Language code for the feed's description texts
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_base_url() -> String {
    "http://api.openweathermap.org/data/2.5".to_string()
}

fn default_language() -> String {
    "de".to_string()
}

// East/west pair on a shallow roof, the typical split installation.
fn default_array1() -> ArrayConfig {
    ArrayConfig {
        kwp: 4.8,
        azimuth_deg: 90.0,
        tilt_deg: 18.0,
        efficiency_pct: 20.0,
        losses_pct: 14.0,
    }
}

fn default_array2() -> ArrayConfig {
    ArrayConfig {
        kwp: 4.8,
        azimuth_deg: 270.0,
        tilt_deg: 18.0,
        efficiency_pct: 20.0,
        losses_pct: 14.0,
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_config() {
        let json = r#"{
            "server": { "port": 8080 },
            "weather": { "api_key": "test-key" }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.weather.api_key, "test-key");
        assert!(!config.weather.api_key.is_empty());
        assert_eq!(config.weather.base_url, "http://api.openweathermap.org/data/2.5");
        assert_eq!(config.array1.azimuth_deg, 90.0);
        assert_eq!(config.array2.azimuth_deg, 270.0);
        assert_eq!(config.array1.kwp, 4.8);
    }

    #[test]
    fn test_parse_full_config_overrides_defaults() {
        let json = r#"{
            "server": { "port": 9000 },
            "weather": {
                "api_key": "k",
                "base_url": "http://localhost:9999/data/2.5",
                "language": "en"
            },
            "array1": {
                "kwp": 9.6, "azimuth_deg": 180.0, "tilt_deg": 35.0,
                "efficiency_pct": 21.5, "losses_pct": 12.0
            },
            "array2": {
                "kwp": 3.2, "azimuth_deg": 270.0, "tilt_deg": 18.0,
                "efficiency_pct": 19.0, "losses_pct": 15.0
            }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.weather.language, "en");
        assert_eq!(config.array1.kwp, 9.6);
        assert_eq!(config.array1.tilt_deg, 35.0);
        assert_eq!(config.array2.losses_pct, 15.0);
    }
}
