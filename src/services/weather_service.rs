use chrono::NaiveDateTime;

use crate::config::WeatherApiConfig;
use crate::error::FeedError;
use crate::models::forecast::{
    CurrentConditions, CurrentWeatherResponse, ForecastItem, ForecastRecord, ForecastResponse,
};

const DT_TXT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current observed weather at the coordinates, from the provider's
/// `/weather` endpoint.
pub async fn fetch_current(
    client: &reqwest::Client,
    cfg: &WeatherApiConfig,
    lat: f64,
    lon: f64,
) -> Result<CurrentConditions, FeedError> {
    let url = format!("{}/weather", cfg.base_url);
    let response: CurrentWeatherResponse = client
        .get(&url)
        .query(&query_params(cfg, lat, lon))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    let description = response
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or_else(|| FeedError::MalformedRecord {
            context: "current weather".to_string(),
            reason: "missing weather description".to_string(),
        })?;

    Ok(CurrentConditions {
        temperature_c: response.main.temp,
        description,
        cloud_cover_pct: response.clouds.all,
        humidity_pct: response.main.humidity,
    })
}

/// The 5-day/3-hour forecast series, already converted to domain records.
/// An empty list from the provider is reported as `FeedError::EmptyFeed`;
/// a feed spanning fewer than 5 days is NOT an error (the report simply
/// covers fewer days).
pub async fn fetch_forecast(
    client: &reqwest::Client,
    cfg: &WeatherApiConfig,
    lat: f64,
    lon: f64,
) -> Result<Vec<ForecastRecord>, FeedError> {
    let url = format!("{}/forecast", cfg.base_url);
    let response: ForecastResponse = client
        .get(&url)
        .query(&query_params(cfg, lat, lon))
        .send()
        .await?
        .error_for_status()?
        .json()
        .await?;

    if response.list.is_empty() {
        return Err(FeedError::EmptyFeed);
    }

    response.list.into_iter().map(to_record).collect()
}

fn query_params(cfg: &WeatherApiConfig, lat: f64, lon: f64) -> Vec<(&'static str, String)> {
    vec![
        ("lat", lat.to_string()),
        ("lon", lon.to_string()),
        ("appid", cfg.api_key.clone()),
        ("units", "metric".to_string()),
        ("lang", cfg.language.clone()),
    ]
}

fn to_record(item: ForecastItem) -> Result<ForecastRecord, FeedError> {
    let timestamp = NaiveDateTime::parse_from_str(&item.dt_txt, DT_TXT_FORMAT).map_err(|e| {
        FeedError::MalformedRecord {
            context: item.dt_txt.clone(),
            reason: e.to_string(),
        }
    })?;

    let description = item
        .weather
        .into_iter()
        .next()
        .map(|w| w.description)
        .ok_or_else(|| FeedError::MalformedRecord {
            context: item.dt_txt.clone(),
            reason: "missing weather description".to_string(),
        })?;

    Ok(ForecastRecord {
        timestamp,
        temperature_c: item.main.temp,
        humidity_pct: item.main.humidity,
        cloud_cover_pct: item.clouds.all,
        description,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::forecast::{CloudCover, ConditionText, MainReadings};
    use chrono::Timelike;

    fn item(dt_txt: &str, descriptions: &[&str]) -> ForecastItem {
        ForecastItem {
            dt_txt: dt_txt.to_string(),
            main: MainReadings { temp: 18.5, humidity: 62.0 },
            clouds: CloudCover { all: 45.0 },
            weather: descriptions
                .iter()
                .map(|d| ConditionText { description: d.to_string() })
                .collect(),
        }
    }

    #[test]
    fn test_to_record_parses_feed_timestamp() {
        let record = to_record(item("2024-06-10 15:00:00", &["bedeckt"])).unwrap();
        assert_eq!(record.timestamp.date().to_string(), "2024-06-10");
        assert_eq!(record.timestamp.hour(), 15);
        assert_eq!(record.temperature_c, 18.5);
        assert_eq!(record.humidity_pct, 62.0);
        assert_eq!(record.cloud_cover_pct, 45.0);
        assert_eq!(record.description, "bedeckt");
    }

    #[test]
    fn test_to_record_rejects_bad_timestamp() {
        let err = to_record(item("10.06.2024 15:00", &["bedeckt"])).unwrap_err();
        match err {
            FeedError::MalformedRecord { context, .. } => {
                assert_eq!(context, "10.06.2024 15:00")
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_to_record_rejects_missing_description() {
        let err = to_record(item("2024-06-10 15:00:00", &[])).unwrap_err();
        assert_eq!(err.kind(), "malformed_record");
    }

    #[test]
    fn test_wire_decoding_matches_provider_shape() {
        // Trimmed provider payload: only the fields the engine reads.
        let payload = r#"{
            "list": [
                {
                    "dt_txt": "2024-06-10 12:00:00",
                    "main": { "temp": 21.3, "humidity": 58 },
                    "clouds": { "all": 75 },
                    "weather": [ { "description": "überwiegend bewölkt" } ]
                }
            ]
        }"#;
        let decoded: ForecastResponse = serde_json::from_str(payload).unwrap();
        let record = to_record(decoded.list.into_iter().next().unwrap()).unwrap();
        assert_eq!(record.cloud_cover_pct, 75.0);
        assert_eq!(record.description, "überwiegend bewölkt");
    }
}
