use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::models::forecast::ForecastRecord;

/// All forecast records sharing one local calendar date, in feed order.
#[derive(Debug, Clone)]
pub struct DailyForecastBucket {
    pub date: NaiveDate,
    pub records: Vec<ForecastRecord>,
}

impl DailyForecastBucket {
    /// Arithmetic mean cloud cover over the bucket, 0 for an empty bucket.
    pub fn avg_cloud_cover(&self) -> f64 {
        mean(self.records.iter().map(|r| r.cloud_cover_pct))
    }

    /// Arithmetic mean humidity over the bucket, 0 for an empty bucket.
    pub fn avg_humidity(&self) -> f64 {
        mean(self.records.iter().map(|r| r.humidity_pct))
    }

    /// Min and max temperature across the bucket's records.
    pub fn temp_range(&self) -> (f64, f64) {
        let mut iter = self.records.iter().map(|r| r.temperature_c);
        let Some(first) = iter.next() else {
            return (0.0, 0.0);
        };
        iter.fold((first, first), |(min, max), t| (min.min(t), max.max(t)))
    }

    /// Most frequent weather description in the bucket. Ties go to the
    /// description that occurs first in the bucket's record order.
    pub fn dominant_description(&self) -> String {
        let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
        for (index, record) in self.records.iter().enumerate() {
            counts
                .entry(record.description.as_str())
                .and_modify(|(count, _)| *count += 1)
                .or_insert((1, index));
        }

        counts
            .into_iter()
            .max_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
                // Higher count wins; on equal counts the earlier first
                // occurrence wins.
                count_a.cmp(count_b).then(first_b.cmp(first_a))
            })
            .map(|(description, _)| description.to_string())
            .unwrap_or_default()
    }
}

/// Bucket a flat, irregularly spaced forecast series into calendar days,
/// earliest first. The record order inside each bucket is the feed order.
/// An empty feed produces zero buckets; short feeds are never padded.
pub fn group_by_day(records: &[ForecastRecord]) -> Vec<DailyForecastBucket> {
    let mut by_date: BTreeMap<NaiveDate, Vec<ForecastRecord>> = BTreeMap::new();
    for record in records {
        by_date
            .entry(record.timestamp.date())
            .or_default()
            .push(record.clone());
    }

    by_date
        .into_iter()
        .map(|(date, records)| DailyForecastBucket { date, records })
        .collect()
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, Timelike};

    fn record(ts: &str, temp: f64, clouds: f64, humidity: f64, desc: &str) -> ForecastRecord {
        ForecastRecord {
            timestamp: NaiveDateTime::parse_from_str(ts, "%Y-%m-%d %H:%M:%S").unwrap(),
            temperature_c: temp,
            humidity_pct: humidity,
            cloud_cover_pct: clouds,
            description: desc.to_string(),
        }
    }

    /// The feed's real shape: 3-hour spacing, 8 records per day.
    fn three_hourly_feed(days: u32) -> Vec<ForecastRecord> {
        let mut records = Vec::new();
        for day in 0..days {
            for slot in 0..8 {
                records.push(record(
                    &format!("2024-06-{:02} {:02}:00:00", 10 + day, slot * 3),
                    15.0 + slot as f64,
                    10.0 * slot as f64,
                    60.0,
                    "leichter Regen",
                ));
            }
        }
        records
    }

    #[test]
    fn test_five_day_feed_groups_into_five_buckets() {
        let records = three_hourly_feed(5);
        assert_eq!(records.len(), 40);

        let buckets = group_by_day(&records);
        assert_eq!(buckets.len(), 5, "40 records over 5 days must give 5 buckets");
        for bucket in &buckets {
            assert_eq!(bucket.records.len(), 8, "each day holds 8 records");
        }
    }

    #[test]
    fn test_buckets_ascending_and_counts_sum() {
        // Interleave days to prove grouping does not rely on feed order.
        let mut records = three_hourly_feed(3);
        records.rotate_left(11);

        let buckets = group_by_day(&records);
        assert_eq!(buckets.len(), 3);
        let total: usize = buckets.iter().map(|b| b.records.len()).sum();
        assert_eq!(total, records.len(), "bucket counts must sum to the feed length");
        for pair in buckets.windows(2) {
            assert!(pair[0].date < pair[1].date, "buckets must be ascending by date");
        }
    }

    #[test]
    fn test_record_order_preserved_within_bucket() {
        let records = three_hourly_feed(1);
        let buckets = group_by_day(&records);
        let hours: Vec<u32> = buckets[0].records.iter().map(|r| r.timestamp.hour()).collect();
        assert_eq!(hours, vec![0, 3, 6, 9, 12, 15, 18, 21]);
    }

    #[test]
    fn test_empty_feed_zero_buckets() {
        assert!(group_by_day(&[]).is_empty());
    }

    #[test]
    fn test_bucket_averages() {
        let bucket = DailyForecastBucket {
            date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            records: vec![
                record("2024-06-10 06:00:00", 12.0, 20.0, 50.0, "klarer Himmel"),
                record("2024-06-10 12:00:00", 22.0, 60.0, 70.0, "bedeckt"),
            ],
        };
        assert!((bucket.avg_cloud_cover() - 40.0).abs() < 1e-12);
        assert!((bucket.avg_humidity() - 60.0).abs() < 1e-12);
        assert_eq!(bucket.temp_range(), (12.0, 22.0));
    }

    #[test]
    fn test_dominant_description_majority() {
        let bucket = DailyForecastBucket {
            date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            records: vec![
                record("2024-06-10 06:00:00", 12.0, 0.0, 50.0, "klarer Himmel"),
                record("2024-06-10 09:00:00", 15.0, 40.0, 55.0, "bedeckt"),
                record("2024-06-10 12:00:00", 18.0, 50.0, 60.0, "bedeckt"),
            ],
        };
        assert_eq!(bucket.dominant_description(), "bedeckt");
    }

    #[test]
    fn test_dominant_description_tie_first_occurrence() {
        let bucket = DailyForecastBucket {
            date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            records: vec![
                record("2024-06-10 06:00:00", 12.0, 0.0, 50.0, "bedeckt"),
                record("2024-06-10 09:00:00", 15.0, 40.0, 55.0, "klarer Himmel"),
                record("2024-06-10 12:00:00", 18.0, 50.0, 60.0, "klarer Himmel"),
                record("2024-06-10 15:00:00", 18.0, 50.0, 60.0, "bedeckt"),
            ],
        };
        // Two against two: "bedeckt" appeared first.
        assert_eq!(bucket.dominant_description(), "bedeckt");
    }

    #[test]
    fn test_empty_bucket_defaults() {
        let bucket = DailyForecastBucket {
            date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            records: Vec::new(),
        };
        assert_eq!(bucket.avg_cloud_cover(), 0.0);
        assert_eq!(bucket.avg_humidity(), 0.0);
        assert_eq!(bucket.dominant_description(), "");
    }
}
