// Water quality readings shown on the landing page
use serde::Serialize;

/// One sample of the tank's water quality.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaterReading {
    #[serde(rename = "t")]
    pub time_label: &'static str,
    #[serde(rename = "temp")]
    pub temperature: f64,
    pub ph: f64,
    #[serde(rename = "do")]
    pub dissolved_oxygen: f64,
}

impl WaterReading {
    pub const fn new(
        time_label: &'static str,
        temperature: f64,
        ph: f64,
        dissolved_oxygen: f64,
    ) -> Self {
        Self {
            time_label,
            temperature,
            ph,
            dissolved_oxygen,
        }
    }
}

/// Mock readings across a day, in chronological order.
pub static WATER_QUALITY: [WaterReading; 6] = [
    WaterReading::new("08:00", 25.1, 7.2, 7.8),
    WaterReading::new("10:00", 25.3, 7.3, 8.1),
    WaterReading::new("12:00", 25.5, 7.2, 8.0),
    WaterReading::new("14:00", 25.6, 7.1, 8.2),
    WaterReading::new("16:00", 25.4, 7.2, 8.4),
    WaterReading::new("18:00", 25.2, 7.2, 8.3),
];

/// A numeric column of the reading table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Metric {
    #[serde(rename = "temp")]
    Temperature,
    #[serde(rename = "ph")]
    Ph,
    #[serde(rename = "do")]
    DissolvedOxygen,
}

impl Metric {
    pub fn value(self, reading: &WaterReading) -> f64 {
        match self {
            Metric::Temperature => reading.temperature,
            Metric::Ph => reading.ph,
            Metric::DissolvedOxygen => reading.dissolved_oxygen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(label: &str) -> u32 {
        let (h, m) = label.split_once(':').expect("HH:MM label");
        h.parse::<u32>().unwrap() * 60 + m.parse::<u32>().unwrap()
    }

    #[test]
    fn test_series_is_chronological() {
        let times: Vec<u32> = WATER_QUALITY.iter().map(|r| minutes(r.time_label)).collect();
        assert!(times.windows(2).all(|w| w[0] < w[1]), "{times:?}");
    }

    #[test]
    fn test_reading_serializes_with_short_keys() {
        let json = serde_json::to_value(WATER_QUALITY[0]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"t": "08:00", "temp": 25.1, "ph": 7.2, "do": 7.8})
        );
    }

    #[test]
    fn test_metric_value() {
        let last = &WATER_QUALITY[5];
        assert_eq!(Metric::Temperature.value(last), 25.2);
        assert_eq!(Metric::DissolvedOxygen.value(last), 8.3);
        assert_eq!(Metric::Ph.value(last), 7.2);
    }
}
