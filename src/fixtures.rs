// SPDX-License-Identifier: PMPL-1.0-or-later

//! Sample datasets
//!
//! There is no live feed behind MeteoConnect yet: alerts, conditions,
//! forecasts and community reports all come from the fixed samples below.

use crate::community::{PendingReport, ReviewStatus};
use crate::types::*;
use chrono::{DateTime, TimeZone, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which alert set a session starts with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DataSeed {
    /// The three alerts of the alerts page
    #[default]
    Standard,
    /// The two alerts of the dashboard banner
    Banner,
    Empty,
}

impl DataSeed {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "standard" | "default" => Some(DataSeed::Standard),
            "banner" => Some(DataSeed::Banner),
            "empty" | "none" => Some(DataSeed::Empty),
            _ => None,
        }
    }

    pub fn alerts(self) -> Vec<AlertRecord> {
        match self {
            DataSeed::Standard => sample_alerts(),
            DataSeed::Banner => banner_alerts(),
            DataSeed::Empty => Vec::new(),
        }
    }
}

fn jan_15(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn channels(list: &[Channel]) -> BTreeSet<Channel> {
    list.iter().copied().collect()
}

pub fn sample_alerts() -> Vec<AlertRecord> {
    vec![
        AlertRecord {
            id: "1".to_string(),
            category: AlertCategory::Warning,
            severity: Severity::High,
            title: "Heavy Rain Warning".to_string(),
            message: "Heavy rainfall expected in Northern Province. Flooding possible in \
                      low-lying areas. Take necessary precautions and avoid travel if possible."
                .to_string(),
            region: Region::Northern,
            timestamp: jan_15(10, 30),
            active: true,
            channels: channels(&[Channel::Web, Channel::Sms, Channel::WhatsApp]),
        },
        AlertRecord {
            id: "2".to_string(),
            category: AlertCategory::Advisory,
            severity: Severity::Medium,
            title: "High Temperature Advisory".to_string(),
            message: "Temperatures expected to reach 32°C today. Stay hydrated, wear light \
                      clothing, and avoid prolonged sun exposure."
                .to_string(),
            region: Region::Eastern,
            timestamp: jan_15(8, 0),
            active: true,
            channels: channels(&[Channel::Web, Channel::Sms]),
        },
        AlertRecord {
            id: "3".to_string(),
            category: AlertCategory::Storm,
            severity: Severity::High,
            title: "Thunderstorm Alert".to_string(),
            message: "Severe thunderstorms with strong winds and hail expected this evening. \
                      Secure loose objects and stay indoors."
                .to_string(),
            region: Region::KigaliCity,
            timestamp: jan_15(14, 45),
            active: true,
            channels: channels(&[Channel::Web, Channel::Sms, Channel::WhatsApp, Channel::Ussd]),
        },
    ]
}

pub fn banner_alerts() -> Vec<AlertRecord> {
    vec![
        AlertRecord {
            id: "1".to_string(),
            category: AlertCategory::Warning,
            severity: Severity::High,
            title: "Heavy Rain Warning".to_string(),
            message: "Heavy rainfall expected in Northern Province. Take necessary precautions."
                .to_string(),
            region: Region::Northern,
            timestamp: jan_15(9, 0),
            active: true,
            channels: channels(&[Channel::Web]),
        },
        AlertRecord {
            id: "2".to_string(),
            category: AlertCategory::Advisory,
            severity: Severity::Low,
            title: "Temperature Advisory".to_string(),
            message: "High temperatures expected today. Stay hydrated and avoid direct sunlight."
                .to_string(),
            region: Region::Eastern,
            timestamp: jan_15(9, 0),
            active: true,
            channels: channels(&[Channel::Web]),
        },
    ]
}

pub fn current_weather() -> CurrentWeather {
    CurrentWeather {
        location: "Kigali".to_string(),
        temperature: 24,
        condition: "Partly Cloudy".to_string(),
        humidity: 68,
        wind_speed: 12,
    }
}

pub fn today_forecast() -> Vec<HourlyForecast> {
    [
        ("6:00", 18, "Clear"),
        ("12:00", 26, "Sunny"),
        ("18:00", 22, "Partly Cloudy"),
        ("24:00", 19, "Clear"),
    ]
    .into_iter()
    .map(|(time, temp, condition)| HourlyForecast {
        time: time.to_string(),
        temp,
        condition: condition.to_string(),
    })
    .collect()
}

pub fn five_day_forecast() -> Vec<ForecastDay> {
    // (date, day, high, low, condition, precipitation, humidity, wind, visibility)
    [
        ("Today", "Monday", 26, 18, "Partly Cloudy", 20, 65, 12, 10),
        ("Tomorrow", "Tuesday", 24, 16, "Light Rain", 80, 75, 15, 8),
        ("Wed", "Wednesday", 28, 19, "Sunny", 5, 60, 10, 15),
        ("Thu", "Thursday", 25, 17, "Partly Cloudy", 30, 70, 14, 12),
        ("Fri", "Friday", 23, 15, "Light Rain", 70, 80, 18, 9),
    ]
    .into_iter()
    .map(
        |(date, day, high, low, condition, precipitation, humidity, wind_speed, visibility)| {
            ForecastDay {
                date: date.to_string(),
                day: day.to_string(),
                high,
                low,
                condition: condition.to_string(),
                precipitation,
                humidity,
                wind_speed,
                visibility,
            }
        },
    )
    .collect()
}

pub fn community_reports() -> Vec<CommunityReport> {
    vec![
        CommunityReport {
            id: "1".to_string(),
            user: "Jean Baptiste".to_string(),
            location: "Nyamirambo, Kigali".to_string(),
            kind: "Heavy Rain".to_string(),
            description: "Very heavy rainfall started at 2 PM, flooding in low areas near the \
                          market."
                .to_string(),
            timestamp: jan_15(14, 30),
            severity: Severity::High,
            verified: true,
            likes: 12,
        },
        CommunityReport {
            id: "2".to_string(),
            user: "Marie Claire".to_string(),
            location: "Musanze, Northern Province".to_string(),
            kind: "Temperature".to_string(),
            description: "Unusually cold morning, temperature felt much lower than forecast."
                .to_string(),
            timestamp: jan_15(8, 15),
            severity: Severity::Medium,
            verified: false,
            likes: 8,
        },
        CommunityReport {
            id: "3".to_string(),
            user: "Emmanuel Nkusi".to_string(),
            location: "Huye, Southern Province".to_string(),
            kind: "Wind".to_string(),
            description: "Strong winds damaged several trees in our area. Power lines affected."
                .to_string(),
            timestamp: jan_15(16, 45),
            severity: Severity::High,
            verified: true,
            likes: 15,
        },
    ]
}

/// Submissions waiting in the admin panel's moderation queue.
pub fn pending_reports() -> Vec<PendingReport> {
    vec![
        PendingReport {
            id: "1".to_string(),
            user: "Marie Uwimana".to_string(),
            kind: "Heavy Rain".to_string(),
            location: "Gatsibo, Eastern Province".to_string(),
            description: "Intense rainfall causing flooding in agricultural areas".to_string(),
            severity: Severity::Medium,
            timestamp: jan_15(17, 10),
            status: ReviewStatus::Pending,
        },
        PendingReport {
            id: "2".to_string(),
            user: "Paul Kagame".to_string(),
            kind: "Strong Wind".to_string(),
            location: "Rubavu, Western Province".to_string(),
            description: "High winds damaging crops and infrastructure".to_string(),
            severity: Severity::Medium,
            timestamp: jan_15(17, 40),
            status: ReviewStatus::Pending,
        },
    ]
}
