// SPDX-License-Identifier: PMPL-1.0-or-later

//! Core type definitions for MeteoConnect
//!
//! Alert records and their closed value domains, plus the shapes of the
//! weather and community datasets shown alongside them.

use crate::error::MeteoError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::FromStr;

/// Administrative regions an alert can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "Kigali City")]
    KigaliCity,
    #[serde(rename = "Northern Province")]
    Northern,
    #[serde(rename = "Southern Province")]
    Southern,
    #[serde(rename = "Eastern Province")]
    Eastern,
    #[serde(rename = "Western Province")]
    Western,
}

impl Region {
    pub fn all() -> &'static [Region] {
        &[
            Region::KigaliCity,
            Region::Northern,
            Region::Southern,
            Region::Eastern,
            Region::Western,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Region::KigaliCity => "Kigali City",
            Region::Northern => "Northern Province",
            Region::Southern => "Southern Province",
            Region::Eastern => "Eastern Province",
            Region::Western => "Western Province",
        }
    }

    /// Matches the display name exactly, as alert records carry it.
    pub fn parse(value: &str) -> Option<Self> {
        Region::all()
            .iter()
            .copied()
            .find(|region| region.as_str() == value)
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Region {
    type Err = MeteoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Region::parse(value).ok_or_else(|| MeteoError::UnknownRegion(value.to_string()))
    }
}

/// Kind of alert. New kinds may be added, so downstream matches need a
/// wildcard arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum AlertCategory {
    Warning,
    Advisory,
    Storm,
    Flood,
}

impl AlertCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            AlertCategory::Warning => "warning",
            AlertCategory::Advisory => "advisory",
            AlertCategory::Storm => "storm",
            AlertCategory::Flood => "flood",
        }
    }

    /// Matches the lowercase name exactly.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "warning" => Some(AlertCategory::Warning),
            "advisory" => Some(AlertCategory::Advisory),
            "storm" => Some(AlertCategory::Storm),
            "flood" => Some(AlertCategory::Flood),
            _ => None,
        }
    }
}

impl std::fmt::Display for AlertCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_ascii_uppercase())
    }
}

impl FromStr for AlertCategory {
    type Err = MeteoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        AlertCategory::parse(value).ok_or_else(|| MeteoError::UnknownCategory(value.to_string()))
    }
}

/// Alert severity, ordered from least to most urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Low => write!(f, "LOW"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::High => write!(f, "HIGH"),
        }
    }
}

impl FromStr for Severity {
    type Err = MeteoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Severity::parse(value).ok_or_else(|| MeteoError::UnknownSeverity(value.to_string()))
    }
}

/// Delivery channel an alert was sent through
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Web,
    Sms,
    WhatsApp,
    Ussd,
}

impl Channel {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "web" => Some(Channel::Web),
            "sms" => Some(Channel::Sms),
            "whatsapp" => Some(Channel::WhatsApp),
            "ussd" => Some(Channel::Ussd),
            _ => None,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Web => write!(f, "WEB"),
            Channel::Sms => write!(f, "SMS"),
            Channel::WhatsApp => write!(f, "WHATSAPP"),
            Channel::Ussd => write!(f, "USSD"),
        }
    }
}

impl FromStr for Channel {
    type Err = MeteoError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Channel::parse(value).ok_or_else(|| MeteoError::UnknownChannel(value.to_string()))
    }
}

/// A single weather alert or advisory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub category: AlertCategory,
    pub severity: Severity,
    pub title: String,
    pub message: String,
    pub region: Region,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "isActive")]
    pub active: bool,
    pub channels: BTreeSet<Channel>,
}

/// Conditions shown on the dashboard weather card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    pub location: String,
    pub temperature: i32,
    pub condition: String,
    pub humidity: u8,
    pub wind_speed: u32,
}

impl CurrentWeather {
    /// One-sentence read-out of the conditions, as used for audio playback.
    pub fn summary(&self) -> String {
        format!(
            "Current weather in {}: {} degrees celsius, {}. Humidity is {} percent, \
             wind speed {} kilometers per hour.",
            self.location, self.temperature, self.condition, self.humidity, self.wind_speed
        )
    }
}

/// One slot of the dashboard's intraday forecast strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyForecast {
    pub time: String,
    pub temp: i32,
    pub condition: String,
}

/// One day of the multi-day forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastDay {
    pub date: String,
    pub day: String,
    pub high: i32,
    pub low: i32,
    pub condition: String,
    /// Chance of precipitation, percent
    pub precipitation: u8,
    pub humidity: u8,
    pub wind_speed: u32,
    /// Kilometres
    pub visibility: u32,
}

/// A weather observation submitted by a community member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityReport {
    pub id: String,
    pub user: String,
    pub location: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub verified: bool,
    pub likes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_is_ordered() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
    }

    #[test]
    fn region_parses_exact_display_names_only() {
        for region in Region::all() {
            assert_eq!(Region::parse(region.as_str()), Some(*region));
        }
        assert_eq!(Region::parse("NORTHERN PROVINCE"), None);
        assert_eq!(Region::parse(" Kigali City"), None);
        assert_eq!(Region::parse("north"), None);
        assert_eq!(Region::parse("All Regions"), None);
    }

    #[test]
    fn category_parses_lowercase_names_only() {
        assert_eq!(AlertCategory::parse("storm"), Some(AlertCategory::Storm));
        assert_eq!(AlertCategory::parse("Storm"), None);
    }

    #[test]
    fn unknown_values_map_to_errors() {
        assert_eq!(
            "tornado".parse::<AlertCategory>(),
            Err(MeteoError::UnknownCategory("tornado".to_string()))
        );
        assert!("fax".parse::<Channel>().is_err());
        assert!("extreme".parse::<Severity>().is_err());
    }

    #[test]
    fn alert_serializes_with_original_field_names() {
        let alert = AlertRecord {
            id: "1".to_string(),
            category: AlertCategory::Storm,
            severity: Severity::High,
            title: "Thunderstorm Alert".to_string(),
            message: "Stay indoors.".to_string(),
            region: Region::KigaliCity,
            timestamp: DateTime::<Utc>::default(),
            active: true,
            channels: [Channel::Web, Channel::Ussd].into_iter().collect(),
        };
        let value = serde_json::to_value(&alert).unwrap();
        assert_eq!(value["type"], "storm");
        assert_eq!(value["severity"], "high");
        assert_eq!(value["region"], "Kigali City");
        assert_eq!(value["isActive"], true);
        assert_eq!(value["channels"], serde_json::json!(["web", "ussd"]));
    }
}
