// SPDX-License-Identifier: PMPL-1.0-or-later

//! Terminal rendering of alerts, conditions and reports

use crate::community::{PendingReport, ReviewStatus};
use crate::i18n::Localizer;
use crate::types::*;
use colored::*;
use std::fmt::Write;

pub struct ReportFormatter {
    l10n: Localizer,
}

impl ReportFormatter {
    pub fn new(l10n: Localizer) -> Self {
        Self { l10n }
    }

    /// The alerts page: heading with active count, then one block per alert.
    pub fn alerts(&self, visible: &[AlertRecord], active: usize) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}  {}",
            self.l10n
                .text("weather_alerts", "Weather Alerts")
                .bold()
                .cyan(),
            format!("{} {}", active, self.l10n.text("active", "Active")).red()
        );
        let _ = writeln!(out);

        if visible.is_empty() {
            let _ = writeln!(
                out,
                "  {}",
                self.l10n.text("no_alerts", "No alerts match your criteria")
            );
            return out;
        }

        for alert in visible {
            self.alert_block(&mut out, alert);
        }
        out
    }

    fn alert_block(&self, out: &mut String, alert: &AlertRecord) {
        let status = if alert.active {
            String::new()
        } else {
            format!(" {}", "(dismissed)".dimmed())
        };
        let _ = writeln!(
            out,
            "  [{}] [{}] {}{}",
            severity_label(alert.severity),
            category_label(alert.category),
            alert.title.bold(),
            status
        );
        let _ = writeln!(out, "    {}", alert.message);
        let _ = writeln!(
            out,
            "    {} | {} | id {}",
            alert.region,
            alert.timestamp.format("%Y-%m-%d %H:%M"),
            alert.id
        );
        let channels: Vec<String> = alert.channels.iter().map(|c| c.to_string()).collect();
        let _ = writeln!(out, "    Sent via: {}", channels.join(", "));
        let _ = writeln!(out);
    }

    /// The dashboard: banner alerts, current conditions, intraday forecast.
    pub fn dashboard(
        &self,
        banner: &[&AlertRecord],
        weather: &CurrentWeather,
        today: &[HourlyForecast],
    ) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}",
            self.l10n
                .text("welcome_title", "MeteoConnect Rwanda")
                .bold()
                .cyan()
        );
        let _ = writeln!(
            out,
            "{}",
            self.l10n.text(
                "welcome_subtitle",
                "Real-time weather information and alerts for Rwanda"
            )
        );
        let _ = writeln!(out);

        for alert in banner {
            let _ = writeln!(
                out,
                "  {} {} ({})",
                "!".yellow().bold(),
                alert.title.bold(),
                alert.region
            );
            let _ = writeln!(out, "    {}", alert.message);
        }
        if !banner.is_empty() {
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "{}", weather.location.bold());
        let _ = writeln!(
            out,
            "  {}: {}°C  {}",
            self.l10n.text("temperature", "Temperature"),
            weather.temperature,
            weather.condition
        );
        let _ = writeln!(
            out,
            "  {}: {}%",
            self.l10n.text("humidity", "Humidity"),
            weather.humidity
        );
        let _ = writeln!(
            out,
            "  {}: {} km/h",
            self.l10n.text("wind_speed", "Wind Speed"),
            weather.wind_speed
        );
        let _ = writeln!(out);

        let _ = writeln!(
            out,
            "{}",
            self.l10n
                .text("today_forecast", "Today's Forecast")
                .bold()
                .yellow()
        );
        for slot in today {
            let _ = writeln!(out, "  {:>6}  {:>3}°  {}", slot.time, slot.temp, slot.condition);
        }
        out
    }

    pub fn forecast(&self, days: &[ForecastDay]) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}",
            self.l10n.text("forecast", "Forecast").bold().cyan()
        );
        let _ = writeln!(
            out,
            "  {:<10} {:<10} {:>5} {:>5} {:<15} {:>5} {:>5} {:>6} {:>5}",
            "Date", "Day", "High", "Low", "Condition", "Rain", "Hum", "Wind", "Vis"
        );
        let _ = writeln!(out, "  {}", "-".repeat(80));
        for day in days {
            let _ = writeln!(
                out,
                "  {:<10} {:<10} {:>4}° {:>4}° {:<15} {:>4}% {:>4}% {:>6} {:>5}",
                day.date,
                day.day,
                day.high,
                day.low,
                day.condition,
                day.precipitation,
                day.humidity,
                day.wind_speed,
                day.visibility,
            );
        }
        out
    }

    pub fn community(&self, reports: &[CommunityReport]) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}",
            self.l10n.text("community", "Community").bold().cyan()
        );
        let _ = writeln!(out);
        for report in reports {
            let verified = if report.verified {
                "verified".green().to_string()
            } else {
                "unverified".dimmed().to_string()
            };
            let _ = writeln!(
                out,
                "  [{}] {} - {} ({})",
                severity_label(report.severity),
                report.kind.bold(),
                report.location,
                verified
            );
            let _ = writeln!(out, "    {}", report.description);
            let _ = writeln!(
                out,
                "    {} | {} | {} likes",
                report.user,
                report.timestamp.format("%Y-%m-%d %H:%M"),
                report.likes
            );
            let _ = writeln!(out);
        }
        out
    }

    /// The admin panel's moderation queue.
    pub fn pending(&self, reports: &[&PendingReport]) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{}",
            self.l10n
                .text("pending_reports", "Pending Community Reports")
                .bold()
                .cyan()
        );
        let _ = writeln!(out);

        if reports.is_empty() {
            let _ = writeln!(out, "  {}", "Nothing to review".dimmed());
            return out;
        }

        for report in reports {
            let _ = writeln!(
                out,
                "  [{}] {} - {} ({})",
                status_label(report.status),
                report.kind.bold(),
                report.location,
                severity_label(report.severity)
            );
            let _ = writeln!(out, "    {}", report.description);
            let _ = writeln!(
                out,
                "    {} | {} | id {}",
                report.user,
                report.timestamp.format("%Y-%m-%d %H:%M"),
                report.id
            );
            let _ = writeln!(out);
        }
        out
    }
}

fn status_label(status: ReviewStatus) -> ColoredString {
    let label = status.to_string().to_ascii_uppercase();
    match status {
        ReviewStatus::Pending => label.yellow(),
        ReviewStatus::Approved => label.green(),
        ReviewStatus::Rejected => label.red(),
    }
}

fn severity_label(severity: Severity) -> ColoredString {
    let label = severity.to_string();
    match severity {
        Severity::High => label.red(),
        Severity::Medium => label.yellow(),
        Severity::Low => label.green(),
    }
}

fn category_label(category: AlertCategory) -> ColoredString {
    let label = category.to_string();
    match category {
        AlertCategory::Warning => label.truecolor(255, 165, 0),
        AlertCategory::Storm => label.purple(),
        AlertCategory::Flood => label.blue(),
        _ => label.normal(),
    }
}
