// SPDX-License-Identifier: PMPL-1.0-or-later

//! meteoconnect: weather alerts, forecasts and community reports for Rwanda
//!
//! Command-line front end over the sample datasets. Every command renders
//! in the language chosen by `--lang`, the config file or
//! `METEOCONNECT_LANG`.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use meteoconnect::alerts::{self, AlertDraft, AlertFeed, FilterCriteria, Selector};
use meteoconnect::community::{Decision, ModerationQueue, PendingReport, ReportDraft};
use meteoconnect::config::Config;
use meteoconnect::fixtures::{self, DataSeed};
use meteoconnect::i18n::{self, Lang, Localizer};
use meteoconnect::report::{OutputFormat, ReportFormatter};
use meteoconnect::types::*;
use serde::Serialize;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "meteoconnect")]
#[command(version)]
#[command(about = "Weather alerts, forecasts and community reports for Rwanda")]
#[command(long_about = None)]
struct Cli {
    /// Config file (JSON or YAML)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Display language (en, rw, fr)
    #[arg(short, long, global = true, value_name = "CODE")]
    lang: Option<String>,

    /// Initial alert data set
    #[arg(long, global = true, value_enum)]
    seed: Option<DataSeed>,

    /// Debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List alerts matching search text, region and category
    Alerts {
        /// Case-insensitive text to find in title or message
        #[arg(short, long, default_value = "")]
        search: String,

        /// Region name, or "all"
        #[arg(short, long, default_value = "all")]
        region: Selector<Region>,

        /// Alert category (warning, advisory, storm, flood), or "all"
        #[arg(short, long, default_value = "all")]
        category: Selector<AlertCategory>,

        /// Dismiss an alert before listing (repeatable)
        #[arg(long = "dismiss", value_name = "ID")]
        dismiss: Vec<String>,

        /// Fail when a dismissed id does not exist
        #[arg(long)]
        strict: bool,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Look up a translation key in the current language
    Translate {
        #[arg(value_name = "KEY")]
        key: String,

        /// Text to show when the key has no translation
        #[arg(short, long)]
        fallback: Option<String>,
    },

    /// List supported display languages
    Languages,

    /// Banner alerts, current conditions and today's forecast
    Dashboard {
        /// Dismiss a banner alert (repeatable)
        #[arg(long = "dismiss", value_name = "ID")]
        dismiss: Vec<String>,

        /// Print only a one-sentence read-out of current conditions
        #[arg(long)]
        speak: bool,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Five-day forecast
    Forecast {
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Community weather reports
    Reports {
        /// Show the moderation queue instead of published reports
        #[arg(long)]
        pending: bool,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Submit a weather observation for review
    Submit {
        /// Observation type, e.g. "Heavy Rain" or "Hail"
        #[arg(long = "type", value_name = "TYPE")]
        kind: String,

        #[arg(long)]
        location: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        severity: Option<Severity>,

        /// Name shown with the report
        #[arg(long, default_value = "Anonymous")]
        user: String,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Approve or reject a pending community report
    Moderate {
        #[arg(value_name = "ID")]
        id: String,

        #[arg(value_enum)]
        decision: Decision,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Issue a new alert into the session feed
    Issue {
        #[arg(long)]
        title: String,

        #[arg(long)]
        message: String,

        #[arg(long)]
        region: Region,

        #[arg(long)]
        severity: Option<Severity>,

        #[arg(long)]
        category: Option<AlertCategory>,

        /// Delivery channel (web, sms, whatsapp, ussd; repeatable)
        #[arg(long = "channel", value_name = "CHANNEL")]
        channels: Vec<Channel>,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Serialize)]
struct AlertListing<'a> {
    active: usize,
    alerts: &'a [AlertRecord],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DashboardView<'a> {
    banner: Vec<&'a AlertRecord>,
    current_weather: CurrentWeather,
    today_forecast: Vec<HourlyForecast>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::resolve(cli.config.as_deref())?;
    let seed = cli.seed.unwrap_or(config.seed);
    let lang_code = cli
        .lang
        .clone()
        .unwrap_or_else(|| config.language.code().to_string());
    debug!(?seed, lang = %lang_code, "configuration resolved");

    let l10n = localizer(config.language, &lang_code);

    match cli.command {
        Commands::Alerts {
            search,
            region,
            category,
            dismiss,
            strict,
            format,
        } => {
            let formatter = ReportFormatter::new(l10n?);
            let mut records = seed.alerts();
            for id in &dismiss {
                records = if strict {
                    alerts::try_dismiss(&records, id)?
                } else {
                    alerts::dismiss(&records, id)
                };
            }

            let criteria = FilterCriteria {
                search,
                region,
                category,
            };
            let visible = alerts::filter(&records, &criteria);
            let active = alerts::active_count(&visible);

            match format.serialize(&AlertListing {
                active,
                alerts: &visible,
            })? {
                Some(payload) => println!("{}", payload),
                None => print!("{}", formatter.alerts(&visible, active)),
            }
        }

        Commands::Translate { key, fallback } => {
            // Resolve against the raw code so an unknown code is reported as
            // unsupported rather than silently defaulted.
            let text = i18n::resolve(&lang_code, &key, fallback.as_deref())
                .with_context(|| language_hint(&lang_code))?;
            println!("{}", text);
        }

        Commands::Languages => {
            let l10n = l10n?;
            for lang in Lang::all() {
                let marker = if *lang == l10n.lang() { "*" } else { " " };
                println!(
                    "{} {}  {:<13} {}",
                    marker,
                    lang.code().bold(),
                    i18n::native_name(lang.code()).unwrap_or_default(),
                    i18n::language_name(lang.code())
                        .unwrap_or_default()
                        .dimmed()
                );
            }
        }

        Commands::Dashboard {
            dismiss,
            speak,
            format,
        } => {
            let formatter = ReportFormatter::new(l10n?);
            if speak {
                println!("{}", fixtures::current_weather().summary());
                return Ok(());
            }
            let mut feed = AlertFeed::from_seed(seed);
            for id in &dismiss {
                if !feed.dismiss(id) {
                    eprintln!("{} no banner alert with id {}", "note:".yellow(), id);
                }
            }
            let view = DashboardView {
                banner: feed.banner(),
                current_weather: fixtures::current_weather(),
                today_forecast: fixtures::today_forecast(),
            };
            match format.serialize(&view)? {
                Some(payload) => println!("{}", payload),
                None => print!(
                    "{}",
                    formatter.dashboard(
                        &view.banner,
                        &view.current_weather,
                        &view.today_forecast
                    )
                ),
            }
        }

        Commands::Forecast { format } => {
            let formatter = ReportFormatter::new(l10n?);
            let days = fixtures::five_day_forecast();
            match format.serialize(&days)? {
                Some(payload) => println!("{}", payload),
                None => print!("{}", formatter.forecast(&days)),
            }
        }

        Commands::Reports { pending, format } => {
            let formatter = ReportFormatter::new(l10n?);
            if pending {
                let queue = ModerationQueue::new(fixtures::pending_reports())?;
                let waiting = queue.pending();
                match format.serialize(&waiting)? {
                    Some(payload) => println!("{}", payload),
                    None => print!("{}", formatter.pending(&waiting)),
                }
            } else {
                let reports = fixtures::community_reports();
                match format.serialize(&reports)? {
                    Some(payload) => println!("{}", payload),
                    None => print!("{}", formatter.community(&reports)),
                }
            }
        }

        Commands::Submit {
            kind,
            location,
            description,
            severity,
            user,
            format,
        } => {
            let formatter = ReportFormatter::new(l10n?);
            let draft = ReportDraft {
                kind,
                location,
                description,
                severity,
            };
            let mut queue = ModerationQueue::new(fixtures::pending_reports())?;
            let submitted = queue.submit(&draft, &user, Utc::now())?.clone();

            match format.serialize(&submitted)? {
                Some(payload) => println!("{}", payload),
                None => {
                    println!(
                        "{} report {}; it will be reviewed by our team",
                        "Submitted".green().bold(),
                        submitted.id
                    );
                    println!();
                    print!("{}", formatter.pending(&queue.pending()));
                }
            }
        }

        Commands::Moderate {
            id,
            decision,
            format,
        } => {
            let formatter = ReportFormatter::new(l10n?);
            let mut queue = ModerationQueue::new(fixtures::pending_reports())?;
            let decided: PendingReport = queue.decide(&id, decision)?.clone();

            match format.serialize(&decided)? {
                Some(payload) => println!("{}", payload),
                None => {
                    println!("Report {} {}", decided.id, decided.status.to_string().bold());
                    println!();
                    let published = queue.approved();
                    if !published.is_empty() {
                        print!("{}", formatter.community(&published));
                    }
                    print!("{}", formatter.pending(&queue.pending()));
                }
            }
        }

        Commands::Issue {
            title,
            message,
            region,
            severity,
            category,
            channels,
            format,
        } => {
            let formatter = ReportFormatter::new(l10n?);
            let draft = AlertDraft {
                title,
                message,
                region: Some(region),
                severity,
                category,
                channels: channels.into_iter().collect(),
            };
            let mut feed = AlertFeed::from_seed(seed);
            let issued = feed.publish(&draft, Utc::now())?.clone();
            let visible = feed.visible(&FilterCriteria::default());
            let active = feed.active_count(&FilterCriteria::default());

            match format.serialize(&issued)? {
                Some(payload) => println!("{}", payload),
                None => {
                    println!(
                        "{} alert {} sent to {}",
                        "Issued".green().bold(),
                        issued.id,
                        issued.region
                    );
                    println!();
                    print!("{}", formatter.alerts(&visible, active));
                }
            }
        }
    }

    Ok(())
}

/// Localizer for `code`, starting from the configured language.
fn localizer(configured: Lang, code: &str) -> Result<Localizer> {
    let mut l10n = Localizer::new(configured);
    l10n.set_language(code)
        .with_context(|| language_hint(code))?;
    Ok(l10n)
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "meteoconnect=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Explain why a language code was refused.
fn language_hint(code: &str) -> String {
    match i18n::language_name(code) {
        Some(name) => format!("{} ({}) has no translation catalog yet", name, code),
        None if i18n::is_valid_iso639_1(code) => {
            format!("{:?} has no translation catalog yet", code)
        }
        None => format!("{:?} is not an ISO 639-1 language code", code),
    }
}
