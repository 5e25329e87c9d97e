// SPDX-License-Identifier: PMPL-1.0-or-later

//! Rendering and export of alert lists, forecasts and reports

pub mod formatter;
pub mod output;

pub use formatter::ReportFormatter;
pub use output::OutputFormat;
