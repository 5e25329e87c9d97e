// SPDX-License-Identifier: PMPL-1.0-or-later

//! Error types for the localization, alert and community core.

use crate::community::ReviewStatus;
use thiserror::Error;

/// Errors raised by the library.
///
/// None of these are fatal: every variant describes an input the caller can
/// correct and retry with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeteoError {
    /// A lookup named a language code with no translation catalog.
    #[error("unsupported language: {0:?}")]
    UnsupportedLanguage(String),

    /// An attempt to switch the current language to an unknown code.
    #[error("invalid language: {0:?} (expected one of en, rw, fr)")]
    InvalidLanguage(String),

    /// No alert or report in the collection carries this identifier.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A collection already holds a record with this identifier.
    #[error("duplicate id: {0}")]
    DuplicateId(String),

    /// A draft alert is missing a required field.
    #[error("alert draft is missing required field: {field}")]
    IncompleteDraft { field: &'static str },

    /// A community report draft is missing a required field.
    #[error("report is missing required field: {field}")]
    IncompleteReport { field: &'static str },

    /// A community report has already been approved or rejected.
    #[error("report {id} was already {status}")]
    AlreadyReviewed { id: String, status: ReviewStatus },

    /// Text that is not one of the fixed region display names.
    #[error("unknown region: {0:?}")]
    UnknownRegion(String),

    /// Text that is not one of the alert category names.
    #[error("unknown alert category: {0:?}")]
    UnknownCategory(String),

    /// Text that is not `low`, `medium` or `high`.
    #[error("unknown severity: {0:?}")]
    UnknownSeverity(String),

    /// Text that is not one of the delivery channels.
    #[error("unknown delivery channel: {0:?}")]
    UnknownChannel(String),

    /// A community report type outside the list offered to submitters.
    #[error("unknown report type: {0:?}")]
    UnknownReportType(String),

    /// The system random source failed while generating an identifier.
    #[error("failed to generate id: {0}")]
    IdGeneration(String),
}

/// Result type for library operations.
pub type Result<T> = std::result::Result<T, MeteoError>;
