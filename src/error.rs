//! Error types for the calendar core
//!
//! Per-item errors (`ItemError`) are recovered: the item is excluded and
//! reported to diagnostics. Configuration errors (`ConfigError`) are
//! programming mistakes and are returned to the caller.

use thiserror::Error;

use crate::models::EventId;

/// Why a single raw item was excluded from placement
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ItemError {
    /// Start or end is missing, unparsable, or `end <= start`
    #[error("Event {id} doesn't have a valid start-date or end-date: {reason}")]
    InvalidDateRange { id: EventId, reason: String },

    /// The event reaches the Sunday 00:00 that ends its starting week
    #[error("Event {id} cannot span from one week to another (ends {end}, week ends {week_end}); split it into multiple events")]
    WeekBoundaryViolation {
        id: EventId,
        end: String,
        week_end: String,
    },
}

impl ItemError {
    /// Item the error belongs to
    pub fn id(&self) -> EventId {
        match self {
            ItemError::InvalidDateRange { id, .. } => *id,
            ItemError::WeekBoundaryViolation { id, .. } => *id,
        }
    }

    /// Stable diagnostic kind identifier
    pub fn kind(&self) -> &'static str {
        match self {
            ItemError::InvalidDateRange { .. } => "invalid_date_range",
            ItemError::WeekBoundaryViolation { .. } => "week_boundary_violation",
        }
    }
}

/// Why a date attribute could not be read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateParseError {
    #[error("empty date string")]
    Empty,

    #[error("unparsable date '{0}'")]
    Unparsable(String),
}

/// Fatal configuration errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Invalid layout configuration: {0}")]
    InvalidLayout(String),

    #[error("Invalid view month: {0}")]
    InvalidMonth(String),

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] DateParseError),

    #[error("Cell index {0} is outside the month grid")]
    InvalidCell(usize),
}
