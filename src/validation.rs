//! Input validation for tournament configurations.
//!
//! Checks a [`TournamentConfig`] before scheduling and reports every
//! problem at once, so a form can highlight all of them together.
//! Detects:
//! - Zero pitches, zero-length matches, zero days
//! - Unparseable or empty day windows
//! - More windows than days
//! - Fewer than two competitors
//! - Duplicate competitor names
//! - Kit colours for unknown competitors
//!
//! Validation is opt-in. [`generate_schedule`] does not call it and will
//! happily pair duplicate names with each other.
//!
//! [`generate_schedule`]: crate::config::generate_schedule

use std::collections::HashSet;

use crate::config::TournamentConfig;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A count or duration that must be positive is zero.
    NonPositive,
    /// A day window time is not `HH:MM`.
    InvalidTime,
    /// A day window ends at or before its start.
    EmptyWindow,
    /// More day windows than match days.
    ExtraWindows,
    /// Fewer than two competitors.
    TooFewCompetitors,
    /// Two competitors share a name.
    DuplicateCompetitor,
    /// A kit colour is given for a name that is not competing.
    UnknownCompetitor,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a tournament configuration.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_request(config: &TournamentConfig) -> ValidationResult {
    let mut errors = Vec::new();

    for (value, what) in [
        (config.pitches, "pitch count"),
        (config.match_duration_min, "match duration"),
        (config.days, "day count"),
    ] {
        if value == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositive,
                format!("{what} must be at least 1"),
            ));
        }
    }

    if config.day_windows.len() > config.days as usize {
        errors.push(ValidationError::new(
            ValidationErrorKind::ExtraWindows,
            format!(
                "{} day windows given for {} days; extra windows are ignored",
                config.day_windows.len(),
                config.days
            ),
        ));
    }

    for (i, spec) in config.day_windows.iter().enumerate() {
        let day = i + 1;
        match spec.parse() {
            Ok(window) if window.is_empty() => errors.push(ValidationError::new(
                ValidationErrorKind::EmptyWindow,
                format!("Day {day} window {}-{} allows no kickoffs", spec.start, spec.end),
            )),
            Ok(_) => {}
            Err(e) => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTime,
                format!("Day {day}: {e}"),
            )),
        }
    }

    if config.competitors.len() < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooFewCompetitors,
            format!(
                "at least 2 competitors are required, got {}",
                config.competitors.len()
            ),
        ));
    }

    let mut names = HashSet::new();
    for name in &config.competitors {
        if !names.insert(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateCompetitor,
                format!("Duplicate competitor: {name}"),
            ));
        }
    }

    for name in config.kit_colors.keys() {
        if !names.contains(name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCompetitor,
                format!("Kit colours given for unknown competitor '{name}'"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
