use reqwest::StatusCode;
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Request to '{0}' returned status {1}")]
    RequestNotOk(String, StatusCode),
    #[error("Malformed response payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Salary range a vacancy reports. Either side may be missing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SalaryBounds {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
}

impl SalaryBounds {
    /// Build bounds from the raw figures a job board reports.
    ///
    /// Both boards emit 0 (SuperJob) or null (HeadHunter) for an unset
    /// bound, so a zero figure is indistinguishable from a missing one and
    /// is dropped here rather than entering an estimate as a real value.
    pub fn from_reported(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self {
            lower: lower.filter(|v| *v != 0.0),
            upper: upper.filter(|v| *v != 0.0),
        }
    }
}

/// Source-agnostic view of a vacancy once a board-specific record has been
/// adapted: the currency it pays in and whatever salary bounds it states.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedVacancy {
    pub currency: String,
    pub bounds: SalaryBounds,
}

/// Per-language summary for one job board.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub language: String,
    pub vacancies_found: u64,
    pub vacancies_processed: u64,
    pub average_salary: u64,
}
