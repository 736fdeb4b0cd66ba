use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use thiserror::Error;

use crate::analytics::Period;
use crate::model::attendance::AttendanceRecord;
use crate::model::schedule::EmployeeProfile;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("attendance data source unavailable: {0}")]
    Unavailable(String),
}

/// Data-access collaborator for the analytics handlers. Implementations are
/// read-only; each call hands back its own snapshot of the data.
pub trait AttendanceStore: Send + Sync {
    fn roster(&self) -> Result<Vec<EmployeeProfile>, StoreError>;
    fn records_for_period(&self, period: Period) -> Result<Vec<AttendanceRecord>, StoreError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Dataset {
    employees: Vec<EmployeeProfile>,
    records: Vec<AttendanceRecord>,
}

impl Dataset {
    fn from_json(raw: &str) -> Result<Self> {
        let dataset: Dataset = serde_json::from_str(raw).context("failed to parse dataset JSON")?;
        for record in &dataset.records {
            if record.is_leave && (record.in_time.is_some() || record.out_time.is_some()) {
                bail!(
                    "record for {} on {} is marked as leave but carries punch times",
                    record.employee_id,
                    record.date
                );
            }
            if let (Some(in_time), Some(out_time)) = (record.in_time, record.out_time) {
                if out_time < in_time {
                    tracing::warn!(
                        employee_id = %record.employee_id,
                        date = %record.date,
                        "out-time before in-time, worked hours will floor to zero"
                    );
                }
            }
        }
        Ok(dataset)
    }

    fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read data file {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("invalid dataset in {}", path.display()))
    }
}

/// Immutable in-memory dataset, loaded once at startup.
#[derive(Debug)]
pub struct MemoryStore {
    employees: Vec<EmployeeProfile>,
    records: Vec<AttendanceRecord>,
}

impl MemoryStore {
    pub fn from_json(raw: &str) -> Result<Self> {
        let dataset = Dataset::from_json(raw)?;
        Ok(Self {
            employees: dataset.employees,
            records: dataset.records,
        })
    }

    /// Built-in demo dataset used when no `DATA_FILE` is configured.
    pub fn sample() -> Result<Self> {
        Self::from_json(include_str!("../data/sample.json"))
    }
}

impl AttendanceStore for MemoryStore {
    fn roster(&self) -> Result<Vec<EmployeeProfile>, StoreError> {
        Ok(self.employees.clone())
    }

    fn records_for_period(&self, period: Period) -> Result<Vec<AttendanceRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|r| period.contains(r.date))
            .cloned()
            .collect())
    }
}

/// Reads the dataset file on every call, so an updated upload is picked up
/// without a restart. A missing or corrupt file surfaces as `Unavailable`.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Dataset, StoreError> {
        Dataset::from_path(&self.path).map_err(|e| StoreError::Unavailable(format!("{e:#}")))
    }
}

impl AttendanceStore for FileStore {
    fn roster(&self) -> Result<Vec<EmployeeProfile>, StoreError> {
        Ok(self.load()?.employees)
    }

    fn records_for_period(&self, period: Period) -> Result<Vec<AttendanceRecord>, StoreError> {
        Ok(self
            .load()?
            .records
            .into_iter()
            .filter(|r| period.contains(r.date))
            .collect())
    }
}
