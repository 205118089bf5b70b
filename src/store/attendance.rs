use crate::{
    error::AttendanceError,
    model::{
        attendance::{AttendanceRecord, AttendanceSummary, record_key},
        employee::Employee,
    },
    utils::{clock::Clock, kv_store::KeyValueStore, time_format},
};
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Result of a toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    SignedIn(AttendanceRecord),
    SignedOut(AttendanceRecord),
    /// The day was already finalized; nothing changed.
    AlreadyCompleted(AttendanceRecord),
}

impl ToggleOutcome {
    pub fn record(&self) -> &AttendanceRecord {
        match self {
            ToggleOutcome::SignedIn(r)
            | ToggleOutcome::SignedOut(r)
            | ToggleOutcome::AlreadyCompleted(r) => r,
        }
    }

    /// Short machine-readable name of the transition.
    pub fn kind(&self) -> &'static str {
        match self {
            ToggleOutcome::SignedIn(_) => "signed_in",
            ToggleOutcome::SignedOut(_) => "signed_out",
            ToggleOutcome::AlreadyCompleted(_) => "already_completed",
        }
    }

    pub fn message(&self) -> String {
        let record = self.record();
        match self {
            ToggleOutcome::SignedIn(_) => format!(
                "{} signed in at {}",
                record.employee_name,
                record.check_in.format(time_format::FORMAT)
            ),
            ToggleOutcome::SignedOut(_) => format!(
                "{} signed out at {}",
                record.employee_name,
                record
                    .check_out
                    .map(|t| t.format(time_format::FORMAT).to_string())
                    .unwrap_or_default()
            ),
            ToggleOutcome::AlreadyCompleted(_) => format!(
                "{} has already completed attendance for {}",
                record.employee_name, record.date
            ),
        }
    }
}

/// Per-employee, per-day sign-in/sign-out records written through to a key-value store.
///
/// The records are the only copy; every change goes through [`AttendanceStore::toggle`].
pub struct AttendanceStore {
    records: BTreeMap<String, AttendanceRecord>,
    backend: Box<dyn KeyValueStore>,
    key: String,
    clock: Arc<dyn Clock>,
}

impl AttendanceStore {
    /// Reads the persisted records once. A missing or unreadable value starts empty.
    pub fn load(backend: Box<dyn KeyValueStore>, key: impl Into<String>, clock: Arc<dyn Clock>) -> Self {
        let key = key.into();

        let records = match backend.get(&key) {
            Ok(Some(raw)) => match serde_json::from_str::<BTreeMap<String, AttendanceRecord>>(&raw) {
                Ok(records) => records,
                Err(e) => {
                    warn!(error = %e, key = %key, "Discarding unreadable attendance data");
                    BTreeMap::new()
                }
            },
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                warn!(error = %e, key = %key, "Attendance data unavailable, starting empty");
                BTreeMap::new()
            }
        };

        info!(records = records.len(), key = %key, "Attendance store loaded");
        Self {
            records,
            backend,
            key,
            clock,
        }
    }

    /// Advances today's attendance for the employee by one step and persists it.
    ///
    /// On a failed write the change is undone and the error returned.
    pub fn toggle(
        &mut self,
        employee_id: u64,
        employee_name: &str,
    ) -> Result<ToggleOutcome, AttendanceError> {
        let now = self.clock.now();
        let time = time_format::to_minute(now.time());
        let key = record_key(employee_id, now.date());

        let previous = self.records.get(&key).cloned();
        let outcome = match &previous {
            None => {
                let record = AttendanceRecord {
                    employee_id,
                    employee_name: employee_name.to_string(),
                    date: now.date(),
                    check_in: time,
                    check_out: None,
                };
                self.records.insert(key.clone(), record.clone());
                ToggleOutcome::SignedIn(record)
            }
            Some(record) if record.check_out.is_none() => {
                let mut record = record.clone();
                record.check_out = Some(time);
                self.records.insert(key.clone(), record.clone());
                ToggleOutcome::SignedOut(record)
            }
            Some(record) => {
                debug!(key = %key, "Toggle on completed attendance ignored");
                return Ok(ToggleOutcome::AlreadyCompleted(record.clone()));
            }
        };

        if let Err(e) = self.persist() {
            match previous {
                Some(record) => self.records.insert(key, record),
                None => self.records.remove(&key),
            };
            return Err(e);
        }

        info!(key = %key, status = %outcome.record().status(), "Attendance updated");
        Ok(outcome)
    }

    /// Attendance state of the employee on `date`. Pure read.
    pub fn status_of(&self, employee_id: u64, date: NaiveDate) -> AttendanceSummary {
        self.records
            .get(&record_key(employee_id, date))
            .map(AttendanceSummary::of)
            .unwrap_or_else(|| AttendanceSummary::not_signed_in(employee_id, date))
    }

    /// [`Self::status_of`] for the clock's current date.
    pub fn status_today(&self, employee_id: u64) -> AttendanceSummary {
        self.status_of(employee_id, self.clock.today())
    }

    /// One summary per listed employee, in directory order.
    pub fn daily_sheet(&self, date: NaiveDate, employees: &[Employee]) -> Vec<AttendanceSummary> {
        employees
            .iter()
            .map(|e| self.status_of(e.id, date))
            .collect()
    }

    /// Every stored record, in key order.
    pub fn records(&self) -> impl Iterator<Item = &AttendanceRecord> {
        self.records.values()
    }

    /// The employee's records, oldest day first. Kept after the employee is removed.
    pub fn history(&self, employee_id: u64) -> Vec<AttendanceRecord> {
        let mut days: Vec<_> = self
            .records()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect();
        days.sort_by_key(|r| r.date);
        days
    }

    pub fn records_on(&self, date: NaiveDate) -> impl Iterator<Item = &AttendanceRecord> {
        self.records.values().filter(move |r| r.date == date)
    }

    fn persist(&mut self) -> Result<(), AttendanceError> {
        let raw = serde_json::to_string(&self.records).map_err(AttendanceError::Encode)?;
        self.backend.set(&self.key, raw)?;
        Ok(())
    }
}
