use crate::{
    config::Config,
    error::ApiError,
    store::{
        attendance::AttendanceStore, employee::EmployeeDirectory, metrics::PerformanceBoard,
        profile::ProfileStore, project::ProjectBoard, request::RequestLog,
    },
    utils::{
        clock::{Clock, SystemClock},
        kv_store::{FileStore, KeyValueStore, MemoryStore},
    },
};
use anyhow::{Context, Result};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{error, warn};

/// Everything the handlers share. Each store sits behind its own lock.
pub struct AppState {
    pub attendance: Mutex<AttendanceStore>,
    pub employees: Mutex<EmployeeDirectory>,
    pub projects: Mutex<ProjectBoard>,
    pub requests: Mutex<RequestLog>,
    pub profile: Mutex<ProfileStore>,
    /// Read-only, so unlocked.
    pub metrics: PerformanceBoard,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(backend: Box<dyn KeyValueStore>, attendance_key: &str, clock: Arc<dyn Clock>) -> Self {
        let today = clock.today();
        Self {
            attendance: Mutex::new(AttendanceStore::load(backend, attendance_key, clock.clone())),
            employees: Mutex::new(EmployeeDirectory::seeded()),
            projects: Mutex::new(ProjectBoard::seeded(today)),
            requests: Mutex::new(RequestLog::seeded()),
            profile: Mutex::new(ProfileStore::seeded()),
            metrics: PerformanceBoard::seeded(),
            clock,
        }
    }
}

/// Opens the configured key-value store and builds the application state.
pub fn init_state(config: &Config) -> Result<AppState> {
    let backend: Box<dyn KeyValueStore> = if config.uses_memory_store() {
        warn!("Using in-memory store; attendance will not survive a restart");
        Box::new(MemoryStore::new())
    } else {
        Box::new(
            FileStore::open(&config.store_path)
                .with_context(|| format!("failed to open local store at {}", config.store_path))?,
        )
    };

    Ok(AppState::new(
        backend,
        &config.attendance_key,
        Arc::new(SystemClock),
    ))
}

/// Locks a store, turning a poisoned lock into a 500.
pub fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, ApiError> {
    mutex.lock().map_err(|_| {
        error!("State lock poisoned");
        ApiError::Internal
    })
}
