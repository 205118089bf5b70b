use crate::{
    error::StoreError,
    model::request::{EmployeeRequest, RequestDraft, RequestPriority, RequestStatus, RequestType},
};
use chrono::NaiveDate;
use tracing::info;

/// Self-service requests, newest first.
pub struct RequestLog {
    requests: Vec<EmployeeRequest>,
    next_id: u64,
}

impl RequestLog {
    pub fn new(requests: Vec<EmployeeRequest>) -> Self {
        let next_id = requests.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        Self { requests, next_id }
    }

    pub fn seeded() -> Self {
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN);

        let requests = vec![
            EmployeeRequest {
                id: 1,
                kind: RequestType::TimeOff,
                title: "Summer Vacation".into(),
                description: "Family vacation to Europe".into(),
                start_date: Some(date(2024, 7, 15)),
                end_date: Some(date(2024, 7, 25)),
                priority: RequestPriority::Medium,
                status: RequestStatus::Pending,
                submitted_date: date(2024, 1, 10),
            },
            EmployeeRequest {
                id: 2,
                kind: RequestType::Update,
                title: "Address Change".into(),
                description: "Update home address due to relocation".into(),
                start_date: None,
                end_date: None,
                priority: RequestPriority::Medium,
                status: RequestStatus::Approved,
                submitted_date: date(2024, 1, 5),
            },
        ];

        Self::new(requests)
    }

    pub fn list(&self) -> &[EmployeeRequest] {
        &self.requests
    }

    pub fn submit(&mut self, draft: RequestDraft, today: NaiveDate) -> Result<EmployeeRequest, StoreError> {
        let id = self.next_id;
        let request = draft.into_request(id, today)?;
        self.next_id += 1;
        self.requests.insert(0, request.clone());
        info!(request_id = id, title = %request.title, "Request submitted");
        Ok(request)
    }

    /// Settles a pending request as approved or rejected.
    pub fn review(&mut self, id: u64, decision: RequestStatus) -> Result<EmployeeRequest, StoreError> {
        let request = self
            .requests
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(StoreError::NotFound { kind: "Request", id })?;
        if request.status != RequestStatus::Pending || decision == RequestStatus::Pending {
            return Err(StoreError::AlreadyProcessed { kind: "Request", id });
        }
        request.status = decision;
        info!(request_id = id, status = ?decision, "Request reviewed");
        Ok(request.clone())
    }

    pub fn delete(&mut self, id: u64) -> Result<EmployeeRequest, StoreError> {
        let index = self
            .requests
            .iter()
            .position(|r| r.id == id)
            .ok_or(StoreError::NotFound { kind: "Request", id })?;
        info!(request_id = id, "Request deleted");
        Ok(self.requests.remove(index))
    }
}
