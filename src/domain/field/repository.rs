//! Field schedule repository interface

use async_trait::async_trait;
use uuid::Uuid;

use super::model::FieldSchedule;
use crate::domain::DomainResult;

#[async_trait]
pub trait FieldScheduleRepository: Send + Sync {
    /// Fetch the static schedule record for a field.
    ///
    /// `Ok(None)` means the field does not exist; transport failure is
    /// `Err(DataUnavailable)`.
    async fn find_by_id(&self, field_id: Uuid) -> DomainResult<Option<FieldSchedule>>;
}
