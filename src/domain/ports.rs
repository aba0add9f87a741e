use crate::domain::model::{ScheduleSlot, Service, StaffMember};
use crate::domain::state::{Level, ProgressStep};
use crate::domain::view::{ControlView, Notice, NoticeId, SubmitState, Summary};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Read side of the booking backend.
#[async_trait]
pub trait BookingApi: Send + Sync {
    /// Active services, for building a catalog when the page does not provide one.
    async fn list_services(&self) -> Result<Vec<Service>>;
    async fn list_staff(&self, service_id: u64) -> Result<Vec<StaffMember>>;
    async fn list_schedules(&self, staff_id: u64) -> Result<Vec<ScheduleSlot>>;
}

#[async_trait]
impl<T: BookingApi + ?Sized> BookingApi for Arc<T> {
    async fn list_services(&self) -> Result<Vec<Service>> {
        (**self).list_services().await
    }

    async fn list_staff(&self, service_id: u64) -> Result<Vec<StaffMember>> {
        (**self).list_staff(service_id).await
    }

    async fn list_schedules(&self, staff_id: u64) -> Result<Vec<ScheduleSlot>> {
        (**self).list_schedules(staff_id).await
    }
}

/// Everything the wizard draws goes through here.
pub trait Presenter: Send + Sync + 'static {
    fn set_control_value(&self, level: Level, value: Option<&str>);
    fn show_control(&self, level: Level, view: &ControlView);
    fn set_loading(&self, level: Level, loading: bool);
    fn set_progress(&self, step: ProgressStep);
    fn show_summary(&self, summary: &Summary);
    fn set_submit(&self, state: SubmitState);
    fn show_notice(&self, notice: &Notice);
    fn dismiss_notice(&self, id: NoticeId);
    /// Blocking message the user must acknowledge.
    fn alert(&self, message: &str);
}
