pub mod notice;
pub mod sequence;
pub mod summary;
pub mod wizard;

pub use crate::domain::model::{Price, ScheduleSlot, Service, ServiceCatalog, StaffMember};
pub use crate::domain::ports::{BookingApi, Presenter};
pub use crate::domain::state::{Level, ProgressStep, SelectionState};
pub use crate::utils::error::Result;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// A poisoned lock only means a presenter panicked mid-call; the data is still usable.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
