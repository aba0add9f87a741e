use crate::domain::model::{ScheduleSlot, Service, StaffMember};
use crate::utils::error::{BookingError, Result};
use std::fmt;

/// One of the three cascading selection levels, in dependency order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Service,
    Staff,
    Schedule,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Service, Level::Staff, Level::Schedule];

    /// Levels that depend on this one.
    pub fn descendants(self) -> &'static [Level] {
        match self {
            Level::Service => &[Level::Staff, Level::Schedule],
            Level::Staff => &[Level::Schedule],
            Level::Schedule => &[],
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Service => "service",
            Level::Staff => "staff",
            Level::Schedule => "schedule",
        };
        f.write_str(name)
    }
}

/// Progress indicator position, 1 through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ProgressStep {
    ChooseService = 1,
    ChooseStaff = 2,
    ChooseSchedule = 3,
    Confirm = 4,
}

impl ProgressStep {
    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn of(state: &SelectionState) -> Self {
        match state {
            SelectionState::Empty => ProgressStep::ChooseService,
            SelectionState::ServiceChosen { .. } => ProgressStep::ChooseStaff,
            SelectionState::StaffChosen { .. } => ProgressStep::ChooseSchedule,
            SelectionState::ScheduleChosen { .. } => ProgressStep::Confirm,
        }
    }
}

/// The wizard's selections. Each variant carries exactly the levels that are set, so a
/// staff member without a service (or a slot without staff) cannot be represented.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Empty,
    ServiceChosen {
        service: Service,
    },
    StaffChosen {
        service: Service,
        staff: StaffMember,
    },
    ScheduleChosen {
        service: Service,
        staff: StaffMember,
        slot: ScheduleSlot,
    },
}

impl SelectionState {
    pub fn service(&self) -> Option<&Service> {
        match self {
            SelectionState::Empty => None,
            SelectionState::ServiceChosen { service }
            | SelectionState::StaffChosen { service, .. }
            | SelectionState::ScheduleChosen { service, .. } => Some(service),
        }
    }

    pub fn staff(&self) -> Option<&StaffMember> {
        match self {
            SelectionState::StaffChosen { staff, .. }
            | SelectionState::ScheduleChosen { staff, .. } => Some(staff),
            _ => None,
        }
    }

    pub fn slot(&self) -> Option<&ScheduleSlot> {
        match self {
            SelectionState::ScheduleChosen { slot, .. } => Some(slot),
            _ => None,
        }
    }

    pub fn step(&self) -> ProgressStep {
        ProgressStep::of(self)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, SelectionState::ScheduleChosen { .. })
    }

    pub fn is_set(&self, level: Level) -> bool {
        match level {
            Level::Service => self.service().is_some(),
            Level::Staff => self.staff().is_some(),
            Level::Schedule => self.slot().is_some(),
        }
    }

    /// Levels that still need a value before the booking can be submitted.
    pub fn missing(&self) -> Vec<Level> {
        Level::ALL
            .into_iter()
            .filter(|level| !self.is_set(*level))
            .collect()
    }

    /// Sets the service and drops whatever staff/slot were chosen under the previous one.
    pub fn select_service(&mut self, service: Service) {
        *self = SelectionState::ServiceChosen { service };
    }

    pub fn select_staff(&mut self, staff: StaffMember) -> Result<()> {
        let service = self
            .service()
            .cloned()
            .ok_or(BookingError::SelectionOrder { level: Level::Staff })?;
        *self = SelectionState::StaffChosen { service, staff };
        Ok(())
    }

    pub fn select_slot(&mut self, slot: ScheduleSlot) -> Result<()> {
        match std::mem::take(self) {
            SelectionState::StaffChosen { service, staff }
            | SelectionState::ScheduleChosen { service, staff, .. } => {
                *self = SelectionState::ScheduleChosen {
                    service,
                    staff,
                    slot,
                };
                Ok(())
            }
            other => {
                *self = other;
                Err(BookingError::SelectionOrder {
                    level: Level::Schedule,
                })
            }
        }
    }

    /// Clears `level` and everything below it.
    pub fn clear(&mut self, level: Level) {
        let next = match (std::mem::take(self), level) {
            (_, Level::Service) | (SelectionState::Empty, _) => SelectionState::Empty,
            (SelectionState::ServiceChosen { service }, _)
            | (SelectionState::StaffChosen { service, .. }, Level::Staff)
            | (SelectionState::ScheduleChosen { service, .. }, Level::Staff) => {
                SelectionState::ServiceChosen { service }
            }
            (SelectionState::StaffChosen { service, staff }, Level::Schedule)
            | (SelectionState::ScheduleChosen { service, staff, .. }, Level::Schedule) => {
                SelectionState::StaffChosen { service, staff }
            }
        };
        *self = next;
    }
}
