//! The booking wizard controller.
//!
//! Drives the service → staff → schedule cascade: each change event updates
//! [`SelectionState`], repaints the dependent controls through the [`Presenter`], and for
//! the first two levels fetches the next level's options from the [`BookingApi`].

use crate::core::lock;
use crate::core::notice::Notifier;
use crate::core::sequence::{RequestSequencer, Ticket};
use crate::core::summary::render_summary;
use crate::domain::model::{ScheduleSlot, Selectable, ServiceCatalog, StaffMember};
use crate::domain::ports::{BookingApi, Presenter};
use crate::domain::state::{Level, SelectionState};
use crate::domain::view::{
    ControlView, NoticeKind, OptionItem, SubmitState, Summary, MISSING_FIELDS_ALERT,
    SCHEDULE_PLACEHOLDER, STAFF_PLACEHOLDER,
};
use crate::utils::error::{BookingError, Result};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use url::Url;

/// How long each kind of transient notice stays up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTimings {
    pub staff_empty: Duration,
    pub schedule_empty: Duration,
    pub error: Duration,
}

impl Default for NoticeTimings {
    fn default() -> Self {
        Self {
            staff_empty: Duration::from_millis(3000),
            schedule_empty: Duration::from_millis(5000),
            error: Duration::from_millis(5000),
        }
    }
}

/// User-facing text for one dependent control.
struct LevelCopy {
    placeholder: &'static str,
    loading: &'static str,
    empty_placeholder: &'static str,
    empty_message: &'static str,
    error_placeholder: &'static str,
    error_message: &'static str,
}

const STAFF_COPY: LevelCopy = LevelCopy {
    placeholder: STAFF_PLACEHOLDER,
    loading: "Loading staff...",
    empty_placeholder: "No staff available",
    empty_message: "No staff members are available for this service.",
    error_placeholder: "Error loading staff",
    error_message: "Could not load staff members. Please try again.",
};

const SCHEDULE_COPY: LevelCopy = LevelCopy {
    placeholder: SCHEDULE_PLACEHOLDER,
    loading: "Loading schedules...",
    empty_placeholder: "No available schedules",
    empty_message: "No time slots are available for this staff member.",
    error_placeholder: "Error loading schedules",
    error_message: "Could not load available schedules. Please try again.",
};

/// Field values of a complete booking, as the form posts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingForm {
    pub service_id: u64,
    pub staff_id: u64,
    pub schedule_id: u64,
}

impl BookingForm {
    pub fn fields(&self) -> [(&'static str, String); 3] {
        [
            ("service_id", self.service_id.to_string()),
            ("staff_id", self.staff_id.to_string()),
            ("schedule_id", self.schedule_id.to_string()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Default action prevented; the user has been alerted.
    Blocked { missing: Vec<Level> },
    Proceed(BookingForm),
}

impl SubmitOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, SubmitOutcome::Blocked { .. })
    }
}

#[derive(Default)]
struct WizardInner {
    selection: SelectionState,
    staff_options: Vec<StaffMember>,
    schedule_options: Vec<ScheduleSlot>,
    sequencer: RequestSequencer,
}

pub struct BookingWizard<A: BookingApi, P: Presenter> {
    api: A,
    presenter: Arc<P>,
    catalog: ServiceCatalog,
    timings: NoticeTimings,
    notifier: Notifier<P>,
    inner: Mutex<WizardInner>,
}

fn parse_selection(level: Level, raw: &str) -> Result<Option<u64>> {
    let value = raw.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| BookingError::UnknownSelection {
            level,
            value: value.to_string(),
        })
}

fn find_offered<T: Selectable + Clone>(level: Level, offered: &[T], id: u64) -> Result<T> {
    offered
        .iter()
        .find(|item| item.id() == id)
        .cloned()
        .ok_or_else(|| BookingError::UnknownSelection {
            level,
            value: id.to_string(),
        })
}

fn parse_page_url(page_url: &str) -> Result<Url> {
    match Url::parse(page_url) {
        Ok(url) => Ok(url),
        // 相對路徑 (例如 "/book/?service=3") 只需要 query 部分
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Ok(Url::parse("http://localhost/")?.join(page_url)?)
        }
        Err(e) => Err(e.into()),
    }
}

impl<A: BookingApi, P: Presenter> BookingWizard<A, P> {
    pub fn new(
        api: A,
        presenter: Arc<P>,
        catalog: ServiceCatalog,
        timings: NoticeTimings,
    ) -> Self {
        Self {
            api,
            notifier: Notifier::new(Arc::clone(&presenter)),
            presenter,
            catalog,
            timings,
            inner: Mutex::new(WizardInner::default()),
        }
    }

    fn inner(&self) -> MutexGuard<'_, WizardInner> {
        lock(&self.inner)
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    pub fn selection(&self) -> SelectionState {
        self.inner().selection.clone()
    }

    pub fn is_notice_showing(&self, level: Level) -> bool {
        self.notifier.is_showing(level)
    }

    /// Paints the empty wizard.
    pub fn render_initial(&self) {
        let inner = self.inner();
        self.reset_control(Level::Staff);
        self.reset_control(Level::Schedule);
        self.paint(&inner.selection);
    }

    pub fn render_summary(&self) -> Summary {
        render_summary(&self.inner().selection)
    }

    pub async fn on_service_change(&self, service_id: &str) -> Result<()> {
        let Some(id) = parse_selection(Level::Service, service_id)? else {
            tracing::info!("service cleared");
            self.clear_from(Level::Service);
            return Ok(());
        };
        let service = find_offered(Level::Service, self.catalog.services(), id)?;
        tracing::info!(service_id = id, "service selected: {}", service.name);

        let ticket = {
            let mut inner = self.inner();
            inner.selection.select_service(service);
            inner.staff_options.clear();
            inner.schedule_options.clear();
            inner.sequencer.invalidate(Level::Schedule);
            let ticket = inner.sequencer.issue(Level::Staff);

            self.reset_control(Level::Schedule);
            self.begin_loading(Level::Staff, &STAFF_COPY);
            self.paint(&inner.selection);
            ticket
        };

        tracing::debug!(service_id = id, "requesting staff list");
        let result = self.api.list_staff(id).await;
        self.apply_options(
            ticket,
            result,
            &STAFF_COPY,
            self.timings.staff_empty,
            |inner, staff| inner.staff_options = staff,
        );
        Ok(())
    }

    pub async fn on_staff_change(&self, staff_id: &str) -> Result<()> {
        let Some(id) = parse_selection(Level::Staff, staff_id)? else {
            tracing::info!("staff cleared");
            self.clear_from(Level::Staff);
            return Ok(());
        };

        let ticket = {
            let mut inner = self.inner();
            let staff = find_offered(Level::Staff, &inner.staff_options, id)?;
            tracing::info!(staff_id = id, "staff selected: {}", staff.name);
            inner.selection.select_staff(staff)?;
            inner.schedule_options.clear();
            let ticket = inner.sequencer.issue(Level::Schedule);

            self.begin_loading(Level::Schedule, &SCHEDULE_COPY);
            self.paint(&inner.selection);
            ticket
        };

        tracing::debug!(staff_id = id, "requesting schedule list");
        let result = self.api.list_schedules(id).await;
        self.apply_options(
            ticket,
            result,
            &SCHEDULE_COPY,
            self.timings.schedule_empty,
            |inner, slots| inner.schedule_options = slots,
        );
        Ok(())
    }

    pub fn on_schedule_change(&self, schedule_id: &str) -> Result<()> {
        let Some(id) = parse_selection(Level::Schedule, schedule_id)? else {
            tracing::info!("schedule cleared");
            self.clear_from(Level::Schedule);
            return Ok(());
        };

        let mut inner = self.inner();
        let slot = find_offered(Level::Schedule, &inner.schedule_options, id)?;
        tracing::info!(schedule_id = id, "schedule selected: {}", slot.option_label());
        inner.selection.select_slot(slot)?;
        self.paint(&inner.selection);
        Ok(())
    }

    /// Gate for the form's submit event.
    pub fn on_submit(&self) -> SubmitOutcome {
        let inner = self.inner();
        match &inner.selection {
            SelectionState::ScheduleChosen {
                service,
                staff,
                slot,
            } => {
                let form = BookingForm {
                    service_id: service.id,
                    staff_id: staff.id,
                    schedule_id: slot.id,
                };
                tracing::info!(?form, "submitting booking");
                self.presenter.set_submit(SubmitState::Processing);
                SubmitOutcome::Proceed(form)
            }
            incomplete => {
                let missing = incomplete.missing();
                tracing::warn!(?missing, "submit blocked");
                self.presenter.alert(MISSING_FIELDS_ALERT);
                SubmitOutcome::Blocked { missing }
            }
        }
    }

    /// Pre-selects the service named by the page URL's `service` query parameter.
    pub async fn init_from_url(&self, page_url: &str) -> Result<()> {
        let url = parse_page_url(page_url)?;
        let requested = url
            .query_pairs()
            .find(|(key, _)| key == "service")
            .map(|(_, value)| value.trim().to_string())
            .filter(|value| !value.is_empty());

        let Some(service_id) = requested else {
            tracing::debug!("no service pre-selected in {}", page_url);
            return Ok(());
        };

        self.presenter
            .set_control_value(Level::Service, Some(&service_id));
        match self.on_service_change(&service_id).await {
            Err(BookingError::UnknownSelection { value, .. }) => {
                tracing::warn!("ignoring unknown service '{}' from page URL", value);
                self.presenter.set_control_value(Level::Service, None);
                self.clear_from(Level::Service);
                Ok(())
            }
            other => other,
        }
    }

    fn paint(&self, selection: &SelectionState) {
        self.presenter.set_progress(selection.step());
        self.presenter.show_summary(&render_summary(selection));
        self.presenter.set_submit(if selection.is_complete() {
            SubmitState::Enabled
        } else {
            SubmitState::Disabled
        });
    }

    fn reset_control(&self, level: Level) {
        let placeholder = match level {
            Level::Service => return,
            Level::Staff => STAFF_COPY.placeholder,
            Level::Schedule => SCHEDULE_COPY.placeholder,
        };
        self.notifier.dismiss(level);
        self.presenter.set_loading(level, false);
        self.presenter
            .show_control(level, &ControlView::disabled(placeholder));
    }

    fn begin_loading(&self, level: Level, copy: &LevelCopy) {
        self.notifier.dismiss(level);
        self.presenter
            .show_control(level, &ControlView::disabled(copy.loading));
        self.presenter.set_loading(level, true);
    }

    fn clear_from(&self, level: Level) {
        let mut inner = self.inner();
        inner.selection.clear(level);
        for below in level.descendants() {
            inner.sequencer.invalidate(*below);
            match below {
                Level::Staff => inner.staff_options.clear(),
                Level::Schedule => inner.schedule_options.clear(),
                Level::Service => {}
            }
            self.reset_control(*below);
        }
        self.paint(&inner.selection);
    }

    fn apply_options<T, F>(
        &self,
        ticket: Ticket,
        result: Result<Vec<T>>,
        copy: &LevelCopy,
        empty_delay: Duration,
        store: F,
    ) where
        T: Selectable,
        F: FnOnce(&mut WizardInner, Vec<T>),
    {
        let level = ticket.level();
        let mut inner = self.inner();
        if !inner.sequencer.is_current(ticket) {
            tracing::debug!(?level, "discarding stale {} response", level);
            return;
        }

        self.presenter.set_loading(level, false);
        match result {
            Ok(items) if items.is_empty() => {
                tracing::info!(?level, "lookup returned no options");
                self.presenter
                    .show_control(level, &ControlView::disabled(copy.empty_placeholder));
                self.notifier
                    .show(level, NoticeKind::Advisory, copy.empty_message, empty_delay);
            }
            Ok(items) => {
                tracing::debug!(?level, "received {} options", items.len());
                let options = items
                    .iter()
                    .map(|item| OptionItem {
                        value: item.id().to_string(),
                        label: item.option_label(),
                    })
                    .collect();
                self.presenter
                    .show_control(level, &ControlView::populated(copy.placeholder, options));
                store(&mut *inner, items);
            }
            Err(e) => {
                tracing::warn!(?level, "failed to load {} options: {}", level, e);
                self.presenter
                    .show_control(level, &ControlView::disabled(copy.error_placeholder));
                self.notifier
                    .show(level, NoticeKind::Error, copy.error_message, self.timings.error);
            }
        }
    }
}
