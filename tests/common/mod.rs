#![allow(dead_code)]

use booking_wizard::domain::model::{Price, Service, ServiceCatalog};
use booking_wizard::domain::ports::Presenter;
use booking_wizard::domain::state::{Level, ProgressStep};
use booking_wizard::domain::view::{ControlView, Notice, NoticeId, SubmitState, Summary};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Value(Level, Option<String>),
    Control(Level, ControlView),
    Loading(Level, bool),
    Progress(u8),
    Summary(Summary),
    Submit(SubmitState),
    Notice(Notice),
    Dismiss(NoticeId),
    Alert(String),
}

/// Presenter that remembers every call.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    events: Mutex<Vec<Event>>,
}

impl RecordingPresenter {
    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn last_control(&self, level: Level) -> Option<ControlView> {
        self.events().into_iter().rev().find_map(|e| match e {
            Event::Control(l, view) if l == level => Some(view),
            _ => None,
        })
    }

    pub fn last_value(&self, level: Level) -> Option<Option<String>> {
        self.events().into_iter().rev().find_map(|e| match e {
            Event::Value(l, value) if l == level => Some(value),
            _ => None,
        })
    }

    pub fn is_loading(&self, level: Level) -> bool {
        self.events()
            .into_iter()
            .rev()
            .find_map(|e| match e {
                Event::Loading(l, loading) if l == level => Some(loading),
                _ => None,
            })
            .unwrap_or(false)
    }

    pub fn last_progress(&self) -> Option<u8> {
        self.events().into_iter().rev().find_map(|e| match e {
            Event::Progress(step) => Some(step),
            _ => None,
        })
    }

    pub fn last_summary(&self) -> Option<Summary> {
        self.events().into_iter().rev().find_map(|e| match e {
            Event::Summary(summary) => Some(summary),
            _ => None,
        })
    }

    pub fn last_submit(&self) -> Option<SubmitState> {
        self.events().into_iter().rev().find_map(|e| match e {
            Event::Submit(state) => Some(state),
            _ => None,
        })
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Notice(notice) => Some(notice),
                _ => None,
            })
            .collect()
    }

    pub fn dismissed(&self) -> Vec<NoticeId> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Dismiss(id) => Some(id),
                _ => None,
            })
            .collect()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Alert(message) => Some(message),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for RecordingPresenter {
    fn set_control_value(&self, level: Level, value: Option<&str>) {
        self.push(Event::Value(level, value.map(str::to_string)));
    }

    fn show_control(&self, level: Level, view: &ControlView) {
        self.push(Event::Control(level, view.clone()));
    }

    fn set_loading(&self, level: Level, loading: bool) {
        self.push(Event::Loading(level, loading));
    }

    fn set_progress(&self, step: ProgressStep) {
        self.push(Event::Progress(step.number()));
    }

    fn show_summary(&self, summary: &Summary) {
        self.push(Event::Summary(summary.clone()));
    }

    fn set_submit(&self, state: SubmitState) {
        self.push(Event::Submit(state));
    }

    fn show_notice(&self, notice: &Notice) {
        self.push(Event::Notice(notice.clone()));
    }

    fn dismiss_notice(&self, id: NoticeId) {
        self.push(Event::Dismiss(id));
    }

    fn alert(&self, message: &str) {
        self.push(Event::Alert(message.to_string()));
    }
}

pub fn service(id: u64, name: &str, price: &str, duration: u32) -> Service {
    Service {
        id,
        name: name.to_string(),
        price: price.parse::<Price>().unwrap(),
        duration,
        description: None,
    }
}

pub fn salon_catalog() -> ServiceCatalog {
    ServiceCatalog::new(vec![
        service(1, "Haircut", "25.00", 30),
        service(3, "Hair Coloring", "45.00", 30),
        service(4, "Manicure", "20.00", 45),
    ])
}
