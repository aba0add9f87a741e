use crate::domain::ports::Presenter;
use crate::domain::state::{Level, ProgressStep};
use crate::domain::view::{ControlView, Notice, NoticeId, NoticeKind, SubmitState, Summary};
use std::io::Write;

/// Draws the wizard as plain text lines on stdout.
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    pub fn new() -> Self {
        Self
    }

    fn print(&self, text: &str) {
        let mut out = std::io::stdout().lock();
        // 終端關閉時沒有其他地方可以回報
        let _ = writeln!(out, "{}", text);
    }
}

pub fn format_control(level: Level, view: &ControlView) -> String {
    let state = if view.enabled { "enabled" } else { "disabled" };
    let mut text = format!("[{}] {} ({})", level, view.placeholder, state);
    for option in &view.options {
        text.push_str(&format!("\n    {:>4}  {}", option.value, option.label));
    }
    text
}

impl Presenter for ConsolePresenter {
    fn set_control_value(&self, level: Level, value: Option<&str>) {
        self.print(&format!("[{}] = {}", level, value.unwrap_or("")));
    }

    fn show_control(&self, level: Level, view: &ControlView) {
        self.print(&format_control(level, view));
    }

    fn set_loading(&self, level: Level, loading: bool) {
        if loading {
            tracing::debug!("loading {} options", level);
        }
    }

    fn set_progress(&self, step: ProgressStep) {
        self.print(&format!("Step {}/4", step.number()));
    }

    fn show_summary(&self, summary: &Summary) {
        self.print(&format!("--- Booking summary ---\n{}", summary));
    }

    fn set_submit(&self, state: SubmitState) {
        let marker = if state.is_clickable() { "*" } else { "-" };
        self.print(&format!("{} {}", marker, state.label()));
    }

    fn show_notice(&self, notice: &Notice) {
        let tag = match notice.kind {
            NoticeKind::Advisory => "notice",
            NoticeKind::Error => "error",
        };
        self.print(&format!("[{}] {}", tag, notice.message));
    }

    fn dismiss_notice(&self, id: NoticeId) {
        tracing::debug!("notice {:?} dismissed", id);
    }

    fn alert(&self, message: &str) {
        eprintln!("! {}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::view::OptionItem;

    #[test]
    fn test_format_control_lists_options() {
        let view = ControlView::populated(
            "Select staff",
            vec![OptionItem {
                value: "7".to_string(),
                label: "Alice - Colorist".to_string(),
            }],
        );
        let text = format_control(Level::Staff, &view);
        assert!(text.starts_with("[staff] Select staff (enabled)"));
        assert!(text.contains("7  Alice - Colorist"));
    }

    #[test]
    fn test_format_disabled_control() {
        let view = ControlView::disabled("Error loading staff");
        assert_eq!(
            format_control(Level::Staff, &view),
            "[staff] Error loading staff (disabled)"
        );
    }
}
