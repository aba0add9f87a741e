use crate::domain::state::SelectionState;
use crate::domain::view::{Summary, SummaryBlock, SUMMARY_PROMPT};

/// Builds the summary panel for the current selections. Only set levels contribute, and
/// the total is the service price as-is.
pub fn render_summary(state: &SelectionState) -> Summary {
    let Some(service) = state.service() else {
        return Summary::Prompt(SUMMARY_PROMPT);
    };

    let mut blocks = vec![SummaryBlock::new(service.name.clone())
        .row("Price", service.price.to_string())
        .row("Duration", format!("{} mins", service.duration))];

    if let Some(staff) = state.staff() {
        blocks.push(
            SummaryBlock::new("Staff")
                .row("Name", staff.name.clone())
                .row("Specialization", staff.specialization.clone()),
        );
    }

    if let Some(slot) = state.slot() {
        blocks.push(
            SummaryBlock::new("Appointment")
                .row("Date", slot.date.format("%Y-%m-%d").to_string())
                .row("Time", slot.time_slot.clone()),
        );
        blocks.push(SummaryBlock::new("Total").row("Amount", service.price.to_string()));
    }

    Summary::Booking(blocks)
}
