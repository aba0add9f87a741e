use crate::domain::state::Level;

/// Identifies one dependent-list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    level: Level,
    seq: u64,
}

impl Ticket {
    pub fn level(&self) -> Level {
        self.level
    }
}

/// Per-level request counters. Only the most recently issued ticket of a level is current;
/// invalidating a level makes every outstanding ticket for it stale.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    staff: u64,
    schedule: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    fn counter(&mut self, level: Level) -> Option<&mut u64> {
        match level {
            Level::Service => None,
            Level::Staff => Some(&mut self.staff),
            Level::Schedule => Some(&mut self.schedule),
        }
    }

    fn latest(&self, level: Level) -> Option<u64> {
        match level {
            Level::Service => None,
            Level::Staff => Some(self.staff),
            Level::Schedule => Some(self.schedule),
        }
    }

    pub fn issue(&mut self, level: Level) -> Ticket {
        let seq = match self.counter(level) {
            Some(counter) => {
                *counter += 1;
                *counter
            }
            // service options are pre-rendered, never fetched per-selection
            None => 0,
        };
        Ticket { level, seq }
    }

    pub fn invalidate(&mut self, level: Level) {
        if let Some(counter) = self.counter(level) {
            *counter += 1;
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest(ticket.level) == Some(ticket.seq)
    }
}
