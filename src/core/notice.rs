use crate::core::lock;
use crate::domain::ports::Presenter;
use crate::domain::state::Level;
use crate::domain::view::{Notice, NoticeId, NoticeKind};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

struct ActiveNotice {
    id: NoticeId,
    timer: JoinHandle<()>,
}

/// Transient, auto-dismissing notices, at most one per level.
///
/// Every notice that is shown is dismissed exactly once: by its timer, by [`dismiss`]
/// (when the level's selection changes), by a newer notice for the same level, or when the
/// notifier is dropped. Must be used from within a tokio runtime.
///
/// [`dismiss`]: Notifier::dismiss
pub struct Notifier<P: Presenter> {
    presenter: Arc<P>,
    next_id: AtomicU64,
    active: Arc<Mutex<HashMap<Level, ActiveNotice>>>,
}

impl<P: Presenter> Notifier<P> {
    pub fn new(presenter: Arc<P>) -> Self {
        Self {
            presenter,
            next_id: AtomicU64::new(1),
            active: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn show(
        &self,
        level: Level,
        kind: NoticeKind,
        message: impl Into<String>,
        dismiss_after: Duration,
    ) -> NoticeId {
        self.dismiss(level);

        let id = NoticeId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let notice = Notice {
            id,
            level,
            kind,
            message: message.into(),
            dismiss_after,
        };
        tracing::debug!(?level, ?kind, "showing notice {:?}: {}", id, notice.message);
        self.presenter.show_notice(&notice);

        // 持有鎖直到登記完成，避免計時器在插入前觸發
        let mut active = lock(&self.active);
        let presenter = Arc::clone(&self.presenter);
        let registry = Arc::clone(&self.active);
        let timer = tokio::spawn(async move {
            tokio::time::sleep(dismiss_after).await;
            let expired = {
                let mut registry = lock(&registry);
                let is_current = registry.get(&level).map(|current| current.id) == Some(id);
                if is_current {
                    registry.remove(&level);
                }
                is_current
            };
            if expired {
                tracing::debug!("notice {:?} expired", id);
                presenter.dismiss_notice(id);
            }
        });
        active.insert(level, ActiveNotice { id, timer });
        id
    }

    /// Removes the level's notice now, if one is showing.
    pub fn dismiss(&self, level: Level) {
        let removed = lock(&self.active).remove(&level);
        if let Some(notice) = removed {
            notice.timer.abort();
            self.presenter.dismiss_notice(notice.id);
        }
    }

    pub fn is_showing(&self, level: Level) -> bool {
        lock(&self.active).contains_key(&level)
    }
}

impl<P: Presenter> Drop for Notifier<P> {
    fn drop(&mut self) {
        let drained: Vec<ActiveNotice> = lock(&self.active).drain().map(|(_, n)| n).collect();
        for notice in drained {
            notice.timer.abort();
            self.presenter.dismiss_notice(notice.id);
        }
    }
}
