//! Debounced employee lookup
//!
//! Every key change bumps a generation counter and re-arms a single quiet
//! period timer. When the timer elapses it posts [`DeskEvent::LookupDue`];
//! the owner hands that back to [`DebouncedLookup::fire`], which starts the
//! read only if no newer key arrived in the meantime. Reads are never
//! cancelled once started; their results carry the generation so stale ones
//! can be ignored.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::api::TicketApi;
use crate::events::{DeskEvent, LookupDue, LookupResolved};

pub const DEFAULT_QUIET_PERIOD: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupSchedule {
    /// The key is blank; nothing was scheduled and the snapshot should be
    /// cleared right away.
    Cleared,
    /// A timer is armed for this generation.
    Scheduled { generation: u64 },
}

pub struct DebouncedLookup {
    api: Arc<dyn TicketApi>,
    events: mpsc::UnboundedSender<DeskEvent>,
    quiet_period: Duration,
    generation: u64,
    pending: Option<JoinHandle<()>>,
    in_flight: Option<u64>,
}

impl DebouncedLookup {
    pub fn new(
        api: Arc<dyn TicketApi>,
        events: mpsc::UnboundedSender<DeskEvent>,
        quiet_period: Duration,
    ) -> Self {
        Self {
            api,
            events,
            quiet_period,
            generation: 0,
            pending: None,
            in_flight: None,
        }
    }

    /// React to a new key value. Must be called from within a tokio runtime.
    pub fn key_changed(&mut self, key: &str) -> LookupSchedule {
        self.abort_pending();
        self.generation += 1;

        if key.trim().is_empty() {
            return LookupSchedule::Cleared;
        }

        let generation = self.generation;
        let due = LookupDue {
            generation,
            key: key.to_string(),
        };
        let events = self.events.clone();
        let quiet_period = self.quiet_period;

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(quiet_period).await;
            let _ = events.send(DeskEvent::LookupDue(due));
        }));

        LookupSchedule::Scheduled { generation }
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }

    /// Start the read for an elapsed timer. Returns `false` when the timer
    /// belongs to an outdated key.
    pub fn fire(&mut self, due: LookupDue) -> bool {
        if !self.is_current(due.generation) {
            debug!(generation = due.generation, current = self.generation, "Dropping stale lookup timer");
            return false;
        }

        self.pending = None;
        self.in_flight = Some(due.generation);

        let api = self.api.clone();
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = api.find_employee(&due.key).await;
            let _ = events.send(DeskEvent::LookupResolved(LookupResolved {
                generation: due.generation,
                key: due.key,
                result,
            }));
        });

        true
    }

    /// Account for a finished read. Returns whether its result should be
    /// applied.
    ///
    /// Loading ends when the most recently started read finishes, whatever
    /// its outcome. Older reads finishing late leave the flag alone.
    pub fn complete(&mut self, resolved: &LookupResolved) -> bool {
        if self.in_flight == Some(resolved.generation) {
            self.in_flight = None;
        }
        let current = self.is_current(resolved.generation);
        if !current {
            debug!(key = %resolved.key, generation = resolved.generation, "Ignoring stale lookup result");
        }
        current
    }

    /// Drop any armed timer and invalidate reads already in flight.
    pub fn cancel(&mut self) {
        self.abort_pending();
        self.generation += 1;
    }

    pub fn has_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    fn abort_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for DebouncedLookup {
    fn drop(&mut self) {
        self.abort_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{employee, FakeApi};

    fn setup(api: FakeApi) -> (DebouncedLookup, mpsc::UnboundedReceiver<DeskEvent>, Arc<FakeApi>) {
        let api = Arc::new(api);
        let (tx, rx) = mpsc::unbounded_channel();
        let lookup = DebouncedLookup::new(api.clone(), tx, DEFAULT_QUIET_PERIOD);
        (lookup, rx, api)
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_key_schedules_nothing() {
        let (mut lookup, mut rx, api) = setup(FakeApi::new());

        assert_eq!(lookup.key_changed(""), LookupSchedule::Cleared);
        assert_eq!(lookup.key_changed("   "), LookupSchedule::Cleared);
        assert!(!lookup.has_pending());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
        assert!(api.lookup_keys().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_after_quiet_period() {
        let (mut lookup, mut rx, _api) = setup(FakeApi::new());

        let schedule = lookup.key_changed("EMP-1001");
        assert_eq!(schedule, LookupSchedule::Scheduled { generation: 1 });
        assert!(lookup.has_pending());

        tokio::time::sleep(Duration::from_millis(499)).await;
        assert!(rx.try_recv().is_err());

        match rx.recv().await {
            Some(DeskEvent::LookupDue(due)) => {
                assert_eq!(due.key, "EMP-1001");
                assert_eq!(due.generation, 1);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_key_is_sent_as_typed() {
        let (mut lookup, mut rx, _api) = setup(FakeApi::new());
        lookup.key_changed("  prainila ");

        match rx.recv().await {
            Some(DeskEvent::LookupDue(due)) => assert_eq!(due.key, "  prainila "),
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_only_last_timer_survives() {
        let (mut lookup, mut rx, _api) = setup(FakeApi::new());

        for key in ["E", "EM", "EMP", "EMP-", "EMP-1001"] {
            lookup.key_changed(key);
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        let mut due_keys = Vec::new();
        tokio::time::sleep(Duration::from_secs(2)).await;
        while let Ok(event) = rx.try_recv() {
            if let DeskEvent::LookupDue(due) = event {
                due_keys.push(due.key);
            }
        }
        assert_eq!(due_keys, vec!["EMP-1001".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_fire_ignores_stale_generation() {
        let (mut lookup, _rx, api) = setup(FakeApi::new());

        lookup.key_changed("EMP-1");
        lookup.key_changed("EMP-2");

        let fired = lookup.fire(LookupDue {
            generation: 1,
            key: "EMP-1".to_string(),
        });
        assert!(!fired);
        assert!(!lookup.is_loading());

        tokio::task::yield_now().await;
        assert!(api.lookup_keys().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_cleared_on_failure() {
        let (mut lookup, mut rx, api) = setup(FakeApi::new());

        lookup.key_changed("nobody");
        let Some(DeskEvent::LookupDue(due)) = rx.recv().await else {
            panic!("expected lookup timer");
        };
        assert!(lookup.fire(due));
        assert!(lookup.is_loading());
        assert!(!lookup.has_pending());

        let Some(DeskEvent::LookupResolved(resolved)) = rx.recv().await else {
            panic!("expected lookup result");
        };
        assert!(resolved.result.is_err());
        assert!(lookup.complete(&resolved));
        assert!(!lookup.is_loading());
        assert_eq!(api.lookup_keys(), vec!["nobody".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_invalidates_in_flight_read() {
        let api = FakeApi::new()
            .with_employee(employee("EMP-1001", "prainila", None))
            .with_delay("EMP-1001", Duration::from_secs(1));
        let (mut lookup, mut rx, _api) = setup(api);

        lookup.key_changed("EMP-1001");
        let Some(DeskEvent::LookupDue(due)) = rx.recv().await else {
            panic!("expected lookup timer");
        };
        lookup.fire(due);
        lookup.cancel();

        let Some(DeskEvent::LookupResolved(resolved)) = rx.recv().await else {
            panic!("expected lookup result");
        };
        assert!(resolved.result.is_ok());
        assert!(!lookup.complete(&resolved));
        assert!(!lookup.is_loading());
    }
}
