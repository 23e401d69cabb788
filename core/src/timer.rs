#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

#[derive(Clone, Debug)]
struct TimerEntry<T> {
    id: TimerId,
    due_ms: u64,
    payload: T,
}

/// Virtual-clock one-shot timers for hosts without an event loop.
///
/// Entries fire in due order; ties fire in scheduling order.
#[derive(Clone, Debug)]
pub struct TimerQueue<T> {
    now_ms: u64,
    next_id: u64,
    entries: Vec<TimerEntry<T>>,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_id: 1,
            entries: Vec::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn schedule(&mut self, delay_ms: u32, payload: T) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        self.entries.push(TimerEntry {
            id,
            due_ms: self.now_ms.saturating_add(u64::from(delay_ms)),
            payload,
        });
        id
    }

    pub fn cancel(&mut self, id: TimerId) -> Option<T> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index).payload)
    }

    pub fn next_due(&self) -> Option<u64> {
        self.entries.iter().map(|entry| entry.due_ms).min()
    }

    /// Moves the clock forward and returns what fired, as `(due_ms, payload)`.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<(u64, T)> {
        self.now_ms = self.now_ms.saturating_add(elapsed_ms);
        let now = self.now_ms;
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|entry| entry.due_ms <= now);
        self.entries = pending;
        due.sort_by_key(|entry| (entry.due_ms, entry.id));
        due.into_iter()
            .map(|entry| (entry.due_ms, entry.payload))
            .collect()
    }

    /// Drops every pending entry, the way tearing down a view drops its timers.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
