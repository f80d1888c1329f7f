//! Deferred re-measurement scheduling.
//!
//! Surface fonts load asynchronously, so the first alignment pass may
//! measure a fallback font. Each mounted item therefore gets exactly one
//! deferred realignment, due a fixed short delay after mount; the host
//! pumps the queue from its event loop once layout has settled. There is
//! no font-load observer and no further retry.
//!
//! Everything is single-threaded and cooperative. A pending entry is owned
//! by a [`RealignTicket`]; dropping the ticket on any exit path cancels
//! the entry, so no realignment can touch a torn-down item.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Delay before the one-shot realignment pass, chosen to catch late
/// font-swap reflows.
pub const REALIGN_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug)]
struct Entry {
    seq: u64,
    item_index: usize,
    due: Instant,
}

#[derive(Debug, Default)]
struct QueueInner {
    entries: Vec<Entry>,
    next_seq: u64,
}

impl QueueInner {
    fn remove(&mut self, seq: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.seq != seq);
        self.entries.len() != before
    }
}

/// One-shot realignment queue shared between a text layer and its host.
#[derive(Debug, Clone, Default)]
pub struct RealignQueue {
    inner: Rc<RefCell<QueueInner>>,
}

impl RealignQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a realignment for `item_index`, due [`REALIGN_DELAY`]
    /// after `now`. The returned ticket cancels the entry when dropped.
    pub fn schedule(&self, item_index: usize, now: Instant) -> RealignTicket {
        let mut inner = self.inner.borrow_mut();
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.entries.push(Entry {
            seq,
            item_index,
            due: now + REALIGN_DELAY,
        });
        RealignTicket {
            queue: Rc::clone(&self.inner),
            seq,
        }
    }

    /// Drains every entry whose deadline has passed, in scheduling order.
    /// Entries are one-shot: a drained entry is gone.
    pub fn take_due(&self, now: Instant) -> Vec<usize> {
        let mut inner = self.inner.borrow_mut();
        let mut due: Vec<(u64, usize)> = Vec::new();
        inner.entries.retain(|e| {
            if e.due <= now {
                due.push((e.seq, e.item_index));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(seq, _)| seq);
        due.into_iter().map(|(_, item_index)| item_index).collect()
    }

    /// Number of pending entries.
    pub fn pending(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Earliest pending deadline, if any. Hosts use this to pick their
    /// next wakeup.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.inner.borrow().entries.iter().map(|e| e.due).min()
    }
}

/// Scoped handle to a pending realignment. Cancels on drop.
#[derive(Debug)]
pub struct RealignTicket {
    queue: Rc<RefCell<QueueInner>>,
    seq: u64,
}

impl RealignTicket {
    /// True while the entry is still queued (not yet drained or
    /// cancelled).
    pub fn is_pending(&self) -> bool {
        self.queue.borrow().entries.iter().any(|e| e.seq == self.seq)
    }

    /// Cancels the pending realignment explicitly. Equivalent to
    /// dropping the ticket.
    pub fn cancel(self) {}
}

impl Drop for RealignTicket {
    fn drop(&mut self) {
        self.queue.borrow_mut().remove(self.seq);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_delay() {
        let queue = RealignQueue::new();
        let now = Instant::now();
        let ticket = queue.schedule(7, now);

        assert!(queue.take_due(now).is_empty());
        assert!(ticket.is_pending());

        let fired = queue.take_due(now + REALIGN_DELAY);
        assert_eq!(fired, vec![7]);
        assert!(!ticket.is_pending());

        // one-shot: nothing left to fire
        assert!(queue.take_due(now + REALIGN_DELAY * 2).is_empty());
    }

    #[test]
    fn drop_cancels_pending_entry() {
        let queue = RealignQueue::new();
        let now = Instant::now();
        let ticket = queue.schedule(3, now);
        drop(ticket);

        assert_eq!(queue.pending(), 0);
        assert!(queue.take_due(now + REALIGN_DELAY).is_empty());
    }

    #[test]
    fn drains_in_scheduling_order() {
        let queue = RealignQueue::new();
        let now = Instant::now();
        let _a = queue.schedule(2, now);
        let _b = queue.schedule(0, now);
        let _c = queue.schedule(1, now);

        assert_eq!(queue.take_due(now + REALIGN_DELAY), vec![2, 0, 1]);
    }

    #[test]
    fn next_deadline_tracks_earliest() {
        let queue = RealignQueue::new();
        let now = Instant::now();
        assert!(queue.next_deadline().is_none());

        let _a = queue.schedule(0, now);
        let _b = queue.schedule(1, now + Duration::from_millis(50));
        assert_eq!(queue.next_deadline(), Some(now + REALIGN_DELAY));
    }
}
