//! Transient toasts for placeholder-action acknowledgements.
//!
//! At most `MAX_VISIBLE` toasts are on screen; extras wait in a queue and are
//! promoted as visible ones expire or get dismissed.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::state::gallery::Acknowledgement;

const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ToastId(u64);

#[derive(Debug, Clone)]
pub struct Toast {
    id: ToastId,
    pub title: &'static str,
    pub body: String,
    shown_at: Instant,
}

impl Toast {
    pub fn id(&self) -> ToastId {
        self.id
    }
}

#[derive(Debug)]
pub struct Toasts {
    visible: VecDeque<Toast>,
    queue: VecDeque<Toast>,
    lifetime: Duration,
    next_id: u64,
}

impl Toasts {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            visible: VecDeque::new(),
            queue: VecDeque::new(),
            lifetime,
            next_id: 0,
        }
    }

    pub fn push(&mut self, ack: Acknowledgement) -> ToastId {
        self.push_at(ack, Instant::now())
    }

    fn push_at(&mut self, ack: Acknowledgement, now: Instant) -> ToastId {
        let id = ToastId(self.next_id);
        self.next_id += 1;

        let toast = Toast {
            id,
            title: ack.title,
            body: ack.body,
            shown_at: now,
        };

        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_back(toast);
        } else {
            self.queue.push_back(toast);
        }
        id
    }

    pub fn dismiss(&mut self, id: ToastId) {
        self.visible.retain(|t| t.id != id);
        self.queue.retain(|t| t.id != id);
        self.promote(Instant::now());
    }

    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    fn tick_at(&mut self, now: Instant) {
        let lifetime = self.lifetime;
        self.visible
            .retain(|t| now.saturating_duration_since(t.shown_at) < lifetime);
        self.promote(now);
    }

    // Queued toasts start their lifetime when they become visible
    fn promote(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut toast) = self.queue.pop_front() else {
                break;
            };
            toast.shown_at = now;
            self.visible.push_back(toast);
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.visible.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty() && self.queue.is_empty()
    }
}
