use std::collections::{HashSet, VecDeque};
use url::Url;

/// The set of discovered-but-not-yet-visited URLs awaiting crawl
///
/// Semantically a set: a URL that is already pending (or was ever pending)
/// is not enqueued again. Selection is FIFO, which gives the crawl a
/// breadth-first flavor, though callers may not rely on any particular
/// order.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<Url>,
    members: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a URL unless it was already added before; returns whether
    /// the URL was accepted
    pub fn push(&mut self, url: Url) -> bool {
        if self.members.insert(url.as_str().to_string()) {
            self.queue.push_back(url);
            true
        } else {
            false
        }
    }

    /// Removes and returns the next pending URL
    pub fn pop(&mut self) -> Option<Url> {
        self.queue.pop_front()
    }

    /// Number of URLs currently pending
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
