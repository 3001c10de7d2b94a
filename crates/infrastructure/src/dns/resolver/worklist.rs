use std::collections::HashSet;
use std::net::Ipv4Addr;

/// Name servers still to query, popped last-in first-out.
///
/// The most recently discovered glue address is tried first. An address is
/// accepted at most once per worklist, so a server is never queried twice
/// within one lookup.
#[derive(Debug, Clone)]
pub struct Worklist {
    pending: Vec<Ipv4Addr>,
    visited: HashSet<Ipv4Addr>,
}

impl Worklist {
    pub fn new(start: Ipv4Addr) -> Self {
        let mut worklist = Self {
            pending: Vec::new(),
            visited: HashSet::new(),
        };
        worklist.push(start);
        worklist
    }

    /// Enqueues `server` unless it was seen before; returns whether it was added.
    pub fn push(&mut self, server: Ipv4Addr) -> bool {
        if !self.visited.insert(server) {
            return false;
        }
        self.pending.push(server);
        true
    }

    pub fn pop(&mut self) -> Option<Ipv4Addr> {
        self.pending.pop()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
