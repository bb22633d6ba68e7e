//! Queue navigation - single place for next/previous index calculations
//!
//! Advancing (end of song or the next button) checks, in order: repeat keeps
//! the same entry, shuffle picks any entry uniformly, otherwise the next
//! index wrapping to 0. Previous always steps back one, wrapping to the end.
//! Without a current index the queue starts over from its first entry.

use rand::Rng;

/// Computes next/prev indices for a queue
#[derive(Debug, Clone, Copy)]
pub struct QueueNavigator {
    queue_len: usize,
    current_idx: Option<usize>,
    shuffle: bool,
    repeat: bool,
}

impl QueueNavigator {
    pub fn new(queue_len: usize, current_idx: Option<usize>, shuffle: bool, repeat: bool) -> Self {
        Self {
            queue_len,
            current_idx: current_idx.filter(|idx| *idx < queue_len),
            shuffle,
            repeat,
        }
    }

    /// Calculate the next track index
    pub fn next_index(&self) -> Option<usize> {
        self.next_index_with(&mut rand::rng())
    }

    /// `next_index` with a caller-supplied random source
    pub fn next_index_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.queue_len == 0 {
            return None;
        }

        match self.current_idx {
            Some(idx) if self.repeat => Some(idx),
            _ if self.shuffle => Some(rng.random_range(0..self.queue_len)),
            Some(idx) => Some((idx + 1) % self.queue_len),
            None => Some(0),
        }
    }

    /// Calculate the previous track index
    pub fn prev_index(&self) -> Option<usize> {
        if self.queue_len == 0 {
            return None;
        }

        match self.current_idx {
            Some(idx) if idx > 0 => Some(idx - 1),
            _ => Some(self.queue_len - 1),
        }
    }
}
