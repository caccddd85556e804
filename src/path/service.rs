//! Background pathfinding service
//!
//! Requests are handed to fire-and-forget worker threads; each worker
//! computes a route over an immutable level snapshot and pushes the result
//! into a single completion queue. The orchestrator drains the queue once
//! per turn and applies a result only if its monster id and sequence number
//! still match a live, waiting monster. Workers are never cancelled; an
//! outdated result is simply discarded on arrival.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::core::Point;
use crate::entity::MonsterId;
use crate::path::astar;
use crate::world::TileGrid;

/// Completed path computation
#[derive(Debug)]
pub struct PathResult {
    pub monster: MonsterId,
    pub seq: u64,
    /// `None` when the goal was unreachable
    pub path: Option<Vec<Point>>,
}

/// Handle to the completion queue and the request sequence counter
pub struct PathService {
    tx: Sender<PathResult>,
    rx: Receiver<PathResult>,
    next_seq: u64,
}

impl PathService {
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self { tx, rx, next_seq: 0 }
    }

    /// Spawn a background route computation
    ///
    /// Returns the sequence number identifying this request; the caller
    /// records it so older in-flight results can be recognized as stale.
    pub fn request(
        &mut self,
        monster: MonsterId,
        from: Point,
        to: Point,
        tiles: Arc<TileGrid>,
    ) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        let tx = self.tx.clone();
        thread::spawn(move || {
            let path = astar::find_path(&tiles, from, to);
            // the receiver only disappears when the game is torn down
            let _ = tx.send(PathResult { monster, seq, path });
        });
        tracing::debug!(?monster, seq, ?from, ?to, "path request spawned");
        seq
    }

    /// Drain every result that has arrived since the last turn
    pub fn drain(&self) -> Vec<PathResult> {
        self.rx.try_iter().collect()
    }

    /// Synchronous completion injection, used by tests to model a worker
    /// finishing at a controlled time.
    #[cfg(test)]
    pub fn inject(&self, result: PathResult) {
        let _ = self.tx.send(result);
    }
}

impl Default for PathService {
    fn default() -> Self {
        Self::new()
    }
}
