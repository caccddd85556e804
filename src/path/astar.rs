//! Grid A* over an immutable tile snapshot
//!
//! 8-directional unit-cost movement with a Chebyshev-distance heuristic.
//! The open set is ordered by f-cost with insertion order as tie-break, so
//! results are deterministic for a given grid.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use ahash::AHashMap;

use crate::core::Point;
use crate::world::TileGrid;

const DIRECTIONS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Node in the A* open set
#[derive(Debug, Clone)]
struct PathNode {
    point: Point,
    f_cost: i32,
    seq: u64,
}

impl PartialEq for PathNode {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost && self.seq == other.seq
    }
}

impl Eq for PathNode {}

impl Ord for PathNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap; earlier insertion wins ties
        other
            .f_cost
            .cmp(&self.f_cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for PathNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Admissible distance estimate for unit-cost 8-directional movement
fn heuristic(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Find a minimum-cost route from `start` to `goal`
///
/// The returned route excludes `start` and includes `goal`. Returns `None`
/// when the goal is unreachable; an expected outcome, not a failure.
pub fn find_path(grid: &TileGrid, start: Point, goal: Point) -> Option<Vec<Point>> {
    if start == goal {
        return Some(Vec::new());
    }
    if !grid.is_free(goal) {
        return None;
    }

    let mut open_set = BinaryHeap::new();
    let mut came_from: AHashMap<Point, Point> = AHashMap::new();
    let mut g_scores: AHashMap<Point, i32> = AHashMap::new();
    let mut seq = 0u64;

    g_scores.insert(start, 0);
    open_set.push(PathNode { point: start, f_cost: heuristic(start, goal), seq });

    while let Some(current) = open_set.pop() {
        if current.point == goal {
            return Some(reconstruct_path(&came_from, start, current.point));
        }

        let current_g = *g_scores.get(&current.point).unwrap_or(&i32::MAX);

        for (dx, dy) in DIRECTIONS {
            let neighbor = current.point.offset(dx, dy);
            if !grid.is_free(neighbor) {
                continue;
            }

            let tentative_g = current_g + 1;
            let neighbor_g = *g_scores.get(&neighbor).unwrap_or(&i32::MAX);

            if tentative_g < neighbor_g {
                came_from.insert(neighbor, current.point);
                g_scores.insert(neighbor, tentative_g);
                seq += 1;
                open_set.push(PathNode {
                    point: neighbor,
                    f_cost: tentative_g + heuristic(neighbor, goal),
                    seq,
                });
            }
        }
    }

    None
}

fn reconstruct_path(came_from: &AHashMap<Point, Point>, start: Point, goal: Point) -> Vec<Point> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&prev) = came_from.get(&current) {
        if prev == start {
            break;
        }
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
