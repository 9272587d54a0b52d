use super::types::Point;
use std::collections::{HashSet, VecDeque};

/// The snake body, head first. A parallel hash set backs constant-time
/// occupancy checks; both collections always describe the same cells.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    occupied: HashSet<Point>,
}

impl Snake {
    pub fn new(head: Point) -> Self {
        Self {
            body: VecDeque::from([head]),
            occupied: HashSet::from([head]),
        }
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Point {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, cell: Point) -> bool {
        self.occupied.contains(&cell)
    }

    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    /// Moves the head to `new_head`; the tail stays put when `grow` is set.
    /// The tail cell is released before the head lands so that stepping onto
    /// the cell the tail just vacated keeps the occupancy set coherent.
    pub fn advance(&mut self, new_head: Point, grow: bool) {
        if !grow {
            let tail = self.body.pop_back().expect("Snake body should never be empty");
            self.occupied.remove(&tail);
        }
        self.body.push_front(new_head);
        self.occupied.insert(new_head);
    }
}
