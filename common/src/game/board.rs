use std::collections::VecDeque;

use super::settings::STEP_SIZE;
use super::types::{Coordinate, Direction};

/// Snake body as an ordered segment sequence, head first.
///
/// The board is a value: movement produces a successor board instead of
/// mutating in place, so a transition that turns out to be a death can
/// leave the previous board untouched for display.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    segments: VecDeque<Coordinate>,
}

impl Board {
    pub fn from_segments(segments: impl IntoIterator<Item = Coordinate>) -> Self {
        Self {
            segments: segments.into_iter().collect(),
        }
    }

    pub fn head(&self) -> Coordinate {
        *self
            .segments
            .front()
            .expect("board should never be empty")
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.segments.iter().copied()
    }

    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.segments.contains(&coordinate)
    }

    /// Whether a coordinate lands on a non-head segment.
    pub fn hits_body(&self, coordinate: Coordinate) -> bool {
        self.segments.iter().skip(1).any(|&s| s == coordinate)
    }

    /// Where the head ends up after one step in the given direction.
    pub fn next_head(&self, direction: Direction) -> Coordinate {
        let (dx, dy) = direction.offset();
        self.head().translated(dx * STEP_SIZE, dy * STEP_SIZE)
    }

    /// One step of net movement: new head in front, tail dropped.
    pub fn advanced(&self, direction: Direction) -> Self {
        let mut segments = self.segments.clone();
        segments.push_front(self.next_head(direction));
        segments.pop_back();
        Self { segments }
    }

    /// Growth step: the new head is prepended and the tail stays.
    pub fn grown(&self, head: Coordinate) -> Self {
        let mut segments = self.segments.clone();
        segments.push_front(head);
        Self { segments }
    }
}
