//! # Position Mapping
//!
//! A step map records which ranges a step replaced, so positions in the
//! old document can be carried over to the new one.

use serde::{Deserialize, Serialize};

/// Which side a position sticks to when content is inserted exactly at it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Assoc {
    Left,
    Right,
}

/// A replaced range in pre-step coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapRange {
    pub start: usize,
    pub old_size: usize,
    pub new_size: usize,
}

/// Ranges replaced by a single step, sorted by start
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepMap {
    ranges: Vec<MapRange>,
}

impl StepMap {
    pub fn new(ranges: Vec<MapRange>) -> Self {
        Self { ranges }
    }

    /// Map that leaves every position unchanged
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn ranges(&self) -> &[MapRange] {
        &self.ranges
    }

    pub fn map(&self, pos: usize, assoc: Assoc) -> usize {
        let mut diff: isize = 0;

        for range in &self.ranges {
            if range.start > pos {
                break;
            }

            let end = range.start + range.old_size;
            if pos <= end {
                let side = if range.old_size == 0 {
                    assoc
                } else if pos == range.start {
                    Assoc::Left
                } else if pos == end {
                    Assoc::Right
                } else {
                    assoc
                };
                let base = shift(range.start, diff);
                return match side {
                    Assoc::Left => base,
                    Assoc::Right => base + range.new_size,
                };
            }

            diff += range.new_size as isize - range.old_size as isize;
        }

        shift(pos, diff)
    }
}

fn shift(pos: usize, diff: isize) -> usize {
    (pos as isize + diff).max(0) as usize
}

/// A sequence of step maps, applied in order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    maps: Vec<StepMap>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, map: StepMap) {
        self.maps.push(map);
    }

    pub fn maps(&self) -> &[StepMap] {
        &self.maps
    }

    pub fn map(&self, pos: usize, assoc: Assoc) -> usize {
        self.maps.iter().fold(pos, |pos, map| map.map(pos, assoc))
    }
}
