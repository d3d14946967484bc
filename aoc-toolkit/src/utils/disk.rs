//! Disk images decoded from a run-length map, and two compaction strategies
//!
//! The map alternates file and free run lengths, one decimal digit each:
//! `12345` is a 1-block file with ID 0, 2 free blocks, a 3-block file with ID 1,
//! and so on.
//!
//! - [`DiskMap`] holds one cell per block and compacts block by block, splitting
//!   files freely.
//! - [`BlockList`] holds whole runs in an index-linked arena and moves entire
//!   files into the first free run that fits.

use std::collections::BTreeMap;
use std::fmt;

use log::trace;

use super::error::DiskError;

/// What a run of blocks holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Content {
    File(usize),
    Free,
}

/// Decode the map into `(content, length)` runs, including zero-length ones
fn runs(input: &str) -> impl Iterator<Item = Result<(Content, usize), DiskError>> + '_ {
    input
        .trim_end()
        .chars()
        .enumerate()
        .map(|(position, found)| {
            let len = found
                .to_digit(10)
                .ok_or(DiskError::InvalidDigit { found, position })?;
            let content = if position % 2 == 0 {
                Content::File(position / 2)
            } else {
                Content::Free
            };
            Ok((content, len as usize))
        })
}

/// Sum of `position * id` over a file run starting at `offset`
fn run_checksum(offset: usize, len: usize, id: usize) -> u64 {
    (offset..offset + len).map(|pos| (pos * id) as u64).sum()
}

/// A disk with one cell per block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskMap {
    cells: Vec<Option<usize>>,
}

impl DiskMap {
    pub fn parse(input: &str) -> Result<Self, DiskError> {
        let mut cells = Vec::new();
        for run in runs(input) {
            let (content, len) = run?;
            let cell = match content {
                Content::File(id) => Some(id),
                Content::Free => None,
            };
            cells.extend(std::iter::repeat_n(cell, len));
        }
        Ok(Self { cells })
    }

    /// Move file blocks one at a time from the end into the leftmost free cell
    pub fn compact(&mut self) {
        let (mut head, mut tail) = (0, self.cells.len());
        loop {
            while head < tail && self.cells[head].is_some() {
                head += 1;
            }
            while tail > head && self.cells[tail - 1].is_none() {
                tail -= 1;
            }
            if head >= tail {
                break;
            }
            self.cells.swap(head, tail - 1);
        }
    }

    pub fn checksum(&self) -> u64 {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(pos, cell)| cell.map(|id| (pos * id) as u64))
            .sum()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl fmt::Display for DiskMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(id) => write!(f, "{id}")?,
                None => f.write_str(".")?,
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Block {
    content: Content,
    len: usize,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Doubly linked list of runs stored in an arena and addressed by index
///
/// Unlinked blocks stay in the arena but are never reachable from `head`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockList {
    blocks: Vec<Block>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl BlockList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the run list, skipping zero-length runs
    pub fn parse(input: &str) -> Result<Self, DiskError> {
        let mut list = Self::new();
        for run in runs(input) {
            let (content, len) = run?;
            if len > 0 {
                list.push_back(content, len);
            }
        }
        Ok(list)
    }

    /// Append a run and return its arena index
    pub fn push_back(&mut self, content: Content, len: usize) -> usize {
        let idx = self.blocks.len();
        self.blocks.push(Block {
            content,
            len,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.blocks[tail].next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        idx
    }

    /// Runs in order from head to tail
    pub fn iter(&self) -> impl Iterator<Item = (Content, usize)> + '_ {
        std::iter::successors(self.head, |&idx| self.blocks[idx].next).map(|idx| {
            let block = &self.blocks[idx];
            (block.content, block.len)
        })
    }

    /// Number of linked runs
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Total blocks across all runs, file and free
    pub fn total_len(&self) -> usize {
        self.iter().map(|(_, len)| len).sum()
    }

    /// Blocks occupied per file ID
    pub fn file_sizes(&self) -> BTreeMap<usize, usize> {
        let mut sizes = BTreeMap::new();
        for (content, len) in self.iter() {
            if let Content::File(id) = content {
                *sizes.entry(id).or_insert(0) += len;
            }
        }
        sizes
    }

    /// Move whole files left into the first free run that can hold them
    ///
    /// A frontier walks from the tail towards the head. Each file is attempted
    /// once, in decreasing ID order; a file that finds no room to its left stays
    /// put. Vacated runs become free runs of the same length and adjacent free
    /// runs are not merged.
    pub fn defragment(&mut self) {
        let mut frontier = self.tail;
        let mut lowest_attempted = usize::MAX;

        while let Some(idx) = frontier {
            let block = self.blocks[idx];
            if let Content::File(id) = block.content {
                if id < lowest_attempted {
                    lowest_attempted = id;
                    self.relocate(idx, block);
                }
            }
            frontier = self.blocks[idx].prev;
        }
    }

    /// Move the file run at `idx` into the first fitting free run, if any
    fn relocate(&mut self, idx: usize, block: Block) {
        let Some(free) = self.first_fit(idx, block.len) else {
            return;
        };
        trace!("moving {:?} ({} blocks) into run {free}", block.content, block.len);
        self.blocks[idx].content = Content::Free;
        self.insert_before(free, block.content, block.len);
        self.blocks[free].len -= block.len;
        if self.blocks[free].len == 0 {
            self.unlink(free);
        }
    }

    /// First free run ahead of `limit` with at least `len` blocks
    fn first_fit(&self, limit: usize, len: usize) -> Option<usize> {
        std::iter::successors(self.head, |&idx| self.blocks[idx].next)
            .take_while(|&idx| idx != limit)
            .find(|&idx| {
                let block = &self.blocks[idx];
                block.content == Content::Free && block.len >= len
            })
    }

    fn insert_before(&mut self, at: usize, content: Content, len: usize) -> usize {
        let idx = self.blocks.len();
        let prev = self.blocks[at].prev;
        self.blocks.push(Block {
            content,
            len,
            prev,
            next: Some(at),
        });
        self.blocks[at].prev = Some(idx);
        match prev {
            Some(prev) => self.blocks[prev].next = Some(idx),
            None => self.head = Some(idx),
        }
        idx
    }

    fn unlink(&mut self, idx: usize) {
        let Block { prev, next, .. } = self.blocks[idx];
        match prev {
            Some(prev) => self.blocks[prev].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.blocks[next].prev = prev,
            None => self.tail = prev,
        }
        self.blocks[idx].prev = None;
        self.blocks[idx].next = None;
    }

    /// Sum of `position * id` over every file block
    pub fn checksum(&self) -> u64 {
        let mut offset = 0;
        let mut sum = 0;
        for (content, len) in self.iter() {
            if let Content::File(id) = content {
                sum += run_checksum(offset, len, id);
            }
            offset += len;
        }
        sum
    }

    /// One character per block: the file ID, or `.` for free space
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BlockList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (content, len) in self.iter() {
            let symbol = match content {
                Content::File(id) => id.to_string(),
                Content::Free => ".".to_string(),
            };
            f.write_str(&symbol.repeat(len))?;
        }
        Ok(())
    }
}
