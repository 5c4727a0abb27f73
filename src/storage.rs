//! Traversal stores: the buffer between path generation and dictionary filtering.
//!
//! The discipline only changes the order states are drained in, which in
//! turn decides which path is kept for a word reachable more than one way.
//! The set of words found is the same under either discipline.

use std::collections::VecDeque;

use clap::ValueEnum;

use crate::error::StorageError;

/// A container that hands items back in a fixed order.
pub trait Storage<T> {
    /// Adds an item.
    fn store(&mut self, item: T);

    /// Removes and returns the next item, or [`StorageError::Empty`].
    fn retrieve(&mut self) -> Result<T, StorageError>;

    fn is_empty(&self) -> bool;

    fn len(&self) -> usize;
}

/// Retrieval order of a traversal store.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum Discipline {
    /// Last in, first out: deepest paths of a branch drain first.
    #[default]
    Stack,
    /// First in, first out: shorter paths drain before longer ones.
    Queue,
}

impl Discipline {
    pub fn name(self) -> &'static str {
        match self {
            Discipline::Stack => "stack",
            Discipline::Queue => "queue",
        }
    }
}

/// Last-in-first-out store.
#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Storage<T> for Stack<T> {
    #[inline]
    fn store(&mut self, item: T) {
        self.items.push(item);
    }

    #[inline]
    fn retrieve(&mut self) -> Result<T, StorageError> {
        self.items.pop().ok_or(StorageError::Empty)
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// First-in-first-out store.
#[derive(Debug)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Storage<T> for Queue<T> {
    #[inline]
    fn store(&mut self, item: T) {
        self.items.push_back(item);
    }

    #[inline]
    fn retrieve(&mut self) -> Result<T, StorageError> {
        self.items.pop_front().ok_or(StorageError::Empty)
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
