//! A simple ordered pile of items, drawn from the top (the highest index).

use std::fmt::{Display, Formatter};

use itertools::Itertools;
use rand::Rng;

use crate::error::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck<T> {
    items: Vec<T>,
}

impl<T> Default for Deck<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> From<Vec<T>> for Deck<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Deck<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Deck<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn add_all(&mut self, items: impl IntoIterator<Item = T>) {
        self.items.extend(items);
    }

    /// Takes the top item, or `None` if the deck is empty.
    pub fn draw(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Takes `count` items off the top, in the order they were drawn.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDrawCount`] if `count` is 0 and
    /// [`Error::NotEnoughItems`] if the deck holds fewer than `count` items.
    pub fn draw_many(&mut self, count: usize) -> Result<Deck<T>> {
        if count < 1 {
            return Err(Error::InvalidDrawCount);
        }

        if count > self.items.len() {
            return Err(Error::NotEnoughItems {
                requested: count,
                available: self.items.len(),
            });
        }

        let split_at = self.items.len() - count;
        Ok(self.items.drain(split_at..).rev().collect())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Swaps every position with a uniformly random position.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// [`Deck::shuffle`] drawing from the given generator.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let len = self.items.len();
        for i in 0..len {
            let j = rng.random_range(0..len);
            self.items.swap(i, j);
        }
    }
}

impl<T: PartialEq> Deck<T> {
    /// Removes the first item equal to `item`. Returns whether one was found.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.items.iter().position(|candidate| candidate == item) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn remove_all<'a>(&mut self, items: impl IntoIterator<Item = &'a T>)
    where
        T: 'a,
    {
        for item in items {
            self.remove(item);
        }
    }
}

impl<T> IntoIterator for Deck<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Deck<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Display> Display for Deck<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.items.iter().join(", "))
    }
}
