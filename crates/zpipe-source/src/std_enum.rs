//! Borrowed views over existing sequences.

use zpipe_core::check::contract_violation;
use zpipe_core::{Enumerator, Error, Result};

/// Cursor pair `[pos, end)` into a borrowed slice. Elements are cloned out on
/// `current`; the slice itself is never copied.
#[derive(Debug)]
pub struct StdEnum<'a, T> {
    items: &'a [T],
    pos: usize,
    end: usize,
}

// derive(Clone) would demand `T: Clone`; only the cursor is copied.
impl<T> Clone for StdEnum<'_, T> {
    fn clone(&self) -> Self {
        Self {
            items: self.items,
            pos: self.pos,
            end: self.end,
        }
    }
}

impl<'a, T> StdEnum<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            pos: 0,
            end: items.len(),
        }
    }

    /// View `items[begin..end]`.
    pub fn window(items: &'a [T], begin: usize, end: usize) -> Result<Self> {
        if begin > end || end > items.len() {
            return Err(Error::Window {
                begin,
                end,
                len: items.len(),
            });
        }
        Ok(Self {
            items,
            pos: begin,
            end,
        })
    }

    /// Elements not yet visited.
    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }
}

impl<T: Clone> Enumerator for StdEnum<'_, T> {
    type Item = T;

    fn current(&self) -> T {
        if self.pos == self.end {
            contract_violation("current", "StdEnum");
        }
        self.items[self.pos].clone()
    }

    fn over(&self) -> bool {
        self.pos == self.end
    }

    fn advance(&mut self) {
        if self.pos == self.end {
            contract_violation("advance", "StdEnum");
        }
        self.pos += 1;
    }
}

/// The characters of a borrowed string, front to back.
#[derive(Debug, Clone, Copy)]
pub struct TextEnum<'a> {
    text: &'a str,
    /// Byte offset of the current character.
    pos: usize,
}

impl<'a> TextEnum<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// The part of the text not yet visited.
    pub fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }
}

impl Enumerator for TextEnum<'_> {
    type Item = char;

    fn current(&self) -> char {
        match self.rest().chars().next() {
            Some(c) => c,
            None => contract_violation("current", "TextEnum"),
        }
    }

    fn over(&self) -> bool {
        self.pos == self.text.len()
    }

    fn advance(&mut self) {
        match self.rest().chars().next() {
            Some(c) => self.pos += c.len_utf8(),
            None => contract_violation("advance", "TextEnum"),
        }
    }
}
