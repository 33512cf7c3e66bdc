//! Renders a [`Tree`] as a text pyramid, one line per level with siblings evenly spaced. Every
//! slot in the pyramid is a single character wide, so values that display wider than that are
//! replaced by a letter and listed in a legend underneath.
//!
//! # Examples
//!
//! ```
//! use plain_bst::Tree;
//!
//! let tree: Tree<_> = [5, 3, 8, 10].into_iter().collect();
//! let pyramid = tree.pyramid().unwrap();
//!
//! assert_eq!(pyramid.to_string(), "   5\n 3   8\n      a\na  =  10\n");
//! ```

use std::fmt;

use crate::tree::Tree;

/// A letter standing in for a value too wide to fit in a pyramid slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend {
    key: char,
    value: String,
}

impl Legend {
    /// The letter printed in the pyramid.
    pub fn key(&self) -> char {
        self.key
    }

    /// The displayed value the letter stands for.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The laid out rows of a tree plus the legends for any values that didn't fit in a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pyramid {
    rows: Vec<String>,
    legends: Vec<Legend>,
}

impl Pyramid {
    /// Lays out the given tree. Returns `None` if the tree is empty.
    ///
    /// Level `l` (counting up from 0 at the deepest leaves) starts with `2^l - 1` spaces and every
    /// slot in it is followed by `2^(l + 1) - 1` spaces. Missing children are blank slots.
    pub fn new<T: fmt::Display>(tree: &Tree<T>) -> Option<Self> {
        let levels = tree.levels();
        if levels.is_empty() {
            return None;
        }

        let mut legends = Vec::new();
        let mut rows = Vec::with_capacity(levels.len());
        for (level, slots) in (0..levels.len()).rev().zip(levels) {
            let gap = spaces(level + 1);
            let mut row = spaces(level);
            for slot in slots {
                match slot {
                    Some(node) => row.push_str(&glyph(node.value(), &mut legends)),
                    None => row.push(' '),
                }
                row.push_str(&gap);
            }
            row.truncate(row.trim_end().len());
            rows.push(row);
        }

        Some(Self { rows, legends })
    }

    /// One line per level of the tree, root first. Trailing whitespace is trimmed.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// The letters used in place of wide values, in the order they were handed out.
    pub fn legends(&self) -> &[Legend] {
        &self.legends
    }
}

impl fmt::Display for Pyramid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        for legend in &self.legends {
            writeln!(f, "{}  =  {}", legend.key, legend.value)?;
        }
        Ok(())
    }
}

fn spaces(level: usize) -> String {
    " ".repeat((1usize << level) - 1)
}

/// The text to print for a value. Anything longer than one character gets the next letter
/// (`a`, `b`, ...) and a legend entry.
fn glyph<T: fmt::Display>(value: &T, legends: &mut Vec<Legend>) -> String {
    let value = value.to_string();
    if value.chars().count() <= 1 {
        return value;
    }

    let key = u32::try_from(legends.len())
        .ok()
        .and_then(|n| char::from_u32(u32::from('a') + n))
        .unwrap_or('?');
    legends.push(Legend { key, value });
    key.to_string()
}
