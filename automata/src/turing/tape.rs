/* Description: Unbounded immutable Turing machine tapes.

Copyright (C) 2024 Danny McClanahan <dmcC2@hypnicjerk.ai>
SPDX-License-Identifier: GPL-3.0-or-later

This file is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as
published by the Free Software Foundation; either version 3 of the
License, or (at your option) any later version.

This file is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>. */

//! Unbounded immutable Turing machine tapes.

use core::fmt;

use crate::alphabet::Symbol;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Direction {
  Left,
  Right,
}

impl Direction {
  pub const fn opposite(self) -> Self {
    match self {
      Self::Left => Self::Right,
      Self::Right => Self::Left,
    }
  }
}

/// A tape with a single scanned cell.
///
/// Only the cells which have been written or visited are stored; every other
/// cell holds `blank`. Both halves are kept with the cell nearest the head
/// *last*, so head motion only ever touches the ends of two vectors.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Tape<Sym> {
  left: Vec<Sym>,
  middle: Sym,
  /* Reversed relative to reading order. */
  right: Vec<Sym>,
  blank: Sym,
}

impl<Sym> Tape<Sym>
where Sym: Symbol
{
  /// `left` and `right` are both given in reading order (left to right).
  pub fn new(
    left: impl IntoIterator<Item=Sym>,
    middle: Sym,
    right: impl IntoIterator<Item=Sym>,
    blank: Sym,
  ) -> Self {
    let mut right: Vec<Sym> = right.into_iter().collect();
    right.reverse();
    Self {
      left: left.into_iter().collect(),
      middle,
      right,
      blank,
    }
  }

  /// A tape of nothing but blanks.
  pub fn blank(blank: Sym) -> Self {
    Self {
      left: Vec::new(),
      middle: blank,
      right: Vec::new(),
      blank,
    }
  }

  pub fn middle(&self) -> Sym { self.middle }

  pub fn blank_symbol(&self) -> Sym { self.blank }

  /// Cells left of the head, in reading order.
  pub fn left(&self) -> impl Iterator<Item=Sym>+'_ { self.left.iter().copied() }

  /// Cells right of the head, in reading order.
  pub fn right(&self) -> impl Iterator<Item=Sym>+'_ { self.right.iter().rev().copied() }

  pub fn write(&self, symbol: Sym) -> Self {
    Self {
      middle: symbol,
      ..self.clone()
    }
  }

  pub fn move_head_left(&self) -> Self {
    let mut left = self.left.clone();
    let mut right = self.right.clone();
    let middle = left.pop().unwrap_or(self.blank);
    right.push(self.middle);
    Self {
      left,
      middle,
      right,
      blank: self.blank,
    }
  }

  pub fn move_head_right(&self) -> Self {
    let mut left = self.left.clone();
    let mut right = self.right.clone();
    let middle = right.pop().unwrap_or(self.blank);
    left.push(self.middle);
    Self {
      left,
      middle,
      right,
      blank: self.blank,
    }
  }

  pub fn move_head(&self, direction: Direction) -> Self {
    match direction {
      Direction::Left => self.move_head_left(),
      Direction::Right => self.move_head_right(),
    }
  }
}

impl<Sym> fmt::Debug for Tape<Sym>
where Sym: fmt::Debug
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_struct("Tape")
      .field("left", &self.left)
      .field("middle", &self.middle)
      .field("right", &self.right.iter().rev().collect::<Vec<_>>())
      .field("blank", &self.blank)
      .finish()
  }
}

impl<Sym> fmt::Display for Tape<Sym>
where Sym: Symbol+fmt::Display
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "<Tape: ")?;
    for sym in self.left() {
      write!(f, "{sym}")?;
    }
    write!(f, "({})", self.middle)?;
    for sym in self.right() {
      write!(f, "{sym}")?;
    }
    write!(f, ">")
  }
}

#[cfg(test)]
mod test {
  use proptest::{collection::vec, prelude::*};

  use super::*;

  #[test]
  fn head_motion() {
    let tape = Tape::new(['1', '0', '1'], '1', [], '_');
    assert_eq!(tape.to_string(), "<Tape: 101(1)>");
    assert_eq!(tape.move_head_left(), Tape::new(['1', '0'], '1', ['1'], '_'));
    assert_eq!(
      tape.move_head_left().write('0'),
      Tape::new(['1', '0'], '0', ['1'], '_')
    );
    assert_eq!(
      tape.move_head_right(),
      Tape::new(['1', '0', '1', '1'], '_', [], '_')
    );
    assert_eq!(
      tape.move_head_right().write('0'),
      Tape::new(['1', '0', '1', '1'], '0', [], '_')
    );
    /* Pure: nothing above touched the original. */
    assert_eq!(tape.middle(), '1');
  }

  #[test]
  fn display() {
    let tape = Tape::new(['1', '0'], '1', ['_'], '_');
    assert_eq!(tape.to_string(), "<Tape: 10(1)_>");
    assert_eq!(tape.move_head_left().to_string(), "<Tape: 1(0)1_>");
    assert_eq!(Tape::blank('_').move_head_left().to_string(), "<Tape: (_)_>");
  }

  #[test]
  fn debug_in_reading_order() {
    let tape = Tape::new(['a'], 'b', ['c', 'd'], '_');
    assert_eq!(
      format!("{tape:?}"),
      "Tape { left: ['a'], middle: 'b', right: ['c', 'd'], blank: '_' }"
    );
  }

  fn arb_tape() -> impl Strategy<Value=Tape<char>> {
    let cell = prop_oneof![Just('0'), Just('1'), Just('_')];
    (vec(cell.clone(), 0..6), cell.clone(), vec(cell, 0..6))
      .prop_map(|(left, middle, right)| Tape::new(left, middle, right, '_'))
  }

  proptest! {
    #[test]
    fn moving_back_restores(tape in arb_tape(), direction in any::<Direction>()) {
      let has_cells = match direction {
        Direction::Left => tape.left().count() > 0,
        Direction::Right => tape.right().count() > 0,
      };
      let there_and_back = tape.move_head(direction).move_head(direction.opposite());
      if has_cells {
        prop_assert_eq!(there_and_back, tape);
      } else {
        /* Running off the end materializes one blank cell. */
        prop_assert_eq!(there_and_back.middle(), tape.middle());
        prop_assert_eq!(there_and_back.to_string().len(), tape.to_string().len() + 1);
      }
    }

    #[test]
    fn write_only_touches_the_head(tape in arb_tape(), symbol in prop_oneof![Just('0'), Just('1')]) {
      let written = tape.write(symbol);
      prop_assert_eq!(written.middle(), symbol);
      prop_assert!(written.left().eq(tape.left()));
      prop_assert!(written.right().eq(tape.right()));
    }
  }
}
