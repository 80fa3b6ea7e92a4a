/* Description: Iteration bounds for simulations which may not terminate.

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

//! Iteration bounds for simulations which may not terminate.
//!
//! Finite automata never need these: their closures grow within a finite state
//! universe. Pushdown free moves can cycle while growing the stack, and Turing
//! machines need not halt at all.

/// Nothing is bounded by default: callers opt in to whichever guard their
/// machine needs.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Limits {
  /// Maximum free moves followed by one pushdown closure, if any.
  pub free_moves: Option<usize>,
  /// Maximum steps taken by one Turing machine run, if any.
  pub steps: Option<usize>,
}

impl Limits {
  pub const fn unbounded() -> Self {
    Self {
      free_moves: None,
      steps: None,
    }
  }

  pub const fn with_free_move_limit(self, free_moves: Option<usize>) -> Self {
    Self { free_moves, ..self }
  }

  pub const fn with_step_limit(self, steps: Option<usize>) -> Self { Self { steps, ..self } }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn unbounded_by_default() {
    assert_eq!(Limits::default(), Limits::unbounded());
    assert_eq!(Limits::default().free_moves, None);
    assert_eq!(Limits::default().steps, None);
  }

  #[test]
  fn builders() {
    let limits = Limits::unbounded()
      .with_step_limit(Some(10))
      .with_free_move_limit(Some(3));
    assert_eq!(limits, Limits {
      free_moves: Some(3),
      steps: Some(10),
    });
    assert_eq!(limits.with_step_limit(None).steps, None);
  }
}
