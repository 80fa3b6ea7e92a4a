/* Description: Typed failures of automaton simulation.

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

//! Typed failures of automaton simulation.

use core::fmt;

use displaydoc::Display;
use thiserror::Error;

/// Everything that can stop a simulation short of a normal accept/reject.
///
/// Reaching the pushdown `Stuck` sentinel or a halted Turing machine is *not*
/// an error by itself; those are queried with `is_stuck()`. The `Stuck` variant
/// here only reports an attempt to keep feeding input to such an automaton.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum AutomatonError {
  /// no rule applies to state {state} reading {symbol}
  NoRule { state: String, symbol: String },
  /// automaton is stuck and cannot read any further input
  Stuck,
  /// free-move closure did not settle within {limit} iterations
  FreeMoveLimit { limit: usize },
  /// machine did not halt within {limit} steps
  StepLimit { limit: usize },
}

impl AutomatonError {
  /// The states and symbols are rendered eagerly so the error carries no type
  /// parameters.
  pub fn no_rule(state: &impl fmt::Debug, symbol: &impl fmt::Debug) -> Self {
    Self::NoRule {
      state: format!("{state:?}"),
      symbol: format!("{symbol:?}"),
    }
  }
}

#[cfg(test)]
mod test {
  use super::*;

  #[test]
  fn display() {
    assert_eq!(
      AutomatonError::no_rule(&3, &'x').to_string(),
      "no rule applies to state 3 reading 'x'"
    );
    assert_eq!(
      AutomatonError::FreeMoveLimit { limit: 12 }.to_string(),
      "free-move closure did not settle within 12 iterations"
    );
    assert_ne!(AutomatonError::Stuck, AutomatonError::StepLimit { limit: 0 });
  }
}
