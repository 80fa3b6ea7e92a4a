/* Description: Finite automaton rules and rulebook indexing.

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

//! Finite automaton rules and rulebook indexing.

use core::{fmt, hash::Hash};

use smallvec::SmallVec;

use crate::{alphabet::Symbol, state::State, FxIndexMap};

/// A single labelled transition `state --symbol--> next_state`. A `symbol` of
/// `None` is a free move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FARule<S, Sym> {
  pub state: S,
  pub symbol: Option<Sym>,
  pub next_state: S,
}

impl<S, Sym> FARule<S, Sym>
where
  S: State,
  Sym: Symbol,
{
  pub const fn new(state: S, symbol: Option<Sym>, next_state: S) -> Self {
    Self {
      state,
      symbol,
      next_state,
    }
  }

  pub const fn free(state: S, next_state: S) -> Self { Self::new(state, None, next_state) }

  pub fn applies_to(&self, state: &S, symbol: Option<Sym>) -> bool {
    self.state == *state && self.symbol == symbol
  }

  pub fn follow(&self) -> &S { &self.next_state }
}

impl<S, Sym> fmt::Display for FARule<S, Sym>
where
  S: fmt::Debug,
  Sym: fmt::Display,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "#<FARule {:?} --", self.state)?;
    match self.symbol {
      Some(ref sym) => write!(f, "{sym}")?,
      None => write!(f, "ε")?,
    }
    write!(f, "--> {:?}>", self.next_state)
  }
}

/// Positions of rules within a rulebook, keyed first by source state and then
/// by whatever else a rule must match on (input symbol, stack top, ...).
///
/// Positions within a bucket are ascending, so the first entry is the rule a
/// linear "first match wins" scan would have found.
#[derive(Debug, Clone)]
pub(crate) struct RuleIndex<S, K> {
  by_state: FxIndexMap<S, FxIndexMap<K, SmallVec<[usize; 2]>>>,
}

impl<S, K> RuleIndex<S, K>
where
  S: Hash+Eq,
  K: Hash+Eq,
{
  pub(crate) fn build(keys: impl IntoIterator<Item=(S, K)>) -> Self {
    let mut by_state: FxIndexMap<S, FxIndexMap<K, SmallVec<[usize; 2]>>> = FxIndexMap::default();
    for (position, (state, key)) in keys.into_iter().enumerate() {
      by_state
        .entry(state)
        .or_default()
        .entry(key)
        .or_default()
        .push(position);
    }
    Self { by_state }
  }

  pub(crate) fn lookup(&self, state: &S, key: &K) -> &[usize] {
    self
      .by_state
      .get(state)
      .and_then(|keyed| keyed.get(key))
      .map(|positions| positions.as_slice())
      .unwrap_or(&[])
  }
}
