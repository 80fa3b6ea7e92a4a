/* Description: Deterministic finite automata.

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

//! Deterministic finite automata.
//!
//! A DFA is only as total as its rulebook: reading a symbol with no matching
//! rule is reported as [`AutomatonError::NoRule`] rather than treated as a
//! rejection.

use crate::{
  alphabet::Symbol, error::AutomatonError, input::Input, rule::FARule, rule::RuleIndex,
  state::State, FxIndexSet,
};

#[derive(Debug, Clone)]
pub struct DFARulebook<S, Sym> {
  rules: Vec<FARule<S, Sym>>,
  index: RuleIndex<S, Option<Sym>>,
}

impl<S, Sym> DFARulebook<S, Sym>
where
  S: State,
  Sym: Symbol,
{
  /// If two rules share a `(state, symbol)` pair, the earlier one wins.
  pub fn new(rules: impl IntoIterator<Item=FARule<S, Sym>>) -> Self {
    let rules: Vec<FARule<S, Sym>> = rules.into_iter().collect();
    let index = RuleIndex::build(rules.iter().map(|r| (r.state.clone(), r.symbol)));
    Self { rules, index }
  }

  pub fn rules(&self) -> &[FARule<S, Sym>] { &self.rules }

  pub fn rule_for(&self, state: &S, symbol: Sym) -> Option<&FARule<S, Sym>> {
    self
      .index
      .lookup(state, &Some(symbol))
      .first()
      .map(|i| &self.rules[*i])
  }

  pub fn next_state(&self, state: &S, symbol: Sym) -> Result<&S, AutomatonError> {
    self
      .rule_for(state, symbol)
      .map(FARule::follow)
      .ok_or_else(|| AutomatonError::no_rule(state, &symbol))
  }
}

/// A running DFA, borrowing its rulebook and accept states.
#[derive(Debug, Clone)]
pub struct DFA<'d, S, Sym> {
  current_state: S,
  accept_states: &'d FxIndexSet<S>,
  rulebook: &'d DFARulebook<S, Sym>,
}

impl<'d, S, Sym> DFA<'d, S, Sym>
where
  S: State,
  Sym: Symbol,
{
  pub fn new(
    current_state: S,
    accept_states: &'d FxIndexSet<S>,
    rulebook: &'d DFARulebook<S, Sym>,
  ) -> Self {
    Self {
      current_state,
      accept_states,
      rulebook,
    }
  }

  pub fn current_state(&self) -> &S { &self.current_state }

  pub fn accepting(&self) -> bool { self.accept_states.contains(&self.current_state) }

  /// On failure the automaton is left in the state it was in before reading.
  pub fn read_character(&mut self, symbol: Sym) -> Result<&mut Self, AutomatonError> {
    self.current_state = self.rulebook.next_state(&self.current_state, symbol)?.clone();
    Ok(self)
  }

  pub fn read_string<I>(&mut self, input: &I) -> Result<&mut Self, AutomatonError>
  where I: Input<Sym>+?Sized {
    for symbol in input.symbols() {
      self.read_character(symbol)?;
    }
    Ok(self)
  }
}

/// The immutable description of a DFA, from which instances are created.
#[derive(Debug, Clone)]
pub struct DFADesign<S, Sym> {
  start_state: S,
  accept_states: FxIndexSet<S>,
  rulebook: DFARulebook<S, Sym>,
}

impl<S, Sym> DFADesign<S, Sym>
where
  S: State,
  Sym: Symbol,
{
  pub fn new(
    start_state: S,
    accept_states: impl IntoIterator<Item=S>,
    rulebook: DFARulebook<S, Sym>,
  ) -> Self {
    Self {
      start_state,
      accept_states: accept_states.into_iter().collect(),
      rulebook,
    }
  }

  pub fn start_state(&self) -> &S { &self.start_state }

  pub fn accept_states(&self) -> &FxIndexSet<S> { &self.accept_states }

  pub fn rulebook(&self) -> &DFARulebook<S, Sym> { &self.rulebook }

  pub fn to_dfa(&self) -> DFA<'_, S, Sym> {
    DFA::new(self.start_state.clone(), &self.accept_states, &self.rulebook)
  }

  pub fn accepts<I>(&self, input: &I) -> Result<bool, AutomatonError>
  where I: Input<Sym>+?Sized {
    Ok(self.to_dfa().read_string(input)?.accepting())
  }
}
