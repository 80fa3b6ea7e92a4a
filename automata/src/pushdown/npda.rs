/* Description: Nondeterministic pushdown automata.

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

//! Nondeterministic pushdown automata.
//!
//! An [`NPDA`] tracks every configuration it could be in at once. A
//! configuration with no applicable rule simply drops out of the set, so there
//! is no stuck sentinel here: an empty set rejects everything.

use log::debug;

use super::{PDAConfiguration, PDARule, PDARuleTable, Stack};
use crate::{
  alphabet::Symbol, error::AutomatonError, input::Input, limits::Limits, state::State,
  state_set::StateSet, FxIndexSet,
};

pub type ConfigurationSet<S, Sym> = StateSet<PDAConfiguration<S, Sym>>;

#[derive(Debug, Clone)]
pub struct NPDARulebook<S, Sym> {
  table: PDARuleTable<S, Sym>,
}

impl<S, Sym> NPDARulebook<S, Sym>
where
  S: State,
  Sym: Symbol,
{
  pub fn new(rules: impl IntoIterator<Item=PDARule<S, Sym>>) -> Self {
    Self {
      table: PDARuleTable::new(rules),
    }
  }

  pub fn rules(&self) -> &[PDARule<S, Sym>] { self.table.rules() }

  pub fn rules_for<'a>(
    &'a self,
    configuration: &PDAConfiguration<S, Sym>,
    symbol: Option<Sym>,
  ) -> impl Iterator<Item=&'a PDARule<S, Sym>>+'a {
    self.table.rules_for(configuration, symbol)
  }

  pub fn follow_rules_for<'a>(
    &'a self,
    configuration: &'a PDAConfiguration<S, Sym>,
    symbol: Option<Sym>,
  ) -> impl Iterator<Item=PDAConfiguration<S, Sym>>+'a {
    self
      .rules_for(configuration, symbol)
      .map(move |rule| rule.follow(configuration))
  }

  pub fn next_configurations<'c>(
    &self,
    configurations: impl IntoIterator<Item=&'c PDAConfiguration<S, Sym>>,
    symbol: Option<Sym>,
  ) -> ConfigurationSet<S, Sym>
  where
    S: 'c,
    Sym: 'c,
  {
    configurations
      .into_iter()
      .flat_map(|c| self.follow_rules_for(c, symbol))
      .collect()
  }

  /// Every configuration reachable from `configurations` by free moves.
  ///
  /// Each configuration is expanded at most once. A free move that keeps
  /// growing the stack produces endless distinct configurations, so with a
  /// `limit` the closure gives up after that many free moves reach a new
  /// configuration.
  pub fn follow_free_moves(
    &self,
    configurations: ConfigurationSet<S, Sym>,
    limit: Option<usize>,
  ) -> Result<ConfigurationSet<S, Sym>, AutomatonError> {
    let mut closure = configurations;
    let mut pending: Vec<PDAConfiguration<S, Sym>> = closure.iter().cloned().collect();
    let mut moves: usize = 0;
    while let Some(configuration) = pending.pop() {
      for next in self.follow_rules_for(&configuration, None) {
        if closure.contains(&next) {
          continue;
        }
        if limit.is_some_and(|limit| moves >= limit) {
          debug!(
            "gave up following free moves with {} configurations pending",
            pending.len() + 1
          );
          return Err(AutomatonError::FreeMoveLimit { limit: moves });
        }
        moves += 1;
        closure.insert(next.clone());
        pending.push(next);
      }
    }
    Ok(closure)
  }
}

/// A running NPDA. Its configurations are always closed under free moves.
#[derive(Debug, Clone)]
pub struct NPDA<'d, S, Sym> {
  current_configurations: ConfigurationSet<S, Sym>,
  accept_states: &'d FxIndexSet<S>,
  rulebook: &'d NPDARulebook<S, Sym>,
  limits: Limits,
}

impl<'d, S, Sym> NPDA<'d, S, Sym>
where
  S: State,
  Sym: Symbol,
{
  pub fn new(
    configurations: impl IntoIterator<Item=PDAConfiguration<S, Sym>>,
    accept_states: &'d FxIndexSet<S>,
    rulebook: &'d NPDARulebook<S, Sym>,
    limits: Limits,
  ) -> Result<Self, AutomatonError> {
    let current_configurations =
      rulebook.follow_free_moves(configurations.into_iter().collect(), limits.free_moves)?;
    Ok(Self {
      current_configurations,
      accept_states,
      rulebook,
      limits,
    })
  }

  pub fn current_configurations(&self) -> &ConfigurationSet<S, Sym> {
    &self.current_configurations
  }

  pub fn accepting(&self) -> bool {
    self
      .current_configurations
      .iter()
      .filter_map(PDAConfiguration::state)
      .any(|s| self.accept_states.contains(s))
  }

  pub fn read_character(&mut self, symbol: Sym) -> Result<&mut Self, AutomatonError> {
    let next = self
      .rulebook
      .next_configurations(&self.current_configurations, Some(symbol));
    self.current_configurations = self
      .rulebook
      .follow_free_moves(next, self.limits.free_moves)?;
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

#[derive(Debug, Clone)]
pub struct NPDADesign<S, Sym> {
  start_state: S,
  bottom_symbol: Sym,
  accept_states: FxIndexSet<S>,
  rulebook: NPDARulebook<S, Sym>,
  limits: Limits,
}

impl<S, Sym> NPDADesign<S, Sym>
where
  S: State,
  Sym: Symbol,
{
  pub fn new(
    start_state: S,
    bottom_symbol: Sym,
    accept_states: impl IntoIterator<Item=S>,
    rulebook: NPDARulebook<S, Sym>,
  ) -> Self {
    Self {
      start_state,
      bottom_symbol,
      accept_states: accept_states.into_iter().collect(),
      rulebook,
      limits: Limits::default(),
    }
  }

  pub fn with_limits(self, limits: Limits) -> Self { Self { limits, ..self } }

  pub fn rulebook(&self) -> &NPDARulebook<S, Sym> { &self.rulebook }

  pub fn to_npda(&self) -> Result<NPDA<'_, S, Sym>, AutomatonError> {
    let start = PDAConfiguration::new(self.start_state.clone(), Stack::new([self.bottom_symbol]));
    NPDA::new([start], &self.accept_states, &self.rulebook, self.limits)
  }

  pub fn accepts<I>(&self, input: &I) -> Result<bool, AutomatonError>
  where I: Input<Sym>+?Sized {
    Ok(self.to_npda()?.read_string(input)?.accepting())
  }
}

#[cfg(test)]
mod test {
  use super::*;

  /// Even-length palindromes over `a` and `b`.
  fn palindromes() -> NPDARulebook<u32, char> {
    NPDARulebook::new([
      PDARule::new(1, Some('a'), 1, '$', ['a', '$']),
      PDARule::new(1, Some('a'), 1, 'a', ['a', 'a']),
      PDARule::new(1, Some('a'), 1, 'b', ['a', 'b']),
      PDARule::new(1, Some('b'), 1, '$', ['b', '$']),
      PDARule::new(1, Some('b'), 1, 'a', ['b', 'a']),
      PDARule::new(1, Some('b'), 1, 'b', ['b', 'b']),
      PDARule::new(1, None, 2, '$', ['$']),
      PDARule::new(1, None, 2, 'a', ['a']),
      PDARule::new(1, None, 2, 'b', ['b']),
      PDARule::new(2, Some('a'), 2, 'a', []),
      PDARule::new(2, Some('b'), 2, 'b', []),
      PDARule::new(2, None, 3, '$', ['$']),
    ])
  }

  #[test]
  fn npda() {
    let rulebook = palindromes();
    let accept: FxIndexSet<u32> = [3].into_iter().collect();
    let start = PDAConfiguration::new(1, Stack::new(['$']));

    let mut npda = NPDA::new([start], &accept, &rulebook, Limits::default()).unwrap();
    assert!(npda.accepting());
    assert!(!npda.read_string("abb").unwrap().accepting());
    assert!(npda
      .current_configurations()
      .contains(&PDAConfiguration::new(1, Stack::new(['$', 'a', 'b', 'b']))));
    assert!(npda.read_character('a').unwrap().accepting());
    assert!(npda
      .current_configurations()
      .contains(&PDAConfiguration::new(1, Stack::new(['$', 'a', 'b', 'b', 'a']))));
  }

  #[test]
  fn free_move_closure() {
    let rulebook = palindromes();
    let start: ConfigurationSet<u32, char> =
      [PDAConfiguration::new(1, Stack::new(['$']))].into_iter().collect();
    let closure = rulebook.follow_free_moves(start, None).unwrap();
    assert_eq!(
      closure,
      [
        PDAConfiguration::new(1, Stack::new(['$'])),
        PDAConfiguration::new(2, Stack::new(['$'])),
        PDAConfiguration::new(3, Stack::new(['$'])),
      ]
      .into_iter()
      .collect::<ConfigurationSet<_, _>>()
    );
  }

  #[test]
  fn npda_design() {
    let design = NPDADesign::new(1, '$', [3], palindromes());
    assert_eq!(design.accepts("abba"), Ok(true));
    assert_eq!(design.accepts("babbaabbab"), Ok(true));
    assert_eq!(design.accepts("abb"), Ok(false));
    assert_eq!(design.accepts("baabaa"), Ok(false));
    /* Once every configuration dies, the set stays empty. */
    let mut npda = design.to_npda().unwrap();
    assert!(npda.read_string("abc").unwrap().current_configurations().is_empty());
    assert!(!npda.accepting());
  }

  #[test]
  fn only_free_moves_count_towards_the_limit() {
    let rulebook: NPDARulebook<u32, char> =
      NPDARulebook::new([PDARule::new(3, None, 4, '$', ['$'])]);
    let start: ConfigurationSet<u32, char> = (1..4096)
      .map(|depth| PDAConfiguration::new(1, Stack::new(vec!['x'; depth])))
      .collect();
    assert_eq!(rulebook.follow_free_moves(start.clone(), Some(1)), Ok(start));
  }

  #[test]
  fn long_acyclic_free_move_chain() {
    let chain: u32 = 70_000;
    let rulebook: NPDARulebook<u32, char> =
      NPDARulebook::new((0..chain).map(|n| PDARule::new(n, None, n + 1, '$', ['$'])));
    let design = NPDADesign::new(0, '$', [chain], rulebook);
    assert_eq!(design.accepts(""), Ok(true));
    assert_eq!(design.accepts("a"), Ok(false));
  }

  #[test]
  fn runaway_free_moves() {
    /* Each free move leaves `$` back on top, one `x` deeper. */
    let rulebook: NPDARulebook<u32, char> =
      NPDARulebook::new([PDARule::new(1, None, 1, '$', ['$', 'x'])]);
    let design = NPDADesign::new(1, '$', [1], rulebook);
    assert_eq!(
      design
        .with_limits(Limits::unbounded().with_free_move_limit(Some(32)))
        .accepts(""),
      Err(AutomatonError::FreeMoveLimit { limit: 32 })
    );
  }
}
