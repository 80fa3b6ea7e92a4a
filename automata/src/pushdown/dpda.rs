/* Description: Deterministic pushdown automata.

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

//! Deterministic pushdown automata.

use log::debug;

use super::{PDAConfiguration, PDARule, PDARuleTable, Stack};
use crate::{
  alphabet::Symbol, error::AutomatonError, input::Input, limits::Limits, state::State,
  FxIndexSet,
};

#[derive(Debug, Clone)]
pub struct DPDARulebook<S, Sym> {
  table: PDARuleTable<S, Sym>,
}

impl<S, Sym> DPDARulebook<S, Sym>
where
  S: State,
  Sym: Symbol,
{
  /// When several rules apply to one configuration, the earliest wins.
  pub fn new(rules: impl IntoIterator<Item=PDARule<S, Sym>>) -> Self {
    Self {
      table: PDARuleTable::new(rules),
    }
  }

  pub fn rules(&self) -> &[PDARule<S, Sym>] { self.table.rules() }

  pub fn rule_for(
    &self,
    configuration: &PDAConfiguration<S, Sym>,
    symbol: Option<Sym>,
  ) -> Option<&PDARule<S, Sym>> {
    self.table.rules_for(configuration, symbol).next()
  }

  pub fn applies_to(&self, configuration: &PDAConfiguration<S, Sym>, symbol: Option<Sym>) -> bool {
    self.rule_for(configuration, symbol).is_some()
  }

  pub fn next_configuration(
    &self,
    configuration: &PDAConfiguration<S, Sym>,
    symbol: Option<Sym>,
  ) -> Result<PDAConfiguration<S, Sym>, AutomatonError> {
    self
      .rule_for(configuration, symbol)
      .map(|rule| rule.follow(configuration))
      .ok_or_else(|| AutomatonError::no_rule(&configuration.state, &symbol))
  }

  /// Follows free moves until none applies.
  ///
  /// Nothing guarantees this settles: a free move which never consumes its
  /// own precondition repeats forever. Without a `limit` such a loop never
  /// returns; with one, it is reported as [`AutomatonError::FreeMoveLimit`]
  /// after `limit` moves.
  pub fn follow_free_moves(
    &self,
    configuration: PDAConfiguration<S, Sym>,
    limit: Option<usize>,
  ) -> Result<PDAConfiguration<S, Sym>, AutomatonError> {
    let mut configuration = configuration;
    let mut moves: usize = 0;
    while let Some(rule) = self.rule_for(&configuration, None) {
      if limit.is_some_and(|limit| moves >= limit) {
        debug!("gave up following free moves at {configuration:?}");
        return Err(AutomatonError::FreeMoveLimit {
          limit: moves,
        });
      }
      configuration = rule.follow(&configuration);
      moves += 1;
    }
    Ok(configuration)
  }
}

/// A running DPDA. Its configuration is always closed under free moves.
#[derive(Debug, Clone)]
pub struct DPDA<'d, S, Sym> {
  current_configuration: PDAConfiguration<S, Sym>,
  accept_states: &'d FxIndexSet<S>,
  rulebook: &'d DPDARulebook<S, Sym>,
  limits: Limits,
}

impl<'d, S, Sym> DPDA<'d, S, Sym>
where
  S: State,
  Sym: Symbol,
{
  pub fn new(
    configuration: PDAConfiguration<S, Sym>,
    accept_states: &'d FxIndexSet<S>,
    rulebook: &'d DPDARulebook<S, Sym>,
    limits: Limits,
  ) -> Result<Self, AutomatonError> {
    let current_configuration = rulebook.follow_free_moves(configuration, limits.free_moves)?;
    Ok(Self {
      current_configuration,
      accept_states,
      rulebook,
      limits,
    })
  }

  pub fn current_configuration(&self) -> &PDAConfiguration<S, Sym> { &self.current_configuration }

  pub fn accepting(&self) -> bool {
    self
      .current_configuration
      .state()
      .is_some_and(|s| self.accept_states.contains(s))
  }

  pub fn is_stuck(&self) -> bool { self.current_configuration.is_stuck() }

  /// Moves into the stuck sentinel if no rule reads `symbol`. Reading from an
  /// automaton which is already stuck is an error.
  pub fn read_character(&mut self, symbol: Sym) -> Result<&mut Self, AutomatonError> {
    if self.is_stuck() {
      return Err(AutomatonError::Stuck);
    }
    let next = match self.rulebook.rule_for(&self.current_configuration, Some(symbol)) {
      Some(rule) => rule.follow(&self.current_configuration),
      None => self.current_configuration.stuck(),
    };
    self.current_configuration = self
      .rulebook
      .follow_free_moves(next, self.limits.free_moves)?;
    Ok(self)
  }

  /// Stops consuming input as soon as the automaton gets stuck.
  pub fn read_string<I>(&mut self, input: &I) -> Result<&mut Self, AutomatonError>
  where I: Input<Sym>+?Sized {
    for symbol in input.symbols() {
      if self.is_stuck() {
        break;
      }
      self.read_character(symbol)?;
    }
    Ok(self)
  }
}

#[derive(Debug, Clone)]
pub struct DPDADesign<S, Sym> {
  start_state: S,
  bottom_symbol: Sym,
  accept_states: FxIndexSet<S>,
  rulebook: DPDARulebook<S, Sym>,
  limits: Limits,
}

impl<S, Sym> DPDADesign<S, Sym>
where
  S: State,
  Sym: Symbol,
{
  pub fn new(
    start_state: S,
    bottom_symbol: Sym,
    accept_states: impl IntoIterator<Item=S>,
    rulebook: DPDARulebook<S, Sym>,
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

  pub fn rulebook(&self) -> &DPDARulebook<S, Sym> { &self.rulebook }

  pub fn start_configuration(&self) -> PDAConfiguration<S, Sym> {
    PDAConfiguration::new(self.start_state.clone(), Stack::new([self.bottom_symbol]))
  }

  pub fn to_dpda(&self) -> Result<DPDA<'_, S, Sym>, AutomatonError> {
    DPDA::new(
      self.start_configuration(),
      &self.accept_states,
      &self.rulebook,
      self.limits,
    )
  }

  pub fn accepts<I>(&self, input: &I) -> Result<bool, AutomatonError>
  where I: Input<Sym>+?Sized {
    Ok(self.to_dpda()?.read_string(input)?.accepting())
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn balanced() -> DPDARulebook<u32, char> {
    DPDARulebook::new([
      PDARule::new(1, Some('('), 2, '$', ['b', '$']),
      PDARule::new(2, Some('('), 2, 'b', ['b', 'b']),
      PDARule::new(2, Some(')'), 2, 'b', []),
      PDARule::new(2, None, 1, '$', ['$']),
    ])
  }

  fn start() -> PDAConfiguration<u32, char> { PDAConfiguration::new(1, Stack::new(['$'])) }

  #[test]
  fn dpda_rulebook() {
    let rulebook = balanced();
    let configuration = rulebook.next_configuration(&start(), Some('(')).unwrap();
    assert_eq!(configuration.stack, Stack::new(['$', 'b']));
    let configuration = rulebook.next_configuration(&configuration, Some('(')).unwrap();
    assert_eq!(configuration.stack, Stack::new(['$', 'b', 'b']));
    assert!(rulebook.next_configuration(&start(), Some(')')).is_err());
    assert!(!rulebook.applies_to(&start(), None));
  }

  #[test]
  fn dpda() {
    let rulebook = balanced();
    let accept: FxIndexSet<u32> = [1].into_iter().collect();

    let mut dpda = DPDA::new(start(), &accept, &rulebook, Limits::default()).unwrap();
    assert!(dpda.accepting());
    assert!(!dpda.read_string("(()").unwrap().accepting());
    assert_eq!(dpda.current_configuration().state(), Some(&2));

    let mut dpda = DPDA::new(start(), &accept, &rulebook, Limits::default()).unwrap();
    assert!(!dpda.read_string("(()(").unwrap().accepting());
    assert!(dpda.read_string("))()").unwrap().accepting());
  }

  #[test]
  fn runaway_free_moves() {
    let rulebook: DPDARulebook<u32, char> =
      DPDARulebook::new([PDARule::new(1, None, 1, '$', ['$'])]);
    assert_eq!(
      rulebook.follow_free_moves(start(), Some(100)),
      Err(AutomatonError::FreeMoveLimit { limit: 100 })
    );

    let accept: FxIndexSet<u32> = [1].into_iter().collect();
    let limits = Limits::default().with_free_move_limit(Some(64));
    assert!(matches!(
      DPDA::new(start(), &accept, &rulebook, limits),
      Err(AutomatonError::FreeMoveLimit { limit: 64 })
    ));
  }

  #[test]
  fn long_acyclic_free_move_chain() {
    /* Closing the bracket walks a chain of free moves through fresh states. */
    let chain: u32 = 70_000;
    let rulebook: DPDARulebook<u32, char> = DPDARulebook::new(
      [
        PDARule::new(0, Some('('), 0, '$', ['$', 'b']),
        PDARule::new(0, Some(')'), 1, 'b', []),
      ]
      .into_iter()
      .chain((1..chain).map(|n| PDARule::new(n, None, n + 1, '$', ['$']))),
    );
    let design = DPDADesign::new(0, '$', [chain], rulebook);
    assert_eq!(design.accepts("()"), Ok(true));
    assert_eq!(design.accepts("("), Ok(false));
  }

  #[test]
  fn dpda_design() {
    let design = DPDADesign::new(1, '$', [1], balanced());
    assert_eq!(design.accepts("(((((((((())))))))))"), Ok(true));
    assert_eq!(design.accepts("()(())((()))(()(()))"), Ok(true));
    assert_eq!(design.accepts("(()(()(()()(()()))()"), Ok(false));
    assert_eq!(design.accepts("())"), Ok(false));
    assert_eq!(design.accepts(""), Ok(true));
  }

  #[test]
  fn stuck() {
    let design = DPDADesign::new(1, '$', [1], balanced());
    let mut dpda = design.to_dpda().unwrap();
    dpda.read_string("())").unwrap();
    assert!(!dpda.accepting());
    assert!(dpda.is_stuck());
    /* Further input is ignored by read_string, but refused by read_character. */
    assert!(dpda.read_string("()").unwrap().is_stuck());
    assert_eq!(dpda.read_character('(').err(), Some(AutomatonError::Stuck));
  }
}
