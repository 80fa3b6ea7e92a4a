/* Description: Deterministic Turing machines.

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

//! Deterministic Turing machines.
//!
//! A [`DTM`] halts when it reaches an accept state or when no rule applies to
//! its configuration. Neither is guaranteed to happen, so [`DTM::run`] only
//! gives up early when a step bound was configured in its [`Limits`].

use core::fmt;

use log::trace;

use crate::{
  alphabet::Symbol, error::AutomatonError, limits::Limits, rule::RuleIndex, state::State,
  FxIndexSet,
};

pub mod tape;
pub use tape::{Direction, Tape};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TMConfiguration<S, Sym> {
  pub state: S,
  pub tape: Tape<Sym>,
}

impl<S, Sym> TMConfiguration<S, Sym> {
  pub const fn new(state: S, tape: Tape<Sym>) -> Self { Self { state, tape } }
}

impl<S, Sym> fmt::Display for TMConfiguration<S, Sym>
where
  S: fmt::Debug,
  Sym: Symbol+fmt::Display,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "State: {:?}, {}", self.state, self.tape)
  }
}

/// `state --read/write, direction--> next_state`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TMRule<S, Sym> {
  pub state: S,
  pub symbol: Sym,
  pub next_state: S,
  pub write_symbol: Sym,
  pub direction: Direction,
}

impl<S, Sym> TMRule<S, Sym>
where
  S: State,
  Sym: Symbol,
{
  pub const fn new(
    state: S,
    symbol: Sym,
    next_state: S,
    write_symbol: Sym,
    direction: Direction,
  ) -> Self {
    Self {
      state,
      symbol,
      next_state,
      write_symbol,
      direction,
    }
  }

  pub fn applies_to(&self, configuration: &TMConfiguration<S, Sym>) -> bool {
    self.state == configuration.state && self.symbol == configuration.tape.middle()
  }

  pub fn next_tape(&self, configuration: &TMConfiguration<S, Sym>) -> Tape<Sym> {
    configuration
      .tape
      .write(self.write_symbol)
      .move_head(self.direction)
  }

  pub fn follow(&self, configuration: &TMConfiguration<S, Sym>) -> TMConfiguration<S, Sym> {
    TMConfiguration::new(self.next_state.clone(), self.next_tape(configuration))
  }
}

#[derive(Debug, Clone)]
pub struct DTMRulebook<S, Sym> {
  rules: Vec<TMRule<S, Sym>>,
  index: RuleIndex<S, Sym>,
}

impl<S, Sym> DTMRulebook<S, Sym>
where
  S: State,
  Sym: Symbol,
{
  /// If two rules read the same symbol in the same state, the earlier wins.
  pub fn new(rules: impl IntoIterator<Item=TMRule<S, Sym>>) -> Self {
    let rules: Vec<TMRule<S, Sym>> = rules.into_iter().collect();
    let index = RuleIndex::build(rules.iter().map(|r| (r.state.clone(), r.symbol)));
    Self { rules, index }
  }

  pub fn rules(&self) -> &[TMRule<S, Sym>] { &self.rules }

  pub fn rule_for(&self, configuration: &TMConfiguration<S, Sym>) -> Option<&TMRule<S, Sym>> {
    self
      .index
      .lookup(&configuration.state, &configuration.tape.middle())
      .first()
      .map(|i| &self.rules[*i])
  }

  pub fn applies_to(&self, configuration: &TMConfiguration<S, Sym>) -> bool {
    self.rule_for(configuration).is_some()
  }

  pub fn next_configuration(
    &self,
    configuration: &TMConfiguration<S, Sym>,
  ) -> Result<TMConfiguration<S, Sym>, AutomatonError> {
    self
      .rule_for(configuration)
      .map(|rule| rule.follow(configuration))
      .ok_or_else(|| AutomatonError::no_rule(&configuration.state, &configuration.tape.middle()))
  }
}

/// Why [`DTM::run`] stopped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Halt {
  Accepted,
  /// Not accepting, and no rule applies.
  Stuck,
}

#[derive(Debug, Clone)]
pub struct DTM<'d, S, Sym> {
  current_configuration: TMConfiguration<S, Sym>,
  accept_states: &'d FxIndexSet<S>,
  rulebook: &'d DTMRulebook<S, Sym>,
  limits: Limits,
}

impl<'d, S, Sym> DTM<'d, S, Sym>
where
  S: State,
  Sym: Symbol,
{
  pub const fn new(
    current_configuration: TMConfiguration<S, Sym>,
    accept_states: &'d FxIndexSet<S>,
    rulebook: &'d DTMRulebook<S, Sym>,
    limits: Limits,
  ) -> Self {
    Self {
      current_configuration,
      accept_states,
      rulebook,
      limits,
    }
  }

  pub fn current_configuration(&self) -> &TMConfiguration<S, Sym> { &self.current_configuration }

  pub fn into_configuration(self) -> TMConfiguration<S, Sym> { self.current_configuration }

  pub fn accepting(&self) -> bool { self.accept_states.contains(&self.current_configuration.state) }

  pub fn is_stuck(&self) -> bool {
    !self.accepting() && !self.rulebook.applies_to(&self.current_configuration)
  }

  /// Applies the single matching rule. The configuration is unchanged when
  /// none applies.
  pub fn step(&mut self) -> Result<&mut Self, AutomatonError> {
    self.current_configuration = self
      .rulebook
      .next_configuration(&self.current_configuration)?;
    Ok(self)
  }

  pub fn run(&mut self) -> Result<Halt, AutomatonError> {
    let mut steps: usize = 0;
    loop {
      trace!("step {steps}: {:?}", &self.current_configuration);
      if self.accepting() {
        return Ok(Halt::Accepted);
      }
      if self.is_stuck() {
        return Ok(Halt::Stuck);
      }
      if let Some(limit) = self.limits.steps {
        if steps >= limit {
          return Err(AutomatonError::StepLimit { limit });
        }
      }
      self.step()?;
      steps += 1;
    }
  }
}

#[derive(Debug, Clone)]
pub struct DTMDesign<S, Sym> {
  start_state: S,
  accept_states: FxIndexSet<S>,
  rulebook: DTMRulebook<S, Sym>,
  limits: Limits,
}

impl<S, Sym> DTMDesign<S, Sym>
where
  S: State,
  Sym: Symbol,
{
  pub fn new(
    start_state: S,
    accept_states: impl IntoIterator<Item=S>,
    rulebook: DTMRulebook<S, Sym>,
  ) -> Self {
    Self {
      start_state,
      accept_states: accept_states.into_iter().collect(),
      rulebook,
      limits: Limits::default(),
    }
  }

  pub fn with_limits(self, limits: Limits) -> Self { Self { limits, ..self } }

  pub fn rulebook(&self) -> &DTMRulebook<S, Sym> { &self.rulebook }

  pub fn to_dtm(&self, tape: Tape<Sym>) -> DTM<'_, S, Sym> {
    DTM::new(
      TMConfiguration::new(self.start_state.clone(), tape),
      &self.accept_states,
      &self.rulebook,
      self.limits,
    )
  }

  pub fn accepts(&self, tape: Tape<Sym>) -> Result<bool, AutomatonError> {
    Ok(self.to_dtm(tape).run()? == Halt::Accepted)
  }
}
