/* Description: Subset construction of a DFA from an NFA.

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

//! Subset construction of a DFA from an NFA.
//!
//! Each state of the resulting DFA is the (closed) set of NFA states the NFA
//! could simultaneously be in. Only sets reachable from the start closure are
//! ever materialized.

use log::{debug, trace};

use crate::{
  alphabet::Symbol,
  dfa::{DFADesign, DFARulebook},
  nfa::NFADesign,
  rule::FARule,
  state::State,
  state_set::StateSet,
  FxIndexSet,
};

pub type SubsetRule<S, Sym> = FARule<StateSet<S>, Sym>;

/// Simulates an NFA design one set of states at a time.
#[derive(Debug, Clone)]
pub struct NFASimulation<'d, S, Sym> {
  nfa_design: &'d NFADesign<S, Sym>,
  alphabet: FxIndexSet<Sym>,
}

impl<'d, S, Sym> NFASimulation<'d, S, Sym>
where
  S: State,
  Sym: Symbol,
{
  pub fn new(nfa_design: &'d NFADesign<S, Sym>) -> Self {
    let alphabet = nfa_design.rulebook().alphabet();
    Self {
      nfa_design,
      alphabet,
    }
  }

  pub fn alphabet(&self) -> &FxIndexSet<Sym> { &self.alphabet }

  /// The closure reached by reading `symbol` from exactly `state`.
  pub fn next_state(&self, state: &StateSet<S>, symbol: Sym) -> StateSet<S> {
    let mut nfa = self.nfa_design.to_nfa_from(state.iter().cloned());
    nfa.read_character(symbol);
    nfa.current_states()
  }

  /// One rule per alphabet symbol leaving `state`.
  pub fn rules_for(&self, state: &StateSet<S>) -> Vec<SubsetRule<S, Sym>> {
    self
      .alphabet
      .iter()
      .map(|symbol| FARule::new(state.clone(), Some(*symbol), self.next_state(state, *symbol)))
      .collect()
  }

  /// Grows `states` until every successor of every discovered set has itself
  /// been discovered.
  ///
  /// The discovered sets double as a worklist: each is expanded exactly once,
  /// in discovery order, and the powerset of the NFA's states bounds how many
  /// there can be.
  pub fn discover_states_and_rules(
    &self,
    states: impl IntoIterator<Item=StateSet<S>>,
  ) -> (FxIndexSet<StateSet<S>>, Vec<SubsetRule<S, Sym>>) {
    let mut discovered: FxIndexSet<StateSet<S>> = states.into_iter().collect();
    let mut rules: Vec<SubsetRule<S, Sym>> = Vec::new();

    let mut cursor: usize = 0;
    while let Some(state) = discovered.get_index(cursor).cloned() {
      for rule in self.rules_for(&state) {
        let (index, is_new) = discovered.insert_full(rule.next_state.clone());
        if is_new {
          trace!("discovered subset #{index}: {:?}", &rule.next_state);
        }
        rules.push(rule);
      }
      cursor += 1;
    }

    (discovered, rules)
  }

  pub fn to_dfa_design(&self) -> DFADesign<StateSet<S>, Sym> {
    let start_state = self.nfa_design.to_nfa().current_states();
    let (states, rules) = self.discover_states_and_rules([start_state.clone()]);
    debug!(
      "determinized {} symbols into {} states and {} rules",
      self.alphabet.len(),
      states.len(),
      rules.len()
    );

    let accept_states: Vec<StateSet<S>> = states
      .into_iter()
      .filter(|state| {
        self
          .nfa_design
          .to_nfa_from(state.iter().cloned())
          .accepting()
      })
      .collect();
    DFADesign::new(start_state, accept_states, DFARulebook::new(rules))
  }
}

impl<S, Sym> NFADesign<S, Sym>
where
  S: State,
  Sym: Symbol,
{
  /// Shorthand for [`NFASimulation::to_dfa_design`].
  pub fn to_dfa_design(&self) -> DFADesign<StateSet<S>, Sym> { NFASimulation::new(self).to_dfa_design() }
}

#[cfg(test)]
mod test {
  use proptest::{collection::vec, prelude::*};

  use super::*;
  use crate::nfa::NFARulebook;

  fn set(states: impl IntoIterator<Item=u32>) -> StateSet<u32> { states.into_iter().collect() }

  fn design() -> NFADesign<u32, char> {
    NFADesign::new(
      1,
      [3],
      NFARulebook::new([
        FARule::new(1, Some('a'), 1),
        FARule::new(1, Some('a'), 2),
        FARule::free(1, 2),
        FARule::new(2, Some('b'), 3),
        FARule::new(3, Some('b'), 1),
        FARule::free(3, 2),
      ]),
    )
  }

  #[test]
  fn next_state() {
    let design = design();
    let simulation = NFASimulation::new(&design);
    assert_eq!(simulation.next_state(&set([1, 2]), 'a'), set([1, 2]));
    assert_eq!(simulation.next_state(&set([1, 2]), 'b'), set([3, 2]));
    assert_eq!(simulation.next_state(&set([3, 2]), 'b'), set([1, 3, 2]));
    assert_eq!(simulation.next_state(&set([1, 3, 2]), 'b'), set([1, 3, 2]));
    assert_eq!(simulation.next_state(&set([1, 3, 2]), 'a'), set([1, 2]));
  }

  #[test]
  fn rules_for() {
    let design = design();
    let simulation = NFASimulation::new(&design);
    let rules = simulation.rules_for(&set([1, 2]));
    assert_eq!(rules, vec![
      FARule::new(set([1, 2]), Some('a'), set([1, 2])),
      FARule::new(set([1, 2]), Some('b'), set([2, 3])),
    ]);
  }

  #[test]
  fn discover_states_and_rules() {
    let design = design();
    let simulation = NFASimulation::new(&design);
    let (states, rules) = simulation.discover_states_and_rules([set([1, 2])]);
    assert_eq!(
      states,
      [set([1, 2]), set([2, 3]), StateSet::new(), set([1, 2, 3])]
        .into_iter()
        .collect::<FxIndexSet<_>>()
    );
    /* Every discovered state has exactly one rule per symbol. */
    assert_eq!(rules.len(), states.len() * 2);
  }

  #[test]
  fn to_dfa_design() {
    let design = design();
    let dfa_design = NFASimulation::new(&design).to_dfa_design();
    assert_eq!(dfa_design.start_state(), &set([1, 2]));
    assert_eq!(dfa_design.accepts("aaa"), Ok(false));
    assert_eq!(dfa_design.accepts("aab"), Ok(true));
    assert_eq!(dfa_design.accepts("bbbabb"), Ok(true));
    assert_eq!(dfa_design.accept_states().len(), 2);
  }

  #[test]
  fn rulebook_without_rules() {
    let design: NFADesign<u32, char> = NFADesign::new(0, [0], NFARulebook::new([]));
    let dfa_design = design.to_dfa_design();
    assert_eq!(dfa_design.accepts(""), Ok(true));
    assert!(dfa_design.rulebook().rules().is_empty());
  }

  const NFA_STATES: u32 = 5;

  fn arb_rule() -> impl Strategy<Value=FARule<u32, char>> {
    (
      0..NFA_STATES,
      prop_oneof![Just(None), Just(Some('a')), Just(Some('b'))],
      0..NFA_STATES,
    )
      .prop_map(|(state, symbol, next_state)| FARule::new(state, symbol, next_state))
  }

  fn arb_design() -> impl Strategy<Value=NFADesign<u32, char>> {
    (
      0..NFA_STATES,
      vec(0..NFA_STATES, 0..3),
      vec(arb_rule(), 0..14),
    )
      .prop_map(|(start, accept, rules)| NFADesign::new(start, accept, NFARulebook::new(rules)))
  }

  proptest! {
    #[test]
    fn determinization_preserves_language(
      design in arb_design(),
      inputs in vec(vec(prop_oneof![Just('a'), Just('b')], 0..8), 1..16),
    ) {
      let dfa_design = design.to_dfa_design();
      let alphabet = design.rulebook().alphabet();
      for input in inputs.iter() {
        let expected = design.accepts(input);
        if input.iter().all(|c| alphabet.contains(c)) {
          prop_assert_eq!(dfa_design.accepts(input), Ok(expected));
        } else {
          /* The NFA can only reject once it reads a symbol none of its rules
           * mention, and the DFA has no rule to follow for it. */
          prop_assert!(!expected);
          prop_assert!(dfa_design.accepts(input).is_err());
        }
      }
    }
  }
}
