/* Description: Nondeterministic finite automata with free moves.

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

//! Nondeterministic finite automata with free moves.
//!
//! An [`NFA`] stores the set of states it reached *before* following free
//! moves. The states it reports are always the epsilon-closure of that set.
//! Reading a symbol steps from the closure and only then re-closes; closing
//! first and stepping later would miss transitions that leave an
//! epsilon-reachable state.

use crate::{
  alphabet::Symbol,
  input::Input,
  rule::{FARule, RuleIndex},
  state::State,
  state_set::StateSet,
  FxIndexSet,
};

#[derive(Debug, Clone)]
pub struct NFARulebook<S, Sym> {
  rules: Vec<FARule<S, Sym>>,
  index: RuleIndex<S, Option<Sym>>,
}

impl<S, Sym> NFARulebook<S, Sym>
where
  S: State,
  Sym: Symbol,
{
  pub fn new(rules: impl IntoIterator<Item=FARule<S, Sym>>) -> Self {
    let rules: Vec<FARule<S, Sym>> = rules.into_iter().collect();
    let index = RuleIndex::build(rules.iter().map(|r| (r.state.clone(), r.symbol)));
    Self { rules, index }
  }

  pub fn rules(&self) -> &[FARule<S, Sym>] { &self.rules }

  pub fn rules_for<'a>(
    &'a self,
    state: &S,
    symbol: Option<Sym>,
  ) -> impl Iterator<Item=&'a FARule<S, Sym>>+'a {
    self
      .index
      .lookup(state, &symbol)
      .iter()
      .map(move |i| &self.rules[*i])
  }

  pub fn follow_rules_for<'a>(
    &'a self,
    state: &S,
    symbol: Option<Sym>,
  ) -> impl Iterator<Item=&'a S>+'a {
    self.rules_for(state, symbol).map(FARule::follow)
  }

  /// Every state reachable from any of `states` by exactly one rule labelled
  /// `symbol`.
  pub fn next_states<'s>(
    &self,
    states: impl IntoIterator<Item=&'s S>,
    symbol: Option<Sym>,
  ) -> StateSet<S>
  where
    S: 's,
  {
    states
      .into_iter()
      .flat_map(|s| self.follow_rules_for(s, symbol))
      .cloned()
      .collect()
  }

  /// The epsilon-closure of `states`.
  ///
  /// Each state is expanded at most once, so this terminates within the finite
  /// set of states the rules mention.
  pub fn follow_free_moves(&self, states: StateSet<S>) -> StateSet<S> {
    let mut closure = states;
    let mut pending: Vec<S> = closure.iter().cloned().collect();
    while let Some(state) = pending.pop() {
      for next in self.follow_rules_for(&state, None) {
        if closure.insert(next.clone()) {
          pending.push(next.clone());
        }
      }
    }
    closure
  }

  /// Every non-epsilon symbol mentioned by some rule, in rule order.
  pub fn alphabet(&self) -> FxIndexSet<Sym> { self.rules.iter().filter_map(|r| r.symbol).collect() }
}

/// A running NFA, borrowing its rulebook and accept states.
#[derive(Debug, Clone)]
pub struct NFA<'d, S, Sym> {
  current_states: StateSet<S>,
  accept_states: &'d StateSet<S>,
  rulebook: &'d NFARulebook<S, Sym>,
}

impl<'d, S, Sym> NFA<'d, S, Sym>
where
  S: State,
  Sym: Symbol,
{
  pub fn new(
    current_states: impl IntoIterator<Item=S>,
    accept_states: &'d StateSet<S>,
    rulebook: &'d NFARulebook<S, Sym>,
  ) -> Self {
    Self {
      current_states: current_states.into_iter().collect(),
      accept_states,
      rulebook,
    }
  }

  pub fn current_states(&self) -> StateSet<S> {
    self
      .rulebook
      .follow_free_moves(self.current_states.clone())
  }

  pub fn accepting(&self) -> bool { !self.current_states().is_disjoint(self.accept_states) }

  pub fn read_character(&mut self, symbol: Sym) -> &mut Self {
    let closed = self.current_states();
    self.current_states = self.rulebook.next_states(&closed, Some(symbol));
    self
  }

  pub fn read_string<I>(&mut self, input: &I) -> &mut Self
  where I: Input<Sym>+?Sized {
    for symbol in input.symbols() {
      self.read_character(symbol);
    }
    self
  }
}

#[derive(Debug, Clone)]
pub struct NFADesign<S, Sym> {
  start_state: S,
  accept_states: StateSet<S>,
  rulebook: NFARulebook<S, Sym>,
}

impl<S, Sym> NFADesign<S, Sym>
where
  S: State,
  Sym: Symbol,
{
  pub fn new(
    start_state: S,
    accept_states: impl IntoIterator<Item=S>,
    rulebook: NFARulebook<S, Sym>,
  ) -> Self {
    Self {
      start_state,
      accept_states: accept_states.into_iter().collect(),
      rulebook,
    }
  }

  pub fn start_state(&self) -> &S { &self.start_state }

  pub fn accept_states(&self) -> &StateSet<S> { &self.accept_states }

  pub fn rulebook(&self) -> &NFARulebook<S, Sym> { &self.rulebook }

  pub fn to_nfa(&self) -> NFA<'_, S, Sym> { self.to_nfa_from([self.start_state.clone()]) }

  /// An instance positioned at an arbitrary set of (pre-closure) states.
  pub fn to_nfa_from(&self, current_states: impl IntoIterator<Item=S>) -> NFA<'_, S, Sym> {
    NFA::new(current_states, &self.accept_states, &self.rulebook)
  }

  pub fn accepts<I>(&self, input: &I) -> bool
  where I: Input<Sym>+?Sized {
    self.to_nfa().read_string(input).accepting()
  }
}

#[cfg(test)]
mod test {
  use super::*;

  fn set(states: impl IntoIterator<Item=u32>) -> StateSet<u32> { states.into_iter().collect() }

  fn third_from_last_b() -> NFARulebook<u32, char> {
    NFARulebook::new([
      FARule::new(1, Some('a'), 1),
      FARule::new(1, Some('b'), 1),
      FARule::new(1, Some('b'), 2),
      FARule::new(2, Some('a'), 3),
      FARule::new(2, Some('b'), 3),
      FARule::new(3, Some('a'), 4),
      FARule::new(3, Some('b'), 4),
    ])
  }

  fn free_moves() -> NFARulebook<u32, char> {
    NFARulebook::new([
      FARule::free(1, 2),
      FARule::free(1, 4),
      FARule::new(2, Some('a'), 3),
      FARule::new(3, Some('a'), 2),
      FARule::new(4, Some('a'), 5),
      FARule::new(5, Some('a'), 6),
      FARule::new(6, Some('a'), 4),
    ])
  }

  #[test]
  fn nfa_rulebook() {
    let rulebook = third_from_last_b();
    assert_eq!(rulebook.next_states(&set([1]), Some('b')), set([1, 2]));
    assert_eq!(rulebook.next_states(&set([1, 2]), Some('a')), set([1, 3]));
    assert_eq!(rulebook.next_states(&set([1, 3]), Some('b')), set([1, 2, 4]));
    assert_eq!(rulebook.rules_for(&1, Some('b')).count(), 2);
    assert_eq!(rulebook.rules_for(&4, Some('b')).count(), 0);
  }

  #[test]
  fn nfa() {
    let rulebook = third_from_last_b();
    let accept = set([4]);
    assert!(!NFA::new([1], &accept, &rulebook).accepting());
    assert!(NFA::new([1, 2, 4], &accept, &rulebook).accepting());

    let mut nfa = NFA::new([1], &accept, &rulebook);
    assert!(!nfa.accepting());
    assert!(!nfa.read_character('b').accepting());
    assert!(!nfa.read_character('a').accepting());
    assert!(nfa.read_character('b').accepting());

    let mut nfa = NFA::new([1], &accept, &rulebook);
    assert!(nfa.read_string("bbbbb").accepting());
  }

  #[test]
  fn nfa_design() {
    let design = NFADesign::new(1, [4], third_from_last_b());
    assert!(design.accepts("bab"));
    assert!(design.accepts("bbbbb"));
    assert!(!design.accepts("bbabb"));
    assert!(!design.accepts(""));
  }

  #[test]
  fn free_move_closure() {
    let rulebook = free_moves();
    assert_eq!(rulebook.next_states(&set([1]), None), set([2, 4]));
    assert_eq!(rulebook.follow_free_moves(set([1])), set([1, 2, 4]));

    let design = NFADesign::new(1, [2, 4], rulebook);
    assert!(design.accepts("aa"));
    assert!(design.accepts("aaa"));
    assert!(design.accepts("aaaaaa"));
    assert!(!design.accepts("a"));
    assert!(!design.accepts("aaaaa"));
  }

  #[test]
  fn cyclic_free_moves_terminate() {
    let rulebook: NFARulebook<u32, char> =
      NFARulebook::new([FARule::free(1, 2), FARule::free(2, 3), FARule::free(3, 1)]);
    assert_eq!(rulebook.follow_free_moves(set([2])), set([1, 2, 3]));
  }

  #[test]
  fn alphabet_and_closure_from() {
    let rulebook = NFARulebook::new([
      FARule::new(1, Some('a'), 1),
      FARule::new(1, Some('a'), 2),
      FARule::free(1, 2),
      FARule::new(2, Some('b'), 3),
      FARule::new(3, Some('b'), 1),
      FARule::free(3, 2),
    ]);
    assert_eq!(
      rulebook.alphabet(),
      ['a', 'b'].into_iter().collect::<FxIndexSet<_>>()
    );

    let design = NFADesign::new(1, [3], rulebook);
    assert_eq!(design.to_nfa().current_states(), set([1, 2]));
    assert_eq!(design.to_nfa_from([3]).current_states(), set([2, 3]));

    let mut nfa = design.to_nfa_from([2, 3]);
    nfa.read_character('b');
    assert_eq!(nfa.current_states(), set([1, 2, 3]));
  }
}
