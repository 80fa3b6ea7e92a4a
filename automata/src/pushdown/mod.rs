/* Description: Pushdown automaton stacks, configurations and rules.

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

//! Pushdown automaton stacks, configurations and rules.
//!
//! Free moves of a pushdown automaton are not bounded by a finite set of
//! states: an epsilon rule may push onto the stack forever. Callers must only
//! build rulebooks whose free moves are well-founded; the closures here are
//! iterative and, unless the [`Limits`](crate::limits::Limits) say otherwise,
//! give up with [`AutomatonError::FreeMoveLimit`](crate::AutomatonError)
//! instead of looping.

use core::fmt;

use smallvec::SmallVec;

use crate::{alphabet::Symbol, rule::RuleIndex, state::State};

pub mod dpda;
pub mod npda;

/// An immutable stack. The top is the *last* element of
/// [`contents()`](Self::contents).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Stack<Sym> {
  contents: Vec<Sym>,
}

impl<Sym> Stack<Sym>
where Sym: Symbol
{
  /// `contents` are listed bottom first.
  pub fn new(contents: impl IntoIterator<Item=Sym>) -> Self {
    Self {
      contents: contents.into_iter().collect(),
    }
  }

  pub fn contents(&self) -> &[Sym] { &self.contents }

  pub fn push(&self, symbol: Sym) -> Self {
    let mut contents = Vec::with_capacity(self.contents.len() + 1);
    contents.extend_from_slice(&self.contents);
    contents.push(symbol);
    Self { contents }
  }

  /// Popping an empty stack yields another empty stack.
  pub fn pop(&self) -> Self {
    let len = self.contents.len().saturating_sub(1);
    Self {
      contents: self.contents[..len].to_vec(),
    }
  }

  pub fn top(&self) -> Option<Sym> { self.contents.last().copied() }

  pub fn is_empty(&self) -> bool { self.contents.is_empty() }
}

impl<Sym> fmt::Display for Stack<Sym>
where Sym: fmt::Display
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Stack[")?;
    for sym in self.contents.iter() {
      write!(f, "{sym}")?;
    }
    write!(f, "]")
  }
}

/// The control state of a pushdown automaton, including the stuck sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PDAState<S> {
  Running(S),
  /// No rule applied to the last input symbol. Nothing ever leaves this state.
  Stuck,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PDAConfiguration<S, Sym> {
  pub state: PDAState<S>,
  pub stack: Stack<Sym>,
}

impl<S, Sym> PDAConfiguration<S, Sym>
where
  S: State,
  Sym: Symbol,
{
  pub fn new(state: S, stack: Stack<Sym>) -> Self {
    Self {
      state: PDAState::Running(state),
      stack,
    }
  }

  /// `None` once stuck.
  pub fn state(&self) -> Option<&S> {
    match self.state {
      PDAState::Running(ref s) => Some(s),
      PDAState::Stuck => None,
    }
  }

  pub fn stuck(&self) -> Self {
    Self {
      state: PDAState::Stuck,
      stack: self.stack.clone(),
    }
  }

  pub fn is_stuck(&self) -> bool { matches!(self.state, PDAState::Stuck) }
}

impl<S, Sym> fmt::Display for PDAConfiguration<S, Sym>
where
  S: fmt::Debug,
  Sym: fmt::Display,
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self.state {
      PDAState::Running(ref s) => write!(f, "State: {s:?}, {}", self.stack),
      PDAState::Stuck => write!(f, "State: <stuck>, {}", self.stack),
    }
  }
}

/// `state --symbol; pop_symbol/push_symbols--> next_state`.
///
/// The first of `push_symbols` ends up on top of the stack.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PDARule<S, Sym> {
  pub state: S,
  pub symbol: Option<Sym>,
  pub next_state: S,
  pub pop_symbol: Sym,
  pub push_symbols: SmallVec<[Sym; 2]>,
}

impl<S, Sym> PDARule<S, Sym>
where
  S: State,
  Sym: Symbol,
{
  pub fn new(
    state: S,
    symbol: Option<Sym>,
    next_state: S,
    pop_symbol: Sym,
    push_symbols: impl IntoIterator<Item=Sym>,
  ) -> Self {
    Self {
      state,
      symbol,
      next_state,
      pop_symbol,
      push_symbols: push_symbols.into_iter().collect(),
    }
  }

  pub fn applies_to(&self, configuration: &PDAConfiguration<S, Sym>, symbol: Option<Sym>) -> bool {
    configuration.state() == Some(&self.state)
      && configuration.stack.top() == Some(self.pop_symbol)
      && self.symbol == symbol
  }

  pub fn next_stack(&self, configuration: &PDAConfiguration<S, Sym>) -> Stack<Sym> {
    let mut contents: Vec<Sym> = configuration.stack.pop().contents;
    contents.extend(self.push_symbols.iter().rev().copied());
    Stack { contents }
  }

  pub fn follow(&self, configuration: &PDAConfiguration<S, Sym>) -> PDAConfiguration<S, Sym> {
    PDAConfiguration::new(self.next_state.clone(), self.next_stack(configuration))
  }
}

/// Rules indexed by state, input symbol and required stack top, shared by the
/// deterministic and nondeterministic rulebooks.
#[derive(Debug, Clone)]
pub(crate) struct PDARuleTable<S, Sym> {
  rules: Vec<PDARule<S, Sym>>,
  index: RuleIndex<S, (Option<Sym>, Sym)>,
}

impl<S, Sym> PDARuleTable<S, Sym>
where
  S: State,
  Sym: Symbol,
{
  pub(crate) fn new(rules: impl IntoIterator<Item=PDARule<S, Sym>>) -> Self {
    let rules: Vec<PDARule<S, Sym>> = rules.into_iter().collect();
    let index = RuleIndex::build(
      rules
        .iter()
        .map(|r| (r.state.clone(), (r.symbol, r.pop_symbol))),
    );
    Self { rules, index }
  }

  pub(crate) fn rules(&self) -> &[PDARule<S, Sym>] { &self.rules }

  pub(crate) fn rules_for<'a>(
    &'a self,
    configuration: &PDAConfiguration<S, Sym>,
    symbol: Option<Sym>,
  ) -> impl Iterator<Item=&'a PDARule<S, Sym>>+'a {
    let positions: &'a [usize] = match (configuration.state(), configuration.stack.top()) {
      (Some(state), Some(top)) => self.index.lookup(state, &(symbol, top)),
      _ => &[],
    };
    positions.iter().map(move |i| &self.rules[*i])
  }
}
