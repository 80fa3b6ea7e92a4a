/* Description: Thompson construction of NFA designs from patterns.

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

//! Thompson construction of NFA designs from patterns.

use core::{convert::Infallible, fmt};

use computation_automata::{
  alphabet::Symbol, input::Input, nfa::NFADesign, simple_eval::SimpleEvaluator,
};
use log::debug;

use crate::ast::Pattern;

/// A state minted by a [`StateAllocator`]. Only equality and hashing are
/// meaningful; the number just makes it printable.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct FreshState(usize);

impl fmt::Debug for FreshState {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "q{}", self.0) }
}

/// Hands out states which are distinct from every other state it has handed
/// out. Compiling several patterns through one allocator keeps all of their
/// states disjoint.
#[derive(Debug, Default)]
pub struct StateAllocator {
  next: usize,
}

impl StateAllocator {
  pub const fn new() -> Self { Self { next: 0 } }

  pub fn fresh(&mut self) -> FreshState {
    let state = FreshState(self.next);
    self.next += 1;
    state
  }

  /// How many states have been handed out so far.
  pub const fn allocated(&self) -> usize { self.next }
}

mod builder {
  use computation_automata::{nfa::NFARulebook, rule::FARule};

  use super::*;

  /// A partially assembled NFA. Fragments are only ever combined, never
  /// shared, so their rule lists can be moved rather than copied.
  #[derive(Debug)]
  pub struct Fragment<Sym> {
    pub start: FreshState,
    pub accept_states: Vec<FreshState>,
    pub rules: Vec<FARule<FreshState, Sym>>,
  }

  impl<Sym> Fragment<Sym>
  where Sym: Symbol
  {
    fn for_empty(alloc: &mut StateAllocator) -> Self {
      let start = alloc.fresh();
      Self {
        start,
        accept_states: vec![start],
        rules: Vec::new(),
      }
    }

    fn for_literal(sym: Sym, alloc: &mut StateAllocator) -> Self {
      let start = alloc.fresh();
      let accept = alloc.fresh();
      Self {
        start,
        accept_states: vec![accept],
        rules: vec![FARule::new(start, Some(sym), accept)],
      }
    }

    fn for_concatenation(first: Self, second: Self) -> Self {
      let Self {
        start,
        accept_states: first_accepts,
        mut rules,
      } = first;
      let Self {
        start: second_start,
        accept_states,
        rules: second_rules,
      } = second;

      rules.extend(second_rules);
      /* Every way of finishing the first half may begin the second. */
      rules.extend(
        first_accepts
          .into_iter()
          .map(|accept| FARule::free(accept, second_start)),
      );
      Self {
        start,
        accept_states,
        rules,
      }
    }

    fn for_alternation(first: Self, second: Self, alloc: &mut StateAllocator) -> Self {
      let start = alloc.fresh();
      let Self {
        start: first_start,
        mut accept_states,
        mut rules,
      } = first;
      let Self {
        start: second_start,
        accept_states: second_accepts,
        rules: second_rules,
      } = second;

      accept_states.extend(second_accepts);
      rules.extend(second_rules);
      rules.push(FARule::free(start, first_start));
      rules.push(FARule::free(start, second_start));
      Self {
        start,
        accept_states,
        rules,
      }
    }

    fn for_repeat(inner: Self, alloc: &mut StateAllocator) -> Self {
      let start = alloc.fresh();
      let Self {
        start: inner_start,
        mut accept_states,
        mut rules,
      } = inner;

      /* Loop back from every accept state, then admit zero repetitions via the
       * new start state. */
      rules.extend(
        accept_states
          .iter()
          .map(|accept| FARule::free(*accept, inner_start)),
      );
      rules.push(FARule::free(start, inner_start));
      accept_states.push(start);
      Self {
        start,
        accept_states,
        rules,
      }
    }

    pub fn recursively_construct_from_pattern(
      pattern: &Pattern<Sym>,
      alloc: &mut StateAllocator,
    ) -> Self {
      match pattern {
        Pattern::Empty => Self::for_empty(alloc),
        Pattern::Literal(sym) => Self::for_literal(*sym, alloc),
        Pattern::Concatenate(first, second) => {
          let first = Self::recursively_construct_from_pattern(first, alloc);
          let second = Self::recursively_construct_from_pattern(second, alloc);
          Self::for_concatenation(first, second)
        },
        Pattern::Choose(first, second) => {
          let first = Self::recursively_construct_from_pattern(first, alloc);
          let second = Self::recursively_construct_from_pattern(second, alloc);
          Self::for_alternation(first, second, alloc)
        },
        Pattern::Repeat(inner) => {
          let inner = Self::recursively_construct_from_pattern(inner, alloc);
          Self::for_repeat(inner, alloc)
        },
      }
    }

    pub fn into_nfa_design(self) -> NFADesign<FreshState, Sym> {
      let Self {
        start,
        accept_states,
        rules,
      } = self;
      NFADesign::new(start, accept_states, NFARulebook::new(rules))
    }
  }
}

impl<Sym> Pattern<Sym>
where Sym: Symbol
{
  /// Compile with states drawn from `alloc`, so they are disjoint from those of
  /// anything else compiled through it.
  pub fn to_nfa_design_in(&self, alloc: &mut StateAllocator) -> NFADesign<FreshState, Sym> {
    let first_state = alloc.allocated();
    let fragment = builder::Fragment::recursively_construct_from_pattern(self, alloc);
    debug!(
      "compiled pattern into {} states and {} rules",
      alloc.allocated() - first_state,
      fragment.rules.len()
    );
    fragment.into_nfa_design()
  }

  pub fn to_nfa_design(&self) -> NFADesign<FreshState, Sym> {
    self.to_nfa_design_in(&mut StateAllocator::new())
  }

  /// Compiles afresh on every call. Compile once with
  /// [`Self::to_nfa_design`] to match many inputs.
  pub fn matches<I>(&self, input: &I) -> bool
  where I: Input<Sym>+?Sized {
    self.to_nfa_design().accepts(input)
  }
}

impl<Sym> SimpleEvaluator<Sym> for Pattern<Sym>
where Sym: Symbol
{
  type Err = Infallible;

  fn evaluate<I>(&self, input: &I) -> Result<bool, Self::Err>
  where I: Input<Sym>+?Sized {
    Ok(self.matches(input))
  }
}
