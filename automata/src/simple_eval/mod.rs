/* Description: Uniform accept/reject evaluation over automaton designs.

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

//! Uniform accept/reject evaluation over automaton designs.
//!
//! Each design already has its own `accepts`; this trait lets callers hold
//! any recognizer of a string language behind one bound.

use core::convert::Infallible;

use crate::{
  alphabet::Symbol,
  dfa::DFADesign,
  error::AutomatonError,
  input::Input,
  nfa::NFADesign,
  pushdown::{dpda::DPDADesign, npda::NPDADesign},
  state::State,
};

pub trait SimpleEvaluator<Sym> {
  type Err;

  /// Read the whole of `input` from a fresh start and report acceptance.
  fn evaluate<I>(&self, input: &I) -> Result<bool, Self::Err>
  where I: Input<Sym>+?Sized;
}

impl<S, Sym> SimpleEvaluator<Sym> for DFADesign<S, Sym>
where
  S: State,
  Sym: Symbol,
{
  type Err = AutomatonError;

  fn evaluate<I>(&self, input: &I) -> Result<bool, Self::Err>
  where I: Input<Sym>+?Sized {
    self.accepts(input)
  }
}

impl<S, Sym> SimpleEvaluator<Sym> for NFADesign<S, Sym>
where
  S: State,
  Sym: Symbol,
{
  type Err = Infallible;

  fn evaluate<I>(&self, input: &I) -> Result<bool, Self::Err>
  where I: Input<Sym>+?Sized {
    Ok(self.accepts(input))
  }
}

impl<S, Sym> SimpleEvaluator<Sym> for DPDADesign<S, Sym>
where
  S: State,
  Sym: Symbol,
{
  type Err = AutomatonError;

  fn evaluate<I>(&self, input: &I) -> Result<bool, Self::Err>
  where I: Input<Sym>+?Sized {
    self.accepts(input)
  }
}

impl<S, Sym> SimpleEvaluator<Sym> for NPDADesign<S, Sym>
where
  S: State,
  Sym: Symbol,
{
  type Err = AutomatonError;

  fn evaluate<I>(&self, input: &I) -> Result<bool, Self::Err>
  where I: Input<Sym>+?Sized {
    self.accepts(input)
  }
}

#[cfg(test)]
mod test {
  use core::fmt;

  use proptest::{collection::vec, prelude::*};

  use super::*;
  use crate::{
    nfa::NFARulebook,
    pushdown::{dpda::DPDARulebook, npda::NPDARulebook, PDARule},
    rule::FARule,
  };

  fn agree<A, B>(a: &A, b: &B, input: &[char]) -> bool
  where
    A: SimpleEvaluator<char>,
    B: SimpleEvaluator<char>,
    A::Err: fmt::Debug,
    B::Err: fmt::Debug,
  {
    let a = a.evaluate(input).unwrap();
    let b = b.evaluate(input).unwrap();
    a == b
  }

  fn balanced_rules() -> Vec<PDARule<u32, char>> {
    vec![
      PDARule::new(1, Some('('), 2, '$', ['b', '$']),
      PDARule::new(2, Some('('), 2, 'b', ['b', 'b']),
      PDARule::new(2, Some(')'), 2, 'b', []),
      PDARule::new(2, None, 1, '$', ['$']),
    ]
  }

  #[test]
  fn finite_designs_agree() {
    let nfa = NFADesign::new(
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
    );
    let determinized = nfa.to_dfa_design();
    for input in ["", "aab", "bbbabb", "aaa", "ab"] {
      assert_eq!(
        nfa.evaluate(input),
        Ok(determinized.evaluate(input).unwrap())
      );
    }
  }

  proptest! {
    #[test]
    fn deterministic_and_nondeterministic_pushdown_agree(
      input in vec(prop_oneof![Just('('), Just(')')], 0..12),
    ) {
      let dpda = DPDADesign::new(1, '$', [1], DPDARulebook::new(balanced_rules()));
      let npda = NPDADesign::new(1, '$', [1], NPDARulebook::new(balanced_rules()));
      prop_assert!(agree(&dpda, &npda, &input));
    }
  }
}
