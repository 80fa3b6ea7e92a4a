/* Description: Finite, pushdown and Turing machine simulators with a regular pattern compiler.

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

//! Finite, pushdown and Turing machine simulators with a regular pattern
//! compiler.
//!
//! The machinery lives in [`automata`] and [`pattern`]; this crate ties them
//! together into [`Regexp`], a pattern compiled once to a DFA.
//!
//! ```
//! use computation::{pattern::Pattern, Regexp};
//!
//! let r = Regexp::new(Pattern::repeat(Pattern::concatenate(
//!   Pattern::literal('a'),
//!   Pattern::choose(Pattern::empty(), Pattern::literal('b')),
//! )));
//! assert_eq!(r.to_string(), "/(a(|b))*/");
//! assert!(r.is_match("abaab"));
//! assert!(!r.is_match("bbba"));
//! ```

#![warn(rustdoc::missing_crate_level_docs)]
// #![warn(missing_docs)]
#![deny(unsafe_code)]
/* Ensure any doctest warnings fails the doctest! */
#![doc(test(attr(deny(warnings))))]

pub use computation_automata as automata;
pub use computation_pattern as pattern;

pub mod regexp {
  use core::{convert::Infallible, fmt};

  use computation_automata::{
    alphabet::Symbol, dfa::DFADesign, error::AutomatonError, input::Input, nfa::NFADesign,
    simple_eval::SimpleEvaluator, StateSet,
  };
  use computation_pattern::{FreshState, Pattern};
  use log::debug;

  /// A pattern determinized up front, so that matching costs one rule lookup
  /// per input symbol.
  #[derive(Debug, Clone)]
  pub struct Regexp<Sym> {
    pattern: Pattern<Sym>,
    nfa_design: NFADesign<FreshState, Sym>,
    dfa_design: DFADesign<StateSet<FreshState>, Sym>,
  }

  impl<Sym> Regexp<Sym>
  where Sym: Symbol
  {
    pub fn new(pattern: Pattern<Sym>) -> Self {
      let nfa_design = pattern.to_nfa_design();
      let dfa_design = nfa_design.to_dfa_design();
      debug!(
        "compiled regexp to {} NFA rules and {} DFA rules",
        nfa_design.rulebook().rules().len(),
        dfa_design.rulebook().rules().len()
      );
      Self {
        pattern,
        nfa_design,
        dfa_design,
      }
    }

    pub fn pattern(&self) -> &Pattern<Sym> { &self.pattern }

    pub fn nfa_design(&self) -> &NFADesign<FreshState, Sym> { &self.nfa_design }

    pub fn dfa_design(&self) -> &DFADesign<StateSet<FreshState>, Sym> { &self.dfa_design }

    pub fn is_match<I>(&self, input: &I) -> bool
    where I: Input<Sym>+?Sized {
      /* The DFA has a rule for every symbol of the pattern's alphabet from
       * every state. Any other symbol has no rule, and could never be matched
       * by the pattern either. */
      match self.dfa_design.accepts(input) {
        Ok(accepted) => accepted,
        Err(AutomatonError::NoRule { .. }) => false,
        Err(e) => unreachable!("a DFA simulation can only fail to find a rule: {e}"),
      }
    }
  }

  impl<Sym> From<Pattern<Sym>> for Regexp<Sym>
  where Sym: Symbol
  {
    fn from(pattern: Pattern<Sym>) -> Self { Self::new(pattern) }
  }

  impl<Sym> fmt::Display for Regexp<Sym>
  where Sym: fmt::Display
  {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { write!(f, "{:#}", self.pattern) }
  }

  impl<Sym> SimpleEvaluator<Sym> for Regexp<Sym>
  where Sym: Symbol
  {
    type Err = Infallible;

    fn evaluate<I>(&self, input: &I) -> Result<bool, Self::Err>
    where I: Input<Sym>+?Sized {
      Ok(self.is_match(input))
    }
  }
}

pub use regexp::Regexp;

static_assertions::assert_impl_all!(Regexp<char>: Send, Sync, Clone);
