/* Description: Finite, pushdown and Turing machine simulation over shared rulebooks.

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

//! Finite, pushdown and Turing machine simulation over shared rulebooks.
//!
//! Every automaton family follows the same shape: a set of immutable rules is
//! collected into a *rulebook*, which is queried against the automaton's
//! current *configuration*. A *design* owns the rulebook and its accept states,
//! and stamps out fresh automaton instances which borrow from it.
//!
//! ```
//! use computation_automata::{dfa::*, rule::FARule};
//!
//! let rulebook = DFARulebook::new([
//!   FARule::new(1, Some('a'), 2),
//!   FARule::new(1, Some('b'), 1),
//!   FARule::new(2, Some('a'), 2),
//!   FARule::new(2, Some('b'), 3),
//!   FARule::new(3, Some('a'), 3),
//!   FARule::new(3, Some('b'), 3),
//! ]);
//! let design = DFADesign::new(1, [3], rulebook);
//! assert!(design.accepts("baba").unwrap());
//! assert!(!design.accepts("baa").unwrap());
//! ```

#![warn(rustdoc::missing_crate_level_docs)]
// #![warn(missing_docs)]
#![deny(unsafe_code)]
/* Ensure any doctest warnings fails the doctest! */
#![doc(test(attr(deny(warnings))))]

use core::hash::BuildHasherDefault;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;

pub mod determinize;
pub mod dfa;
pub mod error;
pub mod limits;
pub mod nfa;
pub mod pushdown;
pub mod rule;
pub mod simple_eval;
pub mod state_set;
pub mod turing;

pub use error::AutomatonError;
pub use limits::Limits;
pub use state_set::StateSet;

/// Insertion-ordered set using the fx hash, so iteration order (and therefore
/// the numbering of discovered states) is reproducible across runs.
pub type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;

pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

pub mod alphabet {
  use core::{fmt, hash::Hash};

  /// A single input symbol. Epsilon is never a symbol: rules spell a free
  /// move as `None` in their `Option<Sym>` field.
  pub trait Symbol: Copy+Eq+Hash+fmt::Debug {}

  impl<T> Symbol for T where T: Copy+Eq+Hash+fmt::Debug {}
}

pub mod state {
  use core::{fmt, hash::Hash};

  /// An opaque state identity. Only equality and hashing are ever consulted.
  pub trait State: Clone+Eq+Hash+fmt::Debug {}

  impl<T> State for T where T: Clone+Eq+Hash+fmt::Debug {}
}

pub mod input {
  use crate::alphabet::Symbol;

  /// A fully materialized sequence of input symbols.
  pub trait Input<Sym> {
    fn symbols(&self) -> impl Iterator<Item=Sym>+'_;
  }

  impl Input<char> for str {
    fn symbols(&self) -> impl Iterator<Item=char>+'_ { self.chars() }
  }

  impl Input<char> for String {
    fn symbols(&self) -> impl Iterator<Item=char>+'_ { self.chars() }
  }

  impl<Sym> Input<Sym> for [Sym]
  where Sym: Symbol
  {
    fn symbols(&self) -> impl Iterator<Item=Sym>+'_ { self.iter().copied() }
  }

  impl<Sym, const N: usize> Input<Sym> for [Sym; N]
  where Sym: Symbol
  {
    fn symbols(&self) -> impl Iterator<Item=Sym>+'_ { self.iter().copied() }
  }

  impl<Sym> Input<Sym> for Vec<Sym>
  where Sym: Symbol
  {
    fn symbols(&self) -> impl Iterator<Item=Sym>+'_ { self.iter().copied() }
  }
}

static_assertions::assert_impl_all!(dfa::DFADesign<u32, char>: Send, Sync);
static_assertions::assert_impl_all!(nfa::NFADesign<u32, char>: Send, Sync);
static_assertions::assert_impl_all!(pushdown::dpda::DPDADesign<u32, char>: Send, Sync);
static_assertions::assert_impl_all!(pushdown::npda::NPDADesign<u32, char>: Send, Sync);
static_assertions::assert_impl_all!(turing::DTMDesign<u32, char>: Send, Sync);
