/* Description: Pattern expression trees and their printable form.

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

//! Pattern expression trees and their printable form.

use core::fmt;

#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Pattern<Sym> {
  /// Matches only the empty string.
  Empty,
  /// `a`
  Literal(Sym),
  /// `<pattern><pattern>`
  Concatenate(Box<Pattern<Sym>>, Box<Pattern<Sym>>),
  /// `<pattern>|<pattern>`
  Choose(Box<Pattern<Sym>>, Box<Pattern<Sym>>),
  /// `<pattern>*`
  Repeat(Box<Pattern<Sym>>),
}

impl<Sym> Pattern<Sym> {
  pub const fn empty() -> Self { Self::Empty }

  pub const fn literal(sym: Sym) -> Self { Self::Literal(sym) }

  pub fn concatenate(first: Self, second: Self) -> Self {
    Self::Concatenate(Box::new(first), Box::new(second))
  }

  pub fn choose(first: Self, second: Self) -> Self { Self::Choose(Box::new(first), Box::new(second)) }

  pub fn repeat(inner: Self) -> Self { Self::Repeat(Box::new(inner)) }

  /// How tightly this node binds when printed. An operand is parenthesized
  /// exactly when it binds more loosely than its parent.
  pub const fn precedence(&self) -> u8 {
    match self {
      Self::Empty | Self::Literal(_) => 3,
      Self::Repeat(_) => 2,
      Self::Concatenate(..) => 1,
      Self::Choose(..) => 0,
    }
  }
}

impl<Sym> Pattern<Sym>
where Sym: fmt::Display
{
  fn fmt_bracketed(&self, outer_precedence: u8, f: &mut fmt::Formatter) -> fmt::Result {
    if self.precedence() < outer_precedence {
      write!(f, "({})", self)
    } else {
      write!(f, "{}", self)
    }
  }
}

impl<Sym> fmt::Debug for Pattern<Sym>
where Sym: fmt::Debug
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Self::Empty => write!(f, "Pattern::Empty"),
      Self::Literal(sym) => write!(f, "Pattern::Literal({:?})", sym),
      Self::Concatenate(first, second) => {
        write!(f, "Pattern::Concatenate({:?}, {:?})", first, second)
      },
      Self::Choose(first, second) => write!(f, "Pattern::Choose({:?}, {:?})", first, second),
      Self::Repeat(inner) => write!(f, "Pattern::Repeat({:?})", inner),
    }
  }
}

/// `{}` prints the pattern as a regular expression, `{:#}` additionally wraps
/// it in slashes.
impl<Sym> fmt::Display for Pattern<Sym>
where Sym: fmt::Display
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    if f.alternate() {
      return write!(f, "/{}/", self);
    }
    let precedence = self.precedence();
    match self {
      Self::Empty => Ok(()),
      Self::Literal(sym) => write!(f, "{}", sym),
      Self::Concatenate(first, second) => {
        first.fmt_bracketed(precedence, f)?;
        second.fmt_bracketed(precedence, f)
      },
      Self::Choose(first, second) => {
        first.fmt_bracketed(precedence, f)?;
        write!(f, "|")?;
        second.fmt_bracketed(precedence, f)
      },
      Self::Repeat(inner) => {
        inner.fmt_bracketed(precedence, f)?;
        write!(f, "*")
      },
    }
  }
}

#[cfg(any(test, feature = "proptest"))]
pub mod arbitrary {
  use proptest::{prelude::*, sample::select};

  use super::Pattern;

  /// Shape of randomly generated patterns.
  #[derive(Debug, Clone)]
  pub struct PatternParams {
    pub alphabet: Vec<char>,
    pub depth: u32,
    pub desired_size: u32,
    pub expected_branch_size: u32,
  }

  impl Default for PatternParams {
    fn default() -> Self {
      Self {
        alphabet: vec!['a', 'b', 'c'],
        depth: 4,
        desired_size: 16,
        expected_branch_size: 2,
      }
    }
  }

  impl Arbitrary for Pattern<char> {
    type Parameters = PatternParams;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
      let PatternParams {
        alphabet,
        depth,
        desired_size,
        expected_branch_size,
      } = args;
      let leaves = prop_oneof![
        1 => Just(Self::Empty),
        4 => select(alphabet).prop_map(Self::Literal),
      ];
      leaves
        .prop_recursive(depth, desired_size, expected_branch_size, |inner| {
          prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Self::concatenate(a, b)),
            (inner.clone(), inner.clone()).prop_map(|(a, b)| Self::choose(a, b)),
            inner.prop_map(Self::repeat),
          ]
        })
        .boxed()
    }
  }
}
