/* Description: Order-irrelevant sets of states.

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

//! Order-irrelevant sets of states.
//!
//! A [`StateSet`] is compared by set equality and hashed independently of
//! insertion order, so it can itself serve as the identity of a state (which is
//! exactly what subset construction needs).

use core::{
  fmt,
  hash::{Hash, Hasher},
};

use rustc_hash::FxHasher;

use crate::{state::State, FxIndexSet};

#[derive(Clone)]
pub struct StateSet<S>(FxIndexSet<S>);

impl<S> StateSet<S>
where S: State
{
  pub fn new() -> Self { Self(FxIndexSet::default()) }

  pub fn singleton(state: S) -> Self {
    let mut ret = Self::new();
    ret.insert(state);
    ret
  }

  /// Returns whether the state was newly added.
  pub fn insert(&mut self, state: S) -> bool { self.0.insert(state) }

  pub fn contains(&self, state: &S) -> bool { self.0.contains(state) }

  pub fn len(&self) -> usize { self.0.len() }

  pub fn is_empty(&self) -> bool { self.0.is_empty() }

  pub fn iter(&self) -> impl ExactSizeIterator<Item=&S>+'_ { self.0.iter() }

  pub fn is_subset(&self, other: &Self) -> bool { self.0.is_subset(&other.0) }

  pub fn is_disjoint(&self, other: &Self) -> bool { self.0.is_disjoint(&other.0) }
}

impl<S> Default for StateSet<S>
where S: State
{
  fn default() -> Self { Self::new() }
}

impl<S> FromIterator<S> for StateSet<S>
where S: State
{
  fn from_iter<T: IntoIterator<Item=S>>(iter: T) -> Self { Self(iter.into_iter().collect()) }
}

impl<S> Extend<S> for StateSet<S>
where S: State
{
  fn extend<T: IntoIterator<Item=S>>(&mut self, iter: T) { self.0.extend(iter); }
}

impl<S> IntoIterator for StateSet<S> {
  type Item = S;
  type IntoIter = indexmap::set::IntoIter<S>;

  fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl<'a, S> IntoIterator for &'a StateSet<S> {
  type Item = &'a S;
  type IntoIter = indexmap::set::Iter<'a, S>;

  fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl<S> PartialEq for StateSet<S>
where S: State
{
  fn eq(&self, other: &Self) -> bool { self.len() == other.len() && self.is_subset(other) }
}

impl<S> Eq for StateSet<S> where S: State {}

impl<S> Hash for StateSet<S>
where S: State
{
  fn hash<H: Hasher>(&self, state: &mut H) {
    /* Sum the member hashes so that insertion order cannot leak into the
     * result. */
    let combined: u64 = self
      .0
      .iter()
      .map(|s| {
        let mut h = FxHasher::default();
        s.hash(&mut h);
        h.finish()
      })
      .fold(0, u64::wrapping_add);
    state.write_usize(self.len());
    state.write_u64(combined);
  }
}

impl<S> fmt::Debug for StateSet<S>
where S: fmt::Debug
{
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result { f.debug_set().entries(self.0.iter()).finish() }
}
