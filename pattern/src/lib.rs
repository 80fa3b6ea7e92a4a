/* Description: Regular pattern algebra lowered to nondeterministic automata.

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

//! Regular pattern algebra lowered to nondeterministic automata.
//!
//! Patterns are built directly as expression trees; there is no surface
//! syntax parser. [`Pattern::to_nfa_design`] performs the Thompson
//! construction, numbering states from an explicit [`StateAllocator`].
//!
//! ```
//! use computation_pattern::Pattern;
//!
//! let p = Pattern::repeat(Pattern::choose(
//!   Pattern::concatenate(Pattern::literal('a'), Pattern::literal('b')),
//!   Pattern::literal('a'),
//! ));
//! assert_eq!(p.to_string(), "(ab|a)*");
//! assert_eq!(format!("{p:#}"), "/(ab|a)*/");
//! assert!(p.matches("abaab"));
//! assert!(!p.matches("bbba"));
//! ```

#![warn(rustdoc::missing_crate_level_docs)]
// #![warn(missing_docs)]
#![deny(unsafe_code)]
/* Ensure any doctest warnings fails the doctest! */
#![doc(test(attr(deny(warnings))))]

pub mod ast;
pub mod compile;

pub use ast::Pattern;
pub use compile::{FreshState, StateAllocator};

static_assertions::assert_impl_all!(Pattern<char>: Send, Sync);
