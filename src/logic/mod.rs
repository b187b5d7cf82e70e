// SPDX-License-Identifier: MIT

//! Business logic: input normalization, list formatting, and export I/O.

pub mod wordlist;
