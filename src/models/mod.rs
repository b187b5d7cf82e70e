// SPDX-License-Identifier: MIT

//! Domain layer: the session-scoped word list collection.

pub mod word_list;
