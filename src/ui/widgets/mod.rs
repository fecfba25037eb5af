// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/widgets/mod.rs
//
// Custom widgets.

pub mod compass_face;

pub use compass_face::compass_face;
