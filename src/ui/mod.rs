// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/mod.rs
//
// UI module root: application shell, state, messages and views.

pub mod app;
pub mod message;
pub mod model;
pub mod update;
pub mod views;
pub mod widgets;

pub use app::{ContextPage, Flags, RosaApp};
pub use message::AppMessage;
pub use model::AppModel;
