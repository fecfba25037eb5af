// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/views/header.rs
//
// Header bar buttons.

use cosmic::Element;
use cosmic::widget::{button, icon};

use crate::ui::app::ContextPage;
use crate::ui::{AppMessage, AppModel};

pub fn end(_model: &AppModel) -> Vec<Element<'_, AppMessage>> {
    vec![
        button::icon(icon::from_name("help-about-symbolic"))
            .on_press(AppMessage::ToggleContextPage(ContextPage::About))
            .into(),
    ]
}
