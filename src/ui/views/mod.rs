// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/views/mod.rs
//
// Main window layout.

pub mod footer;
pub mod header;
pub mod readout;

use cosmic::Element;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{button, container, text};

use crate::config::AppConfig;
use crate::fl;
use crate::ui::widgets::compass_face;
use crate::ui::{AppMessage, AppModel};

/// Render the central compass view.
pub fn view<'a>(model: &'a AppModel, _config: &'a AppConfig) -> Element<'a, AppMessage> {
    let face = container(compass_face(model.heading, &model.face_cache))
        .width(Length::Fill)
        .height(Length::FillPortion(3));

    let mut content = cosmic::widget::column()
        .spacing(12)
        .align_x(Alignment::Center)
        .push(face)
        .push(readout::view(model));

    if !model.permission.granted() {
        content = content
            .push(button::suggested(fl!("enable-sensors")).on_press(AppMessage::EnableSensors))
            .push(text::caption(fl!("sensor-hint")));
    }

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(16.0)
        .into()
}
