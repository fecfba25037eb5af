// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/views/readout.rs
//
// Digital heading readout: rounded degrees plus compass point.

use cosmic::Element;
use cosmic::iced::{Alignment, Font};
use cosmic::widget::text;

use crate::ui::{AppMessage, AppModel};

pub fn view<'a>(model: &AppModel) -> Element<'a, AppMessage> {
    let degrees = text::title1(format!("{:.0}°", model.heading)).font(Font::MONOSPACE);
    let direction = text::title4(model.direction().label());

    cosmic::widget::column()
        .spacing(4)
        .align_x(Alignment::Center)
        .push(degrees)
        .push(direction)
        .into()
}
