// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/views/footer.rs
//
// Location footer: one-shot fix coordinates or a status hint.

use cosmic::Element;
use cosmic::iced::{Alignment, Font, Length};
use cosmic::widget::{container, icon, text};

use crate::config::AppConfig;
use crate::fl;
use crate::ui::{AppMessage, AppModel};

pub fn view<'a>(model: &'a AppModel, config: &'a AppConfig) -> Element<'a, AppMessage> {
    let row = if !config.show_location {
        cosmic::widget::row().push(text::caption(fl!("location-hidden")))
    } else if let Some(location) = model.location {
        cosmic::widget::row()
            .spacing(8)
            .align_y(Alignment::Center)
            .push(icon::from_name("find-location-symbolic").size(16).icon())
            .push(text::body(location.to_string()).font(Font::MONOSPACE))
    } else if model.permission.granted() {
        cosmic::widget::row().push(text::caption(fl!("searching-location")))
    } else {
        // Nothing to report before the sensors are enabled.
        cosmic::widget::row()
    };

    container(row)
        .width(Length::Fill)
        .padding([4.0, 16.0])
        .center_x(Length::Fill)
        .into()
}
