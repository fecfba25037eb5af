// SPDX-License-Identifier: GPL-3.0-or-later
// src/ui/widgets/compass_face.rs
//
// Canvas widget drawing the compass face, ticks, labels and needle.

use cosmic::iced::alignment::{Horizontal, Vertical};
use cosmic::iced::font::Weight;
use cosmic::iced::{Color, Font, Length, Pixels, Point, Radians, Rectangle, Vector, mouse};
use cosmic::iced_widget::canvas::{self, Cache, Geometry, Path, Stroke, Text};
use cosmic::{Element, Renderer, Theme};

use crate::constant::{TICK_MAJOR_LEN, TICK_MINOR_LEN, TICK_PLAIN_LEN, TICK_STEP_DEG};
use crate::ui::AppMessage;

const FACE_COLOR: Color = Color::from_rgb(0.10, 0.12, 0.16);
const RING_COLOR: Color = Color::from_rgb(0.35, 0.38, 0.45);
const TICK_COLOR: Color = Color::from_rgb(0.62, 0.66, 0.74);
const LABEL_COLOR: Color = Color::from_rgb(0.85, 0.87, 0.92);
const NORTH_COLOR: Color = Color::from_rgb(0.86, 0.21, 0.18);
const NEEDLE_COLOR: Color = Color::from_rgb(0.95, 0.95, 0.97);
const PIVOT_COLOR: Color = Color::from_rgb(0.16, 0.18, 0.24);

const RING_WIDTH: f32 = 4.0;
const TICK_WIDTH: f32 = 1.5;
const NEEDLE_WIDTH: f32 = 10.0;
const FACE_PADDING: f32 = 10.0;
const LABEL_SIZE: f32 = 24.0;
const LABEL_INSET: f32 = 18.0;
const PIVOT_RADIUS: f32 = 7.0;
const LUBBER_SIZE: f32 = 9.0;

pub struct CompassFace<'a> {
    heading: f64,
    cache: &'a Cache<Renderer>,
}

/// Build the compass face canvas for the given heading.
pub fn compass_face(heading: f64, cache: &Cache<Renderer>) -> Element<'_, AppMessage> {
    cosmic::iced_widget::canvas(CompassFace { heading, cache })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

impl canvas::Program<AppMessage, Theme, Renderer> for CompassFace<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry<Renderer>> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            let center = frame.center();
            let radius = center.x.min(center.y) - FACE_PADDING;
            if radius <= 0.0 {
                return;
            }

            // Dial and outer ring.
            frame.fill(&Path::circle(center, radius), FACE_COLOR);
            frame.stroke(
                &Path::circle(center, radius),
                Stroke::default()
                    .with_color(RING_COLOR)
                    .with_width(RING_WIDTH),
            );

            // Degree ticks: long on cardinals, medium every 30 degrees.
            for deg in (0..360).step_by(TICK_STEP_DEG as usize) {
                let len = if deg % 90 == 0 {
                    TICK_MAJOR_LEN
                } else if deg % 30 == 0 {
                    TICK_MINOR_LEN
                } else {
                    TICK_PLAIN_LEN
                };

                frame.with_save(|frame| {
                    frame.translate(Vector::new(center.x, center.y));
                    frame.rotate(Radians((deg as f32).to_radians()));
                    frame.stroke(
                        &Path::line(
                            Point::new(0.0, -radius + RING_WIDTH),
                            Point::new(0.0, -radius + RING_WIDTH + len),
                        ),
                        Stroke::default()
                            .with_color(TICK_COLOR)
                            .with_width(TICK_WIDTH),
                    );
                });
            }

            // Cardinal labels, drawn upright on the fixed dial.
            let label_radius = radius - TICK_MAJOR_LEN - LABEL_INSET;
            let cardinals = [
                ("N", 0.0_f32, NORTH_COLOR),
                ("E", 90.0, LABEL_COLOR),
                ("S", 180.0, LABEL_COLOR),
                ("W", 270.0, LABEL_COLOR),
            ];
            for (label, deg, color) in cardinals {
                let rad = deg.to_radians();
                frame.fill_text(Text {
                    content: label.to_string(),
                    position: Point::new(
                        center.x + label_radius * rad.sin(),
                        center.y - label_radius * rad.cos(),
                    ),
                    color,
                    size: Pixels(LABEL_SIZE),
                    font: Font {
                        weight: Weight::Bold,
                        ..Font::DEFAULT
                    },
                    horizontal_alignment: Horizontal::Center,
                    vertical_alignment: Vertical::Center,
                    ..Text::default()
                });
            }

            // Needle, rotated clockwise by the heading.
            frame.with_save(|frame| {
                frame.translate(Vector::new(center.x, center.y));
                frame.rotate(Radians((self.heading as f32).to_radians()));

                let north_len = radius * 0.62;
                let south_len = radius * 0.42;
                let half = NEEDLE_WIDTH / 2.0;

                let north = Path::new(|b| {
                    b.move_to(Point::new(0.0, -north_len));
                    b.line_to(Point::new(-half, 0.0));
                    b.line_to(Point::new(half, 0.0));
                    b.close();
                });
                frame.fill(&north, NORTH_COLOR);

                let south = Path::new(|b| {
                    b.move_to(Point::new(0.0, south_len));
                    b.line_to(Point::new(-half, 0.0));
                    b.line_to(Point::new(half, 0.0));
                    b.close();
                });
                frame.fill(&south, NEEDLE_COLOR);
            });

            // Pivot.
            frame.fill(&Path::circle(center, PIVOT_RADIUS), PIVOT_COLOR);
            frame.fill(&Path::circle(center, PIVOT_RADIUS * 0.55), NEEDLE_COLOR);

            // Lubber mark at the top of the dial.
            let lubber = Path::new(|b| {
                b.move_to(Point::new(center.x, center.y - radius + LUBBER_SIZE));
                b.line_to(Point::new(center.x - LUBBER_SIZE * 0.6, center.y - radius - 2.0));
                b.line_to(Point::new(center.x + LUBBER_SIZE * 0.6, center.y - radius - 2.0));
                b.close();
            });
            frame.fill(&lubber, NORTH_COLOR);
        });

        vec![geometry]
    }
}
