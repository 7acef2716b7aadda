/// View layer
///
/// Pure functions from state to iced elements. Nothing in here mutates
/// state; every interaction is emitted as a `Message`.
use iced::widget::{center, container, mouse_area, opaque, stack, text};
use iced::{Color, Element, Font};

use crate::Message;

pub mod card;
pub mod catalog;
pub mod detail;
pub mod header;
pub mod login;
pub mod toast;

pub(crate) const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

/// Show `content` centered above `base`, dimming the page behind it.
/// Clicking the backdrop emits `on_blur`.
pub fn modal<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme| {
                container::Style {
                    background: Some(
                        Color {
                            a: 0.8,
                            ..Color::BLACK
                        }
                        .into(),
                    ),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

/// Small pill label (category, level, completion)
pub fn badge<'a>(label: impl text::IntoFragment<'a>) -> Element<'a, Message> {
    container(text(label).size(12))
        .padding([2, 8])
        .style(container::rounded_box)
        .into()
}
