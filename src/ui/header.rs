use iced::widget::{button, column, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use super::BOLD;
use crate::state::session::Session;
use crate::Message;

/// Top bar: branding, catalog picker and the sign-in area
pub fn header(session: &Session, completed: usize) -> Element<'_, Message> {
    let brand = row![
        text("🎓").size(32),
        column![
            text("LearnHub").size(24).font(BOLD),
            text("Your Learning Platform").size(12),
        ],
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    let open_catalog = button("Open Catalog…")
        .on_press(Message::OpenCatalog)
        .style(button::text);

    let account: Element<'_, Message> = match session.username() {
        Some(username) => row![
            column![
                text(username).font(BOLD),
                text(format!("{} courses completed", completed)).size(12),
            ]
            .align_x(Alignment::End),
            button("Logout").on_press(Message::Logout).style(button::text),
        ]
        .spacing(12)
        .align_y(Alignment::Center)
        .into(),
        None => button("Sign In")
            .on_press(Message::OpenLogin)
            .padding(10)
            .into(),
    };

    container(
        row![brand, horizontal_space(), open_catalog, account]
            .spacing(16)
            .align_y(Alignment::Center),
    )
    .width(Length::Fill)
    .padding([16, 32])
    .style(container::rounded_box)
    .into()
}
