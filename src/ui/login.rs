use iced::widget::{button, column, container, row, text, text_input};
use iced::{Element, Length};

use super::BOLD;
use crate::state::session::LoginForm;
use crate::Message;

/// Widget id of the username field, focused when the dialog opens
pub fn username_input_id() -> text_input::Id {
    text_input::Id::new("login-username")
}

pub fn login_dialog(form: &LoginForm) -> Element<'_, Message> {
    let submit = button("Sign In")
        .on_press_maybe(form.can_submit().then_some(Message::SubmitLogin))
        .style(button::primary)
        .padding(10);

    let content = column![
        text("Sign In").size(24).font(BOLD),
        text("Pick a display name to track your progress.").size(14),
        text_input("Your name", &form.username)
            .id(username_input_id())
            .on_input(Message::LoginUsernameChanged)
            .on_submit(Message::SubmitLogin)
            .padding(10),
        row![
            button("Cancel")
                .on_press(Message::CloseLogin)
                .style(button::secondary)
                .padding(10),
            submit,
        ]
        .spacing(12),
    ]
    .spacing(16);

    container(content)
        .width(Length::Fixed(380.0))
        .padding(24)
        .style(container::bordered_box)
        .into()
}
