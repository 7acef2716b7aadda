use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, column, container, stack, text};
use iced::{Element, Length};

use crate::state::notify::{Toast, ToastKind, Toasts};
use crate::Message;

fn toast_view(toast: &Toast) -> Element<'_, Message> {
    let style = match toast.kind {
        ToastKind::Success => button::success,
        ToastKind::Info => button::primary,
        ToastKind::Error => button::danger,
    };

    // click to dismiss early
    button(text(&toast.message))
        .on_press(Message::DismissToast(toast.id))
        .style(style)
        .width(320)
        .padding(12)
        .into()
}

/// Stack the visible toasts in the bottom-right corner above `base`
pub fn overlay<'a>(base: Element<'a, Message>, toasts: &'a Toasts) -> Element<'a, Message> {
    if toasts.is_empty() {
        return base;
    }

    let list = column(toasts.iter().map(toast_view)).spacing(8);

    stack![
        base,
        container(list)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .padding(24),
    ]
    .into()
}
