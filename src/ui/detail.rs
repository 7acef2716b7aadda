use iced::widget::{button, column, container, horizontal_space, row, scrollable, text};
use iced::{Element, Length};

use super::card::cover;
use super::{badge, BOLD};
use crate::state::data::Course;
use crate::Message;

/// Label of the completion toggle for the course's current state
pub fn toggle_label(course: &Course) -> &'static str {
    if course.completed {
        "✓ Mark as Incomplete"
    } else {
        "✓ Mark as Complete"
    }
}

fn fact<'a>(label: &'a str, value: String) -> Element<'a, Message> {
    column![text(label).size(13), text(value).font(BOLD)]
        .spacing(2)
        .width(Length::Fill)
        .into()
}

/// Modal content for the course currently shown
pub fn detail_panel(course: &Course) -> Element<'_, Message> {
    let title = row![
        text(&course.title).size(26).font(BOLD),
        horizontal_space(),
        button("✕").on_press(Message::CloseDetail).style(button::text),
    ];

    let mut badges = row![badge(&course.category), badge(&course.level)].spacing(8);
    if course.completed {
        badges = badges.push(badge("✓ Completed"));
    }

    let toggle = button(text(toggle_label(course)))
        .on_press(Message::ToggleComplete(course.id))
        .width(Length::Fill)
        .padding(10)
        .style(if course.completed {
            button::secondary
        } else {
            button::primary
        });

    // no player yet, so the button stays disabled
    let start = button("▶ Start Learning").width(Length::Fill).padding(10);

    let body = column![
        title,
        cover(course, 260.0),
        badges,
        column![
            text("About this course").size(18).font(BOLD),
            text(&course.description),
        ]
        .spacing(8),
        container(
            row![
                fact("Lessons", format!("{} lessons", course.lessons)),
                fact("Duration", course.duration.clone()),
            ]
            .spacing(16)
        )
        .padding(16)
        .style(container::rounded_box),
        column![
            text("Instructor").size(18).font(BOLD),
            text(&course.instructor),
        ]
        .spacing(8),
        row![toggle, start].spacing(12),
    ]
    .spacing(20);

    container(scrollable(body).height(Length::Shrink))
        .max_width(760)
        .max_height(640)
        .padding(24)
        .style(container::bordered_box)
        .into()
}
