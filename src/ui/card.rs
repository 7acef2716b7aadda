use std::path::Path;

use iced::widget::{button, column, container, horizontal_space, image, row, text};
use iced::{ContentFit, Element, Length};

use super::{badge, BOLD};
use crate::state::data::Course;
use crate::Message;

/// Height of the cover area on cards and in the detail panel
pub const COVER_HEIGHT: f32 = 180.0;

/// Character budget for the description shown on a card
const EXCERPT_CHARS: usize = 110;

/// Cover image when `course.image` is a local file, otherwise a
/// placeholder tile labelled with the category.
pub fn cover(course: &Course, height: f32) -> Element<'_, Message> {
    let path = Path::new(&course.image);
    if !course.image.is_empty() && path.is_file() {
        return image(image::Handle::from_path(path))
            .width(Length::Fill)
            .height(height)
            .content_fit(ContentFit::Cover)
            .into();
    }

    container(text(&course.category).size(18))
        .width(Length::Fill)
        .height(height)
        .center_x(Length::Fill)
        .center_y(height)
        .style(container::rounded_box)
        .into()
}

/// A clickable course tile for the grid
pub fn course_card(course: &Course, width: f32) -> Element<'_, Message> {
    let mut badges = row![badge(&course.category), badge(&course.level)].spacing(8);
    if course.completed {
        badges = badges.push(horizontal_space()).push(badge("✓ Completed"));
    }

    let content = column![
        cover(course, COVER_HEIGHT),
        badges,
        text(&course.title).size(20).font(BOLD),
        text(excerpt(&course.description, EXCERPT_CHARS)).size(14),
        row![
            text(format!("📖 {} lessons", course.lessons)).size(14),
            text(format!("🕒 {}", course.duration)).size(14),
        ]
        .spacing(16),
        text(&course.instructor).size(14).font(BOLD),
    ]
    .spacing(12)
    .padding(16);

    button(content)
        .width(width)
        .on_press(Message::OpenCourse(course.id))
        .style(button::secondary)
        .into()
}

/// Shorten `text` to at most `max_chars` characters, ending on a word
/// boundary with an ellipsis when anything was cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let cut: String = text.chars().take(max_chars).collect();
    let trimmed = match cut.rfind(char::is_whitespace) {
        Some(space) if space > 0 => &cut[..space],
        _ => cut.as_str(),
    };
    format!("{}…", trimmed.trim_end_matches(|c: char| c.is_ascii_punctuation()))
}
