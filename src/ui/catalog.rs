/// Main page body: search hero, stats bar and the course grid
use iced::widget::{button, column, container, row, text, text_input, Column};
use iced::{Alignment, Element, Length};
use iced_aw::Wrap;

use super::card::course_card;
use super::BOLD;
use crate::state::catalog::Catalog;
use crate::state::data::Course;
use crate::state::search::SearchQuery;
use crate::Message;

pub fn hero(search: &SearchQuery) -> Element<'_, Message> {
    let content = column![
        text("Learn Anything, Anytime").size(40).font(BOLD),
        text("Explore our curated collection of courses and start your learning journey today")
            .size(16),
        text_input("🔍 Search courses, topics, or instructors...", search.as_str())
            .on_input(Message::SearchChanged)
            .padding(12)
            .size(16)
            .width(560),
    ]
    .spacing(20)
    .align_x(Alignment::Center);

    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding([48, 16])
        .into()
}

fn stat(value: usize, label: &'static str) -> Column<'static, Message> {
    column![text(value.to_string()).size(30).font(BOLD), text(label).size(14)]
        .align_x(Alignment::Center)
}

pub fn stats(catalog: &Catalog) -> Element<'_, Message> {
    let content = row![
        stat(catalog.len(), "Total Courses"),
        stat(catalog.completed_count(), "Completed"),
        stat(catalog.in_progress_count(), "In Progress"),
    ]
    .spacing(64);

    container(content)
        .width(Length::Fill)
        .center_x(Length::Fill)
        .padding(24)
        .style(container::rounded_box)
        .into()
}

/// Heading above the grid
pub fn heading(search: &SearchQuery) -> &'static str {
    if search.is_active() {
        "Search Results"
    } else {
        "All Courses"
    }
}

pub fn availability(count: usize) -> String {
    if count == 1 {
        "1 course available".to_string()
    } else {
        format!("{} courses available", count)
    }
}

/// The filtered course grid, or the empty state when nothing matches
pub fn course_grid<'a>(
    visible: &[&'a Course],
    search: &'a SearchQuery,
    card_width: f32,
) -> Element<'a, Message> {
    let header = column![
        text(heading(search)).size(26).font(BOLD),
        text(availability(visible.len())).size(14),
    ]
    .spacing(6);

    let body: Element<'a, Message> = if visible.is_empty() {
        let empty = column![
            text(format!("No courses found matching \"{}\"", search.as_str())).size(18),
            button("Clear Search")
                .on_press(Message::ClearSearch)
                .style(button::secondary)
                .padding(10),
        ]
        .spacing(16)
        .align_x(Alignment::Center);

        container(empty)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .padding([64, 0])
            .into()
    } else {
        let cards: Vec<Element<'a, Message>> = visible
            .iter()
            .map(|&course| course_card(course, card_width))
            .collect();

        Wrap::with_elements(cards)
            .spacing(24.0)
            .line_spacing(24.0)
            .into()
    };

    column![header, body].spacing(32).padding([48, 32]).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_follows_query() {
        let mut search = SearchQuery::default();
        assert_eq!(heading(&search), "All Courses");

        search.set("rust".to_string());
        assert_eq!(heading(&search), "Search Results");
    }

    #[test]
    fn test_availability_pluralization() {
        assert_eq!(availability(0), "0 courses available");
        assert_eq!(availability(1), "1 course available");
        assert_eq!(availability(6), "6 courses available");
    }
}
