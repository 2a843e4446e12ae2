use iced::widget::{button, container, row, text, text_input};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::ui::{spinner, theme};

/// The query input ID for focus management
pub const QUERY_INPUT_ID: &str = "delve-query-input";

/// Build the query input with its submit button.
///
/// Enter in the input and a click on the button emit the same message.
pub fn view(query: &str, busy: bool, can_submit: bool, frame: usize) -> Element<'_, Message> {
    let input = text_input("Enter your research query...", query)
        .on_input(Message::QueryChanged)
        .on_submit(Message::QuerySubmitted)
        .id(QUERY_INPUT_ID)
        .padding(14)
        .size(18)
        .width(Fill)
        .style(theme::input);

    let label = if busy {
        spinner::label("Searching", frame)
    } else {
        String::from("Search")
    };

    let submit = button(text(label).size(16))
        .on_press_maybe(can_submit.then_some(Message::QuerySubmitted))
        .padding([14, 28])
        .style(theme::submit);

    container(row![input, submit].spacing(12).align_y(Alignment::Center))
        .padding(20)
        .width(Fill)
        .style(theme::card)
        .into()
}
