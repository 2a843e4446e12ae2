use iced::widget::{button, row, text, text_input};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::ui::theme;

pub const FOLLOW_UP_INPUT_ID: &str = "delve-follow-up-input";

/// Build the follow-up input row. The input is read-only while a search runs.
pub fn view(follow_up: &str, busy: bool, can_submit: bool) -> Element<'_, Message> {
    let input = text_input("Ask a follow-up question...", follow_up)
        .on_input_maybe((!busy).then_some(Message::FollowUpChanged))
        .on_submit(Message::FollowUpSubmitted)
        .id(FOLLOW_UP_INPUT_ID)
        .padding(12)
        .size(16)
        .width(Fill)
        .style(theme::input);

    let ask = button(text("Ask").size(15))
        .on_press_maybe(can_submit.then_some(Message::FollowUpSubmitted))
        .padding([12, 22])
        .style(theme::submit);

    row![input, ask].spacing(10).align_y(Alignment::Center).into()
}
