use iced::widget::{center, column, container, scrollable, text};
use iced::{Center, Element, Fill, Font};

use crate::app::Message;
use crate::session::{Phase, Session};
use crate::ui::{spinner, theme};

/// Note under the results while a follow-up is outstanding
pub const FOLLOW_UP_PENDING: &str = "Thinking about your follow-up...";

/// Heading and description of the placeholder shown instead of results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    pub title: String,
    pub body: String,
    pub badge: Badge,
}

/// Look of the round badge above the placeholder heading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Idle,
    Ready,
    Busy,
}

/// Pick the placeholder for a session, or `None` when results should show
pub fn placeholder(session: &Session) -> Option<Placeholder> {
    if session.is_busy() && !session.has_searched() {
        return Some(analyzing());
    }
    if session.has_searched() {
        return None;
    }
    let query = session.query();
    if query.is_empty() {
        Some(Placeholder {
            title: "Start your research".to_string(),
            body: "Enter a query above to begin exploring AI-powered research insights and discoveries"
                .to_string(),
            badge: Badge::Idle,
        })
    } else {
        Some(Placeholder {
            title: "Ready to search".to_string(),
            body: format!(
                "Click the search button to find AI-powered research insights for: \"{query}\""
            ),
            badge: Badge::Ready,
        })
    }
}

fn analyzing() -> Placeholder {
    Placeholder {
        title: "Analyzing your query...".to_string(),
        body: "AI is processing and finding relevant research insights".to_string(),
        badge: Badge::Busy,
    }
}

/// Note to show under the results, if a follow-up is outstanding
pub fn pending_note(session: &Session) -> Option<&'static str> {
    matches!(session.phase(), Phase::FollowUpSearching { .. }).then_some(FOLLOW_UP_PENDING)
}

/// Build the results card
pub fn view(session: &Session, frame: usize) -> Element<'_, Message> {
    let body: Element<'_, Message> = match placeholder(session) {
        Some(placeholder) => placeholder_view(placeholder, frame),
        // Re-search: keep the analyzing message in front of the old results
        None if matches!(session.phase(), Phase::Searching { .. }) => {
            placeholder_view(analyzing(), frame)
        }
        None => results_view(session),
    };

    container(body)
        .padding(28)
        .width(Fill)
        .height(Fill)
        .style(theme::card)
        .into()
}

fn placeholder_view<'a>(placeholder: Placeholder, frame: usize) -> Element<'a, Message> {
    let glyph = match placeholder.badge {
        Badge::Busy => spinner::badge(frame),
        Badge::Idle | Badge::Ready => String::from("?"),
    };
    let badge = container(text(glyph).size(22))
        .center(64)
        .style(theme::badge(placeholder.badge != Badge::Idle));

    let title = text(placeholder.title)
        .size(20)
        .font(Font {
            weight: iced::font::Weight::Semibold,
            ..Font::DEFAULT
        })
        .style(theme::heading);
    let body = text(placeholder.body)
        .size(15)
        .align_x(Center)
        .style(theme::muted);

    center(
        column![badge, title, body]
            .spacing(10)
            .align_x(Center)
            .max_width(520),
    )
    .into()
}

fn results_view(session: &Session) -> Element<'_, Message> {
    let results = session.results().unwrap_or_default();
    let mut content = column![text(results).size(16).style(theme::heading)].spacing(14);

    if let Some(note) = pending_note(session) {
        content = content.push(text(note).size(14).style(theme::muted));
    }

    scrollable(content).height(Fill).width(Fill).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::Completion;

    #[test]
    fn empty_query_invites_research() {
        let session = Session::new();
        let shown = placeholder(&session).expect("placeholder before searching");
        assert_eq!(shown.title, "Start your research");
        assert_eq!(shown.badge, Badge::Idle);
    }

    #[test]
    fn typed_query_is_echoed() {
        let mut session = Session::new();
        session.set_query("quantum computing".to_string());
        let shown = placeholder(&session).expect("placeholder before searching");
        assert_eq!(shown.title, "Ready to search");
        assert_eq!(shown.badge, Badge::Ready);
        assert!(shown.body.contains("\"quantum computing\""));
    }

    #[test]
    fn first_search_shows_analyzing() {
        let mut session = Session::new();
        session.set_query("quantum computing".to_string());
        let request = session.submit_query().expect("query accepted");
        assert_eq!(placeholder(&session), Some(analyzing()));

        session.complete(Completion {
            ticket: request.ticket,
            outcome: Ok("done".to_string()),
        });
        assert_eq!(placeholder(&session), None);
    }

    #[test]
    fn pending_note_only_during_follow_up() {
        let mut session = Session::new();
        session.set_query("quantum computing".to_string());
        let request = session.submit_query().expect("query accepted");
        assert_eq!(pending_note(&session), None);
        session.complete(Completion {
            ticket: request.ticket,
            outcome: Ok("done".to_string()),
        });
        assert_eq!(pending_note(&session), None);

        session.set_follow_up("explain more".to_string());
        assert!(session.submit_follow_up().is_some());
        assert_eq!(pending_note(&session), Some(FOLLOW_UP_PENDING));
    }
}
