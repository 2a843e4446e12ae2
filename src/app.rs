use std::sync::Arc;

use iced::task;
use iced::widget::{column, container, text, Column};
use iced::{Center, Element, Fill, Font, Padding, Subscription, Task, Theme};

use crate::backend::{self, Backend, Completion, Request};
use crate::config::Config;
use crate::session::Session;
use crate::ui::{follow_up, result_panel, search_bar, spinner, theme};

pub const TITLE: &str = "AI Research Engine";
const SUBTITLE: &str = "Discover insights with intelligent search powered by AI";

pub struct State {
    config: Config,
    backend: Arc<dyn Backend>,
    session: Session,
    /// Abort handle of the outstanding backend call; dropping it cancels the call
    pending: Option<task::Handle>,
    spinner_frame: usize,
}

#[derive(Debug, Clone)]
pub enum Message {
    QueryChanged(String),
    /// Enter in the query input or a click on "Search"
    QuerySubmitted,
    FollowUpChanged(String),
    /// Enter in the follow-up input or a click on "Ask"
    FollowUpSubmitted,
    SearchFinished(Completion),
    SpinnerTick,
}

impl State {
    pub fn new(config: Config, backend: Arc<dyn Backend>) -> (Self, Task<Message>) {
        tracing::info!("Using '{}' search backend", backend.name());
        let state = Self {
            config,
            backend,
            session: Session::new(),
            pending: None,
            spinner_frame: 0,
        };
        (
            state,
            iced::widget::operation::focus(search_bar::QUERY_INPUT_ID),
        )
    }

    pub fn title(&self) -> String {
        String::from(TITLE)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.session.set_query(query);
                Task::none()
            }
            Message::QuerySubmitted => {
                let request = self.session.submit_query();
                self.dispatch(request)
            }
            Message::FollowUpChanged(follow_up) => {
                self.session.set_follow_up(follow_up);
                Task::none()
            }
            Message::FollowUpSubmitted => {
                let request = self.session.submit_follow_up();
                self.dispatch(request)
            }
            Message::SearchFinished(completion) => {
                let ticket = completion.ticket;
                if !self.session.complete(completion) {
                    return Task::none();
                }
                tracing::info!("Search #{} finished", ticket);
                self.pending = None;
                self.spinner_frame = 0;
                if self.session.has_searched() {
                    iced::widget::operation::focus(follow_up::FOLLOW_UP_INPUT_ID)
                } else {
                    iced::widget::operation::focus(search_bar::QUERY_INPUT_ID)
                }
            }
            Message::SpinnerTick => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let session = &self.session;
        let search = search_bar::view(
            session.query(),
            session.is_busy(),
            session.can_submit_query(),
            self.spinner_frame,
        );
        let results = result_panel::view(session, self.spinner_frame);

        let content = if session.has_searched() {
            let content = column![header(true), search, results];
            with_error(content, session.last_error()).push(follow_up::view(
                session.follow_up(),
                session.is_busy(),
                session.can_submit_follow_up(),
            ))
        } else {
            let content = column![header(false), search];
            with_error(content, session.last_error()).push(results)
        };

        container(content.spacing(16).max_width(960).padding(Padding::new(24.0)))
            .center_x(Fill)
            .height(Fill)
            .style(theme::background)
            .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.session.is_busy() {
            iced::time::every(spinner::TICK).map(|_| Message::SpinnerTick)
        } else {
            Subscription::none()
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn dispatch(&mut self, request: Option<Request>) -> Task<Message> {
        let Some(request) = request else {
            return Task::none();
        };
        tracing::info!(
            "Submitting {:?} #{}: {:?}",
            request.kind,
            request.ticket,
            request.text
        );

        let backend = Arc::clone(&self.backend);
        let timeout = self.config.search.timeout();
        let (task, handle) = Task::perform(
            backend::run(backend, request, timeout),
            Message::SearchFinished,
        )
        .abortable();
        self.pending = Some(handle.abort_on_drop());
        task
    }
}

fn header<'a>(compact: bool) -> Element<'a, Message> {
    let bold = Font {
        weight: iced::font::Weight::Bold,
        ..Font::DEFAULT
    };
    if compact {
        return text(TITLE).size(24).font(bold).style(theme::heading).into();
    }
    column![
        text(TITLE).size(44).font(bold).style(theme::heading),
        text(SUBTITLE).size(18).style(theme::muted),
    ]
    .spacing(12)
    .align_x(Center)
    .width(Fill)
    .padding(Padding::new(0.0).top(24.0).bottom(20.0))
    .into()
}

fn with_error<'a>(content: Column<'a, Message>, error: Option<&'a str>) -> Column<'a, Message> {
    match error {
        Some(error) => content.push(text(error).size(14).style(theme::error)),
        None => content,
    }
}
