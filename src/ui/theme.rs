use iced::widget::{button, container, text, text_input};
use iced::{Background, Border, Color, Shadow, Theme};

/// Window background
pub const BACKGROUND: Color = Color {
    r: 0.09,
    g: 0.10,
    b: 0.13,
    a: 1.0,
};

/// Card surface behind the search bar and results
const CARD: Color = Color {
    r: 0.14,
    g: 0.15,
    b: 0.19,
    a: 0.95,
};

/// Slightly lighter surface color for text inputs
const SURFACE: Color = Color {
    r: 0.19,
    g: 0.20,
    b: 0.25,
    a: 1.0,
};

/// Accent color for buttons and focus rings
const ACCENT: Color = Color {
    r: 0.42,
    g: 0.45,
    b: 0.95,
    a: 1.0,
};

const TEXT_PRIMARY: Color = Color {
    r: 0.92,
    g: 0.92,
    b: 0.95,
    a: 1.0,
};

const TEXT_SECONDARY: Color = Color {
    r: 0.58,
    g: 0.60,
    b: 0.66,
    a: 1.0,
};

const ERROR: Color = Color {
    r: 0.95,
    g: 0.45,
    b: 0.45,
    a: 1.0,
};

fn with_alpha(color: Color, a: f32) -> Color {
    Color { a, ..color }
}

/// Style for the outermost container filling the window
pub fn background(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(BACKGROUND.into()),
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for the cards holding the search bar and the results
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(CARD.into()),
        border: Border {
            color: with_alpha(Color::WHITE, 0.06),
            width: 1.0,
            radius: 14.0.into(),
        },
        shadow: Shadow {
            color: with_alpha(Color::BLACK, 0.4),
            offset: iced::Vector::new(0.0, 4.0),
            blur_radius: 20.0,
        },
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Round badge above the placeholder headings
pub fn badge(active: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme| container::Style {
        background: Some(if active { ACCENT } else { SURFACE }.into()),
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 32.0.into(),
        },
        text_color: Some(if active { Color::WHITE } else { TEXT_SECONDARY }),
        ..container::Style::default()
    }
}

/// Style for the text inputs
pub fn input(_theme: &Theme, status: text_input::Status) -> text_input::Style {
    let focused = matches!(status, text_input::Status::Focused { .. });
    let disabled = matches!(status, text_input::Status::Disabled);
    text_input::Style {
        background: if disabled {
            with_alpha(SURFACE, 0.6).into()
        } else {
            SURFACE.into()
        },
        border: Border {
            color: if focused { ACCENT } else { Color::TRANSPARENT },
            width: if focused { 2.0 } else { 0.0 },
            radius: 10.0.into(),
        },
        icon: TEXT_SECONDARY,
        placeholder: TEXT_SECONDARY,
        value: if disabled { TEXT_SECONDARY } else { TEXT_PRIMARY },
        selection: with_alpha(ACCENT, 0.3),
    }
}

/// Style for the submit buttons
pub fn submit(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active => ACCENT,
        button::Status::Hovered | button::Status::Pressed => with_alpha(ACCENT, 0.85),
        button::Status::Disabled => with_alpha(ACCENT, 0.35),
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: if matches!(status, button::Status::Disabled) {
            with_alpha(Color::WHITE, 0.6)
        } else {
            Color::WHITE
        },
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 10.0.into(),
        },
        ..button::Style::default()
    }
}

pub fn heading(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_PRIMARY),
    }
}

pub fn muted(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_SECONDARY),
    }
}

pub fn error(_theme: &Theme) -> text::Style {
    text::Style { color: Some(ERROR) }
}
