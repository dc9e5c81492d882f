//! Clock face rendering.

use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Paragraph};

use countdown_core::{Display, DisplayState, Style as FaceStyle, Theme};

/// Colors for one theme.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub accent: Color,
    pub alert: Color,
    pub card: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                bg: Color::Rgb(245, 245, 240),
                fg: Color::Rgb(30, 30, 30),
                dim: Color::Rgb(130, 130, 130),
                accent: Color::Rgb(37, 99, 235),
                alert: Color::Rgb(220, 38, 38),
                card: Color::Rgb(225, 225, 218),
            },
            Theme::Dark => Self {
                bg: Color::Rgb(18, 18, 22),
                fg: Color::Rgb(235, 235, 235),
                dim: Color::Rgb(120, 120, 130),
                accent: Color::Rgb(96, 165, 250),
                alert: Color::Rgb(248, 113, 113),
                card: Color::Rgb(40, 40, 48),
            },
        }
    }
}

const HELP: &str = "↑/↓ adjust  ←/→ field  space start/pause  r reset  t theme  s style  q quit";

/// Draw one frame.
pub fn draw(frame: &mut Frame, view: &DisplayState, palette: &Palette, face: FaceStyle) {
    let area = frame.area();
    frame.render_widget(Block::new().style(Style::new().bg(palette.bg)), area);

    let card_height = match face {
        FaceStyle::Default => 3,
        FaceStyle::Retro => 5,
    };
    let [clock, status, _, help] = Layout::vertical([
        Constraint::Length(card_height),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .flex(Flex::Center)
    .areas(area);

    let [minutes, colon, seconds] = Layout::horizontal([
        Constraint::Length(10),
        Constraint::Length(3),
        Constraint::Length(10),
    ])
    .flex(Flex::Center)
    .areas(clock);

    render_card(frame, minutes, view.minutes_text(), view.minutes_active, view, palette, face);
    frame.render_widget(
        Paragraph::new(":")
            .alignment(Alignment::Center)
            .style(digit_style(view, palette))
            .block(Block::new().padding(ratatui::widgets::Padding::top(card_height / 2))),
        colon,
    );
    render_card(frame, seconds, view.seconds_text(), view.seconds_active, view, palette, face);

    let status_color = if view.alerting { palette.alert } else { palette.dim };
    frame.render_widget(
        Paragraph::new(view.status.as_str())
            .alignment(Alignment::Center)
            .style(Style::new().fg(status_color)),
        status,
    );
    frame.render_widget(
        Paragraph::new(HELP)
            .alignment(Alignment::Center)
            .style(Style::new().fg(palette.dim)),
        help,
    );
}

fn digit_style(view: &DisplayState, palette: &Palette) -> Style {
    if view.alerting {
        Style::new()
            .fg(palette.alert)
            .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK)
    } else {
        Style::new().fg(palette.fg).add_modifier(Modifier::BOLD)
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    digits: &str,
    active: bool,
    view: &DisplayState,
    palette: &Palette,
    face: FaceStyle,
) {
    let border = if active { palette.accent } else { palette.dim };
    let block = Block::bordered()
        .border_style(Style::new().fg(border))
        .border_type(match face {
            FaceStyle::Default => BorderType::Rounded,
            FaceStyle::Retro => BorderType::Thick,
        });

    let text = match face {
        FaceStyle::Default => Text::from(Line::from(digits)),
        // Flip card: digits sit on the upper leaf, the hinge below.
        FaceStyle::Retro => Text::from(vec![
            Line::from(digits),
            Line::from("────").style(Style::new().fg(palette.dim)),
            Line::from(""),
        ]),
    };

    let mut card = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(digit_style(view, palette))
        .block(block);
    if face == FaceStyle::Retro {
        card = card.style(digit_style(view, palette).bg(palette.card));
    }
    frame.render_widget(card, area);
}

/// [`Display`] that draws straight to a ratatui terminal.
pub struct TerminalDisplay<B: Backend> {
    terminal: Terminal<B>,
    theme: Theme,
    face: FaceStyle,
    last: Option<DisplayState>,
}

impl<B: Backend> TerminalDisplay<B> {
    pub fn new(terminal: Terminal<B>, theme: Theme, face: FaceStyle) -> Self {
        Self {
            terminal,
            theme,
            face,
            last: None,
        }
    }

    #[cfg(test)]
    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn set_face(&mut self, face: FaceStyle) {
        self.face = face;
    }

    fn redraw(&mut self) {
        let Some(view) = self.last.as_ref() else {
            return;
        };
        let palette = Palette::for_theme(self.theme);
        let face = self.face;
        if let Err(e) = self.terminal.draw(|frame| draw(frame, view, &palette, face)) {
            tracing::warn!(error = %e, "failed to draw frame");
        }
    }
}

impl<B: Backend> Display for TerminalDisplay<B> {
    fn render(&mut self, view: &DisplayState) {
        self.last = Some(view.clone());
        self.redraw();
    }
}
