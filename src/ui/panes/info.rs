//! Algorithm info pane: description, complexity and principle of operation

use crate::engine::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_info_pane(frame: &mut Frame, area: Rect, algorithm: Option<Algorithm>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .title(" Algorithm ");

    let Some(algorithm) = algorithm else {
        let placeholder = Paragraph::new("  Press 1-6 to choose an algorithm.")
            .style(Style::default().fg(DEFAULT_THEME.comment))
            .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let complexity = algorithm.complexity();
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {}", algorithm.name()),
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            format!(" {}", algorithm.description()),
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled(" Time:   ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::raw(complexity.time),
        ]),
        Line::from(vec![
            Span::styled(" Space:  ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::raw(complexity.space),
        ]),
        Line::from(vec![
            Span::styled(" Stable: ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                if complexity.stable { "yes" } else { "no" },
                Style::default().fg(if complexity.stable {
                    DEFAULT_THEME.success
                } else {
                    DEFAULT_THEME.error
                }),
            ),
        ]),
        Line::raw(""),
    ];

    for (index, step) in algorithm.principle().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {}. ", index + 1),
                Style::default().fg(DEFAULT_THEME.secondary),
            ),
            Span::raw(*step),
        ]));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(paragraph, area);
}
