//! Statistics pane: run counters, speed and run state

use crate::engine::Algorithm;
use crate::sink::{FrameView, RunState};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn counter_line(label: &'static str, value: u64) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {:<12}", label),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            value.to_string(),
            Style::default()
                .fg(DEFAULT_THEME.number)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

pub fn render_stats_pane(
    frame: &mut Frame,
    area: Rect,
    view: &FrameView,
    algorithm: Option<Algorithm>,
    speed_level: u8,
) {
    let (state_text, state_color) = match view.run_state {
        RunState::Idle => ("idle", DEFAULT_THEME.comment),
        RunState::Running => ("running", DEFAULT_THEME.success),
        RunState::Paused => ("paused", DEFAULT_THEME.secondary),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(" Algorithm   ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                algorithm.map_or("(none)", Algorithm::name),
                Style::default().fg(DEFAULT_THEME.primary),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", state_text),
                Style::default().fg(state_color),
            ),
        ]),
        counter_line("Comparisons", view.stats.comparisons),
        counter_line("Swaps", view.stats.swaps),
        counter_line("Steps", view.stats.steps),
        Line::from(vec![
            Span::styled(" Speed       ", Style::default().fg(DEFAULT_THEME.comment)),
            Span::styled(
                format!("{}/10", speed_level),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
            .title(" Statistics "),
    );
    frame.render_widget(paragraph, area);
}
