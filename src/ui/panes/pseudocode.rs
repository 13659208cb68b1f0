//! Pseudocode pane rendering with current-line highlighting
//!
//! Displays the selected algorithm's pseudocode with line numbers. The
//! line the worker last reported through `highlight_line` is drawn with an
//! arrow indicator and a highlighted background, and the view scrolls to
//! keep it centered.

use crate::engine::Algorithm;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const KEYWORDS: &[&str] = &[
    "procedure", "end", "if", "then", "else", "for", "while", "do", "from", "to", "down",
    "and", "not", "break", "return", "swap", "mark", "sorted",
];

/// Minimal keyword styling for the pseudocode dialect
fn highlight_pseudocode_line(line: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut rest = line;

    while !rest.is_empty() {
        let word_len = rest
            .find(|c: char| !c.is_alphanumeric() && c != '_')
            .unwrap_or(rest.len());

        if word_len == 0 {
            let split = rest
                .find(|c: char| c.is_alphanumeric() || c == '_')
                .unwrap_or(rest.len());
            spans.push(Span::raw(&rest[..split]));
            rest = &rest[split..];
            continue;
        }

        let word = &rest[..word_len];
        let style = if KEYWORDS.contains(&word) {
            Style::default().fg(DEFAULT_THEME.keyword)
        } else if word.chars().all(|c| c.is_ascii_digit()) {
            Style::default().fg(DEFAULT_THEME.number)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        spans.push(Span::styled(word, style));
        rest = &rest[word_len..];
    }

    spans
}

pub fn render_pseudocode_pane(
    frame: &mut Frame,
    area: Rect,
    algorithm: Option<Algorithm>,
    current_line: Option<u32>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .title(" Pseudocode ");

    let Some(algorithm) = algorithm else {
        let placeholder = Paragraph::new(vec![
            Line::raw(""),
            Line::raw("  Select an algorithm (1-6) to see its pseudocode."),
            Line::raw("  The current line is highlighted while it runs."),
        ])
        .style(Style::default().fg(DEFAULT_THEME.comment))
        .block(block);
        frame.render_widget(placeholder, area);
        return;
    };

    let lines: Vec<Line> = algorithm
        .pseudocode()
        .lines()
        .enumerate()
        .map(|(index, raw)| {
            let number = (index + 1) as u32;
            let is_current = current_line == Some(number);

            let marker = if is_current { "▶ " } else { "  " };
            let mut spans = vec![
                Span::styled(
                    format!("{:>3} ", number),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
            ];
            spans.extend(highlight_pseudocode_line(raw));

            let line = Line::from(spans);
            if is_current {
                line.style(
                    Style::default()
                        .bg(DEFAULT_THEME.current_line_bg)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                line
            }
        })
        .collect();

    // Keep the current line centered once the text outgrows the pane
    let inner_height = area.height.saturating_sub(2) as u32;
    let total = lines.len() as u32;
    let scroll = match current_line {
        Some(line) if total > inner_height => line
            .saturating_sub(inner_height / 2)
            .min(total - inner_height),
        _ => 0,
    };

    let paragraph = Paragraph::new(lines).block(block).scroll((scroll as u16, 0));
    frame.render_widget(paragraph, area);
}
