//! Bar-chart pane: the array itself, colored by highlight category

use crate::sink::FrameView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

/// Pick the color for one bar. When a bar is in more than one set, the
/// most urgent category wins.
fn bar_color(view: &FrameView, index: usize) -> Color {
    if view.swapping.contains(&index) {
        DEFAULT_THEME.swapping
    } else if view.pivot.contains(&index) {
        DEFAULT_THEME.pivot
    } else if view.comparing.contains(&index) {
        DEFAULT_THEME.comparing
    } else if view.sorted.contains(&index) {
        DEFAULT_THEME.sorted
    } else {
        DEFAULT_THEME.bar
    }
}

pub fn render_bars_pane(frame: &mut Frame, area: Rect, view: &FrameView) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .title(" Array ");

    if view.values.is_empty() {
        let empty = Paragraph::new("(empty array — press n to generate one)")
            .style(Style::default().fg(DEFAULT_THEME.comment))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let n = view.values.len() as u16;
    let inner_width = area.width.saturating_sub(2);
    // One-cell gaps; bars share what is left
    let bar_width = (inner_width.saturating_sub(n.saturating_sub(1)) / n).max(1);

    let bars: Vec<Bar> = view
        .values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = bar_color(view, index);
            Bar::default()
                .value(u64::from(value))
                .text_value(value.to_string())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(1)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
