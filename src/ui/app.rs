//! Main TUI application state and logic

use crate::controller::RunController;
use crate::engine::Algorithm;
use crate::export::RunReport;
use crate::generator::ArrayShape;
use crate::sink::RunState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::Rng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// The five demo-array configurations `n` cycles through at random
const GENERATOR_OPTIONS: [(ArrayShape, usize, u32, u32); 5] = [
    (ArrayShape::Random, 15, 10, 150),
    (ArrayShape::NearlySorted, 15, 10, 150),
    (ArrayShape::Reversed, 15, 10, 150),
    (ArrayShape::Random, 20, 5, 100),
    (ArrayShape::Random, 10, 20, 200),
];

/// The main application state
pub struct App {
    /// Owns the run lifecycle and the shared visualizer state
    pub controller: RunController,

    /// Speed level 1..=10 as shown in the stats pane
    pub speed_level: u8,

    /// Status message to display
    pub status_message: String,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Run state seen at the previous frame, to notice completions
    last_run_state: RunState,
}

impl App {
    /// Create a new app around the given controller
    pub fn new(controller: RunController) -> Self {
        controller.set_speed(5);
        App {
            controller,
            speed_level: 5,
            status_message: String::from("Ready! Pick an algorithm with 1-6."),
            should_quit: false,
            last_run_state: RunState::Idle,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.observe_run_transition();

            // Poll with a timeout so the animation keeps redrawing
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Notice a worker finishing between frames and surface the outcome
    fn observe_run_transition(&mut self) {
        let state = self.controller.run_state();
        if self.last_run_state != RunState::Idle && state == RunState::Idle {
            if let Some(failure) = self.controller.shared().take_failure() {
                self.status_message = failure;
            } else {
                let view = self.controller.frame();
                if !view.values.is_empty() && view.sorted.len() == view.values.len() {
                    self.status_message = String::from("Sorting complete!");
                }
            }
        }
        self.last_run_state = state;
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes above, one-row status bar below
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(main_chunks[0]);

        // Left column: bars (top) | statistics (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(7)])
            .split(columns[0]);

        // Right column: pseudocode (top) | algorithm info (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(columns[1]);

        let view = self.controller.frame();
        let selected = self.controller.selected();

        super::panes::render_bars_pane(frame, left_rows[0], &view);
        super::panes::render_stats_pane(frame, left_rows[1], &view, selected, self.speed_level);
        super::panes::render_pseudocode_pane(frame, right_rows[0], selected, view.current_line);
        super::panes::render_info_pane(frame, right_rows[1], selected);
        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            view.run_state,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.export_report();
            }
            KeyCode::Char(c @ '1'..='6') => {
                let algorithm = Algorithm::ALL[c as usize - '1' as usize];
                match self.controller.select_algorithm(algorithm) {
                    Ok(()) => self.status_message = format!("Selected {}", algorithm.name()),
                    Err(e) => self.status_message = e.to_string(),
                }
            }
            KeyCode::Char(' ') => {
                self.start_or_toggle_pause();
            }
            KeyCode::Char('r') => {
                self.controller.reset();
                self.status_message = String::from("Reset: array restored");
            }
            KeyCode::Char('n') => {
                self.generate_new();
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.change_speed(1);
            }
            KeyCode::Char('-') => {
                self.change_speed(-1);
            }
            _ => {}
        }
    }

    /// Space: start when idle, otherwise toggle pause
    fn start_or_toggle_pause(&mut self) {
        match self.controller.run_state() {
            RunState::Running => {
                self.controller.pause();
                self.status_message = String::from("Paused");
            }
            RunState::Paused => {
                self.controller.resume();
                self.status_message = String::from("Resumed");
            }
            RunState::Idle => match self.controller.start() {
                Ok(()) => {
                    let name = self.controller.selected().map_or("?", Algorithm::name);
                    self.status_message = format!("Sorting with {}...", name);
                }
                Err(e) => self.status_message = e.to_string(),
            },
        }
    }

    fn generate_new(&mut self) {
        let (shape, size, min, max) =
            GENERATOR_OPTIONS[rand::thread_rng().gen_range(0..GENERATOR_OPTIONS.len())];
        match self.controller.generate_new(shape, size, min, max) {
            Ok(()) => {
                self.status_message = format!("New {} array of {} values", shape.label(), size);
            }
            Err(e) => self.status_message = e.to_string(),
        }
    }

    fn change_speed(&mut self, delta: i8) {
        self.speed_level = (self.speed_level as i8 + delta).clamp(1, 10) as u8;
        self.controller.set_speed(self.speed_level);
        self.status_message = format!("Speed {}/10", self.speed_level);
    }

    /// Ctrl+E: write the current run's data to a JSON file
    fn export_report(&mut self) {
        let report = RunReport::capture(&self.controller);
        match report.to_json() {
            Ok(json) => {
                let filename = report.suggested_filename();
                match std::fs::write(&filename, json) {
                    Ok(()) => self.status_message = format!("Exported {}", filename),
                    Err(e) => self.status_message = format!("Export failed: {}", e),
                }
            }
            Err(e) => self.status_message = format!("Export failed: {}", e),
        }
    }
}
