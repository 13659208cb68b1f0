// sortty: interactive terminal visualizer for classic sorting algorithms

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use sortty::controller::{RunController, DEFAULT_MAX, DEFAULT_MIN};
use sortty::generator::ArrayShape;
use sortty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional array-size argument
    let args: Vec<String> = std::env::args().collect();

    let mut controller = RunController::new();
    if let Some(arg) = args.get(1) {
        match arg.parse::<usize>() {
            Ok(size) if size <= 100 => {
                controller.generate_new(ArrayShape::Random, size, DEFAULT_MIN, DEFAULT_MAX)?;
            }
            _ => {
                let program_name = args.first().map(|s| s.as_str()).unwrap_or("sortty");
                eprintln!("Error: invalid array size '{}'", arg);
                eprintln!();
                eprintln!("Usage: {} [size]", program_name);
                eprintln!("  size: number of bars to sort (0-100, default 15)");
                std::process::exit(1);
            }
        }
    }

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(controller);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
