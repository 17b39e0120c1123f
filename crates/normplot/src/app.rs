use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
};

use normplot_core::CurveSpec;

use crate::components::{Component, EventResult, charts::DensityChart, status_bar::StatusBar};
use crate::state::AppState;

pub struct App {
    state: AppState,
    chart: DensityChart,
    status_bar: StatusBar,
}

impl App {
    /// Sample the default curve and build the app around it.
    pub fn new() -> color_eyre::Result<Self> {
        let spec = CurveSpec::default();
        let curve = spec.sample()?;

        tracing::info!(
            samples = curve.xs().len(),
            "Sampled standard normal density over [{}, {}]",
            spec.lower,
            spec.upper
        );

        Ok(Self {
            state: AppState::new(curve),
            chart: DensityChart::new(),
            status_bar: StatusBar::new(),
        })
    }

    /// Runs the draw loop until the user dismisses the display
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }

        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Main layout: chart fills the terminal, status bar underneath
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Chart
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.chart.render(frame, chunks[0], &self.state);
        self.status_bar.render(frame, chunks[1], &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Components get the key first; unclaimed keys fall through to the
        // global bindings below
        if self.chart.handle_key(key_event, &mut self.state) == EventResult::Handled {
            return;
        }
        if self.status_bar.handle_key(key_event, &mut self.state) == EventResult::Handled {
            return;
        }

        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
            }
            KeyCode::Esc => {
                self.state.exit = true;
            }
            _ => {}
        }
    }
}
