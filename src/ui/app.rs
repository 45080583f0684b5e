//! Main TUI application state and logic

use crate::catalog::{BondCatalog, BondKind};
use crate::model::BondModel;
use crate::ui::theme::DEFAULT_THEME;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Time between decorative animation frames (pulse phases, electron drift).
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// The main application state
pub struct App {
    /// Static catalog of the six bonding types
    pub catalog: BondCatalog,

    /// Currently selected bonding type
    pub selected: BondKind,

    /// The mounted illustrative widget for the current selection
    pub model: BondModel,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Decorative animation frame counter
    anim_frame: usize,

    /// Last time the animation advanced
    last_tick: Instant,
}

impl App {
    /// Create a new app with the default selection mounted.
    pub fn new() -> Self {
        let selected = BondKind::default();
        App {
            catalog: BondCatalog::new(),
            selected,
            model: BondModel::mount(selected),
            should_quit: false,
            status_message: String::from("Bereit!"),
            anim_frame: 0,
            last_tick: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.last_tick.elapsed() >= TICK_INTERVAL {
                self.tick();
                self.last_tick = Instant::now();
            }

            // Use poll with timeout so the decorative animation keeps moving
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

    /// Advance the decorative animation one frame. Selection and reveal
    /// state are untouched.
    pub fn tick(&mut self) {
        self.anim_frame = self.anim_frame.wrapping_add(1);
        self.model.tick();
    }

    pub fn anim_frame(&self) -> usize {
        self.anim_frame
    }

    /// Select a bonding type. Mounting the new widget discards the previous
    /// widget's reveal state.
    pub fn select(&mut self, kind: BondKind) {
        if kind == self.selected {
            return;
        }
        info!("selection changed: {} -> {}", self.selected, kind);
        self.selected = kind;
        self.model = BondModel::mount(kind);
        self.status_message =
            format!("Ausgewählt: {}", self.catalog.entry(kind).title);
    }

    /// Select by string id. Unknown ids fall back to the default entry
    /// instead of surfacing an error; the navigation pane only offers
    /// valid ids, so this path is defensive.
    pub fn select_id(&mut self, id: &str) {
        let kind = match BondKind::from_id(id) {
            Some(kind) => kind,
            None => {
                warn!("unknown bond id {:?}, falling back to default", id);
                BondKind::default()
            }
        };
        self.select(kind);
    }

    pub fn select_next(&mut self) {
        self.select(self.selected.next());
    }

    pub fn select_prev(&mut self) {
        self.select(self.selected.prev());
    }

    /// Toggle the mounted widget between Hidden and Revealed.
    pub fn toggle_model(&mut self) {
        self.model.toggle();
        debug!(
            "model {} toggled to {:?}",
            self.model.kind(),
            self.model.reveal()
        );
        self.status_message = if self.model.reveal().is_revealed() {
            String::from("Modell aktiv")
        } else {
            String::from("Modell gestoppt")
        };
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Header on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        self.render_header(frame, main_chunks[0]);

        // Navigation on the left, detail and model stacked on the right
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(main_chunks[1]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(0)])
            .split(columns[1]);

        super::panes::render_navigation_pane(
            frame,
            columns[0],
            &self.catalog,
            self.selected,
        );

        super::panes::render_detail_pane(
            frame,
            right_rows[0],
            self.catalog.entry(self.selected),
        );

        super::panes::render_model_pane(
            frame,
            right_rows[1],
            &self.model,
            self.anim_frame,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.selected.index(),
            self.catalog.entries().len(),
            self.model.reveal().is_revealed(),
        );
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
        let lines = vec![
            Line::from(Span::styled(
                "Chemische Bindungen",
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Interaktive Visualisierung verschiedener chemischer Bindungsarten",
                Style::default().fg(DEFAULT_THEME.muted),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys jump to an entry directly
            KeyCode::Char(c @ '1'..='6') => {
                let idx = c.to_digit(10).unwrap() as usize - 1;
                self.select(BondKind::ALL[idx]);
            }
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('t') => {
                self.toggle_model();
            }
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}
