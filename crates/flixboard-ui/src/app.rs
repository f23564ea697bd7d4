//! Main application state and TUI event loop for flixboard.
//!
//! [`App`] owns the theme, view mode, current panel and rating selection,
//! and drives the terminal event loop over a fully-built [`Report`]. The
//! pipeline ran before the UI started; rendering never touches the
//! filesystem.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame, Terminal,
};

use flixboard_data::report::Report;

use crate::components::header::Header;
use crate::components::text_panel;
use crate::panels::{
    genre_bar, quarterly, rating_scatter, score_scatter, spread_line, top_rated, top_share, Panel,
};
use crate::table_view;
use crate::themes::Theme;

// ── ViewMode ──────────────────────────────────────────────────────────────────

/// Which top-level view the TUI is rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Interactive panel-by-panel dashboard.
    Dashboard,
    /// The merged-data table, full screen.
    Table,
    /// The quarterly aggregate table, full screen.
    Quarterly,
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the flixboard TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Current top-level view.
    pub view_mode: ViewMode,
    /// Panel shown in dashboard mode.
    pub panel: Panel,
    /// Rating selector position: `0` = All, `1..` indexes `rating_labels`.
    pub rating_idx: usize,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,
    /// The fully-built pipeline output.
    report: Report,
}

impl App {
    /// Construct a new application over a finished report.
    pub fn new(theme_name: &str, view_mode: ViewMode, report: Report) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            view_mode,
            panel: Panel::Overview,
            rating_idx: 0,
            should_quit: false,
            report,
        }
    }

    /// The rating currently selected in the rating panel, `None` for "All".
    pub fn selected_rating(&self) -> Option<&str> {
        if self.rating_idx == 0 {
            return None;
        }
        self.report
            .rating_labels
            .get(self.rating_idx - 1)
            .map(String::as_str)
    }

    /// Advance the rating selector: All → each rating in order → All.
    pub fn cycle_rating(&mut self) {
        self.rating_idx = (self.rating_idx + 1) % (self.report.rating_labels.len() + 1);
    }

    /// Apply a key event to the application state.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            _ if self.view_mode != ViewMode::Dashboard => {}
            KeyCode::Tab | KeyCode::Right => self.panel = self.panel.next(),
            KeyCode::BackTab | KeyCode::Left => self.panel = self.panel.prev(),
            KeyCode::Char('r') | KeyCode::Char('R') if self.panel == Panel::RatingScatter => {
                self.cycle_rating();
            }
            KeyCode::Char(c) => {
                if let Some(panel) = Panel::from_digit(c) {
                    self.panel = panel;
                }
            }
            _ => {}
        }
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the TUI until the user quits with `q` or Ctrl+C.
    pub async fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        loop {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            if self.should_quit {
                break;
            }
        }

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    /// Render the current application state into `frame`.
    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        if self.report.is_empty() {
            table_view::render_no_data(frame, area, &self.theme);
            return;
        }

        match self.view_mode {
            ViewMode::Dashboard => self.render_dashboard(frame, area),
            ViewMode::Table => table_view::render_film_table(
                frame,
                area,
                "Merged Netflix Data",
                &self.report.rows,
                &self.theme,
            ),
            ViewMode::Quarterly => {
                table_view::render_quarter_table(frame, area, &self.report.quarterly, &self.theme)
            }
        }
    }

    fn render_dashboard(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        // Header.
        let header = Header::new(self.panel.title(), self.report.rows.len(), &self.theme);
        frame.render_widget(Paragraph::new(Text::from(header.to_lines())), chunks[0]);

        // Panel body.
        let body = chunks[1];
        match self.panel {
            Panel::Overview => self.render_overview(frame, body),
            Panel::Genres => {
                genre_bar::render_genre_bar(frame, body, &self.report.genre_counts, &self.theme)
            }
            Panel::SpreadLine => {
                spread_line::render_spread_line(frame, body, &self.report.rows, &self.theme)
            }
            Panel::ScoreScatter => {
                score_scatter::render_score_scatter(frame, body, &self.report.rows, &self.theme)
            }
            Panel::TopShare => {
                top_share::render_top_share(frame, body, &self.report.top_rated, &self.theme)
            }
            Panel::TopRated => {
                top_rated::render_top_rated(frame, body, &self.report.top_rated, &self.theme)
            }
            Panel::RatingScatter => rating_scatter::render_rating_scatter(
                frame,
                body,
                &self.report.rows,
                &self.report.rating_labels,
                self.selected_rating(),
                &self.theme,
            ),
            Panel::Quarterly => {
                quarterly::render_quarterly(frame, body, &self.report.quarterly, &self.theme)
            }
            Panel::Takeaways => text_panel::render_takeaways(frame, body, &self.theme),
        }

        self.render_status_bar(frame, chunks[2]);
    }

    /// Overview: introduction text above a preview of the merged table.
    fn render_overview(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(16), Constraint::Min(0)])
            .split(area);

        text_panel::render_intro(frame, chunks[0], &self.theme);
        table_view::render_film_table(
            frame,
            chunks[1],
            "Merged Netflix Data",
            &self.report.rows,
            &self.theme,
        );
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let position = format!(
            " {}/{} {}",
            self.panel.index() + 1,
            Panel::ALL.len(),
            self.panel.title()
        );
        let line = Line::from(vec![
            Span::styled(position, self.theme.value),
            Span::styled(
                "   Tab/arrows: switch panel   1-9: jump   r: rating filter   q: quit",
                self.theme.dim,
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
