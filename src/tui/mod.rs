pub mod widgets;

use std::io;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::prelude::*;

use crate::theme::Theme;

use self::widgets::{FontInfoWidget, PreviewWidget, SwatchWidget};

/// State for the interactive TUI application.
pub struct TuiApp {
    pub word: String,
    pub offset: u32,
    pub theme: Theme,
}

impl TuiApp {
    pub fn new(word: &str, offset: u32) -> Result<Self> {
        Ok(Self {
            word: word.trim().to_string(),
            offset,
            theme: Theme::generate(word, offset)?,
        })
    }

    /// Bump the variation counter and regenerate the theme.
    fn refresh(&mut self) -> Result<()> {
        self.offset = self.offset.wrapping_add(1);
        self.theme = Theme::generate(&self.word, self.offset)?;
        Ok(())
    }
}

/// Launch the TUI application.
pub fn run(mut app: TuiApp) -> Result<()> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
) -> Result<()> {
    loop {
        terminal.draw(|frame| draw(frame, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('r') => app.refresh()?,
                _ => {}
            }
        }
    }
}

fn draw(frame: &mut Frame, app: &TuiApp) {
    let [swatches, fonts, preview, footer] = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(4),
        Constraint::Min(10),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    frame.render_widget(SwatchWidget::new(&app.theme.palette), swatches);
    frame.render_widget(FontInfoWidget::new(&app.theme.fonts), fonts);
    frame.render_widget(PreviewWidget::new(&app.theme), preview);

    let help = Line::from(format!(
        "  r refresh (variation {})   q quit",
        app.offset
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, footer);
}
