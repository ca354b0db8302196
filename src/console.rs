use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{self, Color},
    terminal,
};
use duolife::{CellState, Grid};
use std::io::{self, Write};

pub enum ConsoleCommand {
    Exit,
    Clear,
    Randomize,
    TogglePause,
    Step,
    Handled,
}

/// Terminal view onto a grid. `top`/`left` scroll the view and wrap with it.
pub struct ConsoleRender {
    top: i32,
    left: i32,
    report: String,
}
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        Ok(Self {
            top: 0,
            left: 0,
            report: String::new(),
        })
    }

    fn color(state: CellState) -> Option<Color> {
        match state {
            CellState::Dead => None,
            CellState::ColorA => Some(Color::Red),
            CellState::ColorB => Some(Color::Blue),
        }
    }

    pub fn render(&self, grid: &Grid) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        // last terminal line is the footer
        let view_rows = (i32::from(rows) - 1).min(grid.rows()).max(0);
        let view_cols = i32::from(cols).min(grid.columns());

        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        for y in 0..view_rows {
            for x in 0..view_cols {
                let state = grid.cell(self.top + y, self.left + x).state();
                if let Some(color) = Self::color(state) {
                    queue!(
                        stdout,
                        cursor::MoveTo(x as u16, y as u16),
                        style::SetForegroundColor(color),
                        style::Print('█')
                    )?;
                }
            }
        }

        // write footer
        queue!(
            stdout,
            style::ResetColor,
            cursor::MoveTo(0, rows.saturating_sub(1)),
            style::Print(&self.report)
        )?;

        stdout.flush()
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // make sure event is preset for us to take
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let event::Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        else {
            return Ok(Some(ConsoleCommand::Handled));
        };

        let cmd = match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => ConsoleCommand::Exit,
            KeyCode::Char('q') | KeyCode::Esc => ConsoleCommand::Exit,
            KeyCode::Char('c') => ConsoleCommand::Clear,
            KeyCode::Char('r') => ConsoleCommand::Randomize,
            KeyCode::Char(' ') => ConsoleCommand::TogglePause,
            KeyCode::Char('n') => ConsoleCommand::Step,
            // arrows scroll the view
            KeyCode::Up => {
                self.top -= 1;
                ConsoleCommand::Handled
            }
            KeyCode::Down => {
                self.top += 1;
                ConsoleCommand::Handled
            }
            KeyCode::Left => {
                self.left -= 1;
                ConsoleCommand::Handled
            }
            KeyCode::Right => {
                self.left += 1;
                ConsoleCommand::Handled
            }
            _ => ConsoleCommand::Handled,
        };
        Ok(Some(cmd))
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // best effort, the terminal may already be gone
        let _ = terminal::disable_raw_mode();
        let _ = execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen);
    }
}
