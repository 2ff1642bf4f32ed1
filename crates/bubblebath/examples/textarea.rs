use bubblebath::crossterm_input::input_event_from_crossterm;
use bubblebath::error::ClipboardError;
use bubblebath::help::HelpBar;
use bubblebath::textarea::TextArea;
use bubblebath::textarea::TextAreaAction;
use bubblebath::textarea::TextAreaOptions;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::Event;
use crossterm::event::KeyCode;
use crossterm::event::KeyEventKind;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use std::io;
use std::time::Duration;

fn main() -> io::Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut textarea = TextArea::with_options(TextAreaOptions {
        placeholder: "Once upon a time...".to_string(),
        char_limit: 0,
        ..Default::default()
    });
    textarea.focus();

    let res = run(&mut terminal, &mut textarea);

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    res
}

fn run<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    textarea: &mut TextArea,
) -> io::Result<()> {
    let km = textarea.options().keymap.clone();
    let help = HelpBar::new(vec![
        km.word_forward,
        km.delete_word_backward,
        km.input_begin,
        km.input_end,
        km.paste,
    ]);
    let mut status = String::new();

    loop {
        terminal.draw(|f| {
            let area = f.area();
            let [main, status_area, help_area] = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(3),
                    Constraint::Length(1),
                    Constraint::Length(1),
                ])
                .areas(area);

            let block = Block::default()
                .title("TextArea (Esc to quit)")
                .borders(Borders::ALL);
            let inner = block.inner(main);
            f.render_widget(block, main);

            let buf = f.buffer_mut();
            textarea.render_ref(inner, buf);
            let cursor = textarea.cursor_pos(inner);

            let line = format!(
                "row={} col={} len={} lines={}  {status}",
                textarea.cursor_row(),
                textarea.cursor_col(),
                textarea.length(),
                textarea.line_count(),
            );
            buf.set_span(
                status_area.x,
                status_area.y,
                &Span::styled(line, Style::default()),
                status_area.width,
            );
            help.render_ref(help_area, buf);

            if let Some((x, y)) = cursor {
                f.set_cursor_position((x, y));
            }
        })?;

        if !crossterm::event::poll(Duration::from_millis(50))? {
            continue;
        }
        let ev = crossterm::event::read()?;
        if let Event::Key(key) = &ev {
            if key.kind == KeyEventKind::Press && key.code == KeyCode::Esc {
                return Ok(());
            }
        }
        let Some(ev) = input_event_from_crossterm(ev) else {
            continue;
        };
        match textarea.input(ev) {
            TextAreaAction::PasteRequested => {
                // The demo has no clipboard backend; terminals still deliver bracketed pastes.
                let err = ClipboardError::Unavailable("use your terminal's paste".to_string());
                if let TextAreaAction::PasteFailed(err) = textarea.paste_result(Err(err)) {
                    status = err.to_string();
                }
            }
            TextAreaAction::Changed => status.clear(),
            TextAreaAction::PasteFailed(_) | TextAreaAction::None => {}
        }
    }
}
