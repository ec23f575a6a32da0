use anyhow::{Context, Result};
use annotext_config::Config;
use annotext_engine::{AnnotatedText, RenderOptions, SpanKind, annotate, listing, render_html};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{
    env,
    io::{Read, Stdout, stdout},
    path::PathBuf,
    process,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Preview,
    Html,
    Spans,
}

struct App {
    source: String,
    annotated: AnnotatedText,
    span_list_state: ListState,
}

impl App {
    fn new(source: String) -> Self {
        let annotated = annotate(&source);

        let mut app = Self {
            source,
            annotated,
            span_list_state: ListState::default(),
        };

        // Select first span if available
        if !app.annotated.is_empty() {
            app.span_list_state.select(Some(0));
        }

        app
    }

    fn next_span(&mut self) {
        if self.annotated.is_empty() {
            return;
        }
        let i = match self.span_list_state.selected() {
            Some(i) => (i + 1) % self.annotated.len(),
            None => 0,
        };
        self.span_list_state.select(Some(i));
    }

    fn previous_span(&mut self) {
        if self.annotated.is_empty() {
            return;
        }
        let i = match self.span_list_state.selected() {
            Some(0) | None => self.annotated.len() - 1,
            Some(i) => i - 1,
        };
        self.span_list_state.select(Some(i));
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map_or("annotext-cli", String::as_str);

    let mut mode = Mode::Preview;
    let mut input_path: Option<PathBuf> = None;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--html" => mode = Mode::Html,
            "--spans" => mode = Mode::Spans,
            flag if flag.starts_with("--") => usage_error(program, &format!("unknown flag {flag}")),
            path if input_path.is_none() => input_path = Some(PathBuf::from(path)),
            _ => usage_error(program, "more than one input file given"),
        }
    }

    let config = match Config::load_or_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Fix or remove {}", Config::config_path().display());
            process::exit(1);
        }
    };
    log::debug!("render settings: {:?}", config.render);

    let source = read_input(input_path.as_ref())?;

    match mode {
        Mode::Html => {
            let options = RenderOptions {
                profile_prefix: config.render.profile_prefix,
                open_links_in_new_tab: config.render.open_links_in_new_tab,
            };
            println!("{}", render_html(&source, &annotate(&source), &options));
        }
        Mode::Spans => {
            print!("{}", listing(&source, &annotate(&source)));
        }
        Mode::Preview => run_preview(source)?,
    }

    Ok(())
}

fn usage_error(program: &str, reason: &str) -> ! {
    eprintln!("Error: {reason}");
    eprintln!("Usage: {program} [--html | --spans] [file]");
    eprintln!("Reads standard input when no file is given.");
    process::exit(1);
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .context("Failed to read standard input")?;
            Ok(source)
        }
    }
}

fn run_preview(source: String) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(source);

    // Main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_span(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_span(),
                _ => {}
            }
        }
    }
}

/// One list row per span, e.g. `Mention  @alice`.
fn span_label(kind: &SpanKind, raw: &str) -> String {
    match kind {
        SpanKind::Text => format!("Text     {raw:?}"),
        SpanKind::Mention { handle } => format!("Mention  @{handle}"),
        SpanKind::Link { href, .. } => format!("Link     {href}"),
    }
}

fn span_style(kind: &SpanKind) -> Style {
    match kind {
        SpanKind::Text => Style::default(),
        SpanKind::Mention { .. } => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
        SpanKind::Link { .. } => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED),
    }
}

/// Lays annotated text out as terminal lines, highlighting `selected`.
///
/// Links show their display text; everything else shows the source slice.
fn styled_lines<'a>(
    source: &'a str,
    annotated: &'a AnnotatedText,
    selected: Option<usize>,
) -> Vec<Line<'a>> {
    let mut lines = vec![Line::default()];

    for (idx, s) in annotated.iter().enumerate() {
        let mut style = span_style(&s.kind);
        if selected == Some(idx) {
            style = style.bg(Color::Yellow).fg(Color::Black);
        }

        let shown = match &s.kind {
            SpanKind::Link { display_text, .. } => display_text.as_str(),
            _ => s.text(source),
        };

        for (n, piece) in shown.split('\n').enumerate() {
            if n > 0 {
                lines.push(Line::default());
            }
            if !piece.is_empty()
                && let Some(line) = lines.last_mut()
            {
                line.spans.push(Span::styled(piece, style));
            }
        }
    }

    lines
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)].as_ref())
        .split(f.area());

    // Span list panel
    let span_items: Vec<ListItem> = app
        .annotated
        .iter()
        .map(|s| {
            let label = span_label(&s.kind, s.text(&app.source));
            ListItem::new(vec![Line::from(vec![Span::styled(label, span_style(&s.kind))])])
        })
        .collect();

    let mention_count = app.annotated.mentions().len();
    let link_count = app.annotated.links().count();
    let spans_list = List::new(span_items)
        .block(Block::default().borders(Borders::ALL).title(format!(
            "Spans ({mention_count} mentions, {link_count} links)"
        )))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(spans_list, chunks[0], &mut app.span_list_state);

    // Preview panel
    let preview_text = if app.annotated.is_empty() {
        vec![Line::from("Input is empty")]
    } else {
        styled_lines(&app.source, &app.annotated, app.span_list_state.selected())
    };

    let preview = Paragraph::new(preview_text)
        .block(Block::default().borders(Borders::ALL).title("Preview"))
        .wrap(ratatui::widgets::Wrap { trim: false });

    f.render_widget(preview, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q/Esc: Quit | "),
        Span::raw("↑/k: Previous span | "),
        Span::raw("↓/j: Next span"),
    ]);

    let help = Paragraph::new(vec![help_text]).block(Block::default());

    // Place help at bottom
    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn line_texts(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn lines_split_on_newlines() {
        let source = "hi @kim\nsee www.x.io";
        let annotated = annotate(source);
        let lines = styled_lines(source, &annotated, None);
        assert_eq!(line_texts(&lines), vec!["hi @kim", "see www.x.io"]);
    }

    #[test]
    fn long_links_show_display_text() {
        let source = format!("https://example.com/{}", "p".repeat(40));
        let annotated = annotate(&source);
        let lines = styled_lines(&source, &annotated, None);
        assert_eq!(
            line_texts(&lines),
            vec![format!("example.com/{}...", "p".repeat(25))]
        );
    }

    #[test]
    fn selected_span_is_highlighted() {
        let source = "a @b c";
        let annotated = annotate(source);
        let lines = styled_lines(source, &annotated, Some(1));
        assert_eq!(lines[0].spans[1].style.bg, Some(Color::Yellow));
        assert_eq!(lines[0].spans[0].style.bg, None);
    }

    #[test]
    fn navigation_wraps_around() {
        let mut app = App::new("a @b c".to_string());
        assert_eq!(app.span_list_state.selected(), Some(0));
        app.previous_span();
        assert_eq!(app.span_list_state.selected(), Some(2));
        app.next_span();
        assert_eq!(app.span_list_state.selected(), Some(0));
    }

    #[test]
    fn navigation_on_empty_input_is_noop() {
        let mut app = App::new(String::new());
        app.next_span();
        app.previous_span();
        assert_eq!(app.span_list_state.selected(), None);
    }

    #[test]
    fn labels_by_kind() {
        let source = "@kim www.x.io !";
        let annotated = annotate(source);
        let labels: Vec<String> = annotated
            .iter()
            .map(|s| span_label(&s.kind, s.text(source)))
            .collect();
        assert_eq!(
            labels,
            vec![
                "Mention  @kim",
                "Text     \" \"",
                "Link     https://www.x.io",
                "Text     \" !\"",
            ]
        );
    }
}
