use anyhow::{Context, Result};
use better_bullets_config::Config;
use better_bullets_engine::{
    DecoratedLine, Decoration, DecorationKind, Document, analyze, decorate, style,
};
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use std::{
    env,
    io::stdout,
    path::{Path, PathBuf},
    process,
};

#[derive(Debug, PartialEq)]
struct Args {
    file: PathBuf,
    config: Option<PathBuf>,
    dump: bool,
}

fn parse_args(args: &[String]) -> Result<Args, String> {
    let mut file = None;
    let mut config = None;
    let mut dump = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--dump" => dump = true,
            "--config" => {
                let path = iter.next().ok_or("--config requires a path")?;
                config = Some(Config::expand_path(Path::new(path)));
            }
            flag if flag.starts_with("--") => return Err(format!("Unknown option '{flag}'")),
            path if file.is_none() => file = Some(PathBuf::from(path)),
            extra => return Err(format!("Unexpected argument '{extra}'")),
        }
    }

    let file = file.ok_or("No markdown file provided")?;
    Ok(Args { file, config, dump })
}

/// Reads the explicit config file if given, otherwise the default location.
fn load_config(config_path: Option<&PathBuf>) -> Result<Config> {
    let loaded = match config_path {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if loaded.is_none() {
        log::info!("No config file found, using default settings");
    }
    Ok(loaded.unwrap_or_default())
}

fn read_document(path: &Path) -> Result<Document> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read '{}'", path.display()))?;
    Ok(Document::from_text(&content))
}

/// One line per decoration: `from..to kind payload`.
fn dump_lines(decorations: &[Decoration]) -> Vec<String> {
    decorations
        .iter()
        .map(|d| {
            let payload = match &d.kind {
                DecorationKind::Replace(bullet) => match bullet.style_string() {
                    Some(style) => format!("replace {} {{{style}}}", bullet.symbol),
                    None => format!("replace {}", bullet.symbol),
                },
                DecorationKind::Style(style) => format!("style {{{style}}}"),
            };
            format!("{}..{} {payload}", d.from, d.to)
        })
        .collect()
}

fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some(Color::Rgb(channel(0)?, channel(2)?, channel(4)?))
}

/// Maps engine declarations onto what a terminal can show.
fn terminal_style(declarations: &better_bullets_engine::Style) -> Style {
    let mut out = Style::default();
    for (property, value) in declarations.declarations() {
        out = match (property, value) {
            (style::FONT_WEIGHT, "bold") => out.add_modifier(Modifier::BOLD),
            (style::FONT_STYLE, "italic") => out.add_modifier(Modifier::ITALIC),
            (style::TEXT_DECORATION, "underline") => out.add_modifier(Modifier::UNDERLINED),
            // No terminal equivalent for larger text.
            (style::FONT_SIZE, _) => out.add_modifier(Modifier::BOLD),
            (style::COLOR, color) => match parse_hex_color(color) {
                Some(color) => out.fg(color),
                None => out,
            },
            (style::BACKGROUND_COLOR, color) => match parse_hex_color(color) {
                Some(color) => out.bg(color),
                None => out.add_modifier(Modifier::REVERSED),
            },
            _ => out,
        };
    }
    out
}

/// Renders one source line with its decorations applied.
///
/// `decorations` must belong to this line, in UTF-8 document offsets.
fn styled_line(text: &str, line_start: usize, decorations: &[Decoration]) -> Line<'static> {
    let mut spans = Vec::new();
    let mut cursor = 0;

    for d in decorations {
        let (from, to) = (d.from - line_start, d.to - line_start);
        if from > cursor {
            spans.push(Span::raw(text[cursor..from].to_string()));
        }
        match &d.kind {
            DecorationKind::Replace(bullet) => {
                let style = bullet.style.as_ref().map(terminal_style).unwrap_or_default();
                spans.push(Span::styled(bullet.symbol.clone(), style));
            }
            DecorationKind::Style(style) => {
                spans.push(Span::styled(text[from..to].to_string(), terminal_style(style)));
            }
        }
        cursor = to;
    }
    if cursor < text.len() {
        spans.push(Span::raw(text[cursor..].to_string()));
    }

    Line::from(spans)
}

fn render_document(doc: &Document, decorated: &[DecoratedLine]) -> Vec<Line<'static>> {
    let starts = doc.line_starts();
    let mut decorated = decorated.iter().peekable();

    doc.lines()
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let text = text.strip_suffix('\r').unwrap_or(text);
            match decorated.next_if(|line| line.line == index) {
                Some(line) => styled_line(text, starts[index], &line.decorations),
                None => Line::raw(text.to_string()),
            }
        })
        .collect()
}

struct App {
    file: PathBuf,
    config_path: Option<PathBuf>,
    config: Config,
    content: Vec<Line<'static>>,
    scroll: u16,
    status: String,
}

impl App {
    fn new(file: PathBuf, config_path: Option<PathBuf>, config: Config) -> Self {
        let mut app = Self {
            file,
            config_path,
            config,
            content: Vec::new(),
            scroll: 0,
            status: String::new(),
        };
        app.recompute();
        app
    }

    /// Re-reads the config and the file, then recomputes from scratch.
    fn refresh(&mut self) {
        match load_config(self.config_path.as_ref()) {
            Ok(config) => self.config = config,
            Err(e) => {
                log::warn!("Keeping previous settings: {e:#}");
                self.status = format!("Config error: {e}");
                return;
            }
        }
        self.recompute();
    }

    fn recompute(&mut self) {
        match read_document(&self.file) {
            Ok(doc) => {
                let decorated = analyze(&doc, self.config.tab_width(), &self.config.formatting);
                self.content = render_document(&doc, &decorated);
                self.status = format!("{} bullet lines", decorated.len());
            }
            Err(e) => {
                self.content = vec![Line::raw(format!("Error: {e:#}"))];
                self.status = "Read failed".to_string();
            }
        }
    }

    fn scroll_down(&mut self) {
        let max = u16::try_from(self.content.len().saturating_sub(1)).unwrap_or(u16::MAX);
        self.scroll = self.scroll.saturating_add(1).min(max);
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    let args = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!(
                "Usage: {} [--dump] [--config <path>] <file.md>",
                args.first().map_or("better-bullets-cli", String::as_str)
            );
            process::exit(1);
        }
    };

    let config = match load_config(args.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };

    if args.dump {
        let doc = read_document(&args.file)?;
        let decorations = decorate(&doc, config.tab_width(), &config.formatting);
        for line in dump_lines(&decorations) {
            println!("{line}");
        }
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(args.file, args.config, config);

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                KeyCode::Char('r') => app.refresh(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let title = format!("{} ({})", app.file.display(), app.status);
    let content = Paragraph::new(app.content.clone())
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((app.scroll, 0));

    f.render_widget(content, chunks[0]);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Up | "),
        Span::raw("↓/j: Down | "),
        Span::raw("r: Refresh"),
    ]);

    f.render_widget(Paragraph::new(vec![help_text]), chunks[1]);
}
