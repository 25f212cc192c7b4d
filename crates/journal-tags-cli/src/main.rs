use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use journal_tags_config::Config;
use journal_tags_engine::{
    blocks::{self, BlockKind},
    editing::{Cmd, EditorSession, InsertMenu, MenuSpacing, Patch, Point, Size},
    io::{self, DraftStore},
    models::{SaveOutput, StorageKeys, decode_id, encode_id, entry_blocks_endpoint},
    render::{ListStyle, PreviewNode, PreviewOptions, render_preview},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{
    env,
    io::{Stdout, stdout},
    ops::Range,
    path::PathBuf,
    process,
    time::Instant,
};

/// Insert menu popup size in cells, borders included.
const MENU_SIZE: Size = Size {
    width: 24,
    height: BlockKind::ALL.len() as u16 + 2,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Continue,
    Quit,
}

struct App {
    entry_id: String,
    keys: StorageKeys,
    store: DraftStore,
    session: EditorSession,
    preview: PreviewOptions,
    /// Fixed end of a shift-selection.
    anchor: Option<usize>,
    /// Moving end of the selection, where the terminal cursor is drawn.
    head: usize,
    menu_state: ListState,
    last_save: Option<SaveOutput>,
    status: String,
    editor_area: Rect,
    scroll: u16,
    started: Instant,
}

impl App {
    fn new(entry_id: String, store: DraftStore, preview: PreviewOptions) -> Result<Self> {
        let keys = StorageKeys::for_entry(Some(&entry_id));
        let session = match store.load(&keys)? {
            Some(source) => EditorSession::from_source(source),
            None => EditorSession::new(),
        }
        .with_menu(InsertMenu::with_spacing(MenuSpacing {
            pointer_offset: 1,
            viewport_padding: 1,
        }));
        let head = session.caret();

        Ok(Self {
            entry_id,
            keys,
            store,
            session,
            preview,
            anchor: None,
            head,
            menu_state: ListState::default(),
            last_save: None,
            status: String::new(),
            editor_area: Rect::default(),
            scroll: 0,
            started: Instant::now(),
        })
    }

    fn follow(&mut self, patch: Patch) {
        self.anchor = None;
        self.head = patch.new_selection.end;
    }

    fn collapse_to(&mut self, offset: usize) {
        self.anchor = None;
        self.session.set_selection(offset..offset);
        self.head = self.session.caret();
    }

    fn extend_to(&mut self, offset: usize) {
        let anchor = *self.anchor.get_or_insert(self.head);
        self.head = offset.min(self.session.len_chars());
        self.session.set_selection(anchor..self.head);
    }

    fn move_to(&mut self, offset: usize, extend: bool) {
        if extend {
            self.extend_to(offset);
        } else {
            self.collapse_to(offset);
        }
    }

    fn type_text(&mut self, text: &str) {
        let selection = self.session.selection();
        let cmd = if selection.is_empty() {
            Cmd::InsertText {
                at: selection.start,
                text: text.to_string(),
            }
        } else {
            Cmd::ReplaceRange {
                range: selection,
                text: text.to_string(),
            }
        };
        let patch = self.session.apply(cmd);
        self.follow(patch);
    }

    fn delete_backward(&mut self) {
        let selection = self.session.selection();
        let range = if selection.is_empty() {
            if selection.start == 0 {
                return;
            }
            selection.start - 1..selection.start
        } else {
            selection
        };
        let patch = self.session.apply(Cmd::DeleteRange { range });
        self.follow(patch);
    }

    fn delete_forward(&mut self) {
        let selection = self.session.selection();
        let range = if selection.is_empty() {
            if selection.start >= self.session.len_chars() {
                return;
            }
            selection.start..selection.start + 1
        } else {
            selection
        };
        let patch = self.session.apply(Cmd::DeleteRange { range });
        self.follow(patch);
    }

    fn move_horizontal(&mut self, forward: bool, extend: bool) {
        let selection = self.session.selection();
        if !extend && !selection.is_empty() {
            let edge = if forward { selection.end } else { selection.start };
            self.collapse_to(edge);
            return;
        }
        let target = if forward {
            self.head + 1
        } else {
            self.head.saturating_sub(1)
        };
        self.move_to(target, extend);
    }

    fn move_vertical(&mut self, down: bool, extend: bool) {
        let text = self.session.text();
        let (line, col) = line_col(&text, self.head);
        let target_line = if down {
            line + 1
        } else if line == 0 {
            return;
        } else {
            line - 1
        };
        self.move_to(offset_at(&text, target_line, col), extend);
    }

    fn move_line_edge(&mut self, end: bool, extend: bool) {
        let text = self.session.text();
        let (line, _) = line_col(&text, self.head);
        let col = if end { usize::MAX } else { 0 };
        self.move_to(offset_at(&text, line, col), extend);
    }

    /// Terminal cell of the caret, given the last drawn editor area.
    fn caret_cell(&self) -> Point {
        let text = self.session.text();
        let (line, col) = line_col(&text, self.head);
        let line = u16::try_from(line).unwrap_or(u16::MAX);
        let col = u16::try_from(col).unwrap_or(u16::MAX);
        Point {
            x: self.editor_area.x.saturating_add(1).saturating_add(col),
            y: self
                .editor_area
                .y
                .saturating_add(1)
                .saturating_add(line.saturating_sub(self.scroll)),
        }
    }

    /// Character offset under a terminal cell inside the editor, if any.
    fn offset_at_cell(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.editor_area;
        let inside = column > area.x
            && row > area.y
            && column < area.x + area.width.saturating_sub(1)
            && row < area.y + area.height.saturating_sub(1);
        if !inside {
            return None;
        }
        let line = usize::from(row - area.y - 1 + self.scroll);
        let col = usize::from(column - area.x - 1);
        Some(offset_at(&self.session.text(), line, col))
    }

    fn open_menu(&mut self) {
        let pointer = self.caret_cell();
        self.session.open_menu(pointer);
        self.menu_state.select(Some(0));
    }

    fn save(&mut self) {
        let output = self.session.snapshot().into_save_output();
        match self.store.save(&self.keys, &output) {
            Ok(()) => {
                self.session.save();
                self.status = format!("Saved {} blocks", output.blocks.len());
                self.last_save = Some(output);
            }
            Err(e) => {
                log::error!("Failed to save draft: {e}");
                self.status = format!("Save failed: {e}");
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.session.menu().is_visible() {
            self.handle_menu_key(key);
            return Action::Continue;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        match key.code {
            KeyCode::Char('q') if ctrl => return Action::Quit,
            KeyCode::Char('s') if ctrl => self.save(),
            KeyCode::Char('b') if ctrl => self.open_menu(),
            KeyCode::Esc => {
                if self.session.is_dirty() {
                    log::info!("Discarding unsaved changes to entry {}", self.entry_id);
                }
                self.session.cancel();
                return Action::Quit;
            }
            KeyCode::Char(c) if !ctrl => self.type_text(&c.to_string()),
            KeyCode::Enter => self.type_text("\n"),
            KeyCode::Backspace => self.delete_backward(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => self.move_horizontal(false, shift),
            KeyCode::Right => self.move_horizontal(true, shift),
            KeyCode::Up => self.move_vertical(false, shift),
            KeyCode::Down => self.move_vertical(true, shift),
            KeyCode::Home => self.move_line_edge(false, shift),
            KeyCode::End => self.move_line_edge(true, shift),
            _ => {}
        }
        Action::Continue
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        let count = BlockKind::ALL.len();
        let selected = self.menu_state.selected().unwrap_or(0);
        match key.code {
            KeyCode::Up => self.menu_state.select(Some((selected + count - 1) % count)),
            KeyCode::Down => self.menu_state.select(Some((selected + 1) % count)),
            KeyCode::Enter => {
                if let Some(kind) = BlockKind::ALL.get(selected).copied() {
                    let patch = self.session.insert_from_menu(kind);
                    self.follow(patch);
                    self.status = format!("Inserted {}", kind.label());
                }
            }
            KeyCode::Esc => self.session.close_menu(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.session.menu().is_visible() {
            self.session.close_menu();
            return;
        }
        if let Some(offset) = self.offset_at_cell(mouse.column, mouse.row) {
            self.collapse_to(offset);
        }
        let now_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let pointer = Point {
            x: mouse.column,
            y: mouse.row,
        };
        if self.session.register_tap(now_ms, pointer) {
            self.menu_state.select(Some(0));
        }
    }
}

/// Line and column (both in characters) of a character offset.
fn line_col(text: &str, offset: usize) -> (usize, usize) {
    let mut line = 0;
    let mut col = 0;
    for ch in text.chars().take(offset) {
        if ch == '\n' {
            line += 1;
            col = 0;
        } else {
            col += 1;
        }
    }
    (line, col)
}

/// Character offset of `line`/`col`, clamping the column to the line and the
/// line to the text.
fn offset_at(text: &str, line: usize, col: usize) -> usize {
    let mut offset = 0;
    for (i, content) in text.split('\n').enumerate() {
        let len = content.chars().count();
        if i == line {
            return offset + col.min(len);
        }
        offset += len + 1;
    }
    text.chars().count()
}

fn editor_lines(text: &str, selection: &Range<usize>) -> Vec<Line<'static>> {
    let selected = Style::default().add_modifier(Modifier::REVERSED);
    let mut lines = Vec::new();
    let mut offset = 0;

    for content in text.split('\n') {
        let chars: Vec<char> = content.chars().collect();
        let len = chars.len();
        let start = selection.start.clamp(offset, offset + len) - offset;
        let end = selection.end.clamp(offset, offset + len) - offset;

        let before: String = chars[..start].iter().collect();
        let inside: String = chars[start..end].iter().collect();
        let after: String = chars[end..].iter().collect();
        lines.push(Line::from(vec![
            Span::raw(before),
            Span::styled(inside, selected),
            Span::raw(after),
        ]));
        offset += len + 1;
    }

    lines
}

fn preview_lines(blocks: &[blocks::Block], options: &PreviewOptions) -> Vec<Line<'static>> {
    let muted = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);
    let mut lines = Vec::new();

    for block in blocks {
        let node = render_preview(block, options);
        if let Some(placeholder) = node.placeholder() {
            lines.push(Line::styled(placeholder, muted));
            lines.push(Line::default());
            continue;
        }

        match node {
            PreviewNode::Heading { level, text } => {
                let color = if level == 1 {
                    Color::Yellow
                } else {
                    Color::LightYellow
                };
                let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
                lines.push(Line::styled(text, style));
            }
            PreviewNode::Paragraph(text) => {
                lines.extend(text.lines().map(|l| Line::raw(l.to_string())));
            }
            PreviewNode::List { style, items } => {
                let marker = match style {
                    ListStyle::Bullet => "• ",
                    ListStyle::Check => "☐ ",
                };
                lines.extend(
                    items
                        .into_iter()
                        .map(|item| Line::raw(format!("{marker}{item}"))),
                );
            }
            PreviewNode::Preformatted { text, .. } => {
                let style = Style::default().fg(Color::Green);
                lines.extend(text.lines().map(|l| Line::styled(l.to_string(), style)));
            }
            PreviewNode::Quote(text) => {
                let style = Style::default().add_modifier(Modifier::ITALIC);
                lines.extend(text.lines().map(|l| Line::styled(format!("│ {l}"), style)));
            }
            PreviewNode::Media { kind, src } => {
                let label = format!("{kind:?}").to_lowercase();
                let src = src.unwrap_or_default();
                lines.push(Line::raw(format!("[{label}] {src}")));
            }
            PreviewNode::Link { kind, href } => {
                let style = Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED);
                let href = href.unwrap_or_default();
                lines.push(Line::styled(format!("{}: {href}", kind.label()), style));
            }
            PreviewNode::Embed { markup } => {
                let markup = markup.unwrap_or_default();
                lines.extend(markup.lines().map(|l| Line::styled(l.to_string(), muted)));
            }
            PreviewNode::Callout(text) => {
                let style = Style::default().fg(Color::Yellow);
                lines.extend(text.lines().map(|l| Line::styled(format!("! {l}"), style)));
            }
            PreviewNode::Divider => lines.push(Line::raw("─".repeat(20))),
        }
        lines.push(Line::default());
    }

    lines
}

/// Lines shown on stderr after the terminal is restored.
fn exit_notes(app: &App, api_base_url: Option<&str>) -> Vec<String> {
    let mut notes = Vec::new();
    if app.last_save.is_some()
        && let Some(base_url) = api_base_url
    {
        notes.push(format!("Payload for POST {}", entry_blocks_endpoint(base_url)));
    }
    notes.push(format!("Return to /career_paths/{}", encode_id(&app.entry_id)));
    notes
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    if !(2..=3).contains(&args.len()) {
        eprintln!("Usage: {} <entry-id> [drafts-folder]", args[0]);
        process::exit(1);
    }

    let entry_id = decode_id(&args[1]);

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) if args.len() == 2 => {
            eprintln!("Error: Failed to load config file: {e}");
            eprintln!("Usage: {} <entry-id> [drafts-folder]", args[0]);
            process::exit(1);
        }
        Err(e) => {
            log::warn!("Ignoring config file: {e}");
            None
        }
    };

    let (drafts_path, from_config) = match (args.get(2), &config) {
        (Some(path), _) => (PathBuf::from(path), false),
        (None, Some(config)) => (config.drafts_path.clone(), true),
        (None, None) => {
            eprintln!("Error: No drafts folder provided and no config file found");
            eprintln!("Usage: {} <entry-id> [drafts-folder]", args[0]);
            eprintln!("Or create a config file at {}", config_path.display());
            process::exit(1);
        }
    };

    if let Err(e) = io::validate_drafts_dir(&drafts_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Drafts path '{}'{} is invalid: {e}",
            drafts_path.display(),
            source
        );
        process::exit(1);
    }

    let preview = PreviewOptions {
        keep_empty_list_items: config
            .as_ref()
            .is_some_and(|c| c.preview.keep_empty_list_items),
    };
    let mut app = App::new(entry_id, DraftStore::new(drafts_path), preview)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

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
        eprintln!("{err:?}");
    }

    // Hand the last save to whatever persists it remotely
    let api_base_url = config.as_ref().and_then(|c| c.api_base_url.as_deref());
    for note in exit_notes(&app, api_base_url) {
        eprintln!("{note}");
    }
    if let Some(output) = &app.last_save {
        println!("{}", output.payload(&app.entry_id).to_json()?);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if app.handle_key(key) == Action::Quit {
                    return Ok(());
                }
            }
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());
    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)].as_ref())
        .split(rows[0]);

    // Editor panel
    app.editor_area = panes[0];
    let text = app.session.text();
    let (line, _) = line_col(&text, app.head);
    let line = u16::try_from(line).unwrap_or(u16::MAX);
    let visible = panes[0].height.saturating_sub(2).max(1);
    if line < app.scroll {
        app.scroll = line;
    } else if line >= app.scroll.saturating_add(visible) {
        app.scroll = line - visible + 1;
    }

    let dirty = if app.session.is_dirty() { " *" } else { "" };
    let editor = Paragraph::new(editor_lines(&text, &app.session.selection()))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Entry {}{dirty}", app.entry_id)),
        )
        .scroll((app.scroll, 0));
    f.render_widget(editor, panes[0]);

    // Preview panel
    let preview = Paragraph::new(preview_lines(&app.session.blocks(), &app.preview))
        .block(Block::default().borders(Borders::ALL).title("Preview"))
        .wrap(Wrap { trim: false });
    f.render_widget(preview, panes[1]);

    // Instructions
    let help = Line::from(vec![
        Span::raw("Ctrl-B: Insert block | Ctrl-S: Save | Esc: Cancel | Ctrl-Q: Quit"),
        Span::styled(
            format!("  {}", app.status),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    f.render_widget(Paragraph::new(help), rows[1]);

    if app.session.menu().is_visible() {
        let area = f.area();
        let viewport = Size {
            width: area.width,
            height: area.height,
        };
        app.session.menu_mut().fit_within(viewport, MENU_SIZE);
        let position = app.session.menu().position();
        let popup = Rect::new(position.x, position.y, MENU_SIZE.width, MENU_SIZE.height)
            .intersection(area);

        let items: Vec<ListItem> = BlockKind::ALL
            .iter()
            .map(|kind| ListItem::new(kind.label()))
            .collect();
        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Insert"))
            .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

        f.render_widget(Clear, popup);
        f.render_stateful_widget(menu, popup, &mut app.menu_state);
    } else {
        let caret = app.caret_cell();
        f.set_cursor_position(Position::new(caret.x, caret.y));
    }
}
