use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use fountain_slate_config::Config;
use fountain_slate_engine::{Document, FileTree, FileTreeItem, TextAlign, io};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use relative_path::RelativePathBuf;
use std::{env, io::stdout, path::PathBuf, process};

struct App {
    scripts_path: PathBuf,
    file_tree: FileTree,
    tree_items: Vec<FileTreeItem>,
    file_list_state: ListState,
    current_content: Vec<Line<'static>>,
}

impl App {
    fn new(scripts_path: PathBuf) -> Result<Self> {
        let file_tree = io::build_file_tree(&scripts_path)?;
        let tree_items = file_tree.get_items();

        let mut app = Self {
            scripts_path,
            file_tree,
            tree_items,
            file_list_state: ListState::default(),
            current_content: Vec::new(),
        };

        // Select first item if available
        if !app.tree_items.is_empty() {
            app.file_list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_file(&mut self) {
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.tree_items.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_file(&mut self) {
        let i = match self.file_list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.tree_items.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        if let Some(index) = self.file_list_state.selected()
            && let Some(item) = self.tree_items.get(index)
        {
            if item.node.is_folder {
                // For folders, show folder info
                self.current_content = vec![
                    Line::from(format!("📁 {}", item.node.name)),
                    Line::default(),
                    Line::from("Press Enter/Space to toggle, → to expand, ← to collapse"),
                ];
            } else if let Some(ref script) = item.node.script_file {
                // Load the script and render its screenplay preview
                match io::read_script(script.relative_path(), &self.scripts_path) {
                    Ok(content) => {
                        let document = Document::from_fountain(&content);
                        self.current_content = render_screenplay(&document);
                    }
                    Err(e) => {
                        self.current_content = vec![Line::from(format!("Error reading script: {e}"))];
                    }
                }
            }
        }
    }

    fn activate_selected_item(&mut self) {
        if let Some(index) = self.file_list_state.selected()
            && let Some(item) = self.tree_items.get(index)
            && item.node.is_folder
        {
            self.toggle_folder(item.node.relative_path.clone());
            self.update_content_for_selection();
        }
        // Scripts don't need activation - they're already loaded by update_content_for_selection
    }

    fn toggle_folder(&mut self, relative_path: RelativePathBuf) {
        self.file_tree.toggle_folder(&relative_path);
        self.tree_items = self.file_tree.get_items();
    }

    fn expand_selected_folder(&mut self) {
        if let Some(index) = self.file_list_state.selected()
            && let Some(item) = self.tree_items.get(index)
            && item.node.is_folder
            && !item.node.is_expanded
        {
            self.file_tree.expand_folder(&item.node.relative_path);
            self.tree_items = self.file_tree.get_items();
            self.update_content_for_selection();
        }
    }

    fn collapse_selected_folder(&mut self) {
        if let Some(index) = self.file_list_state.selected()
            && let Some(item) = self.tree_items.get(index)
            && item.node.is_folder
            && item.node.is_expanded
        {
            self.file_tree.collapse_folder(&item.node.relative_path);
            self.tree_items = self.file_tree.get_items();
            self.update_content_for_selection();
        }
    }
}

/// Renders the structured document the way the editing surface would: each
/// block drawn with its own alignment and emphasis, one blank line between
/// blocks.
fn render_screenplay(document: &Document) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for block in &document.blocks {
        let alignment = match block.text_align {
            Some(TextAlign::Center) => Alignment::Center,
            Some(TextAlign::Right) => Alignment::Right,
            Some(TextAlign::Left) | None => Alignment::Left,
        };

        let mut style = Style::default();
        if block.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if block.heading_level.is_some() {
            style = style.fg(Color::Yellow);
        }

        // Dialogue blocks carry embedded newlines; draw each physical line
        for text_line in block.text.split('\n') {
            lines.push(Line::styled(text_line.to_string(), style).alignment(alignment));
        }
        lines.push(Line::default());
    }

    lines
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // Determine scripts path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let scripts_path;
    let from_config;

    if args.len() == 2 {
        // CLI argument provided - use it
        scripts_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        // No CLI argument - try config file
        match Config::load() {
            Ok(Some(config)) => {
                scripts_path = config.scripts_path;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No scripts path provided and no config file found");
                eprintln!("Usage: {} <scripts-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <scripts-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [scripts-folder-path]", args[0]);
        process::exit(1);
    };

    // Validate scripts directory using engine
    if let Err(e) = io::validate_scripts_dir(&scripts_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Scripts path '{}'{} is invalid: {e}",
            scripts_path.display(),
            source
        );
        process::exit(1);
    }

    log::info!(
        "fountain-slate browsing scripts in {}",
        scripts_path.display()
    );

    // Create the app before entering raw mode; a failed scan must not leave
    // the terminal in the alternate screen
    let mut app = App::new(scripts_path)?;

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
                KeyCode::Down | KeyCode::Char('j') => app.next_file(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_file(),
                KeyCode::Enter | KeyCode::Char(' ') => app.activate_selected_item(),
                KeyCode::Right => app.expand_selected_folder(),
                KeyCode::Left => app.collapse_selected_folder(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(f.area());

    // Script list panel
    let file_items: Vec<ListItem> = app
        .tree_items
        .iter()
        .map(|item| {
            let indent = "  ".repeat(item.depth);
            let icon = if item.node.is_folder {
                if item.node.is_expanded {
                    "📂 "
                } else {
                    "📁 "
                }
            } else {
                "🎬 "
            };
            let label = match &item.node.script_file {
                Some(script) => script.title(),
                None => item.node.name.as_str(),
            };
            let display_text = format!("{indent}{icon}{label}");
            ListItem::new(vec![Line::from(vec![Span::raw(display_text)])])
        })
        .collect();

    let files_list = List::new(file_items)
        .block(Block::default().borders(Borders::ALL).title("Scripts"))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Screenplay panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("Select a script to view its screenplay")]
    } else {
        app.current_content.clone()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Screenplay"))
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(content, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("Enter/Space: Toggle | →: Expand | ←: Collapse"),
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

    // App construction runs before the terminal enters raw mode, so its scan
    // errors have to surface as plain Err values.
    #[test]
    fn app_creation_fails_for_a_missing_scripts_dir() {
        let err = App::new(PathBuf::from("/this/path/does/not/exist"))
            .err()
            .expect("scanning a missing directory must fail");
        assert!(err.to_string().contains("scripts directory"));
    }
}
