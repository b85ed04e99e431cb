//! Ratatui form backend implementation for FormBackend trait.
//!
//! Displays all fields at once with keyboard navigation and popup dialogs.

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    prelude::CrosstermBackend,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use registration_form::{
    Button, Choice, Dialog, Field, FormBackend, FormEvent, FormExit, FormSnapshot,
    Gender, Reaction, VariantArray,
};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::debug;

/// Error type for the Ratatui form backend.
#[derive(Debug, Error)]
pub enum RatatuiFormError {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Color theme for the TUI form.
#[derive(Debug, Clone)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub background: Color,
    pub text: Color,
    pub highlight: Color,
    pub error: Color,
    pub success: Color,
    pub border: Color,
    pub selected_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            secondary: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            highlight: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            border: Color::Gray,
            selected_bg: Color::DarkGray,
        }
    }
}

/// Ratatui form backend that displays all fields at once.
#[derive(Debug, Clone)]
pub struct RatatuiFormBackend {
    /// Title shown at the top of the form.
    title: String,
    /// Color theme for the UI.
    theme: Theme,
}

impl Default for RatatuiFormBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiFormBackend {
    /// Create a new Ratatui form backend with default settings.
    pub fn new() -> Self {
        Self {
            title: "Registration Form".to_string(),
            theme: Theme::default(),
        }
    }

    /// Set the title shown at the top of the form.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set a custom color theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    fn setup_terminal(&self) -> Result<Terminal<CrosstermBackend<Stdout>>, RatatuiFormError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    fn restore_terminal(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    ) -> Result<(), RatatuiFormError> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    fn event_loop(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        state: &mut FormState,
        handle: &mut dyn FnMut(FormEvent) -> Reaction,
    ) -> Result<FormExit, RatatuiFormError> {
        loop {
            terminal.draw(|frame| draw_form(frame, state, &self.title, &self.theme))?;

            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(event) = state.handle_key(key)
                    && let Some(exit) = state.apply(handle(event))
                {
                    return Ok(exit);
                }
            }
        }
    }
}

/// A stop in the Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Field(Field),
    Button(Button),
}

impl Focus {
    fn order() -> Vec<Focus> {
        Field::VARIANTS
            .iter()
            .map(|f| Focus::Field(*f))
            .chain(Button::VARIANTS.iter().map(|b| Focus::Button(*b)))
            .collect()
    }
}

/// The form state: widget values, focus and the open dialog.
#[derive(Debug)]
struct FormState {
    fields: FormSnapshot,
    /// Index into `Focus::order()`.
    focus_idx: usize,
    /// Cursor position (in chars) inside the focused text field.
    cursor: usize,
    /// Highlighted gender option before it is selected with Space/Enter.
    gender_highlight: Gender,
    dialog: Option<Dialog>,
}

impl FormState {
    fn new() -> Self {
        Self {
            fields: FormSnapshot::default(),
            focus_idx: 0,
            cursor: 0,
            gender_highlight: Gender::Male,
            dialog: None,
        }
    }

    fn focus(&self) -> Focus {
        let order = Focus::order();
        order[self.focus_idx % order.len()]
    }

    fn focused_text(&mut self) -> Option<&mut String> {
        match self.focus() {
            Focus::Field(Field::Name) => Some(&mut self.fields.name),
            Focus::Field(Field::Address) => Some(&mut self.fields.address),
            Focus::Field(Field::Email) => Some(&mut self.fields.email),
            Focus::Field(Field::Contact) => Some(&mut self.fields.contact),
            _ => None,
        }
    }

    fn set_focus(&mut self, idx: usize) {
        let len = Focus::order().len();
        self.focus_idx = idx % len;
        self.cursor = self.focused_text().map(|t| t.chars().count()).unwrap_or(0);
    }

    fn next_focus(&mut self) {
        self.set_focus(self.focus_idx + 1);
    }

    fn prev_focus(&mut self) {
        let len = Focus::order().len();
        self.set_focus(self.focus_idx + len - 1);
    }

    fn insert_char(&mut self, c: char) {
        let cursor = self.cursor;
        if let Some(text) = self.focused_text() {
            let at = byte_index(text, cursor);
            text.insert(at, c);
            self.cursor += 1;
        }
    }

    fn backspace(&mut self) {
        let cursor = self.cursor;
        if cursor == 0 {
            return;
        }
        if let Some(text) = self.focused_text() {
            let at = byte_index(text, cursor - 1);
            text.remove(at);
            self.cursor -= 1;
        }
    }

    fn delete(&mut self) {
        let cursor = self.cursor;
        if let Some(text) = self.focused_text()
            && cursor < text.chars().count()
        {
            let at = byte_index(text, cursor);
            text.remove(at);
        }
    }

    fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    fn cursor_right(&mut self) {
        let len = self
            .focused_text()
            .map(|t| t.chars().count())
            .unwrap_or(0);
        if self.cursor < len {
            self.cursor += 1;
        }
    }

    /// Left/Right on a field: move the cursor, cycle a choice, or move the gender highlight.
    fn step(&mut self, forward: bool) {
        match self.focus() {
            Focus::Field(Field::Course) => self.fields.course = cycle(self.fields.course, forward),
            Focus::Field(Field::YearLevel) => {
                self.fields.year_level = cycle(self.fields.year_level, forward)
            }
            Focus::Field(Field::Gender) => {
                self.gender_highlight = match self.gender_highlight {
                    Gender::Male => Gender::Female,
                    Gender::Female => Gender::Male,
                };
            }
            Focus::Field(_) if forward => self.cursor_right(),
            Focus::Field(_) => self.cursor_left(),
            Focus::Button(_) if forward => self.next_focus(),
            Focus::Button(_) => self.prev_focus(),
        }
    }

    /// Handle a key press. Returns the event to send to the controller, if any.
    fn handle_key(&mut self, key: KeyEvent) -> Option<FormEvent> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(FormEvent::Exit);
        }

        // The dialog is modal: only dismissal keys reach it.
        if self.dialog.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.dialog = None;
            }
            return None;
        }

        match key.code {
            KeyCode::Esc => return Some(FormEvent::Exit),
            KeyCode::BackTab | KeyCode::Up => self.prev_focus(),
            KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => self.prev_focus(),
            KeyCode::Tab | KeyCode::Down => self.next_focus(),
            KeyCode::Left => self.step(false),
            KeyCode::Right => self.step(true),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus() {
                Focus::Button(button) => return Some(button.event(&self.fields)),
                Focus::Field(Field::Gender) => self.fields.gender = Some(self.gender_highlight),
                Focus::Field(field) if field.is_choice() => {
                    if key.code == KeyCode::Enter {
                        self.next_focus();
                    }
                }
                Focus::Field(_) => {
                    if key.code == KeyCode::Enter {
                        self.next_focus();
                    } else {
                        self.insert_char(' ');
                    }
                }
            },
            // Shift is part of the character; other modifiers are shortcuts.
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                self.insert_char(c)
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => {
                self.cursor = self
                    .focused_text()
                    .map(|t| t.chars().count())
                    .unwrap_or(0);
            }
            _ => {}
        }
        None
    }

    /// Apply the controller's reaction. Returns `Some` when the form should close.
    fn apply(&mut self, reaction: Reaction) -> Option<FormExit> {
        match reaction {
            Reaction::ShowDialog(dialog) => {
                debug!(title = %dialog.title, "showing dialog");
                self.dialog = Some(dialog);
                None
            }
            Reaction::Reset(values) => {
                self.fields = values;
                self.gender_highlight = Gender::Male;
                self.set_focus(self.focus_idx);
                None
            }
            Reaction::Exit => Some(FormExit::Exit),
        }
    }
}

/// Byte offset of the `cursor`-th char, or the end of the string.
fn byte_index(text: &str, cursor: usize) -> usize {
    text.char_indices()
        .nth(cursor)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Next or previous entry of a choice, wrapping through the blank entry.
fn cycle<T: Choice>(current: Option<T>, forward: bool) -> Option<T> {
    let options: Vec<Option<T>> = T::options().collect();
    let idx = options.iter().position(|o| *o == current).unwrap_or(0);
    let len = options.len();
    let next = if forward {
        (idx + 1) % len
    } else {
        (idx + len - 1) % len
    };
    options[next]
}

/// Width of the label column.
const LABEL_WIDTH: u16 = 13;

fn draw_form(frame: &mut Frame, state: &FormState, title: &str, theme: &Theme) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Fields
            Constraint::Length(3), // Buttons
            Constraint::Length(1), // Help bar
        ])
        .split(area);

    let heading = Paragraph::new(title)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(theme.border)),
        );
    frame.render_widget(heading, chunks[0]);

    let form_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border));
    let form_area = form_block.inner(chunks[1]);
    frame.render_widget(form_block, chunks[1]);

    for (row, field) in Field::VARIANTS.iter().enumerate() {
        // One blank line between rows when there is room for it.
        let stride = if form_area.height as usize >= Field::VARIANTS.len() * 2 {
            2
        } else {
            1
        };
        let y = form_area.y + (row * stride) as u16;
        if y >= form_area.y + form_area.height {
            break;
        }
        let row_area = Rect {
            x: form_area.x + 1,
            y,
            width: form_area.width.saturating_sub(2),
            height: 1,
        };
        draw_field(frame, state, *field, row_area, theme);
    }

    draw_buttons(frame, state, chunks[2], theme);

    let help_text = if state.dialog.is_some() {
        "Enter/Esc: Close dialog"
    } else {
        "Tab/↑/↓: Move  ←/→: Change  Space/Enter: Select/Press  Esc: Exit"
    };
    let help = Paragraph::new(help_text).style(Style::default().fg(theme.border));
    frame.render_widget(help, chunks[3]);

    if let Some(dialog) = &state.dialog {
        draw_dialog(frame, dialog, area, theme);
    }
}

fn draw_field(frame: &mut Frame, state: &FormState, field: Field, area: Rect, theme: &Theme) {
    let is_focused = state.dialog.is_none() && state.focus() == Focus::Field(field);

    let label_style = if is_focused {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.secondary)
    };
    let label = format!("{:<width$}", field.label(), width = LABEL_WIDTH as usize);
    let mut spans = vec![Span::styled(label, label_style)];

    let text_style = Style::default().fg(theme.text);
    match field {
        Field::Course => spans.extend(choice_spans(state.fields.course, is_focused, theme)),
        Field::YearLevel => {
            spans.extend(choice_spans(state.fields.year_level, is_focused, theme))
        }
        Field::Gender => {
            for option in Gender::VARIANTS {
                let marker = if state.fields.gender == Some(*option) {
                    "(●)"
                } else {
                    "( )"
                };
                let style = if is_focused && state.gender_highlight == *option {
                    text_style.bg(theme.selected_bg).add_modifier(Modifier::BOLD)
                } else if state.fields.gender == Some(*option) {
                    Style::default().fg(theme.highlight)
                } else {
                    text_style
                };
                spans.push(Span::styled(format!("{marker} {option}"), style));
                spans.push(Span::raw("  "));
            }
        }
        _ => spans.push(Span::styled(
            state.fields.value(field).to_string(),
            text_style,
        )),
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    if is_focused
        && !field.is_choice()
        && let Some(cursor_x) = cursor_column(area, state.cursor)
    {
        frame.set_cursor_position((cursor_x, area.y));
    }
}

/// Terminal column of the text cursor, or `None` when it is past the row.
fn cursor_column(area: Rect, cursor: usize) -> Option<u16> {
    let offset = u16::try_from(cursor).ok()?;
    let x = area.x.saturating_add(LABEL_WIDTH).saturating_add(offset);
    (x < area.x.saturating_add(area.width)).then_some(x)
}

fn choice_spans<T: Choice>(selection: Option<T>, is_focused: bool, theme: &Theme) -> Vec<Span<'static>> {
    let label = T::selection_label(selection.as_ref()).to_string();
    let shown = if label.is_empty() {
        Span::styled("-", Style::default().fg(theme.border))
    } else {
        Span::styled(label, Style::default().fg(theme.text))
    };
    if is_focused {
        vec![
            Span::styled("◀ ", Style::default().fg(theme.primary)),
            shown,
            Span::styled(" ▶", Style::default().fg(theme.primary)),
        ]
    } else {
        vec![shown]
    }
}

fn draw_buttons(frame: &mut Frame, state: &FormState, area: Rect, theme: &Theme) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(Button::VARIANTS.iter().map(|_| Constraint::Ratio(1, 3)))
        .split(area);

    for (button, cell) in Button::VARIANTS.iter().zip(cells.iter()) {
        let is_focused = state.dialog.is_none() && state.focus() == Focus::Button(*button);
        let style = if is_focused {
            Style::default()
                .fg(theme.text)
                .bg(theme.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD)
        };
        let text = if is_focused {
            format!("[ {button} ]")
        } else {
            button.to_string()
        };
        let widget = Paragraph::new(text)
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(if is_focused {
                        theme.primary
                    } else {
                        theme.border
                    })),
            );
        frame.render_widget(widget, *cell);
    }
}

fn draw_dialog(frame: &mut Frame, dialog: &Dialog, area: Rect, theme: &Theme) {
    let width = (dialog.message.chars().count() as u16 + 8)
        .max(dialog.title.chars().count() as u16 + 6)
        .max(24)
        .min(area.width);
    let height = 6.min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    let accent = dialog_accent(dialog, theme);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            dialog.message.clone(),
            Style::default().fg(theme.text),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(theme.text)
                .bg(theme.selected_bg)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let body = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .title(format!(" {} ", dialog.title))
            .title_style(Style::default().fg(accent).add_modifier(Modifier::BOLD)),
    );

    frame.render_widget(Clear, popup);
    frame.render_widget(body, popup);
}

fn dialog_accent(dialog: &Dialog, theme: &Theme) -> Color {
    if dialog.is_error() {
        theme.error
    } else {
        theme.success
    }
}

impl FormBackend for RatatuiFormBackend {
    type Error = RatatuiFormError;

    fn run(
        &self,
        handle: &mut dyn FnMut(FormEvent) -> Reaction,
    ) -> Result<FormExit, Self::Error> {
        let mut terminal = self.setup_terminal()?;
        let mut state = FormState::new();

        let result = self.event_loop(&mut terminal, &mut state, handle);

        // Restore the terminal even if the loop failed.
        self.restore_terminal(&mut terminal)?;
        result
    }
}
