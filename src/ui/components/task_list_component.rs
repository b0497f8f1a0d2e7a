use super::common::{create_button_span, CURSOR};
use crate::constants::{TOOLTIP_DELETE, TOOLTIP_EDIT, TOOLTIP_SAVE};
use crate::icons::IconService;
use crate::model::{TaskFilter, TaskId, TaskItem};
use crate::ui::core::component::contains;
use crate::ui::core::{Action, Component, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Snapshot of one visible task, as drawn
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: TaskId,
    pub label: String,
    pub completed: bool,
    /// Edit field contents while the row is in edit mode
    pub draft: Option<String>,
}

impl From<&TaskItem> for TaskRow {
    fn from(task: &TaskItem) -> Self {
        Self {
            id: task.id(),
            label: task.label().to_string(),
            completed: task.is_completed(),
            draft: task.edit_draft().map(str::to_string),
        }
    }
}

/// Part of a row hit by a click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowTarget {
    Checkbox,
    Edit,
    Delete,
    Save,
    Row,
}

pub struct TaskListComponent {
    pub rows: Vec<TaskRow>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub filter: TaskFilter,
    pub icons: IconService,
    pub focused: bool,
    inner_area: Rect,
}

impl Default for TaskListComponent {
    fn default() -> Self {
        Self::new(IconService::default())
    }
}

impl TaskListComponent {
    pub fn new(icons: IconService) -> Self {
        Self {
            rows: Vec::new(),
            selected_index: 0,
            list_state: ListState::default(),
            filter: TaskFilter::All,
            icons,
            focused: false,
            inner_area: Rect::default(),
        }
    }

    pub fn update_data(&mut self, rows: Vec<TaskRow>, filter: TaskFilter) {
        self.rows = rows;
        self.filter = filter;
        self.update_list_state();
    }

    fn update_list_state(&mut self) {
        if self.rows.is_empty() {
            self.selected_index = 0;
            self.list_state.select(None);
        } else {
            if self.selected_index >= self.rows.len() {
                self.selected_index = self.rows.len() - 1;
            }
            self.list_state.select(Some(self.selected_index));
        }
    }

    pub fn selected_row(&self) -> Option<&TaskRow> {
        self.rows.get(self.selected_index)
    }

    /// Whether keystrokes currently go to an edit field
    pub fn is_editing(&self) -> bool {
        self.selected_row().is_some_and(|row| row.draft.is_some())
    }

    fn edit_button(&self) -> String {
        self.icons.action_button(self.icons.icons().actions.edit, TOOLTIP_EDIT)
    }

    fn delete_button(&self) -> String {
        self.icons.action_button(self.icons.icons().actions.delete, TOOLTIP_DELETE)
    }

    fn save_button(&self) -> String {
        self.icons.action_button(self.icons.icons().actions.save, TOOLTIP_SAVE)
    }

    fn checkbox_text(&self, completed: bool) -> String {
        format!("{} ", self.icons.checkbox(completed))
    }

    fn handle_edit_key(&self, row: &TaskRow, draft: &str, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::SaveTask(row.id),
            KeyCode::Backspace => {
                let mut draft = draft.to_string();
                draft.pop();
                Action::EditDraft { id: row.id, draft }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut draft = draft.to_string();
                draft.push(c);
                Action::EditDraft { id: row.id, draft }
            }
            _ => Action::None,
        }
    }

    /// Width of the buttons drawn at the right end of a row
    fn buttons_width(&self, row: &TaskRow) -> usize {
        match row.draft {
            Some(_) => Line::from(self.save_button()).width(),
            None => Line::from(self.edit_button()).width() + 1 + Line::from(self.delete_button()).width(),
        }
    }

    /// Columns left for the label or edit field, once the checkbox, the
    /// buttons and a one column gap are placed. `None` when the buttons do
    /// not fit in the row at all.
    fn text_width(&self, row: &TaskRow, width: u16) -> Option<usize> {
        let prefix = match row.draft {
            Some(_) => 0,
            None => Line::from(self.checkbox_text(row.completed)).width(),
        };
        (width as usize).checked_sub(prefix + 1 + self.buttons_width(row))
    }

    fn create_row_item(&self, index: usize, row: &TaskRow, width: u16) -> ListItem<'static> {
        let selected = self.focused && index == self.selected_index;
        let text_width = self.text_width(row, width).unwrap_or(0);

        let (left, right): (Vec<Span<'static>>, Vec<Span<'static>>) = match &row.draft {
            Some(draft) => {
                let field_width = if selected {
                    text_width.saturating_sub(1)
                } else {
                    text_width
                };
                let mut left = vec![Span::styled(
                    tail_to_width(draft, field_width),
                    Style::default().fg(Color::White).add_modifier(Modifier::UNDERLINED),
                )];
                if selected && text_width > 0 {
                    left.push(Span::raw(CURSOR));
                }
                (left, vec![create_button_span(self.save_button(), Color::Green, selected)])
            }
            None => {
                let label_style = if row.completed {
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
                } else if selected {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                let checkbox_style = if row.completed {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::White)
                };
                (
                    vec![
                        Span::styled(self.checkbox_text(row.completed), checkbox_style),
                        Span::styled(truncate_to_width(&row.label, text_width), label_style),
                    ],
                    vec![
                        Span::styled(self.edit_button(), Style::default().fg(Color::Blue)),
                        Span::raw(" "),
                        Span::styled(self.delete_button(), Style::default().fg(Color::Red)),
                    ],
                )
            }
        };

        let left_width: usize = left.iter().map(Span::width).sum();
        let right_width: usize = right.iter().map(Span::width).sum();
        let gap = (width as usize).saturating_sub(left_width + right_width).max(1);

        let mut spans = left;
        spans.push(Span::raw(" ".repeat(gap)));
        spans.extend(right);
        ListItem::new(Line::from(spans))
    }

    /// Row and target under a screen cell, using the area of the last render.
    ///
    /// Buttons pushed past the right border are not targets.
    pub fn target_at(&self, column: u16, row: u16) -> Option<(usize, RowTarget)> {
        if !contains(self.inner_area, column, row) {
            return None;
        }
        let index = self.list_state.offset() + (row - self.inner_area.y) as usize;
        let task = self.rows.get(index)?;
        let buttons_visible = self.text_width(task, self.inner_area.width).is_some();
        let right_edge = self.inner_area.x + self.inner_area.width;

        let target = match &task.draft {
            Some(_) => {
                let save_width = Line::from(self.save_button()).width() as u16;
                if buttons_visible && column >= right_edge.saturating_sub(save_width) {
                    RowTarget::Save
                } else {
                    RowTarget::Row
                }
            }
            None => {
                let checkbox_width = Line::from(self.checkbox_text(task.completed)).width() as u16;
                let delete_width = Line::from(self.delete_button()).width() as u16;
                let edit_width = Line::from(self.edit_button()).width() as u16;
                let delete_start = right_edge.saturating_sub(delete_width);
                let edit_start = delete_start.saturating_sub(edit_width + 1);

                if column < self.inner_area.x + checkbox_width {
                    RowTarget::Checkbox
                } else if !buttons_visible {
                    RowTarget::Row
                } else if column >= delete_start {
                    RowTarget::Delete
                } else if column >= edit_start && column < edit_start + edit_width {
                    RowTarget::Edit
                } else {
                    RowTarget::Row
                }
            }
        };
        Some((index, target))
    }
}

fn char_width(c: char) -> usize {
    Span::raw(c.to_string()).width()
}

/// Cut `text` to `max` columns, ending with an ellipsis when shortened
fn truncate_to_width(text: &str, max: usize) -> String {
    if Span::raw(text).width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = char_width(c);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    if max > 0 {
        out.push('…');
    }
    out
}

/// Last `max` columns of `text`, so the end of an edit field stays in view
fn tail_to_width(text: &str, max: usize) -> String {
    let mut chars = Vec::new();
    let mut used = 0;
    for c in text.chars().rev() {
        let w = char_width(c);
        if used + w > max {
            break;
        }
        chars.push(c);
        used += w;
    }
    chars.into_iter().rev().collect()
}

impl Component for TaskListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if let Some(row) = self.selected_row() {
            if let Some(draft) = &row.draft {
                return self.handle_edit_key(row, draft, key);
            }

            match key.code {
                KeyCode::Down | KeyCode::Char('j') => return Action::NextTask,
                KeyCode::Up | KeyCode::Char('k') => return Action::PreviousTask,
                KeyCode::Char(' ') | KeyCode::Char('x') => {
                    return Action::ToggleTask {
                        id: row.id,
                        completed: !row.completed,
                    }
                }
                KeyCode::Char('e') | KeyCode::Enter => return Action::EditTask(row.id),
                KeyCode::Char('d') | KeyCode::Delete => return Action::DeleteTask(row.id),
                _ => {}
            }
        }

        // Keys that work on an empty list too
        match key.code {
            KeyCode::Left => Action::SetFilter(self.filter.previous()),
            KeyCode::Right => Action::SetFilter(self.filter.next()),
            KeyCode::Char('1') => Action::SetFilter(TaskFilter::All),
            KeyCode::Char('2') => Action::SetFilter(TaskFilter::Active),
            KeyCode::Char('3') => Action::SetFilter(TaskFilter::Completed),
            KeyCode::Char('c') => Action::ClearCompleted,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        let Some((index, target)) = self.target_at(mouse.column, mouse.row) else {
            return Action::None;
        };
        self.selected_index = index;
        self.list_state.select(Some(index));

        let row = &self.rows[index];
        match target {
            RowTarget::Checkbox => Action::ToggleTask {
                id: row.id,
                completed: !row.completed,
            },
            RowTarget::Edit => Action::EditTask(row.id),
            RowTarget::Delete => Action::DeleteTask(row.id),
            RowTarget::Save => Action::SaveTask(row.id),
            RowTarget::Row => Action::SetFocus(Focus::Tasks),
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextTask => {
                if !self.rows.is_empty() {
                    self.selected_index = (self.selected_index + 1).min(self.rows.len() - 1);
                    self.list_state.select(Some(self.selected_index));
                }
                Action::None
            }
            Action::PreviousTask => {
                self.selected_index = self.selected_index.saturating_sub(1);
                self.update_list_state();
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.focused { Color::Cyan } else { Color::Gray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        self.inner_area = rect.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });

        if self.rows.is_empty() {
            f.render_widget(Paragraph::new("").block(block), rect);
            return;
        }

        let width = self.inner_area.width;
        let items: Vec<ListItem> = self
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| self.create_row_item(index, row, width))
            .collect();

        let highlight = if self.focused {
            Style::default().bg(Color::Rgb(40, 40, 40))
        } else {
            Style::default()
        };
        let list = List::new(items).block(block).highlight_style(highlight);
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
