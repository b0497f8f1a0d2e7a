//! Single-line field where new tasks are typed

use super::common::create_input_paragraph;
use crate::constants::NEW_TASK_PLACEHOLDER;
use crate::ui::core::component::contains;
use crate::ui::core::{Action, Component, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};

#[derive(Debug, Default)]
pub struct NewTaskInput {
    pub value: String,
    pub focused: bool,
    area: Rect,
}

impl NewTaskInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, value: &str) {
        if self.value != value {
            self.value = value.to_string();
        }
    }
}

impl Component for NewTaskInput {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => Action::SubmitNewTask,
            KeyCode::Esc => Action::InputChanged(String::new()),
            KeyCode::Backspace => {
                let mut value = self.value.clone();
                value.pop();
                Action::InputChanged(value)
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let mut value = self.value.clone();
                value.push(c);
                Action::InputChanged(value)
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) && contains(self.area, mouse.column, mouse.row) {
            Action::SetFocus(Focus::Input)
        } else {
            Action::None
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;
        let paragraph = create_input_paragraph(&self.value, NEW_TASK_PLACEHOLDER, self.focused);
        f.render_widget(paragraph, rect);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
