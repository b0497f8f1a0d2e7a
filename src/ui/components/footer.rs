//! Active counter and the "Limpar concluídas" button

use super::common::create_button_span;
use crate::constants::CLEAR_COMPLETED_BUTTON;
use crate::icons::IconService;
use crate::ui::core::component::contains;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
    Frame,
};

#[derive(Debug, Default)]
pub struct Footer {
    pub counter_text: String,
    pub focused: bool,
    pub icons: IconService,
    button_area: Rect,
}

impl Footer {
    pub fn new(icons: IconService) -> Self {
        Self {
            icons,
            ..Self::default()
        }
    }

    pub fn update_data(&mut self, counter_text: &str) {
        self.counter_text = counter_text.to_string();
    }

    fn button_text(&self) -> String {
        self.icons.action_button(self.icons.icons().actions.clear, CLEAR_COMPLETED_BUTTON)
    }
}

impl Component for Footer {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Action::ClearCompleted,
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left) && contains(self.button_area, mouse.column, mouse.row)
        {
            Action::ClearCompleted
        } else {
            Action::None
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let button = self.button_text();
        let button_width = Line::from(button.as_str()).width() as u16;
        let [counter_area, button_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(button_width)]).areas(rect);
        self.button_area = button_area;

        let counter = Paragraph::new(self.counter_text.as_str()).style(Style::default().fg(Color::White));
        f.render_widget(counter, counter_area);

        let button = Paragraph::new(Line::from(create_button_span(button, Color::Magenta, self.focused)));
        f.render_widget(button, button_area);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
