//! Todas / Ativas / Concluídas selector

use crate::model::TaskFilter;
use crate::ui::core::component::contains;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Tabs,
    Frame,
};

const PADDING: &str = " ";
const DIVIDER: &str = "|";

#[derive(Debug, Default)]
pub struct FilterTabs {
    pub selected: TaskFilter,
    area: Rect,
}

impl FilterTabs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, selected: TaskFilter) {
        self.selected = selected;
    }

    /// Column range covered by each tab, in the order the tabs are drawn
    fn tab_ranges(&self) -> Vec<(u16, u16, TaskFilter)> {
        let pad = Line::from(PADDING).width() as u16;
        let divider = Line::from(DIVIDER).width() as u16;

        let mut ranges = Vec::with_capacity(TaskFilter::ALL.len());
        let mut x = self.area.x;
        for (i, filter) in TaskFilter::ALL.iter().enumerate() {
            if i > 0 {
                x += divider;
            }
            let start = x;
            x += pad + Line::from(filter.label()).width() as u16 + pad;
            ranges.push((start, x, *filter));
        }
        ranges
    }

    /// Filter under a screen cell, if any
    pub fn filter_at(&self, column: u16, row: u16) -> Option<TaskFilter> {
        if !contains(self.area, column, row) {
            return None;
        }
        self.tab_ranges()
            .into_iter()
            .find(|(start, end, _)| column >= *start && column < *end)
            .map(|(_, _, filter)| filter)
    }
}

impl Component for FilterTabs {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::F(1) => Action::SetFilter(TaskFilter::All),
            KeyCode::F(2) => Action::SetFilter(TaskFilter::Active),
            KeyCode::F(3) => Action::SetFilter(TaskFilter::Completed),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        match self.filter_at(mouse.column, mouse.row) {
            Some(filter) => Action::SetFilter(filter),
            None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;
        let titles: Vec<Line> = TaskFilter::ALL.iter().map(|filter| Line::from(filter.label())).collect();
        let tabs = Tabs::new(titles)
            .select(self.selected.index())
            .padding(PADDING, PADDING)
            .divider(DIVIDER)
            .style(Style::default().fg(Color::Gray))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            );
        f.render_widget(tabs, rect);
    }
}
