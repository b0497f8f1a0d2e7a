//! Overlay listing recent log messages

use crate::logger::Logger;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

pub struct LogsPanel {
    logger: Logger,
    pub visible: bool,
    pub scroll_offset: usize,
}

impl LogsPanel {
    pub fn new(logger: Logger) -> Self {
        Self {
            logger,
            visible: false,
            scroll_offset: 0,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn log_item(index: usize, log: &str) -> ListItem<'static> {
        let style = if index % 2 == 0 {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };

        match log.split_once("] ") {
            Some((timestamp, message)) => ListItem::new(Line::from(vec![
                Span::styled(format!("{}] ", timestamp), Style::default().fg(Color::DarkGray)),
                Span::styled(message.to_string(), style),
            ])),
            None => ListItem::new(Line::from(Span::styled(log.to_string(), style))),
        }
    }
}

impl Component for LogsPanel {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::F(12) => Action::ToggleLogs,
            KeyCode::Up | KeyCode::Char('k') => Action::LogsScrollUp,
            KeyCode::Down | KeyCode::Char('j') => Action::LogsScrollDown,
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ToggleLogs => {
                self.visible = !self.visible;
                self.scroll_offset = 0;
                Action::None
            }
            Action::LogsScrollUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                Action::None
            }
            Action::LogsScrollDown => {
                let total = self.logger.get_logs().len();
                if self.scroll_offset + 1 < total {
                    self.scroll_offset += 1;
                }
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.visible {
            return;
        }

        // Take 80% of the screen
        let modal_width = rect.width.saturating_mul(8) / 10;
        let modal_height = rect.height.saturating_mul(8) / 10;
        let modal_area = Rect {
            x: rect.x + (rect.width.saturating_sub(modal_width)) / 2,
            y: rect.y + (rect.height.saturating_sub(modal_height)) / 2,
            width: modal_width,
            height: modal_height,
        };

        f.render_widget(Clear, modal_area);
        let block = Block::default()
            .title(" Logs ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Cyan));
        f.render_widget(block, modal_area);

        let inner_area = modal_area.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });
        let [header_area, content_area] = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(inner_area);

        let key_style = Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD);
        let header = Paragraph::new(Line::from(vec![
            Span::styled("Esc", key_style),
            Span::styled(" close • ", Style::default().fg(Color::Gray)),
            Span::styled("↑/↓", key_style),
            Span::styled(" scroll", Style::default().fg(Color::Gray)),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(header, header_area);

        let logs = self.logger.get_logs();
        if logs.is_empty() {
            let empty = Paragraph::new("No logs yet")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center);
            f.render_widget(empty, content_area);
            return;
        }

        let items: Vec<ListItem> = logs
            .iter()
            .enumerate()
            .skip(self.scroll_offset)
            .take(content_area.height as usize)
            .map(|(i, log)| Self::log_item(i, log))
            .collect();
        f.render_widget(List::new(items), content_area);
    }
}
