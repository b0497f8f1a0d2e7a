use crate::config::Config;
use crate::constants::{APP_TITLE, HINTS_CLEAR_BUTTON, HINTS_EDITING, HINTS_INPUT, HINTS_TASKS};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::model::{TaskList, TaskListError};
use crate::ui::components::{FilterTabs, Footer, LogsPanel, NewTaskInput, TaskListComponent, TaskRow};
use crate::ui::core::{
    actions::{Action, Focus},
    event_handler::EventType,
    Component,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Application state separate from UI concerns
#[derive(Debug, Default)]
pub struct AppState {
    pub tasks: TaskList,
    pub focus: Focus,
}

pub struct AppComponent {
    // Component composition
    input: NewTaskInput,
    tabs: FilterTabs,
    task_list: TaskListComponent,
    footer: Footer,
    logs: LogsPanel,

    // Application state
    state: AppState,

    logger: Logger,
    mouse_enabled: bool,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, logger: Logger) -> Self {
        let icons = IconService::new(config.ui.icon_theme);
        let mut app = Self {
            input: NewTaskInput::new(),
            tabs: FilterTabs::new(),
            task_list: TaskListComponent::new(icons.clone()),
            footer: Footer::new(icons),
            logs: LogsPanel::new(logger.clone()),
            state: AppState {
                tasks: TaskList::new(),
                focus: Focus::Input,
            },
            logger,
            mouse_enabled: config.ui.mouse_enabled,
            should_quit: false,
        };
        app.input.on_focus();
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn tasks(&self) -> &TaskList {
        &self.state.tasks
    }

    pub fn task_list(&self) -> &TaskListComponent {
        &self.task_list
    }

    pub fn logs_visible(&self) -> bool {
        self.logs.is_visible()
    }

    /// Update all components with current data
    fn sync_component_data(&mut self) {
        let tasks = &self.state.tasks;
        self.input.update_data(tasks.pending_input());
        self.tabs.update_data(tasks.filter());
        self.task_list
            .update_data(tasks.visible_tasks().map(TaskRow::from).collect(), tasks.filter());
        self.footer.update_data(tasks.counter_text());
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.state.focus == focus {
            return;
        }
        match self.state.focus {
            Focus::Input => self.input.on_blur(),
            Focus::Tasks => self.task_list.on_blur(),
            Focus::ClearButton => self.footer.on_blur(),
        }
        match focus {
            Focus::Input => self.input.on_focus(),
            Focus::Tasks => self.task_list.on_focus(),
            Focus::ClearButton => self.footer.on_focus(),
        }
        self.logger.log(format!("Focus: {:?} -> {:?}", self.state.focus, focus));
        self.state.focus = focus;
    }

    /// Handle keyboard shortcuts that work whatever has focus
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrevious,
            KeyCode::F(12) => Action::ToggleLogs,
            KeyCode::F(_) => self.tabs.handle_key_events(key),
            _ => Action::None,
        }
    }

    /// Apply an action to the task model. Unknown task ids are returned as errors.
    pub fn handle_app_action(&mut self, action: Action) -> Result<Action, TaskListError> {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::InputChanged(text) => {
                self.state.tasks.set_pending_input(text);
            }
            Action::SubmitNewTask => {
                if let Some(id) = self.state.tasks.submit_pending_input() {
                    self.logger.log(format!("Task: Added {}", id));
                }
            }
            Action::ToggleTask { id, completed } => {
                self.logger.log(format!("Task: Setting {} completed={}", id, completed));
                self.state.tasks.toggle_task(id, completed)?;
            }
            Action::EditTask(id) => {
                self.logger.log(format!("Task: Editing {}", id));
                self.state.tasks.enter_edit_mode(id)?;
                self.set_focus(Focus::Tasks);
            }
            Action::EditDraft { id, draft } => {
                self.state.tasks.update_draft(id, draft)?;
            }
            Action::SaveTask(id) => {
                self.logger.log(format!("Task: Saving {}", id));
                self.state.tasks.commit_draft(id)?;
            }
            Action::DeleteTask(id) => {
                self.logger.log(format!("Task: Deleting {}", id));
                self.state.tasks.request_delete(id)?;
            }
            Action::ClearCompleted => {
                let removed = self.state.tasks.clear_completed()?;
                self.logger.log(format!("Task: Cleared {} completed", removed));
            }
            Action::SetFilter(filter) => {
                self.logger.log(format!("Filter: {}", filter.label()));
                self.state.tasks.set_filter(filter);
            }
            Action::FocusNext => self.set_focus(self.state.focus.next()),
            Action::FocusPrevious => self.set_focus(self.state.focus.previous()),
            Action::SetFocus(focus) => self.set_focus(focus),
            _ => {}
        }
        Ok(Action::None)
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event_type: EventType) -> anyhow::Result<()> {
        let action = match event_type {
            EventType::Key(key) => self.handle_key_events(key),
            EventType::Mouse(mouse) => self.handle_mouse_events(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        let action = self.update(action);
        self.handle_app_action(action)?;

        self.sync_component_data();
        Ok(())
    }

    fn hints(&self) -> &'static str {
        match self.state.focus {
            Focus::Input => HINTS_INPUT,
            Focus::Tasks if self.task_list.is_editing() => HINTS_EDITING,
            Focus::Tasks => HINTS_TASKS,
            Focus::ClearButton => HINTS_CLEAR_BUTTON,
        }
    }
}

impl Component for AppComponent {
    /// Log panel first when open, then global keys, then the focused component
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.logs.is_visible() {
            return self.logs.handle_key_events(key);
        }

        let action = self.handle_global_key(key);
        if action != Action::None {
            return action;
        }

        match self.state.focus {
            Focus::Input => self.input.handle_key_events(key),
            Focus::Tasks => self.task_list.handle_key_events(key),
            Focus::ClearButton => self.footer.handle_key_events(key),
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if !self.mouse_enabled || self.logs.is_visible() {
            return Action::None;
        }

        let components: [&mut dyn Component; 4] =
            [&mut self.input, &mut self.tabs, &mut self.task_list, &mut self.footer];
        for component in components {
            let action = component.handle_mouse_events(mouse);
            if action != Action::None {
                return action;
            }
        }
        Action::None
    }

    /// Component-local actions (selection, log panel) are consumed here
    fn update(&mut self, action: Action) -> Action {
        let action = self.logs.update(action);
        self.task_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let [title_area, input_area, tabs_area, list_area, footer_area, hints_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(rect);

        let title = Paragraph::new(Line::from(Span::styled(
            APP_TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        f.render_widget(title, title_area);

        self.input.render(f, input_area);
        self.tabs.render(f, tabs_area);
        self.task_list.render(f, list_area);
        self.footer.render(f, footer_area);

        let hints = Paragraph::new(self.hints())
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        f.render_widget(hints, hints_area);

        // Log panel on top when open
        self.logs.render(f, rect);
    }
}
