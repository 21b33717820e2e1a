//! Root application component
//!
//! App owns the list view and routes Actions between it and the UI
//! components. Filtering, sorting and paging live in `ListView`; App only
//! translates events and keeps the table selection in range.

use crate::action::Action;
use crate::cli::Settings;
use crate::component::Component;
use crate::components::{
    draw_home_screen, DetailDialog, HelpDialog, HomeComponent, HomeRenderContext, QuitDialog,
};
use crate::config::Config;
use crate::model::modal::{Modal, ModalStack};
use crate::model::{CollegeRecord, ListView, SortPolicy};
use crate::services;
use anyhow::Result;
use chrono::{Datelike, Local};
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};
use std::path::PathBuf;
use tracing::{info, warn};

pub struct App {
    /// Filter/sort/paginate state over every record
    pub view: ListView,

    pub modals: ModalStack,

    /// Effective configuration; the sort policy is written back on change
    pub config: Config,

    /// Where to persist `config`; `None` keeps changes in memory
    pub config_path: Option<PathBuf>,

    pub should_quit: bool,

    pub error: Option<String>,

    pub status_message: Option<String>,

    /// Year for the JEE cutoff label
    pub year: i32,

    // ─────────────────────────────────────────────────────────────────────────
    // Child Components
    // ─────────────────────────────────────────────────────────────────────────
    pub home: HomeComponent,
    pub quit_dialog: QuitDialog,
    pub help_dialog: HelpDialog,
    pub detail_dialog: DetailDialog,
}

impl App {
    /// Build the app over `records`, applying the initial query and sort
    pub fn new(records: Vec<CollegeRecord>, settings: Settings) -> Result<App> {
        let Settings {
            config,
            initial_sort,
            initial_query,
        } = settings;

        let mut view = ListView::new(records, config.page_size, config.sort_policy)?;
        if let Some(query) = initial_query {
            view.set_query(query);
        }
        if let Some(key) = initial_sort {
            view.request_sort(key);
        }

        let mut home = HomeComponent::new();
        home.table.reset(view.displayed_len());

        info!(
            records = view.total_records(),
            page_size = view.page_size(),
            policy = %view.policy(),
            "app ready"
        );

        Ok(App {
            view,
            modals: ModalStack::new(),
            config,
            config_path: None,
            should_quit: false,
            error: None,
            status_message: None,
            year: Local::now().year(),
            home,
            quit_dialog: QuitDialog,
            help_dialog: HelpDialog::default(),
            detail_dialog: DetailDialog,
        })
    }

    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Load-more trigger for the last rendered row coming into view.
    ///
    /// Called after each draw; yields `LoadMore` while the table's last row
    /// is visible and matches remain.
    pub fn after_draw(&self) -> Option<Action> {
        if self.modals.is_empty() && self.home.table.last_row_visible() && self.view.has_more() {
            Some(Action::LoadMore)
        } else {
            None
        }
    }

    fn apply_query(&mut self, query: String) {
        self.view.set_query(query);
        self.home.table.reset(self.view.displayed_len());
    }

    fn load_more(&mut self) -> usize {
        let appended = self.view.load_more();
        self.home.table.clamp(self.view.displayed_len());
        appended
    }

    /// Reorder the view and keep the cursor on the same college when it is
    /// still displayed
    fn reorder(&mut self, apply: impl FnOnce(&mut ListView)) {
        let selected = self
            .home
            .selected_college(&self.view)
            .map(|college| college.id.clone());
        apply(&mut self.view);
        match selected.and_then(|id| self.view.position(&id)) {
            Some(row) => self.home.table.select_row(row),
            None => self.home.table.clamp(self.view.displayed_len()),
        }
    }

    fn toggle_sort_policy(&mut self) {
        let policy = match self.view.policy() {
            SortPolicy::Page => SortPolicy::Global,
            SortPolicy::Global => SortPolicy::Page,
        };
        self.reorder(|view| view.set_policy(policy));
        self.config.sort_policy = policy;
        let scope = match policy {
            SortPolicy::Page => "loaded",
            SortPolicy::Global => "all matching",
        };
        self.status_message = Some(format!("Sorting {} rows", scope));

        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save_to(path) {
                warn!(error = %e, "could not save sort policy");
                self.error = Some(format!("Could not save config: {}", e));
            }
        }
    }

    fn export(&mut self) {
        let path = self.config.export_path.clone();
        match services::export_csv(&path, self.view.displayed()) {
            Ok(rows) => {
                self.status_message = Some(format!("Exported {} colleges to {}", rows, path));
            }
            Err(e) => {
                warn!(error = %e, path = %path, "export failed");
                self.error = Some(e.to_string());
            }
        }
    }

    fn handle_modal_key_event(&mut self, modal: &Modal, key: KeyEvent) -> Result<Option<Action>> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.handle_key_event(key),
            Modal::Help => self.help_dialog.handle_key_event(key),
            Modal::Detail { .. } => self.detail_dialog.handle_key_event(key),
        }
    }

    fn draw_modal(&mut self, frame: &mut Frame, area: Rect, modal: &Modal) -> Result<()> {
        match modal {
            Modal::QuitConfirm => self.quit_dialog.draw(frame, area)?,
            Modal::Help => self.help_dialog.draw(frame, area)?,
            Modal::Detail { id } => {
                if let Some(college) = self.view.displayed().find(|c| &c.id == id) {
                    let compared = self.home.compared.contains(id);
                    self.detail_dialog.draw_college(frame, area, college, compared);
                }
            }
        }
        Ok(())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Component Implementation
// ═══════════════════════════════════════════════════════════════════════════════

impl Component for App {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        self.status_message = None;
        self.error = None;

        if let Some(modal) = self.modals.top().cloned() {
            self.handle_modal_key_event(&modal, key)
        } else {
            self.home.handle_key_event(key)
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if self.modals.is_empty() {
            self.home.handle_mouse_event(mouse)
        } else {
            Ok(None)
        }
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let len = self.view.displayed_len();
        match action {
            Action::Tick | Action::Resize(_, _) => {}
            Action::ForceQuit => self.should_quit = true,

            // ─────────────────────────────────────────────────────────────────
            // Navigation
            // ─────────────────────────────────────────────────────────────────
            Action::NextItem => {
                let at_bottom = self.home.table.next(len);
                if at_bottom && self.load_more() > 0 {
                    self.home.table.next(self.view.displayed_len());
                }
            }
            Action::PrevItem => self.home.table.previous(len),
            Action::FirstItem => self.home.table.first(len),
            Action::LastItem => self.home.table.last(len),
            Action::PageDown => {
                if self.home.table.page_down(len) && self.view.has_more() {
                    return Ok(Some(Action::LoadMore));
                }
            }
            Action::PageUp => self.home.table.page_up(len),

            // ─────────────────────────────────────────────────────────────────
            // List view
            // ─────────────────────────────────────────────────────────────────
            Action::SortBy(key) => self.reorder(|view| view.request_sort(key)),
            Action::LoadMore => {
                self.load_more();
            }
            Action::ToggleSortPolicy => self.toggle_sort_policy(),

            // ─────────────────────────────────────────────────────────────────
            // Search
            // ─────────────────────────────────────────────────────────────────
            Action::EnterSearchMode => self.home.search_mode = true,
            Action::ExitSearchMode => self.home.search_mode = false,
            Action::SearchInput(c) => {
                let mut query = self.view.query().to_string();
                query.push(c);
                self.apply_query(query);
            }
            Action::SearchBackspace => {
                let mut query = self.view.query().to_string();
                if query.pop().is_some() {
                    self.apply_query(query);
                }
            }
            Action::ClearSearch => self.apply_query(String::new()),

            // ─────────────────────────────────────────────────────────────────
            // Rows
            // ─────────────────────────────────────────────────────────────────
            Action::ToggleCompare => {
                if let Some(added) = self.home.toggle_compare(&self.view) {
                    let message = if added { "Added to compare" } else { "Removed from compare" };
                    self.status_message = Some(message.to_string());
                }
            }
            Action::ClearCompare => self.home.clear_compare(),
            Action::ExportCsv => self.export(),

            // ─────────────────────────────────────────────────────────────────
            // Modals
            // ─────────────────────────────────────────────────────────────────
            Action::OpenQuitDialog => self.modals.push(Modal::QuitConfirm),
            Action::OpenHelp => {
                self.help_dialog.scroll_offset = 0;
                self.modals.push(Modal::Help);
            }
            Action::OpenDetail => {
                if let Some(college) = self.home.selected_college(&self.view) {
                    let id = college.id.clone();
                    self.modals.push(Modal::Detail { id });
                }
            }
            Action::CloseModal => {
                self.modals.pop();
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let ctx = HomeRenderContext {
            view: &self.view,
            status_message: self.status_message.as_deref(),
            error: self.error.as_deref(),
            year: self.year,
        };
        draw_home_screen(frame, area, &mut self.home, &ctx);

        if let Some(modal) = self.modals.top().cloned() {
            self.draw_modal(frame, area, &modal)?;
        }
        Ok(())
    }
}
