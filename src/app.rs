use crate::catalog::{Catalog, Movie};
use crate::presenter::{self, RowModel};

/// Which view is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    List,
    Detail,
}

/// Input mode for the filter bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

pub const LIST_OVERHEAD: u16 = 9;

/// Main application state.
pub struct App {
    pub catalog: Catalog,
    pub should_quit: bool,
    pub view: View,
    pub show_help: bool,

    // Render models for every catalog row, built once with the catalog.
    pub rows: Vec<RowModel>,
    pub filtered_indices: Vec<usize>,

    // List view state
    pub list_page: Vec<usize>, // Current visible page of catalog row indices
    pub list_selected: usize,  // Index within visible page
    pub list_offset: usize,    // Offset into filtered_indices
    pub page_size: usize,

    pub filter: String,
    pub input_mode: InputMode,

    // Detail view state
    pub detail: Option<Movie>,
    pub detail_scroll: u16,

    // Status message
    pub status_msg: String,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let rows = presenter::render_rows(&catalog);
        let mut app = Self {
            catalog,
            should_quit: false,
            view: View::List,
            show_help: false,

            rows,
            filtered_indices: Vec::new(),

            list_page: Vec::new(),
            list_selected: 0,
            list_offset: 0,
            page_size: 20, // Initial default, will be updated on first render/resize

            filter: String::new(),
            input_mode: InputMode::Normal,

            detail: None,
            detail_scroll: 0,

            status_msg: String::new(),
        };
        app.apply_filter();
        app.status_msg = format!("{} movies loaded", app.catalog.len());
        app
    }

    /// Update the current page of visible rows based on offset.
    pub fn update_list_page(&mut self) {
        let start = self.list_offset;
        let end = (start + self.page_size).min(self.filtered_indices.len());
        self.list_page = self.filtered_indices[start..end].to_vec();
    }

    /// Update page size based on terminal height.
    pub fn update_page_size(&mut self, terminal_height: u16) {
        let new_size = terminal_height.saturating_sub(LIST_OVERHEAD) as usize;
        self.page_size = new_size.max(1);
        self.update_list_page();
    }

    /// Catalog index of the currently selected row, if any.
    pub fn selected_row(&self) -> Option<usize> {
        self.list_page.get(self.list_selected).copied()
    }

    /// Move selection down in the list.
    pub fn list_next(&mut self) {
        if self.list_page.is_empty() {
            return;
        }
        if self.list_selected + 1 < self.list_page.len() {
            self.list_selected += 1;
        } else {
            // Next page
            let new_offset = self.list_offset + self.page_size;
            if new_offset < self.filtered_indices.len() {
                self.list_offset = new_offset;
                self.list_selected = 0;
                self.update_list_page();
            }
        }
    }

    /// Move selection up in the list.
    pub fn list_prev(&mut self) {
        if self.list_selected > 0 {
            self.list_selected -= 1;
        } else if self.list_offset > 0 {
            // Prev page
            self.list_offset = self.list_offset.saturating_sub(self.page_size);
            self.update_list_page();
            self.list_selected = self.list_page.len().saturating_sub(1);
        }
    }

    pub fn list_page_down(&mut self) {
        let new_offset = self.list_offset + self.page_size;
        if new_offset < self.filtered_indices.len() {
            self.list_offset = new_offset;
            self.update_list_page();
            self.list_selected = 0;
        } else {
            self.jump_to_end();
        }
    }

    pub fn list_page_up(&mut self) {
        if self.list_offset > 0 {
            self.list_offset = self.list_offset.saturating_sub(self.page_size);
            self.update_list_page();
        }
        self.list_selected = 0;
    }

    /// Jump to the first page.
    pub fn jump_to_start(&mut self) {
        self.list_offset = 0;
        self.list_selected = 0;
        self.update_list_page();
    }

    /// Jump to the last page.
    pub fn jump_to_end(&mut self) {
        if self.filtered_indices.is_empty() {
            return;
        }
        let last_page_start =
            (self.filtered_indices.len().saturating_sub(1) / self.page_size) * self.page_size;
        self.list_offset = last_page_start;
        self.update_list_page();
        self.list_selected = self.list_page.len().saturating_sub(1);
    }

    /// Open the detail view for the currently selected movie.
    pub fn open_detail(&mut self) {
        if let Some(row) = self.selected_row() {
            if let Some(movie) = self.catalog.get(row) {
                self.detail = Some(movie.clone());
                self.detail_scroll = 0;
                self.view = View::Detail;
            }
        }
    }

    /// Leave the detail view.
    pub fn close_detail(&mut self) {
        self.detail = None;
        self.view = View::List;
    }

    /// Apply the filter over display titles and reset the list.
    ///
    /// Filtering narrows the visible rows; the catalog itself, and each
    /// row's variant assignment, stay fixed.
    pub fn apply_filter(&mut self) {
        let filter = self.filter.to_lowercase();
        self.filtered_indices.clear();

        if filter.is_empty() {
            self.filtered_indices = (0..self.rows.len()).collect();
        } else {
            for (i, row) in self.rows.iter().enumerate() {
                if row.display_title.to_lowercase().contains(&filter) {
                    self.filtered_indices.push(i);
                }
            }
        }

        self.list_offset = 0;
        self.list_selected = 0;
        self.update_list_page();

        self.status_msg = format!(
            "{} movies match \"{}\"",
            self.filtered_indices.len(),
            if self.filter.is_empty() { "all" } else { &self.filter }
        );
    }

    pub fn scroll_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(1);
    }

    pub fn scroll_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn scroll_page_down(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_add(20);
    }

    pub fn scroll_page_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(20);
    }
}
