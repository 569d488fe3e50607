use crate::catalog::{Catalog, WordPair};
use crate::filter;
use crate::ui::detail;
use ratatui::layout::Rect;
use tracing::{debug, info};

/// Input mode for the search bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Whether the detail overlay is shown, and for which pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection<'a> {
    #[default]
    Closed,
    Open(&'a WordPair),
}

impl<'a> Selection<'a> {
    /// Open `pair`, replacing whatever was open before.
    pub fn select(&mut self, pair: &'a WordPair) {
        *self = Self::Open(pair);
    }

    /// Close the overlay. Returns `false` when it was already closed.
    pub fn dismiss(&mut self) -> bool {
        matches!(std::mem::take(self), Self::Open(_))
    }

    pub fn current(&self) -> Option<&'a WordPair> {
        match *self {
            Self::Open(pair) => Some(pair),
            Self::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }
}

/// Header, search bar, match line, footer, status bar and list borders.
pub const LIST_OVERHEAD: u16 = 11;

/// Rows taken by one card in the list.
pub const CARD_HEIGHT: u16 = 4;

/// Main application state.
pub struct App<'a> {
    pub catalog: &'a Catalog,
    pub should_quit: bool,
    pub show_help: bool,

    pub query: String,
    pub input_mode: InputMode,
    pub filtered_indices: Vec<usize>,

    // List view state
    pub list_selected: usize,
    pub list_offset: usize,
    pub cards_per_page: usize,
    pub screen: Rect,

    // Detail overlay state
    pub selection: Selection<'a>,
    pub detail_scroll: u16,

    pub status_msg: String,
}

impl<'a> App<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            should_quit: false,
            show_help: false,

            query: String::new(),
            input_mode: InputMode::Normal,
            filtered_indices: (0..catalog.len()).collect(),

            list_selected: 0,
            list_offset: 0,
            cards_per_page: 5, // replaced once the terminal size is known
            screen: Rect::new(0, 0, 80, 24),

            selection: Selection::Closed,
            detail_scroll: 0,

            status_msg: format!("{} pairs loaded", catalog.len()),
        }
    }

    /// Replace the search query and recompute the visible pairs.
    pub fn on_query_change(&mut self, query: String) {
        self.query = query;
        self.apply_filter();
    }

    pub fn push_query_char(&mut self, c: char) {
        let mut query = std::mem::take(&mut self.query);
        query.push(c);
        self.on_query_change(query);
    }

    pub fn pop_query_char(&mut self) {
        let mut query = std::mem::take(&mut self.query);
        query.pop();
        self.on_query_change(query);
    }

    pub fn clear_query(&mut self) {
        self.on_query_change(String::new());
    }

    /// Apply the current query and reset the list cursor.
    pub fn apply_filter(&mut self) {
        self.filtered_indices = filter::filter_indices(self.catalog, &self.query);
        self.list_selected = 0;
        self.list_offset = 0;
        debug!(query = %self.query, matches = self.filtered_indices.len(), "filter applied");

        self.status_msg = if self.query.is_empty() {
            format!("{} pairs", self.catalog.len())
        } else {
            format!(
                "{} of {} pairs match \"{}\"",
                self.filtered_indices.len(),
                self.catalog.len(),
                self.query
            )
        };
    }

    /// Pairs currently shown in the list, in catalog order.
    pub fn visible_pairs(&self) -> impl Iterator<Item = &'a WordPair> + '_ {
        let catalog = self.catalog;
        let pairs = catalog.pairs();
        self.filtered_indices.iter().map(move |&i| &pairs[i])
    }

    pub fn visible_pair(&self, position: usize) -> Option<&'a WordPair> {
        let catalog = self.catalog;
        self.filtered_indices
            .get(position)
            .and_then(|&i| catalog.pairs().get(i))
    }

    /// Number of matches, reported only while a query is active.
    pub fn match_count(&self) -> Option<usize> {
        (!self.query.is_empty()).then_some(self.filtered_indices.len())
    }

    /// True when a query is active and nothing matched it.
    pub fn shows_empty_state(&self) -> bool {
        !self.query.is_empty() && self.filtered_indices.is_empty()
    }

    pub fn selected(&self) -> Option<&'a WordPair> {
        self.selection.current()
    }

    /// Open the detail overlay for `pair`.
    pub fn select_record(&mut self, pair: &'a WordPair) {
        info!(id = pair.id, word1 = %pair.word1, word2 = %pair.word2, "detail opened");
        self.selection.select(pair);
        self.detail_scroll = 0;
        self.status_msg = format!("#{} {} — {}", pair.id, pair.word1, pair.word2);
    }

    /// Open the detail overlay for the pair with `id`. Unknown ids are ignored.
    pub fn on_record_activated(&mut self, id: u32) -> bool {
        let catalog = self.catalog;
        match catalog.get(id) {
            Some(pair) => {
                if let Some(position) = self.position_of(id) {
                    self.list_selected = position;
                    self.scroll_into_view();
                }
                self.select_record(pair);
                true
            }
            None => {
                debug!(id, "activation of unknown pair ignored");
                false
            }
        }
    }

    /// Close the detail overlay. Closing when nothing is open does nothing.
    pub fn on_dismiss(&mut self) {
        if self.selection.dismiss() {
            info!("detail dismissed");
            self.detail_scroll = 0;
            self.status_msg.clear();
        }
    }

    /// Open the pair under the list cursor.
    pub fn open_selected(&mut self) {
        if let Some(pair) = self.visible_pair(self.list_selected) {
            self.on_record_activated(pair.id);
        }
    }

    /// Replace the open pair with its neighbour in the filtered list.
    pub fn open_adjacent(&mut self, forward: bool) {
        let Some(current) = self.selected() else {
            return;
        };
        let Some(position) = self.position_of(current.id) else {
            return;
        };
        let target = if forward {
            position + 1
        } else if position > 0 {
            position - 1
        } else {
            return;
        };
        if let Some(pair) = self.visible_pair(target) {
            self.list_selected = target;
            self.scroll_into_view();
            self.select_record(pair);
        }
    }

    fn position_of(&self, id: u32) -> Option<usize> {
        self.visible_pairs().position(|p| p.id == id)
    }

    /// Update how many cards fit, and how far the detail can scroll, for
    /// a terminal of size `screen`.
    pub fn update_viewport(&mut self, screen: Rect) {
        self.screen = screen;
        let rows = screen.height.saturating_sub(LIST_OVERHEAD);
        self.cards_per_page = usize::from(rows / CARD_HEIGHT).max(1);
        self.scroll_into_view();
        self.detail_scroll = self.detail_scroll.min(self.max_detail_scroll());
    }

    /// Keep the list cursor inside the visible window.
    pub fn scroll_into_view(&mut self) {
        if self.list_selected < self.list_offset {
            self.list_offset = self.list_selected;
        } else if self.list_selected >= self.list_offset + self.cards_per_page {
            self.list_offset = self.list_selected + 1 - self.cards_per_page;
        }
    }

    /// Move selection down in the list.
    pub fn list_next(&mut self) {
        if self.list_selected + 1 < self.filtered_indices.len() {
            self.list_selected += 1;
            self.scroll_into_view();
        }
    }

    /// Move selection up in the list.
    pub fn list_prev(&mut self) {
        if self.list_selected > 0 {
            self.list_selected -= 1;
            self.scroll_into_view();
        }
    }

    pub fn list_first(&mut self) {
        self.list_selected = 0;
        self.scroll_into_view();
    }

    pub fn list_last(&mut self) {
        self.list_selected = self.filtered_indices.len().saturating_sub(1);
        self.scroll_into_view();
    }

    /// Last scroll offset that still fills the popup; 0 when nothing is open.
    pub fn max_detail_scroll(&self) -> u16 {
        self.selected()
            .map_or(0, |pair| detail::max_scroll(pair, self.screen))
    }

    pub fn scroll_down(&mut self) {
        self.detail_scroll = self
            .detail_scroll
            .saturating_add(1)
            .min(self.max_detail_scroll());
    }

    pub fn scroll_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(1);
    }

    pub fn scroll_page_down(&mut self) {
        self.detail_scroll = self
            .detail_scroll
            .saturating_add(10)
            .min(self.max_detail_scroll());
    }

    pub fn scroll_page_up(&mut self) {
        self.detail_scroll = self.detail_scroll.saturating_sub(10);
    }
}
