//! Per-screen state and the explicit recompute step.
//!
//! Inputs are mutated only through [`ViewState::dispatch`], which reports
//! whether the derived list has to be rebuilt. [`DashboardModel`] owns the
//! raw collection and the derived list and calls [`recompute`] itself, so a
//! render never observes a derived list that is stale with respect to its
//! inputs.

use crate::filter::filter_comments;
use crate::paginate::{paginate, Page, PageSize};
use crate::sort::{sort_comments, SortColumn, SortState};
use crate::{Comment, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub search: String,
    pub sort: SortState,
    /// 1-based.
    pub page: usize,
    pub page_size: PageSize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortState::default(),
            page: 1,
            page_size: PageSize::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    SetSearch(String),
    ToggleSort(SortColumn),
    SetPageSize(PageSize),
    NextPage,
    PreviousPage,
}

/// What a dispatched command invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEffect {
    /// Search or sort changed; the derived list must be rebuilt.
    Recompute,
    /// Only the page window moved.
    Repaginate,
    /// The command was refused or changed nothing.
    None,
}

impl ViewState {
    /// Applies `command`. `filtered_total` is the length of the current
    /// derived list and gates the Next control.
    ///
    /// Search and sort changes leave `page` alone; only a page size change
    /// resets it to 1.
    pub fn dispatch(&mut self, command: ViewCommand, filtered_total: usize) -> ViewEffect {
        match command {
            ViewCommand::SetSearch(text) => {
                if text == self.search {
                    return ViewEffect::None;
                }
                self.search = text;
                ViewEffect::Recompute
            }
            ViewCommand::ToggleSort(column) => {
                self.sort.toggle(column);
                ViewEffect::Recompute
            }
            ViewCommand::SetPageSize(size) => {
                self.page_size = size;
                self.page = 1;
                ViewEffect::Repaginate
            }
            ViewCommand::NextPage => {
                if self.page.saturating_mul(self.page_size.get()) >= filtered_total {
                    return ViewEffect::None;
                }
                self.page += 1;
                ViewEffect::Repaginate
            }
            ViewCommand::PreviousPage => {
                if self.page <= 1 {
                    return ViewEffect::None;
                }
                self.page -= 1;
                ViewEffect::Repaginate
            }
        }
    }
}

/// Derived list for `state`: filter by the search text, then sort.
/// Always rebuilt from scratch.
pub fn recompute(state: &ViewState, comments: &[Comment]) -> Vec<Comment> {
    let filtered = filter_comments(comments, &state.search);
    let derived = sort_comments(filtered, state.sort.column(), state.sort.direction());
    tracing::trace!(
        total = comments.len(),
        visible = derived.len(),
        "recomputed visible comments"
    );
    derived
}

/// Everything the dashboard screen owns. A fresh model is built on every
/// mount, so nothing survives navigating away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardModel {
    comments: Vec<Comment>,
    filtered: Vec<Comment>,
    view: ViewState,
    user: Option<User>,
}

impl DashboardModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_comments(&mut self, comments: Vec<Comment>) {
        tracing::debug!(count = comments.len(), "comments loaded");
        self.comments = comments;
        self.filtered = recompute(&self.view, &self.comments);
    }

    pub fn load_user(&mut self, user: User) {
        tracing::debug!(user_id = user.id, "dashboard user loaded");
        self.user = Some(user);
    }

    pub fn apply(&mut self, command: ViewCommand) -> ViewEffect {
        let effect = self.view.dispatch(command, self.filtered.len());
        if effect == ViewEffect::Recompute {
            self.filtered = recompute(&self.view, &self.comments);
        }
        effect
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn filtered(&self) -> &[Comment] {
        &self.filtered
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn current_page(&self) -> Page<'_, Comment> {
        paginate(&self.filtered, self.view.page, self.view.page_size)
    }
}

/// Profile screen state: nothing renders until the user arrives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileModel {
    user: Option<User>,
}

impl ProfileModel {
    pub fn load_user(&mut self, user: User) {
        tracing::debug!(user_id = user.id, "profile user loaded");
        self.user = Some(user);
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }
}
