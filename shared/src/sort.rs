use std::cmp::Ordering;

use crate::Comment;

/// Columns the dashboard can sort by. The comment body is not sortable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortColumn {
    PostId,
    Name,
    Email,
}

impl SortColumn {
    pub const ALL: [SortColumn; 3] = [SortColumn::PostId, SortColumn::Name, SortColumn::Email];

    pub fn label(self) -> &'static str {
        match self {
            SortColumn::PostId => "Sort Post ID",
            SortColumn::Name => "Sort Name",
            SortColumn::Email => "Sort Email",
        }
    }

    /// Natural ordering of the column value. Strings compare case-sensitively.
    fn compare(self, a: &Comment, b: &Comment) -> Ordering {
        match self {
            SortColumn::PostId => a.post_id.cmp(&b.post_id),
            SortColumn::Name => a.name.cmp(&b.name),
            SortColumn::Email => a.email.cmp(&b.email),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Sort selection driven by the three column buttons.
///
/// Pressing the same column cycles unset → ascending → descending → unset.
/// Pressing another column always starts over at ascending. The column stays
/// remembered while the direction is unset, which is what lets the cycle
/// wrap back to ascending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    column: Option<SortColumn>,
    direction: Option<SortDirection>,
}

impl SortState {
    pub fn column(&self) -> Option<SortColumn> {
        self.column
    }

    pub fn direction(&self) -> Option<SortDirection> {
        self.direction
    }

    pub fn toggle(&mut self, column: SortColumn) {
        if self.column == Some(column) {
            self.direction = match self.direction {
                None => Some(SortDirection::Ascending),
                Some(SortDirection::Ascending) => Some(SortDirection::Descending),
                Some(SortDirection::Descending) => None,
            };
        } else {
            self.column = Some(column);
            self.direction = Some(SortDirection::Ascending);
        }
        tracing::debug!(?column, direction = ?self.direction, "sort toggled");
    }

    /// The column and direction, only when both are set.
    pub fn active(&self) -> Option<(SortColumn, SortDirection)> {
        self.column.zip(self.direction)
    }

    pub fn is_highlighted(&self, column: SortColumn) -> bool {
        self.active().is_some_and(|(active, _)| active == column)
    }

    /// Arrow shown next to a button label.
    pub fn indicator(&self, column: SortColumn) -> &'static str {
        if self.column != Some(column) {
            return "";
        }
        match self.direction {
            Some(SortDirection::Ascending) => "\u{25B2}",
            Some(SortDirection::Descending) => "\u{25BC}",
            None => "",
        }
    }
}

/// Stable sort of `comments`. Without both a column and a direction the
/// input comes back untouched. Equal keys keep their input order in either
/// direction.
pub fn sort_comments(
    mut comments: Vec<Comment>,
    column: Option<SortColumn>,
    direction: Option<SortDirection>,
) -> Vec<Comment> {
    let (Some(column), Some(direction)) = (column, direction) else {
        return comments;
    };

    match direction {
        SortDirection::Ascending => comments.sort_by(|a, b| column.compare(a, b)),
        SortDirection::Descending => comments.sort_by(|a, b| column.compare(b, a)),
    }
    comments
}
