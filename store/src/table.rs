//! Sorting and pagination for an already-filtered list.

use derive_more::Display;
use serde::Serialize;
use std::cmp::Ordering;

use crate::fields::{FieldValue, field_value, to_document};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum SortDirection {
    #[default]
    #[display("asc")]
    Ascending,
    #[display("desc")]
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Sort and page state for one table.
///
/// The page size is fixed for the lifetime of a table. The current page is
/// 1-based and is kept within `[1, total_pages]` for the last row count the
/// controller saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableController {
    sort_field: String,
    sort_direction: SortDirection,
    page_size: usize,
    current_page: usize,
    total_rows: usize,
}

/// One rendered page of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView<R> {
    pub rows: Vec<R>,
    pub sort_field: String,
    pub sort_direction: SortDirection,
    pub current_page: usize,
    pub total_pages: usize,
    pub total_rows: usize,
    pub page_size: usize,
}

impl<R> TableView<R> {
    /// 1-based index of the first row on this page, 0 when there are no rows.
    pub fn first_row_number(&self) -> usize {
        if self.total_rows == 0 {
            0
        } else {
            (self.current_page - 1) * self.page_size + 1
        }
    }

    pub fn last_row_number(&self) -> usize {
        (self.current_page - 1) * self.page_size + self.rows.len()
    }
}

/// `ceil(total_rows / page_size)`, never less than 1.
pub fn total_pages(total_rows: usize, page_size: usize) -> usize {
    total_rows.div_ceil(page_size.max(1)).max(1)
}

impl TableController {
    pub fn new(
        default_field: impl Into<String>,
        default_direction: SortDirection,
        page_size: usize,
    ) -> Self {
        Self {
            sort_field: default_field.into(),
            sort_direction: default_direction,
            page_size: page_size.max(1),
            current_page: 1,
            total_rows: 0,
        }
    }

    pub fn sort_field(&self) -> &str {
        &self.sort_field
    }

    pub fn sort_direction(&self) -> SortDirection {
        self.sort_direction
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_rows, self.page_size)
    }

    /// Sort on `field`. Choosing the active field again flips the
    /// direction; a new field starts ascending.
    pub fn sort_by(&mut self, field: &str) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field.to_string();
            self.sort_direction = SortDirection::Ascending;
        }
        self.clamp_page();
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
        self.clamp_page();
    }

    /// Tell the controller how many rows the filtered input now has.
    pub fn set_total_rows(&mut self, total_rows: usize) {
        self.total_rows = total_rows;
        self.clamp_page();
    }

    fn clamp_page(&mut self) {
        self.current_page = self.current_page.clamp(1, self.total_pages());
    }

    /// Sort `rows` and cut out the current page.
    pub fn view<R>(&mut self, rows: &[R]) -> TableView<R>
    where
        R: Serialize + Clone,
    {
        self.set_total_rows(rows.len());
        let sorted = sort_rows(rows, &self.sort_field, self.sort_direction);
        let start = (self.current_page - 1) * self.page_size;
        let page = sorted
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect();

        TableView {
            rows: page,
            sort_field: self.sort_field.clone(),
            sort_direction: self.sort_direction,
            current_page: self.current_page,
            total_pages: self.total_pages(),
            total_rows: rows.len(),
            page_size: self.page_size,
        }
    }
}

/// Stable sort of `rows` on one field. Missing values go last whatever the
/// direction.
pub fn sort_rows<R>(rows: &[R], field: &str, direction: SortDirection) -> Vec<R>
where
    R: Serialize + Clone,
{
    let mut keyed: Vec<(FieldValue, &R)> = rows
        .iter()
        .map(|row| (field_value(&to_document(row), field), row))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| compare(a, b, direction));
    keyed.into_iter().map(|(_, row)| row.clone()).collect()
}

fn compare(a: &FieldValue, b: &FieldValue, direction: SortDirection) -> Ordering {
    match (a.is_missing(), b.is_missing()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            let ordering = a.total_cmp(b);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        }
    }
}
