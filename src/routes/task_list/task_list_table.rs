use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::models::task::{Task, TaskView};

pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortColumn {
    Title,
    Priority,
    DueDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusFilter {
    #[default]
    All,
    Incomplete,
    Completed,
}

// Sorting, title filter and paging for one list table
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableState {
    #[serde(default)]
    pub status: StatusFilter,
    pub filter: Option<String>,
    pub sort: Option<SortColumn>,
    #[serde(default)]
    pub desc: bool,
    #[serde(default)]
    pub page_index: usize,
    pub page_size: Option<usize>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TablePage {
    pub rows: Vec<TaskView>,
    pub page_index: usize,
    pub page_size: usize,
    pub page_count: usize,
    pub filtered_count: usize,
}

fn compare(column: SortColumn, a: &Task, b: &Task) -> Ordering {
    match column {
        SortColumn::Title => a
            .title
            .chars()
            .flat_map(char::to_lowercase)
            .cmp(b.title.chars().flat_map(char::to_lowercase)),
        SortColumn::Priority => a.priority.cmp(&b.priority),
        SortColumn::DueDate => a.due_date.cmp(&b.due_date),
        SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        SortColumn::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    }
}

impl TableState {
    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(1)
    }

    fn keeps(&self, task: &Task) -> bool {
        let status_ok = match self.status {
            StatusFilter::All => true,
            StatusFilter::Incomplete => !task.is_completed,
            StatusFilter::Completed => task.is_completed,
        };
        let title_ok = match self.filter.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => {
                task.title.to_lowercase().contains(&needle.to_lowercase())
            }
            _ => true,
        };
        status_ok && title_ok
    }

    /// Rows left after the status and title filters, sorted. Stable, so
    /// ties keep store order.
    pub fn filtered_rows(&self, tasks: Vec<Task>) -> Vec<Task> {
        let mut rows: Vec<Task> = tasks.into_iter().filter(|task| self.keeps(task)).collect();
        if let Some(column) = self.sort {
            rows.sort_by(|a, b| {
                let ordering = compare(column, a, b);
                if self.desc {
                    ordering.reverse()
                } else {
                    ordering
                }
            });
        }
        rows
    }

    pub fn page(&self, tasks: Vec<Task>) -> TablePage {
        let rows = self.filtered_rows(tasks);
        let page_size = self.page_size();
        let filtered_count = rows.len();
        let page_count = filtered_count.div_ceil(page_size).max(1);

        let rows = rows
            .into_iter()
            .skip(self.page_index.saturating_mul(page_size))
            .take(page_size)
            .map(TaskView::from)
            .collect();

        TablePage {
            rows,
            page_index: self.page_index,
            page_size,
            page_count,
            filtered_count,
        }
    }

    /// Keeps only the selected ids that are still visible under the filters.
    pub fn visible_selection(&self, tasks: &[Task], selected: &[i64]) -> Vec<i64> {
        selected
            .iter()
            .copied()
            .filter(|id| tasks.iter().any(|task| task.id == *id && self.keeps(task)))
            .collect()
    }
}
