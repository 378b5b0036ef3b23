// menuboard/src/menu/view.rs

//! Derived views over a flat item list: category grouping and filtering.

use super::model::MenuItem;
use std::fmt;

/// Label of the filter that shows every item.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
  #[default]
  All,
  Named(String),
}

impl CategoryFilter {
  /// `"All"` is the sentinel for [`CategoryFilter::All`]; anything else names
  /// a category verbatim.
  pub fn from_label(label: &str) -> Self {
    if label == ALL_CATEGORIES {
      CategoryFilter::All
    } else {
      CategoryFilter::Named(label.to_string())
    }
  }

  pub fn label(&self) -> &str {
    match self {
      CategoryFilter::All => ALL_CATEGORIES,
      CategoryFilter::Named(name) => name,
    }
  }

  pub fn matches(&self, item: &MenuItem) -> bool {
    match self {
      CategoryFilter::All => true,
      CategoryFilter::Named(name) => item.category == *name,
    }
  }
}

impl fmt::Display for CategoryFilter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// Items sharing a category, borrowed from the flat list.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a> {
  pub name: &'a str,
  pub items: Vec<&'a MenuItem>,
}

/// Buckets items by `category`, groups ordered by first appearance and items
/// kept in their original relative order.
pub fn group_by_category(items: &[MenuItem]) -> Vec<CategoryGroup<'_>> {
  let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
  for item in items {
    match groups.iter_mut().find(|g| g.name == item.category) {
      Some(group) => group.items.push(item),
      None => groups.push(CategoryGroup {
        name: &item.category,
        items: vec![item],
      }),
    }
  }
  groups
}

pub fn filter_items<'a>(items: &'a [MenuItem], filter: &CategoryFilter) -> Vec<&'a MenuItem> {
  items.iter().filter(|item| filter.matches(item)).collect()
}

/// One button of the category filter bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
  pub filter: CategoryFilter,
  pub count: usize,
}

impl fmt::Display for FilterChip {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} ({})", self.filter, self.count)
  }
}

/// `All (n)` followed by one chip per category in first-appearance order.
pub fn filter_bar(items: &[MenuItem]) -> Vec<FilterChip> {
  std::iter::once(FilterChip {
    filter: CategoryFilter::All,
    count: items.len(),
  })
  .chain(group_by_category(items).into_iter().map(|group| FilterChip {
    filter: CategoryFilter::Named(group.name.to_string()),
    count: group.items.len(),
  }))
  .collect()
}
