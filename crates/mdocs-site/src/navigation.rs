//! Category grouping and previous/next traversal of a set's pages.
//!
//! Pages are grouped by category. Within a group they sort by the part of their
//! path after the first `/`; groups sort by the `category_raw` of their first
//! page, with the uncategorized group (pages at the set root) first. Reading the
//! groups in order gives a single flattened sequence, and previous/next are that
//! sequence's neighbours.

use serde::Serialize;

use crate::page::Page;

/// Pages sharing a category, in navigation order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryGroup {
    /// Category without its ordinal prefix; `None` for root pages.
    pub category: Option<String>,
    /// Raw first path segment of the group's first page.
    pub category_raw: Option<String>,
    /// Pages of the group.
    pub pages: Vec<Page>,
}

/// Navigation over the pages of one set.
#[derive(Clone, Debug, Default)]
pub struct Navigation {
    groups: Vec<CategoryGroup>,
}

impl Navigation {
    /// Group and order `pages`, ignoring pages of other sets.
    pub fn new(set_name: &str, pages: impl IntoIterator<Item = Page>) -> Self {
        let mut groups: Vec<CategoryGroup> = Vec::new();

        for page in pages.into_iter().filter(|p| p.set_name == set_name) {
            match groups.iter_mut().find(|g| g.category == page.category) {
                Some(group) => group.pages.push(page),
                None => groups.push(CategoryGroup {
                    category: page.category.clone(),
                    category_raw: None,
                    pages: vec![page],
                }),
            }
        }

        for group in &mut groups {
            group.pages.sort_by(|a, b| order_key(&a.path).cmp(order_key(&b.path)));
            group.category_raw = group.pages.first().and_then(|p| p.category_raw.clone());
        }
        // Option orders None first, putting root pages ahead of every category
        groups.sort_by(|a, b| a.category_raw.cmp(&b.category_raw));

        Self { groups }
    }

    /// Category groups in order.
    #[must_use]
    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    /// Every page in traversal order.
    pub fn flattened(&self) -> impl Iterator<Item = &Page> {
        self.groups.iter().flat_map(|g| g.pages.iter())
    }

    /// First page of the set.
    #[must_use]
    pub fn first(&self) -> Option<&Page> {
        self.flattened().next()
    }

    /// Last page of the set.
    #[must_use]
    pub fn last(&self) -> Option<&Page> {
        self.groups.last().and_then(|g| g.pages.last())
    }

    /// Index of the page's category among the groups.
    #[must_use]
    pub fn category_index(&self, page: &Page) -> Option<usize> {
        self.locate(page).map(|(category, _)| category)
    }

    /// Index of the page within its category.
    #[must_use]
    pub fn position_in_category(&self, page: &Page) -> Option<usize> {
        self.locate(page).map(|(_, position)| position)
    }

    /// Page before `page`, crossing into the previous category's last page.
    #[must_use]
    pub fn previous(&self, page: &Page) -> Option<&Page> {
        let (category, position) = self.locate(page)?;
        if position > 0 {
            return self.groups[category].pages.get(position - 1);
        }
        let previous_group = self.groups.get(category.checked_sub(1)?)?;
        previous_group.pages.last()
    }

    /// Page after `page`, crossing into the next category's first page.
    #[must_use]
    pub fn next(&self, page: &Page) -> Option<&Page> {
        let (category, position) = self.locate(page)?;
        if let Some(next) = self.groups[category].pages.get(position + 1) {
            return Some(next);
        }
        self.groups.get(category + 1)?.pages.first()
    }

    /// Whether `page` has a previous page.
    #[must_use]
    pub fn has_previous(&self, page: &Page) -> bool {
        self.previous(page).is_some()
    }

    /// Whether `page` has a next page.
    #[must_use]
    pub fn has_next(&self, page: &Page) -> bool {
        self.next(page).is_some()
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.pages.len()).sum()
    }

    /// Whether the set has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// (category index, position in category) of a page, matched by set and path.
    fn locate(&self, page: &Page) -> Option<(usize, usize)> {
        self.groups.iter().enumerate().find_map(|(category, group)| {
            group
                .pages
                .iter()
                .position(|p| p.is_same_file(page))
                .map(|position| (category, position))
        })
    }
}

/// Part of the path after the first `/`, or the whole path at the set root.
fn order_key(path: &str) -> &str {
    path.split_once('/').map_or(path, |(_, rest)| rest)
}
