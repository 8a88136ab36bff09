use crate::groups::{self, GROUP_RECENT_FILE};
use crate::list_model::ListModel;
use crate::model::MatchedItem;
use crate::ranking;

pub const GROUP_MAX_SHOW: usize = 5;

pub const LIST_ITEM_HEIGHT: usize = 36;
pub const GROUP_LABEL_HEIGHT: usize = 28;
pub const LAYOUT_MARGIN: usize = 10;
pub const SEPARATOR_HEIGHT: usize = 2;

/// One labeled category of search results. Keeps the capped preview while
/// collapsed, buffers overflow in per-subgroup caches, and reveals the full
/// accumulated set on expand. A single group hosts both its own class and
/// the recent-file subgroup, with recent files pinned to the top.
#[derive(Debug)]
pub struct ResultGroup {
    group_class: String,
    preview: Vec<MatchedItem>,
    rest_shown: Vec<MatchedItem>,
    cache: Vec<MatchedItem>,
    cache_recent: Vec<MatchedItem>,
    expanded: bool,
    more_visible: bool,
    visible: bool,
    separator_visible: bool,
    preview_limit: usize,
    list: ListModel,
}

impl ResultGroup {
    pub fn new(group_class: &str) -> Self {
        Self::with_preview_limit(group_class, GROUP_MAX_SHOW)
    }

    pub fn with_preview_limit(group_class: &str, preview_limit: usize) -> Self {
        Self {
            group_class: group_class.to_string(),
            preview: Vec::new(),
            rest_shown: Vec::new(),
            cache: Vec::new(),
            cache_recent: Vec::new(),
            expanded: false,
            more_visible: false,
            visible: false,
            separator_visible: false,
            preview_limit: preview_limit.max(1),
            list: ListModel::new(),
        }
    }

    pub fn group_class(&self) -> &str {
        &self.group_class
    }

    pub fn display_name(&self) -> &str {
        groups::display_name(&self.group_class)
    }

    pub fn object_name(&self) -> &str {
        groups::object_name(&self.group_class)
    }

    /// Merges a batch of newly matched items into the group. Returns whether
    /// the visible rows changed, i.e. whether the host must recompute layout.
    /// An empty batch is a no-op.
    pub fn append_batch(&mut self, new_items: &[MatchedItem], group_class: &str) -> bool {
        if new_items.is_empty() {
            return false;
        }

        if group_class == GROUP_RECENT_FILE {
            if self.expanded {
                self.splice_expanded_recent(new_items);
            } else {
                self.merge_collapsed_recent(new_items);
            }
        } else if self.expanded {
            self.splice_expanded(new_items, group_class);
        } else {
            self.merge_collapsed(new_items, group_class);
        }
        true
    }

    fn merge_collapsed_recent(&mut self, new_items: &[MatchedItem]) {
        self.cache_recent.extend(new_items.iter().cloned());

        // Below the cap, or no recent row shown yet: pull everything shown
        // back into the caches and rebuild the preview from scratch.
        if self.preview.len() < self.preview_limit
            || self.list.last_shown_row(GROUP_RECENT_FILE).is_none()
        {
            self.preview.clear();
            self.cache_recent
                .extend(self.list.group_items(GROUP_RECENT_FILE));
            self.cache.extend(self.list.group_items(&self.group_class));

            ranking::sort(&mut self.cache_recent);
            while self.preview.len() < self.preview_limit && !self.cache_recent.is_empty() {
                self.preview.push(self.cache_recent.remove(0));
            }
            self.list.set_items(&self.preview, GROUP_RECENT_FILE);

            // Fewer recent files than the cap: top up from the generic cache,
            // appending each pulled item individually.
            if self.preview.len() < self.preview_limit {
                ranking::sort(&mut self.cache);
                while self.preview.len() < self.preview_limit && !self.cache.is_empty() {
                    let item = self.cache.remove(0);
                    self.preview.push(item.clone());
                    self.list.add_row(item, &self.group_class);
                }
            }
        }

        self.more_visible = !self.cache_recent.is_empty() || !self.cache.is_empty();
    }

    fn merge_collapsed(&mut self, new_items: &[MatchedItem], group_class: &str) {
        self.cache.extend(new_items.iter().cloned());

        if self.preview.len() < self.preview_limit {
            let shown_recent = self.list.group_items(GROUP_RECENT_FILE);
            if !shown_recent.is_empty() {
                // Recent files stay pinned on top; only the generic tail of
                // the preview is rebuilt from the cache.
                self.cache.extend(self.list.group_items(&self.group_class));
                ranking::sort(&mut self.cache);

                self.preview.clear();
                self.preview.extend(shown_recent);
                self.list.set_items(&self.preview, GROUP_RECENT_FILE);

                while self.preview.len() < self.preview_limit && !self.cache.is_empty() {
                    let item = self.cache.remove(0);
                    self.preview.push(item.clone());
                    self.list.add_row(item, &self.group_class);
                }
            } else {
                let mut shown = std::mem::take(&mut self.preview);
                self.cache.append(&mut shown);
                ranking::sort(&mut self.cache);

                while self.preview.len() < self.preview_limit && !self.cache.is_empty() {
                    self.preview.push(self.cache.remove(0));
                }
                self.list.set_items(&self.preview, group_class);
            }
        }

        self.more_visible = !self.cache.is_empty();
    }

    fn splice_expanded_recent(&mut self, new_items: &[MatchedItem]) {
        let mut batch = new_items.to_vec();
        ranking::sort(&mut batch);
        let at = self
            .list
            .last_shown_row(GROUP_RECENT_FILE)
            .map_or(0, |row| row + 1);
        self.list.insert_rows(at, &batch, GROUP_RECENT_FILE);
    }

    fn splice_expanded(&mut self, new_items: &[MatchedItem], group_class: &str) {
        let mut batch = new_items.to_vec();
        ranking::sort(&mut batch);
        self.list.add_rows(&batch, group_class);
    }

    /// Reveals every cached item, sorted, after the rows already shown.
    /// Returns whether expansion happened; the host resizes on `true`. A
    /// second call is a no-op.
    pub fn expand_to_full(&mut self) -> bool {
        if self.expanded {
            return false;
        }

        if !self.cache_recent.is_empty() {
            ranking::sort(&mut self.cache_recent);
            let at = self
                .list
                .last_shown_row(GROUP_RECENT_FILE)
                .map_or(0, |row| row + 1);
            let drained: Vec<MatchedItem> = self.cache_recent.drain(..).collect();
            self.list.insert_rows(at, &drained, GROUP_RECENT_FILE);
        }

        self.rest_shown.append(&mut self.cache);
        ranking::sort(&mut self.rest_shown);
        self.list.add_rows(&self.rest_shown, &self.group_class);

        self.expanded = true;
        self.more_visible = false;
        true
    }

    pub fn clear(&mut self) {
        self.preview.clear();
        self.rest_shown.clear();
        self.cache.clear();
        self.cache_recent.clear();
        self.expanded = false;
        self.more_visible = false;
        self.separator_visible = false;
        self.list.clear();
        self.visible = false;
    }

    pub fn item_count(&self) -> usize {
        self.list.row_count()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_more_visible(&self) -> bool {
        self.more_visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_separator_visible(&self) -> bool {
        self.separator_visible
    }

    pub fn set_separator_visible(&mut self, visible: bool) {
        self.separator_visible = visible;
    }

    pub fn list(&self) -> &ListModel {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListModel {
        &mut self.list
    }

    /// Height from the top of the group down to the selected row, for
    /// scroll positioning. Zero when nothing is selected.
    pub fn selection_height(&self) -> usize {
        match self.list.current_row() {
            Some(row) => GROUP_LABEL_HEIGHT + (row + 1) * LIST_ITEM_HEIGHT,
            None => 0,
        }
    }

    pub fn content_height(&self) -> usize {
        let mut height = GROUP_LABEL_HEIGHT + self.list.row_count() * LIST_ITEM_HEIGHT;
        if self.separator_visible {
            height += SEPARATOR_HEIGHT + LAYOUT_MARGIN;
        }
        height
    }
}

#[cfg(test)]
mod tests {
    use super::{ResultGroup, GROUP_LABEL_HEIGHT, LIST_ITEM_HEIGHT};
    use crate::groups::{GROUP_FILE, GROUP_RECENT_FILE};
    use crate::model::MatchedItem;

    fn item(id: &str, relevance: i64) -> MatchedItem {
        MatchedItem::new(id, &format!("Item {id}"), &format!("/tmp/{id}"), relevance)
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let mut group = ResultGroup::new(GROUP_FILE);
        assert!(!group.append_batch(&[], GROUP_FILE));
        assert_eq!(group.item_count(), 0);
        assert!(!group.is_more_visible());
    }

    #[test]
    fn preview_is_capped_while_collapsed() {
        let mut group = ResultGroup::new(GROUP_FILE);
        let batch: Vec<MatchedItem> = (0..9).map(|n| item(&format!("f{n}"), n)).collect();
        assert!(group.append_batch(&batch, GROUP_FILE));
        assert_eq!(group.item_count(), 5);
        assert!(group.is_more_visible());
    }

    #[test]
    fn recent_batch_below_cap_re_merges_across_batches() {
        let mut group = ResultGroup::new(GROUP_FILE);
        group.append_batch(&[item("r1", 10), item("r2", 20)], GROUP_RECENT_FILE);
        group.append_batch(&[item("r3", 30)], GROUP_RECENT_FILE);

        let ids: Vec<String> = group.list().items().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["r3", "r2", "r1"]);
        assert!(!group.is_more_visible());
    }

    #[test]
    fn selection_height_counts_rows_through_selected_one() {
        let mut group = ResultGroup::new(GROUP_FILE);
        group.append_batch(&[item("a", 3), item("b", 2), item("c", 1)], GROUP_FILE);
        assert_eq!(group.selection_height(), 0);

        group.list_mut().set_current_row(Some(1));
        assert_eq!(
            group.selection_height(),
            GROUP_LABEL_HEIGHT + 2 * LIST_ITEM_HEIGHT
        );
    }
}
