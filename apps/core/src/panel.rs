use crate::config::Config;
use crate::group::ResultGroup;
use crate::groups::{GROUP_FILE, GROUP_RECENT_FILE};
use crate::logging;
use crate::model::MatchedItem;

/// Hosts one result group per configured class and routes incoming batches.
/// Recent-file batches land in the file group, which pins them on top.
pub struct ResultsPanel {
    groups: Vec<ResultGroup>,
    preview_limit: usize,
}

impl ResultsPanel {
    pub fn new(config: &Config) -> Self {
        let preview_limit = config.preview_limit as usize;
        let groups = config
            .group_order
            .iter()
            .map(|class| ResultGroup::with_preview_limit(class, preview_limit))
            .collect();
        Self {
            groups,
            preview_limit,
        }
    }

    fn target_class(group_class: &str) -> &str {
        if group_class == GROUP_RECENT_FILE {
            GROUP_FILE
        } else {
            group_class
        }
    }

    /// Routes a batch to its group, creating one for unconfigured classes.
    /// Returns whether visible rows changed and the host must relayout.
    pub fn append(&mut self, items: &[MatchedItem], group_class: &str) -> bool {
        if items.is_empty() {
            return false;
        }

        let target = Self::target_class(group_class);
        let position = match self.groups.iter().position(|g| g.group_class() == target) {
            Some(position) => position,
            None => {
                self.groups
                    .push(ResultGroup::with_preview_limit(target, self.preview_limit));
                self.groups.len() - 1
            }
        };

        let changed = self.groups[position].append_batch(items, group_class);
        if changed {
            self.groups[position].set_visible(true);
            self.refresh_separators();
        }
        changed
    }

    /// Expands the group hosting `group_class`. `None` when no such group
    /// exists; `Some(false)` when it was already expanded.
    pub fn expand(&mut self, group_class: &str) -> Option<bool> {
        let target = Self::target_class(group_class);
        let group = self
            .groups
            .iter_mut()
            .find(|g| g.group_class() == target)?;
        let expanded = group.expand_to_full();
        if expanded {
            logging::info(&format!(
                "group {} expanded, {} rows shown",
                group.display_name(),
                group.item_count()
            ));
        }
        Some(expanded)
    }

    pub fn clear(&mut self) {
        for group in &mut self.groups {
            group.clear();
        }
    }

    pub fn item_count(&self) -> usize {
        self.groups.iter().map(|g| g.item_count()).sum()
    }

    pub fn total_height(&self) -> usize {
        self.groups
            .iter()
            .filter(|g| g.is_visible())
            .map(|g| g.content_height())
            .sum()
    }

    /// Height from the top of the panel down to the selected row across all
    /// visible groups, for scroll positioning.
    pub fn selection_height(&self) -> usize {
        let mut offset = 0;
        for group in self.groups.iter().filter(|g| g.is_visible()) {
            let selected = group.selection_height();
            if selected > 0 {
                return offset + selected;
            }
            offset += group.content_height();
        }
        0
    }

    pub fn group(&self, group_class: &str) -> Option<&ResultGroup> {
        let target = Self::target_class(group_class);
        self.groups.iter().find(|g| g.group_class() == target)
    }

    pub fn group_mut(&mut self, group_class: &str) -> Option<&mut ResultGroup> {
        let target = Self::target_class(group_class);
        self.groups.iter_mut().find(|g| g.group_class() == target)
    }

    pub fn groups(&self) -> &[ResultGroup] {
        &self.groups
    }

    // Every visible group but the last shows a separator below itself.
    fn refresh_separators(&mut self) {
        let last_visible = self.groups.iter().rposition(|g| g.is_visible());
        for (index, group) in self.groups.iter_mut().enumerate() {
            let show = group.is_visible() && last_visible.map_or(false, |last| index < last);
            group.set_separator_visible(show);
        }
    }
}
