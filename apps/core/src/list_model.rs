use crate::model::MatchedItem;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Row {
    item: MatchedItem,
    group_class: String,
}

/// In-memory stand-in for the toolkit list view: ordered rows tagged with
/// the group class they belong to, plus the current selection.
#[derive(Debug, Default)]
pub struct ListModel {
    rows: Vec<Row>,
    current_row: Option<usize>,
}

impl ListModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the entire row set with `items`, all tagged `group_class`.
    pub fn set_items(&mut self, items: &[MatchedItem], group_class: &str) {
        self.rows.clear();
        self.current_row = None;
        for item in items {
            self.rows.push(Row {
                item: item.clone(),
                group_class: group_class.to_string(),
            });
        }
    }

    pub fn add_row(&mut self, item: MatchedItem, group_class: &str) {
        self.rows.push(Row {
            item,
            group_class: group_class.to_string(),
        });
    }

    pub fn add_rows(&mut self, items: &[MatchedItem], group_class: &str) {
        for item in items {
            self.add_row(item.clone(), group_class);
        }
    }

    pub fn insert_rows(&mut self, at_row: usize, items: &[MatchedItem], group_class: &str) {
        let at = at_row.min(self.rows.len());
        for (offset, item) in items.iter().enumerate() {
            self.rows.insert(
                at + offset,
                Row {
                    item: item.clone(),
                    group_class: group_class.to_string(),
                },
            );
        }
    }

    pub fn group_items(&self, group_class: &str) -> Vec<MatchedItem> {
        self.rows
            .iter()
            .filter(|row| row.group_class == group_class)
            .map(|row| row.item.clone())
            .collect()
    }

    pub fn last_shown_row(&self, group_class: &str) -> Option<usize> {
        self.rows.iter().rposition(|row| row.group_class == group_class)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row_item(&self, row: usize) -> Option<&MatchedItem> {
        self.rows.get(row).map(|r| &r.item)
    }

    pub fn row_group(&self, row: usize) -> Option<&str> {
        self.rows.get(row).map(|r| r.group_class.as_str())
    }

    pub fn items(&self) -> Vec<MatchedItem> {
        self.rows.iter().map(|row| row.item.clone()).collect()
    }

    pub fn set_current_row(&mut self, row: Option<usize>) {
        self.current_row = row.filter(|r| *r < self.rows.len());
    }

    pub fn current_row(&self) -> Option<usize> {
        self.current_row
    }

    pub fn clear(&mut self) {
        self.rows.clear();
        self.current_row = None;
    }
}

#[cfg(test)]
mod tests {
    use super::ListModel;
    use crate::model::MatchedItem;

    fn item(id: &str) -> MatchedItem {
        MatchedItem::new(id, id, &format!("/tmp/{id}"), 0)
    }

    #[test]
    fn set_items_replaces_all_rows() {
        let mut model = ListModel::new();
        model.add_rows(&[item("a"), item("b")], "file");
        model.set_items(&[item("c")], "recent-file");
        assert_eq!(model.row_count(), 1);
        assert_eq!(model.row_group(0), Some("recent-file"));
    }

    #[test]
    fn insert_rows_places_items_at_requested_row() {
        let mut model = ListModel::new();
        model.add_rows(&[item("a"), item("d")], "file");
        model.insert_rows(1, &[item("b"), item("c")], "recent-file");
        let ids: Vec<String> = model.items().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn insert_rows_clamps_out_of_range_position() {
        let mut model = ListModel::new();
        model.add_row(item("a"), "file");
        model.insert_rows(10, &[item("b")], "file");
        assert_eq!(model.row_item(1).map(|i| i.id.as_str()), Some("b"));
    }

    #[test]
    fn last_shown_row_finds_final_row_of_group() {
        let mut model = ListModel::new();
        model.add_row(item("a"), "recent-file");
        model.add_row(item("b"), "file");
        model.add_row(item("c"), "recent-file");
        assert_eq!(model.last_shown_row("recent-file"), Some(2));
        assert_eq!(model.last_shown_row("app"), None);
    }

    #[test]
    fn group_items_filters_by_group_class() {
        let mut model = ListModel::new();
        model.add_row(item("a"), "recent-file");
        model.add_row(item("b"), "file");
        let recent = model.group_items("recent-file");
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].id, "a");
    }

    #[test]
    fn current_row_rejects_out_of_range_selection() {
        let mut model = ListModel::new();
        model.add_row(item("a"), "file");
        model.set_current_row(Some(3));
        assert_eq!(model.current_row(), None);
        model.set_current_row(Some(0));
        assert_eq!(model.current_row(), Some(0));
    }
}
