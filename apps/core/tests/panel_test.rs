use glance_core::config::Config;
use glance_core::group::{GROUP_LABEL_HEIGHT, LIST_ITEM_HEIGHT};
use glance_core::groups::{GROUP_APP, GROUP_FILE, GROUP_FOLDER, GROUP_RECENT_FILE};
use glance_core::model::MatchedItem;
use glance_core::panel::ResultsPanel;

fn item(id: &str, relevance: i64) -> MatchedItem {
    MatchedItem::new(id, &format!("Item {id}"), &format!("/tmp/{id}"), relevance)
}

fn panel() -> ResultsPanel {
    ResultsPanel::new(&Config::default())
}

#[test]
fn routes_recent_batches_into_file_group() {
    let mut panel = panel();
    assert!(panel.append(&[item("r1", 2), item("r2", 1)], GROUP_RECENT_FILE));

    let file_group = panel.group(GROUP_FILE).unwrap();
    assert_eq!(file_group.item_count(), 2);
    assert!(file_group.is_visible());
    assert!(panel
        .groups()
        .iter()
        .all(|g| g.group_class() != GROUP_RECENT_FILE));
}

#[test]
fn creates_group_on_demand_for_unconfigured_class() {
    let mut panel = panel();
    assert!(panel.append(&[item("b1", 1)], "web-bookmark"));

    let group = panel.group("web-bookmark").unwrap();
    assert_eq!(group.item_count(), 1);
    assert_eq!(group.display_name(), "web-bookmark");
}

#[test]
fn empty_batch_does_not_show_any_group() {
    let mut panel = panel();
    assert!(!panel.append(&[], GROUP_APP));
    assert_eq!(panel.item_count(), 0);
    assert_eq!(panel.total_height(), 0);
}

#[test]
fn separators_appear_between_visible_groups_only() {
    let mut panel = panel();
    panel.append(&[item("a1", 1)], GROUP_APP);
    panel.append(&[item("f1", 1), item("f2", 2)], GROUP_FILE);

    let app = panel.group(GROUP_APP).unwrap();
    let folder = panel.group(GROUP_FOLDER).unwrap();
    let file = panel.group(GROUP_FILE).unwrap();

    assert!(app.is_separator_visible());
    assert!(!folder.is_visible());
    assert!(!folder.is_separator_visible());
    assert!(!file.is_separator_visible());
}

#[test]
fn total_height_sums_only_visible_groups() {
    let mut panel = panel();
    panel.append(&[item("a1", 1)], GROUP_APP);
    panel.append(&[item("f1", 1), item("f2", 2)], GROUP_FILE);

    let expected = panel.group(GROUP_APP).unwrap().content_height()
        + panel.group(GROUP_FILE).unwrap().content_height();
    assert_eq!(panel.total_height(), expected);

    // The folder group never received a batch and contributes nothing.
    assert!(expected >= 2 * GROUP_LABEL_HEIGHT + 3 * LIST_ITEM_HEIGHT);
}

#[test]
fn selection_height_accounts_for_groups_above() {
    let mut panel = panel();
    panel.append(&[item("a1", 1)], GROUP_APP);
    panel.append(&[item("f1", 3), item("f2", 2), item("f3", 1)], GROUP_FILE);

    panel
        .group_mut(GROUP_FILE)
        .unwrap()
        .list_mut()
        .set_current_row(Some(1));

    let app_height = panel.group(GROUP_APP).unwrap().content_height();
    assert_eq!(
        panel.selection_height(),
        app_height + GROUP_LABEL_HEIGHT + 2 * LIST_ITEM_HEIGHT
    );
}

#[test]
fn expand_routes_to_hosting_group() {
    let mut panel = panel();
    let batch: Vec<MatchedItem> = (0..8).map(|n| item(&format!("f{n}"), n)).collect();
    panel.append(&batch, GROUP_FILE);
    assert_eq!(panel.item_count(), 5);

    assert_eq!(panel.expand(GROUP_FILE), Some(true));
    assert_eq!(panel.item_count(), 8);
    assert_eq!(panel.expand(GROUP_FILE), Some(false));
}

#[test]
fn expand_unknown_group_returns_none() {
    let mut panel = panel();
    assert_eq!(panel.expand("missing"), None);
}

#[test]
fn clear_resets_every_group() {
    let mut panel = panel();
    panel.append(&[item("a1", 1)], GROUP_APP);
    panel.append(&[item("r1", 1)], GROUP_RECENT_FILE);
    panel.append(&[item("f1", 1)], GROUP_FILE);

    panel.clear();

    assert_eq!(panel.item_count(), 0);
    assert_eq!(panel.total_height(), 0);
    assert!(panel.groups().iter().all(|g| !g.is_visible()));
}
