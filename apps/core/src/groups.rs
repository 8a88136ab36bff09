use std::collections::HashMap;
use std::sync::OnceLock;

pub const GROUP_RECENT_FILE: &str = "recent-file";
pub const GROUP_APP: &str = "app";
pub const GROUP_FOLDER: &str = "folder";
pub const GROUP_FILE: &str = "file";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupMeta {
    pub display_name: &'static str,
    pub object_name: &'static str,
}

static GROUP_TABLE: OnceLock<HashMap<&'static str, GroupMeta>> = OnceLock::new();

fn table() -> &'static HashMap<&'static str, GroupMeta> {
    GROUP_TABLE.get_or_init(|| {
        HashMap::from([
            (
                GROUP_RECENT_FILE,
                GroupMeta {
                    display_name: "Recent Files",
                    object_name: "RecentFiles",
                },
            ),
            (
                GROUP_APP,
                GroupMeta {
                    display_name: "Applications",
                    object_name: "Applications",
                },
            ),
            (
                GROUP_FOLDER,
                GroupMeta {
                    display_name: "Folders",
                    object_name: "Folders",
                },
            ),
            (
                GROUP_FILE,
                GroupMeta {
                    display_name: "Files",
                    object_name: "Files",
                },
            ),
        ])
    })
}

pub fn display_name(group_class: &str) -> &str {
    table()
        .get(group_class)
        .map(|meta| meta.display_name)
        .unwrap_or(group_class)
}

pub fn object_name(group_class: &str) -> &str {
    table()
        .get(group_class)
        .map(|meta| meta.object_name)
        .unwrap_or(group_class)
}
