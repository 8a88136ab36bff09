#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedItem {
    pub id: String,
    pub title: String,
    pub path: String,
    pub relevance: i64,
}

impl MatchedItem {
    pub fn new(id: &str, title: &str, path: &str, relevance: i64) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            path: path.to_string(),
            relevance,
        }
    }
}
