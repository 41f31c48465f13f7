use serde::{Deserialize, Serialize};

/// Row of the searchable item list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// 0-based position in the unfiltered list
    pub id: u32,
    pub name: String,
    /// Score in 0..1000
    pub value: u32,
}
