use std::collections::HashMap;

use async_trait::async_trait;
use serde::Deserialize;
use tokio::fs;

use stashwatch_domain::CategoryIndex;

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryEntry {
    pub types: Vec<String>,
}

/// In-memory category table, loaded once from the item-types JSON file
/// (category id -> { "types": [...] }). Read-only after construction.
#[derive(Debug, Default)]
pub struct StaticCategoryIndex {
    categories: HashMap<String, CategoryEntry>,
}

impl StaticCategoryIndex {
    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(Self {
            categories: serde_json::from_str(content)?,
        })
    }

    pub async fn load(path: &str) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path).await?;
        Self::from_json(&content)
    }
}

#[async_trait]
impl CategoryIndex for StaticCategoryIndex {
    async fn lookup_category_types(&self, category_id: &str) -> anyhow::Result<Vec<String>> {
        Ok(self
            .categories
            .get(category_id)
            .map(|entry| entry.types.clone())
            .unwrap_or_default())
    }
}
