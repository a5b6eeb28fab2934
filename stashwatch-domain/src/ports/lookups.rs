use async_trait::async_trait;

/// Static category table: maps a filter's category id to the concrete
/// type names it covers. Unknown ids resolve to an empty list.
#[async_trait]
pub trait CategoryIndex: Send + Sync {
    async fn lookup_category_types(&self, category_id: &str) -> anyhow::Result<Vec<String>>;
}
