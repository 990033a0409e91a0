use serde::{Deserialize, Serialize};

/// Метаданные экземпляра агрегата (lifecycle tracking)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMetadata {
    /// Дата создания записи
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Дата последнего обновления
    pub updated_at: chrono::DateTime<chrono::Utc>,
    /// Версия для optimistic locking
    #[serde(default)]
    pub version: i32,
}

impl EntityMetadata {
    /// Создать новые метаданные для нового агрегата
    pub fn new() -> Self {
        let now = chrono::Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            version: 0,
        }
    }

    /// Дата создания для колонки списка
    pub fn created_display(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

impl Default for EntityMetadata {
    fn default() -> Self {
        Self::new()
    }
}
