#![allow(dead_code)]
use std::sync::Arc;

use crate::{
    config::SqliteConfig,
    storage::{CloseStorage, HealthStorage, TodoStorage},
};

use super::SqliteStorage;

pub struct TestStorageBuilder {
    todos: Vec<String>,
    storage: Arc<SqliteStorage>,
}

impl TestStorageBuilder {
    pub async fn new() -> Self {
        let storage = SqliteStorage::connect(&SqliteConfig {
            url: "sqlite::memory:".to_string(),
        })
        .await
        .unwrap();
        storage.bootstrap_schema().await.unwrap();

        Self {
            todos: Vec::new(),
            storage: Arc::new(storage),
        }
    }

    pub fn with_todos(mut self, count: usize) -> Self {
        self.todos = (0..count).map(|i| format!("todo {}", i)).collect();
        self
    }

    pub async fn build_todo(&self) -> Arc<dyn TodoStorage> {
        for text in &self.todos {
            self.storage.insert(text).await.unwrap();
        }

        self.storage.clone()
    }

    pub fn build_health(&self) -> Arc<dyn HealthStorage> {
        self.storage.clone()
    }

    pub fn build_close(&self) -> Arc<dyn CloseStorage> {
        self.storage.clone()
    }

    pub fn todos(&self) -> Vec<String> {
        self.todos.clone()
    }
}
