//! In-process book storage

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::BookRepository;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
};

#[derive(Debug, Default)]
struct MemoryState {
    books: BTreeMap<i32, Book>,
    last_id: i32,
}

/// Book storage held in memory.
///
/// Ids come from a sequence that only moves forward, so an id is never
/// handed out twice even after its book is deleted.
#[derive(Debug, Default)]
pub struct MemoryBookRepository {
    state: RwLock<MemoryState>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing set of books. The id sequence resumes after the
    /// largest id given.
    pub fn with_books(books: impl IntoIterator<Item = Book>) -> Self {
        let books: BTreeMap<i32, Book> = books.into_iter().map(|book| (book.id, book)).collect();
        let last_id = books.keys().next_back().copied().unwrap_or(0).max(0);
        Self {
            state: RwLock::new(MemoryState { books, last_id }),
        }
    }

    /// Load books from a JSON file holding an array of book records.
    pub async fn from_seed_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::Internal(format!("cannot read seed file {}: {}", path.display(), e))
        })?;
        let books: Vec<Book> = serde_json::from_str(&raw).map_err(|e| {
            AppError::Internal(format!("invalid seed file {}: {}", path.display(), e))
        })?;

        let count = books.len();
        let repository = Self::with_books(books);
        if repository.state.read().await.books.len() != count {
            return Err(AppError::Internal(format!(
                "seed file {} contains duplicate book ids",
                path.display()
            )));
        }

        tracing::info!(path = %path.display(), count, "Seeded in-memory book storage");
        Ok(repository)
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.state.read().await.books.values().cloned().collect())
    }

    async fn get(&self, id: i32) -> AppResult<Option<Book>> {
        Ok(self.state.read().await.books.get(&id).cloned())
    }

    async fn insert(&self, data: &CreateBook) -> AppResult<Book> {
        let mut state = self.state.write().await;
        let id = state
            .last_id
            .checked_add(1)
            .ok_or_else(|| AppError::Internal("book id sequence exhausted".to_string()))?;
        state.last_id = id;

        let book = data.clone().into_book(id);
        state.books.insert(id, book.clone());
        Ok(book)
    }

    async fn update(&self, id: i32, data: &UpdateBook) -> AppResult<u64> {
        if data.is_empty() {
            return Ok(0);
        }
        let mut state = self.state.write().await;
        match state.books.get_mut(&id) {
            Some(book) => {
                data.apply_to(book);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> AppResult<u64> {
        let removed = self.state.write().await.books.remove(&id);
        Ok(u64::from(removed.is_some()))
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
