//! Book catalog service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook, UpdateBook},
    repository::BookRepository,
};

/// Mediates every read and write of the book collection.
///
/// Operations that name a book by id fail with `NotFound` when no such book
/// is stored. Fetch-then-write sequences are two separate storage calls with
/// no transaction around them.
#[derive(Clone)]
pub struct BooksService {
    repository: Arc<dyn BookRepository>,
}

impl BooksService {
    pub fn new(repository: Arc<dyn BookRepository>) -> Self {
        Self { repository }
    }

    /// Store a new book; storage assigns the id
    pub async fn create(&self, data: &CreateBook) -> AppResult<Book> {
        let book = self.repository.insert(data).await?;
        tracing::info!(id = book.id, title = %book.title, "Book created");
        Ok(book)
    }

    /// List every book. An empty catalog is reported as `NotFound`.
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = self.repository.list().await?;
        if books.is_empty() {
            return Err(AppError::NotFound("No books found.".to_string()));
        }
        Ok(books)
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.repository.get(id).await?.ok_or_else(|| {
            tracing::debug!(id, "Book not found");
            AppError::NotFound(format!("Book with ID {} not found.", id))
        })
    }

    /// Apply a partial update and return the book as read back afterwards.
    pub async fn update(&self, id: i32, data: &UpdateBook) -> AppResult<Book> {
        self.get_by_id(id).await?;
        let rows = self.repository.update(id, data).await?;
        tracing::info!(id, rows, "Book updated");
        self.get_by_id(id).await
    }

    /// Delete a book and return its state from just before deletion.
    pub async fn remove(&self, id: i32) -> AppResult<Book> {
        let book = self.get_by_id(id).await?;
        self.repository.delete(id).await?;
        tracing::info!(id, title = %book.title, "Book deleted");
        Ok(book)
    }

    /// Check storage connectivity (for readiness)
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
