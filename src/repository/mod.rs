//! Repository layer for book storage

pub mod memory;
pub mod postgres;

use std::sync::Arc;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

pub use memory::MemoryBookRepository;
pub use postgres::PgBookRepository;

/// Storage operations for books.
///
/// Implementations report misses as `None` or as zero rows affected; turning
/// those into caller-visible errors is the service's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// All books ordered by id
    async fn list(&self) -> AppResult<Vec<Book>>;

    async fn get(&self, id: i32) -> AppResult<Option<Book>>;

    /// Store a new book and return it with its assigned id
    async fn insert(&self, data: &CreateBook) -> AppResult<Book>;

    /// Write the fields present in `data`, returning the number of rows changed
    async fn update(&self, id: i32, data: &UpdateBook) -> AppResult<u64>;

    /// Returns the number of rows removed
    async fn delete(&self, id: i32) -> AppResult<u64>;

    /// Check that the storage backend answers
    async fn ping(&self) -> AppResult<()>;
}

/// Main repository struct holding the storage backends
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BookRepository>,
}

impl Repository {
    pub fn new(books: Arc<dyn BookRepository>) -> Self {
        Self { books }
    }

    /// Repository backed by the given database pool
    pub fn postgres(pool: Pool<Postgres>) -> Self {
        Self::new(Arc::new(PgBookRepository::new(pool)))
    }

    /// Empty in-memory repository
    pub fn memory() -> Self {
        Self::new(Arc::new(MemoryBookRepository::new()))
    }
}
