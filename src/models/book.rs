//! Book model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    /// Identifier assigned by storage at creation
    pub id: i32,
    pub title: String,
    pub author: String,
    pub genre: String,
    /// Publication year
    pub year: i32,
    /// ISBN, stored as given
    #[serde(alias = "ISBN")]
    pub isbn: String,
    /// Unit price, strictly positive
    pub price: f64,
    /// Units in stock
    pub stock: i32,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, message = "title should not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "author should not be empty"))]
    pub author: String,
    #[validate(length(min = 1, message = "genre should not be empty"))]
    pub genre: String,
    #[validate(range(min = 0, message = "year must not be less than 0"))]
    pub year: i32,
    #[serde(alias = "ISBN")]
    pub isbn: String,
    #[validate(range(exclusive_min = 0.0, message = "price must be a positive number"))]
    pub price: f64,
    #[validate(range(min = 0, message = "stock must not be less than 0"))]
    pub stock: i32,
}

impl CreateBook {
    /// Build the stored record once storage has picked an id.
    pub fn into_book(self, id: i32) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            genre: self.genre,
            year: self.year,
            isbn: self.isbn,
            price: self.price,
            stock: self.stock,
        }
    }
}

/// Update book request.
///
/// Every field is optional; only the fields present are written.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, message = "title should not be empty"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "author should not be empty"))]
    pub author: Option<String>,
    #[validate(length(min = 1, message = "genre should not be empty"))]
    pub genre: Option<String>,
    #[validate(range(min = 0, message = "year must not be less than 0"))]
    pub year: Option<i32>,
    #[serde(alias = "ISBN")]
    pub isbn: Option<String>,
    #[validate(range(exclusive_min = 0.0, message = "price must be a positive number"))]
    pub price: Option<f64>,
    #[validate(range(min = 0, message = "stock must not be less than 0"))]
    pub stock: Option<i32>,
}

impl UpdateBook {
    /// True when the request carries no field at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.genre.is_none()
            && self.year.is_none()
            && self.isbn.is_none()
            && self.price.is_none()
            && self.stock.is_none()
    }

    /// Overwrite the fields of `book` that this request carries.
    pub fn apply_to(&self, book: &mut Book) {
        if let Some(ref title) = self.title {
            book.title = title.clone();
        }
        if let Some(ref author) = self.author {
            book.author = author.clone();
        }
        if let Some(ref genre) = self.genre {
            book.genre = genre.clone();
        }
        if let Some(year) = self.year {
            book.year = year;
        }
        if let Some(ref isbn) = self.isbn {
            book.isbn = isbn.clone();
        }
        if let Some(price) = self.price {
            book.price = price;
        }
        if let Some(stock) = self.stock {
            book.stock = stock;
        }
    }
}
