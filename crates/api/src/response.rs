//! Uniform response envelopes.
//!
//! Every successful response carries `{status, message, data}`; paginated
//! listings add `total_count` / `page` / `page_size` / `total_pages`.
//! Errors reuse the same shape via [`crate::error::AppError`].

use serde::Serialize;

/// Standard `{status, message, data}` response envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub status: u16,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            status: 200,
            message: message.into(),
            data,
        }
    }

    pub fn created(message: impl Into<String>, data: T) -> Self {
        Self {
            status: 201,
            message: message.into(),
            data,
        }
    }
}

/// Paginated listing envelope.
///
/// `total_pages == ceil(total_count / page_size)`; a page past the end
/// yields an empty `data` list with status 200, not an error.
#[derive(Debug, Serialize)]
pub struct PageEnvelope<T: Serialize> {
    pub status: u16,
    pub message: String,
    pub total_count: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub data: Vec<T>,
}

impl<T: Serialize> PageEnvelope<T> {
    pub fn ok(
        message: impl Into<String>,
        total_count: i64,
        page: i64,
        page_size: i64,
        data: Vec<T>,
    ) -> Self {
        let total_pages = if page_size > 0 {
            (total_count + page_size - 1) / page_size
        } else {
            0
        };
        Self {
            status: 200,
            message: message.into(),
            total_count,
            page,
            page_size,
            total_pages,
            data,
        }
    }
}
