//! Domain entities - the core business objects.

mod client;
mod page;

pub use client::Client;
pub use page::{
    DEFAULT_PAGE_SIZE, DEFAULT_SORT_FIELD, Direction, Page, PageRequest, Sort, SortField,
};
