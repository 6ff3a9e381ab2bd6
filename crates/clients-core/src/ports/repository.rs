use async_trait::async_trait;

use crate::domain::{Client, Page, PageRequest};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Whether an entity with this ID exists.
    async fn exists_by_id(&self, id: ID) -> Result<bool, RepoError>;

    /// Save an entity. Entities without an identity are inserted and come
    /// back with one; the rest are updated in place.
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID. Fails with [`RepoError::NotFound`] when
    /// nothing was removed.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Client repository with paginated queries.
///
/// Every query orders by the request's sort and breaks ties by id ascending.
#[async_trait]
pub trait ClientRepository: BaseRepository<Client, i64> {
    async fn find_all(&self, request: PageRequest) -> Result<Page<Client>, RepoError>;

    /// Clients whose income equals `income` exactly.
    async fn find_by_income(
        &self,
        request: PageRequest,
        income: f64,
    ) -> Result<Page<Client>, RepoError>;

    /// Clients whose income is strictly greater than `income`.
    async fn find_by_income_greater_than(
        &self,
        request: PageRequest,
        income: f64,
    ) -> Result<Page<Client>, RepoError>;

    /// Clients whose cpf contains `fragment` (case-sensitive).
    async fn find_by_cpf_containing(
        &self,
        request: PageRequest,
        fragment: &str,
    ) -> Result<Page<Client>, RepoError>;
}
