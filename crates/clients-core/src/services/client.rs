use std::sync::Arc;

use async_trait::async_trait;

use clients_shared::ClientDto;

use crate::domain::{Client, Page, PageRequest};
use crate::error::{DomainError, DomainResult, RepoError};
use crate::ports::ClientRepository;

/// Client operations as seen by the HTTP layer.
///
/// Every operation returns transfer objects. Id-addressed operations fail
/// with [`DomainError::ResourceNotFound`] when the client does not exist.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ClientService: Send + Sync {
    async fn find_all_paged(&self, request: PageRequest) -> DomainResult<Page<ClientDto>>;

    async fn find_by_id(&self, id: i64) -> DomainResult<ClientDto>;

    async fn find_by_income(
        &self,
        request: PageRequest,
        income: f64,
    ) -> DomainResult<Page<ClientDto>>;

    async fn find_by_income_greater_than(
        &self,
        request: PageRequest,
        income: f64,
    ) -> DomainResult<Page<ClientDto>>;

    async fn find_by_cpf_like(
        &self,
        request: PageRequest,
        cpf: String,
    ) -> DomainResult<Page<ClientDto>>;

    /// Persist a new client. Any id on the payload is ignored.
    async fn insert(&self, dto: ClientDto) -> DomainResult<ClientDto>;

    /// Overwrite every mutable field of client `id` with the payload.
    async fn update(&self, id: i64, dto: ClientDto) -> DomainResult<ClientDto>;

    async fn delete(&self, id: i64) -> DomainResult<()>;
}

/// [`ClientService`] backed by a [`ClientRepository`].
#[derive(Clone)]
pub struct ClientServiceImpl {
    repo: Arc<dyn ClientRepository>,
}

impl ClientServiceImpl {
    pub fn new(repo: Arc<dyn ClientRepository>) -> Self {
        Self { repo }
    }

    async fn load(&self, id: i64) -> DomainResult<Client> {
        self.repo.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(client_id = id, "Client not found");
            DomainError::not_found()
        })
    }
}

#[async_trait]
impl ClientService for ClientServiceImpl {
    async fn find_all_paged(&self, request: PageRequest) -> DomainResult<Page<ClientDto>> {
        tracing::debug!(page = request.page(), size = request.size(), "Listing clients");
        let page = self.repo.find_all(request).await?;
        Ok(page.map(ClientDto::from))
    }

    async fn find_by_id(&self, id: i64) -> DomainResult<ClientDto> {
        tracing::debug!(client_id = id, "Finding client by id");
        Ok(self.load(id).await?.into())
    }

    async fn find_by_income(
        &self,
        request: PageRequest,
        income: f64,
    ) -> DomainResult<Page<ClientDto>> {
        tracing::debug!(income, "Finding clients by income");
        let page = self.repo.find_by_income(request, income).await?;
        Ok(page.map(ClientDto::from))
    }

    async fn find_by_income_greater_than(
        &self,
        request: PageRequest,
        income: f64,
    ) -> DomainResult<Page<ClientDto>> {
        tracing::debug!(income, "Finding clients with income above threshold");
        let page = self.repo.find_by_income_greater_than(request, income).await?;
        Ok(page.map(ClientDto::from))
    }

    async fn find_by_cpf_like(
        &self,
        request: PageRequest,
        cpf: String,
    ) -> DomainResult<Page<ClientDto>> {
        tracing::debug!(fragment_len = cpf.len(), "Finding clients by cpf fragment");
        let page = self.repo.find_by_cpf_containing(request, &cpf).await?;
        Ok(page.map(ClientDto::from))
    }

    async fn insert(&self, dto: ClientDto) -> DomainResult<ClientDto> {
        let saved = self.repo.save(Client::from_dto(dto)).await?;
        tracing::info!(client_id = ?saved.id, "Client created");
        Ok(saved.into())
    }

    async fn update(&self, id: i64, dto: ClientDto) -> DomainResult<ClientDto> {
        let mut client = self.load(id).await?;
        client.apply(dto);

        let saved = self.repo.save(client).await.map_err(|e| match e {
            // Removed between the read and the write.
            RepoError::NotFound => DomainError::not_found(),
            other => other.into(),
        })?;
        tracing::info!(client_id = id, "Client updated");
        Ok(saved.into())
    }

    async fn delete(&self, id: i64) -> DomainResult<()> {
        if !self.repo.exists_by_id(id).await? {
            tracing::warn!(client_id = id, "Delete of missing client");
            return Err(DomainError::not_found());
        }

        self.repo.delete(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::not_found(),
            other => other.into(),
        })?;
        tracing::info!(client_id = id, "Client deleted");
        Ok(())
    }
}
