//! PostgreSQL client repository.

use async_trait::async_trait;
use sea_orm::sea_query::LikeExpr;
use sea_orm::{ColumnTrait, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder, Select};

use clients_core::domain::{Client, Direction, Page, PageRequest, SortField};
use clients_core::error::RepoError;
use clients_core::ports::ClientRepository;

use super::entity::client::{self, Entity as ClientEntity};
use super::postgres_base::{PostgresBaseRepository, repo_error};

/// PostgreSQL client repository.
pub type PostgresClientRepository = PostgresBaseRepository<ClientEntity>;

fn sort_column(field: SortField) -> client::Column {
    match field {
        SortField::Id => client::Column::Id,
        SortField::Name => client::Column::Name,
        SortField::Cpf => client::Column::Cpf,
        SortField::Income => client::Column::Income,
        SortField::BirthDate => client::Column::BirthDate,
        SortField::Children => client::Column::Children,
    }
}

/// `%fragment%` with LIKE metacharacters in the fragment matched literally.
fn contains_pattern(fragment: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    LikeExpr::new(format!("%{escaped}%")).escape('\\')
}

impl PostgresClientRepository {
    /// Run `select` as one sorted page plus a total count.
    async fn fetch_page(
        &self,
        select: Select<ClientEntity>,
        request: PageRequest,
    ) -> Result<Page<Client>, RepoError> {
        let sort = request.sort();
        let order = match sort.direction {
            Direction::Asc => Order::Asc,
            Direction::Desc => Order::Desc,
        };

        let paginator = select
            .order_by(sort_column(sort.field), order)
            .order_by_asc(client::Column::Id)
            .paginate(&self.db, request.size());

        let total = paginator.num_items().await.map_err(repo_error)?;
        let models = paginator
            .fetch_page(request.page())
            .await
            .map_err(repo_error)?;

        tracing::debug!(
            total,
            returned = models.len(),
            page = request.page(),
            "Fetched client page"
        );

        Ok(Page::new(
            models.into_iter().map(Into::into).collect(),
            &request,
            total,
        ))
    }
}

#[async_trait]
impl ClientRepository for PostgresClientRepository {
    async fn find_all(&self, request: PageRequest) -> Result<Page<Client>, RepoError> {
        self.fetch_page(ClientEntity::find(), request).await
    }

    async fn find_by_income(
        &self,
        request: PageRequest,
        income: f64,
    ) -> Result<Page<Client>, RepoError> {
        let select = ClientEntity::find().filter(client::Column::Income.eq(income));
        self.fetch_page(select, request).await
    }

    async fn find_by_income_greater_than(
        &self,
        request: PageRequest,
        income: f64,
    ) -> Result<Page<Client>, RepoError> {
        let select = ClientEntity::find().filter(client::Column::Income.gt(income));
        self.fetch_page(select, request).await
    }

    async fn find_by_cpf_containing(
        &self,
        request: PageRequest,
        fragment: &str,
    ) -> Result<Page<Client>, RepoError> {
        // Case-sensitive on PostgreSQL.
        let select =
            ClientEntity::find().filter(client::Column::Cpf.like(contains_pattern(fragment)));
        self.fetch_page(select, request).await
    }
}
