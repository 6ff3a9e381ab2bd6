use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use clients_core::domain::{Client, Direction, Page, PageRequest, Sort, SortField};
use clients_core::error::RepoError;
use clients_core::ports::{BaseRepository, ClientRepository};

struct Store {
    clients: BTreeMap<i64, Client>,
    next_id: i64,
}

/// In-memory client repository using a `BTreeMap` behind an async `RwLock`.
///
/// Ids are assigned from a monotonically increasing sequence starting at 1.
/// Note: Data is lost on process restart.
pub struct InMemoryClientRepository {
    store: RwLock<Store>,
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::with_clients(Vec::new())
    }

    /// Seed the repository. Clients that already carry an id keep it, the
    /// rest are numbered after the highest seeded id.
    pub fn with_clients(seed: impl IntoIterator<Item = Client>) -> Self {
        let seed: Vec<Client> = seed.into_iter().collect();
        let mut next_id = seed.iter().filter_map(|c| c.id).max().unwrap_or(0) + 1;

        let mut clients = BTreeMap::new();
        for mut client in seed {
            let id = *client.id.get_or_insert_with(|| {
                let id = next_id;
                next_id += 1;
                id
            });
            clients.insert(id, client);
        }

        Self {
            store: RwLock::new(Store { clients, next_id }),
        }
    }

    async fn query<P>(&self, request: PageRequest, predicate: P) -> Page<Client>
    where
        P: Fn(&Client) -> bool,
    {
        let store = self.store.read().await;

        let mut matches: Vec<Client> = store
            .clients
            .values()
            .filter(|c| predicate(c))
            .cloned()
            .collect();
        sort_clients(&mut matches, request.sort());

        let total = matches.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(request.size()).unwrap_or(usize::MAX);
        let content = matches.into_iter().skip(offset).take(size).collect();

        Page::new(content, &request, total)
    }
}

impl Default for InMemoryClientRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn compare(a: &Client, b: &Client, field: SortField) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.name.cmp(&b.name),
        SortField::Cpf => a.cpf.cmp(&b.cpf),
        SortField::Income => a.income.total_cmp(&b.income),
        SortField::BirthDate => a.birth_date.cmp(&b.birth_date),
        SortField::Children => a.children.cmp(&b.children),
    }
}

fn sort_clients(clients: &mut [Client], sort: Sort) {
    clients.sort_by(|a, b| {
        let ordering = compare(a, b, sort.field);
        let ordering = match sort.direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        };
        ordering.then_with(|| a.id.cmp(&b.id))
    });
}

#[async_trait]
impl BaseRepository<Client, i64> for InMemoryClientRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Client>, RepoError> {
        let store = self.store.read().await;
        Ok(store.clients.get(&id).cloned())
    }

    async fn exists_by_id(&self, id: i64) -> Result<bool, RepoError> {
        let store = self.store.read().await;
        Ok(store.clients.contains_key(&id))
    }

    async fn save(&self, mut entity: Client) -> Result<Client, RepoError> {
        let mut store = self.store.write().await;

        let id = match entity.id {
            Some(id) if store.clients.contains_key(&id) => id,
            // Updating a row that is not there.
            Some(_) => return Err(RepoError::NotFound),
            None => {
                let id = store.next_id;
                store.next_id += 1;
                entity.id = Some(id);
                id
            }
        };

        store.clients.insert(id, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store
            .clients
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn find_all(&self, request: PageRequest) -> Result<Page<Client>, RepoError> {
        Ok(self.query(request, |_| true).await)
    }

    async fn find_by_income(
        &self,
        request: PageRequest,
        income: f64,
    ) -> Result<Page<Client>, RepoError> {
        Ok(self.query(request, |c| c.income == income).await)
    }

    async fn find_by_income_greater_than(
        &self,
        request: PageRequest,
        income: f64,
    ) -> Result<Page<Client>, RepoError> {
        Ok(self.query(request, |c| c.income > income).await)
    }

    async fn find_by_cpf_containing(
        &self,
        request: PageRequest,
        fragment: &str,
    ) -> Result<Page<Client>, RepoError> {
        Ok(self.query(request, |c| c.cpf.contains(fragment)).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(id: i64, name: &str, cpf: &str, income: f64) -> Client {
        Client {
            id: Some(id),
            ..Client::new(name, cpf, income, "1996-12-23T07:00:00Z".parse().unwrap(), 0)
        }
    }

    fn seeded() -> InMemoryClientRepository {
        InMemoryClientRepository::with_clients(vec![
            client(7, "Jose Saramago", "10239254871", 5000.0),
            client(4, "Carolina Maria de Jesus", "10419244771", 7500.0),
            client(8, "Toni Morrison", "10219344681", 10000.0),
            client(9, "Sebastiao Siveira", "17256987123", 5000.0),
        ])
    }

    fn ids(page: &Page<Client>) -> Vec<i64> {
        page.content.iter().filter_map(|c| c.id).collect()
    }

    fn by_id() -> PageRequest {
        PageRequest::new(0, 12, Sort::new(SortField::Id, Direction::Asc)).unwrap()
    }

    #[tokio::test]
    async fn test_save_assigns_ids_after_seed() {
        let repo = seeded();
        let saved = repo
            .save(Client::new("New", "000", 1.0, "2000-01-01T00:00:00Z".parse().unwrap(), 0))
            .await
            .unwrap();

        assert_eq!(saved.id, Some(10));
        assert!(repo.exists_by_id(10).await.unwrap());
    }

    #[tokio::test]
    async fn test_save_unknown_id_is_not_found() {
        let repo = seeded();
        let result = repo.save(client(1000, "Ghost", "1", 1.0)).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
        assert!(!repo.exists_by_id(1000).await.unwrap());
    }

    #[tokio::test]
    async fn test_income_equality_is_exact() {
        let page = seeded().find_by_income(by_id(), 5000.0).await.unwrap();

        assert_eq!(ids(&page), vec![7, 9]);
        assert_eq!(page.total_elements, 2);
    }

    #[tokio::test]
    async fn test_income_threshold_excludes_boundary() {
        let page = seeded()
            .find_by_income_greater_than(by_id(), 7500.0)
            .await
            .unwrap();

        assert_eq!(ids(&page), vec![8]);
    }

    #[tokio::test]
    async fn test_cpf_fragment_matches_anywhere() {
        let page = seeded()
            .find_by_cpf_containing(by_id(), "92")
            .await
            .unwrap();

        assert_eq!(ids(&page), vec![4, 7]);
    }

    #[tokio::test]
    async fn test_pages_and_sorts() {
        let repo = seeded();
        let request =
            PageRequest::new(1, 2, Sort::new(SortField::Income, Direction::Desc)).unwrap();

        let page = repo.find_all(request).await.unwrap();

        // 10000 (8), 7500 (4) | 5000 (7), 5000 (9)
        assert_eq!(ids(&page), vec![7, 9]);
        assert_eq!(page.total_elements, 4);
        assert_eq!(page.total_pages, 2);
        assert!(page.last);
    }

    #[tokio::test]
    async fn test_default_sort_is_by_name() {
        let page = seeded().find_all(PageRequest::default()).await.unwrap();

        assert_eq!(ids(&page), vec![4, 7, 9, 8]);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let repo = seeded();

        repo.delete(7).await.unwrap();
        assert!(matches!(repo.delete(7).await, Err(RepoError::NotFound)));
    }
}
