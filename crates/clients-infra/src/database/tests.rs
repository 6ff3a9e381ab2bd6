#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crate::database::entity::client;
    use crate::database::postgres_repo::PostgresClientRepository;
    use clients_core::domain::{Client, Direction, PageRequest, Sort, SortField};
    use clients_core::error::RepoError;
    use clients_core::ports::{BaseRepository, ClientRepository};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Statement, Value};

    fn model(id: i64, name: &str, cpf: &str, income: f64) -> client::Model {
        client::Model {
            id,
            name: name.to_owned(),
            cpf: cpf.to_owned(),
            income,
            birth_date: "1996-12-23T07:00:00+00:00".parse().unwrap(),
            children: 0,
        }
    }

    #[tokio::test]
    async fn test_find_client_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(7, "Jose Saramago", "10239254871", 5000.0)]])
            .into_connection();

        let repo = PostgresClientRepository::new(db);

        let result: Option<Client> = repo.find_by_id(7).await.unwrap();

        let client = result.unwrap();
        assert_eq!(client.id, Some(7));
        assert_eq!(client.name, "Jose Saramago");
        assert_eq!(
            client.birth_date,
            "1996-12-23T07:00:00Z".parse::<chrono::DateTime<chrono::Utc>>().unwrap()
        );
    }

    #[tokio::test]
    async fn test_exists_by_id_false_when_no_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<client::Model>::new()])
            .into_connection();

        let repo = PostgresClientRepository::new(db);

        assert!(
            !BaseRepository::<Client, i64>::exists_by_id(&repo, 1000)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn test_save_new_client_returns_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(15, "Toni Morrison", "10219344681", 10000.0)]])
            .into_connection();

        let repo = PostgresClientRepository::new(db);
        let new_client = Client::new(
            "Toni Morrison",
            "10219344681",
            10000.0,
            "1996-12-23T07:00:00Z".parse().unwrap(),
            0,
        );

        let saved = repo.save(new_client).await.unwrap();

        assert_eq!(saved.id, Some(15));
        assert_eq!(saved.income, 10000.0);
    }

    #[tokio::test]
    async fn test_delete_missing_client_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresClientRepository::new(db);

        let result = BaseRepository::<Client, i64>::delete(&repo, 1000).await;

        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_find_by_income_builds_page() {
        let count_row = BTreeMap::from([("num_items", Value::from(2i64))]);
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row]])
            .append_query_results(vec![vec![
                model(7, "Jose Saramago", "10239254871", 5000.0),
                model(9, "Sebastiao Siveira", "17256987123", 5000.0),
            ]])
            .into_connection();

        let repo = PostgresClientRepository::new(db);
        let request = PageRequest::new(0, 12, Sort::default()).unwrap();

        let page = repo.find_by_income(request, 5000.0).await.unwrap();

        assert_eq!(page.total_elements, 2);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.content.len(), 2);
        assert!(page.content.iter().all(|c| c.income == 5000.0));
    }

    fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("num_items", Value::from(n))])
    }

    /// Statements sent by the repository, in order.
    fn statements(repo: PostgresClientRepository) -> Vec<Statement> {
        repo.db
            .into_transaction_log()
            .iter()
            .flat_map(|txn| txn.statements().to_vec())
            .collect()
    }

    #[tokio::test]
    async fn test_find_by_income_greater_than_filters_and_sorts() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(2)]])
            .append_query_results(vec![vec![
                model(8, "Toni Morrison", "10219344681", 10000.0),
                model(4, "Carolina Maria de Jesus", "10419244771", 7500.0),
            ]])
            .into_connection();

        let repo = PostgresClientRepository::new(db);
        let sort = Sort::new(SortField::Income, Direction::Desc);
        let request = PageRequest::new(0, 12, sort).unwrap();

        let page = repo.find_by_income_greater_than(request, 5000.0).await.unwrap();
        let ids: Vec<_> = page.content.iter().filter_map(|c| c.id).collect();
        assert_eq!(ids, vec![8, 4]);

        let page_query = statements(repo).pop().unwrap();
        assert!(page_query.sql.contains(r#""clients"."income" > $1"#));
        let order_by = &page_query.sql[page_query.sql.find("ORDER BY").unwrap()..];
        assert!(order_by.find(r#""income" DESC"#).unwrap() < order_by.find(r#""id" ASC"#).unwrap());
        assert_eq!(page_query.values.unwrap().0[0], Value::from(5000.0f64));
    }

    #[tokio::test]
    async fn test_cpf_fragment_matches_wildcards_literally() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(0)]])
            .append_query_results(vec![Vec::<client::Model>::new()])
            .into_connection();

        let repo = PostgresClientRepository::new(db);

        let page = repo
            .find_by_cpf_containing(PageRequest::default(), "1_2%\\")
            .await
            .unwrap();
        assert!(page.empty);

        let page_query = statements(repo).pop().unwrap();
        assert!(page_query.sql.contains(r#""clients"."cpf" LIKE"#));
        assert!(page_query.sql.contains("ESCAPE"));
        let values = page_query.values.unwrap().0;
        assert_eq!(values[0], Value::from("%1\\_2\\%\\\\%"));
    }

    #[tokio::test]
    async fn test_last_addressable_page_is_fetched() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![count_row(4)]])
            .append_query_results(vec![Vec::<client::Model>::new()])
            .into_connection();

        let repo = PostgresClientRepository::new(db);
        let page = i64::MAX as u64 / 12 - 1;
        let request = PageRequest::new(page, 12, Sort::default()).unwrap();

        let result = repo.find_all(request).await.unwrap();

        assert!(result.empty);
        assert_eq!(result.number, page);
        assert_eq!(result.total_elements, 4);
    }
}
