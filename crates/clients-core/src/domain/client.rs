use chrono::{DateTime, Utc};

use clients_shared::ClientDto;

/// Client entity - a registered customer.
///
/// `id` is `None` until the repository assigns one on first save.
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: Option<i64>,
    pub name: String,
    pub cpf: String,
    pub income: f64,
    pub birth_date: DateTime<Utc>,
    pub children: i32,
}

impl Client {
    /// Create a client that has not been persisted yet.
    pub fn new(
        name: impl Into<String>,
        cpf: impl Into<String>,
        income: f64,
        birth_date: DateTime<Utc>,
        children: i32,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            cpf: cpf.into(),
            income,
            birth_date,
            children,
        }
    }

    /// Build an unsaved client from a payload. The payload's id is dropped.
    pub fn from_dto(dto: ClientDto) -> Self {
        Self::new(dto.name, dto.cpf, dto.income, dto.birth_date, dto.children)
    }

    /// Overwrite every mutable field with the payload's values.
    pub fn apply(&mut self, dto: ClientDto) {
        self.name = dto.name;
        self.cpf = dto.cpf;
        self.income = dto.income;
        self.birth_date = dto.birth_date;
        self.children = dto.children;
    }
}

impl From<Client> for ClientDto {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            name: client.name,
            cpf: client.cpf,
            income: client.income,
            birth_date: client.birth_date,
            children: client.children,
        }
    }
}

impl From<&Client> for ClientDto {
    fn from(client: &Client) -> Self {
        client.clone().into()
    }
}
