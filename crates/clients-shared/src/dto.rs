//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client as it travels over the wire.
///
/// `id` is ignored on create and update payloads; responses always carry it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub cpf: String,
    pub income: f64,
    pub birth_date: DateTime<Utc>,
    pub children: i32,
}

impl ClientDto {
    pub fn new(
        id: Option<i64>,
        name: impl Into<String>,
        cpf: impl Into<String>,
        income: f64,
        birth_date: DateTime<Utc>,
        children: i32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            cpf: cpf.into(),
            income,
            birth_date,
            children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_fields() {
        let birth_date = "1996-12-23T07:00:00Z".parse().unwrap();
        let dto = ClientDto::new(Some(7), "Jose Saramago", "10239254871", 5000.0, birth_date, 0);

        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["cpf"], "10239254871");
        assert_eq!(json["income"], 5000.0);
        assert_eq!(json["birthDate"], "1996-12-23T07:00:00Z");
        assert_eq!(json["children"], 0);
    }

    #[test]
    fn accepts_payload_without_id() {
        let payload = r#"{
            "name": "Toni Morrison",
            "cpf": "10219344681",
            "income": 10000.0,
            "birthDate": "1940-02-23T07:00:00Z",
            "children": 0
        }"#;

        let dto: ClientDto = serde_json::from_str(payload).unwrap();

        assert_eq!(dto.id, None);
        assert_eq!(dto.name, "Toni Morrison");
        assert!(serde_json::to_value(&dto).unwrap().get("id").is_none());
    }
}
