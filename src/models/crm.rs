// src/models/crm.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

// --- CLIENTE ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: Uuid,
    #[schema(example = "Maria da Silva")]
    pub name: String,
    #[schema(example = "11988887777")]
    pub phone: String,
    pub email: String,
    // Quem indicou este cliente
    pub referred_by_id: Option<Uuid>,
    // Preenchido pelo banco no INSERT
    pub registered_at: DateTime<Utc>,
}

impl Client {
    pub fn first_name(&self) -> &str {
        let name = self.name.trim();
        name.split(' ').next().unwrap_or(name)
    }

    pub fn short_contact(&self) -> String {
        format!("{} - {}", self.first_name(), self.phone)
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientPayload {
    #[validate(length(min = 1, max = 100, message = "O nome é obrigatório (até 100 caracteres)."))]
    #[schema(example = "Maria da Silva")]
    pub name: String,

    #[validate(length(min = 1, max = 20, message = "O telefone é obrigatório."))]
    pub phone: String,

    #[validate(email(message = "E-mail inválido."))]
    pub email: String,

    pub referred_by_id: Option<Uuid>,
}

/// Filtro da listagem: `?q=` busca no nome, sem diferenciar maiúsculas.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClientFilter {
    pub q: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientView {
    #[serde(flatten)]
    pub client: Client,
    #[schema(example = "Maria")]
    pub first_name: String,
    #[schema(example = "Maria - 11988887777")]
    pub short_contact: String,
}

impl From<Client> for ClientView {
    fn from(client: Client) -> Self {
        Self {
            first_name: client.first_name().to_string(),
            short_contact: client.short_contact(),
            client,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(name: &str) -> Client {
        Client {
            id: Uuid::new_v4(),
            name: name.into(),
            phone: "11988887777".into(),
            email: "maria@email.com".into(),
            referred_by_id: None,
            registered_at: Utc::now(),
        }
    }

    #[test]
    fn first_name_is_text_before_first_space() {
        assert_eq!(client("Maria da Silva").first_name(), "Maria");
        assert_eq!(client("Cher").first_name(), "Cher");
        assert_eq!(client(" Bruno Lima").first_name(), "Bruno");
    }

    #[test]
    fn short_contact_joins_first_name_and_phone() {
        assert_eq!(client("Maria da Silva").short_contact(), "Maria - 11988887777");
    }

    #[test]
    fn registration_date_is_not_accepted_from_callers() {
        let payload: ClientPayload = serde_json::from_value(serde_json::json!({
            "name": "Maria da Silva",
            "phone": "11988887777",
            "email": "maria@email.com",
            "registeredAt": "2020-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!(payload.validate().is_ok());
        assert!(payload.referred_by_id.is_none());
    }

    #[test]
    fn client_view_has_first_name_and_contact() {
        let json = serde_json::to_value(ClientView::from(client("Maria da Silva"))).unwrap();
        assert_eq!(json["firstName"], "Maria");
        assert_eq!(json["shortContact"], "Maria - 11988887777");
        assert!(json.get("registeredAt").is_some());
    }
}
