// src/models/staff.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::validators::{validate_cpf, validate_money};

/// Jornada usada para estimar o custo de um dia de serviço.
pub const HOURS_PER_DAY: i64 = 8;

const PROFESSIONAL_EMAIL_DOMAIN: &str = "bar.com";

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "employee_role", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeRole {
    Bartender,
    Barback,
    Waiter,
    Manager,
    Chef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "service_role", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceRole {
    Bartender,
    Barback,
    Waiter,
    FloorChef, // Chefe de salão
    Manager,
}

// --- Funcionários ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Uuid,
    #[schema(example = "Ana Silva")]
    pub name: String,
    pub daily_rate: Decimal,
    pub role: EmployeeRole,
    #[schema(example = "12345678901")]
    pub cpf: Option<String>,
    pub email: Option<String>,
    // Resolvido por busca, nunca embutido
    pub supervisor_id: Option<Uuid>,
}

impl Employee {
    pub fn is_senior(&self) -> bool {
        matches!(self.role, EmployeeRole::Manager | EmployeeRole::Chef)
    }

    /// O e-mail cadastrado ou, na falta dele, `nome.sobrenome@bar.com`.
    pub fn professional_email(&self) -> String {
        match self.email.as_deref().map(str::trim) {
            Some(email) if !email.is_empty() => email.to_string(),
            _ => {
                let slug = self
                    .name
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(".")
                    .to_lowercase();
                format!("{slug}@{PROFESSIONAL_EMAIL_DOMAIN}")
            }
        }
    }
}

// --- Serviços ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: Uuid,
    #[schema(example = "Open bar")]
    pub name: String,
    pub hourly_rate: Decimal,
    pub role: ServiceRole,
}

impl Service {
    pub fn estimated_daily_cost(&self) -> Decimal {
        self.hourly_rate * Decimal::from(HOURS_PER_DAY)
    }

    pub fn is_managerial(&self) -> bool {
        matches!(self.role, ServiceRole::FloorChef | ServiceRole::Manager)
    }
}

// --- PAYLOADS ---

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeePayload {
    #[validate(length(min = 1, max = 100, message = "O nome é obrigatório (até 100 caracteres)."))]
    #[schema(example = "Ana Silva")]
    pub name: String,

    #[validate(custom(function = "validate_money"))]
    #[serde(default)]
    pub daily_rate: Decimal,

    pub role: EmployeeRole,

    #[validate(custom(function = "validate_cpf"))]
    pub cpf: Option<String>,

    #[validate(email(message = "E-mail inválido."))]
    pub email: Option<String>,

    pub supervisor_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServicePayload {
    #[validate(length(min = 1, max = 100, message = "O nome é obrigatório (até 100 caracteres)."))]
    pub name: String,

    #[validate(custom(function = "validate_money"))]
    #[serde(default)]
    pub hourly_rate: Decimal,

    pub role: ServiceRole,

    // Funcionários que prestam o serviço
    #[serde(default)]
    pub employee_ids: Vec<Uuid>,
}

// Linha do banco: serviço + ids agregados da tabela de junção
#[derive(Debug, Clone, FromRow)]
pub struct ServiceRow {
    #[sqlx(flatten)]
    pub service: Service,
    pub employee_ids: Vec<Uuid>,
}

// --- VIEWS ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeView {
    #[serde(flatten)]
    pub employee: Employee,
    pub is_senior: bool,
    #[schema(example = "ana.silva@bar.com")]
    pub professional_email: String,
}

impl From<Employee> for EmployeeView {
    fn from(employee: Employee) -> Self {
        Self {
            is_senior: employee.is_senior(),
            professional_email: employee.professional_email(),
            employee,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceView {
    #[serde(flatten)]
    pub service: Service,
    pub employee_ids: Vec<Uuid>,
    pub estimated_daily_cost: Decimal,
    pub is_managerial: bool,
}

impl From<ServiceRow> for ServiceView {
    fn from(row: ServiceRow) -> Self {
        Self {
            estimated_daily_cost: row.service.estimated_daily_cost(),
            is_managerial: row.service.is_managerial(),
            service: row.service,
            employee_ids: row.employee_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn employee(name: &str, email: Option<&str>, role: EmployeeRole) -> Employee {
        Employee {
            id: Uuid::new_v4(),
            name: name.into(),
            daily_rate: dec!(180.00),
            role,
            cpf: None,
            email: email.map(Into::into),
            supervisor_id: None,
        }
    }

    #[test]
    fn professional_email_prefers_stored_address() {
        let e = employee("Ana Silva", Some("ana@gmail.com"), EmployeeRole::Waiter);
        assert_eq!(e.professional_email(), "ana@gmail.com");
    }

    #[test]
    fn professional_email_falls_back_to_name_slug() {
        assert_eq!(employee("Ana Silva", None, EmployeeRole::Waiter).professional_email(), "ana.silva@bar.com");
        assert_eq!(employee("  João  da Costa ", Some(""), EmployeeRole::Chef).professional_email(), "joão.da.costa@bar.com");
    }

    #[test]
    fn seniority_follows_role() {
        assert!(employee("A", None, EmployeeRole::Manager).is_senior());
        assert!(employee("A", None, EmployeeRole::Chef).is_senior());
        assert!(!employee("A", None, EmployeeRole::Bartender).is_senior());
        assert!(!employee("A", None, EmployeeRole::Barback).is_senior());
    }

    #[test]
    fn service_daily_cost_is_eight_hours() {
        let s = Service {
            id: Uuid::new_v4(),
            name: "Bartender para festa".into(),
            hourly_rate: dec!(37.50),
            role: ServiceRole::Bartender,
        };
        assert_eq!(s.estimated_daily_cost(), dec!(300.00));
        assert!(!s.is_managerial());
    }

    #[test]
    fn floor_chef_and_manager_are_managerial() {
        for role in [ServiceRole::FloorChef, ServiceRole::Manager] {
            let s = Service { id: Uuid::new_v4(), name: "x".into(), hourly_rate: Decimal::ZERO, role };
            assert!(s.is_managerial());
        }
    }

    #[test]
    fn employee_payload_validates_cpf_and_email_only_when_present() {
        let ok: EmployeePayload = serde_json::from_value(serde_json::json!({
            "name": "Ana Silva",
            "role": "WAITER"
        }))
        .unwrap();
        assert!(ok.validate().is_ok());

        let bad: EmployeePayload = serde_json::from_value(serde_json::json!({
            "name": "Ana Silva",
            "role": "WAITER",
            "cpf": "123",
            "email": "ana"
        }))
        .unwrap();
        let errors = bad.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("cpf"));
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn employee_view_exposes_derived_fields() {
        let json = serde_json::to_value(EmployeeView::from(employee("Ana Silva", None, EmployeeRole::Manager))).unwrap();
        assert_eq!(json["professionalEmail"], "ana.silva@bar.com");
        assert_eq!(json["isSenior"], true);
        assert_eq!(json["role"], "MANAGER");
    }
}
