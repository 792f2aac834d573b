// src/models/schema.rs

// Tabela de relações do esquema. É a mesma informação das cláusulas
// ON DELETE da migração, usada pelos serviços antes de apagar um registro
// e para traduzir erros de constraint do Postgres em campos.

use serde::Serialize;
use utoipa::ToSchema;

/// As tabelas do bar que podem ser alvo de uma referência.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Entity {
    Cocktail,
    Service,
    Package,
    Employee,
    Client,
    Reservation,
    Supplier,
    Product,
    Event,
}

impl Entity {
    pub fn table(self) -> &'static str {
        match self {
            Entity::Cocktail => "cocktails",
            Entity::Service => "services",
            Entity::Package => "packages",
            Entity::Employee => "employees",
            Entity::Client => "clients",
            Entity::Reservation => "reservations",
            Entity::Supplier => "suppliers",
            Entity::Product => "products",
            Entity::Event => "events",
        }
    }

    /// Nome usado nas mensagens de erro.
    pub fn label(self) -> &'static str {
        match self {
            Entity::Cocktail => "Coquetel",
            Entity::Service => "Serviço",
            Entity::Package => "Pacote",
            Entity::Employee => "Funcionário",
            Entity::Client => "Cliente",
            Entity::Reservation => "Reserva",
            Entity::Supplier => "Fornecedor",
            Entity::Product => "Produto",
            Entity::Event => "Evento",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDelete {
    /// Recusa apagar enquanto houver dependentes.
    Restrict,
    SetNull,
    Cascade,
}

/// Uma chave estrangeira: `table.column` aponta para `references`.
#[derive(Debug, Clone, Copy)]
pub struct Relation {
    pub table: &'static str,
    pub column: &'static str,
    pub references: Entity,
    pub on_delete: OnDelete,
}

impl Relation {
    /// Ex: "products.supplier_id"
    pub fn name(&self) -> String {
        format!("{}.{}", self.table, self.column)
    }
}

const fn rel(table: &'static str, column: &'static str, references: Entity, on_delete: OnDelete) -> Relation {
    Relation { table, column, references, on_delete }
}

pub const RELATIONS: &[Relation] = &[
    rel("cocktails", "supplier_id", Entity::Supplier, OnDelete::SetNull),
    rel("products", "supplier_id", Entity::Supplier, OnDelete::Restrict),
    rel("packages", "cocktail_id", Entity::Cocktail, OnDelete::Restrict),
    rel("packages", "product_id", Entity::Product, OnDelete::Restrict),
    rel("packages", "service_id", Entity::Service, OnDelete::Restrict),
    rel("employees", "supervisor_id", Entity::Employee, OnDelete::SetNull),
    rel("clients", "referred_by_id", Entity::Client, OnDelete::SetNull),
    rel("reservations", "client_id", Entity::Client, OnDelete::Cascade),
    rel("reservations", "package_id", Entity::Package, OnDelete::SetNull),
    rel("reservations", "employee_id", Entity::Employee, OnDelete::SetNull),
    rel("events", "client_id", Entity::Client, OnDelete::Restrict),
    rel("service_employees", "service_id", Entity::Service, OnDelete::Cascade),
    rel("service_employees", "employee_id", Entity::Employee, OnDelete::Cascade),
    rel("event_packages", "event_id", Entity::Event, OnDelete::Cascade),
    rel("event_packages", "package_id", Entity::Package, OnDelete::Cascade),
];

/// Relações que impedem apagar um registro de `target`.
pub fn blocking_relations(target: Entity) -> impl Iterator<Item = &'static Relation> {
    RELATIONS
        .iter()
        .filter(move |r| r.references == target && r.on_delete == OnDelete::Restrict)
}

/// Constraints UNIQUE da migração e os campos (camelCase, como na API) que cobrem.
pub const UNIQUE_CONSTRAINTS: &[(&str, &[&str])] = &[
    ("uq_suppliers_tax_id", &["taxId"]),
    ("uq_suppliers_email", &["email"]),
    ("uq_employees_cpf", &["cpf"]),
    ("uq_employees_email", &["email"]),
    ("uq_packages_name_cocktail", &["name", "cocktailId"]),
    ("uq_reservations_client_date", &["clientId", "date"]),
];

pub fn unique_constraint_fields(constraint: &str) -> Option<&'static [&'static str]> {
    UNIQUE_CONSTRAINTS
        .iter()
        .find(|(name, _)| *name == constraint)
        .map(|(_, fields)| *fields)
}
