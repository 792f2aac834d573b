// src/models/catalog.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::validators::{normalize_tax_id, validate_money, validate_positive_money, validate_tax_id};

// --- ENUMS ---

// Mapeia o CREATE TYPE container_type do banco
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "container_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContainerType {
    LongDrink,
    OnTheRocks,
    Glass, // Taça
    Ilhabela,
}

// --- 1. Fornecedores ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: Uuid,
    #[schema(example = "Distribuidora Sol")]
    pub name: String,
    #[schema(example = "12.345.678/0001-90")]
    pub tax_id: String, // CNPJ
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
}

impl Supplier {
    /// Código curto do fornecedor: 3 primeiras letras do nome + 4 últimos dígitos do CNPJ.
    pub fn identifier(&self) -> String {
        let prefix: String = self.name.trim().chars().take(3).collect::<String>().to_uppercase();
        let digits: Vec<char> = self.tax_id.chars().filter(|c| c.is_ascii_digit()).collect();
        let suffix: String = digits[digits.len().saturating_sub(4)..].iter().collect();
        format!("{prefix}{suffix}")
    }
}

// --- 2. Produtos ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    #[schema(example = 12.5)]
    pub price: Decimal,
    pub supplier_id: Uuid,
    pub stock: i32,
    pub minimum_stock: i32,
}

impl Product {
    pub fn formatted_price(&self) -> String {
        format_brl(self.price)
    }

    pub fn needs_restock(&self) -> bool {
        self.stock < self.minimum_stock
    }
}

// --- 3. Coquetéis ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cocktail {
    pub id: Uuid,
    #[schema(example = "Caipirinha")]
    pub name: String,
    pub ingredients: Option<String>,
    pub container: ContainerType,
    pub cost_price: Decimal,
    pub sale_price: Decimal,
    pub supplier_id: Option<Uuid>,
}

impl Cocktail {
    pub fn unit_profit(&self) -> Decimal {
        self.sale_price - self.cost_price
    }

    /// Lucro sobre o custo. Zero quando o custo não é positivo.
    pub fn profit_margin(&self) -> Decimal {
        if self.cost_price <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        (self.unit_profit() / self.cost_price).round_dp(4)
    }
}

/// Formata um valor em reais: 1234.5 -> "R$ 1.234,50"
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp(2).abs();
    let text = format!("{rounded:.2}");
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if value.is_sign_negative() && !value.is_zero() { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac_part}")
}

// --- PAYLOADS (criação e atualização completa) ---

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierPayload {
    #[validate(length(min = 1, max = 100, message = "O nome é obrigatório (até 100 caracteres)."))]
    #[schema(example = "Distribuidora Sol")]
    pub name: String,

    #[validate(custom(function = "validate_tax_id"))]
    #[schema(example = "12.345.678/0001-90")]
    pub tax_id: String,

    #[validate(email(message = "E-mail inválido."))]
    pub email: String,

    #[validate(length(min = 1, max = 20, message = "O telefone é obrigatório."))]
    pub phone: String,

    #[validate(length(max = 200, message = "O endereço deve ter até 200 caracteres."))]
    pub address: Option<String>,
}

impl SupplierPayload {
    /// Forma gravada no banco, para a UNIQUE de tax_id valer com ou sem pontuação.
    pub fn normalized(mut self) -> Self {
        self.tax_id = normalize_tax_id(&self.tax_id);
        self
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    #[validate(length(min = 1, max = 100, message = "O nome é obrigatório (até 100 caracteres)."))]
    pub name: String,

    #[validate(custom(function = "validate_positive_money"))]
    #[schema(example = 12.5)]
    pub price: Decimal,

    pub supplier_id: Uuid,

    #[validate(range(min = 0, message = "O estoque não pode ser negativo."))]
    #[serde(default)]
    pub stock: i32,

    #[validate(range(min = 0, message = "O estoque mínimo não pode ser negativo."))]
    #[serde(default)]
    pub minimum_stock: i32,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CocktailPayload {
    #[validate(length(min = 1, max = 100, message = "O nome é obrigatório (até 100 caracteres)."))]
    pub name: String,

    #[validate(length(max = 200, message = "Os ingredientes devem ter até 200 caracteres."))]
    pub ingredients: Option<String>,

    pub container: ContainerType,

    #[validate(custom(function = "validate_money"))]
    #[serde(default)]
    pub cost_price: Decimal,

    #[validate(custom(function = "validate_money"))]
    #[serde(default)]
    pub sale_price: Decimal,

    pub supplier_id: Option<Uuid>,
}

// --- VIEWS (registro + campos derivados) ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierView {
    #[serde(flatten)]
    pub supplier: Supplier,
    #[schema(example = "DIS0190")]
    pub identifier: String,
}

impl From<Supplier> for SupplierView {
    fn from(supplier: Supplier) -> Self {
        Self { identifier: supplier.identifier(), supplier }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    #[serde(flatten)]
    pub product: Product,
    #[schema(example = "R$ 12,50")]
    pub formatted_price: String,
    pub needs_restock: bool,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            formatted_price: product.formatted_price(),
            needs_restock: product.needs_restock(),
            product,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CocktailView {
    #[serde(flatten)]
    pub cocktail: Cocktail,
    pub unit_profit: Decimal,
    #[schema(example = 1.5)]
    pub profit_margin: Decimal,
}

impl From<Cocktail> for CocktailView {
    fn from(cocktail: Cocktail) -> Self {
        Self {
            unit_profit: cocktail.unit_profit(),
            profit_margin: cocktail.profit_margin(),
            cocktail,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn cocktail(cost: Decimal, sale: Decimal) -> Cocktail {
        Cocktail {
            id: Uuid::new_v4(),
            name: "Caipirinha".into(),
            ingredients: Some("cachaça, limão, açúcar".into()),
            container: ContainerType::OnTheRocks,
            cost_price: cost,
            sale_price: sale,
            supplier_id: None,
        }
    }

    fn product(stock: i32, minimum_stock: i32) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: "Limão Tahiti".into(),
            price: dec!(12.50),
            supplier_id: Uuid::new_v4(),
            stock,
            minimum_stock,
        }
    }

    #[test]
    fn margin_is_profit_over_cost() {
        let c = cocktail(dec!(8.00), dec!(20.00));
        assert_eq!(c.unit_profit(), dec!(12.00));
        assert_eq!(c.profit_margin(), dec!(1.5));
    }

    #[test]
    fn margin_is_zero_without_cost() {
        assert_eq!(cocktail(dec!(0.00), dec!(20.00)).profit_margin(), Decimal::ZERO);
        assert_eq!(cocktail(dec!(-1.00), dec!(20.00)).profit_margin(), Decimal::ZERO);
    }

    #[test]
    fn margin_is_negative_when_selling_below_cost() {
        let c = cocktail(dec!(10.00), dec!(7.50));
        assert_eq!(c.unit_profit(), dec!(-2.50));
        assert_eq!(c.profit_margin(), dec!(-0.25));
    }

    #[test]
    fn restock_only_below_minimum() {
        assert!(product(3, 5).needs_restock());
        assert!(!product(5, 5).needs_restock());
        assert!(!product(9, 5).needs_restock());
    }

    #[test]
    fn prices_are_formatted_in_reais() {
        assert_eq!(product(0, 0).formatted_price(), "R$ 12,50");
        assert_eq!(format_brl(dec!(1234.5)), "R$ 1.234,50");
        assert_eq!(format_brl(dec!(1000000)), "R$ 1.000.000,00");
        assert_eq!(format_brl(dec!(0.999)), "R$ 1,00");
    }

    #[test]
    fn supplier_identifier_uses_name_and_tax_id() {
        let s = Supplier {
            id: Uuid::new_v4(),
            name: "Distribuidora Sol".into(),
            tax_id: "12.345.678/0001-90".into(),
            email: "contato@sol.com".into(),
            phone: "11999990000".into(),
            address: None,
        };
        assert_eq!(s.identifier(), "DIS0190");
    }

    #[test]
    fn product_payload_rejects_free_products_and_negative_stock() {
        let payload: ProductPayload = serde_json::from_value(serde_json::json!({
            "name": "Gelo",
            "price": 0.0,
            "supplierId": Uuid::new_v4(),
            "stock": -1
        }))
        .unwrap();
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("stock"));
        assert!(!fields.contains_key("minimum_stock"));
    }

    #[test]
    fn cocktail_payload_defaults_prices_to_zero() {
        let payload: CocktailPayload = serde_json::from_value(serde_json::json!({
            "name": "Negroni",
            "container": "ON_THE_ROCKS"
        }))
        .unwrap();
        assert!(payload.validate().is_ok());
        assert_eq!(payload.cost_price, Decimal::ZERO);
    }

    #[test]
    fn supplier_payload_checks_email_and_tax_id() {
        let payload: SupplierPayload = serde_json::from_value(serde_json::json!({
            "name": "Distribuidora Sol",
            "taxId": "123",
            "email": "não-é-email",
            "phone": "1133334444"
        }))
        .unwrap();
        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn views_flatten_record_and_derived_fields() {
        let view = CocktailView::from(cocktail(dec!(8.00), dec!(20.00)));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["name"], "Caipirinha");
        assert_eq!(json["costPrice"], 8.0);
        assert_eq!(json["unitProfit"], 12.0);
        assert_eq!(json["profitMargin"], 1.5);

        let json = serde_json::to_value(ProductView::from(product(3, 5))).unwrap();
        assert_eq!(json["needsRestock"], true);
        assert_eq!(json["formattedPrice"], "R$ 12,50");
    }

    #[test]
    fn container_uses_screaming_case_on_the_wire() {
        let json = serde_json::to_string(&ContainerType::OnTheRocks).unwrap();
        assert_eq!(json, "\"ON_THE_ROCKS\"");
        let parsed: ContainerType = serde_json::from_str("\"ILHABELA\"").unwrap();
        assert_eq!(parsed, ContainerType::Ilhabela);
        assert!(serde_json::from_str::<ContainerType>("\"CANECA\"").is_err());
    }
}
