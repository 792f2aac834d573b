// src/models/bookings.rs

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Utc, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::validators::validate_money;

/// Número de convidados assumido na estimativa de valor de um pacote.
pub const DEFAULT_HEADCOUNT: i64 = 10;

// Horário de Brasília (sem horário de verão desde 2019)
const BRT_OFFSET_SECS: i32 = -3 * 3600;

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "payment_method", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Credit,
    Debit,
    Pix,
    Cash,
}

// --- 1. Pacotes ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    pub id: Uuid,
    #[schema(example = "Festa Premium")]
    pub name: String,
    pub cocktail_id: Uuid,
    pub product_id: Uuid,
    pub service_id: Uuid,
    #[schema(example = 4)]
    pub duration_hours: i32,
    #[schema(example = 50.0)]
    pub price_per_person: Decimal,
}

impl Package {
    pub fn duration_minutes(&self) -> i64 {
        i64::from(self.duration_hours) * 60
    }

    pub fn estimated_total(&self) -> Decimal {
        self.price_per_person * Decimal::from(DEFAULT_HEADCOUNT)
    }
}

// --- 2. Reservas ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: Uuid,
    pub client_id: Uuid,
    pub package_id: Option<Uuid>,
    #[schema(value_type = String, format = Date, example = "2025-03-14")]
    pub date: NaiveDate,
    pub guest_count: i32,
    // Funcionário responsável
    pub employee_id: Option<Uuid>,
}

impl Reservation {
    /// Valor por pessoa do pacote vezes convidados; zero sem pacote.
    pub fn estimated_total(&self, price_per_person: Option<Decimal>) -> Decimal {
        match price_per_person {
            Some(price) => price * Decimal::from(self.guest_count),
            None => Decimal::ZERO,
        }
    }

    pub fn weekday(&self) -> &'static str {
        weekday_pt(self.date.weekday())
    }
}

pub fn weekday_pt(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "segunda-feira",
        Weekday::Tue => "terça-feira",
        Weekday::Wed => "quarta-feira",
        Weekday::Thu => "quinta-feira",
        Weekday::Fri => "sexta-feira",
        Weekday::Sat => "sábado",
        Weekday::Sun => "domingo",
    }
}

// --- 3. Eventos ---
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub client_id: Uuid,
    pub scheduled_at: DateTime<Utc>,
    pub paid: bool,
    pub payment_method: PaymentMethod,
    #[schema(example = "Salão de festas, Rua das Flores 120")]
    pub location: String,
    pub notes: String,
}

impl Event {
    pub fn payment_status(&self) -> &'static str {
        if self.paid { "Pago" } else { "Pendente" }
    }

    /// Data e hora no formato brasileiro, no horário de Brasília.
    pub fn formatted_date(&self) -> String {
        let Some(offset) = FixedOffset::east_opt(BRT_OFFSET_SECS) else {
            return self.scheduled_at.format("%d/%m/%Y %H:%M").to_string();
        };
        self.scheduled_at
            .with_timezone(&offset)
            .format("%d/%m/%Y %H:%M")
            .to_string()
    }
}

// --- PAYLOADS ---

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PackagePayload {
    #[validate(length(min = 1, max = 100, message = "O nome é obrigatório (até 100 caracteres)."))]
    #[schema(example = "Festa Premium")]
    pub name: String,

    pub cocktail_id: Uuid,
    pub product_id: Uuid,
    pub service_id: Uuid,

    #[validate(range(min = 1, max = 72, message = "A duração deve ser de 1 a 72 horas."))]
    #[schema(example = 4)]
    pub duration_hours: i32,

    #[validate(custom(function = "validate_money"))]
    #[serde(default)]
    pub price_per_person: Decimal,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationPayload {
    pub client_id: Uuid,
    pub package_id: Option<Uuid>,

    #[schema(value_type = String, format = Date, example = "2025-03-14")]
    pub date: NaiveDate,

    #[validate(range(min = 1, message = "A reserva precisa de pelo menos 1 convidado."))]
    #[schema(example = 10)]
    pub guest_count: i32,

    pub employee_id: Option<Uuid>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub client_id: Uuid,

    // Ausente: agora na criação; na atualização mantém a data gravada
    pub scheduled_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub paid: bool,

    pub payment_method: PaymentMethod,

    #[validate(length(min = 1, max = 200, message = "O local é obrigatório (até 200 caracteres)."))]
    pub location: String,

    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub package_ids: Vec<Uuid>,
}

// --- LINHAS DO BANCO ---

// Reserva + valor por pessoa do pacote (LEFT JOIN)
#[derive(Debug, Clone, FromRow)]
pub struct ReservationRow {
    #[sqlx(flatten)]
    pub reservation: Reservation,
    pub package_price: Option<Decimal>,
}

#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    #[sqlx(flatten)]
    pub event: Event,
    pub package_ids: Vec<Uuid>,
}

// --- VIEWS ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PackageView {
    #[serde(flatten)]
    pub package: Package,
    #[schema(example = 240)]
    pub duration_minutes: i64,
    #[schema(example = 500.0)]
    pub estimated_total: Decimal,
}

impl From<Package> for PackageView {
    fn from(package: Package) -> Self {
        Self {
            duration_minutes: package.duration_minutes(),
            estimated_total: package.estimated_total(),
            package,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReservationView {
    #[serde(flatten)]
    pub reservation: Reservation,
    pub estimated_total: Decimal,
    #[schema(example = "sexta-feira")]
    pub weekday: String,
}

impl From<ReservationRow> for ReservationView {
    fn from(row: ReservationRow) -> Self {
        Self {
            estimated_total: row.reservation.estimated_total(row.package_price),
            weekday: row.reservation.weekday().to_string(),
            reservation: row.reservation,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventView {
    #[serde(flatten)]
    pub event: Event,
    pub package_ids: Vec<Uuid>,
    #[schema(example = "Pendente")]
    pub payment_status: String,
    #[schema(example = "14/03/2025 20:30")]
    pub formatted_date: String,
}

impl From<EventRow> for EventView {
    fn from(row: EventRow) -> Self {
        Self {
            payment_status: row.event.payment_status().to_string(),
            formatted_date: row.event.formatted_date(),
            event: row.event,
            package_ids: row.package_ids,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal::dec;

    fn reservation(date: NaiveDate, guest_count: i32) -> Reservation {
        Reservation {
            id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            package_id: None,
            date,
            guest_count,
            employee_id: None,
        }
    }

    #[test]
    fn package_derived_values() {
        let p = Package {
            id: Uuid::new_v4(),
            name: "Festa Premium".into(),
            cocktail_id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            service_id: Uuid::new_v4(),
            duration_hours: 4,
            price_per_person: dec!(50.00),
        };
        assert_eq!(p.duration_minutes(), 240);
        assert_eq!(p.estimated_total(), dec!(500.00));
    }

    #[test]
    fn reservation_total_uses_package_price() {
        let r = reservation(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(), 10);
        assert_eq!(r.estimated_total(Some(dec!(50.00))), dec!(500.00));
        assert_eq!(r.estimated_total(None), Decimal::ZERO);
    }

    #[test]
    fn reservation_weekday_in_portuguese() {
        let friday = reservation(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(), 1);
        assert_eq!(friday.weekday(), "sexta-feira");
        let sunday = reservation(NaiveDate::from_ymd_opt(2025, 3, 16).unwrap(), 1);
        assert_eq!(sunday.weekday(), "domingo");
    }

    #[test]
    fn event_status_and_date() {
        let mut e = Event {
            id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            scheduled_at: Utc.with_ymd_and_hms(2025, 3, 14, 23, 30, 0).unwrap(),
            paid: false,
            payment_method: PaymentMethod::Pix,
            location: "Salão".into(),
            notes: String::new(),
        };
        assert_eq!(e.payment_status(), "Pendente");
        assert_eq!(e.formatted_date(), "14/03/2025 20:30");
        e.paid = true;
        assert_eq!(e.payment_status(), "Pago");
    }

    #[test]
    fn payment_method_wire_names() {
        assert_eq!(serde_json::to_string(&PaymentMethod::Cash).unwrap(), "\"CASH\"");
        assert!(serde_json::from_str::<PaymentMethod>("\"BOLETO\"").is_err());
    }

    #[test]
    fn reservation_view_without_package_is_zero() {
        let row = ReservationRow {
            reservation: reservation(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(), 12),
            package_price: None,
        };
        let json = serde_json::to_value(ReservationView::from(row)).unwrap();
        assert_eq!(json["estimatedTotal"], 0.0);
        assert_eq!(json["weekday"], "sábado");
        assert_eq!(json["date"], "2025-03-15");
        assert_eq!(json["guestCount"], 12);
    }

    #[test]
    fn package_payload_requires_at_least_one_hour() {
        let payload: PackagePayload = serde_json::from_value(serde_json::json!({
            "name": "Festa",
            "cocktailId": Uuid::new_v4(),
            "productId": Uuid::new_v4(),
            "serviceId": Uuid::new_v4(),
            "durationHours": 0,
            "pricePerPerson": 50.0
        }))
        .unwrap();
        let errors = payload.validate().unwrap_err();
        assert_eq!(errors.field_errors().len(), 1);
    }

    #[test]
    fn package_payload_caps_duration() {
        let payload: PackagePayload = serde_json::from_value(serde_json::json!({
            "name": "Festa",
            "cocktailId": Uuid::new_v4(),
            "productId": Uuid::new_v4(),
            "serviceId": Uuid::new_v4(),
            "durationHours": 40_000_000,
            "pricePerPerson": 50.0
        }))
        .unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn large_duration_does_not_overflow() {
        let p = Package {
            id: Uuid::new_v4(),
            name: "Maratona".into(),
            cocktail_id: Uuid::new_v4(),
            product_id: Uuid::new_v4(),
            service_id: Uuid::new_v4(),
            duration_hours: 40_000_000,
            price_per_person: Decimal::ZERO,
        };
        assert_eq!(PackageView::from(p).duration_minutes, 2_400_000_000);
    }

    #[test]
    fn reservation_payload_requires_a_guest() {
        let payload: ReservationPayload = serde_json::from_value(serde_json::json!({
            "clientId": Uuid::new_v4(),
            "date": "2025-03-14",
            "guestCount": 0
        }))
        .unwrap();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn event_payload_defaults() {
        let payload: EventPayload = serde_json::from_value(serde_json::json!({
            "clientId": Uuid::new_v4(),
            "paymentMethod": "PIX",
            "location": "Salão"
        }))
        .unwrap();
        assert!(payload.validate().is_ok());
        assert!(payload.scheduled_at.is_none());
        assert!(!payload.paid);
        assert!(payload.notes.is_empty());
        assert!(payload.package_ids.is_empty());
    }
}
