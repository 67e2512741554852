//! Modelo de Fee
//!
//! `amount` es NUMERIC(10,2) en la tabla y se maneja como `Decimal`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::FromRow;

/// Fee - mapea exactamente a la tabla fees
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Fee {
    pub fee_id: i32,
    pub vehicle_id: i32,
    pub amount: Option<Decimal>,
    pub due_date: Option<NaiveDate>,
    pub paid: Option<bool>,
}

impl Fee {
    /// Línea del listado: "Amount: a, Due Date: d, Paid: p - Vehicle ID: n"
    pub fn display_line(&self) -> String {
        let amount = self.amount.map(|a| a.to_string()).unwrap_or_default();
        let due_date = self.due_date.map(|d| d.to_string()).unwrap_or_default();
        let paid = self.paid.map(|p| p.to_string()).unwrap_or_default();
        format!(
            "Amount: {}, Due Date: {}, Paid: {} - Vehicle ID: {}",
            amount, due_date, paid, self.vehicle_id
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewFee {
    pub vehicle_id: i32,
    pub amount: Decimal,
    pub due_date: NaiveDate,
    pub paid: bool,
}
