use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::models::fee::NewFee;
use crate::utils::errors::AppError;
use crate::utils::validation::validate_fee_amount;

pub const FEE_REQUIRED: &str = "Amount and Due Date are required.";
pub const FEE_ADDED: &str = "Fee added successfully!";

// Formulario "Add Fee"
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateFeeRequest {
    pub vehicle_id: Option<i32>,

    #[validate(custom = "validate_fee_amount")]
    pub amount: Option<Decimal>,

    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub paid: bool,
}

impl CreateFeeRequest {
    /// Un importe que redondeado a céntimos es cero cuenta como ausente
    pub fn into_new_fee(self) -> Result<NewFee, AppError> {
        let amount = self.amount.map(|a| a.round_dp(2));
        let (vehicle_id, amount, due_date) = match (self.vehicle_id, amount, self.due_date) {
            (Some(vehicle_id), Some(amount), Some(due_date)) if !amount.is_zero() => {
                (vehicle_id, amount, due_date)
            }
            _ => return Err(AppError::MissingFields(FEE_REQUIRED.to_string())),
        };
        self.validate()?;

        Ok(NewFee {
            vehicle_id,
            amount,
            due_date,
            paid: self.paid,
        })
    }
}
