use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::CheckoutLine;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CheckoutSummary {
    pub user_id: i64,
    pub items: Vec<CheckoutLine>,
    #[serde(serialize_with = "crate::money::serialize")]
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CheckoutResponse {
    Empty {
        message: String,
        order_summary: Vec<CheckoutLine>,
    },
    Summary(CheckoutSummary),
}
