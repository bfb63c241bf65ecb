//! Host option row

use serde_json::Value;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct OptionModel {
    pub option_name: String,
    pub option_value: Value,
}
