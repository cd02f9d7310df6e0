//! Derived client views

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::FormulaRecord;

/// Derived per-client rollup of formula history.
///
/// Never stored; recomputed from the current formula collection on every
/// read. Formulas are ordered newest appointment first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientSummary {
    pub id: Uuid,
    pub name: String,
    pub formulas: Vec<FormulaRecord>,
    pub last_visit: DateTime<Utc>,
    pub total_spent: Decimal,
}
