use axum::Json;

use credzen_core::{amortize, AmortizationResult, LoanTerms};

use crate::error::ApiError;

pub async fn simulate(Json(terms): Json<LoanTerms>) -> Result<Json<AmortizationResult>, ApiError> {
    let result = amortize(&terms)?;
    Ok(Json(result))
}
