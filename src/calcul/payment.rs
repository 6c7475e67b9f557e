use serde::Deserialize;
use serde::Serialize;

use super::Calculator;
use super::Operation;
use crate::domain::ReportError;
use crate::io::Sink;

/// Totals a payment and reports it on `sink` as `The total is: <total>`.
pub fn send_payment_request_to_api<C, K>(
    calculator: &C,
    sink: &mut K,
    total_amount: f64,
    total_shipping: f64,
) -> Result<f64, ReportError>
where
    C: Calculator + ?Sized,
    K: Sink + ?Sized,
{
    let total = calculator.calculate_number(Operation::SUM, total_amount, total_shipping)?;
    sink.write_line(&format!("The total is: {}", total))?;
    Ok(total)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentToken {
    pub data: String,
}

/// Resolves to a token only when the API call succeeds.
pub async fn get_payment_token_from_api(success: bool) -> Option<PaymentToken> {
    if success {
        Some(PaymentToken {
            data: "Successful response from the API".to_string(),
        })
    } else {
        None
    }
}
