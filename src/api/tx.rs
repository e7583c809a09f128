use actix_web::{HttpResponse, post, web};
use log::{debug, warn};

use super::models::{AppState, NewTxResponse};
use crate::transaction::TransactionRequest;

/// Submit a new transaction into the pending pool.
#[post("/transactions/new/")]
pub async fn post_transaction(
    state: web::Data<AppState>,
    body: web::Json<TransactionRequest>,
) -> actix_web::Result<HttpResponse> {
    let index = state
        .node
        .submit_transaction(body.into_inner())
        .inspect_err(|e| warn!("POST /transactions/new/ - rejected: {e}"))?;

    debug!("POST /transactions/new/ - queued for block #{index}");
    Ok(HttpResponse::Created().json(NewTxResponse {
        message: format!("Transaction will be added to Block {index}"),
    }))
}
