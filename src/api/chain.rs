use actix_web::{HttpResponse, Responder, get, post, web};
use log::info;

use super::models::{AppState, MineResponse};

/// Get the full blockchain.
#[get("/chain/")]
pub async fn get_chain(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.node.get_chain())
}

/// Mine a new block from the pending pool.
/// The proof search runs on the blocking pool so request workers stay free.
#[post("/mine/")]
pub async fn mine_block(state: web::Data<AppState>) -> actix_web::Result<HttpResponse> {
    let miner = state.clone();
    let block = web::block(move || miner.node.mine()).await??;

    info!("POST /mine/ - forged block #{}", block.index);
    Ok(HttpResponse::Ok().json(MineResponse::from(block)))
}
