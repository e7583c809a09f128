use actix_web::{HttpResponse, Responder, get, post, web};
use log::info;

use super::models::{AppState, NodesResponse, RegisterNodesRequest, ResolveResponse};

/// Add peers to this node's peer set.
#[post("/nodes/register/")]
pub async fn register_nodes(
    state: web::Data<AppState>,
    body: web::Json<RegisterNodesRequest>,
) -> actix_web::Result<HttpResponse> {
    let Some(nodes) = body.into_inner().nodes else {
        return Ok(HttpResponse::BadRequest().body("Error: Please supply a valid list of nodes"));
    };

    let total_nodes = state.node.register_peers(&nodes)?;
    Ok(HttpResponse::Created().json(NodesResponse {
        message: "New nodes have been added".to_string(),
        total_nodes,
    }))
}

/// List known peers.
#[get("/nodes/")]
pub async fn list_nodes(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(NodesResponse {
        message: "Known nodes".to_string(),
        total_nodes: state.node.peers(),
    })
}

/// Run consensus against every known peer.
#[get("/nodes/resolve/")]
pub async fn resolve(state: web::Data<AppState>) -> impl Responder {
    let outcome = state.node.resolve(&state.fetcher).await;
    let message = if outcome.replaced() {
        "Our chain was replaced"
    } else {
        "Our chain is authoritative"
    };
    info!("GET /nodes/resolve/ - {message} (length={})", outcome.length());

    HttpResponse::Ok().json(ResolveResponse {
        message: message.to_string(),
        replaced: outcome.replaced(),
        chain: state.node.get_chain().chain,
    })
}
