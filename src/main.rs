use actix_web::{App, HttpServer, web};
use dotenvy::dotenv;
use log::{info, warn};

use powledger::api::{self, AppState};
use powledger::config::NodeConfig;
use powledger::consensus::HttpChainFetcher;
use powledger::node::Node;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let _ = dotenv();
    env_logger::init();

    let config = NodeConfig::from_env();
    let fetcher = HttpChainFetcher::new(config.peer_timeout).map_err(std::io::Error::other)?;

    let node = Node::new(config.node_id.clone());
    if let Err(e) = node.register_peers(&config.bootstrap_peers) {
        warn!("ignoring bootstrap peers: {e}");
    }
    let cancel = node.cancel_token();

    info!(
        "Starting ledger node {} at http://{}:{}",
        node.node_id(),
        config.host,
        config.port
    );

    let state = web::Data::new(AppState::new(node, fetcher));

    let result = HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .configure(api::init_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await;

    // Stop any proof search still running on the blocking pool.
    cancel.cancel();
    result
}
