use actix_web::{get, web, HttpResponse};

use crate::{
    errors::CustomError,
    models::{
        api_response::success_response,
        network::{NetworkInfo, SupportedNetwork},
    },
    services::portfolio_service::{PortfolioService, PortfolioSessions},
};

#[get("/networks")]
async fn list_networks() -> HttpResponse {
    let networks: Vec<NetworkInfo> = SupportedNetwork::all()
        .iter()
        .copied()
        .map(NetworkInfo::from)
        .collect();
    success_response(networks)
}

#[get("/portfolio/{network}/{address}")]
async fn get_portfolio(
    path: web::Path<(String, String)>,
    service: web::Data<PortfolioService>,
    sessions: web::Data<PortfolioSessions>,
) -> Result<HttpResponse, CustomError> {
    let (network, address) = path.into_inner();
    let network: SupportedNetwork = network.parse()?;

    let outcome = service.load(&address, network).await;
    sessions.record(network, &address, &outcome);
    Ok(success_response(outcome?))
}

/// Last state shown for the address; `null` if it was never loaded.
#[get("/portfolio/{network}/{address}/last")]
async fn get_last_portfolio(
    path: web::Path<(String, String)>,
    sessions: web::Data<PortfolioSessions>,
) -> Result<HttpResponse, CustomError> {
    let (network, address) = path.into_inner();
    let network: SupportedNetwork = network.parse()?;

    Ok(success_response(sessions.snapshot(network, &address)))
}
