use std::{net::SocketAddr, sync::Arc};

use axum::{http::StatusCode, response::Response, Router};
use folio_core_contact_contracts::ContactFeatureService;
use folio_core_portfolio_contracts::PortfolioFeatureService;
use tokio::net::TcpListener;
use tracing::info;

mod errors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug)]
pub struct RestServer<Contact, Portfolio> {
    contact: Arc<Contact>,
    portfolio: Arc<Portfolio>,
    config: RestServerConfig,
}

#[derive(Debug, Clone, Default)]
pub struct RestServerConfig {
    pub allowed_origins: Vec<String>,
}

impl<Contact, Portfolio> RestServer<Contact, Portfolio>
where
    Contact: ContactFeatureService,
    Portfolio: PortfolioFeatureService,
{
    pub fn new(contact: Contact, portfolio: Portfolio, config: RestServerConfig) -> Self {
        Self {
            contact: Arc::new(contact),
            portfolio: Arc::new(portfolio),
            config,
        }
    }

    pub async fn serve(self, address: SocketAddr) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind(address).await?;
        info!("Listening on http://{}", listener.local_addr()?);
        axum::serve(listener, router).await.map_err(Into::into)
    }

    pub fn router(self) -> Router<()> {
        let router = Router::new()
            .merge(routes::contact::router(self.contact))
            .merge(routes::portfolio::router(self.portfolio))
            .fallback(not_found);
        let router = middlewares::panic_handler::add(router);
        let router = middlewares::cors::add(router, &self.config.allowed_origins);
        middlewares::trace::add(router)
    }
}

async fn not_found() -> Response {
    errors::error(StatusCode::NOT_FOUND, "Not found")
}
