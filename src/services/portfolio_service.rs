use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use log::{debug, info, warn};
use serde::Serialize;

use crate::{
    errors::CustomError,
    models::{
        network::SupportedNetwork,
        nft_contract::NftContract,
        portfolio::{serialize_contract_rows, serialize_token_rows, Portfolio},
        token::Token,
    },
};

use super::{data_api_client::AssetDataSource, validation_service::ValidationService};

#[derive(Clone)]
pub struct PortfolioService {
    source: Arc<dyn AssetDataSource>,
    validator: ValidationService,
}

impl PortfolioService {
    pub fn new(source: Arc<dyn AssetDataSource>, validator: ValidationService) -> Self {
        Self { source, validator }
    }

    /// Loads tokens and NFT contracts concurrently. Either both succeed or
    /// the first error is returned and the other fetch is dropped.
    pub async fn load(
        &self,
        address: &str,
        network: SupportedNetwork,
    ) -> Result<Portfolio, CustomError> {
        self.validator.validate_wallet_address(address)?;

        info!("Loading portfolio for {} on {}", address, network);
        let networks = [network];

        let (tokens, contracts) = futures::try_join!(
            self.source.fetch_tokens(address, &networks),
            self.source.fetch_nft_contracts(address, &networks),
        )
        .map_err(|e| {
            warn!("Portfolio load for {} on {} failed: {}", address, network, e);
            e
        })?;

        info!(
            "Loaded {} tokens and {} NFT contracts for {} on {}",
            tokens.items.len(),
            contracts.items.len(),
            address,
            network
        );

        Ok(Portfolio {
            address: address.to_string(),
            network,
            tokens: tokens.items,
            nft_contracts: contracts.items,
            dropped_tokens: tokens.dropped,
            dropped_contracts: contracts.dropped,
            token_page_key: tokens.page_key,
            contract_page_key: contracts.page_key,
            fetched_at: Utc::now(),
        })
    }
}

/// Last displayed portfolio state. Lists are only replaced by a fully
/// successful load.
#[derive(Clone, Debug, Default, Serialize)]
pub struct PortfolioSession {
    #[serde(serialize_with = "serialize_token_rows")]
    pub tokens: Vec<Token>,
    #[serde(serialize_with = "serialize_contract_rows")]
    pub nft_contracts: Vec<NftContract>,
    pub last_error: Option<String>,
    pub last_loaded_at: Option<DateTime<Utc>>,
}

impl PortfolioSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one load outcome into the session. Returns whether it succeeded.
    pub fn apply(&mut self, outcome: &Result<Portfolio, CustomError>) -> bool {
        match outcome {
            Ok(portfolio) => {
                self.tokens = portfolio.tokens.clone();
                self.nft_contracts = portfolio.nft_contracts.clone();
                self.last_loaded_at = Some(portfolio.fetched_at);
                self.last_error = None;
                true
            }
            Err(e) => {
                self.last_error = Some(e.to_string());
                false
            }
        }
    }

    pub async fn refresh(
        &mut self,
        service: &PortfolioService,
        address: &str,
        network: SupportedNetwork,
    ) -> bool {
        let outcome = service.load(address, network).await;
        self.apply(&outcome)
    }
}

/// One session per (network, address), shared across workers.
#[derive(Default)]
pub struct PortfolioSessions {
    sessions: DashMap<(SupportedNetwork, String), PortfolioSession>,
}

impl PortfolioSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejected addresses never get a session.
    pub fn record(
        &self,
        network: SupportedNetwork,
        address: &str,
        outcome: &Result<Portfolio, CustomError>,
    ) {
        if let Err(CustomError::InvalidAddressError(_)) = outcome {
            return;
        }
        let key = (network, address.to_lowercase());
        let mut session = self.sessions.entry(key).or_default();
        if !session.apply(outcome) {
            debug!("Keeping previous portfolio state for {} on {}", address, network);
        }
    }

    pub fn snapshot(&self, network: SupportedNetwork, address: &str) -> Option<PortfolioSession> {
        self.sessions
            .get(&(network, address.to_lowercase()))
            .map(|session| session.clone())
    }
}
