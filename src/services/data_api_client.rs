use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, Url};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    errors::CustomError,
    models::{
        data_api::{NftContractsRequest, NftContractsResponse, TokensRequest, TokensResponse},
        network::SupportedNetwork,
        nft_contract::NftContract,
        portfolio::Mapped,
        token::Token,
    },
};

use super::{key_casing::camelize_keys, response_mapper};

/// Source of token balances and NFT collections for an address.
#[async_trait]
pub trait AssetDataSource: Send + Sync {
    async fn fetch_tokens(
        &self,
        address: &str,
        networks: &[SupportedNetwork],
    ) -> Result<Mapped<Token>, CustomError>;

    async fn fetch_nft_contracts(
        &self,
        address: &str,
        networks: &[SupportedNetwork],
    ) -> Result<Mapped<NftContract>, CustomError>;
}

#[derive(Clone)]
pub struct AlchemyClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AlchemyClient {
    pub fn new(base_url: &str, api_key: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, CustomError> {
        let url = format!("{}{}", self.base_url, path);
        Url::parse(&url).map_err(|_| CustomError::InvalidUrlError(self.redact(&url)))
    }

    fn redact(&self, text: &str) -> String {
        text.replace(&self.api_key, "***")
    }

    /// Single POST attempt. Non-2xx, empty and undecodable bodies are errors.
    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, CustomError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.endpoint(path)?;
        let log_url = self.redact(url.as_str());
        debug!("POST {}", log_url);

        let response = match self.client.post(url).json(body).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Request to {} failed: {}", log_url, self.redact(&e.to_string()));
                return Err(CustomError::NetworkError(e.without_url()));
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!("{} responded with status {}", log_url, status);
            return Err(CustomError::HttpStatusError(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(|e| e.without_url())?;
        if bytes.is_empty() {
            return Err(CustomError::NoDataError);
        }

        let raw: serde_json::Value = serde_json::from_slice(&bytes)?;
        Ok(serde_json::from_value(camelize_keys(raw))?)
    }
}

#[async_trait]
impl AssetDataSource for AlchemyClient {
    async fn fetch_tokens(
        &self,
        address: &str,
        networks: &[SupportedNetwork],
    ) -> Result<Mapped<Token>, CustomError> {
        let path = format!("/data/v1/{}/assets/tokens/by-address", self.api_key);
        let request = TokensRequest::new(address, networks, None);
        let response: TokensResponse = self.post(&path, &request).await?;

        Ok(response_mapper::map_tokens(response))
    }

    async fn fetch_nft_contracts(
        &self,
        address: &str,
        networks: &[SupportedNetwork],
    ) -> Result<Mapped<NftContract>, CustomError> {
        let path = format!("/data/v1/{}/assets/nfts/contracts/by-address", self.api_key);
        let request = NftContractsRequest::new(address, networks, None);
        let response: NftContractsResponse = self.post(&path, &request).await?;

        Ok(response_mapper::map_nft_contracts(response))
    }
}
