//! Request and response bodies of the asset data API.
//!
//! Requests serialize with snake_case keys. Responses are decoded after their
//! keys have been camelized (see `services::key_casing`).

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::network::SupportedNetwork;
use super::scalars::{PriceValue, SpamValue};

#[derive(Debug, Serialize)]
pub struct AddressNetworkPair {
    pub address: String,
    pub networks: Vec<String>,
}

impl AddressNetworkPair {
    fn new(address: &str, networks: &[SupportedNetwork]) -> Self {
        Self {
            address: address.to_string(),
            networks: networks.iter().map(|n| n.id().to_string()).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokensRequest {
    pub addresses: Vec<AddressNetworkPair>,
    pub with_metadata: bool,
    pub with_prices: bool,
    pub include_native_tokens: bool,
    pub include_erc20_tokens: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_key: Option<String>,
}

impl TokensRequest {
    pub fn new(address: &str, networks: &[SupportedNetwork], page_key: Option<String>) -> Self {
        Self {
            addresses: vec![AddressNetworkPair::new(address, networks)],
            with_metadata: true,
            with_prices: true,
            include_native_tokens: true,
            include_erc20_tokens: true,
            page_key,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NftContractsRequest {
    pub addresses: Vec<AddressNetworkPair>,
    pub with_metadata: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_key: Option<String>,
    pub page_size: u32,
}

impl NftContractsRequest {
    pub const PAGE_SIZE: u32 = 100;

    pub fn new(address: &str, networks: &[SupportedNetwork], page_key: Option<String>) -> Self {
        Self {
            addresses: vec![AddressNetworkPair::new(address, networks)],
            with_metadata: true,
            page_key,
            page_size: Self::PAGE_SIZE,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TokensResponse {
    pub data: TokensData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokensData {
    pub tokens: Vec<TokenItem>,
    pub page_key: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenItem {
    pub address: Option<String>,
    pub network: Option<String>,
    pub token_address: Option<String>,
    pub token_balance: Option<String>,
    pub token_metadata: Option<TokenMetadata>,
    pub token_prices: Option<Vec<TokenPrice>>,
    pub error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct TokenMetadata {
    pub symbol: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub decimals: Option<i64>,
    pub name: Option<String>,
    pub logo: Option<String>,
}

/// Non-integer or out-of-range values become `None` so one odd token can't
/// fail the whole response.
fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?.and_then(|value| value.as_i64()))
}

#[derive(Debug, Deserialize)]
pub struct TokenPrice {
    pub currency: String,
    pub value: PriceValue,
}

#[derive(Debug, Deserialize)]
pub struct NftContractsResponse {
    pub data: NftContractsData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftContractsData {
    pub contracts: Vec<ContractItem>,
    pub total_count: Option<i64>,
    pub page_key: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ContractItem {
    pub network: Option<String>,
    pub address: Option<String>,
    pub contract: Option<ContractDetails>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDetails {
    pub address: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub token_type: Option<String>,
    pub total_supply: Option<String>,
    pub total_balance: Option<String>,
    pub num_distinct_tokens_owned: Option<String>,
    pub contract_deployer: Option<String>,
    pub deployed_block_number: Option<f64>,
    pub opensea_metadata: Option<OpenSeaMetadataDto>,
    pub is_spam: Option<SpamValue>,
    pub spam_classifications: Option<Vec<String>>,
    pub media: Option<NftMediaDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NftMediaDto {
    pub collection_banner_image_url: Option<String>,
    pub collection_image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenSeaMetadataDto {
    pub collection_name: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub banner_image_url: Option<String>,
    pub floor_price: Option<f64>,
    pub twitter_username: Option<String>,
    pub discord_url: Option<String>,
    pub external_url: Option<String>,
    pub safelist_request_status: Option<String>,
    pub last_ingested_at: Option<String>,
}
