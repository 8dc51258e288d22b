use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use super::{
    network::SupportedNetwork,
    nft_contract::{NftContract, NftContractRow},
    token::{Token, TokenRow},
};

/// Everything loaded for one address on one network.
#[derive(Clone, Debug, Serialize)]
pub struct Portfolio {
    pub address: String,
    pub network: SupportedNetwork,
    #[serde(serialize_with = "serialize_token_rows")]
    pub tokens: Vec<Token>,
    #[serde(serialize_with = "serialize_contract_rows")]
    pub nft_contracts: Vec<NftContract>,
    pub dropped_tokens: usize,
    pub dropped_contracts: usize,
    // Continuation keys are surfaced but never followed.
    pub token_page_key: Option<String>,
    pub contract_page_key: Option<String>,
    pub fetched_at: DateTime<Utc>,
}

/// Output of a mapping pass: kept entities plus how many items were filtered.
#[derive(Clone, Debug)]
pub struct Mapped<T> {
    pub items: Vec<T>,
    pub dropped: usize,
    pub page_key: Option<String>,
}

pub fn serialize_token_rows<S: Serializer>(
    tokens: &[Token],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(tokens.iter().map(TokenRow::from))
}

pub fn serialize_contract_rows<S: Serializer>(
    contracts: &[NftContract],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(contracts.iter().map(NftContractRow::from))
}
