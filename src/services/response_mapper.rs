use log::{debug, info};
use uuid::Uuid;

use crate::models::{
    data_api::{ContractDetails, ContractItem, NftContractsResponse, TokenItem, TokensResponse},
    nft_contract::{NftContract, NftMedia, OpenSeaMetadata},
    portfolio::Mapped,
    token::Token,
};

use super::{balance_normalizer, hex_amount::hex_to_decimal};

/// Decimals assumed for a chain's native asset when metadata omits them.
pub const NATIVE_DECIMALS: i64 = 18;

/// Items carrying a per-item error are skipped, not surfaced.
pub fn is_mappable_token(item: &TokenItem) -> bool {
    item.error.is_none()
}

pub fn map_tokens(response: TokensResponse) -> Mapped<Token> {
    let total = response.data.tokens.len();
    let items: Vec<Token> = response
        .data
        .tokens
        .into_iter()
        .filter(|item| {
            let keep = is_mappable_token(item);
            if !keep {
                debug!(
                    "Dropping token {:?} held by {:?} on {:?}: {}",
                    item.token_address,
                    item.address,
                    item.network,
                    item.error.as_deref().unwrap_or_default()
                );
            }
            keep
        })
        .map(token_from_item)
        .collect();

    let dropped = total - items.len();
    if dropped > 0 {
        info!("Dropped {} of {} token items", dropped, total);
    }

    Mapped {
        items,
        dropped,
        page_key: response.data.page_key,
    }
}

fn token_from_item(item: TokenItem) -> Token {
    let raw_balance = hex_to_decimal(item.token_balance.as_deref());
    let metadata = item.token_metadata.unwrap_or_default();

    let decimals = metadata.decimals.or(if item.token_address.is_none() {
        Some(NATIVE_DECIMALS)
    } else {
        None
    });

    let balance = balance_normalizer::normalize(raw_balance.as_deref(), decimals);
    let formatted_balance = raw_balance
        .as_deref()
        .and_then(|raw| balance_normalizer::format_units(raw, decimals));
    let price = balance_normalizer::usd_price(item.token_prices.as_deref().unwrap_or_default());

    Token {
        id: Uuid::new_v4(),
        contract_address: item.token_address,
        name: metadata.name,
        symbol: metadata.symbol,
        decimals,
        logo: metadata.logo,
        balance,
        balance_raw_integer: raw_balance,
        formatted_balance,
        balance_usd: balance_normalizer::usd_value(balance, price),
        price,
        price_change: None,
        is_spam: None,
    }
}

pub fn map_nft_contracts(response: NftContractsResponse) -> Mapped<NftContract> {
    let total = response.data.contracts.len();
    if let Some(reported) = response.data.total_count {
        debug!("Provider reports {} NFT contracts, page holds {}", reported, total);
    }
    let items: Vec<NftContract> = response
        .data
        .contracts
        .into_iter()
        .filter_map(|item| {
            let (owner, network) = (item.address.clone(), item.network.clone());
            let contract = contract_from_item(item);
            if contract.is_none() {
                debug!(
                    "Dropping NFT contract without address held by {:?} on {:?}",
                    owner, network
                );
            }
            contract
        })
        .collect();

    let dropped = total - items.len();
    if dropped > 0 {
        info!("Dropped {} of {} NFT contract items", dropped, total);
    }

    Mapped {
        items,
        dropped,
        page_key: response.data.page_key,
    }
}

/// `None` when the details object or its address is missing.
fn contract_from_item(item: ContractItem) -> Option<NftContract> {
    let ContractDetails {
        address,
        name,
        symbol,
        token_type,
        total_supply,
        total_balance,
        num_distinct_tokens_owned,
        contract_deployer,
        deployed_block_number,
        opensea_metadata,
        is_spam,
        spam_classifications,
        media,
    } = item.contract?;

    Some(NftContract {
        id: Uuid::new_v4(),
        contract_address: address?,
        name,
        symbol,
        token_type,
        total_supply,
        total_balance: int_value(total_balance.as_deref()),
        num_distinct_tokens_owned: int_value(num_distinct_tokens_owned.as_deref()),
        contract_deployer,
        deployed_block_number,
        is_spam: is_spam.and_then(|spam| spam.as_bool()),
        spam_classifications,
        media: media.map(|m| NftMedia {
            collection_banner_image_url: m.collection_banner_image_url,
            collection_image_url: m.collection_image_url,
        }),
        opensea: opensea_metadata.map(|o| OpenSeaMetadata {
            collection_name: o.collection_name,
            description: o.description,
            image_url: o.image_url,
            banner_image_url: o.banner_image_url,
            floor_price: o.floor_price,
            twitter_username: o.twitter_username,
            discord_url: o.discord_url,
            external_url: o.external_url,
            safelist_request_status: o.safelist_request_status,
            last_ingested_at: o.last_ingested_at,
        }),
    })
}

// Unparsable counts become absent.
fn int_value(value: Option<&str>) -> Option<i64> {
    value?.parse().ok()
}
