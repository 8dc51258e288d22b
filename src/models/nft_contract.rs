use serde::Serialize;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct NftMedia {
    pub collection_banner_image_url: Option<String>,
    pub collection_image_url: Option<String>,
}

/// Marketplace listing data attached to a collection.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct OpenSeaMetadata {
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

/// One NFT collection the wallet holds items of. Never built without an address.
#[derive(Clone, Debug, Serialize)]
pub struct NftContract {
    pub id: Uuid,
    pub contract_address: String,
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub token_type: Option<String>,
    pub total_supply: Option<String>,
    pub total_balance: Option<i64>,
    pub num_distinct_tokens_owned: Option<i64>,
    pub contract_deployer: Option<String>,
    pub deployed_block_number: Option<f64>,
    pub is_spam: Option<bool>,
    pub spam_classifications: Option<Vec<String>>,
    pub media: Option<NftMedia>,
    pub opensea: Option<OpenSeaMetadata>,
}

impl NftContract {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.contract_address)
    }
}

#[derive(Serialize)]
pub struct NftContractRow<'a> {
    #[serde(flatten)]
    pub contract: &'a NftContract,
    pub display_name: &'a str,
}

impl<'a> From<&'a NftContract> for NftContractRow<'a> {
    fn from(contract: &'a NftContract) -> Self {
        Self {
            contract,
            display_name: contract.display_name(),
        }
    }
}
