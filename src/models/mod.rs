pub mod api_response;
pub mod data_api;
pub mod network;
pub mod nft_contract;
pub mod portfolio;
pub mod scalars;
pub mod token;
