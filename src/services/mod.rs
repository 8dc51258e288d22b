pub mod balance_normalizer;
pub mod data_api_client;
pub mod decimal_string;
pub mod hex_amount;
pub mod key_casing;
pub mod portfolio_service;
pub mod response_mapper;
pub mod validation_service;
