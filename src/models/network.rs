use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::CustomError;

/// Chains and environments the data provider can be queried for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportedNetwork {
    #[serde(rename = "eth-mainnet")]
    EthereumMainnet,
    #[serde(rename = "eth-sepolia")]
    EthereumSepolia,
    #[serde(rename = "polygon-mainnet")]
    PolygonMainnet,
    #[serde(rename = "polygon-amoy")]
    PolygonAmoy,
    #[serde(rename = "opt-mainnet")]
    OptimismMainnet,
    #[serde(rename = "opt-sepolia")]
    OptimismSepolia,
    #[serde(rename = "arb-mainnet")]
    ArbitrumMainnet,
    #[serde(rename = "arb-sepolia")]
    ArbitrumSepolia,
    #[serde(rename = "base-mainnet")]
    BaseMainnet,
    #[serde(rename = "base-sepolia")]
    BaseSepolia,
    #[serde(rename = "solana-mainnet")]
    SolanaMainnet,
    #[serde(rename = "solana-devnet")]
    SolanaDevnet,
}

impl SupportedNetwork {
    pub fn all() -> &'static [SupportedNetwork] {
        use SupportedNetwork::*;
        &[
            EthereumMainnet,
            EthereumSepolia,
            PolygonMainnet,
            PolygonAmoy,
            OptimismMainnet,
            OptimismSepolia,
            ArbitrumMainnet,
            ArbitrumSepolia,
            BaseMainnet,
            BaseSepolia,
            SolanaMainnet,
            SolanaDevnet,
        ]
    }

    /// Identifier sent to the data provider.
    pub fn id(&self) -> &'static str {
        match self {
            SupportedNetwork::EthereumMainnet => "eth-mainnet",
            SupportedNetwork::EthereumSepolia => "eth-sepolia",
            SupportedNetwork::PolygonMainnet => "polygon-mainnet",
            SupportedNetwork::PolygonAmoy => "polygon-amoy",
            SupportedNetwork::OptimismMainnet => "opt-mainnet",
            SupportedNetwork::OptimismSepolia => "opt-sepolia",
            SupportedNetwork::ArbitrumMainnet => "arb-mainnet",
            SupportedNetwork::ArbitrumSepolia => "arb-sepolia",
            SupportedNetwork::BaseMainnet => "base-mainnet",
            SupportedNetwork::BaseSepolia => "base-sepolia",
            SupportedNetwork::SolanaMainnet => "solana-mainnet",
            SupportedNetwork::SolanaDevnet => "solana-devnet",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SupportedNetwork::EthereumMainnet => "Ethereum",
            SupportedNetwork::EthereumSepolia => "Ethereum Sepolia",
            SupportedNetwork::PolygonMainnet => "Polygon",
            SupportedNetwork::PolygonAmoy => "Polygon Amoy",
            SupportedNetwork::OptimismMainnet => "Optimism",
            SupportedNetwork::OptimismSepolia => "Optimism Sepolia",
            SupportedNetwork::ArbitrumMainnet => "Arbitrum",
            SupportedNetwork::ArbitrumSepolia => "Arbitrum Sepolia",
            SupportedNetwork::BaseMainnet => "Base",
            SupportedNetwork::BaseSepolia => "Base Sepolia",
            SupportedNetwork::SolanaMainnet => "Solana",
            SupportedNetwork::SolanaDevnet => "Solana Devnet",
        }
    }

    pub fn chain_icon(&self) -> &'static str {
        use SupportedNetwork::*;
        match self {
            EthereumMainnet | EthereumSepolia => "🔷",
            PolygonMainnet | PolygonAmoy => "🟣",
            OptimismMainnet | OptimismSepolia => "🔴",
            ArbitrumMainnet | ArbitrumSepolia => "🔵",
            BaseMainnet | BaseSepolia => "🔷",
            SolanaMainnet | SolanaDevnet => "☀️",
        }
    }

    pub fn is_testnet(&self) -> bool {
        use SupportedNetwork::*;
        matches!(
            self,
            EthereumSepolia | PolygonAmoy | OptimismSepolia | ArbitrumSepolia | BaseSepolia | SolanaDevnet
        )
    }
}

impl fmt::Display for SupportedNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for SupportedNetwork {
    type Err = CustomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SupportedNetwork::all()
            .iter()
            .copied()
            .find(|network| network.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CustomError::UnsupportedNetworkError(s.to_string()))
    }
}

/// Row returned by the networks listing.
#[derive(Clone, Debug, Serialize)]
pub struct NetworkInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub is_testnet: bool,
}

impl From<SupportedNetwork> for NetworkInfo {
    fn from(network: SupportedNetwork) -> Self {
        Self {
            id: network.id(),
            name: network.display_name(),
            icon: network.chain_icon(),
            is_testnet: network.is_testnet(),
        }
    }
}
