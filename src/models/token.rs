use serde::Serialize;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct PriceChange {
    pub last_24_hours: Option<f64>,
    pub last_7_days: Option<f64>,
    pub last_30_days: Option<f64>,
}

/// A fungible balance held by the wallet.
#[derive(Clone, Debug, Serialize)]
pub struct Token {
    pub id: Uuid,
    pub contract_address: Option<String>, // None for native token
    pub name: Option<String>,
    pub symbol: Option<String>,
    pub decimals: Option<i64>,
    pub logo: Option<String>,
    pub balance: Option<f64>,
    pub balance_raw_integer: Option<String>,
    pub formatted_balance: Option<String>,
    pub balance_usd: Option<f64>,
    pub price: Option<f64>,
    pub price_change: Option<PriceChange>,
    pub is_spam: Option<bool>,
}

impl Token {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.symbol.as_deref())
            .unwrap_or("Unknown Token")
    }

    pub fn is_native_token(&self) -> bool {
        self.contract_address.is_none()
    }
}

/// Token as rendered by the API, with its display helpers resolved.
#[derive(Serialize)]
pub struct TokenRow<'a> {
    #[serde(flatten)]
    pub token: &'a Token,
    pub display_name: &'a str,
    pub is_native_token: bool,
}

impl<'a> From<&'a Token> for TokenRow<'a> {
    fn from(token: &'a Token) -> Self {
        Self {
            token,
            display_name: token.display_name(),
            is_native_token: token.is_native_token(),
        }
    }
}
