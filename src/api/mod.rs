use actix_web::web;
mod handlers;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(handlers::list_networks)
            .service(handlers::get_portfolio)
            .service(handlers::get_last_portfolio),
    );
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use super::config;
    use crate::{
        errors::CustomError,
        models::{
            network::SupportedNetwork, nft_contract::NftContract, portfolio::Mapped, token::Token,
        },
        services::{
            data_api_client::AssetDataSource,
            portfolio_service::{PortfolioService, PortfolioSessions},
            response_mapper,
            validation_service::ValidationService,
        },
    };

    const ADDRESS: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";

    struct StubSource {
        token_status: Option<u16>,
    }

    fn sessions() -> actix_web::web::Data<PortfolioSessions> {
        actix_web::web::Data::new(PortfolioSessions::new())
    }

    #[async_trait]
    impl AssetDataSource for StubSource {
        async fn fetch_tokens(
            &self,
            _address: &str,
            _networks: &[SupportedNetwork],
        ) -> Result<Mapped<Token>, CustomError> {
            if let Some(status) = self.token_status {
                return Err(CustomError::HttpStatusError(status));
            }
            let response = serde_json::from_value(json!({"data": {"tokens": [
                {"tokenBalance": "0x6f05b59d3b20000", "tokenMetadata": {"symbol": "ETH"}}
            ]}}))?;
            Ok(response_mapper::map_tokens(response))
        }

        async fn fetch_nft_contracts(
            &self,
            _address: &str,
            _networks: &[SupportedNetwork],
        ) -> Result<Mapped<NftContract>, CustomError> {
            Ok(Mapped {
                items: Vec::new(),
                dropped: 0,
                page_key: None,
            })
        }
    }

    fn service(token_status: Option<u16>) -> actix_web::web::Data<PortfolioService> {
        actix_web::web::Data::new(PortfolioService::new(
            Arc::new(StubSource { token_status }),
            ValidationService::new(),
        ))
    }

    #[actix_web::test]
    async fn lists_supported_networks() {
        let app = test::init_service(App::new().configure(config)).await;
        let req = test::TestRequest::get().uri("/api/v1/networks").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "SUCCESS");
        assert_eq!(body["result"].as_array().unwrap().len(), 12);
        assert_eq!(body["result"][0]["id"], "eth-mainnet");
        assert_eq!(body["result"][0]["is_testnet"], false);
    }

    #[actix_web::test]
    async fn returns_portfolio_in_success_envelope() {
        let app = test::init_service(App::new().app_data(service(None)).app_data(sessions()).configure(config)).await;
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/portfolio/base-mainnet/{}", ADDRESS))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "SUCCESS");
        assert_eq!(body["result"]["network"], "base-mainnet");
        assert_eq!(body["result"]["tokens"][0]["balance"], 0.5);
        assert_eq!(body["result"]["tokens"][0]["formatted_balance"], "0.5");
        assert_eq!(body["result"]["tokens"][0]["decimals"], 18);
        assert_eq!(body["result"]["tokens"][0]["display_name"], "ETH");
        assert_eq!(body["result"]["tokens"][0]["is_native_token"], true);
    }

    #[actix_web::test]
    async fn invalid_address_is_rejected_with_recovery_hint() {
        let app = test::init_service(App::new().app_data(service(None)).app_data(sessions()).configure(config)).await;
        let req = test::TestRequest::get()
            .uri("/api/v1/portfolio/eth-mainnet/0xnope")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "FAILURE");
        assert_eq!(body["error"]["recovery"], "Please enter a valid Ethereum address (0x...)");
    }

    #[actix_web::test]
    async fn unknown_network_is_a_bad_request() {
        let app = test::init_service(App::new().app_data(service(None)).app_data(sessions()).configure(config)).await;
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/portfolio/dogechain/{}", ADDRESS))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn upstream_rate_limit_passes_through() {
        let app = test::init_service(
            App::new()
                .app_data(service(Some(429)))
                .app_data(sessions())
                .configure(config),
        )
        .await;
        let req = test::TestRequest::get()
            .uri(&format!("/api/v1/portfolio/eth-mainnet/{}", ADDRESS))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], 429);
        assert_eq!(body["error"]["recovery"], "Too many requests. Please try again later");
    }

    #[actix_web::test]
    async fn last_state_survives_a_failed_refresh() {
        let sessions = sessions();
        let uri = format!("/api/v1/portfolio/eth-mainnet/{}", ADDRESS);
        let last = format!("{}/last", uri);

        let app = test::init_service(
            App::new()
                .app_data(service(None))
                .app_data(sessions.clone())
                .configure(config),
        )
        .await;
        let body: Value = test::call_and_read_body_json(
            &app,
            test::TestRequest::get().uri(&last).to_request(),
        )
        .await;
        assert!(body["result"].is_null());

        let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let failing = test::init_service(
            App::new()
                .app_data(service(Some(503)))
                .app_data(sessions.clone())
                .configure(config),
        )
        .await;
        let resp =
            test::call_service(&failing, test::TestRequest::get().uri(&uri).to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

        let body: Value = test::call_and_read_body_json(
            &failing,
            test::TestRequest::get().uri(&last).to_request(),
        )
        .await;
        assert_eq!(body["status"], "SUCCESS");
        assert_eq!(body["result"]["tokens"][0]["display_name"], "ETH");
        assert_eq!(body["result"]["tokens"][0]["balance"], 0.5);
        assert_eq!(body["result"]["last_error"], "HTTP error: 503");
        assert!(body["result"]["last_loaded_at"].is_string());
    }
}
