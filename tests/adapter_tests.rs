mod common;

use betfair_rpc::dto::*;
use chrono::{TimeZone, Utc};
use common::*;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

const BETTING: &str = "/exchange/betting/json-rpc/v1";
const ACCOUNTS: &str = "/exchange/account/json-rpc/v1";

fn soccer() -> MarketFilter {
    MarketFilter {
        event_type_ids: Some(vec!["1".to_string()]),
        ..Default::default()
    }
}

fn assert_envelope(body: &Value, method: &str, params: Value) {
    assert_eq!(
        body,
        &json!([{
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 1
        }])
    );
}

#[tokio::test]
async fn test_list_event_types_adds_locale() {
    let (client, transport) = client();
    client.list_event_types(soccer()).await.unwrap();

    let request = transport.last();
    assert_eq!(request.host, "api.betfair.com");
    assert_eq!(request.path, BETTING);
    assert_eq!(request.header("content-type"), Some("application/json"));
    assert_eq!(request.header("accept"), Some("application/json"));
    assert!(request.header("content-length").is_none());
    assert_envelope(
        &transport.last_body(),
        "SportsAPING/v1.0/listEventTypes",
        json!({"filter": {"eventTypeIds": ["1"]}, "locale": "en"}),
    );
}

#[tokio::test]
async fn test_caller_locale_wins() {
    let (client, transport) = client();
    let request = MarketFilterRequest {
        filter: MarketFilter::default(),
        locale: Some("es".to_string()),
    };
    client.list_competitions(request).await.unwrap();

    assert_envelope(
        &transport.last_body(),
        "SportsAPING/v1.0/listCompetitions",
        json!({"filter": {}, "locale": "es"}),
    );
}

#[tokio::test]
async fn test_session_locale_is_the_default() {
    let (client, transport) = client_with(session().with_locale("it"));
    client.list_venues(MarketFilter::default()).await.unwrap();

    assert_eq!(
        transport.last_params(),
        json!({"filter": {}, "locale": "it"})
    );
}

#[tokio::test]
async fn test_filter_only_navigation_methods() {
    let (client, transport) = client();

    client.list_events(soccer()).await.unwrap();
    assert_eq!(transport.last_body()[0]["method"], "SportsAPING/v1.0/listEvents");

    client.list_market_types(soccer()).await.unwrap();
    assert_eq!(transport.last_body()[0]["method"], "SportsAPING/v1.0/listMarketTypes");

    client.list_countries(soccer()).await.unwrap();
    assert_eq!(transport.last_body()[0]["method"], "SportsAPING/v1.0/listCountries");

    client.list_venues(soccer()).await.unwrap();
    assert_eq!(transport.last_body()[0]["method"], "SportsAPING/v1.0/listVenues");

    for request in transport.requests() {
        let body: Value = serde_json::from_str(&request.body).unwrap();
        assert_eq!(
            body[0]["params"],
            json!({"filter": {"eventTypeIds": ["1"]}, "locale": "en"})
        );
    }
}

#[tokio::test]
async fn test_list_time_ranges_has_no_locale() {
    let (client, transport) = client();
    client
        .list_time_ranges(soccer(), TimeGranularity::Days)
        .await
        .unwrap();

    assert_envelope(
        &transport.last_body(),
        "SportsAPING/v1.0/listTimeRanges",
        json!({"filter": {"eventTypeIds": ["1"]}, "granularity": "DAYS"}),
    );
}

#[tokio::test]
async fn test_list_market_catalogue_minimal_request() {
    let (client, transport) = client();
    client
        .list_market_catalogue(ListMarketCatalogueRequest::new(soccer(), 100))
        .await
        .unwrap();

    assert_envelope(
        &transport.last_body(),
        "SportsAPING/v1.0/listMarketCatalogue",
        json!({"filter": {"eventTypeIds": ["1"]}, "maxResults": 100, "locale": "en"}),
    );
}

#[tokio::test]
async fn test_list_market_catalogue() {
    let (client, transport) = client();
    let filter = MarketFilter {
        event_ids: Some(vec!["32910581".to_string()]),
        market_start_time: Some(TimeRange::since(
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        )),
        ..Default::default()
    };
    let request = ListMarketCatalogueRequest {
        market_projection: Some(vec![MarketProjection::RunnerDescription]),
        sort: Some(MarketSort::FirstToStart),
        ..ListMarketCatalogueRequest::new(filter, 10)
    };
    client.list_market_catalogue(request).await.unwrap();

    assert_envelope(
        &transport.last_body(),
        "SportsAPING/v1.0/listMarketCatalogue",
        json!({
            "filter": {
                "eventIds": ["32910581"],
                "marketStartTime": {"from": "2024-03-01T12:00:00Z"}
            },
            "marketProjection": ["RUNNER_DESCRIPTION"],
            "sort": "FIRST_TO_START",
            "maxResults": 10,
            "locale": "en"
        }),
    );
}

#[tokio::test]
async fn test_list_market_book() {
    let (client, transport) = client();
    let request = ListMarketBookRequest {
        market_ids: vec!["1.234".to_string()],
        price_projection: Some(PriceProjection::with_price_data(vec![PriceData::ExBestOffers])),
        order_projection: Some(OrderProjection::Executable),
        ..Default::default()
    };
    client.list_market_book(request).await.unwrap();

    assert_envelope(
        &transport.last_body(),
        "SportsAPING/v1.0/listMarketBook",
        json!({
            "marketIds": ["1.234"],
            "priceProjection": {"priceData": ["EX_BEST_OFFERS"]},
            "orderProjection": "EXECUTABLE",
            "locale": "en"
        }),
    );
}

#[tokio::test]
async fn test_list_market_book_with_ladder_overrides() {
    let (client, transport) = client();
    let overrides = ExBestOffersOverrides {
        rollup_model: Some(RollupModel::ManagedLiability),
        rollup_liability_threshold: Some(dec!(10)),
        rollup_liability_factor: Some(2),
        ..ExBestOffersOverrides::depth(3)
    };
    let request = ListMarketBookRequest {
        market_ids: vec!["1.234".to_string()],
        price_projection: Some(PriceProjection {
            ex_best_offers_overrides: Some(overrides),
            virtualise: Some(true),
            ..PriceProjection::with_price_data(vec![PriceData::ExBestOffers])
        }),
        ..Default::default()
    };
    client.list_market_book(request).await.unwrap();

    assert_envelope(
        &transport.last_body(),
        "SportsAPING/v1.0/listMarketBook",
        json!({
            "marketIds": ["1.234"],
            "priceProjection": {
                "priceData": ["EX_BEST_OFFERS"],
                "exBestOffersOverrides": {
                    "bestPricesDepth": 3,
                    "rollupModel": "MANAGED_LIABILITY",
                    "rollupLiabilityThreshold": 10.0,
                    "rollupLiabilityFactor": 2
                },
                "virtualise": true
            },
            "locale": "en"
        }),
    );
}

#[tokio::test]
async fn test_list_runner_book() {
    let (client, transport) = client();
    let request = ListRunnerBookRequest {
        market_id: "1.234".to_string(),
        selection_id: 47972,
        ..Default::default()
    };
    client.list_runner_book(request).await.unwrap();

    assert_envelope(
        &transport.last_body(),
        "SportsAPING/v1.0/listRunnerBook",
        json!({"marketId": "1.234", "selectionId": 47972, "locale": "en"}),
    );
}

#[tokio::test]
async fn test_list_market_profit_and_loss() {
    let (client, transport) = client();
    let request = ListMarketProfitAndLossRequest {
        market_ids: vec!["1.234".to_string()],
        net_of_commission: Some(true),
        ..Default::default()
    };
    client.list_market_profit_and_loss(request).await.unwrap();

    assert_envelope(
        &transport.last_body(),
        "SportsAPING/v1.0/listMarketProfitAndLoss",
        json!({"marketIds": ["1.234"], "netOfCommission": true}),
    );
}

#[tokio::test]
async fn test_list_current_orders() {
    let (client, transport) = client();
    let request = ListCurrentOrdersRequest {
        market_ids: Some(vec!["1.234".to_string()]),
        order_projection: Some(OrderProjection::All),
        ..Default::default()
    };
    client.list_current_orders(request).await.unwrap();

    assert_envelope(
        &transport.last_body(),
        "SportsAPING/v1.0/listCurrentOrders",
        json!({"marketIds": ["1.234"], "orderProjection": "ALL"}),
    );
}

#[tokio::test]
async fn test_list_cleared_orders() {
    let (client, transport) = client();
    let mut request = ListClearedOrdersRequest::new(BetStatus::Settled);
    request.group_by = Some(GroupBy::Market);
    client.list_cleared_orders(request).await.unwrap();

    assert_envelope(
        &transport.last_body(),
        "SportsAPING/v1.0/listClearedOrders",
        json!({"betStatus": "SETTLED", "groupBy": "MARKET", "locale": "en"}),
    );
}

#[tokio::test]
async fn test_place_orders() {
    let (client, transport) = client();
    let request = PlaceOrdersRequest::new(
        "1.234",
        vec![
            PlaceInstruction::limit(47972, Side::Back, dec!(2.0), dec!(3.5), PersistenceType::Lapse)
                .with_customer_order_ref("ref-1"),
            PlaceInstruction::market_on_close(47973, Side::Lay, dec!(10.0)),
        ],
    )
    .with_customer_ref("batch-1");
    client.place_orders(request).await.unwrap();

    assert_envelope(
        &transport.last_body(),
        "SportsAPING/v1.0/placeOrders",
        json!({
            "marketId": "1.234",
            "instructions": [
                {
                    "orderType": "LIMIT",
                    "selectionId": 47972,
                    "handicap": 0.0,
                    "side": "BACK",
                    "limitOrder": {"size": 2.0, "price": 3.5, "persistenceType": "LAPSE"},
                    "customerOrderRef": "ref-1"
                },
                {
                    "orderType": "MARKET_ON_CLOSE",
                    "selectionId": 47973,
                    "handicap": 0.0,
                    "side": "LAY",
                    "marketOnCloseOrder": {"liability": 10.0}
                }
            ],
            "customerRef": "batch-1"
        }),
    );
}

#[tokio::test]
async fn test_cancel_orders() {
    let (client, transport) = client();
    let request = CancelOrdersRequest::new(
        "1.234",
        vec![
            CancelInstruction::new("111"),
            CancelInstruction::reduce("222", dec!(1.5)),
        ],
    );
    client.cancel_orders(request).await.unwrap();

    assert_envelope(
        &transport.last_body(),
        "SportsAPING/v1.0/cancelOrders",
        json!({
            "marketId": "1.234",
            "instructions": [
                {"betId": "111"},
                {"betId": "222", "sizeReduction": 1.5}
            ]
        }),
    );
}

#[tokio::test]
async fn test_cancel_everything_sends_empty_params() {
    let (client, transport) = client();
    client.cancel_orders(CancelOrdersRequest::all()).await.unwrap();

    assert_eq!(transport.last_params(), json!({}));
}

#[tokio::test]
async fn test_replace_orders() {
    let (client, transport) = client();
    let request = ReplaceOrdersRequest::new("1.234", vec![ReplaceInstruction::new("111", dec!(4.2))]);
    client.replace_orders(request).await.unwrap();

    assert_envelope(
        &transport.last_body(),
        "SportsAPING/v1.0/replaceOrders",
        json!({
            "marketId": "1.234",
            "instructions": [{"betId": "111", "newPrice": 4.2}]
        }),
    );
}

#[tokio::test]
async fn test_update_orders() {
    let (client, transport) = client();
    let request = UpdateOrdersRequest::new(
        "1.234",
        vec![UpdateInstruction::new("111", PersistenceType::Persist)],
    );
    client.update_orders(request).await.unwrap();

    assert_envelope(
        &transport.last_body(),
        "SportsAPING/v1.0/updateOrders",
        json!({
            "marketId": "1.234",
            "instructions": [{"betId": "111", "newPersistenceType": "PERSIST"}]
        }),
    );
}

#[tokio::test]
async fn test_get_account_funds() {
    let (client, transport) = client();
    client
        .get_account_funds(GetAccountFundsRequest::default())
        .await
        .unwrap();

    let request = transport.last();
    assert_eq!(request.host, "api.betfair.com");
    assert_eq!(request.path, ACCOUNTS);
    assert_envelope(
        &transport.last_body(),
        "AccountAPING/v1.0/getAccountFunds",
        json!({}),
    );
}

#[tokio::test]
async fn test_get_account_details() {
    let (client, transport) = client();
    client.get_account_details().await.unwrap();

    assert_envelope(
        &transport.last_body(),
        "AccountAPING/v1.0/getAccountDetails",
        json!({}),
    );
}

#[tokio::test]
async fn test_get_account_statement_adds_locale() {
    let (client, transport) = client();
    let request = GetAccountStatementRequest {
        record_count: Some(50),
        include_item: Some(IncludeItem::Exchange),
        ..Default::default()
    };
    client.get_account_statement(request).await.unwrap();

    assert_envelope(
        &transport.last_body(),
        "AccountAPING/v1.0/getAccountStatement",
        json!({"locale": "en", "recordCount": 50, "includeItem": "EXCHANGE"}),
    );
}

#[tokio::test]
async fn test_list_currency_rates() {
    let (client, transport) = client();
    let request = ListCurrencyRatesRequest {
        from_currency: Some("GBP".to_string()),
    };
    client.list_currency_rates(request).await.unwrap();

    assert_envelope(
        &transport.last_body(),
        "AccountAPING/v1.0/listCurrencyRates",
        json!({"fromCurrency": "GBP"}),
    );
}

#[tokio::test]
async fn test_developer_app_keys() {
    let (client, transport) = client();

    client.get_developer_app_keys().await.unwrap();
    assert_envelope(
        &transport.last_body(),
        "AccountAPING/v1.0/getDeveloperAppKeys",
        json!({}),
    );

    client.create_developer_app_keys("my-app").await.unwrap();
    assert_envelope(
        &transport.last_body(),
        "AccountAPING/v1.0/createDeveloperAppKeys",
        json!({"appName": "my-app"}),
    );
}

#[tokio::test]
async fn test_response_is_returned_unprocessed() {
    let (client, transport) = client();
    let body = r#"[{"jsonrpc":"2.0","error":{"code":-32099,"message":"ANGX-0003"},"id":1}]"#;
    transport.respond(BETTING, body);

    let response = client.list_events(soccer()).await.unwrap();

    let expected: Value = serde_json::from_str(body).unwrap();
    assert_eq!(response.as_value(), &expected);
    assert_eq!(response.error().unwrap().message, "ANGX-0003");
}

#[tokio::test]
async fn test_place_limit_order_decodes_report() {
    let (client, transport) = client();
    transport.respond(
        BETTING,
        r#"[{"jsonrpc":"2.0","result":{
            "status":"SUCCESS",
            "marketId":"1.234",
            "instructionReports":[{
                "status":"SUCCESS",
                "instruction":{"selectionId":47972,"handicap":0.0,"side":"BACK","orderType":"LIMIT",
                    "limitOrder":{"size":2.0,"price":3.5,"persistenceType":"LAPSE"}},
                "betId":"31242604945",
                "placedDate":"2024-03-01T12:00:00.000Z",
                "averagePriceMatched":0.0,
                "sizeMatched":0.0,
                "orderStatus":"EXECUTABLE"
            }]
        },"id":1}]"#,
    );

    let response = client
        .place_limit_order("1.234", 47972, Side::Back, dec!(3.5), dec!(2.0))
        .await
        .unwrap();

    assert_eq!(response.status, "SUCCESS");
    let reports = response.instruction_reports.unwrap();
    assert_eq!(reports[0].bet_id.as_deref(), Some("31242604945"));
    assert_eq!(reports[0].order_status, Some(OrderStatus::Executable));

    let params = transport.last_params();
    assert_eq!(params["instructions"][0]["limitOrder"]["price"], json!(3.5));
    assert_eq!(params["instructions"][0]["limitOrder"]["size"], json!(2.0));
}
