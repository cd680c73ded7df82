//! Integration tests for the authenticated trading client

mod common;

use common::*;
use futures::future::join_all;
use poloniex_rest::{
    exchange_error, Account, ExposeSecret, MoveOrderOptions, OrderOptions, Params, ALL_MARKETS,
};
use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{header as header_eq, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/tradingApi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": 1})))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_buy_is_signed_over_exact_body() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/tradingApi"))
        .and(header_eq("Key", "K"))
        .and(header_eq("Content-Type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "orderNumber": 31226040,
            "resultingTrades": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some(("K", "S")));
    let result = client
        .trading()
        .buy("BTC_XCP", dec!(0.5), dec!(10), OrderOptions::new())
        .await
        .unwrap();
    assert_eq!(result["orderNumber"], 31226040);

    let requests = received(&server).await;
    let request = &requests[0];
    let fields = form_fields(request);

    let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec![
            "amount",
            "command",
            "currencyPair",
            "fillOrKill",
            "immediateOrCancel",
            "nonce",
            "postOnly",
            "rate"
        ]
    );
    assert_eq!(fields["command"], "buy");
    assert_eq!(fields["currencyPair"], "BTC_XCP");
    assert_eq!(fields["rate"], "0.5");
    assert_eq!(fields["amount"], "10");
    assert_eq!(fields["fillOrKill"], "0");
    assert_eq!(fields["immediateOrCancel"], "0");
    assert_eq!(fields["postOnly"], "0");

    let nonce = &fields["nonce"];
    let payload = format!(
        "amount=10&command=buy&currencyPair=BTC_XCP&fillOrKill=0&immediateOrCancel=0&nonce={}&postOnly=0&rate=0.5",
        nonce
    );
    assert_eq!(std::str::from_utf8(&request.body).unwrap(), payload);
    assert_eq!(header(request, "Sign"), Some(expected_signature("S", &payload).as_str()));
}

#[tokio::test]
async fn test_rotated_credentials_are_used() {
    let server = setup_mock_server().await;
    mount_ok(&server).await;

    let client = client_for(&server, Some(("K", "S")));
    let trading = client.trading();
    trading.set_api_key("K2");
    trading.set_secret("S2");

    assert_eq!(trading.api_key().as_deref(), Some("K2"));
    assert_eq!(trading.secret().unwrap().expose_secret(), "S2");

    trading.return_balances().await.unwrap();

    let requests = received(&server).await;
    let request = &requests[0];
    let body = std::str::from_utf8(&request.body).unwrap();

    assert_eq!(header(request, "Key"), Some("K2"));
    assert_eq!(header(request, "Sign"), Some(expected_signature("S2", body).as_str()));
    assert_ne!(header(request, "Sign"), Some(expected_signature("S", body).as_str()));
}

#[tokio::test]
async fn test_credential_change_does_not_affect_issued_call() {
    let server = setup_mock_server().await;
    mount_ok(&server).await;

    let client = client_for(&server, Some(("K", "S")));
    let pending = client.trading().return_fee_info();
    client.trading().set_secret("S2");
    pending.await.unwrap();

    let requests = received(&server).await;
    let body = std::str::from_utf8(&requests[0].body).unwrap();
    assert_eq!(header(&requests[0], "Sign"), Some(expected_signature("S", body).as_str()));
}

#[tokio::test]
async fn test_missing_credentials_fail_without_request() {
    let server = setup_mock_server().await;
    mount_ok(&server).await;

    let client = client_for(&server, None);
    let err = client.trading().return_balances().await.unwrap_err();
    assert!(err.is_auth_required());

    client.trading().set_api_key("K");
    let err = client.trading().return_balances().await.unwrap_err();
    assert!(err.is_auth_required());

    assert!(received(&server).await.is_empty());

    client.trading().set_secret("S");
    client.trading().return_balances().await.unwrap();
    assert_eq!(received(&server).await.len(), 1);
}

#[tokio::test]
async fn test_nonces_follow_issue_order() {
    let server = setup_mock_server().await;
    mount_ok(&server).await;

    let client = client_for(&server, Some(("K", "S")));
    let pending: Vec<_> = (1..=20)
        .map(|order_number: u64| client.trading().cancel_order(order_number))
        .collect();

    // Await in reverse to show the nonce was fixed at issue time
    let results = join_all(pending.into_iter().rev()).await;
    assert!(results.iter().all(Result::is_ok));

    let mut by_order: Vec<(u64, u64)> = received(&server)
        .await
        .iter()
        .map(|r| {
            let fields = form_fields(r);
            (
                fields["orderNumber"].parse().unwrap(),
                fields["nonce"].parse().unwrap(),
            )
        })
        .collect();
    by_order.sort();

    assert_eq!(by_order.len(), 20);
    assert!(by_order.windows(2).all(|w| w[0].1 < w[1].1));
}

#[tokio::test]
async fn test_margin_sell_matches_margin_buy_parameters() {
    let server = setup_mock_server().await;
    mount_ok(&server).await;

    let client = client_for(&server, Some(("K", "S")));
    let trading = client.trading();
    trading
        .margin_buy("BTC_XMR", dec!(0.0035), dec!(20), Some(dec!(0.02)))
        .await
        .unwrap();
    trading
        .margin_sell("BTC_XMR", dec!(0.0035), dec!(20), Some(dec!(0.02)))
        .await
        .unwrap();

    let requests = received(&server).await;
    let mut buy = form_fields(&requests[0]);
    let mut sell = form_fields(&requests[1]);
    assert_eq!(buy.remove("command").as_deref(), Some("marginBuy"));
    assert_eq!(sell.remove("command").as_deref(), Some("marginSell"));
    buy.remove("nonce");
    sell.remove("nonce");
    assert_eq!(buy, sell);
    assert_eq!(buy["lendingRate"], "0.02");
}

#[tokio::test]
async fn test_parameter_layouts() {
    let server = setup_mock_server().await;
    mount_ok(&server).await;

    let client = client_for(&server, Some(("K", "S")));
    let trading = client.trading();

    trading.return_open_orders(ALL_MARKETS).await.unwrap();
    trading
        .move_order(1234, dec!(0.01), MoveOrderOptions::new().with_amount(dec!(2)).with_post_only(true))
        .await
        .unwrap();
    trading
        .transfer_balance("BTC", dec!(1.5), Account::Exchange, Account::Margin)
        .await
        .unwrap();
    trading
        .withdraw("XMR", dec!(3), "4Abc", Some("pid"))
        .await
        .unwrap();
    trading.return_complete_balances(true).await.unwrap();
    trading.return_complete_balances(false).await.unwrap();
    trading
        .create_loan_offer("BTC", dec!(0.5), 2, true, dec!(0.0015))
        .await
        .unwrap();
    trading.return_trade_history("all", None, None, Some(100)).await.unwrap();

    let fields: Vec<_> = received(&server).await.iter().map(form_fields).collect();

    assert_eq!(fields[0]["currencyPair"], "all");

    assert_eq!(fields[1]["command"], "moveOrder");
    assert_eq!(fields[1]["orderNumber"], "1234");
    assert_eq!(fields[1]["amount"], "2");
    assert_eq!(fields[1]["postOnly"], "1");
    assert!(!fields[1].contains_key("immediateOrCancel"));

    assert_eq!(fields[2]["fromAccount"], "exchange");
    assert_eq!(fields[2]["toAccount"], "margin");
    assert_eq!(fields[2]["amount"], "1.5");

    assert_eq!(fields[3]["paymentId"], "pid");
    assert_eq!(fields[3]["address"], "4Abc");

    assert_eq!(fields[4]["account"], "all");
    assert!(!fields[5].contains_key("account"));

    assert_eq!(fields[6]["autoRenew"], "1");
    assert_eq!(fields[6]["duration"], "2");
    assert_eq!(fields[6]["lendingRate"], "0.0015");

    assert_eq!(fields[7]["limit"], "100");
    assert!(!fields[7].contains_key("start"));
}

#[tokio::test]
async fn test_every_command_name() {
    let server = setup_mock_server().await;
    mount_ok(&server).await;

    let client = client_for(&server, Some(("K", "S")));
    let t = client.trading();

    let calls = vec![
        ("returnBalances", t.return_balances()),
        ("returnCompleteBalances", t.return_complete_balances(false)),
        ("returnDepositAddresses", t.return_deposit_addresses()),
        ("generateNewAddress", t.generate_new_address("BTC")),
        ("returnDepositsWithdrawals", t.return_deposits_withdrawals(1, 2)),
        ("returnOpenOrders", t.return_open_orders("BTC_ETH")),
        ("returnTradeHistory", t.return_trade_history("BTC_ETH", Some(1), Some(2), None)),
        ("returnOrderTrades", t.return_order_trades(7)),
        ("buy", t.buy("BTC_ETH", dec!(1), dec!(1), OrderOptions::new())),
        ("sell", t.sell("BTC_ETH", dec!(1), dec!(1), OrderOptions::new().immediate_or_cancel())),
        ("cancelOrder", t.cancel_order(7)),
        ("moveOrder", t.move_order(7, dec!(1), MoveOrderOptions::new())),
        ("withdraw", t.withdraw("BTC", dec!(1), "addr", None)),
        ("returnFeeInfo", t.return_fee_info()),
        ("returnAvailableAccountBalances", t.return_available_account_balances(Some(Account::Lending))),
        ("returnTradableBalances", t.return_tradable_balances()),
        ("transferBalance", t.transfer_balance("BTC", dec!(1), Account::Margin, Account::Exchange)),
        ("returnMarginAccountSummary", t.return_margin_account_summary()),
        ("marginBuy", t.margin_buy("BTC_ETH", dec!(1), dec!(1), None)),
        ("marginSell", t.margin_sell("BTC_ETH", dec!(1), dec!(1), None)),
        ("getMarginPosition", t.get_margin_position(ALL_MARKETS)),
        ("closeMarginPosition", t.close_margin_position("BTC_ETH")),
        ("createLoanOffer", t.create_loan_offer("BTC", dec!(1), 2, false, dec!(0.01))),
        ("cancelLoanOffer", t.cancel_loan_offer(7)),
        ("returnOpenLoanOffers", t.return_open_loan_offers()),
        ("returnActiveLoans", t.return_active_loans()),
        ("returnLendingHistory", t.return_lending_history(1, 2, Some(10))),
        ("toggleAutoRenew", t.toggle_auto_renew(7)),
        ("customCommand", t.command("customCommand", Params::new().with("x", 1_u64))),
    ];

    let (names, futures): (Vec<_>, Vec<_>) = calls.into_iter().unzip();
    for result in join_all(futures).await {
        result.unwrap();
    }

    let mut seen: Vec<String> = received(&server)
        .await
        .iter()
        .map(|r| form_fields(r)["command"].clone())
        .collect();
    let mut expected: Vec<String> = names.into_iter().map(String::from).collect();
    seen.sort();
    expected.sort();
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn test_exchange_error_and_decode_failure() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/tradingApi"))
        .respond_with(ResponseTemplate::new(403).set_body_string(EXCHANGE_ERROR_BODY))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/tradingApi"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = client_for(&server, Some(("K", "S")));

    let value = client.trading().return_balances().await.unwrap();
    assert_eq!(exchange_error(&value), Some("Invalid API key/secret pair."));

    let err = client.trading().return_balances().await.unwrap_err();
    assert!(err.is_decode());
}
