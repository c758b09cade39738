/*
[INPUT]:  Service objects built through client factories
[OUTPUT]: Test results for validation and request shaping
[POS]:    Integration tests - service contract
[UPDATE]: When services or their required fields change
*/

mod common;

use common::{client_for, mock_access_token, setup_mock_server, test_credentials};
use moneywave_adapter::{MockTransport, MoneywaveClient, Service};
use reqwest::Method;
use rstest::rstest;
use rust_decimal::Decimal;
use tokio_test::assert_ok;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

fn mock_client(transport: &MockTransport) -> MoneywaveClient {
    MoneywaveClient::builder(test_credentials())
        .transport(transport.clone())
        .access_token(Some(mock_access_token()))
        .build()
        .expect("client init")
}

fn endpoint(client: &MoneywaveClient, name: &str) -> (Method, &'static str) {
    match name {
        "wallet_balance" => {
            let s = client.wallet_balance();
            (s.request_method(), s.request_path())
        }
        "disburse" => {
            let s = client.disburse();
            (s.request_method(), s.request_path())
        }
        "disburse_bulk" => {
            let s = client.disburse_bulk();
            (s.request_method(), s.request_path())
        }
        "disburse_status" => {
            let s = client.disburse_status();
            (s.request_method(), s.request_path())
        }
        "retry_failed_transfer" => {
            let s = client.retry_failed_transfer();
            (s.request_method(), s.request_path())
        }
        "account_number_validation" => {
            let s = client.account_number_validation();
            (s.request_method(), s.request_path())
        }
        "banks" => {
            let s = client.banks();
            (s.request_method(), s.request_path())
        }
        "total_charge_to_card" => {
            let s = client.total_charge_to_card();
            (s.request_method(), s.request_path())
        }
        other => panic!("unknown service {other}"),
    }
}

#[rstest]
#[case("wallet_balance", Method::GET, "v1/wallet")]
#[case("disburse", Method::POST, "v1/disburse")]
#[case("disburse_bulk", Method::POST, "v1/disburse/bulk")]
#[case("disburse_status", Method::POST, "v1/disburse/status")]
#[case("retry_failed_transfer", Method::POST, "v1/transfer/disburse/retry")]
#[case("account_number_validation", Method::POST, "v1/resolve/account")]
#[case("banks", Method::POST, "banks")]
#[case("total_charge_to_card", Method::POST, "v1/get-charge")]
fn test_method_and_path_are_constant(
    #[case] name: &str,
    #[case] expected_method: Method,
    #[case] expected_path: &str,
) {
    let client = mock_client(&MockTransport::new());
    assert_eq!(endpoint(&client, name), (expected_method, expected_path));
}

#[test]
fn test_method_and_path_ignore_field_values() {
    let client = mock_client(&MockTransport::new());
    let mut service = client.disburse();
    let before = (service.request_method(), service.request_path());

    service.lock = Some("pass".to_string());
    service.reference = Some("other".to_string());
    assert_eq!((service.request_method(), service.request_path()), before);
}

#[rstest]
#[case(&[], "field lock is required")]
#[case(&["lock"], "field amount is required")]
#[case(&["lock", "amount", "bankcode"], "field accountNumber is required")]
#[case(&["lock", "amount", "bankcode", "accountNumber", "senderName"], "field ref is required")]
#[case(&["amount", "bankcode", "accountNumber", "senderName", "ref"], "field lock is required")]
#[tokio::test]
async fn test_incomplete_disburse_never_dispatches(
    #[case] set: &[&str],
    #[case] expected: &str,
) {
    let transport = MockTransport::new();
    let client = mock_client(&transport);
    let mut service = client.disburse();
    for field in set {
        match *field {
            "lock" => service.lock = Some("pass".to_string()),
            "amount" => service.amount = Some(Decimal::ONE_HUNDRED),
            "bankcode" => service.bank_code = Some("044".to_string()),
            "accountNumber" => service.account_number = Some("0690000004".to_string()),
            "senderName" => service.sender_name = Some("Sender".to_string()),
            "ref" => service.reference = Some("txn".to_string()),
            other => panic!("unknown field {other}"),
        }
    }

    assert!(service.validate().is_err());
    let err = service.send().await.unwrap_err();
    assert!(err.is_validation_error());
    assert_eq!(err.to_string(), expected);
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn test_disburse_bulk_end_to_end() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v1/disburse/bulk"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "success",
            "data": {
                "transfers": [
                    {"ref": "1", "status": "failed", "responseMessage": "unknown account"},
                    {"ref": "2", "status": "completed", "responseCode": "00"}
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, Some(mock_access_token()));
    let mut bulk = client.disburse_bulk();
    bulk.lock = Some("wallet password".to_string());
    bulk.sender_name = Some("MoneywaveSDK".to_string());
    bulk.reference = Some("batch-7".to_string());
    bulk.add_recipient("044", "0690000004", Decimal::ONE, None)
        .add_recipient("044", "0690000005", Decimal::TWO, None);

    let response = assert_ok!(bulk.send().await);
    assert_eq!(response.failed().len(), 1);
    assert_eq!(response.failed()[0]["ref"], "1");
    assert_eq!(response.passed().len(), 1);
    assert_eq!(response.passed()[0]["ref"], "2");

    let requests = server.received_requests().await.unwrap_or_default();
    let sent: serde_json::Value = assert_ok!(serde_json::from_slice(&requests[0].body));
    assert_eq!(sent["recipients"][0]["ref"], "1");
    assert_eq!(sent["recipients"][1]["ref"], "2");
    assert_eq!(sent["ref"], "batch-7");
}
