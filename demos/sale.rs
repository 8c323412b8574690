//! Submits a sale to the sandbox endpoint and prints the outcome.
//!
//! Configure with environment variables, then run:
//!
//! ```sh
//! export CNP_USER=username
//! export CNP_PASSWORD=password
//! export CNP_MERCHANT_ID=100
//! export CNP_API_BASE=https://www.testvantivcnp.com/sandbox/communicator/online
//! cargo run --example sale
//! ```
//!
//! Set `RUST_LOG=worldpay_cnp=debug` to see the request and response XML.

use worldpay_cnp::{
    CnpClient, CnpConfig,
    types::{Address, Card, Sale},
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = CnpConfig::from_env()?;
    let client = CnpClient::new(config)?;

    let sale = Sale {
        id: "demo-1".into(),
        report_group: "Demo Division".into(),
        order_id: "order-20230414-001".into(),
        amount: 40000, // $400.00 in minor units
        order_source: "ecommerce".into(),
        bill_to_address: Address {
            name: "John Smith".into(),
            address_line1: "100 Main St".into(),
            city: "Boston".into(),
            state: "MA".into(),
            zip: "12345".into(),
            country: "US".into(),
            email: "jsmith@someaddress.com".into(),
            phone: "555-123-4567".into(),
            ..Default::default()
        },
        card: Card {
            card_type: "VI".into(),
            number: "4005550000081000".into(),
            exp_date: "1210".into(),
            card_validation_num: "555".into(),
        },
        ..Default::default()
    };

    let response = client.sale(sale).await?;

    if let Some(message) = response.error_message() {
        eprintln!("request rejected by the processor: {message}");
        std::process::exit(1);
    }

    match &response.sale_response {
        Some(result) => {
            println!("response code: {} ({})", result.response, result.message);
            println!("transaction id: {}", result.litle_txn_id);
            println!("auth code: {}", result.auth_code);
        }
        None => eprintln!("envelope accepted but no saleResponse was returned"),
    }

    Ok(())
}
