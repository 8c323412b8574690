//! Typed client for the Worldpay CNP (Litle) Online XML transaction API.
//!
//! This crate maps strongly-typed transaction requests into the processor's
//! v11.4 XML schema, POSTs them to a configured endpoint, and decodes the
//! XML response back into typed result structures.
//!
//! Supported transaction types: authorization, capture, credit, sale, void,
//! refund reversal, and the echeck (ACH) variants (sale, credit, void).
//! Each call is a single stateless request/response round trip; there is no
//! retry policy, batching, or session state.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use worldpay_cnp::{
//!     CnpClient, CnpConfig,
//!     types::{Address, Card, Sale},
//! };
//!
//! # async fn example() -> worldpay_cnp::Result<()> {
//! let config = CnpConfig::new(
//!     "username",
//!     "password",
//!     "100",
//!     "https://www.testvantivcnp.com/sandbox/communicator/online",
//! );
//! let client = CnpClient::new(config)?;
//!
//! let sale = Sale {
//!     id: "1".into(),
//!     report_group: "ABC Division".into(),
//!     order_id: "5234234".into(),
//!     amount: 40000, // minor units
//!     order_source: "ecommerce".into(),
//!     bill_to_address: Address { name: "John Smith".into(), ..Default::default() },
//!     card: Card {
//!         card_type: "VI".into(),
//!         number: "4005550000081000".into(),
//!         exp_date: "1210".into(),
//!         card_validation_num: "555".into(),
//!     },
//!     ..Default::default()
//! };
//!
//! let response = client.sale(sale).await?;
//!
//! // Envelope-level errors (schema rejection, bad credentials):
//! if let Some(message) = response.error_message() {
//!     eprintln!("request rejected: {message}");
//!     return Ok(());
//! }
//!
//! // Transaction-level outcome:
//! if let Some(result) = &response.sale_response {
//!     println!("code {} ({}), txn id {}", result.response, result.message, result.litle_txn_id);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Error contract
//!
//! Three layers report problems, and they do not overlap:
//!
//! 1. [`CnpError`] — the round trip failed (config, HTTP, XML codec).
//! 2. [`LitleOnlineResponse::has_error`] — the processor rejected the
//!    request document itself (envelope `response != "0"`).
//! 3. Per-transaction `response`/`message` fields — the business outcome
//!    (approved, declined, and so on). Their meanings are processor facts;
//!    this crate does not interpret them.
//!
//! # Module organization
//!
//! - [`client`]: the [`CnpClient`] and its per-transaction methods
//! - [`config`]: credentials/endpoint configuration and transport tuning
//! - [`types`]: the typed XML schema model (requests and responses)
//! - [`error`]: error types
//!
//! Request and response XML is logged at `debug` level via `tracing`;
//! install a subscriber to capture wire traffic.
//!
//! [`LitleOnlineResponse::has_error`]: types::LitleOnlineResponse::has_error

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod client;
pub mod config;
pub mod error;
pub mod types;
mod xml;

pub use client::CnpClient;
pub use config::{CnpConfig, HttpConfig};
pub use error::{CnpError, Result};
pub use types::{LitleOnlineRequest, LitleOnlineResponse, Transaction};
