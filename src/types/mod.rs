//! Typed model of the CNP online XML schema (v11.4).
//!
//! Request payloads and shared components live in [`request`]; the response
//! envelope and per-transaction result structures live in [`response`].
//! Field names and wire tags mirror the processor schema; amounts are
//! integer minor units (cents) exactly as the schema carries them.

pub mod request;
pub mod response;

pub use request::{
    Address, Authentication, Authorization, Capture, Card, CardholderAuthentication, Credit,
    CustomBilling, DetailTax, Echeck, EcheckCredit, EcheckSale, EcheckVoid, EnhancedData,
    LineItemData, LitleOnlineRequest, RefundReversal, Sale, Transaction, Void,
};
pub use response::{
    AccountUpdater, AuthorizationResponse, CaptureResponse, CardInfo, CreditResponse,
    EcheckCreditResponse, EcheckSaleResponse, EcheckVoidResponse, FraudResult,
    LitleOnlineResponse, RefundReversalResponse, SaleResponse, VoidResponse,
};

/// Schema version stamped on every envelope.
pub const CNP_VERSION: &str = "11.4";

/// XML namespace of the online API schema.
pub const CNP_XMLNS: &str = "http://www.litle.com/schema";
