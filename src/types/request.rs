//! Request envelope and transaction payloads.
//!
//! Each payload struct serializes to the schema element of the same name.
//! Attribute fields use `@`-renames and are declared before child elements,
//! which is the order the XML serializer requires. Optional sections are
//! omitted from the document when `None`.

use serde::Serialize;

use super::{CNP_VERSION, CNP_XMLNS};

/// The outer `litleOnlineRequest` document.
///
/// Carries the schema version, namespace, merchant id, and authentication,
/// plus exactly one transaction payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename = "litleOnlineRequest", rename_all = "camelCase")]
pub struct LitleOnlineRequest {
    /// Schema version attribute.
    #[serde(rename = "@version")]
    pub version: String,
    /// Schema namespace attribute.
    #[serde(rename = "@xmlns")]
    pub xmlns: String,
    /// Merchant identifier attribute.
    #[serde(rename = "@merchantId")]
    pub merchant_id: String,
    /// API credentials.
    pub authentication: Authentication,
    /// Populated for [`Transaction::Authorization`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization: Option<Authorization>,
    /// Populated for [`Transaction::Capture`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capture: Option<Capture>,
    /// Populated for [`Transaction::Credit`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit: Option<Credit>,
    /// Populated for [`Transaction::EcheckCredit`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub echeck_credit: Option<EcheckCredit>,
    /// Populated for [`Transaction::EcheckSale`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub echeck_sale: Option<EcheckSale>,
    /// Populated for [`Transaction::EcheckVoid`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub echeck_void: Option<EcheckVoid>,
    /// Populated for [`Transaction::RefundReversal`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_reversal: Option<RefundReversal>,
    /// Populated for [`Transaction::Sale`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale: Option<Sale>,
    /// Populated for [`Transaction::Void`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub void: Option<Void>,
}

impl LitleOnlineRequest {
    /// Builds an envelope around a single transaction payload.
    pub fn new(merchant_id: &str, authentication: Authentication, txn: Transaction) -> Self {
        let mut request = Self {
            version: CNP_VERSION.to_owned(),
            xmlns: CNP_XMLNS.to_owned(),
            merchant_id: merchant_id.to_owned(),
            authentication,
            authorization: None,
            capture: None,
            credit: None,
            echeck_credit: None,
            echeck_sale: None,
            echeck_void: None,
            refund_reversal: None,
            sale: None,
            void: None,
        };

        match txn {
            Transaction::Authorization(p) => request.authorization = Some(p),
            Transaction::Capture(p) => request.capture = Some(p),
            Transaction::Credit(p) => request.credit = Some(p),
            Transaction::EcheckCredit(p) => request.echeck_credit = Some(p),
            Transaction::EcheckSale(p) => request.echeck_sale = Some(p),
            Transaction::EcheckVoid(p) => request.echeck_void = Some(p),
            Transaction::RefundReversal(p) => request.refund_reversal = Some(p),
            Transaction::Sale(p) => request.sale = Some(p),
            Transaction::Void(p) => request.void = Some(p),
        }

        request
    }
}

/// One transaction payload, ready to be wrapped in an envelope.
#[derive(Debug, Clone, PartialEq)]
pub enum Transaction {
    /// Card authorization (hold funds).
    Authorization(Authorization),
    /// Capture of a prior authorization.
    Capture(Capture),
    /// Refund against a settled transaction.
    Credit(Credit),
    /// Echeck (ACH) credit.
    EcheckCredit(EcheckCredit),
    /// Echeck (ACH) sale.
    EcheckSale(EcheckSale),
    /// Void of a pending echeck transaction.
    EcheckVoid(EcheckVoid),
    /// Reversal of a previously issued refund.
    RefundReversal(RefundReversal),
    /// Combined authorization and capture.
    Sale(Sale),
    /// Void of a pending card transaction.
    Void(Void),
}

impl Transaction {
    /// Schema element name of the payload, for logging.
    pub(crate) fn element_name(&self) -> &'static str {
        match self {
            Self::Authorization(_) => "authorization",
            Self::Capture(_) => "capture",
            Self::Credit(_) => "credit",
            Self::EcheckCredit(_) => "echeckCredit",
            Self::EcheckSale(_) => "echeckSale",
            Self::EcheckVoid(_) => "echeckVoid",
            Self::RefundReversal(_) => "refundReversal",
            Self::Sale(_) => "sale",
            Self::Void(_) => "void",
        }
    }
}

/// API credentials carried inside every envelope.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Authentication {
    /// API username.
    pub user: String,
    /// API password.
    pub password: String,
}

/// Card authorization request.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Authorization {
    /// Merchant-assigned transaction id.
    #[serde(rename = "@id")]
    pub id: String,
    /// Report group for settlement reporting.
    #[serde(rename = "@reportGroup")]
    pub report_group: String,
    /// Merchant-assigned customer id.
    #[serde(rename = "@customerId")]
    pub customer_id: String,
    /// Merchant order number.
    pub order_id: String,
    /// Amount in minor units.
    pub amount: i64,
    /// Order entry source (e.g. `ecommerce`, `3dsAuthenticated`).
    pub order_source: String,
    /// Cardholder billing address.
    pub bill_to_address: Address,
    /// Card details.
    pub card: Card,
    /// 3-D Secure authentication data, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder_authentication: Option<CardholderAuthentication>,
}

/// Capture of a previously authorized transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capture {
    /// Merchant-assigned transaction id.
    #[serde(rename = "@id")]
    pub id: String,
    /// Report group for settlement reporting.
    #[serde(rename = "@reportGroup")]
    pub report_group: String,
    /// Merchant-assigned customer id.
    #[serde(rename = "@customerId")]
    pub customer_id: String,
    /// Whether this is a partial capture.
    #[serde(rename = "@partial")]
    pub partial: bool,
    /// Processor transaction id of the authorization.
    pub litle_txn_id: String,
    /// Amount to capture, in minor units.
    pub amount: i64,
    /// Level II/III purchase data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_data: Option<EnhancedData>,
}

/// Refund against a captured or settled transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Credit {
    /// Merchant-assigned transaction id.
    #[serde(rename = "@id")]
    pub id: String,
    /// Report group for settlement reporting.
    #[serde(rename = "@reportGroup")]
    pub report_group: String,
    /// Merchant-assigned customer id.
    #[serde(rename = "@customerId")]
    pub customer_id: String,
    /// Processor transaction id of the transaction being refunded.
    pub litle_txn_id: String,
    /// Amount in minor units; omitted to refund the full amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<i64>,
}

/// Echeck (ACH) credit referencing a prior echeck transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcheckCredit {
    /// Merchant-assigned transaction id.
    #[serde(rename = "@id")]
    pub id: String,
    /// Report group for settlement reporting.
    #[serde(rename = "@reportGroup")]
    pub report_group: String,
    /// Merchant-assigned customer id.
    #[serde(rename = "@customerId")]
    pub customer_id: String,
    /// Processor transaction id being credited.
    pub litle_txn_id: String,
    /// Amount in minor units.
    pub amount: i64,
}

/// Echeck (ACH) sale.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcheckSale {
    /// Merchant-assigned transaction id.
    #[serde(rename = "@id")]
    pub id: String,
    /// Report group for settlement reporting.
    #[serde(rename = "@reportGroup")]
    pub report_group: String,
    /// Merchant-assigned customer id.
    #[serde(rename = "@customerId")]
    pub customer_id: String,
    /// Merchant order number.
    pub order_id: String,
    /// Whether to run account verification before submitting.
    pub verify: bool,
    /// Amount in minor units.
    pub amount: i64,
    /// Order entry source.
    pub order_source: String,
    /// Account holder billing address.
    pub bill_to_address: Address,
    /// Bank account details.
    pub echeck: Echeck,
}

/// Void of a pending echeck transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcheckVoid {
    /// Merchant-assigned transaction id.
    #[serde(rename = "@id")]
    pub id: String,
    /// Report group for settlement reporting.
    #[serde(rename = "@reportGroup")]
    pub report_group: String,
    /// Processor transaction id being voided.
    pub litle_txn_id: String,
}

/// Reversal of a previously issued refund.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundReversal {
    /// Merchant-assigned transaction id.
    #[serde(rename = "@id")]
    pub id: String,
    /// Report group for settlement reporting.
    #[serde(rename = "@reportGroup")]
    pub report_group: String,
    /// Merchant-assigned customer id.
    #[serde(rename = "@customerId")]
    pub customer_id: String,
    /// Processor transaction id of the refund being reversed.
    pub litle_txn_id: String,
    /// Card used in the original refund.
    pub card: Card,
    /// Reference code from the original refund.
    pub original_ref_code: String,
    /// Original refund amount in minor units.
    pub original_amount: i64,
    /// Timestamp of the original refund.
    pub original_txn_time: String,
    /// System trace id from the original refund.
    pub original_system_trace_id: String,
    /// Sequence number from the original refund.
    pub original_sequence_number: String,
}

/// Combined authorization and capture.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    /// Merchant-assigned transaction id.
    #[serde(rename = "@id")]
    pub id: String,
    /// Report group for settlement reporting.
    #[serde(rename = "@reportGroup")]
    pub report_group: String,
    /// Merchant-assigned customer id.
    #[serde(rename = "@customerId")]
    pub customer_id: String,
    /// Merchant order number.
    pub order_id: String,
    /// Amount in minor units.
    pub amount: i64,
    /// Order entry source.
    pub order_source: String,
    /// Cardholder billing address.
    pub bill_to_address: Address,
    /// Card details.
    pub card: Card,
    /// 3-D Secure authentication data, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder_authentication: Option<CardholderAuthentication>,
    /// Statement descriptor overrides.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_billing: Option<CustomBilling>,
    /// Level II/III purchase data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enhanced_data: Option<EnhancedData>,
}

/// Void of a pending card transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Void {
    /// Merchant-assigned transaction id.
    #[serde(rename = "@id")]
    pub id: String,
    /// Report group for settlement reporting.
    #[serde(rename = "@reportGroup")]
    pub report_group: String,
    /// Processor transaction id being voided.
    pub litle_txn_id: String,
}

/// Postal address with contact details.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    /// Full name.
    pub name: String,
    /// Street address, line 1.
    pub address_line1: String,
    /// Street address, line 2.
    pub address_line2: String,
    /// Street address, line 3.
    pub address_line3: String,
    /// City.
    pub city: String,
    /// State or province code.
    pub state: String,
    /// Postal code.
    pub zip: String,
    /// Country code.
    pub country: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone: String,
}

/// Bank account details for echeck transactions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Echeck {
    /// Account type (`Checking`, `Savings`, `Corporate`, ...).
    pub acc_type: String,
    /// Account number.
    pub acc_num: String,
    /// ABA routing number.
    pub routing_num: String,
    /// Check number, when presenting a paper check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_num: Option<String>,
}

/// Card details.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Card network code (`VI`, `MC`, `AX`, ...).
    #[serde(rename = "type")]
    pub card_type: String,
    /// Primary account number.
    pub number: String,
    /// Expiration date as `MMYY`.
    pub exp_date: String,
    /// CVV2/CVC2/CID value.
    pub card_validation_num: String,
}

/// 3-D Secure authentication data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardholderAuthentication {
    /// CAVV/AAV value from the authentication.
    pub authentication_value: String,
    /// Transaction id assigned by the authentication network.
    pub authentication_transaction_id: String,
}

/// Statement descriptor overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomBilling {
    /// Merchant phone shown on the statement.
    pub phone: String,
    /// Descriptor shown on the statement.
    pub descriptor: String,
}

/// Level II/III purchase data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedData {
    /// Purchaser's reference (e.g. PO number).
    pub customer_reference: String,
    /// Sales tax in minor units.
    pub sales_tax: i64,
    /// Whether the purchase is tax exempt.
    pub tax_exempt: bool,
    /// Discount applied, in minor units.
    pub discount_amount: i64,
    /// Shipping cost in minor units.
    pub shipping_amount: i64,
    /// Duty in minor units.
    pub duty_amount: i64,
    /// Ship-from postal code.
    pub ship_from_postal_code: String,
    /// Destination postal code.
    pub destination_postal_code: String,
    /// Destination country code.
    pub destination_country_code: String,
    /// Invoice reference number.
    pub invoice_reference_number: String,
    /// Order date as `YYYY-MM-DD`.
    pub order_date: String,
    /// Tax detail for the whole order.
    pub detail_tax: DetailTax,
    /// Per-line-item detail.
    pub line_item_data: Vec<LineItemData>,
}

/// Tax detail record.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailTax {
    /// Whether the tax is included in the total amount.
    pub tax_included_in_total: bool,
    /// Tax amount in minor units.
    pub tax_amount: i64,
    /// Tax rate as a decimal string.
    pub tax_rate: String,
    /// Tax type identifier.
    pub tax_type_identifier: String,
    /// Card acceptor tax id.
    pub card_acceptor_tax_id: String,
}

/// Line item for Level III data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemData {
    /// Position of the item within the order.
    pub item_sequence_number: i32,
    /// Item description.
    pub item_description: String,
    /// Product code.
    pub product_code: String,
    /// Quantity purchased.
    pub quantity: i32,
    /// Unit of measure (e.g. `EACH`).
    pub unit_of_measure: String,
    /// Tax on this line, in minor units.
    pub tax_amount: i64,
    /// Line total in minor units.
    pub line_item_total: i64,
    /// Line total including tax, in minor units.
    pub line_item_total_with_tax: i64,
    /// Discount on this line, in minor units.
    pub item_discount_amount: i64,
    /// Commodity code.
    pub commodity_code: String,
    /// Unit cost.
    pub unit_cost: f64,
    /// Tax detail for this line.
    pub detail_tax: DetailTax,
}
