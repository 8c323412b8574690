//! Response envelope and per-transaction results.
//!
//! The processor answers every submission with a `litleOnlineResponse`
//! document. The envelope-level `response` attribute reports whether the
//! request document itself was accepted (`"0"`) or rejected (anything else,
//! with the reason in `message`). Transaction-level outcomes live in the
//! per-type result elements, at most one of which is present.

use serde::Deserialize;

/// The outer `litleOnlineResponse` document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LitleOnlineResponse {
    /// Schema version attribute.
    #[serde(rename = "@version", default)]
    pub version: String,
    /// Schema namespace attribute.
    #[serde(rename = "@xmlns", default)]
    pub xmlns: String,
    /// Envelope status: `"0"` means the request document was accepted.
    #[serde(rename = "@response")]
    pub response: String,
    /// Envelope status message (e.g. `Valid Format`).
    #[serde(rename = "@message")]
    pub message: String,
    /// Result of an `authorization` request.
    #[serde(default)]
    pub authorization_response: Option<AuthorizationResponse>,
    /// Result of a `capture` request.
    #[serde(default)]
    pub capture_response: Option<CaptureResponse>,
    /// Result of a `credit` request.
    #[serde(default)]
    pub credit_response: Option<CreditResponse>,
    /// Result of an `echeckCredit` request.
    #[serde(default)]
    pub echeck_credit_response: Option<EcheckCreditResponse>,
    /// Result of an `echeckSale` request. The processor emits this under
    /// the plural tag `echeckSalesResponse`.
    #[serde(rename = "echeckSalesResponse", default)]
    pub echeck_sale_response: Option<EcheckSaleResponse>,
    /// Result of an `echeckVoid` request.
    #[serde(default)]
    pub echeck_void_response: Option<EcheckVoidResponse>,
    /// Result of a `refundReversal` request.
    #[serde(default)]
    pub refund_reversal_response: Option<RefundReversalResponse>,
    /// Result of a `sale` request.
    #[serde(default)]
    pub sale_response: Option<SaleResponse>,
    /// Result of a `void` request.
    #[serde(default)]
    pub void_response: Option<VoidResponse>,
}

impl LitleOnlineResponse {
    /// Decodes a response document.
    ///
    /// The client calls this on every round trip; it is also public so
    /// captured documents (from logs or fixtures) can be re-decoded.
    ///
    /// # Errors
    ///
    /// Returns [`CnpError::XmlDecode`](crate::error::CnpError::XmlDecode)
    /// if the input is not a `litleOnlineResponse` document.
    pub fn parse(xml: &str) -> crate::error::Result<Self> {
        crate::xml::from_xml(xml)
    }

    /// Whether the request document was rejected by the processor.
    ///
    /// True when the envelope `response` attribute is anything other than
    /// `"0"` (schema validation failures, credential problems). A declined
    /// transaction does *not* set this; declines are reported in the
    /// per-transaction `response`/`message` fields.
    pub fn has_error(&self) -> bool {
        self.response != "0"
    }

    /// The envelope error message, present only when [`has_error`] is true.
    ///
    /// [`has_error`]: Self::has_error
    pub fn error_message(&self) -> Option<&str> {
        if self.has_error() { Some(&self.message) } else { None }
    }
}

/// Result of an `authorization` request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorizationResponse {
    /// Echo of the request transaction id.
    #[serde(rename = "@id")]
    pub id: String,
    /// Echo of the request report group.
    #[serde(rename = "@reportGroup")]
    pub report_group: String,
    /// Echo of the request customer id.
    #[serde(rename = "@customerId")]
    pub customer_id: String,
    /// Processor-assigned transaction id.
    pub litle_txn_id: String,
    /// Echo of the merchant order number.
    pub order_id: String,
    /// Transaction response code (e.g. `000` approved).
    pub response: String,
    /// Processing timestamp.
    pub response_time: String,
    /// Settlement post date.
    pub post_date: String,
    /// Human-readable response message.
    pub message: String,
    /// Issuer authorization code.
    pub auth_code: String,
    /// Approved amount, for partial approvals.
    pub approved_amount: String,
    /// Network transaction id, for later reference.
    pub network_transaction_id: String,
    /// AVS/CVV/3-DS verification results, when returned.
    pub fraud_result: Option<FraudResult>,
    /// Updated card details from the account updater service.
    pub account_updater: Option<AccountUpdater>,
}

/// Result of a `capture` request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CaptureResponse {
    /// Echo of the request transaction id.
    #[serde(rename = "@id")]
    pub id: String,
    /// Echo of the request report group.
    #[serde(rename = "@reportGroup")]
    pub report_group: String,
    /// Echo of the request customer id.
    #[serde(rename = "@customerId")]
    pub customer_id: String,
    /// Processor-assigned transaction id.
    pub litle_txn_id: String,
    /// Transaction response code.
    pub response: String,
    /// Processing timestamp.
    pub response_time: String,
    /// Settlement post date.
    pub post_date: String,
    /// Human-readable response message.
    pub message: String,
    /// Updated card details from the account updater service.
    pub account_updater: Option<AccountUpdater>,
}

/// Result of a `credit` request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreditResponse {
    /// Echo of the request transaction id.
    #[serde(rename = "@id")]
    pub id: String,
    /// Echo of the request report group.
    #[serde(rename = "@reportGroup")]
    pub report_group: String,
    /// Echo of the request customer id.
    #[serde(rename = "@customerId")]
    pub customer_id: String,
    /// Processor-assigned transaction id.
    pub litle_txn_id: String,
    /// Transaction response code.
    pub response: String,
    /// Processing timestamp.
    pub response_time: String,
    /// Settlement post date.
    pub post_date: String,
    /// Human-readable response message.
    pub message: String,
}

/// Result of an `echeckCredit` request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EcheckCreditResponse {
    /// Echo of the request transaction id.
    #[serde(rename = "@id")]
    pub id: String,
    /// Echo of the request report group.
    #[serde(rename = "@reportGroup")]
    pub report_group: String,
    /// Echo of the request customer id.
    #[serde(rename = "@customerId")]
    pub customer_id: String,
    /// Processor-assigned transaction id.
    pub litle_txn_id: String,
    /// Transaction response code.
    pub response: String,
    /// Processing timestamp.
    pub response_time: String,
    /// Human-readable response message.
    pub message: String,
}

/// Result of an `echeckSale` request (wire tag `echeckSalesResponse`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EcheckSaleResponse {
    /// Echo of the request transaction id.
    #[serde(rename = "@id")]
    pub id: String,
    /// Echo of the request report group.
    #[serde(rename = "@reportGroup")]
    pub report_group: String,
    /// Echo of the request customer id.
    #[serde(rename = "@customerId")]
    pub customer_id: String,
    /// Processor-assigned transaction id.
    pub litle_txn_id: String,
    /// Transaction response code.
    pub response: String,
    /// Processing timestamp.
    pub response_time: String,
    /// Human-readable response message.
    pub message: String,
    /// Settlement post date.
    pub post_date: String,
}

/// Result of an `echeckVoid` request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EcheckVoidResponse {
    /// Echo of the request transaction id.
    #[serde(rename = "@id")]
    pub id: String,
    /// Echo of the request report group.
    #[serde(rename = "@reportGroup")]
    pub report_group: String,
    /// Processor-assigned transaction id.
    pub litle_txn_id: String,
    /// Transaction response code.
    pub response: String,
    /// Processing timestamp.
    pub response_time: String,
    /// Human-readable response message.
    pub message: String,
    /// Settlement post date.
    pub post_date: String,
}

/// Result of a `refundReversal` request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RefundReversalResponse {
    /// Echo of the request transaction id.
    #[serde(rename = "@id")]
    pub id: String,
    /// Echo of the request report group.
    #[serde(rename = "@reportGroup")]
    pub report_group: String,
    /// Echo of the request customer id.
    #[serde(rename = "@customerId")]
    pub customer_id: String,
    /// Processor-assigned transaction id.
    pub litle_txn_id: String,
    /// Transaction response code.
    pub response: String,
    /// Processing timestamp.
    pub response_time: String,
    /// Settlement post date.
    pub post_date: String,
    /// Human-readable response message.
    pub message: String,
}

/// Result of a `sale` request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SaleResponse {
    /// Echo of the request transaction id.
    #[serde(rename = "@id")]
    pub id: String,
    /// Echo of the request report group.
    #[serde(rename = "@reportGroup")]
    pub report_group: String,
    /// Echo of the request customer id.
    #[serde(rename = "@customerId")]
    pub customer_id: String,
    /// Processor-assigned transaction id.
    pub litle_txn_id: String,
    /// Transaction response code.
    pub response: String,
    /// Echo of the merchant order number.
    pub order_id: String,
    /// Processing timestamp.
    pub response_time: String,
    /// Settlement post date.
    pub post_date: String,
    /// Human-readable response message.
    pub message: String,
    /// Issuer authorization code.
    pub auth_code: String,
    /// AVS/CVV/3-DS verification results, when returned.
    pub fraud_result: Option<FraudResult>,
    /// Updated card details from the account updater service.
    pub account_updater: Option<AccountUpdater>,
}

/// Result of a `void` request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VoidResponse {
    /// Echo of the request transaction id.
    #[serde(rename = "@id")]
    pub id: String,
    /// Echo of the request report group.
    #[serde(rename = "@reportGroup")]
    pub report_group: String,
    /// Processor-assigned transaction id.
    pub litle_txn_id: String,
    /// Transaction response code.
    pub response: String,
    /// Processing timestamp.
    pub response_time: String,
    /// Settlement post date.
    pub post_date: String,
    /// Human-readable response message.
    pub message: String,
}

/// AVS, card validation, and 3-DS verification results.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FraudResult {
    /// Address verification result code.
    pub avs_result: String,
    /// Card validation (CVV2/CVC2) result code.
    pub card_validation_result: String,
    /// 3-D Secure authentication result code.
    pub authentication_result: String,
}

/// Card refresh from the processor's account updater service.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountUpdater {
    /// Card details as submitted.
    pub original_card_info: Option<CardInfo>,
    /// Replacement card details on file with the issuer.
    pub new_card_info: Option<CardInfo>,
}

/// Card summary inside an [`AccountUpdater`] section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardInfo {
    /// Card network code.
    #[serde(rename = "type")]
    pub card_type: String,
    /// Primary account number.
    pub number: String,
    /// Expiration date as `MMYY`.
    pub exp_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::from_xml;

    #[test]
    fn test_decode_sale_response_approved() {
        let xml = r#"<litleOnlineResponse version="11.4" xmlns="http://www.litle.com/schema" response="0" message="Valid Format">
  <saleResponse id="1" reportGroup="ABC Division" customerId="">
    <litleTxnId>84568457</litleTxnId>
    <orderId>5234234</orderId>
    <response>000</response>
    <responseTime>2023-04-14T12:04:15</responseTime>
    <postDate>2023-04-14</postDate>
    <message>Approved</message>
    <authCode>11111</authCode>
  </saleResponse>
</litleOnlineResponse>"#;

        let decoded: LitleOnlineResponse = from_xml(xml).unwrap();
        assert!(!decoded.has_error());
        assert_eq!(decoded.error_message(), None);
        assert_eq!(decoded.version, "11.4");
        assert_eq!(decoded.response, "0");
        assert_eq!(decoded.message, "Valid Format");

        let sale = decoded.sale_response.expect("saleResponse should be present");
        assert_eq!(sale.id, "1");
        assert_eq!(sale.report_group, "ABC Division");
        assert_eq!(sale.customer_id, "");
        assert_eq!(sale.response, "000");
        assert_eq!(sale.order_id, "5234234");
        assert_eq!(sale.message, "Approved");
        assert!(sale.fraud_result.is_none());
        assert!(decoded.authorization_response.is_none());
    }

    #[test]
    fn test_decode_sale_response_with_fraud_result() {
        let xml = r#"<litleOnlineResponse version="11.4" response="0" message="Valid Format">
  <saleResponse id="1" reportGroup="ABC Division">
    <litleTxnId>84568457</litleTxnId>
    <orderId>5234234</orderId>
    <response>101</response>
    <message>Issuer Unavailable</message>
    <fraudResult>
      <avsResult>10</avsResult>
      <cardValidationResult></cardValidationResult>
    </fraudResult>
  </saleResponse>
</litleOnlineResponse>"#;

        let decoded: LitleOnlineResponse = from_xml(xml).unwrap();
        let sale = decoded.sale_response.unwrap();
        assert_eq!(sale.response, "101");
        assert_eq!(sale.message, "Issuer Unavailable");

        let fraud = sale.fraud_result.expect("fraudResult should be present");
        assert_eq!(fraud.avs_result, "10");
        assert_eq!(fraud.card_validation_result, "");
        assert_eq!(fraud.authentication_result, "");
    }

    #[test]
    fn test_decode_authorization_response_with_account_updater() {
        let xml = r#"<litleOnlineResponse version="11.4" response="0" message="Valid Format">
  <authorizationResponse id="1" reportGroup="ABC Division">
    <litleTxnId>1111111</litleTxnId>
    <response>000</response>
    <message>Approved</message>
    <accountUpdater>
      <originalCardInfo>
        <type>VI</type>
        <number>4100117890123000</number>
        <expDate>1210</expDate>
      </originalCardInfo>
      <newCardInfo>
        <type>VI</type>
        <number>4100117890123111</number>
        <expDate>1215</expDate>
      </newCardInfo>
    </accountUpdater>
  </authorizationResponse>
</litleOnlineResponse>"#;

        let decoded: LitleOnlineResponse = from_xml(xml).unwrap();
        let auth = decoded.authorization_response.unwrap();
        let updater = auth.account_updater.expect("accountUpdater should be present");
        let original = updater.original_card_info.unwrap();
        let new = updater.new_card_info.unwrap();
        assert_eq!(original.card_type, "VI");
        assert_eq!(original.number, "4100117890123000");
        assert_eq!(original.exp_date, "1210");
        assert_eq!(new.number, "4100117890123111");
        assert_eq!(new.exp_date, "1215");
    }

    #[test]
    fn test_decode_echeck_sales_response_plural_tag() {
        let xml = r#"<litleOnlineResponse version="11.4" response="0" message="Valid Format">
  <echeckSalesResponse id="834262" reportGroup="ABC Division">
    <litleTxnId>84568457</litleTxnId>
    <response>000</response>
    <message>Approved</message>
    <postDate>2023-04-14</postDate>
  </echeckSalesResponse>
</litleOnlineResponse>"#;

        let decoded: LitleOnlineResponse = from_xml(xml).unwrap();
        let echeck = decoded.echeck_sale_response.expect("plural tag should map");
        assert_eq!(echeck.id, "834262");
        assert_eq!(echeck.response, "000");
        assert_eq!(echeck.post_date, "2023-04-14");
    }

    #[test]
    fn test_decode_schema_validation_failure() {
        let xml = r#"<litleOnlineResponse version="11.4" response="1" message="Error validating xml data against the schema"/>"#;

        let decoded: LitleOnlineResponse = from_xml(xml).unwrap();
        assert!(decoded.has_error());
        assert_eq!(
            decoded.error_message(),
            Some("Error validating xml data against the schema")
        );
        assert!(decoded.sale_response.is_none());
        assert!(decoded.authorization_response.is_none());
    }

    #[test]
    fn test_decode_missing_optional_elements_defaults() {
        let xml = r#"<litleOnlineResponse version="11.4" response="0" message="Valid Format">
  <voidResponse id="834262" reportGroup="report group">
    <litleTxnId>1234567890123456789</litleTxnId>
    <response>000</response>
    <message>Approved</message>
  </voidResponse>
</litleOnlineResponse>"#;

        let decoded: LitleOnlineResponse = from_xml(xml).unwrap();
        let void = decoded.void_response.unwrap();
        assert_eq!(void.response, "000");
        // Elements the processor omitted decode to their defaults.
        assert_eq!(void.response_time, "");
        assert_eq!(void.post_date, "");
    }

    #[test]
    fn test_decode_rejects_missing_envelope_attributes() {
        let result: crate::error::Result<LitleOnlineResponse> =
            from_xml("<litleOnlineResponse version=\"11.4\"/>");
        assert!(result.is_err());
    }

    #[test]
    fn test_error_message_none_on_success() {
        let xml = r#"<litleOnlineResponse version="11.4" response="0" message="Valid Format"/>"#;
        let decoded: LitleOnlineResponse = from_xml(xml).unwrap();
        assert!(!decoded.has_error());
        assert_eq!(decoded.error_message(), None);
    }
}
