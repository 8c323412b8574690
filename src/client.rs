//! The CNP online transaction client.
//!
//! [`CnpClient`] owns a validated [`CnpConfig`] and a pooled HTTP client.
//! Every transaction method is a single stateless round trip: build the
//! envelope, serialize it, POST it as `text/xml`, decode the response.

use std::sync::LazyLock;

use reqwest::{
    Client,
    header::{CONTENT_TYPE, HeaderValue},
};
use tracing::{debug, instrument, warn};

use crate::{
    config::{CnpConfig, HttpConfig},
    error::{CnpError, Result},
    types::{
        Authentication, Authorization, Capture, Credit, EcheckCredit, EcheckSale, EcheckVoid,
        LitleOnlineRequest, LitleOnlineResponse, RefundReversal, Sale, Transaction, Void,
    },
    xml,
};

/// Shared default HTTP client.
///
/// A singleton keeps connection pooling effective across all clients built
/// with default transport settings.
static DEFAULT_HTTP_CLIENT: LazyLock<Client> = LazyLock::new(|| {
    let defaults = HttpConfig::default();
    Client::builder()
        .pool_max_idle_per_host(defaults.pool_max_idle_per_host)
        .timeout(defaults.timeout())
        .connect_timeout(defaults.connect_timeout())
        .build()
        .expect("default HTTP client construction should not fail")
});

/// Client for the CNP online transaction API.
///
/// # Examples
///
/// ```rust,no_run
/// use worldpay_cnp::{CnpClient, CnpConfig, types::{Sale, Card}};
///
/// # async fn example() -> worldpay_cnp::Result<()> {
/// let config = CnpConfig::new(
///     "username",
///     "password",
///     "100",
///     "https://www.testvantivcnp.com/sandbox/communicator/online",
/// );
/// let client = CnpClient::new(config)?;
///
/// let sale = Sale {
///     id: "1".into(),
///     report_group: "ABC Division".into(),
///     order_id: "5234234".into(),
///     amount: 40000,
///     order_source: "ecommerce".into(),
///     card: Card {
///         card_type: "VI".into(),
///         number: "4005550000081000".into(),
///         exp_date: "1210".into(),
///         card_validation_num: "555".into(),
///     },
///     ..Default::default()
/// };
///
/// let response = client.sale(sale).await?;
/// if let Some(message) = response.error_message() {
///     eprintln!("request rejected: {message}");
/// } else if let Some(result) = &response.sale_response {
///     println!("response code {}: {}", result.response, result.message);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CnpClient {
    http: Client,
    config: CnpConfig,
}

impl CnpClient {
    /// Creates a client using the shared pooled HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`CnpError::Config`] if the configuration fails
    /// [`CnpConfig::validate`].
    pub fn new(config: CnpConfig) -> Result<Self> {
        config.validate()?;
        if !config.is_https() {
            warn!(api_base = %config.api_base, "endpoint is not HTTPS; credentials travel in the clear");
        }
        Ok(Self { http: DEFAULT_HTTP_CLIENT.clone(), config })
    }

    /// Creates a client with custom transport settings.
    ///
    /// # Errors
    ///
    /// Returns [`CnpError::Config`] for an invalid configuration, or
    /// [`CnpError::Http`] if the HTTP client cannot be built.
    pub fn with_http_config(config: CnpConfig, http_config: &HttpConfig) -> Result<Self> {
        config.validate()?;
        if !config.is_https() {
            warn!(api_base = %config.api_base, "endpoint is not HTTPS; credentials travel in the clear");
        }
        let http = Client::builder()
            .pool_max_idle_per_host(http_config.pool_max_idle_per_host)
            .timeout(http_config.timeout())
            .connect_timeout(http_config.connect_timeout())
            .build()
            .map_err(CnpError::Http)?;
        Ok(Self { http, config })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &CnpConfig {
        &self.config
    }

    /// Renders the envelope XML for a transaction without submitting it.
    ///
    /// Useful for inspection and audit logging of what would be sent.
    ///
    /// # Errors
    ///
    /// Returns [`CnpError::XmlEncode`] if serialization fails.
    pub fn request_xml(&self, txn: Transaction) -> Result<String> {
        let envelope = LitleOnlineRequest::new(
            &self.config.merchant_id,
            Authentication {
                user: self.config.user.clone(),
                password: self.config.password.clone(),
            },
            txn,
        );
        xml::to_xml(&envelope)
    }

    /// Submits a card authorization.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding, the HTTP round trip, or decoding fails.
    pub async fn authorization(&self, auth: Authorization) -> Result<LitleOnlineResponse> {
        self.execute(Transaction::Authorization(auth)).await
    }

    /// Captures a previously authorized transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding, the HTTP round trip, or decoding fails.
    pub async fn capture(&self, capture: Capture) -> Result<LitleOnlineResponse> {
        self.execute(Transaction::Capture(capture)).await
    }

    /// Refunds a captured or settled transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding, the HTTP round trip, or decoding fails.
    pub async fn credit(&self, credit: Credit) -> Result<LitleOnlineResponse> {
        self.execute(Transaction::Credit(credit)).await
    }

    /// Submits an echeck (ACH) credit.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding, the HTTP round trip, or decoding fails.
    pub async fn echeck_credit(&self, echeck_credit: EcheckCredit) -> Result<LitleOnlineResponse> {
        self.execute(Transaction::EcheckCredit(echeck_credit)).await
    }

    /// Submits an echeck (ACH) sale.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding, the HTTP round trip, or decoding fails.
    pub async fn echeck_sale(&self, echeck_sale: EcheckSale) -> Result<LitleOnlineResponse> {
        self.execute(Transaction::EcheckSale(echeck_sale)).await
    }

    /// Voids a pending echeck transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding, the HTTP round trip, or decoding fails.
    pub async fn echeck_void(&self, echeck_void: EcheckVoid) -> Result<LitleOnlineResponse> {
        self.execute(Transaction::EcheckVoid(echeck_void)).await
    }

    /// Reverses a previously issued refund.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding, the HTTP round trip, or decoding fails.
    pub async fn refund_reversal(
        &self,
        refund_reversal: RefundReversal,
    ) -> Result<LitleOnlineResponse> {
        self.execute(Transaction::RefundReversal(refund_reversal)).await
    }

    /// Submits a combined authorization and capture.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding, the HTTP round trip, or decoding fails.
    pub async fn sale(&self, sale: Sale) -> Result<LitleOnlineResponse> {
        self.execute(Transaction::Sale(sale)).await
    }

    /// Voids a pending card transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding, the HTTP round trip, or decoding fails.
    pub async fn void(&self, void: Void) -> Result<LitleOnlineResponse> {
        self.execute(Transaction::Void(void)).await
    }

    /// Runs one envelope round trip.
    #[instrument(skip(self, txn), fields(txn = txn.element_name(), merchant_id = %self.config.merchant_id))]
    async fn execute(&self, txn: Transaction) -> Result<LitleOnlineResponse> {
        let body = self.request_xml(txn)?;
        debug!(request = %body, "submitting online request");

        let response = self
            .http
            .post(&self.config.api_base)
            .header(CONTENT_TYPE, HeaderValue::from_static("text/xml"))
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        debug!(status = %status, response = %text, "received online response");

        if !status.is_success() {
            return Err(CnpError::Endpoint { status: status.as_u16() });
        }

        LitleOnlineResponse::parse(&text)
    }
}
