use super::reference::TransactionReference;
use crate::config::GatewayConfig;
use crate::core::Currency;
use crate::modules::checkout::models::{CheckoutRequest, CheckoutSnippet};
use tracing::{info, warn};

/// Hosted LazerPay checkout widget
pub const WIDGET_SCRIPT_URL: &str =
    "https://cdn.jsdelivr.net/gh/LazerPay-Finance/checkout-build@main/checkout@1.0.1/dist/index.min.js";

/// Draws the LazerPay pay button for an invoice page
#[derive(Debug, Clone)]
pub struct CheckoutRenderer {
    config: GatewayConfig,
}

impl CheckoutRenderer {
    pub fn new(config: GatewayConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Render the pay button, or an inline notice when the invoice can't be
    /// settled through LazerPay. Each payable render issues a new reference.
    pub fn render(&self, request: &CheckoutRequest) -> CheckoutSnippet {
        let currency = match request.currency.parse::<Currency>() {
            Ok(currency) => currency,
            Err(_) => {
                warn!(
                    invoice_id = request.invoice_id,
                    currency = request.currency.as_str(),
                    "Currency not supported by LazerPay"
                );
                return unpayable(format!(
                    "Selected({}) currency isn't supported.",
                    request.currency
                ));
            }
        };

        if let Err(reason) = currency.validate_amount(request.amount) {
            warn!(
                invoice_id = request.invoice_id,
                amount = %request.amount,
                "Invoice amount can't be paid with LazerPay"
            );
            return unpayable(reason);
        }

        let reference = TransactionReference::generate(request.invoice_id).to_string();
        let callback = callback_url(&self.config.callback_url, request.invoice_id, &reference);

        let script = format!(
            r#"<script>
    const paymentForm = document.getElementById("lazerPaymentBtn");
    paymentForm.addEventListener("click", payWithLazerpay, false);

    function payWithLazerpay(e) {{
      e.preventDefault();

      LazerCheckout({{
        reference: {reference},
        name: {name},
        email: {email},
        amount: {amount},
        key: {key},
        currency: {currency},
        acceptPartialPayment: false,
        onClose: (data) => console.info("Cancelled payment with LazerPay: " + new Date()),
        onSuccess: (data) => performCallbackAction("success"),
        onError: (data) => console.log(data)
      }});
    }}

    function performCallbackAction(status) {{
      window.location.href = {callback} + encodeURIComponent(status);
    }}
</script>"#,
            reference = js_string(&reference),
            name = js_string(&request.customer_name()),
            email = js_string(&request.email),
            amount = js_string(&currency.format_amount(request.amount)),
            key = js_string(self.config.public_key()),
            currency = js_string(currency.code()),
            callback = js_string(&callback),
        );

        let mut html = format!(
            r#"<input type="submit" id="lazerPaymentBtn" value="{}" />"#,
            escape_html(&request.pay_now_label)
        );
        html.push_str(&format!(r#"<script src="{}"></script>"#, WIDGET_SCRIPT_URL));
        html.push_str(&script);

        info!(
            invoice_id = request.invoice_id,
            reference = reference.as_str(),
            currency = %currency,
            mode = %self.config.mode,
            "Rendered LazerPay checkout"
        );

        CheckoutSnippet::PayButton { reference, html }
    }
}

/// Callback address the widget redirects to; the status value is appended
/// in the browser.
pub fn callback_url(base: &str, invoice_id: u64, reference: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!(
        "{}{}invoice_id={}&trxref={}&status=",
        base, separator, invoice_id, reference
    )
}

fn unpayable(reason: String) -> CheckoutSnippet {
    let html = format!(
        "<div class='label label-lg label-danger' style='max-width: 100% !important; white-space: inherit'>{}</div>",
        escape_html(&reason)
    );
    CheckoutSnippet::Unpayable { reason, html }
}

/// JavaScript string literal that is also safe inside a `<script>` element
fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string())
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
