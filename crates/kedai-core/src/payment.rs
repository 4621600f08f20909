//! # Simulated E-Wallet Payment
//!
//! Builds the fabricated payment payloads that stand in for a real gateway:
//! QR content and a deeplink, both derived from a payment token.
//!
//! ## Simulation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                  Payment Simulation                                     │
//! │                                                                         │
//! │  Checkout total: Rp50.000, provider: "GoPay"                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  token (UUID v4, drawn by the caller - fresh per checkout)             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  PaymentSimulation::new ← THIS MODULE (deterministic)                  │
//! │       │                                                                 │
//! │       ├── qr_content: kedai-kita://pay?provider=GoPay&token=..&amount=..│
//! │       └── deeplink:   kedai-kita://open-payment/<token>                 │
//! │                                                                         │
//! │  No payment network is ever contacted.                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The token itself is generated by the caller so that this crate stays
//! deterministic: same provider + token + total always produce the same
//! payload strings.

use crate::money::Money;

/// URI scheme used by the simulated gateway payloads.
pub const PAYMENT_SCHEME: &str = "kedai-kita";

/// Fabricated payment payloads for one checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSimulation {
    /// Opaque payment reference (caller-supplied, fresh per checkout).
    pub token: String,

    /// QR content encoding provider, token and amount.
    pub qr_content: String,

    /// App deeplink encoding the token.
    pub deeplink: String,
}

impl PaymentSimulation {
    /// Builds the simulated payment payloads for a checkout.
    ///
    /// The provider string is embedded verbatim - it is caller-supplied and
    /// not validated against a provider list.
    ///
    /// ## Example
    /// ```rust
    /// use kedai_core::payment::PaymentSimulation;
    /// use kedai_core::Money;
    ///
    /// let sim = PaymentSimulation::new("GoPay", "tok-1", Money::from_minor(50_000));
    /// assert_eq!(
    ///     sim.qr_content,
    ///     "kedai-kita://pay?provider=GoPay&token=tok-1&amount=50000"
    /// );
    /// assert_eq!(sim.deeplink, "kedai-kita://open-payment/tok-1");
    /// ```
    pub fn new(provider: &str, token: &str, total: Money) -> Self {
        let qr_content = format!(
            "{PAYMENT_SCHEME}://pay?provider={provider}&token={token}&amount={}",
            total.minor()
        );
        let deeplink = format!("{PAYMENT_SCHEME}://open-payment/{token}");

        PaymentSimulation {
            token: token.to_string(),
            qr_content,
            deeplink,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_content_template() {
        let sim = PaymentSimulation::new("GoPay", "abc-123", Money::from_minor(50_000));
        assert_eq!(
            sim.qr_content,
            "kedai-kita://pay?provider=GoPay&token=abc-123&amount=50000"
        );
    }

    #[test]
    fn test_deeplink_template() {
        let sim = PaymentSimulation::new("OVO", "abc-123", Money::from_minor(8000));
        assert_eq!(sim.deeplink, "kedai-kita://open-payment/abc-123");
    }

    #[test]
    fn test_payloads_embed_exact_provider_and_token() {
        let sim = PaymentSimulation::new("DANA", "tok-xyz", Money::from_minor(1));
        assert!(sim.qr_content.contains("provider=DANA"));
        assert!(sim.qr_content.contains("token=tok-xyz"));
        assert!(sim.deeplink.contains("tok-xyz"));
        assert_eq!(sim.token, "tok-xyz");
    }

    /// Same inputs always produce the same payloads.
    #[test]
    fn test_simulation_is_deterministic() {
        let a = PaymentSimulation::new("GoPay", "t", Money::from_minor(100));
        let b = PaymentSimulation::new("GoPay", "t", Money::from_minor(100));
        assert_eq!(a, b);
    }
}
