use std::fmt;

/// Normalized status of a payment as exposed to callers.
///
/// Provider vocabularies collapse into the named variants. Anything the normalizer does
/// not recognise is carried verbatim in [`PaymentStatus::Unrecognized`] so that callers
/// still see what the provider reported.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Captured,
    Failed,
    Cancelled,
    /// Only produced when the provider reports that the order does not exist.
    Unknown,
    Unrecognized(String),
}

impl PaymentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Captured => "captured",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
            Self::Unrecognized(raw) => raw.as_str(),
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for PaymentStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => Self::Pending,
            "captured" => Self::Captured,
            "failed" => Self::Failed,
            "cancelled" => Self::Cancelled,
            "unknown" => Self::Unknown,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<PaymentStatus> for String {
    fn from(status: PaymentStatus) -> Self {
        match status {
            PaymentStatus::Unrecognized(raw) => raw,
            other => other.as_str().to_string(),
        }
    }
}

/// Integration flavour chosen by the frontend.
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaymentType {
    /// Hosted payment link.
    LinkPay,
    /// Embedded drop-in component backed by a hosted session.
    DropIn,
    /// Server-to-server card payment.
    DirectApi,
}

impl PaymentType {
    pub fn is_hosted_interaction(self) -> bool {
        matches!(self, Self::LinkPay | Self::DropIn)
    }
}

/// Currencies offered by the demo storefront.
#[allow(clippy::upper_case_acronyms)]
#[derive(
    Clone,
    Copy,
    Debug,
    Eq,
    Hash,
    PartialEq,
    serde::Deserialize,
    serde::Serialize,
    strum::Display,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Currency {
    USD,
    HKD,
    KRW,
    JPY,
    MYR,
    IDR,
    THB,
    SGD,
}
