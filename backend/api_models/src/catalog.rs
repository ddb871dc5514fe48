//! Static catalog data served to the storefront.

use common_enums::{Currency, PaymentType};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub currency: Currency,
    pub language: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentScenario {
    pub id: String,
    pub name: String,
    pub environment: String,
    #[serde(rename = "type")]
    pub payment_type: PaymentType,
    pub description: String,
}

/// Public view of the running configuration. Credentials are never part of it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayConfigInfo {
    pub environment: String,
    pub api_url: String,
    pub mode: GatewayMode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GatewayMode {
    Live,
    Demo,
}

fn country(code: &str, name: &str, currency: Currency, language: &str) -> Country {
    Country {
        code: code.to_string(),
        name: name.to_string(),
        currency,
        language: language.to_string(),
    }
}

pub fn supported_countries() -> Vec<Country> {
    vec![
        country("GLOBAL", "Global", Currency::USD, "en"),
        country("HK", "Hong Kong", Currency::HKD, "zh-HK"),
        country("KR", "South Korea", Currency::KRW, "ko"),
        country("JP", "Japan", Currency::JPY, "ja"),
        country("MY", "Malaysia", Currency::MYR, "ms"),
        country("ID", "Indonesia", Currency::IDR, "id"),
        country("TH", "Thailand", Currency::THB, "th"),
        country("SG", "Singapore", Currency::SGD, "en"),
    ]
}

pub fn payment_scenarios() -> Vec<PaymentScenario> {
    [
        (PaymentType::LinkPay, "LinkPay", "hosted payment link"),
        (PaymentType::DropIn, "Drop-in", "embedded drop-in checkout"),
        (PaymentType::DirectApi, "Direct API", "server-to-server card payment"),
    ]
    .into_iter()
    .map(|(payment_type, label, flow)| PaymentScenario {
        id: format!("uat-ecommerce-{payment_type}"),
        name: format!("UAT e-commerce {label} demo"),
        environment: "UAT".to_string(),
        payment_type,
        description: format!("E-commerce {flow} in the UAT environment"),
    })
    .collect()
}
