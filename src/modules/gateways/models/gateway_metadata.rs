use serde::{Deserialize, Serialize};

/// Capabilities the host platform reads before activating the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GatewayMetadata {
    pub display_name: String,
    #[serde(rename = "APIVersion")]
    pub api_version: String,
    pub disable_local_credit_card_input: bool,
    pub tokenised_storage: bool,
}

impl GatewayMetadata {
    pub fn lazerpay() -> Self {
        Self {
            display_name: "Pay with Crypto - LazerPay".to_string(),
            api_version: "1.1".to_string(),
            disable_local_credit_card_input: true,
            tokenised_storage: false,
        }
    }
}

/// Input types the host's admin UI can render for a setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    System,
    Text,
    Password,
    YesNo,
}

/// One merchant-facing gateway setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigField {
    pub name: String,
    pub friendly_name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ConfigField {
    fn key(name: &str, friendly_name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            friendly_name: friendly_name.to_string(),
            field_type: FieldType::Password,
            size: Some(225),
            default: Some(String::new()),
            description: Some(description.to_string()),
        }
    }
}

/// Settings shown when a merchant activates the gateway.
///
/// `callback_url` pre-fills the callback field so merchants rarely have to
/// touch it.
pub fn config_fields(callback_url: &str) -> Vec<ConfigField> {
    vec![
        ConfigField {
            name: "FriendlyName".to_string(),
            friendly_name: "LazerPay (Crypto)".to_string(),
            field_type: FieldType::System,
            size: None,
            default: None,
            description: None,
        },
        ConfigField::key(
            "testNetSecretKey",
            "Testnet Secret Key",
            "Enter testnet secret key",
        ),
        ConfigField::key(
            "testNetPublicKey",
            "Testnet Public Key",
            "Enter testnet public key",
        ),
        ConfigField::key(
            "mainNetSecretKey",
            "Mainnet Secret Key",
            "Enter mainnet secret key",
        ),
        ConfigField::key(
            "mainNetPublicKey",
            "Mainnet Public Key",
            "Enter mainnet public key",
        ),
        ConfigField {
            name: "callbackUrl".to_string(),
            friendly_name: "Callback URL".to_string(),
            field_type: FieldType::Text,
            size: None,
            default: Some(callback_url.to_string()),
            description: Some("The URL LazerPay redirects to after checkout".to_string()),
        },
        ConfigField {
            name: "testMode".to_string(),
            friendly_name: "Test Mode".to_string(),
            field_type: FieldType::YesNo,
            size: None,
            default: None,
            description: Some("Tick to enable test mode".to_string()),
        },
    ]
}
