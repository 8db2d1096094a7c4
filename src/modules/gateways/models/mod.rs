pub mod gateway_metadata;

pub use gateway_metadata::{config_fields, ConfigField, FieldType, GatewayMetadata};
