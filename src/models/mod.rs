pub mod config;

pub use config::{
    CompressionSetting, IndexPolicySetting, ScanOrderSetting, Settings, CONFIG_ENV_VAR,
};
