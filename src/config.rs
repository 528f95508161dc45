use std::env;

use dotenvy::dotenv;

/// Engine-wide knobs. `Default` suits embedding; `from_env` mirrors how the
/// rest of the deployment is configured.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Hours credited for a day-off record that carries no `paid_hours`.
    pub day_off_default_hours: f64,
    /// Decimal places monetary outputs are rounded to.
    pub money_decimals: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            day_off_default_hours: 0.0,
            money_decimals: 2,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            day_off_default_hours: env::var("HRM_DAY_OFF_DEFAULT_HOURS")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .unwrap(),
            money_decimals: env::var("HRM_MONEY_DECIMALS")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .unwrap(),
        }
    }
}
