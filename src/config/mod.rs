use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "bday-dispatch")]
#[command(about = "Sends scheduled birthday SMS messages from a CSV contact list")]
pub struct CliConfig {
    /// Contact CSV file; the first row is a header
    #[arg(long, env = "DATASET")]
    pub contacts_file: String,

    #[arg(long, env = "TWILIO_ACCOUNT_SID")]
    pub account_sid: String,

    #[arg(long, env = "TWILIO_AUTH_TOKEN", hide_env_values = true)]
    pub auth_token: String,

    /// Sender number, 10 digits without country code
    #[arg(long, env = "TWILIO_PHONE_NUMBER")]
    pub from_number: String,

    /// Hour of day (0-23) at which messages go out
    #[arg(long, env = "SEND_HOUR")]
    pub send_hour: u32,

    /// Minute (0-59) from which messages go out within the send hour
    #[arg(long, env = "SEND_MINUTE")]
    pub send_minute: u32,

    /// Seconds between due-condition checks
    #[arg(long, default_value = "60")]
    pub poll_interval_secs: u64,

    /// Messaging API base URL (overridable for testing)
    #[arg(long, default_value = "https://api.twilio.com")]
    pub api_base: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("contacts_file", &self.contacts_file)?;
        validation::validate_non_empty_string("account_sid", &self.account_sid)?;
        validation::validate_non_empty_string("auth_token", &self.auth_token)?;
        validation::validate_phone_number("from_number", &self.from_number)?;
        validation::validate_range("send_hour", self.send_hour, 0, 23)?;
        validation::validate_range("send_minute", self.send_minute, 0, 59)?;
        validation::validate_positive_number("poll_interval_secs", self.poll_interval_secs, 1)?;
        validation::validate_url("api_base", &self.api_base)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> CliConfig {
        CliConfig {
            contacts_file: "contacts.csv".to_string(),
            account_sid: "AC123".to_string(),
            auth_token: "token".to_string(),
            from_number: "5550009999".to_string(),
            send_hour: 10,
            send_minute: 30,
            poll_interval_secs: 60,
            api_base: "https://api.twilio.com".to_string(),
            verbose: false,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_send_time_rejected() {
        let mut config = valid_config();
        config.send_hour = 24;
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.send_minute = 60;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_credentials_rejected() {
        let mut config = valid_config();
        config.account_sid = String::new();
        assert!(config.validate().is_err());

        let mut config = valid_config();
        config.auth_token = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_from_number_rejected() {
        let mut config = valid_config();
        config.from_number = "555".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_api_base_rejected() {
        let mut config = valid_config();
        config.api_base = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_poll_interval_rejected() {
        let mut config = valid_config();
        config.poll_interval_secs = 0;
        assert!(config.validate().is_err());
    }
}
