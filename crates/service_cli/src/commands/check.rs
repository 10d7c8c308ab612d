//! Check command implementation
//!
//! Validates the configuration and prints the effective settings.

use tracing::info;

use crate::config::RenewalConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &RenewalConfig) -> Result<()> {
    config.validate()?;
    let window = config.window()?;

    info!("Configuration is valid");

    println!("Window:          {}", window);
    println!("Product line:    {}", config.product);
    println!("Date style:      {}", config.output_date_style().pattern());
    println!("Delimiter:       {:?}", config.delimiter);
    println!("Issue date col:  {}", config.columns.issue_date);
    println!("Payment day col: {}", config.columns.payment_day);
    println!("Frequency col:   {}", config.columns.frequency);
    println!(
        "Due-date grid:   {}",
        config
            .product
            .grid()
            .iter()
            .map(|(frequency, capacity)| format!("{} x{}", frequency.column_label(), capacity))
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn test_default_config_checks() {
        assert!(run(&RenewalConfig::default()).is_ok());
    }

    #[test]
    fn test_invalid_config_fails() {
        let config = RenewalConfig {
            log_level: "loud".to_string(),
            ..RenewalConfig::default()
        };
        assert!(matches!(run(&config), Err(CliError::Config(_))));
    }
}
