use anyhow::{Result, anyhow};

use crate::config::Config;

/// Validates the configuration and prints a summary without secrets.
pub fn check_config(config: &Config) -> Result<()> {
    config.validate().map_err(|e| anyhow!(e))?;

    if !config.email.has_credential() {
        tracing::warn!("Email credential not set, contact submissions will be rejected");
    }

    println!("{}", summary(config));

    Ok(())
}

fn summary(config: &Config) -> String {
    let credential = if config.email.has_credential() {
        "set"
    } else {
        "missing"
    };

    format!(
        "Configuration is valid\n\
         \n\
         environment          {}\n\
         server               {}:{}\n\
         log level            {}\n\
         smtp host            {}\n\
         sender               {}\n\
         recipient            {}\n\
         credential           {}\n\
         accept invalid certs {}",
        config.environment,
        config.server.host,
        config.server.port,
        config.observability.log_level,
        config.email.smtp_host,
        config.email.sender,
        config.email.recipient(),
        credential,
        config.email.accept_invalid_certs,
    )
}
