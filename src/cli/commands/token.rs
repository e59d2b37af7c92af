use serde_json::json;
use uuid::Uuid;

use crate::auth::TokenService;
use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::config::AppConfig;

/// Signs offline; the account is not looked up.
pub fn handle(config: AppConfig, account_id: Uuid, output_format: OutputFormat) -> anyhow::Result<()> {
    let tokens = TokenService::new(&config.security)?;
    let issued = tokens.generate_token(account_id)?;

    match output_format {
        OutputFormat::Text => {
            println!("{}", issued.token);
            Ok(())
        }
        OutputFormat::Json => output_success(
            output_format,
            "Token issued",
            Some(json!({
                "token": issued.token,
                "expiresAt": issued.expires_at,
                "accountId": account_id,
            })),
        ),
    }
}
