use std::{env, fs};

use color_eyre::eyre::{eyre, Result, WrapErr};
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;
use vdrive_client::{ClientConfig, HttpPricingRuleApi, PricingRuleEditor};
use vdrive_core::models::pricing_rule::PricingRuleForm;

const USAGE: &str = "usage: pricing-sync export <rule-id> [draft.json] | pricing-sync save <draft.json>";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ClientConfig::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args: Vec<String> = env::args().skip(1).collect();
    let editor = PricingRuleEditor::new(HttpPricingRuleApi::new(config)?);

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        ["export", id, rest @ ..] if rest.len() <= 1 => {
            let id: i64 = id.parse().wrap_err("Rule id must be a number")?;
            let form = editor.load(id).await.inspect_err(|err| {
                error!("{}", err.user_message());
            })?;
            let draft = serde_json::to_string_pretty(&form)?;

            match rest.first() {
                Some(path) => {
                    fs::write(path, draft)
                        .wrap_err_with(|| format!("Failed to write draft to {}", path))?;
                    info!("Wrote pricing rule {} to {}", id, path);
                }
                None => println!("{}", draft),
            }
        }
        ["save", path] => {
            let draft = fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read draft from {}", path))?;
            let form: PricingRuleForm =
                serde_json::from_str(&draft).wrap_err("Draft is not a valid pricing rule")?;

            editor.save(&form).await.inspect_err(|err| {
                error!("{}", err.user_message());
            })?;
        }
        _ => return Err(eyre!(USAGE)),
    }

    Ok(())
}
