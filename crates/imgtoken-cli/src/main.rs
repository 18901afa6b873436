use imgtoken_crypto::Query;
use tracing_subscriber::EnvFilter;

const REQUEST_PATH: &str = "/?width=100&height=200&blur=3";
const TOKEN_SECRET_ENV: &str = "TOKEN_SECRET";

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let query = Query::new(REQUEST_PATH);
    let secret = match std::env::var(TOKEN_SECRET_ENV) {
        Ok(secret) => secret,
        Err(_) => {
            tracing::warn!("{TOKEN_SECRET_ENV} is not set, signing with an empty secret");
            String::new()
        }
    };

    println!("{}", query.token(&secret));
    Ok(())
}

fn init_logging() -> anyhow::Result<()> {
    let filter = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| "warn".to_string());
    // Logs go to stderr; stdout carries only the token.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}
