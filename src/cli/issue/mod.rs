//! Issue command - signs a single token without starting the server

use std::path::PathBuf;

use anyhow::Context;
use clap::Args;

use crate::config::AppConfig;
use crate::domain::Username;
use crate::infrastructure::auth::TokenIssuer;

/// Arguments for the issue command
#[derive(Args, Clone, Debug)]
pub struct IssueArgs {
    /// Token subject, lowercase letters only
    pub username: String,

    /// Private key file (overrides config)
    #[arg(long)]
    pub private_key: Option<PathBuf>,
}

/// Print a signed token for the username to stdout
pub async fn run(args: IssueArgs) -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    let token = issue_token(config, &args).await?;
    println!("{}", token);

    Ok(())
}

async fn issue_token(mut config: AppConfig, args: &IssueArgs) -> anyhow::Result<String> {
    if let Some(path) = &args.private_key {
        config.signing.private_key_path = path.clone();
    }
    config.validate()?;

    let username = Username::parse(&args.username)
        .with_context(|| format!("cannot issue a token for '{}'", args.username))?;

    let issuer = crate::create_token_issuer(&config.signing);
    let issued = issuer.issue(&username).await?;

    Ok(issued.token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_key() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/private_key.pem")
    }

    fn args(username: &str, private_key: Option<PathBuf>) -> IssueArgs {
        IssueArgs {
            username: username.to_string(),
            private_key,
        }
    }

    #[tokio::test]
    async fn test_issue_with_key_override() {
        let token = issue_token(AppConfig::default(), &args("alice", Some(fixture_key())))
            .await
            .unwrap();

        let header = jsonwebtoken::decode_header(&token).unwrap();
        assert_eq!(header.alg, jsonwebtoken::Algorithm::RS256);
    }

    #[tokio::test]
    async fn test_issue_rejects_bad_username() {
        let err = issue_token(AppConfig::default(), &args("Alice", Some(fixture_key())))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Alice"));
    }

    #[tokio::test]
    async fn test_issue_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("daf-private");

        let result = issue_token(AppConfig::default(), &args("alice", Some(missing))).await;
        assert!(result.is_err());
    }
}
