//! `agid` — command-line access to an AGIdentity service.
//!
//! Run with no subcommand to walk through every API call once, printing a
//! line per step:
//!
//! ```text
//! $ agid
//! Identity: 3b6a27bcceb6a42d62a3a8d02a6f0d73...
//! Signed: 9f1c...
//! ```
//!
//! The demo talks to `http://localhost:3000` unless `--api-url` is given.
//! Setting `AGID_API_URL` in the environment has the same effect, so a
//! plain `agid` may reach a different service than the default; the first
//! line of output names the URL actually used. `AGID_TIMEOUT_SECS` likewise
//! stands in for `--timeout-secs`.
//!
//! Each call is also available on its own:
//!
//! - **`identity`**, **`balance`** — no arguments.
//! - **`sign`** — sign a message under a protocol tag.
//! - **`encrypt`** / **`decrypt`** — seal or open data under a
//!   protocol / key id / counterparty context.
//!
//! Subcommands print the service's response as pretty JSON. Any failure
//! prints the error chain to stderr and exits 1.

use std::error::Error;
use std::process;
use std::time::Duration;

use agidentity_client::{
    ClientConfig, CryptoContext, IdentityServiceClient, SignParams, DEFAULT_BASE_URL,
};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

/// Message signed during the demo run.
const DEMO_MESSAGE: &str = "I am a Rust agent with onchain identity";

/// Secret sealed and reopened during the demo run.
const DEMO_SECRET: &str = "My secret memory";

/// agid — AGIdentity service client
///
/// Ask a running identity service for the agent's key, signatures,
/// encryption, and wallet balance.
#[derive(Parser)]
#[command(name = "agid", version, about, long_about = None)]
struct Cli {
    /// Base URL of the identity service.
    #[arg(long, env = "AGID_API_URL", default_value = DEFAULT_BASE_URL, global = true)]
    api_url: String,

    /// Per-request timeout in seconds.
    #[arg(long, env = "AGID_TIMEOUT_SECS", default_value_t = 5, global = true)]
    timeout_secs: u64,

    /// Omit to run the full demo sequence.
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print the agent's public identity.
    Identity,

    /// Sign a message with the agent's key.
    Sign {
        /// Text to sign.
        message: String,

        /// Protocol tag the signature is bound to.
        #[arg(long, default_value = SignParams::DEFAULT_PROTOCOL)]
        protocol: String,
    },

    /// Encrypt data for later retrieval.
    Encrypt {
        /// Plaintext to encrypt.
        data: String,

        #[command(flatten)]
        context: ContextArgs,
    },

    /// Decrypt a ciphertext produced by `encrypt`.
    ///
    /// The context flags must match the ones used to encrypt.
    Decrypt {
        /// Ciphertext exactly as returned by `encrypt`.
        ciphertext: String,

        #[command(flatten)]
        context: ContextArgs,
    },

    /// Print the wallet balance in satoshis.
    Balance,
}

#[derive(Args)]
struct ContextArgs {
    /// Protocol tag selecting the logical context.
    #[arg(long, default_value = CryptoContext::DEFAULT_PROTOCOL)]
    protocol: String,

    /// Which derived key to use.
    #[arg(long, default_value = CryptoContext::DEFAULT_KEY_ID)]
    key_id: String,

    /// Other party of the key exchange; `self` for self-encryption.
    #[arg(long, default_value = CryptoContext::SELF_COUNTERPARTY)]
    counterparty: String,
}

impl From<ContextArgs> for CryptoContext {
    fn from(args: ContextArgs) -> Self {
        CryptoContext::new(args.protocol, args.key_id, args.counterparty)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let client = build_client(&cli.api_url, cli.timeout_secs).unwrap_or_else(|e| fatal(&e));

    let result = match cli.command {
        None => run_demo(&client),
        Some(Command::Identity) => client.get_identity().map(|r| print_json(&r)),
        Some(Command::Sign { message, protocol }) => client
            .sign(&message, &SignParams::new(protocol))
            .map(|r| print_json(&r)),
        Some(Command::Encrypt { data, context }) => client
            .encrypt(&data, &context.into())
            .map(|r| print_json(&r)),
        Some(Command::Decrypt {
            ciphertext,
            context,
        }) => client
            .decrypt(&ciphertext, &context.into())
            .map(|r| print_json(&r)),
        Some(Command::Balance) => client.check_balance().map(|r| print_json(&r)),
    };

    if let Err(e) = result {
        fatal(&e);
    }
}

fn build_client(
    api_url: &str,
    timeout_secs: u64,
) -> agidentity_client::Result<IdentityServiceClient> {
    let config = ClientConfig::new(api_url).with_timeout(Duration::from_secs(timeout_secs));
    IdentityServiceClient::new(config)
}

/// Call every endpoint once, stopping at the first failure.
fn run_demo(client: &IdentityServiceClient) -> agidentity_client::Result<()> {
    println!("Agent identity demo against {}\n", client.config().base_url);

    let identity = client.get_identity()?;
    println!("Identity: {}", truncate(&identity.public_key, 32));

    let sig = client.sign_default(DEMO_MESSAGE)?;
    println!("Signed: {}", truncate(&sig.signature, 64));

    let encrypted = client.encrypt_default(DEMO_SECRET)?;
    println!("Encrypted: {}", truncate(&encrypted.ciphertext, 64));

    let decrypted = client.decrypt_default(&encrypted.ciphertext)?;
    println!("Decrypted: {}", decrypted.plaintext);

    let balance = client.check_balance()?;
    println!("Balance: {} satoshis\n", balance.balance);

    println!("All calls succeeded.");
    Ok(())
}

/// First `max` characters of `s`, with `...` appended when anything was cut.
fn truncate(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(e) => fatal(&e),
    }
}

/// Print an error and its causes to stderr and exit with code 1.
fn fatal(err: &dyn Error) -> ! {
    eprintln!("agid: {err}");
    let mut source = err.source();
    while let Some(cause) = source {
        eprintln!("  caused by: {cause}");
        source = cause.source();
    }
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_strings_untouched() {
        assert_eq!(truncate("02abc", 32), "02abc");
        assert_eq!(truncate("", 4), "");
    }

    #[test]
    fn truncate_cuts_and_marks() {
        assert_eq!(truncate("abcdef", 4), "abcd...");
        assert_eq!(truncate("abcd", 4), "abcd");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate("ééééé", 2), "éé...");
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["agid"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.timeout_secs, 5);
    }

    #[test]
    fn decrypt_context_flags() {
        let cli = Cli::try_parse_from([
            "agid",
            "decrypt",
            "abcd",
            "--key-id",
            "journal",
            "--counterparty",
            "02peer",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Decrypt {
                ciphertext,
                context,
            }) => {
                assert_eq!(ciphertext, "abcd");
                let ctx: CryptoContext = context.into();
                assert_eq!(ctx.protocol, "agent memory");
                assert_eq!(ctx.key_id, "journal");
                assert_eq!(ctx.counterparty, "02peer");
            }
            _ => panic!("expected decrypt subcommand"),
        }
    }

    #[test]
    fn api_url_flag_overrides_default() {
        let cli = Cli::try_parse_from(["agid", "--api-url", "http://agent.local:8080/"]).unwrap();
        let client = build_client(&cli.api_url, cli.timeout_secs).unwrap();
        assert_eq!(client.config().base_url, "http://agent.local:8080");
    }

    #[test]
    fn huge_timeout_is_rejected_before_any_call() {
        let max = u64::MAX.to_string();
        let cli = Cli::try_parse_from(["agid", "--timeout-secs", max.as_str(), "balance"]).unwrap();
        let err = build_client(&cli.api_url, cli.timeout_secs).unwrap_err();
        assert!(matches!(err, agidentity_client::ClientError::InvalidConfig(_)));
    }
}
