//! channel-node: local host for bilateral telemetry state channels.
//!
//! Mutating commands print one JSON receipt per line on stdout. Logs go to
//! stderr.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use channel_node::{ChannelNode, NodeConfig, NodeError};
use channel_telemetry::{init_tracing, log_channel_event, TelemetryConfig};
use sc_01_canonical_encoding::{ClosePayload, SigningScheme, StateVector};
use sc_02_signature_verification::{AttestationSigner, EcdsaSignature};
use sc_03_state_channels::CloseRequest;
use shared_types::{parse_u256, Address, ChannelId, U256};

/// Bilateral telemetry state channels on a local ledger
#[derive(Parser, Debug)]
#[command(name = "channel-node", version)]
#[command(about = "Open, join and cooperatively close telemetry state channels")]
struct Cli {
    /// Ledger file (overrides SC_LEDGER_PATH)
    #[arg(long, global = true)]
    ledger: Option<PathBuf>,

    /// Digest scheme attestations are signed under: personal or raw
    #[arg(long, global = true)]
    scheme: Option<SigningScheme>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open a new channel as party A
    Open {
        /// Calling account
        #[arg(long)]
        from: Address,
    },

    /// Join an open channel as party B
    Join {
        /// Calling account
        #[arg(long)]
        from: Address,
        /// Channel to join
        channel: ChannelId,
    },

    /// Submit a closing state attested by the counterparty
    Close {
        /// Calling account
        #[arg(long)]
        from: Address,
        /// Counterparty's 65-byte signature (hex)
        #[arg(long)]
        signature: EcdsaSignature,
        /// Channel to close
        channel: ChannelId,
        #[command(flatten)]
        state: StateArgs,
    },

    /// Print one channel
    Show {
        /// Channel to print
        channel: ChannelId,
    },

    /// Print every channel and the current height
    List,

    /// Attest to a counterparty's closing state
    Sign {
        /// Secret key (hex)
        #[arg(long, env = "SC_SECRET_KEY", hide_env_values = true)]
        key: String,
        /// Channel being closed
        #[arg(long)]
        channel: ChannelId,
        /// Party who will submit the close
        #[arg(long)]
        signer: Address,
        #[command(flatten)]
        state: StateArgs,
    },

    /// Print the address of a secret key
    Address {
        /// Secret key (hex)
        #[arg(long, env = "SC_SECRET_KEY", hide_env_values = true)]
        key: String,
    },

    /// Print the canonical encoding and digests of a closing payload
    Digest {
        /// Channel being closed
        #[arg(long)]
        channel: ChannelId,
        /// Party who will submit the close
        #[arg(long)]
        signer: Address,
        #[command(flatten)]
        state: StateArgs,
    },
}

/// Closing state vector.
#[derive(Args, Debug, Clone)]
struct StateArgs {
    /// Declared status (3 = released)
    #[arg(long, default_value_t = 3)]
    status: u8,
    /// Off-ledger sequence number
    #[arg(long, value_parser = parse_u256)]
    nonce: U256,
    /// Latitude, fixed-point degrees
    #[arg(long, allow_hyphen_values = true)]
    latitude: i32,
    /// Longitude, fixed-point degrees
    #[arg(long, allow_hyphen_values = true)]
    longitude: i32,
    /// Heading, degrees
    #[arg(long)]
    direction: u16,
    /// Speed
    #[arg(long)]
    speed: u16,
    /// Acceleration
    #[arg(long, allow_hyphen_values = true)]
    acceleration: i8,
}

impl From<StateArgs> for StateVector {
    fn from(args: StateArgs) -> Self {
        StateVector {
            status: args.status,
            nonce: args.nonce,
            latitude: args.latitude,
            longitude: args.longitude,
            direction: args.direction,
            speed: args.speed,
            acceleration: args.acceleration,
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut telemetry = TelemetryConfig::from_env();
    match cli.verbose {
        0 => {}
        1 => telemetry = telemetry.with_log_level("debug"),
        _ => telemetry = telemetry.with_log_level("trace"),
    }
    let _guard = match init_tracing(&telemetry) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: logging disabled: {e}");
            None
        }
    };

    if let Err(err) = run(cli).await {
        match err.downcast_ref::<NodeError>() {
            Some(NodeError::Channel(rejection)) => {
                eprintln!("reverted: {}", rejection.reason());
                eprintln!("  {rejection}");
            }
            _ => eprintln!("Error: {err:#}"),
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = NodeConfig::from_env()?;
    if let Some(ledger) = cli.ledger {
        config.ledger_path = ledger;
    }
    if let Some(scheme) = cli.scheme {
        config.signing_scheme = scheme;
    }

    match cli.command {
        Command::Open { from } => {
            let node = ChannelNode::new(config)?;
            let receipt = node.open(from).await?;
            log_channel_event!(info, "Channel opened", receipt.value, block = receipt.block);
            println!("{}", serde_json::to_string(&receipt)?);
        }
        Command::Join { from, channel } => {
            let node = ChannelNode::new(config)?;
            let receipt = node.join(from, channel).await?;
            log_channel_event!(info, "Channel joined", channel, block = receipt.block);
            println!("{}", serde_json::to_string(&receipt)?);
        }
        Command::Close {
            from,
            signature,
            channel,
            state,
        } => {
            let node = ChannelNode::new(config)?;
            let request = CloseRequest::new(channel, signature, state.into());
            let receipt = node.close(from, request).await?;
            log_channel_event!(
                info,
                "Close accepted",
                channel,
                block = receipt.block,
                closed = receipt.value.is_closed()
            );
            println!("{}", serde_json::to_string(&receipt)?);
        }
        Command::Show { channel } => {
            let node = ChannelNode::new(config)?;
            println!("{}", serde_json::to_string_pretty(&node.channel(channel)?)?);
        }
        Command::List => {
            let node = ChannelNode::new(config)?;
            let listing = serde_json::json!({
                "height": node.height()?,
                "channels": node.channels()?,
            });
            println!("{}", serde_json::to_string_pretty(&listing)?);
        }
        Command::Sign {
            key,
            channel,
            signer,
            state,
        } => {
            let attester = AttestationSigner::from_secret_hex(&key).context("invalid secret key")?;
            let payload = ClosePayload::new(channel, signer, state.into());
            let signature = attester.sign_payload(&payload, config.signing_scheme)?;
            println!("{signature}");
        }
        Command::Address { key } => {
            let attester = AttestationSigner::from_secret_hex(&key).context("invalid secret key")?;
            println!("{}", attester.address());
        }
        Command::Digest {
            channel,
            signer,
            state,
        } => {
            let payload = ClosePayload::new(channel, signer, state.into());
            let hash = payload.payload_hash();
            let report = serde_json::json!({
                "encoding": format!("0x{}", hex::encode(payload.encode())),
                "payload_hash": format!("0x{}", hex::encode(hash)),
                "personal_digest": format!(
                    "0x{}",
                    hex::encode(SigningScheme::PersonalSign.digest(&hash))
                ),
                "raw_digest": format!("0x{}", hex::encode(SigningScheme::RawDigest.digest(&hash))),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
