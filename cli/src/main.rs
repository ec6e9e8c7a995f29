use std::{env, io};

use anyhow::{anyhow, Result};
use clap::Parser;
use config::LoggingFormat;
use pool_logic::PoolLogic;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ComputeCommand::{GetFee, HashCommitment, NotePublicKey};
use StateReadCommand::{PrintState, Quote};
use StateWriteCommand::{ChangeFee, ChangeTreasury, Initialize};

use crate::{
    commitment::{do_hash_commitment, do_note_public_key},
    config::{
        CliConfig,
        Command::{Compute, StateRead, StateWrite},
        ComputeCommand, StateReadCommand, StateWriteCommand,
    },
    governance::{do_change_fee, do_change_treasury, do_get_fee, do_initialize, do_quote},
    state_file::{get_pool_logic, save_pool_state},
};

mod commitment;
mod config;
mod governance;
mod state_file;

fn perform_compute_action(command: ComputeCommand) -> Result<()> {
    match command {
        HashCommitment(cmd) => do_hash_commitment(cmd),
        NotePublicKey(cmd) => do_note_public_key(cmd),
        GetFee(cmd) => do_get_fee(cmd),
    }
}

fn perform_state_read_action(logic: &PoolLogic, command: StateReadCommand) -> Result<()> {
    match command {
        Quote(cmd) => do_quote(logic, cmd)?,
        PrintState => {
            let state = logic.state();
            info!(
                initialized = logic.is_initialized(),
                treasury = %state.treasury,
                administrator = ?state.administrator,
                deposit_fee = state.fees.deposit,
                withdraw_fee = state.fees.withdraw,
                nft_fee = state.fees.nft,
                "Pool state"
            )
        }
    };
    Ok(())
}

fn perform_state_write_action(logic: &PoolLogic, command: StateWriteCommand) -> Result<()> {
    match command {
        Initialize(cmd) => do_initialize(logic, cmd),
        ChangeTreasury(cmd) => do_change_treasury(logic, cmd),
        ChangeFee(cmd) => do_change_fee(logic, cmd),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli_config: CliConfig = CliConfig::parse();

    init_logging(cli_config.logging_format)?;

    match cli_config.command {
        Compute(cmd) => perform_compute_action(cmd)?,
        StateRead(cmd) => {
            let logic = get_pool_logic(&cli_config.state_file)?;
            perform_state_read_action(&logic, cmd)?
        }
        StateWrite(cmd) => {
            let logic = get_pool_logic(&cli_config.state_file)?;
            perform_state_write_action(&logic, cmd)?;
            save_pool_state(&logic.state(), &cli_config.state_file)?
        }
    }

    Ok(())
}

const LOG_CONFIGURATION_ENVVAR: &str = "RUST_LOG";

fn init_logging(format: LoggingFormat) -> Result<()> {
    // Dependency crates stay at `warn` unless `RUST_LOG` says otherwise.
    let filter = EnvFilter::new(
        env::var(LOG_CONFIGURATION_ENVVAR)
            .as_deref()
            .unwrap_or("warn,pool_cli=info,pool_logic=info"),
    );

    match format {
        LoggingFormat::Text => tracing_subscriber::fmt()
            .with_writer(io::stdout)
            .with_target(false)
            .with_env_filter(filter)
            .try_init(),
        LoggingFormat::Json => tracing_subscriber::fmt()
            .with_writer(io::stdout)
            .with_target(false)
            .with_env_filter(filter)
            .json()
            .try_init(),
    }
    .map_err(|err| anyhow!(err))
}
