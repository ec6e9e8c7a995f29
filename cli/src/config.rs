use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use pool_commitment::{Address, Scalar, TokenSubId, TokenType};
use pool_logic::FeeKind;

#[derive(Clone, Eq, PartialEq, Parser)]
pub(super) struct CliConfig {
    /// Path to the file containing the governed pool state.
    #[clap(long, default_value = "~/.pool-state.json", value_parser = parsing::parse_path)]
    pub state_file: PathBuf,

    /// Logging configuration.
    #[clap(short = 'l', value_enum, default_value = "text")]
    pub logging_format: LoggingFormat,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Clone, Eq, PartialEq, Debug, Subcommand)]
pub(super) enum Command {
    #[clap(flatten)]
    Compute(ComputeCommand),
    #[clap(flatten)]
    StateRead(StateReadCommand),
    #[clap(flatten)]
    StateWrite(StateWriteCommand),
}

/// Commands that do not touch the state file.
#[derive(Clone, Eq, PartialEq, Debug, Subcommand)]
pub(super) enum ComputeCommand {
    HashCommitment(HashCommitmentCmd),
    NotePublicKey(NotePublicKeyCmd),
    GetFee(GetFeeCmd),
}

#[derive(Clone, Eq, PartialEq, Debug, Subcommand)]
pub(super) enum StateReadCommand {
    Quote(QuoteCmd),
    PrintState,
}

#[derive(Clone, Eq, PartialEq, Debug, Subcommand)]
pub(super) enum StateWriteCommand {
    Initialize(InitializeCmd),
    ChangeTreasury(ChangeTreasuryCmd),
    ChangeFee(ChangeFeeCmd),
}

#[derive(Clone, Eq, PartialEq, Debug, ValueEnum)]
pub(super) enum LoggingFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Eq, PartialEq, Debug, ValueEnum)]
pub(super) enum TokenStandard {
    Erc20,
    Erc721,
    Erc1155,
}

impl From<TokenStandard> for TokenType {
    fn from(standard: TokenStandard) -> Self {
        match standard {
            TokenStandard::Erc20 => TokenType::Erc20,
            TokenStandard::Erc721 => TokenType::Erc721,
            TokenStandard::Erc1155 => TokenType::Erc1155,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug, Args)]
pub(super) struct HashCommitmentCmd {
    /// Note public key, as a hex field element.
    #[clap(long, value_parser = parsing::parse_scalar)]
    pub npk: Scalar,

    #[clap(long, value_enum, default_value = "erc20")]
    pub token_type: TokenStandard,

    #[clap(long)]
    pub token_address: Address,

    /// Item id for ERC721 / ERC1155 tokens. Hex with `0x` prefix, decimal otherwise.
    #[clap(long, default_value = "0")]
    pub token_sub_id: TokenSubId,

    /// Note value. Must fit in 120 bits.
    #[clap(long)]
    pub value: u128,
}

#[derive(Clone, Eq, PartialEq, Debug, Args)]
pub(super) struct NotePublicKeyCmd {
    /// Recipient's master public key.
    #[clap(long, value_parser = parsing::parse_scalar)]
    pub master_public_key: Scalar,

    /// Per-note randomness chosen by the sender.
    #[clap(long, value_parser = parsing::parse_scalar)]
    pub random: Scalar,
}

#[derive(Clone, Eq, PartialEq, Debug, Args)]
pub(super) struct GetFeeCmd {
    pub amount: u128,

    /// Fee rate in basis points.
    #[clap(long)]
    pub fee_bp: u128,

    /// Treat `amount` as already containing the fee.
    #[clap(long)]
    pub inclusive: bool,
}

#[derive(Clone, Eq, PartialEq, Debug, Args)]
pub(super) struct QuoteCmd {
    /// Which configured rate to apply: `deposit`, `withdraw` or `nft`.
    pub kind: FeeKind,

    pub amount: u128,

    #[clap(long)]
    pub inclusive: bool,
}

#[derive(Clone, Eq, PartialEq, Debug, Args)]
pub(super) struct InitializeCmd {
    #[clap(long)]
    pub treasury: Address,

    #[clap(long)]
    pub administrator: Address,

    #[clap(long, default_value = "0")]
    pub deposit_fee: u128,

    #[clap(long, default_value = "0")]
    pub withdraw_fee: u128,

    #[clap(long, default_value = "0")]
    pub nft_fee: u128,
}

#[derive(Clone, Eq, PartialEq, Debug, Args)]
pub(super) struct ChangeTreasuryCmd {
    /// Account on whose behalf the change is made.
    #[clap(long)]
    pub caller: Address,

    pub treasury: Address,
}

#[derive(Clone, Eq, PartialEq, Debug, Args)]
pub(super) struct ChangeFeeCmd {
    /// Account on whose behalf the change is made.
    #[clap(long)]
    pub caller: Address,

    #[clap(long)]
    pub deposit_fee: u128,

    #[clap(long)]
    pub withdraw_fee: u128,

    #[clap(long)]
    pub nft_fee: u128,
}

mod parsing {
    use std::{path::PathBuf, str::FromStr};

    use anyhow::{anyhow, Result};
    use pool_commitment::{scalar::scalar_from_hex, Scalar};

    pub fn parse_path(path: &str) -> Result<PathBuf> {
        let expanded_path =
            shellexpand::full(path).map_err(|e| anyhow!("Failed to expand path: {e:?}"))?;
        PathBuf::from_str(expanded_path.as_ref())
            .map_err(|e| anyhow!("Failed to interpret path: {e:?}"))
    }

    pub fn parse_scalar(scalar: &str) -> Result<Scalar> {
        scalar_from_hex(scalar).map_err(|e| anyhow!("Failed to parse field element: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    const ALICE: &str = "0x00000000000000000000000000000000000a11ce";

    fn parse(args: &[&str]) -> Command {
        CliConfig::try_parse_from(std::iter::once("pool-cli").chain(args.iter().copied()))
            .expect("arguments should parse")
            .command
    }

    #[test]
    fn verify_cli() {
        CliConfig::command().debug_assert()
    }

    #[test]
    fn hash_commitment_defaults_to_erc20() {
        let command = parse(&[
            "hash-commitment",
            "--npk",
            "0x01",
            "--token-address",
            ALICE,
            "--value",
            "1000",
        ]);
        let Command::Compute(ComputeCommand::HashCommitment(cmd)) = command else {
            panic!("expected `hash-commitment`");
        };
        assert_eq!(cmd.token_type, TokenStandard::Erc20);
        assert_eq!(cmd.token_sub_id, TokenSubId::default());
        assert_eq!(cmd.npk, Scalar::from(1u64));
    }

    #[test]
    fn quote_accepts_fee_kinds() {
        let command = parse(&["quote", "nft", "1000", "--inclusive"]);
        assert_eq!(
            command,
            Command::StateRead(StateReadCommand::Quote(QuoteCmd {
                kind: FeeKind::Nft,
                amount: 1000,
                inclusive: true,
            }))
        );
    }

    #[test]
    fn change_fee_requires_caller() {
        assert!(CliConfig::try_parse_from([
            "pool-cli",
            "change-fee",
            "--deposit-fee",
            "1",
            "--withdraw-fee",
            "2",
            "--nft-fee",
            "3",
        ])
        .is_err());
    }

    #[test]
    fn malformed_inputs_are_rejected() {
        assert!(CliConfig::try_parse_from([
            "pool-cli",
            "change-treasury",
            "--caller",
            ALICE,
            "0x1234",
        ])
        .is_err());
        assert!(CliConfig::try_parse_from([
            "pool-cli",
            "note-public-key",
            "--master-public-key",
            "zz",
            "--random",
            "0x01",
        ])
        .is_err());
    }
}
