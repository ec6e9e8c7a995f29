use anyhow::Result;
use pool_logic::{get_fee, PoolLogic};
use tracing::info;

use crate::config::{ChangeFeeCmd, ChangeTreasuryCmd, GetFeeCmd, InitializeCmd, QuoteCmd};

pub fn do_get_fee(cmd: GetFeeCmd) -> Result<()> {
    let (base, fee) = get_fee(cmd.amount, cmd.inclusive, cmd.fee_bp)?;
    info!(base, fee, "Fee computed");
    Ok(())
}

pub fn do_quote(logic: &PoolLogic, cmd: QuoteCmd) -> Result<()> {
    let (base, fee) = logic.quote(cmd.kind, cmd.amount, cmd.inclusive)?;
    info!(kind = %cmd.kind, base, fee, "Fee quoted");
    Ok(())
}

pub fn do_initialize(logic: &PoolLogic, cmd: InitializeCmd) -> Result<()> {
    logic.initialize(
        cmd.treasury,
        cmd.deposit_fee,
        cmd.withdraw_fee,
        cmd.nft_fee,
        cmd.administrator,
    )?;
    Ok(())
}

pub fn do_change_treasury(logic: &PoolLogic, cmd: ChangeTreasuryCmd) -> Result<()> {
    logic.change_treasury(&cmd.caller, cmd.treasury)?;
    Ok(())
}

pub fn do_change_fee(logic: &PoolLogic, cmd: ChangeFeeCmd) -> Result<()> {
    logic.change_fee(&cmd.caller, cmd.deposit_fee, cmd.withdraw_fee, cmd.nft_fee)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use pool_logic::{Address, LogicError};

    use super::*;

    const ADMIN: Address = Address::new([0xad; 20]);

    #[test]
    fn commands_drive_the_pool() {
        let logic = PoolLogic::new();
        do_initialize(
            &logic,
            InitializeCmd {
                treasury: Address::new([1; 20]),
                administrator: ADMIN,
                deposit_fee: 25,
                withdraw_fee: 25,
                nft_fee: 25,
            },
        )
        .expect("fresh pool initializes");

        do_change_fee(
            &logic,
            ChangeFeeCmd {
                caller: ADMIN,
                deposit_fee: 5,
                withdraw_fee: 12,
                nft_fee: 800,
            },
        )
        .expect("admin may change fees");
        do_change_treasury(
            &logic,
            ChangeTreasuryCmd {
                caller: ADMIN,
                treasury: Address::ZERO,
            },
        )
        .expect("admin may change treasury");

        assert_eq!(logic.nft_fee(), 800);
        assert!(logic.treasury().is_zero());
    }

    #[test]
    fn errors_keep_their_kind() {
        let logic = PoolLogic::new();
        let err = do_change_treasury(
            &logic,
            ChangeTreasuryCmd {
                caller: ADMIN,
                treasury: Address::ZERO,
            },
        )
        .expect_err("uninitialized pool has no administrator");

        assert_eq!(
            err.downcast_ref::<LogicError>(),
            Some(&LogicError::Unauthorized)
        );
    }
}
