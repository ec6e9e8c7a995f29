use parking_lot::RwLock;
use pool_commitment::Address;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    errors::LogicError,
    fees::{get_fee, FeeKind, BASIS_POINTS},
};

/// Fee rates in basis points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeConfig {
    pub deposit: u128,
    pub withdraw: u128,
    pub nft: u128,
}

impl FeeConfig {
    pub fn new(deposit: u128, withdraw: u128, nft: u128) -> Self {
        Self {
            deposit,
            withdraw,
            nft,
        }
    }

    pub fn rate(&self, kind: FeeKind) -> u128 {
        match kind {
            FeeKind::Deposit => self.deposit,
            FeeKind::Withdraw => self.withdraw,
            FeeKind::Nft => self.nft,
        }
    }

    /// A rate of 10000 basis points or more would take the whole base (or more) as fee.
    pub fn validate(&self) -> Result<(), LogicError> {
        match [self.deposit, self.withdraw, self.nft]
            .into_iter()
            .find(|rate| *rate >= BASIS_POINTS)
        {
            Some(rate) => Err(LogicError::InvalidRate(rate)),
            None => Ok(()),
        }
    }
}

/// Everything [`PoolLogic`] governs. The pool is initialized iff it has an administrator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolState {
    pub treasury: Address,
    pub fees: FeeConfig,
    pub administrator: Option<Address>,
}

/// Treasury address and fee rates, mutable only by the administrator.
///
/// The whole state sits behind one lock, so readers never see a half-applied update.
#[derive(Debug, Default)]
pub struct PoolLogic {
    state: RwLock<PoolState>,
}

impl PoolLogic {
    /// An uninitialized pool: zero treasury, zero rates, no administrator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores previously exported state.
    ///
    /// A state without an administrator must be the default one, otherwise the restored pool would
    /// read non-zero values while reporting itself uninitialized.
    pub fn from_state(state: PoolState) -> Result<Self, LogicError> {
        state.fees.validate()?;
        if state.administrator.is_none() && state != PoolState::default() {
            warn!(?state, "Rejected uninitialized state with configured values");
            return Err(LogicError::InconsistentState);
        }
        Ok(Self {
            state: RwLock::new(state),
        })
    }

    /// Consistent snapshot of the governed state.
    pub fn state(&self) -> PoolState {
        *self.state.read()
    }

    pub fn is_initialized(&self) -> bool {
        self.state.read().administrator.is_some()
    }

    pub fn initialize(
        &self,
        treasury: Address,
        deposit_fee: u128,
        withdraw_fee: u128,
        nft_fee: u128,
        administrator: Address,
    ) -> Result<(), LogicError> {
        let fees = FeeConfig::new(deposit_fee, withdraw_fee, nft_fee);
        let mut state = self.state.write();

        if state.administrator.is_some() {
            warn!(%administrator, "Rejected repeated initialization");
            return Err(LogicError::AlreadyInitialized);
        }
        if let Err(e) = fees.validate() {
            warn!(?fees, "Rejected initialization: {e}");
            return Err(e);
        }

        *state = PoolState {
            treasury,
            fees,
            administrator: Some(administrator),
        };
        info!(%treasury, %administrator, ?fees, "Pool logic initialized");
        Ok(())
    }

    /// Replaces the treasury. The zero address is accepted.
    pub fn change_treasury(&self, caller: &Address, treasury: Address) -> Result<(), LogicError> {
        let mut state = self.state.write();
        ensure_administrator(&state, caller)?;

        if state.treasury != treasury {
            info!(old = %state.treasury, new = %treasury, "Treasury changed");
            state.treasury = treasury;
        }
        Ok(())
    }

    /// Replaces all three rates at once.
    pub fn change_fee(
        &self,
        caller: &Address,
        deposit_fee: u128,
        withdraw_fee: u128,
        nft_fee: u128,
    ) -> Result<(), LogicError> {
        let fees = FeeConfig::new(deposit_fee, withdraw_fee, nft_fee);
        let mut state = self.state.write();
        ensure_administrator(&state, caller)?;

        if let Err(e) = fees.validate() {
            warn!(?fees, "Rejected fee change: {e}");
            return Err(e);
        }

        if state.fees != fees {
            info!(old = ?state.fees, new = ?fees, "Fees changed");
            state.fees = fees;
        }
        Ok(())
    }

    pub fn treasury(&self) -> Address {
        self.state.read().treasury
    }

    pub fn deposit_fee(&self) -> u128 {
        self.state.read().fees.deposit
    }

    pub fn withdraw_fee(&self) -> u128 {
        self.state.read().fees.withdraw
    }

    pub fn nft_fee(&self) -> u128 {
        self.state.read().fees.nft
    }

    pub fn fee_config(&self) -> FeeConfig {
        self.state.read().fees
    }

    pub fn administrator(&self) -> Option<Address> {
        self.state.read().administrator
    }

    /// `(base, fee)` of `amount` at the currently configured rate for `kind`.
    pub fn quote(
        &self,
        kind: FeeKind,
        amount: u128,
        inclusive: bool,
    ) -> Result<(u128, u128), LogicError> {
        let rate = self.state.read().fees.rate(kind);
        get_fee(amount, inclusive, rate)
    }
}

fn ensure_administrator(state: &PoolState, caller: &Address) -> Result<(), LogicError> {
    match state.administrator {
        Some(administrator) if administrator == *caller => Ok(()),
        _ => {
            warn!(%caller, "Rejected call from a non-administrator");
            Err(LogicError::Unauthorized)
        }
    }
}
