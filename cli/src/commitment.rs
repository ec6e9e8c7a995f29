use anyhow::Result;
use pool_commitment::{
    hash_commitment, note_public_key, scalar::scalar_to_hex, token_id, CommitmentPreimage,
    TokenData,
};
use tracing::info;

use crate::config::{HashCommitmentCmd, NotePublicKeyCmd};

pub fn do_hash_commitment(cmd: HashCommitmentCmd) -> Result<()> {
    let HashCommitmentCmd {
        npk,
        token_type,
        token_address,
        token_sub_id,
        value,
    } = cmd;

    let token = TokenData {
        token_type: token_type.into(),
        token_address,
        token_sub_id,
    };
    let commitment = hash_commitment(&CommitmentPreimage::new(npk, token, value))?;

    info!(
        token_id = %scalar_to_hex(&token_id(&token)),
        commitment = %scalar_to_hex(&commitment),
        "Commitment computed"
    );
    Ok(())
}

pub fn do_note_public_key(cmd: NotePublicKeyCmd) -> Result<()> {
    let npk = note_public_key(cmd.master_public_key, cmd.random);
    info!(npk = %scalar_to_hex(&npk), "Note public key derived");
    Ok(())
}
