use halo2_base::halo2_proofs::halo2curves::bn256::Fr;

use crate::{
    address::Address,
    errors::DomainError,
    scalar::scalar_from_hex,
    token::{token_id, TokenData, TokenSubId, TokenType},
};

const BAYC: &str = "0xbc4ca0eda7647a8ab7c2061c2e118a18a936f13d";
const ERC20: &str = "0x1234567890abcdef1234567890abcdef12345678";

fn fr(hex: &str) -> Fr {
    scalar_from_hex(hex).unwrap()
}

#[test]
fn test_erc20_id_is_address() {
    let token = TokenData::erc20(ERC20.parse().unwrap());
    assert_eq!(token_id(&token), fr(ERC20));
}

#[test]
fn test_erc20_ignores_nothing_but_address() {
    let address: Address = ERC20.parse().unwrap();
    let mut token = TokenData::erc20(address);
    token.token_sub_id = 7u128.into();
    assert_eq!(token_id(&token), fr(ERC20));
}

#[test]
fn test_erc721_id_is_reduced_keccak() {
    let token = TokenData::erc721(BAYC.parse().unwrap(), 42u128.into());
    assert_eq!(
        token_id(&token),
        fr("0x0baf765c939e634ee5123340ac0596a143cf4f98664677f30c76b03e50eba785")
    );
}

#[test]
fn test_erc1155_id_is_reduced_keccak() {
    let token = TokenData::erc1155(BAYC.parse().unwrap(), 42u128.into());
    assert_eq!(
        token_id(&token),
        fr("0x0828c70b8d3e2624ec906a69513f8eefb01979daa4f82510b053631e3e15d2b9")
    );
}

#[test]
fn test_sub_id_changes_nft_id() {
    let address: Address = BAYC.parse().unwrap();
    assert_ne!(
        token_id(&TokenData::erc721(address, 1u128.into())),
        token_id(&TokenData::erc721(address, 2u128.into()))
    );
}

#[test]
fn test_abi_encoding_layout() {
    let token = TokenData::erc1155(BAYC.parse().unwrap(), 0x0102u128.into());
    let encoded = token.abi_encode();

    assert!(encoded[..31].iter().all(|b| *b == 0));
    assert_eq!(encoded[31], 2);
    assert!(encoded[32..44].iter().all(|b| *b == 0));
    assert_eq!(&encoded[44..64], token.token_address.as_bytes());
    assert_eq!(encoded[94], 0x01);
    assert_eq!(encoded[95], 0x02);
}

#[test]
fn test_sub_id_parsing() {
    assert_eq!("42".parse::<TokenSubId>().unwrap(), TokenSubId::from(42u128));
    assert_eq!("0x2a".parse::<TokenSubId>().unwrap(), TokenSubId::from(42u128));
    assert!(matches!(
        "forty-two".parse::<TokenSubId>(),
        Err(DomainError::MalformedHex(_))
    ));
}

#[test]
fn test_address_parsing() {
    let address: Address = BAYC.parse().unwrap();
    assert_eq!(address.to_string(), BAYC);
    assert_eq!(
        BAYC[2..].parse::<Address>().unwrap(),
        address,
        "prefix is optional"
    );
    assert!(Address::ZERO.is_zero());
    assert!(matches!(
        "0x1234".parse::<Address>(),
        Err(DomainError::MalformedAddress(_))
    ));
}

#[test]
fn test_token_data_serde() {
    let token = TokenData::erc721(BAYC.parse().unwrap(), 42u128.into());
    let json = serde_json::to_value(token).unwrap();

    assert_eq!(json["tokenType"], "erc721");
    assert_eq!(json["tokenAddress"], BAYC);
    assert_eq!(
        json["tokenSubId"],
        "0x000000000000000000000000000000000000000000000000000000000000002a"
    );

    let decoded: TokenData = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, token);
}

#[test]
fn test_token_data_sub_id_defaults_to_zero() {
    let decoded: TokenData = serde_json::from_str(&format!(
        r#"{{"tokenType":"erc20","tokenAddress":"{ERC20}"}}"#
    ))
    .unwrap();
    assert_eq!(decoded.token_type, TokenType::Erc20);
    assert_eq!(decoded.token_sub_id, TokenSubId::default());
}
