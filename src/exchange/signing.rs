//! Signing and nonce collaborators for exchange requests.
//!
//! The request layer only guarantees the bytes handed to the signer. The
//! traits here let callers plug in their own key management; [`LocalSigner`]
//! and [`TimestampNonce`] cover the common case of a local key.

use std::sync::atomic::{AtomicU64, Ordering};

use alloy::{
    dyn_abi::Eip712Domain,
    primitives::{keccak256, Address, Signature, B256},
    signers::{local::PrivateKeySigner, SignerSync},
    sol_types::{eip712_domain, SolStruct},
};
use chrono::Utc;
use log::debug;

use crate::{consts::L1_SIGNING_CHAIN_ID, prelude::*, Error};

alloy::sol! {
    #[derive(Debug)]
    struct Agent {
        string source;
        bytes32 connectionId;
    }
}

/// Binary pre-image inputs for an L1 action signature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SigningPayload {
    /// Named-map MessagePack encoding of the action.
    pub action: Vec<u8>,
    pub nonce: u64,
    pub vault_address: Option<String>,
    pub expires_after: Option<u64>,
}

impl SigningPayload {
    /// Hash of the action bytes, the nonce, the optional vault and the optional
    /// expiry. This is the `connectionId` of the signed agent message.
    pub fn connection_id(&self) -> Result<B256> {
        let mut bytes = self.action.clone();
        bytes.extend(self.nonce.to_be_bytes());
        match &self.vault_address {
            Some(vault_address) => {
                let vault: Address = vault_address
                    .parse()
                    .map_err(|e| Error::InvalidVaultAddress(format!("{vault_address}: {e}")))?;
                bytes.push(1);
                bytes.extend_from_slice(vault.as_slice());
            }
            None => bytes.push(0),
        }
        if let Some(expires_after) = self.expires_after {
            bytes.push(0);
            bytes.extend(expires_after.to_be_bytes());
        }
        Ok(keccak256(bytes))
    }
}

/// Produces the signature placed in an exchange request.
pub trait ActionSigner: Send + Sync {
    fn sign_l1_action(&self, payload: &SigningPayload) -> Result<Signature>;
}

/// Source of request nonces.
pub trait NonceSource: Send + Sync {
    fn next_nonce(&self) -> u64;
}

fn l1_domain() -> Eip712Domain {
    eip712_domain! {
        name: "Exchange",
        version: "1",
        chain_id: L1_SIGNING_CHAIN_ID,
        verifying_contract: Address::ZERO,
    }
}

pub(crate) fn sign_l1_action(
    wallet: &PrivateKeySigner,
    connection_id: B256,
    is_mainnet: bool,
) -> Result<Signature> {
    let source = if is_mainnet { "a" } else { "b" }.to_string();
    let agent = Agent {
        source,
        connectionId: connection_id,
    };
    let hash = agent.eip712_signing_hash(&l1_domain());
    wallet
        .sign_hash_sync(&hash)
        .map_err(|e| Error::signature_failure(e.to_string()))
}

/// Signs with a private key held in memory.
pub struct LocalSigner {
    wallet: PrivateKeySigner,
    is_mainnet: bool,
}

// Security: Custom Debug implementation to prevent private key leakage
impl std::fmt::Debug for LocalSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalSigner")
            .field("wallet", &"<redacted>")
            .field("address", &self.wallet.address())
            .field("is_mainnet", &self.is_mainnet)
            .finish()
    }
}

impl LocalSigner {
    pub fn new(wallet: PrivateKeySigner, is_mainnet: bool) -> Self {
        Self { wallet, is_mainnet }
    }

    /// Parse a hex private key, with or without `0x`.
    pub fn from_private_key(private_key: &str, is_mainnet: bool) -> Result<Self> {
        let wallet = private_key
            .parse::<PrivateKeySigner>()
            .map_err(|e| Error::PrivateKeyParse(e.to_string()))?;
        Ok(Self::new(wallet, is_mainnet))
    }

    pub fn address(&self) -> Address {
        self.wallet.address()
    }

    pub fn is_mainnet(&self) -> bool {
        self.is_mainnet
    }
}

impl ActionSigner for LocalSigner {
    fn sign_l1_action(&self, payload: &SigningPayload) -> Result<Signature> {
        let connection_id = payload.connection_id()?;
        sign_l1_action(&self.wallet, connection_id, self.is_mainnet)
    }
}

/// Millisecond timestamps, strictly increasing per instance.
///
/// Two calls within the same millisecond get consecutive values, so the
/// source can run ahead of the clock under bursts.
#[derive(Debug, Default)]
pub struct TimestampNonce {
    last: AtomicU64,
}

impl TimestampNonce {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NonceSource for TimestampNonce {
    fn next_nonce(&self) -> u64 {
        let now_ms = Utc::now().timestamp_millis() as u64;
        let prev = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now_ms.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        let nonce = now_ms.max(prev + 1);
        if nonce > now_ms + 1000 {
            debug!("nonce progressed too far ahead {nonce} {now_ms}");
        }
        nonce
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::{
        actions::{CancelAction, OrderAction},
        cancel::Cancel,
        order::{OrderBuilder, Tif, Tpsl},
        request::ExchangeRequest,
        Grouping,
    };

    const PRIVATE_KEY: &str = "e908f86dbb4d55ac876378565aafeabc187f6690f046459397b17d9b9a19688e";

    fn signers() -> Result<(LocalSigner, LocalSigner)> {
        Ok((
            LocalSigner::from_private_key(PRIVATE_KEY, true)?,
            LocalSigner::from_private_key(PRIVATE_KEY, false)?,
        ))
    }

    fn order_request(builder: &OrderBuilder) -> ExchangeRequest<OrderAction> {
        let mut action = OrderAction::new(vec![builder.build()]);
        action.grouping = Some(Grouping::Na);
        let mut req = ExchangeRequest::new(action);
        req.set_nonce(1583838);
        req
    }

    fn base_order() -> OrderBuilder {
        let mut builder = OrderBuilder::new();
        builder
            .asset(1)
            .is_buy(true)
            .price("2000.0")
            .size("3.5")
            .reduce_only(false);
        builder
    }

    #[test]
    fn test_limit_order_action_signing() -> Result<()> {
        let (mainnet, testnet) = signers()?;
        let mut builder = base_order();
        builder.limit_tif(Tif::Ioc);
        let payload = order_request(&builder).signing_payload()?;

        let signature = mainnet.sign_l1_action(&payload)?;
        assert_eq!(signature.to_string(), "0x77957e58e70f43b6b68581f2dc42011fc384538a2e5b7bf42d5b936f19fbb67360721a8598727230f67080efee48c812a6a4442013fd3b0eed509171bef9f23f1c");

        let signature = testnet.sign_l1_action(&payload)?;
        assert_eq!(signature.to_string(), "0xcd0925372ff1ed499e54883e9a6205ecfadec748f80ec463fe2f84f1209648776377961965cb7b12414186b1ea291e95fd512722427efcbcfb3b0b2bcd4d79d01c");
        Ok(())
    }

    #[test]
    fn test_limit_order_action_signing_with_cloid() -> Result<()> {
        let (mainnet, testnet) = signers()?;
        let mut builder = base_order();
        builder
            .limit_tif(Tif::Ioc)
            .client_order_id("0x1e60610f0b3d420597c88c1fed2ad5ee");
        let payload = order_request(&builder).signing_payload()?;

        let signature = mainnet.sign_l1_action(&payload)?;
        assert_eq!(signature.to_string(), "0xd3e894092eb27098077145714630a77bbe3836120ee29df7d935d8510b03a08f456de5ec1be82aa65fc6ecda9ef928b0445e212517a98858cfaa251c4cd7552b1c");

        let signature = testnet.sign_l1_action(&payload)?;
        assert_eq!(signature.to_string(), "0x3768349dbb22a7fd770fc9fc50c7b5124a7da342ea579b309f58002ceae49b4357badc7909770919c45d850aabb08474ff2b7b3204ae5b66d9f7375582981f111c");
        Ok(())
    }

    #[test]
    fn test_tpsl_order_action_signing() -> Result<()> {
        let (mainnet, testnet) = signers()?;
        for (tpsl, mainnet_signature, testnet_signature) in [
            (
                Tpsl::Tp,
                "0xb91e5011dff15e4b4a40753730bda44972132e7b75641f3cac58b66159534a170d422ee1ac3c7a7a2e11e298108a2d6b8da8612caceaeeb3e571de3b2dfda9e41b",
                "0x6df38b609904d0d4439884756b8f366f22b3a081801dbdd23f279094a2299fac6424cb0cdc48c3706aeaa368f81959e91059205403d3afd23a55983f710aee871b"
            ),
            (
                Tpsl::Sl,
                "0x8456d2ace666fce1bee1084b00e9620fb20e810368841e9d4dd80eb29014611a0843416e51b1529c22dd2fc28f7ff8f6443875635c72011f60b62cbb8ce90e2d1c",
                "0xeb5bdb52297c1d19da45458758bd569dcb24c07e5c7bd52cf76600fd92fdd8213e661e21899c985421ec018a9ee7f3790e7b7d723a9932b7b5adcd7def5354601c"
            ),
        ] {
            let mut builder = base_order();
            builder.trigger(true, "2000.0", tpsl);
            let payload = order_request(&builder).signing_payload()?;

            let signature = mainnet.sign_l1_action(&payload)?;
            assert_eq!(signature.to_string(), mainnet_signature);

            let signature = testnet.sign_l1_action(&payload)?;
            assert_eq!(signature.to_string(), testnet_signature);
        }
        Ok(())
    }

    #[test]
    fn test_cancel_action_signing() -> Result<()> {
        let (mainnet, testnet) = signers()?;
        let mut req = ExchangeRequest::new(CancelAction::new(vec![Cancel::new(1, 82382)]));
        req.set_nonce(1583838);
        let payload = req.signing_payload()?;

        let signature = mainnet.sign_l1_action(&payload)?;
        assert_eq!(signature.to_string(), "0x02f76cc5b16e0810152fa0e14e7b219f49c361e3325f771544c6f54e157bf9fa17ed0afc11a98596be85d5cd9f86600aad515337318f7ab346e5ccc1b03425d51b");

        let signature = testnet.sign_l1_action(&payload)?;
        assert_eq!(signature.to_string(), "0x6ffebadfd48067663390962539fbde76cfa36f53be65abe2ab72c9db6d0db44457720db9d7c4860f142a484f070c84eb4b9694c3a617c83f0d698a27e55fd5e01c");
        Ok(())
    }

    #[test]
    fn test_connection_id_includes_vault_and_expiry() -> Result<()> {
        let payload = SigningPayload {
            action: vec![0x80],
            nonce: 1,
            vault_address: None,
            expires_after: None,
        };
        let with_vault = SigningPayload {
            vault_address: Some("0x1719884eb866cb12b2287399b15f7db5e7d775ea".to_string()),
            ..payload.clone()
        };
        let with_expiry = SigningPayload {
            expires_after: Some(2),
            ..payload.clone()
        };

        let mut expected = vec![0x80];
        expected.extend(1u64.to_be_bytes());
        expected.push(0);
        assert_eq!(payload.connection_id()?, keccak256(&expected));

        expected.push(0);
        expected.extend(2u64.to_be_bytes());
        assert_eq!(with_expiry.connection_id()?, keccak256(&expected));

        assert_ne!(with_vault.connection_id()?, payload.connection_id()?);
        Ok(())
    }

    #[test]
    fn test_invalid_vault_address() {
        let payload = SigningPayload {
            action: vec![0x80],
            nonce: 1,
            vault_address: Some("not-an-address".to_string()),
            expires_after: None,
        };
        assert!(matches!(
            payload.connection_id(),
            Err(Error::InvalidVaultAddress(_))
        ));
    }

    #[test]
    fn test_invalid_private_key() {
        assert!(matches!(
            LocalSigner::from_private_key("zz", true),
            Err(Error::PrivateKeyParse(_))
        ));
    }

    #[test]
    fn test_debug_redacts_key() -> Result<()> {
        let (mainnet, _) = signers()?;
        let debug = format!("{mainnet:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains(PRIVATE_KEY));
        Ok(())
    }

    #[test]
    fn test_timestamp_nonce_strictly_increasing() {
        let nonces = TimestampNonce::new();
        let mut last = 0;
        for _ in 0..1000 {
            let next = nonces.next_nonce();
            assert!(next > last);
            last = next;
        }
        assert!(last >= Utc::now().timestamp_millis() as u64 - 60_000);
    }
}
