//! The request envelope and its two encodings.
//!
//! The structured (JSON) encoding is what gets posted; the binary
//! (MessagePack) encoding of the action is what gets signed. Both are produced
//! by serde from the same value, and both refuse to run while a required field
//! is unset, so a field can never be present in one and absent in the other.

use alloy::primitives::Signature;
use serde::Serialize;

use crate::{
    exchange::{actions::ExchangeAction, signing::SigningPayload},
    prelude::*,
    serde_utils::{required, required_signature},
    Error,
};

/// Reports required fields that have not been set.
pub trait RequiredFields {
    /// Wire path of the first unset required field, relative to `self`.
    fn first_missing(&self) -> Option<String>;

    fn ensure_complete(&self) -> Result<()> {
        match self.first_missing() {
            Some(path) => Err(Error::MissingField(path)),
            None => Ok(()),
        }
    }
}

/// One action plus the fields common to every exchange request.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeRequest<A> {
    action: A,
    #[serde(serialize_with = "required")]
    nonce: Option<u64>,
    #[serde(serialize_with = "required_signature")]
    signature: Option<Signature>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vault_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_after: Option<u64>,
}

impl<A> ExchangeRequest<A> {
    pub fn new(action: A) -> Self {
        Self {
            action,
            nonce: None,
            signature: None,
            vault_address: None,
            expires_after: None,
        }
    }

    pub fn action(&self) -> &A {
        &self.action
    }

    pub(crate) fn action_mut(&mut self) -> &mut A {
        &mut self.action
    }

    pub fn into_action(self) -> A {
        self.action
    }

    pub fn nonce(&self) -> Option<u64> {
        self.nonce
    }

    pub fn signature(&self) -> Option<&Signature> {
        self.signature.as_ref()
    }

    pub fn vault_address(&self) -> Option<&str> {
        self.vault_address.as_deref()
    }

    pub fn expires_after(&self) -> Option<u64> {
        self.expires_after
    }

    pub fn set_nonce(&mut self, nonce: u64) -> &mut Self {
        self.nonce = Some(nonce);
        self
    }

    pub fn set_signature(&mut self, signature: Signature) -> &mut Self {
        self.signature = Some(signature);
        self
    }

    pub fn set_vault_address(&mut self, vault_address: impl Into<String>) -> &mut Self {
        self.vault_address = Some(vault_address.into());
        self
    }

    pub fn set_expires_after(&mut self, expires_after: u64) -> &mut Self {
        self.expires_after = Some(expires_after);
        self
    }
}

impl<A: ExchangeAction> Default for ExchangeRequest<A> {
    fn default() -> Self {
        Self::new(A::empty())
    }
}

impl<A: ExchangeAction> RequiredFields for ExchangeRequest<A> {
    fn first_missing(&self) -> Option<String> {
        if let Some(path) = self.action.first_missing() {
            return Some(format!("action.{path}"));
        }
        if self.nonce.is_none() {
            return Some("nonce".to_string());
        }
        self.signature.is_none().then(|| "signature".to_string())
    }
}

impl<A: ExchangeAction> ExchangeRequest<A> {
    /// Structured encoding of the whole envelope.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        self.ensure_complete()?;
        serde_json::to_value(self).map_err(|e| Error::JsonParse(e.to_string()))
    }

    /// Structured encoding as the request body text.
    pub fn to_json_string(&self) -> Result<String> {
        self.ensure_complete()?;
        serde_json::to_string(self).map_err(|e| Error::JsonParse(e.to_string()))
    }

    /// Binary encoding of the whole envelope, maps keyed by field name.
    pub fn to_msgpack(&self) -> Result<Vec<u8>> {
        self.ensure_complete()?;
        rmp_serde::to_vec_named(self).map_err(|e| Error::RmpParse(e.to_string()))
    }

    /// Binary encoding of the action alone, the part of the envelope that is signed.
    pub fn action_msgpack(&self) -> Result<Vec<u8>> {
        if let Some(path) = self.action.first_missing() {
            return Err(Error::MissingField(format!("action.{path}")));
        }
        rmp_serde::to_vec_named(&self.action).map_err(|e| Error::RmpParse(e.to_string()))
    }

    /// Inputs for the signer. Needs the action and nonce; the signature itself
    /// is what this payload produces.
    pub fn signing_payload(&self) -> Result<SigningPayload> {
        let action = self.action_msgpack()?;
        let nonce = self.nonce.ok_or_else(|| Error::missing_field("nonce"))?;
        Ok(SigningPayload {
            action,
            nonce,
            vault_address: self.vault_address.clone(),
            expires_after: self.expires_after,
        })
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;
    use serde_json::json;

    use super::*;
    use crate::exchange::{
        actions::{CancelAction, OrderAction, UpdateLeverageAction},
        cancel::Cancel,
        order::{OrderBuilder, Tif},
    };

    fn signature() -> Signature {
        Signature::new(U256::from(0xabcu64), U256::from(0x123u64), true)
    }

    fn cancel_request() -> ExchangeRequest<CancelAction> {
        let mut req = ExchangeRequest::new(CancelAction::new(vec![Cancel::new(1, 82382)]));
        req.set_nonce(1583838).set_signature(signature());
        req
    }

    #[test]
    fn test_missing_nonce() {
        let req = ExchangeRequest::new(CancelAction::empty());
        let err = req.to_json().unwrap_err();
        assert!(matches!(err, Error::MissingField(ref path) if path == "nonce"));
        assert!(req.to_msgpack().unwrap_err().is_missing_field());
        assert!(req.signing_payload().unwrap_err().is_missing_field());
    }

    #[test]
    fn test_missing_signature() {
        let mut req = ExchangeRequest::new(CancelAction::empty());
        req.set_nonce(1);
        let err = req.to_json_string().unwrap_err();
        assert!(matches!(err, Error::MissingField(ref path) if path == "signature"));
        assert!(req.signing_payload().is_ok());
    }

    #[test]
    fn test_missing_action_field_reported_first() {
        let mut req = ExchangeRequest::new(OrderAction::new(vec![OrderBuilder::new().build()]));
        req.set_nonce(1).set_signature(signature());
        let err = req.to_msgpack().unwrap_err();
        assert!(matches!(err, Error::MissingField(ref path) if path == "action.orders[0].a"));
        assert!(req.action_msgpack().is_err());
    }

    #[test]
    fn test_envelope_json() -> Result<()> {
        let mut req = cancel_request();
        assert_eq!(
            req.to_json()?,
            json!({
                "action": {"type": "cancel", "cancels": [{"a": 1, "o": 82382}]},
                "nonce": 1583838,
                "signature": {"r": "0xabc", "s": "0x123", "v": 28}
            })
        );

        req.set_vault_address("0x1719884eb866cb12b2287399b15f7db5e7d775ea")
            .set_expires_after(1700000000000);
        let value = req.to_json()?;
        assert_eq!(
            value["vaultAddress"],
            json!("0x1719884eb866cb12b2287399b15f7db5e7d775ea")
        );
        assert_eq!(value["expiresAfter"], json!(1700000000000u64));
        Ok(())
    }

    #[test]
    fn test_binary_matches_structured() -> Result<()> {
        let mut req = cancel_request();
        req.set_expires_after(5);
        let decoded: serde_json::Value = rmp_serde::from_slice(&req.to_msgpack()?).unwrap();
        assert_eq!(decoded, req.to_json()?);
        Ok(())
    }

    #[test]
    fn test_encoding_is_deterministic() -> Result<()> {
        let order = OrderBuilder::new()
            .asset(4)
            .is_buy(true)
            .price("12.5")
            .size("3")
            .reduce_only(false)
            .limit_tif(Tif::Alo)
            .build();
        let mut req = ExchangeRequest::new(OrderAction::new(vec![order.clone(), order]));
        req.set_nonce(9).set_signature(signature());

        assert_eq!(req.to_msgpack()?, req.to_msgpack()?);
        assert_eq!(req.action_msgpack()?, req.clone().action_msgpack()?);
        assert_eq!(req.to_json_string()?, req.to_json_string()?);
        Ok(())
    }

    #[test]
    fn test_signing_payload_carries_envelope_fields() -> Result<()> {
        let mut req = ExchangeRequest::new(UpdateLeverageAction::new(1, true, 10));
        req.set_nonce(77).set_vault_address("0xabc").set_expires_after(99);
        let payload = req.signing_payload()?;
        assert_eq!(payload.action, rmp_serde::to_vec_named(req.action()).unwrap());
        assert_eq!(payload.nonce, 77);
        assert_eq!(payload.vault_address.as_deref(), Some("0xabc"));
        assert_eq!(payload.expires_after, Some(99));
        Ok(())
    }

    #[test]
    fn test_default_request_is_tagged() {
        let req = ExchangeRequest::<CancelAction>::default();
        assert_eq!(req.action(), &CancelAction::empty());
        assert_eq!(req.nonce(), None);
        assert_eq!(req.first_missing().as_deref(), Some("nonce"));
    }
}
