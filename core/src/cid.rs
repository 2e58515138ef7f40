//! CID operations: parsing the text and binary forms, and rendering the
//! canonical multibase text form.
use crate::convert::Input;
use crate::error::{CidError, MultibaseError};
use crate::multibase::{decode_multibase, encode_multibase};
use crate::Cid;
use ::multibase::Base;

/// Length of the base58btc text form of a CIDv0.
const CIDV0_STR_LEN: usize = 46;

/// Parses a CID from multibase text, legacy `Qm` base58btc text, or the
/// raw binary form.
pub fn decode_cid<'a>(input: impl Into<Input<'a>>) -> Result<Cid, CidError> {
    match input.into() {
        Input::Text(text) => {
            if text.len() == CIDV0_STR_LEN && text.starts_with("Qm") {
                // Legacy CIDv0: a bare base58btc sha2-256 multihash.
                let bytes = Base::Base58Btc
                    .decode(text)
                    .map_err(|_| MultibaseError::InvalidBaseString)?;
                Ok(Cid::try_from(bytes.as_slice())?)
            } else {
                let (_code, bytes) = decode_multibase(text)?;
                Ok(Cid::try_from(bytes.as_slice())?)
            }
        }
        Input::Bytes(bytes) => Ok(Cid::try_from(bytes)?),
    }
}

/// Renders a CID as multibase text. Valid CID text is returned verbatim;
/// binary CIDs render as base32-lowercase multibase.
pub fn encode_cid<'a>(input: impl Into<Input<'a>>) -> Result<String, CidError> {
    match input.into() {
        Input::Text(text) => {
            decode_cid(text)?;
            Ok(text.to_string())
        }
        Input::Bytes(bytes) => {
            let cid = Cid::try_from(bytes)?;
            let bytes = cid.to_bytes();
            Ok(encode_multibase('b', &bytes)?)
        }
    }
}
