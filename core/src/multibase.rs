//! Multibase operations: text encodings with a leading base code.
use crate::convert::Input;
use crate::error::MultibaseError;
use multibase::Base;

fn base_for(code: char) -> Result<Base, MultibaseError> {
    Base::from_code(code).map_err(|_| MultibaseError::UnknownBaseCode(code))
}

/// Encodes `data` with the base named by `code` and prefixes the code
/// character. Text that already starts with `code` is returned unchanged,
/// so already-encoded values survive a second encode.
pub fn encode_multibase<'a>(
    code: char,
    data: impl Into<Input<'a>>,
) -> Result<String, MultibaseError> {
    let base = base_for(code)?;
    let bytes = match data.into() {
        Input::Text(text) => {
            if text.starts_with(code) {
                return Ok(text.to_string());
            }
            text.as_bytes()
        }
        Input::Bytes(bytes) => bytes,
    };
    Ok(multibase::encode(base, bytes))
}

/// Decodes multibase `text` into its base code and the raw bytes.
pub fn decode_multibase(text: &str) -> Result<(char, Vec<u8>), MultibaseError> {
    let code = text.chars().next().ok_or(MultibaseError::InvalidBaseString)?;
    let base = base_for(code)?;
    let data = base
        .decode(&text[code.len_utf8()..])
        .map_err(|_| MultibaseError::InvalidBaseString)?;
    Ok((code, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_known_vectors() {
        // Test vectors from the multibase spec.
        assert_eq!(
            encode_multibase('7', "yes mani !").unwrap(),
            "7362625631006654133464440102"
        );
        assert_eq!(
            encode_multibase('u', b"yes mani !").unwrap(),
            "ueWVzIG1hbmkgIQ"
        );
        assert_eq!(
            encode_multibase('B', b"yes mani !").unwrap(),
            "BPFSXGIDNMFXGSIBB"
        );
    }

    #[test]
    fn decode_known_vectors() {
        let (code, data) = decode_multibase("7362625631006654133464440102").unwrap();
        assert_eq!(code, '7');
        assert_eq!(data, b"yes mani !");

        let (code, data) = decode_multibase("BPFSXGIDNMFXGSIBB").unwrap();
        assert_eq!(code, 'B');
        assert_eq!(data, b"yes mani !");
    }

    #[test]
    fn encode_text_already_prefixed() {
        let encoded = encode_multibase('z', b"binary".as_slice()).unwrap();
        assert_eq!(encode_multibase('z', &encoded).unwrap(), encoded);
    }

    #[test]
    fn roundtrip_bases() {
        let data = b"\x00\x01\xfe\xffhello";
        for code in ['0', '7', '9', 'f', 'F', 'b', 'B', 'c', 'v', 't', 'k', 'z', 'Z', 'm', 'u', 'U']
        {
            let text = encode_multibase(code, data).unwrap();
            assert_eq!(text.chars().next(), Some(code));
            let (decoded_code, decoded) = decode_multibase(&text).unwrap();
            assert_eq!(decoded_code, code);
            assert_eq!(decoded, data);
        }
    }

    #[test]
    fn unknown_base() {
        assert_eq!(
            decode_multibase("dddddd"),
            Err(MultibaseError::UnknownBaseCode('d'))
        );
        assert_eq!(
            encode_multibase('d', b"data".as_slice()),
            Err(MultibaseError::UnknownBaseCode('d'))
        );
    }

    #[test]
    fn invalid_body() {
        // '8' is outside the base8 alphabet.
        assert_eq!(
            decode_multibase("78888888"),
            Err(MultibaseError::InvalidBaseString)
        );
        assert_eq!(decode_multibase(""), Err(MultibaseError::InvalidBaseString));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            MultibaseError::UnknownBaseCode('d').to_string(),
            "Unknown base: d"
        );
        assert_eq!(
            MultibaseError::InvalidBaseString.to_string(),
            "Invalid base string"
        );
    }
}
