use tracing::debug;

use super::code::{StoredCode, StoredCodeRecord};
use super::style::{Style, StyleRecord};
use crate::common::PayloadResult;
use crate::payload::{Payload, PayloadRecord};

// Byte codec
//------------------------------------------------------------------------------
// JSON encoding of the persisted records. Decoding goes through the record types
// first so a bad discriminant surfaces as its own error instead of a serde message.

pub fn encode_payload(payload: &Payload) -> PayloadResult<Vec<u8>> {
    Ok(serde_json::to_vec(&PayloadRecord::from(payload))?)
}

pub fn decode_payload(data: &[u8]) -> PayloadResult<Payload> {
    let rec: PayloadRecord = serde_json::from_slice(data)?;
    Payload::try_from(rec)
}

pub fn encode_style(style: &Style) -> PayloadResult<Vec<u8>> {
    Ok(serde_json::to_vec(&StyleRecord::from(style))?)
}

pub fn decode_style(data: &[u8]) -> PayloadResult<Style> {
    let rec: StyleRecord = serde_json::from_slice(data)?;
    Style::try_from(rec)
}

pub fn encode_code(code: &StoredCode) -> PayloadResult<Vec<u8>> {
    Ok(serde_json::to_vec(&StoredCodeRecord::from(code))?)
}

pub fn decode_code(data: &[u8]) -> PayloadResult<StoredCode> {
    let rec: StoredCodeRecord = serde_json::from_slice(data)?;
    debug!(target: "qrpayload::store", "Decoding stored code {} ({})", rec.id, rec.payload.kind);
    StoredCode::try_from(rec)
}

#[cfg(test)]
mod codec_tests {
    use image::Rgb;

    use super::{
        decode_code, decode_payload, decode_style, encode_code, encode_payload, encode_style,
    };
    use crate::common::PayloadError;
    use crate::payload::{Contact, Payload, SecurityKind};
    use crate::store::{CodeBuilder, ModuleShape, Style};

    #[test]
    fn test_payload_bytes() {
        let payload = Payload::whatsapp("15551234", "hey you");
        let data = encode_payload(&payload).unwrap();
        assert_eq!(decode_payload(&data).unwrap(), payload);
    }

    #[test]
    fn test_decode_unknown_payload_type() {
        let data = br#"{"type":"calendar","content":"x"}"#;
        let err = decode_payload(data).unwrap_err();
        assert_eq!(err, PayloadError::UnknownPayloadType("calendar".to_string()));
    }

    #[test]
    fn test_decode_malformed_json() {
        let err = decode_payload(b"{\"type\":").unwrap_err();
        assert!(matches!(err, PayloadError::Serialization(_)));
        let err = decode_payload(b"{\"url\":\"x\"}").unwrap_err();
        assert!(matches!(err, PayloadError::Serialization(_)));
    }

    #[test]
    fn test_style_bytes() {
        let style =
            Style { background: Rgb([1, 2, 3]), module_shape: ModuleShape::Dot, ..Style::default() };
        let data = encode_style(&style).unwrap();
        assert_eq!(decode_style(&data).unwrap(), style);
    }

    #[test]
    fn test_decode_style_bad_color() {
        let data = br##"{"foreground":"#000","background":"#FFFFFF"}"##;
        let err = decode_style(data).unwrap_err();
        assert_eq!(err, PayloadError::InvalidColor("#000".to_string()));
    }

    #[test]
    fn test_code_bytes() {
        let payload = Payload::VCard(Contact::new("Jane", "Doe"));
        let code = CodeBuilder::new(payload).name("Jane").build();
        let data = encode_code(&code).unwrap();
        let decoded = decode_code(&data).unwrap();
        assert_eq!(decoded, code);
        assert_eq!(decoded.id(), code.id());
    }

    #[test]
    fn test_decode_code_unknown_payload_type() {
        let data = br##"{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "name": "Old",
            "createdAt": "2023-11-05T10:00:00Z",
            "payload": { "type": "location", "lat": 1.0 },
            "style": { "foreground": "#000000", "background": "#FFFFFF" }
        }"##;
        let err = decode_code(data).unwrap_err();
        assert_eq!(err, PayloadError::UnknownPayloadType("location".to_string()));
    }

    #[test]
    fn test_decode_code_wifi() {
        let data = br##"{
            "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
            "name": "Home",
            "createdAt": "2023-11-05T10:00:00+01:00",
            "payload": { "type": "wifi", "ssid": "Home", "password": "pw", "security": "WEP" },
            "style": { "foreground": "#000000", "background": "#FFFFFF", "eyeShape": "circle" }
        }"##;
        let code = decode_code(data).unwrap();
        assert_eq!(code.name(), "Home");
        assert_eq!(code.payload(), &Payload::wifi("Home", "pw", false, SecurityKind::Wep));
        assert_eq!(code.id().to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert_eq!(code.created_at().unix_timestamp(), 1699174800);
    }
}
