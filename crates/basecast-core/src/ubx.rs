//! UBX command codec: textual `CFG-*` descriptors to framed binary messages.
//!
//! A framed command is:
//!
//! ```text
//! B5 62 | class | id | length (u16 LE) | payload | ck_a ck_b
//! ```
//!
//! The checksum covers everything after the two sync bytes. The receiver
//! rejects any frame whose checksum does not match, so the algorithm here
//! must stay bit-exact.
//!
//! Descriptors look like:
//!
//! ```text
//! CFG-VALSET 0 1 0 0 CFG-TMODE-MODE 2
//! CFG-VALDEL 0 1 0 0 CFG-TMODE-LAT CFG-TMODE-LON
//! CFG-RATE 1000 1 1
//! ```

use crate::keys::{self, ConfigKey};

// ── Constants ─────────────────────────────────────────────────────────────────

pub const SYNC1: u8 = 0xB5;
pub const SYNC2: u8 = 0x62;

/// Message class for every configuration message.
pub const CLASS_CFG: u8 = 0x06;

pub const ID_VALSET: u8 = 0x8A;
pub const ID_VALGET: u8 = 0x8B;
pub const ID_VALDEL: u8 = 0x8C;

/// sync(2) + class(1) + id(1) + length(2)
pub const HEADER_LEN: usize = 6;
pub const CHECKSUM_LEN: usize = 2;

/// Width of a string field in legacy messages (space padded).
const STR_FIELD_LEN: usize = 32;

// ── Value kinds ───────────────────────────────────────────────────────────────

/// Encoding of one field or configuration value. All integers little-endian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    U1,
    U2,
    U4,
    U8,
    I1,
    I2,
    I4,
    R4,
    R8,
    /// Fixed 32-byte ASCII, space padded.
    S32,
}

impl ValueKind {
    /// Encoded width in bytes.
    pub fn width(self) -> usize {
        match self {
            ValueKind::U1 | ValueKind::I1 => 1,
            ValueKind::U2 | ValueKind::I2 => 2,
            ValueKind::U4 | ValueKind::I4 | ValueKind::R4 => 4,
            ValueKind::U8 | ValueKind::R8 => 8,
            ValueKind::S32 => STR_FIELD_LEN,
        }
    }

    fn range(self) -> Option<(i128, i128)> {
        match self {
            ValueKind::U1 => Some((0, u8::MAX as i128)),
            ValueKind::U2 => Some((0, u16::MAX as i128)),
            ValueKind::U4 => Some((0, u32::MAX as i128)),
            ValueKind::U8 => Some((0, u64::MAX as i128)),
            ValueKind::I1 => Some((i8::MIN as i128, i8::MAX as i128)),
            ValueKind::I2 => Some((i16::MIN as i128, i16::MAX as i128)),
            ValueKind::I4 => Some((i32::MIN as i128, i32::MAX as i128)),
            ValueKind::R4 | ValueKind::R8 | ValueKind::S32 => None,
        }
    }

    /// Encode `token` and append it to `out`.
    fn encode(self, token: &str, out: &mut Vec<u8>) -> Result<(), UbxError> {
        match self {
            ValueKind::R4 => {
                let v: f32 = token
                    .parse()
                    .map_err(|_| UbxError::MalformedCommand(format!("not a number: {token}")))?;
                out.extend_from_slice(&v.to_le_bytes());
            }
            ValueKind::R8 => {
                let v: f64 = token
                    .parse()
                    .map_err(|_| UbxError::MalformedCommand(format!("not a number: {token}")))?;
                out.extend_from_slice(&v.to_le_bytes());
            }
            ValueKind::S32 => {
                let mut field = [b' '; STR_FIELD_LEN];
                let bytes = token.as_bytes();
                let n = bytes.len().min(STR_FIELD_LEN);
                field[..n].copy_from_slice(&bytes[..n]);
                out.extend_from_slice(&field);
            }
            _ => {
                let v = parse_int(token)?;
                let (min, max) = self.range().unwrap_or((i128::MIN, i128::MAX));
                if v < min || v > max {
                    return Err(UbxError::ValueOutOfRange {
                        value: token.to_string(),
                        kind: self,
                    });
                }
                // Two's complement little-endian truncated to the field width.
                out.extend_from_slice(&v.to_le_bytes()[..self.width()]);
            }
        }
        Ok(())
    }

    fn encode_zero(self, out: &mut Vec<u8>) {
        match self {
            ValueKind::S32 => out.extend_from_slice(&[b' '; STR_FIELD_LEN]),
            _ => out.extend(std::iter::repeat(0u8).take(self.width())),
        }
    }

    /// Decode a value of this kind from the front of `bytes` as a signed integer.
    /// Float and string kinds are not decodable this way.
    pub fn decode_int(self, bytes: &[u8]) -> Option<i64> {
        if bytes.len() < self.width() {
            return None;
        }
        let v = match self {
            ValueKind::U1 => bytes[0] as i64,
            ValueKind::I1 => bytes[0] as i8 as i64,
            ValueKind::U2 => u16::from_le_bytes([bytes[0], bytes[1]]) as i64,
            ValueKind::I2 => i16::from_le_bytes([bytes[0], bytes[1]]) as i64,
            ValueKind::U4 => u32::from_le_bytes(bytes[..4].try_into().ok()?) as i64,
            ValueKind::I4 => i32::from_le_bytes(bytes[..4].try_into().ok()?) as i64,
            ValueKind::U8 => u64::from_le_bytes(bytes[..8].try_into().ok()?) as i64,
            _ => return None,
        };
        Some(v)
    }
}

use ValueKind::*;

// ── Message table ─────────────────────────────────────────────────────────────

/// How the arguments after the fixed fields are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tail {
    /// No trailing arguments allowed.
    None,
    /// `key value` pairs (CFG-VALSET).
    KeyValues,
    /// Bare key names (CFG-VALDEL, CFG-VALGET).
    Keys,
}

struct MessageDef {
    name: &'static str,
    id: u8,
    fields: &'static [ValueKind],
    tail: Tail,
}

const fn msg(name: &'static str, id: u8, fields: &'static [ValueKind]) -> MessageDef {
    MessageDef { name, id, fields, tail: Tail::None }
}

/// Supported `CFG-*` messages. Field layouts follow the receiver protocol
/// description for each message; trailing fields left out of a descriptor
/// encode as zero.
static MESSAGES: &[MessageDef] = &[
    msg("PRT", 0x00, &[U1, U1, U2, U4, U4, U2, U2, U2, U2]),
    msg("USB", 0x1B, &[U2, U2, U2, U2, U2, U2, S32, S32, S32]),
    msg("MSG", 0x01, &[U1, U1, U1, U1, U1, U1, U1, U1]),
    msg("NMEA", 0x17, &[U1, U1, U1, U1]),
    msg("RATE", 0x08, &[U2, U2, U2]),
    msg("CFG", 0x09, &[U4, U4, U4, U1]),
    msg("TP", 0x07, &[U4, U4, I1, U1, U2, I2, I2, I4]),
    msg("NAV2", 0x1A, &[
        U1, U1, U2, U1, U1, U1, U1, I4, U1, U1, U1, U1, U1, U1, U2, U2, U2, U2, U2, U1, U1, U2,
        U4, U4,
    ]),
    msg("DAT", 0x06, &[R8, R8, R4, R4, R4, R4, R4, R4, R4]),
    msg("INF", 0x02, &[U1, U1, U1, U1, U1, U1, U1, U1, U1, U1]),
    msg("RST", 0x04, &[U2, U1, U1]),
    msg("RXM", 0x11, &[U1, U1]),
    msg("ANT", 0x13, &[U2, U2]),
    msg("FXN", 0x0E, &[U4, U4, U4, U4, U4, U4, U4, U4]),
    msg("SBAS", 0x16, &[U1, U1, U1, U1, U4]),
    msg("LIC", 0x80, &[U2, U2, U2, U2, U2, U2]),
    msg("TM", 0x10, &[U4, U4, U4]),
    msg("TM2", 0x19, &[U1, U1, U2, U4, U4]),
    msg("TMODE", 0x1D, &[U4, I4, I4, I4, U4, U4, U4]),
    msg("EKF", 0x12, &[U1, U1, U1, U1, U4, U2, U2, U1, U1, U2]),
    msg("GNSS", 0x3E, &[U1, U1, U1, U1, U1, U1, U1, U1, U4]),
    msg("ITFM", 0x39, &[U4, U4]),
    msg("LOGFILTER", 0x47, &[U1, U1, U2, U2, U2, U4]),
    msg("NAV5", 0x24, &[
        U2, U1, U1, I4, U4, I1, U1, U2, U2, U2, U2, U1, U1, U1, U1, U1, U1, U2, U1, U1, U1, U1,
        U1, U1,
    ]),
    msg("NAVX5", 0x23, &[
        U2, U2, U4, U1, U1, U1, U1, U1, U1, U1, U1, U1, U1, U2, U1, U1, U1, U1, U1, U1, U1, U1,
        U1, U1, U2,
    ]),
    msg("ODO", 0x1E, &[U1, U1, U1, U1, U1, U1, U1, U1, U1]),
    msg("PM2", 0x3B, &[U1, U1, U1, U1, U4, U4, U4, U4, U2, U2]),
    msg("PWR", 0x57, &[U1, U1, U1, U1, U4]),
    msg("RINV", 0x34, &[U1, U1]),
    msg("SMGR", 0x62, &[U1, U1, U2, U2, U1, U1, U2, U2, U2, U2, U4]),
    msg("TMODE2", 0x36, &[U1, U1, U2, I4, I4, I4, U4, U4, U4]),
    msg("TMODE3", 0x71, &[U1, U1, U2, I4, I4, I4, U4, U4, U4]),
    msg("TPS", 0x31, &[U1, U1, U1, U1, I2, I2, U4, U4, U4, U4, I4, U4]),
    msg("TXSLOT", 0x53, &[U1, U1, U1, U1, U4, U4, U4, U4, U4]),
    MessageDef { name: "VALDEL", id: ID_VALDEL, fields: &[U1, U1, U1, U1], tail: Tail::Keys },
    MessageDef { name: "VALGET", id: ID_VALGET, fields: &[U1, U1, U2], tail: Tail::Keys },
    MessageDef { name: "VALSET", id: ID_VALSET, fields: &[U1, U1, U1, U1], tail: Tail::KeyValues },
];

fn lookup_message(name: &str) -> Option<&'static MessageDef> {
    MESSAGES.iter().find(|m| m.name == name)
}

// ── Framed command ────────────────────────────────────────────────────────────

/// A complete, checksummed UBX frame ready to be written to the receiver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramedCommand {
    bytes: Vec<u8>,
}

impl FramedCommand {
    /// Frame a payload: header, payload, checksum.
    pub fn frame(class: u8, id: u8, payload: &[u8]) -> Result<Self, UbxError> {
        let len = u16::try_from(payload.len())
            .map_err(|_| UbxError::MalformedCommand(format!("payload too long: {}", payload.len())))?;

        let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len() + CHECKSUM_LEN);
        bytes.extend_from_slice(&[SYNC1, SYNC2, class, id]);
        bytes.extend_from_slice(&len.to_le_bytes());
        bytes.extend_from_slice(payload);
        let (ck_a, ck_b) = checksum(&bytes[2..]);
        bytes.push(ck_a);
        bytes.push(ck_b);
        Ok(Self { bytes })
    }

    /// Take one complete, valid frame from the front of `buf`.
    ///
    /// Returns the frame and the bytes it occupied, or `None` if `buf` does
    /// not start with a whole frame that passes [`verify`].
    pub fn split_from(buf: &[u8]) -> Option<(Self, usize)> {
        if buf.len() < HEADER_LEN {
            return None;
        }
        let len = HEADER_LEN + u16::from_le_bytes([buf[4], buf[5]]) as usize + CHECKSUM_LEN;
        let frame = buf.get(..len)?;
        verify(frame).then(|| {
            (
                Self {
                    bytes: frame.to_vec(),
                },
                len,
            )
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Total frame length: header + payload + checksum.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn class(&self) -> u8 {
        self.bytes[2]
    }

    pub fn id(&self) -> u8 {
        self.bytes[3]
    }

    pub fn payload(&self) -> &[u8] {
        &self.bytes[HEADER_LEN..self.bytes.len() - CHECKSUM_LEN]
    }

    /// Decode the key/value pairs of a CFG-VALSET frame.
    ///
    /// Returns `None` for other messages or if a key id is not in the key table.
    pub fn valset_entries(&self) -> Option<Vec<(&'static ConfigKey, &[u8])>> {
        if self.class() != CLASS_CFG || self.id() != ID_VALSET {
            return None;
        }
        let mut rest = self.payload().get(4..)?;
        let mut entries = Vec::new();
        while !rest.is_empty() {
            let id = u32::from_le_bytes(rest.get(..4)?.try_into().ok()?);
            let key = keys::by_id(id)?;
            let width = key.kind.width();
            let value = rest.get(4..4 + width)?;
            entries.push((key, value));
            rest = &rest[4 + width..];
        }
        Some(entries)
    }
}

impl AsRef<[u8]> for FramedCommand {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

// ── Checksum ──────────────────────────────────────────────────────────────────

/// 8-bit Fletcher checksum used by the receiver.
pub fn checksum(data: &[u8]) -> (u8, u8) {
    let mut ck_a: u8 = 0;
    let mut ck_b: u8 = 0;
    for &byte in data {
        ck_a = ck_a.wrapping_add(byte);
        ck_b = ck_b.wrapping_add(ck_a);
    }
    (ck_a, ck_b)
}

/// Check sync bytes, declared length and checksum of a complete frame.
pub fn verify(frame: &[u8]) -> bool {
    if frame.len() < HEADER_LEN + CHECKSUM_LEN || frame[0] != SYNC1 || frame[1] != SYNC2 {
        return false;
    }
    let declared = u16::from_le_bytes([frame[4], frame[5]]) as usize;
    if declared + HEADER_LEN + CHECKSUM_LEN != frame.len() {
        return false;
    }
    let n = frame.len();
    checksum(&frame[2..n - 2]) == (frame[n - 2], frame[n - 1])
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Build a framed command from a textual descriptor.
pub fn build(descriptor: &str) -> Result<FramedCommand, UbxError> {
    let mut tokens = descriptor.split_whitespace();

    let head = tokens
        .next()
        .ok_or_else(|| UbxError::MalformedCommand("empty descriptor".into()))?;
    let name = head
        .strip_prefix("CFG-")
        .ok_or_else(|| UbxError::MalformedCommand(format!("expected CFG-*, got {head}")))?;
    let def = lookup_message(name).ok_or_else(|| UbxError::UnknownMessage(head.to_string()))?;

    let args: Vec<&str> = tokens.collect();
    let mut payload = Vec::new();

    match def.tail {
        Tail::None => {
            if args.len() > def.fields.len() {
                return Err(UbxError::MalformedCommand(format!(
                    "{head} takes at most {} arguments, got {}",
                    def.fields.len(),
                    args.len()
                )));
            }
            for (i, kind) in def.fields.iter().enumerate() {
                match args.get(i) {
                    Some(token) => kind.encode(token, &mut payload)?,
                    None => kind.encode_zero(&mut payload),
                }
            }
        }
        Tail::KeyValues | Tail::Keys => {
            if args.len() < def.fields.len() {
                return Err(UbxError::MalformedCommand(format!(
                    "{head} needs {} header arguments",
                    def.fields.len()
                )));
            }
            let (header, tail) = args.split_at(def.fields.len());
            for (kind, token) in def.fields.iter().zip(header) {
                kind.encode(token, &mut payload)?;
            }
            if def.tail == Tail::KeyValues {
                if tail.len() % 2 != 0 {
                    return Err(UbxError::MalformedCommand(format!(
                        "missing value for {}",
                        tail[tail.len() - 1]
                    )));
                }
                for pair in tail.chunks_exact(2) {
                    let key = lookup_key(pair[0])?;
                    payload.extend_from_slice(&key.id.to_le_bytes());
                    key.kind.encode(pair[1], &mut payload)?;
                }
            } else {
                for token in tail {
                    let key = lookup_key(token)?;
                    payload.extend_from_slice(&key.id.to_le_bytes());
                }
            }
        }
    }

    FramedCommand::frame(CLASS_CFG, def.id, &payload)
}

fn lookup_key(token: &str) -> Result<&'static ConfigKey, UbxError> {
    let name = token
        .strip_prefix("CFG-")
        .ok_or_else(|| UbxError::MalformedCommand(format!("expected CFG-* key, got {token}")))?;
    keys::by_name(name).ok_or_else(|| UbxError::UnknownKey(token.to_string()))
}

/// Decimal or `0x`-prefixed hexadecimal integer, optionally negative.
fn parse_int(token: &str) -> Result<i128, UbxError> {
    let malformed = || UbxError::MalformedCommand(format!("not an integer: {token}"));
    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token),
    };
    let magnitude = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => i128::from_str_radix(hex, 16).map_err(|_| malformed())?,
        None => digits.parse::<i128>().map_err(|_| malformed())?,
    };
    Ok(if negative { -magnitude } else { magnitude })
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UbxError {
    #[error("malformed command: {0}")]
    MalformedCommand(String),

    #[error("unknown message: {0}")]
    UnknownMessage(String),

    #[error("unknown configuration key: {0}")]
    UnknownKey(String),

    #[error("value {value} does not fit {kind:?}")]
    ValueOutOfRange { value: String, kind: ValueKind },
}

// ── Tests ─────────────────────────────────────────────────────────────────────
