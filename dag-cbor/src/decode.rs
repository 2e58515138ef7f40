//! Strict dag-cbor decoder.
use crate::error::CborError;
use crate::key_order;
use byteorder::{BigEndian, ByteOrder};
use ipld_canon_core::ipld::Ipld;
use ipld_canon_core::Cid;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::io::{Cursor, Read};

/// Hard cap on nested arrays and maps.
const MAX_DEPTH: usize = 500;

#[repr(transparent)]
#[derive(Clone, Copy, Eq, PartialEq)]
struct Major(u8);

impl Major {
    const fn new(kind: MajorKind, info: u8) -> Self {
        Major(((kind as u8) << 5) | info)
    }

    fn kind(self) -> MajorKind {
        match self.0 >> 5 {
            0 => MajorKind::UnsignedInt,
            1 => MajorKind::NegativeInt,
            2 => MajorKind::ByteString,
            3 => MajorKind::TextString,
            4 => MajorKind::Array,
            5 => MajorKind::Map,
            6 => MajorKind::Tag,
            _ => MajorKind::Other,
        }
    }

    const fn info(self) -> u8 {
        self.0 & 0x1f
    }
}

// Every initial byte passes through here, giving us a single place to
// reject everything outside the dag-cbor profile: reserved info values
// 28-30, indefinite lengths (31), half and single precision floats and
// simple values other than false, true and null.
impl TryFrom<u8> for Major {
    type Error = CborError;

    fn try_from(value: u8) -> Result<Self, CborError> {
        let major = Major(value);
        if major.info() > 27 {
            return Err(CborError::UnexpectedCode(value));
        }
        if major.kind() == MajorKind::Other {
            match major.info() {
                20 | 21 | 22 | 27 => (),
                _ => return Err(CborError::UnexpectedCode(value)),
            }
        }
        Ok(major)
    }
}

const FALSE: Major = Major::new(MajorKind::Other, 20);
const TRUE: Major = Major::new(MajorKind::Other, 21);
const NULL: Major = Major::new(MajorKind::Other, 22);
const F64: Major = Major::new(MajorKind::Other, 27);

#[repr(u8)]
#[derive(Clone, Copy, Eq, PartialEq)]
enum MajorKind {
    UnsignedInt = 0,
    NegativeInt = 1,
    ByteString = 2,
    TextString = 3,
    Array = 4,
    Map = 5,
    Tag = 6,
    Other = 7,
}

fn read_u8(r: &mut Cursor<&[u8]>) -> Result<u8, CborError> {
    let mut buf = [0; 1];
    r.read_exact(&mut buf).map_err(|_| CborError::UnexpectedEof)?;
    Ok(buf[0])
}

fn read_u16(r: &mut Cursor<&[u8]>) -> Result<u16, CborError> {
    let mut buf = [0; 2];
    r.read_exact(&mut buf).map_err(|_| CborError::UnexpectedEof)?;
    Ok(BigEndian::read_u16(&buf))
}

fn read_u32(r: &mut Cursor<&[u8]>) -> Result<u32, CborError> {
    let mut buf = [0; 4];
    r.read_exact(&mut buf).map_err(|_| CborError::UnexpectedEof)?;
    Ok(BigEndian::read_u32(&buf))
}

fn read_u64(r: &mut Cursor<&[u8]>) -> Result<u64, CborError> {
    let mut buf = [0; 8];
    r.read_exact(&mut buf).map_err(|_| CborError::UnexpectedEof)?;
    Ok(BigEndian::read_u64(&buf))
}

fn read_major(r: &mut Cursor<&[u8]>) -> Result<Major, CborError> {
    Major::try_from(read_u8(r)?)
}

/// Reads the argument of a head, enforcing the shortest-head rule.
fn read_uint(r: &mut Cursor<&[u8]>, major: Major) -> Result<u64, CborError> {
    match major.info() {
        value @ 0..=23 => Ok(value as u64),
        24 => match read_u8(r)? as u64 {
            0..=23 => Err(CborError::NumberNotMinimal),
            value => Ok(value),
        },
        25 => match read_u16(r)? as u64 {
            0..=0xff => Err(CborError::NumberNotMinimal),
            value => Ok(value),
        },
        26 => match read_u32(r)? as u64 {
            0..=0xffff => Err(CborError::NumberNotMinimal),
            value => Ok(value),
        },
        27 => match read_u64(r)? {
            0..=0xffff_ffff => Err(CborError::NumberNotMinimal),
            value => Ok(value),
        },
        _ => Err(CborError::UnexpectedCode(major.0)),
    }
}

/// Borrows `len` bytes from the underlying buffer, bounds checked before
/// anything is allocated.
fn take_bytes<'a>(r: &mut Cursor<&'a [u8]>, len: u64) -> Result<&'a [u8], CborError> {
    let len = usize::try_from(len).map_err(|_| CborError::LengthOutOfRange)?;
    let data: &'a [u8] = *r.get_ref();
    let start = r.position() as usize;
    let end = start.checked_add(len).ok_or(CborError::LengthOutOfRange)?;
    if end > data.len() {
        return Err(CborError::UnexpectedEof);
    }
    r.set_position(end as u64);
    Ok(&data[start..end])
}

fn read_str(r: &mut Cursor<&[u8]>, len: u64) -> Result<String, CborError> {
    let bytes = take_bytes(r, len)?;
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|_| CborError::InvalidUtf8)
}

fn read_list(r: &mut Cursor<&[u8]>, len: u64, depth: usize) -> Result<Vec<Ipld>, CborError> {
    let len = usize::try_from(len).map_err(|_| CborError::LengthOutOfRange)?;
    // The length is attacker controlled, so cap the up-front allocation.
    let mut list = Vec::with_capacity(len.min(16 * 1024 / std::mem::size_of::<Ipld>()));
    for _ in 0..len {
        list.push(read_ipld(r, depth)?);
    }
    Ok(list)
}

fn read_map(
    r: &mut Cursor<&[u8]>,
    len: u64,
    depth: usize,
) -> Result<BTreeMap<String, Ipld>, CborError> {
    let mut map = BTreeMap::new();
    let mut prev: Option<String> = None;
    for _ in 0..len {
        let major = read_major(r)?;
        if major.kind() != MajorKind::TextString {
            return Err(CborError::NonStringMapKey);
        }
        let klen = read_uint(r, major)?;
        let key = read_str(r, klen)?;
        // Strictly ascending also rules out duplicates.
        if let Some(prev) = &prev {
            if key_order(prev, &key) != Ordering::Less {
                return Err(CborError::MapKeyOrder);
            }
        }
        let value = read_ipld(r, depth)?;
        map.insert(key.clone(), value);
        prev = Some(key);
    }
    Ok(map)
}

/// Reads the link payload after its tag 42 head.
fn read_link(r: &mut Cursor<&[u8]>) -> Result<Cid, CborError> {
    let major = read_major(r)?;
    if major.kind() != MajorKind::ByteString {
        return Err(CborError::UnexpectedCode(major.0));
    }
    let len = read_uint(r, major)?;
    if len < 1 {
        return Err(CborError::LengthOutOfRange);
    }
    let bytes = take_bytes(r, len)?;
    // Links carry the multibase identity prefix before the binary CID.
    if bytes[0] != 0 {
        return Err(CborError::InvalidCidPrefix(bytes[0]));
    }
    let mut cur = Cursor::new(&bytes[1..]);
    let cid = Cid::read_bytes(&mut cur)?;
    if cur.position() as usize != bytes.len() - 1 {
        return Err(CborError::LengthOutOfRange);
    }
    Ok(cid)
}

pub(crate) fn read_ipld(r: &mut Cursor<&[u8]>, depth: usize) -> Result<Ipld, CborError> {
    if depth > MAX_DEPTH {
        return Err(CborError::RecursionLimit);
    }
    let major = read_major(r)?;
    let ipld = match major.kind() {
        MajorKind::UnsignedInt => Ipld::Integer(read_uint(r, major)? as i128),
        MajorKind::NegativeInt => Ipld::Integer(-1 - read_uint(r, major)? as i128),
        MajorKind::ByteString => {
            let len = read_uint(r, major)?;
            Ipld::Bytes(take_bytes(r, len)?.to_vec())
        }
        MajorKind::TextString => {
            let len = read_uint(r, major)?;
            Ipld::String(read_str(r, len)?)
        }
        MajorKind::Array => {
            let len = read_uint(r, major)?;
            Ipld::List(read_list(r, len, depth + 1)?)
        }
        MajorKind::Map => {
            let len = read_uint(r, major)?;
            Ipld::Map(read_map(r, len, depth + 1)?)
        }
        MajorKind::Tag => match read_uint(r, major)? {
            42 => Ipld::Link(read_link(r)?),
            tag => return Err(CborError::UnknownTag(tag)),
        },
        MajorKind::Other => match major {
            FALSE => Ipld::Bool(false),
            TRUE => Ipld::Bool(true),
            NULL => Ipld::Null,
            F64 => {
                let num = f64::from_bits(read_u64(r)?);
                if !num.is_finite() {
                    return Err(CborError::NonFiniteFloat);
                }
                Ipld::Float(num)
            }
            Major(code) => return Err(CborError::UnexpectedCode(code)),
        },
    };
    Ok(ipld)
}
