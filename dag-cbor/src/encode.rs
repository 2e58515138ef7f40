//! Canonical dag-cbor encoder.
use crate::error::CborError;
use crate::key_order;
use byteorder::{BigEndian, ByteOrder};
use ipld_canon_core::ipld::Ipld;
use ipld_canon_core::Cid;

fn write_null(w: &mut Vec<u8>) {
    w.push(0xf6);
}

fn write_u8(w: &mut Vec<u8>, major: u8, value: u8) {
    if value <= 0x17 {
        w.push(major << 5 | value);
    } else {
        w.push(major << 5 | 24);
        w.push(value);
    }
}

fn write_u16(w: &mut Vec<u8>, major: u8, value: u16) {
    if value <= u16::from(u8::MAX) {
        write_u8(w, major, value as u8);
    } else {
        let mut buf = [major << 5 | 25, 0, 0];
        BigEndian::write_u16(&mut buf[1..], value);
        w.extend_from_slice(&buf);
    }
}

fn write_u32(w: &mut Vec<u8>, major: u8, value: u32) {
    if value <= u32::from(u16::MAX) {
        write_u16(w, major, value as u16);
    } else {
        let mut buf = [major << 5 | 26, 0, 0, 0, 0];
        BigEndian::write_u32(&mut buf[1..], value);
        w.extend_from_slice(&buf);
    }
}

/// Writes a head with the shortest argument that fits `value`.
fn write_u64(w: &mut Vec<u8>, major: u8, value: u64) {
    if value <= u64::from(u32::MAX) {
        write_u32(w, major, value as u32);
    } else {
        let mut buf = [major << 5 | 27, 0, 0, 0, 0, 0, 0, 0, 0];
        BigEndian::write_u64(&mut buf[1..], value);
        w.extend_from_slice(&buf);
    }
}

fn write_tag(w: &mut Vec<u8>, tag: u64) {
    write_u64(w, 6, tag);
}

fn write_integer(w: &mut Vec<u8>, value: i128) -> Result<(), CborError> {
    if value < 0 {
        let magnitude = -1 - value;
        if magnitude > i128::from(u64::MAX) {
            return Err(CborError::IntegerOutOfRange);
        }
        write_u64(w, 1, magnitude as u64);
    } else {
        if value > i128::from(u64::MAX) {
            return Err(CborError::IntegerOutOfRange);
        }
        write_u64(w, 0, value as u64);
    }
    Ok(())
}

// Floats are always binary64, even when a narrower encoding would be
// lossless; the shorter forms are not part of the profile.
fn write_float(w: &mut Vec<u8>, value: f64) -> Result<(), CborError> {
    if !value.is_finite() {
        return Err(CborError::NonFiniteFloat);
    }
    let mut buf = [0xfb, 0, 0, 0, 0, 0, 0, 0, 0];
    BigEndian::write_f64(&mut buf[1..], value);
    w.extend_from_slice(&buf);
    Ok(())
}

fn write_link(w: &mut Vec<u8>, cid: &Cid) {
    write_tag(w, 42);
    let bytes = cid.to_bytes();
    // The multibase identity prefix goes before the binary CID.
    write_u64(w, 2, bytes.len() as u64 + 1);
    w.push(0);
    w.extend_from_slice(&bytes);
}

pub(crate) fn write_ipld(w: &mut Vec<u8>, ipld: &Ipld) -> Result<(), CborError> {
    match ipld {
        Ipld::Null => write_null(w),
        Ipld::Bool(b) => w.push(if *b { 0xf5 } else { 0xf4 }),
        Ipld::Integer(i) => write_integer(w, *i)?,
        Ipld::Float(f) => write_float(w, *f)?,
        Ipld::Bytes(b) => {
            write_u64(w, 2, b.len() as u64);
            w.extend_from_slice(b);
        }
        Ipld::String(s) => {
            write_u64(w, 3, s.len() as u64);
            w.extend_from_slice(s.as_bytes());
        }
        Ipld::List(l) => {
            write_u64(w, 4, l.len() as u64);
            for value in l {
                write_ipld(w, value)?;
            }
        }
        Ipld::Map(m) => {
            write_u64(w, 5, m.len() as u64);
            // The container's natural order is plain lexicographic, which
            // is not the wire order.
            let mut entries: Vec<_> = m.iter().collect();
            entries.sort_by(|(a, _), (b, _)| key_order(a, b));
            for (key, value) in entries {
                write_u64(w, 3, key.len() as u64);
                w.extend_from_slice(key.as_bytes());
                write_ipld(w, value)?;
            }
        }
        Ipld::Link(cid) => write_link(w, cid),
    }
    Ok(())
}
