//! Ipld representation.
use crate::Cid;
use std::collections::BTreeMap;

/// Ipld
#[derive(Clone, Debug, PartialEq)]
pub enum Ipld {
    /// Represents the absence of a value or the value undefined.
    Null,
    /// Represents a boolean value.
    Bool(bool),
    /// Represents an integer. The codecs accept `[-2^64, 2^64 - 1]`,
    /// which is wider than any single fixed 64-bit type.
    Integer(i128),
    /// Represents a finite floating point value.
    Float(f64),
    /// Represents an UTF-8 string.
    String(String),
    /// Represents a sequence of bytes.
    Bytes(Vec<u8>),
    /// Represents a list.
    List(Vec<Ipld>),
    /// Represents a map keyed by strings.
    Map(BTreeMap<String, Ipld>),
    /// Represents a link to another block.
    Link(Cid),
}

impl Ipld {
    /// Returns the name of the value's kind, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Ipld::Null => "null",
            Ipld::Bool(_) => "bool",
            Ipld::Integer(_) => "integer",
            Ipld::Float(_) => "float",
            Ipld::String(_) => "string",
            Ipld::Bytes(_) => "bytes",
            Ipld::List(_) => "list",
            Ipld::Map(_) => "map",
            Ipld::Link(_) => "link",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipld_from_primitives() {
        assert_eq!(Ipld::Bool(true), Ipld::from(true));
        assert_eq!(Ipld::Integer(1), Ipld::from(1u64));
        assert_eq!(Ipld::Integer(-1), Ipld::from(-1i64));
        assert_eq!(Ipld::Float(1.5), Ipld::from(1.5f64));
        assert_eq!(Ipld::String("a".into()), Ipld::from("a"));
        assert_eq!(Ipld::Bytes(vec![0, 1]), Ipld::from(&[0u8, 1u8][..]));
    }

    #[test]
    fn kind_names() {
        assert_eq!(Ipld::Null.kind(), "null");
        assert_eq!(Ipld::List(vec![]).kind(), "list");
        assert_eq!(Ipld::Map(BTreeMap::new()).kind(), "map");
    }
}
