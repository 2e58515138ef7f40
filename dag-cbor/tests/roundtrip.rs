use ipld_canon_cbor::{decode_dag_cbor, encode_dag_cbor};
use ipld_canon_core::codec::{DAG_CBOR, SHA2_256};
use ipld_canon_core::ipld::Ipld;
use ipld_canon_core::multihash::Multihash;
use ipld_canon_core::Cid;
use quickcheck::{Arbitrary, Gen};
use std::collections::BTreeMap;

#[test]
fn roundtrip_with_cid() {
    // generated with go-ipfs
    // $ echo foobar > file1
    // $ ipfs add foobar
    // QmRgutAxd8t7oGkSm4wmeuByG6M51wcTso6cubDdQtuEfL
    // $ echo -n '{ "foo": { "/": "QmRgutAxd8t7oGkSm4wmeuByG6M51wcTso6cubDdQtuEfL" } }' \
    //   | ipfs dag put
    // bafyreibvjvcv745gig4mvqs4hctx4zfkono4rjejm2ta6gtyzkqxfjeily
    // $ ipfs block get bafyreibvjvcv745gig4mvqs4hctx4zfkono4rjejm2ta6gtyzkqxfjeily \
    //   | xxd -ps | paste -s --delimiters=
    let input =
        "a163666f6fd82a582300122031c3d57080d8463a3c63b2923df5a1d40ad7a73eae5a14af584213e5f504ac33";
    let input = hex::decode(input).unwrap();

    let ipld = decode_dag_cbor(&input).unwrap();
    assert!(matches!(
        &ipld,
        Ipld::Map(map) if matches!(map.get("foo"), Some(Ipld::Link(_)))
    ));

    let bytes = encode_dag_cbor(&ipld).unwrap();
    assert_eq!(input, bytes);
}

#[test]
fn canonical_encoding_ignores_insertion_order() {
    let pairs = [
        ("x", Ipld::from(2u64)),
        ("aaa", Ipld::from(1u64)),
        ("selector", Ipld::Bool(true)),
    ];

    let forward: BTreeMap<String, Ipld> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();
    let reverse: BTreeMap<String, Ipld> = pairs
        .iter()
        .rev()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect();

    assert_eq!(
        encode_dag_cbor(&Ipld::Map(forward)).unwrap(),
        encode_dag_cbor(&Ipld::Map(reverse)).unwrap()
    );
}

#[derive(Clone, Debug)]
struct ArbIpld(Ipld);

fn arbitrary_ipld(g: &mut Gen, depth: usize) -> Ipld {
    let variants: u32 = if depth == 0 { 8 } else { 10 };
    match u32::arbitrary(g) % variants {
        0 => Ipld::Null,
        1 => Ipld::Bool(bool::arbitrary(g)),
        2 => Ipld::Integer(i128::from(u64::arbitrary(g))),
        3 => Ipld::Integer(-1 - i128::from(u64::arbitrary(g))),
        4 => {
            let f = f64::arbitrary(g);
            Ipld::Float(if f.is_finite() { f } else { 0.0 })
        }
        5 => Ipld::String(String::arbitrary(g)),
        6 => Ipld::Bytes(Vec::arbitrary(g)),
        7 => {
            let digest: Vec<u8> = (0..32).map(|_| u8::arbitrary(g)).collect();
            let mh = Multihash::<64>::wrap(SHA2_256, &digest).unwrap();
            Ipld::Link(Cid::new_v1(DAG_CBOR, mh))
        }
        8 => {
            let len = usize::arbitrary(g) % 4;
            Ipld::List((0..len).map(|_| arbitrary_ipld(g, depth - 1)).collect())
        }
        _ => {
            let len = usize::arbitrary(g) % 4;
            Ipld::Map(
                (0..len)
                    .map(|_| (String::arbitrary(g), arbitrary_ipld(g, depth - 1)))
                    .collect(),
            )
        }
    }
}

impl Arbitrary for ArbIpld {
    fn arbitrary(g: &mut Gen) -> Self {
        ArbIpld(arbitrary_ipld(g, 3))
    }
}

quickcheck::quickcheck! {
    fn roundtrip(value: ArbIpld) -> bool {
        let bytes = encode_dag_cbor(&value.0).unwrap();
        decode_dag_cbor(&bytes).unwrap() == value.0
    }

    fn roundtrip_integer(value: u64, negative: bool) -> bool {
        let int = if negative {
            -1 - i128::from(value)
        } else {
            i128::from(value)
        };
        let bytes = encode_dag_cbor(&Ipld::Integer(int)).unwrap();
        decode_dag_cbor(&bytes).unwrap() == Ipld::Integer(int)
    }

    fn encoding_is_deterministic(value: ArbIpld) -> bool {
        encode_dag_cbor(&value.0).unwrap() == encode_dag_cbor(&value.0).unwrap()
    }
}
