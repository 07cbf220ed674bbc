use crate::*;

const ORDERS: [ByteOrder; 2] = [ByteOrder::Little, ByteOrder::Big];

#[test]
fn test_file_length_follows_rounding_rule() {
    let scratch = Scratch::new("props-len");

    for size in (1u64..=33).chain([255, 256, 257, 65_535, 65_536]) {
        let out = scratch.path(&format!("len-{size}.bin"));
        generate(size, ByteOrder::Little, &out).unwrap();

        let len = std::fs::metadata(&out).unwrap().len();
        assert_eq!(len, (size | 3) + 1, "size {size}");
        assert_eq!(len % 4, 0);
        assert!(len >= size);
    }
}

#[test]
fn test_every_group_is_the_pattern() {
    let scratch = Scratch::new("props-groups");

    for order in ORDERS {
        let out = scratch.path(&format!("groups-{order}.bin"));
        generate(10_000, order, &out).unwrap();

        let bytes = std::fs::read(&out).unwrap();
        let group = expected_group(order);
        assert!(bytes.chunks_exact(4).all(|g| g == group), "order {order}");
        assert!(bytes.chunks_exact(4).remainder().is_empty());
    }
}

#[test]
fn test_generation_is_idempotent() {
    let scratch = Scratch::new("props-idem");

    for order in ORDERS {
        let a = scratch.path(&format!("a-{order}.bin"));
        let b = scratch.path(&format!("b-{order}.bin"));
        generate(777, order, &a).unwrap();
        generate(777, order, &b).unwrap();
        assert_eq!(std::fs::read(&a).unwrap(), std::fs::read(&b).unwrap());
    }
}

#[test]
fn test_orders_differ_only_in_layout() {
    let scratch = Scratch::new("props-layout");
    let le = scratch.path("le.bin");
    let be = scratch.path("be.bin");
    generate(64, ByteOrder::Little, &le).unwrap();
    generate(64, ByteOrder::Big, &be).unwrap();

    let le = std::fs::read(&le).unwrap();
    let be = std::fs::read(&be).unwrap();
    assert_eq!(le.len(), be.len());
    for (l, b) in le.chunks_exact(4).zip(be.chunks_exact(4)) {
        let reversed: Vec<u8> = b.iter().rev().copied().collect();
        assert_eq!(l, reversed.as_slice());
    }
}
