use crate::*;

#[test]
fn test_little_endian_file() {
    let scratch = Scratch::new("files-le");
    let out = scratch.path("le.bin");

    let written = generate(1, ByteOrder::Little, &out).unwrap();
    assert_eq!(written, 4);
    assert_eq!(std::fs::read(&out).unwrap(), LE_GROUP);
}

#[test]
fn test_big_endian_file() {
    let scratch = Scratch::new("files-be");
    let out = scratch.path("be.bin");

    generate(5, ByteOrder::Big, &out).unwrap();
    assert_eq!(std::fs::read(&out).unwrap(), [BE_GROUP, BE_GROUP].concat());
}

#[test]
fn test_aligned_size_rounds_past_itself() {
    let scratch = Scratch::new("files-aligned");
    let out = scratch.path("aligned.bin");

    generate(4, ByteOrder::Little, &out).unwrap();
    assert_eq!(std::fs::metadata(&out).unwrap().len(), 8);
}

#[test]
fn test_regenerate_overwrites_previous_output() {
    let scratch = Scratch::new("files-overwrite");
    let out = scratch.path("same.bin");

    generate(4096, ByteOrder::Big, &out).unwrap();
    generate(2, ByteOrder::Little, &out).unwrap();
    assert_eq!(std::fs::read(&out).unwrap(), LE_GROUP);
}

#[test]
fn test_zero_size_creates_nothing() {
    let scratch = Scratch::new("files-zero");
    let out = scratch.path("zero.bin");

    assert!(generate(0, ByteOrder::Little, &out).is_err());
    assert!(!out.exists());
}

#[test]
fn test_open_failure_is_reported() {
    let scratch = Scratch::new("files-open");
    let out = scratch.path("no-such-dir").join("x.bin");

    let err = generate(8, ByteOrder::Big, &out).unwrap_err();
    let open_err = err
        .downcast_ref::<noopbin_core::OutputError>()
        .expect("expected an OutputError");
    assert!(matches!(open_err, noopbin_core::OutputError::Open(p, _) if p == &out));
}
