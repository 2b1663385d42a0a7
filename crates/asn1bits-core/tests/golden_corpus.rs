use asn1bits_core::encoding::{decode_content, encode_content, Reader, Writer};
use std::fs;
use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .canonicalize()
        .expect("workspace root should be resolvable")
}

struct Fixture {
    bits: u32,
    bytes: Vec<u8>,
}

fn parse_hex_fixture(path: &Path) -> Fixture {
    let content = fs::read_to_string(path).expect("fixture must be readable");
    let mut bits = None;
    let mut bytes = Vec::new();
    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(directive) = trimmed.strip_prefix("# bits:") {
            bits = Some(
                directive
                    .trim()
                    .parse()
                    .unwrap_or_else(|_| panic!("bad bit count in {}", path.display())),
            );
            continue;
        }
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        for token in trimmed.split_whitespace() {
            let byte = u8::from_str_radix(token, 16)
                .unwrap_or_else(|_| panic!("invalid hex token '{token}' in {}", path.display()));
            bytes.push(byte);
        }
    }
    Fixture {
        bits: bits.unwrap_or_else(|| panic!("{} is missing a '# bits:' line", path.display())),
        bytes,
    }
}

#[test]
fn content_fixtures_decode_and_reencode() {
    let fixture_dir = workspace_root().join("fixtures/content");
    let mut fixture_files = fs::read_dir(&fixture_dir)
        .expect("fixtures directory should exist")
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "hex"))
        .collect::<Vec<_>>();
    fixture_files.sort();
    assert!(
        !fixture_files.is_empty(),
        "expected at least one corpus fixture in {}",
        fixture_dir.display()
    );

    for path in fixture_files {
        let fixture = parse_hex_fixture(&path);
        let mut r = Reader::new(&fixture.bytes);
        let bits = decode_content(&mut r).unwrap_or_else(|e| {
            panic!("fixture {} failed to decode: {e}", path.display())
        });
        assert_eq!(bits.len(), fixture.bits, "fixture {}", path.display());
        assert_eq!(bits.value(), &fixture.bytes[1..], "fixture {}", path.display());

        let mut buf = vec![0u8; fixture.bytes.len()];
        let mut w = Writer::new(&mut buf);
        encode_content(&bits, &mut w)
            .unwrap_or_else(|e| panic!("fixture {} failed to encode: {e}", path.display()));
        assert_eq!(w.as_written(), fixture.bytes.as_slice(), "fixture {}", path.display());
    }
}
