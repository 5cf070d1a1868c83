//! CRC32 derivation of constructor IDs for definitions written without `#id`.

const TABLE: [u32; 256] = build_table();

const fn build_table() -> [u32; 256] {
    let mut table = [0u32; 256];
    let mut i = 0;
    while i < 256 {
        let mut c = i as u32;
        let mut k = 0;
        while k < 8 {
            c = if c & 1 != 0 { 0xEDB8_8320 ^ (c >> 1) } else { c >> 1 };
            k += 1;
        }
        table[i] = c;
        i += 1;
    }
    table
}

/// IEEE CRC-32 of `data`.
pub(crate) fn crc32(data: &[u8]) -> u32 {
    !data.iter().fold(!0u32, |crc, &b| {
        TABLE[((crc ^ u32::from(b)) & 0xff) as usize] ^ (crc >> 8)
    })
}

/// Constructor ID of a definition line without an explicit `#id`.
///
/// The checksum covers the definition with its whitespace collapsed and
/// the `= Type` part kept, which is how the schema compiler derives IDs.
pub(crate) fn derived_id(definition: &str) -> u32 {
    let normalized = definition
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    crc32(normalized.trim_end_matches(';').trim_end().as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_value() {
        assert_eq!(crc32(b"123456789"), 0xcbf4_3926);
    }

    #[test]
    fn bool_false_id() {
        assert_eq!(derived_id("boolFalse = Bool"), 0xbc79_9737);
        assert_eq!(derived_id("boolFalse   =  Bool;"), 0xbc79_9737);
    }
}
