use std::collections::HashMap;

pub fn get_types<'a>() -> HashMap<&'a str, u64> {
    const ENTRIES: [(&str, u64); 5] = [
        ("natural.water", 5),
        ("highway.primary", 12),
        ("amenity.*", 0),
        ("name \"quoted\"\\path", 18446744073709551615),
        ("rtl\u{202e}mark", 7),
    ];
    ENTRIES.iter().copied().collect()
}
