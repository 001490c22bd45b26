//! Round trip checks that serialized configuration deserializes unchanged.
#![cfg(feature = "serde")]
use girih::{builtin::default_config, CodeMap, Config};

fn test_codes() -> CodeMap {
    [
        "q", "f", "space", "h", "j", "k", "l", "z", "v", "s", "w", "e", "n", "b", "u", "c", "Tab",
        "1", "2", "3", "4", "5", "6", "7", "8", "9", "0",
    ]
    .iter()
    .enumerate()
    .map(|(i, name)| (name.to_string(), i as u8 + 10))
    .collect()
}

#[test]
fn the_default_config_round_trips_through_json() {
    let config = default_config(&test_codes()).unwrap();

    let json = serde_json::to_string(&config).unwrap();
    let parsed: Config = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, config);
}
