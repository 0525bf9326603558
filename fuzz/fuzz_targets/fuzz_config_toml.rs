#![no_main]

use libfuzzer_sys::fuzz_target;

use archlab::config::{apply_env_overrides, Config};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing must never panic, and whatever parses must survive env
    // overrides fed from the same input
    if let Ok(config) = toml::from_str::<Config>(content) {
        let mut sink = Vec::new();
        let _ = apply_env_overrides(config, |_| Some(content.to_string()), &mut sink);
    }
});
