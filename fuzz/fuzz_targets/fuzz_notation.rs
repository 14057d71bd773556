#![no_main]

use libfuzzer_sys::fuzz_target;

use tabscribe_core::TabSource;
use tabscribe_instrument::{parse_line, Instrument, InstrumentKind};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let mut instrument = Instrument::new(InstrumentKind::Guitar);
    for line in text.lines() {
        // Parsing must never panic; applying valid ops must never panic
        if let Ok(ops) = parse_line(line, instrument.order()) {
            instrument.apply(&ops);
        }
    }
});
