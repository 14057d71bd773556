#![no_main]

use std::collections::BTreeMap;
use std::io;

use libfuzzer_sys::fuzz_target;

use tabscribe_core::{LayoutWriter, StringId, TabSource};

struct FuzzSource {
    strings: Vec<(StringId, Vec<u8>)>,
    order: Vec<StringId>,
}

impl TabSource for FuzzSource {
    fn snapshot(&self) -> BTreeMap<StringId, &[u8]> {
        self.strings
            .iter()
            .map(|(id, bytes)| (*id, bytes.as_slice()))
            .collect()
    }

    fn order(&self) -> &[StringId] {
        &self.order
    }
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte picks the wrap width, second the track count
    let wrap = usize::from(data[0]);
    let tracks = usize::from(data[1] % 8) + 1;
    let body = &data[2..];
    let chunk = body.len() / tracks;

    let strings: Vec<(StringId, Vec<u8>)> = (0..tracks)
        .map(|i| {
            (
                StringId::new(b'A' + u8::try_from(i).unwrap()),
                body[i * chunk..(i + 1) * chunk].to_vec(),
            )
        })
        .collect();
    let order = strings.iter().map(|(id, _)| *id).collect();
    let source = FuzzSource { strings, order };

    // Staging and exporting must never panic
    let mut writer = LayoutWriter::with_wrap(io::sink(), wrap);
    writer.stage(&source);
    writer.stage(&source);
    let _ = writer.export(&source);
});
