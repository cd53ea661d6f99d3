#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(cron) = cron_parser::parser::parse_bytes(data) {
        let rendered = cron.to_string();
        assert_eq!(rendered.lines().count(), 6, "table must have six rows");
        for field in cron.fields() {
            let values = field.values();
            assert!(values.windows(2).all(|w| w[0] < w[1]), "values not ascending");
        }
    }
});
