#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Parse should never panic, only return Ok or Err
    let _ = cron_parser::parser::parse_bytes(data);
});
