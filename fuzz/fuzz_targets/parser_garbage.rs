#![no_main]

use argsift::CommandArgs;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // One token per input byte.
    let byte_args: Vec<String> = data.iter().map(|&b| format!("{}", b as char)).collect();
    let mut args = vec!["fuzz"];
    args.extend(byte_args.iter().map(String::as_str));

    if let Ok(parsed) = CommandArgs::from_arbitrary(args) {
        let _ = parsed.get_bool("h");
        let _ = parsed.to_string();
    }

    // NUL-split tokens out of the raw input.
    let text = String::from_utf8_lossy(data);
    let mut args = vec!["fuzz"];
    args.extend(text.split('\0'));

    if let Ok(parsed) = CommandArgs::from_arbitrary(args) {
        for key in parsed.values().keys() {
            let _ = parsed.get_as::<i64>(key);
        }
        let _ = parsed.to_string();
    }
});
