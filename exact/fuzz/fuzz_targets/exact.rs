#![no_main]
use libfuzzer_sys::fuzz_target;

use exact::{run_exact, Opts};

fuzz_target!(|program: String| {
    run_exact(Opts {
        program,
        ..Opts::default()
    });
});
