//! Example: Sample the input mode a few times and print each snapshot.
//!
//! Run with: cargo run -p hanmode-probe --example sample_mode

use hanmode_probe::InputModeProbe;
use std::time::Duration;

fn main() {
    // Initialize tracing for debug output
    tracing_subscriber::fmt()
        .with_env_filter("hanmode_probe=trace")
        .with_writer(std::io::stderr)
        .init();

    println!("=== Input Mode Sampler ===");
    println!("Sampling every second. Switch the IME to see changes.\n");

    let probe = InputModeProbe::platform();

    for _ in 0..10 {
        let snapshot = probe.snapshot();
        match serde_json::to_string(&snapshot) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("failed to serialize snapshot: {e}"),
        }
        std::thread::sleep(Duration::from_secs(1));
    }

    println!("\nDone.");
}
