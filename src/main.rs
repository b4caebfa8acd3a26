use std::time::Instant;

use anyhow::Context;
use permcodec::{
    config::HarnessConfig,
    parallel::enumerate_parallel,
    validate::{verify_enumeration, verify_round_trips},
    ShuffleCipher,
};
use tracing::{info, warn};

const MAX_VERIFIED_ENUMERATION: usize = 8;

fn run_round_trips(config: &HarnessConfig) -> anyhow::Result<()> {
    info!("round trip validation");
    for &n in &config.sizes {
        verify_round_trips(n, config.seed, &config.codecs)
            .inspect_err(|e| warn!(n, error = %e, "round trip failed"))
            .with_context(|| format!("round trip for n = {n}"))?;
    }
    for &n in config
        .enumerate_sizes
        .iter()
        .filter(|&&n| n <= MAX_VERIFIED_ENUMERATION)
    {
        verify_enumeration(n)
            .inspect_err(|e| warn!(n, error = %e, "enumeration check failed"))
            .with_context(|| format!("enumeration for n = {n}"))?;
    }
    println!("[SUCCESS] codecs and generator passed validation");
    Ok(())
}

fn run_cipher(config: &HarnessConfig) {
    let cipher = ShuffleCipher::new(config.seed);
    let encrypted = cipher.encrypt(config.message.as_bytes());
    let recovered = cipher.decrypt(&encrypted);
    println!("Original:  {}", config.message);
    println!("Cipher:    {}", String::from_utf8_lossy(&encrypted));
    println!("Recovered: {}", String::from_utf8_lossy(&recovered));
}

fn run_enumeration(config: &HarnessConfig) -> anyhow::Result<()> {
    info!(threads = config.num_threads, "enumeration");
    println!("   N: # of permutations, checksum, time");
    for &n in &config.enumerate_sizes {
        let instant = Instant::now();
        let summary = enumerate_parallel(n, config.num_threads)?;
        println!(
            "{:>4}: {}, {}, {:?}",
            n,
            summary.count,
            summary.checksum,
            instant.elapsed()
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = match std::env::args().nth(1) {
        Some(path) => HarnessConfig::load(path)?,
        None => {
            let config = HarnessConfig::default();
            config.validate()?;
            config
        }
    };

    run_round_trips(&config)?;
    run_cipher(&config);
    run_enumeration(&config)?;
    Ok(())
}
