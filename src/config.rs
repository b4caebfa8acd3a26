use std::{fs, path::Path};

use anyhow::{bail, Context};
use serde::Deserialize;

use crate::codec::CodecKind;

/// Settings for the correctness and enumeration runs of the binary.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HarnessConfig {
    /// Permutation sizes checked with rank/unrank round trips.
    pub sizes: Vec<usize>,
    /// Sizes fully enumerated by the generator.
    pub enumerate_sizes: Vec<usize>,
    pub num_threads: usize,
    pub seed: u64,
    pub message: String,
    pub codecs: Vec<CodecKind>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            sizes: vec![1_000, 10_000],
            enumerate_sizes: (1..=10).collect(),
            num_threads: 16,
            seed: 20260204,
            message: "Official implementation of the Position Pure (PP) linear-time algorithm."
                .to_string(),
            codecs: CodecKind::ALL.to_vec(),
        }
    }
}

impl HarnessConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.num_threads == 0 {
            bail!("num_threads must be greater than 0");
        }
        if self.codecs.is_empty() {
            bail!("at least one codec must be selected");
        }
        Ok(())
    }
}
