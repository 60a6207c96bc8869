//! # Model Intelligence
//!
//! Secondary descriptive attributes carried alongside a model's
//! regulatory fields: popularity and download metrics, hardware
//! requirements at common quantization levels, and usage hints. Every
//! field is optional; the shape is shared verbatim between raw records
//! (flattened at the top level) and the canonical model (nested under
//! `intelligence`).
//!
//! The `hf_downloads` / `hf_likes` pair is maintained by an out-of-band
//! metrics sync keyed on `huggingface_id`, so those three fields travel
//! together through normalization untouched.

use serde::{Deserialize, Serialize};

/// Optional descriptive metadata for one model.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelIntelligence {
    /// Editorial popularity band (e.g., `"Very High"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity_index: Option<String>,
    /// Representative decode throughput in tokens per second.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inference_speed: Option<f64>,
    /// Context window in tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_window: Option<u64>,
    /// Training data cutoff (free text, e.g., `"2025-06"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_cutoff: Option<String>,
    /// VRAM needed at 4-bit quantization, in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vram_4bit_gb: Option<f64>,
    /// VRAM needed at 8-bit quantization, in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vram_8bit_gb: Option<f64>,
    /// System RAM needed at 4-bit quantization, in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_4bit_gb: Option<f64>,
    /// System RAM needed at 8-bit quantization, in GB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ram_8bit_gb: Option<f64>,
    /// Whether GGUF quantized builds are published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantization_gguf: Option<bool>,
    /// Whether EXL2 quantized builds are published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantization_exl2: Option<bool>,
    /// Recent download counts, oldest first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_trend: Option<Vec<u64>>,
    /// Editorial top use cases.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_use_cases: Option<Vec<String>>,
    /// Hugging Face download count, from the metrics sync.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hf_downloads: Option<u64>,
    /// Hugging Face like count, from the metrics sync.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hf_likes: Option<u64>,
    /// Hugging Face model id the metrics sync matches on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub huggingface_id: Option<String>,
}

impl ModelIntelligence {
    /// True when at least one field carries data.
    ///
    /// The normalizer attaches an `intelligence` block to a canonical
    /// model only when this holds; an all-empty block is dropped rather
    /// than serialized as noise.
    pub fn is_populated(&self) -> bool {
        self.popularity_index.is_some()
            || self.inference_speed.is_some()
            || self.context_window.is_some()
            || self.training_cutoff.is_some()
            || self.vram_4bit_gb.is_some()
            || self.vram_8bit_gb.is_some()
            || self.ram_4bit_gb.is_some()
            || self.ram_8bit_gb.is_some()
            || self.quantization_gguf.is_some()
            || self.quantization_exl2.is_some()
            || self.download_trend.is_some()
            || self.top_use_cases.is_some()
            || self.hf_downloads.is_some()
            || self.hf_likes.is_some()
            || self.huggingface_id.is_some()
    }
}
