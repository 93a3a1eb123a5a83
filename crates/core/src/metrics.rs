//! Statistics collection and reporting for an encoding session.
//!
//! `EncodeStats` is updated by the encoder as it runs:
//! - Throughput (symbols in, bits and bytes out)
//! - Compression ratio
//! - Model activity (tree rebuilds, model resets)
//! - Timing information
//!
//! # Thread Safety
//!
//! The struct is plain data owned by one encoder. Sessions are sequential, so
//! no synchronization is needed.

use std::time::{Duration, Instant};

/// Counters and timing for one encoding session.
#[derive(Debug, Clone)]
pub struct EncodeStats {
    // === Timing ===
    /// When the session started
    pub start_time: Instant,

    /// When the session ended (set on completion)
    pub end_time: Option<Instant>,

    // === Input/Output ===
    /// Data symbols read from the byte source (end-of-stream marker excluded)
    pub input_symbols: u64,

    /// Code bits emitted, including the end-of-stream code but not padding
    pub output_bits: u64,

    /// Bytes handed to the byte sink, including the padded final byte
    pub output_bytes: u64,

    // === Model ===
    /// Code tables built (the initial one included)
    pub tree_rebuilds: u64,

    /// Frequency model resets at block boundaries
    pub model_resets: u64,
}

impl EncodeStats {
    /// Create new stats with start time set to now.
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            end_time: None,
            input_symbols: 0,
            output_bits: 0,
            output_bytes: 0,
            tree_rebuilds: 0,
            model_resets: 0,
        }
    }

    /// Mark the session as complete.
    pub fn complete(&mut self) {
        self.end_time = Some(Instant::now());
    }

    /// Get total duration (or current elapsed if not complete).
    pub fn duration(&self) -> Duration {
        match self.end_time {
            Some(end) => end.duration_since(self.start_time),
            None => self.start_time.elapsed(),
        }
    }

    /// Compute compression ratio (output bytes / input bytes).
    ///
    /// Returns 0.0 if nothing was read.
    pub fn compression_ratio(&self) -> f64 {
        if self.input_symbols == 0 {
            0.0
        } else {
            self.output_bytes as f64 / self.input_symbols as f64
        }
    }

    /// Average code length per input symbol.
    pub fn bits_per_symbol(&self) -> f64 {
        if self.input_symbols == 0 {
            0.0
        } else {
            self.output_bits as f64 / self.input_symbols as f64
        }
    }

    /// Compute throughput in input bytes/second.
    pub fn throughput_bps(&self) -> f64 {
        let duration_secs = self.duration().as_secs_f64();
        if duration_secs == 0.0 {
            0.0
        } else {
            self.input_symbols as f64 / duration_secs
        }
    }

    /// Print a human-readable summary to stdout.
    pub fn print_summary(&self) {
        println!("\n=== Encode Summary ===");
        println!("Duration: {} ms", self.duration().as_millis());
        println!();

        println!("Input:  {} bytes ({:.2} MiB)", self.input_symbols, self.input_symbols as f64 / 1024.0 / 1024.0);
        println!("Output: {} bytes ({:.2} MiB)", self.output_bytes, self.output_bytes as f64 / 1024.0 / 1024.0);
        println!("Ratio: {:.1}%", self.compression_ratio() * 100.0);
        println!("Bits/symbol: {:.3}", self.bits_per_symbol());
        println!();

        println!("=== Model ===");
        println!("Tree rebuilds: {}", self.tree_rebuilds);
        println!("Model resets: {}", self.model_resets);
        println!();

        println!("=== Performance ===");
        println!("Throughput: {:.2} MB/s", self.throughput_bps() / 1_000_000.0);
        println!();
    }

    /// Export stats as a simple text format (for parsing/testing).
    pub fn export_text(&self) -> String {
        format!(
            "duration_ms={}\n\
             input_symbols={}\n\
             output_bits={}\n\
             output_bytes={}\n\
             compression_ratio={:.4}\n\
             bits_per_symbol={:.4}\n\
             tree_rebuilds={}\n\
             model_resets={}\n",
            self.duration().as_millis(),
            self.input_symbols,
            self.output_bits,
            self.output_bytes,
            self.compression_ratio(),
            self.bits_per_symbol(),
            self.tree_rebuilds,
            self.model_resets,
        )
    }
}

impl Default for EncodeStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_creation() {
        let stats = EncodeStats::new();
        assert!(stats.end_time.is_none());
        assert_eq!(stats.compression_ratio(), 0.0);
        assert_eq!(stats.bits_per_symbol(), 0.0);
    }

    #[test]
    fn test_compression_ratio() {
        let mut stats = EncodeStats::new();
        stats.input_symbols = 1000;
        stats.output_bytes = 750;
        stats.output_bits = 6000;

        assert_eq!(stats.compression_ratio(), 0.75);
        assert_eq!(stats.bits_per_symbol(), 6.0);
    }

    #[test]
    fn test_complete_freezes_duration() {
        let mut stats = EncodeStats::new();
        stats.complete();

        let first = stats.duration();
        std::thread::sleep(Duration::from_millis(5));
        assert_eq!(stats.duration(), first);
    }

    #[test]
    fn test_export_text() {
        let mut stats = EncodeStats::new();
        stats.input_symbols = 1000;
        stats.tree_rebuilds = 11;
        stats.model_resets = 0;

        let text = stats.export_text();
        assert!(text.contains("input_symbols=1000"));
        assert!(text.contains("tree_rebuilds=11"));
        assert!(text.contains("model_resets=0"));
    }
}
