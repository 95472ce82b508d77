//! Benchmark and demo crate for the `unilist` container.
//!
//! Holds the criterion micro-benchmarks (`benches/`) and the runnable
//! walkthroughs (`examples/`). No library code of its own.
