//! Evaluator test modules.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
#![allow(
    clippy::float_cmp,
    reason = "Tests assert exact IEEE results by contract"
)]
