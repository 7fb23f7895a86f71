#![no_main]

use libfuzzer_sys::fuzz_target;
use say_llh::{BinLikelihood, LikelihoodKind};

fuzz_target!(|data: &[u8]| {
    if data.len() < 20 {
        return;
    }

    // k: integer count; w_sum / w2_sum: any finite non-negative value.
    let in_range = |x: f64| x.is_finite();
    let k = f64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]]) % 100_000);
    let w_sum = f64::from_le_bytes(data[4..12].try_into().unwrap()).abs();
    let w2_sum = f64::from_le_bytes(data[12..20].try_into().unwrap()).abs();
    if !in_range(w_sum) || !in_range(w2_sum) {
        return;
    }

    for kind in LikelihoodKind::ALL {
        let lp = kind.ln_likelihood(k, w_sum, w2_sum).unwrap();
        assert!(!lp.is_nan(), "{} k={} w_sum={:e} w2_sum={:e}", kind, k, w_sum, w2_sum);
    }
});
