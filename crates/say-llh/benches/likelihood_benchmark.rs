use criterion::{Criterion, criterion_group, criterion_main};
use say_ad::Dual;
use say_llh::{BinLikelihood, LikelihoodKind, WeightMoments};
use std::hint::black_box;

fn make_bins(n: usize) -> Vec<(f64, f64, f64)> {
    (0..n)
        .map(|i| {
            let w_sum = 0.5 + (i as f64 * 7.3) % 120.0;
            let w2_sum = if i % 7 == 0 { 0.0 } else { 0.1 + (i as f64 * 1.7) % 40.0 };
            let k = ((w_sum + (i as f64 * 3.1) % 11.0 - 5.0).max(0.0)).round();
            (k, w_sum, w2_sum)
        })
        .collect()
}

fn bench_bin_likelihoods(c: &mut Criterion) {
    let bins = make_bins(10_000);

    for kind in LikelihoodKind::ALL {
        c.bench_function(&format!("{}_10k", kind), |b| {
            b.iter(|| {
                let mut acc = 0.0;
                for &(k, w, w2) in &bins {
                    acc += kind.ln_likelihood(k, w, w2).unwrap();
                }
                black_box(acc)
            })
        });
    }

    c.bench_function("say_mean_dual_10k", |b| {
        b.iter(|| {
            let mut acc = Dual::constant(0.0);
            for &(k, w, w2) in &bins {
                let lp = LikelihoodKind::SayMean
                    .ln_likelihood(k, Dual::var(w), Dual::constant(w2))
                    .unwrap();
                acc = acc + lp;
            }
            black_box(acc.dot)
        })
    });
}

fn bench_moments(c: &mut Criterion) {
    let weights: Vec<f64> = (0..100_000).map(|i| 0.2 + (i as f64 * 0.37) % 3.0).collect();
    c.bench_function("weight_moments_100k", |b| {
        b.iter(|| black_box(WeightMoments::from_weights(black_box(&weights))))
    });
}

criterion_group!(benches, bench_bin_likelihoods, bench_moments);
criterion_main!(benches);
