use std::time::Instant;

use tm_core::PrefixMatcher;

pub struct BenchOptions {
    pub iterations: usize,
    pub warmup_ops: usize,
}

pub struct BenchReport {
    pub lookups: usize,
    pub hits: usize,
    pub p50_us: f64,
    pub p99_us: f64,
    pub total_ms: f64,
}

pub fn run_bench(matcher: &PrefixMatcher, inputs: &[String], opts: &BenchOptions) -> Result<BenchReport, String> {
    if inputs.is_empty() {
        return Err("No inputs to benchmark".to_string());
    }

    for _ in 0..opts.warmup_ops {
        for input in inputs {
            let _ = matcher.find_longest_prefix(input);
        }
    }

    let start = Instant::now();
    let mut latencies = Vec::with_capacity(opts.iterations * inputs.len());
    let mut hits = 0usize;

    for _ in 0..opts.iterations {
        for input in inputs {
            let op_start = Instant::now();
            let found = matcher.find_longest_prefix(input);
            latencies.push(op_start.elapsed().as_secs_f64() * 1_000_000.0);
            if found.is_some() {
                hits += 1;
            }
        }
    }

    let total_ms = start.elapsed().as_secs_f64() * 1000.0;
    latencies.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    Ok(BenchReport {
        lookups: latencies.len(),
        hits,
        p50_us: percentile(&latencies, 0.50),
        p99_us: percentile(&latencies, 0.99),
        total_ms,
    })
}

pub fn print_report(report: &BenchReport) {
    println!("Lookup Benchmark");
    println!("==================================================");
    println!("  Lookups:     {}", report.lookups);
    println!("  Hits:        {}", report.hits);
    println!("  P50:         {:.3} μs", report.p50_us);
    println!("  P99:         {:.3} μs", report.p99_us);
    println!("  Total:       {:.1} ms", report.total_ms);
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let idx = ((sorted.len() as f64) * p).ceil() as usize;
    let idx = idx.saturating_sub(1).min(sorted.len() - 1);
    sorted[idx]
}
