use crate::benchmark::{BenchmarkConfig, Measurements};
use crate::black_box;
use crate::error::Result;
use crate::measurement::Measurement;
use crate::report::Report;

/// Times `f` once per input size (or `sample_size` times, keeping the mean), in order, and hands
/// every row to `report` as soon as it is measured.
pub(crate) fn measure<M, F>(
    measurement: &M,
    config: &BenchmarkConfig,
    report: &mut dyn Report,
    mut f: F,
) -> Result<Measurements>
where
    M: Measurement,
    F: FnMut(u64) -> u64,
{
    let sizes = &config.input_sizes;
    let mut measurements = Measurements::with_capacity(sizes.len());

    for n in sizes.iter() {
        let mut total = measurement.zero();
        let mut result = 0;
        for _ in 0..config.sample_size {
            let start = measurement.start();
            result = black_box(f(black_box(n)));
            let end = measurement.end(start);
            total = measurement.add(&total, &end);
        }
        let seconds = measurement.to_seconds(&total) / config.sample_size as f64;
        info!("n = {}: {} invocation(s), mean {} s", n, config.sample_size, seconds);

        measurements.push(n, result, seconds);
        report.measurement_complete(n, result, seconds)?;
    }

    Ok(measurements)
}
