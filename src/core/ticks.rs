const SECONDS_PER_DAY: f64 = 86_400.0;

/// "Nice round numbers" linear tick generation.
///
/// Tick step is 1, 2, or 5 times a power of ten chosen so roughly
/// `target_count` ticks land inside `[start, end]`. Returned ticks lie
/// within the domain bounds and are strictly increasing.
#[must_use]
pub fn nice_linear_ticks(start: f64, end: f64, target_count: usize) -> Vec<f64> {
    if target_count == 0 || !start.is_finite() || !end.is_finite() || start >= end {
        return Vec::new();
    }

    let step = nice_step((end - start) / target_count as f64);
    ticks_with_step(start, end, step)
}

/// Time ticks over unix seconds, snapped to whole-day multiples.
///
/// Uses the same nice-step ladder as `nice_linear_ticks` but never steps
/// finer than one day, so date labels stay distinct.
#[must_use]
pub fn day_aligned_time_ticks(start: f64, end: f64, target_count: usize) -> Vec<f64> {
    if target_count == 0 || !start.is_finite() || !end.is_finite() || start >= end {
        return Vec::new();
    }

    let raw_step_days = (end - start) / SECONDS_PER_DAY / target_count as f64;
    let step_days = nice_step(raw_step_days).max(1.0);
    ticks_with_step(start, end, step_days * SECONDS_PER_DAY)
}

/// Rounds a raw step up to the nearest 1/2/5 x 10^k value.
fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }

    let power = 10_f64.powf(raw.log10().floor());
    let fraction = raw / power;
    let nice_fraction = if fraction > 5.0 {
        10.0
    } else if fraction > 2.0 {
        5.0
    } else if fraction > 1.0 {
        2.0
    } else {
        1.0
    };
    nice_fraction * power
}

fn ticks_with_step(start: f64, end: f64, step: f64) -> Vec<f64> {
    if !step.is_finite() || step <= 0.0 {
        return Vec::new();
    }

    let first = (start / step).ceil();
    let last = (end / step).floor();
    if last < first {
        return Vec::new();
    }

    let mut ticks = Vec::with_capacity((last - first) as usize + 1);
    let mut index = first;
    while index <= last {
        let tick = index * step;
        // Guard against float drift pushing a tick past the domain edge.
        if tick >= start && tick <= end {
            ticks.push(tick);
        }
        index += 1.0;
    }
    ticks
}
