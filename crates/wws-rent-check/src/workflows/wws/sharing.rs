/// Round to two decimals, half away from zero.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Sharer count to divide by when a section is shared. A shared section with a missing or
/// zero count is treated as used by the tenant alone.
pub(crate) fn sharers_for(shared: bool, sharer_count: Option<u32>) -> Option<u32> {
    shared.then(|| sharer_count.filter(|count| *count > 0).unwrap_or(1))
}

/// Divide a shared facility's points among the households using it.
pub(crate) fn allocate_shared(points: f64, sharer_count: u32) -> f64 {
    if sharer_count <= 1 {
        return points;
    }
    round2(points / f64::from(sharer_count))
}
