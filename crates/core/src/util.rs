/// A macro to measure the evaluation time of an expression. Wraps an
/// expression, logs the elapsed time, and evaluates to the value of the
/// expression. The log level defaults to debug.
#[macro_export]
macro_rules! timed {
    ($label:expr, $ex:expr) => {
        $crate::timed!($label, ::log::Level::Debug, $ex)
    };
    ($label:expr, $log_level:expr, $ex:expr) => {{
        let now = std::time::Instant::now();
        let value = $ex;
        let elapsed = now.elapsed();
        ::log::log!($log_level, "{} took {} ms", $label, elapsed.as_millis());
        value
    }};
}

/// Calculate the number of hexes in a neighborhood of the given number of
/// layers, NOT including the center hex. 0 layers is 0 hexes, 1 is 6, 2 is
/// 18, etc. Returns `None` if the count doesn't fit in a `usize`.
pub fn neighborhood_len(layers: u32) -> Option<usize> {
    // Each layer n adds a ring of 6n hexes, so the sum over 1..=L is
    // 6 * L(L+1)/2 = 3L(L+1)
    let l = usize::try_from(layers).ok()?;
    l.checked_add(1)?.checked_mul(l)?.checked_mul(3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighborhood_len() {
        assert_eq!(neighborhood_len(0), Some(0));
        assert_eq!(neighborhood_len(1), Some(6));
        assert_eq!(neighborhood_len(2), Some(18));
        assert_eq!(neighborhood_len(3), Some(36));
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_neighborhood_len_overflow() {
        // 3 * 2^32 * (2^32 - 1) is just over u64::MAX
        assert_eq!(neighborhood_len(u32::MAX), None);
        assert_eq!(
            neighborhood_len(1 << 30),
            Some(3 * (1 << 30) * ((1 << 30) + 1))
        );
    }

    #[test]
    fn test_timed() {
        let value = timed!("Addition", 1 + 2);
        assert_eq!(value, 3);
        let value = timed!("Subtraction", log::Level::Trace, 5 - 2);
        assert_eq!(value, 3);
    }
}
