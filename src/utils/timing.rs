use std::time::Duration;

/// Render a duration in the coarsest unit that is not zero
pub fn format_elapsed(elapsed: Duration) -> String {
    let millis = elapsed.as_millis();
    if millis > 0 {
        return format!("(milliseconds): {}", millis);
    }

    let micros = elapsed.as_micros();
    if micros > 0 {
        return format!("(microseconds): {}", micros);
    }

    format!("(nanoseconds): {}", elapsed.as_nanos())
}

pub fn summary_line(count: usize, elapsed: Duration) -> String {
    let found = match count {
        0 => "No solution".to_string(),
        1 => "1 solution".to_string(),
        n => format!("{} solutions", n),
    };
    format!("-=- {}, time taken {} -=-", found, format_elapsed(elapsed))
}
