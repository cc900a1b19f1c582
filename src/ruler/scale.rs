//! Zoom-dependent tick spacing and label placement.

/// Returns the logical distance between two ruler ticks at `zoom`.
///
/// The interval shrinks as the zoom grows so ticks stay roughly 50 - 100
/// device pixels apart. Bands up to 0.5 include their upper bound, bands from
/// 1 upwards exclude it. NaN falls through to the default of 100.
pub fn tick_interval(zoom: f64) -> f64 {
    if zoom <= 0.02 {
        5000.0
    } else if zoom <= 0.05 {
        2500.0
    } else if zoom <= 0.1 {
        1000.0
    } else if zoom <= 0.2 {
        500.0
    } else if zoom <= 0.5 {
        250.0
    } else if zoom < 1.0 {
        100.0
    } else if zoom < 2.0 {
        50.0
    } else if zoom < 5.0 {
        25.0
    } else if zoom < 10.0 {
        10.0
    } else if zoom < 15.0 {
        5.0
    } else if zoom >= 15.0 {
        2.0
    } else {
        100.0
    }
}

/// Distance, in device pixels, a tick label is nudged toward the start of
/// its axis so multi-digit and negative numbers stay aligned with the tick.
pub fn marker_text_offset(value: f64) -> f64 {
    if value == 0.0 {
        return 3.0;
    }
    let digits = value.abs().log10().floor() + 1.0;
    if digits == 1.0 {
        3.0
    } else if value > 0.0 {
        3.0 + digits
    } else {
        5.0 + digits
    }
}

/// Rounds to the nearest integer with halves going toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Formats a canvas coordinate for display on the ruler.
///
/// Whole numbers print without a fractional part and negative zero prints as
/// `0`.
pub fn format_coordinate(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}
