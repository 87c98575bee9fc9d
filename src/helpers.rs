/// Formats a metric value without a trailing `.0`, keeping at most two
/// decimals otherwise.
pub fn fmt_num(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{}", v as i64)
    } else {
        let s = format!("{:.2}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

pub fn percent(v: f64) -> String {
    format!("{}%", fmt_num(v))
}

/// Composite display for a scheduler resource vector.
pub fn resource_pair(memory: i64, v_cores: i64) -> String {
    format!("memory: {}, vCores: {}", memory, v_cores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_num_trims_integral_values() {
        assert_eq!(fmt_num(10.0), "10");
        assert_eq!(fmt_num(0.0), "0");
    }

    #[test]
    fn fmt_num_keeps_fractions_short() {
        assert_eq!(fmt_num(40.5), "40.5");
        assert_eq!(fmt_num(33.333), "33.33");
    }

    #[test]
    fn percent_appends_sign() {
        assert_eq!(percent(10.0), "10%");
        assert_eq!(percent(87.5), "87.5%");
    }

    #[test]
    fn resource_pair_matches_display_format() {
        assert_eq!(resource_pair(2048, 2), "memory: 2048, vCores: 2");
    }
}
