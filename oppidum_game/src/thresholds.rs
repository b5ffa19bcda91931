use oppidum_types::common::{Stat, StatLine};

/// The four fixed tiers a stat total is measured against.
pub const STAT_THRESHOLDS: [u32; 4] = [15, 50, 75, 100];

/// How many tiers a stat value meets or exceeds (0..=4). Monotonic in the
/// value.
pub fn count_thresholds(value: u32) -> u8 {
    STAT_THRESHOLDS.iter().filter(|t| value >= **t).count() as u8
}

/// Per-stat threshold counts in canonical stat order.
pub fn count_all(totals: &StatLine) -> [u8; 4] {
    [
        count_thresholds(totals.get(Stat::Agriculture)),
        count_thresholds(totals.get(Stat::Mining)),
        count_thresholds(totals.get(Stat::Military)),
        count_thresholds(totals.get(Stat::Commerce)),
    ]
}

/// Fixed-width four-glyph indicator, one filled glyph per tier met.
pub fn threshold_gauge(count: u8) -> String {
    let filled = count.min(4) as usize;
    let mut gauge = String::new();
    for _ in 0..filled {
        gauge.push('●');
    }
    for _ in filled..4 {
        gauge.push('○');
    }
    gauge
}

/// Severity classes for presentation, strictly monotonic in the tier count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ThresholdGrade {
    None,
    Low,
    Medium,
    High,
    Max,
}

impl ThresholdGrade {
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => ThresholdGrade::None,
            1 => ThresholdGrade::Low,
            2 => ThresholdGrade::Medium,
            3 => ThresholdGrade::High,
            _ => ThresholdGrade::Max,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ThresholdGrade::None => "none",
            ThresholdGrade::Low => "low",
            ThresholdGrade::Medium => "medium",
            ThresholdGrade::High => "high",
            ThresholdGrade::Max => "max",
        }
    }
}
