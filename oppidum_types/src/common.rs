use serde::{Deserialize, Serialize};

/// The four production stats tracked by the planner, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    Agriculture,
    Mining,
    Military,
    Commerce,
}

impl Stat {
    pub const ALL: [Stat; 4] = [
        Stat::Agriculture,
        Stat::Mining,
        Stat::Military,
        Stat::Commerce,
    ];

    pub fn abbr(&self) -> &'static str {
        match self {
            Stat::Agriculture => "agr",
            Stat::Mining => "min",
            Stat::Military => "mil",
            Stat::Commerce => "com",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Stat::Agriculture => "agriculture",
            Stat::Mining => "mining",
            Stat::Military => "military",
            Stat::Commerce => "commerce",
        }
    }
}

/// (agriculture, mining, military, commerce)
#[derive(Debug, Default, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatLine(pub u32, pub u32, pub u32, pub u32);

impl StatLine {
    pub const fn new(agriculture: u32, mining: u32, military: u32, commerce: u32) -> Self {
        Self(agriculture, mining, military, commerce)
    }

    pub fn total(&self) -> u32 {
        self.0 + self.1 + self.2 + self.3
    }

    pub fn agriculture(&self) -> u32 {
        self.0
    }
    pub fn mining(&self) -> u32 {
        self.1
    }
    pub fn military(&self) -> u32 {
        self.2
    }
    pub fn commerce(&self) -> u32 {
        self.3
    }

    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Agriculture => self.0,
            Stat::Mining => self.1,
            Stat::Military => self.2,
            Stat::Commerce => self.3,
        }
    }

    /// True when every component reaches the corresponding target.
    /// A target of 0 is always satisfied.
    pub fn meets(&self, target: &StatLine) -> bool {
        self.0 >= target.0 && self.1 >= target.1 && self.2 >= target.2 && self.3 >= target.3
    }
}

impl core::ops::Add for StatLine {
    type Output = StatLine;

    fn add(self, rhs: StatLine) -> Self::Output {
        StatLine(
            self.0.saturating_add(rhs.0),
            self.1.saturating_add(rhs.1),
            self.2.saturating_add(rhs.2),
            self.3.saturating_add(rhs.3),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_line_total() {
        let line = StatLine::new(10, 20, 30, 40);
        assert_eq!(line.total(), 100);

        let zero = StatLine::default();
        assert_eq!(zero.total(), 0);
    }

    #[test]
    fn test_stat_line_meets_target() {
        let totals = StatLine::new(60, 0, 10, 25);

        assert!(totals.meets(&StatLine::default()), "zero targets always pass");
        assert!(totals.meets(&StatLine::new(50, 0, 10, 0)));
        assert!(!totals.meets(&StatLine::new(50, 1, 0, 0)));
    }

    #[test]
    fn test_stat_line_add_saturates() {
        let sum = StatLine::new(u32::MAX, 1, 2, 3) + StatLine::new(10, 10, 10, 10);
        assert_eq!(sum, StatLine::new(u32::MAX, 11, 12, 13));
    }

    #[test]
    fn test_stat_get_matches_accessors() {
        let line = StatLine::new(1, 2, 3, 4);
        for stat in Stat::ALL {
            let expected = match stat {
                Stat::Agriculture => line.agriculture(),
                Stat::Mining => line.mining(),
                Stat::Military => line.military(),
                Stat::Commerce => line.commerce(),
            };
            assert_eq!(line.get(stat), expected);
        }
    }
}
