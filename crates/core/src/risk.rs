use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

impl std::str::FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(RiskLevel::Low),
            "Medium" => Ok(RiskLevel::Medium),
            "High" => Ok(RiskLevel::High),
            other => Err(format!("unknown risk level: '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    /// 0-100.
    pub risk_score: u32,
    pub risk_level: RiskLevel,
}

/// Scores repayment risk from utilization (a percentage) and the missed
/// payment count.
pub fn assess_risk(utilization: f64, missed_payments: u32) -> RiskAssessment {
    let mut score = 0u32;

    if utilization > 70.0 {
        score += 50;
    } else if utilization > 30.0 {
        score += 20;
    }

    score += 30 * missed_payments;

    let risk_level = if score >= 60 {
        RiskLevel::High
    } else if score >= 30 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    };

    RiskAssessment {
        risk_score: score.min(100),
        risk_level,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_utilization_no_misses_is_low_risk() {
        let assessment = assess_risk(20.0, 0);
        assert_eq!(assessment.risk_score, 0);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
    }

    #[test]
    fn moderate_utilization_is_scored() {
        let assessment = assess_risk(45.0, 0);
        assert_eq!(assessment.risk_score, 20);
        assert_eq!(assessment.risk_level, RiskLevel::Low);
    }

    #[test]
    fn high_utilization_with_a_miss_is_high_risk() {
        let assessment = assess_risk(80.0, 1);
        assert_eq!(assessment.risk_score, 80);
        assert_eq!(assessment.risk_level, RiskLevel::High);
    }

    #[test]
    fn score_is_capped_at_one_hundred() {
        let assessment = assess_risk(80.0, 5);
        assert_eq!(assessment.risk_score, 100);
        assert_eq!(assessment.risk_level, RiskLevel::High);
    }

    #[test]
    fn misses_alone_reach_medium() {
        let assessment = assess_risk(10.0, 1);
        assert_eq!(assessment.risk_score, 30);
        assert_eq!(assessment.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn parses_level_names() {
        assert_eq!("High".parse::<RiskLevel>().unwrap(), RiskLevel::High);
        assert!("severe".parse::<RiskLevel>().is_err());
    }
}
