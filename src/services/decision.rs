//! Decision engine: turns the panel's verdicts into ENTER / WAIT / CANCEL.

use crate::types::{Decision, DecisionKind, SignalLight, Verdict};

/// One rung of the entry ladder.
struct EntryTier {
    headline: &'static str,
    min_greens: usize,
    max_reds: usize,
    min_confidence: u8,
    max_leverage: u32,
}

/// Checked top to bottom; the first match wins.
const ENTRY_LADDER: [EntryTier; 3] = [
    EntryTier {
        headline: "Excellent",
        min_greens: 5,
        max_reds: 0,
        min_confidence: 70,
        max_leverage: 60,
    },
    EntryTier {
        headline: "Good signal",
        min_greens: 4,
        max_reds: 0,
        min_confidence: 60,
        max_leverage: 50,
    },
    EntryTier {
        headline: "Acceptable",
        min_greens: 3,
        max_reds: 1,
        min_confidence: 55,
        max_leverage: 40,
    },
];

/// Unweighted GREEN / YELLOW / RED counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub greens: usize,
    pub yellows: usize,
    pub reds: usize,
}

impl Tally {
    pub fn of(verdicts: &[Verdict]) -> Self {
        verdicts.iter().fold(Tally::default(), |mut t, v| {
            match v.signal {
                SignalLight::Green => t.greens += 1,
                SignalLight::Yellow => t.yellows += 1,
                SignalLight::Red => t.reds += 1,
            }
            t
        })
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}G {}Y {}R", self.greens, self.yellows, self.reds)
    }
}

/// Weighted mean of the scores, rounded to a whole percent.
///
/// Returns 50 if the total weight is not positive, which cannot happen for
/// verdicts built by the panel.
pub fn weighted_confidence(verdicts: &[Verdict]) -> u8 {
    let total_weight: f64 = verdicts.iter().map(|v| v.weight).sum();
    if total_weight <= 0.0 {
        return 50;
    }

    let weighted: f64 = verdicts
        .iter()
        .map(|v| (v.score as f64 / 100.0) * v.weight)
        .sum();
    (weighted / total_weight * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Aggregate verdicts into a decision.
///
/// 1. No verdicts: WAIT with zero confidence.
/// 2. Two or more critical REDs, or a single critical RED scoring exactly 0:
///    CANCEL.
/// 3. Otherwise walk the entry ladder; no match means WAIT.
pub fn decide(verdicts: Vec<Verdict>, base_leverage: u32) -> Decision {
    if verdicts.is_empty() {
        return Decision {
            decision: DecisionKind::Wait,
            confidence: 0,
            leverage: 0,
            headline: "Insufficient data".to_string(),
            details: Vec::new(),
            bots: verdicts,
        };
    }

    let critical_reds: Vec<&Verdict> = verdicts.iter().filter(|v| v.is_critical_red()).collect();
    let vetoed = match critical_reds.as_slice() {
        [] => false,
        [single] => single.score == 0,
        _ => true,
    };
    if vetoed {
        let details = critical_reds
            .iter()
            .map(|v| format!("{}: {}", v.name, v.rationale()))
            .collect();
        return Decision {
            decision: DecisionKind::Cancel,
            confidence: 0,
            leverage: 0,
            headline: "STOP".to_string(),
            details,
            bots: verdicts,
        };
    }

    let tally = Tally::of(&verdicts);
    let confidence = weighted_confidence(&verdicts);
    let details = vec![tally.to_string(), format!("Conf: {}%", confidence)];

    let tier = ENTRY_LADDER.iter().find(|tier| {
        tally.greens >= tier.min_greens
            && tally.reds <= tier.max_reds
            && confidence >= tier.min_confidence
    });

    match tier {
        Some(tier) => Decision {
            decision: DecisionKind::Enter,
            confidence,
            leverage: tier.max_leverage.min(base_leverage),
            headline: tier.headline.to_string(),
            details,
            bots: verdicts,
        },
        None => Decision {
            decision: DecisionKind::Wait,
            confidence,
            leverage: 0,
            headline: "Wait".to_string(),
            details,
            bots: verdicts,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(signal: SignalLight, score: u8) -> Verdict {
        Verdict::new("Test", signal, score, 1.0)
    }

    fn greens(n: usize, score: u8) -> Vec<Verdict> {
        (0..n).map(|_| verdict(SignalLight::Green, score)).collect()
    }

    #[test]
    fn test_no_verdicts_waits() {
        let d = decide(Vec::new(), 50);
        assert_eq!(d.decision, DecisionKind::Wait);
        assert_eq!(d.confidence, 0);
        assert_eq!(d.leverage, 0);
        assert!(d.bots.is_empty());
    }

    #[test]
    fn test_two_critical_reds_cancel() {
        let mut verdicts = greens(5, 100);
        verdicts.push(verdict(SignalLight::Red, 40).critical().reason("a"));
        verdicts.push(verdict(SignalLight::Red, 40).critical().reason("b"));
        let d = decide(verdicts, 50);
        assert_eq!(d.decision, DecisionKind::Cancel);
        assert_eq!((d.confidence, d.leverage), (0, 0));
        assert_eq!(d.details, vec!["Test: a", "Test: b"]);
        assert_eq!(d.rationale(), "STOP - Test: a + Test: b");
        assert_eq!(d.bots.len(), 7);
    }

    #[test]
    fn test_single_critical_red_at_zero_cancels() {
        let mut verdicts = greens(6, 100);
        verdicts.push(verdict(SignalLight::Red, 0).critical());
        assert_eq!(decide(verdicts, 50).decision, DecisionKind::Cancel);
    }

    #[test]
    fn test_single_critical_red_above_zero_does_not_cancel() {
        let mut verdicts = greens(6, 100);
        verdicts.push(verdict(SignalLight::Red, 1).critical());
        let d = decide(verdicts, 50);
        // 6G 1R, confidence round((600 + 1) / 7) = 86 -> third rung
        assert_eq!(d.decision, DecisionKind::Enter);
        assert_eq!(d.headline, "Acceptable");
        assert_eq!(d.leverage, 40);
    }

    #[test]
    fn test_non_critical_reds_never_cancel() {
        let mut verdicts = greens(3, 100);
        verdicts.push(verdict(SignalLight::Red, 0));
        verdicts.push(verdict(SignalLight::Red, 0));
        let d = decide(verdicts, 50);
        assert_eq!(d.decision, DecisionKind::Wait);
        assert_eq!(d.confidence, 60);
    }

    #[test]
    fn test_ladder_priority_and_leverage_caps() {
        let d = decide(greens(5, 80), 100);
        assert_eq!((d.decision, d.leverage), (DecisionKind::Enter, 60));
        assert_eq!(d.rationale(), "Excellent - 5G 0Y 0R + Conf: 80%");

        let d = decide(greens(5, 80), 25);
        assert_eq!(d.leverage, 25);

        let d = decide(greens(4, 65), 100);
        assert_eq!((d.headline.as_str(), d.leverage), ("Good signal", 50));

        let mut verdicts = greens(3, 90);
        verdicts.push(verdict(SignalLight::Yellow, 30));
        let d = decide(verdicts, 100);
        // confidence = round(300 / 4) = 75
        assert_eq!((d.headline.as_str(), d.leverage), ("Acceptable", 40));
    }

    #[test]
    fn test_low_confidence_waits_with_confidence() {
        let d = decide(greens(5, 50), 50);
        assert_eq!(d.decision, DecisionKind::Wait);
        assert_eq!(d.confidence, 50);
        assert_eq!(d.leverage, 0);
    }

    #[test]
    fn test_weighted_confidence_rounds() {
        let verdicts = vec![
            Verdict::new("A", SignalLight::Green, 100, 2.0),
            Verdict::new("B", SignalLight::Yellow, 55, 1.0),
        ];
        // (2.0 + 0.55) / 3 = 0.85
        assert_eq!(weighted_confidence(&verdicts), 85);

        let verdicts = vec![
            Verdict::new("A", SignalLight::Green, 100, 1.0),
            Verdict::new("B", SignalLight::Yellow, 55, 1.0),
            Verdict::new("C", SignalLight::Yellow, 30, 1.0),
        ];
        // 185 / 3 = 61.67
        assert_eq!(weighted_confidence(&verdicts), 62);
    }

    #[test]
    fn test_tally_display() {
        let verdicts = vec![
            verdict(SignalLight::Green, 1),
            verdict(SignalLight::Yellow, 1),
            verdict(SignalLight::Yellow, 1),
        ];
        assert_eq!(Tally::of(&verdicts).to_string(), "1G 2Y 0R");
    }
}
