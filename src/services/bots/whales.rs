//! Volume anomaly ("whale") bot.

use super::ScoringBot;
use crate::services::signals::indicators::{VolumeAnalysis, VolumeTrend};
use crate::types::{AnalysisContext, SignalLight, Verdict};

const AVERAGE_WINDOW: usize = 20;
const RECENT_BARS: usize = 5;
const SPIKE_MULT: f64 = 3.0;
const MEGA_SPIKE_MULT: f64 = 5.0;

/// Flags possible manipulation from volume spikes in the last few bars, and
/// thin markets from an unusually quiet latest bar.
pub struct WhaleBot;

impl ScoringBot for WhaleBot {
    fn name(&self) -> &str {
        "Whales"
    }

    fn weight(&self) -> f64 {
        1.0
    }

    fn evaluate(&self, ctx: &AnalysisContext<'_>) -> Option<Verdict> {
        let analysis = VolumeAnalysis::new(AVERAGE_WINDOW);
        let avg = analysis.average(ctx.candles)?;
        let volume = analysis.calculate(ctx.candles);

        let recent = &ctx.candles[ctx.candles.len() - RECENT_BARS..];
        let spikes = recent.iter().filter(|c| c.volume > avg * SPIKE_MULT).count();
        let mega_spikes = recent
            .iter()
            .filter(|c| c.volume > avg * MEGA_SPIKE_MULT)
            .count();

        let verdict = |signal, score| Verdict::new(self.name(), signal, score, self.weight());
        let v = if mega_spikes >= 2 {
            verdict(SignalLight::Red, 10)
                .reason(format!("Extreme manipulation ({} mega-spikes)", mega_spikes))
        } else if spikes >= 3 {
            verdict(SignalLight::Red, 20)
                .reason(format!("Heavy manipulation ({} spikes)", spikes))
        } else if spikes >= 1 {
            verdict(SignalLight::Yellow, 60)
                .reason(format!("Suspicious activity (vol {:.2}x)", volume.ratio))
        } else if volume.trend == VolumeTrend::Low {
            verdict(SignalLight::Yellow, 65)
                .reason(format!("Low volume (vol {:.2}x) - thin liquidity", volume.ratio))
        } else {
            verdict(SignalLight::Green, 100)
                .reason(format!("Natural market (vol {:.2}x)", volume.ratio))
        };

        Some(v)
    }
}
