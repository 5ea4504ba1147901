//! Published per-tick state, for observers and terminal display

use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use super::events::CueEvent;
use super::finger::FingerMetric;
use super::gesture::{GestureFlags, GestureKind};
use super::hand::HandSide;
use super::projectile::ProjectileView;
use super::throw::ThrowResult;

/// Everything published for one hand after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandReport {
    pub side: HandSide,
    /// False when no skeleton arrived; renderers clear visuals
    pub tracked: bool,
    /// Thumb → little; empty when untracked
    pub fingers: Vec<FingerMetric>,
    pub gestures: GestureFlags,
    /// Last throw check, present only while Spider is held
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub throw_check: Option<ThrowResult>,
}

impl HandReport {
    /// Report for a hand with no tracking data
    pub fn untracked(side: HandSide) -> Self {
        Self {
            side,
            tracked: false,
            fingers: Vec::new(),
            gestures: GestureFlags::NONE,
            throw_check: None,
        }
    }

    /// Compact posture string, thumb first, e.g. `o|oo|`
    pub fn posture_string(&self) -> String {
        self.fingers.iter().map(|m| m.posture().symbol()).collect()
    }

    fn gesture_label(&self) -> String {
        let active: Vec<String> = GestureKind::ALL
            .iter()
            .filter(|g| self.gestures.is_active(**g))
            .map(|g| g.to_string())
            .collect();
        if active.is_empty() {
            "-".to_string()
        } else {
            active.join("+")
        }
    }
}

/// Gesture flags for both hands plus the OR across sides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestureSummary {
    pub left: GestureFlags,
    pub right: GestureFlags,
    pub any_spider_active: bool,
    pub any_peace_active: bool,
}

impl GestureSummary {
    pub fn new(left: GestureFlags, right: GestureFlags) -> Self {
        Self {
            left,
            right,
            any_spider_active: left.spider_active || right.spider_active,
            any_peace_active: left.peace_active || right.peace_active,
        }
    }
}

/// Output of one orchestrator tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    pub timestamp: DateTime<Utc>,
    /// Tick time (monotonic seconds)
    pub time: f64,
    pub left: HandReport,
    pub right: HandReport,
    /// Edge events raised this tick, in processing order
    pub events: Vec<CueEvent>,
    /// Live projectiles after this tick's advance
    pub projectiles: Vec<ProjectileView>,
    /// Rendering hint passed through from configuration
    pub show_joint_visuals: bool,
}

impl TickReport {
    pub fn hand(&self, side: HandSide) -> &HandReport {
        match side {
            HandSide::Left => &self.left,
            HandSide::Right => &self.right,
        }
    }

    pub fn gestures(&self) -> GestureSummary {
        GestureSummary::new(self.left.gestures, self.right.gestures)
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let hand = |h: &HandReport| {
            if !h.tracked {
                return format!("{} {}", h.side, "lost".dimmed());
            }
            let label = h.gesture_label();
            let label = if h.gestures.spider_active {
                label.red().bold()
            } else if h.gestures.peace_active {
                label.cyan().bold()
            } else {
                label.normal()
            };
            format!("{} [{}] {}", h.side, h.posture_string(), label)
        };

        let mut line = format!(
            "t={:>7.3}s | {} | {} | projectiles={}",
            self.time,
            hand(&self.left),
            hand(&self.right),
            self.projectiles.len()
        );
        for event in &self.events {
            let label = match event {
                CueEvent::Thrown { .. } => event.label().yellow().bold(),
                CueEvent::GestureActivated { gesture, .. } => {
                    format!("{} {}", gesture.emoji(), event.label()).green()
                }
                CueEvent::PinchStarted { .. } => event.label().magenta(),
            };
            line.push_str(&format!(" | {}", label));
        }
        line
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        let hand = |h: &HandReport| {
            if h.tracked {
                format!("{}={}:{}", h.side.as_str(), h.posture_string(), h.gesture_label())
            } else {
                format!("{}=lost", h.side.as_str())
            }
        };
        let events: Vec<String> = self.events.iter().map(|e| e.label()).collect();
        format!(
            "t={:.3} | {} | {} | projectiles={} | events=[{}]",
            self.time,
            hand(&self.left),
            hand(&self.right),
            self.projectiles.len(),
            events.join(", ")
        )
    }
}
