//! Animation data derived from a cloud set.
//!
//! The sheet is the source of truth for both the web stylesheet
//! ([`crate::render::css`]) and the terminal preview, which samples it directly.

use crate::domain::cloud::Cloud;

pub const DRIFT_KEYFRAMES: &str = "drift";
pub const BASE_DRIFT_SECS: f64 = 10.0;
const DRIFT_START_PX: f64 = -100.0;
const DRIFT_OVERSHOOT_PX: f64 = 500.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(f64),
    /// `calc(100vw + Npx)`
    ViewportWidthPlus(f64),
}

impl Length {
    #[must_use]
    pub fn resolve(self, viewport_width: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::ViewportWidthPlus(px) => viewport_width + px,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    TranslateX(Length),
    Translate { x: Length, y: Length },
}

impl Transform {
    #[must_use]
    pub fn resolve(self, viewport_width: f64) -> (f64, f64) {
        match self {
            Self::TranslateX(x) => (x.resolve(viewport_width), 0.0),
            Self::Translate { x, y } => (x.resolve(viewport_width), y.resolve(viewport_width)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeStop {
    /// Percentages sharing this transform, e.g. `[0.0, 100.0]`.
    pub offsets: Vec<f64>,
    pub transform: Transform,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Keyframes {
    pub name: String,
    pub stops: Vec<KeyframeStop>,
}

impl Keyframes {
    /// Linear interpolation of the translation at `progress` (`0.0..=1.0`).
    #[must_use]
    pub fn sample(&self, progress: f64, viewport_width: f64) -> (f64, f64) {
        let mut points: Vec<(f64, (f64, f64))> = self
            .stops
            .iter()
            .flat_map(|stop| {
                let value = stop.transform.resolve(viewport_width);
                stop.offsets.iter().map(move |offset| (offset / 100.0, value))
            })
            .collect();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));

        let Some(&(first_at, first)) = points.first() else {
            return (0.0, 0.0);
        };
        let progress = progress.clamp(0.0, 1.0);
        if progress <= first_at {
            return first;
        }

        for pair in points.windows(2) {
            let (from_at, from) = pair[0];
            let (to_at, to) = pair[1];
            if progress <= to_at {
                let span = to_at - from_at;
                let t = if span > 0.0 {
                    (progress - from_at) / span
                } else {
                    1.0
                };
                return (from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t);
            }
        }
        points.last().map_or((0.0, 0.0), |&(_, value)| value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingFunction {
    Linear,
    EaseInOut,
}

impl TimingFunction {
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseInOut => "ease-in-out",
        }
    }

    /// Ease-in-out is approximated with smoothstep.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::EaseInOut => t * t * (3.0 - 2.0 * t),
        }
    }
}

/// One infinitely repeating animation reference inside a rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub keyframes: String,
    pub duration_secs: f64,
    pub timing: TimingFunction,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRule {
    /// Class name without the leading dot.
    pub class: String,
    pub animations: Vec<Animation>,
    pub delay_secs: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnimationSheet {
    pub keyframes: Vec<Keyframes>,
    pub base_rule: AnimationRule,
    /// Same order as the cloud slice the sheet was derived from.
    pub cloud_rules: Vec<AnimationRule>,
}

impl AnimationSheet {
    #[must_use]
    pub fn keyframes_named(&self, name: &str) -> Option<&Keyframes> {
        self.keyframes.iter().find(|k| k.name == name)
    }

    #[must_use]
    pub fn rule_for(&self, cloud_id: usize) -> Option<&AnimationRule> {
        let class = cloud_class(cloud_id);
        self.cloud_rules.iter().find(|rule| rule.class == class)
    }

    /// Summed translation of every animation in `rule` after `elapsed_secs`.
    ///
    /// A browser lets the last animation of a rule win the `transform`
    /// property; here the drift and float displacements are layered instead.
    #[must_use]
    pub fn offset_at(
        &self,
        rule: &AnimationRule,
        elapsed_secs: f64,
        viewport_width: f64,
    ) -> (f64, f64) {
        let local = elapsed_secs - rule.delay_secs.unwrap_or(0.0);
        if local < 0.0 {
            return (0.0, 0.0);
        }

        rule.animations
            .iter()
            .filter(|animation| animation.duration_secs > 0.0)
            .filter_map(|animation| {
                let keyframes = self.keyframes_named(&animation.keyframes)?;
                let cycle = (local % animation.duration_secs) / animation.duration_secs;
                Some(keyframes.sample(animation.timing.apply(cycle), viewport_width))
            })
            .fold((0.0, 0.0), |acc, (dx, dy)| (acc.0 + dx, acc.1 + dy))
    }
}

#[must_use]
pub fn cloud_class(cloud_id: usize) -> String {
    format!("cloud-{cloud_id}")
}

#[must_use]
pub fn float_keyframes_name(cloud_id: usize) -> String {
    format!("float{cloud_id}")
}

/// Shared traversal from just off the left edge to well past the right one.
#[must_use]
pub fn drift_keyframes() -> Keyframes {
    Keyframes {
        name: DRIFT_KEYFRAMES.to_string(),
        stops: vec![
            KeyframeStop {
                offsets: vec![0.0],
                transform: Transform::TranslateX(Length::Px(DRIFT_START_PX)),
            },
            KeyframeStop {
                offsets: vec![100.0],
                transform: Transform::TranslateX(Length::ViewportWidthPlus(
                    DRIFT_OVERSHOOT_PX,
                )),
            },
        ],
    }
}

/// Rest at both ends, full `(float_x, float_y)` displacement halfway.
#[must_use]
pub fn float_keyframes(cloud: &Cloud) -> Keyframes {
    Keyframes {
        name: float_keyframes_name(cloud.id),
        stops: vec![
            KeyframeStop {
                offsets: vec![0.0, 100.0],
                transform: Transform::Translate {
                    x: Length::Px(0.0),
                    y: Length::Px(0.0),
                },
            },
            KeyframeStop {
                offsets: vec![50.0],
                transform: Transform::Translate {
                    x: Length::Px(cloud.float_x),
                    y: Length::Px(cloud.float_y),
                },
            },
        ],
    }
}

#[must_use]
pub fn base_rule() -> AnimationRule {
    AnimationRule {
        class: "cloud".to_string(),
        animations: vec![Animation {
            keyframes: DRIFT_KEYFRAMES.to_string(),
            duration_secs: BASE_DRIFT_SECS,
            timing: TimingFunction::Linear,
        }],
        delay_secs: None,
    }
}

/// Drift plus the cloud's own float, started `delay` seconds in. The float
/// duration is kept to one decimal, as emitted in the stylesheet.
#[must_use]
pub fn cloud_rule(cloud: &Cloud) -> AnimationRule {
    AnimationRule {
        class: cloud_class(cloud.id),
        animations: vec![
            Animation {
                keyframes: DRIFT_KEYFRAMES.to_string(),
                duration_secs: cloud.drift_duration,
                timing: TimingFunction::Linear,
            },
            Animation {
                keyframes: float_keyframes_name(cloud.id),
                duration_secs: (cloud.float_duration * 10.0).round() / 10.0,
                timing: TimingFunction::EaseInOut,
            },
        ],
        delay_secs: Some(cloud.delay),
    }
}

#[must_use]
pub fn derive_animation_sheet(clouds: &[Cloud]) -> AnimationSheet {
    let mut keyframes = Vec::with_capacity(clouds.len() + 1);
    keyframes.push(drift_keyframes());
    keyframes.extend(clouds.iter().map(float_keyframes));

    AnimationSheet {
        keyframes,
        base_rule: base_rule(),
        cloud_rules: clouds.iter().map(cloud_rule).collect(),
    }
}

#[cfg(test)]
mod tests;
