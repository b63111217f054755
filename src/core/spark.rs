use glam::Vec2;
use std::f32::consts::TAU;

// Defaults match the shipped component: a small dark burst, gone in under
// half a second.
pub const DEFAULT_COLOR: &str = "#121212";
pub const DEFAULT_SIZE_PX: f32 = 10.0;
pub const DEFAULT_RADIUS_PX: f32 = 15.0;
pub const DEFAULT_COUNT: usize = 8;
pub const DEFAULT_DURATION_MS: f64 = 400.0;
pub const DEFAULT_EXTRA_SCALE: f32 = 1.0;

/// Stroke width for every spark segment, in canvas pixels.
pub const STROKE_WIDTH_PX: f64 = 2.0;

/// Maps normalized progress [0, 1] to normalized visual progress [0, 1].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => t * (2.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
        }
    }

    /// Parse the CSS-style easing names used in markup config.
    pub fn from_name(name: &str) -> Option<Easing> {
        match name {
            "linear" => Some(Easing::Linear),
            "ease-in" => Some(Easing::EaseIn),
            "ease-out" => Some(Easing::EaseOut),
            "ease-in-out" => Some(Easing::EaseInOut),
            _ => None,
        }
    }
}

/// Stroke color as configured: either a concrete CSS color or a symbolic
/// `var(--name)` token the host resolves against the current theme.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SparkColor {
    Fixed(String),
    Token(String),
}

impl SparkColor {
    pub fn parse(raw: &str) -> SparkColor {
        let trimmed = raw.trim();
        if let Some(inner) = trimmed
            .strip_prefix("var(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            SparkColor::Token(inner.trim().to_string())
        } else {
            SparkColor::Fixed(trimmed.to_string())
        }
    }
}

impl Default for SparkColor {
    fn default() -> Self {
        SparkColor::Fixed(DEFAULT_COLOR.to_string())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("spark count must be at least 1")]
    ZeroCount,
    #[error("duration must be a positive number of milliseconds")]
    InvalidDuration,
    #[error("spark size must be positive")]
    InvalidSize,
    #[error("travel radius must be positive")]
    InvalidRadius,
    #[error("extra scale must be finite and non-negative")]
    InvalidExtraScale,
}

/// Engine configuration, fixed at construction.
#[derive(Clone, Debug)]
pub struct SparkConfig {
    pub color: SparkColor,
    pub size_px: f32,
    pub radius_px: f32,
    pub count: usize,
    pub duration_ms: f64,
    pub easing: Easing,
    pub extra_scale: f32,
}

impl Default for SparkConfig {
    fn default() -> Self {
        Self {
            color: SparkColor::default(),
            size_px: DEFAULT_SIZE_PX,
            radius_px: DEFAULT_RADIUS_PX,
            count: DEFAULT_COUNT,
            duration_ms: DEFAULT_DURATION_MS,
            easing: Easing::default(),
            extra_scale: DEFAULT_EXTRA_SCALE,
        }
    }
}

impl SparkConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::ZeroCount);
        }
        if !(self.duration_ms > 0.0) || !self.duration_ms.is_finite() {
            return Err(ConfigError::InvalidDuration);
        }
        if !(self.size_px > 0.0) || !self.size_px.is_finite() {
            return Err(ConfigError::InvalidSize);
        }
        if !(self.radius_px > 0.0) || !self.radius_px.is_finite() {
            return Err(ConfigError::InvalidRadius);
        }
        if !(self.extra_scale >= 0.0) || !self.extra_scale.is_finite() {
            return Err(ConfigError::InvalidExtraScale);
        }
        Ok(())
    }
}

/// One spark: a short line segment animated outward from its spawn point
/// along a fixed angle. Immutable once created; everything time-varying is
/// recomputed from `spawn_ms` each frame.
#[derive(Clone, Copy, Debug)]
pub struct Spark {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
    pub spawn_ms: f64,
}

/// One stroked line for the current frame, in canvas-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: Vec2,
    pub to: Vec2,
}

pub struct SparkEngine {
    pub config: SparkConfig,
    resolved_color: String,
    sparks: Vec<Spark>,
}

impl SparkEngine {
    pub fn new(config: SparkConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let resolved_color = match &config.color {
            SparkColor::Fixed(c) if !c.is_empty() => c.clone(),
            // Tokens resolve once the host reads the live theme.
            _ => DEFAULT_COLOR.to_string(),
        };
        Ok(Self {
            config,
            resolved_color,
            sparks: Vec::new(),
        })
    }

    /// Spawn one burst at canvas-local `(x, y)`: exactly `count` sparks with
    /// evenly distributed angles. Bursts overlap additively; live sparks
    /// from earlier clicks are untouched.
    pub fn spawn_burst(&mut self, x: f32, y: f32, now_ms: f64) {
        let count = self.config.count;
        self.sparks.reserve(count);
        for i in 0..count {
            self.sparks.push(Spark {
                x,
                y,
                angle: TAU * i as f32 / count as f32,
                spawn_ms: now_ms,
            });
        }
    }

    /// Advance one frame: drop sparks whose lifetime has elapsed (dead
    /// exactly at `spawn + duration`) and append one segment per survivor.
    /// Geometry is closed-form from `spawn_ms`, so frames never accumulate
    /// integration error. Calling with an empty live set is a no-op.
    pub fn frame(&mut self, now_ms: f64, out: &mut Vec<Segment>) {
        let duration = self.config.duration_ms;
        let easing = self.config.easing;
        let travel = self.config.radius_px * self.config.extra_scale;
        let size = self.config.size_px;
        self.sparks.retain(|spark| {
            let elapsed = now_ms - spark.spawn_ms;
            if elapsed >= duration {
                return false;
            }
            let eased = easing.apply((elapsed / duration) as f32);
            let distance = eased * travel;
            let length = size * (1.0 - eased);
            let origin = Vec2::new(spark.x, spark.y);
            let dir = Vec2::new(spark.angle.cos(), spark.angle.sin());
            out.push(Segment {
                from: origin + dir * distance,
                to: origin + dir * (distance + length),
            });
            true
        });
    }

    /// True when no sparks are live; the host stops scheduling frames.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.sparks.is_empty()
    }

    #[inline]
    pub fn live(&self) -> &[Spark] {
        &self.sparks
    }

    /// Store the concrete stroke color last resolved by the host. `None` or
    /// an empty value falls back to the default so strokes stay visible.
    pub fn set_resolved_color(&mut self, color: Option<&str>) {
        self.resolved_color = match color {
            Some(c) if !c.trim().is_empty() => c.trim().to_string(),
            _ => DEFAULT_COLOR.to_string(),
        };
    }

    #[inline]
    pub fn resolved_color(&self) -> &str {
        &self.resolved_color
    }
}
