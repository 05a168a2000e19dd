//! Sculpture tunables
//!
//! Centralized definitions for layout spacings, palettes, and the artifact
//! naming convention.

/// Width of the burst detection window in seconds.
pub const BURST_WINDOW_SECS: i64 = 3600;

/// Minimum commits within one window to count as a burst.
pub const BURST_MIN_COMMITS: usize = 3;

/// Layout spacings and scale factors per mode
pub mod layout {
    /// Organic: spacing between consecutive commits along X
    pub const ORGANIC_X_STEP: f64 = 0.8;
    /// Organic: vertical scale applied to log-impact
    pub const ORGANIC_IMPACT_SCALE: f64 = 2.0;
    /// Organic: depth offset separating human from automation commits
    pub const ORGANIC_DEPTH_SPLIT: f64 = 2.0;
    /// Organic: amplitude of the hour-phase spiral on the depth axis
    pub const ORGANIC_SPIRAL_DEPTH: f64 = 1.5;
    /// Organic: amplitude of the hour-phase spiral on the vertical axis
    pub const ORGANIC_SPIRAL_HEIGHT: f64 = 0.5;
    /// Organic: base node radius before per-file growth
    pub const ORGANIC_NODE_BASE: f64 = 0.3;
    /// Organic: node radius growth per file changed
    pub const ORGANIC_NODE_PER_FILE: f64 = 0.1;

    /// Crystalline: angular step separating same-hour commits
    pub const CRYSTAL_ANGLE_STEP: f64 = 0.3;
    /// Crystalline: base radius of the formation
    pub const CRYSTAL_BASE_RADIUS: f64 = 3.0;
    /// Crystalline: radial growth per unit of log-impact
    pub const CRYSTAL_IMPACT_RADIUS: f64 = 0.5;
    /// Crystalline: vertical step per commit
    pub const CRYSTAL_HEIGHT_STEP: f64 = 0.5;
    /// Crystalline: spike length bounds
    pub const CRYSTAL_SPIKE_MIN: f64 = 1.0;
    pub const CRYSTAL_SPIKE_MAX: f64 = 5.0;
    /// Crystalline: spike length growth per file changed
    pub const CRYSTAL_SPIKE_PER_FILE: f64 = 0.5;
    /// Crystalline: core radius per unit of log-total-changes
    pub const CRYSTAL_CORE_SCALE: f64 = 0.5;

    /// Rhythmic: radius of the 24-hour circle
    pub const RHYTHM_RADIUS: f64 = 5.0;
    /// Rhythmic: node height per commit in the bucket
    pub const RHYTHM_HEIGHT_PER_COMMIT: f64 = 2.0;
    /// Rhythmic: base node radius
    pub const RHYTHM_NODE_BASE: f64 = 0.3;
    /// Rhythmic: node radius growth per commit in the bucket
    pub const RHYTHM_NODE_PER_COMMIT: f64 = 0.2;
    /// Rhythmic: color intensity per commit in the bucket
    pub const RHYTHM_INTENSITY_PER_COMMIT: u32 = 50;

    /// Chaotic: walk step length per unit of log-impact
    pub const CHAOS_STEP_SCALE: f64 = 0.5;
    /// Chaotic: vertical drift per line added
    pub const CHAOS_LIFT_PER_ADDITION: f64 = 0.01;
    /// Chaotic: amplitude of the per-commit direction jitter
    pub const CHAOS_JITTER: f64 = 0.3;
    /// Chaotic: base node size before per-file growth
    pub const CHAOS_NODE_BASE: f64 = 0.2;
    /// Chaotic: node size growth per file changed
    pub const CHAOS_NODE_PER_FILE: f64 = 0.1;

    /// Radius of connecting tubes in organic and rhythmic scenes
    pub const EDGE_RADIUS: f64 = 0.15;
}

/// Fixed color palettes
pub mod palette {
    use crate::model::Color;

    /// Organic human commits (blue)
    pub const ORGANIC_HUMAN: Color = Color::new(100, 150, 255);
    /// Organic automation commits (orange)
    pub const ORGANIC_AUTOMATION: Color = Color::new(255, 150, 100);

    /// Crystalline human commits (pale blue)
    pub const CRYSTAL_HUMAN: Color = Color::new(150, 200, 255);
    /// Crystalline automation commits (pale orange)
    pub const CRYSTAL_AUTOMATION: Color = Color::new(255, 200, 150);
    /// Crystalline central core (grey)
    pub const CRYSTAL_CORE: Color = Color::new(200, 200, 200);

    /// Chaotic channel intensity band: channel = FLOOR + hash % SPAN
    pub const CHAOS_CHANNEL_FLOOR: u64 = 100;
    pub const CHAOS_CHANNEL_SPAN: u64 = 156;
}

/// Artifact naming convention
pub mod artifact {
    /// Base artifact file stem; generation 0 carries no suffix
    pub const STEM: &str = "sculpture";
    /// Artifact file extension
    pub const EXTENSION: &str = "json";
    /// Generation suffix pattern inside a file name, e.g. `sculpture_gen3.json`
    pub const GENERATION_PATTERN: &str = r"gen(\d+)";
}
