//! Test fixtures and constants.

/// Plot names defined in the embedded config.yaml
pub mod plots {
    /// Identity plot with the default HSL mode and contours
    pub const IDENTITY: &str = "identity";

    /// z^3 - 1 in OKLCH, also the configured default plot
    pub const ROOTS: &str = "roots";

    /// Log plot configured with the thresholded variant
    pub const LOG_BANDS: &str = "log-bands";

    /// Not present in config.yaml
    pub const MISSING: &str = "zeta";
}

/// A small config with deliberately broken entries
pub const TEST_CONFIG: &str = r#"
defaults:
  mode: hsl
  width: 32
  height: 24
  contours: false
plots:
  tiny:
    function: square
    x: [-1.0, 1.0]
    y: [-1.0, 1.0]
  bad-function:
    function: gamma
  bad-range:
    function: identity
    x: [1.0, -1.0]
  bad-mode:
    function: identity
    mode: cmyk
default_plot: tiny
"#;

/// JSON body for POST /api/color with the reference 2x2 field
/// `[[0, i], [-1, -i]]`
pub fn reference_field_body(mode: &str) -> String {
    serde_json::json!({
        "re": [[0.0, 0.0], [-1.0, 0.0]],
        "im": [[0.0, 1.0], [0.0, -1.0]],
        "mode": mode,
    })
    .to_string()
}
