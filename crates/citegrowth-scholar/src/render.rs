use citegrowth_core::config::AnnotationConfig;

/// Render a projected count for appending to a citation label.
///
/// Rounds half away from zero, so `161.5` renders as `162` at 0 decimals.
pub fn render_annotation(expected: f64, config: &AnnotationConfig) -> String {
    let decimals = config.decimals as usize;
    let factor = 10f64.powi(config.decimals as i32);
    let rounded = (expected * factor).round() / factor;
    format!("{}{:.*}{}", config.prefix, decimals, rounded, config.suffix)
}
