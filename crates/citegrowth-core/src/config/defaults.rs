// Single source of truth for all default values.

// --- Layout (Google Scholar results page) ---
pub const DEFAULT_LAYOUT_VERSION: &str = "gs-2023";
pub const DEFAULT_RESULTS_CONTAINER: &str = "#gs_res_ccl_mid";
pub const DEFAULT_ARTICLE_CLASS: &str = "gs_or";
pub const DEFAULT_FOOTER_LINKS: &str = ".gs_fl.gs_flb";
pub const DEFAULT_CITATION_LINK_INDEX: usize = 2;
pub const DEFAULT_AUTHOR_LINE: &str = ".gs_a";
pub const DEFAULT_AUTHOR_SEGMENT_DELIMITER: char = '-';

// --- Annotation ---
pub const DEFAULT_ANNOTATION_PREFIX: &str = " (";
pub const DEFAULT_ANNOTATION_SUFFIX: &str = ")";
pub const DEFAULT_ANNOTATION_DECIMALS: u8 = 0;
pub const MAX_ANNOTATION_DECIMALS: u8 = 6;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_LOG_FILTER: &str = "citegrowth=info";
pub const LOG_ENV_VAR: &str = "CITEGROWTH_LOG";

// --- Environment overrides ---
pub const ENV_LOG_LEVEL: &str = "CITEGROWTH_LOG_LEVEL";
pub const ENV_ANNOTATION_DECIMALS: &str = "CITEGROWTH_ANNOTATION_DECIMALS";
