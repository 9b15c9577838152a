//! Schema validation for decoded configuration trees.
//!
//! The walker checks types, enum membership, numeric ranges, and cross-field
//! rules for every section present in the tree, and collects all violations
//! so a broken config file can be fixed in one pass. Unknown keys are
//! ignored: newer bindings may embed fields an older validator does not know.

use crate::error::FieldViolation;
use crate::model;
use serde_json::{Map, Value};

/// Validate a decoded config tree, returning every violation found.
pub(crate) fn validate_tree(value: &Value) -> Result<(), Vec<FieldViolation>> {
    let mut violations = Violations::default();
    let Some(map) = value.as_object() else {
        violations.push("", "must be a mapping of configuration sections", value);
        return Err(violations.0);
    };

    if let Some(value) = map.get("ocr") {
        validate_ocr(value, "ocr", &mut violations);
    }
    if let Some(value) = map.get("pdf_options") {
        validate_pdf(value, "pdf_options", &mut violations);
    }
    if let Some(value) = map.get("images") {
        validate_images(value, "images", &mut violations);
    }
    if let Some(value) = map.get("chunking") {
        validate_chunking(value, "chunking", &mut violations);
    }
    if let Some(value) = map.get("token_reduction") {
        validate_token_reduction(value, "token_reduction", &mut violations);
    }
    if let Some(value) = map.get("language_detection") {
        validate_language_detection(value, "language_detection", &mut violations);
    }
    if let Some(value) = map.get("keywords") {
        validate_keywords(value, "keywords", &mut violations);
    }
    if let Some(value) = map.get("post_processing") {
        validate_post_processing(value, "post_processing", &mut violations);
    }
    if let Some(value) = map.get("hierarchy") {
        validate_hierarchy(value, "hierarchy", &mut violations);
    }
    if let Some(value) = map.get("pages") {
        validate_pages(value, "pages", &mut violations);
    }

    if violations.0.is_empty() {
        Ok(())
    } else {
        Err(violations.0)
    }
}

/// Accumulator for validation failures.
#[derive(Default)]
struct Violations(Vec<FieldViolation>);

impl Violations {
    fn push(&mut self, path: impl Into<String>, rule: impl Into<String>, value: &Value) {
        self.0.push(FieldViolation {
            path: path.into(),
            rule: rule.into(),
            value: value.clone(),
        });
    }
}

/// Validate the "ocr" section.
fn validate_ocr(value: &Value, path: &str, violations: &mut Violations) {
    let Some(map) = expect_object(value, path, violations) else {
        return;
    };
    check_bool(map, "enabled", path, violations);
    check_enum(
        map,
        "backend",
        path,
        &["tesseract", "easyocr", "paddleocr", "auto"],
        violations,
    );
    check_string_array(map, "languages", path, violations);

    let enabled = map.get("enabled").and_then(Value::as_bool).unwrap_or(false);
    if enabled
        && let Some(languages) = map.get("languages").and_then(Value::as_array)
        && languages.is_empty()
    {
        violations.push(
            join_path(path, "languages"),
            "must not be empty when ocr is enabled",
            &map["languages"],
        );
    }

    if let Some(value) = map.get("tesseract_config") {
        validate_tesseract(value, &join_path(path, "tesseract_config"), violations);
    }
}

/// Validate a nested tesseract configuration.
fn validate_tesseract(value: &Value, path: &str, violations: &mut Violations) {
    let Some(map) = expect_object(value, path, violations) else {
        return;
    };
    if let Some(psm) = get_int(map, "psm_mode", path, violations)
        && !(0..=13).contains(&psm)
    {
        violations.push(
            join_path(path, "psm_mode"),
            "must be between 0 and 13",
            &map["psm_mode"],
        );
    }
    if let Some(oem) = get_int(map, "oem_mode", path, violations)
        && !(0..=3).contains(&oem)
    {
        violations.push(
            join_path(path, "oem_mode"),
            "must be one of 0, 1, 2, 3",
            &map["oem_mode"],
        );
    }
    check_string(map, "datapath", path, violations);
    check_string(map, "config_file", path, violations);
}

/// Validate the "pdf_options" section.
fn validate_pdf(value: &Value, path: &str, violations: &mut Violations) {
    let Some(map) = expect_object(value, path, violations) else {
        return;
    };
    for key in [
        "enabled",
        "extract_forms",
        "extract_form_data",
        "preserve_form_structure",
        "render_images",
        "extract_annotations",
        "extract_comments",
    ] {
        check_bool(map, key, path, violations);
    }
    if let Some(quality) = get_int(map, "render_quality", path, violations)
        && !(72..=600).contains(&quality)
    {
        violations.push(
            join_path(path, "render_quality"),
            "must be between 72 and 600",
            &map["render_quality"],
        );
    }
    check_string(map, "password", path, violations);
    if let Some(value) = map.get("font_config") {
        validate_fonts(value, &join_path(path, "font_config"), violations);
    }
}

/// Validate a nested font configuration.
fn validate_fonts(value: &Value, path: &str, violations: &mut Violations) {
    let Some(map) = expect_object(value, path, violations) else {
        return;
    };
    let min_size = get_float(map, "min_font_size", path, violations);
    if let Some(min) = min_size
        && min <= 0.0
    {
        violations.push(
            join_path(path, "min_font_size"),
            "must be > 0",
            &map["min_font_size"],
        );
    }
    let max_size = get_float(map, "max_font_size", path, violations);
    if let Some(max) = max_size
        && max <= 0.0
    {
        violations.push(
            join_path(path, "max_font_size"),
            "must be > 0",
            &map["max_font_size"],
        );
    }
    // Either absent side falls back to the model default, so a document
    // setting only one bound cannot decode into an inverted pair.
    let min = match min_size {
        Some(min) if min > 0.0 => Some(min),
        Some(_) => None,
        None => Some(f64::from(model::default_min_font_size())),
    };
    let max = match max_size {
        Some(max) if max > 0.0 => Some(max),
        Some(_) => None,
        None => Some(f64::from(model::default_max_font_size())),
    };
    if let Some(min) = min
        && let Some(max) = max
        && max < min
    {
        violations.push(
            join_path(path, "max_font_size"),
            "must be >= min_font_size",
            map.get("max_font_size").unwrap_or(&Value::Null),
        );
    }
    if let Some(value) = map.get("substitute_map") {
        let substitute_path = join_path(path, "substitute_map");
        match value.as_object() {
            Some(substitutes) => {
                for (font, replacement) in substitutes {
                    if !replacement.is_string() {
                        violations.push(
                            join_path(&substitute_path, font),
                            "must be a string",
                            replacement,
                        );
                    }
                }
            }
            None => violations.push(substitute_path, "must be a table of strings", value),
        }
    }
    check_string(map, "default_font_family", path, violations);
}

/// Validate the "images" section.
fn validate_images(value: &Value, path: &str, violations: &mut Violations) {
    let Some(map) = expect_object(value, path, violations) else {
        return;
    };
    check_bool(map, "extract_images", path, violations);
    check_enum(
        map,
        "format",
        path,
        &["png", "jpeg", "webp", "bmp", "tiff"],
        violations,
    );
    if let Some(quality) = get_int(map, "quality", path, violations)
        && !(1..=100).contains(&quality)
    {
        violations.push(
            join_path(path, "quality"),
            "must be between 1 and 100",
            &map["quality"],
        );
    }
    if let Some(compression) = get_int(map, "compression", path, violations)
        && compression < 0
    {
        violations.push(
            join_path(path, "compression"),
            "must be >= 0",
            &map["compression"],
        );
    }
    check_dimension_pair(map, "min_width", "max_width", path, violations);
    check_dimension_pair(map, "min_height", "max_height", path, violations);
    if let Some(dpi) = get_int(map, "dpi_threshold", path, violations)
        && dpi < 0
    {
        violations.push(
            join_path(path, "dpi_threshold"),
            "must be >= 0",
            &map["dpi_threshold"],
        );
    }
    if let Some(value) = map.get("preprocessing") {
        validate_preprocessing(value, &join_path(path, "preprocessing"), violations);
    }
}

/// Check a min/max pixel-dimension pair: both >= 0 and min strictly below max.
fn check_dimension_pair(
    map: &Map<String, Value>,
    min_key: &str,
    max_key: &str,
    path: &str,
    violations: &mut Violations,
) {
    let min = get_int(map, min_key, path, violations);
    let max = get_int(map, max_key, path, violations);
    if let Some(min) = min
        && min < 0
    {
        violations.push(join_path(path, min_key), "must be >= 0", &map[min_key]);
    }
    if let Some(max) = max
        && max < 0
    {
        violations.push(join_path(path, max_key), "must be >= 0", &map[max_key]);
    }
    let min = match min {
        Some(min) if min >= 0 => min,
        Some(_) => return,
        None => i64::from(default_dimension(min_key)),
    };
    let max = match max {
        Some(max) if max >= 0 => max,
        Some(_) => return,
        None => i64::from(default_dimension(max_key)),
    };
    if min >= max {
        violations.push(
            join_path(path, min_key),
            format!("must be < {max_key}"),
            map.get(min_key).unwrap_or(&Value::Null),
        );
    }
}

/// Model default for an image dimension bound, keyed by field name.
fn default_dimension(key: &str) -> u32 {
    match key {
        "min_width" => model::default_min_image_width(),
        "max_width" => model::default_max_image_width(),
        "min_height" => model::default_min_image_height(),
        _ => model::default_max_image_height(),
    }
}

/// Validate a nested image preprocessing configuration.
fn validate_preprocessing(value: &Value, path: &str, violations: &mut Violations) {
    let Some(map) = expect_object(value, path, violations) else {
        return;
    };
    for key in [
        "enabled",
        "denoise",
        "deskew",
        "adjust_contrast",
        "normalize_brightness",
        "auto_crop",
        "auto_enhance",
    ] {
        check_bool(map, key, path, violations);
    }
    if let Some(strength) = get_int(map, "denoise_strength", path, violations)
        && strength <= 0
    {
        violations.push(
            join_path(path, "denoise_strength"),
            "must be > 0",
            &map["denoise_strength"],
        );
    }
    check_number(map, "bilateral_sigma", path, violations);
    if let Some(threshold) = get_float(map, "deskew_angle_threshold", path, violations)
        && threshold <= 0.0
    {
        violations.push(
            join_path(path, "deskew_angle_threshold"),
            "must be > 0",
            &map["deskew_angle_threshold"],
        );
    }
    if let Some(contrast) = get_float(map, "contrast_value", path, violations)
        && !(0.5..=3.0).contains(&contrast)
    {
        violations.push(
            join_path(path, "contrast_value"),
            "must be between 0.5 and 3.0",
            &map["contrast_value"],
        );
    }
}

/// Validate the "chunking" section.
fn validate_chunking(value: &Value, path: &str, violations: &mut Violations) {
    let Some(map) = expect_object(value, path, violations) else {
        return;
    };
    check_bool(map, "enabled", path, violations);
    let chunk_size = get_int(map, "chunk_size", path, violations);
    if let Some(size) = chunk_size
        && size <= 0
    {
        violations.push(join_path(path, "chunk_size"), "must be > 0", &map["chunk_size"]);
    }
    let overlap = get_int(map, "overlap", path, violations);
    if let Some(overlap) = overlap
        && overlap < 0
    {
        violations.push(join_path(path, "overlap"), "must be >= 0", &map["overlap"]);
    }
    // Either absent side falls back to the model default, so a document
    // setting only chunk_size cannot decode into overlap >= chunk_size.
    let size = match chunk_size {
        Some(size) if size > 0 => Some(size),
        Some(_) => None,
        None => Some(i64::from(model::default_chunk_size())),
    };
    let overlap = match overlap {
        Some(overlap) if overlap >= 0 => Some(overlap),
        Some(_) => None,
        None => Some(i64::from(model::default_chunk_overlap())),
    };
    if let Some(size) = size
        && let Some(overlap) = overlap
        && overlap >= size
    {
        violations.push(
            join_path(path, "overlap"),
            "must be < chunk_size",
            map.get("overlap").unwrap_or(&Value::Null),
        );
    }
    check_enum(
        map,
        "strategy",
        path,
        &["fixed", "semantic", "adaptive"],
        violations,
    );
    check_string(map, "separator", path, violations);
    if let Some(value) = map.get("embedding_config") {
        validate_embedding(value, &join_path(path, "embedding_config"), violations);
    }
}

/// Validate a nested embedding configuration.
fn validate_embedding(value: &Value, path: &str, violations: &mut Violations) {
    let Some(map) = expect_object(value, path, violations) else {
        return;
    };
    check_bool(map, "enabled", path, violations);
    check_enum(
        map,
        "provider",
        path,
        &["local", "openai", "huggingface", "cohere", "custom"],
        violations,
    );
    check_string(map, "model", path, violations);
    if let Some(dimensions) = get_int(map, "dimensions", path, violations)
        && dimensions <= 0
    {
        violations.push(
            join_path(path, "dimensions"),
            "must be > 0",
            &map["dimensions"],
        );
    }
    if let Some(batch_size) = get_int(map, "batch_size", path, violations)
        && batch_size <= 0
    {
        violations.push(
            join_path(path, "batch_size"),
            "must be > 0",
            &map["batch_size"],
        );
    }
    check_bool(map, "normalize", path, violations);
    check_enum(
        map,
        "pool_strategy",
        path,
        &["mean", "max", "cls", "sum"],
        violations,
    );
    check_string(map, "device", path, violations);
    check_string(map, "api_key", path, violations);
}

/// Validate the "token_reduction" section.
fn validate_token_reduction(value: &Value, path: &str, violations: &mut Violations) {
    let Some(map) = expect_object(value, path, violations) else {
        return;
    };
    check_bool(map, "enabled", path, violations);
    check_enum(
        map,
        "strategy",
        path,
        &["none", "truncate", "summarize", "extractive"],
        violations,
    );
    check_unit_interval(map, "target_reduction", path, violations);
    if let Some(max_tokens) = get_int(map, "max_tokens", path, violations)
        && max_tokens <= 0
    {
        violations.push(
            join_path(path, "max_tokens"),
            "must be > 0",
            &map["max_tokens"],
        );
    }
    check_unit_interval(map, "keep_first_percentage", path, violations);
    if let Some(num_sentences) = get_int(map, "num_sentences", path, violations)
        && num_sentences < 0
    {
        violations.push(
            join_path(path, "num_sentences"),
            "must be >= 0",
            &map["num_sentences"],
        );
    }
    check_number(map, "sentence_importance_threshold", path, violations);
}

/// Validate the "language_detection" section.
fn validate_language_detection(value: &Value, path: &str, violations: &mut Violations) {
    let Some(map) = expect_object(value, path, violations) else {
        return;
    };
    check_bool(map, "enabled", path, violations);
    check_enum(map, "strategy", path, &["auto", "fast", "accurate"], violations);
    check_unit_interval(map, "confidence_threshold", path, violations);
    check_string_array(map, "predefined_languages", path, violations);
    check_bool(map, "detect_mixed_languages", path, violations);
}

/// Validate the "keywords" section.
fn validate_keywords(value: &Value, path: &str, violations: &mut Violations) {
    let Some(map) = expect_object(value, path, violations) else {
        return;
    };
    check_bool(map, "enabled", path, violations);
    check_enum(
        map,
        "strategy",
        path,
        &["frequency", "tfidf", "nlp", "custom"],
        violations,
    );
    if let Some(max_keywords) = get_int(map, "max_keywords", path, violations)
        && max_keywords <= 0
    {
        violations.push(
            join_path(path, "max_keywords"),
            "must be > 0",
            &map["max_keywords"],
        );
    }
    if let Some(min_frequency) = get_int(map, "min_frequency", path, violations)
        && min_frequency < 0
    {
        violations.push(
            join_path(path, "min_frequency"),
            "must be >= 0",
            &map["min_frequency"],
        );
    }
    check_string_array(map, "custom_keywords", path, violations);
    check_string(map, "language", path, violations);
}

/// Validate the "post_processing" section.
fn validate_post_processing(value: &Value, path: &str, violations: &mut Violations) {
    let Some(map) = expect_object(value, path, violations) else {
        return;
    };
    for key in [
        "enabled",
        "normalize_whitespace",
        "remove_duplicates",
        "remove_empty_lines",
        "trim_text",
        "normalize_unicode",
        "fix_punctuation",
        "fix_hyphens",
        "convert_dashes",
    ] {
        check_bool(map, key, path, violations);
    }
    check_unit_interval(map, "duplicate_threshold", path, violations);
    check_enum(
        map,
        "convert_quotes",
        path,
        &["straight", "smart", "none"],
        violations,
    );
}

/// Validate the "hierarchy" section.
fn validate_hierarchy(value: &Value, path: &str, violations: &mut Violations) {
    let Some(map) = expect_object(value, path, violations) else {
        return;
    };
    check_bool(map, "enabled", path, violations);
    check_bool(map, "preserve_structure", path, violations);
    let min_level = get_int(map, "min_heading_level", path, violations);
    if let Some(min) = min_level
        && min <= 0
    {
        violations.push(
            join_path(path, "min_heading_level"),
            "must be > 0",
            &map["min_heading_level"],
        );
    }
    let max_level = get_int(map, "max_heading_level", path, violations);
    // An absent max falls back to the model default so a document setting
    // only min_heading_level cannot decode into an inverted pair.
    let min = match min_level {
        Some(min) if min > 0 => Some(min),
        Some(_) => None,
        None => Some(i64::from(model::default_min_heading_level())),
    };
    let max = max_level.unwrap_or_else(|| i64::from(model::default_max_heading_level()));
    if let Some(min) = min
        && max < min
    {
        violations.push(
            join_path(path, "max_heading_level"),
            "must be >= min_heading_level",
            map.get("max_heading_level").unwrap_or(&Value::Null),
        );
    }
    if let Some(depth) = get_int(map, "max_depth", path, violations)
        && depth <= 0
    {
        violations.push(join_path(path, "max_depth"), "must be > 0", &map["max_depth"]);
    }
}

/// Validate the "pages" section.
fn validate_pages(value: &Value, path: &str, violations: &mut Violations) {
    let Some(map) = expect_object(value, path, violations) else {
        return;
    };
    let start_page = get_int(map, "start_page", path, violations);
    if let Some(start) = start_page
        && start <= 0
    {
        violations.push(join_path(path, "start_page"), "must be > 0", &map["start_page"]);
    }
    if let Some(end) = get_int(map, "end_page", path, violations) {
        let start = start_page
            .filter(|start| *start > 0)
            .unwrap_or_else(|| i64::from(model::default_start_page()));
        if end < start {
            violations.push(
                join_path(path, "end_page"),
                "must be >= start_page",
                &map["end_page"],
            );
        }
    }
    // page_numbers and exclude_pages may overlap; exclusion wins downstream.
    check_int_array(map, "page_numbers", path, violations);
    check_int_array(map, "exclude_pages", path, violations);
    for key in [
        "extract_text",
        "extract_tables",
        "extract_images",
        "extract_headers_footers",
    ] {
        check_bool(map, key, path, violations);
    }
}

/// Expect a mapping, recording a violation otherwise.
fn expect_object<'a>(
    value: &'a Value,
    path: &str,
    violations: &mut Violations,
) -> Option<&'a Map<String, Value>> {
    match value.as_object() {
        Some(map) => Some(map),
        None => {
            violations.push(path, "must be a table", value);
            None
        }
    }
}

/// If present, the key must hold a boolean.
fn check_bool(map: &Map<String, Value>, key: &str, path: &str, violations: &mut Violations) {
    if let Some(value) = map.get(key)
        && !value.is_boolean()
    {
        violations.push(join_path(path, key), "must be a boolean", value);
    }
}

/// If present, the key must hold a string.
fn check_string(map: &Map<String, Value>, key: &str, path: &str, violations: &mut Violations) {
    if let Some(value) = map.get(key)
        && !value.is_string()
    {
        violations.push(join_path(path, key), "must be a string", value);
    }
}

/// If present, the key must hold an array of strings.
fn check_string_array(map: &Map<String, Value>, key: &str, path: &str, violations: &mut Violations) {
    let Some(value) = map.get(key) else { return };
    let Some(entries) = value.as_array() else {
        violations.push(join_path(path, key), "must be an array of strings", value);
        return;
    };
    for (idx, entry) in entries.iter().enumerate() {
        if !entry.is_string() {
            violations.push(
                format!("{}[{idx}]", join_path(path, key)),
                "must be a string",
                entry,
            );
        }
    }
}

/// If present, the key must hold an array of integers.
fn check_int_array(map: &Map<String, Value>, key: &str, path: &str, violations: &mut Violations) {
    let Some(value) = map.get(key) else { return };
    let Some(entries) = value.as_array() else {
        violations.push(join_path(path, key), "must be an array of integers", value);
        return;
    };
    for (idx, entry) in entries.iter().enumerate() {
        match entry.as_i64() {
            Some(n) if (0..=i64::from(u32::MAX)).contains(&n) => {}
            Some(_) => violations.push(
                format!("{}[{idx}]", join_path(path, key)),
                "must fit in a 32-bit unsigned integer",
                entry,
            ),
            None if entry.is_u64() => violations.push(
                format!("{}[{idx}]", join_path(path, key)),
                "must fit in a 32-bit unsigned integer",
                entry,
            ),
            None => violations.push(
                format!("{}[{idx}]", join_path(path, key)),
                "must be an integer",
                entry,
            ),
        }
    }
}

/// If present, the key must hold one of the allowed lowercase variants.
fn check_enum(
    map: &Map<String, Value>,
    key: &str,
    path: &str,
    allowed: &[&str],
    violations: &mut Violations,
) {
    let Some(value) = map.get(key) else { return };
    match value.as_str() {
        Some(variant) if allowed.contains(&variant) => {}
        Some(_) => violations.push(
            join_path(path, key),
            format!("must be one of {}", allowed.join(", ")),
            value,
        ),
        None => violations.push(join_path(path, key), "must be a string", value),
    }
}

/// Read an integer field; non-integers and values too wide for the model's
/// 32-bit fields record a violation and yield `None`.
fn get_int(
    map: &Map<String, Value>,
    key: &str,
    path: &str,
    violations: &mut Violations,
) -> Option<i64> {
    let value = map.get(key)?;
    let Some(n) = value.as_i64() else {
        let rule = if value.is_u64() {
            "must fit in a 32-bit unsigned integer"
        } else {
            "must be an integer"
        };
        violations.push(join_path(path, key), rule, value);
        return None;
    };
    if n > i64::from(u32::MAX) {
        violations.push(
            join_path(path, key),
            "must fit in a 32-bit unsigned integer",
            value,
        );
        return None;
    }
    Some(n)
}

/// Read a numeric field (integer or float); others record a violation.
fn get_float(
    map: &Map<String, Value>,
    key: &str,
    path: &str,
    violations: &mut Violations,
) -> Option<f64> {
    let value = map.get(key)?;
    match value.as_f64() {
        Some(n) => Some(n),
        None => {
            violations.push(join_path(path, key), "must be a number", value);
            None
        }
    }
}

/// If present, the key must hold a number; the value itself is unchecked.
fn check_number(map: &Map<String, Value>, key: &str, path: &str, violations: &mut Violations) {
    let _ = get_float(map, key, path, violations);
}

/// If present, the key must hold a number in [0.0, 1.0].
fn check_unit_interval(
    map: &Map<String, Value>,
    key: &str,
    path: &str,
    violations: &mut Violations,
) {
    if let Some(n) = get_float(map, key, path, violations)
        && !(0.0..=1.0).contains(&n)
    {
        violations.push(
            join_path(path, key),
            "must be between 0.0 and 1.0",
            &map[key],
        );
    }
}

/// Join nested paths for error messages.
fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn violations(value: Value) -> Vec<FieldViolation> {
        validate_tree(&value).expect_err("expected violations")
    }

    fn paths(value: Value) -> Vec<String> {
        violations(value)
            .into_iter()
            .map(|violation| violation.path)
            .collect()
    }

    #[test]
    fn empty_config_is_valid() {
        assert_eq!(validate_tree(&json!({})), Ok(()));
    }

    #[test]
    fn absent_sections_are_skipped() {
        let value = json!({ "chunking": { "chunk_size": 100, "overlap": 10 } });
        assert_eq!(validate_tree(&value), Ok(()));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let value = json!({
            "chunking": { "chunk_size": 500, "some_future_field": "x" },
            "telemetry": { "endpoint": "http://example" },
        });
        assert_eq!(validate_tree(&value), Ok(()));
    }

    #[test]
    fn overlap_must_be_below_chunk_size() {
        let value = json!({ "chunking": { "chunk_size": 100, "overlap": 100 } });
        let violations = violations(value);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "chunking.overlap");
        assert_eq!(violations[0].rule, "must be < chunk_size");
        assert_eq!(violations[0].value, json!(100));
    }

    #[test]
    fn overlap_compares_against_default_chunk_size_when_absent() {
        let value = json!({ "chunking": { "overlap": 5000 } });
        assert_eq!(paths(value), vec!["chunking.overlap"]);
        let value = json!({ "chunking": { "overlap": 500 } });
        assert_eq!(validate_tree(&value), Ok(()));
    }

    #[test]
    fn small_chunk_size_conflicts_with_the_default_overlap() {
        let value = json!({ "chunking": { "chunk_size": 50 } });
        let violations = violations(value);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "chunking.overlap");
        assert_eq!(violations[0].rule, "must be < chunk_size");

        let value = json!({ "chunking": { "chunk_size": 101 } });
        assert_eq!(validate_tree(&value), Ok(()));
    }

    #[test]
    fn large_min_font_size_conflicts_with_the_default_max() {
        let value = json!({
            "pdf_options": { "font_config": { "min_font_size": 100.0 } }
        });
        assert_eq!(paths(value), vec!["pdf_options.font_config.max_font_size"]);

        let value = json!({
            "pdf_options": { "font_config": { "min_font_size": 72.0 } }
        });
        assert_eq!(validate_tree(&value), Ok(()));
    }

    #[test]
    fn large_min_heading_level_conflicts_with_the_default_max() {
        let value = json!({ "hierarchy": { "min_heading_level": 8 } });
        assert_eq!(paths(value), vec!["hierarchy.max_heading_level"]);

        let value = json!({ "hierarchy": { "min_heading_level": 6 } });
        assert_eq!(validate_tree(&value), Ok(()));
    }

    #[test]
    fn integers_wider_than_the_model_fields_are_rejected() {
        let value = json!({ "chunking": { "chunk_size": 5_000_000_000_i64 } });
        let violations = violations(value);
        assert_eq!(violations[0].path, "chunking.chunk_size");
        assert_eq!(violations[0].rule, "must fit in a 32-bit unsigned integer");

        let value = json!({ "pages": { "page_numbers": [1, 5_000_000_000_i64] } });
        assert_eq!(paths(value), vec!["pages.page_numbers[1]"]);
    }

    #[test]
    fn render_quality_bounds_are_inclusive() {
        for quality in [72, 600] {
            let value = json!({ "pdf_options": { "render_quality": quality } });
            assert_eq!(validate_tree(&value), Ok(()), "quality {quality}");
        }
        for quality in [71, 601] {
            let value = json!({ "pdf_options": { "render_quality": quality } });
            assert_eq!(paths(value), vec!["pdf_options.render_quality"]);
        }
    }

    #[test]
    fn image_quality_bounds_are_inclusive() {
        for quality in [1, 100] {
            let value = json!({ "images": { "quality": quality } });
            assert_eq!(validate_tree(&value), Ok(()), "quality {quality}");
        }
        for quality in [0, 101] {
            let value = json!({ "images": { "quality": quality } });
            assert_eq!(paths(value), vec!["images.quality"]);
        }
    }

    #[test]
    fn image_dimensions_must_order() {
        let value = json!({ "images": { "min_width": 500, "max_width": 100 } });
        assert_eq!(paths(value), vec!["images.min_width"]);
        let value = json!({ "images": { "min_height": 20000 } });
        assert_eq!(paths(value), vec!["images.min_height"]);
    }

    #[test]
    fn heading_levels_must_order() {
        let value = json!({ "hierarchy": { "min_heading_level": 3, "max_heading_level": 2 } });
        assert_eq!(paths(value), vec!["hierarchy.max_heading_level"]);
        let value = json!({ "hierarchy": { "min_heading_level": 2, "max_heading_level": 2 } });
        assert_eq!(validate_tree(&value), Ok(()));
    }

    #[test]
    fn tesseract_modes_are_bounded() {
        let value = json!({
            "ocr": { "tesseract_config": { "psm_mode": 14, "oem_mode": 4 } }
        });
        assert_eq!(
            paths(value),
            vec![
                "ocr.tesseract_config.psm_mode",
                "ocr.tesseract_config.oem_mode"
            ]
        );
        let value = json!({
            "ocr": { "tesseract_config": { "psm_mode": 0, "oem_mode": 3 } }
        });
        assert_eq!(validate_tree(&value), Ok(()));
    }

    #[test]
    fn enabled_ocr_requires_languages() {
        let value = json!({ "ocr": { "enabled": true, "languages": [] } });
        let violations = violations(value);
        assert_eq!(violations[0].path, "ocr.languages");
        assert_eq!(violations[0].rule, "must not be empty when ocr is enabled");

        let value = json!({ "ocr": { "enabled": false, "languages": [] } });
        assert_eq!(validate_tree(&value), Ok(()));
    }

    #[test]
    fn contrast_value_range() {
        let value = json!({
            "images": { "preprocessing": { "contrast_value": 3.5 } }
        });
        assert_eq!(paths(value), vec!["images.preprocessing.contrast_value"]);
        let value = json!({
            "images": { "preprocessing": { "contrast_value": 0.5 } }
        });
        assert_eq!(validate_tree(&value), Ok(()));
    }

    #[test]
    fn unit_interval_fields_are_checked() {
        let value = json!({
            "token_reduction": { "target_reduction": 1.5 },
            "language_detection": { "confidence_threshold": -0.1 },
            "post_processing": { "duplicate_threshold": 2.0 },
        });
        let mut found = paths(value);
        found.sort();
        assert_eq!(
            found,
            vec![
                "language_detection.confidence_threshold",
                "post_processing.duplicate_threshold",
                "token_reduction.target_reduction",
            ]
        );
    }

    #[test]
    fn invalid_enum_variants_are_rejected() {
        let value = json!({
            "ocr": { "backend": "abbyy" },
            "chunking": { "strategy": "random" },
            "keywords": { "strategy": "llm" },
        });
        let violations = violations(value);
        assert_eq!(violations.len(), 3);
        let backend = violations
            .iter()
            .find(|violation| violation.path == "ocr.backend")
            .expect("backend violation");
        assert!(backend.rule.contains("tesseract"));
    }

    #[test]
    fn end_page_must_not_precede_start_page() {
        let value = json!({ "pages": { "start_page": 5, "end_page": 3 } });
        assert_eq!(paths(value), vec!["pages.end_page"]);
        let value = json!({ "pages": { "start_page": 3, "end_page": 3 } });
        assert_eq!(validate_tree(&value), Ok(()));
    }

    #[test]
    fn overlapping_page_lists_are_legal() {
        let value = json!({
            "pages": { "page_numbers": [1, 2, 3], "exclude_pages": [2] }
        });
        assert_eq!(validate_tree(&value), Ok(()));
    }

    #[test]
    fn embedding_fields_are_validated_through_chunking() {
        let value = json!({
            "chunking": {
                "embedding_config": { "dimensions": 0, "pool_strategy": "avg" }
            }
        });
        let mut found = paths(value);
        found.sort();
        assert_eq!(
            found,
            vec![
                "chunking.embedding_config.dimensions",
                "chunking.embedding_config.pool_strategy",
            ]
        );
    }

    #[test]
    fn type_mismatches_are_reported() {
        let value = json!({
            "pdf_options": { "enabled": "yes", "render_quality": 90.5 },
            "pages": { "page_numbers": [1, "two"] },
        });
        let mut found = paths(value);
        found.sort();
        assert_eq!(
            found,
            vec![
                "pages.page_numbers[1]",
                "pdf_options.enabled",
                "pdf_options.render_quality",
            ]
        );
    }

    #[test]
    fn all_violations_are_collected_in_one_pass() {
        let value = json!({
            "chunking": { "chunk_size": 0, "overlap": -1 },
            "pdf_options": { "render_quality": 1000 },
            "images": { "quality": 0 },
            "hierarchy": { "max_depth": 0 },
        });
        assert_eq!(violations(value).len(), 5);
    }

    #[test]
    fn non_mapping_root_is_rejected() {
        let violations = violations(json!([1, 2, 3]));
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "");
    }
}
