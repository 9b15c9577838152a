//! Configuration schema for the Kreuzberg extraction engine.
//!
//! Every sub-config is optional on the root; an absent section means the
//! feature is disabled or runs with defaults. The model itself accepts any
//! in-range-or-not value so decoding stays total; range and cross-field rules
//! live in the validator.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root config consumed by the extraction engine and every language binding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ExtractionConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ocr: Option<OcrConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_options: Option<PdfConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<ImageExtractionConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chunking: Option<ChunkingConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_reduction: Option<TokenReductionConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_detection: Option<LanguageDetectionConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<KeywordConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_processing: Option<PostProcessorConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hierarchy: Option<HierarchyConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<PageConfig>,
}

impl ExtractionConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> ExtractionConfigBuilder {
        ExtractionConfigBuilder::new()
    }
}

/// Builder for assembling an `ExtractionConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct ExtractionConfigBuilder {
    config: ExtractionConfig,
}

impl ExtractionConfigBuilder {
    /// Create a new builder with every section absent.
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
        }
    }

    /// Set the OCR configuration.
    pub fn ocr(mut self, ocr: OcrConfig) -> Self {
        self.config.ocr = Some(ocr);
        self
    }

    /// Set the PDF rendering/extraction configuration.
    pub fn pdf_options(mut self, pdf_options: PdfConfig) -> Self {
        self.config.pdf_options = Some(pdf_options);
        self
    }

    /// Set the image extraction configuration.
    pub fn images(mut self, images: ImageExtractionConfig) -> Self {
        self.config.images = Some(images);
        self
    }

    /// Set the chunking configuration.
    pub fn chunking(mut self, chunking: ChunkingConfig) -> Self {
        self.config.chunking = Some(chunking);
        self
    }

    /// Set the token reduction configuration.
    pub fn token_reduction(mut self, token_reduction: TokenReductionConfig) -> Self {
        self.config.token_reduction = Some(token_reduction);
        self
    }

    /// Set the language detection configuration.
    pub fn language_detection(mut self, language_detection: LanguageDetectionConfig) -> Self {
        self.config.language_detection = Some(language_detection);
        self
    }

    /// Set the keyword extraction configuration.
    pub fn keywords(mut self, keywords: KeywordConfig) -> Self {
        self.config.keywords = Some(keywords);
        self
    }

    /// Set the text post-processing configuration.
    pub fn post_processing(mut self, post_processing: PostProcessorConfig) -> Self {
        self.config.post_processing = Some(post_processing);
        self
    }

    /// Set the heading hierarchy configuration.
    pub fn hierarchy(mut self, hierarchy: HierarchyConfig) -> Self {
        self.config.hierarchy = Some(hierarchy);
        self
    }

    /// Set the page selection configuration.
    pub fn pages(mut self, pages: PageConfig) -> Self {
        self.config.pages = Some(pages);
        self
    }

    /// Finalize and return the built `ExtractionConfig`.
    pub fn build(self) -> ExtractionConfig {
        self.config
    }
}

/// OCR backend selection and language setup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OcrConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub backend: OcrBackend,
    #[serde(default = "default_ocr_languages")]
    pub languages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tesseract_config: Option<TesseractConfig>,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            backend: OcrBackend::default(),
            languages: default_ocr_languages(),
            tesseract_config: None,
        }
    }
}

/// Default OCR language list.
fn default_ocr_languages() -> Vec<String> {
    vec!["eng".to_string()]
}

/// OCR backend choices.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OcrBackend {
    Tesseract,
    Easyocr,
    Paddleocr,
    #[default]
    Auto,
}

/// Tesseract engine tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TesseractConfig {
    /// Page segmentation mode, 0 through 13.
    #[serde(default = "default_psm_mode")]
    pub psm_mode: u32,
    /// OCR engine mode, 0 through 3.
    #[serde(default = "default_oem_mode")]
    pub oem_mode: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datapath: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
}

impl Default for TesseractConfig {
    fn default() -> Self {
        Self {
            psm_mode: default_psm_mode(),
            oem_mode: default_oem_mode(),
            datapath: None,
            config_file: None,
        }
    }
}

/// Default page segmentation mode (fully automatic).
fn default_psm_mode() -> u32 {
    3
}

/// Default engine mode (whatever is available).
fn default_oem_mode() -> u32 {
    3
}

/// PDF rendering and form/annotation extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PdfConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub extract_forms: bool,
    #[serde(default)]
    pub extract_form_data: bool,
    #[serde(default = "default_preserve_form_structure")]
    pub preserve_form_structure: bool,
    /// Render DPI, 72 through 600.
    #[serde(default = "default_render_quality")]
    pub render_quality: u32,
    #[serde(default)]
    pub render_images: bool,
    #[serde(default)]
    pub extract_annotations: bool,
    #[serde(default)]
    pub extract_comments: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_config: Option<FontConfig>,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            extract_forms: false,
            extract_form_data: false,
            preserve_form_structure: default_preserve_form_structure(),
            render_quality: default_render_quality(),
            render_images: false,
            extract_annotations: false,
            extract_comments: false,
            password: None,
            font_config: None,
        }
    }
}

/// Form structure is kept unless explicitly flattened.
fn default_preserve_form_structure() -> bool {
    true
}

/// Default render DPI.
fn default_render_quality() -> u32 {
    150
}

/// Font sizing and substitution rules for PDF text extraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FontConfig {
    #[serde(default = "default_min_font_size")]
    pub min_font_size: f32,
    #[serde(default = "default_max_font_size")]
    pub max_font_size: f32,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub substitute_map: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_font_family: Option<String>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            min_font_size: default_min_font_size(),
            max_font_size: default_max_font_size(),
            substitute_map: HashMap::new(),
            default_font_family: None,
        }
    }
}

/// Default minimum font size in points.
pub(crate) fn default_min_font_size() -> f32 {
    6.0
}

/// Default maximum font size in points.
pub(crate) fn default_max_font_size() -> f32 {
    72.0
}

/// Embedded image extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImageExtractionConfig {
    #[serde(default = "default_extract_images")]
    pub extract_images: bool,
    #[serde(default)]
    pub format: ImageOutputFormat,
    /// Output quality, 1 through 100.
    #[serde(default = "default_image_quality")]
    pub quality: u32,
    #[serde(default = "default_image_compression")]
    pub compression: u32,
    #[serde(default = "default_min_image_width")]
    pub min_width: u32,
    #[serde(default = "default_max_image_width")]
    pub max_width: u32,
    #[serde(default = "default_min_image_height")]
    pub min_height: u32,
    #[serde(default = "default_max_image_height")]
    pub max_height: u32,
    #[serde(default = "default_dpi_threshold")]
    pub dpi_threshold: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preprocessing: Option<ImagePreprocessingConfig>,
}

impl Default for ImageExtractionConfig {
    fn default() -> Self {
        Self {
            extract_images: default_extract_images(),
            format: ImageOutputFormat::default(),
            quality: default_image_quality(),
            compression: default_image_compression(),
            min_width: default_min_image_width(),
            max_width: default_max_image_width(),
            min_height: default_min_image_height(),
            max_height: default_max_image_height(),
            dpi_threshold: default_dpi_threshold(),
            preprocessing: None,
        }
    }
}

/// Images are extracted when the section is present.
fn default_extract_images() -> bool {
    true
}

/// Default output quality.
fn default_image_quality() -> u32 {
    85
}

/// Default compression level.
fn default_image_compression() -> u32 {
    6
}

/// Default minimum image width in pixels.
pub(crate) fn default_min_image_width() -> u32 {
    50
}

/// Default maximum image width in pixels.
pub(crate) fn default_max_image_width() -> u32 {
    10_000
}

/// Default minimum image height in pixels.
pub(crate) fn default_min_image_height() -> u32 {
    50
}

/// Default maximum image height in pixels.
pub(crate) fn default_max_image_height() -> u32 {
    10_000
}

/// DPI below which images are considered low resolution.
fn default_dpi_threshold() -> u32 {
    150
}

/// Output formats for extracted images.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ImageOutputFormat {
    #[default]
    Png,
    Jpeg,
    Webp,
    Bmp,
    Tiff,
}

/// Image cleanup applied before OCR.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ImagePreprocessingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub denoise: bool,
    #[serde(default)]
    pub deskew: bool,
    #[serde(default)]
    pub adjust_contrast: bool,
    #[serde(default)]
    pub normalize_brightness: bool,
    #[serde(default)]
    pub auto_crop: bool,
    #[serde(default)]
    pub auto_enhance: bool,
    #[serde(default = "default_denoise_strength")]
    pub denoise_strength: u32,
    #[serde(default = "default_bilateral_sigma")]
    pub bilateral_sigma: f32,
    #[serde(default = "default_deskew_angle_threshold")]
    pub deskew_angle_threshold: f32,
    /// Contrast multiplier, 0.5 through 3.0.
    #[serde(default = "default_contrast_value")]
    pub contrast_value: f32,
}

impl Default for ImagePreprocessingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            denoise: false,
            deskew: false,
            adjust_contrast: false,
            normalize_brightness: false,
            auto_crop: false,
            auto_enhance: false,
            denoise_strength: default_denoise_strength(),
            bilateral_sigma: default_bilateral_sigma(),
            deskew_angle_threshold: default_deskew_angle_threshold(),
            contrast_value: default_contrast_value(),
        }
    }
}

/// Default denoise filter strength.
fn default_denoise_strength() -> u32 {
    10
}

/// Default sigma for bilateral filtering.
fn default_bilateral_sigma() -> f32 {
    75.0
}

/// Skew angles below this many degrees are left alone.
fn default_deskew_angle_threshold() -> f32 {
    1.0
}

/// Default contrast multiplier (no change).
fn default_contrast_value() -> f32 {
    1.0
}

/// Text chunking settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChunkingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_chunk_size")]
    pub chunk_size: u32,
    /// Characters shared between adjacent chunks; always less than `chunk_size`.
    #[serde(default = "default_chunk_overlap")]
    pub overlap: u32,
    #[serde(default)]
    pub strategy: ChunkingStrategy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding_config: Option<EmbeddingConfig>,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            chunk_size: default_chunk_size(),
            overlap: default_chunk_overlap(),
            strategy: ChunkingStrategy::default(),
            separator: None,
            embedding_config: None,
        }
    }
}

/// Default chunk size in characters.
pub(crate) fn default_chunk_size() -> u32 {
    1000
}

/// Default chunk overlap in characters.
pub(crate) fn default_chunk_overlap() -> u32 {
    100
}

/// Chunk boundary strategies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChunkingStrategy {
    #[default]
    Fixed,
    Semantic,
    Adaptive,
}

/// Embedding generation settings, reached through chunking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmbeddingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub provider: EmbeddingProvider,
    #[serde(default = "default_embedding_model")]
    pub model: String,
    #[serde(default = "default_embedding_dimensions")]
    pub dimensions: u32,
    #[serde(default = "default_embedding_batch_size")]
    pub batch_size: u32,
    #[serde(default = "default_embedding_normalize")]
    pub normalize: bool,
    #[serde(default)]
    pub pool_strategy: PoolStrategy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: EmbeddingProvider::default(),
            model: default_embedding_model(),
            dimensions: default_embedding_dimensions(),
            batch_size: default_embedding_batch_size(),
            normalize: default_embedding_normalize(),
            pool_strategy: PoolStrategy::default(),
            device: None,
            api_key: None,
        }
    }
}

/// Default embedding model identifier.
fn default_embedding_model() -> String {
    "all-MiniLM-L6-v2".to_string()
}

/// Default embedding vector width.
fn default_embedding_dimensions() -> u32 {
    384
}

/// Default embedding batch size.
fn default_embedding_batch_size() -> u32 {
    32
}

/// Embeddings are normalized unless turned off.
fn default_embedding_normalize() -> bool {
    true
}

/// Embedding providers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProvider {
    #[default]
    Local,
    Openai,
    Huggingface,
    Cohere,
    Custom,
}

/// Token pooling strategies for sentence embeddings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PoolStrategy {
    #[default]
    Mean,
    Max,
    Cls,
    Sum,
}

/// Token reduction applied to extracted text before downstream use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenReductionConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub strategy: TokenReductionStrategy,
    /// Fraction of tokens to remove, 0.0 through 1.0.
    #[serde(default = "default_target_reduction")]
    pub target_reduction: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Fraction of leading text always kept, 0.0 through 1.0.
    #[serde(default = "default_keep_first_percentage")]
    pub keep_first_percentage: f32,
    #[serde(default = "default_num_sentences")]
    pub num_sentences: u32,
    #[serde(default = "default_sentence_importance_threshold")]
    pub sentence_importance_threshold: f32,
}

impl Default for TokenReductionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            strategy: TokenReductionStrategy::default(),
            target_reduction: default_target_reduction(),
            max_tokens: default_max_tokens(),
            keep_first_percentage: default_keep_first_percentage(),
            num_sentences: default_num_sentences(),
            sentence_importance_threshold: default_sentence_importance_threshold(),
        }
    }
}

/// Default reduction target.
fn default_target_reduction() -> f32 {
    0.5
}

/// Default token ceiling.
fn default_max_tokens() -> u32 {
    4096
}

/// Default leading-text fraction kept during truncation.
fn default_keep_first_percentage() -> f32 {
    0.2
}

/// Default sentence count for extractive reduction.
fn default_num_sentences() -> u32 {
    3
}

/// Default importance score cutoff for extractive reduction.
fn default_sentence_importance_threshold() -> f32 {
    0.5
}

/// Token reduction strategies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TokenReductionStrategy {
    #[default]
    None,
    Truncate,
    Summarize,
    Extractive,
}

/// Language detection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LanguageDetectionConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub strategy: LanguageDetectionStrategy,
    /// Minimum detector confidence, 0.0 through 1.0.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub predefined_languages: Option<Vec<String>>,
    #[serde(default)]
    pub detect_mixed_languages: bool,
}

impl Default for LanguageDetectionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            strategy: LanguageDetectionStrategy::default(),
            confidence_threshold: default_confidence_threshold(),
            predefined_languages: None,
            detect_mixed_languages: false,
        }
    }
}

/// Default detector confidence cutoff.
fn default_confidence_threshold() -> f32 {
    0.5
}

/// Language detection strategies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageDetectionStrategy {
    #[default]
    Auto,
    Fast,
    Accurate,
}

/// Keyword extraction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeywordConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub strategy: KeywordStrategy,
    #[serde(default = "default_max_keywords")]
    pub max_keywords: u32,
    #[serde(default = "default_min_frequency")]
    pub min_frequency: u32,
    #[serde(default)]
    pub custom_keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            strategy: KeywordStrategy::default(),
            max_keywords: default_max_keywords(),
            min_frequency: default_min_frequency(),
            custom_keywords: Vec::new(),
            language: None,
        }
    }
}

/// Default keyword count ceiling.
fn default_max_keywords() -> u32 {
    10
}

/// Default minimum term frequency.
fn default_min_frequency() -> u32 {
    1
}

/// Keyword extraction strategies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeywordStrategy {
    #[default]
    Frequency,
    Tfidf,
    Nlp,
    Custom,
}

/// Text cleanup applied after extraction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PostProcessorConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_normalize_whitespace")]
    pub normalize_whitespace: bool,
    #[serde(default)]
    pub remove_duplicates: bool,
    #[serde(default)]
    pub remove_empty_lines: bool,
    #[serde(default = "default_trim_text")]
    pub trim_text: bool,
    #[serde(default)]
    pub normalize_unicode: bool,
    #[serde(default)]
    pub fix_punctuation: bool,
    #[serde(default)]
    pub fix_hyphens: bool,
    #[serde(default)]
    pub convert_dashes: bool,
    /// Similarity above which two lines count as duplicates, 0.0 through 1.0.
    #[serde(default = "default_duplicate_threshold")]
    pub duplicate_threshold: f32,
    #[serde(default)]
    pub convert_quotes: QuoteConversion,
}

impl Default for PostProcessorConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            normalize_whitespace: default_normalize_whitespace(),
            remove_duplicates: false,
            remove_empty_lines: false,
            trim_text: default_trim_text(),
            normalize_unicode: false,
            fix_punctuation: false,
            fix_hyphens: false,
            convert_dashes: false,
            duplicate_threshold: default_duplicate_threshold(),
            convert_quotes: QuoteConversion::default(),
        }
    }
}

/// Whitespace is normalized unless turned off.
fn default_normalize_whitespace() -> bool {
    true
}

/// Leading/trailing whitespace is trimmed unless turned off.
fn default_trim_text() -> bool {
    true
}

/// Default duplicate-line similarity cutoff.
fn default_duplicate_threshold() -> f32 {
    0.95
}

/// Quote character conversion modes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum QuoteConversion {
    Straight,
    Smart,
    #[default]
    None,
}

/// Heading hierarchy reconstruction settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HierarchyConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_preserve_structure")]
    pub preserve_structure: bool,
    #[serde(default = "default_min_heading_level")]
    pub min_heading_level: u32,
    #[serde(default = "default_max_heading_level")]
    pub max_heading_level: u32,
    #[serde(default = "default_max_depth")]
    pub max_depth: u32,
}

impl Default for HierarchyConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            preserve_structure: default_preserve_structure(),
            min_heading_level: default_min_heading_level(),
            max_heading_level: default_max_heading_level(),
            max_depth: default_max_depth(),
        }
    }
}

/// Document structure is preserved unless turned off.
fn default_preserve_structure() -> bool {
    true
}

/// Default shallowest heading level considered.
pub(crate) fn default_min_heading_level() -> u32 {
    1
}

/// Default deepest heading level considered.
pub(crate) fn default_max_heading_level() -> u32 {
    6
}

/// Default nesting depth ceiling.
fn default_max_depth() -> u32 {
    10
}

/// Page selection and per-page extraction toggles.
///
/// `page_numbers` and `exclude_pages` may overlap; exclusion wins downstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PageConfig {
    #[serde(default = "default_start_page")]
    pub start_page: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_page: Option<u32>,
    #[serde(default)]
    pub page_numbers: Vec<u32>,
    #[serde(default)]
    pub exclude_pages: Vec<u32>,
    #[serde(default = "default_extract_text")]
    pub extract_text: bool,
    #[serde(default)]
    pub extract_tables: bool,
    #[serde(default)]
    pub extract_images: bool,
    #[serde(default)]
    pub extract_headers_footers: bool,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            start_page: default_start_page(),
            end_page: None,
            page_numbers: Vec::new(),
            exclude_pages: Vec::new(),
            extract_text: default_extract_text(),
            extract_tables: false,
            extract_images: false,
            extract_headers_footers: false,
        }
    }
}

/// Pages are one-indexed.
pub(crate) fn default_start_page() -> u32 {
    1
}

/// Text extraction is on unless turned off.
fn default_extract_text() -> bool {
    true
}
