// src/config/consts.rs

// Local store (debug log)
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Loader
pub const MAX_SCROLL_ATTEMPTS: usize = 50;
pub const SCROLL_DELAY_MS: u64 = 1500;
pub const SETTLE_DELAY_MS: u64 = 500;

// Documents
pub const DEFAULT_BASE_URL: &str = "https://suno.com/";

// Song containers, tried in order; first selector with any match wins.
pub const SONG_SELECTORS: &[&str] = &[
    r#"[data-testid*="song"]"#,
    r#"[data-testid*="track"]"#,
    ".song-card",
    ".track-item",
    "article",
    r#"[class*="SongCard"]"#,
    r#"[class*="TrackItem"]"#,
];

// Last resort when no container selector matches anything.
pub const FALLBACK_SELECTOR: &str =
    r#"h1, h2, h3, h4, .title, [class*="title"], [class*="Title"]"#;

// Per-field lookups inside one song element
pub const TITLE_SELECTOR: &str =
    r#"h1, h2, h3, h4, .title, [class*="title"], [class*="Title"]"#;
pub const DESCRIPTION_SELECTOR: &str =
    r#".description, .lyrics, [class*="description"], [class*="Description"]"#;
pub const DATE_SELECTOR: &str = r#"time, .date, [class*="date"], [class*="Date"]"#;
pub const DURATION_SELECTOR: &str = r#".duration, [class*="duration"], [class*="Duration"]"#;
pub const TAG_SELECTOR: &str = r#".tag, [class*="tag"], [class*="Tag"]"#;
pub const AUDIO_SELECTOR: &str = r#"audio, [src*=".mp3"], [src*=".wav"], [src*="audio"]"#;
pub const IMAGE_SELECTOR: &str = "img";
pub const LINK_SELECTOR: &str = "a[href]";

pub const ELEMENT_HTML_MAX_CHARS: usize = 500;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const FILE_PREFIX: &str = "suno_library_";
pub const FILE_EXT: &str = "json";
