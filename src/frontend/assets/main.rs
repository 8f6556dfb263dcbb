//! Asset and CSS loading/caching utilities.

use base64::{Engine as _, engine::general_purpose};
use std::{collections::HashMap, sync::OnceLock};

static ASSET_CACHE: OnceLock<HashMap<&'static str, String>> = OnceLock::new();

macro_rules! embed_asset {
    ($name:expr, $mime:expr, $path:expr) => {
        (
            $name,
            $mime,
            include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/", $path)) as &[u8],
        )
    };
}

const ASSETS: &[(&str, &str, &[u8])] = &[embed_asset!(
    "avatar",
    "image/svg+xml",
    "assets/images/avatar.svg"
)];

const MAIN_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styles/main.css"
));

pub struct ResourceLoader;

impl ResourceLoader {
    fn get_all_assets() -> HashMap<&'static str, String> {
        ASSETS
            .iter()
            .map(|&(name, mime, bytes)| {
                let data = general_purpose::STANDARD.encode(bytes);
                (name, format!("data:{mime};base64,{data}"))
            })
            .collect()
    }

    /// Returns the asset as a `data:` URI, or an empty PNG URI if unknown.
    pub fn get_asset(name: &str) -> String {
        ASSET_CACHE
            .get_or_init(Self::get_all_assets)
            .get(name)
            .cloned()
            .unwrap_or_else(|| "data:image/png;base64,".into())
    }

    /// Main stylesheet plus the media query that swaps compact controls for
    /// the burger below `breakpoint` pixels.
    pub fn get_css(breakpoint: u32) -> String {
        let narrow = breakpoint.saturating_sub(1);
        format!(
            "{MAIN_CSS}
@media (max-width: {narrow}px) {{
    .nav-links {{ display: none; }}
    .burger {{ display: flex; }}
}}
@media (min-width: {breakpoint}px) {{
    .drawer, .drawer-overlay {{ display: none; }}
}}
"
        )
    }
}
