use crate::frontend::assets::ResourceLoader;
use dioxus::prelude::*;

/// Round user picture. Falls back to the bundled placeholder.
#[component]
pub fn Avatar(
    #[props(default = "sm")] size: &'static str,
    #[props(default)] src: Option<String>,
) -> Element {
    let src = src.unwrap_or_else(|| ResourceLoader::get_asset("avatar"));

    rsx! {
        img { class: "avatar avatar-{size}", src: "{src}", alt: "User avatar" }
    }
}
