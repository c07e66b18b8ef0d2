//! Query-string boot configuration shared by the site entrypoint and the
//! gallery provider.
//!
//! Two audiences read the page URL: visitors deep-linking a search via `?q=`,
//! and the deterministic UI validation workflow requesting a canonical scene
//! via `?e2e-scene=`. Both funnel through [`BootConfig`] so the provider has
//! one seeding path.

use serde::{Deserialize, Serialize};

/// Query parameter carrying a deep-linked search term.
pub const QUERY_PARAM: &str = "q";

/// Canonical gallery scenes supported by the deterministic UI validation
/// workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GalleryScene {
    /// Full catalog with an empty search box.
    GalleryDefault,
    /// Search pre-seeded with a term matching a stable subset.
    GalleryFiltered,
    /// Search pre-seeded with a term matching nothing.
    GalleryEmpty,
}

impl GalleryScene {
    /// Stable query-string scene id.
    pub const fn id(self) -> &'static str {
        match self {
            Self::GalleryDefault => "gallery-default",
            Self::GalleryFiltered => "gallery-filtered",
            Self::GalleryEmpty => "gallery-empty",
        }
    }

    /// Search term the scene seeds the gallery with.
    pub const fn seed_query(self) -> &'static str {
        match self {
            Self::GalleryDefault => "",
            Self::GalleryFiltered => "ar",
            Self::GalleryEmpty => "zzzz-no-match",
        }
    }

    #[cfg(any(test, target_arch = "wasm32"))]
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "gallery-default" => Some(Self::GalleryDefault),
            "gallery-filtered" => Some(Self::GalleryFiltered),
            "gallery-empty" => Some(Self::GalleryEmpty),
            _ => None,
        }
    }
}

/// Parsed boot configuration for one page load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootConfig {
    /// Deep-linked search term from `q`, percent-decoded.
    pub initial_query: Option<String>,
    /// Requested canonical scene.
    pub scene: Option<GalleryScene>,
    /// Optional reduced-motion override for scroll behavior.
    pub reduced_motion: Option<bool>,
}

impl BootConfig {
    /// Search term the gallery should boot with.
    ///
    /// An explicit `q` always wins; otherwise the scene's seed term applies.
    /// Absent both, the gallery starts unfiltered.
    pub fn seed_query(&self) -> String {
        if let Some(query) = &self.initial_query {
            return query.clone();
        }
        self.scene
            .map(|scene| scene.seed_query().to_string())
            .unwrap_or_default()
    }
}

#[cfg(any(test, target_arch = "wasm32"))]
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg(any(test, target_arch = "wasm32"))]
fn hex_value(byte: u8) -> Option<u8> {
    (byte as char).to_digit(16).map(|value| value as u8)
}

/// Decodes a `application/x-www-form-urlencoded` query value.
///
/// Malformed escapes pass through literally; invalid UTF-8 falls back to the
/// raw input.
#[cfg(any(test, target_arch = "wasm32"))]
fn percent_decode(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        match bytes[index] {
            b'+' => {
                decoded.push(b' ');
                index += 1;
            }
            b'%' if index + 2 < bytes.len() => {
                match (hex_value(bytes[index + 1]), hex_value(bytes[index + 2])) {
                    (Some(high), Some(low)) => {
                        decoded.push(high * 16 + low);
                        index += 3;
                    }
                    _ => {
                        decoded.push(b'%');
                        index += 1;
                    }
                }
            }
            byte => {
                decoded.push(byte);
                index += 1;
            }
        }
    }
    String::from_utf8(decoded).unwrap_or_else(|_| raw.to_string())
}

/// Parses boot configuration from a query string.
///
/// Returns `None` when no recognized parameter is present, so plain visits
/// skip the seeding path entirely.
#[cfg(any(test, target_arch = "wasm32"))]
pub fn parse_boot_from_query(query: &str) -> Option<BootConfig> {
    let mut initial_query = None;
    let mut scene = None;
    let mut reduced_motion = None;

    for pair in query
        .trim_start_matches('?')
        .split('&')
        .filter(|part| !part.is_empty())
    {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        match key {
            QUERY_PARAM => {
                initial_query = Some(percent_decode(value));
            }
            "e2e-scene" => {
                scene = GalleryScene::parse(value);
            }
            "e2e-reduced-motion" => {
                reduced_motion = parse_bool(value);
            }
            _ => {}
        }
    }

    if initial_query.is_none() && scene.is_none() && reduced_motion.is_none() {
        return None;
    }
    Some(BootConfig {
        initial_query,
        scene,
        reduced_motion,
    })
}

/// Returns the active boot configuration when the current URL requests one.
pub fn current_boot_config() -> Option<BootConfig> {
    #[cfg(target_arch = "wasm32")]
    {
        let window = web_sys::window()?;
        let location = window.location();
        let search = location.search().ok()?;
        parse_boot_from_query(&search)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parses_deep_linked_query_with_percent_escapes() {
        let parsed = parse_boot_from_query("?q=left%20arrow").expect("config");
        assert_eq!(parsed.initial_query.as_deref(), Some("left arrow"));
        assert_eq!(parsed.scene, None);
        assert_eq!(parsed.seed_query(), "left arrow");
    }

    #[test]
    fn plus_signs_decode_to_spaces() {
        let parsed = parse_boot_from_query("q=shopping+cart").expect("config");
        assert_eq!(parsed.initial_query.as_deref(), Some("shopping cart"));
    }

    #[test]
    fn malformed_escapes_pass_through_literally() {
        let parsed = parse_boot_from_query("?q=50%25+off%2").expect("config");
        assert_eq!(parsed.initial_query.as_deref(), Some("50% off%2"));
    }

    #[test]
    fn parses_scene_and_reduced_motion_overrides() {
        let parsed = parse_boot_from_query("?e2e-scene=gallery-empty&e2e-reduced-motion=true")
            .expect("config");
        assert_eq!(parsed.scene, Some(GalleryScene::GalleryEmpty));
        assert_eq!(parsed.reduced_motion, Some(true));
        assert_eq!(parsed.seed_query(), "zzzz-no-match");
    }

    #[test]
    fn explicit_query_outranks_the_scene_seed() {
        let parsed =
            parse_boot_from_query("?q=heart&e2e-scene=gallery-empty").expect("config");
        assert_eq!(parsed.seed_query(), "heart");
    }

    #[test]
    fn ignores_invalid_boolean_overrides() {
        let parsed =
            parse_boot_from_query("?e2e-scene=gallery-default&e2e-reduced-motion=maybe")
                .expect("config");
        assert_eq!(parsed.scene, Some(GalleryScene::GalleryDefault));
        assert_eq!(parsed.reduced_motion, None);
    }

    #[test]
    fn unrecognized_parameters_yield_no_config() {
        assert_eq!(parse_boot_from_query(""), None);
        assert_eq!(parse_boot_from_query("?utm_source=share"), None);
        assert_eq!(parse_boot_from_query("?e2e-scene=unknown-scene"), None);
    }

    #[test]
    fn scene_ids_round_trip_through_parse() {
        for scene in [
            GalleryScene::GalleryDefault,
            GalleryScene::GalleryFiltered,
            GalleryScene::GalleryEmpty,
        ] {
            assert_eq!(GalleryScene::parse(scene.id()), Some(scene));
        }
    }

    #[test]
    fn scene_ids_match_their_serde_rendering() {
        let raw = serde_json::to_string(&GalleryScene::GalleryFiltered).expect("serialize");
        assert_eq!(raw, "\"gallery-filtered\"");
    }
}
