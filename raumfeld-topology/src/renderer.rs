//! Renderer type

use serde::{Deserialize, Serialize};

/// A playback endpoint device within a room.
///
/// The currently-playing item and the live transport/volume telemetry are
/// carried opaquely; they belong to the provider's media domain and are not
/// mirrored into the object tree by this core.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Renderer {
    /// Globally unique renderer identifier
    #[serde(default)]
    pub udn: Option<String>,

    /// Display name of the renderer
    #[serde(default)]
    pub name: Option<String>,

    /// Currently-playing track/station metadata, opaque
    #[serde(default)]
    pub media_item: Option<serde_json::Value>,

    /// Live transport/volume telemetry, opaque
    #[serde(default)]
    pub renderer_state: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_renderer_with_opaque_payloads() {
        let renderer: Renderer = serde_json::from_str(
            r#"{
                "udn": "uuid:r-1",
                "name": "Speaker M",
                "mediaItem": { "title": "Some Track", "artist": "Some Artist" },
                "rendererState": { "volume": 35, "muted": false }
            }"#,
        )
        .unwrap();

        assert_eq!(renderer.udn.as_deref(), Some("uuid:r-1"));
        assert_eq!(renderer.media_item.unwrap()["title"], "Some Track");
        assert_eq!(renderer.renderer_state.unwrap()["volume"], 35);
    }

    #[test]
    fn test_deserialize_bare_renderer() {
        let renderer: Renderer = serde_json::from_str("{}").unwrap();
        assert!(renderer.udn.is_none());
        assert!(renderer.media_item.is_none());
    }
}
