//! Scene model for visual scenarios.

use serde::{Deserialize, Serialize};

/// One decomposed unit of a video script.
///
/// Lifecycle: created with text fields only, then `image_loading` is set while
/// its image request is pending, and the terminal state is exactly one of
/// `image_url` (success) or `image_error` (failure). A failed scene is never
/// retried automatically; only a full pipeline restart rebuilds the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// The sentence of the script this scene covers.
    pub sentence: String,
    /// Detailed visual description of the scene.
    pub scene_description: String,
    /// English text-to-image prompt for the scene.
    pub image_prompt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub image_loading: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_error: Option<String>,
}

impl Scene {
    /// Mark the scene as waiting for its image.
    pub fn mark_loading(&mut self) {
        self.image_loading = true;
        self.image_url = None;
        self.image_error = None;
    }

    /// Record a successfully generated image reference.
    pub fn resolve(&mut self, image_url: String) {
        self.image_loading = false;
        self.image_url = Some(image_url);
        self.image_error = None;
    }

    /// Record a terminal failure for this scene's image.
    pub fn fail(&mut self, message: String) {
        self.image_loading = false;
        self.image_url = None;
        self.image_error = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> Scene {
        Scene {
            sentence: "تمشي في المدينة".to_string(),
            scene_description: "لقطة واسعة عند الغروب".to_string(),
            image_prompt: "A cinematic shot at twilight".to_string(),
            image_url: None,
            image_loading: false,
            image_error: None,
        }
    }

    #[test]
    fn test_terminal_states_are_exclusive() {
        let mut s = scene();
        s.mark_loading();
        assert!(s.image_loading);

        s.resolve("data:image/jpeg;base64,abc".to_string());
        assert!(!s.image_loading);
        assert!(s.image_url.is_some());
        assert!(s.image_error.is_none());

        let mut f = scene();
        f.mark_loading();
        f.fail("فشل تحميل الصورة.".to_string());
        assert!(!f.image_loading);
        assert!(f.image_url.is_none());
        assert!(f.image_error.is_some());
    }

    #[test]
    fn test_pending_scene_serializes_text_fields_only() {
        let json = serde_json::to_string(&scene()).unwrap();
        assert!(json.contains("\"sceneDescription\""));
        assert!(json.contains("\"imagePrompt\""));
        assert!(!json.contains("imageUrl"));
        assert!(!json.contains("imageLoading"));
        assert!(!json.contains("imageError"));
    }
}
