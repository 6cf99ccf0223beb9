use wasm_bindgen::JsCast;
use web_sys as web;

// HAVE_CURRENT_DATA; the first frame is decodable from here on.
const READY_STATE_CURRENT_DATA: u16 = 2;

/// The hidden looping video element feeding the curved screen.
///
/// The element never enters the DOM tree; the renderer pulls frames straight
/// from it into the screen texture each animation frame.
pub struct VideoScreen {
    element: web::HtmlVideoElement,
}

impl VideoScreen {
    /// Create the element, start looping playback muted (autoplay policy
    /// forbids starting with sound).
    pub fn new(document: &web::Document, url: &str) -> anyhow::Result<Self> {
        let element: web::HtmlVideoElement = document
            .create_element("video")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        element.set_src(url);
        element.set_cross_origin(Some("anonymous"));
        element.set_loop(true);
        element.set_muted(true);
        _ = element.set_attribute("playsinline", "");
        match element.play() {
            Ok(promise) => {
                // Swallow rejection; playback retries on the first user gesture.
                let _ = promise.catch(&js_sys::Function::new_no_args(""));
            }
            Err(e) => log::warn!("video play failed: {:?}", e),
        }
        Ok(Self { element })
    }

    /// Flip the muted flag, returning the new state.
    pub fn toggle_muted(&self) -> bool {
        let muted = !self.element.muted();
        self.element.set_muted(muted);
        // A mute toggle is a user gesture; retry playback if autoplay was blocked.
        if let Ok(promise) = self.element.play() {
            let _ = promise.catch(&js_sys::Function::new_no_args(""));
        }
        muted
    }

    #[inline]
    pub fn muted(&self) -> bool {
        self.element.muted()
    }

    /// True once at least one frame is decodable.
    #[inline]
    pub fn has_frame(&self) -> bool {
        self.element.ready_state() >= READY_STATE_CURRENT_DATA
    }

    /// Intrinsic frame size, once known.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        let (w, h) = (self.element.video_width(), self.element.video_height());
        (w > 0 && h > 0).then_some((w, h))
    }

    #[inline]
    pub fn element(&self) -> &web::HtmlVideoElement {
        &self.element
    }
}
