//! Viewport measurement for the host platform.

use dioxus::prelude::*;

use super::config::site;

/// Current layout viewport width in CSS pixels, when the host exposes one.
#[cfg(target_arch = "wasm32")]
pub fn viewport_width() -> Option<u32> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    Some(width.max(0.0).round() as u32)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn viewport_width() -> Option<u32> {
    None
}

/// Reactive viewport width, updated on window resize (web only).
///
/// Native shells keep the configured default width.
pub fn use_viewport_width() -> Signal<u32> {
    let width = use_signal(|| viewport_width().unwrap_or(site().default_viewport_width));

    #[cfg(target_arch = "wasm32")]
    // The hook slot owns the listener until unmount.
    use_hook(move || std::rc::Rc::new(resize::ResizeListener::attach(width)));

    width
}

#[cfg(target_arch = "wasm32")]
mod resize {
    use dioxus::prelude::*;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    /// Window `resize` subscription, removed again on drop.
    pub(super) struct ResizeListener {
        callback: Option<Closure<dyn FnMut()>>,
    }

    impl ResizeListener {
        pub(super) fn attach(mut width: Signal<u32>) -> Self {
            let Some(window) = web_sys::window() else {
                return Self { callback: None };
            };
            let callback = Closure::<dyn FnMut()>::new(move || {
                if let Some(current) = super::viewport_width() {
                    if *width.peek() != current {
                        width.set(current);
                    }
                }
            });
            if let Err(err) = window
                .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())
            {
                tracing::warn!("platform: could not watch resize events: {err:?}");
                return Self { callback: None };
            }
            Self {
                callback: Some(callback),
            }
        }
    }

    impl Drop for ResizeListener {
        fn drop(&mut self) {
            if let (Some(window), Some(callback)) = (web_sys::window(), self.callback.as_ref()) {
                let _ = window.remove_event_listener_with_callback(
                    "resize",
                    callback.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(target_arch = "wasm32"))]
    fn native_hosts_report_no_width() {
        assert_eq!(viewport_width(), None);
    }
}
