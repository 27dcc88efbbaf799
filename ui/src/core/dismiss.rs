//! Outside-pointer dismissal for the navigation strip.
//!
//! On the web the strip listens for `pointerdown` at the document level and
//! closes any open panel when the target falls outside the strip's subtree.
//! The listener is held by a guard value whose `Drop` deregisters it, so
//! teardown happens whichever way the component unmounts. WebView targets
//! expose no document handle here; the strip renders a scrim instead and
//! never installs the guard (`DismissGuard::SUPPORTED` is false).

#[cfg(target_arch = "wasm32")]
mod platform {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    /// Document-level `pointerdown` listener reporting pointer-downs that
    /// land outside the element with id `container_id`.
    pub struct DismissGuard {
        document: web_sys::Document,
        handler: Closure<dyn FnMut(web_sys::Event)>,
    }

    impl DismissGuard {
        pub const SUPPORTED: bool = true;

        pub fn install(
            container_id: &'static str,
            mut on_outside: impl FnMut() + 'static,
        ) -> Result<Self, String> {
            let window = web_sys::window().ok_or("window unavailable")?;
            let document = window.document().ok_or("document unavailable")?;

            let doc_for_handler = document.clone();
            let handler =
                Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
                    if !targets_subtree(&doc_for_handler, container_id, &event) {
                        on_outside();
                    }
                });
            document
                .add_event_listener_with_callback("pointerdown", handler.as_ref().unchecked_ref())
                .map_err(|_| "failed to attach pointerdown listener".to_string())?;

            Ok(Self { document, handler })
        }
    }

    impl Drop for DismissGuard {
        fn drop(&mut self) {
            let _ = self.document.remove_event_listener_with_callback(
                "pointerdown",
                self.handler.as_ref().unchecked_ref(),
            );
        }
    }

    /// True when the event targets a node inside the container's subtree.
    /// Pointer-downs on the strip itself (a toggle button, say) must never
    /// count as outside; the entry's own handler decides those.
    fn targets_subtree(
        document: &web_sys::Document,
        container_id: &str,
        event: &web_sys::Event,
    ) -> bool {
        let container = match document.get_element_by_id(container_id) {
            Some(element) => element,
            None => return false,
        };
        event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .map(|node| container.contains(Some(&node)))
            .unwrap_or(false)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod platform {
    /// Stub for targets without a reachable document. The strip's scrim owns
    /// outside dismissal there, so this is never installed.
    pub struct DismissGuard;

    impl DismissGuard {
        pub const SUPPORTED: bool = false;

        pub fn install(
            _container_id: &'static str,
            _on_outside: impl FnMut() + 'static,
        ) -> Result<Self, String> {
            Err("document-level listeners unavailable on this target".to_string())
        }
    }
}

pub use platform::DismissGuard;

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::DismissGuard;

    #[test]
    fn native_targets_report_unsupported() {
        assert!(!DismissGuard::SUPPORTED);
        assert!(DismissGuard::install("navbar", || {}).is_err());
    }
}
