//! Viewport tracking behind an injectable source.
//!
//! The browser window is the only real source, but the trait keeps the
//! subscribe/unsubscribe contract testable without a display surface.

use std::rc::Rc;

use gloo::events::EventListener;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    pub width: i32,
    pub height: i32,
}

/// Carousel tiles shown at once: 3 on wide screens, 1 otherwise.
/// Exactly 1024 counts as narrow.
pub fn tiles_for_width(width: i32) -> u32 {
    if width > 1024 {
        3
    } else {
        1
    }
}

/// Unsubscribes on drop.
pub struct Subscription {
    unlisten: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(unlisten: impl FnOnce() + 'static) -> Self {
        Self {
            unlisten: Some(Box::new(unlisten)),
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unlisten) = self.unlisten.take() {
            unlisten();
        }
    }
}

pub trait ViewportSource {
    fn current(&self) -> ViewportSize;
    fn subscribe(&self, on_change: Rc<dyn Fn(ViewportSize)>) -> Subscription;
}

fn window() -> web_sys::Window {
    web_sys::window().expect("no window")
}

fn window_size() -> ViewportSize {
    let w = window();
    ViewportSize {
        width: w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as i32,
        height: w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as i32,
    }
}

/// The real source: `window.innerWidth/innerHeight` plus a scoped
/// `resize` listener.
pub struct WindowViewport;

impl ViewportSource for WindowViewport {
    fn current(&self) -> ViewportSize {
        window_size()
    }

    fn subscribe(&self, on_change: Rc<dyn Fn(ViewportSize)>) -> Subscription {
        let listener = EventListener::new(&window(), "resize", move |_| on_change(window_size()));
        Subscription::new(move || drop(listener))
    }
}

/// Current viewport size, kept fresh by a resize subscription that is
/// released when the component unmounts.
#[hook]
pub fn use_viewport(source: Rc<dyn ViewportSource>) -> ViewportSize {
    let size = use_state(|| source.current());
    {
        let size = size.clone();
        use_effect_with((), move |_| {
            let sub = source.subscribe(Rc::new(move |next| size.set(next)));
            move || drop(sub)
        });
    }
    *size
}
