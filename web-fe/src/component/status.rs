use anyhow::{anyhow, Result};
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

use crate::config::AuthConfig;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(extends = Element)]
    #[derive(Clone, Debug)]
    type AnimatableElement;

    /// `Element.animate(keyframes, duration)`
    #[wasm_bindgen(method, catch)]
    fn animate(
        this: &AnimatableElement,
        keyframes: &js_sys::Array,
        duration_ms: f64,
    ) -> Result<JsValue, JsValue>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

impl StatusKind {
    pub fn class_name(self) -> &'static str {
        match self {
            StatusKind::Success => "success",
            StatusKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub kind: StatusKind,
}

/// Latest status line plus how many error shakes it has asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBoard {
    current: Option<Status>,
    shakes: u32,
}

impl StatusBoard {
    /// Replaces the current status. Returns `true` when the card should shake.
    pub fn show(&mut self, message: impl Into<String>, kind: StatusKind) -> bool {
        self.current = Some(Status {
            message: message.into(),
            kind,
        });
        if kind == StatusKind::Error {
            self.shakes += 1;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Status> {
        self.current.as_ref()
    }

    pub fn shakes(&self) -> u32 {
        self.shakes
    }
}

fn translate_x(px: i32) -> String {
    if px == 0 {
        "translateX(0)".to_string()
    } else {
        format!("translateX({px}px)")
    }
}

/// `0 -> -offset -> +offset -> 0`
pub fn shake_keyframes(offset_px: i32) -> [String; 4] {
    [
        translate_x(0),
        translate_x(-offset_px),
        translate_x(offset_px),
        translate_x(0),
    ]
}

/// Starts the shake on `card` and returns immediately.
pub fn shake(card: &Element, config: &AuthConfig) -> Result<()> {
    let keyframes = js_sys::Array::new();
    for transform in shake_keyframes(config.shake_offset_px) {
        let frame = js_sys::Object::new();
        js_sys::Reflect::set(
            &frame,
            &JsValue::from_str("transform"),
            &JsValue::from_str(&transform),
        )
        .map_err(|e| anyhow!("failed to build keyframe: {e:?}"))?;
        keyframes.push(&frame);
    }
    card.unchecked_ref::<AnimatableElement>()
        .animate(&keyframes, config.shake_duration_ms)
        .map_err(|e| anyhow!("failed to start animation: {e:?}"))?;
    Ok(())
}

#[derive(PartialEq, Properties)]
pub struct StatusMessageProps {
    pub status: Option<Status>,
}

#[function_component]
pub fn StatusMessage(props: &StatusMessageProps) -> Html {
    let (message, kind) = match &props.status {
        Some(status) => (status.message.clone(), Some(status.kind.class_name())),
        None => (String::new(), None),
    };

    html! {
        <div id="statusMessage" class={classes!("status-message", kind)} role="status">
            {message}
        </div>
    }
}
