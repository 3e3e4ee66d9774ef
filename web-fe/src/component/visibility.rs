use yew::prelude::*;

const EYE_PATHS: &[&str] = &[
    "M15 12a3 3 0 11-6 0 3 3 0 016 0z",
    "M2.458 12C3.732 7.943 7.523 5 12 5c4.478 0 8.268 2.943 9.542 7-1.274 4.057-5.064 7-9.542 7-4.477 0-8.268-2.943-9.542-7z",
];

const EYE_SLASH_PATHS: &[&str] = &[
    "M13.875 18.825A10.05 10.05 0 0112 19c-4.478 0-8.268-2.943-9.543-7a9.97 9.97 0 011.563-3.029m5.858.908a3 3 0 114.243 4.243M9.878 9.878l4.242 4.242M9.88 9.88l-3.29-3.29m7.532 7.532l3.29 3.29M3 3l3.59 3.59m0 0A9.953 9.953 0 0112 5c4.478 0 8.268 2.943 9.543 7a10.025 10.025 0 01-4.132 5.411m0 0L21 21",
];

/// Display mode of the credential input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KeyVisibility {
    #[default]
    Masked,
    Plain,
}

impl KeyVisibility {
    pub fn toggle(self) -> Self {
        match self {
            KeyVisibility::Masked => KeyVisibility::Plain,
            KeyVisibility::Plain => KeyVisibility::Masked,
        }
    }

    pub fn input_type(self) -> &'static str {
        match self {
            KeyVisibility::Masked => "password",
            KeyVisibility::Plain => "text",
        }
    }

    /// Plain text shows the slashed eye, masked shows the open eye.
    pub fn icon_paths(self) -> &'static [&'static str] {
        match self {
            KeyVisibility::Masked => EYE_PATHS,
            KeyVisibility::Plain => EYE_SLASH_PATHS,
        }
    }
}

#[derive(PartialEq, Properties)]
pub struct ToggleKeyButtonProps {
    pub visibility: KeyVisibility,
    pub onclick: Callback<MouseEvent>,
}

#[function_component]
pub fn ToggleKeyButton(props: &ToggleKeyButtonProps) -> Html {
    let label = match props.visibility {
        KeyVisibility::Masked => "Hiện khóa",
        KeyVisibility::Plain => "Ẩn khóa",
    };

    html! {
        <button type="button" id="toggleKey" class="toggle-key" aria-label={label}
            onclick={props.onclick.clone()}>
            <svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24"
                stroke="currentColor" stroke-width="2" width="20" height="20">
                {props.visibility.icon_paths().iter().map(|d| html! {
                    <path stroke-linecap="round" stroke-linejoin="round" d={*d} />
                }).collect::<Html>()}
            </svg>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_masked() {
        let visibility = KeyVisibility::default();
        assert_eq!(visibility.input_type(), "password");
        assert_eq!(visibility.icon_paths(), EYE_PATHS);
    }

    #[test]
    fn single_toggle_reveals() {
        let visibility = KeyVisibility::default().toggle();
        assert_eq!(visibility.input_type(), "text");
        assert_eq!(visibility.icon_paths(), EYE_SLASH_PATHS);
    }

    #[test]
    fn double_toggle_restores() {
        let original = KeyVisibility::default();
        let restored = original.toggle().toggle();
        assert_eq!(restored, original);
        assert_eq!(restored.input_type(), original.input_type());
        assert_eq!(restored.icon_paths(), original.icon_paths());
    }
}
