//! Built-in theme catalog.
//!
//! Names follow the daisyUI theme set so the `data-theme` attribute of the
//! rendered pages can be switched without further mapping.

/// All themes offered by the settings UI.
pub const THEMES: &[&str] = &[
    "light",
    "dark",
    "cupcake",
    "bumblebee",
    "emerald",
    "corporate",
    "synthwave",
    "retro",
    "cyberpunk",
    "valentine",
    "halloween",
    "garden",
    "forest",
    "aqua",
    "lofi",
    "pastel",
    "fantasy",
    "wireframe",
    "black",
    "luxury",
    "dracula",
    "cmyk",
    "autumn",
    "business",
    "acid",
    "lemonade",
    "night",
    "coffee",
    "winter",
    "dim",
    "nord",
    "sunset",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_THEME;

    #[test]
    fn test_catalog() {
        // the fallback theme is always selectable
        assert_eq!(THEMES.first(), Some(&DEFAULT_THEME));
        assert!(THEMES.contains(&"dracula"));
        let mut sorted = THEMES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), THEMES.len());
    }
}
