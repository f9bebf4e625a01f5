//! Sprite sources and the opponent-identity → bullet-style mapping.

/// The left fighter's look is fixed.
pub const LEFT_FIGHTER_SPRITE: &str = "assets/jackal.png";
pub const LEFT_BULLET_SPRITE: &str = "assets/berry.png";

/// Fallback for opponents without a dedicated bullet style.
pub const DEFAULT_BULLET_SPRITE: &str = "assets/star.png";

/// Pick the bullet sprite matching a chosen opponent identity. The
/// identity is the sprite URL from the selection screen, matched by
/// substring so relative and absolute URLs both resolve; anything
/// unrecognized falls back to the default style.
pub fn bullet_sprite_for(identity: &str) -> &'static str {
    if identity.contains("monk.png") {
        return "assets/lotus.png";
    }
    if identity.contains("automaton.png") {
        return "assets/gear.png";
    }
    if identity.contains("comet.png") {
        return DEFAULT_BULLET_SPRITE;
    }
    DEFAULT_BULLET_SPRITE
}

#[cfg(target_arch = "wasm32")]
pub use loader::*;

#[cfg(target_arch = "wasm32")]
mod loader {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::HtmlImageElement;

    /// The four images a session draws with, fully decoded.
    pub struct Sprites {
        pub left_fighter: HtmlImageElement,
        pub left_bullet: HtmlImageElement,
        pub right_fighter: HtmlImageElement,
        pub right_bullet: HtmlImageElement,
    }

    impl Sprites {
        /// Load everything the session needs; resolves only once the
        /// chosen opponent sprite has decoded, so the first frame never
        /// draws a half-loaded image.
        pub async fn load(opponent_identity: &str) -> Result<Self, JsValue> {
            Ok(Self {
                left_fighter: load_image(LEFT_FIGHTER_SPRITE).await?,
                left_bullet: load_image(LEFT_BULLET_SPRITE).await?,
                right_fighter: load_image(opponent_identity).await?,
                right_bullet: load_image(bullet_sprite_for(opponent_identity)).await?,
            })
        }
    }

    pub async fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
        let image = HtmlImageElement::new()?;
        image.set_src(src);
        JsFuture::from(image.decode()).await?;
        Ok(image)
    }
}
