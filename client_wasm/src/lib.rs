//! Browser client for the duel game.
//!
//! `game_core` does the thinking; this crate owns the canvas, the DOM
//! screens, the sprites, and the animation-frame cadence. JavaScript
//! wires the event listeners and the requestAnimationFrame loop to the
//! exported functions below.

pub mod assets;
pub mod fsm;
pub mod input;
pub mod session;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod renderer;

pub use fsm::{FsmState, GameAction, GameFsm};
pub use session::Session;

#[cfg(target_arch = "wasm32")]
mod app {
    use game_core::Side;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use crate::assets::Sprites;
    use crate::dom;
    use crate::fsm::{GameAction, GameFsm};
    use crate::input;
    use crate::renderer::Renderer;
    use crate::session::Session;

    fn winner_banner(winner: Side) -> &'static str {
        match winner {
            Side::Left => "The jackal takes the duel!",
            Side::Right => "The challenger takes the duel!",
        }
    }

    /// Everything the client owns while the page is alive.
    struct Client {
        fsm: GameFsm,
        renderer: Renderer,
        sprites: Option<Sprites>,
        session: Option<Session>,
    }

    impl Client {
        fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
            let renderer = Renderer::new(canvas)?;
            // Only the start screen is visible until a session begins.
            renderer.canvas().style().set_property("display", "none")?;
            dom::set_display(dom::GAME_OVER_SCREEN, "none")?;
            dom::set_display(dom::START_SCREEN, "flex")?;
            Ok(Self {
                fsm: GameFsm::new(),
                renderer,
                sprites: None,
                session: None,
            })
        }

        fn start(&mut self, sprites: Sprites) -> Result<(), JsValue> {
            if !self.fsm.transition(GameAction::Start) {
                return Err(JsValue::from_str("session already running"));
            }
            self.sprites = Some(sprites);
            self.session = Some(Session::new());
            dom::set_display(dom::START_SCREEN, "none")?;
            self.renderer.canvas().style().set_property("display", "block")?;
            web_sys::console::log_1(&"session started".into());
            Ok(())
        }

        /// One animation frame: simulate, draw, and on a decided session
        /// swap to the end screen. Returns whether to keep scheduling.
        fn frame(&mut self, now_ms: f64) -> Result<bool, JsValue> {
            if !self.fsm.is_playing() {
                return Ok(false);
            }
            let (session, sprites) = match (self.session.as_mut(), self.sprites.as_ref()) {
                (Some(session), Some(sprites)) => (session, sprites),
                _ => return Ok(false),
            };

            let outcome = session.advance(now_ms);
            self.renderer.draw(session, sprites)?;

            if let Some(winner) = outcome {
                self.fsm.transition(GameAction::SessionEnded);
                self.renderer.canvas().style().set_property("display", "none")?;
                dom::set_text(dom::WINNER_TEXT, winner_banner(winner))?;
                dom::set_display(dom::GAME_OVER_SCREEN, "flex")?;
                web_sys::console::log_1(
                    &format!("session over: {winner:?} side wins").into(),
                );
                return Ok(false);
            }
            Ok(true)
        }

        /// Discard the match and everything it owned, back to the start
        /// screen.
        fn reset(&mut self) -> Result<(), JsValue> {
            self.fsm.transition(GameAction::Reset);
            self.session = None;
            self.sprites = None;
            dom::set_display(dom::GAME_OVER_SCREEN, "none")?;
            self.renderer.canvas().style().set_property("display", "none")?;
            dom::set_display(dom::START_SCREEN, "flex")?;
            web_sys::console::log_1(&"session reset".into());
            Ok(())
        }
    }

    // Global client storage for WASM bindings
    static mut CLIENT: Option<Client> = None;

    #[wasm_bindgen]
    pub fn init_client(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let client = Client::new(canvas)?;
        unsafe {
            CLIENT = Some(client);
        }
        Ok(())
    }

    /// Load sprites for the chosen opponent identity and start the
    /// session once they have decoded.
    #[wasm_bindgen]
    pub fn choose_opponent(identity: String) -> js_sys::Promise {
        wasm_bindgen_futures::future_to_promise(async move {
            let sprites = Sprites::load(&identity).await?;
            unsafe {
                if let Some(ref mut client) = CLIENT {
                    client.start(sprites)?;
                    Ok(JsValue::UNDEFINED)
                } else {
                    Err(JsValue::from_str("client not initialized"))
                }
            }
        })
    }

    #[wasm_bindgen]
    pub fn key_down(key: String) {
        unsafe {
            if let Some(ref mut client) = CLIENT {
                if let Some(session) = client.session.as_mut() {
                    session.key_down(&input::normalize_key(&key));
                }
            }
        }
    }

    #[wasm_bindgen]
    pub fn key_up(key: String) {
        unsafe {
            if let Some(ref mut client) = CLIENT {
                if let Some(session) = client.session.as_mut() {
                    session.key_up(&input::normalize_key(&key));
                }
            }
        }
    }

    /// Called from the page's requestAnimationFrame callback with the
    /// frame timestamp; returns whether another frame should be
    /// scheduled.
    #[wasm_bindgen]
    pub fn frame(now_ms: f64) -> Result<bool, JsValue> {
        unsafe {
            if let Some(ref mut client) = CLIENT {
                client.frame(now_ms)
            } else {
                Err(JsValue::from_str("client not initialized"))
            }
        }
    }

    #[wasm_bindgen]
    pub fn reset() -> Result<(), JsValue> {
        unsafe {
            if let Some(ref mut client) = CLIENT {
                client.reset()
            } else {
                Err(JsValue::from_str("client not initialized"))
            }
        }
    }
}
