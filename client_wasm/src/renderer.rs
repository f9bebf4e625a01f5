//! Canvas 2D drawing. Reads the session, produces pixels, changes
//! nothing.

use game_core::{Body, Side};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::assets::Sprites;
use crate::session::Session;

const LEFT_GLOW: &str = "#ff5722";
const RIGHT_GLOW: &str = "#00bcd4";
const LEFT_LABEL: &str = "JACKAL";
const RIGHT_LABEL: &str = "CHALLENGER";
const HUD_FONT: &str = "16px Arial";

// Health bars draw 2 px per remaining hit point.
const BAR_SCALE: f64 = 2.0;
const LEFT_BAR_X: f64 = 20.0;
const RIGHT_BAR_X: f64 = 560.0;

pub struct Renderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Renderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Draw one frame: background, fighters, bullets, effects, HUD.
    pub fn draw(&self, session: &Session, sprites: &Sprites) -> Result<(), JsValue> {
        let width = f64::from(self.canvas.width());
        let height = f64::from(self.canvas.height());

        self.draw_background(width, height)?;
        self.draw_fighters(session, sprites)?;
        self.draw_bullets(session, sprites)?;
        self.draw_trails(session)?;
        self.draw_explosions(session)?;
        self.draw_hud(session)?;
        Ok(())
    }

    fn draw_background(&self, width: f64, height: f64) -> Result<(), JsValue> {
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, width, height);
        gradient.add_color_stop(0.0, "#0a0a0a")?;
        gradient.add_color_stop(1.0, "#222")?;
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn draw_fighters(&self, session: &Session, sprites: &Sprites) -> Result<(), JsValue> {
        self.ctx.set_shadow_blur(20.0);
        if let Some((body, _)) = session.fighter(Side::Left) {
            self.ctx.set_shadow_color(LEFT_GLOW);
            self.draw_sprite(&sprites.left_fighter, &body)?;
        }
        if let Some((body, _)) = session.fighter(Side::Right) {
            self.ctx.set_shadow_color(RIGHT_GLOW);
            self.draw_sprite(&sprites.right_fighter, &body)?;
        }
        self.ctx.set_shadow_blur(0.0);
        Ok(())
    }

    fn draw_bullets(&self, session: &Session, sprites: &Sprites) -> Result<(), JsValue> {
        for (side, body) in session.bullets() {
            let sprite = match side {
                Side::Left => &sprites.left_bullet,
                Side::Right => &sprites.right_bullet,
            };
            self.draw_sprite(sprite, &body)?;
        }
        Ok(())
    }

    fn draw_sprite(&self, image: &HtmlImageElement, body: &Body) -> Result<(), JsValue> {
        self.ctx.draw_image_with_html_image_element_and_dw_and_dh(
            image,
            f64::from(body.pos.x),
            f64::from(body.pos.y),
            f64::from(body.size.x),
            f64::from(body.size.y),
        )
    }

    fn draw_trails(&self, session: &Session) -> Result<(), JsValue> {
        for trail in &session.effects().trails {
            self.ctx.begin_path();
            self.ctx.arc(
                f64::from(trail.pos.x),
                f64::from(trail.pos.y),
                f64::from(trail.radius),
                0.0,
                std::f64::consts::TAU,
            )?;
            self.ctx
                .set_fill_style_str(&format!("rgba(255,255,0,{})", trail.alpha));
            self.ctx.fill();
            self.ctx.close_path();
        }
        Ok(())
    }

    fn draw_explosions(&self, session: &Session) -> Result<(), JsValue> {
        for explosion in &session.effects().explosions {
            self.ctx.begin_path();
            self.ctx.arc(
                f64::from(explosion.pos.x),
                f64::from(explosion.pos.y),
                f64::from(explosion.radius),
                0.0,
                std::f64::consts::TAU,
            )?;
            self.ctx
                .set_fill_style_str(&format!("rgba(255,165,0,{})", explosion.alpha()));
            self.ctx.fill();
            self.ctx.close_path();
        }
        Ok(())
    }

    fn draw_hud(&self, session: &Session) -> Result<(), JsValue> {
        if let Some((_, hp)) = session.fighter(Side::Left) {
            let bar_width = f64::from(hp) * BAR_SCALE;
            let gradient =
                self.ctx
                    .create_linear_gradient(LEFT_BAR_X, 20.0, LEFT_BAR_X + bar_width, 20.0);
            gradient.add_color_stop(0.0, "lime")?;
            gradient.add_color_stop(1.0, "green")?;
            self.ctx.set_fill_style_canvas_gradient(&gradient);
            self.ctx.fill_rect(LEFT_BAR_X, 20.0, bar_width, 10.0);
        }
        if let Some((_, hp)) = session.fighter(Side::Right) {
            let bar_width = f64::from(hp) * BAR_SCALE;
            let gradient =
                self.ctx
                    .create_linear_gradient(RIGHT_BAR_X, 20.0, RIGHT_BAR_X + bar_width, 20.0);
            gradient.add_color_stop(0.0, "red")?;
            gradient.add_color_stop(1.0, "darkred")?;
            self.ctx.set_fill_style_canvas_gradient(&gradient);
            self.ctx.fill_rect(RIGHT_BAR_X, 20.0, bar_width, 10.0);
        }

        self.ctx.set_fill_style_str("white");
        self.ctx.set_font(HUD_FONT);
        self.ctx.fill_text(LEFT_LABEL, LEFT_BAR_X, 15.0)?;
        self.ctx.fill_text(RIGHT_LABEL, RIGHT_BAR_X, 15.0)?;
        Ok(())
    }
}
