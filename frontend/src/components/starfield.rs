use std::f64::consts::TAU;

use log::warn;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::error::DomError;
use crate::utils::dom;
use crate::utils::frame::FrameLoop;

pub const STAR_COUNT: usize = 400;
pub const STAR_SPEED: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A star projected onto the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub alpha: f64,
}

/// Stars flying toward the camera. Depth runs from the focal length (far)
/// down to 0 (at the camera); a star reaching 0 respawns at the far plane.
pub struct Starfield {
    stars: Vec<Star>,
    width: f64,
    height: f64,
    focal_length: f64,
    rng: SmallRng,
}

impl Starfield {
    pub fn new(width: f64, height: f64, rng: SmallRng) -> Self {
        let mut field = Self {
            stars: Vec::with_capacity(STAR_COUNT),
            width,
            height,
            focal_length: width.max(1.0),
            rng,
        };
        for _ in 0..STAR_COUNT {
            let z = field.rng.gen_range(0.0..field.focal_length);
            let star = field.spawn(z);
            field.stars.push(star);
        }
        field
    }

    pub fn from_entropy(width: f64, height: f64) -> Self {
        Self::new(width, height, SmallRng::from_entropy())
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn focal_length(&self) -> f64 {
        self.focal_length
    }

    fn spawn(&mut self, z: f64) -> Star {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        Star {
            x: self.rng.gen_range(-half_w..=half_w),
            y: self.rng.gen_range(-half_h..=half_h),
            z,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.focal_length = width.max(1.0);
        let focal_length = self.focal_length;
        for star in &mut self.stars {
            star.z = star.z.min(focal_length);
        }
    }

    pub fn step(&mut self) {
        let focal_length = self.focal_length;
        for i in 0..self.stars.len() {
            let z = self.stars[i].z - STAR_SPEED;
            let next = if z <= 0.0 {
                self.spawn(focal_length)
            } else {
                Star { z, ..self.stars[i] }
            };
            self.stars[i] = next;
        }
    }

    pub fn sprite(&self, star: &Star) -> Sprite {
        let scale = self.focal_length / star.z;
        let nearness = 1.0 - star.z / self.focal_length;
        Sprite {
            x: star.x * scale + self.width / 2.0,
            y: star.y * scale + self.height / 2.0,
            radius: (1.5 * nearness).max(0.1),
            alpha: 0.3 + 0.7 * nearness,
        }
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, DomError> {
    canvas
        .get_context("2d")?
        .ok_or(DomError::Missing("2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| DomError::Missing("2d context"))
}

fn draw(canvas: &HtmlCanvasElement, field: &mut Starfield) -> Result<(), DomError> {
    let window = dom::window()?;
    let width = dom::viewport_width(&window)?;
    let height = dom::viewport_height(&window)?;
    if canvas.width() != width as u32 || canvas.height() != height as u32 {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        field.resize(width, height);
    }

    let context = context_2d(canvas)?;
    context.clear_rect(0.0, 0.0, width, height);
    field.step();
    for star in field.stars() {
        let sprite = field.sprite(star);
        context.begin_path();
        context.set_fill_style(&JsValue::from_str(&format!(
            "rgba(180, 200, 255, {:.3})",
            sprite.alpha
        )));
        context.arc(sprite.x, sprite.y, sprite.radius, 0.0, TAU)?;
        context.fill();
    }
    Ok(())
}

/// Full-bleed canvas behind the timeline cards.
#[function_component(StarfieldCanvas)]
pub fn starfield_canvas() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let frames = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or(DomError::Missing("starfield canvas"))
                    .and_then(|canvas| {
                        let mut field = Starfield::from_entropy(canvas.width() as f64, canvas.height() as f64);
                        FrameLoop::start(move |_timestamp| {
                            if let Err(err) = draw(&canvas, &mut field) {
                                warn!("Starfield frame failed: {}", err);
                            }
                        })
                    });
                let frames = match frames {
                    Ok(frames) => Some(frames),
                    Err(err) => {
                        warn!("Starfield disabled: {}", err);
                        None
                    }
                };
                move || drop(frames)
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class="starfield"></canvas>
    }
}
